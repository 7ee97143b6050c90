use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::AppError;

/// 用户配置 (~/.config/basket/config.toml)
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// 标题栏文字
    pub title: String,
    /// 删除前是否需要确认
    pub confirm_delete: bool,
    /// tracing 过滤指令，`BASKET_LOG` 环境变量优先
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            title: "Shopping List".to_string(),
            confirm_delete: false,
            log_level: "info".to_string(),
        }
    }
}

/// 默认配置文件路径
pub fn default_config_path() -> Result<PathBuf, AppError> {
    let dir = dirs::config_dir().ok_or(AppError::NoConfigDir)?;
    Ok(dir.join("basket").join("config.toml"))
}

/// 从TOML文件加载配置，文件不存在时使用默认值
pub fn load_config(path: &Path) -> Result<Config, AppError> {
    if !path.exists() {
        return Ok(Config::default());
    }

    let content = fs::read_to_string(path)?;
    toml::from_str(&content).map_err(|source| AppError::ConfigParse {
        path: path.to_path_buf(),
        source,
    })
}
