//! 日志初始化
//!
//! 终端被 TUI 占用，日志写入 ~/.local/share/basket/basket.log

use std::env::{self, VarError};
use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::error::AppError;

/// 覆盖配置中日志级别的环境变量
pub const LOG_ENV: &str = "BASKET_LOG";

/// 获取日志文件路径，并确保目录存在
pub fn log_file_path() -> Result<PathBuf, AppError> {
    let dir = dirs::data_local_dir()
        .ok_or(AppError::NoDataDir)?
        .join("basket");

    fs::create_dir_all(&dir)?;

    Ok(dir.join("basket.log"))
}

/// 构造过滤器：环境变量优先，其次是配置
pub fn build_filter(config_level: &str) -> Result<EnvFilter, AppError> {
    match env::var(LOG_ENV) {
        Ok(value) => filter_from(Some(&value), config_level),
        Err(VarError::NotPresent) => filter_from(None, config_level),
        Err(err @ VarError::NotUnicode(_)) => Err(AppError::Logging(format!("{LOG_ENV}: {err}"))),
    }
}

/// 给定环境变量的值时必须合法，不回退到配置
fn filter_from(env_value: Option<&str>, config_level: &str) -> Result<EnvFilter, AppError> {
    match env_value {
        Some(value) => EnvFilter::try_new(value)
            .map_err(|e| AppError::Logging(format!("{LOG_ENV}={value:?}: {e}"))),
        None => EnvFilter::try_new(config_level)
            .map_err(|e| AppError::Logging(format!("log_level={config_level:?}: {e}"))),
    }
}

/// 安装全局 subscriber
pub fn init(config_level: &str) -> Result<PathBuf, AppError> {
    let path = log_file_path()?;
    let file = OpenOptions::new().create(true).append(true).open(&path)?;

    tracing_subscriber::fmt()
        .with_env_filter(build_filter(config_level)?)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|e| AppError::Logging(e.to_string()))?;

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_level_is_error() {
        assert!(matches!(filter_from(None, "basket=loud"), Err(AppError::Logging(_))));
        assert!(filter_from(None, "debug").is_ok());
    }

    #[test]
    fn test_invalid_env_value_is_error() {
        // 非法的 BASKET_LOG 不能悄悄回退到配置级别
        let err = filter_from(Some("basket=loud"), "info").unwrap_err();
        assert!(matches!(&err, AppError::Logging(msg) if msg.contains(LOG_ENV)));
    }

    #[test]
    fn test_env_value_overrides_config() {
        let filter = filter_from(Some("basket=trace"), "basket=loud").unwrap();
        assert!(filter.to_string().contains("basket=trace"));
    }
}
