//! 错误类型
//!
//! - `ListError`: 购物清单的校验错误（界面内就地提示）
//! - `AppError`: 启动 / 退出阶段的错误（配置、日志、终端 I/O）

use std::io;
use std::path::PathBuf;

/// 清单操作的校验错误
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ListError {
    /// 数量文本无法解析为整数
    #[error("invalid quantity: {input:?}")]
    InvalidQuantity { input: String },
}

/// 应用级错误
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("failed to parse config {}: {source}", .path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("cannot locate the user config directory")]
    NoConfigDir,

    #[error("cannot locate the user data directory")]
    NoDataDir,

    #[error("failed to initialize logging: {0}")]
    Logging(String),
}
