use crate::domain::model::{INVALID_MESSAGE, MISSING_CPF_MESSAGE};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CpfError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}' ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl CpfError {
    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            CpfError::HttpError(_) => "Check that the endpoint is reachable and the URL is correct",
            CpfError::IoError(_) => "Check file permissions and that the port is not already in use",
            CpfError::TomlError(_) => "Check the TOML file syntax against the [server] section layout",
            CpfError::ConfigError { .. }
            | CpfError::InvalidConfigValueError { .. } => "Review the command-line flags or config file",
        }
    }
}

pub type Result<T> = std::result::Result<T, CpfError>;

/// 請求層級的拒絕原因，`Display` 即為回應給呼叫端的訊息。
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestRejection {
    /// body 缺少、不是 JSON，或沒有 `cpf` 欄位
    #[error("{}", MISSING_CPF_MESSAGE)]
    MalformedRequest,

    /// 格式正確但 CPF 檢查碼不符
    #[error("{}", INVALID_MESSAGE)]
    InvalidIdentifier,
}
