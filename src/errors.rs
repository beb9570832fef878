use std::io;
use thiserror::Error;

use crate::config::ConfigError;

#[derive(Error, Debug)]
pub enum WrapError {
    #[error("file descriptor is not a terminal")]
    NotATerminal,

    #[error("terminal size is unavailable")]
    SizeUnavailable,

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

pub type WrapResult<T> = Result<T, WrapError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_converts() {
        let err: WrapError = ConfigError::ValidationError("unknown log level: chatty".into()).into();
        assert!(matches!(err, WrapError::Config(_)));
        assert_eq!(
            err.to_string(),
            "Configuration error: Validation error: unknown log level: chatty"
        );
    }
}
