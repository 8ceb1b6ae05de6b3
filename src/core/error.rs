//! Server startup errors

use thiserror::Error;

use super::config::ConfigError;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("failed to load leptos options: {0}")]
    LeptosOptions(String),

    #[error("invalid header value for {name}: {value:?}")]
    InvalidHeader { name: &'static str, value: String },

    #[error("server I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_converts() {
        let err: ServerError = ConfigError::InvalidInteger {
            name: "ASSET_CACHE_MAX_AGE",
            value: "x".to_string(),
        }
        .into();
        assert!(matches!(err, ServerError::Config(_)));
        assert!(err.to_string().starts_with("invalid configuration:"));
    }

    #[test]
    fn test_io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::AddrInUse, "port taken");
        let err: ServerError = io.into();
        assert_eq!(err.to_string(), "server I/O error: port taken");
    }
}
