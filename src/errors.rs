// src/errors.rs

//! Crate-wide error type.
//!
//! Dialog operations themselves never fail loudly (see [`crate::exec`]);
//! these errors cover configuration loading. The `pdialog` binary wraps them
//! in `anyhow::Error`.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DialogError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, DialogError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_errors_survive_the_cli_error_type() {
        let err: anyhow::Error = DialogError::ConfigError("bad value".into()).into();
        assert_eq!(err.to_string(), "Configuration error: bad value");
        assert!(matches!(
            err.downcast_ref::<DialogError>(),
            Some(DialogError::ConfigError(_))
        ));
    }
}
