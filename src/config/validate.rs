// src/config/validate.rs

use crate::config::model::{ConfigFile, RawConfigFile};
use crate::errors::{DialogError, Result};

const MAX_POLL_INTERVAL_MS: u64 = 10_000;
const MIN_NOTIFY_TIMEOUT_MS: u64 = 1_000;

impl TryFrom<RawConfigFile> for ConfigFile {
    type Error = crate::errors::DialogError;

    fn try_from(raw: RawConfigFile) -> std::result::Result<Self, Self::Error> {
        validate_config(&raw)?;
        Ok(ConfigFile::new_unchecked(raw.settings))
    }
}

pub fn validate_config(cfg: &RawConfigFile) -> Result<()> {
    validate_poll_interval(cfg)?;
    validate_notify_timeout(cfg)?;
    Ok(())
}

fn validate_poll_interval(cfg: &RawConfigFile) -> Result<()> {
    let ms = cfg.settings.poll_interval_ms;
    if ms == 0 || ms > MAX_POLL_INTERVAL_MS {
        return Err(DialogError::ConfigError(format!(
            "[settings].poll_interval_ms must be between 1 and {MAX_POLL_INTERVAL_MS} (got {ms})"
        )));
    }
    Ok(())
}

fn validate_notify_timeout(cfg: &RawConfigFile) -> Result<()> {
    let ms = cfg.settings.notify_timeout_ms;
    if ms < MIN_NOTIFY_TIMEOUT_MS {
        return Err(DialogError::ConfigError(format!(
            "[settings].notify_timeout_ms must be >= {MIN_NOTIFY_TIMEOUT_MS} (got {ms})"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(poll: u64, notify: u64) -> RawConfigFile {
        let mut cfg = RawConfigFile::default();
        cfg.settings.poll_interval_ms = poll;
        cfg.settings.notify_timeout_ms = notify;
        cfg
    }

    #[test]
    fn defaults_are_valid() {
        assert!(ConfigFile::try_from(RawConfigFile::default()).is_ok());
    }

    #[test]
    fn rejects_zero_poll_interval() {
        let err = ConfigFile::try_from(raw(0, 5000)).unwrap_err();
        assert!(matches!(err, DialogError::ConfigError(msg) if msg.contains("poll_interval_ms")));
    }

    #[test]
    fn rejects_short_notifications() {
        let err = ConfigFile::try_from(raw(200, 10)).unwrap_err();
        assert!(matches!(err, DialogError::ConfigError(msg) if msg.contains("notify_timeout_ms")));
    }
}
