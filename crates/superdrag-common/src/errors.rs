use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),

    #[error("config watch error: {0}")]
    WatchError(String),

    #[error("settings storage unavailable: {0}")]
    StorageUnavailable(String),
}

#[derive(Debug, thiserror::Error)]
pub enum PlatformError {
    #[error("clipboard error: {0}")]
    ClipboardError(String),

    #[error("not supported: {0}")]
    NotSupported(String),
}

#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    #[error("dispatcher unreachable: {0}")]
    Unreachable(String),

    #[error("unknown engine: {0}")]
    UnknownEngine(String),

    #[error("tab error: {0}")]
    TabError(String),

    #[error("autofill gave up after {attempts} attempts")]
    AutofillTimeout { attempts: u32 },

    #[error("script error: {0}")]
    ScriptError(String),
}

#[derive(Debug, thiserror::Error)]
pub enum SuperdragError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Platform(#[from] PlatformError),

    #[error(transparent)]
    Dispatch(#[from] DispatchError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display() {
        let err = ConfigError::FileNotFound(PathBuf::from("/tmp/missing.toml"));
        assert_eq!(err.to_string(), "config file not found: /tmp/missing.toml");

        let err = ConfigError::ParseError("unexpected token".into());
        assert_eq!(err.to_string(), "config parse error: unexpected token");

        let err = ConfigError::StorageUnavailable("quota exceeded".into());
        assert_eq!(
            err.to_string(),
            "settings storage unavailable: quota exceeded"
        );
    }

    #[test]
    fn platform_error_display() {
        let err = PlatformError::ClipboardError("access denied".into());
        assert_eq!(err.to_string(), "clipboard error: access denied");

        let err = PlatformError::NotSupported("linux wayland".into());
        assert_eq!(err.to_string(), "not supported: linux wayland");
    }

    #[test]
    fn dispatch_error_display() {
        let err = DispatchError::Unreachable("channel closed".into());
        assert_eq!(err.to_string(), "dispatcher unreachable: channel closed");

        let err = DispatchError::AutofillTimeout { attempts: 50 };
        assert_eq!(err.to_string(), "autofill gave up after 50 attempts");
    }

    #[test]
    fn superdrag_error_from_config() {
        let config_err = ConfigError::ParseError("bad toml".into());
        let err: SuperdragError = config_err.into();
        assert!(matches!(err, SuperdragError::Config(_)));
        assert!(err.to_string().contains("bad toml"));
    }

    #[test]
    fn superdrag_error_from_dispatch() {
        let err: SuperdragError = DispatchError::UnknownEngine("bing".into()).into();
        assert!(matches!(err, SuperdragError::Dispatch(_)));
        assert_eq!(err.to_string(), "unknown engine: bing");
    }

    #[test]
    fn superdrag_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: SuperdragError = io_err.into();
        assert!(matches!(err, SuperdragError::Io(_)));
        assert!(err.to_string().contains("file missing"));
    }
}
