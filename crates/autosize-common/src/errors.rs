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
}

#[derive(Debug, thiserror::Error)]
pub enum AutosizeError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("webview error: {0}")]
    WebView(String),

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

        let err = ConfigError::ValidationError("webview.animation_duration out of range".into());
        assert_eq!(
            err.to_string(),
            "config validation error: webview.animation_duration out of range"
        );

        let err = ConfigError::WatchError("inotify limit reached".into());
        assert_eq!(err.to_string(), "config watch error: inotify limit reached");
    }

    #[test]
    fn autosize_error_from_config() {
        let config_err = ConfigError::ParseError("bad toml".into());
        let err: AutosizeError = config_err.into();
        assert!(matches!(err, AutosizeError::Config(_)));
        assert!(err.to_string().contains("bad toml"));
    }

    #[test]
    fn autosize_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: AutosizeError = io_err.into();
        assert!(matches!(err, AutosizeError::Io(_)));
        assert!(err.to_string().contains("file missing"));
    }

    #[test]
    fn autosize_error_other_variants() {
        let err = AutosizeError::WebView("child view rejected".into());
        assert_eq!(err.to_string(), "webview error: child view rejected");

        let err = AutosizeError::Other("something went wrong".into());
        assert_eq!(err.to_string(), "something went wrong");
    }
}
