use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("preference file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("preference parse error: {0}")]
    ParseError(String),

    #[error("preference validation error: {0}")]
    ValidationError(String),

    #[error("preference watch error: {0}")]
    WatchError(String),
}

#[derive(Debug, thiserror::Error)]
pub enum OpsdeckError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("bridge error: {0}")]
    Bridge(String),

    #[error("{0}")]
    Other(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display() {
        let err = ConfigError::FileNotFound(PathBuf::from("/tmp/missing.json"));
        assert_eq!(
            err.to_string(),
            "preference file not found: /tmp/missing.json"
        );

        let err = ConfigError::ParseError("unexpected token".into());
        assert_eq!(err.to_string(), "preference parse error: unexpected token");

        let err = ConfigError::ValidationError("unknown flag 'foo'".into());
        assert_eq!(
            err.to_string(),
            "preference validation error: unknown flag 'foo'"
        );

        let err = ConfigError::WatchError("inotify limit reached".into());
        assert_eq!(
            err.to_string(),
            "preference watch error: inotify limit reached"
        );
    }

    #[test]
    fn opsdeck_error_from_config() {
        let config_err = ConfigError::ParseError("bad json".into());
        let err: OpsdeckError = config_err.into();
        assert!(matches!(err, OpsdeckError::Config(_)));
        assert!(err.to_string().contains("bad json"));
    }

    #[test]
    fn opsdeck_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: OpsdeckError = io_err.into();
        assert!(matches!(err, OpsdeckError::Io(_)));
        assert!(err.to_string().contains("file missing"));
    }

    #[test]
    fn opsdeck_error_other_variants() {
        let err = OpsdeckError::Bridge("invalid css value".into());
        assert_eq!(err.to_string(), "bridge error: invalid css value");

        let err = OpsdeckError::Other("something went wrong".into());
        assert_eq!(err.to_string(), "something went wrong");
    }
}
