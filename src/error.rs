use thiserror::Error;

/// Errors raised around lens state snapshots.
///
/// A `LensState` itself cannot fail. These variants cover ordinal decoding,
/// the delivery seam and configuration loading.
#[derive(Error, Debug)]
pub enum LensStateError {
    #[error("Invalid {kind} ordinal: {value}")]
    InvalidOrdinal { kind: &'static str, value: u8 },

    #[error("Camera does not report lens state: {0}")]
    UnsupportedCamera(String),

    #[error("No lens state received yet from {0}")]
    NoSnapshot(String),

    #[error("Lens state source error: {0}")]
    Source(String),

    #[error("Config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Config serialization error: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl LensStateError {
    pub(crate) fn invalid_lens_type(value: u8) -> Self {
        Self::InvalidOrdinal {
            kind: "lens type",
            value,
        }
    }

    pub(crate) fn invalid_focus_status(value: u8) -> Self {
        Self::InvalidOrdinal {
            kind: "focus status",
            value,
        }
    }

    pub(crate) fn invalid_focus_mode(value: u8) -> Self {
        Self::InvalidOrdinal {
            kind: "focus mode",
            value,
        }
    }
}

/// Result type for lens state operations
pub type Result<T> = std::result::Result<T, LensStateError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_ordinal_error() {
        let error = LensStateError::InvalidOrdinal {
            kind: "lens type",
            value: 7,
        };
        assert_eq!(error.to_string(), "Invalid lens type ordinal: 7");
    }

    #[test]
    fn test_unsupported_camera_error() {
        let error = LensStateError::UnsupportedCamera("Z30".to_string());
        assert_eq!(error.to_string(), "Camera does not report lens state: Z30");
    }

    #[test]
    fn test_no_snapshot_error() {
        let error = LensStateError::NoSnapshot("X5".to_string());
        assert_eq!(error.to_string(), "No lens state received yet from X5");
    }

    #[test]
    fn test_source_error() {
        let error = LensStateError::Source("link lost".to_string());
        assert_eq!(error.to_string(), "Lens state source error: link lost");
    }

    #[test]
    fn test_config_parse_error_from_toml() {
        let toml_error = toml::from_str::<toml::Value>("supported_cameras = [").unwrap_err();
        let error: LensStateError = toml_error.into();
        assert!(error.to_string().starts_with("Config parse error:"));
    }

    #[test]
    fn test_io_error_from_std() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let error: LensStateError = io_error.into();
        assert!(error.to_string().starts_with("IO error:"));
    }

    #[test]
    fn test_error_is_debug() {
        let error = LensStateError::NoSnapshot("X5R".to_string());
        let debug_str = format!("{:?}", error);
        assert!(debug_str.contains("NoSnapshot"));
    }

    #[test]
    fn test_result_type_err() {
        let result: Result<u8> = Err(LensStateError::Source("fail".to_string()));
        assert!(result.is_err());
    }
}
