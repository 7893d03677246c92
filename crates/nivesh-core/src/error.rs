use thiserror::Error;

/// Top-level error type for the Nivesh system.
///
/// Subsystem crates define their own error types and implement
/// `From<SubsystemError> for NiveshError` so that the `?` operator works
/// seamlessly across crate boundaries.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum NiveshError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Chat error: {0}")]
    Chat(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<toml::de::Error> for NiveshError {
    fn from(err: toml::de::Error) -> Self {
        NiveshError::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for NiveshError {
    fn from(err: toml::ser::Error) -> Self {
        NiveshError::Config(err.to_string())
    }
}

impl From<serde_json::Error> for NiveshError {
    fn from(err: serde_json::Error) -> Self {
        NiveshError::Serialization(err.to_string())
    }
}

/// A specialized `Result` type for Nivesh operations.
pub type Result<T> = std::result::Result<T, NiveshError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = NiveshError::Config("missing field".to_string());
        assert_eq!(err.to_string(), "Configuration error: missing field");

        let err = NiveshError::Storage("disk full".to_string());
        assert_eq!(err.to_string(), "Storage error: disk full");

        let err = NiveshError::Serialization("invalid json".to_string());
        assert_eq!(err.to_string(), "Serialization error: invalid json");

        let err = NiveshError::Chat("reply pending".to_string());
        assert_eq!(err.to_string(), "Chat error: reply pending");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: NiveshError = io_err.into();
        assert!(matches!(err, NiveshError::Io(_)));
        assert!(err.to_string().contains("file not found"));
    }

    #[test]
    fn test_error_from_toml_de() {
        let bad_toml = "invalid = [[[";
        let parsed: std::result::Result<toml::Value, _> = toml::from_str(bad_toml);
        assert!(parsed.is_err());
        let err: NiveshError = parsed.unwrap_err().into();
        assert!(matches!(err, NiveshError::Config(_)));
    }

    #[test]
    fn test_error_from_serde_json() {
        let bad_json = "{ invalid json }";
        let parsed: std::result::Result<serde_json::Value, _> = serde_json::from_str(bad_json);
        assert!(parsed.is_err());
        let err: NiveshError = parsed.unwrap_err().into();
        assert!(matches!(err, NiveshError::Serialization(_)));
    }

    #[test]
    fn test_result_type_with_question_mark() {
        fn inner() -> Result<String> {
            let io_result: std::result::Result<i32, std::io::Error> = Ok(42);
            let _value = io_result?;
            Ok("success".to_string())
        }

        assert_eq!(inner().unwrap(), "success");
    }

    #[test]
    fn test_error_debug_impl() {
        let err = NiveshError::Storage("test debug".to_string());
        let debug_str = format!("{:?}", err);
        assert!(debug_str.contains("Storage"));
        assert!(debug_str.contains("test debug"));
    }
}
