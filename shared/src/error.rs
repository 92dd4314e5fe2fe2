use thiserror::Error;

pub const VALIDATION_MESSAGE: &str = "Please select both an image and a model";
pub const GENERIC_MESSAGE: &str = "An error occurred while processing your image";

/// Everything that can go wrong between pressing submit and rendering a result.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum UploadError {
    #[error("{}", VALIDATION_MESSAGE)]
    Validation,

    #[error("API request failed with status {status}")]
    Http { status: u16 },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Failed to parse response: {0}")]
    Parse(String),

    #[error("{0}")]
    Other(String),
}

impl UploadError {
    /// Text shown in the error region.
    pub fn user_message(&self) -> String {
        let detail = match self {
            UploadError::Network(detail) | UploadError::Parse(detail) | UploadError::Other(detail) => {
                detail
            }
            _ => return self.to_string(),
        };
        if detail.trim().is_empty() {
            GENERIC_MESSAGE.to_string()
        } else {
            self.to_string()
        }
    }
}

impl From<serde_json::Error> for UploadError {
    fn from(err: serde_json::Error) -> Self {
        UploadError::Parse(err.to_string())
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid client config: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("client config has an empty endpoint")]
    EmptyEndpoint,

    #[error("model option {0:?} has an empty id")]
    EmptyModelId(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_error_mentions_status() {
        let err = UploadError::Http { status: 500 };
        assert_eq!(err.user_message(), "API request failed with status 500");
    }

    #[test]
    fn empty_message_falls_back_to_generic_notice() {
        assert_eq!(UploadError::Other(String::new()).user_message(), GENERIC_MESSAGE);
        assert_eq!(UploadError::Other("  ".into()).user_message(), GENERIC_MESSAGE);
        assert_eq!(UploadError::Other("boom".into()).user_message(), "boom");
    }

    #[test]
    fn prefixed_variants_without_detail_use_generic_notice() {
        assert_eq!(UploadError::Network(String::new()).user_message(), GENERIC_MESSAGE);
        assert_eq!(UploadError::Parse(" ".into()).user_message(), GENERIC_MESSAGE);
        assert_eq!(
            UploadError::Parse("expected value at line 1 column 1".into()).user_message(),
            "Failed to parse response: expected value at line 1 column 1"
        );
    }

    #[test]
    fn validation_message_is_fixed() {
        assert_eq!(UploadError::Validation.user_message(), VALIDATION_MESSAGE);
        assert_eq!(
            UploadError::Validation.to_string(),
            "Please select both an image and a model"
        );
    }
}
