use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error in '{field}': {message}")]
    ConfigError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Unknown action: {name}")]
    UnknownActionError { name: String },
}

impl ClientError {
    /// 給 CLI 使用者看的簡短訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            ClientError::HttpError(_) => "Could not reach the buyer API".to_string(),
            ClientError::IoError(e) => format!("File access failed: {}", e),
            ClientError::SerializationError(_) => "Payload is not valid JSON".to_string(),
            ClientError::ConfigError { field, .. }
            | ClientError::InvalidConfigValueError { field, .. } => {
                format!("Configuration value '{}' is invalid", field)
            }
            ClientError::UnknownActionError { name } => {
                format!("'{}' is not a buyer action (try buyerSignUp or buyerLogin)", name)
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_action_message() {
        let err = ClientError::UnknownActionError {
            name: "buyerSignIn".to_string(),
        };
        assert_eq!(err.to_string(), "Unknown action: buyerSignIn");
        assert!(err.user_friendly_message().contains("buyerLogin"));
    }

    #[test]
    fn test_serde_error_converts() {
        let parse: std::result::Result<serde_json::Value, _> = serde_json::from_str("{");
        let err: ClientError = parse.unwrap_err().into();
        assert!(matches!(err, ClientError::SerializationError(_)));
    }
}
