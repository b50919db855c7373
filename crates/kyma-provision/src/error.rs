//! Error types for kyma-provision

use thiserror::Error;

/// Result type alias using kyma-provision's Error type
pub type Result<T> = std::result::Result<T, ProvisionError>;

/// Errors raised while building or handing off provisioning descriptors
#[derive(Error, Debug)]
pub enum ProvisionError {
    /// Extra configuration entry without a `=` separator
    #[error("Invalid extra configuration '{entry}': expected KEY=VALUE")]
    InvalidExtra { entry: String },

    /// Required option left empty
    #[error("Missing required flag: --{field}")]
    MissingField { field: String },

    /// Credentials file does not exist or is not a regular file
    #[error("Credentials file not found: {path}")]
    CredentialsNotFound { path: String },

    /// Unsupported request document format
    #[error("Unknown request format: {format}. Supported: yaml, json")]
    UnknownFormat { format: String },

    /// Request could not be rendered
    #[error("Failed to serialize provisioning request: {0}")]
    Serialize(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ProvisionError {
    /// Create an invalid extra entry error
    pub fn invalid_extra(entry: impl Into<String>) -> Self {
        Self::InvalidExtra {
            entry: entry.into(),
        }
    }

    /// Create a missing field error
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingField {
            field: field.into(),
        }
    }

    /// Create a credentials not found error
    pub fn credentials_not_found(path: impl Into<String>) -> Self {
        Self::CredentialsNotFound { path: path.into() }
    }
}

impl From<serde_json::Error> for ProvisionError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialize(err.to_string())
    }
}

impl From<serde_yaml_ng::Error> for ProvisionError {
    fn from(err: serde_yaml_ng::Error) -> Self {
        Self::Serialize(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_extra_message_names_entry() {
        let err = ProvisionError::invalid_extra("NOEQUALS");
        assert_eq!(
            err.to_string(),
            "Invalid extra configuration 'NOEQUALS': expected KEY=VALUE"
        );
    }

    #[test]
    fn test_missing_field_message() {
        let err = ProvisionError::missing_field("project");
        assert_eq!(err.to_string(), "Missing required flag: --project");
    }
}
