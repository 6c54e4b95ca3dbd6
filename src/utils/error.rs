use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Service error ({status}): {message}")]
    Service { status: u16, message: String },

    #[error("Service unavailable: {reason}")]
    Unavailable { reason: String },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Missing configuration: {field}")]
    MissingConfig { field: String },

    #[error("Invalid value for {field}: {value} ({reason})")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },
}

impl StoreError {
    pub fn user_friendly_message(&self) -> String {
        match self {
            StoreError::Transport(_) => "Could not reach the collection store".to_string(),
            StoreError::Serialization(_) => {
                "The collection store returned data in an unexpected shape".to_string()
            }
            StoreError::Service { status, message } => {
                format!("The collection store rejected the request ({status}): {message}")
            }
            StoreError::Unavailable { reason } => {
                format!("The collection store is unavailable: {reason}")
            }
            StoreError::Config { message } => format!("Configuration problem: {message}"),
            StoreError::MissingConfig { field } => {
                format!("Required configuration '{field}' is not set")
            }
            StoreError::InvalidConfigValue { field, reason, .. } => {
                format!("Configuration '{field}' is invalid: {reason}")
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            StoreError::Transport(_) => "Check network connectivity and the service URL",
            StoreError::Serialization(_) => {
                "Verify the service URL points at a Postgrest-style REST endpoint"
            }
            StoreError::Service { .. } => {
                "Inspect the service logs; the request itself was well-formed"
            }
            StoreError::Unavailable { .. } => {
                "Set the service URL and API key environment variables and retry"
            }
            StoreError::Config { .. }
            | StoreError::MissingConfig { .. }
            | StoreError::InvalidConfigValue { .. } => {
                "Fix the environment configuration and run again"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, StoreError>;
