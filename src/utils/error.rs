use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("HTTP error! status: {status}")]
    Http { status: u16 },

    #[error("API request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Response parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Request body encoding error: {0}")]
    Encode(serde_json::Error),

    #[error("Invalid header '{name}': {reason}")]
    InvalidHeader { name: String, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidation { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfig { field: String },

    #[error("Hardware fingerprint error: {message}")]
    Fingerprint { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Server,
    Data,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl ClientError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ClientError::Transport(_) => ErrorCategory::Network,
            ClientError::Http { .. } => ErrorCategory::Server,
            ClientError::Parse(_) | ClientError::Encode(_) | ClientError::InvalidHeader { .. } => {
                ErrorCategory::Data
            }
            ClientError::ConfigValidation { .. }
            | ClientError::InvalidConfigValue { .. }
            | ClientError::MissingConfig { .. } => ErrorCategory::Configuration,
            ClientError::Io(_) | ClientError::Fingerprint { .. } => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            ClientError::Http { status } if *status < 500 => ErrorSeverity::High,
            ClientError::Http { .. } | ClientError::Transport(_) => ErrorSeverity::Medium,
            ClientError::Parse(_)
            | ClientError::Encode(_)
            | ClientError::InvalidHeader { .. }
            | ClientError::ConfigValidation { .. }
            | ClientError::InvalidConfigValue { .. }
            | ClientError::MissingConfig { .. } => ErrorSeverity::High,
            ClientError::Io(_) | ClientError::Fingerprint { .. } => ErrorSeverity::Critical,
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Http { status } => Some(*status),
            _ => None,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            ClientError::Http { status: 401 } | ClientError::Http { status: 403 } => {
                "Log in again and pass the token with --token"
            }
            ClientError::Http { status: 404 } => "Check the code or id in the request path",
            ClientError::Http { status } if *status >= 500 => {
                "The backend failed; try again later or check its logs"
            }
            ClientError::Http { .. } => "Check the request parameters",
            ClientError::Transport(_) => "Check that the backend is reachable at the base URL",
            ClientError::Parse(_) => "The backend returned a body that is not valid JSON",
            ClientError::Encode(_) => "Check the JSON passed as request body",
            ClientError::InvalidHeader { .. } => "Header names and values must be valid HTTP tokens",
            ClientError::Io(_) => "Check file paths and permissions",
            ClientError::ConfigValidation { .. }
            | ClientError::InvalidConfigValue { .. }
            | ClientError::MissingConfig { .. } => "Fix the configuration file or CLI arguments",
            ClientError::Fingerprint { .. } => "Hardware information could not be collected",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            ClientError::Http { status } => format!("Backend rejected the request (HTTP {})", status),
            ClientError::Transport(_) => "Could not reach the backend".to_string(),
            ClientError::Parse(_) => "Backend response could not be read".to_string(),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;
