use thiserror::Error;

#[derive(Error, Debug)]
pub enum TicketingError {
    #[error("Invalid argument for '{field}' ({value}): {reason}")]
    InvalidArgument {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required field: {field}")]
    MissingField { field: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV output error: {0}")]
    CsvError(#[from] csv::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Configuration,
    Output,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl TicketingError {
    pub fn invalid_argument(
        field: impl Into<String>,
        value: impl ToString,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidArgument {
            field: field.into(),
            value: value.to_string(),
            reason: reason.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidArgument { .. } | Self::MissingField { .. } => ErrorCategory::Validation,
            Self::ConfigError { .. } => ErrorCategory::Configuration,
            Self::IoError(_) | Self::SerializationError(_) | Self::CsvError(_) => {
                ErrorCategory::Output
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::InvalidArgument { .. } => ErrorSeverity::High,
            Self::MissingField { .. } | Self::ConfigError { .. } => ErrorSeverity::Medium,
            Self::SerializationError(_) | Self::CsvError(_) => ErrorSeverity::High,
            Self::IoError(_) => ErrorSeverity::Critical,
        }
    }

    /// 給終端使用者看的簡短訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::InvalidArgument { field, value, .. } => {
                format!("Rejected value '{}' for {}", value, field)
            }
            Self::MissingField { field } => format!("'{}' must be provided", field),
            Self::ConfigError { message } => format!("Configuration problem: {}", message),
            Self::IoError(e) => format!("Could not write output: {}", e),
            Self::SerializationError(e) => format!("Could not serialize tickets: {}", e),
            Self::CsvError(e) => format!("Could not write CSV report: {}", e),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Validation => "Ticket prices must be greater than 0; check the ticket orders",
            ErrorCategory::Configuration => "Check the TOML file syntax and the [cinema] section",
            ErrorCategory::Output => "Make sure standard output is writable",
        }
    }
}

pub type Result<T> = std::result::Result<T, TicketingError>;
