use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenerationsError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Io,
    Output,
}

impl ErrorCategory {
    /// Process exit code for the CLI.
    pub fn exit_code(self) -> i32 {
        match self {
            ErrorCategory::Configuration => 1,
            ErrorCategory::Io | ErrorCategory::Output => 2,
        }
    }
}

impl GenerationsError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            GenerationsError::IoError(_) => ErrorCategory::Io,
            GenerationsError::SerializationError(_) | GenerationsError::CsvError(_) => {
                ErrorCategory::Output
            }
            GenerationsError::ConfigValidationError { .. }
            | GenerationsError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            GenerationsError::IoError(e) => format!("Could not read or write a file: {}", e),
            GenerationsError::SerializationError(e) => {
                format!("Could not render JSON output: {}", e)
            }
            GenerationsError::CsvError(e) => format!("Could not render CSV output: {}", e),
            GenerationsError::ConfigValidationError { field, message } => {
                format!("The project file is invalid at '{}': {}", field, message)
            }
            GenerationsError::InvalidConfigValueError { field, value, reason } => {
                format!("'{}' is not a valid value for '{}': {}", value, field, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Configuration => {
                "Check the project TOML file against the documented [project], [policy] and [[generations]] tables"
            }
            ErrorCategory::Io => "Make sure the file exists and the output directory is writable",
            ErrorCategory::Output => "Try another output format (table, csv or json)",
        }
    }
}

pub type Result<T> = std::result::Result<T, GenerationsError>;
