use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Listing '{file}' has no column for: {missing}")]
    SchemaError { file: String, missing: String },

    #[error("Listing '{file}', line {line}: {role} value '{value}' is not a number")]
    ParseError {
        file: String,
        line: u64,
        role: String,
        value: String,
    },

    #[error("Cannot read listing directory {}: {source}", path.display())]
    DirectoryRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot write export file {}: {source}", path.display())]
    ExportError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

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
    Schema,
    Data,
    Io,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl CatalogError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            CatalogError::SchemaError { .. } => ErrorCategory::Schema,
            CatalogError::ParseError { .. } | CatalogError::CsvError(_) => ErrorCategory::Data,
            CatalogError::DirectoryRead { .. }
            | CatalogError::ExportError { .. }
            | CatalogError::IoError(_) => ErrorCategory::Io,
            CatalogError::ConfigError { .. }
            | CatalogError::ConfigValidationError { .. }
            | CatalogError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Schema | ErrorCategory::Data => ErrorSeverity::High,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Io => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            CatalogError::SchemaError { file, .. } => format!(
                "Rename the header cells of '{}' to one of the recognised column names, \
                 or rerun with --skip-invalid-files",
                file
            ),
            CatalogError::ParseError { file, line, .. } => {
                format!("Fix the number on line {} of '{}'", line, file)
            }
            CatalogError::DirectoryRead { path, .. } => {
                format!("Check that {} exists and is readable", path.display())
            }
            CatalogError::ExportError { path, .. } => format!(
                "Check that the parent directory of {} exists and is writable",
                path.display()
            ),
            CatalogError::CsvError(_) => {
                "Make sure listing files are UTF-8 encoded comma-separated text".to_string()
            }
            CatalogError::IoError(_) => "Check file permissions and disk space".to_string(),
            CatalogError::ConfigError { .. }
            | CatalogError::ConfigValidationError { .. }
            | CatalogError::InvalidConfigValueError { .. } => {
                "Review the configuration file and command line flags".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Schema => format!("Price list has unknown column layout: {}", self),
            ErrorCategory::Data => format!("Price list contains invalid data: {}", self),
            ErrorCategory::Io => format!("File system error: {}", self),
            ErrorCategory::Configuration => format!("Invalid configuration: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, CatalogError>;
