use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MigratorError {
    #[error("Module '{name}' not found")]
    ModuleNotFound { name: String },

    #[error("No init.yaml found at {}", path.display())]
    DescriptorMissing { path: PathBuf },

    #[error("init.yaml at {} is not valid: {reason}", path.display())]
    DescriptorInvalid { path: PathBuf, reason: String },

    #[error("Malformed GitHub URL '{url}': {reason}")]
    MalformedSourceUrl { url: String, reason: String },

    #[error("{message}")]
    UserInputConflict { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration field '{field}'")]
    MissingConfigError { field: String },
}

impl MigratorError {
    /// Short message suitable for the terminal, without internal detail.
    pub fn user_friendly_message(&self) -> String {
        match self {
            MigratorError::ModuleNotFound { name } => {
                format!("Module '{}' is not part of this project", name)
            }
            MigratorError::DescriptorMissing { path } => {
                format!("Missing init.yaml: {}", path.display())
            }
            MigratorError::DescriptorInvalid { path, .. } => {
                format!("init.yaml at {} could not be read", path.display())
            }
            MigratorError::UserInputConflict { message } => message.clone(),
            MigratorError::ConfigError { .. }
            | MigratorError::InvalidConfigValueError { .. }
            | MigratorError::MissingConfigError { .. } => {
                format!("Configuration problem: {}", self)
            }
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            MigratorError::ModuleNotFound { .. } => {
                "Run `uv-migrator list` to see the discovered modules"
            }
            MigratorError::DescriptorMissing { .. } => {
                "Create an init.yaml for the module or migrate it by hand"
            }
            MigratorError::DescriptorInvalid { .. } => {
                "Make sure init.yaml is a mapping with string values for version, type and layer"
            }
            MigratorError::MalformedSourceUrl { .. } => {
                "Use the form https://github.com/<owner>/<repo>.git"
            }
            MigratorError::UserInputConflict { .. } => {
                "Pass exactly one of a module name or --all"
            }
            MigratorError::ConfigError { .. }
            | MigratorError::InvalidConfigValueError { .. }
            | MigratorError::MissingConfigError { .. } => "Check uv-migrator.toml",
            MigratorError::IoError(_) | MigratorError::SerializationError(_) => {
                "Check file permissions and available disk space"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, MigratorError>;
