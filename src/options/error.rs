use std::path::PathBuf;
use thiserror::Error;

/// Errors produced while registering or parsing program options.
#[derive(Debug, Error)]
pub enum OptionsError {
    #[error("Option index {index} is out of range for a table of {capacity} options")]
    IndexOutOfRange { index: usize, capacity: usize },

    #[error("Invalid option '{token}'")]
    UnknownOption { token: String },

    #[error("Option '{option}' requires an argument, but none was given")]
    MissingArgument { option: String },

    #[error("Option '{option}' requires an argument, but '{token}' is not valid")]
    InvalidArgument { option: String, token: String },

    #[error("Option '{option}' expects a number, got '{value}'")]
    InvalidNumber { option: String, value: String },

    #[error("Cannot find config file '{path}'")]
    ConfigFileNotFound { path: PathBuf },

    #[error("Failed to read config file '{path}': {source}")]
    ConfigFileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write help output: {source}")]
    HelpOutput {
        #[source]
        source: std::io::Error,
    },
}
