use miette::Diagnostic;
use thiserror::Error;

/// Main error type for imgfuse operations
#[derive(Error, Diagnostic, Debug)]
pub enum FuseError {
    #[error("IO error: {0}")]
    #[diagnostic(code(imgfuse::io))]
    IoError(#[from] std::io::Error),

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(imgfuse::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Validation error: {message}")]
    #[diagnostic(code(imgfuse::validate))]
    Validation {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Failed to decode {path}: {message}")]
    #[diagnostic(code(imgfuse::decode))]
    Decode {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("No images to compose")]
    #[diagnostic(code(imgfuse::compose::empty))]
    EmptyInput,

    #[error("Failed to encode {path}: {message}")]
    #[diagnostic(code(imgfuse::encode))]
    Encode {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Configuration error: {message}")]
    #[diagnostic(code(imgfuse::config))]
    Config {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Watch error: {message}")]
    #[diagnostic(code(imgfuse::watch))]
    Watch { message: String },
}

pub type Result<T> = std::result::Result<T, FuseError>;
