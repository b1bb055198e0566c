// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Error determing current directory, exiting...")]
    CurrentDir(#[source] std::io::Error),

    #[error("Directory: \"{}\" not found, exiting...", path.display())]
    OpenDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("You supplied an invalid argument, exiting...")]
    InvalidArgument(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// Process exit status for this error.
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::InvalidArgument(_) => 22,
            Self::CurrentDir(_) | Self::OpenDir { .. } | Self::Io(_) => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
