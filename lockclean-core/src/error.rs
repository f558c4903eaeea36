use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LockcleanError {
    #[error("No folder path provided")]
    EmptyPath,

    #[error("Path does not exist: {0}")]
    PathNotFound(PathBuf),

    #[error("Path is not a directory: {0}")]
    NotADirectory(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, LockcleanError>;
