use thiserror::Error;

#[derive(Debug, Error)]
pub enum VehicleRepositoryError {
    #[error("storage error: {0}")]
    Storage(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("session storage error: {0}")]
    Storage(String),
}

#[derive(Debug, Error)]
pub enum AppDirsError {
    #[error("system data-local directory is unavailable")]
    DataLocalDirUnavailable,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DateInputError {
    #[error("date is empty")]
    Empty,

    #[error("unrecognized date: {0}")]
    Unrecognized(String),
}

#[derive(Debug, Error)]
pub enum FilePickerError {
    #[error("file not found: {0}")]
    NotFound(String),

    #[error("unsupported file type: {0}")]
    UnsupportedType(String),

    #[error("io error: {0}")]
    Io(String),
}
