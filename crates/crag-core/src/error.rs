use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum CragError {
    #[error("Invalid session config: {0}")]
    InvalidConfig(String),

    #[error("Invalid photo key: {0:?}")]
    InvalidPhotoKey(String),

    #[error("Route index {index} out of range (total: {total})")]
    RouteIndexOutOfRange { index: usize, total: usize },

    #[error("Path point {index} out of range (total: {total})")]
    PointIndexOutOfRange { index: usize, total: usize },

    #[error("Route {0} has no path on the active photo")]
    NoPathOnPhoto(String),
}

pub type Result<T> = std::result::Result<T, CragError>;
