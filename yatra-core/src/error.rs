use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("No stops available for snapping")]
    NoPointsFound,
    #[error("Invalid data: {0}")]
    InvalidData(String),
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("GeoJSON error: {0}")]
    GeoJsonError(String),
}
