use thiserror::Error;

pub type SkipResult<T> = Result<T, SkipError>;

#[derive(Debug, Error)]
pub enum SkipError {
    #[error("invalid axis geometry: length={length}, max_length={max_length}, tick_size={tick_size}")]
    InvalidGeometry {
        length: f64,
        max_length: f64,
        tick_size: f64,
    },

    #[error("invalid tick options: {0}")]
    InvalidOptions(String),

    #[error("invalid data: {0}")]
    InvalidData(String),
}
