use thiserror::Error;

#[derive(Error, Debug)]
pub enum GateError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image decode error: {0}")]
    Decode(#[from] image::ImageError),

    #[error("Processing error: {0}")]
    Processing(String),
}

pub type Result<T> = std::result::Result<T, GateError>;
