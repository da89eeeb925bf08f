use thiserror::Error;

#[derive(Error, Debug)]
pub enum FilterError {
    #[error("Empty {0} coefficient set")]
    EmptyCoefficients(&'static str),

    #[error("Leading {0} coefficient must be non-zero")]
    ZeroLeadingCoefficient(&'static str),

    #[error("Serial port error: {0}")]
    Serial(#[from] serialport::Error),

    #[error("Transport I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, FilterError>;
