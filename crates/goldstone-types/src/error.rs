use thiserror::Error;

#[derive(Error, Debug)]
pub enum GoldstoneError {
    #[error("numberSteps must be positive and an integer multiple of 4, but is {0}")]
    InvalidGridSize(i64),

    #[error("safeZone must be non-negative, but is {0}")]
    InvalidSafeZone(f64),

    #[error("{kind} code must be either [-1, 0, 1], but is {code}")]
    InvalidVariant { kind: &'static str, code: f64 },

    #[error("Angular index must be a finite integer, but is {0}")]
    NonIntegralIndex(f64),

    #[error("Angular index {0} does not fit in a 64-bit integer")]
    IndexOutOfRange(f64),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type GoldstoneResult<T> = Result<T, GoldstoneError>;
