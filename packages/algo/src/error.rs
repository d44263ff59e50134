use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum AlgoError {
    #[error("unknown interaction type: {0}")]
    UnknownInteractionType(String),
    #[error("unknown tier: {0}")]
    UnknownTier(String),
    #[error("invalid response time: {0}")]
    InvalidResponseTime(f64),
}
