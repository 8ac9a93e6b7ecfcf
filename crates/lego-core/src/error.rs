use thiserror::Error;

#[derive(Debug, Error)]
pub enum LegoError {
    #[error("invalid date '{0}': expected YYYY-MM-DD")]
    InvalidDate(String),
}

pub type Result<T> = std::result::Result<T, LegoError>;
