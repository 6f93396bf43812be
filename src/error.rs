use thiserror::Error;

#[derive(Error, Debug)]
pub enum SalesError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("catalog error: {0}")]
    Catalog(String),
    #[error("store error: {0}")]
    Store(String),
    #[error("promotion conflict: {0}")]
    PromotionConflict(String),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SalesError>;
