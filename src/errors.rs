use crate::pattern::PatternError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RouterError {
    #[error("unknown http method '{method}'")]
    UnknownMethod { method: String },
    #[error(transparent)]
    Pattern(#[from] PatternError),
}

pub type RouterResult<T> = Result<T, RouterError>;
