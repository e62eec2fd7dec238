use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ArticleError {
    #[error("keyword must not be empty")]
    EmptyKeyword,

    #[error("invalid input: {0}")]
    InvalidInput(String),
}
