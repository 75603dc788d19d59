use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TreeError {
    #[error("Invalid input: cannot build an interval tree from an empty set of intervals")]
    InvalidInput,
}

pub type Result<T> = std::result::Result<T, TreeError>;
