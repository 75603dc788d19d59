use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NavError {
    #[error("Unknown action `{0}`; expected one of `recurse`, `undoRecurse`, `finishSubtree`")]
    UnknownAction(String),
    #[error("Invalid query point: {0}")]
    InvalidQuery(String),
}

pub type Result<T> = std::result::Result<T, NavError>;
