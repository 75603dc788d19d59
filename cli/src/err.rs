use stab_driver::SessionError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CommandError {
    #[error("Unknown command `{0}`; try `help`")]
    Unknown(String),
    #[error("Usage: {0}")]
    Usage(&'static str),
    #[error("Not a number: `{0}`")]
    NotANumber(String),
    #[error("line {line}: {source}")]
    Script { line: usize, source: Box<CommandError> },
    #[error("line {0}: expected an error, but the command succeeded")]
    Unexpected(usize),
    #[error(transparent)]
    Session(#[from] SessionError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CommandError>;
