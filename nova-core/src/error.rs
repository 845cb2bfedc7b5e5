use thiserror::Error;

#[derive(Error, Debug)]
pub enum ChatError {
    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Responder error: {0}")]
    Responder(#[from] RuleError),

    #[error("Session error: {0}")]
    Session(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

#[derive(Error, Debug)]
pub enum RuleError {
    #[error("No rule matched the message")]
    NoMatch,

    #[error("Fallback pick {0} out of range for {1} replies")]
    PickOutOfRange(usize, usize),
}

pub type Result<T> = std::result::Result<T, ChatError>;
