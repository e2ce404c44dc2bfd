use thiserror::Error;

#[derive(Error, Debug)]
pub enum SightlineError {
    #[error("Chat provider error: {0}")]
    Chat(String),

    #[error("Search provider error: {0}")]
    Search(String),

    #[error("Reader error: {0}")]
    Reader(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Unknown session: {0}")]
    UnknownSession(String),

    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}
