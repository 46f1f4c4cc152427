use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Menu error: {0}")]
    Menu(String),

    #[error("Browser error: {0}")]
    Browser(String),

    #[error("Profile '{0}' is invalid.")]
    InvalidProfile(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
