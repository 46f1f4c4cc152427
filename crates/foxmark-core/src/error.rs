use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse bookmark store: {0}")]
    Store(#[from] serde_json::Error),

    #[error("Failed to parse configuration: {0}")]
    ConfigSyntax(#[from] ini::ParseError),

    #[error("Missing configuration key '{key}' in section [{section}]")]
    MissingKey { section: String, key: String },

    #[error("Invalid value for '{key}': {value}")]
    InvalidValue { key: String, value: String },

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, Error>;
