use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("Clipboard error: {0}")]
    Clipboard(String),

    #[error("Unknown route: {0}")]
    UnknownRoute(String),

    #[error("No snippet at index {index} on {route}")]
    NoSuchSnippet { route: String, index: usize },

    #[error("No home directory")]
    NoHomeDir,
}

pub type Result<T> = std::result::Result<T, Error>;
