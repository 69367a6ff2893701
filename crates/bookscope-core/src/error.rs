use thiserror::Error;

/// All errors that can occur in bookscope-core.
#[derive(Debug, Error)]
pub enum BookscopeError {
    #[error("{0} is undefined for an empty catalog")]
    EmptyCatalog(&'static str),

    #[error("book by {0} has an empty title")]
    UntitledBook(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

pub type Result<T> = std::result::Result<T, BookscopeError>;
