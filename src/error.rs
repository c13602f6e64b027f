use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// A request violates an input invariant, e.g. an empty password.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// The source bytes could not be parsed as a PDF document.
    #[error("couldn't load PDF document: {0}")]
    DocumentLoad(#[source] lopdf::Error),
    /// The source document already carries an encryption dictionary. It has
    /// to be decrypted before it can be protected with a new password.
    #[error("document is already password protected")]
    AlreadyProtected,
    /// Building or applying the protection policy failed, or the protected
    /// document could not be serialized.
    #[error("couldn't apply protection policy: {0}")]
    Encryption(#[source] lopdf::Error),
    /// Failure surfaced by a caller-provided sink; opaque to this crate.
    #[error("couldn't store protected file: {0}")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
    /// Reading a source file failed.
    #[error("couldn't read source file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Wraps an arbitrary sink failure into the opaque storage class.
    pub fn storage<E>(err: E) -> Self
    where
        E: Into<Box<dyn std::error::Error + Send + Sync>>,
    {
        Error::Storage(err.into())
    }
}
