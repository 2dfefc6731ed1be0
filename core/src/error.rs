use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// A query arrived before the index was built.
    #[error("index not ready: build the index before searching")]
    IndexNotReady,

    #[error("index already built; it is immutable once constructed")]
    AlreadyBuilt,
}

pub type Result<T> = std::result::Result<T, Error>;
