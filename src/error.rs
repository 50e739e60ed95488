use thiserror::Error;

/// type alias for all operations in this crate that could fail with a [`MsgError`]
pub type Result<T> = std::result::Result<T, MsgError>;

/// The Error variants used throughout the message store, its server and its client.
#[derive(Error, Debug)]
pub enum MsgError {
    /// the requested message id is not present in the store
    #[error("no message exists with id {0}")]
    NotFound(String),

    /// the id generator only returned ids that are already stored
    #[error("no unused id after {0} attempts")]
    IdsExhausted(u32),

    /// a request argument was present but unusable, i.e. a die with zero sides
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// another thread panicked while holding the store lock
    #[error("the message store lock was poisoned")]
    LockPoisoned,

    /// errors from socket or file IO
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// errors (de)serializing requests and responses
    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// command line or address parsing failures
    #[error("parsing error: {0}")]
    Parsing(String),

    /// an error message sent back by the server
    #[error("{0}")]
    Server(String),

    /// the server answered with a response that does not fit the request
    #[error("unexpected response from server: {0}")]
    UnexpectedResponse(String),
}
