use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlcError {
    /// Invalid configuration (unsupported PLC type, malformed config file).
    /// Raised before any connection attempt; session construction does not
    /// complete.
    #[error("configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("timeout")]
    Timeout,

    #[error("protocol error: {0}")]
    Protocol(String),
}
