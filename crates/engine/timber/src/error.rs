//! Error types for the timber crate

use thiserror::Error;

/// Result type alias for timber operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while bringing the engine up
///
/// Nothing past startup fails: an exhausted tool is a normal outcome, and
/// unknown materials in the configuration are dropped rather than reported.
#[derive(Debug, Error)]
pub enum Error {
    /// Reading or writing the configuration file failed
    #[error("config io error: {0}")]
    Io(#[from] std::io::Error),

    /// The configuration file is not valid TOML or has the wrong shape
    #[error("config parse error: {0}")]
    Parse(#[from] toml::de::Error),

    /// The `mode` key names no known operating mode
    #[error("unknown mode: {0}")]
    UnknownMode(String),

    /// A value is out of its accepted range
    #[error("invalid config: {0}")]
    InvalidConfig(String),
}
