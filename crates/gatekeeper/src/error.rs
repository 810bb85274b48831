use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum Error {
    #[error("unknown role: {0}")]
    UnknownRole(String),
    #[error("unknown route name: {0}")]
    UnknownRoute(String),
    #[error("unknown feature flag: {0}")]
    UnknownFlag(String),
    #[error("invalid value for feature flag {flag}: {value}")]
    InvalidFlagValue { flag: String, value: String },
}
