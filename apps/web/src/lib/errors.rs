//! Errors surfaced to guests. Display strings are shown verbatim in alerts, so
//! form problems read as plain instructions and backend failures keep their
//! status for support requests.

use std::fmt;

#[derive(Clone, Debug)]
pub enum AppError {
    /// Form input rejected before any request is sent.
    Validation(String),
    Config(String),
    Network(String),
    Timeout(String),
    Http { status: u16, message: String },
    Parse(String),
    Serialization(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Validation(message) => formatter.write_str(message),
            AppError::Config(message) => write!(formatter, "Site configuration error: {message}"),
            AppError::Network(message) => write!(formatter, "Network error: {message}"),
            AppError::Timeout(message) => write!(formatter, "Timeout: {message}"),
            AppError::Http { status: 401, .. } => {
                formatter.write_str("That email and password don't match an invitation.")
            }
            AppError::Http { status, message } => {
                write!(formatter, "Request failed ({status}): {message}")
            }
            AppError::Parse(message) => write!(formatter, "Unexpected response: {message}"),
            AppError::Serialization(message) => write!(formatter, "Request error: {message}"),
        }
    }
}

impl std::error::Error for AppError {}
