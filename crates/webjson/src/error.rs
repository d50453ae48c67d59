use std::io;
use std::string::FromUtf8Error;

use thiserror::Error;

use crate::value::Value;

#[derive(Debug, Error)]
pub enum Error {
    #[error("{repr} is not JSON serializable by this encoder")]
    UnsupportedType { kind: &'static str, repr: String },

    #[error("{repr} is not a valid dictionary key")]
    InvalidKey { kind: &'static str, repr: String },

    #[error("Number out of range: {0}")]
    NumberOutOfRange(String),

    #[error("{0} is not supported")]
    InvalidNumber(&'static str),

    #[error("Exceeded maximum allowed recursion level ({0}), possibly circular reference detected")]
    MaxDepthExceeded(usize),

    #[error("raw JSON is not valid UTF-8: {0}")]
    RawJson(#[from] FromUtf8Error),

    /// A hard failure raised by a value's own hook.
    #[error("{0}")]
    Custom(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("serde_json error: {0}")]
    SerdeJson(#[from] serde_json::Error),

    #[error("{0}")]
    Message(String),
}

impl Error {
    pub fn custom<T: core::fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }

    pub(crate) fn unsupported(value: &Value) -> Self {
        Error::UnsupportedType {
            kind: value.kind_name(),
            repr: format!("{:?}", value),
        }
    }

    pub(crate) fn invalid_key(value: &Value) -> Self {
        Error::InvalidKey {
            kind: value.kind_name(),
            repr: format!("{:?}", value),
        }
    }
}

impl serde::ser::Error for Error {
    fn custom<T: core::fmt::Display>(msg: T) -> Self {
        Error::Message(msg.to_string())
    }
}

pub type Result<T> = core::result::Result<T, Error>;
