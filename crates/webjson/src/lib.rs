#![doc = include_str!("../README.md")]

pub mod decode;
pub mod encode;
pub mod error;
pub mod number;
pub mod options;
pub mod ser;
pub mod value;

pub use crate::decode::{loadb, loads};
pub use crate::encode::Encoder;
pub use crate::error::{Error, Result};
pub use crate::options::Options;
pub use crate::value::{Custom, Number, RawJson, Temporal, Value};

use std::io::Write;

use serde::de::DeserializeOwned;

/// ASCII JSON text for `value`, with the default depth limit.
pub fn dumps(value: &Value) -> Result<String> {
    Encoder::new().dumps(value)
}

/// The bytes of [`dumps`].
pub fn dumpb(value: &Value) -> Result<Vec<u8>> {
    Encoder::new().dumpb(value)
}

pub fn encode_to_string(value: &Value, options: &Options) -> Result<String> {
    Encoder::with_options(*options).dumps(value)
}

pub fn encode_to_vec(value: &Value, options: &Options) -> Result<Vec<u8>> {
    Encoder::with_options(*options).dumpb(value)
}

pub fn encode_to_writer<W: Write>(writer: W, value: &Value, options: &Options) -> Result<()> {
    Encoder::with_options(*options).encode_to_writer(writer, value)
}

pub fn decode_from_str<T: DeserializeOwned>(s: &str) -> Result<T> {
    crate::decode::from_str(s)
}

pub fn decode_from_slice<T: DeserializeOwned>(b: &[u8]) -> Result<T> {
    crate::decode::from_slice(b)
}
