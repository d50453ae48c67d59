//! Decoding is handed straight to `serde_json`.

use serde::de::DeserializeOwned;

use crate::Result;
use crate::value::Value;

pub fn loads(s: &str) -> Result<Value> {
    let v: serde_json::Value = serde_json::from_str(s)?;
    Ok(Value::from(v))
}

pub fn loadb(b: &[u8]) -> Result<Value> {
    let v: serde_json::Value = serde_json::from_slice(b)?;
    Ok(Value::from(v))
}

pub fn from_str<T: DeserializeOwned>(s: &str) -> Result<T> {
    Ok(serde_json::from_str(s)?)
}

pub fn from_slice<T: DeserializeOwned>(b: &[u8]) -> Result<T> {
    Ok(serde_json::from_slice(b)?)
}
