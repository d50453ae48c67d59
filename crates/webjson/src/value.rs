//! The value universe accepted by the encoder.
//!
//! Native kinds are plain enum variants. Anything else enters through
//! [`Value::Custom`], a shared handle to a type implementing [`Custom`], which
//! can take part in encoding through the optional hook and capability methods
//! of that trait.

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, Timelike, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::Result;

#[derive(Debug, Clone)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i128),
    Float(f64),
    /// Fixed-point decimal, always emitted as a JSON string.
    Decimal(Decimal),
    Str(String),
    List(Vec<Value>),
    /// Key-value pairs in insertion order. Keys must resolve to text or a UUID.
    Map(Vec<(Value, Value)>),
    Uuid(Uuid),
    Temporal(Temporal),
    /// Byte blobs have no native encoding; they only get through a fallback
    /// or a wrapping [`Custom`] type.
    Bytes(Vec<u8>),
    Custom(Arc<dyn Custom>),
}

impl Value {
    pub fn custom<C: Custom + 'static>(value: C) -> Self {
        Value::Custom(Arc::new(value))
    }

    pub fn kind_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Decimal(_) => "decimal",
            Value::Str(_) => "str",
            Value::List(_) => "list",
            Value::Map(_) => "map",
            Value::Uuid(_) => "uuid",
            Value::Temporal(t) => t.kind_name(),
            Value::Bytes(_) => "bytes",
            Value::Custom(c) => c.type_name(),
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Looks up a text key in a map value.
    pub fn get(&self, key: &str) -> Option<&Value> {
        match self {
            Value::Map(entries) => entries
                .iter()
                .find(|(k, _)| k.as_str() == Some(key))
                .map(|(_, v)| v),
            _ => None,
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::Decimal(a), Value::Decimal(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::List(a), Value::List(b)) => a == b,
            (Value::Map(a), Value::Map(b)) => a == b,
            (Value::Uuid(a), Value::Uuid(b)) => a == b,
            (Value::Temporal(a), Value::Temporal(b)) => a == b,
            (Value::Bytes(a), Value::Bytes(b)) => a == b,
            (Value::Custom(a), Value::Custom(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

/// Calendar values, emitted as ISO-8601 strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Temporal {
    Date(NaiveDate),
    Time(NaiveTime),
    DateTime(NaiveDateTime),
    Zoned(DateTime<FixedOffset>),
}

impl Temporal {
    pub fn kind_name(&self) -> &'static str {
        match self {
            Temporal::Date(_) => "date",
            Temporal::Time(_) => "time",
            Temporal::DateTime(_) | Temporal::Zoned(_) => "datetime",
        }
    }

    /// Fractional seconds appear as six microsecond digits, and only when
    /// non-zero.
    pub fn to_iso8601(&self) -> String {
        match self {
            Temporal::Date(d) => d.format("%Y-%m-%d").to_string(),
            Temporal::Time(t) => {
                let mut out = t.format("%H:%M:%S").to_string();
                push_micros(&mut out, t.nanosecond());
                out
            }
            Temporal::DateTime(dt) => {
                let mut out = dt.format("%Y-%m-%dT%H:%M:%S").to_string();
                push_micros(&mut out, dt.nanosecond());
                out
            }
            Temporal::Zoned(dt) => {
                let mut out = dt.format("%Y-%m-%dT%H:%M:%S").to_string();
                push_micros(&mut out, dt.nanosecond());
                out.push_str(&dt.format("%:z").to_string());
                out
            }
        }
    }
}

fn push_micros(out: &mut String, nanos: u32) {
    // chrono folds leap seconds into nanos >= 1e9
    let micros = (nanos % 1_000_000_000) / 1_000;
    if micros != 0 {
        use core::fmt::Write as _;
        let _ = write!(out, ".{:06}", micros);
    }
}

/// Pre-formatted JSON returned by [`Custom::to_json`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawJson {
    /// Escaped like a string body (quotes excepted) before insertion.
    Text(String),
    /// Inserted verbatim once checked to be UTF-8.
    Bytes(Vec<u8>),
}

impl From<String> for RawJson {
    fn from(s: String) -> Self {
        RawJson::Text(s)
    }
}

impl From<&str> for RawJson {
    fn from(s: &str) -> Self {
        RawJson::Text(s.to_string())
    }
}

impl From<Vec<u8>> for RawJson {
    fn from(b: Vec<u8>) -> Self {
        RawJson::Bytes(b)
    }
}

/// Numeric view offered by [`Custom::as_number`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    Int(i128),
    Float(f64),
    Decimal(Decimal),
}

/// Extension point for values outside the native kinds.
///
/// Every method has a default meaning "not provided". The encoder tries, in
/// order: [`to_json`](Custom::to_json), [`substitute`](Custom::substitute), then
/// the capability probes `as_uuid`, `as_text`, `as_seq`, `as_map`, `as_number`
/// and `as_temporal`. A hook returning `Ok(None)` declines and encoding falls
/// through to the next step; an `Err` aborts the whole encode.
///
/// Mapping keys only consult `substitute`, `as_uuid` and `as_text`.
pub trait Custom: fmt::Debug + Send + Sync {
    fn type_name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }

    /// Already-formatted JSON. The implementor vouches that it is valid JSON.
    fn to_json(&self) -> Result<Option<RawJson>> {
        Ok(None)
    }

    /// A replacement value, encoded in place of `self`.
    fn substitute(&self) -> Result<Option<Value>> {
        Ok(None)
    }

    fn as_uuid(&self) -> Option<Uuid> {
        None
    }

    fn as_text(&self) -> Option<Cow<'_, str>> {
        None
    }

    /// Sequences and sets; emitted as a JSON array in the returned order.
    fn as_seq(&self) -> Option<Vec<Value>> {
        None
    }

    fn as_map(&self) -> Option<Vec<(Value, Value)>> {
        None
    }

    fn as_number(&self) -> Option<Number> {
        None
    }

    fn as_temporal(&self) -> Option<Temporal> {
        None
    }
}

macro_rules! from_integer {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Value {
                fn from(v: $t) -> Self {
                    Value::Int(v as i128)
                }
            }
        )*
    };
}

from_integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, usize);

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Value::Float(f64::from(v))
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<char> for Value {
    fn from(v: char) -> Self {
        Value::Str(v.to_string())
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Str(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Str(v)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(v: Vec<T>) -> Self {
        Value::List(v.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        match v {
            Some(v) => v.into(),
            None => Value::Null,
        }
    }
}

impl From<Uuid> for Value {
    fn from(v: Uuid) -> Self {
        Value::Uuid(v)
    }
}

impl From<Decimal> for Value {
    fn from(v: Decimal) -> Self {
        Value::Decimal(v)
    }
}

impl From<Temporal> for Value {
    fn from(v: Temporal) -> Self {
        Value::Temporal(v)
    }
}

impl From<NaiveDate> for Value {
    fn from(v: NaiveDate) -> Self {
        Value::Temporal(Temporal::Date(v))
    }
}

impl From<NaiveTime> for Value {
    fn from(v: NaiveTime) -> Self {
        Value::Temporal(Temporal::Time(v))
    }
}

impl From<NaiveDateTime> for Value {
    fn from(v: NaiveDateTime) -> Self {
        Value::Temporal(Temporal::DateTime(v))
    }
}

impl From<DateTime<FixedOffset>> for Value {
    fn from(v: DateTime<FixedOffset>) -> Self {
        Value::Temporal(Temporal::Zoned(v))
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(v: DateTime<Utc>) -> Self {
        Value::Temporal(Temporal::Zoned(v.fixed_offset()))
    }
}

impl From<serde_json::Value> for Value {
    fn from(v: serde_json::Value) -> Self {
        match v {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Value::Int(i as i128)
                } else if let Some(u) = n.as_u64() {
                    Value::Int(u as i128)
                } else {
                    Value::Float(n.as_f64().unwrap_or(f64::NAN))
                }
            }
            serde_json::Value::String(s) => Value::Str(s),
            serde_json::Value::Array(items) => {
                Value::List(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(map) => Value::Map(
                map.into_iter()
                    .map(|(k, v)| (Value::Str(k), Value::from(v)))
                    .collect(),
            ),
        }
    }
}
