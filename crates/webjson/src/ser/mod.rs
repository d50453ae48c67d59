//! Serde bridge: any `T: Serialize` becomes a [`Value`](crate::Value) first,
//! then goes through the regular encoder.

use serde::Serialize;

use crate::{Encoder, Options, Result};

mod value_builder;

pub use value_builder::{to_value, ValueSerializer};

pub fn to_string<T: Serialize + ?Sized>(value: &T, options: &Options) -> Result<String> {
    let v = to_value(value)?;
    Encoder::with_options(*options).dumps(&v)
}

pub fn to_vec<T: Serialize + ?Sized>(value: &T, options: &Options) -> Result<Vec<u8>> {
    Ok(to_string(value, options)?.into_bytes())
}

pub fn to_writer<W: std::io::Write, T: Serialize + ?Sized>(
    mut writer: W,
    value: &T,
    options: &Options,
) -> Result<()> {
    let s = to_string(value, options)?;
    std::io::Write::write_all(&mut writer, s.as_bytes())?;
    Ok(())
}
