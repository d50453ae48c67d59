use core::fmt::Write as _;

use rust_decimal::Decimal;

use crate::{Error, Result};

/// Largest integer magnitude a double-based JSON consumer holds exactly (2^53).
pub const MAX_SAFE_INTEGER: i128 = 9_007_199_254_740_992;

pub(crate) fn write_int(out: &mut String, value: i128) -> Result<()> {
    if value.unsigned_abs() > MAX_SAFE_INTEGER as u128 {
        return Err(Error::NumberOutOfRange(value.to_string()));
    }
    let _ = write!(out, "{}", value);
    Ok(())
}

/// Shortest decimal form that parses back to the same `f64`.
pub(crate) fn write_float(out: &mut String, value: f64) -> Result<()> {
    if value.is_nan() {
        return Err(Error::InvalidNumber("NaN"));
    }
    if value.is_infinite() {
        return Err(Error::InvalidNumber("Infinity"));
    }
    let mut buf = ryu::Buffer::new();
    out.push_str(buf.format_finite(value));
    Ok(())
}

/// Decimals keep their exact digits by travelling as strings.
pub(crate) fn write_decimal(out: &mut String, value: &Decimal) {
    out.push('"');
    let _ = write!(out, "{}", value);
    out.push('"');
}
