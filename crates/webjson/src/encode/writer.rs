use core::fmt::{Display, Write as _};

use rust_decimal::Decimal;

use crate::Result;
use crate::encode::primitives;
use crate::number;

/// Output buffer for one encode call.
pub struct JsonWriter {
    out: String,
}

impl JsonWriter {
    pub fn new() -> Self {
        Self { out: String::new() }
    }

    pub fn raw(&mut self, s: &str) {
        self.out.push_str(s);
    }

    pub fn byte(&mut self, b: u8) {
        debug_assert!(b.is_ascii());
        self.out.push(b as char);
    }

    pub fn null(&mut self) {
        self.out.push_str(primitives::format_null());
    }

    pub fn bool(&mut self, b: bool) {
        self.out.push_str(primitives::format_bool(b));
    }

    pub fn int(&mut self, n: i128) -> Result<()> {
        number::write_int(&mut self.out, n)
    }

    pub fn float(&mut self, f: f64) -> Result<()> {
        number::write_float(&mut self.out, f)
    }

    pub fn decimal(&mut self, d: &Decimal) {
        number::write_decimal(&mut self.out, d);
    }

    pub fn string(&mut self, s: &str) {
        primitives::escape_and_quote_into(&mut self.out, s);
    }

    pub fn string_unquoted(&mut self, s: &str) {
        primitives::escape_unquoted_into(&mut self.out, s);
    }

    /// Quotes a `Display` value whose text is known to need no escaping
    /// (UUIDs, ISO-8601 stamps).
    pub fn quoted_display<T: Display>(&mut self, value: T) {
        self.out.push('"');
        let _ = write!(self.out, "{}", value);
        self.out.push('"');
    }

    pub fn into_string(self) -> String {
        self.out
    }
}

impl Default for JsonWriter {
    fn default() -> Self {
        Self::new()
    }
}
