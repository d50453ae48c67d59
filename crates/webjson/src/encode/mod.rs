//! The encoding engine.
//!
//! Resolution order for every value:
//!
//! 1. the encoder's global hook, if one is installed;
//! 2. native variants (`Str`, `Bool`, `Int`, `Float`, `Null`, `List`, `Map`,
//!    `Uuid`, `Decimal`);
//! 3. [`Custom::to_json`](crate::Custom::to_json), then
//!    [`Custom::substitute`](crate::Custom::substitute);
//! 4. capability probes on custom values, and calendar values;
//! 5. the encoder's fallback, or [`Error::UnsupportedType`](crate::Error).
//!
//! Substitutes produced in steps 3 and 5 restart at step 1.

mod depth;
mod encoders;
pub mod primitives;
pub mod writer;

use core::fmt;
use std::io::Write;

use crate::Result;
use crate::encode::depth::Context;
use crate::encode::writer::JsonWriter;
use crate::options::Options;
use crate::value::Value;

/// Pre-processing applied to every value before dispatch. `None` keeps the
/// value as it is.
pub type EncodeHook = dyn Fn(&Value) -> Option<Value> + Send + Sync;

/// Last resort for values with no encoding. `None` means unsupported.
pub type Fallback = dyn Fn(&Value) -> Option<Value> + Send + Sync;

/// Reusable encoder. Holds configuration only; each call tracks its own depth,
/// so one instance can serve many threads.
///
/// ```
/// use webjson::{Encoder, Value};
///
/// let enc = Encoder::new().encode_hook(|v| match v {
///     Value::Int(n) => Some(Value::Str(format!("*{}", n))),
///     _ => None,
/// });
/// assert_eq!(enc.dumps(&Value::List(vec![Value::Int(1)])).unwrap(), r#"["*1"]"#);
/// ```
pub struct Encoder {
    options: Options,
    hook: Option<Box<EncodeHook>>,
    fallback: Option<Box<Fallback>>,
}

impl Encoder {
    pub fn new() -> Self {
        Self::with_options(Options::default())
    }

    pub fn with_options(options: Options) -> Self {
        Self {
            options,
            hook: None,
            fallback: None,
        }
    }

    pub fn encode_hook<F>(mut self, hook: F) -> Self
    where
        F: Fn(&Value) -> Option<Value> + Send + Sync + 'static,
    {
        self.hook = Some(Box::new(hook));
        self
    }

    /// Widens the supported types: return a substitute for values the encoder
    /// cannot handle, `None` for the rest.
    ///
    /// ```
    /// use webjson::{Encoder, Value};
    ///
    /// let enc = Encoder::new().fallback(|v| match v {
    ///     Value::Bytes(b) => Some(Value::Str(format!("{} bytes", b.len()))),
    ///     _ => None,
    /// });
    /// assert_eq!(enc.dumps(&Value::Bytes(vec![1, 2])).unwrap(), r#""2 bytes""#);
    /// ```
    pub fn fallback<F>(mut self, fallback: F) -> Self
    where
        F: Fn(&Value) -> Option<Value> + Send + Sync + 'static,
    {
        self.fallback = Some(Box::new(fallback));
        self
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    pub fn uses_hook(&self) -> bool {
        self.hook.is_some()
    }

    pub(crate) fn hook(&self) -> Option<&EncodeHook> {
        self.hook.as_deref()
    }

    pub(crate) fn fallback_for(&self, value: &Value) -> Option<Value> {
        self.fallback.as_ref().and_then(|f| f(value))
    }

    pub fn dumps(&self, value: &Value) -> Result<String> {
        self.dumps_with_depth(value, self.options.max_depth)
    }

    pub fn dumpb(&self, value: &Value) -> Result<Vec<u8>> {
        self.dumpb_with_depth(value, self.options.max_depth)
    }

    pub fn dumps_with_depth(&self, value: &Value, max_depth: usize) -> Result<String> {
        let mut w = JsonWriter::new();
        let mut cx = Context::new(max_depth);
        encoders::encode_value(self, value, &mut w, &mut cx)?;
        Ok(w.into_string())
    }

    /// Same text as [`dumps_with_depth`](Self::dumps_with_depth); it is ASCII,
    /// so the UTF-8 bytes are the ASCII bytes.
    pub fn dumpb_with_depth(&self, value: &Value, max_depth: usize) -> Result<Vec<u8>> {
        Ok(self.dumps_with_depth(value, max_depth)?.into_bytes())
    }

    pub fn encode_to_writer<W: Write>(&self, mut writer: W, value: &Value) -> Result<()> {
        let s = self.dumps(value)?;
        writer.write_all(s.as_bytes())?;
        Ok(())
    }
}

impl Default for Encoder {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Encoder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Encoder")
            .field("options", &self.options)
            .field("hook", &self.hook.is_some())
            .field("fallback", &self.fallback.is_some())
            .finish()
    }
}
