use tracing::trace;

use crate::{Error, Result};
use crate::encode::Encoder;
use crate::encode::depth::Context;
use crate::encode::writer::JsonWriter;
use crate::value::{Custom, Number, RawJson, Value};

/// Entry point for every value, nested ones included.
pub(crate) fn encode_value(
    enc: &Encoder,
    value: &Value,
    w: &mut JsonWriter,
    cx: &mut Context,
) -> Result<()> {
    if let Some(hook) = enc.hook() {
        if let Some(replaced) = hook(value) {
            return dispatch(enc, &replaced, w, cx);
        }
    }
    dispatch(enc, value, w, cx)
}

fn dispatch(enc: &Encoder, value: &Value, w: &mut JsonWriter, cx: &mut Context) -> Result<()> {
    match value {
        Value::Str(s) => w.string(s),
        Value::Bool(b) => w.bool(*b),
        Value::Int(n) => w.int(*n)?,
        Value::Float(f) => w.float(*f)?,
        Value::Null => w.null(),
        Value::List(items) => encode_seq(enc, items, w, cx)?,
        Value::Map(entries) => encode_map(enc, entries, w, cx)?,
        Value::Uuid(u) => w.quoted_display(u.hyphenated()),
        Value::Decimal(d) => w.decimal(d),
        Value::Custom(custom) => encode_custom(enc, value, custom.as_ref(), w, cx)?,
        Value::Temporal(t) => w.quoted_display(t.to_iso8601()),
        Value::Bytes(_) => encode_fallback(enc, value, w, cx)?,
    }
    Ok(())
}

fn encode_custom(
    enc: &Encoder,
    value: &Value,
    custom: &dyn Custom,
    w: &mut JsonWriter,
    cx: &mut Context,
) -> Result<()> {
    if let Some(raw) = custom.to_json()? {
        return write_raw(w, raw);
    }
    if let Some(sub) = custom.substitute()? {
        return cx.substituted(|cx| encode_value(enc, &sub, w, cx));
    }

    if let Some(uuid) = custom.as_uuid() {
        w.quoted_display(uuid.hyphenated());
        return Ok(());
    }
    if let Some(text) = custom.as_text() {
        w.string(&text);
        return Ok(());
    }
    if let Some(items) = custom.as_seq() {
        return encode_seq(enc, &items, w, cx);
    }
    if let Some(entries) = custom.as_map() {
        return encode_map(enc, &entries, w, cx);
    }
    if let Some(number) = custom.as_number() {
        return match number {
            Number::Int(n) => w.int(n),
            Number::Float(f) => w.float(f),
            Number::Decimal(d) => {
                w.decimal(&d);
                Ok(())
            }
        };
    }
    if let Some(t) = custom.as_temporal() {
        w.quoted_display(t.to_iso8601());
        return Ok(());
    }

    encode_fallback(enc, value, w, cx)
}

fn write_raw(w: &mut JsonWriter, raw: RawJson) -> Result<()> {
    match raw {
        RawJson::Text(text) => w.string_unquoted(&text),
        RawJson::Bytes(bytes) => w.raw(&String::from_utf8(bytes)?),
    }
    Ok(())
}

fn encode_fallback(
    enc: &Encoder,
    value: &Value,
    w: &mut JsonWriter,
    cx: &mut Context,
) -> Result<()> {
    trace!(kind = value.kind_name(), "no native encoding, consulting fallback");
    match enc.fallback_for(value) {
        Some(sub) => cx.substituted(|cx| encode_value(enc, &sub, w, cx)),
        None => Err(Error::unsupported(value)),
    }
}

fn encode_seq(enc: &Encoder, items: &[Value], w: &mut JsonWriter, cx: &mut Context) -> Result<()> {
    cx.nested(|cx| {
        w.byte(b'[');
        for (i, item) in items.iter().enumerate() {
            if i > 0 {
                w.byte(b',');
            }
            encode_value(enc, item, w, cx)?;
        }
        w.byte(b']');
        Ok(())
    })
}

fn encode_map(
    enc: &Encoder,
    entries: &[(Value, Value)],
    w: &mut JsonWriter,
    cx: &mut Context,
) -> Result<()> {
    cx.nested(|cx| {
        w.byte(b'{');
        for (i, (key, value)) in entries.iter().enumerate() {
            if i > 0 {
                w.byte(b',');
            }
            encode_key(enc, key, w, cx)?;
            w.byte(b':');
            encode_value(enc, value, w, cx)?;
        }
        w.byte(b'}');
        Ok(())
    })
}

/// Keys always end up as escaped strings: the global hook and `to_json` are
/// never consulted here.
fn encode_key(enc: &Encoder, key: &Value, w: &mut JsonWriter, cx: &mut Context) -> Result<()> {
    match key {
        Value::Str(s) => {
            w.string(s);
            Ok(())
        }
        Value::Uuid(u) => {
            w.quoted_display(u.hyphenated());
            Ok(())
        }
        Value::Custom(custom) => {
            if let Some(sub) = custom.substitute()? {
                return cx.substituted(|cx| encode_key(enc, &sub, w, cx));
            }
            if let Some(uuid) = custom.as_uuid() {
                w.quoted_display(uuid.hyphenated());
                return Ok(());
            }
            if let Some(text) = custom.as_text() {
                w.string(&text);
                return Ok(());
            }
            key_fallback(enc, key, w, cx)
        }
        _ => key_fallback(enc, key, w, cx),
    }
}

fn key_fallback(enc: &Encoder, key: &Value, w: &mut JsonWriter, cx: &mut Context) -> Result<()> {
    trace!(kind = key.kind_name(), "non-text key, consulting fallback");
    match enc.fallback_for(key) {
        Some(sub) => cx.substituted(|cx| encode_key(enc, &sub, w, cx)),
        None => Err(Error::invalid_key(key)),
    }
}
