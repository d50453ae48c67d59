use std::str::FromStr;

use chrono::{NaiveDate, NaiveTime, TimeZone, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;
use webjson::{Encoder, Error, Value, dumpb, dumps};

fn u(unit: u16) -> String {
    format!("\\u{:04x}", unit)
}

fn map(entries: Vec<(&str, Value)>) -> Value {
    Value::Map(entries.into_iter().map(|(k, v)| (Value::from(k), v)).collect())
}

#[test]
fn scalars() -> Result<(), Box<dyn std::error::Error>> {
    assert_eq!(dumps(&Value::Null)?, "null");
    assert_eq!(dumps(&Value::Bool(true))?, "true");
    assert_eq!(dumps(&Value::Bool(false))?, "false");
    assert_eq!(dumps(&Value::Int(-42))?, "-42");
    assert_eq!(dumps(&Value::Float(1.5))?, "1.5");
    assert_eq!(dumps(&Value::from("foo"))?, r#""foo""#);
    Ok(())
}

#[test]
fn containers_are_compact() -> Result<(), Box<dyn std::error::Error>> {
    let v = Value::List(vec![
        Value::Int(1),
        Value::from("two"),
        Value::List(vec![]),
        Value::Map(vec![]),
        Value::Null,
    ]);
    assert_eq!(dumps(&v)?, r#"[1,"two",[],{},null]"#);
    Ok(())
}

#[test]
fn object_keeps_insertion_order() -> Result<(), Box<dyn std::error::Error>> {
    assert_eq!(dumps(&map(vec![("a", Value::from("b"))]))?, r#"{"a":"b"}"#);
    let v = map(vec![
        ("z", Value::Int(1)),
        ("a", Value::Int(2)),
        ("m", Value::List(vec![Value::Bool(true)])),
    ]);
    assert_eq!(dumps(&v)?, r#"{"z":1,"a":2,"m":[true]}"#);
    Ok(())
}

#[test]
fn uuid_values_and_keys() -> Result<(), Box<dyn std::error::Error>> {
    let id = Uuid::from_str("12345678-1234-5678-1234-567812345678")?;
    assert_eq!(dumps(&Value::Uuid(id))?, r#""12345678-1234-5678-1234-567812345678""#);
    let v = Value::Map(vec![(Value::Uuid(id), Value::Int(1))]);
    assert_eq!(dumps(&v)?, r#"{"12345678-1234-5678-1234-567812345678":1}"#);
    Ok(())
}

#[test]
fn decimals_are_strings() -> Result<(), Box<dyn std::error::Error>> {
    let d = Decimal::from_str("-12.3400")?;
    assert_eq!(dumps(&Value::Decimal(d))?, r#""-12.3400""#);
    Ok(())
}

#[test]
fn calendar_values_use_iso8601() -> Result<(), Box<dyn std::error::Error>> {
    let date = NaiveDate::from_ymd_opt(2024, 5, 1).ok_or("date")?;
    assert_eq!(dumps(&Value::from(date))?, r#""2024-05-01""#);

    let time = NaiveTime::from_hms_micro_opt(8, 5, 3, 250).ok_or("time")?;
    assert_eq!(dumps(&Value::from(time))?, r#""08:05:03.000250""#);

    let ts = Utc.with_ymd_and_hms(2024, 5, 1, 12, 34, 56).unwrap();
    assert_eq!(dumps(&Value::from(ts))?, r#""2024-05-01T12:34:56+00:00""#);
    Ok(())
}

#[test]
fn forward_slash_is_not_escaped() -> Result<(), Box<dyn std::error::Error>> {
    assert_eq!(dumps(&Value::from("foo/bar"))?, r#""foo/bar""#);
    Ok(())
}

#[test]
fn html_and_control_characters_are_escaped() -> Result<(), Box<dyn std::error::Error>> {
    let out = dumps(&Value::from("<script>a & b\n</script>"))?;
    let expected = format!(
        "\"{}script{}a {} b\\n{}/script{}\"",
        u(0x3c),
        u(0x3e),
        u(0x26),
        u(0x3c),
        u(0x3e)
    );
    assert_eq!(out, expected);
    Ok(())
}

#[test]
fn non_bmp_characters_become_surrogate_pairs() -> Result<(), Box<dyn std::error::Error>> {
    let out = dumps(&Value::from("\u{1d11e}"))?;
    assert_eq!(out, format!("\"{}{}\"", u(0xd834), u(0xdd1e)));
    let back: String = serde_json::from_str(&out)?;
    assert_eq!(back, "\u{1d11e}");
    Ok(())
}

#[test]
fn keys_are_escaped_like_values() -> Result<(), Box<dyn std::error::Error>> {
    let v = map(vec![("\u{e9}\"", Value::Null)]);
    assert_eq!(dumps(&v)?, format!("{{\"{}\\\"\":null}}", u(0xe9)));
    Ok(())
}

#[test]
fn non_text_keys_are_invalid() {
    let v = Value::Map(vec![(Value::Int(1), Value::from("a"))]);
    match dumps(&v) {
        Err(Error::InvalidKey { kind, .. }) => assert_eq!(kind, "int"),
        other => panic!("expected InvalidKey, got {:?}", other),
    }
}

#[test]
fn bytes_are_never_auto_encoded() {
    let v = Value::List(vec![Value::Bytes(vec![1, 2, 3])]);
    match dumps(&v) {
        Err(Error::UnsupportedType { kind, .. }) => assert_eq!(kind, "bytes"),
        other => panic!("expected UnsupportedType, got {:?}", other),
    }
}

#[test]
fn dumpb_matches_dumps() -> Result<(), Box<dyn std::error::Error>> {
    let v = map(vec![
        ("text", Value::from("\u{441}\u{43b}\u{43e}\u{432}\u{43e} <&>")),
        ("n", Value::Float(0.25)),
    ]);
    let text = dumps(&v)?;
    assert_eq!(dumpb(&v)?, text.as_bytes());
    assert!(text.is_ascii());
    Ok(())
}

#[test]
fn encode_to_writer_writes_the_same_text() -> Result<(), Box<dyn std::error::Error>> {
    let v = Value::List(vec![Value::from("x"), Value::Int(3)]);
    let mut buf = Vec::new();
    webjson::encode_to_writer(&mut buf, &v, &webjson::Options::default())?;
    assert_eq!(buf, br#"["x",3]"#);
    Ok(())
}

#[test]
fn one_encoder_serves_many_threads() -> Result<(), Box<dyn std::error::Error>> {
    let enc = Encoder::new();
    let deep = (0..60).fold(Value::Int(0), |acc, _| Value::List(vec![acc]));
    std::thread::scope(|s| {
        for _ in 0..4 {
            let enc = &enc;
            let deep = &deep;
            s.spawn(move || {
                for _ in 0..50 {
                    assert!(enc.dumps(deep).is_ok());
                }
            });
        }
    });
    Ok(())
}
