use webjson::number::MAX_SAFE_INTEGER;
use webjson::{Error, Value, dumps};

#[test]
fn integers_up_to_two_pow_53_are_exact() {
    assert_eq!(MAX_SAFE_INTEGER, 1i128 << 53);
    assert_eq!(dumps(&Value::Int(MAX_SAFE_INTEGER)).unwrap(), "9007199254740992");
    assert_eq!(dumps(&Value::Int(-MAX_SAFE_INTEGER)).unwrap(), "-9007199254740992");
}

#[test]
fn integers_beyond_two_pow_53_are_rejected() {
    for n in [MAX_SAFE_INTEGER + 1, -MAX_SAFE_INTEGER - 1, i128::MAX, i128::MIN] {
        match dumps(&Value::Int(n)) {
            Err(Error::NumberOutOfRange(text)) => assert_eq!(text, n.to_string()),
            other => panic!("expected NumberOutOfRange for {}, got {:?}", n, other),
        }
    }
}

#[test]
fn out_of_range_inside_a_container_aborts_everything() {
    let v = Value::List(vec![Value::Int(1), Value::from(u64::MAX)]);
    assert!(matches!(dumps(&v), Err(Error::NumberOutOfRange(_))));
}

#[test]
fn non_finite_floats_are_rejected() {
    assert!(matches!(dumps(&Value::Float(f64::NAN)), Err(Error::InvalidNumber("NaN"))));
    assert!(matches!(
        dumps(&Value::Float(f64::INFINITY)),
        Err(Error::InvalidNumber("Infinity"))
    ));
    assert!(matches!(
        dumps(&Value::Float(f64::NEG_INFINITY)),
        Err(Error::InvalidNumber(_))
    ));
}

#[test]
fn error_messages_read_naturally() {
    let err = dumps(&Value::Float(f64::NAN)).unwrap_err();
    assert_eq!(err.to_string(), "NaN is not supported");
    let err = dumps(&Value::Int(MAX_SAFE_INTEGER + 1)).unwrap_err();
    assert_eq!(err.to_string(), "Number out of range: 9007199254740993");
}

#[test]
fn floats_use_shortest_roundtrip_form() {
    for f in [0.1, 1e300, -2.5e-8, 123456.789] {
        let out = dumps(&Value::Float(f)).unwrap();
        assert_eq!(out.parse::<f64>().unwrap(), f);
    }
}
