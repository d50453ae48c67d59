#![no_main]
use libfuzzer_sys::{arbitrary, fuzz_target};
use arbitrary::Arbitrary;
use webjson::{Options, Value, encode_to_string};

const MAX_DEPTH: usize = 8;
const MAX_ARRAY_SIZE: usize = 20;
const MAX_OBJECT_SIZE: usize = 20;

#[derive(Arbitrary, Debug)]
struct FuzzValue {
    choice: u8,
}

impl FuzzValue {
    fn to_value(&self, u: &mut arbitrary::Unstructured, depth: usize) -> arbitrary::Result<Value> {
        if depth >= MAX_DEPTH {
            return Ok(Value::Null);
        }

        Ok(match self.choice % 12 {
            0 => Value::Null,
            1 => Value::Bool(u.arbitrary()?),
            2 => Value::Int(u.arbitrary::<i64>()?.into()),
            3 => Value::Float(u.arbitrary()?),
            4 => Value::Str(u.arbitrary()?),
            5 => Value::Uuid(uuid::Uuid::from_bytes(u.arbitrary()?)),
            6 => Value::Bytes(u.arbitrary()?),
            7..=9 => {
                let size = u.int_in_range(0..=MAX_ARRAY_SIZE)?;
                let mut arr = Vec::with_capacity(size);
                for _ in 0..size {
                    let fv: FuzzValue = u.arbitrary()?;
                    arr.push(fv.to_value(u, depth + 1)?);
                }
                Value::List(arr)
            }
            _ => {
                let size = u.int_in_range(0..=MAX_OBJECT_SIZE)?;
                let mut entries = Vec::with_capacity(size);
                for _ in 0..size {
                    let key: FuzzValue = u.arbitrary()?;
                    let fv: FuzzValue = u.arbitrary()?;
                    entries.push((key.to_value(u, MAX_DEPTH - 1)?, fv.to_value(u, depth + 1)?));
                }
                Value::Map(entries)
            }
        })
    }
}

// Any outcome is fine as long as successful output is printable ASCII JSON.
fuzz_target!(|data: &[u8]| {
    let mut u = arbitrary::Unstructured::new(data);

    if let Ok(fv) = u.arbitrary::<FuzzValue>() {
        if let Ok(value) = fv.to_value(&mut u, 0) {
            let opts = Options::default().with_max_depth(MAX_DEPTH / 2);
            if let Ok(out) = encode_to_string(&value, &opts) {
                assert!(out.bytes().all(|b| (0x20..=0x7e).contains(&b)));
                if let Err(e) = serde_json::from_str::<serde_json::Value>(&out) {
                    panic!("invalid JSON produced: {}\n{}", e, out);
                }
            }
        }
    }
});
