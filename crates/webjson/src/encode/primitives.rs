//! ASCII-only string escaping.

const BB: u8 = b'b'; // \x08
const TT: u8 = b't'; // \x09
const NN: u8 = b'n'; // \x0A
const FF: u8 = b'f'; // \x0C
const RR: u8 = b'r'; // \x0D
const QU: u8 = b'"'; // \x22
const BS: u8 = b'\\'; // \x5C
const UU: u8 = b'u'; // remaining controls, '&', '<', '>', DEL
const __: u8 = 0;

// A value of b'x' at index i means byte i is written as "\x"; b'u' means the
// long "\u00XX" form; 0 means the byte is copied through.
#[rustfmt::skip]
static ESCAPE: [u8; 128] = [
    // 0   1   2   3   4   5   6   7   8   9   A   B   C   D   E   F
    UU, UU, UU, UU, UU, UU, UU, UU, BB, TT, NN, UU, FF, RR, UU, UU, // 0
    UU, UU, UU, UU, UU, UU, UU, UU, UU, UU, UU, UU, UU, UU, UU, UU, // 1
    __, __, QU, __, __, __, UU, __, __, __, __, __, __, __, __, __, // 2
    __, __, __, __, __, __, __, __, __, __, __, __, UU, __, UU, __, // 3
    __, __, __, __, __, __, __, __, __, __, __, __, __, __, __, __, // 4
    __, __, __, __, __, __, __, __, __, __, __, __, BS, __, __, __, // 5
    __, __, __, __, __, __, __, __, __, __, __, __, __, __, __, __, // 6
    __, __, __, __, __, __, __, __, __, __, __, __, __, __, __, UU, // 7
];

static HEX: &[u8; 16] = b"0123456789abcdef";

fn push_unit(out: &mut String, unit: u16) {
    out.push('\\');
    out.push('u');
    for shift in [12u16, 8, 4, 0] {
        out.push(HEX[((unit >> shift) & 0xF) as usize] as char);
    }
}

fn escape_body(out: &mut String, s: &str, escape_quotes: bool) {
    let bytes = s.as_bytes();
    let mut start = 0;
    let mut i = 0;
    while i < bytes.len() {
        let byte = bytes[i];
        if byte < 0x80 {
            let escape = ESCAPE[byte as usize];
            if escape == __ || (escape == QU && !escape_quotes) {
                i += 1;
                continue;
            }
            out.push_str(&s[start..i]);
            if escape == UU {
                push_unit(out, u16::from(byte));
            } else {
                out.push('\\');
                out.push(escape as char);
            }
            i += 1;
        } else {
            out.push_str(&s[start..i]);
            let Some(ch) = s[i..].chars().next() else {
                break;
            };
            let mut units = [0u16; 2];
            for unit in ch.encode_utf16(&mut units) {
                push_unit(out, *unit);
            }
            i += ch.len_utf8();
        }
        start = i;
    }
    out.push_str(&s[start..]);
}

/// Appends `s` as a quoted JSON string literal made only of printable ASCII.
pub fn escape_and_quote_into(out: &mut String, s: &str) {
    out.reserve(s.len() + 2);
    out.push('"');
    escape_body(out, s, true);
    out.push('"');
}

pub fn escape_and_quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    escape_and_quote_into(&mut out, s);
    out
}

/// Same table as [`escape_and_quote_into`] but leaves `"` alone and adds no
/// delimiters; used for pre-formatted JSON text.
pub fn escape_unquoted_into(out: &mut String, s: &str) {
    out.reserve(s.len());
    escape_body(out, s, false);
}

pub fn format_bool(b: bool) -> &'static str {
    if b { "true" } else { "false" }
}

pub fn format_null() -> &'static str {
    "null"
}
