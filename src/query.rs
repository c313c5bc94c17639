//! Query string codec.

use crate::captures::{Captures, Key};

/// Decodes `+` as a space and `%XX` escapes as bytes.
///
/// Malformed escapes are kept as they are. Bytes that do not form valid
/// UTF-8 are replaced with `U+FFFD`.
pub fn decode(s: &str) -> String {
    let s = s.replace('+', " ");
    let bytes = urlencoding::decode_binary(s.as_bytes());
    String::from_utf8_lossy(&bytes).into_owned()
}

/// Parses `a=1&b=2&a=3` into query-keyed captures.
///
/// A repeated key collects its values into a list, in order of appearance.
pub fn parse(s: &str) -> Captures {
    let mut out = Captures::new();
    for entry in s.split('&').filter(|e| !e.is_empty()) {
        let (key, value) = match entry.find('=') {
            Some(i) => (&entry[..i], &entry[i + 1..]),
            None => (entry, ""),
        };
        out.push(Key::Query(decode(key)), decode(value));
    }
    out
}

/// Writes captures as `key=value` pairs joined by `&`. Values are not encoded.
pub fn serialize(params: &Captures) -> String {
    let mut out = String::new();
    for (key, value) in params.iter() {
        for v in value.as_slice() {
            if !out.is_empty() {
                out.push('&');
            }
            out.push_str(key.as_str());
            out.push('=');
            out.push_str(v);
        }
    }
    out
}
