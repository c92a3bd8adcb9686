use std::io;

use serde::Serialize;
use serde_json::ser::{Formatter, Serializer};

use crate::outline::Declaration;

/// Compact output that escapes `<`, `>`, `&`, U+2028 and U+2029 inside
/// strings, so the JSON is byte-for-byte what editor integrations expect.
struct HtmlSafeFormatter;

impl Formatter for HtmlSafeFormatter {
    fn write_string_fragment<W>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        let mut start = 0;
        for (i, ch) in fragment.char_indices() {
            let escaped = match ch {
                '<' => "\\u003c",
                '>' => "\\u003e",
                '&' => "\\u0026",
                '\u{2028}' => "\\u2028",
                '\u{2029}' => "\\u2029",
                _ => continue,
            };
            writer.write_all(fragment[start..i].as_bytes())?;
            writer.write_all(escaped.as_bytes())?;
            start = i + ch.len_utf8();
        }
        writer.write_all(fragment[start..].as_bytes())
    }
}

pub fn to_json(declarations: &[Declaration]) -> serde_json::Result<String> {
    let mut buf = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut buf, HtmlSafeFormatter);
    declarations.serialize(&mut serializer)?;
    String::from_utf8(buf).map_err(serde::ser::Error::custom)
}
