//! Primitive JSON byte production for the metadata encoder.
//!
//! Implements the output buffer, string escaping, and object-member
//! helpers the encoders above it are built from.

const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

/// Writer for producing JSON bytes.
///
/// Wraps a growable byte buffer. Capacity passed at construction is a
/// hint only; the buffer grows transparently and never truncates.
#[derive(Debug, Clone, Default)]
pub struct JsonWriter {
    buf: Vec<u8>,
}

impl JsonWriter {
    /// Creates a new writer.
    pub fn new() -> Self {
        Self { buf: Vec::new() }
    }

    /// Creates a new writer with a capacity hint.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: Vec::with_capacity(capacity),
        }
    }

    /// Returns the written bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }

    /// Returns a reference to the written bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Returns the number of bytes written.
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Returns true if no bytes have been written.
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Writes a single byte.
    #[inline]
    pub fn write_byte(&mut self, byte: u8) {
        self.buf.push(byte);
    }

    /// Writes raw bytes.
    #[inline]
    pub fn write_bytes(&mut self, bytes: &[u8]) {
        self.buf.extend_from_slice(bytes);
    }

    /// Writes a quoted, escaped JSON string.
    ///
    /// `"`, `\`, and control characters are escaped, and `<`, `>`, `&`
    /// become `\u003c`, `\u003e`, `\u0026` so values holding inline
    /// markup (e.g. SVG image data) stay safe to embed. U+2028 and
    /// U+2029 are escaped for JavaScript consumers. Everything else is
    /// copied verbatim as UTF-8.
    pub fn write_json_string(&mut self, s: &str) {
        self.buf.push(b'"');
        let bytes = s.as_bytes();
        let mut start = 0;
        for (i, c) in s.char_indices() {
            if !needs_escape(c) {
                continue;
            }
            self.buf.extend_from_slice(&bytes[start..i]);
            match c {
                '"' => self.buf.extend_from_slice(br#"\""#),
                '\\' => self.buf.extend_from_slice(br"\\"),
                '\n' => self.buf.extend_from_slice(br"\n"),
                '\r' => self.buf.extend_from_slice(br"\r"),
                '\t' => self.buf.extend_from_slice(br"\t"),
                '\u{2028}' => self.buf.extend_from_slice(br"\u2028"),
                '\u{2029}' => self.buf.extend_from_slice(br"\u2029"),
                _ => {
                    // Remaining escapes are single-byte: the other
                    // control characters plus '<', '>', '&'.
                    let byte = c as u8;
                    self.buf.extend_from_slice(br"\u00");
                    self.buf.push(HEX_DIGITS[(byte >> 4) as usize]);
                    self.buf.push(HEX_DIGITS[(byte & 0x0F) as usize]);
                }
            }
            start = i + c.len_utf8();
        }
        self.buf.extend_from_slice(&bytes[start..]);
        self.buf.push(b'"');
    }

    /// Writes `"name":` for an object member.
    pub fn write_member_name(&mut self, name: &str) {
        self.write_json_string(name);
        self.buf.push(b':');
    }

    /// Writes a complete `"name":"value"` string member, both parts
    /// escaped.
    pub fn write_string_member(&mut self, name: &str, value: &str) {
        self.write_member_name(name);
        self.write_json_string(value);
    }

    /// Writes a signed 64-bit integer as unquoted base-10 digits.
    pub fn write_i64(&mut self, value: i64) {
        self.buf.extend_from_slice(value.to_string().as_bytes());
    }

    /// Writes an unsigned 64-bit integer as unquoted base-10 digits.
    pub fn write_u64(&mut self, value: u64) {
        self.buf.extend_from_slice(value.to_string().as_bytes());
    }

    /// Writes the literal `null` token.
    pub fn write_null(&mut self) {
        self.buf.extend_from_slice(b"null");
    }
}

fn needs_escape(c: char) -> bool {
    matches!(c, '"' | '\\' | '<' | '>' | '&' | '\u{2028}' | '\u{2029}') || (c as u32) < 0x20
}

#[cfg(test)]
mod tests {
    use super::*;

    fn json_string(s: &str) -> String {
        let mut writer = JsonWriter::new();
        writer.write_json_string(s);
        String::from_utf8(writer.into_bytes()).unwrap()
    }

    #[test]
    fn test_plain_strings_pass_through() {
        assert_eq!(json_string(""), r#""""#);
        assert_eq!(json_string("hello"), r#""hello""#);
        assert_eq!(json_string("unicode: \u{1F600}"), "\"unicode: \u{1F600}\"");
    }

    #[test]
    fn test_quote_and_backslash_escapes() {
        assert_eq!(json_string("say \"hi\""), r#""say \"hi\"""#);
        assert_eq!(json_string("a\\b"), r#""a\\b""#);
    }

    #[test]
    fn test_control_character_escapes() {
        assert_eq!(json_string("a\nb"), r#""a\nb""#);
        assert_eq!(json_string("a\rb"), r#""a\rb""#);
        assert_eq!(json_string("a\tb"), r#""a\tb""#);
        assert_eq!(json_string("a\u{0}b"), r#""a\u0000b""#);
        assert_eq!(json_string("a\u{1f}b"), r#""a\u001fb""#);
    }

    #[test]
    fn test_markup_escapes() {
        assert_eq!(
            json_string("<svg x=\"0\" y=\"0\"></svg>"),
            r#""\u003csvg x=\"0\" y=\"0\"\u003e\u003c/svg\u003e""#
        );
        assert_eq!(json_string("a&b"), r#""a\u0026b""#);
    }

    #[test]
    fn test_line_separator_escapes() {
        assert_eq!(json_string("a\u{2028}b"), r#""a\u2028b""#);
        assert_eq!(json_string("a\u{2029}b"), r#""a\u2029b""#);
    }

    #[test]
    fn test_escaped_output_parses_back() {
        let inputs = [
            "plain",
            "with \"quotes\" and \\slashes\\",
            "<svg onload=\"x&y\">\n\t</svg>",
            "mixed \u{2028} unicode \u{1F600}",
        ];
        for input in inputs {
            let encoded = json_string(input);
            let decoded: String = serde_json::from_str(&encoded).unwrap();
            assert_eq!(decoded, input, "failed for {input:?}");
        }
    }

    #[test]
    fn test_string_member() {
        let mut writer = JsonWriter::new();
        writer.write_string_member("name", "value");
        assert_eq!(writer.as_bytes(), br#""name":"value""#);
    }

    #[test]
    fn test_integer_writes() {
        let mut writer = JsonWriter::new();
        writer.write_i64(i64::MIN);
        writer.write_byte(b' ');
        writer.write_i64(-1);
        writer.write_byte(b' ');
        writer.write_u64(u64::MAX);
        assert_eq!(
            writer.as_bytes(),
            b"-9223372036854775808 -1 18446744073709551615"
        );
    }

    #[test]
    fn test_capacity_hint_grows() {
        let mut writer = JsonWriter::with_capacity(4);
        let long = "x".repeat(1024);
        writer.write_json_string(&long);
        assert_eq!(writer.len(), 1026);
    }
}
