use num_traits::PrimInt;
use std::fmt::{self, Display, UpperHex, Write};

/// Append-only text accumulator owned by a single printing call.
#[derive(Debug, Default)]
pub struct Output {
    buffer: String,
}

impl Output {
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn push_str(&mut self, s: &str) {
        self.buffer.push_str(s);
    }

    pub fn push(&mut self, c: char) {
        self.buffer.push(c);
    }

    pub fn push_number<T: PrimInt + Display>(&mut self, value: T) {
        let _ = write!(self, "{value}");
    }

    pub fn push_hex<T: PrimInt + UpperHex>(&mut self, value: T) {
        let _ = write!(self, "{value:X}");
    }

    /// Writes `s` as a double-quoted literal. Quotes, backslashes and control characters are escaped, and every byte
    /// outside printable ASCII is written as `\xHH`.
    pub fn push_quoted(&mut self, s: &str) {
        self.buffer.push('"');

        for byte in s.bytes() {
            match byte {
                b'\\' => self.buffer.push_str("\\\\"),
                b'\t' => self.buffer.push_str("\\t"),
                b'\n' => self.buffer.push_str("\\n"),
                b'\r' => self.buffer.push_str("\\r"),
                b'"' => self.buffer.push_str("\\\""),
                b'\0' => self.buffer.push_str("\\0"),
                0x20..0x7F => self.buffer.push(char::from(byte)),
                _ => {
                    let _ = write!(self, "\\x{byte:02X}");
                }
            }
        }

        self.buffer.push('"');
    }

    pub fn into_string(self) -> String {
        self.buffer
    }
}

impl Write for Output {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.buffer.push_str(s);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::Output;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_push_numbers() {
        let mut output = Output::default();

        output.push_number(42_u64);
        output.push(' ');
        output.push_number(-7_i64);
        output.push(' ');
        output.push_hex(0x1a2b_u64);

        assert_eq!(output.into_string(), "42 -7 1A2B");
    }

    #[test]
    fn test_push_quoted() {
        #[track_caller]
        fn check(input: &str, expected: &str) {
            let mut output = Output::default();

            output.push_quoted(input);

            assert_eq!(output.into_string(), expected);
        }

        check("", r#""""#);
        check("abc", r#""abc""#);
        check("a\"b\\c", r#""a\"b\\c""#);
        check("\t\n\r\0", r#""\t\n\r\0""#);
        check("\x01\x7f", r#""\x01\x7F""#);
        check("é", r#""\xC3\xA9""#);
    }
}
