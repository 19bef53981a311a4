//! Delimiter-based wire format scanning.

use heapless::String;

const FIELD_SEPARATOR: u8 = b';';

/// Sequential field reader over a `;`-delimited payload.
///
/// At end of input every read yields an empty field and the cursor stays
/// put, so short payloads degrade to empty trailing fields instead of
/// errors.
pub struct WireReader<'a> {
    payload: &'a str,
    cursor: usize,
}

impl<'a> WireReader<'a> {
    pub const fn new(payload: &'a str) -> Self {
        Self { payload, cursor: 0 }
    }

    pub fn at_end(&self) -> bool {
        self.cursor >= self.payload.len()
    }

    /// Returns the next raw field and advances past its separator.
    pub fn next_field(&mut self) -> &'a str {
        let bytes = self.payload.as_bytes();
        let start = self.cursor;
        let mut end = start;
        while end < bytes.len() && bytes[end] != FIELD_SEPARATOR {
            end += 1;
        }

        self.cursor = if end < bytes.len() { end + 1 } else { end };
        &self.payload[start..end]
    }

    /// Copies the next field into `dest`, truncating at the last char
    /// boundary that fits.
    pub fn read_into<const N: usize>(&mut self, dest: &mut String<N>) {
        let field = self.next_field();
        dest.clear();
        for ch in field.chars() {
            if dest.push(ch).is_err() {
                break;
            }
        }
    }

    /// Parses the next field as an integer: optional leading whitespace and
    /// sign, then a digit run; anything after the digits is ignored and a
    /// digit-free field parses as 0.
    pub fn read_int(&mut self) -> i32 {
        parse_leading_int(self.next_field())
    }
}

fn parse_leading_int(field: &str) -> i32 {
    let bytes = field.as_bytes();
    let mut cursor = 0usize;
    while cursor < bytes.len() && bytes[cursor].is_ascii_whitespace() {
        cursor += 1;
    }

    let negative = match bytes.get(cursor) {
        Some(b'-') => {
            cursor += 1;
            true
        }
        Some(b'+') => {
            cursor += 1;
            false
        }
        _ => false,
    };

    let mut magnitude = 0u32;
    while cursor < bytes.len() && bytes[cursor].is_ascii_digit() {
        magnitude = magnitude
            .saturating_mul(10)
            .saturating_add((bytes[cursor] - b'0') as u32);
        cursor += 1;
    }

    let signed = if negative {
        -i64::from(magnitude)
    } else {
        i64::from(magnitude)
    };
    signed.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_fields_and_idles_at_end() {
        let mut reader = WireReader::new("12;Central;5;");
        assert_eq!(reader.next_field(), "12");
        assert_eq!(reader.next_field(), "Central");
        assert_eq!(reader.next_field(), "5");
        assert!(reader.at_end());
        assert_eq!(reader.next_field(), "");
        assert_eq!(reader.next_field(), "");
    }

    #[test]
    fn final_field_without_separator_is_returned() {
        let mut reader = WireReader::new("7;Depot");
        assert_eq!(reader.next_field(), "7");
        assert_eq!(reader.next_field(), "Depot");
        assert!(reader.at_end());
    }

    #[test]
    fn empty_fields_are_preserved() {
        let mut reader = WireReader::new(";;x;");
        assert_eq!(reader.next_field(), "");
        assert_eq!(reader.next_field(), "");
        assert_eq!(reader.next_field(), "x");
        assert!(reader.at_end());
    }

    #[test]
    fn read_into_truncates_at_char_boundary() {
        let mut reader = WireReader::new("Überlandlinie;next;");
        let mut dest: String<4> = String::new();
        reader.read_into(&mut dest);
        assert_eq!(dest.as_str(), "Übe");
        assert_eq!(reader.next_field(), "next");
    }

    #[test]
    fn read_into_clears_previous_content() {
        let mut reader = WireReader::new("a;b;");
        let mut dest: String<8> = String::new();
        reader.read_into(&mut dest);
        reader.read_into(&mut dest);
        assert_eq!(dest.as_str(), "b");
    }

    #[test]
    fn read_int_parses_leading_digits() {
        let mut reader = WireReader::new("42;-7; 13min;x9;;+5;99999999999;");
        assert_eq!(reader.read_int(), 42);
        assert_eq!(reader.read_int(), -7);
        assert_eq!(reader.read_int(), 13);
        assert_eq!(reader.read_int(), 0);
        assert_eq!(reader.read_int(), 0);
        assert_eq!(reader.read_int(), 5);
        assert_eq!(reader.read_int(), i32::MAX);
    }
}
