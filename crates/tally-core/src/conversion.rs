//! Decimal to binary / hexadecimal conversion by repeated division.

use std::num::IntErrorKind;

use tally_ingest::{LabelStyle, ParsedLine};
use tally_model::ConversionRecord;

use crate::collector::Aggregator;

const DIGITS: &[u8; 16] = b"0123456789ABCDEF";

/// Target numeral system.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Radix {
    Binary,
    Hexadecimal,
}

impl Radix {
    pub fn base(self) -> u64 {
        match self {
            Radix::Binary => 2,
            Radix::Hexadecimal => 16,
        }
    }
}

/// Writes `value` in `radix` without prefix, most significant digit first.
///
/// Hexadecimal digits are uppercase. Negative values are written as `-`
/// followed by the digits of their magnitude.
pub fn to_radix(value: i64, radix: Radix) -> String {
    if value == 0 {
        return "0".to_string();
    }
    let base = radix.base();
    let mut magnitude = value.unsigned_abs();
    let mut digits = Vec::new();
    while magnitude > 0 {
        digits.push(char::from(DIGITS[(magnitude % base) as usize]));
        magnitude /= base;
    }
    if value < 0 {
        digits.push('-');
    }
    digits.iter().rev().collect()
}

pub fn decimal_to_binary(value: i64) -> String {
    to_radix(value, Radix::Binary)
}

pub fn decimal_to_hexadecimal(value: i64) -> String {
    to_radix(value, Radix::Hexadecimal)
}

pub fn convert(line_number: usize, value: i64) -> ConversionRecord {
    ConversionRecord {
        line_number,
        value,
        binary: decimal_to_binary(value),
        hexadecimal: decimal_to_hexadecimal(value),
    }
}

/// Parses one line as a signed 64-bit integer.
pub fn parse_integer(line: &str) -> Result<i64, String> {
    line.parse::<i64>().map_err(|e| match e.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
            "integer out of range".to_string()
        }
        _ => "not an integer".to_string(),
    })
}

/// Aggregator behind `convert-numbers`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConversionAggregator;

impl Aggregator for ConversionAggregator {
    type Value = i64;
    type Output = Vec<ConversionRecord>;

    fn name(&self) -> &'static str {
        "conversion"
    }

    fn label_style(&self) -> LabelStyle {
        LabelStyle::Stem
    }

    fn parse_line(&self, line: &str) -> Result<i64, String> {
        parse_integer(line)
    }

    fn aggregate(&self, lines: Vec<ParsedLine<i64>>) -> Vec<ConversionRecord> {
        lines
            .into_iter()
            .map(|line| convert(line.line_number, line.value))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero() {
        assert_eq!(decimal_to_binary(0), "0");
        assert_eq!(decimal_to_hexadecimal(0), "0");
    }

    #[test]
    fn test_known_values() {
        assert_eq!(decimal_to_binary(10), "1010");
        assert_eq!(decimal_to_hexadecimal(10), "A");
        assert_eq!(decimal_to_binary(255), "11111111");
        assert_eq!(decimal_to_hexadecimal(255), "FF");
        assert_eq!(decimal_to_hexadecimal(4096), "1000");
        assert_eq!(decimal_to_hexadecimal(48879), "BEEF");
    }

    #[test]
    fn test_negative_values_are_sign_prefixed() {
        assert_eq!(decimal_to_binary(-10), "-1010");
        assert_eq!(decimal_to_hexadecimal(-10), "-A");
        assert_eq!(decimal_to_binary(-1), "-1");
    }

    #[test]
    fn test_extremes() {
        assert_eq!(decimal_to_hexadecimal(i64::MAX), "7FFFFFFFFFFFFFFF");
        assert_eq!(decimal_to_hexadecimal(i64::MIN), "-8000000000000000");
        assert_eq!(decimal_to_binary(i64::MIN).len(), 65);
    }

    #[test]
    fn test_convert_record() {
        let record = convert(2, 255);
        assert_eq!(
            record,
            ConversionRecord {
                line_number: 2,
                value: 255,
                binary: "11111111".to_string(),
                hexadecimal: "FF".to_string(),
            }
        );
    }

    #[test]
    fn test_parse_integer() {
        assert_eq!(parse_integer("42"), Ok(42));
        assert_eq!(parse_integer("-7"), Ok(-7));
        assert_eq!(parse_integer("+7"), Ok(7));
        assert_eq!(parse_integer("abc"), Err("not an integer".to_string()));
        assert_eq!(parse_integer("3.5"), Err("not an integer".to_string()));
        assert_eq!(parse_integer(""), Err("not an integer".to_string()));
        assert_eq!(
            parse_integer("99999999999999999999"),
            Err("integer out of range".to_string())
        );
    }
}
