//! Value rendering for the metadata encoder.
//!
//! Dispatches on the value kind and produces exact text for each. The
//! numeric kinds are the reason this encoder is hand-built: routing
//! arbitrary-precision numbers through a general-purpose encoder rounds
//! them through f64, losing digits or falling back to exponent
//! notation.

use bigdecimal::BigDecimal;

use crate::codec::primitives::JsonWriter;
use crate::model::AttributeValue;

/// Writes a value as JSON text.
///
/// Strings are quoted and escaped; every numeric kind is written as
/// unquoted base-10 text that parses back to exactly the same number.
pub fn write_value(writer: &mut JsonWriter, value: &AttributeValue) {
    match value {
        AttributeValue::String(s) => writer.write_json_string(s),
        AttributeValue::Int64(v) => writer.write_i64(*v),
        AttributeValue::Uint64(v) => writer.write_u64(*v),
        AttributeValue::BigInt(v) => writer.write_bytes(v.to_str_radix(10).as_bytes()),
        AttributeValue::Decimal(v) => write_decimal(writer, v),
    }
}

/// Writes an arbitrary-precision decimal in fixed-point notation.
///
/// Trailing zeros are stripped first so the output is the shortest
/// text that round-trips. Exponent notation is never produced; the
/// digits are expanded around an explicit decimal point.
fn write_decimal(writer: &mut JsonWriter, value: &BigDecimal) {
    let (digits, scale) = value.normalized().into_bigint_and_exponent();
    let repr = digits.to_str_radix(10);
    let (sign, digits) = match repr.strip_prefix('-') {
        Some(magnitude) => ("-", magnitude),
        None => ("", repr.as_str()),
    };

    if digits == "0" {
        writer.write_byte(b'0');
        return;
    }

    writer.write_bytes(sign.as_bytes());
    if scale <= 0 {
        // Integral value: digits followed by -scale zeros.
        writer.write_bytes(digits.as_bytes());
        for _ in 0..-scale {
            writer.write_byte(b'0');
        }
    } else if digits.len() as i64 > scale {
        let split = digits.len() - scale as usize;
        writer.write_bytes(digits[..split].as_bytes());
        writer.write_byte(b'.');
        writer.write_bytes(digits[split..].as_bytes());
    } else {
        // Pure fraction: zero-pad between the point and the digits.
        writer.write_bytes(b"0.");
        for _ in digits.len() as i64..scale {
            writer.write_byte(b'0');
        }
        writer.write_bytes(digits.as_bytes());
    }
}
