//! Row-wise value extraction helpers for polars frames.

use polars::prelude::AnyValue;

/// Converts an `AnyValue` to its display string. Nulls become empty strings.
pub fn any_to_string(value: AnyValue<'_>) -> String {
    match value {
        AnyValue::Null => String::new(),
        AnyValue::Int8(v) => v.to_string(),
        AnyValue::Int16(v) => v.to_string(),
        AnyValue::Int32(v) => v.to_string(),
        AnyValue::Int64(v) => v.to_string(),
        AnyValue::UInt8(v) => v.to_string(),
        AnyValue::UInt16(v) => v.to_string(),
        AnyValue::UInt32(v) => v.to_string(),
        AnyValue::UInt64(v) => v.to_string(),
        AnyValue::Float32(v) => format_numeric(f64::from(v)),
        AnyValue::Float64(v) => format_numeric(v),
        AnyValue::String(s) => s.to_string(),
        AnyValue::StringOwned(s) => s.to_string(),
        AnyValue::Boolean(b) => b.to_string(),
        other => other.to_string(),
    }
}

/// Converts an `AnyValue` to `f64` where the value is numeric.
///
/// Nulls and non-numeric values yield `None`.
pub fn any_to_f64(value: AnyValue<'_>) -> Option<f64> {
    match value {
        AnyValue::Int8(v) => Some(f64::from(v)),
        AnyValue::Int16(v) => Some(f64::from(v)),
        AnyValue::Int32(v) => Some(f64::from(v)),
        AnyValue::Int64(v) => Some(v as f64),
        AnyValue::UInt8(v) => Some(f64::from(v)),
        AnyValue::UInt16(v) => Some(f64::from(v)),
        AnyValue::UInt32(v) => Some(f64::from(v)),
        AnyValue::UInt64(v) => Some(v as f64),
        AnyValue::Float32(v) => Some(f64::from(v)),
        AnyValue::Float64(v) => Some(v),
        _ => None,
    }
}

/// Formats a floating-point number without spurious trailing zeros.
pub fn format_numeric(v: f64) -> String {
    format!("{v}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_becomes_empty_string() {
        assert_eq!(any_to_string(AnyValue::Null), "");
    }

    #[test]
    fn numeric_values_convert() {
        assert_eq!(any_to_f64(AnyValue::Int32(7)), Some(7.0));
        assert_eq!(any_to_f64(AnyValue::Float64(1.5)), Some(1.5));
        assert_eq!(any_to_f64(AnyValue::Null), None);
        assert_eq!(any_to_f64(AnyValue::String("x")), None);
    }

    #[test]
    fn floats_format_without_trailing_zeros() {
        assert_eq!(format_numeric(2.5), "2.5");
        assert_eq!(format_numeric(3.0), "3");
    }
}
