//! Lenient numeric deserialization
//!
//! Scenario data arrives from hand-edited forms and older saves, so a
//! numeric leaf may be a number, a numeric string, `null`, or garbage.
//! These helpers coerce every such leaf to a plain number exactly once,
//! while deserializing, so the calculation engine never has to.
//!
//! Coercion rules:
//! - JSON number: used as-is (non-finite values become 0)
//! - string: longest leading numeric prefix (`"12.5k"` → 12.5), else 0
//! - anything else: 0
//!
//! Flags come in two flavours: [`flag`] disables only on JSON `false`,
//! [`truthy`] disables on any falsy value (`false`, `null`, `0`, `""`).

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Coerce an arbitrary JSON value to a finite f64
pub fn coerce_f64(value: &Value) -> f64 {
    let number = match value {
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::String(s) => parse_leading_f64(s),
        _ => 0.0,
    };
    if number.is_finite() {
        number
    } else {
        0.0
    }
}

/// Parse the longest numeric prefix of a string, ignoring leading whitespace
pub fn parse_leading_f64(input: &str) -> f64 {
    let trimmed = input.trim_start();
    let mut best = 0.0;
    for (idx, ch) in trimmed.char_indices() {
        if !(ch.is_ascii_digit() || matches!(ch, '.' | '-' | '+' | 'e' | 'E')) {
            break;
        }
        if let Ok(parsed) = trimmed[..idx + ch.len_utf8()].parse::<f64>() {
            best = parsed;
        }
    }
    best
}

/// Convert a coerced number to a non-negative count
pub fn to_count(value: f64) -> u32 {
    if value.is_finite() && value > 0.0 {
        value.round() as u32
    } else {
        0
    }
}

/// `deserialize_with` target for monetary and percentage fields
pub fn amount<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(coerce_f64(&value))
}

/// `deserialize_with` target for optional amounts; `null` stays `None`
pub fn optional_amount<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Null => None,
        other => Some(coerce_f64(&other)),
    })
}

/// `deserialize_with` target for headcounts, call volumes and hours
pub fn count<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(to_count(coerce_f64(&value)))
}

/// `deserialize_with` target for flags; only JSON `false` disables
///
/// A missing flag is handled by the field's serde default.
pub fn flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(!matches!(value, Value::Bool(false)))
}

/// `deserialize_with` target for flags where any falsy value disables
pub fn truthy<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(is_truthy(&value))
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(false, |x| x != 0.0 && !x.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_coerce_numbers_and_strings() {
        assert_eq!(coerce_f64(&json!(42.5)), 42.5);
        assert_eq!(coerce_f64(&json!("1500")), 1500.0);
        assert_eq!(coerce_f64(&json!("  12.5k")), 12.5);
        assert_eq!(coerce_f64(&json!("1e3")), 1000.0);
        assert_eq!(coerce_f64(&json!("-7")), -7.0);
    }

    #[test]
    fn test_coerce_garbage_to_zero() {
        assert_eq!(coerce_f64(&json!(null)), 0.0);
        assert_eq!(coerce_f64(&json!("abc")), 0.0);
        assert_eq!(coerce_f64(&json!("")), 0.0);
        assert_eq!(coerce_f64(&json!(true)), 0.0);
        assert_eq!(coerce_f64(&json!({"a": 1})), 0.0);
        assert_eq!(coerce_f64(&json!("inf")), 0.0);
    }

    #[test]
    fn test_to_count() {
        assert_eq!(to_count(3.0), 3);
        assert_eq!(to_count(2.6), 3);
        assert_eq!(to_count(-4.0), 0);
        assert_eq!(to_count(f64::NAN), 0);
    }

    #[test]
    fn test_truthiness() {
        assert!(is_truthy(&json!(true)));
        assert!(is_truthy(&json!(1)));
        assert!(is_truthy(&json!("0")));
        assert!(is_truthy(&json!({})));
        assert!(!is_truthy(&json!(false)));
        assert!(!is_truthy(&json!(null)));
        assert!(!is_truthy(&json!(0)));
        assert!(!is_truthy(&json!(0.0)));
        assert!(!is_truthy(&json!("")));
    }
}
