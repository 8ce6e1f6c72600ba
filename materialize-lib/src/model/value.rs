//! Attribute values

use std::fmt;

use serde::Serialize;

use crate::error::MaterializeError;

/// A value that can be written as an attribute.
///
/// Props are restricted to this closed set; anything else (null, arrays,
/// objects) is rejected at the boundary instead of being stringified.
///
/// | Variant | Attribute text |
/// |---------|----------------|
/// | `String` | the string itself |
/// | `Int` | decimal digits |
/// | `Float` | shortest round-trip form (`3.0` → `"3"`, `1e21` → `"1e+21"`, `-0.0` → `"0"`) |
/// | `Bool` | `"true"` / `"false"` |
///
/// # Example
///
/// ```
/// use materialize_lib::AttrValue;
///
/// assert_eq!(AttrValue::from("_blank").to_attribute_value().as_deref(), Some("_blank"));
/// assert_eq!(AttrValue::from(2.5).to_attribute_value().as_deref(), Some("2.5"));
/// assert_eq!(AttrValue::from(f64::NAN).to_attribute_value(), None);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AttrValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
}

impl AttrValue {
    /// Returns the type name of this value.
    pub fn type_name(&self) -> &'static str {
        match self {
            AttrValue::Bool(_) => "bool",
            AttrValue::Int(_) => "int",
            AttrValue::Float(_) => "float",
            AttrValue::String(_) => "string",
        }
    }

    /// The text written into the attribute, or `None` when the value has no
    /// textual form (NaN and infinities).
    pub fn to_attribute_value(&self) -> Option<String> {
        match self {
            AttrValue::Bool(b) => Some(b.to_string()),
            AttrValue::Int(n) => Some(n.to_string()),
            AttrValue::Float(n) if n.is_finite() => Some(format_float(*n)),
            AttrValue::Float(_) => None,
            AttrValue::String(s) => Some(s.clone()),
        }
    }

    /// Convert a JSON prop value, rejecting anything outside the closed set.
    pub fn from_json(name: &str, value: &serde_json::Value) -> Result<Self, MaterializeError> {
        match value {
            serde_json::Value::Bool(b) => Ok(AttrValue::Bool(*b)),
            serde_json::Value::String(s) => Ok(AttrValue::String(s.clone())),
            serde_json::Value::Number(n) => n
                .as_i64()
                .map(AttrValue::Int)
                .or_else(|| n.as_f64().map(AttrValue::Float))
                .ok_or_else(|| MaterializeError::invalid_attribute_value(name, n.to_string())),
            serde_json::Value::Null => Err(MaterializeError::invalid_attribute_value(name, "null")),
            serde_json::Value::Array(_) => Err(MaterializeError::invalid_attribute_value(name, "array")),
            serde_json::Value::Object(_) => Err(MaterializeError::invalid_attribute_value(name, "object")),
        }
    }
}

/// Number-to-string conversion as browsers do it: negative zero prints as
/// `0`, and magnitudes at or above `1e21` or below `1e-6` use exponent form
/// with an explicit sign (`1e+21`, `1.5e-7`).
fn format_float(n: f64) -> String {
    if n == 0.0 {
        return "0".to_string();
    }

    let magnitude = n.abs();
    if !(1e-6..1e21).contains(&magnitude) {
        let exponent_form = format!("{n:e}");
        return match exponent_form.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                format!("{mantissa}e+{exponent}")
            }
            _ => exponent_form,
        };
    }

    n.to_string()
}

impl fmt::Display for AttrValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttrValue::Bool(b) => write!(f, "{b}"),
            AttrValue::Int(n) => write!(f, "{n}"),
            AttrValue::Float(n) => write!(f, "{n}"),
            AttrValue::String(s) => write!(f, "{s:?}"),
        }
    }
}

// =============================================================================
// From implementations
// =============================================================================

impl From<bool> for AttrValue {
    fn from(v: bool) -> Self {
        AttrValue::Bool(v)
    }
}

impl From<i32> for AttrValue {
    fn from(v: i32) -> Self {
        AttrValue::Int(v.into())
    }
}

impl From<i64> for AttrValue {
    fn from(v: i64) -> Self {
        AttrValue::Int(v)
    }
}

impl From<u32> for AttrValue {
    fn from(v: u32) -> Self {
        AttrValue::Int(v.into())
    }
}

impl From<f64> for AttrValue {
    fn from(v: f64) -> Self {
        AttrValue::Float(v)
    }
}

impl From<String> for AttrValue {
    fn from(v: String) -> Self {
        AttrValue::String(v)
    }
}

impl From<&str> for AttrValue {
    fn from(v: &str) -> Self {
        AttrValue::String(v.to_string())
    }
}
