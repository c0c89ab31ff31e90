use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::ModelError;

/// One element of an answer's response data.
///
/// The management API encodes rdata as a heterogeneous array: hostnames,
/// addresses, and text travel as strings, while numeric fields may arrive
/// as JSON numbers. Decoding accepts either shape at any position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RdataValue {
    Str(String),
    Int(i64),
}

impl RdataValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            RdataValue::Str(s) => Some(s),
            RdataValue::Int(_) => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            RdataValue::Str(_) => None,
            RdataValue::Int(n) => Some(*n),
        }
    }
}

impl fmt::Display for RdataValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RdataValue::Str(s) => f.write_str(s),
            RdataValue::Int(n) => write!(f, "{n}"),
        }
    }
}

impl From<&str> for RdataValue {
    fn from(value: &str) -> Self {
        RdataValue::Str(value.to_string())
    }
}

impl From<String> for RdataValue {
    fn from(value: String) -> Self {
        RdataValue::Str(value)
    }
}

impl From<i64> for RdataValue {
    fn from(value: i64) -> Self {
        RdataValue::Int(value)
    }
}

impl From<i32> for RdataValue {
    fn from(value: i32) -> Self {
        RdataValue::Int(value.into())
    }
}

impl From<u16> for RdataValue {
    fn from(value: u16) -> Self {
        RdataValue::Int(value.into())
    }
}

impl From<u32> for RdataValue {
    fn from(value: u32) -> Self {
        RdataValue::Int(value.into())
    }
}

impl TryFrom<serde_json::Value> for RdataValue {
    type Error = ModelError;

    /// Accepts the two scalar shapes the API uses for rdata. Anything else
    /// (booleans, floats, nested arrays or objects) is rejected.
    fn try_from(value: serde_json::Value) -> Result<Self, Self::Error> {
        match value {
            serde_json::Value::String(s) => Ok(RdataValue::Str(s)),
            serde_json::Value::Number(n) => n
                .as_i64()
                .map(RdataValue::Int)
                .ok_or_else(|| ModelError::UnsupportedRdataValue(n.to_string())),
            other => Err(ModelError::UnsupportedRdataValue(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_display_string_verbatim() {
        assert_eq!(RdataValue::from("sip.example.com").to_string(), "sip.example.com");
    }

    #[test]
    fn test_display_integer_base10() {
        assert_eq!(RdataValue::Int(5060).to_string(), "5060");
        assert_eq!(RdataValue::Int(-1).to_string(), "-1");
    }

    #[test]
    fn test_try_from_json_string() {
        let value = RdataValue::try_from(json!("1.1.1.1")).unwrap();
        assert_eq!(value, RdataValue::Str("1.1.1.1".to_string()));
    }

    #[test]
    fn test_try_from_json_integer() {
        let value = RdataValue::try_from(json!(10)).unwrap();
        assert_eq!(value, RdataValue::Int(10));
    }

    #[test]
    fn test_try_from_json_rejects_bool() {
        assert!(RdataValue::try_from(json!(true)).is_err());
    }

    #[test]
    fn test_try_from_json_rejects_float() {
        assert!(RdataValue::try_from(json!(1.5)).is_err());
    }

    #[test]
    fn test_try_from_json_rejects_nested() {
        assert!(RdataValue::try_from(json!(["10"])).is_err());
        assert!(RdataValue::try_from(json!({"host": "a"})).is_err());
    }
}
