//! Lenient integer id parsing.
//!
//! The browser frontend sends ids both as JSON numbers and as numeric
//! strings (`"previous_questions": ["2"]`), so both are accepted.

use serde::{de, Deserialize, Deserializer};
use serde_json::Value;

/// Parse a JSON number or numeric string into an id.
pub fn parse_id_value(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    }
}

/// An id deserialized from either a JSON number or a numeric string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FlexibleId(pub i64);

impl FlexibleId {
    pub fn get(self) -> i64 {
        self.0
    }
}

impl<'de> Deserialize<'de> for FlexibleId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        parse_id_value(&value)
            .map(FlexibleId)
            .ok_or_else(|| de::Error::custom(format!("invalid id {value}, expected an integer")))
    }
}
