use crate::{Error, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Named integer metrics as delivered by a stats source. Insertion order is preserved.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StatsSnapshot(IndexMap<String, i64>);

impl StatsSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: impl Into<String>, value: i64) -> Self {
        self.0.insert(name.into(), value);
        self
    }

    pub fn get(&self, name: &str) -> Option<i64> {
        self.0.get(name).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, i64)> {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Parses a flat JSON object of metrics.
    ///
    /// Database rows frequently carry numbers as strings or floats; those are coerced to their
    /// leading integer, or `0` when there is none. Only a non-object document is rejected.
    pub fn from_json(text: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(text).map_err(|e| Error::InvalidSnapshot {
            message: e.to_string(),
        })?;
        Self::from_value(&value)
    }

    pub fn from_value(value: &Value) -> Result<Self> {
        let Value::Object(map) = value else {
            return Err(Error::InvalidSnapshot {
                message: "expected a JSON object of metrics".to_string(),
            });
        };
        Ok(map
            .iter()
            .map(|(k, v)| (k.clone(), coerce_metric(v)))
            .collect())
    }
}

fn coerce_metric(v: &Value) -> i64 {
    match v {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.is_finite()).map(|f| f.trunc() as i64))
            .unwrap_or(0),
        Value::String(s) => leading_integer(s).unwrap_or(0),
        _ => 0,
    }
}

/// Optional sign followed by leading digits; trailing text is ignored (`"350px"` -> `350`,
/// `"12.9"` -> `12`). `None` when no digit leads.
pub fn leading_integer(s: &str) -> Option<i64> {
    let s = s.trim();
    let (sign, digits) = match s.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, s.strip_prefix('+').unwrap_or(s)),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    digits[..end].parse::<i64>().ok().map(|v| v * sign)
}

impl<K: Into<String>> FromIterator<(K, i64)> for StatsSnapshot {
    fn from_iter<I: IntoIterator<Item = (K, i64)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_json_coerces_database_shapes() {
        let s = StatsSnapshot::from_json(
            r#"{"totalViews": "12345", "totalReads": 10.9, "repos": null, "x": "7abc"}"#,
        )
        .unwrap();
        assert_eq!(s.get("totalViews"), Some(12345));
        assert_eq!(s.get("totalReads"), Some(10));
        assert_eq!(s.get("repos"), Some(0));
        assert_eq!(s.get("x"), Some(7));
        assert_eq!(
            s.iter().map(|(k, _)| k).collect::<Vec<_>>(),
            ["totalViews", "totalReads", "repos", "x"]
        );
    }

    #[test]
    fn from_json_rejects_non_objects() {
        assert!(matches!(
            StatsSnapshot::from_json("[1, 2]"),
            Err(Error::InvalidSnapshot { .. })
        ));
        assert!(StatsSnapshot::from_json("{").is_err());
    }
}
