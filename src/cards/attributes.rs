//! Per-card tags for house variants.
//!
//! A plain 52-card deck never sets any of these. They exist for tables that
//! play with marked cards: a wild deuce in rummy, a joker worth 50 points,
//! a bonus card that pays out when shown.

use std::borrow::Borrow;
use std::fmt;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Name of a house-rule tag, e.g. `"wild"` or `"points"`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AttributeKey(String);

impl AttributeKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// Lets `Attributes` be queried with a plain `&str`.
impl Borrow<str> for AttributeKey {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for AttributeKey {
    fn from(key: &str) -> Self {
        Self::new(key)
    }
}

impl From<String> for AttributeKey {
    fn from(key: String) -> Self {
        Self(key)
    }
}

/// Tag payload. Points are integers, markers are flags, labels are text.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttributeValue {
    Int(i64),
    Bool(bool),
    Text(String),
}

impl AttributeValue {
    #[must_use]
    pub fn as_int(&self) -> Option<i64> {
        if let Self::Int(points) = self {
            Some(*points)
        } else {
            None
        }
    }

    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        if let Self::Bool(flag) = self {
            Some(*flag)
        } else {
            None
        }
    }

    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        if let Self::Text(label) = self {
            Some(label)
        } else {
            None
        }
    }
}

impl fmt::Display for AttributeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(points) => write!(f, "{points}"),
            Self::Bool(flag) => write!(f, "{flag}"),
            Self::Text(label) => f.write_str(label),
        }
    }
}

impl From<i64> for AttributeValue {
    fn from(points: i64) -> Self {
        Self::Int(points)
    }
}

impl From<bool> for AttributeValue {
    fn from(flag: bool) -> Self {
        Self::Bool(flag)
    }
}

impl From<&str> for AttributeValue {
    fn from(label: &str) -> Self {
        Self::Text(label.to_owned())
    }
}

impl From<String> for AttributeValue {
    fn from(label: String) -> Self {
        Self::Text(label)
    }
}

/// Tags carried by one card.
pub type Attributes = FxHashMap<AttributeKey, AttributeValue>;

/// Something a card does when it is played, such as `draw 2`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardEffect {
    pub effect_type: String,
    pub value: i64,
}

impl CardEffect {
    #[must_use]
    pub fn new(effect_type: impl Into<String>, value: i64) -> Self {
        Self {
            effect_type: effect_type.into(),
            value,
        }
    }
}

impl fmt::Display for CardEffect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.effect_type, self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_by_str() {
        let mut tags = Attributes::default();
        tags.insert("wild".into(), true.into());
        tags.insert(AttributeKey::new("points"), 50i64.into());

        assert_eq!(tags.get("wild").and_then(AttributeValue::as_bool), Some(true));
        assert_eq!(tags.get("points").and_then(AttributeValue::as_int), Some(50));
        assert!(tags.get("bonus").is_none());
    }

    #[test]
    fn test_wrong_kind_reads_none() {
        let joker = AttributeValue::from("joker");
        assert_eq!(joker.as_text(), Some("joker"));
        assert_eq!(joker.as_int(), None);
        assert_eq!(joker.as_bool(), None);
    }

    #[test]
    fn test_tags_serialize_flat() {
        let mut tags = Attributes::default();
        tags.insert("points".into(), 25i64.into());

        let json = serde_json::to_string(&tags).unwrap();
        assert_eq!(json, r#"{"points":25}"#);

        let back: Attributes = serde_json::from_str(&json).unwrap();
        assert_eq!(back, tags);
    }

    #[test]
    fn test_display() {
        assert_eq!(AttributeValue::Int(10).to_string(), "10");
        assert_eq!(CardEffect::new("draw", 2).to_string(), "draw 2");
    }
}
