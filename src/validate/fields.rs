use std::collections::BTreeSet;
use std::fmt;

use serde_json::{Map, Value};

use super::ValidationError;

/// 検証対象のエントリ種別（エラーメッセージ用）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entry {
    Column,
    Range,
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Column => f.write_str("column"),
            Self::Range => f.write_str("range"),
        }
    }
}

/// フィールド名の集合（表示順はソート済み）
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FieldSet(BTreeSet<String>);

impl FieldSet {
    pub fn contains(&self, field: &str) -> bool {
        self.0.contains(field)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for FieldSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl fmt::Display for FieldSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}}}", join(self.iter()))
    }
}

/// フィールドに許される値
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AllowedValue {
    Bool(bool),
    Int(u64),
}

impl AllowedValue {
    pub const BOOLS: &'static [AllowedValue] = &[Self::Bool(true), Self::Bool(false)];

    /// JSON型まで一致する場合のみ真（`true` は `1` ではなく、`16.0` は `16` ではない）
    pub fn matches(&self, value: &Value) -> bool {
        match *self {
            Self::Bool(b) => value.as_bool() == Some(b),
            Self::Int(n) => value.as_u64() == Some(n),
        }
    }
}

impl fmt::Display for AllowedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(n) => write!(f, "{n}"),
        }
    }
}

pub(crate) fn join<T: fmt::Display>(items: impl IntoIterator<Item = T>) -> String {
    items
        .into_iter()
        .map(|item| item.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// 実際のキー集合が期待集合と完全に一致するか検証
///
/// 欠落と余剰の両方を求めたうえで、欠落を先に報告する。
pub(crate) fn check_field_set<'a>(
    entry: Entry,
    index: usize,
    object: &Map<String, Value>,
    expected: impl IntoIterator<Item = &'a str> + Clone,
) -> Result<(), ValidationError> {
    let missing: FieldSet = expected
        .clone()
        .into_iter()
        .filter(|key| !object.contains_key(*key))
        .collect();
    let unexpected: FieldSet = object
        .keys()
        .filter(|key| !expected.clone().into_iter().any(|e| e == key.as_str()))
        .map(String::as_str)
        .collect();

    if !missing.is_empty() {
        return Err(ValidationError::MissingFields {
            entry,
            index,
            fields: missing,
        });
    }
    if !unexpected.is_empty() {
        return Err(ValidationError::UnexpectedFields {
            entry,
            index,
            fields: unexpected,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn object(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn exact_field_set_is_accepted() {
        let obj = object(json!({"a": 1, "b": 2}));
        assert_eq!(check_field_set(Entry::Range, 0, &obj, ["a", "b"]), Ok(()));
    }

    #[test]
    fn missing_wins_over_unexpected() {
        let obj = object(json!({"a": 1, "c": 2}));
        let err = check_field_set(Entry::Column, 4, &obj, ["a", "b"]).unwrap_err();
        match err {
            ValidationError::MissingFields { entry, index, fields } => {
                assert_eq!(entry, Entry::Column);
                assert_eq!(index, 4);
                assert!(fields.contains("b"));
                assert_eq!(fields.len(), 1);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn field_set_display_is_sorted() {
        let set: FieldSet = ["width", "signed", "displayBase"].into_iter().collect();
        assert_eq!(set.to_string(), "{displayBase, signed, width}");
    }

    #[test]
    fn allowed_values_compare_json_types() {
        assert!(AllowedValue::Int(16).matches(&json!(16)));
        assert!(!AllowedValue::Int(16).matches(&json!(16.0)));
        assert!(!AllowedValue::Int(1).matches(&json!(true)));
        assert!(AllowedValue::Bool(false).matches(&json!(false)));
        assert!(!AllowedValue::Bool(false).matches(&json!(0)));
    }
}
