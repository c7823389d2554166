//! JSON形式のウィジェット設定
//!
//! 各フィールドは省略可能で、値は検証前の生のJSONとして保持する。
//! 検証と反映は [`crate::HexViewerState::apply_config`] がまとめて行う。

use std::fs;
use std::path::Path;

use serde::{Deserialize, Deserializer};
use serde_json::Value;
use thiserror::Error;

use crate::validate::ValidationError;

/// 設定読み込みのエラー
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed config: {0}")]
    Json(#[from] serde_json::Error),

    #[error("config rejected: {0}")]
    Invalid(#[from] ValidationError),
}

/// ウィジェット設定（フィールド名は同期フィールド名に合わせる）
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ViewerConfig {
    #[serde(default)]
    pub linewidth: Option<i64>,

    #[serde(default)]
    pub columns: Option<Vec<Value>>,

    /// 外側の `None` はキーなし、内側の `None` は `null`（カーソルなし）
    #[serde(default, deserialize_with = "present")]
    pub cursor_position: Option<Option<i64>>,

    #[serde(default)]
    pub highlight_ranges: Option<Vec<Value>>,
}

impl ViewerConfig {
    /// JSON文字列から読み込み
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }

    /// ファイルから読み込み
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// 何も指定されていないかどうか
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

fn present<'de, D>(deserializer: D) -> Result<Option<Option<i64>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<i64>::deserialize(deserializer).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_all_fields() {
        let config = ViewerConfig::from_json(
            r#"{
                "linewidth": 8,
                "columns": [{"rendererType": "Ascii"}],
                "cursor_position": 3,
                "highlight_ranges": [{"from": 0, "to": 2, "style": "green"}]
            }"#,
        )
        .unwrap();
        assert_eq!(config.linewidth, Some(8));
        assert_eq!(config.columns, Some(vec![json!({"rendererType": "Ascii"})]));
        assert_eq!(config.cursor_position, Some(Some(3)));
        assert_eq!(config.highlight_ranges.map(|r| r.len()), Some(1));
    }

    #[test]
    fn distinguishes_null_cursor_from_absent() {
        let config = ViewerConfig::from_json(r#"{"cursor_position": null}"#).unwrap();
        assert_eq!(config.cursor_position, Some(None));

        let config = ViewerConfig::from_json("{}").unwrap();
        assert_eq!(config.cursor_position, None);
        assert!(config.is_empty());
    }

    #[test]
    fn rejects_unknown_keys() {
        let err = ViewerConfig::from_json(r#"{"line_width": 8}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
    }

    #[test]
    fn column_values_stay_raw() {
        // 中身の検証は反映時に行う
        let config = ViewerConfig::from_json(r#"{"columns": [{"rendererType": "Bogus"}]}"#).unwrap();
        assert_eq!(config.columns.unwrap().len(), 1);
    }
}
