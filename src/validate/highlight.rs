use serde_json::{Map, Value};

use super::fields::{Entry, check_field_set};
use super::ValidationError;
use crate::model::{HighlightRange, HighlightStyle};

const RANGE_FIELDS: [&str; 3] = ["from", "to", "style"];

/// ハイライト範囲リストを検証
///
/// 範囲の前後関係や重なりは検証しない。
pub fn validate_highlight_ranges(proposed: &[Value]) -> Result<Vec<HighlightRange>, ValidationError> {
    proposed
        .iter()
        .enumerate()
        .map(|(index, raw)| validate_range(index, raw))
        .collect()
}

fn validate_range(index: usize, raw: &Value) -> Result<HighlightRange, ValidationError> {
    let object = raw.as_object().ok_or(ValidationError::NotAnObject {
        entry: Entry::Range,
        index,
    })?;
    check_field_set(Entry::Range, index, object, RANGE_FIELDS)?;

    let from = endpoint(index, object, "from")?;
    let to = endpoint(index, object, "to")?;
    let style = object
        .get("style")
        .and_then(Value::as_str)
        .and_then(HighlightStyle::from_name)
        .ok_or(ValidationError::InvalidStyle { index })?;

    Ok(HighlightRange { from, to, style })
}

/// 整数値のみ受理（`2.0` や `true` は不可）
fn endpoint(index: usize, object: &Map<String, Value>, field: &'static str) -> Result<i64, ValidationError> {
    object
        .get(field)
        .and_then(Value::as_i64)
        .ok_or(ValidationError::InvalidEndpointType { index, field })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn accepts_valid_ranges() {
        let ranges = validate_highlight_ranges(&[
            json!({"from": 2, "to": 5, "style": "blue"}),
            json!({"from": 4, "to": 9, "style": "underline-red"}),
        ])
        .unwrap();
        assert_eq!(
            ranges,
            vec![
                HighlightRange {
                    from: 2,
                    to: 5,
                    style: HighlightStyle::Blue
                },
                HighlightRange {
                    from: 4,
                    to: 9,
                    style: HighlightStyle::UnderlineRed
                },
            ]
        );
    }

    #[test]
    fn reversed_range_is_accepted() {
        let ranges = validate_highlight_ranges(&[json!({"from": 9, "to": 2, "style": "red"})]).unwrap();
        assert_eq!(ranges[0].from, 9);
        assert_eq!(ranges[0].to, 2);
    }

    #[test]
    fn unexpected_key() {
        let err = validate_highlight_ranges(&[json!({"from": 2, "to": 5, "style": "blue", "unknown": false})])
            .unwrap_err();
        assert!(err.to_string().contains("unexpected keys"));
        assert!(matches!(
            err,
            ValidationError::UnexpectedFields {
                entry: Entry::Range,
                ..
            }
        ));
    }

    #[test]
    fn missing_key() {
        let err = validate_highlight_ranges(&[json!({"from": 2, "to": 5})]).unwrap_err();
        assert!(err.to_string().contains("missing keys"));
        match err {
            ValidationError::MissingFields { fields, .. } => assert!(fields.contains("style")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn non_integer_endpoint() {
        let err = validate_highlight_ranges(&[json!({"from": 2, "to": "eof", "style": "blue"})]).unwrap_err();
        assert_eq!(
            err,
            ValidationError::InvalidEndpointType {
                index: 0,
                field: "to"
            }
        );

        let err = validate_highlight_ranges(&[json!({"from": 2.0, "to": 3, "style": "blue"})]).unwrap_err();
        assert!(matches!(
            err,
            ValidationError::InvalidEndpointType { field: "from", .. }
        ));

        let err = validate_highlight_ranges(&[json!({"from": true, "to": 3, "style": "blue"})]).unwrap_err();
        assert!(matches!(err, ValidationError::InvalidEndpointType { .. }));
    }

    #[test]
    fn unknown_style() {
        let err = validate_highlight_ranges(&[
            json!({"from": 0, "to": 1, "style": "red"}),
            json!({"from": 0, "to": 1, "style": "purple"}),
        ])
        .unwrap_err();
        assert_eq!(err, ValidationError::InvalidStyle { index: 1 });

        let err = validate_highlight_ranges(&[json!({"from": 0, "to": 1, "style": 3})]).unwrap_err();
        assert_eq!(err, ValidationError::InvalidStyle { index: 0 });
    }
}
