//! 同期フィールドへの代入を検証する
//!
//! どの関数も「提案された値」と「確定済みの関連状態」だけを受け取り、
//! 受理した値を型付きで返すか、[`ValidationError`] を返す純粋関数。

mod column;
mod fields;
mod highlight;

pub use column::validate_columns;
pub use fields::{AllowedValue, Entry, FieldSet};
pub use highlight::validate_highlight_ranges;

use thiserror::Error;

use crate::model::{Column, HighlightStyle, MAX_LINE_WIDTH};

/// 検証エラー
///
/// いずれも入力の拒否であり、致命的なエラーではない。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{field} out of range: {value} (expected {expected})")]
    OutOfRange {
        field: &'static str,
        value: i64,
        expected: String,
    },

    #[error(
        "column {index}: column width {alignment} must be aligned with the line width {line_width}"
    )]
    AlignmentViolation {
        index: usize,
        alignment: u8,
        line_width: u16,
    },

    #[error("{entry} {index}: expected an object")]
    NotAnObject { entry: Entry, index: usize },

    #[error("column {index}: missing column type")]
    MissingType { index: usize },

    #[error("column {index}: invalid column type {found}")]
    InvalidType { index: usize, found: String },

    #[error("{entry} {index}: missing keys {fields}")]
    MissingFields {
        entry: Entry,
        index: usize,
        fields: FieldSet,
    },

    #[error("{entry} {index}: unexpected keys {fields}")]
    UnexpectedFields {
        entry: Entry,
        index: usize,
        fields: FieldSet,
    },

    #[error(
        "column {index}: unsupported value for {field}. Supported values are {}",
        fields::join(.allowed.iter())
    )]
    InvalidFieldValue {
        index: usize,
        field: &'static str,
        allowed: &'static [AllowedValue],
    },

    #[error("range {index}: \"{field}\" must be an integer")]
    InvalidEndpointType { index: usize, field: &'static str },

    #[error(
        "range {index}: \"style\" must be one of {}",
        fields::join(&HighlightStyle::ALL)
    )]
    InvalidStyle { index: usize },
}

impl ValidationError {
    /// 問題のあるカラム/範囲のインデックス（リスト単位の検証のみ）
    pub fn index(&self) -> Option<usize> {
        match self {
            Self::OutOfRange { .. } => None,
            Self::AlignmentViolation { index, .. }
            | Self::NotAnObject { index, .. }
            | Self::MissingType { index }
            | Self::InvalidType { index, .. }
            | Self::MissingFields { index, .. }
            | Self::UnexpectedFields { index, .. }
            | Self::InvalidFieldValue { index, .. }
            | Self::InvalidEndpointType { index, .. }
            | Self::InvalidStyle { index } => Some(*index),
        }
    }
}

/// 行幅を検証
///
/// 範囲外なら `OutOfRange`、いずれかのカラムの境界に揃わなければ
/// 最初に該当したカラムで `AlignmentViolation`。
pub fn validate_line_width(proposed: i64, columns: &[Column]) -> Result<u16, ValidationError> {
    let line_width = u16::try_from(proposed)
        .ok()
        .filter(|lw| *lw <= MAX_LINE_WIDTH)
        .ok_or_else(|| ValidationError::OutOfRange {
            field: "linewidth",
            value: proposed,
            expected: format!("0..={MAX_LINE_WIDTH}"),
        })?;

    if let Some((index, column)) = columns
        .iter()
        .enumerate()
        .find(|(_, c)| !c.is_aligned_with(line_width))
    {
        return Err(ValidationError::AlignmentViolation {
            index,
            alignment: column.alignment(),
            line_width,
        });
    }

    Ok(line_width)
}

/// カーソル位置を検証
///
/// `None`（カーソルなし）は常に受理。
pub fn validate_cursor_position(
    proposed: Option<i64>,
    data_len: usize,
) -> Result<Option<usize>, ValidationError> {
    let Some(pos) = proposed else {
        return Ok(None);
    };

    usize::try_from(pos)
        .ok()
        .filter(|p| *p < data_len)
        .map(Some)
        .ok_or_else(|| ValidationError::OutOfRange {
            field: "cursor_position",
            value: pos,
            expected: format!("0..{data_len}"),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{IntegerBase, IntegerWidth, default_columns};

    fn integer(width: IntegerWidth) -> Column {
        Column::Integer {
            signed: false,
            width,
            little_endian: true,
            display_base: IntegerBase::Decimal,
            fixed_width: true,
        }
    }

    #[test]
    fn line_width_bounds() {
        assert_eq!(validate_line_width(0, &[]), Ok(0));
        assert_eq!(validate_line_width(256, &[]), Ok(256));
        assert!(matches!(
            validate_line_width(-1, &[]),
            Err(ValidationError::OutOfRange {
                field: "linewidth",
                value: -1,
                ..
            })
        ));
        assert!(matches!(
            validate_line_width(257, &[]),
            Err(ValidationError::OutOfRange { value: 257, .. })
        ));
        assert!(matches!(
            validate_line_width(i64::MAX, &default_columns()),
            Err(ValidationError::OutOfRange { .. })
        ));
    }

    #[test]
    fn line_width_must_align_with_columns() {
        assert_eq!(validate_line_width(9, &default_columns()), Ok(9));

        let columns = [Column::Ascii, integer(IntegerWidth::Two), integer(IntegerWidth::Four)];
        assert_eq!(validate_line_width(12, &columns), Ok(12));

        let err = validate_line_width(6, &columns).unwrap_err();
        assert_eq!(
            err,
            ValidationError::AlignmentViolation {
                index: 2,
                alignment: 4,
                line_width: 6
            }
        );
        assert_eq!(err.index(), Some(2));

        let err = validate_line_width(9, &columns).unwrap_err();
        assert_eq!(err.index(), Some(1));
    }

    #[test]
    fn cursor_position_bounds() {
        assert_eq!(validate_cursor_position(None, 0), Ok(None));
        assert_eq!(validate_cursor_position(None, 23), Ok(None));
        assert_eq!(validate_cursor_position(Some(0), 23), Ok(Some(0)));
        assert_eq!(validate_cursor_position(Some(22), 23), Ok(Some(22)));

        let err = validate_cursor_position(Some(23), 23).unwrap_err();
        assert!(err.to_string().contains("out of range"));
        assert!(matches!(
            validate_cursor_position(Some(-1), 23),
            Err(ValidationError::OutOfRange {
                field: "cursor_position",
                ..
            })
        ));
        assert!(validate_cursor_position(Some(0), 0).is_err());
    }

    #[test]
    fn messages_carry_context() {
        let err = validate_line_width(300, &[]).unwrap_err();
        assert_eq!(err.to_string(), "linewidth out of range: 300 (expected 0..=256)");

        let err = ValidationError::InvalidStyle { index: 3 };
        assert_eq!(
            err.to_string(),
            "range 3: \"style\" must be one of red, green, blue, underline-red, underline-green, underline-blue"
        );
    }
}
