use std::iter;

use serde_json::{Map, Value};

use super::fields::{AllowedValue, Entry, check_field_set};
use super::ValidationError;
use crate::model::{AddressBase, Column, IntegerBase, IntegerWidth};

/// カラム種別を示すキー
const TYPE_KEY: &str = "rendererType";

const ADDRESS_FIELDS: &[&str] = &["displayBase"];
const ASCII_FIELDS: &[&str] = &[];
const INTEGER_FIELDS: &[&str] = &["signed", "width", "littleEndian", "displayBase", "fixedWidth"];

const ADDRESS_BASES: &[AllowedValue] = &[AllowedValue::Int(10), AllowedValue::Int(16)];
const INTEGER_BASES: &[AllowedValue] = &[
    AllowedValue::Int(2),
    AllowedValue::Int(8),
    AllowedValue::Int(10),
    AllowedValue::Int(16),
];
const INTEGER_WIDTHS: &[AllowedValue] = &[
    AllowedValue::Int(1),
    AllowedValue::Int(2),
    AllowedValue::Int(4),
    AllowedValue::Int(8),
];

/// カラムリストを検証
///
/// 先頭から順に検証し、最初に失敗したカラムで打ち切る。
/// 全カラムが通った場合のみリスト全体を受理する。
pub fn validate_columns(proposed: &[Value], line_width: u16) -> Result<Vec<Column>, ValidationError> {
    proposed
        .iter()
        .enumerate()
        .map(|(index, raw)| validate_column(index, raw, line_width))
        .collect()
}

fn validate_column(index: usize, raw: &Value, line_width: u16) -> Result<Column, ValidationError> {
    let object = raw.as_object().ok_or(ValidationError::NotAnObject {
        entry: Entry::Column,
        index,
    })?;
    let tag = object
        .get(TYPE_KEY)
        .ok_or(ValidationError::MissingType { index })?;

    let fields = match tag.as_str() {
        Some("Address") => ADDRESS_FIELDS,
        Some("Ascii") => ASCII_FIELDS,
        Some("Integer") => INTEGER_FIELDS,
        _ => {
            return Err(ValidationError::InvalidType {
                index,
                found: tag.to_string(),
            });
        }
    };

    let expected = iter::once(TYPE_KEY).chain(fields.iter().copied());
    check_field_set(Entry::Column, index, object, expected)?;

    // 値の検証はフィールド定義順
    let column = match tag.as_str() {
        Some("Address") => Column::Address {
            display_base: choice(index, object, "displayBase", ADDRESS_BASES, AddressBase::from_radix)?,
        },
        Some("Integer") => Column::Integer {
            signed: flag(index, object, "signed")?,
            width: choice(index, object, "width", INTEGER_WIDTHS, IntegerWidth::from_bytes)?,
            little_endian: flag(index, object, "littleEndian")?,
            display_base: choice(index, object, "displayBase", INTEGER_BASES, IntegerBase::from_radix)?,
            fixed_width: flag(index, object, "fixedWidth")?,
        },
        _ => Column::Ascii,
    };

    if !column.is_aligned_with(line_width) {
        return Err(ValidationError::AlignmentViolation {
            index,
            alignment: column.alignment(),
            line_width,
        });
    }

    Ok(column)
}

fn flag(index: usize, object: &Map<String, Value>, field: &'static str) -> Result<bool, ValidationError> {
    object
        .get(field)
        .and_then(Value::as_bool)
        .ok_or(ValidationError::InvalidFieldValue {
            index,
            field,
            allowed: AllowedValue::BOOLS,
        })
}

fn choice<T>(
    index: usize,
    object: &Map<String, Value>,
    field: &'static str,
    allowed: &'static [AllowedValue],
    parse: fn(u64) -> Option<T>,
) -> Result<T, ValidationError> {
    object
        .get(field)
        .and_then(Value::as_u64)
        .and_then(parse)
        .ok_or(ValidationError::InvalidFieldValue {
            index,
            field,
            allowed,
        })
}
