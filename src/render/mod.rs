//! カラムごとのセル文字列化
//!
//! 描画側が前提にできる表示内容を定める。ピクセルへの描画は扱わない。

mod integer;

use crate::model::{AddressBase, Column, IntegerBase};

impl Column {
    /// 人が読める名前（例: `Signed 2-byte Hex (BE)`）
    pub fn display_name(&self) -> String {
        match *self {
            Column::Address { .. } => "Address".to_string(),
            Column::Ascii => "ASCII".to_string(),
            Column::Integer {
                signed,
                width,
                little_endian,
                display_base,
                ..
            } => {
                let mut name = String::new();
                if signed {
                    name.push_str("Signed ");
                }
                name.push_str(&format!("{}-byte ", width.bytes()));
                name.push_str(match display_base {
                    IntegerBase::Binary => "Binary",
                    IntegerBase::Octal => "Octal",
                    IntegerBase::Decimal => "Decimal",
                    IntegerBase::Hex => "Hex",
                });
                if !little_endian {
                    name.push_str(" (BE)");
                }
                name
            }
        }
    }

    /// `idx` 位置のセルを文字列化
    pub fn render_cell(&self, data: &[u8], idx: usize) -> String {
        match *self {
            Column::Address { display_base } => match display_base {
                AddressBase::Decimal => idx.to_string(),
                AddressBase::Hex => format!("0x{idx:x}"),
            },
            Column::Ascii => data.get(idx).map_or('.', |&b| ascii_char(b)).to_string(),
            Column::Integer {
                signed,
                width,
                little_endian,
                display_base,
                fixed_width,
            } => integer::render(data, idx, width, signed, little_endian, display_base, fixed_width),
        }
    }
}

/// 表示可能なASCII以外は `.`
fn ascii_char(byte: u8) -> char {
    match byte {
        0x20..=0x7E => byte as char,
        _ => '.',
    }
}

/// 行数（最終行は途中まででも1行）
pub fn line_count(data_len: usize, line_width: u16) -> usize {
    match usize::from(line_width) {
        0 => 0,
        lw => data_len.div_ceil(lw),
    }
}

/// 1行分のセルをカラムごとに生成
///
/// アドレス列は行頭の1セルのみ、それ以外は要素幅ごとに1セル。
pub fn render_line(columns: &[Column], data: &[u8], line_width: u16, line: usize) -> Vec<Vec<String>> {
    let lw = usize::from(line_width);
    if lw == 0 {
        return Vec::new();
    }
    let start = line.saturating_mul(lw);
    let end = start.saturating_add(lw).min(data.len());

    columns
        .iter()
        .map(|column| match column {
            Column::Address { .. } => vec![column.render_cell(data, start)],
            _ => (start..end)
                .step_by(usize::from(column.alignment()))
                .map(|idx| column.render_cell(data, idx))
                .collect(),
        })
        .collect()
}

/// 1行分をテキスト化（カラム間は2スペース、ASCII列は詰めて表示）
pub fn format_line(columns: &[Column], data: &[u8], line_width: u16, line: usize) -> String {
    render_line(columns, data, line_width, line)
        .into_iter()
        .zip(columns)
        .map(|(cells, column)| match column {
            Column::Ascii => cells.concat(),
            _ => cells.join(" "),
        })
        .collect::<Vec<_>>()
        .join("  ")
}
