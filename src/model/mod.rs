mod column;
mod highlight;

pub use column::{AddressBase, Column, IntegerBase, IntegerWidth};
pub use highlight::{HighlightRange, HighlightStyle};

/// 行幅の上限（バイト数）
pub const MAX_LINE_WIDTH: u16 = 256;

/// 初期表示用のサンプルデータ
pub const DEFAULT_DATA: &[u8] = b"Display your data here";

/// 1行あたりのバイト数（初期値）
pub const DEFAULT_LINE_WIDTH: u16 = 16;

/// 初期カラム構成: アドレス(16進) / 1バイト符号なし整数(16進) / ASCII
pub fn default_columns() -> Vec<Column> {
    vec![
        Column::Address {
            display_base: AddressBase::Hex,
        },
        Column::Integer {
            signed: false,
            width: IntegerWidth::One,
            little_endian: true,
            display_base: IntegerBase::Hex,
            fixed_width: true,
        },
        Column::Ascii,
    ]
}
