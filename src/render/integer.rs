use crate::model::{IntegerBase, IntegerWidth};

/// 指定幅の最大値を表すのに必要な桁数
pub(super) fn digits(width: IntegerWidth, base: IntegerBase) -> usize {
    let bits = usize::from(width.bytes()) * 8;
    match base {
        IntegerBase::Binary => bits,
        IntegerBase::Octal => bits.div_ceil(3),
        IntegerBase::Decimal => match width {
            IntegerWidth::One => 3,
            IntegerWidth::Two => 5,
            IntegerWidth::Four => 10,
            IntegerWidth::Eight => 20,
        },
        IntegerBase::Hex => bits / 4,
    }
}

/// `idx` から始まる整数を文字列化
///
/// 残りバイトが足りない場合は同じ長さの `.` を返す。
pub(super) fn render(
    data: &[u8],
    idx: usize,
    width: IntegerWidth,
    signed: bool,
    little_endian: bool,
    base: IntegerBase,
    fixed_width: bool,
) -> String {
    let n = usize::from(width.bytes());
    let pad = digits(width, base);
    let sign_len = usize::from(signed);

    let Some(bytes) = idx.checked_add(n).and_then(|end| data.get(idx..end)) else {
        return ".".repeat(sign_len + pad);
    };

    let mut buf = [0u8; 8];
    let raw = if little_endian {
        buf[..n].copy_from_slice(bytes);
        u64::from_le_bytes(buf)
    } else {
        buf[8 - n..].copy_from_slice(bytes);
        u64::from_be_bytes(buf)
    };

    let (negative, magnitude) = if signed {
        // 符号拡張
        let shift = 64 - 8 * n as u32;
        let value = ((raw << shift) as i64) >> shift;
        (value < 0, value.unsigned_abs())
    } else {
        (false, raw)
    };

    let pad = if fixed_width { pad } else { 1 };
    let text = match base {
        IntegerBase::Binary => format!("{magnitude:0pad$b}"),
        IntegerBase::Octal => format!("{magnitude:0pad$o}"),
        IntegerBase::Decimal => format!("{magnitude:0pad$}"),
        IntegerBase::Hex => format!("{magnitude:0pad$x}"),
    };

    if signed {
        let sign = if negative { '-' } else { ' ' };
        format!("{sign}{text}")
    } else {
        text
    }
}
