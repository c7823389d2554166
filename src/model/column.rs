use serde::Serialize;

/// アドレス列の表示基数
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(into = "u8")]
pub enum AddressBase {
    Decimal,
    Hex,
}

impl AddressBase {
    pub fn radix(self) -> u8 {
        match self {
            Self::Decimal => 10,
            Self::Hex => 16,
        }
    }

    pub fn from_radix(radix: u64) -> Option<Self> {
        match radix {
            10 => Some(Self::Decimal),
            16 => Some(Self::Hex),
            _ => None,
        }
    }
}

impl From<AddressBase> for u8 {
    fn from(base: AddressBase) -> u8 {
        base.radix()
    }
}

/// 整数列の表示基数
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(into = "u8")]
pub enum IntegerBase {
    Binary,
    Octal,
    Decimal,
    Hex,
}

impl IntegerBase {
    pub fn radix(self) -> u8 {
        match self {
            Self::Binary => 2,
            Self::Octal => 8,
            Self::Decimal => 10,
            Self::Hex => 16,
        }
    }

    pub fn from_radix(radix: u64) -> Option<Self> {
        match radix {
            2 => Some(Self::Binary),
            8 => Some(Self::Octal),
            10 => Some(Self::Decimal),
            16 => Some(Self::Hex),
            _ => None,
        }
    }
}

impl From<IntegerBase> for u8 {
    fn from(base: IntegerBase) -> u8 {
        base.radix()
    }
}

/// 整数列の要素幅（バイト数）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(into = "u8")]
pub enum IntegerWidth {
    One,
    Two,
    Four,
    Eight,
}

impl IntegerWidth {
    pub fn bytes(self) -> u8 {
        match self {
            Self::One => 1,
            Self::Two => 2,
            Self::Four => 4,
            Self::Eight => 8,
        }
    }

    pub fn from_bytes(bytes: u64) -> Option<Self> {
        match bytes {
            1 => Some(Self::One),
            2 => Some(Self::Two),
            4 => Some(Self::Four),
            8 => Some(Self::Eight),
            _ => None,
        }
    }
}

impl From<IntegerWidth> for u8 {
    fn from(width: IntegerWidth) -> u8 {
        width.bytes()
    }
}

/// 表示カラムの設定
///
/// JSON上では `rendererType` タグとcamelCaseのフィールド名で表現される。
/// 検証を通過した値だけがこの型になる。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "rendererType")]
pub enum Column {
    /// 行頭アドレス
    #[serde(rename_all = "camelCase")]
    Address { display_base: AddressBase },
    /// 1バイト1文字のASCII表示
    Ascii,
    /// 固定幅の整数表示
    #[serde(rename_all = "camelCase")]
    Integer {
        signed: bool,
        width: IntegerWidth,
        little_endian: bool,
        display_base: IntegerBase,
        fixed_width: bool,
    },
}

impl Column {
    /// `rendererType` タグの値
    pub fn renderer_type(&self) -> &'static str {
        match self {
            Self::Address { .. } => "Address",
            Self::Ascii => "Ascii",
            Self::Integer { .. } => "Integer",
        }
    }

    /// 行幅が割り切れなければならない単位（バイト数）
    pub fn alignment(&self) -> u8 {
        match self {
            Self::Address { .. } | Self::Ascii => 1,
            Self::Integer { width, .. } => width.bytes(),
        }
    }

    /// 行幅がこのカラムの境界に揃っているかどうか
    pub fn is_aligned_with(&self, line_width: u16) -> bool {
        line_width % u16::from(self.alignment()) == 0
    }
}
