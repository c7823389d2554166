use std::fmt;

use serde::Serialize;

/// ハイライトの表示スタイル
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum HighlightStyle {
    Red,
    Green,
    Blue,
    UnderlineRed,
    UnderlineGreen,
    UnderlineBlue,
}

impl HighlightStyle {
    pub const ALL: [HighlightStyle; 6] = [
        Self::Red,
        Self::Green,
        Self::Blue,
        Self::UnderlineRed,
        Self::UnderlineGreen,
        Self::UnderlineBlue,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Green => "green",
            Self::Blue => "blue",
            Self::UnderlineRed => "underline-red",
            Self::UnderlineGreen => "underline-green",
            Self::UnderlineBlue => "underline-blue",
        }
    }

    /// スタイル名から変換（完全一致のみ）
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|style| style.name() == name)
    }
}

impl fmt::Display for HighlightStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// ハイライト範囲
///
/// `from > to` や範囲の重なりはこの層では拒否しない（解釈は描画側の責務）。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HighlightRange {
    pub from: i64,
    pub to: i64,
    pub style: HighlightStyle,
}
