use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::config::ViewerConfig;
use crate::model::{self, Column, HighlightRange};
use crate::validate::{
    ValidationError, validate_columns, validate_cursor_position, validate_highlight_ranges,
    validate_line_width,
};

/// ウィジェットの同期状態
///
/// 各フィールドへの代入は検証を通過した場合のみ反映される。
/// 拒否された代入は確定済みの値を一切変更しない。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HexViewerState {
    /// 表示するデータ
    #[serde(skip)]
    data: Vec<u8>,
    /// 1行あたりのバイト数
    #[serde(rename = "linewidth")]
    line_width: u16,
    /// 表示カラム
    columns: Vec<Column>,
    /// カーソル位置（`None` はカーソルなし）
    cursor_position: Option<usize>,
    /// ハイライト範囲
    highlight_ranges: Vec<HighlightRange>,
    /// 選択範囲（ビューからの報告のみで更新）
    selection_from: usize,
    selection_to: usize,
}

impl HexViewerState {
    /// サンプルデータで作成
    pub fn new() -> Self {
        Self::with_data(model::DEFAULT_DATA)
    }

    /// 指定データで作成（その他は初期値）
    pub fn with_data(data: impl Into<Vec<u8>>) -> Self {
        Self {
            data: data.into(),
            line_width: model::DEFAULT_LINE_WIDTH,
            columns: model::default_columns(),
            cursor_position: Some(0),
            highlight_ranges: Vec::new(),
            selection_from: 0,
            selection_to: 1,
        }
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn line_width(&self) -> u16 {
        self.line_width
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn cursor_position(&self) -> Option<usize> {
        self.cursor_position
    }

    pub fn highlight_ranges(&self) -> &[HighlightRange] {
        &self.highlight_ranges
    }

    /// 選択範囲 (開始, 終了)
    pub fn selection(&self) -> (usize, usize) {
        (self.selection_from, self.selection_to)
    }

    /// データを丸ごと置き換える
    pub fn set_data(&mut self, data: impl Into<Vec<u8>>) {
        self.data = data.into();
        debug!(field = "data", len = self.data.len(), "accepted");
    }

    /// 行幅を設定
    pub fn set_line_width(&mut self, proposed: i64) -> Result<(), ValidationError> {
        self.line_width = logged("linewidth", validate_line_width(proposed, &self.columns))?;
        Ok(())
    }

    /// カラムリストを設定
    pub fn set_columns(&mut self, proposed: &[Value]) -> Result<(), ValidationError> {
        self.columns = logged("columns", validate_columns(proposed, self.line_width))?;
        Ok(())
    }

    /// カーソル位置を設定
    pub fn set_cursor_position(&mut self, proposed: Option<i64>) -> Result<(), ValidationError> {
        self.cursor_position = logged(
            "cursor_position",
            validate_cursor_position(proposed, self.data.len()),
        )?;
        Ok(())
    }

    /// ハイライト範囲を設定
    pub fn set_highlight_ranges(&mut self, proposed: &[Value]) -> Result<(), ValidationError> {
        self.highlight_ranges = logged("highlight_ranges", validate_highlight_ranges(proposed))?;
        Ok(())
    }

    /// ビュー側で変更された選択範囲を反映
    pub fn apply_view_selection(&mut self, from: usize, to: usize) {
        self.selection_from = from;
        self.selection_to = to;
        debug!(from, to, "selection updated by view");
    }

    /// 設定をまとめて反映
    ///
    /// 指定されたフィールド同士（新しい行幅と新しいカラム）で整合性を検証し、
    /// 省略されたフィールドは確定済みの値と照合する。全て通った場合のみ反映する。
    pub fn apply_config(&mut self, config: &ViewerConfig) -> Result<(), ValidationError> {
        let (line_width, columns) = match (config.linewidth, config.columns.as_deref()) {
            (Some(lw), Some(raw)) => {
                let lw = logged("linewidth", validate_line_width(lw, &[]))?;
                (lw, logged("columns", validate_columns(raw, lw))?)
            }
            (Some(lw), None) => (
                logged("linewidth", validate_line_width(lw, &self.columns))?,
                self.columns.clone(),
            ),
            (None, Some(raw)) => (
                self.line_width,
                logged("columns", validate_columns(raw, self.line_width))?,
            ),
            (None, None) => (self.line_width, self.columns.clone()),
        };

        let cursor_position = match config.cursor_position {
            Some(proposed) => logged(
                "cursor_position",
                validate_cursor_position(proposed, self.data.len()),
            )?,
            None => self.cursor_position,
        };

        let highlight_ranges = match config.highlight_ranges.as_deref() {
            Some(raw) => logged("highlight_ranges", validate_highlight_ranges(raw))?,
            None => self.highlight_ranges.clone(),
        };

        self.line_width = line_width;
        self.columns = columns;
        self.cursor_position = cursor_position;
        self.highlight_ranges = highlight_ranges;
        debug!("config applied");
        Ok(())
    }
}

impl Default for HexViewerState {
    fn default() -> Self {
        Self::new()
    }
}

/// 検証結果をログに残す
fn logged<T>(field: &'static str, result: Result<T, ValidationError>) -> Result<T, ValidationError> {
    match &result {
        Ok(_) => debug!(field, "accepted"),
        Err(err) => debug!(field, %err, "rejected"),
    }
    result
}
