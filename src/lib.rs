//! hxw - Hex viewer widget model
//!
//! This library provides the synchronized state of a notebook hex viewer widget,
//! the validation rules guarding every mutation, and text renderers for its columns.

pub mod config;
pub mod model;
pub mod render;
pub mod validate;
pub mod widget;

pub use config::{ConfigError, ViewerConfig};
pub use model::{
    AddressBase, Column, HighlightRange, HighlightStyle, IntegerBase, IntegerWidth,
};
pub use validate::ValidationError;
pub use widget::HexViewerState;
