mod state;

pub use state::HexViewerState;
