//! Tile Words (workspace facade crate).
//!
//! Re-exports the member crates under `crates/` as
//! `tile_words::{adapter,core,input,types}` and holds the driver's
//! command-line handling.

pub mod cli;

pub use tile_words_adapter as adapter;
pub use tile_words_core as core;
pub use tile_words_input as input;
pub use tile_words_types as types;
