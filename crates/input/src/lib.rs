//! Host input module (engine-facing).
//!
//! Pointer capture and UI widgets live outside the engine. This crate maps the
//! stimuli a host delivers, written as one command per line, into
//! [`HostCommand`]s the adapter can dispatch. The headless driver reads these
//! lines from stdin; tests and scripts write them by hand.

pub mod map;

pub use tile_words_types as types;

pub use map::{parse_command, parse_script, HostCommand, ParseError};
