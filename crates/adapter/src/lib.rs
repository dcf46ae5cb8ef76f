//! Adapter module - hosts a match behind a line-oriented command interface
//!
//! The core crate knows nothing about files, text commands, or output
//! formats. This crate supplies the outside world:
//!
//! - [`library`]: level data blobs keyed by their fixed identifiers
//! - [`session`]: a [`GameSession`] that owns the match, the selected level
//!   type, and the game mode, and applies [`HostCommand`](crate::input::HostCommand)s
//! - [`protocol`]: the JSON lines written back to the host
//! - [`config`]: where the data lives, read from environment variables
//!
//! # Level Identifiers
//!
//! | Level type | Identifier |
//! |------------|------------|
//! | `ScoreWithinTime` | `LevelData_Score_in_Time` |
//! | `WordsWithinTime` | `LevelData_Words_in_Time` |
//! | `BonusWordCountGoal` | `LevelData_BugCount` |
//! | `WordCountGoal` | `LevelData_WordCount` |
//!
//! A level directory holds one `<identifier>.json` file per level type.
//!
//! # Example
//!
//! ```
//! use tile_words_adapter::{GameSession, LevelLibrary, SessionConfig};
//! use tile_words_adapter::core::Dictionary;
//! use tile_words_adapter::input::parse_command;
//!
//! let mut library = LevelLibrary::new();
//! library.insert(
//!     tile_words_adapter::types::LevelType::WordCountGoal,
//!     r#"{"wordCount":1,"gridSize":{"x":1,"y":2},"gridData":[
//!         {"tileType":0,"letter":"A"},{"tileType":0,"letter":"T"}]}"#,
//! );
//! let config = SessionConfig::default();
//! let mut session = GameSession::new(library, Dictionary::from_text("at"), &config).unwrap();
//!
//! for line in ["down 0 0", "move 0 1", "up"] {
//!     session.handle(parse_command(line).unwrap()).unwrap();
//! }
//! assert!(session.controller().is_terminal());
//! ```

pub mod config;
pub mod error;
pub mod library;
pub mod protocol;
pub mod session;

pub use tile_words_core as core;
pub use tile_words_input as input;
pub use tile_words_types as types;

pub use config::SessionConfig;
pub use error::{AdapterError, Result};
pub use library::LevelLibrary;
pub use protocol::{encode_line, Outbound};
pub use session::{Flow, GameSession};
