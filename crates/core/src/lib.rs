//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the puzzle rules, state management, and match
//! logic. It has no dependencies on rendering, input capture, or asset
//! loading, making it:
//!
//! - **Deterministic**: the same gestures and ticks always produce the same match
//! - **Testable**: every component can be driven on its own
//! - **Portable**: any host that can deliver ticks and gestures can run it
//!
//! # Module Structure
//!
//! - [`tile`]: single letter cell with the one-way unblock
//! - [`board`]: grid of tiles, bounds-checked lookup, orthogonal unblocking
//! - [`config`]: level data parsing, validation, and the grid index mapping
//! - [`dictionary`]: case-insensitive word membership
//! - [`selection`]: the drag gesture (adjacency, blocked and repeat checks)
//! - [`scoring`]: letter values and word totals
//! - [`resolve`]: duplicate/dictionary checks and side effects of an accepted word
//! - [`rules`]: win/lose evaluation per level type
//! - [`controller`]: the match controller that ties everything together
//! - [`events`]: match events and the subscription bus
//! - [`framing`]: camera framing for the host
//! - [`snapshot`]: serializable read-only view of a match
//!
//! # Game Rules
//!
//! - **Tracing**: each tile after the first must touch the previous one,
//!   diagonals included, and no tile may be used twice
//! - **Blocked tiles** cannot be traced until a word is accepted next to them
//! - **Scoring**: A=1 .. Z=26 per tile, bonus tiles count double
//! - **Duplicates**: a word is credited at most once per level attempt
//!
//! # Example
//!
//! ```
//! use tile_words_core::{Dictionary, LevelConfig, MatchController};
//! use tile_words_types::{LevelType, Outcome, Position};
//!
//! let config = LevelConfig::from_columns(LevelType::WordCountGoal, &["CAT", "#OXY"])
//!     .unwrap()
//!     .with_word_count_target(1);
//! let mut game = MatchController::new(Dictionary::from_text("cat\n"));
//! game.start_level(config);
//!
//! // Trace C-A-T up the first column
//! game.start_drag(Position::new(0, 0));
//! game.extend_drag(Position::new(0, 1));
//! game.extend_drag(Position::new(0, 2));
//! game.end_drag();
//!
//! assert_eq!(game.state().total_score, 3 + 1 + 20);
//! assert_eq!(game.outcome(), Outcome::Won);
//! // The blocked tile next to C was freed
//! assert!(!game.board().tile_at(1, 0).unwrap().is_blocked());
//! ```
//!
//! # Timing
//!
//! Call [`MatchController::tick`](controller::MatchController::tick) every
//! frame with the elapsed seconds. Only timed levels count down.

pub mod board;
pub mod config;
pub mod controller;
pub mod dictionary;
pub mod events;
pub mod framing;
pub mod resolve;
pub mod rules;
pub mod scoring;
pub mod selection;
pub mod snapshot;
pub mod tile;

pub use tile_words_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use config::{grid_index, grid_position, ConfigError, GridCell, LevelConfig};
pub use controller::{MatchController, MatchState};
pub use dictionary::{normalize_word, Dictionary, DictionaryError};
pub use events::{EventBus, MatchEvent, SubscriptionId};
pub use framing::{frame_for_grid, CameraFraming};
pub use resolve::{resolve_word, AcceptedWord, FormedWords, Resolution};
pub use rules::{LevelRules, Progress};
pub use scoring::{average_score, letter_score, score_tiles, WordScore};
pub use selection::{AddResult, Candidate, DragState, SelectionSession};
pub use snapshot::MatchSnapshot;
pub use tile::Tile;
