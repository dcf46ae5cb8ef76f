//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are plain data with no game logic, making them usable in any
//! context (core rules, host command parsing, event encoding).
//!
//! # Grid Coordinates
//!
//! Tiles are addressed by `(x, y)`:
//!
//! - **x**: column, `0..width`
//! - **y**: row, `0..height`
//! - Coordinates are signed so neighbour scans can step off the edge and get
//!   an absence back instead of an underflow.
//!
//! # Level Types
//!
//! | Level type | Identifier | Timed | Goal |
//! |------------|------------|-------|------|
//! | `WordCountGoal` | `LevelData_WordCount` | no | form N words |
//! | `ScoreWithinTime` | `LevelData_Score_in_Time` | yes | reach N points |
//! | `WordsWithinTime` | `LevelData_Words_in_Time` | yes | form N words |
//! | `BonusWordCountGoal` | `LevelData_BugCount` | no | find N distinct bonus letters |
//!
//! # Examples
//!
//! ```
//! use tile_words_types::{LevelType, Position, TileKind};
//!
//! // Parse a level type (case-insensitive)
//! let level = LevelType::from_str("scoreWithinTime").unwrap();
//! assert_eq!(level, LevelType::ScoreWithinTime);
//! assert_eq!(level.data_id(), "LevelData_Score_in_Time");
//!
//! // Tile kinds come from integer codes in level data
//! assert_eq!(TileKind::from_code(2), Some(TileKind::Bonus));
//!
//! // Chebyshev adjacency
//! assert!(Position::new(0, 0).is_adjacent(Position::new(1, 1)));
//! assert!(!Position::new(0, 0).is_adjacent(Position::new(2, 2)));
//! ```

use serde::{Deserialize, Serialize};

/// Level data identifier for [`LevelType::ScoreWithinTime`].
pub const LEVEL_DATA_SCORE_IN_TIME: &str = "LevelData_Score_in_Time";

/// Level data identifier for [`LevelType::WordsWithinTime`].
pub const LEVEL_DATA_WORDS_IN_TIME: &str = "LevelData_Words_in_Time";

/// Level data identifier for [`LevelType::BonusWordCountGoal`].
pub const LEVEL_DATA_BUG_COUNT: &str = "LevelData_BugCount";

/// Level data identifier for [`LevelType::WordCountGoal`].
pub const LEVEL_DATA_WORD_COUNT: &str = "LevelData_WordCount";

/// Number of letters in the scoring alphabet (A=1 .. Z=26).
pub const ALPHABET_LEN: u32 = 26;

/// Multiplier applied to the letter score of a bonus tile.
pub const BONUS_MULTIPLIER: u32 = 2;

/// Grid coordinate of a tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Chebyshev distance (max of the axis distances).
    pub fn chebyshev(self, other: Position) -> u32 {
        let dx = (self.x - other.x).unsigned_abs();
        let dy = (self.y - other.y).unsigned_abs();
        dx.max(dy)
    }

    /// True for any of the 8 surrounding cells; a position is not adjacent to itself.
    pub fn is_adjacent(self, other: Position) -> bool {
        self.chebyshev(other) == 1
    }

    /// Edge-sharing neighbours in left, right, up, down order.
    ///
    /// "Up" is `y + 1`, matching the grid layout where row 0 is the bottom row.
    pub fn orthogonal_neighbors(self) -> [Position; 4] {
        [
            Position::new(self.x - 1, self.y),
            Position::new(self.x + 1, self.y),
            Position::new(self.x, self.y + 1),
            Position::new(self.x, self.y - 1),
        ]
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Tile classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TileKind {
    Normal,
    Blocked,
    Bonus,
}

impl TileKind {
    /// Parse the integer code used by level data (0 = normal, 1 = blocked, 2 = bonus)
    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(TileKind::Normal),
            1 => Some(TileKind::Blocked),
            2 => Some(TileKind::Bonus),
            _ => None,
        }
    }

    pub fn code(&self) -> i32 {
        match self {
            TileKind::Normal => 0,
            TileKind::Blocked => 1,
            TileKind::Bonus => 2,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TileKind::Normal => "normal",
            TileKind::Blocked => "blocked",
            TileKind::Bonus => "bonus",
        }
    }
}

/// Goal/timing rule combination for a level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LevelType {
    /// Make N words, untimed.
    WordCountGoal,
    /// Reach N points before the clock runs out.
    ScoreWithinTime,
    /// Make N words before the clock runs out.
    WordsWithinTime,
    /// Collect N distinct bonus letters, untimed.
    BonusWordCountGoal,
}

impl LevelType {
    /// All level types in selection order.
    pub const ALL: [LevelType; 4] = [
        LevelType::WordCountGoal,
        LevelType::ScoreWithinTime,
        LevelType::WordsWithinTime,
        LevelType::BonusWordCountGoal,
    ];

    /// Parse level type from string (case-insensitive, `_`/`-` ignored)
    pub fn from_str(s: &str) -> Option<Self> {
        let key: String = s
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .collect::<String>()
            .to_lowercase();
        match key.as_str() {
            "wordcountgoal" | "wordcount" => Some(LevelType::WordCountGoal),
            "scorewithintime" | "scoreintime" => Some(LevelType::ScoreWithinTime),
            "wordswithintime" | "wordsintime" => Some(LevelType::WordsWithinTime),
            "bonuswordcountgoal" | "bonus" | "bugcount" => Some(LevelType::BonusWordCountGoal),
            _ => None,
        }
    }

    /// Selection index, as reported by a level dropdown.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LevelType::WordCountGoal => "wordCountGoal",
            LevelType::ScoreWithinTime => "scoreWithinTime",
            LevelType::WordsWithinTime => "wordsWithinTime",
            LevelType::BonusWordCountGoal => "bonusWordCountGoal",
        }
    }

    /// Identifier of the level data blob for this type.
    pub fn data_id(&self) -> &'static str {
        match self {
            LevelType::WordCountGoal => LEVEL_DATA_WORD_COUNT,
            LevelType::ScoreWithinTime => LEVEL_DATA_SCORE_IN_TIME,
            LevelType::WordsWithinTime => LEVEL_DATA_WORDS_IN_TIME,
            LevelType::BonusWordCountGoal => LEVEL_DATA_BUG_COUNT,
        }
    }

    pub fn from_data_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.data_id() == id)
    }

    /// Whether the countdown takes part in win/lose evaluation.
    pub fn is_timed(&self) -> bool {
        matches!(self, LevelType::ScoreWithinTime | LevelType::WordsWithinTime)
    }
}

/// Game mode selected by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GameMode {
    #[default]
    Levels,
    Endless,
}

impl GameMode {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "levels" | "level" => Some(GameMode::Levels),
            "endless" => Some(GameMode::Endless),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameMode::Levels => "levels",
            GameMode::Endless => "endless",
        }
    }
}

/// Terminal result of a level attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Outcome {
    #[default]
    InProgress,
    Won,
    Lost,
}

impl Outcome {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::InProgress => "inProgress",
            Outcome::Won => "won",
            Outcome::Lost => "lost",
        }
    }
}

/// Why a traced word earned nothing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RejectReason {
    /// Already credited in this level attempt.
    Duplicate,
    /// Not in the dictionary.
    Invalid,
}

impl RejectReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            RejectReason::Duplicate => "duplicate",
            RejectReason::Invalid => "invalid",
        }
    }
}

/// Grid dimensions in tiles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct GridSize {
    pub x: u32,
    pub y: u32,
}

impl GridSize {
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    pub fn tile_count(&self) -> usize {
        self.x as usize * self.y as usize
    }

    pub fn is_empty(&self) -> bool {
        self.x == 0 || self.y == 0
    }
}
