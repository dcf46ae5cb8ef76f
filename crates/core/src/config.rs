//! Level configuration - authored grid data and goal targets
//!
//! Level blobs use the field names of the shipped data files:
//!
//! ```json
//! {
//!   "bugCount": 2,
//!   "wordCount": 3,
//!   "timeSec": 0,
//!   "totalScore": 0,
//!   "gridSize": { "x": 2, "y": 2 },
//!   "gridData": [
//!     { "tileType": 0, "letter": "C" },
//!     { "tileType": 2, "letter": "A" },
//!     { "tileType": 1, "letter": "T" },
//!     { "tileType": 0, "letter": "S" }
//!   ]
//! }
//! ```
//!
//! `gridData` is laid out column by column: see [`grid_index`]. The level
//! type is not part of the blob; it is implied by the identifier the blob
//! was stored under and passed in by the loader.
//!
//! Every structural problem is reported here, at load time, so gameplay code
//! never has to deal with a malformed grid.

use serde::Deserialize;
use thiserror::Error;

use crate::types::{GridSize, LevelType, Position, TileKind};

/// Errors raised while loading or building a level configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("malformed level data: {0}")]
    Json(#[from] serde_json::Error),

    #[error("grid dimension {axis} is negative: {value}")]
    NegativeDimension { axis: char, value: i32 },

    #[error("{field} must not be negative (got {value})")]
    NegativeValue { field: &'static str, value: i32 },

    #[error("grid data has {actual} cells but grid size {x}x{y} needs {expected}")]
    GridDataLength {
        x: u32,
        y: u32,
        expected: usize,
        actual: usize,
    },

    #[error("cell {index}: unknown tile type {code}")]
    UnknownTileType { index: usize, code: i32 },

    #[error("cell {index}: letter is empty")]
    EmptyLetter { index: usize },

    #[error("cell {index}: letter {letter:?} is not in A-Z")]
    InvalidLetter { index: usize, letter: char },

    #[error("grid columns have different heights")]
    RaggedColumns,
}

/// Linear index of `(x, y)` in column-major grid data.
///
/// Level data is written with x as the outer loop and y as the inner loop,
/// so the index grows with y first: `index = x * height + y`.
/// Returns `None` when the position is outside `size`.
pub fn grid_index(position: Position, size: GridSize) -> Option<usize> {
    if position.x < 0
        || position.y < 0
        || position.x as u32 >= size.x
        || position.y as u32 >= size.y
    {
        return None;
    }
    Some(position.x as usize * size.y as usize + position.y as usize)
}

/// Inverse of [`grid_index`].
pub fn grid_position(index: usize, size: GridSize) -> Option<Position> {
    if index >= size.tile_count() {
        return None;
    }
    let height = size.y as usize;
    Some(Position::new((index / height) as i32, (index % height) as i32))
}

/// One authored cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridCell {
    pub kind: TileKind,
    pub letter: char,
}

impl GridCell {
    pub const fn new(kind: TileKind, letter: char) -> Self {
        Self { kind, letter }
    }
}

/// Validated configuration for one level attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelConfig {
    pub level_type: LevelType,
    /// Countdown length; 0 means untimed.
    pub time_seconds: u32,
    pub word_count_target: u32,
    pub score_target: u32,
    pub bonus_letter_target: u32,
    pub grid_size: GridSize,
    cells: Vec<GridCell>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawLevelConfig {
    #[serde(default)]
    bug_count: i32,
    #[serde(default)]
    word_count: i32,
    #[serde(default)]
    time_sec: i32,
    #[serde(default)]
    total_score: i32,
    grid_size: RawGridSize,
    #[serde(default)]
    grid_data: Vec<RawGridData>,
}

#[derive(Debug, Deserialize)]
struct RawGridSize {
    x: i32,
    y: i32,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawGridData {
    tile_type: i32,
    letter: String,
}

fn non_negative(field: &'static str, value: i32) -> Result<u32, ConfigError> {
    u32::try_from(value).map_err(|_| ConfigError::NegativeValue { field, value })
}

fn dimension(axis: char, value: i32) -> Result<u32, ConfigError> {
    u32::try_from(value).map_err(|_| ConfigError::NegativeDimension { axis, value })
}

fn normalize_letter(index: usize, raw: char) -> Result<char, ConfigError> {
    let letter = raw.to_ascii_uppercase();
    if letter.is_ascii_uppercase() {
        Ok(letter)
    } else {
        Err(ConfigError::InvalidLetter { index, letter: raw })
    }
}

impl LevelConfig {
    /// Build a configuration from already-parsed cells.
    ///
    /// Targets and time default to 0; use the `with_*` setters to fill them.
    pub fn new(
        level_type: LevelType,
        grid_size: GridSize,
        cells: Vec<GridCell>,
    ) -> Result<Self, ConfigError> {
        if cells.len() != grid_size.tile_count() {
            return Err(ConfigError::GridDataLength {
                x: grid_size.x,
                y: grid_size.y,
                expected: grid_size.tile_count(),
                actual: cells.len(),
            });
        }
        let cells = cells
            .into_iter()
            .enumerate()
            .map(|(index, cell)| {
                Ok(GridCell {
                    letter: normalize_letter(index, cell.letter)?,
                    ..cell
                })
            })
            .collect::<Result<Vec<_>, ConfigError>>()?;

        Ok(Self {
            level_type,
            time_seconds: 0,
            word_count_target: 0,
            score_target: 0,
            bonus_letter_target: 0,
            grid_size,
            cells,
        })
    }

    /// Parse a level blob stored under the identifier of `level_type`.
    pub fn from_json(level_type: LevelType, json: &str) -> Result<Self, ConfigError> {
        let raw: RawLevelConfig = serde_json::from_str(json)?;
        let grid_size = GridSize::new(
            dimension('x', raw.grid_size.x)?,
            dimension('y', raw.grid_size.y)?,
        );

        if raw.grid_data.len() != grid_size.tile_count() {
            return Err(ConfigError::GridDataLength {
                x: grid_size.x,
                y: grid_size.y,
                expected: grid_size.tile_count(),
                actual: raw.grid_data.len(),
            });
        }

        let mut cells = Vec::with_capacity(raw.grid_data.len());
        for (index, data) in raw.grid_data.iter().enumerate() {
            let kind = TileKind::from_code(data.tile_type).ok_or(ConfigError::UnknownTileType {
                index,
                code: data.tile_type,
            })?;
            // Only the first character of the letter string is used.
            let first = data
                .letter
                .chars()
                .next()
                .ok_or(ConfigError::EmptyLetter { index })?;
            cells.push(GridCell::new(kind, first));
        }

        Ok(Self::new(level_type, grid_size, cells)?
            .with_time_seconds(raw.time_sec.max(0) as u32)
            .with_word_count_target(non_negative("wordCount", raw.word_count)?)
            .with_score_target(non_negative("totalScore", raw.total_score)?)
            .with_bonus_letter_target(non_negative("bugCount", raw.bug_count)?))
    }

    /// Build a grid from column strings, mostly for tests and fixtures.
    ///
    /// Each string is one column (x), read from y = 0 upwards. A letter is a
    /// normal tile; prefix it with `#` for blocked or `*` for bonus.
    ///
    /// ```
    /// use tile_words_core::LevelConfig;
    /// use tile_words_types::{LevelType, Position, TileKind};
    ///
    /// let config = LevelConfig::from_columns(LevelType::WordCountGoal, &["C#A", "*TS"]).unwrap();
    /// assert_eq!(config.grid_size.x, 2);
    /// assert_eq!(config.grid_size.y, 2);
    /// assert_eq!(config.cell(Position::new(0, 1)).unwrap().kind, TileKind::Blocked);
    /// assert_eq!(config.cell(Position::new(1, 0)).unwrap().letter, 'T');
    /// ```
    pub fn from_columns(level_type: LevelType, columns: &[&str]) -> Result<Self, ConfigError> {
        let mut parsed: Vec<Vec<GridCell>> = Vec::with_capacity(columns.len());
        for column in columns {
            let mut cells = Vec::new();
            let mut pending = TileKind::Normal;
            for c in column.chars() {
                match c {
                    '#' => pending = TileKind::Blocked,
                    '*' => pending = TileKind::Bonus,
                    letter => {
                        cells.push(GridCell::new(pending, letter));
                        pending = TileKind::Normal;
                    }
                }
            }
            parsed.push(cells);
        }

        let height = parsed.first().map_or(0, Vec::len);
        if parsed.iter().any(|column| column.len() != height) {
            return Err(ConfigError::RaggedColumns);
        }

        let size = GridSize::new(parsed.len() as u32, height as u32);
        Self::new(level_type, size, parsed.into_iter().flatten().collect())
    }

    pub fn with_time_seconds(mut self, seconds: u32) -> Self {
        self.time_seconds = seconds;
        self
    }

    pub fn with_word_count_target(mut self, target: u32) -> Self {
        self.word_count_target = target;
        self
    }

    pub fn with_score_target(mut self, target: u32) -> Self {
        self.score_target = target;
        self
    }

    pub fn with_bonus_letter_target(mut self, target: u32) -> Self {
        self.bonus_letter_target = target;
        self
    }

    pub fn is_timed(&self) -> bool {
        self.time_seconds > 0
    }

    /// Cells in grid-data order.
    pub fn cells(&self) -> &[GridCell] {
        &self.cells
    }

    pub fn cell(&self, position: Position) -> Option<&GridCell> {
        grid_index(position, self.grid_size).map(|i| &self.cells[i])
    }
}
