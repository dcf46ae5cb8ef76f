//! Session configuration from environment variables.

use std::path::PathBuf;

use crate::types::{GameMode, LevelType};

/// Where the session finds its data and what it starts with
#[derive(Debug, Clone, PartialEq)]
pub struct SessionConfig {
    pub level_dir: PathBuf,
    pub dictionary_path: PathBuf,
    pub level_type: LevelType,
    pub mode: GameMode,
    /// Width/height ratio used for camera framing in level-start notices.
    pub aspect_ratio: f32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            level_dir: PathBuf::from("levels"),
            dictionary_path: PathBuf::from("levels/wordList.txt"),
            level_type: LevelType::WordCountGoal,
            mode: GameMode::Levels,
            aspect_ratio: 16.0 / 9.0,
        }
    }
}

impl SessionConfig {
    /// Create from environment variables, falling back to the defaults.
    ///
    /// - `TILE_WORDS_LEVEL_DIR`
    /// - `TILE_WORDS_DICTIONARY`
    /// - `TILE_WORDS_LEVEL` (level type name or index)
    /// - `TILE_WORDS_MODE` (`levels` or `endless`)
    /// - `TILE_WORDS_ASPECT` (screen width / height)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let non_empty = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        let level_dir = non_empty("TILE_WORDS_LEVEL_DIR")
            .map(PathBuf::from)
            .unwrap_or(defaults.level_dir);
        let dictionary_path = non_empty("TILE_WORDS_DICTIONARY")
            .map(PathBuf::from)
            .unwrap_or(defaults.dictionary_path);
        let level_type = non_empty("TILE_WORDS_LEVEL")
            .and_then(|s| {
                s.parse::<usize>()
                    .ok()
                    .and_then(LevelType::from_index)
                    .or_else(|| LevelType::from_str(&s))
            })
            .unwrap_or(defaults.level_type);
        let mode = non_empty("TILE_WORDS_MODE")
            .and_then(|s| GameMode::from_str(&s))
            .unwrap_or(defaults.mode);
        let aspect_ratio = non_empty("TILE_WORDS_ASPECT")
            .and_then(|s| s.parse::<f32>().ok())
            .filter(|a| a.is_finite() && *a > 0.0)
            .unwrap_or(defaults.aspect_ratio);

        Self {
            level_dir,
            dictionary_path,
            level_type,
            mode,
            aspect_ratio,
        }
    }
}
