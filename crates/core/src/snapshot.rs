use serde::Serialize;

use crate::controller::MatchController;
use crate::types::{GridSize, LevelType, Outcome, Position};

/// Read-only, serializable view of a match for presentation collaborators
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchSnapshot {
    pub level_type: Option<LevelType>,
    pub grid_size: GridSize,
    /// Board letters, top row first.
    pub rows: Vec<String>,
    pub blocked: Vec<Position>,
    pub bonus: Vec<Position>,
    pub selection: String,
    pub total_score: u32,
    pub words_formed: u32,
    pub average_score_per_word: f32,
    pub time_remaining: f32,
    pub bonus_letters_found: Vec<char>,
    pub formed_words: Vec<String>,
    pub outcome: Outcome,
}

impl MatchSnapshot {
    pub fn capture(controller: &MatchController) -> Self {
        let board = controller.board();
        let state = controller.state();
        let positions_where = |pred: fn(&crate::tile::Tile) -> bool| -> Vec<Position> {
            board
                .tiles()
                .iter()
                .filter(|t| pred(t))
                .map(|t| t.position())
                .collect()
        };

        Self {
            level_type: controller.level_type(),
            grid_size: board.size(),
            rows: board.rows(),
            blocked: positions_where(|t| t.is_blocked()),
            bonus: positions_where(|t| t.is_bonus()),
            selection: controller.selection().word().to_string(),
            total_score: state.total_score,
            words_formed: state.words_formed,
            average_score_per_word: state.average_score_per_word,
            time_remaining: state.time_remaining,
            bonus_letters_found: state.bonus_letters_found.iter().copied().collect(),
            formed_words: controller.formed_words().sorted(),
            outcome: state.outcome,
        }
    }

    pub fn playable(&self) -> bool {
        self.level_type.is_some() && !self.outcome.is_terminal()
    }
}
