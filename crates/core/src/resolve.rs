//! Word resolution - duplicate check, dictionary check, scoring, unblocking
//!
//! Resolution order for a submitted candidate:
//!
//! 1. Normalize case.
//! 2. Already credited in this attempt -> [`RejectReason::Duplicate`].
//! 3. Not in the dictionary -> [`RejectReason::Invalid`].
//! 4. Otherwise accept: score the tiles, collect bonus letters, unblock the
//!    orthogonal neighbours of every tile, remember the word.
//!
//! Rejections leave the board and the formed-words set untouched.

use std::collections::HashSet;

use crate::board::Board;
use crate::dictionary::{normalize_word, Dictionary};
use crate::scoring::score_tiles;
use crate::selection::Candidate;
use crate::types::{Position, RejectReason};

/// Words already credited during one level attempt (uppercased)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormedWords {
    words: HashSet<String>,
}

impl FormedWords {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(&normalize_word(word))
    }

    /// Returns false if the word was already present.
    pub fn insert(&mut self, word: &str) -> bool {
        self.words.insert(normalize_word(word))
    }

    pub fn clear(&mut self) {
        self.words.clear();
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Credited words in alphabetical order
    pub fn sorted(&self) -> Vec<String> {
        let mut words: Vec<String> = self.words.iter().cloned().collect();
        words.sort();
        words
    }
}

/// A word that earned points
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AcceptedWord {
    pub word: String,
    pub score: u32,
    /// Letters of bonus tiles in the word, in selection order (may repeat).
    pub bonus_letters: Vec<char>,
    /// Tiles that went from blocked to normal.
    pub unblocked: Vec<Position>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Accepted(AcceptedWord),
    Rejected { word: String, reason: RejectReason },
}

impl Resolution {
    pub fn word(&self) -> &str {
        match self {
            Resolution::Accepted(accepted) => &accepted.word,
            Resolution::Rejected { word, .. } => word,
        }
    }

    pub fn is_accepted(&self) -> bool {
        matches!(self, Resolution::Accepted(_))
    }
}

/// Resolve a finished gesture against the dictionary and this attempt's history.
pub fn resolve_word(
    candidate: &Candidate,
    board: &mut Board,
    dictionary: &Dictionary,
    formed: &mut FormedWords,
) -> Resolution {
    let word = normalize_word(&candidate.word);

    if formed.contains(&word) {
        tracing::debug!(%word, "word already formed");
        return Resolution::Rejected {
            word,
            reason: RejectReason::Duplicate,
        };
    }

    if !dictionary.contains(&word) {
        tracing::debug!(%word, "invalid word");
        return Resolution::Rejected {
            word,
            reason: RejectReason::Invalid,
        };
    }

    let scored = score_tiles(candidate.positions.iter().filter_map(|&p| board.tile(p)));

    let mut unblocked = Vec::new();
    for &position in &candidate.positions {
        unblocked.extend(board.unblock_neighbors_of(position));
    }

    formed.insert(&word);
    tracing::debug!(%word, score = scored.total, "valid word");

    Resolution::Accepted(AcceptedWord {
        word,
        score: scored.total,
        bonus_letters: scored.bonus_letters,
        unblocked,
    })
}
