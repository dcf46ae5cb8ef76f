//! Match controller - drives one playthrough of a level
//!
//! This module ties together the board, the selection session, word
//! resolution, and the level rules. It owns the running totals and the
//! countdown, and publishes every observable change on its [`EventBus`].
//!
//! Call order matters: a word's score and bonus letters are applied before
//! completion is evaluated, and a finished match (won or lost) ignores every
//! further tick, gesture, and score report.

use std::collections::BTreeSet;
use std::sync::mpsc::Receiver;

use crate::board::Board;
use crate::config::LevelConfig;
use crate::dictionary::Dictionary;
use crate::events::{EventBus, MatchEvent, SubscriptionId};
use crate::resolve::{resolve_word, FormedWords, Resolution};
use crate::rules::{LevelRules, Progress};
use crate::scoring::average_score;
use crate::selection::{AddResult, SelectionSession};
use crate::snapshot::MatchSnapshot;
use crate::types::{LevelType, Outcome, Position};

/// Running totals for the current level attempt
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MatchState {
    pub total_score: u32,
    pub words_formed: u32,
    pub average_score_per_word: f32,
    pub time_remaining: f32,
    /// Distinct letters of bonus tiles used in accepted words.
    pub bonus_letters_found: BTreeSet<char>,
    pub outcome: Outcome,
}

impl MatchState {
    fn progress(&self) -> Progress {
        Progress {
            total_score: self.total_score,
            words_formed: self.words_formed,
            bonus_letters_found: self.bonus_letters_found.len(),
            time_remaining: self.time_remaining,
        }
    }
}

#[derive(Debug)]
pub struct MatchController {
    dictionary: Dictionary,
    config: Option<LevelConfig>,
    rules: Option<LevelRules>,
    board: Board,
    selection: SelectionSession,
    formed: FormedWords,
    state: MatchState,
    events: EventBus,
}

impl MatchController {
    /// Create a controller with no level loaded.
    ///
    /// Gestures and ticks are ignored until [`start_level`](Self::start_level).
    pub fn new(dictionary: Dictionary) -> Self {
        Self {
            dictionary,
            config: None,
            rules: None,
            board: Board::new(),
            selection: SelectionSession::new(),
            formed: FormedWords::new(),
            state: MatchState::default(),
            events: EventBus::new(),
        }
    }

    /// Reset all match state and rebuild the board for `config`.
    pub fn start_level(&mut self, config: LevelConfig) {
        self.selection.clear(&mut self.board);
        self.board.initialize(&config);
        self.formed.clear();
        self.state = MatchState {
            time_remaining: config.time_seconds as f32,
            ..MatchState::default()
        };
        self.rules = Some(LevelRules::from_config(&config));

        tracing::info!(
            level_type = config.level_type.as_str(),
            width = config.grid_size.x,
            height = config.grid_size.y,
            time_seconds = config.time_seconds,
            "level started"
        );
        self.events.publish(MatchEvent::LevelInitialized {
            level_type: config.level_type,
            grid_size: config.grid_size,
            time_seconds: config.time_seconds,
        });
        self.config = Some(config);
    }

    /// Start the current level again from scratch.
    ///
    /// Returns false if no level has been started yet.
    pub fn restart(&mut self) -> bool {
        match self.config.clone() {
            Some(config) => {
                self.start_level(config);
                true
            }
            None => false,
        }
    }

    /// Advance the countdown by `delta_seconds`.
    ///
    /// Only timed levels that are still in progress count down. Completion
    /// is evaluated on the tick that takes the remaining time to zero.
    pub fn tick(&mut self, delta_seconds: f32) {
        if self.is_terminal() || !delta_seconds.is_finite() || delta_seconds <= 0.0 {
            return;
        }
        if !self.config.as_ref().is_some_and(LevelConfig::is_timed) {
            return;
        }

        let before = self.state.time_remaining;
        self.state.time_remaining = (before - delta_seconds).max(0.0);
        if before > 0.0 && self.state.time_remaining <= 0.0 {
            tracing::debug!("time is up");
            self.check_completion();
        }
    }

    /// Begin a gesture on the tile at `position`.
    pub fn start_drag(&mut self, position: Position) -> AddResult {
        if self.is_terminal() || self.config.is_none() {
            return AddResult::NotDragging;
        }
        self.selection.start_drag(&mut self.board, position)
    }

    /// Offer the tile at `position` to the gesture in progress.
    pub fn extend_drag(&mut self, position: Position) -> AddResult {
        if self.is_terminal() {
            return AddResult::NotDragging;
        }
        self.selection.add_tile(&mut self.board, position)
    }

    /// Finish the gesture and resolve the traced word, if any.
    ///
    /// Returns `None` when fewer than two tiles were selected or the match
    /// is already over.
    pub fn end_drag(&mut self) -> Option<Resolution> {
        let candidate = self.selection.end_drag(&mut self.board)?;
        if self.is_terminal() {
            return None;
        }

        let resolution = resolve_word(
            &candidate,
            &mut self.board,
            &self.dictionary,
            &mut self.formed,
        );

        match &resolution {
            Resolution::Accepted(accepted) => {
                for &letter in &accepted.bonus_letters {
                    self.on_bonus_letter_found(letter);
                }
                for &position in &accepted.unblocked {
                    self.events.publish(MatchEvent::TileUnblocked { position });
                }
                self.events.publish(MatchEvent::WordAccepted {
                    word: accepted.word.clone(),
                    score: accepted.score,
                });
                self.on_word_accepted(accepted.score);
            }
            Resolution::Rejected { word, reason } => {
                self.events.publish(MatchEvent::WordRejected {
                    word: word.clone(),
                    reason: *reason,
                });
            }
        }

        Some(resolution)
    }

    /// Credit an accepted word's score and re-evaluate completion.
    pub fn on_word_accepted(&mut self, score: u32) {
        if self.is_terminal() {
            return;
        }
        self.state.words_formed += 1;
        self.state.total_score = self.state.total_score.saturating_add(score);
        self.state.average_score_per_word =
            average_score(self.state.total_score, self.state.words_formed);

        self.events.publish(MatchEvent::ScoreUpdated {
            total_score: self.state.total_score,
            average_score_per_word: self.state.average_score_per_word,
        });
        self.check_completion();
    }

    /// Record a bonus letter; repeats of the same letter do not count twice.
    pub fn on_bonus_letter_found(&mut self, letter: char) {
        if self.is_terminal() {
            return;
        }
        let letter = letter.to_ascii_uppercase();
        if self.state.bonus_letters_found.insert(letter) {
            tracing::debug!(%letter, "bonus letter found");
        }
        self.events.publish(MatchEvent::BonusLetterFound { letter });
    }

    fn check_completion(&mut self) {
        if self.is_terminal() {
            return;
        }
        let Some(rules) = self.rules else {
            return;
        };

        match rules.evaluate(&self.state.progress()) {
            Outcome::Won => {
                self.state.outcome = Outcome::Won;
                tracing::info!(score = self.state.total_score, words = self.state.words_formed, "level won");
                self.events.publish(MatchEvent::LevelWon);
            }
            Outcome::Lost => {
                self.state.outcome = Outcome::Lost;
                tracing::info!(score = self.state.total_score, words = self.state.words_formed, "level lost");
                self.events.publish(MatchEvent::LevelLost);
            }
            Outcome::InProgress => {}
        }
    }

    pub fn subscribe(&mut self) -> (SubscriptionId, Receiver<MatchEvent>) {
        self.events.subscribe()
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.events.unsubscribe(id)
    }

    pub fn state(&self) -> &MatchState {
        &self.state
    }

    pub fn outcome(&self) -> Outcome {
        self.state.outcome
    }

    pub fn is_terminal(&self) -> bool {
        self.state.outcome.is_terminal()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn selection(&self) -> &SelectionSession {
        &self.selection
    }

    pub fn formed_words(&self) -> &FormedWords {
        &self.formed
    }

    pub fn config(&self) -> Option<&LevelConfig> {
        self.config.as_ref()
    }

    pub fn level_type(&self) -> Option<LevelType> {
        self.config.as_ref().map(|c| c.level_type)
    }

    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    pub fn snapshot(&self) -> MatchSnapshot {
        MatchSnapshot::capture(self)
    }
}
