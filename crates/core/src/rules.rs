//! Level rules - per level type completion check
//!
//! | Level type | Time counted | Win | Lose |
//! |------------|--------------|-----|------|
//! | `WordCountGoal` | no | words >= target | never |
//! | `BonusWordCountGoal` | no | distinct bonus letters >= target | never |
//! | `ScoreWithinTime` | yes | score >= target | time up, target unmet |
//! | `WordsWithinTime` | yes | words >= target while time remains | time up |
//!
//! Win is checked before lose. A timed level type whose configuration has no
//! countdown (`time_seconds == 0`) never runs out of time.

use crate::config::LevelConfig;
use crate::types::{LevelType, Outcome};

/// Goal thresholds for one level attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelRules {
    pub level_type: LevelType,
    pub word_count_target: u32,
    pub score_target: u32,
    pub bonus_letter_target: u32,
    /// Whether a countdown is running at all.
    pub timed: bool,
}

/// Progress numbers the rules are evaluated against
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Progress {
    pub total_score: u32,
    pub words_formed: u32,
    pub bonus_letters_found: usize,
    pub time_remaining: f32,
}

impl LevelRules {
    pub fn from_config(config: &LevelConfig) -> Self {
        Self {
            level_type: config.level_type,
            word_count_target: config.word_count_target,
            score_target: config.score_target,
            bonus_letter_target: config.bonus_letter_target,
            timed: config.is_timed(),
        }
    }

    fn time_up(&self, progress: &Progress) -> bool {
        self.timed && progress.time_remaining <= 0.0
    }

    /// Evaluate the goal. Returns `InProgress` when neither side is decided.
    pub fn evaluate(&self, progress: &Progress) -> Outcome {
        let time_up = self.time_up(progress);

        let (goal_met, can_lose) = match self.level_type {
            // Time is not considered in these levels
            LevelType::WordCountGoal => (progress.words_formed >= self.word_count_target, false),
            LevelType::BonusWordCountGoal => (
                progress.bonus_letters_found >= self.bonus_letter_target as usize,
                false,
            ),
            LevelType::ScoreWithinTime => (progress.total_score >= self.score_target, true),
            LevelType::WordsWithinTime => (
                progress.words_formed >= self.word_count_target && !time_up,
                true,
            ),
        };

        if goal_met {
            Outcome::Won
        } else if can_lose && time_up {
            Outcome::Lost
        } else {
            Outcome::InProgress
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rules(level_type: LevelType, timed: bool) -> LevelRules {
        LevelRules {
            level_type,
            word_count_target: 3,
            score_target: 50,
            bonus_letter_target: 2,
            timed,
        }
    }

    fn progress(total_score: u32, words_formed: u32, bonus: usize, time: f32) -> Progress {
        Progress {
            total_score,
            words_formed,
            bonus_letters_found: bonus,
            time_remaining: time,
        }
    }

    #[test]
    fn test_word_count_goal_ignores_time() {
        let r = rules(LevelType::WordCountGoal, true);
        assert_eq!(r.evaluate(&progress(0, 2, 0, -1.0)), Outcome::InProgress);
        assert_eq!(r.evaluate(&progress(0, 3, 0, -1.0)), Outcome::Won);
        assert_eq!(r.evaluate(&progress(0, 3, 0, 100.0)), Outcome::Won);
    }

    #[test]
    fn test_bonus_goal_counts_distinct_letters() {
        let r = rules(LevelType::BonusWordCountGoal, false);
        assert_eq!(r.evaluate(&progress(999, 99, 1, 0.0)), Outcome::InProgress);
        assert_eq!(r.evaluate(&progress(0, 0, 2, 0.0)), Outcome::Won);
    }

    #[test]
    fn test_score_within_time() {
        let r = rules(LevelType::ScoreWithinTime, true);
        assert_eq!(r.evaluate(&progress(40, 1, 0, 2.0)), Outcome::InProgress);
        assert_eq!(r.evaluate(&progress(40, 1, 0, 0.0)), Outcome::Lost);
        assert_eq!(r.evaluate(&progress(50, 1, 0, 3.0)), Outcome::Won);
        // Win takes priority when both hold
        assert_eq!(r.evaluate(&progress(50, 1, 0, 0.0)), Outcome::Won);
    }

    #[test]
    fn test_words_within_time() {
        let r = rules(LevelType::WordsWithinTime, true);
        assert_eq!(r.evaluate(&progress(0, 3, 0, 0.5)), Outcome::Won);
        assert_eq!(r.evaluate(&progress(0, 2, 0, 0.5)), Outcome::InProgress);
        // Reaching the target exactly as time runs out is a loss
        assert_eq!(r.evaluate(&progress(0, 3, 0, 0.0)), Outcome::Lost);
        assert_eq!(r.evaluate(&progress(0, 1, 0, -0.1)), Outcome::Lost);
    }

    #[test]
    fn test_untimed_timed_level_never_loses() {
        let r = rules(LevelType::WordsWithinTime, false);
        assert_eq!(r.evaluate(&progress(0, 1, 0, 0.0)), Outcome::InProgress);
        assert_eq!(r.evaluate(&progress(0, 3, 0, 0.0)), Outcome::Won);

        let r = rules(LevelType::ScoreWithinTime, false);
        assert_eq!(r.evaluate(&progress(10, 1, 0, 0.0)), Outcome::InProgress);
    }

    #[test]
    fn test_from_config() {
        let config = LevelConfig::from_columns(LevelType::ScoreWithinTime, &["AB"])
            .unwrap()
            .with_time_seconds(10)
            .with_score_target(50);
        let r = LevelRules::from_config(&config);
        assert!(r.timed);
        assert_eq!(r.score_target, 50);
        assert_eq!(r.level_type, LevelType::ScoreWithinTime);
    }
}
