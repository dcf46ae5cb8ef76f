//! Scoring module - letter values and word totals
//!
//! Simple alphabet scoring: A=1, B=2, ..., Z=26. Bonus tiles count double
//! and report their letter so the completion tracker can collect it.

use crate::tile::Tile;

/// Score calculation result
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WordScore {
    pub total: u32,
    /// Letters of the bonus tiles in the word, in selection order.
    pub bonus_letters: Vec<char>,
}

/// Letter value (A=1 .. Z=26), case-insensitive.
///
/// Characters outside A-Z score 0. Level loading rejects them, so a board
/// never holds one.
pub fn letter_score(letter: char) -> u32 {
    let upper = letter.to_ascii_uppercase();
    if upper.is_ascii_uppercase() {
        upper as u32 - 'A' as u32 + 1
    } else {
        0
    }
}

/// Sum tile scores and collect bonus letters
pub fn score_tiles<'a, I>(tiles: I) -> WordScore
where
    I: IntoIterator<Item = &'a Tile>,
{
    let mut result = WordScore::default();
    for tile in tiles {
        if tile.is_bonus() {
            result.bonus_letters.push(tile.letter());
        }
        result.total = result.total.saturating_add(tile.score());
    }
    result
}

/// Average points per word, 0 when nothing has been formed yet.
pub fn average_score(total_score: u32, words_formed: u32) -> f32 {
    if words_formed == 0 {
        0.0
    } else {
        total_score as f32 / words_formed as f32
    }
}
