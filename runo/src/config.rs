use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_HAND_SIZE, DEFAULT_LOG_CAPACITY, DEFAULT_WINNING_SCORE, TOTAL_CARDS_IN_DECK,
};
use crate::error::{Result, UnoError};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Cumulative score that ends the match.
    pub winning_score: u32,
    /// Cards dealt to each seat at the start of a round.
    pub hand_size: usize,
    /// Number of narration entries kept; older ones are dropped.
    pub log_capacity: usize,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            winning_score: DEFAULT_WINNING_SCORE,
            hand_size: DEFAULT_HAND_SIZE,
            log_capacity: DEFAULT_LOG_CAPACITY,
        }
    }
}

impl MatchConfig {
    pub fn with_winning_score(mut self, winning_score: u32) -> Self {
        self.winning_score = winning_score;
        self
    }

    pub fn with_hand_size(mut self, hand_size: usize) -> Self {
        self.hand_size = hand_size;
        self
    }

    pub fn with_log_capacity(mut self, log_capacity: usize) -> Self {
        self.log_capacity = log_capacity;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.winning_score == 0 {
            return Err(UnoError::ZeroWinningScore);
        }
        if self.hand_size == 0 {
            return Err(UnoError::ZeroHandSize);
        }
        // Both hands, a face-up card and at least one Wild Draw Four-free
        // candidate for it have to fit in the deck.
        if self.hand_size * 2 + 1 + 4 > usize::from(TOTAL_CARDS_IN_DECK) {
            return Err(UnoError::HandSizeTooLarge(self.hand_size));
        }
        if self.log_capacity == 0 {
            return Err(UnoError::ZeroLogCapacity);
        }
        Ok(())
    }
}
