use serde::{Deserialize, Serialize};

use crate::error::{Result, UnoError};
use crate::player::Seat;

/// The part of a match that survives a reload. An unfinished round is not kept.
///
/// Scores may sit at or above the winning score: live card points can carry
/// the losing seat past it, and only emptying a hand decides the match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedProgress {
    pub scores: [u32; 2],
    pub round: u32,
}

impl Default for SavedProgress {
    fn default() -> Self {
        Self {
            scores: [0, 0],
            round: 1,
        }
    }
}

impl SavedProgress {
    pub fn score(&self, seat: Seat) -> u32 {
        self.scores[seat.index()]
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if self.round == 0 {
            return Err(UnoError::NoRound);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_progress_is_first_round() {
        let progress = SavedProgress::default();
        assert_eq!(progress.round, 1);
        assert_eq!(progress.validate(), Ok(()));
    }

    #[test]
    fn return_err_for_round_zero() {
        let progress = SavedProgress {
            scores: [10, 20],
            round: 0,
        };
        assert_eq!(progress.validate(), Err(UnoError::NoRound));
    }

    #[test]
    fn scores_past_the_threshold_are_kept() {
        let progress = SavedProgress {
            scores: [120, 520],
            round: 6,
        };
        assert_eq!(progress.validate(), Ok(()));
        assert_eq!(progress.score(Seat::PlayerTwo), 520);
    }

    #[test]
    fn survives_a_json_round_trip() {
        let progress = SavedProgress {
            scores: [312, 97],
            round: 4,
        };
        let json = serde_json::to_string(&progress).unwrap();
        assert_eq!(json, r#"{"scores":[312,97],"round":4}"#);
        assert_eq!(serde_json::from_str::<SavedProgress>(&json).unwrap(), progress);
    }
}
