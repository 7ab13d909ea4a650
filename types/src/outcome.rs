//! Guess classification.
//!
//! A miss carries a single [`Proximity`] measurement from which both the
//! two-tier "close" flag and the three-tier [`ProximityTier`] are derived.

/// How close a missed guess landed, relative to the range width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Proximity {
    difference: u64,
    width: u64,
}

impl Proximity {
    #[must_use]
    pub const fn new(difference: u64, width: u64) -> Self {
        Self { difference, width }
    }

    /// `|target - guess|`
    #[must_use]
    pub const fn difference(self) -> u64 {
        self.difference
    }

    /// `max - min`
    #[must_use]
    pub const fn width(self) -> u64 {
        self.width
    }

    /// Difference is at most 10% of the width. Exactly 10% counts as close.
    #[must_use]
    pub const fn is_close(self) -> bool {
        (self.difference as u128) * 10 <= self.width as u128
    }

    /// Three-tier classification: under 10% is close, under 30% is near.
    #[must_use]
    pub const fn tier(self) -> ProximityTier {
        let scaled = (self.difference as u128) * 10;
        let width = self.width as u128;
        if scaled < width {
            ProximityTier::Close
        } else if scaled < width * 3 {
            ProximityTier::Near
        } else {
            ProximityTier::Far
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProximityTier {
    Close,
    Near,
    Far,
}

impl ProximityTier {
    /// Auxiliary hint shown under the directional feedback.
    #[must_use]
    pub const fn hint(self) -> &'static str {
        match self {
            Self::Close => "Very close!",
            Self::Near => "Getting there.",
            Self::Far => "Still a long way off.",
        }
    }

    #[must_use]
    pub const fn mood(self) -> Mood {
        match self {
            Self::Close => Mood::Surprised,
            Self::Near => Mood::Neutral,
            Self::Far => Mood::Sad,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Guess was below the target.
    TooLow,
    /// Guess was above the target.
    TooHigh,
}

impl Direction {
    #[must_use]
    pub const fn advice(self) -> &'static str {
        match self {
            Self::TooLow => "go higher",
            Self::TooHigh => "go lower",
        }
    }
}

/// Result of evaluating one valid guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessResult {
    Correct { attempts: u32 },
    TooHigh(Proximity),
    TooLow(Proximity),
}

impl GuessResult {
    #[must_use]
    pub const fn is_correct(self) -> bool {
        matches!(self, Self::Correct { .. })
    }

    #[must_use]
    pub const fn direction(self) -> Option<Direction> {
        match self {
            Self::Correct { .. } => None,
            Self::TooHigh(_) => Some(Direction::TooHigh),
            Self::TooLow(_) => Some(Direction::TooLow),
        }
    }

    #[must_use]
    pub const fn proximity(self) -> Option<Proximity> {
        match self {
            Self::Correct { .. } => None,
            Self::TooHigh(p) | Self::TooLow(p) => Some(p),
        }
    }

    #[must_use]
    pub const fn mood(self) -> Mood {
        match self {
            Self::Correct { .. } => Mood::Happy,
            Self::TooHigh(p) | Self::TooLow(p) => p.tier().mood(),
        }
    }

    /// Feedback line for the Playing screen.
    ///
    /// `target` is only read for the winning message.
    #[must_use]
    pub fn feedback(self, target: i64) -> String {
        match self {
            Self::Correct { attempts } => format!(
                "Congratulations! You got it in {attempts} attempt(s)! The number was {target}."
            ),
            Self::TooLow(p) if p.is_close() => {
                "Your guess is low. Close! Try a little higher.".to_string()
            }
            Self::TooLow(_) => "Your guess is low. Try a much higher number.".to_string(),
            Self::TooHigh(p) if p.is_close() => {
                "Your guess is high. Close! Try a little lower.".to_string()
            }
            Self::TooHigh(_) => "Your guess is high. Try a much lower number.".to_string(),
        }
    }
}

/// Presentation tag that selects the face art next to the feedback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mood {
    #[default]
    Thinking,
    Happy,
    Sad,
    Surprised,
    Neutral,
}

impl Mood {
    pub const ALL: [Self; 5] = [
        Self::Thinking,
        Self::Happy,
        Self::Sad,
        Self::Surprised,
        Self::Neutral,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Thinking => "thinking",
            Self::Happy => "happy",
            Self::Sad => "sad",
            Self::Surprised => "surprised",
            Self::Neutral => "neutral",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exactly_ten_percent_is_close_but_not_close_tier() {
        let p = Proximity::new(10, 100);
        assert!(p.is_close());
        assert_eq!(p.tier(), ProximityTier::Near);
    }

    #[test]
    fn tiers_split_at_ten_and_thirty_percent() {
        assert_eq!(Proximity::new(9, 100).tier(), ProximityTier::Close);
        assert_eq!(Proximity::new(29, 100).tier(), ProximityTier::Near);
        assert_eq!(Proximity::new(30, 100).tier(), ProximityTier::Far);
    }

    #[test]
    fn close_flag_handles_huge_values() {
        let p = Proximity::new(u64::MAX / 10, u64::MAX);
        assert!(p.is_close());
        let p = Proximity::new(u64::MAX, u64::MAX);
        assert!(!p.is_close());
        assert_eq!(p.tier(), ProximityTier::Far);
    }

    #[test]
    fn moods_follow_outcome() {
        assert_eq!(GuessResult::Correct { attempts: 3 }.mood(), Mood::Happy);
        assert_eq!(
            GuessResult::TooLow(Proximity::new(1, 100)).mood(),
            Mood::Surprised
        );
        assert_eq!(
            GuessResult::TooHigh(Proximity::new(20, 100)).mood(),
            Mood::Neutral
        );
        assert_eq!(
            GuessResult::TooHigh(Proximity::new(80, 100)).mood(),
            Mood::Sad
        );
    }

    #[test]
    fn feedback_text_matches_direction_and_closeness() {
        let close = Proximity::new(5, 99);
        let far = Proximity::new(45, 99);
        assert!(GuessResult::TooLow(close).feedback(0).contains("little higher"));
        assert!(GuessResult::TooLow(far).feedback(0).contains("much higher"));
        assert!(GuessResult::TooHigh(close).feedback(0).contains("little lower"));
        assert!(GuessResult::TooHigh(far).feedback(0).contains("much lower"));
        assert_eq!(
            GuessResult::Correct { attempts: 2 }.feedback(50),
            "Congratulations! You got it in 2 attempt(s)! The number was 50."
        );
    }

    #[test]
    fn direction_advice() {
        assert_eq!(Direction::TooLow.advice(), "go higher");
        assert_eq!(Direction::TooHigh.advice(), "go lower");
    }
}
