use crate::ValidationError;

/// Inclusive `[min, max]` interval chosen by the user.
///
/// Invariant: `min < max`. The only constructor enforces it, so a `GuessRange`
/// in hand always has a width of at least one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GuessRange {
    min: i64,
    max: i64,
}

impl GuessRange {
    pub fn new(min: i64, max: i64) -> Result<Self, ValidationError> {
        if min >= max {
            return Err(ValidationError::InvalidOrder { min, max });
        }
        Ok(Self { min, max })
    }

    /// Build from possibly-absent bounds, as read off the Home screen.
    pub fn from_bounds(min: Option<i64>, max: Option<i64>) -> Result<Self, ValidationError> {
        match (min, max) {
            (Some(min), Some(max)) => Self::new(min, max),
            _ => Err(ValidationError::MissingBounds),
        }
    }

    #[must_use]
    pub const fn min(self) -> i64 {
        self.min
    }

    #[must_use]
    pub const fn max(self) -> i64 {
        self.max
    }

    /// `max - min`, never zero. `u64` so the full `i64` span fits.
    #[must_use]
    pub const fn width(self) -> u64 {
        self.max.abs_diff(self.min)
    }

    #[must_use]
    pub const fn contains(self, value: i64) -> bool {
        value >= self.min && value <= self.max
    }
}

impl std::fmt::Display for GuessRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.min, self.max)
    }
}

/// The secret number for one session, together with the range it was drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Target {
    value: i64,
    range: GuessRange,
}

impl Target {
    /// Pair a drawn value with its range.
    ///
    /// Returns `None` if `value` lies outside `range`; random sources are
    /// expected to stay inside, this only guards a misbehaving one.
    #[must_use]
    pub fn new(value: i64, range: GuessRange) -> Option<Self> {
        range.contains(value).then_some(Self { value, range })
    }

    /// Pair `value` with `range`, pulling it onto the nearest bound if outside.
    #[must_use]
    pub fn clamped(value: i64, range: GuessRange) -> Self {
        Self {
            value: value.clamp(range.min, range.max),
            range,
        }
    }

    #[must_use]
    pub const fn value(self) -> i64 {
        self.value
    }

    #[must_use]
    pub const fn range(self) -> GuessRange {
        self.range
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_equal_bounds() {
        let err = GuessRange::new(10, 10).unwrap_err();
        assert_eq!(err.reason(), "invalid order");
    }

    #[test]
    fn rejects_inverted_bounds() {
        assert_eq!(
            GuessRange::new(5, -5),
            Err(ValidationError::InvalidOrder { min: 5, max: -5 })
        );
    }

    #[test]
    fn missing_bound_wins_over_order() {
        assert_eq!(
            GuessRange::from_bounds(None, Some(1)),
            Err(ValidationError::MissingBounds)
        );
        assert_eq!(
            GuessRange::from_bounds(Some(1), None),
            Err(ValidationError::MissingBounds)
        );
    }

    #[test]
    fn width_spans_full_i64() {
        let range = GuessRange::new(i64::MIN, i64::MAX).unwrap();
        assert_eq!(range.width(), u64::MAX);
    }

    #[test]
    fn contains_is_inclusive() {
        let range = GuessRange::new(1, 100).unwrap();
        assert!(range.contains(1));
        assert!(range.contains(100));
        assert!(!range.contains(0));
        assert!(!range.contains(101));
    }

    #[test]
    fn target_must_lie_in_range() {
        let range = GuessRange::new(1, 10).unwrap();
        assert!(Target::new(10, range).is_some());
        assert!(Target::new(11, range).is_none());
    }
}
