//! One round of play: a target plus the attempts made against it.

use guess_types::{GuessRange, GuessResult, Target, ValidationError, evaluate};

/// Monotonic id distinguishing sessions, so late timer events can be matched
/// against the session that scheduled them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SessionId(u64);

impl SessionId {
    pub(crate) const FIRST: Self = Self(1);

    #[must_use]
    pub(crate) const fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }

    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone)]
pub struct Session {
    id: SessionId,
    target: Target,
    attempts: u32,
    last_result: Option<GuessResult>,
}

impl Session {
    #[must_use]
    pub fn new(id: SessionId, target: Target) -> Self {
        Self {
            id,
            target,
            attempts: 0,
            last_result: None,
        }
    }

    /// Evaluate a guess and count it.
    ///
    /// Rejected guesses leave the attempt counter and last result untouched.
    pub fn submit(&mut self, guess: Option<i64>) -> Result<GuessResult, ValidationError> {
        let result = evaluate(guess, self.target.value(), self.target.range(), self.attempts)?;
        self.attempts = self.attempts.saturating_add(1);
        self.last_result = Some(result);
        Ok(result)
    }

    #[must_use]
    pub fn id(&self) -> SessionId {
        self.id
    }

    #[must_use]
    pub fn target(&self) -> i64 {
        self.target.value()
    }

    #[must_use]
    pub fn range(&self) -> GuessRange {
        self.target.range()
    }

    #[must_use]
    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    #[must_use]
    pub fn last_result(&self) -> Option<GuessResult> {
        self.last_result
    }

    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.last_result.is_some_and(GuessResult::is_correct)
    }
}
