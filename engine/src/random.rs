//! Target generation.
//!
//! The random source sits behind [`RandomSource`] so tests can script the
//! secret number while production draws from the thread-local `rand` RNG.

use std::collections::VecDeque;

use guess_types::{GuessRange, Target, ValidationError};

/// Uniform integer source over a closed range.
pub trait RandomSource: Send {
    /// Return a value in `[range.min(), range.max()]`, every value equally likely.
    fn pick(&mut self, range: GuessRange) -> i64;
}

/// Production source backed by `rand`'s thread-local generator.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn pick(&mut self, range: GuessRange) -> i64 {
        rand::random_range(range.min()..=range.max())
    }
}

/// Scripted source: hands out queued values in order, then repeats the last one.
///
/// Values are clamped into the requested range so a script written for one
/// range cannot produce an impossible target in another.
#[derive(Debug, Clone, Default)]
pub struct SequenceRandom {
    queue: VecDeque<i64>,
    last: Option<i64>,
}

impl SequenceRandom {
    #[must_use]
    pub fn new(values: impl IntoIterator<Item = i64>) -> Self {
        Self {
            queue: values.into_iter().collect(),
            last: None,
        }
    }
}

impl RandomSource for SequenceRandom {
    fn pick(&mut self, range: GuessRange) -> i64 {
        let value = self
            .queue
            .pop_front()
            .or(self.last)
            .unwrap_or_else(|| range.min());
        self.last = Some(value);
        value.clamp(range.min(), range.max())
    }
}

/// Validate the bounds and draw a target from `source`.
pub fn generate(
    source: &mut dyn RandomSource,
    min: Option<i64>,
    max: Option<i64>,
) -> Result<Target, ValidationError> {
    let range = GuessRange::from_bounds(min, max)?;
    let value = source.pick(range);
    Ok(Target::new(value, range).unwrap_or_else(|| {
        tracing::warn!(value, %range, "Random source left the range; clamping");
        Target::clamped(value, range)
    }))
}
