use crate::{GuessRange, GuessResult, Proximity, ValidationError};

/// Classify one guess against the target.
///
/// Pure: the caller owns the attempt counter and should only advance it when
/// this returns `Ok`. A correct guess reports `attempts_so_far + 1`.
pub fn evaluate(
    guess: Option<i64>,
    target: i64,
    range: GuessRange,
    attempts_so_far: u32,
) -> Result<GuessResult, ValidationError> {
    let guess = guess.ok_or(ValidationError::MissingGuess)?;
    if !range.contains(guess) {
        return Err(ValidationError::OutOfBounds {
            guess,
            min: range.min(),
            max: range.max(),
        });
    }

    if guess == target {
        return Ok(GuessResult::Correct {
            attempts: attempts_so_far.saturating_add(1),
        });
    }

    let proximity = Proximity::new(target.abs_diff(guess), range.width());
    Ok(if guess < target {
        GuessResult::TooLow(proximity)
    } else {
        GuessResult::TooHigh(proximity)
    })
}
