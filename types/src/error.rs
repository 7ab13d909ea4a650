use thiserror::Error;

/// Which numeric field a piece of raw text was typed into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberField {
    Min,
    Max,
    Guess,
}

impl NumberField {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Min => "minimum",
            Self::Max => "maximum",
            Self::Guess => "guess",
        }
    }
}

impl std::fmt::Display for NumberField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// User-input validation failure.
///
/// Every variant is recoverable by correcting the input; the operation that
/// produced it must not have mutated any state. The `Display` text is what the
/// blocking notice shows.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please fill in both values")]
    MissingBounds,
    #[error("The minimum value ({min}) must be less than the maximum ({max})")]
    InvalidOrder { min: i64, max: i64 },
    #[error("Please enter a guess")]
    MissingGuess,
    #[error("Your guess must be between {min} and {max}")]
    OutOfBounds { guess: i64, min: i64, max: i64 },
    #[error("'{raw}' is not a valid {field}")]
    NotANumber { field: NumberField, raw: String },
}

impl ValidationError {
    /// Short machine-facing reason, stable across wording changes.
    #[must_use]
    pub const fn reason(&self) -> &'static str {
        match self {
            Self::MissingBounds => "missing bounds",
            Self::InvalidOrder { .. } => "invalid order",
            Self::MissingGuess => "missing guess",
            Self::OutOfBounds { .. } => "out of bounds",
            Self::NotANumber { .. } => "not a number",
        }
    }
}

/// Parse the text of a numeric field.
///
/// Blank text is absent (`Ok(None)`); anything that is not an `i64` is rejected.
pub fn parse_field(field: NumberField, raw: &str) -> Result<Option<i64>, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed
        .parse::<i64>()
        .map(Some)
        .map_err(|_| ValidationError::NotANumber {
            field,
            raw: trimmed.to_string(),
        })
}
