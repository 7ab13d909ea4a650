//! Core domain types for the guessing game.
//!
//! This crate contains pure domain types with no IO, no async, and minimal dependencies.
//! The guess evaluator lives here because it is plain arithmetic over these types.

mod error;
mod evaluate;
mod outcome;
mod range;
pub mod ui;

pub use error::{NumberField, ValidationError, parse_field};
pub use evaluate::evaluate;
pub use outcome::{Direction, GuessResult, Mood, Proximity, ProximityTier};
pub use range::{GuessRange, Target};
