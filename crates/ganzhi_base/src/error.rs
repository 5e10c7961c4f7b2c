//! Error types for sexagenary calculations.

use thiserror::Error;

/// Errors from input validation.
///
/// The calculators themselves never fail on integer input; these errors come
/// from the validating entry points and from symbol parsing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum GanzhiError {
    /// A field is outside its nominal domain.
    #[error("invalid input: {0}")]
    InvalidInput(&'static str),
    /// The year/month/day triple is not a Gregorian calendar date.
    #[error("invalid date: {year:04}-{month:02}-{day:02}")]
    InvalidDate { year: i32, month: u32, day: u32 },
    /// A symbol name could not be resolved.
    #[error("unknown symbol: {0}")]
    UnknownSymbol(String),
}
