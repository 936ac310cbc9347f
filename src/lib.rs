//! Tetraktys - A library for writing integers as "four fours" LaTeX expressions
//!
//! Every generated expression is built only from the digit 4 and mathematical
//! operators. Integers are decomposed into at most four distinct terms drawn
//! from a fixed table of verified expressions, with a seeded random generator
//! breaking ties so that results are reproducible.

pub mod generator;
pub mod rng;
pub mod strategy;
pub mod tables;
pub mod template;

use std::ops::RangeInclusive;

// Re-export the main public API
pub use generator::{
    ConfigError, GenerationResult, Generator, GeneratorConfig, ResultSource, ValidationError,
};
pub use rng::Mulberry32;
pub use strategy::StrategyKind;
pub use template::{TemplateError, evaluate};

/// Generate a four-fours expression for `n` with the default configuration
///
/// This is a convenience function that uses a default generator. It never
/// fails: if no table expression is found, the result is the decimal literal of
/// `n` and [`GenerationResult::is_fallback`] returns true.
///
/// # Arguments
///
/// * `n` - The integer to express
/// * `seed` - Seed for tie-breaking between equal-value expressions
///
/// # Examples
///
/// ```
/// use tetraktys::generate_latex;
///
/// let result = generate_latex(8, 1);
/// assert_eq!(result.text, "4 + 4");
/// assert_eq!(result.value, 8);
///
/// let negative = generate_latex(-8, 1);
/// assert_eq!(negative.text, r"-\left(4 + 4\right)");
/// ```
pub fn generate_latex(n: i64, seed: u64) -> GenerationResult {
    Generator::default().generate(n, seed)
}

/// Generate one expression per integer in `range` with the default configuration
///
/// # Errors
///
/// This function will return an error if:
/// * The range is empty
/// * The range holds more than 100 000 integers
pub fn generate_range(
    range: RangeInclusive<i64>,
    seed: u64,
) -> Result<Vec<GenerationResult>, ConfigError> {
    Generator::default().generate_range(range, seed)
}
