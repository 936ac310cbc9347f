//! Orchestration: direct matches, the strategy fallback chain, validation and
//! the literal fallback

mod config;
pub mod constants;
mod core;
mod errors;
mod result;
mod validation;

pub use config::GeneratorConfig;
pub use self::core::Generator;
pub use errors::{ConfigError, ValidationError};
pub use result::{GenerationResult, ResultSource};
pub use validation::{check_sum, validate_terms};

#[cfg(test)]
mod tests;
