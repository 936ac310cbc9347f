use crate::generator::constants::{MAX_ATTEMPTS, MAX_TERMS, PERMISSIVE_THRESHOLD};
use crate::generator::errors::ConfigError;

/// Configuration for expression generation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Maximum number of top-level terms, at most 4
    pub max_terms: usize,
    /// Rounds over the strict strategies before giving up on them
    pub max_attempts: usize,
    /// Targets above this also try the relaxed strategies
    pub permissive_threshold: i64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            max_terms: MAX_TERMS,
            max_attempts: MAX_ATTEMPTS,
            permissive_threshold: PERMISSIVE_THRESHOLD,
        }
    }
}

impl GeneratorConfig {
    /// # Errors
    ///
    /// Returns an error if the term budget is zero or above 4, or if the attempt
    /// budget is zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_terms == 0 {
            return Err(ConfigError::ZeroTerms);
        }
        if self.max_terms > MAX_TERMS {
            return Err(ConfigError::TooManyTerms {
                requested: self.max_terms,
                max: MAX_TERMS,
            });
        }
        if self.max_attempts == 0 {
            return Err(ConfigError::ZeroAttempts);
        }
        Ok(())
    }
}
