use std::ops::RangeInclusive;

use log::{debug, info, warn};
use rayon::prelude::*;

use crate::generator::config::GeneratorConfig;
use crate::generator::constants::MAX_RANGE_LEN;
use crate::generator::errors::{ConfigError, ValidationError};
use crate::generator::result::{GenerationResult, ResultSource};
use crate::generator::validation::{check_sum, validate_terms};
use crate::rng::Mulberry32;
use crate::strategy::{StrategyKind, Term, UsedTexts};
use crate::tables::{POW2_CEILING, Tables, ZERO_ATOM, tables};

/// Turns integers into four-fours LaTeX expressions
#[derive(Debug, Clone)]
pub struct Generator {
    config: GeneratorConfig,
    tables: &'static Tables,
}

impl Default for Generator {
    fn default() -> Self {
        Self {
            config: GeneratorConfig::default(),
            tables: tables(),
        }
    }
}

impl Generator {
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn new(config: GeneratorConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            tables: tables(),
        })
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generate an expression for `n`.
    ///
    /// Never fails: when no strategy succeeds the result is the decimal literal
    /// of `n`. The output depends only on `n`, `seed` and the configuration.
    pub fn generate(&self, n: i64, seed: u64) -> GenerationResult {
        if n < 0 {
            return match n.checked_neg() {
                Some(magnitude) => self.generate(magnitude, seed).negated(n),
                None => {
                    debug!("Cannot negate {}, using literal", n);
                    GenerationResult::literal(n)
                }
            };
        }

        if n == 0 {
            return GenerationResult::single(ZERO_ATOM, 0, ResultSource::Zero);
        }

        let mut rng = Mulberry32::new(seed);

        if let Some(result) = self.direct_match(n, &mut rng) {
            info!("Direct match for {}: {}", n, result);
            return result;
        }

        if let Some((kind, terms)) = self.search(n, &mut rng) {
            return GenerationResult::from_terms(&terms, n, kind);
        }

        warn!("No expression found for {}, using literal", n);
        GenerationResult::literal(n)
    }

    /// Generate one result per target in `range`, in order, all with `seed`
    ///
    /// # Errors
    ///
    /// Returns an error if the range is empty or holds more than 100 000 targets.
    pub fn generate_range(
        &self,
        range: RangeInclusive<i64>,
        seed: u64,
    ) -> Result<Vec<GenerationResult>, ConfigError> {
        let (start, end) = (*range.start(), *range.end());
        if start > end {
            return Err(ConfigError::EmptyRange { start, end });
        }

        let len = end.abs_diff(start).saturating_add(1);
        if len > MAX_RANGE_LEN {
            return Err(ConfigError::RangeTooLarge {
                len,
                max: MAX_RANGE_LEN,
            });
        }

        debug!("Generating {} targets from {} to {}", len, start, end);
        let targets: Vec<i64> = range.collect();
        Ok(targets
            .par_iter()
            .map(|&n| self.generate(n, seed))
            .collect())
    }

    fn direct_match(&self, n: i64, rng: &mut Mulberry32) -> Option<GenerationResult> {
        if n <= POW2_CEILING
            && n.count_ones() == 1
            && let Some(text) = self.tables.select_template(n, rng)
        {
            return Some(GenerationResult::single(text, n, ResultSource::Direct));
        }

        let text = rng.pick(self.tables.atom_lookup(n))?;
        Some(GenerationResult::single(text, n, ResultSource::Direct))
    }

    /// Run the strict strategies for the configured number of attempts, then the
    /// relaxed ones once if `n` is above the threshold.
    pub(crate) fn search(
        &self,
        n: i64,
        rng: &mut Mulberry32,
    ) -> Option<(StrategyKind, Vec<Term>)> {
        for attempt in 0..self.config.max_attempts {
            for kind in StrategyKind::STRICT {
                if let Some(terms) = self.run_strategy(kind, n, rng) {
                    info!("{} strategy solved {} on attempt {}", kind, n, attempt + 1);
                    return Some((kind, terms));
                }
            }
        }

        if n > self.config.permissive_threshold {
            for kind in StrategyKind::RELAXED {
                if let Some(terms) = self.run_strategy(kind, n, rng) {
                    info!("{} strategy solved {}", kind, n);
                    return Some((kind, terms));
                }
            }
        }
        None
    }

    fn run_strategy(
        &self,
        kind: StrategyKind,
        n: i64,
        rng: &mut Mulberry32,
    ) -> Option<Vec<Term>> {
        let mut used = UsedTexts::new();
        let terms = kind.decompose(self.tables, n, rng, self.config.max_terms, &mut used)?;
        match self.accept(&terms, n) {
            Ok(()) => Some(terms),
            Err(e) => {
                warn!("Rejected {} output for {}: {}", kind, n, e);
                None
            }
        }
    }

    fn accept(&self, terms: &[Term], n: i64) -> Result<(), ValidationError> {
        validate_terms(terms, self.config.max_terms)?;
        check_sum(terms, n)
    }
}
