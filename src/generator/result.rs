use std::fmt;

use crate::strategy::{StrategyKind, Term, render_terms};

/// Where a result came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultSource {
    /// The fixed zero atom
    Zero,
    /// A single table text with exactly the target value
    Direct,
    Strategy(StrategyKind),
    /// The decimal literal of the target
    Literal,
}

/// A generated expression and its value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationResult {
    /// LaTeX text
    pub text: String,
    pub value: i64,
    /// Number of top-level terms. A table text counts as one term even when it
    /// is itself a sum: `4 + 4` alone is one term, and beside other terms it is
    /// written `\left(4 + 4\right)`.
    pub terms: usize,
    pub source: ResultSource,
}

impl GenerationResult {
    pub(crate) fn single(text: &str, value: i64, source: ResultSource) -> Self {
        Self {
            text: text.to_string(),
            value,
            terms: 1,
            source,
        }
    }

    pub(crate) fn from_terms(terms: &[Term], value: i64, kind: StrategyKind) -> Self {
        Self {
            text: render_terms(terms),
            value,
            terms: terms.len(),
            source: ResultSource::Strategy(kind),
        }
    }

    pub(crate) fn literal(value: i64) -> Self {
        Self {
            text: value.to_string(),
            value,
            terms: 1,
            source: ResultSource::Literal,
        }
    }

    /// Wrap the expression in an outer negation
    pub(crate) fn negated(self, value: i64) -> Self {
        Self {
            text: format!("-\\left({}\\right)", self.text),
            value,
            terms: self.terms,
            source: self.source,
        }
    }

    /// True when no table expression was found and the text is the bare number
    pub fn is_fallback(&self) -> bool {
        self.source == ResultSource::Literal
    }
}

impl fmt::Display for GenerationResult {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl fmt::Display for ResultSource {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ResultSource::Zero => write!(f, "zero"),
            ResultSource::Direct => write!(f, "direct"),
            ResultSource::Strategy(kind) => write!(f, "{}", kind),
            ResultSource::Literal => write!(f, "literal"),
        }
    }
}
