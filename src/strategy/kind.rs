use std::collections::HashSet;
use std::fmt;

use log::debug;

use crate::rng::Mulberry32;
use crate::strategy::term::Term;
use crate::strategy::{binary, greedy, mixed, relaxed};
use crate::tables::Tables;

/// Texts already emitted during one generation attempt
pub type UsedTexts = HashSet<&'static str>;

/// The closed set of decomposition strategies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StrategyKind {
    Binary,
    AtomGreedy,
    Mixed,
    Simple,
    Permissive,
    Aggressive,
}

impl StrategyKind {
    /// Strategies that keep every term distinct, in priority order
    pub const STRICT: [StrategyKind; 4] = [
        StrategyKind::Binary,
        StrategyKind::AtomGreedy,
        StrategyKind::Mixed,
        StrategyKind::Simple,
    ];

    /// Strategies allowing one `k \cdot X` term, tried after the strict ones
    pub const RELAXED: [StrategyKind; 2] = [StrategyKind::Permissive, StrategyKind::Aggressive];

    pub fn name(&self) -> &'static str {
        match self {
            StrategyKind::Binary => "binary",
            StrategyKind::AtomGreedy => "atom-greedy",
            StrategyKind::Mixed => "mixed",
            StrategyKind::Simple => "simple",
            StrategyKind::Permissive => "permissive",
            StrategyKind::Aggressive => "aggressive",
        }
    }

    pub fn is_relaxed(&self) -> bool {
        matches!(self, StrategyKind::Permissive | StrategyKind::Aggressive)
    }

    /// Try to decompose `target` into at most `max_terms` terms.
    ///
    /// On success the term values sum to `target`, and every emitted text was
    /// unused on entry and has been added to `used`. `None` means this strategy
    /// could not reach the target within the budget.
    pub fn decompose(
        &self,
        tables: &Tables,
        target: i64,
        rng: &mut Mulberry32,
        max_terms: usize,
        used: &mut UsedTexts,
    ) -> Option<Vec<Term>> {
        if target <= 0 || max_terms == 0 {
            return None;
        }

        let result = match self {
            StrategyKind::Binary => binary::decompose(tables, target, rng, max_terms, used),
            StrategyKind::AtomGreedy => {
                greedy::decompose_atom_greedy(tables, target, rng, max_terms, used)
            }
            StrategyKind::Mixed => mixed::decompose(tables, target, rng, max_terms, used),
            StrategyKind::Simple => greedy::decompose_simple(tables, target, rng, max_terms, used),
            StrategyKind::Permissive => {
                relaxed::decompose_permissive(tables, target, rng, max_terms, used)
            }
            StrategyKind::Aggressive => {
                relaxed::decompose_aggressive(tables, target, rng, max_terms, used)
            }
        };

        match &result {
            Some(terms) => debug!("{} strategy found {} terms for {}", self, terms.len(), target),
            None => debug!("{} strategy failed for {}", self, target),
        }
        result
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
