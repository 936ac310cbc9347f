use crate::rng::Mulberry32;
use crate::strategy::constants::{AGGRESSIVE_FACTORS, PERMISSIVE_FACTOR};
use crate::strategy::fill::Filler;
use crate::strategy::kind::UsedTexts;
use crate::strategy::term::Term;
use crate::tables::Tables;

fn factor_text(tables: &Tables, factor: i64) -> Option<&'static str> {
    tables.lookup(factor).first().copied()
}

/// A search for one scaled first term followed by a greedy completion
struct ScaledSearch<'a> {
    tables: &'a Tables,
    filler: Filler<'a>,
    target: i64,
    max_terms: usize,
}

impl<'a> ScaledSearch<'a> {
    fn new(tables: &'a Tables, target: i64, max_terms: usize) -> Self {
        Self {
            tables,
            filler: Filler::greedy(tables),
            target,
            max_terms,
        }
    }

    /// Try `factor · text(value)` as the first term and complete the rest.
    fn attempt(
        &self,
        value: i64,
        factor: i64,
        rng: &mut Mulberry32,
        used: &mut UsedTexts,
    ) -> Option<Vec<Term>> {
        let scaled = value.checked_mul(factor)?;
        if scaled > self.target {
            return None;
        }
        let text = self.filler.take(value, used, rng)?;
        let Some(term) = Term::scaled(text, value, factor, factor_text(self.tables, factor))
        else {
            used.remove(text);
            return None;
        };

        let mut terms = vec![term];
        if self
            .filler
            .complete(self.target - scaled, &mut terms, self.max_terms, used, rng)
        {
            Some(terms)
        } else {
            used.remove(text);
            None
        }
    }
}

/// Double the largest fitting unused text, then complete greedily
pub(crate) fn decompose_permissive(
    tables: &Tables,
    target: i64,
    rng: &mut Mulberry32,
    max_terms: usize,
    used: &mut UsedTexts,
) -> Option<Vec<Term>> {
    let value = tables
        .combined()
        .values_descending()
        .filter(|&v| v > 0)
        .find(|&v| {
            v.checked_mul(PERMISSIVE_FACTOR)
                .is_some_and(|scaled| scaled <= target)
        })?;
    ScaledSearch::new(tables, target, max_terms).attempt(value, PERMISSIVE_FACTOR, rng, used)
}

/// Scan every value and factor until a scaled first term can be completed
pub(crate) fn decompose_aggressive(
    tables: &Tables,
    target: i64,
    rng: &mut Mulberry32,
    max_terms: usize,
    used: &mut UsedTexts,
) -> Option<Vec<Term>> {
    let search = ScaledSearch::new(tables, target, max_terms);
    let values: Vec<i64> = tables
        .combined()
        .values_descending()
        .filter(|&v| v > 0)
        .collect();
    for value in values {
        for &factor in AGGRESSIVE_FACTORS {
            if let Some(terms) = search.attempt(value, factor, rng, used) {
                return Some(terms);
            }
        }
    }
    None
}
