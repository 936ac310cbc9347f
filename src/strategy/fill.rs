use crate::rng::Mulberry32;
use crate::strategy::constants::GREEDY_BRANCHING;
use crate::strategy::kind::UsedTexts;
use crate::strategy::term::Term;
use crate::tables::{Tables, ValueIndex};

/// Greedy residual completion shared by every strategy.
///
/// Takes the largest value not exceeding the residual, trying up to
/// `branching` candidates per level. With two slots left it looks for an exact
/// pair; with more it may step past the residual once and let a single negated
/// term bring the sum back down. On failure `terms` and `used` are left as they
/// were on entry.
pub(crate) struct Filler<'a> {
    index: &'a ValueIndex,
    negation: bool,
    pair_search: bool,
    branching: usize,
}

impl<'a> Filler<'a> {
    /// Completion over every indexed text, with pair search and negation
    pub(crate) fn greedy(tables: &'a Tables) -> Self {
        Self {
            index: tables.combined(),
            negation: true,
            pair_search: true,
            branching: GREEDY_BRANCHING,
        }
    }

    /// Plain largest-first completion over the raw atom table
    pub(crate) fn simple(tables: &'a Tables) -> Self {
        Self {
            index: tables.atoms(),
            negation: false,
            pair_search: false,
            branching: 1,
        }
    }

    /// Claim a random unused text with exactly `value`
    pub(crate) fn take(
        &self,
        value: i64,
        used: &mut UsedTexts,
        rng: &mut Mulberry32,
    ) -> Option<&'static str> {
        let candidates: Vec<&'static str> = self
            .index
            .lookup(value)
            .iter()
            .copied()
            .filter(|text| !used.contains(text))
            .collect();
        let text = rng.pick(&candidates).copied()?;
        used.insert(text);
        Some(text)
    }

    /// Extend `terms` until they cover `residual` or the budget runs out.
    pub(crate) fn complete(
        &self,
        residual: i64,
        terms: &mut Vec<Term>,
        max_terms: usize,
        used: &mut UsedTexts,
        rng: &mut Mulberry32,
    ) -> bool {
        if residual == 0 {
            return true;
        }
        let remaining = max_terms.saturating_sub(terms.len());
        if remaining == 0 {
            return false;
        }

        if residual < 0 {
            return residual
                .checked_neg()
                .is_some_and(|magnitude| {
                    self.complete_negative(magnitude, terms, max_terms, used, rng)
                });
        }

        if let Some(text) = self.take(residual, used, rng) {
            terms.push(Term::plain(text, residual));
            return true;
        }
        if remaining == 1 {
            return false;
        }
        if self.pair_search && remaining == 2 {
            return self.complete_pair(residual, terms, used, rng);
        }

        let mut tried = 0;
        for value in self
            .index
            .values_descending()
            .filter(|&v| v > 0 && v < residual)
        {
            if tried == self.branching {
                break;
            }
            let Some(text) = self.take(value, used, rng) else {
                continue;
            };
            tried += 1;
            terms.push(Term::plain(text, value));
            if self.complete(residual - value, terms, max_terms, used, rng) {
                return true;
            }
            terms.pop();
            used.remove(text);
        }
        self.overshoot(residual, terms, max_terms, used, rng)
    }

    fn negation_available(&self, terms: &[Term]) -> bool {
        self.negation && !terms.iter().any(Term::is_negated)
    }

    /// Step past `residual` with one larger value, leaving a negative residual
    /// for a single negated term to absorb.
    fn overshoot(
        &self,
        residual: i64,
        terms: &mut Vec<Term>,
        max_terms: usize,
        used: &mut UsedTexts,
        rng: &mut Mulberry32,
    ) -> bool {
        if !self.negation_available(terms) {
            return false;
        }
        let mut tried = 0;
        for value in self.index.values_ascending().filter(|&v| v > residual) {
            if tried == self.branching {
                break;
            }
            let Some(text) = self.take(value, used, rng) else {
                continue;
            };
            tried += 1;
            terms.push(Term::plain(text, value));
            if self.complete(residual - value, terms, max_terms, used, rng) {
                return true;
            }
            terms.pop();
            used.remove(text);
        }
        false
    }

    /// Cover a negative residual of `magnitude`: one negated term of at least
    /// that size, then plain terms for whatever it oversubtracts.
    fn complete_negative(
        &self,
        magnitude: i64,
        terms: &mut Vec<Term>,
        max_terms: usize,
        used: &mut UsedTexts,
        rng: &mut Mulberry32,
    ) -> bool {
        if !self.negation_available(terms) {
            return false;
        }
        let remaining = max_terms.saturating_sub(terms.len());
        let mut tried = 0;
        for value in self.index.values_ascending().filter(|&v| v >= magnitude) {
            if tried == self.branching || (remaining == 1 && value > magnitude) {
                break;
            }
            let Some(text) = self.take(value, used, rng) else {
                continue;
            };
            tried += 1;
            terms.push(Term::negated(text, value));
            if self.complete(value - magnitude, terms, max_terms, used, rng) {
                return true;
            }
            terms.pop();
            used.remove(text);
        }
        false
    }

    /// Cover `residual` with exactly two terms.
    fn complete_pair(
        &self,
        residual: i64,
        terms: &mut Vec<Term>,
        used: &mut UsedTexts,
        rng: &mut Mulberry32,
    ) -> bool {
        for value in self
            .index
            .values_descending()
            .filter(|&v| v > 0 && v < residual)
        {
            let rest = residual - value;
            if rest > value {
                break;
            }
            if !self.index.contains_value(rest) {
                continue;
            }
            if let Some(first) = self.take(value, used, rng) {
                if let Some(second) = self.take(rest, used, rng) {
                    terms.push(Term::plain(first, value));
                    terms.push(Term::plain(second, rest));
                    return true;
                }
                used.remove(first);
            }
        }

        if !self.negation_available(terms) {
            return false;
        }

        // overshoot, then subtract the excess
        for value in self.index.values_ascending().filter(|&v| v > residual) {
            let excess = value - residual;
            if !self.index.contains_value(excess) {
                continue;
            }
            if let Some(first) = self.take(value, used, rng) {
                if let Some(second) = self.take(excess, used, rng) {
                    terms.push(Term::plain(first, value));
                    terms.push(Term::negated(second, excess));
                    return true;
                }
                used.remove(first);
            }
        }
        false
    }
}
