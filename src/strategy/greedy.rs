use crate::rng::Mulberry32;
use crate::strategy::fill::Filler;
use crate::strategy::kind::UsedTexts;
use crate::strategy::term::Term;
use crate::tables::Tables;

/// Largest-first completion over every indexed text
pub(crate) fn decompose_atom_greedy(
    tables: &Tables,
    target: i64,
    rng: &mut Mulberry32,
    max_terms: usize,
    used: &mut UsedTexts,
) -> Option<Vec<Term>> {
    let mut terms = Vec::new();
    Filler::greedy(tables)
        .complete(target, &mut terms, max_terms, used, rng)
        .then_some(terms)
}

/// Plain largest-first pass over the raw atom table
pub(crate) fn decompose_simple(
    tables: &Tables,
    target: i64,
    rng: &mut Mulberry32,
    max_terms: usize,
    used: &mut UsedTexts,
) -> Option<Vec<Term>> {
    let mut terms = Vec::new();
    Filler::simple(tables)
        .complete(target, &mut terms, max_terms, used, rng)
        .then_some(terms)
}
