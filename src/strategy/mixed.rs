use crate::rng::Mulberry32;
use crate::strategy::constants::MIXED_MIN_SEED;
use crate::strategy::fill::Filler;
use crate::strategy::kind::UsedTexts;
use crate::strategy::term::Term;
use crate::tables::Tables;

/// Seed with one random large power-of-two template, then complete greedily
pub(crate) fn decompose(
    tables: &Tables,
    target: i64,
    rng: &mut Mulberry32,
    max_terms: usize,
    used: &mut UsedTexts,
) -> Option<Vec<Term>> {
    let mut seeds: Vec<i64> = tables
        .pow2_values()
        .filter(|&p| p >= MIXED_MIN_SEED && p <= target)
        .collect();
    if seeds.is_empty() {
        seeds = tables.pow2_values().filter(|&p| p <= target).collect();
    }

    let p = *rng.pick(&seeds)?;
    let text = tables.select_template(p, rng)?;
    if !used.insert(text) {
        return None;
    }

    let mut terms = vec![Term::plain(text, p)];
    if Filler::greedy(tables).complete(target - p, &mut terms, max_terms, used, rng) {
        Some(terms)
    } else {
        used.remove(text);
        None
    }
}
