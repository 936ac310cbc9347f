use log::debug;

use crate::rng::Mulberry32;
use crate::strategy::fill::Filler;
use crate::strategy::kind::UsedTexts;
use crate::strategy::term::Term;
use crate::tables::{POW2_CEILING, Tables};

/// One power-of-two template per set bit, largest first, then patch the residual.
///
/// Bits above the template ceiling, bits whose template is already used, and
/// bits that would take the last free slot while more remains are left in the
/// residual.
pub(crate) fn decompose(
    tables: &Tables,
    target: i64,
    rng: &mut Mulberry32,
    max_terms: usize,
    used: &mut UsedTexts,
) -> Option<Vec<Term>> {
    let mut terms = Vec::new();
    let mut residual = target;

    for bit in (0..63).rev() {
        let p: i64 = 1 << bit;
        if target & p == 0 {
            continue;
        }
        if p > POW2_CEILING {
            continue;
        }
        if terms.len() >= max_terms || (terms.len() + 1 == max_terms && residual != p) {
            break;
        }
        let Some(text) = tables.select_template(p, rng) else {
            continue;
        };
        if used.contains(text) {
            debug!("Skipping used template '{}' for {}", text, p);
            continue;
        }
        used.insert(text);
        terms.push(Term::plain(text, p));
        residual -= p;
    }

    if residual != 0 {
        debug!("Binary decomposition of {} leaves residual {}", target, residual);
    }
    Filler::greedy(tables)
        .complete(residual, &mut terms, max_terms, used, rng)
        .then_some(terms)
}
