//! Static atom and template tables, built once on first use

mod atoms;
mod derived;
mod index;
mod pow2;

use std::collections::BTreeMap;
use std::sync::LazyLock;

use log::{debug, warn};

use crate::rng::Mulberry32;
use crate::template::{evaluate, is_compound};

pub use atoms::{ATOMS, Atom, AtomValue, ZERO_ATOM};
pub use derived::DERIVED;
pub use index::ValueIndex;
pub use pow2::{POW2_CEILING, POW2_TEMPLATES};

static TABLES: LazyLock<Tables> = LazyLock::new(Tables::build);

/// The process-wide tables
pub fn tables() -> &'static Tables {
    &TABLES
}

/// Immutable lookup structures shared by every generation call
#[derive(Debug, Clone)]
pub struct Tables {
    combined: ValueIndex,
    atoms: ValueIndex,
    pow2: BTreeMap<i64, Vec<&'static str>>,
}

impl Tables {
    /// Build the indexes from the static tables.
    ///
    /// Compound power-of-two templates and derived entries are checked with the
    /// template evaluator; entries that do not resolve to the expected value are
    /// dropped with a warning.
    pub fn build() -> Self {
        let mut atoms = ValueIndex::new();
        for atom in ATOMS {
            if let Some(value) = atom.exact_value() {
                atoms.insert(atom.text, value);
            }
        }

        let mut combined = atoms.clone();
        for &(p, templates) in POW2_TEMPLATES {
            for &text in templates {
                if !is_compound(text) {
                    combined.insert(text, p);
                }
            }
        }

        let mut pow2: BTreeMap<i64, Vec<&'static str>> = BTreeMap::new();
        for &(p, templates) in POW2_TEMPLATES {
            let entry = pow2.entry(p).or_default();
            for &text in templates {
                if !is_compound(text) {
                    entry.push(text);
                    continue;
                }
                match evaluate(text, &combined) {
                    Ok(value) if value == p => {
                        combined.insert(text, p);
                        entry.push(text);
                    }
                    Ok(value) => {
                        warn!(
                            "Dropping template '{}' for {}: evaluates to {}",
                            text, p, value
                        );
                    }
                    Err(e) => {
                        warn!("Dropping template '{}' for {}: {}", text, p, e);
                    }
                }
            }
        }

        for &text in DERIVED {
            match evaluate(text, &combined) {
                Ok(value) => {
                    combined.insert(text, value);
                }
                Err(e) => warn!("Dropping derived entry '{}': {}", text, e),
            }
        }

        debug!(
            "Built tables: {} atom texts, {} combined texts, {} powers of two",
            atoms.len(),
            combined.len(),
            pow2.len()
        );

        Self {
            combined,
            atoms,
            pow2,
        }
    }

    /// Every atom in declaration order, including approximate ones
    pub fn all(&self) -> &'static [Atom] {
        ATOMS
    }

    /// Texts from any table with exactly this value
    pub fn lookup(&self, value: i64) -> &[&'static str] {
        self.combined.lookup(value)
    }

    /// Texts from the raw atom table with exactly this value
    pub fn atom_lookup(&self, value: i64) -> &[&'static str] {
        self.atoms.lookup(value)
    }

    pub fn combined(&self) -> &ValueIndex {
        &self.combined
    }

    pub fn atoms(&self) -> &ValueIndex {
        &self.atoms
    }

    /// Variants for a power of two up to the ceiling; empty for anything else
    pub fn templates_for(&self, p: i64) -> &[&'static str] {
        self.pow2.get(&p).map(Vec::as_slice).unwrap_or_default()
    }

    /// Powers of two that have at least one template, smallest first
    pub fn pow2_values(&self) -> impl Iterator<Item = i64> + '_ {
        self.pow2
            .iter()
            .filter(|(_, templates)| !templates.is_empty())
            .map(|(p, _)| *p)
    }

    /// Pick a template for `p`: a random single-term variant when one exists,
    /// otherwise the first compound one.
    pub fn select_template(&self, p: i64, rng: &mut Mulberry32) -> Option<&'static str> {
        let templates = self.templates_for(p);
        let singles: Vec<&'static str> = templates
            .iter()
            .copied()
            .filter(|t| !is_compound(t))
            .collect();
        if singles.is_empty() {
            return templates.first().copied();
        }
        rng.pick(&singles).copied()
    }
}
