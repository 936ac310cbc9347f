use std::collections::{BTreeMap, HashMap};

/// Value -> texts lookup, with the reverse text -> value map
///
/// Texts under one value keep insertion order so that "first available"
/// selection is stable.
#[derive(Debug, Clone, Default)]
pub struct ValueIndex {
    by_value: BTreeMap<i64, Vec<&'static str>>,
    by_text: HashMap<&'static str, i64>,
}

impl ValueIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `text` under `value`. A text keeps the first value it was given;
    /// returns `false` when the text was already present.
    pub fn insert(&mut self, text: &'static str, value: i64) -> bool {
        if self.by_text.contains_key(text) {
            return false;
        }
        self.by_text.insert(text, value);
        self.by_value.entry(value).or_default().push(text);
        true
    }

    /// All texts with exactly this value (possibly empty)
    pub fn lookup(&self, value: i64) -> &[&'static str] {
        self.by_value.get(&value).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn value_of(&self, text: &str) -> Option<i64> {
        self.by_text.get(text).copied()
    }

    pub fn contains_value(&self, value: i64) -> bool {
        self.by_value.contains_key(&value)
    }

    /// Distinct indexed values, largest first
    pub fn values_descending(&self) -> impl Iterator<Item = i64> + '_ {
        self.by_value.keys().rev().copied()
    }

    /// Distinct indexed values, smallest first
    pub fn values_ascending(&self) -> impl Iterator<Item = i64> + '_ {
        self.by_value.keys().copied()
    }

    /// Number of texts
    pub fn len(&self) -> usize {
        self.by_text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_text.is_empty()
    }
}
