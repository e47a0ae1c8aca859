//! Baked matching tables derived from the registry.

use rustc_hash::{FxHashMap, FxHashSet};

use super::PluralForm;

/// Immutable snapshot of the registry, pre-sorted for longest-match
/// scanning.
///
/// All four vectors are parallel: index `i` refers to the same spelling
/// everywhere. The splitter walks `runes` rune by rune for exact matching
/// and compares `upper` against uppercased casual segments for the
/// case-insensitive whole-word check.
#[derive(Debug)]
pub(crate) struct InitialismCache {
    /// Spellings in matching order: descending byte length, then
    /// descending lexicographic order.
    sorted: Vec<String>,

    /// Rune decomposition of each spelling.
    runes: Vec<Vec<char>>,

    /// Uppercased rune decomposition of each spelling.
    upper: Vec<Vec<char>>,

    /// Resolved plural form of each spelling, baked at build time.
    plural: Vec<PluralForm>,
}

impl InitialismCache {
    pub(crate) fn build(
        entries: &FxHashMap<String, super::Entry>,
        upper_keys: &FxHashSet<String>,
    ) -> Self {
        let mut sorted: Vec<String> = entries.keys().cloned().collect();
        sorted.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| b.cmp(a)));

        let mut runes = Vec::with_capacity(sorted.len());
        let mut upper = Vec::with_capacity(sorted.len());
        let mut plural = Vec::with_capacity(sorted.len());

        for spelling in &sorted {
            runes.push(spelling.chars().collect());
            upper.push(spelling.to_uppercase().chars().collect());
            plural.push(resolve_plural(spelling, entries, upper_keys));
        }

        Self {
            sorted,
            runes,
            upper,
            plural,
        }
    }

    /// Spellings in matching order.
    pub(crate) fn spellings(&self) -> &[String] {
        &self.sorted
    }

    /// Rune table of the spelling at `idx`.
    pub(crate) fn runes(&self, idx: usize) -> &[char] {
        &self.runes[idx]
    }

    /// Uppercased rune table of the spelling at `idx`.
    pub(crate) fn upper_runes(&self, idx: usize) -> &[char] {
        &self.upper[idx]
    }

    /// Baked plural form of the spelling at `idx`.
    pub(crate) fn plural_form(&self, idx: usize) -> PluralForm {
        self.plural[idx]
    }

    /// Number of spellings.
    pub(crate) fn len(&self) -> usize {
        self.sorted.len()
    }
}

fn resolve_plural(
    spelling: &str,
    entries: &FxHashMap<String, super::Entry>,
    upper_keys: &FxHashSet<String>,
) -> PluralForm {
    let Some(entry) = entries.get(spelling) else {
        return PluralForm::NotPlural;
    };
    if !entry.accepts_plural {
        return PluralForm::InvariantPlural;
    }
    let mut pluralized = spelling.to_uppercase();
    pluralized.push('S');
    if upper_keys.contains(&pluralized) {
        PluralForm::InvariantPlural
    } else {
        PluralForm::SimplePlural
    }
}
