//! Fluent configuration for [`NameMangler`].

use std::sync::Arc;

use crate::index::InitialismIndex;
use crate::mangler::replace::{PrefixFn, ReplaceFn};
use crate::mangler::NameMangler;

/// Builder for a [`NameMangler`].
///
/// Construction is total: every combination of options produces a working
/// mangler.
///
/// # Examples
///
/// ```
/// use libmangler::NameMangler;
///
/// let mangler = NameMangler::builder()
///     .additional_initialisms(["ELB"])
///     .prefix_fn(|_name| "Nr".to_string())
///     .build();
///
/// assert_eq!("Nr150", mangler.to_go_name("150"));
/// assert_eq!("ELBRule", mangler.to_go_name("elb rule"));
/// ```
#[derive(Default)]
pub struct NameManglerBuilder {
    replacement_set: Option<Vec<String>>,
    additions: Vec<String>,
    invariants: Vec<String>,
    prefix: Option<Arc<PrefixFn>>,
    replace: Option<Arc<ReplaceFn>>,
}

impl NameManglerBuilder {
    /// Start from the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register extra initialisms on top of the default set.
    pub fn additional_initialisms<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.additions.extend(words.into_iter().map(Into::into));
        self
    }

    /// Replace the default initialism set entirely.
    ///
    /// Spellings whose uppercased form ends in `S` are marked invariant,
    /// the same rule as [`NameMangler::add_initialisms`].
    pub fn initialisms<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.replacement_set = Some(words.into_iter().map(Into::into).collect());
        self
    }

    /// Register initialisms whose plural form equals their singular.
    pub fn invariant_initialisms<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.invariants.extend(words.into_iter().map(Into::into));
        self
    }

    /// Set the prefix hook for names that render without a leading cased
    /// letter. The hook receives the full original input.
    pub fn prefix_fn<F>(self, f: F) -> Self
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        self.shared_prefix_fn(Arc::new(f))
    }

    /// Set a prefix hook shared with other manglers.
    pub fn shared_prefix_fn(mut self, f: Arc<PrefixFn>) -> Self {
        self.prefix = Some(f);
        self
    }

    /// Replace the rune substitution table used during segmentation.
    ///
    /// The hook replaces the default table entirely, including the `-`
    /// and `_` separator entries.
    pub fn replace_fn<F>(mut self, f: F) -> Self
    where
        F: Fn(char) -> Option<String> + Send + Sync + 'static,
    {
        self.replace = Some(Arc::new(f));
        self
    }

    /// Build the mangler.
    pub fn build(self) -> NameMangler {
        let index = match self.replacement_set {
            Some(words) => {
                let index = InitialismIndex::new();
                for word in &words {
                    index.add(word);
                }
                index
            }
            None => InitialismIndex::with_defaults(),
        };
        for word in &self.additions {
            index.add(word);
        }
        for word in &self.invariants {
            index.add_invariant(word);
        }

        NameMangler::from_parts(
            Arc::new(index),
            self.prefix,
            self.replace
                .unwrap_or_else(|| Arc::new(crate::mangler::replace::default_replace)),
        )
    }
}
