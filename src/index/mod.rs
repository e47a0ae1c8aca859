//! Registry of initialisms (domain acronyms) and their pluralization rules.
//!
//! An initialism is a word such as `HTTP`, `ID` or `IPv4` whose spelling is
//! preserved verbatim by the casing renderers instead of being title-cased
//! letter by letter. The [`InitialismIndex`] maps each registered spelling to
//! a pluralization policy and provides the deterministic enumeration order
//! the splitter relies on for longest-match scanning.

mod cache;

pub(crate) use cache::InitialismCache;

use std::sync::Arc;

use parking_lot::RwLock;
use rustc_hash::{FxHashMap, FxHashSet};

/// Pluralization policy attached to a registered initialism.
///
/// Besides invariant forms (like `HTTP` and `HTTPS`), an initialism is
/// normally pluralized by appending a single lowercase `s`, as in `IDs`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize)
)]
pub enum PluralForm {
    /// The spelling is not a registered initialism.
    #[default]
    NotPlural,

    /// The plural form is identical to the singular (`HTTP`, `DNS`).
    ///
    /// A trailing `s` after such a spelling starts a new word instead of
    /// pluralizing it: `HTTPs` splits as `HTTP` followed by `s`.
    InvariantPlural,

    /// The plural form appends a single lowercase `s` (`IDs`, `URLs`).
    SimplePlural,
}

/// Seed set of common initialisms.
///
/// The list follows the Go linter tradition, extended with a few entries from
/// the OpenAPI ecosystem (`OAI`) and mixed-case spellings (`IPv4`, `IPv6`).
/// The boolean marks whether the entry accepts a simple `s` plural; entries
/// marked `false` are invariant.
const DEFAULT_INITIALISMS: &[(&str, bool)] = &[
    ("ACL", true),
    ("API", true),
    ("ASCII", true),
    ("CPU", true),
    ("CSS", false),
    ("DNS", false),
    ("EOF", true),
    ("GUID", true),
    ("HTML", true),
    ("HTTPS", false),
    ("HTTP", false),
    ("ID", true),
    ("IP", true),
    ("IPv4", true), // prefer the mixed-case outcome IPv4 over IPV4
    ("IPv6", true), // prefer the mixed-case outcome
    ("JSON", true),
    ("LHS", true),
    ("OAI", true),
    ("QPS", false),
    ("RAM", true),
    ("RHS", false),
    ("RPC", true),
    ("SLA", true),
    ("SMTP", true),
    ("SQL", true),
    ("SSH", true),
    ("TCP", true),
    ("TLS", false),
    ("TTL", true),
    ("UDP", true),
    ("UI", true),
    ("UID", true),
    ("UUID", true),
    ("URI", true),
    ("URL", true),
    ("UTF8", true),
    ("VM", true),
    ("XML", true),
    ("XMPP", true),
    ("XSRF", true),
    ("XSS", false),
];

/// The default initialism spellings, in seed order.
pub fn default_initialisms() -> Vec<&'static str> {
    DEFAULT_INITIALISMS.iter().map(|(word, _)| *word).collect()
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct Entry {
    /// Whether the entry accepts a simple `s` plural. `false` pins the
    /// entry as invariant regardless of the collision rule.
    accepts_plural: bool,
}

#[derive(Debug, Default)]
struct Inner {
    /// Stored spelling -> pluralization entry.
    entries: FxHashMap<String, Entry>,

    /// Uppercased stored spellings, for the `+S` collision rule.
    upper_keys: FxHashSet<String>,

    /// Baked snapshot shared with splitters; rebuilt lazily after mutation.
    cache: Option<Arc<InitialismCache>>,
}

/// Thread-safe registry of initialism spellings.
///
/// Reads (`sorted`, `is_initialism`, `plural_form`) are safe against
/// concurrent `add` calls, but no snapshot isolation is promised: a reader
/// racing a writer may or may not observe the addition. Configure the index
/// before heavy concurrent use.
///
/// # Storage-key case rule
///
/// Added spellings are trimmed of Unicode whitespace; entries that are empty
/// after trimming or do not start with a letter are silently dropped. A
/// spelling with no uppercase letter is stored fully uppercased (`abc` →
/// `ABC`); any other spelling is stored verbatim (`IPv4`, `aBc`), which lets
/// spellings differing only by case coexist.
#[derive(Debug, Default)]
pub struct InitialismIndex {
    inner: RwLock<Inner>,
}

impl InitialismIndex {
    /// Create an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an index seeded with [`default_initialisms`].
    pub fn with_defaults() -> Self {
        let index = Self::new();
        {
            let mut inner = index.inner.write();
            for &(word, accepts_plural) in DEFAULT_INITIALISMS {
                inner.insert(word, accepts_plural);
            }
        }
        index
    }

    /// Register a spelling.
    ///
    /// Invalid input (empty after trimming, or not starting with a letter)
    /// is a no-op: configuration intake is best-effort and never errors.
    /// Spellings whose uppercased form ends in `S` are marked invariant, so
    /// they don't conflict with an `s`-pluralized sibling.
    pub fn add(&self, word: &str) {
        let Some(key) = sanitize(word) else { return };
        let accepts_plural = !key.to_uppercase().ends_with('S');
        self.inner.write().insert(&key, accepts_plural);
    }

    /// Register a spelling whose plural form is identical to its singular.
    pub fn add_invariant(&self, word: &str) {
        let Some(key) = sanitize(word) else { return };
        self.inner.write().insert(&key, false);
    }

    /// Whether the exact spelling is registered.
    pub fn is_initialism(&self, spelling: &str) -> bool {
        self.inner.read().entries.contains_key(spelling)
    }

    /// Number of registered spellings.
    pub fn len(&self) -> usize {
        self.inner.read().entries.len()
    }

    /// Whether the index holds no spellings.
    pub fn is_empty(&self) -> bool {
        self.inner.read().entries.is_empty()
    }

    /// Pluralization policy for a spelling.
    ///
    /// Entries marked invariant stay invariant. An entry whose uppercased
    /// spelling plus `S` collides case-insensitively with another registered
    /// spelling is also invariant (`HTTP` next to `HTTPS`, `Serie` next to
    /// `Series`): accepting the `s` plural would shadow the sibling.
    /// Unregistered spellings are [`PluralForm::NotPlural`].
    pub fn plural_form(&self, spelling: &str) -> PluralForm {
        let inner = self.inner.read();
        let Some(entry) = inner.entries.get(spelling) else {
            return PluralForm::NotPlural;
        };
        if !entry.accepts_plural {
            return PluralForm::InvariantPlural;
        }
        let mut pluralized = spelling.to_uppercase();
        pluralized.push('S');
        if inner.upper_keys.contains(&pluralized) {
            PluralForm::InvariantPlural
        } else {
            PluralForm::SimplePlural
        }
    }

    /// Registered spellings in matching order.
    ///
    /// The order is a pure function of the stored set, independent of
    /// insertion order: descending byte length first, then descending
    /// lexicographic order. With this ordering, spellings differing only by
    /// case put the lowercase-bearing one first (`IPv4` before `IPV4`),
    /// which decides ties during longest-match scanning.
    pub fn sorted(&self) -> Vec<String> {
        self.cache().spellings().to_vec()
    }

    /// Baked snapshot of the sorted spellings with their rune tables and
    /// resolved plural forms. Rebuilt lazily after a mutation; `split`
    /// consults the snapshot so the sort stays off the hot path.
    pub(crate) fn cache(&self) -> Arc<InitialismCache> {
        {
            let inner = self.inner.read();
            if let Some(cache) = &inner.cache {
                return Arc::clone(cache);
            }
        }
        let mut inner = self.inner.write();
        if inner.cache.is_none() {
            let baked = InitialismCache::build(&inner.entries, &inner.upper_keys);
            inner.cache = Some(Arc::new(baked));
        }
        Arc::clone(inner.cache.as_ref().expect("cache was just built"))
    }
}

impl Inner {
    fn insert(&mut self, key: &str, accepts_plural: bool) {
        self.entries
            .insert(key.to_string(), Entry { accepts_plural });
        self.upper_keys.insert(key.to_uppercase());
        self.cache = None;
    }
}

/// Normalize a spelling for storage, or reject it.
fn sanitize(word: &str) -> Option<String> {
    let trimmed = word.trim();
    let first = trimmed.chars().next()?;
    if !first.is_alphabetic() {
        return None;
    }
    if trimmed.chars().any(char::is_uppercase) {
        Some(trimmed.to_string())
    } else {
        Some(trimmed.to_uppercase())
    }
}
