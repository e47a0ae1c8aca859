//! Name mangling: rendering split names in each casing convention.

mod builder;
pub(crate) mod replace;

pub use builder::NameManglerBuilder;

use std::sync::{Arc, LazyLock};

use crate::index::InitialismIndex;
use crate::lexeme::{titleize, Lexeme};
use crate::splitter::{pool, Splitter};
use replace::{PrefixFn, ReplaceFn, DEFAULT_PREFIX};

/// Converts free-form names into identifiers and labels.
///
/// A mangler owns an [initialism registry](crate::index::InitialismIndex),
/// an optional prefix hook for names that do not start with a cased letter,
/// and a rune substitution table. All conversions are total: any rune
/// sequence in, a string out, no panic.
///
/// # Examples
///
/// ```
/// use libmangler::NameMangler;
///
/// let mangler = NameMangler::new();
///
/// assert_eq!("FindThingByID", mangler.to_go_name("findThingById"));
/// assert_eq!("find_thing_by_id", mangler.to_file_name("findThingById"));
/// assert_eq!("find-thing-by-id", mangler.to_command_name("findThingById"));
/// assert_eq!("findThingById", mangler.to_json_name("FindThingByID"));
/// ```
#[derive(Clone)]
pub struct NameMangler {
    index: Arc<InitialismIndex>,
    prefix: Option<Arc<PrefixFn>>,
    replace: Arc<ReplaceFn>,
}

impl NameMangler {
    /// A mangler with the default initialisms, prefix, and substitutions.
    pub fn new() -> Self {
        NameManglerBuilder::new().build()
    }

    /// Start configuring a mangler.
    pub fn builder() -> NameManglerBuilder {
        NameManglerBuilder::new()
    }

    pub(crate) fn from_parts(
        index: Arc<InitialismIndex>,
        prefix: Option<Arc<PrefixFn>>,
        replace: Arc<ReplaceFn>,
    ) -> Self {
        Self {
            index,
            prefix,
            replace,
        }
    }

    /// Register extra initialisms on this mangler's registry.
    ///
    /// Spellings whose uppercased form ends in `S` are marked invariant.
    /// Takes `&self`: the registry is shared and internally synchronized.
    pub fn add_initialisms<I, S>(&self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for word in words {
            self.index.add(word.as_ref());
        }
    }

    /// Registered initialisms, in matching order (descending byte length,
    /// then descending lexicographic order).
    pub fn initialisms(&self) -> Vec<String> {
        self.index.sorted()
    }

    /// Split `name` into its lexemes.
    pub fn split(&self, name: &str) -> Vec<Lexeme> {
        let splitter = self.splitter();
        let mut out = Vec::new();
        splitter.split(name, &mut out);
        out
    }

    /// An exported Go identifier: words title-cased, initialisms kept in
    /// their registered spelling, and a prefix applied when the result
    /// would not start with an uppercase letter.
    pub fn to_go_name(&self, name: &str) -> String {
        let rendered = self.render(name, |lexemes| {
            lexemes.iter().map(Lexeme::go_form).collect::<String>()
        });
        self.fix_leading(rendered, name)
    }

    /// An unexported Go identifier. A leading initialism is lowercased as
    /// a whole (`ELBHTTPLoadBalancer` becomes `elbHTTPLoadBalancer`);
    /// otherwise only the first rune of the Go name is lowercased.
    pub fn to_var_name(&self, name: &str) -> String {
        let leading = self.render(name, |lexemes| match lexemes.first() {
            Some(Lexeme::Initialism {
                canonical, plural, ..
            }) => {
                let mut out = canonical.to_lowercase();
                if *plural {
                    out.push('s');
                }
                for lexeme in &lexemes[1..] {
                    out.push_str(&lexeme.go_form());
                }
                Some(out)
            }
            _ => None,
        });
        if let Some(out) = leading {
            return out;
        }
        lower_first(&self.to_go_name(name))
    }

    /// A snake_case file name.
    pub fn to_file_name(&self, name: &str) -> String {
        self.join_lower(name, "_")
    }

    /// A kebab-case command name.
    pub fn to_command_name(&self, name: &str) -> String {
        self.join_lower(name, "-")
    }

    /// A lowercase label; initialisms keep their matched text.
    pub fn to_human_name_lower(&self, name: &str) -> String {
        self.render(name, |lexemes| {
            join(lexemes.iter().map(Lexeme::human_lower_form), " ")
        })
    }

    /// A Title Case label; initialisms keep their matched text.
    pub fn to_human_name_title(&self, name: &str) -> String {
        self.render(name, |lexemes| {
            join(lexemes.iter().map(Lexeme::human_title_form), " ")
        })
    }

    /// A lowerCamelCase JSON property name. Initialism spellings are not
    /// preserved: `FindThingByID` becomes `findThingById`.
    pub fn to_json_name(&self, name: &str) -> String {
        self.render(name, |lexemes| {
            let mut out = String::new();
            for (i, lexeme) in lexemes.iter().enumerate() {
                if i == 0 {
                    out.push_str(&lexeme.original().to_lowercase());
                } else {
                    out.push_str(&titleize(lexeme.original()));
                }
            }
            out
        })
    }

    /// Uppercase the first rune and lowercase the rest, leaving separators
    /// in place. No splitting is performed; `CAPWD.folwdBylc` becomes
    /// `Capwd.folwdbylc`. Kept for compatibility with its long-standing
    /// behavior.
    pub fn camelize(&self, word: &str) -> String {
        titleize(word)
    }

    fn splitter(&self) -> Splitter {
        Splitter::new(self.index.cache(), Arc::clone(&self.replace))
    }

    fn render<R>(&self, name: &str, f: impl FnOnce(&[Lexeme]) -> R) -> R {
        let splitter = self.splitter();
        pool::with_buffer(|buffer| {
            splitter.split(name, buffer);
            f(buffer)
        })
    }

    fn join_lower(&self, name: &str, separator: &str) -> String {
        self.render(name, |lexemes| {
            join(lexemes.iter().map(Lexeme::lower_form), separator)
        })
    }

    /// Make the rendered name start with an uppercase rune, consulting the
    /// prefix hook when the first rune is not a cased letter at all.
    fn fix_leading(&self, rendered: String, original: &str) -> String {
        let Some(first) = rendered.chars().next() else {
            return rendered;
        };
        if first.is_uppercase() {
            return rendered;
        }
        if first.is_lowercase() {
            let mut out = String::with_capacity(rendered.len());
            out.extend(first.to_uppercase());
            out.push_str(&rendered[first.len_utf8()..]);
            return out;
        }
        let prefix = match &self.prefix {
            Some(f) => f(original),
            None => DEFAULT_PREFIX.to_string(),
        };
        let mut out = String::with_capacity(prefix.len() + rendered.len());
        out.push_str(&prefix);
        out.push_str(&rendered);
        out
    }
}

impl Default for NameMangler {
    fn default() -> Self {
        Self::new()
    }
}

fn lower_first(word: &str) -> String {
    let Some(first) = word.chars().next() else {
        return String::new();
    };
    let mut out = String::with_capacity(word.len());
    out.extend(first.to_lowercase());
    out.push_str(&word[first.len_utf8()..]);
    out
}

fn join(parts: impl Iterator<Item = String>, separator: &str) -> String {
    let mut out = String::new();
    for part in parts {
        if !out.is_empty() {
            out.push_str(separator);
        }
        out.push_str(&part);
    }
    out
}

static DEFAULT_MANGLER: LazyLock<NameMangler> = LazyLock::new(NameMangler::new);

/// [`NameMangler::to_go_name`] on the process-wide default mangler.
pub fn to_go_name(name: &str) -> String {
    DEFAULT_MANGLER.to_go_name(name)
}

/// [`NameMangler::to_var_name`] on the process-wide default mangler.
pub fn to_var_name(name: &str) -> String {
    DEFAULT_MANGLER.to_var_name(name)
}

/// [`NameMangler::to_file_name`] on the process-wide default mangler.
pub fn to_file_name(name: &str) -> String {
    DEFAULT_MANGLER.to_file_name(name)
}

/// [`NameMangler::to_command_name`] on the process-wide default mangler.
pub fn to_command_name(name: &str) -> String {
    DEFAULT_MANGLER.to_command_name(name)
}

/// [`NameMangler::to_human_name_lower`] on the process-wide default mangler.
pub fn to_human_name_lower(name: &str) -> String {
    DEFAULT_MANGLER.to_human_name_lower(name)
}

/// [`NameMangler::to_human_name_title`] on the process-wide default mangler.
pub fn to_human_name_title(name: &str) -> String {
    DEFAULT_MANGLER.to_human_name_title(name)
}

/// [`NameMangler::to_json_name`] on the process-wide default mangler.
pub fn to_json_name(name: &str) -> String {
    DEFAULT_MANGLER.to_json_name(name)
}

/// [`NameMangler::camelize`] on the process-wide default mangler.
pub fn camelize(word: &str) -> String {
    DEFAULT_MANGLER.camelize(word)
}

/// Register extra initialisms on the process-wide default mangler.
pub fn add_initialisms<I, S>(words: I)
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    DEFAULT_MANGLER.add_initialisms(words);
}
