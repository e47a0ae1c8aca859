//! Lexemes produced by the splitter.
//!
//! A lexeme is one word of the input after segmentation. Each rendering
//! convention derives its output from a per-lexeme form defined here, so
//! the renderers themselves reduce to a join.

use std::fmt;

/// One word extracted from an identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize)
)]
pub enum Lexeme {
    /// An ordinary word with no registered meaning.
    Casual {
        /// The matched text, case preserved.
        original: String,
    },

    /// A recognized initialism.
    Initialism {
        /// The matched text, case preserved (`Http`, `utf8`).
        original: String,

        /// The registered spelling (`HTTP`, `UTF8`).
        canonical: String,

        /// Whether a plural `s` was absorbed after the match.
        plural: bool,
    },
}

impl Lexeme {
    /// A casual lexeme over the given text.
    pub fn casual(original: impl Into<String>) -> Self {
        Lexeme::Casual {
            original: original.into(),
        }
    }

    /// An initialism lexeme with its registered spelling.
    pub fn initialism(
        original: impl Into<String>,
        canonical: impl Into<String>,
        plural: bool,
    ) -> Self {
        Lexeme::Initialism {
            original: original.into(),
            canonical: canonical.into(),
            plural,
        }
    }

    /// The matched text.
    pub fn original(&self) -> &str {
        match self {
            Lexeme::Casual { original } | Lexeme::Initialism { original, .. } => original,
        }
    }

    /// Whether this lexeme is a recognized initialism.
    pub fn is_initialism(&self) -> bool {
        matches!(self, Lexeme::Initialism { .. })
    }

    /// The exported (Go-style) form.
    ///
    /// Casual words are titleized, except single-rune words which pass
    /// through unchanged (a lone `s` from a possessive stays lowercase).
    /// Initialisms render their canonical spelling plus the plural `s`.
    pub fn go_form(&self) -> String {
        match self {
            Lexeme::Casual { original } => titleize_multi(original),
            Lexeme::Initialism {
                canonical, plural, ..
            } => with_plural(canonical, *plural),
        }
    }

    /// The fully lowercased form, for snake and kebab case.
    pub fn lower_form(&self) -> String {
        match self {
            Lexeme::Casual { original } => original.to_lowercase(),
            Lexeme::Initialism {
                canonical, plural, ..
            } => with_plural(&canonical.to_lowercase(), *plural),
        }
    }

    /// The lowercase human form. Initialisms keep their matched text.
    pub fn human_lower_form(&self) -> String {
        match self {
            Lexeme::Casual { original } => original.to_lowercase(),
            Lexeme::Initialism { original, .. } => original.clone(),
        }
    }

    /// The title-case human form. Initialisms keep their matched text.
    pub fn human_title_form(&self) -> String {
        match self {
            Lexeme::Casual { original } => titleize_multi(original),
            Lexeme::Initialism { original, .. } => original.clone(),
        }
    }
}

impl fmt::Display for Lexeme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.original())
    }
}

fn with_plural(spelling: &str, plural: bool) -> String {
    if plural {
        let mut out = String::with_capacity(spelling.len() + 1);
        out.push_str(spelling);
        out.push('s');
        out
    } else {
        spelling.to_string()
    }
}

/// Uppercase the first rune and lowercase the rest.
pub(crate) fn titleize(word: &str) -> String {
    let mut chars = word.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };
    let mut out = String::with_capacity(word.len());
    out.extend(first.to_uppercase());
    out.push_str(&chars.as_str().to_lowercase());
    out
}

/// Titleize, but leave single-rune words untouched.
fn titleize_multi(word: &str) -> String {
    if word.chars().nth(1).is_none() {
        word.to_string()
    } else {
        titleize(word)
    }
}
