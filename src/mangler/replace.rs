//! Replacement and prefix hooks used by the renderers.

/// Produces a prefix for names whose rendered form does not start with a
/// cased letter (digits, ideographs). Receives the full original input.
pub type PrefixFn = dyn Fn(&str) -> String + Send + Sync;

/// Maps a rune to a substitute word during segmentation.
///
/// `Some(word)` replaces the rune with `word` as its own lexeme (an empty
/// word consumes the rune as a pure separator); `None` leaves the rune to
/// the regular segmentation rules. Substituted words go through the same
/// whole-word initialism check as any other segment.
pub type ReplaceFn = dyn Fn(char) -> Option<String> + Send + Sync;

/// Prefix used when no [`PrefixFn`] is configured.
pub(crate) const DEFAULT_PREFIX: &str = "X";

/// Default rune substitutions.
///
/// Symbols commonly found in API property names become words; dashes and
/// underscores are consumed as separators.
pub(crate) fn default_replace(rune: char) -> Option<String> {
    match rune {
        '@' => Some("At ".to_string()),
        '&' => Some("And ".to_string()),
        '|' => Some("Pipe ".to_string()),
        '$' => Some("Dollar ".to_string()),
        '!' => Some("Bang ".to_string()),
        '-' | '_' => Some(String::new()),
        _ => None,
    }
}
