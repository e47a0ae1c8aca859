//! Single-pass segmentation of free-form names into lexemes.
//!
//! Splitting runs in two phases over the rune slice:
//!
//! 1. **Exact scan.** A live list of in-flight candidates advances rune by
//!    rune against the registered spellings, case-sensitively. A candidate
//!    whose body is fully matched completes only when the following rune
//!    does not start a new lowercase word; a `SimplePlural` candidate may
//!    absorb a trailing `s` when the rune after it is a word boundary.
//! 2. **Casual break.** The gaps between accepted matches are segmented on
//!    replacement-table hits, separators, uppercase runes, and letter/digit
//!    transitions. Each flushed segment gets a case-insensitive whole-word
//!    check against the registry, so `Http` still resolves to `HTTP`.

pub mod pool;

use std::sync::Arc;

use smallvec::SmallVec;

use crate::index::{InitialismCache, PluralForm};
use crate::lexeme::Lexeme;
use crate::mangler::replace::ReplaceFn;

/// A candidate or accepted initialism occurrence found during the scan.
#[derive(Debug, Clone, Copy)]
struct ScanMatch {
    /// Index into the cache tables.
    idx: usize,

    /// Rune position of the first matched rune.
    start: usize,

    /// Rune position of the last matched rune, inclusive. Only meaningful
    /// once `complete` is set; covers the absorbed `s` when `plural`.
    end: usize,

    complete: bool,
    plural: bool,
}

/// Splits one name into lexemes against a fixed registry snapshot.
pub(crate) struct Splitter {
    cache: Arc<InitialismCache>,
    replace: Arc<ReplaceFn>,
}

impl Splitter {
    pub(crate) fn new(cache: Arc<InitialismCache>, replace: Arc<ReplaceFn>) -> Self {
        Self { cache, replace }
    }

    /// Split `input` into `out`. The buffer is appended to, not cleared.
    pub(crate) fn split(&self, input: &str, out: &mut Vec<Lexeme>) {
        let runes: Vec<char> = input.chars().collect();
        let matches = self.gather_matches(&runes);

        let mut last_end: Option<usize> = None;
        for m in &matches {
            if !m.complete {
                continue;
            }
            let gap_start = match last_end {
                None => 0,
                Some(end) if m.start <= end => continue,
                Some(end) => end + 1,
            };
            self.break_casual(&runes[gap_start..m.start], out);
            let original: String = runes[m.start..=m.end].iter().collect();
            out.push(Lexeme::initialism(
                original,
                self.cache.spellings()[m.idx].as_str(),
                m.plural,
            ));
            last_end = Some(m.end);
        }

        let tail = last_end.map_or(0, |end| end + 1);
        self.break_casual(&runes[tail..], out);
    }

    /// Phase 1: advance the live candidate list over every rune.
    ///
    /// The list keeps creation order; candidates created at the same
    /// position are appended in registry order (longest spelling first),
    /// which resolves overlap ties in favor of the longest match.
    fn gather_matches(&self, runes: &[char]) -> SmallVec<[ScanMatch; 8]> {
        let mut matches: SmallVec<[ScanMatch; 8]> = SmallVec::new();
        let mut scratch: SmallVec<[ScanMatch; 8]> = SmallVec::new();

        for (pos, &rune) in runes.iter().enumerate() {
            scratch.clear();

            for &m in &matches {
                if m.complete {
                    scratch.push(m);
                    continue;
                }
                let body = self.cache.runes(m.idx);
                if body[pos - m.start] != rune {
                    continue;
                }
                if pos - m.start == body.len() - 1 {
                    if let Some(done) = self.try_complete(m.idx, m.start, pos, runes) {
                        scratch.push(done);
                    }
                } else {
                    scratch.push(m);
                }
            }

            for idx in 0..self.cache.len() {
                let body = self.cache.runes(idx);
                if body[0] != rune {
                    continue;
                }
                if body.len() == 1 {
                    if let Some(done) = self.try_complete(idx, pos, pos, runes) {
                        scratch.push(done);
                    }
                } else {
                    scratch.push(ScanMatch {
                        idx,
                        start: pos,
                        end: 0,
                        complete: false,
                        plural: false,
                    });
                }
            }

            std::mem::swap(&mut matches, &mut scratch);
        }

        matches
    }

    /// Decide whether a fully matched body ending at `pos` is accepted.
    ///
    /// A following lowercase rune means the match runs into the next word
    /// and is rejected, unless it is the plural `s` of a `SimplePlural`
    /// spelling followed by a word boundary (end of input, an uppercase
    /// rune, or a separator; a digit is not a boundary).
    fn try_complete(
        &self,
        idx: usize,
        start: usize,
        pos: usize,
        runes: &[char],
    ) -> Option<ScanMatch> {
        let accepted = ScanMatch {
            idx,
            start,
            end: pos,
            complete: true,
            plural: false,
        };

        let Some(&next) = runes.get(pos + 1) else {
            return Some(accepted);
        };

        if next == 's' && self.cache.plural_form(idx) == PluralForm::SimplePlural {
            let boundary = match runes.get(pos + 2) {
                None => true,
                Some(&future) => future.is_uppercase() || !future.is_alphanumeric(),
            };
            if boundary {
                return Some(ScanMatch {
                    end: pos + 1,
                    plural: true,
                    ..accepted
                });
            }
        }

        if next.is_lowercase() {
            None
        } else {
            Some(accepted)
        }
    }

    /// Phase 2: segment a gap between accepted matches.
    ///
    /// Two buffers track the current letter segment and a trailing digit
    /// run. At a hard boundary (separator, replacement, uppercase rune,
    /// end of slice) the glued `letters + digits` word is fold-checked
    /// first, so `utf8` and `Ipv4` resolve as one initialism; a lowercase
    /// letter right after a digit run ends the run without gluing, keeping
    /// `sample2text` as three words.
    fn break_casual(&self, runes: &[char], out: &mut Vec<Lexeme>) {
        let mut letters = String::new();
        let mut digits = String::new();

        for &rune in runes {
            if let Some(replacement) = (self.replace)(rune) {
                self.flush(&mut letters, &mut digits, true, out);
                let word = replacement.trim();
                if !word.is_empty() {
                    self.emit_word(word, out);
                }
                continue;
            }

            if !rune.is_alphanumeric() {
                self.flush(&mut letters, &mut digits, true, out);
                continue;
            }

            if rune.is_uppercase() {
                self.flush(&mut letters, &mut digits, true, out);
                letters.push(rune);
                continue;
            }

            if rune.is_numeric() {
                digits.push(rune);
                continue;
            }

            // lowercase or uncased letter
            if !digits.is_empty() {
                self.flush(&mut letters, &mut digits, false, out);
            }
            letters.push(rune);
        }

        self.flush(&mut letters, &mut digits, true, out);
    }

    /// Flush the pending letter segment and digit run.
    fn flush(&self, letters: &mut String, digits: &mut String, glue: bool, out: &mut Vec<Lexeme>) {
        if glue && !letters.is_empty() && !digits.is_empty() {
            let combined = format!("{letters}{digits}");
            if let Some(idx) = self.lookup_fold(&combined) {
                out.push(Lexeme::initialism(
                    combined,
                    self.cache.spellings()[idx].as_str(),
                    false,
                ));
                letters.clear();
                digits.clear();
                return;
            }
        }
        if !letters.is_empty() {
            self.emit_word(letters.as_str(), out);
            letters.clear();
        }
        if !digits.is_empty() {
            out.push(Lexeme::casual(digits.as_str()));
            digits.clear();
        }
    }

    /// Emit one whole word, resolving it to an initialism when its
    /// uppercased form matches a registered spelling.
    fn emit_word(&self, word: &str, out: &mut Vec<Lexeme>) {
        match self.lookup_fold(word) {
            Some(idx) => out.push(Lexeme::initialism(
                word,
                self.cache.spellings()[idx].as_str(),
                false,
            )),
            None => out.push(Lexeme::casual(word)),
        }
    }

    /// Case-insensitive whole-word lookup. Registry order makes the first
    /// hit deterministic when spellings differ only by case.
    fn lookup_fold(&self, word: &str) -> Option<usize> {
        let upper: Vec<char> = word.to_uppercase().chars().collect();
        (0..self.cache.len()).find(|&idx| self.cache.upper_runes(idx) == upper.as_slice())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::InitialismIndex;
    use crate::mangler::replace::default_replace;

    fn split(input: &str) -> Vec<Lexeme> {
        split_with(&InitialismIndex::with_defaults(), input)
    }

    fn split_with(index: &InitialismIndex, input: &str) -> Vec<Lexeme> {
        let splitter = Splitter::new(index.cache(), Arc::new(default_replace));
        let mut out = Vec::new();
        splitter.split(input, &mut out);
        out
    }

    fn originals(lexemes: &[Lexeme]) -> Vec<&str> {
        lexemes.iter().map(Lexeme::original).collect()
    }

    #[test]
    fn test_split_plain_words() {
        let lexemes = split("sample text");
        assert_eq!(vec!["sample", "text"], originals(&lexemes));
        assert!(lexemes.iter().all(|l| !l.is_initialism()));
    }

    #[test]
    fn test_exact_scan_finds_embedded_initialism() {
        let lexemes = split("elbHTTPLoadBalancer");
        assert_eq!(vec!["elb", "HTTP", "Load", "Balancer"], originals(&lexemes));
        assert!(lexemes[1].is_initialism());
        assert!(!lexemes[0].is_initialism(), "elb is not registered");
    }

    #[test]
    fn test_longest_match_wins_at_same_start() {
        let lexemes = split("HTTPS");
        assert_eq!(1, lexemes.len());
        assert_eq!(
            Lexeme::initialism("HTTPS", "HTTPS", false),
            lexemes[0].clone()
        );
    }

    #[test]
    fn test_fold_check_resolves_cased_words() {
        let lexemes = split("Http Server");
        assert_eq!(
            Lexeme::initialism("Http", "HTTP", false),
            lexemes[0].clone()
        );
        assert_eq!(Lexeme::casual("Server"), lexemes[1].clone());
    }

    #[test]
    fn test_match_rejected_before_lowercase_word() {
        // TCP would run into "tcpdump"; the scan must not claim it.
        let lexemes = split("TCPdump");
        assert_eq!(vec!["T", "C", "Pdump"], originals(&lexemes));
    }

    #[test]
    fn test_plural_absorption() {
        let lexemes = split("pluralized initialism IDs");
        assert_eq!(3, lexemes.len());
        assert_eq!(Lexeme::initialism("IDs", "ID", true), lexemes[2].clone());

        let lexemes = split("pluralized initialism IDsX");
        assert_eq!(4, lexemes.len());
        assert_eq!(Lexeme::initialism("IDs", "ID", true), lexemes[2].clone());
        assert_eq!(Lexeme::casual("X"), lexemes[3].clone());
    }

    #[test]
    fn test_uppercase_s_is_not_a_plural() {
        // IDS: the S is uppercase, so ID completes and S stands alone.
        let lexemes = split("pluralized IDS initialism");
        assert_eq!(4, lexemes.len());
        assert_eq!(Lexeme::initialism("ID", "ID", false), lexemes[1].clone());
        assert_eq!(Lexeme::casual("S"), lexemes[2].clone());
    }

    #[test]
    fn test_invariant_initialism_never_absorbs() {
        let lexemes = split("pluralized HTTPs is not an initialism");
        assert_eq!(9, lexemes.len());
        assert_eq!(
            vec!["pluralized", "H", "T", "T", "Ps", "is", "not", "an", "initialism"],
            originals(&lexemes)
        );
    }

    #[test]
    fn test_possessive_s_breaks_the_word() {
        let lexemes = split("pluralized HTTP's initialism");
        assert_eq!(4, lexemes.len());
        assert_eq!(Lexeme::initialism("HTTP", "HTTP", false), lexemes[1].clone());
        assert_eq!(Lexeme::casual("s"), lexemes[2].clone());
    }

    #[test]
    fn test_plural_rejected_before_lowercase() {
        let index = InitialismIndex::with_defaults();
        index.add("ELB");
        let lexemes = split_with(&index, "ELBsis");
        assert_eq!(vec!["E", "L", "Bsis"], originals(&lexemes));
    }

    #[test]
    fn test_digit_run_glued_at_boundary() {
        let lexemes = split("utf8");
        assert_eq!(
            vec![Lexeme::initialism("utf8", "UTF8", false)],
            lexemes
        );

        let lexemes = split("Ipv4 address");
        assert_eq!(Lexeme::initialism("Ipv4", "IPv4", false), lexemes[0].clone());
    }

    #[test]
    fn test_digit_run_not_glued_before_lowercase() {
        let lexemes = split("sample 2 Text");
        assert_eq!(vec!["sample", "2", "Text"], originals(&lexemes));

        let lexemes = split("sample2Text");
        assert_eq!(vec!["sample", "2", "Text"], originals(&lexemes));
    }

    #[test]
    fn test_replacement_table() {
        let lexemes = split("éget$ref");
        assert_eq!(vec!["éget", "Dollar", "ref"], originals(&lexemes));

        let lexemes = split("dash-and_underscore");
        assert_eq!(vec!["dash", "and", "underscore"], originals(&lexemes));
    }

    #[test]
    fn test_capital_runs_break_letter_by_letter() {
        let index = InitialismIndex::with_defaults();
        for word in ["elb", "cap", "capwd", "wd"] {
            index.add(word);
        }
        let lexemes = split_with(&index, "CAPWDfolwdBylc");
        assert_eq!(vec!["CAP", "W", "Dfolwd", "Bylc"], originals(&lexemes));
        assert!(lexemes[0].is_initialism());
    }

    #[test]
    fn test_empty_and_separator_only_inputs() {
        assert!(split("").is_empty());
        assert!(split("  ").is_empty());
        assert!(split("-_-").is_empty());
    }
}
