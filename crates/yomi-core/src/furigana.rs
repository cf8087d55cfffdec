//! Furigana (ruby) annotation handling.
//!
//! Annotated text carries readings as `漢字【かんじ】`: a base run of kanji,
//! optionally led by ASCII digits (`2日【ふつか】`), immediately followed by
//! a bracketed kana reading. Extraction replaces the whole span with its
//! reading so a speech synthesizer never has to guess a kanji reading.

use std::ops::Range;
use std::sync::OnceLock;

use regex::Regex;

use crate::unicode::{is_kana, FURIGANA_CLOSE, FURIGANA_OPEN};

const SPAN_PATTERN: &str =
    r"([0-9]*[\x{3400}-\x{4DBF}\x{4E00}-\x{9FFF}\x{20000}-\x{2A6DF}々]+)【([^【】]*)】";

fn span_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(SPAN_PATTERN).expect("furigana span pattern must compile"))
}

fn bracket_pair_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"【([^【】]*)】").expect("bracket pattern must compile"))
}

/// One annotated span found in the text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FuriganaSpan<'a> {
    /// Digits + kanji being annotated.
    pub base: &'a str,
    /// Bracketed reading, possibly empty.
    pub reading: &'a str,
    /// Byte range of `base【reading】` in the source text.
    pub range: Range<usize>,
}

/// Iterate the annotated spans of `text` in order.
pub fn spans(text: &str) -> impl Iterator<Item = FuriganaSpan<'_>> {
    span_regex().captures_iter(text).filter_map(|caps| {
        let whole = caps.get(0)?;
        Some(FuriganaSpan {
            base: caps.get(1)?.as_str(),
            reading: caps.get(2).map_or("", |m| m.as_str()),
            range: whole.range(),
        })
    })
}

/// Replace every annotated span with its reading.
///
/// `昼食【ちゅうしょく】前【まえ】に` → `ちゅうしょくまえに`. Text that does not
/// form a span (including malformed brackets) passes through unchanged.
pub fn extract(text: &str) -> String {
    span_regex().replace_all(text, "$2").into_owned()
}

/// Remove bracket pairs the extractor did not consume (with their content),
/// then any unpaired bracket characters.
pub fn strip_brackets(text: &str) -> String {
    bracket_pair_regex()
        .replace_all(text, "")
        .chars()
        .filter(|&c| c != FURIGANA_OPEN && c != FURIGANA_CLOSE)
        .collect()
}

/// A problem found by [`validate`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FuriganaIssue {
    #[error("unmatched brackets: {open} 【 vs {close} 】")]
    UnbalancedBrackets { open: usize, close: usize },
    #[error("empty reading at byte {offset}")]
    EmptyReading { offset: usize },
    #[error("invalid reading '{reading}' (not hiragana/katakana)")]
    InvalidReading { reading: String },
}

/// Lint the furigana annotations in `text`.
///
/// The extractor never fails on malformed input; this lets outer tooling
/// report what it silently skipped. Readings may contain kana, ー and ・;
/// ASCII alphanumerics are tolerated for readings of mixed-script terms.
pub fn validate(text: &str) -> Vec<FuriganaIssue> {
    let open = text.chars().filter(|&c| c == FURIGANA_OPEN).count();
    let close = text.chars().filter(|&c| c == FURIGANA_CLOSE).count();
    if open != close {
        return vec![FuriganaIssue::UnbalancedBrackets { open, close }];
    }

    let mut issues = Vec::new();
    for caps in bracket_pair_regex().captures_iter(text) {
        let Some(reading) = caps.get(1) else {
            continue;
        };
        let r = reading.as_str();
        if r.is_empty() {
            issues.push(FuriganaIssue::EmptyReading {
                offset: reading.start(),
            });
        } else if !r.chars().all(|c| is_kana(c) || c.is_ascii_alphanumeric()) {
            issues.push(FuriganaIssue::InvalidReading {
                reading: r.to_string(),
            });
        }
    }
    issues
}
