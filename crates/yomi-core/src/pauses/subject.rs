use crate::unicode::{is_kanji, is_pause_blocking, PAUSE_MARK};

use super::PauseRule;

const SUBJECT_MARKER: char = 'が';

/// A が inside a fixed expression: excluded when the text before the が ends
/// with `before` and the text after it starts with `after` (empty = anything).
struct IdiomExclusion {
    before: &'static str,
    after: &'static str,
}

/// Known idioms where が is not the subject particle. This is an open list:
/// add new false positives here rather than special-casing them below.
const IDIOM_EXCLUSIONS: &[IdiomExclusion] = &[
    // ありがとう
    IdiomExclusion {
        before: "ありがと",
        after: "",
    },
    // 方がいい / ほうがいい
    IdiomExclusion {
        before: "方",
        after: "",
    },
    IdiomExclusion {
        before: "ほう",
        after: "",
    },
    // ながら
    IdiomExclusion {
        before: "な",
        after: "ら",
    },
    // 我が社, 我が家
    IdiomExclusion {
        before: "我",
        after: "",
    },
];

/// Politeness idiom matched anywhere in a ±5 character window around the が.
const GRATITUDE: &str = "ありがとう";
const GRATITUDE_WINDOW: usize = 5;

/// Stems of verbs whose reading contains が (上がる, 下がる, 広がる, 拡がる,
/// あがる, さがる, ひろがる).
const VERB_STEMS: &[&str] = &["上", "下", "広", "拡", "あ", "さ", "ひろ"];
/// Kana that continue such a verb right after its が.
const VERB_CONTINUATIONS: &[char] = &['り', 'る', 'っ', 'れ', 'ろ'];

/// Hiragana a verb or adjective may start with.
const PREDICATE_INITIAL_KANA: &str = "あいうえおかきくけこさしすせそたちつてとなにぬねのはひふへほまみむめもやゆよらりるれろわをんがぎぐげござじずぜぞだぢづでどばびぶべぼぱぴぷぺぽっ";

/// Inserts 、 after が when it marks the subject of a following predicate.
pub struct SubjectMarkerRule;

fn ends_with(chars: &[char], s: &str) -> bool {
    let needle: Vec<char> = s.chars().collect();
    chars.ends_with(&needle)
}

fn starts_with(chars: &[char], s: &str) -> bool {
    let needle: Vec<char> = s.chars().collect();
    chars.starts_with(&needle)
}

fn window_contains(chars: &[char], pos: usize, s: &str) -> bool {
    let needle: Vec<char> = s.chars().collect();
    let lo = pos.saturating_sub(GRATITUDE_WINDOW);
    let hi = (pos + GRATITUDE_WINDOW).min(chars.len());
    chars[lo..hi].windows(needle.len()).any(|w| w == needle)
}

fn is_predicate_initial(c: char) -> bool {
    PREDICATE_INITIAL_KANA.contains(c) || is_kanji(c)
}

/// Decide whether the が at `pos` takes a pacing mark.
///
/// Returns false when `pos` does not hold a が. Every exclusion is checked
/// before the next character is tested as the start of a predicate (a
/// hiragana from the list above, or a kanji).
pub fn should_pause_after_subject(chars: &[char], pos: usize) -> bool {
    if chars.get(pos) != Some(&SUBJECT_MARKER) {
        return false;
    }
    let before = &chars[..pos];
    let after = &chars[pos + 1..];
    let next = after.first().copied();

    if next == Some(PAUSE_MARK) {
        return false;
    }

    if window_contains(chars, pos, GRATITUDE) {
        return false;
    }
    if IDIOM_EXCLUSIONS
        .iter()
        .any(|ex| ends_with(before, ex.before) && starts_with(after, ex.after))
    {
        return false;
    }

    if VERB_STEMS.iter().any(|s| ends_with(before, s))
        && next.is_some_and(|c| VERB_CONTINUATIONS.contains(&c))
    {
        return false;
    }

    match next {
        None => false,
        Some(c) if is_pause_blocking(c) => false,
        Some(c) => is_predicate_initial(c),
    }
}

impl PauseRule for SubjectMarkerRule {
    fn name(&self) -> &'static str {
        "subject_marker"
    }

    fn insert(&self, text: &str) -> String {
        let chars: Vec<char> = text.chars().collect();
        let mut out = String::with_capacity(text.len());
        for (i, &c) in chars.iter().enumerate() {
            out.push(c);
            if c == SUBJECT_MARKER && should_pause_after_subject(&chars, i) {
                out.push(PAUSE_MARK);
            }
        }
        out
    }

    /// Drop a が、 mark only if the same predicate, evaluated on the text with
    /// that mark removed, would have inserted it.
    fn remove(&self, text: &str) -> String {
        let chars: Vec<char> = text.chars().collect();
        let mut out: Vec<char> = Vec::with_capacity(chars.len());
        let mut i = 0;
        while i < chars.len() {
            let c = chars[i];
            if c == SUBJECT_MARKER && chars.get(i + 1) == Some(&PAUSE_MARK) {
                let mut probe = out.clone();
                probe.push(SUBJECT_MARKER);
                probe.extend_from_slice(&chars[i + 2..]);
                if should_pause_after_subject(&probe, out.len()) {
                    out.push(SUBJECT_MARKER);
                    i += 2;
                    continue;
                }
            }
            out.push(c);
            i += 1;
        }
        out.into_iter().collect()
    }
}
