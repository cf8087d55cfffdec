use crate::unicode::{
    is_pause_blocking, is_sentence_end, FURIGANA_CLOSE, FURIGANA_OPEN, PAUSE_MARK,
};

use super::PauseRule;

/// Introductory adverbs and phrases that take a pause when they open a
/// sentence. At each anchor the first entry that matches wins, so an entry
/// must precede any other entry that is its prefix (ただし before ただ).
pub const ADVERBS: &[&str] = &[
    // Sequence
    "まず",
    "次に",
    "最初に",
    "最後に",
    "その前に",
    "その後",
    "そして",
    "それから",
    // Addition
    "また",
    "さらに",
    "しかも",
    // Contrast
    "しかし",
    "ただし",
    "ただ",
    // Examples
    "例えば",
    "特に",
    "具体的には",
    "基本的には",
    // Actuality
    "実は",
    "実際には",
    "本当は",
    // Conditions
    "もし",
    "仮に",
    // Emphasis
    "確かに",
    "当然",
    "もちろん",
    // Time
    "今すぐ",
    "後で",
    "先に",
];

/// Kana readings of the kanji entries in [`ADVERBS`]. Speech text has its
/// furigana already replaced by readings (`実【じつ】は` → `じつは`), so these
/// are matched after the written forms. None of them has an [`ADVERBS`]
/// entry as a prefix. その後 is listed only as そのあと: そのご would also
/// match その + ごみ.
pub const ADVERB_READINGS: &[&str] = &[
    "つぎに",
    "さいしょに",
    "さいごに",
    "そのまえに",
    "そのあと",
    "たとえば",
    "とくに",
    "ぐたいてきには",
    "きほんてきには",
    "じつは",
    "じっさいには",
    "ほんとうは",
    "かりに",
    "たしかに",
    "とうぜん",
    "いますぐ",
    "あとで",
    "さきに",
];

/// Inserts 、 after an adverb from [`ADVERBS`] or [`ADVERB_READINGS`] at the
/// start of the text or right after a sentence end, when more text follows. Furigana on any of
/// the adverb's characters (`実【じつ】は`) is tolerated and the mark goes after
/// the annotation.
pub struct AdverbRule;

/// Match `adverb` at `start`, allowing a non-empty `【…】` annotation after
/// each character. Returns the index one past the match.
fn match_adverb(chars: &[char], start: usize, adverb: &str) -> Option<usize> {
    let mut i = start;
    for a in adverb.chars() {
        if chars.get(i) != Some(&a) {
            return None;
        }
        i += 1;
        if chars.get(i) == Some(&FURIGANA_OPEN) {
            if let Some(len) = chars[i + 1..].iter().position(|&c| c == FURIGANA_CLOSE) {
                if len > 0 {
                    i += len + 2;
                }
            }
        }
    }
    Some(i)
}

/// Start of text and every position right after 。！？
fn anchors(chars: &[char]) -> impl Iterator<Item = usize> + '_ {
    std::iter::once(0).chain(
        chars
            .iter()
            .enumerate()
            .filter(|&(_, &c)| is_sentence_end(c))
            .map(|(i, _)| i + 1),
    )
}

/// End index of the first adverb matching at `anchor`.
fn adverb_end(chars: &[char], anchor: usize) -> Option<usize> {
    ADVERBS
        .iter()
        .chain(ADVERB_READINGS)
        .find_map(|adverb| match_adverb(chars, anchor, adverb))
}

fn takes_pause(next: Option<&char>) -> bool {
    matches!(next, Some(&c) if !is_pause_blocking(c))
}

impl PauseRule for AdverbRule {
    fn name(&self) -> &'static str {
        "adverbs"
    }

    fn insert(&self, text: &str) -> String {
        let chars: Vec<char> = text.chars().collect();
        let marks: Vec<usize> = anchors(&chars)
            .filter_map(|a| adverb_end(&chars, a))
            .filter(|&end| takes_pause(chars.get(end)))
            .collect();

        let mut out = String::with_capacity(text.len() + marks.len() * PAUSE_MARK.len_utf8());
        for (i, &c) in chars.iter().enumerate() {
            if marks.contains(&i) {
                out.push(PAUSE_MARK);
            }
            out.push(c);
        }
        out
    }

    /// Removing a mark can expose a longer adverb at the same anchor
    /// (ただ、し、 → ただし、), so removal repeats until nothing changes.
    fn remove(&self, text: &str) -> String {
        let mut out = remove_once(text);
        loop {
            let next = remove_once(&out);
            if next == out {
                return out;
            }
            out = next;
        }
    }
}

fn remove_once(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let drops: Vec<usize> = anchors(&chars)
        .filter_map(|a| adverb_end(&chars, a))
        .filter(|&end| chars.get(end) == Some(&PAUSE_MARK) && takes_pause(chars.get(end + 1)))
        .collect();

    chars
        .iter()
        .enumerate()
        .filter(|(i, _)| !drops.contains(i))
        .map(|(_, &c)| c)
        .collect()
}
