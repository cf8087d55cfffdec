//! Character-level Unicode classification for Japanese text.

/// Pacing mark inserted after particles and introductory adverbs.
pub const PAUSE_MARK: char = '、';

/// Furigana annotation delimiters.
pub const FURIGANA_OPEN: char = '【';
pub const FURIGANA_CLOSE: char = '】';

/// Check the full Hiragana block (U+3040..U+309F).
pub fn is_hiragana(c: char) -> bool {
    ('\u{3040}'..='\u{309F}').contains(&c)
}

/// Check the full Katakana block (U+30A0..U+30FF). Includes the prolonged
/// sound mark ー and the interpunct ・.
pub fn is_katakana(c: char) -> bool {
    ('\u{30A0}'..='\u{30FF}').contains(&c)
}

pub fn is_kana(c: char) -> bool {
    is_hiragana(c) || is_katakana(c)
}

/// CJK ideographs (URO, Extension A, Extension B) plus the iteration mark 々,
/// which only ever appears inside kanji compounds (人々, 時々).
pub fn is_kanji(c: char) -> bool {
    ('\u{4E00}'..='\u{9FFF}').contains(&c)
        || ('\u{3400}'..='\u{4DBF}').contains(&c)
        || ('\u{20000}'..='\u{2A6DF}').contains(&c)
        || c == '々'
}

pub fn is_latin(c: char) -> bool {
    c.is_ascii_alphabetic()
}

/// Latin letter or ASCII digit: the characters a Latin run may continue with.
pub fn is_latin_or_digit(c: char) -> bool {
    c.is_ascii_alphanumeric()
}

/// Sentence-final punctuation: 。！？
pub fn is_sentence_end(c: char) -> bool {
    matches!(c, '。' | '！' | '？')
}

/// Any Japanese punctuation that blocks pause insertion when it directly
/// follows a particle or adverb.
pub fn is_pause_blocking(c: char) -> bool {
    c == PAUSE_MARK || is_sentence_end(c)
}
