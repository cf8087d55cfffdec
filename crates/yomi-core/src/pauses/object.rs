use crate::unicode::{is_pause_blocking, PAUSE_MARK};

use super::PauseRule;

const OBJECT_MARKER: char = 'を';

/// Inserts 、 after every を that is followed by more text.
///
/// を only ever functions as the object particle, so no disambiguation is
/// needed. Nothing is inserted before existing punctuation, whitespace, or
/// at end of text.
pub struct ObjectMarkerRule;

fn takes_pause(next: Option<&char>) -> bool {
    matches!(next, Some(&c) if !is_pause_blocking(c) && !c.is_whitespace())
}

impl PauseRule for ObjectMarkerRule {
    fn name(&self) -> &'static str {
        "object_marker"
    }

    fn insert(&self, text: &str) -> String {
        let chars: Vec<char> = text.chars().collect();
        let mut out = String::with_capacity(text.len());
        for (i, &c) in chars.iter().enumerate() {
            out.push(c);
            if c == OBJECT_MARKER && takes_pause(chars.get(i + 1)) {
                out.push(PAUSE_MARK);
            }
        }
        out
    }

    fn remove(&self, text: &str) -> String {
        let chars: Vec<char> = text.chars().collect();
        let mut out = String::with_capacity(text.len());
        let mut i = 0;
        while i < chars.len() {
            let c = chars[i];
            out.push(c);
            if c == OBJECT_MARKER
                && chars.get(i + 1) == Some(&PAUSE_MARK)
                && takes_pause(chars.get(i + 2))
            {
                i += 2;
                continue;
            }
            i += 1;
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert() {
        let rule = ObjectMarkerRule;
        assert_eq!(
            rule.insert("ハッピーパスをテストしてください。"),
            "ハッピーパスを、テストしてください。"
        );
        assert_eq!(
            rule.insert("コードレビューをお願いします。"),
            "コードレビューを、お願いします。"
        );
    }

    #[test]
    fn test_insert_skips_punctuation_and_end() {
        let rule = ObjectMarkerRule;
        assert_eq!(rule.insert("データを、保存"), "データを、保存");
        assert_eq!(rule.insert("何を？"), "何を？");
        assert_eq!(rule.insert("何を。"), "何を。");
        assert_eq!(rule.insert("それを ください"), "それを ください");
        assert_eq!(rule.insert("これを"), "これを");
    }

    #[test]
    fn test_insert_consecutive() {
        assert_eq!(ObjectMarkerRule.insert("をを"), "を、を");
    }

    #[test]
    fn test_remove() {
        let rule = ObjectMarkerRule;
        assert_eq!(
            rule.remove("データベースを、バックアップしてください。"),
            "データベースをバックアップしてください。"
        );
        // A comma followed by punctuation was never inserted by the rule.
        assert_eq!(rule.remove("を、。"), "を、。");
        assert_eq!(rule.remove("を、を、す"), "ををす");
    }
}
