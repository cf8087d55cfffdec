use std::collections::BTreeMap;

use serde::Deserialize;

use crate::unicode::{is_latin, is_latin_or_digit};

#[derive(Deserialize)]
struct LexiconConfig {
    overrides: BTreeMap<String, String>,
    letters: BTreeMap<String, String>,
    digits: BTreeMap<String, String>,
}

#[derive(Debug, thiserror::Error)]
pub enum LexiconError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("[overrides] table is empty")]
    Empty,
    #[error("override key is not a Latin run: {0}")]
    InvalidKey(String),
    #[error("empty value for key: {0}")]
    EmptyValue(String),
    #[error("[{table}] has no entry for '{key}'")]
    Incomplete { table: &'static str, key: char },
    #[error("[{table}] has unexpected key '{key}'")]
    UnexpectedKey { table: &'static str, key: String },
    #[error("lexicon already initialized")]
    AlreadyInitialized,
}

/// Parsed lexicon tables, still keyed by string.
#[derive(Debug)]
pub(super) struct LexiconTables {
    pub overrides: BTreeMap<String, String>,
    pub letters: BTreeMap<char, String>,
    pub digits: BTreeMap<char, String>,
}

/// Parse lexicon TOML text into validated tables.
pub(super) fn parse_lexicon_toml(toml_str: &str) -> Result<LexiconTables, LexiconError> {
    let config: LexiconConfig =
        toml::from_str(toml_str).map_err(|e| LexiconError::Parse(e.to_string()))?;

    if config.overrides.is_empty() {
        return Err(LexiconError::Empty);
    }
    for (key, value) in &config.overrides {
        if !is_latin_run(key) {
            return Err(LexiconError::InvalidKey(key.clone()));
        }
        if value.is_empty() {
            return Err(LexiconError::EmptyValue(key.clone()));
        }
    }

    let letters = char_table("letters", config.letters, 'A'..='Z')?;
    let digits = char_table("digits", config.digits, '0'..='9')?;

    Ok(LexiconTables {
        overrides: config.overrides,
        letters,
        digits,
    })
}

/// A key the transliterator can actually see: a letter, then letters/digits.
fn is_latin_run(key: &str) -> bool {
    let mut chars = key.chars();
    chars.next().is_some_and(is_latin) && chars.all(is_latin_or_digit)
}

/// Require exactly one single-character key per char in `expected`.
fn char_table(
    table: &'static str,
    raw: BTreeMap<String, String>,
    expected: std::ops::RangeInclusive<char>,
) -> Result<BTreeMap<char, String>, LexiconError> {
    let mut out = BTreeMap::new();
    for (key, value) in raw {
        let mut chars = key.chars();
        let c = match (chars.next(), chars.next()) {
            (Some(c), None) if expected.contains(&c) => c,
            _ => return Err(LexiconError::UnexpectedKey { table, key }),
        };
        if value.is_empty() {
            return Err(LexiconError::EmptyValue(key));
        }
        out.insert(c, value);
    }
    if let Some(key) = expected.clone().find(|c| !out.contains_key(c)) {
        return Err(LexiconError::Incomplete { table, key });
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    const LETTERS: &str = r#"
[letters]
A = "エー"
B = "ビー"
C = "シー"
D = "ディー"
E = "イー"
F = "エフ"
G = "ジー"
H = "エイチ"
I = "アイ"
J = "ジェー"
K = "ケー"
L = "エル"
M = "エム"
N = "エヌ"
O = "オー"
P = "ピー"
Q = "キュー"
R = "アール"
S = "エス"
T = "ティー"
U = "ユー"
V = "ブイ"
W = "ダブリュー"
X = "エックス"
Y = "ワイ"
Z = "ゼット"
"#;

    const DIGITS: &str = r#"
[digits]
0 = "ゼロ"
1 = "ワン"
2 = "ツー"
3 = "スリー"
4 = "フォー"
5 = "ファイブ"
6 = "シックス"
7 = "セブン"
8 = "エイト"
9 = "ナイン"
"#;

    fn with_overrides(overrides: &str) -> String {
        format!("[overrides]\n{overrides}\n{LETTERS}{DIGITS}")
    }

    #[test]
    fn parse_valid_toml() {
        let tables = parse_lexicon_toml(&with_overrides(
            "JSON = \"ジェイソン\"\nWeb3 = \"ウェブスリー\"",
        ))
        .unwrap();
        assert_eq!(tables.overrides.len(), 2);
        assert_eq!(tables.overrides["Web3"], "ウェブスリー");
        assert_eq!(tables.overrides["JSON"], "ジェイソン");
        assert_eq!(tables.letters[&'W'], "ダブリュー");
        assert_eq!(tables.digits[&'2'], "ツー");
    }

    #[test]
    fn parse_default_toml() {
        let tables = parse_lexicon_toml(super::super::DEFAULT_TOML).unwrap();
        assert!(
            tables.overrides.len() > 120,
            "expected 120+ overrides, got {}",
            tables.overrides.len()
        );
        assert_eq!(tables.letters.len(), 26);
        assert_eq!(tables.digits.len(), 10);
    }

    #[test]
    fn error_empty_overrides() {
        let err = parse_lexicon_toml(&with_overrides("")).unwrap_err();
        assert!(matches!(err, LexiconError::Empty));
    }

    #[test]
    fn error_invalid_key() {
        let err = parse_lexicon_toml(&with_overrides("\"2FA\" = \"ツーエフエー\"")).unwrap_err();
        assert!(matches!(err, LexiconError::InvalidKey(_)));
        let err = parse_lexicon_toml(&with_overrides("\"Node.js\" = \"ノード\"")).unwrap_err();
        assert!(matches!(err, LexiconError::InvalidKey(_)));
        let err = parse_lexicon_toml(&with_overrides("\"Ｗｅｂ\" = \"ウェブ\"")).unwrap_err();
        assert!(matches!(err, LexiconError::InvalidKey(_)));
    }

    #[test]
    fn error_empty_value() {
        let err = parse_lexicon_toml(&with_overrides("JSON = \"\"")).unwrap_err();
        assert!(matches!(err, LexiconError::EmptyValue(_)));
    }

    #[test]
    fn error_incomplete_letters() {
        let toml = format!(
            "[overrides]\nJSON = \"ジェイソン\"\n[letters]\nA = \"エー\"\n{DIGITS}"
        );
        let err = parse_lexicon_toml(&toml).unwrap_err();
        assert!(matches!(
            err,
            LexiconError::Incomplete {
                table: "letters",
                key: 'B'
            }
        ));
    }

    #[test]
    fn error_unexpected_digit_key() {
        let toml = format!("[overrides]\nJSON = \"ジェイソン\"\n{LETTERS}{DIGITS}10 = \"テン\"\n");
        let err = parse_lexicon_toml(&toml).unwrap_err();
        assert!(matches!(err, LexiconError::UnexpectedKey { .. }));
    }

    #[test]
    fn error_invalid_toml() {
        let err = parse_lexicon_toml("not valid toml {{{").unwrap_err();
        assert!(matches!(err, LexiconError::Parse(_)));
    }
}
