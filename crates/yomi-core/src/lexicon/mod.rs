//! Latin-to-katakana transliteration for speech synthesis.
//!
//! Japanese study sentences in technical domains are full of Latin acronyms
//! and product names (API, EC2, TypeScript). A Japanese voice either skips
//! them or reads them letter by letter in English, so each Latin run is
//! rewritten to a katakana approximation before synthesis.
//!
//! Rules are a priority chain, first match wins:
//! 1. curated override table (exact, then case-insensitive)
//! 2. service code `[A-Z]+[0-9]+` → letter names + digit names (EC2)
//! 3. short all-caps acronym → spelled out letter by letter
//! 4. anything else passes through unchanged

mod config;

use std::collections::{BTreeMap, HashMap};
use std::ops::RangeInclusive;
use std::sync::OnceLock;

use regex::{Captures, Regex};
use tracing::trace;

pub use config::LexiconError;
use config::parse_lexicon_toml;

pub(crate) const DEFAULT_TOML: &str = include_str!("default_lexicon.toml");

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();

fn latin_run_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"[A-Za-z][A-Za-z0-9]*").expect("latin run pattern must compile")
    })
}

/// Which rule produced a transliteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    Override,
    ServiceCode,
    SpelledOut,
    Unchanged,
}

pub struct Lexicon {
    overrides: HashMap<String, String>,
    /// Lowercased override keys. On collision the first key in sorted order
    /// wins, which puts all-caps spellings ahead of lowercase ones.
    folded: HashMap<String, String>,
    letters: BTreeMap<char, String>,
    digits: BTreeMap<char, String>,
}

impl Lexicon {
    /// Set custom TOML before first `global()` call.
    pub fn init_custom(toml_content: String) -> Result<(), LexiconError> {
        // Validate eagerly
        parse_lexicon_toml(&toml_content)?;
        CUSTOM_TOML
            .set(toml_content)
            .map_err(|_| LexiconError::AlreadyInitialized)
    }

    /// Get or initialize the global singleton.
    pub fn global() -> &'static Lexicon {
        static INSTANCE: OnceLock<Lexicon> = OnceLock::new();
        INSTANCE.get_or_init(|| {
            let toml_str = CUSTOM_TOML
                .get()
                .map(|s| s.as_str())
                .unwrap_or(DEFAULT_TOML);
            Lexicon::from_toml(toml_str).expect("lexicon TOML must be valid")
        })
    }

    pub fn from_toml(toml_str: &str) -> Result<Self, LexiconError> {
        let tables = parse_lexicon_toml(toml_str)?;
        let mut folded = HashMap::new();
        for (key, value) in &tables.overrides {
            folded
                .entry(key.to_ascii_lowercase())
                .or_insert_with(|| value.clone());
        }
        Ok(Lexicon {
            overrides: tables.overrides.into_iter().collect(),
            folded,
            letters: tables.letters,
            digits: tables.digits,
        })
    }

    pub fn override_count(&self) -> usize {
        self.overrides.len()
    }

    /// Look up a run in the override table, exact match first.
    pub fn lookup(&self, run: &str) -> Option<&str> {
        self.overrides
            .get(run)
            .or_else(|| self.folded.get(&run.to_ascii_lowercase()))
            .map(String::as_str)
    }

    /// Transliterate a single Latin run. Returns the rule that fired and the
    /// replacement (the run itself for [`Rule::Unchanged`]).
    pub fn transliterate_run(
        &self,
        run: &str,
        spell_out: &RangeInclusive<usize>,
    ) -> (Rule, String) {
        if let Some(kana) = self.lookup(run) {
            return (Rule::Override, kana.to_string());
        }

        if let Some((letters, digits)) = split_service_code(run) {
            let mut out = self.spell(letters);
            for d in digits.chars() {
                match self.digits.get(&d) {
                    Some(kana) => out.push_str(kana),
                    None => out.push(d),
                }
            }
            return (Rule::ServiceCode, out);
        }

        if spell_out.contains(&run.len()) && run.chars().all(|c| c.is_ascii_uppercase()) {
            return (Rule::SpelledOut, self.spell(run));
        }

        (Rule::Unchanged, run.to_string())
    }

    /// Rewrite every Latin run in `text`; all other characters are untouched.
    pub fn transliterate(&self, text: &str, spell_out: &RangeInclusive<usize>) -> String {
        latin_run_regex()
            .replace_all(text, |caps: &Captures| {
                let run = &caps[0];
                let (rule, out) = self.transliterate_run(run, spell_out);
                trace!(run, ?rule, out = out.as_str(), "transliterate");
                out
            })
            .into_owned()
    }

    fn spell(&self, letters: &str) -> String {
        let mut out = String::new();
        for c in letters.chars() {
            match self.letters.get(&c) {
                Some(kana) => out.push_str(kana),
                None => out.push(c),
            }
        }
        out
    }
}

/// Split `EC2` into (`EC`, `2`). Both parts must be non-empty, the first all
/// uppercase ASCII letters, the second all ASCII digits.
fn split_service_code(run: &str) -> Option<(&str, &str)> {
    let split = run.find(|c: char| c.is_ascii_digit())?;
    let (letters, digits) = run.split_at(split);
    if letters.is_empty() || !letters.chars().all(|c| c.is_ascii_uppercase()) {
        return None;
    }
    if !digits.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    Some((letters, digits))
}

/// Returns the embedded default lexicon TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_TOML
}

/// Transliterate with the global lexicon and the configured spell-out range.
pub fn transliterate(text: &str) -> String {
    let cfg = &crate::settings::settings().transliteration;
    Lexicon::global().transliterate(text, &cfg.spell_out_range())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SPELL: RangeInclusive<usize> = 2..=5;

    fn lex() -> &'static Lexicon {
        Lexicon::global()
    }

    #[test]
    fn test_override_exact() {
        assert_eq!(
            lex().transliterate_run("JSON", &SPELL),
            (Rule::Override, "ジェイソン".into())
        );
        assert_eq!(
            lex().transliterate_run("TypeScript", &SPELL),
            (Rule::Override, "タイプスクリプト".into())
        );
    }

    #[test]
    fn test_override_case_insensitive() {
        assert_eq!(lex().lookup("Json"), Some("ジェイソン"));
        assert_eq!(lex().lookup("GITHUB"), Some("ギットハブ"));
        assert_eq!(lex().lookup("websocket"), Some("ウェブソケット"));
        assert_eq!(lex().lookup("Foo"), None);
    }

    #[test]
    fn test_override_beats_spell_out() {
        // SQL is 2..=5 uppercase letters but has a curated reading.
        assert_eq!(lex().transliterate_run("SQL", &SPELL).0, Rule::Override);
        assert_eq!(lex().transliterate_run("CORS", &SPELL).1, "コース");
    }

    #[test]
    fn test_service_code() {
        assert_eq!(
            lex().transliterate_run("EC2", &SPELL),
            (Rule::ServiceCode, "イーシーツー".into())
        );
        assert_eq!(
            lex().transliterate_run("S3", &SPELL),
            (Rule::ServiceCode, "エススリー".into())
        );
        // Lowercase letters do not form a service code.
        assert_eq!(lex().transliterate_run("ec2", &SPELL).0, Rule::Unchanged);
        // Digits must close the run.
        assert_eq!(lex().transliterate_run("V2X", &SPELL).0, Rule::Unchanged);
    }

    #[test]
    fn test_spell_out() {
        assert_eq!(
            lex().transliterate_run("API", &SPELL),
            (Rule::SpelledOut, "エーピーアイ".into())
        );
        assert_eq!(
            lex().transliterate_run("PR", &SPELL),
            (Rule::SpelledOut, "ピーアール".into())
        );
    }

    #[test]
    fn test_spell_out_bounds() {
        assert_eq!(lex().transliterate_run("A", &SPELL).0, Rule::Unchanged);
        assert_eq!(lex().transliterate_run("ABCDEF", &SPELL).0, Rule::Unchanged);
        assert_eq!(lex().transliterate_run("ABCDEF", &(2..=6)).0, Rule::SpelledOut);
    }

    #[test]
    fn test_unchanged() {
        assert_eq!(
            lex().transliterate_run("Hello", &SPELL),
            (Rule::Unchanged, "Hello".into())
        );
    }

    #[test]
    fn test_transliterate_text() {
        assert_eq!(
            lex().transliterate("APIチームと同期してください。", &SPELL),
            "エーピーアイチームと同期してください。"
        );
        assert_eq!(
            lex().transliterate("AWS Lambdaを使ってください。", &SPELL),
            "エーダブリューエス ラムダを使ってください。"
        );
        assert_eq!(
            lex().transliterate("EC2インスタンスで実行しています。", &SPELL),
            "イーシーツーインスタンスで実行しています。"
        );
        assert_eq!(
            lex().transliterate("TypeScriptをJSにトランスパイル", &SPELL),
            "タイプスクリプトをジェーエスにトランスパイル"
        );
    }

    #[test]
    fn test_japanese_untouched() {
        let text = "昼食まえにこのバグを修正します。";
        assert_eq!(lex().transliterate(text, &SPELL), text);
    }

    #[test]
    fn test_custom_lexicon() {
        let toml = DEFAULT_TOML.replace("JSON = \"ジェイソン\"", "JSON = \"ジェーソン\"");
        let custom = Lexicon::from_toml(&toml).unwrap();
        assert_eq!(custom.lookup("JSON"), Some("ジェーソン"));
    }
}
