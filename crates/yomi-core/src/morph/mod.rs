//! Morphological classification of a vocabulary word.
//!
//! Assigns a word to the paradigm that governs its inflection. Light-verb
//! compounds (開発する, 開発します) are recognized from the surface alone;
//! everything else needs a [`TaggerToken`], and without one the word is
//! [`Paradigm::Other`].

mod tagger;

#[cfg(test)]
mod tests;

use serde::Serialize;
use tracing::debug;

use crate::conjugate::is_godan_terminal;

pub use tagger::{ConjugationClass, FeatureLayout, PartOfSpeech, Tagger, TaggerToken};

/// Inflection paradigm of a word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Paradigm {
    SuruVerb,
    GodanVerb,
    IchidanVerb,
    KuruVerb,
    IAdjective,
    NaAdjective,
    Noun,
    Other,
}

impl Paradigm {
    /// Japanese grammatical name, as shown on cards.
    pub fn japanese_label(self) -> &'static str {
        match self {
            Self::SuruVerb => "する動詞",
            Self::GodanVerb => "五段動詞",
            Self::IchidanVerb => "一段動詞",
            Self::KuruVerb => "カ変動詞",
            Self::IAdjective => "い形容詞",
            Self::NaAdjective => "な形容詞",
            Self::Noun => "名詞",
            Self::Other => "その他",
        }
    }
}

/// Classification result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordInfo {
    pub paradigm: Paradigm,
    pub base_form: String,
    /// Part that inflections attach to. Empty when the paradigm has none
    /// (kuru, nouns, other).
    pub stem: String,
}

impl WordInfo {
    fn new(paradigm: Paradigm, base_form: impl Into<String>, stem: impl Into<String>) -> Self {
        Self {
            paradigm,
            base_form: base_form.into(),
            stem: stem.into(),
        }
    }
}

const SURU: &str = "する";

/// Inflected light-verb endings recognized on the surface, checked in order.
const SURU_INFLECTIONS: &[&str] = &[
    "して",
    "した",
    "します",
    "しない",
    "される",
    "させる",
    "できる",
    "しよう",
    "すれば",
];

/// Dictionary forms of 来る.
const KURU_FORMS: &[&str] = &["来る", "くる"];
/// Dictionary forms of する; UniDic lemmatizes it as 為る.
const SURU_FORMS: &[&str] = &["する", "為る"];

/// Subtypes marking a noun that takes する.
const LIGHT_VERB_SUBTYPES: &[&str] = &["サ変可能", "サ変接続"];
/// Subtypes marking an adjectival noun.
const ADJECTIVAL_NOUN_SUBTYPES: &[&str] = &["形状詞", "形容動詞語幹"];

/// The token's dictionary form, or `word` when the lemma is missing or is a
/// UniDic loanword gloss (`ログイン-login`).
fn resolve_base_form(word: &str, token: &TaggerToken) -> String {
    match token.lemma.as_deref() {
        Some(lemma) if !lemma.contains('-') => lemma.to_string(),
        _ => word.to_string(),
    }
}

fn drop_last_char(s: &str) -> &str {
    s.char_indices().last().map_or(s, |(i, _)| &s[..i])
}

fn classify_suru_surface(word: &str) -> Option<WordInfo> {
    if let Some(stem) = word.strip_suffix(SURU) {
        return Some(WordInfo::new(Paradigm::SuruVerb, word, stem));
    }
    SURU_INFLECTIONS.iter().find_map(|suffix| {
        let stem = word.strip_suffix(suffix).filter(|s| !s.is_empty())?;
        Some(WordInfo::new(
            Paradigm::SuruVerb,
            format!("{stem}{SURU}"),
            stem,
        ))
    })
}

fn classify_verb(word: &str, token: &TaggerToken) -> WordInfo {
    let base = resolve_base_form(word, token);

    if KURU_FORMS.contains(&base.as_str())
        || token.conjugation_class == Some(ConjugationClass::Kuru)
    {
        return WordInfo::new(Paradigm::KuruVerb, "来る", "");
    }
    if SURU_FORMS.contains(&base.as_str()) {
        return WordInfo::new(Paradigm::SuruVerb, SURU, "");
    }

    match token.conjugation_class {
        Some(ConjugationClass::Ichidan) => {
            let stem = drop_last_char(&base).to_string();
            WordInfo::new(Paradigm::IchidanVerb, base, stem)
        }
        Some(ConjugationClass::Suru) => {
            let stem = base
                .strip_suffix(SURU)
                .or_else(|| base.strip_suffix("為る"))
                .unwrap_or(base.as_str())
                .to_string();
            WordInfo::new(Paradigm::SuruVerb, format!("{stem}{SURU}"), stem)
        }
        // Godan by marker, by terminal kana, or by default: synthesis
        // yields nothing for a terminal outside the godan table.
        _ => {
            let stem = if base.chars().last().is_some_and(is_godan_terminal) {
                drop_last_char(&base).to_string()
            } else {
                String::new()
            };
            WordInfo::new(Paradigm::GodanVerb, base, stem)
        }
    }
}

fn classify_token(word: &str, token: &TaggerToken) -> Option<WordInfo> {
    match token.pos {
        PartOfSpeech::Verb => return Some(classify_verb(word, token)),
        PartOfSpeech::Adjective => {
            let base = resolve_base_form(word, token);
            if let Some(stem) = base.strip_suffix('い') {
                let stem = stem.to_string();
                return Some(WordInfo::new(Paradigm::IAdjective, base, stem));
            }
        }
        _ => {}
    }

    let adjectival = token.pos == PartOfSpeech::AdjectivalNoun
        || ADJECTIVAL_NOUN_SUBTYPES.iter().any(|s| token.has_subtype(s));
    if adjectival {
        let base = resolve_base_form(word, token);
        return Some(WordInfo::new(Paradigm::NaAdjective, base.clone(), base));
    }

    if token.pos == PartOfSpeech::Noun {
        let base = resolve_base_form(word, token);
        if LIGHT_VERB_SUBTYPES.iter().any(|s| token.has_subtype(s)) {
            return Some(WordInfo::new(
                Paradigm::SuruVerb,
                format!("{base}{SURU}"),
                base,
            ));
        }
        return Some(WordInfo::new(Paradigm::Noun, base, ""));
    }

    None
}

/// Classify `word`, using the tagger's token for it when available.
///
/// Light-verb surfaces win over the token; a word that matches nothing is
/// [`Paradigm::Other`] with the word as base form and an empty stem.
pub fn classify(word: &str, token: Option<&TaggerToken>) -> WordInfo {
    let info = classify_suru_surface(word)
        .or_else(|| token.and_then(|t| classify_token(word, t)))
        .unwrap_or_else(|| WordInfo::new(Paradigm::Other, word, ""));
    debug!(word, paradigm = ?info.paradigm, stem = info.stem.as_str(), "classify");
    info
}

/// Classify `word` with the first token `tagger` reports for it.
pub fn classify_with_tagger(word: &str, tagger: &dyn Tagger) -> WordInfo {
    let tokens = tagger.tag(word);
    classify(word, tokens.first())
}
