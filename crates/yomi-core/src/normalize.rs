//! Annotated study sentence → text a Japanese voice can read.
//!
//! Stages run in a fixed order: furigana → transliterate → pauses →
//! brackets → whitespace. Transliteration runs after furigana extraction so
//! readings are already kana, and before pause insertion so the pause rules
//! see the final script.

use serde::Serialize;
use tracing::{debug, debug_span};

use crate::furigana;
use crate::lexicon::Lexicon;
use crate::pauses;
use crate::settings::{settings, Settings};

/// The two renderings of one annotated sentence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SentenceForms {
    /// Annotated text without machine-inserted pauses, for on-screen display.
    pub display: String,
    /// Fully normalized text for the speech synthesizer.
    pub speech: String,
}

/// Normalize with an explicit lexicon and settings.
pub fn normalize_for_speech_with(
    annotated: &str,
    lexicon: &Lexicon,
    settings: &Settings,
) -> String {
    let _span = debug_span!("normalize_for_speech", len = annotated.len()).entered();

    let text = {
        let _s = debug_span!("furigana").entered();
        furigana::extract(annotated)
    };
    let text = {
        let _s = debug_span!("transliterate").entered();
        lexicon.transliterate(&text, &settings.transliteration.spell_out_range())
    };
    let text = pauses::insert_pauses_with(&text, &settings.pauses);
    let text = {
        let _s = debug_span!("strip_brackets").entered();
        furigana::strip_brackets(&text)
    };
    let speech = collapse_whitespace(&text);

    debug!(speech = speech.as_str(), "normalized");
    speech
}

/// Normalize with the global lexicon and settings.
pub fn normalize_for_speech(annotated: &str) -> String {
    normalize_for_speech_with(annotated, Lexicon::global(), settings())
}

/// Strip machine-inserted pauses, keeping furigana and authored punctuation.
pub fn display_text(annotated: &str) -> String {
    pauses::remove_pauses(annotated)
}

pub fn prepare_sentence_with(
    annotated: &str,
    lexicon: &Lexicon,
    settings: &Settings,
) -> SentenceForms {
    SentenceForms {
        display: display_text(annotated),
        speech: normalize_for_speech_with(annotated, lexicon, settings),
    }
}

pub fn prepare_sentence(annotated: &str) -> SentenceForms {
    prepare_sentence_with(annotated, Lexicon::global(), settings())
}

/// Runs of whitespace become one ASCII space; ends are trimmed.
fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
