//! Conjugation tables.
//!
//! Verbs get 17 forms in three sections (Basic, Advanced, Honorific),
//! i-adjectives 6 forms in Basic only. Everything else has no table.
//! Forms are built by plain string composition from the stem; godan verbs
//! take their vowel grades and sound changes from [`GODAN_ENDINGS`].

mod godan;
mod render;


use serde::Serialize;
use tracing::{debug, debug_span};

use crate::morph::{classify, Paradigm, TaggerToken, WordInfo};

pub use godan::{is_godan_terminal, GodanEndingRow, GODAN_ENDINGS};
pub use render::render_html;

/// Table section, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Section {
    Basic,
    Advanced,
    Honorific,
}

impl Section {
    pub fn label(self) -> &'static str {
        match self {
            Self::Basic => "Basic Forms",
            Self::Advanced => "Advanced Forms",
            Self::Honorific => "Keigo 敬語",
        }
    }
}

/// An inflected form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Form {
    Dictionary,
    Polite,
    Negative,
    #[serde(rename = "Te-form")]
    TeForm,
    Past,
    #[serde(rename = "Past-negative")]
    PastNegative,
    Adverbial,
    Potential,
    Passive,
    Causative,
    #[serde(rename = "Causative-passive")]
    CausativePassive,
    Conditional,
    #[serde(rename = "Tara-conditional")]
    TaraConditional,
    Volitional,
    Imperative,
    #[serde(rename = "Want-to")]
    WantTo,
    Should,
    Respectful,
    Humble,
}

impl Form {
    pub fn label(self) -> &'static str {
        match self {
            Self::Dictionary => "Dictionary",
            Self::Polite => "Polite",
            Self::Negative => "Negative",
            Self::TeForm => "Te-form",
            Self::Past => "Past",
            Self::PastNegative => "Past-negative",
            Self::Adverbial => "Adverbial",
            Self::Potential => "Potential",
            Self::Passive => "Passive",
            Self::Causative => "Causative",
            Self::CausativePassive => "Causative-passive",
            Self::Conditional => "Conditional",
            Self::TaraConditional => "Tara-conditional",
            Self::Volitional => "Volitional",
            Self::Imperative => "Imperative",
            Self::WantTo => "Want-to",
            Self::Should => "Should",
            Self::Respectful => "Respectful",
            Self::Humble => "Humble",
        }
    }

    pub fn japanese_label(self) -> &'static str {
        match self {
            Self::Dictionary => "辞書形",
            Self::Polite => "ます形",
            Self::Negative => "ない形",
            Self::TeForm => "て形",
            Self::Past => "た形",
            Self::PastNegative => "なかった形",
            Self::Adverbial => "く形",
            Self::Potential => "可能形",
            Self::Passive => "受身形",
            Self::Causative => "使役形",
            Self::CausativePassive => "使役受身形",
            Self::Conditional => "仮定形",
            Self::TaraConditional => "たら形",
            Self::Volitional => "意向形",
            Self::Imperative => "命令形",
            Self::WantTo => "たい形",
            Self::Should => "べき形",
            Self::Respectful => "尊敬語",
            Self::Humble => "謙譲語",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Conjugation {
    pub form: Form,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionTable {
    pub section: Section,
    pub forms: Vec<Conjugation>,
}

/// Sections in display order, each with its forms in definition order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ConjugationTable {
    pub sections: Vec<SectionTable>,
}

impl ConjugationTable {
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn form_count(&self) -> usize {
        self.sections.iter().map(|s| s.forms.len()).sum()
    }

    pub fn section(&self, section: Section) -> Option<&SectionTable> {
        self.sections.iter().find(|s| s.section == section)
    }

    /// First value of `form` in any section.
    pub fn get(&self, form: Form) -> Option<&str> {
        self.sections
            .iter()
            .flat_map(|s| &s.forms)
            .find(|c| c.form == form)
            .map(|c| c.value.as_str())
    }

    fn from_layout(layout: &[(Section, &[Form])], values: Vec<String>) -> Self {
        let mut values = values.into_iter();
        let sections = layout
            .iter()
            .map(|&(section, forms)| SectionTable {
                section,
                forms: forms
                    .iter()
                    .zip(values.by_ref())
                    .map(|(&form, value)| Conjugation { form, value })
                    .collect(),
            })
            .collect();
        Self { sections }
    }
}

const VERB_LAYOUT: &[(Section, &[Form])] = &[
    (
        Section::Basic,
        &[
            Form::Dictionary,
            Form::Polite,
            Form::Negative,
            Form::TeForm,
            Form::Past,
        ],
    ),
    (
        Section::Advanced,
        &[
            Form::Potential,
            Form::Passive,
            Form::Causative,
            Form::CausativePassive,
            Form::Conditional,
            Form::TaraConditional,
            Form::Volitional,
            Form::Imperative,
            Form::WantTo,
            Form::Should,
        ],
    ),
    (Section::Honorific, &[Form::Respectful, Form::Humble]),
];

const I_ADJECTIVE_LAYOUT: &[(Section, &[Form])] = &[(
    Section::Basic,
    &[
        Form::Dictionary,
        Form::Negative,
        Form::Past,
        Form::PastNegative,
        Form::TeForm,
        Form::Adverbial,
    ],
)];

/// Number of forms in a verb table.
pub const VERB_FORM_COUNT: usize = 17;
/// Number of forms in an i-adjective table.
pub const I_ADJECTIVE_FORM_COUNT: usize = 6;

/// Appends each suffix to `stem`.
fn with_suffixes(stem: &str, suffixes: &[&str]) -> Vec<String> {
    suffixes.iter().map(|s| format!("{stem}{s}")).collect()
}

fn suru_forms(stem: &str) -> Vec<String> {
    with_suffixes(
        stem,
        &[
            "する",
            "します",
            "しない",
            "して",
            "した",
            "できる",
            "される",
            "させる",
            "させられる",
            "すれば",
            "したら",
            "しよう",
            "しろ",
            "したい",
            "すべき",
            "なさる",
            "いたす",
        ],
    )
}

fn ichidan_forms(stem: &str) -> Vec<String> {
    let mut forms = with_suffixes(
        stem,
        &[
            "る",
            "ます",
            "ない",
            "て",
            "た",
            "られる",
            "られる",
            "させる",
            "させられる",
            "れば",
            "たら",
            "よう",
            "ろ",
            "たい",
            "るべき",
            "られる",
        ],
    );
    forms.push(format!("お{stem}する"));
    forms
}

fn kuru_forms() -> Vec<String> {
    [
        "来る",
        "来ます",
        "来ない",
        "来て",
        "来た",
        "来られる",
        "来られる",
        "来させる",
        "来させられる",
        "来れば",
        "来たら",
        "来よう",
        "来い",
        "来たい",
        "来るべき",
        "いらっしゃる",
        "参る",
    ]
    .map(String::from)
    .to_vec()
}

/// Godan forms from the dictionary form, or `None` when its terminal is
/// not a godan row.
fn godan_forms(base: &str) -> Option<Vec<String>> {
    let terminal = base.chars().last()?;
    let r = godan::lookup(terminal)?;
    let stem = &base[..base.len() - terminal.len_utf8()];
    let g = |grade: char, tail: &str| format!("{stem}{grade}{tail}");
    let t = |ending: &str, tail: &str| format!("{stem}{ending}{tail}");

    Some(vec![
        base.to_string(),
        g(r.i, "ます"),
        g(r.a, "ない"),
        t(r.te, ""),
        t(r.ta, ""),
        g(r.e, "る"),
        g(r.a, "れる"),
        g(r.a, "せる"),
        g(r.a, "せられる"),
        g(r.e, "ば"),
        t(r.ta, "ら"),
        g(r.o, "う"),
        g(r.e, ""),
        g(r.i, "たい"),
        format!("{base}べき"),
        g(r.a, "れる"),
        format!("お{stem}{}する", r.i),
    ])
}

fn i_adjective_forms(stem: &str) -> Vec<String> {
    with_suffixes(stem, &["い", "くない", "かった", "くなかった", "くて", "く"])
}

/// Build the conjugation table for a classified word.
///
/// Paradigms without conjugation, and godan verbs whose terminal kana is not
/// in [`GODAN_ENDINGS`], yield an empty table.
pub fn synthesize(info: &WordInfo) -> ConjugationTable {
    let _span = debug_span!("synthesize", paradigm = ?info.paradigm).entered();

    let table = match info.paradigm {
        Paradigm::SuruVerb => {
            ConjugationTable::from_layout(VERB_LAYOUT, suru_forms(&info.stem))
        }
        Paradigm::GodanVerb => match godan_forms(&info.base_form) {
            Some(forms) => ConjugationTable::from_layout(VERB_LAYOUT, forms),
            None => {
                debug!(base = info.base_form.as_str(), "no godan row");
                ConjugationTable::default()
            }
        },
        Paradigm::IchidanVerb => {
            let stem = if info.stem.is_empty() {
                info.base_form
                    .strip_suffix('る')
                    .unwrap_or(info.base_form.as_str())
            } else {
                info.stem.as_str()
            };
            ConjugationTable::from_layout(VERB_LAYOUT, ichidan_forms(stem))
        }
        Paradigm::KuruVerb => ConjugationTable::from_layout(VERB_LAYOUT, kuru_forms()),
        Paradigm::IAdjective => {
            ConjugationTable::from_layout(I_ADJECTIVE_LAYOUT, i_adjective_forms(&info.stem))
        }
        Paradigm::NaAdjective | Paradigm::Noun | Paradigm::Other => ConjugationTable::default(),
    };
    debug!(forms = table.form_count(), "synthesized");
    table
}

/// Classify `word` and build its table.
pub fn synthesize_conjugations(word: &str, token: Option<&TaggerToken>) -> ConjugationTable {
    synthesize(&classify(word, token))
}
