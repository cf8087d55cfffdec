//! Morphological tagger record.
//!
//! The tagger itself is external (MeCab with UniDic or IPADIC, or anything
//! that can fill a [`TaggerToken`]). Only the fields the classifier reads
//! are kept.

use serde::Serialize;

/// Coarse part of speech, from the first feature field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PartOfSpeech {
    Verb,
    Adjective,
    /// 形状詞 (UniDic). IPADIC tags these as 名詞 with a 形容動詞語幹 subtype.
    AdjectivalNoun,
    Noun,
    Particle,
    AuxiliaryVerb,
    Adverb,
    Other,
}

impl PartOfSpeech {
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "動詞" => Self::Verb,
            "形容詞" => Self::Adjective,
            "形状詞" => Self::AdjectivalNoun,
            "名詞" => Self::Noun,
            "助詞" => Self::Particle,
            "助動詞" => Self::AuxiliaryVerb,
            "副詞" => Self::Adverb,
            _ => Self::Other,
        }
    }
}

/// Inflection class, from the conjugation-type feature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ConjugationClass {
    Godan,
    Ichidan,
    Suru,
    Kuru,
    Other,
}

impl ConjugationClass {
    /// Parse a conjugation-type field: `五段-カ行` / `下一段-バ行` / `サ行変格`
    /// (UniDic) or `五段・カ行イ音便` / `一段` / `サ変・スル` (IPADIC).
    /// `*` and empty fields mean the token does not inflect.
    pub fn from_feature(feature: &str) -> Option<Self> {
        if feature.is_empty() || feature == "*" {
            return None;
        }
        let class = if feature.contains("五段") {
            Self::Godan
        } else if feature.contains("一段") {
            Self::Ichidan
        } else if feature.contains("サ行変格") || feature.contains("サ変") {
            Self::Suru
        } else if feature.contains("カ行変格") || feature.contains("カ変") {
            Self::Kuru
        } else {
            Self::Other
        };
        Some(class)
    }
}

/// Field positions of a MeCab feature string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeatureLayout {
    /// `pos1,pos2,pos3,pos4,cType,cForm,lForm,lemma,…`
    UniDic,
    /// `pos,pos1,pos2,pos3,conj_type,conj_form,base,reading,pron`
    Ipadic,
}

impl FeatureLayout {
    fn lemma_field(self) -> usize {
        match self {
            Self::UniDic => 7,
            Self::Ipadic => 6,
        }
    }
}

const CONJUGATION_TYPE_FIELD: usize = 4;

/// One token as reported by the tagger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaggerToken {
    pub surface: String,
    pub pos: PartOfSpeech,
    /// Sub-classification fields, `*` entries dropped.
    pub pos_subtypes: Vec<String>,
    /// Dictionary form. UniDic glosses katakana loanwords as
    /// `パソコン-personal computer`; the classifier treats those as absent.
    pub lemma: Option<String>,
    pub conjugation_class: Option<ConjugationClass>,
}

impl TaggerToken {
    pub fn new(surface: impl Into<String>, pos: PartOfSpeech) -> Self {
        Self {
            surface: surface.into(),
            pos,
            pos_subtypes: Vec::new(),
            lemma: None,
            conjugation_class: None,
        }
    }

    pub fn with_lemma(mut self, lemma: impl Into<String>) -> Self {
        self.lemma = Some(lemma.into());
        self
    }

    pub fn with_subtype(mut self, subtype: impl Into<String>) -> Self {
        self.pos_subtypes.push(subtype.into());
        self
    }

    pub fn with_conjugation(mut self, class: ConjugationClass) -> Self {
        self.conjugation_class = Some(class);
        self
    }

    /// Build a token from a comma-separated MeCab feature string. Missing
    /// trailing fields are treated as `*`.
    pub fn from_features(surface: &str, features: &str, layout: FeatureLayout) -> Self {
        let fields: Vec<&str> = features.split(',').map(str::trim).collect();
        let field = |i: usize| fields.get(i).copied().filter(|f| !f.is_empty() && *f != "*");

        Self {
            surface: surface.to_string(),
            pos: field(0).map_or(PartOfSpeech::Other, PartOfSpeech::from_tag),
            pos_subtypes: (1..=3).filter_map(field).map(str::to_string).collect(),
            lemma: field(layout.lemma_field()).map(str::to_string),
            conjugation_class: field(CONJUGATION_TYPE_FIELD)
                .and_then(ConjugationClass::from_feature),
        }
    }

    pub fn has_subtype(&self, subtype: &str) -> bool {
        self.pos_subtypes.iter().any(|s| s.contains(subtype))
    }
}

/// A morphological tagger.
pub trait Tagger {
    fn tag(&self, text: &str) -> Vec<TaggerToken>;
}
