//! Pipeline settings: which pause rules run, the spell-out length window for
//! acronyms, and the audio parameters handed to the encoder.
//!
//! The embedded `default_settings.toml` is used unless a host calls
//! [`init_custom`] before the first [`settings`] lookup.

use std::ops::RangeInclusive;
use std::sync::OnceLock;

use serde::Deserialize;

pub const DEFAULT_SETTINGS_TOML: &str = include_str!("default_settings.toml");

static OVERRIDE_TOML: OnceLock<String> = OnceLock::new();
static SETTINGS: OnceLock<Settings> = OnceLock::new();

/// Install settings from a TOML document. Only valid before the first
/// [`settings`] call; the document is validated up front.
pub fn init_custom(toml_content: String) -> Result<(), SettingsError> {
    parse_settings_toml(&toml_content)?;
    if SETTINGS.get().is_some() {
        return Err(SettingsError::AlreadyInitialized);
    }
    OVERRIDE_TOML
        .set(toml_content)
        .map_err(|_| SettingsError::AlreadyInitialized)
}

pub fn settings() -> &'static Settings {
    SETTINGS.get_or_init(|| {
        let source = OVERRIDE_TOML
            .get()
            .map_or(DEFAULT_SETTINGS_TOML, String::as_str);
        parse_settings_toml(source).expect("embedded settings TOML must be valid")
    })
}

pub fn default_toml() -> &'static str {
    DEFAULT_SETTINGS_TOML
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("settings parse error: {0}")]
    Parse(String),
    #[error("{field}: {reason}")]
    InvalidValue { field: String, reason: String },
    #[error("settings already initialized")]
    AlreadyInitialized,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub pauses: PauseSettings,
    pub transliteration: TransliterationSettings,
    pub audio: AudioSettings,
}

/// Which pacing-mark rules run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct PauseSettings {
    pub object_marker: bool,
    pub subject_marker: bool,
    pub adverbs: bool,
}

impl Default for PauseSettings {
    fn default() -> Self {
        Self {
            object_marker: true,
            subject_marker: true,
            adverbs: true,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct TransliterationSettings {
    pub spell_out_min: usize,
    pub spell_out_max: usize,
}

impl TransliterationSettings {
    pub fn spell_out_range(&self) -> RangeInclusive<usize> {
        self.spell_out_min..=self.spell_out_max
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AudioSettings {
    pub sample_rate: u32,
    pub channels: u16,
    pub bit_rate: u32,
    pub quality: u8,
}

pub fn parse_settings_toml(toml_str: &str) -> Result<Settings, SettingsError> {
    let parsed: Settings =
        toml::from_str(toml_str).map_err(|e| SettingsError::Parse(e.to_string()))?;
    validate(&parsed)?;
    Ok(parsed)
}

fn validate(s: &Settings) -> Result<(), SettingsError> {
    macro_rules! check_positive {
        ($section:ident . $field:ident) => {
            if s.$section.$field == 0 {
                return Err(SettingsError::InvalidValue {
                    field: concat!(stringify!($section), ".", stringify!($field)).to_string(),
                    reason: "must be positive".to_string(),
                });
            }
        };
    }

    check_positive!(transliteration.spell_out_min);
    check_positive!(audio.sample_rate);
    check_positive!(audio.channels);
    check_positive!(audio.bit_rate);

    if s.transliteration.spell_out_min > s.transliteration.spell_out_max {
        return Err(SettingsError::InvalidValue {
            field: "transliteration.spell_out_max".to_string(),
            reason: format!(
                "must be >= spell_out_min ({})",
                s.transliteration.spell_out_min
            ),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_default_settings() {
        let s = parse_settings_toml(DEFAULT_SETTINGS_TOML).unwrap();
        assert_eq!(s.pauses, PauseSettings::default());
        assert_eq!(s.transliteration.spell_out_range(), 2..=5);
        assert_eq!(s.audio.sample_rate, 24000);
        assert_eq!(s.audio.channels, 1);
        assert_eq!(s.audio.bit_rate, 128);
        assert_eq!(s.audio.quality, 2);
    }

    #[test]
    fn global_settings_match_default() {
        assert!(settings().pauses.object_marker);
        assert_eq!(default_toml(), DEFAULT_SETTINGS_TOML);
    }

    #[test]
    fn error_inverted_spell_out_range() {
        let toml = DEFAULT_SETTINGS_TOML.replace("spell_out_max = 5", "spell_out_max = 1");
        let err = parse_settings_toml(&toml).unwrap_err();
        match err {
            SettingsError::InvalidValue { field, .. } => {
                assert_eq!(field, "transliteration.spell_out_max")
            }
            other => panic!("expected InvalidValue, got {other:?}"),
        }
    }

    #[test]
    fn error_zero_sample_rate() {
        let toml = DEFAULT_SETTINGS_TOML.replace("sample_rate = 24000", "sample_rate = 0");
        let err = parse_settings_toml(&toml).unwrap_err();
        assert!(matches!(err, SettingsError::InvalidValue { .. }));
    }

    #[test]
    fn error_missing_audio_section() {
        let err = parse_settings_toml("[pauses]\nobject_marker = true\n").unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn disable_subject_rule() {
        let toml = DEFAULT_SETTINGS_TOML.replace("subject_marker = true", "subject_marker = false");
        let s = parse_settings_toml(&toml).unwrap();
        assert!(!s.pauses.subject_marker);
        assert!(s.pauses.object_marker);
    }
}
