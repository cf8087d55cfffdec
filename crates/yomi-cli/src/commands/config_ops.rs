use std::fs;

use yomi_core::lexicon::{self, Lexicon};
use yomi_core::settings;

pub fn settings_export() {
    print!("{}", settings::default_toml());
}

pub fn settings_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let s = die!(settings::parse_settings_toml(&content), "Error: {}");
    println!(
        "OK: pauses(object={}, subject={}, adverbs={}), spell_out={}..={}, audio={}Hz/{}ch/{}kbps",
        s.pauses.object_marker,
        s.pauses.subject_marker,
        s.pauses.adverbs,
        s.transliteration.spell_out_min,
        s.transliteration.spell_out_max,
        s.audio.sample_rate,
        s.audio.channels,
        s.audio.bit_rate,
    );
}

pub fn lexicon_export() {
    print!("{}", lexicon::default_toml());
}

pub fn lexicon_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let lex = die!(Lexicon::from_toml(&content), "Error: {}");
    println!("OK: {} overrides", lex.override_count());
}
