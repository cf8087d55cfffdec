use std::process;

use yomi_core::furigana;
use yomi_core::normalize::{display_text, normalize_for_speech};
use yomi_core::pauses::{insert_pauses, remove_pauses};

pub fn speak(text: &str) {
    println!("{}", normalize_for_speech(text));
}

pub fn display(text: &str) {
    println!("{}", display_text(text));
}

pub fn pauses(text: &str, remove: bool) {
    let out = if remove {
        remove_pauses(text)
    } else {
        insert_pauses(text)
    };
    println!("{out}");
}

/// Lint furigana; exits 1 when anything is reported.
pub fn check(text: &str) {
    let issues = furigana::validate(text);
    if issues.is_empty() {
        println!("OK: {} annotated spans", furigana::spans(text).count());
        return;
    }
    for issue in &issues {
        println!("{issue}");
    }
    process::exit(1);
}
