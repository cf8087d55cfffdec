//! Pacing marks for speech synthesis.
//!
//! Japanese voices run clauses together unless a 、 gives them a breath.
//! Three rules insert one after specific particles and sentence-initial
//! adverbs:
//!
//! - [`ObjectMarkerRule`]: after every を (always a particle).
//! - [`SubjectMarkerRule`]: after が when it is the subject particle and not
//!   part of an idiom or a verb stem.
//! - [`AdverbRule`]: after introductory adverbs (まず, 次に, 実は, …) at the
//!   start of a sentence.
//!
//! Every rule can also remove the marks it would insert, so display text can
//! be recovered from speech text: removal then insertion then removal is
//! idempotent for the object and adverb rules.

mod adverb;
mod object;
mod subject;


use tracing::debug_span;

use crate::settings::PauseSettings;

pub use adverb::{AdverbRule, ADVERBS, ADVERB_READINGS};
pub use object::ObjectMarkerRule;
pub use subject::{should_pause_after_subject, SubjectMarkerRule};

/// A pacing-mark rule with an exact inverse for the marks it inserts.
pub trait PauseRule {
    fn name(&self) -> &'static str;
    fn insert(&self, text: &str) -> String;
    fn remove(&self, text: &str) -> String;
}

/// Rules enabled by `settings`, in insertion order.
pub fn active_rules(settings: &PauseSettings) -> Vec<&'static dyn PauseRule> {
    let mut rules: Vec<&'static dyn PauseRule> = Vec::with_capacity(3);
    if settings.object_marker {
        rules.push(&ObjectMarkerRule);
    }
    if settings.subject_marker {
        rules.push(&SubjectMarkerRule);
    }
    if settings.adverbs {
        rules.push(&AdverbRule);
    }
    rules
}

/// Run the enabled rules' insertion in order.
pub fn insert_pauses_with(text: &str, settings: &PauseSettings) -> String {
    let _span = debug_span!("insert_pauses").entered();
    let mut out = text.to_string();
    for rule in active_rules(settings) {
        out = rule.insert(&out);
    }
    out
}

/// Insert pacing marks using the globally configured rules.
pub fn insert_pauses(text: &str) -> String {
    insert_pauses_with(text, &crate::settings::settings().pauses)
}

/// Strip the marks of every rule, in reverse insertion order. Used to derive
/// the clean display form, so it ignores which rules are enabled.
pub fn remove_pauses(text: &str) -> String {
    let _span = debug_span!("remove_pauses").entered();
    let mut out = text.to_string();
    for rule in active_rules(&PauseSettings::default()).into_iter().rev() {
        out = rule.remove(&out);
    }
    out
}
