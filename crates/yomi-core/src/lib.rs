pub mod conjugate;
pub mod furigana;
pub mod lexicon;
pub mod morph;
pub mod normalize;
pub mod pauses;
pub mod settings;
pub mod speech;
pub mod unicode;

pub use conjugate::{synthesize, synthesize_conjugations, ConjugationTable};
pub use morph::{classify, Paradigm, TaggerToken, WordInfo};
pub use normalize::{normalize_for_speech, prepare_sentence, SentenceForms};
