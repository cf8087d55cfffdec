//! Seams for the speech synthesizer and audio encoder.
//!
//! Both are external: a TTS model that turns text into float sample chunks,
//! and an encoder (MP3 in practice) that compresses 16-bit PCM. This module
//! only wires normalization to them.

use tracing::{debug, debug_span};

use crate::normalize::normalize_for_speech;
use crate::settings::AudioSettings;

#[derive(Debug, thiserror::Error)]
pub enum SpeechError {
    #[error("nothing to speak after normalization")]
    EmptyText,
    #[error("synthesis failed: {0}")]
    Synthesis(String),
    #[error("synthesizer produced no audio")]
    NoAudio,
    #[error("encoding failed: {0}")]
    Encoding(String),
}

/// Text-to-speech backend.
pub trait SpeechSynthesizer {
    /// Synthesize `text` into one or more chunks of samples in [-1, 1].
    fn synthesize(&self, text: &str) -> Result<Vec<Vec<f32>>, SpeechError>;
}

/// Compressed-audio encoder.
pub trait AudioEncoder {
    fn encode(&self, pcm: &[i16], settings: &AudioSettings) -> Result<Vec<u8>, SpeechError>;
}

/// Convert float samples to 16-bit PCM, clamping out-of-range values.
pub fn to_pcm16(samples: &[f32]) -> Vec<i16> {
    samples
        .iter()
        .map(|&s| (s.clamp(-1.0, 1.0) * i16::MAX as f32) as i16)
        .collect()
}

/// Normalize `annotated`, synthesize it and encode the result.
pub fn render_speech(
    annotated: &str,
    synth: &dyn SpeechSynthesizer,
    encoder: &dyn AudioEncoder,
    settings: &AudioSettings,
) -> Result<Vec<u8>, SpeechError> {
    let _span = debug_span!("render_speech").entered();

    let text = normalize_for_speech(annotated);
    if text.is_empty() {
        return Err(SpeechError::EmptyText);
    }

    let samples: Vec<f32> = synth.synthesize(&text)?.concat();
    if samples.is_empty() {
        return Err(SpeechError::NoAudio);
    }
    debug!(samples = samples.len(), "synthesized");

    encoder.encode(&to_pcm16(&samples), settings)
}
