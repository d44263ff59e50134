//! Speech capabilities
//!
//! Recognition and synthesis are host capabilities (the browser's Web Speech
//! API in the app). They are modelled here as traits so session logic can run
//! and be tested without a browser. [`ScriptedInput`] and [`RecordingOutput`]
//! are the in-process implementations.

pub mod pronunciation;
mod scripted;

use futures::future::BoxFuture;
use futures::stream::BoxStream;
use serde::{Deserialize, Serialize};

use crate::error::SpeechError;

pub use pronunciation::{score_pronunciation, PronunciationScore};
pub use scripted::{RecordingOutput, ScriptedInput, Utterance};

pub const DEFAULT_LANG: &str = "de-DE";

/// One recognition result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recognition {
    pub transcript: String,
    /// Engine confidence in [0, 1]
    pub confidence: f64,
    /// Interim results are superseded by a later final one
    pub is_final: bool,
}

impl Recognition {
    pub fn final_result(transcript: impl Into<String>, confidence: f64) -> Self {
        Self {
            transcript: transcript.into(),
            confidence: confidence.clamp(0.0, 1.0),
            is_final: true,
        }
    }

    pub fn interim(transcript: impl Into<String>, confidence: f64) -> Self {
        Self {
            is_final: false,
            ..Self::final_result(transcript, confidence)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoiceConfig {
    pub lang: String,
    pub rate: f64,
    pub pitch: f64,
    pub volume: f64,
}

impl Default for VoiceConfig {
    fn default() -> Self {
        Self {
            lang: DEFAULT_LANG.to_string(),
            rate: 0.9,
            pitch: 1.0,
            volume: 1.0,
        }
    }
}

/// Speech-to-text provider.
pub trait SpeechInput: Send + Sync {
    fn is_supported(&self) -> bool {
        true
    }

    /// Starts listening; the stream ends when recognition stops.
    fn record(&self, lang: &str) -> BoxStream<'static, Result<Recognition, SpeechError>>;

    fn stop(&self) {}
}

/// Text-to-speech provider.
pub trait SpeechOutput: Send + Sync {
    fn is_supported(&self) -> bool {
        true
    }

    /// Resolves when playback ends.
    fn speak(&self, text: &str, voice: &VoiceConfig) -> BoxFuture<'static, Result<(), SpeechError>>;

    fn cancel(&self);
}
