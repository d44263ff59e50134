use thiserror::Error;

use deutsch_algo::AlgoError;

/// Failures surfaced by speech input/output providers.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SpeechError {
    #[error("speech API not supported")]
    Unsupported,
    #[error("microphone permission denied")]
    PermissionDenied,
    #[error("no speech detected")]
    NoSpeech,
    #[error("aborted")]
    Aborted,
    #[error("network error")]
    Network,
    #[error("timed out waiting for speech")]
    Timeout,
    #[error("{0}")]
    Other(String),
}

impl SpeechError {
    /// Maps a browser-style error code (`not-allowed`, `no-speech`, ...) to a variant.
    pub fn from_code(code: &str) -> Self {
        match code {
            "not-allowed" | "service-not-allowed" => Self::PermissionDenied,
            "no-speech" => Self::NoSpeech,
            "aborted" => Self::Aborted,
            "network" => Self::Network,
            "not-supported" => Self::Unsupported,
            other => Self::Other(other.to_string()),
        }
    }

    /// Static text shown to the learner.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::Unsupported => {
                "Speech recognition is not supported in this browser. Please use Chrome or Edge."
            }
            Self::PermissionDenied => {
                "Microphone access was denied. Please allow microphone access and try again."
            }
            Self::NoSpeech => "No speech was detected. Please try again.",
            Self::Aborted => "Recording was stopped.",
            Self::Network => "A network error interrupted speech recognition.",
            Self::Timeout => "Recording stopped automatically. Please try again.",
            Self::Other(_) => "Something went wrong with speech. Please try again.",
        }
    }
}

#[derive(Debug, Error)]
pub enum ImmersionError {
    #[error(transparent)]
    Algo(#[from] AlgoError),
    #[error(transparent)]
    Speech(#[from] SpeechError),
    #[error("no active session")]
    NoActiveSession,
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid event on line {line}: {source}")]
    InvalidEvent {
        line: usize,
        #[source]
        source: serde_json::Error,
    },
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}
