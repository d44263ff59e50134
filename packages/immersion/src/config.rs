use std::path::PathBuf;
use std::time::Duration;

use deutsch_algo::UserProfile;

use crate::speech::VoiceConfig;

#[derive(Debug, Clone)]
pub struct Config {
    pub log_level: String,
    pub speech_lang: String,
    pub speech_rate: f64,
    pub speech_volume: f64,
    pub partner_thinking_ms: u64,
    pub recognition_timeout_ms: u64,
    pub learner_name: String,
    pub learner_interests: Vec<String>,
    /// Directory for the rolling log file; `None` keeps logs on stderr only
    pub file_log_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            speech_lang: "de-DE".to_string(),
            speech_rate: 0.9,
            speech_volume: 1.0,
            partner_thinking_ms: 1500,
            recognition_timeout_ms: 10_000,
            learner_name: "Learner".to_string(),
            learner_interests: Vec::new(),
            file_log_dir: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from an arbitrary key lookup; unparsable values keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let log_level = lookup("RUST_LOG").unwrap_or(defaults.log_level);

        let speech_lang = lookup("SPEECH_LANG")
            .filter(|value| !value.trim().is_empty())
            .unwrap_or(defaults.speech_lang);

        let speech_rate = lookup("SPEECH_RATE")
            .and_then(|value| value.parse::<f64>().ok())
            .filter(|rate| (0.1..=10.0).contains(rate))
            .unwrap_or(defaults.speech_rate);

        let speech_volume = lookup("SPEECH_VOLUME")
            .and_then(|value| value.parse::<f64>().ok())
            .filter(|volume| (0.0..=1.0).contains(volume))
            .unwrap_or(defaults.speech_volume);

        let partner_thinking_ms = lookup("PARTNER_THINKING_MS")
            .and_then(|value| value.parse::<u64>().ok())
            .unwrap_or(defaults.partner_thinking_ms);

        let recognition_timeout_ms = lookup("RECOGNITION_TIMEOUT_MS")
            .and_then(|value| value.parse::<u64>().ok())
            .filter(|ms| *ms > 0)
            .unwrap_or(defaults.recognition_timeout_ms);

        let learner_name = lookup("LEARNER_NAME")
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .unwrap_or(defaults.learner_name);

        let learner_interests = lookup("LEARNER_INTERESTS")
            .map(|value| {
                value
                    .split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect()
            })
            .unwrap_or(defaults.learner_interests);

        let file_logs = lookup("ENABLE_FILE_LOGS").is_some_and(|v| v == "true" || v == "1");
        let file_log_dir = file_logs.then(|| {
            lookup("LOG_DIR")
                .filter(|dir| !dir.trim().is_empty())
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("./logs"))
        });

        Self {
            log_level,
            speech_lang,
            speech_rate,
            speech_volume,
            partner_thinking_ms,
            recognition_timeout_ms,
            learner_name,
            learner_interests,
            file_log_dir,
        }
    }

    /// A fresh profile for the configured learner.
    pub fn learner_profile(&self, id: impl Into<String>) -> UserProfile {
        let mut profile = UserProfile::new(id, self.learner_name.clone());
        profile.interests = self.learner_interests.clone();
        profile
    }

    pub fn voice(&self) -> VoiceConfig {
        VoiceConfig {
            lang: self.speech_lang.clone(),
            rate: self.speech_rate,
            volume: self.speech_volume,
            ..VoiceConfig::default()
        }
    }

    pub fn thinking_delay(&self) -> Duration {
        Duration::from_millis(self.partner_thinking_ms)
    }

    pub fn recognition_timeout(&self) -> Duration {
        Duration::from_millis(self.recognition_timeout_ms)
    }
}
