use std::time::Duration;

use chrono::{DateTime, Utc};
use futures::StreamExt;
use parking_lot::RwLock;
use tracing::{debug, info, warn};
use uuid::Uuid;

use deutsch_algo::{AdaptiveEngine, AdaptiveSnapshot, InteractionEvent, InteractionType};
use deutsch_algo::{UpdateOutcome, UserProfile};

use crate::config::Config;
use crate::conversation::{ConversationPartner, PartnerReply};
use crate::error::{ImmersionError, SpeechError};
use crate::speech::{
    score_pronunciation, PronunciationScore, Recognition, SpeechInput, SpeechOutput, VoiceConfig,
};

/// One learner's in-memory study state: profile, adaptive engine and the open session clock.
pub struct LearningSession {
    id: Uuid,
    config: Config,
    engine: RwLock<AdaptiveEngine>,
    started_at: RwLock<Option<DateTime<Utc>>>,
}

impl LearningSession {
    pub fn new(profile: UserProfile, config: Config) -> Self {
        Self {
            id: Uuid::new_v4(),
            config,
            engine: RwLock::new(AdaptiveEngine::new(profile)),
            started_at: RwLock::new(None),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    // ==================== Session clock ====================

    /// Opens a study session. Starting while one is open restarts the clock
    /// without counting a second session.
    pub fn start_session(&self, now: DateTime<Utc>) {
        let mut started = self.started_at.write();
        if started.is_none() {
            self.engine.write().start_session();
        }
        *started = Some(now);
        info!(session_id = %self.id, "study session started");
    }

    /// Closes the open session and returns the minutes added to the profile.
    pub fn end_session(&self, now: DateTime<Utc>) -> Result<f64, ImmersionError> {
        let started = self
            .started_at
            .write()
            .take()
            .ok_or(ImmersionError::NoActiveSession)?;

        let minutes = ((now - started).num_milliseconds().max(0)) as f64 / 60_000.0;
        self.engine.write().end_session(minutes);
        info!(session_id = %self.id, minutes, "study session ended");
        Ok(minutes)
    }

    pub fn is_active(&self) -> bool {
        self.started_at.read().is_some()
    }

    // ==================== Interactions ====================

    pub fn record_interaction(
        &self,
        interaction: InteractionType,
        success: bool,
        response_time: f64,
    ) -> Result<UpdateOutcome, ImmersionError> {
        self.apply_event(&InteractionEvent {
            interaction_type: interaction,
            success,
            response_time,
        })
    }

    /// Feeds one interaction outcome to the engine, logging the update and any promotion.
    pub fn apply_event(&self, event: &InteractionEvent) -> Result<UpdateOutcome, ImmersionError> {
        let interaction = event.interaction_type;
        let outcome = self.engine.write().apply_event(event).map_err(|err| {
            warn!(session_id = %self.id, %interaction, error = %err, "interaction rejected");
            err
        })?;

        debug!(
            session_id = %self.id,
            %interaction,
            success = event.success,
            score = outcome.performance_score,
            trend = outcome.trend.as_str(),
            "interaction recorded"
        );
        if outcome.promoted() {
            info!(
                session_id = %self.id,
                from = outcome.previous_tier.as_str(),
                to = outcome.tier.as_str(),
                "learner promoted"
            );
        }
        Ok(outcome)
    }

    pub fn record_completion(&self, completed: bool) -> UpdateOutcome {
        self.engine.write().record_completion(completed)
    }

    /// Listens for the expected phrase, scores the first final transcript and
    /// records a pronunciation interaction. Speech failures record nothing.
    pub async fn practice_pronunciation(
        &self,
        input: &dyn SpeechInput,
        expected: &str,
    ) -> Result<PronunciationScore, ImmersionError> {
        if !input.is_supported() {
            return Err(SpeechError::Unsupported.into());
        }

        let started = tokio::time::Instant::now();
        let mut results = input.record(&self.config.speech_lang);
        let first_final = async {
            while let Some(item) = results.next().await {
                match item {
                    Ok(recognition) if recognition.is_final => {
                        return Ok::<Option<Recognition>, SpeechError>(Some(recognition))
                    }
                    Ok(_) => {}
                    Err(err) => return Err(err),
                }
            }
            Ok(None)
        };

        let timeout = self.config.recognition_timeout();
        let recognition = match tokio::time::timeout(timeout, first_final).await {
            Ok(Ok(Some(recognition))) => recognition,
            Ok(Ok(None)) => return Err(SpeechError::NoSpeech.into()),
            Ok(Err(err)) => {
                warn!(session_id = %self.id, error = %err, "speech recognition failed");
                return Err(err.into());
            }
            Err(_) => {
                input.stop();
                warn!(session_id = %self.id, "speech recognition timed out");
                return Err(SpeechError::Timeout.into());
            }
        };

        let elapsed_ms = started.elapsed().as_secs_f64() * 1000.0;
        let score = score_pronunciation(expected, &recognition.transcript, recognition.confidence);
        self.record_interaction(InteractionType::Pronunciation, score.passed, elapsed_ms)?;
        Ok(score)
    }

    /// Voice parameters for prompts; speech rate follows the speech-speed knob.
    pub fn prompt_voice(&self) -> VoiceConfig {
        let speech_speed = self.engine.read().difficulty().speech_speed;
        let mut voice = self.config.voice();
        voice.rate *= 0.75 + 0.5 * speech_speed;
        voice
    }

    pub async fn speak_prompt(
        &self,
        output: &dyn SpeechOutput,
        text: &str,
    ) -> Result<(), ImmersionError> {
        if !output.is_supported() {
            return Err(SpeechError::Unsupported.into());
        }
        let voice = self.prompt_voice();
        output.speak(text, &voice).await?;
        Ok(())
    }

    /// Sends learner input to the partner; an understood reply counts as a
    /// successful conversation interaction. Cancelled replies record nothing.
    pub async fn converse(
        &self,
        partner: &ConversationPartner,
        input: &str,
        response_time: f64,
    ) -> Result<Option<PartnerReply>, ImmersionError> {
        deutsch_algo::sanitize::validate_response_time(response_time)?;

        let Some(reply) = partner.respond(input).await else {
            return Ok(None);
        };
        self.record_interaction(InteractionType::Conversation, reply.understood(), response_time)?;
        Ok(Some(reply))
    }

    /// A partner for the engine's currently suggested scenario.
    pub fn partner_for_next_scenario(&self) -> ConversationPartner {
        let engine = self.engine.read();
        ConversationPartner::new(
            engine.next_scenario(),
            engine.profile().name.clone(),
            self.config.thinking_delay(),
        )
    }

    // ==================== Reads ====================

    pub fn snapshot(&self) -> AdaptiveSnapshot {
        self.engine.read().snapshot()
    }

    pub fn profile(&self) -> UserProfile {
        self.engine.read().profile().clone()
    }

    pub fn thinking_delay(&self) -> Duration {
        self.config.thinking_delay()
    }
}
