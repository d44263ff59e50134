//! Simulated AI conversation partner.
//!
//! Replies are canned: the learner's input is normalized and run through an
//! ordered [`ResponseRule`] table, first match wins. A fixed "thinking" delay
//! precedes each reply and can be cancelled.

pub mod rules;

use std::time::Duration;

use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use serde::Serialize;
use tokio::sync::Notify;
use tracing::debug;

use crate::content;
use crate::speech::pronunciation::normalize;

pub use rules::{fallback, Matcher, ResponseRule, DEFAULT_RULES};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Speaker {
    Learner,
    Partner,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Turn {
    pub speaker: Speaker,
    pub text: String,
    pub at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PartnerReply {
    pub text: String,
    /// Matched rule, `None` when the fallback was used
    pub rule_id: Option<&'static str>,
}

impl PartnerReply {
    pub fn understood(&self) -> bool {
        self.rule_id.is_some()
    }
}

pub struct ConversationPartner {
    scenario_id: String,
    learner_name: String,
    rules: Vec<ResponseRule>,
    thinking_delay: Duration,
    cancel: Notify,
    transcript: Mutex<Vec<Turn>>,
}

impl ConversationPartner {
    pub fn new(
        scenario_id: impl Into<String>,
        learner_name: impl Into<String>,
        thinking_delay: Duration,
    ) -> Self {
        Self {
            scenario_id: scenario_id.into(),
            learner_name: learner_name.into(),
            rules: DEFAULT_RULES.to_vec(),
            thinking_delay,
            cancel: Notify::new(),
            transcript: Mutex::new(Vec::new()),
        }
    }

    pub fn with_rules(mut self, rules: Vec<ResponseRule>) -> Self {
        self.rules = rules;
        self
    }

    pub fn scenario_id(&self) -> &str {
        &self.scenario_id
    }

    /// The scenario's opening line, recorded as the first partner turn.
    pub fn open(&self) -> Option<&'static str> {
        let line = content::scenario(&self.scenario_id)?.opening_line;
        self.push_turn(Speaker::Partner, line);
        Some(line)
    }

    /// Deterministic reply selection, without delay or transcript side effects.
    pub fn compose_reply(&self, input: &str) -> PartnerReply {
        let normalized = normalize(input).join(" ");
        match self
            .rules
            .iter()
            .find(|rule| rule.applies(&self.scenario_id, &normalized))
        {
            Some(rule) => PartnerReply {
                text: rule.render(&self.learner_name),
                rule_id: Some(rule.id),
            },
            None => PartnerReply {
                text: fallback(&self.scenario_id).to_string(),
                rule_id: None,
            },
        }
    }

    /// Records the learner turn, waits the thinking delay and returns the reply.
    /// Returns `None` when [`cancel_pending`](Self::cancel_pending) fires first.
    pub async fn respond(&self, input: &str) -> Option<PartnerReply> {
        self.push_turn(Speaker::Learner, input);
        let reply = self.compose_reply(input);

        let cancelled = self.cancel.notified();
        tokio::pin!(cancelled);
        tokio::select! {
            _ = tokio::time::sleep(self.thinking_delay) => {}
            _ = &mut cancelled => {
                debug!(scenario = %self.scenario_id, "partner reply cancelled");
                return None;
            }
        }

        self.push_turn(Speaker::Partner, &reply.text);
        debug!(
            scenario = %self.scenario_id,
            rule = reply.rule_id.unwrap_or("fallback"),
            "partner replied"
        );
        Some(reply)
    }

    /// Drops the reply that is currently waiting out its delay, if any.
    pub fn cancel_pending(&self) {
        self.cancel.notify_waiters();
    }

    pub fn transcript(&self) -> Vec<Turn> {
        self.transcript.lock().clone()
    }

    fn push_turn(&self, speaker: Speaker, text: &str) {
        self.transcript.lock().push(Turn {
            speaker,
            text: text.to_string(),
            at: Utc::now(),
        });
    }
}
