//! Common Types and Constants
//!
//! Shared data structures used by the adaptive heuristic and its callers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AlgoError;

// ==================== Constants ====================

/// Metric step on a successful interaction
pub const SUCCESS_STEP: f64 = 0.05;

/// Metric step on a failed interaction
pub const FAILURE_STEP: f64 = 0.02;

/// Error-rate decrease on success
pub const ERROR_RATE_SUCCESS_STEP: f64 = 0.02;

/// Error-rate increase on failure
pub const ERROR_RATE_FAILURE_STEP: f64 = 0.05;

/// Engagement increase per interaction
pub const ENGAGEMENT_STEP: f64 = 0.02;

/// Completion-rate step per finished or abandoned unit
pub const COMPLETION_STEP: f64 = 0.05;

/// Score above which the tier is promoted (strict)
pub const PROMOTION_THRESHOLD: f64 = 0.8;

/// Score below which the complexity knobs are relaxed (strict)
pub const RELAX_THRESHOLD: f64 = 0.4;

/// Knob step on promotion
pub const PROMOTION_STEP: f64 = 0.2;

/// Knob step on relaxation and single-metric overrides
pub const RELAX_STEP: f64 = 0.1;

/// Trend band around the recent mean
pub const TREND_BAND: f64 = 0.1;

/// History entries the trend is compared against
pub const TREND_WINDOW: usize = 3;

/// Rolling score history capacity
pub const HISTORY_CAPACITY: usize = 10;

/// Maximum recommendations returned
pub const MAX_RECOMMENDATIONS: usize = 3;

/// Maximum insights returned
pub const MAX_INSIGHTS: usize = 4;

/// Tolerance for threshold comparisons on the weighted score
pub const SCORE_EPSILON: f64 = 1e-9;

// ==================== Interaction Types ====================

/// Kind of learning interaction reported by the UI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InteractionType {
    Vocabulary,
    Pronunciation,
    Conversation,
    Cultural,
}

impl InteractionType {
    pub const ALL: [InteractionType; 4] = [
        InteractionType::Vocabulary,
        InteractionType::Pronunciation,
        InteractionType::Conversation,
        InteractionType::Cultural,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Vocabulary => "vocabulary",
            Self::Pronunciation => "pronunciation",
            Self::Conversation => "conversation",
            Self::Cultural => "cultural",
        }
    }
}

impl FromStr for InteractionType {
    type Err = AlgoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "vocabulary" => Ok(Self::Vocabulary),
            "pronunciation" => Ok(Self::Pronunciation),
            "conversation" => Ok(Self::Conversation),
            "cultural" => Ok(Self::Cultural),
            _ => Err(AlgoError::UnknownInteractionType(s.to_string())),
        }
    }
}

impl fmt::Display for InteractionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single interaction outcome
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InteractionEvent {
    #[serde(rename = "type")]
    pub interaction_type: InteractionType,
    pub success: bool,
    /// Response time in milliseconds
    pub response_time: f64,
}

// ==================== Tier & Trend ====================

/// Coarse difficulty classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[derive(Default)]
pub enum Tier {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
}

impl Tier {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
        }
    }

    /// One tier up, saturating at advanced.
    pub fn next(&self) -> Self {
        match self {
            Self::Beginner => Self::Intermediate,
            _ => Self::Advanced,
        }
    }
}

impl FromStr for Tier {
    type Err = AlgoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "beginner" => Ok(Self::Beginner),
            "intermediate" => Ok(Self::Intermediate),
            "advanced" => Ok(Self::Advanced),
            _ => Err(AlgoError::UnknownTier(s.to_string())),
        }
    }
}

/// Movement of the performance score relative to recent history
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[derive(Default)]
pub enum Trend {
    Improving,
    #[default]
    Stable,
    Declining,
}

impl Trend {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Improving => "improving",
            Self::Stable => "stable",
            Self::Declining => "declining",
        }
    }
}

// ==================== Metrics ====================

/// Per-learner performance metrics; all scalars but `response_time` are in [0, 1]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LearningMetrics {
    pub vocabulary_retention: f64,
    pub pronunciation_accuracy: f64,
    pub conversation_confidence: f64,
    pub cultural_knowledge: f64,
    pub engagement_level: f64,
    pub error_rate: f64,
    pub completion_rate: f64,
    /// Smoothed response time (milliseconds)
    pub response_time: f64,
}

impl Default for LearningMetrics {
    fn default() -> Self {
        Self {
            vocabulary_retention: 0.5,
            pronunciation_accuracy: 0.5,
            conversation_confidence: 0.5,
            cultural_knowledge: 0.5,
            engagement_level: 0.7,
            error_rate: 0.3,
            completion_rate: 0.6,
            response_time: 3000.0,
        }
    }
}

impl LearningMetrics {
    /// The metric driven by interactions of the given type.
    pub fn metric(&self, interaction: InteractionType) -> f64 {
        match interaction {
            InteractionType::Vocabulary => self.vocabulary_retention,
            InteractionType::Pronunciation => self.pronunciation_accuracy,
            InteractionType::Conversation => self.conversation_confidence,
            InteractionType::Cultural => self.cultural_knowledge,
        }
    }

    pub fn metric_mut(&mut self, interaction: InteractionType) -> &mut f64 {
        match interaction {
            InteractionType::Vocabulary => &mut self.vocabulary_retention,
            InteractionType::Pronunciation => &mut self.pronunciation_accuracy,
            InteractionType::Conversation => &mut self.conversation_confidence,
            InteractionType::Cultural => &mut self.cultural_knowledge,
        }
    }
}

// ==================== Difficulty ====================

/// Tier plus the six content complexity knobs, each in [0, 1]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DifficultyLevel {
    pub tier: Tier,
    pub vocabulary_complexity: f64,
    pub grammar_complexity: f64,
    pub speech_speed: f64,
    pub translation_support: f64,
    pub cultural_context: f64,
    pub scenario_complexity: f64,
}

impl Default for DifficultyLevel {
    fn default() -> Self {
        Self {
            tier: Tier::Beginner,
            vocabulary_complexity: 0.3,
            grammar_complexity: 0.3,
            speech_speed: 0.5,
            translation_support: 0.8,
            cultural_context: 0.4,
            scenario_complexity: 0.3,
        }
    }
}

impl DifficultyLevel {
    /// Knobs that grow with difficulty (everything but translation support).
    pub(crate) fn complexity_knobs_mut(&mut self) -> [&mut f64; 5] {
        [
            &mut self.vocabulary_complexity,
            &mut self.grammar_complexity,
            &mut self.speech_speed,
            &mut self.cultural_context,
            &mut self.scenario_complexity,
        ]
    }
}

// ==================== Profile ====================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[derive(Default)]
pub enum LearningStyle {
    #[default]
    Visual,
    Auditory,
    Kinesthetic,
    Reading,
}

/// Learner identity stub with static goals/interests and cumulative study counters
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: String,
    pub name: String,
    pub tier: Tier,
    pub goals: Vec<String>,
    pub interests: Vec<String>,
    pub learning_style: LearningStyle,
    pub session_count: u32,
    pub total_study_minutes: f64,
}

impl UserProfile {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            tier: Tier::Beginner,
            goals: Vec::new(),
            interests: Vec::new(),
            learning_style: LearningStyle::default(),
            session_count: 0,
            total_study_minutes: 0.0,
        }
    }

    pub fn has_interest(&self, tag: &str) -> bool {
        self.interests.iter().any(|i| i.eq_ignore_ascii_case(tag))
    }

    pub fn has_goal_containing(&self, needle: &str) -> bool {
        let needle = needle.to_lowercase();
        self.goals.iter().any(|g| g.to_lowercase().contains(&needle))
    }
}

// ==================== Snapshot ====================

/// Everything the UI reads after an update
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdaptiveSnapshot {
    pub metrics: LearningMetrics,
    pub difficulty: DifficultyLevel,
    pub performance_score: f64,
    pub trend: Trend,
    pub recommendations: Vec<String>,
    pub insights: Vec<String>,
    pub next_scenario: String,
}
