//! Adaptive Difficulty Heuristic
//!
//! Turns a stream of interaction outcomes into updated [`LearningMetrics`], a
//! ratcheted [`DifficultyLevel`], a [`Trend`], recommendations, insights and the
//! next immersive scenario.
//!
//! The engine is a plain value owned by the caller. Nothing is shared or
//! persisted; dropping it is the equivalent of a page reload.
//!
//! ```rust
//! use deutsch_algo::{AdaptiveEngine, InteractionType, UserProfile};
//!
//! let mut engine = AdaptiveEngine::new(UserProfile::new("u1", "Anna"));
//! engine.record_interaction(InteractionType::Vocabulary, true, 1800.0).unwrap();
//! assert!((engine.metrics().vocabulary_retention - 0.55).abs() < 1e-9);
//! ```

pub mod difficulty;
pub mod recommend;
pub mod scenario;
pub mod score;
pub mod trend;

use crate::error::AlgoError;
use crate::history::ScoreHistory;
use crate::sanitize::{clamp_unit, sanitize_difficulty, sanitize_metrics, validate_response_time};
use crate::types::*;

pub use difficulty::adjust_difficulty;
pub use recommend::{insights, recommendations};
pub use scenario::{next_scenario, SCENARIO_CANDIDATES};
pub use score::performance_score;
pub use trend::classify_trend;

/// Outcome of a single update, used by callers for logging.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UpdateOutcome {
    pub performance_score: f64,
    pub trend: Trend,
    pub previous_tier: Tier,
    pub tier: Tier,
}

impl UpdateOutcome {
    pub fn promoted(&self) -> bool {
        self.tier > self.previous_tier
    }
}

#[derive(Debug, Clone)]
pub struct AdaptiveEngine {
    profile: UserProfile,
    metrics: LearningMetrics,
    difficulty: DifficultyLevel,
    history: ScoreHistory,
    performance_score: f64,
    trend: Trend,
    recommendations: Vec<String>,
    insights: Vec<String>,
    next_scenario: &'static str,
}

impl AdaptiveEngine {
    pub fn new(profile: UserProfile) -> Self {
        let difficulty = DifficultyLevel {
            tier: profile.tier,
            ..DifficultyLevel::default()
        };
        Self::with_state(profile, LearningMetrics::default(), difficulty)
    }

    /// Builds an engine from an existing metrics/difficulty pair. Inputs are sanitized and
    /// derived outputs computed without touching the history.
    pub fn with_state(
        mut profile: UserProfile,
        mut metrics: LearningMetrics,
        mut difficulty: DifficultyLevel,
    ) -> Self {
        sanitize_metrics(&mut metrics);
        sanitize_difficulty(&mut difficulty);
        profile.tier = profile.tier.max(difficulty.tier);
        difficulty.tier = profile.tier;

        let performance_score = performance_score(&metrics);
        let recommendations = recommendations(&metrics, &profile);
        let insights = insights(&metrics, Trend::Stable);
        let next_scenario = next_scenario(&metrics, &profile, difficulty.tier);

        Self {
            profile,
            metrics,
            difficulty,
            history: ScoreHistory::default(),
            performance_score,
            trend: Trend::Stable,
            recommendations,
            insights,
            next_scenario,
        }
    }

    // ==================== Updates ====================

    /// Applies one interaction outcome and recomputes every derived output.
    ///
    /// A negative or non-finite response time is rejected and leaves the state untouched.
    pub fn record_interaction(
        &mut self,
        interaction: InteractionType,
        success: bool,
        response_time: f64,
    ) -> Result<UpdateOutcome, AlgoError> {
        let response_time = validate_response_time(response_time)?;

        let metric = self.metrics.metric_mut(interaction);
        *metric = if success {
            clamp_unit(*metric + SUCCESS_STEP)
        } else {
            clamp_unit(*metric - FAILURE_STEP)
        };

        self.metrics.response_time = (self.metrics.response_time + response_time) / 2.0;
        self.metrics.error_rate = if success {
            clamp_unit(self.metrics.error_rate - ERROR_RATE_SUCCESS_STEP)
        } else {
            clamp_unit(self.metrics.error_rate + ERROR_RATE_FAILURE_STEP)
        };
        self.metrics.engagement_level = clamp_unit(self.metrics.engagement_level + ENGAGEMENT_STEP);

        Ok(self.recompute())
    }

    /// Convenience wrapper for deserialized events.
    pub fn apply_event(&mut self, event: &InteractionEvent) -> Result<UpdateOutcome, AlgoError> {
        self.record_interaction(event.interaction_type, event.success, event.response_time)
    }

    /// Records a finished (or abandoned) lesson unit.
    pub fn record_completion(&mut self, completed: bool) -> UpdateOutcome {
        self.metrics.completion_rate = if completed {
            clamp_unit(self.metrics.completion_rate + COMPLETION_STEP)
        } else {
            clamp_unit(self.metrics.completion_rate - COMPLETION_STEP)
        };
        self.recompute()
    }

    fn recompute(&mut self) -> UpdateOutcome {
        let previous_tier = self.difficulty.tier;
        let score = performance_score(&self.metrics);

        let trend = classify_trend(&self.history, score);
        self.history.push(score);

        self.difficulty = adjust_difficulty(&self.difficulty, &self.metrics, score);
        self.profile.tier = self.difficulty.tier;

        self.performance_score = score;
        self.trend = trend;
        self.recommendations = recommendations(&self.metrics, &self.profile);
        self.insights = insights(&self.metrics, trend);
        self.next_scenario = next_scenario(&self.metrics, &self.profile, self.difficulty.tier);

        UpdateOutcome {
            performance_score: score,
            trend,
            previous_tier,
            tier: self.difficulty.tier,
        }
    }

    // ==================== Sessions ====================

    pub fn start_session(&mut self) {
        self.profile.session_count += 1;
    }

    /// Adds study time; negative or non-finite durations are ignored.
    pub fn end_session(&mut self, minutes: f64) {
        if minutes.is_finite() && minutes > 0.0 {
            self.profile.total_study_minutes += minutes;
        }
    }

    /// Restores defaults, keeping identity, goals and cumulative counters.
    pub fn reset(&mut self) {
        let mut profile = self.profile.clone();
        profile.tier = Tier::Beginner;
        *self = Self::new(profile);
    }

    // ==================== Accessors ====================

    pub fn profile(&self) -> &UserProfile {
        &self.profile
    }

    pub fn metrics(&self) -> &LearningMetrics {
        &self.metrics
    }

    pub fn difficulty(&self) -> &DifficultyLevel {
        &self.difficulty
    }

    pub fn history(&self) -> &ScoreHistory {
        &self.history
    }

    pub fn performance_score(&self) -> f64 {
        self.performance_score
    }

    pub fn trend(&self) -> Trend {
        self.trend
    }

    pub fn recommendations(&self) -> &[String] {
        &self.recommendations
    }

    pub fn insights(&self) -> &[String] {
        &self.insights
    }

    pub fn next_scenario(&self) -> &'static str {
        self.next_scenario
    }

    pub fn snapshot(&self) -> AdaptiveSnapshot {
        AdaptiveSnapshot {
            metrics: self.metrics.clone(),
            difficulty: self.difficulty.clone(),
            performance_score: self.performance_score,
            trend: self.trend,
            recommendations: self.recommendations.clone(),
            insights: self.insights.clone(),
            next_scenario: self.next_scenario.to_string(),
        }
    }
}
