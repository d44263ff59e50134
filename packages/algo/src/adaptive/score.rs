use crate::types::LearningMetrics;

pub const VOCABULARY_WEIGHT: f64 = 0.2;
pub const PRONUNCIATION_WEIGHT: f64 = 0.2;
pub const CONFIDENCE_WEIGHT: f64 = 0.2;
pub const CULTURAL_WEIGHT: f64 = 0.15;
pub const ENGAGEMENT_WEIGHT: f64 = 0.15;
pub const COMPLETION_WEIGHT: f64 = 0.1;

/// Weighted performance score in [0, 1]. Error rate and response time do not contribute.
pub fn performance_score(metrics: &LearningMetrics) -> f64 {
    metrics.vocabulary_retention * VOCABULARY_WEIGHT
        + metrics.pronunciation_accuracy * PRONUNCIATION_WEIGHT
        + metrics.conversation_confidence * CONFIDENCE_WEIGHT
        + metrics.cultural_knowledge * CULTURAL_WEIGHT
        + metrics.engagement_level * ENGAGEMENT_WEIGHT
        + metrics.completion_rate * COMPLETION_WEIGHT
}
