//! Data Sanitization
//!
//! Numerical hygiene for learner metrics.
//!
//! Functions:
//! - Unit-interval clamping
//! - Metrics sanitization (non-finite values fall back to defaults)
//! - Response time validation
//! - Metrics health diagnostics

use serde::Serialize;

use crate::error::AlgoError;
use crate::types::{DifficultyLevel, LearningMetrics};

/// Every metric scalar with its JSON field name, `responseTime` last
fn metric_fields(metrics: &LearningMetrics) -> [(&'static str, f64); 8] {
    [
        ("vocabularyRetention", metrics.vocabulary_retention),
        ("pronunciationAccuracy", metrics.pronunciation_accuracy),
        ("conversationConfidence", metrics.conversation_confidence),
        ("culturalKnowledge", metrics.cultural_knowledge),
        ("engagementLevel", metrics.engagement_level),
        ("errorRate", metrics.error_rate),
        ("completionRate", metrics.completion_rate),
        ("responseTime", metrics.response_time),
    ]
}

/// Whether any metric, response time included, is NaN or infinite
pub fn has_non_finite_metric(metrics: &LearningMetrics) -> bool {
    metric_fields(metrics).iter().any(|(_, value)| !value.is_finite())
}

/// Clamps to [0, 1]; NaN becomes 0
pub fn clamp_unit(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

fn repair(value: &mut f64, fallback: f64) {
    *value = if value.is_finite() {
        clamp_unit(*value)
    } else {
        fallback
    };
}

/// Brings every metric back into range
pub fn sanitize_metrics(metrics: &mut LearningMetrics) {
    let defaults = LearningMetrics::default();
    repair(&mut metrics.vocabulary_retention, defaults.vocabulary_retention);
    repair(&mut metrics.pronunciation_accuracy, defaults.pronunciation_accuracy);
    repair(&mut metrics.conversation_confidence, defaults.conversation_confidence);
    repair(&mut metrics.cultural_knowledge, defaults.cultural_knowledge);
    repair(&mut metrics.engagement_level, defaults.engagement_level);
    repair(&mut metrics.error_rate, defaults.error_rate);
    repair(&mut metrics.completion_rate, defaults.completion_rate);

    if !metrics.response_time.is_finite() || metrics.response_time < 0.0 {
        metrics.response_time = defaults.response_time;
    }
}

/// Clamps all six knobs into [0, 1]
pub fn sanitize_difficulty(level: &mut DifficultyLevel) {
    let defaults = DifficultyLevel::default();
    repair(&mut level.vocabulary_complexity, defaults.vocabulary_complexity);
    repair(&mut level.grammar_complexity, defaults.grammar_complexity);
    repair(&mut level.speech_speed, defaults.speech_speed);
    repair(&mut level.translation_support, defaults.translation_support);
    repair(&mut level.cultural_context, defaults.cultural_context);
    repair(&mut level.scenario_complexity, defaults.scenario_complexity);
}

/// Rejects negative and non-finite response times
pub fn validate_response_time(ms: f64) -> Result<f64, AlgoError> {
    if ms.is_finite() && ms >= 0.0 {
        Ok(ms)
    } else {
        Err(AlgoError::InvalidResponseTime(ms))
    }
}

/// Health report for a metrics record
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricsDiagnostic {
    pub is_healthy: bool,
    pub has_nan: bool,
    pub has_inf: bool,
    pub out_of_range: Vec<&'static str>,
    pub message: String,
}

/// Diagnoses a metrics record without modifying it
pub fn diagnose_metrics(metrics: &LearningMetrics) -> MetricsDiagnostic {
    let mut has_nan = false;
    let mut has_inf = false;
    let mut out_of_range = Vec::new();

    for (name, value) in metric_fields(metrics) {
        let upper = if name == "responseTime" { f64::MAX } else { 1.0 };
        if value.is_nan() {
            has_nan = true;
        } else if value.is_infinite() {
            has_inf = true;
        } else if !(0.0..=upper).contains(&value) {
            out_of_range.push(name);
        }
    }

    let is_healthy = !has_non_finite_metric(metrics) && out_of_range.is_empty();

    let message = if is_healthy {
        "Metrics are healthy".to_string()
    } else if has_nan {
        "Metrics contain NaN values".to_string()
    } else if has_inf {
        "Metrics contain infinite values".to_string()
    } else {
        format!("Metrics out of range: {}", out_of_range.join(", "))
    };

    MetricsDiagnostic {
        is_healthy,
        has_nan,
        has_inf,
        out_of_range,
        message,
    }
}
