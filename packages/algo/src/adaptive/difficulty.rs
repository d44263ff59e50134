use crate::sanitize::clamp_unit;
use crate::types::{
    DifficultyLevel, LearningMetrics, Tier, PROMOTION_STEP, PROMOTION_THRESHOLD, RELAX_STEP,
    RELAX_THRESHOLD, SCORE_EPSILON,
};

/// Per-metric floors below which the single-metric overrides kick in.
const LOW_PRONUNCIATION: f64 = 0.3;
const LOW_VOCABULARY: f64 = 0.3;
const LOW_ENGAGEMENT: f64 = 0.4;

/// Derives the next difficulty level from the current one.
///
/// The tier only ever moves up, one step per call. Knobs move by small fixed
/// steps and stay in [0, 1].
pub fn adjust_difficulty(
    current: &DifficultyLevel,
    metrics: &LearningMetrics,
    score: f64,
) -> DifficultyLevel {
    let mut next = current.clone();

    if score - PROMOTION_THRESHOLD > SCORE_EPSILON {
        if next.tier < Tier::Advanced {
            next.tier = next.tier.next();
            for knob in next.complexity_knobs_mut() {
                *knob = clamp_unit(*knob + PROMOTION_STEP);
            }
            next.translation_support = clamp_unit(next.translation_support - PROMOTION_STEP);
        }
    } else if RELAX_THRESHOLD - score > SCORE_EPSILON {
        for knob in next.complexity_knobs_mut() {
            *knob = clamp_unit(*knob - RELAX_STEP);
        }
        next.translation_support = clamp_unit(next.translation_support + RELAX_STEP);
    }

    if metrics.pronunciation_accuracy < LOW_PRONUNCIATION {
        next.speech_speed = clamp_unit(next.speech_speed - RELAX_STEP);
    }
    if metrics.vocabulary_retention < LOW_VOCABULARY {
        next.translation_support = clamp_unit(next.translation_support + RELAX_STEP);
    }
    if metrics.engagement_level < LOW_ENGAGEMENT {
        next.cultural_context = clamp_unit(next.cultural_context + RELAX_STEP);
    }

    next
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_promotion_raises_tier_and_knobs() {
        let current = DifficultyLevel::default();
        let next = adjust_difficulty(&current, &LearningMetrics::default(), 0.85);
        assert_eq!(next.tier, Tier::Intermediate);
        assert!(approx(next.vocabulary_complexity, 0.5));
        assert!(approx(next.grammar_complexity, 0.5));
        assert!(approx(next.speech_speed, 0.7));
        assert!(approx(next.cultural_context, 0.6));
        assert!(approx(next.scenario_complexity, 0.5));
        assert!(approx(next.translation_support, 0.6));
    }

    #[test]
    fn test_threshold_is_strict() {
        let current = DifficultyLevel::default();
        let metrics = LearningMetrics::default();
        assert_eq!(adjust_difficulty(&current, &metrics, 0.8).tier, Tier::Beginner);
        assert_eq!(adjust_difficulty(&current, &metrics, 0.81).tier, Tier::Intermediate);
    }

    #[test]
    fn test_advanced_is_not_promoted_further() {
        let current = DifficultyLevel {
            tier: Tier::Advanced,
            ..DifficultyLevel::default()
        };
        let next = adjust_difficulty(&current, &LearningMetrics::default(), 0.95);
        assert_eq!(next, current);
    }

    #[test]
    fn test_low_score_relaxes_knobs_but_keeps_tier() {
        let current = DifficultyLevel {
            tier: Tier::Intermediate,
            ..DifficultyLevel::default()
        };
        let next = adjust_difficulty(&current, &LearningMetrics::default(), 0.3);
        assert_eq!(next.tier, Tier::Intermediate);
        assert!(approx(next.vocabulary_complexity, 0.2));
        assert!(approx(next.speech_speed, 0.4));
        assert!(approx(next.translation_support, 0.9));
    }

    #[test]
    fn test_knobs_stay_in_unit_interval() {
        let current = DifficultyLevel {
            tier: Tier::Beginner,
            vocabulary_complexity: 0.95,
            grammar_complexity: 0.05,
            speech_speed: 0.05,
            translation_support: 0.1,
            cultural_context: 1.0,
            scenario_complexity: 0.9,
        };
        let promoted = adjust_difficulty(&current, &LearningMetrics::default(), 0.9);
        assert_eq!(promoted.vocabulary_complexity, 1.0);
        assert_eq!(promoted.translation_support, 0.0);

        let relaxed = adjust_difficulty(&current, &LearningMetrics::default(), 0.1);
        assert_eq!(relaxed.grammar_complexity, 0.0);
        assert_eq!(relaxed.speech_speed, 0.0);
    }

    #[test]
    fn test_single_metric_overrides() {
        let metrics = LearningMetrics {
            pronunciation_accuracy: 0.2,
            vocabulary_retention: 0.2,
            engagement_level: 0.3,
            ..LearningMetrics::default()
        };
        let current = DifficultyLevel::default();
        let next = adjust_difficulty(&current, &metrics, 0.5);
        assert!(approx(next.speech_speed, 0.4));
        assert!(approx(next.translation_support, 0.9));
        assert!(approx(next.cultural_context, 0.5));
        assert_eq!(next.tier, Tier::Beginner);
    }
}
