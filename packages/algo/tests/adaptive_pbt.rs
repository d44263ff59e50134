//! Property-Based Tests for the adaptive heuristic
//!
//! Invariants:
//! - Success never lowers the driven metric; failure never raises it
//! - Every metric and knob stays within [0, 1]
//! - The tier never regresses
//! - Recommendation/insight lists respect their caps

use proptest::prelude::*;

use deutsch_algo::{
    AdaptiveEngine, DifficultyLevel, InteractionType, LearningMetrics, Tier, Trend, UserProfile,
    MAX_INSIGHTS, MAX_RECOMMENDATIONS,
};

// ============================================================================
// Arbitrary Generators
// ============================================================================

fn arb_f64_0_1() -> impl Strategy<Value = f64> {
    (0u64..=1000u64).prop_map(|v| v as f64 / 1000.0)
}

fn arb_interaction() -> impl Strategy<Value = InteractionType> {
    prop_oneof![
        Just(InteractionType::Vocabulary),
        Just(InteractionType::Pronunciation),
        Just(InteractionType::Conversation),
        Just(InteractionType::Cultural),
    ]
}

fn arb_tier() -> impl Strategy<Value = Tier> {
    prop_oneof![
        Just(Tier::Beginner),
        Just(Tier::Intermediate),
        Just(Tier::Advanced)
    ]
}

fn arb_metrics() -> impl Strategy<Value = LearningMetrics> {
    (
        arb_f64_0_1(),
        arb_f64_0_1(),
        arb_f64_0_1(),
        arb_f64_0_1(),
        arb_f64_0_1(),
        arb_f64_0_1(),
        arb_f64_0_1(),
        0.0f64..20_000.0,
    )
        .prop_map(|(v, p, c, cu, e, er, co, rt)| LearningMetrics {
            vocabulary_retention: v,
            pronunciation_accuracy: p,
            conversation_confidence: c,
            cultural_knowledge: cu,
            engagement_level: e,
            error_rate: er,
            completion_rate: co,
            response_time: rt,
        })
}

fn arb_events() -> impl Strategy<Value = Vec<(InteractionType, bool, f64)>> {
    prop::collection::vec((arb_interaction(), any::<bool>(), 0.0f64..10_000.0), 1..60)
}

fn arb_engine() -> impl Strategy<Value = AdaptiveEngine> {
    (arb_metrics(), arb_tier()).prop_map(|(metrics, tier)| {
        let difficulty = DifficultyLevel {
            tier,
            ..DifficultyLevel::default()
        };
        let mut profile = UserProfile::new("prop", "Prop");
        profile.interests = vec!["travel".into(), "food".into(), "culture".into()];
        AdaptiveEngine::with_state(profile, metrics, difficulty)
    })
}

fn in_unit(v: f64) -> bool {
    (0.0..=1.0).contains(&v)
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn prop_success_never_decreases_metric(
        mut engine in arb_engine(),
        kind in arb_interaction(),
        rt in 0.0f64..10_000.0,
    ) {
        let before = engine.metrics().metric(kind);
        engine.record_interaction(kind, true, rt).unwrap();
        let after = engine.metrics().metric(kind);
        prop_assert!(after >= before);
        if before < 1.0 {
            prop_assert!(after > before);
        }
    }

    #[test]
    fn prop_failure_never_increases_metric(
        mut engine in arb_engine(),
        kind in arb_interaction(),
        rt in 0.0f64..10_000.0,
    ) {
        let before = engine.metrics().metric(kind);
        engine.record_interaction(kind, false, rt).unwrap();
        let after = engine.metrics().metric(kind);
        prop_assert!(after <= before);
        if before > 0.0 {
            prop_assert!(after < before);
        }
    }

    #[test]
    fn prop_state_stays_in_range(mut engine in arb_engine(), events in arb_events()) {
        for (kind, success, rt) in events {
            engine.record_interaction(kind, success, rt).unwrap();

            let m = engine.metrics();
            prop_assert!(in_unit(m.vocabulary_retention));
            prop_assert!(in_unit(m.pronunciation_accuracy));
            prop_assert!(in_unit(m.conversation_confidence));
            prop_assert!(in_unit(m.cultural_knowledge));
            prop_assert!(in_unit(m.engagement_level));
            prop_assert!(in_unit(m.error_rate));
            prop_assert!(in_unit(m.completion_rate));
            prop_assert!(m.response_time >= 0.0);

            let d = engine.difficulty();
            for knob in [
                d.vocabulary_complexity,
                d.grammar_complexity,
                d.speech_speed,
                d.translation_support,
                d.cultural_context,
                d.scenario_complexity,
            ] {
                prop_assert!(in_unit(knob));
            }

            prop_assert!(engine.recommendations().len() <= MAX_RECOMMENDATIONS);
            prop_assert!(engine.insights().len() <= MAX_INSIGHTS);
            prop_assert!(engine.history().len() <= 10);
        }
    }

    #[test]
    fn prop_tier_is_monotonic(mut engine in arb_engine(), events in arb_events()) {
        let mut last = engine.difficulty().tier;
        for (kind, success, rt) in events {
            let outcome = engine.record_interaction(kind, success, rt).unwrap();
            prop_assert!(outcome.tier >= last);
            prop_assert!(outcome.tier as u8 <= last as u8 + 1);
            last = outcome.tier;
        }
    }

    #[test]
    fn prop_trend_stable_with_short_history(
        mut engine in arb_engine(),
        events in prop::collection::vec(
            (arb_interaction(), any::<bool>(), 0.0f64..10_000.0),
            1..=3,
        ),
    ) {
        for (kind, success, rt) in events {
            let outcome = engine.record_interaction(kind, success, rt).unwrap();
            prop_assert_eq!(outcome.trend, Trend::Stable);
        }
    }

    #[test]
    fn prop_negative_response_time_rejected(
        mut engine in arb_engine(),
        kind in arb_interaction(),
        rt in -10_000.0f64..-0.001,
    ) {
        let before = engine.snapshot();
        prop_assert!(engine.record_interaction(kind, true, rt).is_err());
        prop_assert_eq!(engine.metrics(), &before.metrics);
        prop_assert_eq!(engine.difficulty(), &before.difficulty);
    }
}

// ============================================================================
// Worked examples
// ============================================================================

fn uniform(v: f64) -> LearningMetrics {
    LearningMetrics {
        vocabulary_retention: v,
        pronunciation_accuracy: v,
        conversation_confidence: v,
        cultural_knowledge: v,
        engagement_level: v,
        error_rate: 0.2,
        completion_rate: v,
        response_time: 2000.0,
    }
}

#[test]
fn promotes_through_all_tiers_then_saturates() {
    let mut engine = AdaptiveEngine::with_state(
        UserProfile::new("u", "U"),
        uniform(0.95),
        DifficultyLevel::default(),
    );
    let tiers: Vec<Tier> = (0..4)
        .map(|_| {
            engine
                .record_interaction(InteractionType::Vocabulary, true, 800.0)
                .unwrap()
                .tier
        })
        .collect();
    assert_eq!(
        tiers,
        vec![Tier::Intermediate, Tier::Advanced, Tier::Advanced, Tier::Advanced]
    );
    assert_eq!(engine.profile().tier, Tier::Advanced);
}

#[test]
fn single_steps_stay_inside_trend_band() {
    // One interaction moves the score by at most ~0.013, well inside the 0.1 band.
    let mut engine = AdaptiveEngine::with_state(
        UserProfile::new("u", "U"),
        uniform(0.6),
        DifficultyLevel::default(),
    );
    for i in 0..40 {
        let outcome = engine
            .record_interaction(InteractionType::ALL[i % 4], i % 5 != 0, 1000.0)
            .unwrap();
        assert_eq!(outcome.trend, Trend::Stable);
    }
}
