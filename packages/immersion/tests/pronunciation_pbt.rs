//! Property-Based Tests for keyword pronunciation scoring and partner replies.

use std::time::Duration;

use proptest::prelude::*;

use deutsch_immersion::conversation::ConversationPartner;
use deutsch_immersion::speech::pronunciation::{normalize, score_pronunciation};

const WORDS: &[&str] = &[
    "ich", "möchte", "eine", "fahrkarte", "nach", "münchen", "kaufen", "bitte", "grüße", "straße",
];

fn arb_phrase() -> impl Strategy<Value = Vec<&'static str>> {
    prop::collection::vec(prop::sample::select(WORDS), 1..8)
}

proptest! {
    #[test]
    fn prop_score_in_unit_interval(
        expected in arb_phrase(),
        heard in arb_phrase(),
        confidence in -1.0f64..2.0,
    ) {
        let result = score_pronunciation(&expected.join(" "), &heard.join(" "), confidence);
        prop_assert!((0.0..=1.0).contains(&result.score));
        prop_assert_eq!(result.matched.len() + result.missing.len(), expected.len());
    }

    #[test]
    fn prop_hearing_more_never_scores_lower(
        expected in arb_phrase(),
        heard in arb_phrase(),
        extra in arb_phrase(),
        confidence in 0.0f64..=1.0,
    ) {
        let base = heard.join(" ");
        let more = format!("{} {}", base, extra.join(" "));
        let a = score_pronunciation(&expected.join(" "), &base, confidence);
        let b = score_pronunciation(&expected.join(" "), &more, confidence);
        prop_assert!(b.score >= a.score);
    }

    #[test]
    fn prop_exact_repeat_with_full_confidence_passes(expected in arb_phrase()) {
        let phrase = expected.join(" ");
        let result = score_pronunciation(&phrase, &phrase.to_uppercase(), 1.0);
        prop_assert!(result.missing.is_empty());
        prop_assert!(result.passed);
    }

    #[test]
    fn prop_normalize_is_idempotent(words in arb_phrase()) {
        let once = normalize(&words.join(", "));
        let twice = normalize(&once.join(" "));
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn prop_partner_reply_is_deterministic(words in arb_phrase()) {
        let partner = ConversationPartner::new("train_station", "Lena", Duration::ZERO);
        let input = words.join(" ");
        prop_assert_eq!(partner.compose_reply(&input), partner.compose_reply(&input));
    }
}
