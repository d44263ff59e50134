//! Next immersive scenario selection.

use crate::types::{LearningMetrics, Tier, UserProfile};

/// Candidate scenario ids in declaration order; ties resolve to the earliest.
pub const SCENARIO_CANDIDATES: [&str; 5] = [
    "cafe_ordering",
    "train_station",
    "doctor_visit",
    "job_interview",
    "christmas_market",
];

const INTEREST_BOOST: f64 = 2.0;
const GOAL_BOOST: f64 = 1.0;
const WEAKNESS_BOOST: f64 = 1.5;

/// Interest tags that favour each candidate.
fn interest_tags(scenario: &str) -> &'static [&'static str] {
    match scenario {
        "cafe_ordering" => &["food", "cooking"],
        "train_station" => &["travel"],
        "doctor_visit" => &["health", "medicine"],
        "job_interview" => &["business", "career"],
        "christmas_market" => &["culture", "music", "festivals"],
        _ => &[],
    }
}

/// Goal keywords that favour each candidate.
fn goal_keywords(scenario: &str) -> &'static [&'static str] {
    match scenario {
        "cafe_ordering" => &["everyday", "daily"],
        "train_station" => &["travel", "trip"],
        "doctor_visit" => &["live", "move"],
        "job_interview" => &["work", "career", "job"],
        "christmas_market" => &["culture", "friends"],
        _ => &[],
    }
}

/// Weight of each candidate, in [`SCENARIO_CANDIDATES`] order.
pub fn scenario_weights(metrics: &LearningMetrics, profile: &UserProfile, tier: Tier) -> [f64; 5] {
    let mut weights = [1.0; 5];

    for (weight, scenario) in weights.iter_mut().zip(SCENARIO_CANDIDATES) {
        if interest_tags(scenario).iter().any(|t| profile.has_interest(t)) {
            *weight += INTEREST_BOOST;
        }
        if goal_keywords(scenario).iter().any(|k| profile.has_goal_containing(k)) {
            *weight += GOAL_BOOST;
        }
    }

    // cafe: low-stakes small talk
    if metrics.conversation_confidence < 0.5 {
        weights[0] += WEAKNESS_BOOST;
    }
    // station: announcements train listening
    if metrics.pronunciation_accuracy < 0.5 {
        weights[1] += WEAKNESS_BOOST;
    }
    if metrics.vocabulary_retention < 0.5 {
        weights[2] += WEAKNESS_BOOST;
    }
    if tier == Tier::Advanced {
        weights[3] += GOAL_BOOST;
    }
    if metrics.cultural_knowledge < 0.5 {
        weights[4] += WEAKNESS_BOOST;
    }

    weights
}

/// The highest-weighted candidate.
pub fn next_scenario(metrics: &LearningMetrics, profile: &UserProfile, tier: Tier) -> &'static str {
    let weights = scenario_weights(metrics, profile, tier);
    let mut best = 0;
    for (i, w) in weights.iter().enumerate().skip(1) {
        if *w > weights[best] {
            best = i;
        }
    }
    SCENARIO_CANDIDATES[best]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn neutral() -> LearningMetrics {
        LearningMetrics {
            vocabulary_retention: 0.6,
            pronunciation_accuracy: 0.6,
            conversation_confidence: 0.6,
            cultural_knowledge: 0.6,
            ..LearningMetrics::default()
        }
    }

    #[test]
    fn test_ties_resolve_to_first_declared() {
        let profile = UserProfile::new("u", "U");
        assert_eq!(next_scenario(&neutral(), &profile, Tier::Beginner), "cafe_ordering");
    }

    #[test]
    fn test_interest_match_wins() {
        let mut profile = UserProfile::new("u", "U");
        profile.interests = vec!["travel".into()];
        assert_eq!(next_scenario(&neutral(), &profile, Tier::Beginner), "train_station");
    }

    #[test]
    fn test_goal_and_tier_stack() {
        let mut profile = UserProfile::new("u", "U");
        profile.goals = vec!["Find a job in Munich".into()];
        let weights = scenario_weights(&neutral(), &profile, Tier::Advanced);
        assert_eq!(weights[3], 3.0);
        assert_eq!(next_scenario(&neutral(), &profile, Tier::Advanced), "job_interview");
    }

    #[test]
    fn test_low_cultural_knowledge_favours_market() {
        let metrics = LearningMetrics {
            cultural_knowledge: 0.2,
            ..neutral()
        };
        let profile = UserProfile::new("u", "U");
        assert_eq!(next_scenario(&metrics, &profile, Tier::Beginner), "christmas_market");
    }

    #[test]
    fn test_interest_outweighs_single_weakness() {
        let metrics = LearningMetrics {
            cultural_knowledge: 0.2,
            ..neutral()
        };
        let mut profile = UserProfile::new("u", "U");
        profile.interests = vec!["health".into()];
        assert_eq!(next_scenario(&metrics, &profile, Tier::Beginner), "doctor_visit");
    }
}
