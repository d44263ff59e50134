//! Recommendation and insight strings derived from the current metrics.

use crate::types::{
    LearningMetrics, LearningStyle, Trend, UserProfile, MAX_INSIGHTS, MAX_RECOMMENDATIONS,
};

/// Interest tag → suggestion, checked in order.
pub const INTEREST_PHRASES: &[(&str, &str)] = &[
    ("travel", "Try the train station scenario to prepare for your trips"),
    ("food", "Order a meal in the German café simulation"),
    ("business", "Rehearse a job interview in German"),
    ("music", "Listen to German songs and learn the lyrics"),
    ("culture", "Visit the Christmas market to explore German traditions"),
    ("history", "Read short texts about German history"),
    ("sports", "Learn football vocabulary for match day conversations"),
];

fn style_phrase(style: LearningStyle) -> &'static str {
    match style {
        LearningStyle::Visual => "Use picture flashcards to anchor new words",
        LearningStyle::Auditory => "Listen to native speaker dialogues",
        LearningStyle::Kinesthetic => "Role-play everyday situations out loud",
        LearningStyle::Reading => "Read short German articles every day",
    }
}

/// Up to [`MAX_RECOMMENDATIONS`] suggestions, highest priority first.
pub fn recommendations(metrics: &LearningMetrics, profile: &UserProfile) -> Vec<String> {
    let mut out: Vec<&str> = Vec::new();

    if metrics.pronunciation_accuracy < 0.6 {
        out.push("Practice pronunciation with the speech trainer");
    }
    if metrics.vocabulary_retention < 0.6 {
        out.push("Review your vocabulary flashcards");
    }
    if metrics.cultural_knowledge < 0.5 {
        out.push("Explore a cultural simulation");
    }
    if metrics.conversation_confidence < 0.5 {
        out.push("Chat with your AI conversation partner");
    }
    for (tag, phrase) in INTEREST_PHRASES {
        if profile.has_interest(tag) {
            out.push(*phrase);
        }
    }
    out.push(style_phrase(profile.learning_style));

    out.into_iter()
        .take(MAX_RECOMMENDATIONS)
        .map(str::to_string)
        .collect()
}

/// Up to [`MAX_INSIGHTS`] short observations about the learner's progress.
pub fn insights(metrics: &LearningMetrics, trend: Trend) -> Vec<String> {
    let mut out: Vec<&str> = Vec::new();

    match trend {
        Trend::Improving => out.push("Your performance is improving steadily"),
        Trend::Declining => {
            out.push("Your recent performance dipped; revisit earlier material")
        }
        Trend::Stable => {}
    }
    if metrics.vocabulary_retention > 0.8 {
        out.push("Excellent vocabulary retention");
    }
    if metrics.pronunciation_accuracy < 0.4 {
        out.push("Pronunciation needs attention");
    }
    if metrics.engagement_level > 0.8 {
        out.push("Great engagement, keep the streak going");
    }
    if metrics.error_rate > 0.4 {
        out.push("Error rate is high; slow down and review mistakes");
    }
    if metrics.response_time > 5000.0 {
        out.push("Try to answer a little faster");
    }

    out.into_iter()
        .take(MAX_INSIGHTS)
        .map(str::to_string)
        .collect()
}
