//! Keyword-based pronunciation scoring.
//!
//! There is no acoustic analysis: the transcript returned by the recognizer is
//! compared word by word with the expected phrase.

use serde::Serialize;

/// Share of the score taken by keyword matches; the rest is engine confidence.
const KEYWORD_WEIGHT: f64 = 0.8;
const CONFIDENCE_WEIGHT: f64 = 0.2;

pub const PASS_THRESHOLD: f64 = 0.7;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PronunciationScore {
    pub score: f64,
    pub matched: Vec<String>,
    pub missing: Vec<String>,
    pub passed: bool,
    pub feedback: &'static str,
}

/// Lowercases, strips punctuation and folds umlauts to their ASCII spelling
/// so "Grüße" and "gruesse" compare equal.
pub fn normalize(text: &str) -> Vec<String> {
    let mut folded = String::with_capacity(text.len());
    for c in text.chars().flat_map(char::to_lowercase) {
        match c {
            'ä' => folded.push_str("ae"),
            'ö' => folded.push_str("oe"),
            'ü' => folded.push_str("ue"),
            'ß' => folded.push_str("ss"),
            c if c.is_alphanumeric() => folded.push(c),
            _ => folded.push(' '),
        }
    }
    folded.split_whitespace().map(str::to_string).collect()
}

fn feedback_for(score: f64) -> &'static str {
    if score >= 0.9 {
        "Ausgezeichnet! Excellent pronunciation."
    } else if score >= PASS_THRESHOLD {
        "Gut gemacht! Good pronunciation."
    } else if score >= 0.4 {
        "Fast! Some words were unclear, try again."
    } else {
        "Noch einmal, bitte. Listen to the model and repeat slowly."
    }
}

pub fn score_pronunciation(
    expected: &str,
    transcript: &str,
    confidence: f64,
) -> PronunciationScore {
    let expected_words = normalize(expected);
    let heard = normalize(transcript);

    let (matched, missing): (Vec<String>, Vec<String>) = expected_words
        .into_iter()
        .partition(|word| heard.contains(word));

    let total = matched.len() + missing.len();
    let keyword_ratio = if total == 0 {
        0.0
    } else {
        matched.len() as f64 / total as f64
    };
    let confidence = if confidence.is_finite() {
        confidence.clamp(0.0, 1.0)
    } else {
        0.0
    };

    let score = if total == 0 {
        0.0
    } else {
        KEYWORD_WEIGHT * keyword_ratio + CONFIDENCE_WEIGHT * confidence
    };

    PronunciationScore {
        score,
        matched,
        missing,
        passed: score >= PASS_THRESHOLD,
        feedback: feedback_for(score),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_folds_umlauts_and_punctuation() {
        assert_eq!(normalize("Schöne Grüße, Straße!"), vec!["schoene", "gruesse", "strasse"]);
        assert_eq!(normalize("  Guten   Tag. "), vec!["guten", "tag"]);
    }

    #[test]
    fn test_exact_match_passes() {
        let result = score_pronunciation(
            "Ich hätte gern einen Kaffee",
            "ich haette gern einen kaffee",
            0.9,
        );
        assert!(result.missing.is_empty());
        assert!((result.score - 0.98).abs() < 1e-9);
        assert!(result.passed);
    }

    #[test]
    fn test_partial_match_fails() {
        let result = score_pronunciation("Wo ist der Bahnhof", "wo ist", 1.0);
        assert_eq!(result.matched, vec!["wo", "ist"]);
        assert_eq!(result.missing, vec!["der", "bahnhof"]);
        assert!((result.score - 0.6).abs() < 1e-9);
        assert!(!result.passed);
    }

    #[test]
    fn test_empty_expected_scores_zero() {
        let result = score_pronunciation("", "hallo", 1.0);
        assert_eq!(result.score, 0.0);
        assert!(!result.passed);
    }

    #[test]
    fn test_more_matches_never_score_lower() {
        let expected = "Eine Fahrkarte nach Berlin bitte";
        let a = score_pronunciation(expected, "eine fahrkarte", 0.8);
        let b = score_pronunciation(expected, "eine fahrkarte nach berlin", 0.8);
        assert!(b.score > a.score);
    }
}
