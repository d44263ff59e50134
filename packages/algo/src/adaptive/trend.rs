use crate::history::ScoreHistory;
use crate::types::{Trend, TREND_BAND, TREND_WINDOW};

/// Classifies `current` against the mean of the most recent history entries.
///
/// Fewer than [`TREND_WINDOW`] entries always yields [`Trend::Stable`].
pub fn classify_trend(history: &ScoreHistory, current: f64) -> Trend {
    let Some(mean) = history.recent_mean(TREND_WINDOW) else {
        return Trend::Stable;
    };

    if current > mean + TREND_BAND {
        Trend::Improving
    } else if current < mean - TREND_BAND {
        Trend::Declining
    } else {
        Trend::Stable
    }
}
