//! Newline-delimited JSON interaction replay.

use std::io::BufRead;

use chrono::Utc;
use tracing::{debug, info};

use deutsch_algo::{AdaptiveSnapshot, InteractionEvent};

use crate::config::Config;
use crate::error::ImmersionError;
use crate::session::LearningSession;

/// Runs a whole replay: a fresh session for the configured learner, every event in
/// `reader`, then the closing snapshot.
pub fn replay_session<R: BufRead>(
    config: Config,
    reader: R,
) -> Result<AdaptiveSnapshot, ImmersionError> {
    let session = LearningSession::new(config.learner_profile("replay"), config);
    session.start_session(Utc::now());

    let applied = replay_events(reader, &session)?;
    info!(session_id = %session.id(), applied, "events replayed");

    session.end_session(Utc::now())?;
    Ok(session.snapshot())
}

/// Applies every event in `reader` to `session` and returns how many were applied.
///
/// Blank lines and lines starting with `#` are skipped. The first malformed line
/// aborts the replay; events before it stay applied.
pub fn replay_events<R: BufRead>(
    reader: R,
    session: &LearningSession,
) -> Result<usize, ImmersionError> {
    let mut applied = 0;
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let event: InteractionEvent =
            serde_json::from_str(trimmed).map_err(|source| ImmersionError::InvalidEvent {
                line: idx + 1,
                source,
            })?;
        session.apply_event(&event)?;
        applied += 1;
    }
    debug!(applied, "replay finished");
    Ok(applied)
}
