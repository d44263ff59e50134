//! Deutsch123 immersion runtime: learning sessions around the adaptive
//! heuristic, speech capabilities, the simulated conversation partner and the
//! static content stores.

pub mod config;
pub mod content;
pub mod conversation;
pub mod error;
pub mod logging;
pub mod replay;
pub mod session;
pub mod speech;

pub use config::Config;
pub use error::{ImmersionError, SpeechError};
pub use session::LearningSession;
