//! # deutsch-algo - adaptive learning heuristics for Deutsch123
//!
//! Pure Rust, I/O-free implementation of the adaptive difficulty heuristic:
//!
//! - **Learning metrics** - eight per-learner scalars nudged by every interaction
//! - **Difficulty ratchet** - one-directional tier promotion plus six complexity knobs
//! - **Trend** - current score versus the mean of recent history
//! - **Recommendations / insights / next scenario** - threshold and table driven
//!
//! ## Modules
//!
//! - [`adaptive`] - the engine and its derived computations
//! - [`history`] - fixed-capacity score ring buffer
//! - [`sanitize`] - clamping, validation and diagnostics
//! - [`types`] - shared types and constants
//!
//! ## Example
//!
//! ```rust
//! use deutsch_algo::{AdaptiveEngine, InteractionType, Tier, UserProfile};
//!
//! let mut profile = UserProfile::new("u1", "Anna");
//! profile.interests = vec!["travel".to_string()];
//!
//! let mut engine = AdaptiveEngine::new(profile);
//! let outcome = engine
//!     .record_interaction(InteractionType::Pronunciation, false, 4200.0)
//!     .unwrap();
//! assert_eq!(outcome.tier, Tier::Beginner);
//! assert!(engine.recommendations().len() <= 3);
//! ```

// ============================================================================
// Modules
// ============================================================================

pub mod adaptive;
pub mod error;
pub mod history;
pub mod sanitize;
pub mod types;

// ============================================================================
// Re-exports
// ============================================================================

pub use types::*;

pub use adaptive::{AdaptiveEngine, UpdateOutcome};

pub use error::AlgoError;

pub use history::ScoreHistory;
