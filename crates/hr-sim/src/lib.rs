//! `hr-sim` — deterministic replay and scoring of hero routing submissions.
//!
//! # Pipeline
//!
//! ```text
//! raw rows ──normalize──▶ assignments ──group by hero──▶ routes
//!        routes ──replay_journey (per hero)──▶ legs ──score──▶ i64
//! ```
//!
//! 1. [`submission::normalize`] drops out-of-range ids and keeps the first
//!    claim of every object in submission order.
//! 2. [`expand::expand`] groups assignments by hero (ascending id), keeping
//!    each hero's object order, and replays every route.
//! 3. [`journey::replay_journey`] folds [`leg::simulate_leg`] over one route.
//! 4. [`score::evaluate`] sums collected rewards and charges
//!    `HERO_COST × highest hero id used`.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                            |
//! |------------|---------------------------------------------------|
//! | `parallel` | Replays heroes on Rayon's thread pool.            |

pub mod context;
pub mod error;
pub mod expand;
pub mod journey;
pub mod leg;
pub mod score;
pub mod submission;


pub use context::SimContext;
pub use error::{SubmissionError, SubmissionResult};
pub use expand::{expand, group_routes};
pub use journey::replay_journey;
pub use leg::{Arrival, HeroState, Leg, simulate_leg};
pub use score::{Evaluation, HeroSummary, ScoreBreakdown, evaluate, score, summarize_by_hero};
pub use submission::{
    Assignment, NormalizeStats, RawRow, normalize, normalize_with_stats, read_submission_csv,
    read_submission_reader,
};
