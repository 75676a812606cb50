//! `hr-core` — foundational types for the heroes routing evaluator.
//!
//! Every other `hr-*` crate depends on this one.  It has no `hr-*`
//! dependencies and a single required external one (`thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                                |
//! |-------------|---------------------------------------------------------|
//! | [`ids`]     | `HeroId`, `ObjectId` (with the `DEPOT` location)        |
//! | [`rules`]   | Visit cost, hero cost, horizon, id bounds               |
//! | [`error`]   | `HrError`, `HrResult`                                   |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                 |
//! |---------|--------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to the id types.        |

pub mod error;
pub mod ids;
pub mod rules;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{HrError, HrResult};
pub use ids::{HeroId, ObjectId};
pub use rules::{Day, MovePoints, Reward};
