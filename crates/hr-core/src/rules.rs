//! Game rules shared by the simulator, the scorer, and the reporting tools.
//!
//! Days are 1-based.  Move points and rewards are signed: pathological
//! capacity/distance combinations can drive move points below zero, and the
//! replay reproduces those values rather than clamping them.

/// A simulated day (day 1 is the first day of the week).
pub type Day = u32;

/// Move points, the per-day travel budget.
pub type MovePoints = i64;

/// Gold collected from an object.
pub type Reward = i64;

/// Move points charged for visiting an object.
pub const VISIT_COST: MovePoints = 100;

/// Score penalty per hero slot, charged up to the highest hero id used.
pub const HERO_COST: i64 = 2_500;

/// Last day of the scored week.
pub const HORIZON_DAYS: Day = 7;

/// First day of the week; every hero starts here.
pub const FIRST_DAY: Day = 1;

/// Inclusive hero id bounds accepted in a submission.
pub const MIN_HERO_ID: i64 = 1;
pub const MAX_HERO_ID: i64 = 100;

/// Inclusive object id bounds accepted in a submission.
pub const MIN_OBJECT_ID: i64 = 1;
pub const MAX_OBJECT_ID: i64 = 700;

/// Clock units per day on the continuous timeline used by the journey viewer.
pub const DAY_LENGTH: i64 = 2_000;

/// `true` if `id` is an acceptable hero id in a submission.
#[inline]
pub fn hero_id_in_range(id: i64) -> bool {
    (MIN_HERO_ID..=MAX_HERO_ID).contains(&id)
}

/// `true` if `id` is an acceptable object id in a submission.
#[inline]
pub fn object_id_in_range(id: i64) -> bool {
    (MIN_OBJECT_ID..=MAX_OBJECT_ID).contains(&id)
}
