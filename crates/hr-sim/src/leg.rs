//! One hero move: the leg state machine.
//!
//! # Rules
//!
//! ```text
//! departure   from depot   → day = target.day_open, points = max
//!             otherwise    → day, points from the hero's state
//! arrival     diff = points − distance
//!             diff ≥ 0     → same day, points = diff
//!             diff < 0     → next day, points = max + diff
//! visit       early        → wait until day_open, burn what is left,
//!                            leave with max − VISIT_COST, full reward
//!             on time      → pay VISIT_COST (or drain to 0), full reward
//!             late         → pay VISIT_COST (or drain to 0), no reward
//! ```
//!
//! Only one day of carryover is modelled.  A shortfall larger than a full
//! day's budget yields a negative arrival balance and an arrival day that
//! undercounts the days really needed; the replay keeps those values as they
//! are.  Likewise a hero whose budget is below `VISIT_COST` leaves an early
//! visit with a negative balance.

use hr_core::rules::{FIRST_DAY, VISIT_COST};
use hr_core::{Day, HeroId, MovePoints, ObjectId, Reward};
use hr_data::Object;

/// Where a hero is and what it has left.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeroState {
    pub location:    ObjectId,
    pub day:         Day,
    pub move_points: MovePoints,
}

impl HeroState {
    /// At the depot on day 1 with a full budget.
    pub fn start(max_move_points: MovePoints) -> Self {
        Self {
            location:    ObjectId::DEPOT,
            day:         FIRST_DAY,
            move_points: max_move_points,
        }
    }
}

/// How an arrival relates to the target's opening day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Arrival {
    Early,
    OnTime,
    Late,
}

/// One simulated transition of a hero to an object.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Leg {
    pub hero_id:            HeroId,
    pub object_id_from:     ObjectId,
    pub object_id_to:       ObjectId,
    pub day_start:          Day,
    pub day_arrive:         Day,
    pub day_leave:          Day,
    pub move_points_start:  MovePoints,
    pub move_points_arrive: MovePoints,
    /// Points wasted while waiting for an early target to open.
    pub move_points_burned: MovePoints,
    pub move_points_leave:  MovePoints,
    pub is_earlier:         bool,
    pub is_late:            bool,
    /// Reward actually credited: the object's reward unless late.
    pub reward:             Reward,
}

impl Leg {
    pub fn arrival(&self) -> Arrival {
        if self.is_earlier {
            Arrival::Early
        } else if self.is_late {
            Arrival::Late
        } else {
            Arrival::OnTime
        }
    }

    /// The state the hero carries into its next leg.
    pub fn leave_state(&self) -> HeroState {
        HeroState {
            location:    self.object_id_to,
            day:         self.day_leave,
            move_points: self.move_points_leave,
        }
    }
}

/// Simulate `hero` (daily budget `max_move_points`) moving from `state` to
/// `target`, which lies `distance` away.
///
/// Pure and infallible.
pub fn simulate_leg(
    hero:            HeroId,
    max_move_points: MovePoints,
    target:          &Object,
    state:           HeroState,
    distance:        MovePoints,
) -> Leg {
    // Every object is reachable from the depot within its opening day, so a
    // first move starts on that day with a full budget.
    let (day_start, move_points_start) = if state.location.is_depot() {
        (target.day_open, max_move_points)
    } else {
        (state.day, state.move_points)
    };

    let diff = move_points_start - distance;
    let (day_arrive, move_points_arrive) = if diff >= 0 {
        (day_start, diff)
    } else {
        (day_start + 1, max_move_points + diff)
    };

    let arrival = match day_arrive.cmp(&target.day_open) {
        std::cmp::Ordering::Less    => Arrival::Early,
        std::cmp::Ordering::Equal   => Arrival::OnTime,
        std::cmp::Ordering::Greater => Arrival::Late,
    };

    let (day_leave, move_points_burned, move_points_leave) = match arrival {
        Arrival::Early => {
            let idle_days = MovePoints::from(target.day_open - day_arrive - 1);
            (
                target.day_open,
                move_points_arrive + max_move_points * idle_days,
                max_move_points - VISIT_COST,
            )
        }
        Arrival::OnTime | Arrival::Late => (day_arrive, 0, pay_visit(move_points_arrive)),
    };

    Leg {
        hero_id: hero,
        object_id_from: state.location,
        object_id_to: target.id,
        day_start,
        day_arrive,
        day_leave,
        move_points_start,
        move_points_arrive,
        move_points_burned,
        move_points_leave,
        is_earlier: arrival == Arrival::Early,
        is_late: arrival == Arrival::Late,
        reward: if arrival == Arrival::Late { 0 } else { target.reward },
    }
}

/// Charge the visit cost, or drain to zero when it cannot be afforded
/// (last-move rule: the visit still happens).
#[inline]
fn pay_visit(points: MovePoints) -> MovePoints {
    if points >= VISIT_COST { points - VISIT_COST } else { 0 }
}
