//! Replay of one hero's full route.

use log::debug;

use hr_core::{HeroId, ObjectId};

use crate::leg::{HeroState, Leg, simulate_leg};
use crate::SimContext;

/// Fold [`simulate_leg`] over `route`, visiting objects in the given order.
///
/// The hero starts at the depot on day 1 with its full budget (0 for a hero
/// missing from the catalog).  Objects missing from the catalog are skipped
/// without producing a leg and without changing the hero's state.
pub fn replay_journey(ctx: SimContext<'_>, hero: HeroId, route: &[ObjectId]) -> Vec<Leg> {
    let max_move_points = ctx.catalog.max_move_points(hero);
    let mut state = HeroState::start(max_move_points);
    let mut legs = Vec::with_capacity(route.len());

    for &object_id in route {
        let Some(target) = ctx.catalog.object(object_id) else {
            debug!("{hero}: skipping unknown {object_id}");
            continue;
        };
        let distance = ctx.distances.distance(state.location, object_id);
        let leg = simulate_leg(hero, max_move_points, target, state, distance);
        state = leg.leave_state();
        legs.push(leg);
    }

    legs
}
