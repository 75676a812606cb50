//! Expansion of a normalized submission into legs.

use std::collections::BTreeMap;

use hr_core::rules::HORIZON_DAYS;
use hr_core::{HeroId, ObjectId};

use crate::journey::replay_journey;
use crate::leg::Leg;
use crate::submission::Assignment;
use crate::SimContext;

/// Group assignments by hero, ascending hero id, keeping each hero's objects
/// in the order they appear in `assignments`.
pub fn group_routes(assignments: &[Assignment]) -> BTreeMap<HeroId, Vec<ObjectId>> {
    let mut routes: BTreeMap<HeroId, Vec<ObjectId>> = BTreeMap::new();
    for a in assignments {
        routes.entry(a.hero).or_default().push(a.object);
    }
    routes
}

/// Replay every hero's route and concatenate the legs, heroes in ascending
/// id order.
///
/// With `truncate_to_horizon`, legs arriving after day 7 are dropped.  That
/// view is for display; scoring always uses the full expansion.
///
/// With the `parallel` Cargo feature heroes are replayed on Rayon's thread
/// pool.  Heroes are independent, so the result is identical either way.
pub fn expand(
    ctx:                 SimContext<'_>,
    assignments:         &[Assignment],
    truncate_to_horizon: bool,
) -> Vec<Leg> {
    if assignments.is_empty() {
        return Vec::new();
    }
    let routes: Vec<(HeroId, Vec<ObjectId>)> = group_routes(assignments).into_iter().collect();

    #[cfg(not(feature = "parallel"))]
    let journeys: Vec<Vec<Leg>> = routes
        .iter()
        .map(|(hero, route)| replay_journey(ctx, *hero, route))
        .collect();

    #[cfg(feature = "parallel")]
    let journeys: Vec<Vec<Leg>> = {
        use rayon::prelude::*;

        // Indexed parallel iterator: `collect` keeps ascending hero order.
        routes
            .par_iter()
            .map(|(hero, route)| replay_journey(ctx, *hero, route))
            .collect()
    };

    journeys
        .into_iter()
        .flatten()
        .filter(|leg| !truncate_to_horizon || leg.day_arrive <= HORIZON_DAYS)
        .collect()
}
