//! Journey timeline for animated viewers.
//!
//! Each leg's start, arrival and departure are projected onto one continuous
//! clock where a day spans `DAY_LENGTH` units and spent move points advance
//! the clock within the day:
//!
//! ```text
//! time = (day − 1) × DAY_LENGTH + (max_move_points − move_points)
//! ```
//!
//! Viewers consume the horizon-truncated expansion, so `max_time` never
//! reaches far past day 7.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::Serialize;

use hr_core::rules::{DAY_LENGTH, HORIZON_DAYS};
use hr_core::{Day, MovePoints, Reward};
use hr_data::Catalog;
use hr_sim::Leg;

use crate::OutputResult;

/// One leg on the continuous clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimelineEntry {
    pub hero_id:     u32,
    pub max_mp:      MovePoints,
    pub from:        u32,
    pub to:          u32,
    pub time_start:  i64,
    pub time_arrive: i64,
    pub time_leave:  i64,
    pub reward:      Reward,
    pub is_late:     bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Timeline {
    /// Latest `time_leave`, or the end of the horizon when there are no legs.
    pub max_time: i64,
    pub journeys: Vec<TimelineEntry>,
}

/// Project `legs` onto the continuous clock.
///
/// Fails if a leg names a hero missing from `catalog`.
pub fn build_timeline(catalog: &Catalog, legs: &[Leg]) -> OutputResult<Timeline> {
    let journeys = legs
        .iter()
        .map(|leg| {
            let max_mp = catalog.require_hero(leg.hero_id)?.move_points;
            Ok(TimelineEntry {
                hero_id:     leg.hero_id.get(),
                max_mp,
                from:        leg.object_id_from.get(),
                to:          leg.object_id_to.get(),
                time_start:  clock(leg.day_start, max_mp, leg.move_points_start),
                time_arrive: clock(leg.day_arrive, max_mp, leg.move_points_arrive),
                time_leave:  clock(leg.day_leave, max_mp, leg.move_points_leave),
                reward:      leg.reward,
                is_late:     leg.is_late,
            })
        })
        .collect::<OutputResult<Vec<_>>>()?;

    let max_time = journeys
        .iter()
        .map(|j| j.time_leave)
        .max()
        .unwrap_or(i64::from(HORIZON_DAYS) * DAY_LENGTH);

    Ok(Timeline { max_time, journeys })
}

/// Serialize `timeline` to `path` as JSON.
pub fn write_timeline_json(path: &Path, timeline: &Timeline) -> OutputResult<()> {
    let mut out = BufWriter::new(File::create(path)?);
    serde_json::to_writer(&mut out, timeline)?;
    out.flush()?;
    Ok(())
}

#[inline]
fn clock(day: Day, max_mp: MovePoints, move_points: MovePoints) -> i64 {
    (i64::from(day) - 1) * DAY_LENGTH + (max_mp - move_points)
}
