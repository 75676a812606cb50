//! Scoring and per-hero summaries.
//!
//! ```text
//! score = Σ credited rewards − HERO_COST × (highest hero id with a leg)
//! ```
//!
//! Hero cost is charged by the highest id used, not by the number of
//! distinct heroes: a submission using heroes 1 and 5 pays for five.

use std::collections::BTreeMap;

use hr_core::rules::HERO_COST;
use hr_core::{Day, HeroId, MovePoints, Reward};

use crate::expand::expand;
use crate::leg::Leg;
use crate::submission::{Assignment, RawRow, normalize};
use crate::SimContext;

/// The terms of a score.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScoreBreakdown {
    pub total_reward: Reward,
    /// Highest hero id among the legs; `None` when nothing was replayed.
    pub max_hero_id:  Option<HeroId>,
    pub hero_cost:    i64,
    pub score:        i64,
    pub legs:         usize,
    pub early_legs:   usize,
    pub late_legs:    usize,
}

impl ScoreBreakdown {
    /// Score a full (untruncated) expansion.
    pub fn from_legs(legs: &[Leg]) -> Self {
        let Some(max_hero_id) = legs.iter().map(|l| l.hero_id).max() else {
            return Self::default();
        };
        let total_reward: Reward = legs.iter().map(|l| l.reward).sum();
        let hero_cost = HERO_COST * i64::from(max_hero_id.get());
        Self {
            total_reward,
            max_hero_id: Some(max_hero_id),
            hero_cost,
            score: total_reward - hero_cost,
            legs: legs.len(),
            early_legs: legs.iter().filter(|l| l.is_earlier).count(),
            late_legs: legs.iter().filter(|l| l.is_late).count(),
        }
    }
}

/// Everything produced by one evaluation pass.
#[derive(Debug, Clone, Default)]
pub struct Evaluation {
    pub assignments: Vec<Assignment>,
    pub legs:        Vec<Leg>,
    pub breakdown:   ScoreBreakdown,
}

/// Normalize, expand (untruncated) and score a raw submission.
pub fn evaluate(ctx: SimContext<'_>, raw: &[RawRow]) -> Evaluation {
    let assignments = normalize(raw);
    if assignments.is_empty() {
        return Evaluation::default();
    }
    let legs = expand(ctx, &assignments, false);
    let breakdown = ScoreBreakdown::from_legs(&legs);
    Evaluation { assignments, legs, breakdown }
}

/// The official score of a raw submission.  Empty submissions score 0.
pub fn score(ctx: SimContext<'_>, raw: &[RawRow]) -> i64 {
    evaluate(ctx, raw).breakdown.score
}

/// Per-hero totals for reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeroSummary {
    pub hero:              HeroId,
    pub legs:              usize,
    pub reward:            Reward,
    pub early_legs:        usize,
    pub late_legs:         usize,
    pub burned:            MovePoints,
    /// Day the hero leaves its last object.
    pub final_day:         Day,
    pub final_move_points: MovePoints,
}

/// Summarize `legs` per hero, ascending hero id.
pub fn summarize_by_hero(legs: &[Leg]) -> Vec<HeroSummary> {
    let mut by_hero: BTreeMap<HeroId, HeroSummary> = BTreeMap::new();
    for leg in legs {
        let s = by_hero.entry(leg.hero_id).or_insert(HeroSummary {
            hero:              leg.hero_id,
            legs:              0,
            reward:            0,
            early_legs:        0,
            late_legs:         0,
            burned:            0,
            final_day:         leg.day_leave,
            final_move_points: leg.move_points_leave,
        });
        s.legs += 1;
        s.reward += leg.reward;
        s.early_legs += usize::from(leg.is_earlier);
        s.late_legs += usize::from(leg.is_late);
        s.burned += leg.move_points_burned;
        s.final_day = leg.day_leave;
        s.final_move_points = leg.move_points_leave;
    }
    by_hero.into_values().collect()
}
