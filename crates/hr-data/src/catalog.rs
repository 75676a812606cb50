//! Hero and object catalogs.

use rustc_hash::FxHashMap;

use hr_core::{Day, HeroId, HrError, HrResult, MovePoints, ObjectId, Reward};

/// A hero and its daily move-point budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hero {
    pub id:          HeroId,
    /// Move points restored at the start of every day.
    pub move_points: MovePoints,
}

/// A collectible object (a waterwheel, in the game's terms).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Object {
    pub id:       ObjectId,
    /// Day on which the reward can first be collected.  Arriving later
    /// forfeits the reward.
    pub day_open: Day,
    pub reward:   Reward,
}

/// Read-only lookup of heroes and objects by id.
///
/// When the source rows contain the same id twice the last row wins, the
/// same as building a dictionary row by row.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    heroes:  FxHashMap<HeroId, Hero>,
    objects: FxHashMap<ObjectId, Object>,
}

impl Catalog {
    pub fn new(
        heroes:  impl IntoIterator<Item = Hero>,
        objects: impl IntoIterator<Item = Object>,
    ) -> Self {
        Self {
            heroes:  heroes.into_iter().map(|h| (h.id, h)).collect(),
            objects: objects.into_iter().map(|o| (o.id, o)).collect(),
        }
    }

    pub fn hero(&self, id: HeroId) -> Option<&Hero> {
        self.heroes.get(&id)
    }

    pub fn object(&self, id: ObjectId) -> Option<&Object> {
        self.objects.get(&id)
    }

    /// Like [`hero`][Self::hero] but reports a missing hero as an error.
    pub fn require_hero(&self, id: HeroId) -> HrResult<&Hero> {
        self.hero(id).ok_or(HrError::HeroNotFound(id))
    }

    /// Daily budget of `id`, or `0` for a hero absent from the catalog.
    pub fn max_move_points(&self, id: HeroId) -> MovePoints {
        self.hero(id).map_or(0, |h| h.move_points)
    }

    pub fn hero_count(&self) -> usize {
        self.heroes.len()
    }

    pub fn object_count(&self) -> usize {
        self.objects.len()
    }

    /// Sum of every object's reward, an upper bound on collectable gold.
    pub fn total_reward(&self) -> Reward {
        self.objects.values().map(|o| o.reward).sum()
    }
}
