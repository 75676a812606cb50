//! Read-only view of the reference data used during replay.

use hr_data::{Catalog, DistanceTable, Instance};

/// Borrowed catalogs and distances shared by every replay.
///
/// `SimContext` is `Copy` and `Sync`: the parallel expander hands the same
/// context to every worker without locking.
#[derive(Clone, Copy)]
pub struct SimContext<'a> {
    pub catalog:   &'a Catalog,
    pub distances: &'a DistanceTable,
}

impl<'a> SimContext<'a> {
    pub fn new(catalog: &'a Catalog, distances: &'a DistanceTable) -> Self {
        Self { catalog, distances }
    }
}

impl<'a> From<&'a Instance> for SimContext<'a> {
    fn from(instance: &'a Instance) -> Self {
        Self::new(&instance.catalog, &instance.distances)
    }
}
