//! `hr-data` — immutable reference data for the heroes routing evaluator.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                 |
//! |---------------|----------------------------------------------------------|
//! | [`catalog`]   | `Hero`, `Object`, `Catalog`                              |
//! | [`distance`]  | `DistanceTable` — depot and object-pair travel costs     |
//! | [`loader`]    | CSV loaders for the four input files, `load_instance_dir`|
//! | [`error`]     | `DataError`, `DataResult<T>`                             |
//!
//! Everything here is built once at load time and never mutated afterwards.
//! The simulator borrows it by shared reference, so a single [`Instance`]
//! can back any number of concurrent replays.

pub mod catalog;
pub mod distance;
pub mod error;
pub mod loader;

#[cfg(test)]
mod tests;

pub use catalog::{Catalog, Hero, Object};
pub use distance::DistanceTable;
pub use error::{DataError, DataResult};
pub use loader::{
    load_depot_distances_reader, load_distance_matrix_reader, load_heroes_reader,
    load_instance_dir, load_objects_reader,
};

/// A fully loaded problem instance: catalogs plus travel costs.
#[derive(Debug, Clone)]
pub struct Instance {
    pub catalog:   Catalog,
    pub distances: DistanceTable,
}
