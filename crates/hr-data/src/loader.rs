//! CSV loaders for the four instance files.
//!
//! # CSV formats
//!
//! ```csv
//! # data_heroes.csv
//! hero_id,move_points
//! 1,2000
//!
//! # data_objects.csv
//! object_id,day_open,reward
//! 1,1,500
//!
//! # dist_start.csv
//! object_id,dist_start
//! 1,300
//! ```
//!
//! `dist_objects.csv` is a square matrix with one header row naming the
//! columns (the names themselves are ignored) followed by one row per object:
//!
//! ```csv
//! object_1,object_2,object_3
//! 0,120,340
//! 120,0,90
//! 340,90,0
//! ```
//!
//! Every `*_reader` function accepts any `Read` source; tests pass a
//! `std::io::Cursor`.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use log::info;
use serde::Deserialize;

use hr_core::{Day, HeroId, HrError, MovePoints, ObjectId, Reward};

use crate::{Catalog, DataError, DataResult, DistanceTable, Hero, Instance, Object};

pub const HEROES_FILE:         &str = "data_heroes.csv";
pub const OBJECTS_FILE:        &str = "data_objects.csv";
pub const DEPOT_DISTANCE_FILE: &str = "dist_start.csv";
pub const DISTANCE_FILE:       &str = "dist_objects.csv";

// ── CSV records ───────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct HeroRecord {
    hero_id:     u32,
    move_points: MovePoints,
}

#[derive(Deserialize)]
struct ObjectRecord {
    object_id: u32,
    day_open:  Day,
    reward:    Reward,
}

#[derive(Deserialize)]
struct DepotDistanceRecord {
    object_id:  u32,
    dist_start: MovePoints,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load `hero_id,move_points` rows.
pub fn load_heroes_reader<R: Read>(reader: R) -> DataResult<Vec<Hero>> {
    Ok(deserialize_all::<HeroRecord, _>(reader)?
        .into_iter()
        .map(|r| Hero { id: HeroId(r.hero_id), move_points: r.move_points })
        .collect())
}

/// Load `object_id,day_open,reward` rows.
pub fn load_objects_reader<R: Read>(reader: R) -> DataResult<Vec<Object>> {
    deserialize_all::<ObjectRecord, _>(reader)?
        .into_iter()
        .map(|r| {
            if r.day_open == 0 {
                return Err(DataError::Parse(format!(
                    "object {}: day_open must be at least 1",
                    r.object_id
                )));
            }
            Ok(Object { id: ObjectId(r.object_id), day_open: r.day_open, reward: r.reward })
        })
        .collect()
}

/// Load `object_id,dist_start` rows.
pub fn load_depot_distances_reader<R: Read>(reader: R) -> DataResult<Vec<(ObjectId, MovePoints)>> {
    Ok(deserialize_all::<DepotDistanceRecord, _>(reader)?
        .into_iter()
        .map(|r| (ObjectId(r.object_id), r.dist_start))
        .collect())
}

/// Load the square object-to-object matrix.
///
/// Returns `(size, row_major_cells)`.  Every row must have as many cells as
/// the header has columns.
pub fn load_distance_matrix_reader<R: Read>(reader: R) -> DataResult<(usize, Vec<MovePoints>)> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(reader);
    let size = csv_reader
        .headers()
        .map_err(|e| DataError::Parse(e.to_string()))?
        .len();

    let mut cells: Vec<MovePoints> = Vec::with_capacity(size * size);
    for (row, result) in csv_reader.records().enumerate() {
        let record = result.map_err(|e| DataError::Parse(e.to_string()))?;
        if record.len() != size {
            return Err(DataError::MatrixShape { row, expected: size, got: record.len() });
        }
        for (col, field) in record.iter().enumerate() {
            cells.push(parse_cell(field).ok_or_else(|| {
                DataError::Parse(format!("distance matrix cell ({row}, {col}): invalid integer {field:?}"))
            })?);
        }
    }

    Ok((size, cells))
}

/// Load all four files from `dir` using their canonical names.
pub fn load_instance_dir(dir: &Path) -> DataResult<Instance> {
    if !dir.is_dir() {
        return Err(HrError::Config(format!("data directory {} does not exist", dir.display())).into());
    }

    let heroes  = load_heroes_reader(File::open(dir.join(HEROES_FILE))?)?;
    let objects = load_objects_reader(File::open(dir.join(OBJECTS_FILE))?)?;
    let depot   = load_depot_distances_reader(File::open(dir.join(DEPOT_DISTANCE_FILE))?)?;
    let (size, matrix) = load_distance_matrix_reader(File::open(dir.join(DISTANCE_FILE))?)?;

    let catalog = Catalog::new(heroes, objects);
    let distances = DistanceTable::new(depot, size, matrix)?;
    info!(
        "loaded {} heroes, {} objects, {size}x{size} distance matrix from {}",
        catalog.hero_count(),
        catalog.object_count(),
        dir.display()
    );

    Ok(Instance { catalog, distances })
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn deserialize_all<T, R>(reader: R) -> DataResult<Vec<T>>
where
    T: for<'de> Deserialize<'de>,
    R: Read,
{
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    csv_reader
        .deserialize::<T>()
        .map(|r| r.map_err(|e| DataError::Parse(e.to_string())))
        .collect()
}

/// Integer cell; whole-number floats such as `"120.0"` are accepted too.
fn parse_cell(field: &str) -> Option<MovePoints> {
    let field = field.trim();
    field.parse::<MovePoints>().ok().or_else(|| {
        field
            .parse::<f64>()
            .ok()
            .filter(|f| f.is_finite() && f.fract() == 0.0)
            .map(|f| f as MovePoints)
    })
}
