//! Submission reading and normalization.
//!
//! # CSV format
//!
//! Any CSV with a header containing `hero_id` and `object_id`.  Other
//! columns are ignored and column order is free.
//!
//! ```csv
//! hero_id,object_id
//! 1,17
//! 1,4
//! 2,17
//! ```
//!
//! Ids are read as signed integers so that negative or oversized values are
//! filtered by [`normalize`] instead of failing the whole submission.  A blank
//! cell reads as a missing id and the row is filtered the same way.  Numeric
//! cells written as floats (`1.0`) are truncated toward zero; anything else
//! that is not a number fails the read.
//!
//! # Normalization
//!
//! 1. Drop rows whose hero id is missing or outside `1..=100`, or whose
//!    object id is missing or outside `1..=700`.
//! 2. Keep only the first row (by `order`) claiming each object; later
//!    claims, even by other heroes, are discarded.
//! 3. Return the survivors in `order`.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use log::info;
use rustc_hash::FxHashSet;
use serde::Deserialize;

use hr_core::rules::{hero_id_in_range, object_id_in_range};
use hr_core::{HeroId, ObjectId};

use crate::{SubmissionError, SubmissionResult};

// ── Row types ─────────────────────────────────────────────────────────────────

/// One submission row as read, before any validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawRow {
    /// Position in the submission; the tie-break for duplicate claims.
    pub order:     usize,
    /// `None` for a blank cell.
    pub hero_id:   Option<i64>,
    pub object_id: Option<i64>,
}

impl RawRow {
    /// Number `(hero_id, object_id)` pairs in iteration order.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (i64, i64)>) -> Vec<RawRow> {
        pairs
            .into_iter()
            .enumerate()
            .map(|(order, (hero_id, object_id))| RawRow {
                order,
                hero_id:   Some(hero_id),
                object_id: Some(object_id),
            })
            .collect()
    }
}

/// A validated `(hero, object)` claim.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Assignment {
    pub order:  usize,
    pub hero:   HeroId,
    pub object: ObjectId,
}

impl From<Assignment> for RawRow {
    fn from(a: Assignment) -> Self {
        RawRow {
            order:     a.order,
            hero_id:   Some(i64::from(a.hero.get())),
            object_id: Some(i64::from(a.object.get())),
        }
    }
}

/// Row counts from one [`normalize_with_stats`] call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NormalizeStats {
    pub input:        usize,
    pub out_of_range: usize,
    pub duplicates:   usize,
    pub kept:         usize,
}

#[derive(Deserialize)]
struct SubmissionRecord {
    hero_id:   Option<String>,
    object_id: Option<String>,
}

// ── Reading ───────────────────────────────────────────────────────────────────

/// Read a submission CSV file.
pub fn read_submission_csv(path: &Path) -> SubmissionResult<Vec<RawRow>> {
    let file = File::open(path).map_err(SubmissionError::Io)?;
    read_submission_reader(file)
}

/// Like [`read_submission_csv`] but accepts any `Read` source.
///
/// An input with no rows at all (not even a header) is an empty submission.
/// A header lacking either required column is an error.
pub fn read_submission_reader<R: Read>(reader: R) -> SubmissionResult<Vec<RawRow>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = csv_reader
        .headers()
        .map_err(|e| SubmissionError::Parse(e.to_string()))?
        .clone();
    if headers.is_empty() {
        return Ok(Vec::new());
    }
    for column in ["hero_id", "object_id"] {
        if !headers.iter().any(|h| h == column) {
            return Err(SubmissionError::MissingColumn(column));
        }
    }

    csv_reader
        .deserialize::<SubmissionRecord>()
        .enumerate()
        .map(|(order, result)| {
            let r = result.map_err(|e| SubmissionError::Parse(e.to_string()))?;
            Ok(RawRow {
                order,
                hero_id:   parse_id(order, "hero_id", r.hero_id.as_deref())?,
                object_id: parse_id(order, "object_id", r.object_id.as_deref())?,
            })
        })
        .collect()
}

/// A blank cell is `None`.  Integers parse as-is; finite floats are
/// truncated toward zero.
fn parse_id(row: usize, column: &str, field: Option<&str>) -> SubmissionResult<Option<i64>> {
    let Some(field) = field.map(str::trim).filter(|f| !f.is_empty()) else {
        return Ok(None);
    };
    if let Ok(n) = field.parse::<i64>() {
        return Ok(Some(n));
    }
    field
        .parse::<f64>()
        .ok()
        .filter(|f| f.is_finite())
        .map(|f| Some(f.trunc() as i64))
        .ok_or_else(|| SubmissionError::Parse(format!("row {row}, {column}: not a number: {field:?}")))
}

// ── Normalization ─────────────────────────────────────────────────────────────

/// Filter and deduplicate `rows`.  See the module docs for the rules.
pub fn normalize(rows: &[RawRow]) -> Vec<Assignment> {
    let (assignments, stats) = normalize_with_stats(rows);
    if stats.out_of_range > 0 || stats.duplicates > 0 {
        info!(
            "submission: {} rows, {} out of range, {} duplicate claims, {} kept",
            stats.input, stats.out_of_range, stats.duplicates, stats.kept
        );
    }
    assignments
}

/// [`normalize`] plus the counts of what was dropped.
pub fn normalize_with_stats(rows: &[RawRow]) -> (Vec<Assignment>, NormalizeStats) {
    let mut stats = NormalizeStats { input: rows.len(), ..NormalizeStats::default() };

    let mut valid: Vec<Assignment> = rows
        .iter()
        .filter_map(|r| match (r.hero_id, r.object_id) {
            (Some(hero), Some(object)) if hero_id_in_range(hero) && object_id_in_range(object) => {
                Some(Assignment {
                    order:  r.order,
                    hero:   HeroId(hero as u32),
                    object: ObjectId(object as u32),
                })
            }
            _ => {
                stats.out_of_range += 1;
                None
            }
        })
        .collect();

    // Stable: rows sharing an `order` keep their slice order.
    valid.sort_by_key(|a| a.order);

    let mut claimed: FxHashSet<ObjectId> = FxHashSet::default();
    valid.retain(|a| claimed.insert(a.object));

    stats.kept = valid.len();
    stats.duplicates = stats.input - stats.out_of_range - stats.kept;
    (valid, stats)
}
