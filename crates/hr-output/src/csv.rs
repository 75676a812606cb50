//! CSV output backend.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use csv::Writer;

use hr_sim::{Assignment, Leg};

use crate::writer::LegWriter;
use crate::OutputResult;

/// Column order of the expanded-legs CSV.
pub const LEG_COLUMNS: [&str; 13] = [
    "hero_id",
    "object_id_from",
    "object_id_to",
    "day_start",
    "day_arrive",
    "day_leave",
    "move_points_start",
    "move_points_arrive",
    "move_points_burned",
    "move_points_leave",
    "is_earlier",
    "is_late",
    "reward",
];

/// Writes legs to a CSV sink, header first.
pub struct CsvLegWriter<W: Write = File> {
    out:      Writer<W>,
    finished: bool,
}

impl CsvLegWriter<File> {
    /// Create (or truncate) `path` and write the header row.
    pub fn from_path(path: &Path) -> OutputResult<Self> {
        Self::from_writer(File::create(path)?)
    }
}

impl<W: Write> CsvLegWriter<W> {
    pub fn from_writer(inner: W) -> OutputResult<Self> {
        let mut out = Writer::from_writer(inner);
        out.write_record(LEG_COLUMNS)?;
        Ok(Self { out, finished: false })
    }

    /// Flush and return the inner sink.
    pub fn into_inner(mut self) -> OutputResult<W> {
        self.out.flush()?;
        self.out.into_inner().map_err(|e| e.into_error().into())
    }
}

impl<W: Write> LegWriter for CsvLegWriter<W> {
    fn write_legs(&mut self, legs: &[Leg]) -> OutputResult<()> {
        for leg in legs {
            self.out.write_record(&[
                leg.hero_id.get().to_string(),
                leg.object_id_from.get().to_string(),
                leg.object_id_to.get().to_string(),
                leg.day_start.to_string(),
                leg.day_arrive.to_string(),
                leg.day_leave.to_string(),
                leg.move_points_start.to_string(),
                leg.move_points_arrive.to_string(),
                leg.move_points_burned.to_string(),
                leg.move_points_leave.to_string(),
                leg.is_earlier.to_string(),
                leg.is_late.to_string(),
                leg.reward.to_string(),
            ])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.out.flush()?;
        Ok(())
    }
}

/// Write a normalized submission as `hero_id,object_id` rows.
pub fn write_assignments_csv(path: &Path, assignments: &[Assignment]) -> OutputResult<()> {
    let mut out = Writer::from_path(path)?;
    out.write_record(["hero_id", "object_id"])?;
    for a in assignments {
        out.write_record(&[a.hero.get().to_string(), a.object.get().to_string()])?;
    }
    out.flush()?;
    Ok(())
}
