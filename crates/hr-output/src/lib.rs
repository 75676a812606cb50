//! `hr-output` — writers for evaluation results.
//!
//! | Writer                      | Output                                          |
//! |-----------------------------|-------------------------------------------------|
//! | [`CsvLegWriter`]            | expanded legs, one row per leg (13 columns)     |
//! | [`write_assignments_csv`]   | normalized submission (`hero_id,object_id`)     |
//! | [`write_timeline_json`]     | legs projected on a continuous clock, as JSON   |
//!
//! # Usage
//!
//! ```rust,ignore
//! use hr_output::{CsvLegWriter, LegWriter};
//!
//! let mut w = CsvLegWriter::from_path(Path::new("expanded.csv"))?;
//! w.write_legs(&eval.legs)?;
//! w.finish()?;
//! ```

pub mod csv;
pub mod error;
pub mod timeline;
pub mod writer;


pub use crate::csv::{CsvLegWriter, LEG_COLUMNS, write_assignments_csv};
pub use error::{OutputError, OutputResult};
pub use timeline::{Timeline, TimelineEntry, build_timeline, write_timeline_json};
pub use writer::LegWriter;
