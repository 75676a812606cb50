//! The `LegWriter` trait implemented by leg output backends.

use hr_sim::Leg;

use crate::OutputResult;

/// A sink for expanded legs.
pub trait LegWriter {
    /// Write a batch of legs, in order.
    fn write_legs(&mut self, legs: &[Leg]) -> OutputResult<()>;

    /// Flush all underlying handles.
    ///
    /// Idempotent: safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
