//! The `OutputWriter` trait implemented by all backend writers.

use crate::{DailyOutcomeRow, OutputResult, VulnerableRow};

/// Trait implemented by the CSV and SQLite writers.
///
/// Errors raised while the engine is running are stored by
/// [`ScenarioOutputObserver`](crate::ScenarioOutputObserver) and retrieved
/// with its `take_error`.
pub trait OutputWriter {
    /// Write one day of one scenario.
    fn write_day(&mut self, row: &DailyOutcomeRow) -> OutputResult<()>;

    /// Write a batch of vulnerable residents.
    fn write_vulnerable(&mut self, rows: &[VulnerableRow]) -> OutputResult<()>;

    /// Flush everything written so far to disk.
    ///
    /// Safe to call more than once; the writer stays usable afterwards, so
    /// several scenarios can share one writer.
    fn finish(&mut self) -> OutputResult<()>;
}

impl<W: OutputWriter + ?Sized> OutputWriter for &mut W {
    fn write_day(&mut self, row: &DailyOutcomeRow) -> OutputResult<()> {
        (**self).write_day(row)
    }

    fn write_vulnerable(&mut self, rows: &[VulnerableRow]) -> OutputResult<()> {
        (**self).write_vulnerable(rows)
    }

    fn finish(&mut self) -> OutputResult<()> {
        (**self).finish()
    }
}
