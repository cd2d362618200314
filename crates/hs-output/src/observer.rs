//! `ScenarioOutputObserver<W>` — bridges `SimObserver` to an `OutputWriter`.

use hs_agent::ResidentStore;
use hs_sim::{DayRecord, ScenarioResult, SimObserver, VulnerableResident};

use crate::row::{DailyOutcomeRow, VulnerableRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that writes one [`DailyOutcomeRow`] per simulated day,
/// labelled with a scenario name, to any [`OutputWriter`].
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  After the scenario returns, check with
/// [`take_error`][Self::take_error].
pub struct ScenarioOutputObserver<W: OutputWriter> {
    writer:     W,
    scenario:   String,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> ScenarioOutputObserver<W> {
    pub fn new(writer: W, scenario: impl Into<String>) -> Self {
        Self {
            writer,
            scenario:   scenario.into(),
            last_error: None,
        }
    }

    /// Write the result of a vulnerable-population query.
    pub fn write_vulnerable(&mut self, residents: &[VulnerableResident]) {
        let rows: Vec<VulnerableRow> = residents.iter().map(VulnerableRow::from).collect();
        let result = self.writer.write_vulnerable(&rows);
        self.store_err(result);
    }

    /// Take the stored write error (if any).
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for ScenarioOutputObserver<W> {
    fn on_day_end(&mut self, record: &DayRecord, _residents: &ResidentStore) {
        let row = DailyOutcomeRow::from_record(&self.scenario, record);
        let result = self.writer.write_day(&row);
        self.store_err(result);
    }

    fn on_scenario_end(&mut self, _result: &ScenarioResult) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
