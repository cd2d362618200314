//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `daily_outcomes.csv`
//! - `vulnerable_residents.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{DailyOutcomeRow, OutputResult, VulnerableRow};

pub const DAILY_OUTCOMES_FILE: &str = "daily_outcomes.csv";
pub const VULNERABLE_RESIDENTS_FILE: &str = "vulnerable_residents.csv";

/// Writes scenario output to two CSV files.
pub struct CsvWriter {
    days:       Writer<File>,
    vulnerable: Writer<File>,
}

impl CsvWriter {
    /// Create the two CSV files in `dir` (truncating existing ones) and write
    /// the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        std::fs::create_dir_all(dir)?;

        let mut days = Writer::from_path(dir.join(DAILY_OUTCOMES_FILE))?;
        days.write_record([
            "scenario",
            "day",
            "max_temp_f",
            "heat_illness",
            "severe_heat_illness",
            "er_visits",
            "deaths",
            "active_interventions",
        ])?;

        let mut vulnerable = Writer::from_path(dir.join(VULNERABLE_RESIDENTS_FILE))?;
        vulnerable.write_record([
            "resident_id",
            "lat",
            "lon",
            "vulnerability",
            "age",
            "income",
            "has_ac",
            "profile",
        ])?;

        Ok(Self { days, vulnerable })
    }
}

impl OutputWriter for CsvWriter {
    fn write_day(&mut self, row: &DailyOutcomeRow) -> OutputResult<()> {
        self.days.write_record(&[
            row.scenario.clone(),
            row.day.to_string(),
            format!("{:.2}", row.max_temp_f),
            row.heat_illness.to_string(),
            row.severe_heat_illness.to_string(),
            row.er_visits.to_string(),
            row.deaths.to_string(),
            row.active_interventions.to_string(),
        ])?;
        Ok(())
    }

    fn write_vulnerable(&mut self, rows: &[VulnerableRow]) -> OutputResult<()> {
        for row in rows {
            self.vulnerable.write_record(&[
                row.resident_id.to_string(),
                format!("{:.6}", row.lat),
                format!("{:.6}", row.lon),
                format!("{:.1}", row.vulnerability),
                row.age.to_string(),
                format!("{:.0}", row.income),
                (row.has_ac as u8).to_string(),
                row.profile.to_owned(),
            ])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        self.days.flush()?;
        self.vulnerable.flush()?;
        Ok(())
    }
}
