//! SQLite output backend (feature `sqlite`).
//!
//! Creates a single `output.db` file in the configured output directory with
//! two tables: `daily_outcomes` and `vulnerable_residents`.

use std::path::Path;

use rusqlite::Connection;

use crate::writer::OutputWriter;
use crate::{DailyOutcomeRow, OutputResult, VulnerableRow};

/// Writes scenario output to an SQLite database.
pub struct SqliteWriter {
    conn: Connection,
}

impl SqliteWriter {
    /// Open (or create) `output.db` in `dir` and initialise the schema.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        std::fs::create_dir_all(dir)?;
        let conn = Connection::open(dir.join("output.db"))?;

        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA synchronous  = NORMAL;
             CREATE TABLE IF NOT EXISTS daily_outcomes (
                 scenario             TEXT    NOT NULL,
                 day                  INTEGER NOT NULL,
                 max_temp_f           REAL    NOT NULL,
                 heat_illness         INTEGER NOT NULL,
                 severe_heat_illness  INTEGER NOT NULL,
                 er_visits            INTEGER NOT NULL,
                 deaths               INTEGER NOT NULL,
                 active_interventions INTEGER NOT NULL,
                 PRIMARY KEY (scenario, day)
             );
             CREATE TABLE IF NOT EXISTS vulnerable_residents (
                 resident_id   INTEGER PRIMARY KEY,
                 lat           REAL    NOT NULL,
                 lon           REAL    NOT NULL,
                 vulnerability REAL    NOT NULL,
                 age           INTEGER NOT NULL,
                 income        REAL    NOT NULL,
                 has_ac        INTEGER NOT NULL,
                 profile       TEXT    NOT NULL
             );",
        )?;

        Ok(Self { conn })
    }
}

impl OutputWriter for SqliteWriter {
    fn write_day(&mut self, row: &DailyOutcomeRow) -> OutputResult<()> {
        self.conn.execute(
            "INSERT OR REPLACE INTO daily_outcomes \
             (scenario, day, max_temp_f, heat_illness, severe_heat_illness, \
              er_visits, deaths, active_interventions) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
            rusqlite::params![
                row.scenario,
                row.day,
                row.max_temp_f,
                row.heat_illness as i64,
                row.severe_heat_illness as i64,
                row.er_visits as i64,
                row.deaths as i64,
                row.active_interventions as i64,
            ],
        )?;
        Ok(())
    }

    fn write_vulnerable(&mut self, rows: &[VulnerableRow]) -> OutputResult<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare_cached(
                "INSERT OR REPLACE INTO vulnerable_residents \
                 (resident_id, lat, lon, vulnerability, age, income, has_ac, profile) \
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
            )?;
            for row in rows {
                stmt.execute(rusqlite::params![
                    row.resident_id,
                    row.lat,
                    row.lon,
                    row.vulnerability,
                    row.age,
                    row.income,
                    row.has_ac as i64,
                    row.profile,
                ])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        self.conn.execute_batch("PRAGMA wal_checkpoint(TRUNCATE);")?;
        Ok(())
    }
}
