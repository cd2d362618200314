//! Integration tests for hs-output.

#[cfg(test)]
mod helpers {
    use hs_core::Day;
    use hs_sim::{DailyOutcomes, DayRecord};

    use crate::row::{DailyOutcomeRow, VulnerableRow};

    pub fn tmp() -> tempfile::TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    pub fn day_row(scenario: &str, day: u32) -> DailyOutcomeRow {
        let record = DayRecord {
            day:                  Day(day),
            max_temp_f:           112.5,
            outcomes:             DailyOutcomes { heat_illness: 4, severe_heat_illness: 2, deaths: 1, er_visits: 3 },
            active_interventions: 2,
        };
        DailyOutcomeRow::from_record(scenario, &record)
    }

    pub fn vulnerable_row(resident_id: u32) -> VulnerableRow {
        VulnerableRow {
            resident_id,
            lat:           33.45,
            lon:           -112.07,
            vulnerability: 72.5,
            age:           81,
            income:        18_000.0,
            has_ac:        false,
            profile:       "high_risk",
        }
    }
}

// ── CSV ───────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod csv_tests {
    use super::helpers::{day_row, tmp, vulnerable_row};
    use crate::csv::{CsvWriter, DAILY_OUTCOMES_FILE, VULNERABLE_RESIDENTS_FILE};
    use crate::writer::OutputWriter;

    #[test]
    fn csv_files_created() {
        let dir = tmp();
        let _w = CsvWriter::new(dir.path()).unwrap();
        assert!(dir.path().join(DAILY_OUTCOMES_FILE).exists());
        assert!(dir.path().join(VULNERABLE_RESIDENTS_FILE).exists());
    }

    #[test]
    fn creates_missing_directory() {
        let dir = tmp();
        let nested = dir.path().join("runs").join("phoenix");
        let _w = CsvWriter::new(&nested).unwrap();
        assert!(nested.join(DAILY_OUTCOMES_FILE).exists());
    }

    #[test]
    fn csv_headers_correct() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join(DAILY_OUTCOMES_FILE)).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(
            headers,
            ["scenario", "day", "max_temp_f", "heat_illness", "severe_heat_illness", "er_visits", "deaths", "active_interventions"]
        );

        let mut rdr = csv::Reader::from_path(dir.path().join(VULNERABLE_RESIDENTS_FILE)).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers, ["resident_id", "lat", "lon", "vulnerability", "age", "income", "has_ac", "profile"]);
    }

    #[test]
    fn day_rows_written() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_day(&day_row("baseline", 0)).unwrap();
        w.write_day(&day_row("baseline", 1)).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join(DAILY_OUTCOMES_FILE)).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[1][0], "baseline");
        assert_eq!(&rows[1][1], "1");
        assert_eq!(&rows[1][2], "112.50");
        assert_eq!(&rows[1][3], "4"); // heat_illness
        assert_eq!(&rows[1][6], "1"); // deaths
        assert_eq!(&rows[1][7], "2"); // active_interventions
    }

    #[test]
    fn vulnerable_rows_written() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_vulnerable(&[vulnerable_row(7), vulnerable_row(9)]).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join(VULNERABLE_RESIDENTS_FILE)).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[0][0], "7");
        assert_eq!(&rows[0][3], "72.5");
        assert_eq!(&rows[0][6], "0"); // has_ac
        assert_eq!(&rows[0][7], "high_risk");
    }

    #[test]
    fn finish_is_repeatable() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.write_day(&day_row("late", 0)).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join(DAILY_OUTCOMES_FILE)).unwrap();
        assert_eq!(rdr.records().count(), 1);
    }

    #[test]
    fn empty_vulnerable_batch_ok() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_vulnerable(&[]).unwrap();
    }
}

// ── Observer ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod observer_tests {
    use hs_intervention::{Intervention, InterventionSet, InterventionType, TargetArea};
    use hs_sim::SimBuilder;

    use super::helpers::tmp;
    use crate::csv::{CsvWriter, DAILY_OUTCOMES_FILE, VULNERABLE_RESIDENTS_FILE};
    use crate::observer::ScenarioOutputObserver;

    #[test]
    fn two_scenarios_share_one_writer() {
        let mut sim = SimBuilder::default().population(200).seed(1).generate(true).build().unwrap();
        let dir = tmp();
        let mut writer = CsvWriter::new(dir.path()).unwrap();

        let mut obs = ScenarioOutputObserver::new(&mut writer, "baseline");
        obs.write_vulnerable(&sim.query_vulnerable(50.0));
        sim.run_scenario_with(4, Some(&[100.0, 105.0, 110.0, 115.0]), &InterventionSet::none(), &mut obs)
            .unwrap();
        assert!(obs.take_error().is_none(), "no write errors expected");

        let centers = InterventionSet::new(vec![Intervention::new(
            "Downtown Cooling Centers",
            InterventionType::CoolingCenter,
            TargetArea::radius(33.45, -112.07, 2.0),
            500_000.0,
            3,
        )])
        .unwrap();
        sim.generate_population().unwrap();
        let mut obs = ScenarioOutputObserver::new(&mut writer, "interventions");
        sim.run_scenario_with(3, Some(&[100.0, 105.0, 110.0]), &centers, &mut obs).unwrap();
        assert!(obs.take_error().is_none());

        let mut rdr = csv::Reader::from_path(dir.path().join(DAILY_OUTCOMES_FILE)).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 7);
        assert_eq!(rows.iter().filter(|r| &r[0] == "baseline").count(), 4);
        assert_eq!(&rows[4][0], "interventions");
        assert_eq!(&rows[4][1], "0");
        assert_eq!(&rows[4][7], "1");

        let expected = sim.query_vulnerable(50.0).len();
        let mut rdr = csv::Reader::from_path(dir.path().join(VULNERABLE_RESIDENTS_FILE)).unwrap();
        assert_eq!(rdr.records().count(), expected);
    }
}

// ── SQLite ────────────────────────────────────────────────────────────────────

#[cfg(all(test, feature = "sqlite"))]
mod sqlite_tests {
    use super::helpers::{day_row, tmp, vulnerable_row};
    use crate::sqlite::SqliteWriter;
    use crate::writer::OutputWriter;

    #[test]
    fn sqlite_db_created() {
        let dir = tmp();
        let _w = SqliteWriter::new(dir.path()).unwrap();
        assert!(dir.path().join("output.db").exists());
    }

    #[test]
    fn sqlite_day_rows() {
        let dir = tmp();
        let mut w = SqliteWriter::new(dir.path()).unwrap();
        w.write_day(&day_row("baseline", 0)).unwrap();
        w.write_day(&day_row("interventions", 0)).unwrap();
        w.finish().unwrap();

        let conn = rusqlite::Connection::open(dir.path().join("output.db")).unwrap();
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM daily_outcomes", [], |r| r.get(0)).unwrap();
        assert_eq!(count, 2);

        let (temp, deaths): (f64, i64) = conn
            .query_row(
                "SELECT max_temp_f, deaths FROM daily_outcomes WHERE scenario = 'baseline' AND day = 0",
                [],
                |r| Ok((r.get(0)?, r.get(1)?)),
            )
            .unwrap();
        assert_eq!(temp, 112.5);
        assert_eq!(deaths, 1);
    }

    #[test]
    fn sqlite_vulnerable_rows() {
        let dir = tmp();
        let mut w = SqliteWriter::new(dir.path()).unwrap();
        w.write_vulnerable(&[vulnerable_row(1), vulnerable_row(2), vulnerable_row(3)]).unwrap();
        // Re-writing the same residents replaces rather than duplicates.
        w.write_vulnerable(&[vulnerable_row(1)]).unwrap();
        w.finish().unwrap();

        let conn = rusqlite::Connection::open(dir.path().join("output.db")).unwrap();
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM vulnerable_residents", [], |r| r.get(0)).unwrap();
        assert_eq!(count, 3);

        let (has_ac, profile): (i64, String) = conn
            .query_row(
                "SELECT has_ac, profile FROM vulnerable_residents WHERE resident_id = 2",
                [],
                |r| Ok((r.get(0)?, r.get(1)?)),
            )
            .unwrap();
        assert_eq!(has_ac, 0);
        assert_eq!(profile, "high_risk");
    }
}
