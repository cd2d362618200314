//! Plain data row types written by output backends.

use hs_sim::{DayRecord, VulnerableResident};

/// One simulated day of one scenario.
#[derive(Debug, Clone, PartialEq)]
pub struct DailyOutcomeRow {
    /// Scenario label, e.g. `"baseline"`.
    pub scenario:             String,
    pub day:                  u32,
    pub max_temp_f:           f64,
    pub heat_illness:         u64,
    pub severe_heat_illness:  u64,
    pub er_visits:            u64,
    pub deaths:               u64,
    pub active_interventions: u64,
}

impl DailyOutcomeRow {
    pub fn from_record(scenario: &str, record: &DayRecord) -> Self {
        let o = record.outcomes;
        Self {
            scenario:             scenario.to_owned(),
            day:                  record.day.0,
            max_temp_f:           record.max_temp_f,
            heat_illness:         o.heat_illness,
            severe_heat_illness:  o.severe_heat_illness,
            er_visits:            o.er_visits,
            deaths:               o.deaths,
            active_interventions: record.active_interventions as u64,
        }
    }
}

/// One resident returned by the vulnerable-population query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VulnerableRow {
    pub resident_id:   u32,
    pub lat:           f64,
    pub lon:           f64,
    pub vulnerability: f64,
    pub age:           u32,
    pub income:        f64,
    pub has_ac:        bool,
    /// Risk tier label (`low_risk` … `extreme_risk`).
    pub profile:       &'static str,
}

impl From<&VulnerableResident> for VulnerableRow {
    fn from(v: &VulnerableResident) -> Self {
        Self {
            resident_id:   v.id.0,
            lat:           v.lat,
            lon:           v.lon,
            vulnerability: v.vulnerability,
            age:           v.age,
            income:        v.income,
            has_ac:        v.has_ac,
            profile:       v.profile.as_str(),
        }
    }
}
