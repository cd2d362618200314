//! JSON run configuration for the Phoenix demo.
//!
//! Every field is optional; missing fields fall back to [`RunConfig::default`].
//!
//! ```json
//! {
//!   "sim": { "population": 50000, "seed": 7 },
//!   "days": 120,
//!   "interventions": [
//!     { "name": "Maryvale Canopy", "type": "tree_canopy",
//!       "center_lat": 33.49, "center_lon": -112.17, "radius_km": 4.0,
//!       "cost": 3000000, "timeline_months": 24 }
//!   ]
//! }
//! ```

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use hs_core::SimConfig;
use hs_intervention::{Intervention, InterventionSet, InterventionType, TargetArea};

/// One intervention as written in the config file.
#[derive(Clone, Debug, Deserialize)]
pub struct InterventionSpec {
    pub name:            String,
    #[serde(rename = "type")]
    pub kind:            String,
    pub center_lat:      Option<f64>,
    pub center_lon:      Option<f64>,
    pub radius_km:       Option<f64>,
    #[serde(default)]
    pub area_ids:        Vec<String>,
    pub cost:            f64,
    pub timeline_months: u32,
}

impl InterventionSpec {
    fn to_intervention(&self) -> Result<Intervention> {
        let kind: InterventionType = self.kind.parse()?;
        let target = TargetArea::from_parts(
            self.center_lat,
            self.center_lon,
            self.radius_km,
            self.area_ids.iter().cloned(),
        )
        .with_context(|| format!("target of intervention `{}`", self.name))?;
        Ok(Intervention::new(self.name.clone(), kind, target, self.cost, self.timeline_months))
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    pub sim:                     SimConfig,
    pub days:                    u32,
    /// Day of year the temperature profile starts on (152 = June 1).
    pub start_day_of_year:       u32,
    pub vulnerability_threshold: f64,
    pub output_dir:              PathBuf,
    pub interventions:           Vec<InterventionSpec>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            sim:                     SimConfig::with_population(20_000),
            days:                    90,
            start_day_of_year:       152,
            vulnerability_threshold: 60.0,
            output_dir:              PathBuf::from("output/phoenix"),
            interventions:           vec![
                InterventionSpec {
                    name:            "Downtown Cooling Centers".into(),
                    kind:            "cooling_center".into(),
                    center_lat:      Some(33.45),
                    center_lon:      Some(-112.07),
                    radius_km:       Some(2.0),
                    area_ids:        vec![],
                    cost:            500_000.0,
                    timeline_months: 3,
                },
                InterventionSpec {
                    name:            "South Phoenix Tree Initiative".into(),
                    kind:            "tree_canopy".into(),
                    center_lat:      Some(33.40),
                    center_lon:      Some(-112.10),
                    radius_km:       Some(3.0),
                    area_ids:        vec![],
                    cost:            2_000_000.0,
                    timeline_months: 12,
                },
            ],
        }
    }
}

impl RunConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))
    }

    /// Build and validate the intervention set.
    pub fn intervention_set(&self) -> Result<InterventionSet> {
        let items = self
            .interventions
            .iter()
            .map(InterventionSpec::to_intervention)
            .collect::<Result<Vec<_>>>()?;
        Ok(InterventionSet::new(items)?)
    }
}
