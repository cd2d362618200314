//! Baseline vs. intervention scenario comparison.

use log::info;

use hs_core::{Day, SimConfig};
use hs_intervention::InterventionSet;

use crate::weather::{check_profile, seasonal_profile, weather_rng};
use crate::{HeatSim, ScenarioResult, SimResult};

/// Dollar value assigned to one death prevented when computing return on
/// investment.
pub const VALUE_OF_STATISTICAL_LIFE: f64 = 2_500_000.0;

/// Outcome of running the same days with and without an intervention set.
///
/// "Prevented" counts are baseline minus intervention and can be negative
/// when sampling noise outweighs the interventions' effect.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScenarioComparison {
    pub baseline:             ScenarioResult,
    pub intervention:         ScenarioResult,
    pub deaths_prevented:     i64,
    pub er_visits_prevented:  i64,
    pub illnesses_prevented:  i64,
    /// Total implementation cost of the intervention set, in dollars.
    pub total_cost:           f64,
    /// `total_cost / max(deaths_prevented, 1)`.
    pub cost_per_death_prevented: f64,
    /// Value of the lives saved as a percentage of `total_cost`.  0 unless
    /// deaths were prevented at a positive cost.
    pub roi_percent:          f64,
}

impl ScenarioComparison {
    /// Derive the prevented counts from two finished runs over the same days.
    pub fn new(baseline: ScenarioResult, intervention: ScenarioResult, total_cost: f64) -> Self {
        let diff = |b: u64, i: u64| b as i64 - i as i64;
        let (b, i) = (baseline.totals, intervention.totals);
        let deaths_prevented = diff(b.deaths, i.deaths);
        Self {
            deaths_prevented,
            er_visits_prevented: diff(b.er_visits, i.er_visits),
            illnesses_prevented: diff(
                b.heat_illness + b.severe_heat_illness,
                i.heat_illness + i.severe_heat_illness,
            ),
            total_cost,
            cost_per_death_prevented: total_cost / deaths_prevented.max(1) as f64,
            roi_percent: roi_percent(deaths_prevented, total_cost),
            baseline,
            intervention,
        }
    }
}

fn roi_percent(deaths_prevented: i64, total_cost: f64) -> f64 {
    if deaths_prevented <= 0 || total_cost <= 0.0 {
        return 0.0;
    }
    deaths_prevented as f64 * VALUE_OF_STATISTICAL_LIFE / total_cost * 100.0
}

/// Run a baseline engine and an intervention engine built from `config` over
/// one shared temperature profile.
///
/// Both engines generate their population from the same seed, so residents
/// match one-to-one.  Without `temperatures` a seasonal profile starting at
/// day 0 is synthesized from the seed.  With the `parallel` feature the two
/// engines run concurrently.
pub fn compare_scenarios(
    config:        &SimConfig,
    days:          u32,
    temperatures:  Option<&[f64]>,
    interventions: &InterventionSet,
) -> SimResult<ScenarioComparison> {
    let profile = match temperatures {
        Some(t) => t[..t.len().min(days as usize)].to_vec(),
        None => seasonal_profile(Day::ZERO, days, &mut weather_rng(config.seed))?,
    };
    check_profile(&profile)?;

    let mut baseline = HeatSim::from_config(config.clone())?;
    let mut treated = HeatSim::from_config(config.clone())?;

    let run = |sim: &mut HeatSim, set: &InterventionSet| -> SimResult<ScenarioResult> {
        sim.generate_population()?;
        sim.run_scenario(profile.len() as u32, Some(&profile), set)
    };
    let none = InterventionSet::none();

    #[cfg(not(feature = "parallel"))]
    let (base, with) = (run(&mut baseline, &none), run(&mut treated, interventions));

    #[cfg(feature = "parallel")]
    let (base, with) = rayon::join(|| run(&mut baseline, &none), || run(&mut treated, interventions));

    let comparison = ScenarioComparison::new(base?, with?, interventions.total_cost());
    info!(
        "comparison: {} deaths, {} ER visits, {} illnesses prevented; ${:.0} per death prevented, ROI {:.0}%",
        comparison.deaths_prevented,
        comparison.er_visits_prevented,
        comparison.illnesses_prevented,
        comparison.cost_per_death_prevented,
        comparison.roi_percent
    );
    Ok(comparison)
}
