//! The `HeatSim` engine and its day loop.

use log::{debug, info};

use hs_agent::{
    HealthStatus, PopulationGenerator, PopulationSummary, Resident, ResidentRngs, ResidentStore,
    TierBreakdown,
};
use hs_core::{Day, ResidentRng, SimClock, SimConfig, SimRng};
use hs_intervention::{map_interventions, EffectMap, InterventionSet};
use hs_spatial::ResidentIndex;

use crate::weather::{check_profile, seasonal_profile, weather_rng};
use crate::{
    DailyOutcomes, DayRecord, NoopObserver, ScenarioResult, SimError, SimObserver, SimResult,
    VulnerableResident,
};

/// Probability that a newly ill resident visits the ER.
const ILLNESS_ER_P: f64 = 0.1;
/// Probability that a newly severe case is fatal.
const SEVERE_DEATH_P: f64 = 0.05;
/// Scenario progress is logged at this interval.
const PROGRESS_INTERVAL_DAYS: usize = 30;

// ── HeatSim ───────────────────────────────────────────────────────────────────

/// The urban heat simulation engine.
///
/// Owns the population, its per-resident RNGs, the spatial index, the clock,
/// and the append-only day history.  Lifecycle:
///
/// 1. [`HeatSim::new`] / [`SimBuilder`][crate::SimBuilder]: configured, empty.
/// 2. [`generate_population`](Self::generate_population): population, index
///    and RNGs built from the seed; clock and history reset.
/// 3. [`advance_day`](Self::advance_day) /
///    [`run_scenario`](Self::run_scenario): days are simulated and recorded.
///
/// Each call to `advance_day` follows four steps:
///
/// 1. **Map**: interventions → per-resident [`EffectMap`].
/// 2. **Update**: every living resident applies its daily rule, drawing from
///    its own RNG (on Rayon with the `parallel` feature).
/// 3. **Tally**: status transitions into heat illness or severe illness are
///    counted; ER visits and deaths are drawn from the same RNG.
/// 4. **Record**: a [`DayRecord`] is appended and the clock advances.
pub struct HeatSim {
    config:    SimConfig,
    clock:     SimClock,
    residents: ResidentStore,
    rngs:      ResidentRngs,
    index:     ResidentIndex,
    history:   Vec<DayRecord>,
    weather:   SimRng,
    generated: bool,
}

impl HeatSim {
    /// An engine for `population` residents with the default (Phoenix)
    /// configuration.
    pub fn new(population: usize) -> SimResult<Self> {
        Self::from_config(SimConfig::with_population(population))
    }

    /// An engine for an arbitrary configuration.  The configuration is
    /// validated here; no population exists until
    /// [`generate_population`](Self::generate_population) is called.
    pub fn from_config(config: SimConfig) -> SimResult<Self> {
        config.validate()?;
        let weather = weather_rng(config.seed);
        Ok(Self {
            config,
            clock:     SimClock::new(),
            residents: ResidentStore::default(),
            rngs:      ResidentRngs::default(),
            index:     ResidentIndex::empty(),
            history:   Vec::new(),
            weather,
            generated: false,
        })
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn residents(&self) -> &ResidentStore {
        &self.residents
    }

    pub fn index(&self) -> &ResidentIndex {
        &self.index
    }

    /// Every day simulated since the last population generation.
    pub fn history(&self) -> &[DayRecord] {
        &self.history
    }

    pub fn current_day(&self) -> Day {
        self.clock.current_day
    }

    pub fn is_generated(&self) -> bool {
        self.generated
    }

    pub fn tier_breakdown(&self) -> TierBreakdown {
        self.residents.tier_breakdown()
    }

    /// Vulnerability headline counts for the current population.
    pub fn population_summary(&self) -> PopulationSummary {
        self.residents.summary()
    }

    // ── Population ────────────────────────────────────────────────────────

    /// Sample the synthetic population and build its spatial index.
    ///
    /// Calling this again discards all state (residents, RNGs, index, clock,
    /// history, weather stream) and regenerates it from the seed, so the
    /// result is identical to a fresh engine's.
    pub fn generate_population(&mut self) -> SimResult<()> {
        let (residents, rngs) = PopulationGenerator::new(&self.config).generate()?;
        let index = ResidentIndex::build(residents.iter().map(|r| (r.id(), r.location())));

        self.residents = residents;
        self.rngs = rngs;
        self.index = index;
        self.clock.reset();
        self.history.clear();
        self.weather = weather_rng(self.config.seed);
        self.generated = true;
        Ok(())
    }

    // ── Day loop ──────────────────────────────────────────────────────────

    /// Simulate one day at `max_temp_f` with `interventions` in place.
    ///
    /// Returns the day's tally; the same tally is appended to the history.
    pub fn advance_day(&mut self, max_temp_f: f64, interventions: &InterventionSet) -> SimResult<DailyOutcomes> {
        self.ensure_generated()?;
        check_profile(&[max_temp_f])?;
        let effects = map_interventions(interventions, &self.index)?;
        Ok(self.step(max_temp_f, &effects, interventions.len()).outcomes)
    }

    /// Run a scenario of `days` days.  See
    /// [`run_scenario_with`](Self::run_scenario_with).
    pub fn run_scenario(
        &mut self,
        days:          u32,
        temperatures:  Option<&[f64]>,
        interventions: &InterventionSet,
    ) -> SimResult<ScenarioResult> {
        self.run_scenario_with(days, temperatures, interventions, &mut NoopObserver)
    }

    /// Run a scenario, reporting each day to `observer`.
    ///
    /// Without `temperatures` a seasonal profile is synthesized starting at the
    /// current day.  A supplied profile is used as-is and limits the run to
    /// `min(days, temperatures.len())` days.  Interventions are mapped once
    /// and stay fixed for the whole run.
    ///
    /// The result carries the engine's full history since the population was
    /// generated, including days from earlier runs or `advance_day` calls, and
    /// totals summed over that history.
    ///
    /// All inputs are checked before the first day is simulated; on error the
    /// engine is unchanged.
    pub fn run_scenario_with<O: SimObserver>(
        &mut self,
        days:          u32,
        temperatures:  Option<&[f64]>,
        interventions: &InterventionSet,
        observer:      &mut O,
    ) -> SimResult<ScenarioResult> {
        self.ensure_generated()?;
        let effects = map_interventions(interventions, &self.index)?;

        let synthesized;
        let profile: &[f64] = match temperatures {
            Some(t) => &t[..t.len().min(days as usize)],
            None => {
                synthesized = seasonal_profile(self.clock.current_day, days, &mut self.weather)?;
                &synthesized
            }
        };
        check_profile(profile)?;

        let active = interventions.len();
        info!(
            "running {}-day scenario with {} intervention(s) reaching {} residents",
            profile.len(),
            active,
            effects.affected_count()
        );

        let mut so_far = DailyOutcomes::default();
        for (i, &temp) in profile.iter().enumerate() {
            observer.on_day_start(self.clock.current_day, temp);
            let record = self.step(temp, &effects, active);
            observer.on_day_end(&record, &self.residents);
            so_far += record.outcomes;

            if (i + 1) % PROGRESS_INTERVAL_DAYS == 0 {
                info!(
                    "day {}/{}: {} illness, {} severe, {} deaths so far",
                    i + 1,
                    profile.len(),
                    so_far.heat_illness,
                    so_far.severe_heat_illness,
                    so_far.deaths
                );
            }
        }

        let totals = self.history.iter().map(|r| r.outcomes).sum();
        let result = ScenarioResult {
            totals,
            history: self.history.clone(),
            interventions: interventions.names(),
        };
        info!(
            "scenario complete: {} illness, {} severe, {} ER visits, {} deaths",
            totals.heat_illness, totals.severe_heat_illness, totals.er_visits, totals.deaths
        );
        observer.on_scenario_end(&result);
        Ok(result)
    }

    /// Residents with vulnerability strictly above `threshold`, in id order.
    pub fn query_vulnerable(&self, threshold: f64) -> Vec<VulnerableResident> {
        self.residents
            .iter()
            .filter(|r| r.vulnerability() > threshold)
            .map(VulnerableResident::from)
            .collect()
    }

    // ── Internals ─────────────────────────────────────────────────────────

    fn ensure_generated(&self) -> SimResult<()> {
        if self.generated {
            Ok(())
        } else {
            Err(SimError::PopulationNotGenerated)
        }
    }

    /// Simulate one already-validated day and record it.
    fn step(&mut self, max_temp_f: f64, effects: &EffectMap, active: usize) -> DayRecord {
        let day = self.clock.current_day;

        // Explicit field borrows so the borrow checker sees disjoint access.
        let residents = self.residents.residents_mut();
        let rngs = self.rngs.inner.as_mut_slice();

        #[cfg(not(feature = "parallel"))]
        let outcomes: DailyOutcomes = residents
            .iter_mut()
            .zip(rngs.iter_mut())
            .map(|(resident, rng)| update_resident(resident, rng, max_temp_f, effects))
            .sum();

        #[cfg(feature = "parallel")]
        let outcomes: DailyOutcomes = {
            use rayon::prelude::*;
            residents
                .par_iter_mut()
                .zip(rngs.par_iter_mut())
                .map(|(resident, rng)| update_resident(resident, rng, max_temp_f, effects))
                .sum()
        };

        let record = DayRecord {
            day,
            max_temp_f,
            outcomes,
            active_interventions: active,
        };
        debug!(
            "{day}: {max_temp_f:.1}°F, {} illness, {} severe, {} ER, {} deaths",
            outcomes.heat_illness, outcomes.severe_heat_illness, outcomes.er_visits, outcomes.deaths
        );

        self.history.push(record);
        self.clock.advance();
        record
    }
}

/// Apply the daily rule to one resident and tally the transitions it caused.
///
/// A resident that falls from below heat illness straight to severe in one
/// day counts only as severe.
pub(crate) fn update_resident(
    resident:   &mut Resident,
    rng:        &mut ResidentRng,
    max_temp_f: f64,
    effects:    &EffectMap,
) -> DailyOutcomes {
    let before = resident.status();
    if before.is_dead() {
        return DailyOutcomes::default();
    }

    resident.update_daily(max_temp_f, effects.effects_for(resident.id()), rng);
    // Drawn for every living resident so the stream stays aligned across runs.
    let er_draw = rng.unit();
    let death_draw = rng.unit();

    let mut out = DailyOutcomes::default();
    match resident.status() {
        HealthStatus::HeatIllness if before < HealthStatus::HeatIllness => {
            out.heat_illness += 1;
            if er_draw < ILLNESS_ER_P {
                out.er_visits += 1;
            }
        }
        HealthStatus::Severe if before < HealthStatus::Severe => {
            out.severe_heat_illness += 1;
            out.er_visits += 1;
            if death_draw < SEVERE_DEATH_P {
                out.deaths += 1;
                resident.mark_dead();
            }
        }
        _ => {}
    }
    out
}
