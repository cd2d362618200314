//! Unit tests for hs-sim.

use hs_core::SimConfig;
use hs_intervention::{Intervention, InterventionSet, InterventionType, TargetArea};

use crate::{HeatSim, SimBuilder};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn generated(n: usize, seed: u64) -> HeatSim {
    SimBuilder::default()
        .population(n)
        .seed(seed)
        .generate(true)
        .build()
        .unwrap()
}

/// A cooling center at the city center whose 50 km radius covers everyone.
fn citywide_cooling() -> InterventionSet {
    InterventionSet::new(vec![Intervention::new(
        "Citywide Cooling Centers",
        InterventionType::CoolingCenter,
        TargetArea::radius(33.45, -112.07, 50.0),
        500_000.0,
        3,
    )])
    .unwrap()
}

// ── Construction and generation ───────────────────────────────────────────────

#[cfg(test)]
mod generation {
    use hs_core::{CityBounds, Day, GeoPoint};

    use super::*;
    use crate::SimError;

    #[test]
    fn new_engine_has_no_population() {
        let sim = HeatSim::new(100).unwrap();
        assert!(!sim.is_generated());
        assert!(sim.residents().is_empty());
        assert!(sim.index().is_empty());
        assert_eq!(sim.current_day(), Day::ZERO);
    }

    #[test]
    fn generate_builds_population_and_index() {
        let sim = generated(300, 42);
        assert_eq!(sim.residents().len(), 300);
        assert_eq!(sim.index().len(), 300);
        assert_eq!(sim.tier_breakdown().total(), 300);
    }

    #[test]
    fn population_summary_matches_residents() {
        let sim = generated(1_000, 42);
        let s = sim.population_summary();
        let residents = sim.residents();

        assert_eq!(s.total_population, 1_000);
        assert_eq!(s.vulnerable, residents.iter().filter(|r| r.vulnerability() > 50.0).count());
        assert_eq!(s.extreme_vulnerable, residents.iter().filter(|r| r.vulnerability() > 75.0).count());
        assert_eq!(s.without_ac, residents.iter().filter(|r| !r.attributes().has_ac).count());
        assert_eq!(s.elderly, residents.iter().filter(|r| r.attributes().age > 65).count());
        assert_eq!(s.outdoor_workers, residents.iter().filter(|r| r.attributes().works_outdoors).count());
        assert_eq!(s.vulnerable, sim.query_vulnerable(50.0).len());
        assert!((s.percent_vulnerable - s.vulnerable as f64 / 10.0).abs() < 1e-9);
        assert!(s.average_vulnerability > 0.0 && s.average_vulnerability < 100.0);
        assert_eq!(HeatSim::new(10).unwrap().population_summary().total_population, 0);
    }

    #[test]
    fn invalid_city_is_a_config_error() {
        let city = CityBounds { center: GeoPoint::new(40.0, -112.07), ..CityBounds::phoenix() };
        let err = SimBuilder::default().population(10).city(city).build().err().unwrap();
        assert!(matches!(err, SimError::Core(_)));
    }

    #[test]
    fn same_seed_same_population() {
        let a = generated(500, 9);
        let b = generated(500, 9);
        assert_eq!(a.residents().as_slice(), b.residents().as_slice());

        let c = generated(500, 10);
        assert_ne!(a.residents().as_slice(), c.residents().as_slice());
    }

    #[test]
    fn regenerate_resets_state() {
        let mut sim = generated(200, 1);
        let fresh = sim.residents().as_slice().to_vec();
        sim.run_scenario(5, Some(&[120.0; 5]), &InterventionSet::none()).unwrap();
        assert_eq!(sim.history().len(), 5);

        sim.generate_population().unwrap();
        assert!(sim.history().is_empty());
        assert_eq!(sim.current_day(), Day::ZERO);
        assert_eq!(sim.residents().as_slice(), fresh.as_slice());
    }
}

// ── Day loop ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod day_loop {
    use hs_core::Day;

    use super::*;
    use crate::{DailyOutcomes, SimError};

    #[test]
    fn advance_before_generation_fails() {
        let mut sim = HeatSim::new(10).unwrap();
        let err = sim.advance_day(100.0, &InterventionSet::none()).unwrap_err();
        assert!(matches!(err, SimError::PopulationNotGenerated));
    }

    #[test]
    fn non_finite_temperature_rejected_without_side_effects() {
        let mut sim = generated(50, 42);
        for bad in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let err = sim.advance_day(bad, &InterventionSet::none()).unwrap_err();
            assert!(matches!(err, SimError::Config(_)));
        }
        assert!(sim.history().is_empty());
        assert_eq!(sim.current_day(), Day::ZERO);
    }

    #[test]
    fn advance_appends_record_and_ticks_clock() {
        let mut sim = generated(100, 42);
        let out = sim.advance_day(110.0, &citywide_cooling()).unwrap();
        assert_eq!(sim.current_day(), Day(1));
        let record = sim.history()[0];
        assert_eq!(record.day, Day::ZERO);
        assert_eq!(record.max_temp_f, 110.0);
        assert_eq!(record.outcomes, out);
        assert_eq!(record.active_interventions, 1);
    }

    #[test]
    fn mild_weather_is_harmless() {
        let mut sim = generated(1_000, 42);
        let result = sim.run_scenario(10, Some(&[75.0; 10]), &InterventionSet::none()).unwrap();
        assert_eq!(result.totals, DailyOutcomes::default());
        assert_eq!(result.totals.deaths, 0);
        assert!(sim.residents().iter().all(|r| r.exposure_today() == 0.0));
    }

    #[test]
    fn extreme_heat_causes_illness() {
        let mut sim = generated(2_000, 42);
        let result = sim.run_scenario(10, Some(&[118.0; 10]), &InterventionSet::none()).unwrap();
        assert!(result.totals.heat_illness + result.totals.severe_heat_illness > 0);
        assert!(result.totals.deaths <= result.totals.severe_heat_illness);
        assert!(result.totals.er_visits >= result.totals.severe_heat_illness);
    }

    #[test]
    fn deaths_match_dead_residents() {
        let mut sim = generated(2_000, 3);
        let result = sim.run_scenario(60, Some(&[125.0; 60]), &InterventionSet::none()).unwrap();
        assert_eq!(result.totals.deaths as usize, sim.residents().dead_count());
    }

    #[test]
    fn same_seed_same_outcomes() {
        let profile = [100.0, 112.0, 118.0, 121.0, 109.0];
        let mut a = generated(1_000, 5);
        let mut b = generated(1_000, 5);
        let ra = a.run_scenario(5, Some(&profile), &InterventionSet::none()).unwrap();
        let rb = b.run_scenario(5, Some(&profile), &InterventionSet::none()).unwrap();
        assert_eq!(ra, rb);
        assert_eq!(a.residents().as_slice(), b.residents().as_slice());
    }
}

// ── Per-resident tally ────────────────────────────────────────────────────────

#[cfg(test)]
mod tally {
    use std::collections::BTreeSet;

    use hs_agent::{Attributes, HealthStatus, Resident};
    use hs_core::{GeoPoint, ResidentId, ResidentRng};
    use hs_intervention::EffectMap;

    use crate::sim::update_resident;
    use crate::DailyOutcomes;

    fn frail() -> Resident {
        let attributes = Attributes {
            age:               80,
            income:            20_000.0,
            has_ac:            false,
            has_car:           false,
            works_outdoors:    false,
            health_conditions: BTreeSet::from(["cardiovascular".to_owned()]),
            social_isolation:  0.5,
        };
        Resident::new(ResidentId(0), GeoPoint::new(33.45, -112.07), attributes)
    }

    #[test]
    fn dead_residents_are_skipped() {
        let mut resident = frail();
        resident.mark_dead();
        let before = resident.clone();
        let mut rng = ResidentRng::new(42, resident.id());
        let out = update_resident(&mut resident, &mut rng, 130.0, &EffectMap::default());
        assert!(out.is_zero());
        assert_eq!(resident, before);
    }

    #[test]
    fn transitions_are_counted_once() {
        let mut resident = frail();
        assert!(resident.vulnerability() > 60.0);
        let mut rng = ResidentRng::new(42, resident.id());

        let total: DailyOutcomes = (0..500)
            .map(|_| update_resident(&mut resident, &mut rng, 130.0, &EffectMap::default()))
            .sum();

        assert!(total.heat_illness <= 1);
        assert!(total.severe_heat_illness <= 1);
        assert!(total.deaths <= total.severe_heat_illness);
        // 500 days at 45 exposure with p = 0.05 severe: reaching severe is certain in practice.
        assert_eq!(total.severe_heat_illness, 1);
        assert!(resident.status() >= HealthStatus::Severe);
        assert_eq!(total.deaths == 1, resident.status().is_dead());
    }

    #[test]
    fn living_residents_draw_the_same_amount_every_day() {
        for seed in 0..50 {
            let mut mild = frail();
            let mut hot = frail();
            let mut g_mild = ResidentRng::new(seed, ResidentId(0));
            let mut g_hot = g_mild.clone();
            update_resident(&mut mild, &mut g_mild, 80.0, &EffectMap::default());
            update_resident(&mut hot, &mut g_hot, 130.0, &EffectMap::default());
            assert_eq!(g_mild.unit(), g_hot.unit(), "seed {seed}");
        }
    }
}

// ── Scenarios ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod scenarios {
    use hs_core::Day;

    use super::*;
    use crate::{DailyOutcomes, DayRecord, ScenarioResult, SimError, SimObserver};

    #[test]
    fn ten_day_history_and_totals() {
        let mut sim = generated(1_000, 42);
        let result = sim.run_scenario(10, None, &InterventionSet::none()).unwrap();
        assert_eq!(result.history.len(), 10);
        assert_eq!(result.days(), 10);
        let summed: DailyOutcomes = result.history.iter().map(|r| r.outcomes).sum();
        assert_eq!(result.totals, summed);
        for (i, record) in result.history.iter().enumerate() {
            assert_eq!(record.day, Day(i as u32));
            assert!(record.max_temp_f.is_finite());
        }
    }

    #[test]
    fn result_covers_days_advanced_before_the_run() {
        let mut sim = generated(1_000, 42);
        for _ in 0..5 {
            sim.advance_day(115.0, &InterventionSet::none()).unwrap();
        }
        let advanced = sim.history().to_vec();
        let result = sim.run_scenario(10, Some(&[115.0; 10]), &InterventionSet::none()).unwrap();

        assert_eq!(result.history.len(), 15);
        assert_eq!(result.history, sim.history());
        assert_eq!(result.history[..5], advanced[..]);
        assert_eq!(result.history[5].day, Day(5));
        let all: DailyOutcomes = sim.history().iter().map(|r| r.outcomes).sum();
        assert_eq!(result.totals, all);
        let early: DailyOutcomes = advanced.iter().map(|r| r.outcomes).sum();
        assert!(early.heat_illness > 0);
        assert!(result.totals.heat_illness >= early.heat_illness);
    }

    #[test]
    fn history_restarts_after_regeneration() {
        let mut sim = generated(200, 42);
        sim.run_scenario(4, Some(&[120.0; 4]), &InterventionSet::none()).unwrap();
        sim.generate_population().unwrap();
        let fresh = sim.run_scenario(2, Some(&[120.0; 2]), &InterventionSet::none()).unwrap();
        assert_eq!(fresh.history.len(), 2);
        assert_eq!(fresh.history[0].day, Day(0));
    }

    #[test]
    fn supplied_profile_limits_days() {
        let mut sim = generated(100, 42);
        let short = sim.run_scenario(5, Some(&[90.0, 91.0, 92.0]), &InterventionSet::none()).unwrap();
        assert_eq!(short.history.len(), 3);
        let long = sim.run_scenario(2, Some(&[90.0, 91.0, 92.0]), &InterventionSet::none()).unwrap();
        assert_eq!(long.history.len(), 5);
        assert_eq!(long.history[4].max_temp_f, 91.0);
    }

    #[test]
    fn bad_profile_leaves_engine_untouched() {
        let mut sim = generated(100, 42);
        let err = sim.run_scenario(3, Some(&[100.0, f64::NAN, 100.0]), &InterventionSet::none()).unwrap_err();
        assert!(matches!(err, SimError::Config(_)));
        assert!(sim.history().is_empty());
    }

    #[test]
    fn result_lists_intervention_names() {
        let mut sim = generated(100, 42);
        let result = sim.run_scenario(1, Some(&[100.0]), &citywide_cooling()).unwrap();
        assert_eq!(result.interventions, ["Citywide Cooling Centers"]);
        assert_eq!(result.history[0].active_interventions, 1);
    }

    #[test]
    fn citywide_cooling_removes_illness_at_110() {
        // Exposure 25 halves to 12.5, below the stress threshold.
        let mut treated = generated(2_000, 42);
        let with = treated.run_scenario(30, Some(&[110.0; 30]), &citywide_cooling()).unwrap();
        assert!(with.totals.is_zero());

        let mut baseline = generated(2_000, 42);
        let without = baseline.run_scenario(30, Some(&[110.0; 30]), &InterventionSet::none()).unwrap();
        assert!(without.totals.heat_illness > 0);
    }

    #[derive(Default)]
    struct Recorder {
        starts: Vec<(Day, f64)>,
        ends:   usize,
        done:   Option<usize>,
    }

    impl SimObserver for Recorder {
        fn on_day_start(&mut self, day: Day, max_temp_f: f64) {
            self.starts.push((day, max_temp_f));
        }
        fn on_day_end(&mut self, _record: &DayRecord, residents: &hs_agent::ResidentStore) {
            assert_eq!(residents.len(), 50);
            self.ends += 1;
        }
        fn on_scenario_end(&mut self, result: &ScenarioResult) {
            self.done = Some(result.history.len());
        }
    }

    #[test]
    fn observer_sees_every_day() {
        let mut sim = generated(50, 42);
        let mut rec = Recorder::default();
        sim.run_scenario_with(4, Some(&[95.0, 96.0, 97.0, 98.0]), &InterventionSet::none(), &mut rec)
            .unwrap();
        assert_eq!(rec.starts, [(Day(0), 95.0), (Day(1), 96.0), (Day(2), 97.0), (Day(3), 98.0)]);
        assert_eq!(rec.ends, 4);
        assert_eq!(rec.done, Some(4));
    }
}

// ── Vulnerable query ──────────────────────────────────────────────────────────

#[cfg(test)]
mod query {
    use super::*;

    #[test]
    fn strictly_above_threshold_in_id_order() {
        let sim = generated(1_000, 42);
        let hits = sim.query_vulnerable(50.0);
        assert!(hits.iter().all(|v| v.vulnerability > 50.0));
        assert!(hits.windows(2).all(|w| w[0].id < w[1].id));

        let expected = sim.residents().iter().filter(|r| r.vulnerability() > 50.0).count();
        assert_eq!(hits.len(), expected);
    }

    #[test]
    fn threshold_equal_to_max_is_excluded() {
        let sim = generated(500, 42);
        let max = sim.residents().iter().map(|r| r.vulnerability()).fold(0.0, f64::max);
        assert!(sim.query_vulnerable(max).is_empty());
    }

    #[test]
    fn query_is_idempotent() {
        let sim = generated(500, 42);
        assert_eq!(sim.query_vulnerable(40.0), sim.query_vulnerable(40.0));
    }

    #[test]
    fn projection_matches_resident() {
        let sim = generated(200, 42);
        for v in sim.query_vulnerable(0.0) {
            let r = sim.residents().get(v.id).unwrap();
            assert_eq!(v.lat, r.location().lat);
            assert_eq!(v.age, r.attributes().age);
            assert_eq!(v.has_ac, r.attributes().has_ac);
            assert_eq!(v.profile, r.risk_tier());
        }
    }
}

// ── Weather ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod weather {
    use hs_core::Day;

    use crate::weather::{check_profile, seasonal_mean, seasonal_profile, weather_rng};

    #[test]
    fn seasonal_curve_shape() {
        assert!((seasonal_mean(Day(0)) - 35.0).abs() < 1e-9);
        assert!(seasonal_mean(Day(182)) > 104.0);
        // Wraps at one year.
        assert!((seasonal_mean(Day(365)) - seasonal_mean(Day(0))).abs() < 1e-9);
    }

    #[test]
    fn profile_is_seeded() {
        let a = seasonal_profile(Day(150), 30, &mut weather_rng(7)).unwrap();
        let b = seasonal_profile(Day(150), 30, &mut weather_rng(7)).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.len(), 30);
        assert!(check_profile(&a).is_ok());
    }

    #[test]
    fn rejects_non_finite() {
        assert!(check_profile(&[]).is_ok());
        assert!(check_profile(&[100.0, f64::NAN]).is_err());
    }
}

// ── Comparison ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod comparison {
    use super::*;
    use crate::{compare_scenarios, DailyOutcomes, ScenarioComparison, ScenarioResult};

    #[test]
    fn cooling_centers_prevent_illness() {
        let config = SimConfig::with_population(2_000);
        let cmp = compare_scenarios(&config, 30, Some(&[110.0; 30]), &citywide_cooling()).unwrap();
        assert_eq!(cmp.baseline.history.len(), 30);
        assert_eq!(cmp.intervention.history.len(), 30);
        assert!(cmp.intervention.totals.is_zero());
        assert!(cmp.illnesses_prevented > 0);
        assert_eq!(cmp.total_cost, 500_000.0);
        assert!(cmp.baseline.interventions.is_empty());
    }

    #[test]
    fn cost_per_death_uses_at_least_one() {
        // Nothing happens at 80°F, so no deaths are prevented.
        let config = SimConfig::with_population(200);
        let cmp = compare_scenarios(&config, 5, Some(&[80.0; 5]), &citywide_cooling()).unwrap();
        assert_eq!(cmp.deaths_prevented, 0);
        assert_eq!(cmp.cost_per_death_prevented, 500_000.0);
        assert_eq!(cmp.roi_percent, 0.0);
    }

    fn with_deaths(deaths: u64) -> ScenarioResult {
        ScenarioResult {
            totals: DailyOutcomes { deaths, ..DailyOutcomes::default() },
            ..ScenarioResult::default()
        }
    }

    #[test]
    fn roi_values_lives_saved_against_cost() {
        // 6 lives at $2.5M each against $3M spent.
        let cmp = ScenarioComparison::new(with_deaths(10), with_deaths(4), 3_000_000.0);
        assert_eq!(cmp.deaths_prevented, 6);
        assert_eq!(cmp.roi_percent, 500.0);
        assert_eq!(cmp.cost_per_death_prevented, 500_000.0);
    }

    #[test]
    fn roi_is_zero_without_savings_or_cost() {
        let worse = ScenarioComparison::new(with_deaths(3), with_deaths(5), 1_000_000.0);
        assert_eq!(worse.deaths_prevented, -2);
        assert_eq!(worse.roi_percent, 0.0);

        let free = ScenarioComparison::new(with_deaths(5), with_deaths(3), 0.0);
        assert_eq!(free.roi_percent, 0.0);
    }

    #[test]
    fn synthesized_profile_is_shared() {
        let config = SimConfig::with_population(100);
        let cmp = compare_scenarios(&config, 20, None, &InterventionSet::none()).unwrap();
        let temps = |r: &crate::ScenarioResult| r.history.iter().map(|d| d.max_temp_f).collect::<Vec<_>>();
        assert_eq!(temps(&cmp.baseline), temps(&cmp.intervention));
        // Identical engines with no interventions agree exactly.
        assert_eq!(cmp.baseline.totals, cmp.intervention.totals);
    }
}

// ── Parallel day loop ─────────────────────────────────────────────────────────

#[cfg(all(test, feature = "parallel"))]
mod parallel {
    use hs_agent::ResidentRngs;
    use hs_intervention::map_interventions;

    use super::*;
    use crate::sim::update_resident;
    use crate::DailyOutcomes;

    #[test]
    fn rayon_day_loop_matches_sequential_replay() {
        let profile = [104.0, 112.0, 118.0, 123.0, 127.0, 121.0, 116.0, 110.0];
        let interventions = citywide_cooling();

        let mut sim = generated(3_000, 11);
        let mut residents = sim.residents().as_slice().to_vec();
        let mut rngs = ResidentRngs::new(residents.len(), 11);
        let effects = map_interventions(&interventions, sim.index()).unwrap();

        let result = sim.run_scenario(profile.len() as u32, Some(&profile), &interventions).unwrap();

        let mut expected = Vec::new();
        for &temp in &profile {
            let day: DailyOutcomes = residents
                .iter_mut()
                .zip(rngs.inner.iter_mut())
                .map(|(r, g)| update_resident(r, g, temp, &effects))
                .sum();
            expected.push(day);
        }

        let got: Vec<DailyOutcomes> = result.history.iter().map(|r| r.outcomes).collect();
        assert_eq!(got, expected);
        let total: DailyOutcomes = expected.iter().sum();
        assert_eq!(result.totals, total);
        assert_eq!(sim.residents().as_slice(), residents.as_slice());
    }
}
