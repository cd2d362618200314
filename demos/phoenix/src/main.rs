//! phoenix — baseline vs. intervention heat-season run for Phoenix, AZ.
//!
//! ```text
//! phoenix [config.json]
//! ```
//!
//! Generates the synthetic population, runs a summer temperature profile
//! without and then with the configured interventions, prints the outcome
//! comparison, and writes `daily_outcomes.csv` / `vulnerable_residents.csv`.
//! Set `HS_LOG=debug` for per-day logging.

mod config;

use std::path::Path;
use std::time::Instant;

use anyhow::Result;
use log::{LevelFilter, info};
use log4rs::append::console::ConsoleAppender;
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;

use hs_agent::RiskTier;
use hs_core::Day;
use hs_intervention::{InterventionSet, InterventionType};
use hs_output::{CsvWriter, ScenarioOutputObserver};
use hs_sim::weather::{seasonal_profile, weather_rng};
use hs_sim::{HeatSim, ScenarioComparison, ScenarioResult};

use config::RunConfig;

fn init_logging() -> Result<()> {
    let level = std::env::var("HS_LOG")
        .ok()
        .and_then(|s| s.parse::<LevelFilter>().ok())
        .unwrap_or(LevelFilter::Info);

    let stdout = ConsoleAppender::builder()
        .encoder(Box::new(PatternEncoder::new("{d(%H:%M:%S)} {h({l:5})} {t} - {m}{n}")))
        .build();
    let config = Config::builder()
        .appender(Appender::builder().build("stdout", Box::new(stdout)))
        .build(Root::builder().appender("stdout").build(level))?;
    log4rs::init_config(config)?;
    Ok(())
}

fn run(
    sim:           &mut HeatSim,
    writer:        &mut CsvWriter,
    label:         &str,
    profile:       &[f64],
    interventions: &InterventionSet,
) -> Result<ScenarioResult> {
    sim.generate_population()?;
    let mut obs = ScenarioOutputObserver::new(writer, label);
    let result = sim.run_scenario_with(profile.len() as u32, Some(profile), interventions, &mut obs)?;
    if let Some(e) = obs.take_error() {
        eprintln!("output error ({label}): {e}");
    }
    Ok(result)
}

fn main() -> Result<()> {
    init_logging()?;

    let cfg = match std::env::args().nth(1) {
        Some(path) => RunConfig::load(Path::new(&path))?,
        None => RunConfig::default(),
    };
    let interventions = cfg.intervention_set()?;

    println!("=== phoenix — urban heat intervention simulator ===");
    println!(
        "Residents: {}  |  Days: {}  |  Seed: {}",
        cfg.sim.population, cfg.days, cfg.sim.seed
    );
    println!();

    println!("{:<16} {:>12} {:<8} {:>9}", "Catalog", "Unit cost", "Unit", "Timeline");
    println!("{}", "-".repeat(48));
    for entry in InterventionType::catalog() {
        println!(
            "{:<16} {:>12.0} {:<8} {:>6} mo",
            entry.kind.as_str(), entry.unit_cost, entry.unit, entry.typical_timeline_months
        );
    }
    println!();

    // 1. One summer profile shared by both runs.
    let profile = seasonal_profile(Day(cfg.start_day_of_year), cfg.days, &mut weather_rng(cfg.sim.seed))?;

    // 2. Output.
    let mut writer = CsvWriter::new(&cfg.output_dir)?;

    // 3. Baseline, then interventions, on identically seeded populations.
    let mut sim = HeatSim::from_config(cfg.sim.clone())?;
    let t0 = Instant::now();
    let baseline = run(&mut sim, &mut writer, "baseline", &profile, &InterventionSet::none())?;

    let vulnerable = sim.query_vulnerable(cfg.vulnerability_threshold);
    let mut obs = ScenarioOutputObserver::new(&mut writer, "population");
    obs.write_vulnerable(&vulnerable);
    if let Some(e) = obs.take_error() {
        eprintln!("output error (vulnerable residents): {e}");
    }

    let treated = run(&mut sim, &mut writer, "interventions", &profile, &interventions)?;
    info!("both scenarios finished in {:.2} s", t0.elapsed().as_secs_f64());

    // 4. Summary.
    let breakdown = sim.tier_breakdown();
    println!("Risk tiers:");
    for tier in RiskTier::ALL {
        println!("  {:<14} {:>8} ({:.1}%)", tier.as_str(), breakdown.count(tier), breakdown.percent(tier));
    }
    println!(
        "Residents above vulnerability {}: {}",
        cfg.vulnerability_threshold,
        vulnerable.len()
    );
    let summary = sim.population_summary();
    println!(
        "Vulnerable: {} ({:.1}%), extreme: {}, without AC: {}, elderly: {}, outdoor workers: {}",
        summary.vulnerable,
        summary.percent_vulnerable,
        summary.extreme_vulnerable,
        summary.without_ac,
        summary.elderly,
        summary.outdoor_workers
    );
    println!("Average vulnerability: {:.1}", summary.average_vulnerability);
    println!();

    let cmp = ScenarioComparison::new(baseline, treated, interventions.total_cost());
    println!("{:<22} {:>10} {:>14} {:>10}", "Outcome", "Baseline", "Interventions", "Prevented");
    println!("{}", "-".repeat(60));
    let (b, i) = (cmp.baseline.totals, cmp.intervention.totals);
    let illness = |o: hs_sim::DailyOutcomes| o.heat_illness + o.severe_heat_illness;
    println!("{:<22} {:>10} {:>14} {:>10}", "Heat illness", illness(b), illness(i), cmp.illnesses_prevented);
    println!("{:<22} {:>10} {:>14} {:>10}", "ER visits", b.er_visits, i.er_visits, cmp.er_visits_prevented);
    println!("{:<22} {:>10} {:>14} {:>10}", "Deaths", b.deaths, i.deaths, cmp.deaths_prevented);
    println!();
    println!("Interventions: {}", cmp.intervention.interventions.join(", "));
    println!("Total cost:               ${:.0}", cmp.total_cost);
    println!("Cost per death prevented: ${:.0}", cmp.cost_per_death_prevented);
    println!("Return on investment:     {:.0}%", cmp.roi_percent);
    if let Some(peak) = cmp.baseline.peak_temperature() {
        println!("Peak temperature:         {peak:.1}°F");
    }
    println!("Output written to {}", cfg.output_dir.display());

    Ok(())
}
