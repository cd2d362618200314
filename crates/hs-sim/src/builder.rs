//! Fluent builder for constructing a [`HeatSim`].

use hs_core::{CityBounds, SimConfig};

use crate::{HeatSim, SimResult};

/// Fluent builder for [`HeatSim`].
///
/// | Method            | Default                        |
/// |-------------------|--------------------------------|
/// | `.population(n)`  | `SimConfig::default()` (100k)  |
/// | `.seed(s)`        | `42`                           |
/// | `.city(bounds)`   | `CityBounds::phoenix()`        |
/// | `.generate(true)` | off: population built lazily   |
///
/// # Example
///
/// ```rust
/// use hs_sim::SimBuilder;
///
/// let sim = SimBuilder::default()
///     .population(500)
///     .seed(7)
///     .generate(true)
///     .build()
///     .unwrap();
/// assert_eq!(sim.residents().len(), 500);
/// ```
#[derive(Clone, Debug, Default)]
pub struct SimBuilder {
    config:   SimConfig,
    generate: bool,
}

impl SimBuilder {
    /// Start from an existing configuration.
    pub fn new(config: SimConfig) -> Self {
        Self { config, generate: false }
    }

    pub fn population(mut self, n: usize) -> Self {
        self.config.population = n;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = seed;
        self
    }

    pub fn city(mut self, city: CityBounds) -> Self {
        self.config.city = city;
        self
    }

    /// Generate the population as part of [`build`](Self::build).
    pub fn generate(mut self, generate: bool) -> Self {
        self.generate = generate;
        self
    }

    /// Validate the configuration and return the engine.
    pub fn build(self) -> SimResult<HeatSim> {
        let mut sim = HeatSim::from_config(self.config)?;
        if self.generate {
            sim.generate_population()?;
        }
        Ok(sim)
    }
}
