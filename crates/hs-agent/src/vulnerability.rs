//! Heat-vulnerability scoring.
//!
//! The score is an additive heuristic over a resident's static attributes,
//! clamped to `[0, 100]`.  It is illustrative, not a validated clinical model.
//!
//! | Factor                         | Points            |
//! |--------------------------------|-------------------|
//! | age > 65 / age < 5 / age > 50  | 25 / 20 / 10      |
//! | income < 20 000 / < 40 000     | 20 / 10           |
//! | no air conditioning            | 30                |
//! | outdoor occupation             | 15                |
//! | each health condition          | 5                 |
//! | social isolation (0–1)         | 10 × isolation    |

use std::fmt;

use crate::{Attributes, Resident};

/// Upper bound of the vulnerability scale.
pub const MAX_SCORE: f64 = 100.0;

/// Compute the 0–100 heat-vulnerability score for `attrs`.
///
/// Pure and infallible; callers are responsible for attribute validity.
pub fn vulnerability_score(attrs: &Attributes) -> f64 {
    let mut score = 0.0;

    score += if attrs.age > 65 {
        25.0
    } else if attrs.age < 5 {
        20.0
    } else if attrs.age > 50 {
        10.0
    } else {
        0.0
    };

    score += if attrs.income < 20_000.0 {
        20.0
    } else if attrs.income < 40_000.0 {
        10.0
    } else {
        0.0
    };

    if !attrs.has_ac {
        score += 30.0;
    }
    if attrs.works_outdoors {
        score += 15.0;
    }

    score += attrs.health_conditions.len() as f64 * 5.0;
    score += attrs.social_isolation * 10.0;

    score.min(MAX_SCORE)
}

// ── RiskTier ──────────────────────────────────────────────────────────────────

/// Discrete classification of a vulnerability score.  Ordered from least to
/// most at-risk.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum RiskTier {
    /// score < 25
    Low,
    /// 25 ≤ score < 50
    Moderate,
    /// 50 ≤ score < 75
    High,
    /// score ≥ 75
    Extreme,
}

impl RiskTier {
    pub const ALL: [RiskTier; 4] = [RiskTier::Low, RiskTier::Moderate, RiskTier::High, RiskTier::Extreme];

    pub fn from_score(score: f64) -> Self {
        if score < 25.0 {
            RiskTier::Low
        } else if score < 50.0 {
            RiskTier::Moderate
        } else if score < 75.0 {
            RiskTier::High
        } else {
            RiskTier::Extreme
        }
    }

    /// Label used by listing and mapping UIs.
    pub fn as_str(self) -> &'static str {
        match self {
            RiskTier::Low      => "low_risk",
            RiskTier::Moderate => "moderate_risk",
            RiskTier::High     => "high_risk",
            RiskTier::Extreme  => "extreme_risk",
        }
    }
}

impl fmt::Display for RiskTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── TierBreakdown ─────────────────────────────────────────────────────────────

/// Resident counts per risk tier.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TierBreakdown {
    pub low:      usize,
    pub moderate: usize,
    pub high:     usize,
    pub extreme:  usize,
}

impl TierBreakdown {
    pub fn record(&mut self, tier: RiskTier) {
        match tier {
            RiskTier::Low      => self.low += 1,
            RiskTier::Moderate => self.moderate += 1,
            RiskTier::High     => self.high += 1,
            RiskTier::Extreme  => self.extreme += 1,
        }
    }

    pub fn count(&self, tier: RiskTier) -> usize {
        match tier {
            RiskTier::Low      => self.low,
            RiskTier::Moderate => self.moderate,
            RiskTier::High     => self.high,
            RiskTier::Extreme  => self.extreme,
        }
    }

    pub fn total(&self) -> usize {
        self.low + self.moderate + self.high + self.extreme
    }

    /// Share of the population in `tier`, in percent.  0 for an empty breakdown.
    pub fn percent(&self, tier: RiskTier) -> f64 {
        match self.total() {
            0 => 0.0,
            n => 100.0 * self.count(tier) as f64 / n as f64,
        }
    }
}

impl FromIterator<RiskTier> for TierBreakdown {
    fn from_iter<I: IntoIterator<Item = RiskTier>>(iter: I) -> Self {
        let mut b = TierBreakdown::default();
        for tier in iter {
            b.record(tier);
        }
        b
    }
}

// ── PopulationSummary ─────────────────────────────────────────────────────────

/// Residents above this score count as vulnerable.
pub const VULNERABLE_SCORE: f64 = 50.0;
/// Residents above this score count as extremely vulnerable.
pub const EXTREME_SCORE: f64 = 75.0;
/// Residents older than this count as elderly.
pub const ELDERLY_AGE: u32 = 65;

/// Headline counts over a population.  All thresholds are strict.
#[derive(Copy, Clone, PartialEq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PopulationSummary {
    pub total_population:      usize,
    /// Vulnerability above [`VULNERABLE_SCORE`].
    pub vulnerable:            usize,
    /// Vulnerability above [`EXTREME_SCORE`].
    pub extreme_vulnerable:    usize,
    /// `vulnerable` as a share of the population; 0 when empty.
    pub percent_vulnerable:    f64,
    pub without_ac:            usize,
    /// Older than [`ELDERLY_AGE`].
    pub elderly:               usize,
    pub outdoor_workers:       usize,
    /// Mean vulnerability score; 0 when empty.
    pub average_vulnerability: f64,
}

impl<'a> FromIterator<&'a Resident> for PopulationSummary {
    fn from_iter<I: IntoIterator<Item = &'a Resident>>(iter: I) -> Self {
        let mut s = PopulationSummary::default();
        let mut score_sum = 0.0;
        for r in iter {
            let attrs = r.attributes();
            let score = r.vulnerability();
            s.total_population += 1;
            score_sum += score;
            s.vulnerable += usize::from(score > VULNERABLE_SCORE);
            s.extreme_vulnerable += usize::from(score > EXTREME_SCORE);
            s.without_ac += usize::from(!attrs.has_ac);
            s.elderly += usize::from(attrs.age > ELDERLY_AGE);
            s.outdoor_workers += usize::from(attrs.works_outdoors);
        }
        if s.total_population > 0 {
            let n = s.total_population as f64;
            s.percent_vulnerable = 100.0 * s.vulnerable as f64 / n;
            s.average_vulnerability = score_sum / n;
        }
        s
    }
}
