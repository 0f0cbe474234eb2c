use tracing::info;
use uom::si::{f64::Length, length::foot, power::watt};

use crate::models::radiant::emitter::{
    AbsorbedPowerSeries, DistanceSeries, EmitterConfig, ModelParameters, absorbed_vs_distance,
};

/// Distance sweep shared by every scenario.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepConfig {
    /// First distance from the emitter surface.
    pub start: Length,

    /// Last distance from the emitter surface (inclusive).
    pub end: Length,

    /// Number of evenly spaced samples.
    pub points: usize,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            start: Length::new::<foot>(2.0),
            end: Length::new::<foot>(8.0),
            points: 200,
        }
    }
}

impl SweepConfig {
    /// The sampled distances.
    #[must_use]
    pub fn distances(&self) -> DistanceSeries {
        DistanceSeries::linspace(self.start, self.end, self.points)
    }
}

/// One labelled curve: a configuration's absorbed power over the sweep.
#[derive(Debug, Clone, PartialEq)]
pub struct ScenarioSeries {
    /// Configuration name, used as the curve label.
    pub name: String,

    /// Sampled distances.
    pub distances: DistanceSeries,

    /// Absorbed power at each sampled distance.
    pub absorbed: AbsorbedPowerSeries,
}

/// Evaluates every configuration over the same sweep, preserving input order.
#[must_use]
pub fn run_scenarios(
    configs: &[EmitterConfig],
    params: &ModelParameters,
    sweep: &SweepConfig,
) -> Vec<ScenarioSeries> {
    let distances = sweep.distances();

    configs
        .iter()
        .map(|config| {
            let absorbed = absorbed_vs_distance(config, params, &distances);

            if let (Some(near), Some(far)) = (absorbed.first(), absorbed.last()) {
                info!(
                    emitter = config.name(),
                    near_w = near.get::<watt>(),
                    far_w = far.get::<watt>(),
                    "scenario evaluated"
                );
            }

            ScenarioSeries {
                name: config.name().to_owned(),
                distances: distances.clone(),
                absorbed,
            }
        })
        .collect()
}
