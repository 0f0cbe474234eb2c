//! Radiative transfer from burner input to absorbed infrared power.
//!
//! Burner heat input is reduced by a fixed chain of loss factors to the net
//! infrared power leaving the emitter ([`PowerChain`]), then spread over a
//! hemisphere centred on an effective source that sits a fixed standoff
//! behind the emitter surface.
//!
//! Everything here is pure arithmetic on its inputs. Out-of-range parameters
//! are not rejected and may yield negative or non-finite results.

mod chain;
mod config;
mod parameters;
mod series;
mod spreading;

pub use chain::{PowerChain, effectiveness};
pub use config::EmitterConfig;
pub use parameters::ModelParameters;
pub use series::{AbsorbedPowerSeries, DistanceSeries};
pub use spreading::{absorbed_at, distance_for_absorbed_power, irradiance_at};

use tracing::debug;
use uom::si::{power::watt, thermal_conductance::watt_per_kelvin};

/// Computes the power absorbed at each distance in `distances`.
///
/// The distance-independent part of the model is evaluated once.
/// The returned series is index-aligned with `distances`.
#[must_use]
pub fn absorbed_vs_distance(
    config: &EmitterConfig,
    params: &ModelParameters,
    distances: &DistanceSeries,
) -> AbsorbedPowerSeries {
    let chain = PowerChain::new(config, params);

    debug!(
        emitter = config.name(),
        ua_w_per_k = config.ua().get::<watt_per_kelvin>(),
        infrared_w = chain.infrared.get::<watt>(),
        points = distances.len(),
        "evaluating absorbed power"
    );

    distances
        .iter()
        .map(|&distance| absorbed_at(&chain, params, distance))
        .collect()
}
