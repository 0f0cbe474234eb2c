//! Hemispherical inverse-square spreading from the effective source.

use std::f64::consts::PI;

use crate::support::constraint::{Constrained, StrictlyPositive};
use uom::si::{
    area::square_meter,
    f64::{Area, HeatFluxDensity, Length, Power},
    length::meter,
    power::watt,
    ratio::ratio,
};

use super::{ModelParameters, PowerChain};

/// Solid angle the emitter radiates into, in steradians.
///
/// The emitter radiates into a half-space, so this is 2π rather than 4π.
const HEMISPHERE: f64 = 2. * PI;

/// Irradiance at `distance` from the emitter surface.
#[must_use]
pub fn irradiance_at(chain: &PowerChain, distance: Length) -> HeatFluxDensity {
    let d = distance + chain.standoff;
    let sphere: Area = d * d * HEMISPHERE;
    chain.infrared / sphere
}

/// Power absorbed by the receiving body at `distance` from the emitter surface.
#[must_use]
pub fn absorbed_at(chain: &PowerChain, params: &ModelParameters, distance: Length) -> Power {
    irradiance_at(chain, distance) * params.exposed_area() * params.absorptivity()
}

/// Distance from the emitter surface at which the absorbed power equals `target`.
///
/// This inverts [`absorbed_at`] in closed form. A negative result means the
/// target exceeds what is absorbed at the emitter surface itself.
#[must_use]
pub fn distance_for_absorbed_power(
    chain: &PowerChain,
    params: &ModelParameters,
    target: Constrained<Power, StrictlyPositive>,
) -> Length {
    let collected = chain.infrared.get::<watt>()
        * params.exposed_area().get::<square_meter>()
        * params.absorptivity().get::<ratio>();
    let d_squared = collected / (HEMISPHERE * target.into_inner().get::<watt>());
    Length::new::<meter>(d_squared.sqrt()) - chain.standoff
}
