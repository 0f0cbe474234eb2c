//! Combustion emitter infrared model.
//!
//! Computes the infrared power absorbed by a person standing at a distance
//! from a combustion-driven radiant emitter. Hardware variants are described
//! by an [`EmitterConfig`]; the physical parameters they share are collected
//! in [`ModelParameters`].
//!
//! [`EmitterModel`] adapts the computation to [`twine_core::Model`]. The free
//! functions re-exported here are the same computation without the adapter.
//!
//! # Example
//!
//! ```
//! use ir_emitter_models::models::radiant::emitter::{
//!     DistanceSeries, EmitterConfig, EmitterModel, ModelParameters,
//! };
//! use twine_core::Model;
//!
//! let model = EmitterModel::new(EmitterConfig::smooth(), ModelParameters::default());
//! let absorbed = model
//!     .call(&DistanceSeries::from_feet([2.0, 5.0, 8.0]))
//!     .unwrap()
//!     .to_watts();
//!
//! assert_eq!(absorbed.len(), 3);
//! assert!(absorbed[0] > absorbed[1] && absorbed[1] > absorbed[2]);
//! ```

mod core;

pub use self::core::{
    AbsorbedPowerSeries, DistanceSeries, EmitterConfig, ModelParameters, PowerChain, absorbed_at,
    absorbed_vs_distance, distance_for_absorbed_power, effectiveness, irradiance_at,
};

use std::convert::Infallible;

use twine_core::Model;

/// A [`Model`] mapping distances to absorbed power for one emitter variant.
#[derive(Debug, Clone, PartialEq)]
pub struct EmitterModel {
    config: EmitterConfig,
    params: ModelParameters,
}

impl EmitterModel {
    /// Creates a model for `config` under `params`.
    #[must_use]
    pub fn new(config: EmitterConfig, params: ModelParameters) -> Self {
        Self { config, params }
    }

    /// The emitter variant this model evaluates.
    #[must_use]
    pub fn config(&self) -> &EmitterConfig {
        &self.config
    }

    /// The shared physical parameters this model evaluates with.
    #[must_use]
    pub fn params(&self) -> &ModelParameters {
        &self.params
    }

    /// The distance-independent power budget for this model.
    #[must_use]
    pub fn power_chain(&self) -> PowerChain {
        PowerChain::new(&self.config, &self.params)
    }
}

impl Model for EmitterModel {
    type Input = DistanceSeries;
    type Output = AbsorbedPowerSeries;
    type Error = Infallible;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        Ok(absorbed_vs_distance(&self.config, &self.params, input))
    }
}
