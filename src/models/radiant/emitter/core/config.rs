use std::borrow::Cow;

use crate::support::constraint::{Constrained, ConstraintResult, StrictlyPositive};
use uom::si::{f64::ThermalConductance, thermal_conductance::watt_per_kelvin};

/// A named emitter hardware variant.
///
/// Variants differ only in their lumped conductance (UA), which sets how much
/// of the captured plume heat the emitter wall picks up.
/// The conductance must be strictly positive.
#[derive(Debug, Clone, PartialEq)]
pub struct EmitterConfig {
    name: Cow<'static, str>,
    ua: Constrained<ThermalConductance, StrictlyPositive>,
}

impl EmitterConfig {
    /// Creates an [`EmitterConfig`] from a name and a conductance in W/K.
    ///
    /// # Errors
    ///
    /// Returns `Err` if `ua_w_per_k` is not strictly positive.
    pub fn new(name: impl Into<Cow<'static, str>>, ua_w_per_k: f64) -> ConstraintResult<Self> {
        Self::from_quantity(name, ThermalConductance::new::<watt_per_kelvin>(ua_w_per_k))
    }

    /// Creates an [`EmitterConfig`] from a name and a conductance quantity.
    ///
    /// # Errors
    ///
    /// Returns `Err` if `ua` is not strictly positive.
    pub fn from_quantity(
        name: impl Into<Cow<'static, str>>,
        ua: ThermalConductance,
    ) -> ConstraintResult<Self> {
        Ok(Self {
            name: name.into(),
            ua: StrictlyPositive::new(ua)?,
        })
    }

    /// The smooth-wall emitter (UA = 12 W/K).
    #[must_use]
    pub fn smooth() -> Self {
        Self::baseline("Smooth", 12.0)
    }

    /// The ramped-wall emitter (UA = 20 W/K).
    #[must_use]
    pub fn ramp() -> Self {
        Self::baseline("Ramp", 20.0)
    }

    /// The stator plus ramped-wall emitter (UA = 28 W/K).
    #[must_use]
    pub fn stator_ramp() -> Self {
        Self::baseline("Stator+Ramp", 28.0)
    }

    /// The baseline hardware variants, ordered by increasing conductance.
    #[must_use]
    pub fn baselines() -> Vec<Self> {
        vec![Self::smooth(), Self::ramp(), Self::stator_ramp()]
    }

    /// Display name of the variant.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Lumped conductance of the variant.
    #[must_use]
    pub fn ua(&self) -> ThermalConductance {
        *self.ua.as_ref()
    }

    fn baseline(name: &'static str, ua_w_per_k: f64) -> Self {
        Self::new(name, ua_w_per_k).expect("baseline conductance should be strictly positive")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::support::constraint::ConstraintError;

    #[test]
    fn baselines_in_order() {
        let names: Vec<_> = EmitterConfig::baselines()
            .iter()
            .map(|config| (config.name().to_owned(), config.ua().get::<watt_per_kelvin>()))
            .collect();

        assert_eq!(
            names,
            [
                ("Smooth".to_owned(), 12.0),
                ("Ramp".to_owned(), 20.0),
                ("Stator+Ramp".to_owned(), 28.0),
            ]
        );
    }

    #[test]
    fn rejects_non_positive_conductance() {
        assert_eq!(
            EmitterConfig::new("Bare", 0.0),
            Err(ConstraintError::Zero)
        );
        assert_eq!(
            EmitterConfig::new("Bare", -4.0),
            Err(ConstraintError::Negative)
        );
        assert_eq!(
            EmitterConfig::new("Bare", f64::NAN),
            Err(ConstraintError::NotANumber)
        );
    }

    #[test]
    fn accepts_owned_names() -> ConstraintResult<()> {
        let config = EmitterConfig::new(format!("Prototype {}", 4), 36.0)?;
        assert_eq!(config.name(), "Prototype 4");
        Ok(())
    }
}
