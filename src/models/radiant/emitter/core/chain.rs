use uom::si::{
    f64::{Length, Power, Ratio, ThermalConductance},
    ratio::ratio,
};

use super::{EmitterConfig, ModelParameters};

/// Fraction of captured plume heat picked up by the emitter wall.
///
/// Modeled as a first-order approach to equilibrium, `1 - exp(-UA / C)`,
/// which is the effectiveness-NTU relation for a zero capacity ratio.
///
/// A non-positive `c` is not rejected and yields a non-physical result.
#[must_use]
pub fn effectiveness(ua: ThermalConductance, c: ThermalConductance) -> Ratio {
    let ntu = (ua / c).get::<ratio>();
    Ratio::new::<ratio>(1. - (-ntu).exp())
}

/// Distance-independent stages of the emitter's power budget.
///
/// Each stage is the previous one multiplied by a loss factor:
/// burner → plume → captured → wall → infrared.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PowerChain {
    /// Burner heat input.
    pub burner: Power,

    /// Heat carried by the convective plume.
    pub plume: Power,

    /// Plume heat reaching the wall, net of bypass.
    pub captured: Power,

    /// Wall effectiveness for the emitter's conductance.
    pub effectiveness: Ratio,

    /// Heat absorbed by the capture wall.
    pub wall: Power,

    /// Net infrared power leaving the emitter.
    pub infrared: Power,

    /// Offset from the emitter surface to the effective radiating source.
    pub standoff: Length,
}

impl PowerChain {
    /// Evaluates the power budget for one emitter variant.
    #[must_use]
    pub fn new(config: &EmitterConfig, params: &ModelParameters) -> Self {
        let burner = params.burner_power();
        let plume = burner * params.f_conv;
        let captured = plume * params.f_capture * (1. - params.f_bypass);
        let effectiveness = effectiveness(config.ua(), params.capacity());
        let wall = captured * effectiveness;
        let infrared = wall * params.eta_rad * params.eta_out;

        Self {
            burner,
            plume,
            captured,
            effectiveness,
            wall,
            infrared,
            standoff: params.source_standoff(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{length::foot, power::watt, thermal_conductance::watt_per_kelvin};

    fn conductance(value: f64) -> ThermalConductance {
        ThermalConductance::new::<watt_per_kelvin>(value)
    }

    #[test]
    fn effectiveness_matches_exponential() {
        let eff = effectiveness(conductance(12.), conductance(17.));
        assert_relative_eq!(eff.get::<ratio>(), 1. - (-12.0_f64 / 17.).exp());
        assert_relative_eq!(eff.get::<ratio>(), 0.506_327_211_610_869_7, epsilon = 1e-12);

        let eff = effectiveness(conductance(3.), conductance(0.5));
        assert_relative_eq!(eff.get::<ratio>(), 1. - (-6.0_f64).exp());
    }

    #[test]
    fn effectiveness_limits() {
        let c = conductance(17.);
        assert_relative_eq!(
            effectiveness(conductance(1e-9), c).get::<ratio>(),
            0.,
            epsilon = 1e-9
        );
        assert_relative_eq!(
            effectiveness(conductance(1e4), c).get::<ratio>(),
            1.,
            epsilon = 1e-12
        );
    }

    #[test]
    fn effectiveness_increases_with_conductance() {
        let c = conductance(17.);
        let values: Vec<_> = [12., 20., 28.]
            .into_iter()
            .map(|ua| effectiveness(conductance(ua), c).get::<ratio>())
            .collect();
        assert!(values.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn zero_capacity_is_not_rejected() {
        let eff = effectiveness(conductance(12.), conductance(0.));
        assert_relative_eq!(eff.get::<ratio>(), 1.);

        let eff = effectiveness(conductance(12.), conductance(-17.));
        assert!(eff.get::<ratio>() < 0.);
    }

    #[test]
    fn baseline_chain() {
        let chain = PowerChain::new(&EmitterConfig::smooth(), &ModelParameters::default());

        assert_relative_eq!(chain.burner.get::<watt>(), 14_653.5535, epsilon = 1e-6);
        assert_relative_eq!(chain.plume.get::<watt>(), 10_257.487_45, epsilon = 1e-6);
        assert_relative_eq!(chain.captured.get::<watt>(), 7_846.977_899_25, epsilon = 1e-6);
        assert_relative_eq!(
            chain.infrared.get::<watt>(),
            1_420.396_992_049_525_6,
            epsilon = 1e-6
        );
        assert_relative_eq!(chain.standoff.get::<foot>(), 0.5625, epsilon = 1e-12);
    }

    #[test]
    fn bypass_reduces_capture() {
        let params = ModelParameters {
            f_bypass: 1.,
            ..ModelParameters::default()
        };
        let chain = PowerChain::new(&EmitterConfig::ramp(), &params);
        assert_relative_eq!(chain.captured.get::<watt>(), 0.);
        assert_relative_eq!(chain.infrared.get::<watt>(), 0.);
    }
}
