use crate::support::units::burner_power;
use uom::si::{
    area::square_meter,
    f64::{Area, Length, Power, Ratio, ThermalConductance},
    length::foot,
    ratio::ratio,
    thermal_conductance::watt_per_kelvin,
};

/// Physical parameters shared by every emitter variant.
///
/// Fields are plain numbers in the engineering units given on each field so
/// that individual values can be overridden with struct-update syntax:
///
/// ```
/// use ir_emitter_models::models::radiant::emitter::ModelParameters;
///
/// let params = ModelParameters {
///     btu_per_hr: 40_000.0,
///     ..ModelParameters::default()
/// };
/// assert_eq!(params.f_conv, 0.70);
/// ```
///
/// No field is validated. Fractions outside `[0, 1]`, a zero capacity, or
/// negative diameters are carried through the arithmetic unchanged.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModelParameters {
    /// Burner heat input, BTU/hr.
    pub btu_per_hr: f64,

    /// Fraction of burner output carried away by the convective plume.
    pub f_conv: f64,

    /// Fraction of the plume that reaches the capture wall.
    pub f_capture: f64,

    /// Fraction of the captured plume that bypasses the wall.
    pub f_bypass: f64,

    /// Characteristic thermal capacity of the captured plume, W/K.
    pub c: f64,

    /// Fraction of wall heat re-emitted as infrared.
    pub eta_rad: f64,

    /// Fraction of emitted infrared transmitted out of the emitter.
    pub eta_out: f64,

    /// Exposed area of the receiving body, m².
    pub area: f64,

    /// Absorptivity of the receiving body's exposed surface.
    pub alpha: f64,

    /// Emitter inlet diameter, inches.
    pub inlet_d_in: f64,

    /// Emitter outlet diameter, inches.
    pub outlet_d_in: f64,
}

impl Default for ModelParameters {
    fn default() -> Self {
        Self {
            btu_per_hr: 50_000.0,
            f_conv: 0.70,
            f_capture: 0.85,
            f_bypass: 0.10,
            c: 17.0,
            eta_rad: 0.55,
            eta_out: 0.65,
            area: 0.70,
            alpha: 0.80,
            inlet_d_in: 24.0,
            outlet_d_in: 3.0,
        }
    }
}

impl ModelParameters {
    /// Burner heat input as a power.
    #[must_use]
    pub fn burner_power(&self) -> Power {
        burner_power(self.btu_per_hr)
    }

    /// Characteristic thermal capacity as a conductance-dimensioned quantity.
    #[must_use]
    pub fn capacity(&self) -> ThermalConductance {
        ThermalConductance::new::<watt_per_kelvin>(self.c)
    }

    /// Exposed area of the receiving body.
    #[must_use]
    pub fn exposed_area(&self) -> Area {
        Area::new::<square_meter>(self.area)
    }

    /// Absorptivity of the receiving body.
    #[must_use]
    pub fn absorptivity(&self) -> Ratio {
        Ratio::new::<ratio>(self.alpha)
    }

    /// Offset from the nominal emitter surface to the effective radiating source.
    ///
    /// This is the mean of the inlet and outlet radii, converted from inches
    /// to feet.
    #[must_use]
    pub fn source_standoff(&self) -> Length {
        let r_avg_in = (self.inlet_d_in / 2.0 + self.outlet_d_in / 2.0) / 2.0;
        Length::new::<foot>(r_avg_in / 12.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{length::inch, power::watt};

    #[test]
    fn defaults() {
        let params = ModelParameters::default();

        assert_relative_eq!(params.burner_power().get::<watt>(), 14_653.5535, epsilon = 1e-6);
        assert_relative_eq!(params.capacity().get::<watt_per_kelvin>(), 17.0);
        assert_relative_eq!(params.exposed_area().get::<square_meter>(), 0.70);
        assert_relative_eq!(params.absorptivity().get::<ratio>(), 0.80);
    }

    #[test]
    fn standoff_is_mean_radius() {
        let params = ModelParameters::default();
        assert_relative_eq!(params.source_standoff().get::<foot>(), 0.5625, epsilon = 1e-12);

        let params = ModelParameters {
            inlet_d_in: 10.0,
            outlet_d_in: 10.0,
            ..ModelParameters::default()
        };
        assert_relative_eq!(params.source_standoff().get::<inch>(), 5.0, epsilon = 1e-12);
    }
}
