use uom::si::{f64::Power, power::watt};

/// Watts per BTU/hr used for burner ratings.
pub const BTU_PER_HR_TO_W: f64 = 0.29307107;

/// Converts a burner rating in BTU/hr to a [`Power`].
#[must_use]
pub fn burner_power(btu_per_hr: f64) -> Power {
    Power::new::<watt>(btu_per_hr * BTU_PER_HR_TO_W)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn uses_fixed_factor() {
        assert_eq!(burner_power(1.0).get::<watt>(), BTU_PER_HR_TO_W);
        assert_relative_eq!(
            burner_power(50_000.0).get::<watt>(),
            14_653.5535,
            epsilon = 1e-6
        );
    }

    #[test]
    fn is_linear() {
        let full = burner_power(80_000.0).get::<watt>();
        let half = burner_power(40_000.0).get::<watt>();
        assert_relative_eq!(half * 2.0, full);
    }
}
