use std::cmp::Ordering;

use num_traits::Zero;

use super::{Constrained, Constraint, ConstraintError};

/// Marker type enforcing that a value is strictly positive (greater than zero).
///
/// Use this type with [`Constrained<T, StrictlyPositive>`] to encode strict
/// positivity at the type level.
///
/// # Examples
///
/// ```
/// use ir_emitter_models::support::constraint::{Constrained, StrictlyPositive};
/// use uom::si::{f64::ThermalConductance, thermal_conductance::watt_per_kelvin};
///
/// // Generic constructor:
/// let ua = Constrained::<_, StrictlyPositive>::new(
///     ThermalConductance::new::<watt_per_kelvin>(12.0),
/// )
/// .unwrap();
/// assert_eq!(ua.into_inner().get::<watt_per_kelvin>(), 12.0);
///
/// // Associated constructor:
/// let y = StrictlyPositive::new(2.5).unwrap();
/// assert_eq!(y.into_inner(), 2.5);
///
/// // Error cases:
/// assert!(StrictlyPositive::new(0.0).is_err());
/// assert!(StrictlyPositive::new(-1.0).is_err());
/// assert!(StrictlyPositive::new(f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct StrictlyPositive;

impl StrictlyPositive {
    /// Constructs a [`Constrained<T, StrictlyPositive>`] if the value is strictly positive.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is zero, negative, or not a number (`NaN`).
    pub fn new<T: PartialOrd + Zero>(
        value: T,
    ) -> Result<Constrained<T, StrictlyPositive>, ConstraintError> {
        Constrained::<T, StrictlyPositive>::new(value)
    }
}

impl<T: PartialOrd + Zero> Constraint<T> for StrictlyPositive {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match value.partial_cmp(&T::zero()) {
            Some(Ordering::Greater) => Ok(()),
            Some(Ordering::Equal) => Err(ConstraintError::Zero),
            Some(Ordering::Less) => Err(ConstraintError::Negative),
            None => Err(ConstraintError::NotANumber),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use uom::si::{
        f64::{Power, ThermalConductance},
        power::watt,
        thermal_conductance::watt_per_kelvin,
    };

    #[test]
    fn floats() {
        assert!(Constrained::<f64, StrictlyPositive>::new(1.0).is_ok());
        assert!(StrictlyPositive::new(0.1).is_ok());
        assert_eq!(StrictlyPositive::new(0.0), Err(ConstraintError::Zero));
        assert_eq!(StrictlyPositive::new(-5.0), Err(ConstraintError::Negative));
        assert_eq!(
            StrictlyPositive::new(f64::NAN),
            Err(ConstraintError::NotANumber)
        );
    }

    #[test]
    fn conductances() {
        let ua = ThermalConductance::new::<watt_per_kelvin>(20.0);
        assert!(StrictlyPositive::new(ua).is_ok());

        let ua = ThermalConductance::new::<watt_per_kelvin>(0.0);
        assert!(StrictlyPositive::new(ua).is_err());

        let ua = ThermalConductance::new::<watt_per_kelvin>(-12.0);
        assert!(StrictlyPositive::new(ua).is_err());
    }

    #[test]
    fn powers() {
        assert!(StrictlyPositive::new(Power::new::<watt>(50.0)).is_ok());
        assert!(StrictlyPositive::new(Power::new::<watt>(f64::NAN)).is_err());
    }
}
