use std::ops::Deref;

use uom::si::{
    f64::{Length, Power},
    length::foot,
    power::watt,
};

/// Ordered distances from the emitter surface.
///
/// Values are not validated; a negative distance is evaluated like any other.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DistanceSeries(Vec<Length>);

impl DistanceSeries {
    /// Creates a series from distances in feet.
    pub fn from_feet(distances_ft: impl IntoIterator<Item = f64>) -> Self {
        distances_ft
            .into_iter()
            .map(Length::new::<foot>)
            .collect()
    }

    /// Creates `points` evenly spaced distances from `start` to `end`, inclusive.
    ///
    /// A single point yields `[start]`, and zero points yield an empty series.
    #[must_use]
    pub fn linspace(start: Length, end: Length, points: usize) -> Self {
        match points {
            0 => Self::default(),
            1 => Self(vec![start]),
            _ => {
                let step = (end - start) / (points - 1) as f64;
                let mut distances: Vec<_> =
                    (0..points - 1).map(|i| start + step * i as f64).collect();
                distances.push(end);
                Self(distances)
            }
        }
    }

    /// Distances expressed in feet.
    #[must_use]
    pub fn to_feet(&self) -> Vec<f64> {
        self.0.iter().map(|s| s.get::<foot>()).collect()
    }
}

impl Deref for DistanceSeries {
    type Target = [Length];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromIterator<Length> for DistanceSeries {
    fn from_iter<I: IntoIterator<Item = Length>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Absorbed power per distance, index-aligned with the [`DistanceSeries`]
/// that produced it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AbsorbedPowerSeries(Vec<Power>);

impl AbsorbedPowerSeries {
    /// Absorbed powers expressed in watts.
    #[must_use]
    pub fn to_watts(&self) -> Vec<f64> {
        self.0.iter().map(|p| p.get::<watt>()).collect()
    }
}

impl Deref for AbsorbedPowerSeries {
    type Target = [Power];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromIterator<Power> for AbsorbedPowerSeries {
    fn from_iter<I: IntoIterator<Item = Power>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn feet(value: f64) -> Length {
        Length::new::<foot>(value)
    }

    #[test]
    fn linspace_includes_endpoints() {
        let series = DistanceSeries::linspace(feet(2.), feet(8.), 200);
        assert_eq!(series.len(), 200);

        let ft = series.to_feet();
        assert_relative_eq!(ft[0], 2., epsilon = 1e-12);
        assert_relative_eq!(ft[199], 8., epsilon = 1e-12);
        assert_relative_eq!(ft[1] - ft[0], 6. / 199., epsilon = 1e-12);
    }

    #[test]
    fn linspace_degenerate_lengths() {
        assert!(DistanceSeries::linspace(feet(2.), feet(8.), 0).is_empty());

        let single = DistanceSeries::linspace(feet(2.), feet(8.), 1);
        assert_eq!(single.len(), 1);
        assert_relative_eq!(single.to_feet()[0], 2., epsilon = 1e-12);

        let pair = DistanceSeries::linspace(feet(2.), feet(8.), 2).to_feet();
        assert_relative_eq!(pair[0], 2., epsilon = 1e-12);
        assert_relative_eq!(pair[1], 8., epsilon = 1e-12);
    }

    #[test]
    fn from_feet_preserves_order() {
        let series = DistanceSeries::from_feet([5., 2., 8.]);
        let ft = series.to_feet();
        assert_eq!(ft.len(), 3);
        assert_relative_eq!(ft[0], 5., epsilon = 1e-12);
        assert_relative_eq!(ft[1], 2., epsilon = 1e-12);
        assert_relative_eq!(ft[2], 8., epsilon = 1e-12);
    }
}
