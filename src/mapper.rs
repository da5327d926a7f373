//! Conversions between a raw property value and its view projections.
//!
//! A slider works on a fixed tick range, a spinner works either directly on
//! values or on indices into a discrete valid-value set, and both have to
//! stay consistent with the raw value under an arbitrary
//! (minimum, maximum, increment) domain. Ranges may span the full 64-bit
//! signed space, so every subtraction/multiplication here goes through i128.

use log::warn;

use crate::controls::ControlError;
use crate::property::{IntegerDomain, Representation};

/// Fixed resolution of the slider, positions run from 0 to this value.
pub const SLIDER_TICKS: i32 = 100_000_000;

pub struct IntegerValueMapper {
    domain: IntegerDomain,
}

impl IntegerValueMapper {
    pub fn new(domain: IntegerDomain) -> Result<IntegerValueMapper, ControlError> {
        if domain.representation == Representation::Boolean {
            return Err(ControlError::UnsupportedRepresentation(domain.representation));
        }

        if domain.minimum > domain.maximum {
            return Err(ControlError::InvalidDomain(format!(
                "minimum {} exceeds maximum {}",
                domain.minimum, domain.maximum
            )));
        }

        if domain.increment <= 0 {
            return Err(ControlError::InvalidDomain(format!(
                "increment must be positive, got {}",
                domain.increment
            )));
        }

        Ok(IntegerValueMapper { domain })
    }

    pub fn domain(&self) -> &IntegerDomain {
        &self.domain
    }

    fn range_len(&self) -> i128 {
        i128::from(self.domain.maximum) - i128::from(self.domain.minimum)
    }

    /// Affine re-scaling of `value` onto the slider's tick range.
    ///
    /// The minimum maps to 0, the maximum to [`SLIDER_TICKS`], and the result
    /// is monotone in `value`.
    pub fn value_to_slider_position(&self, value: i64) -> i32 {
        let range = self.range_len();
        if range == 0 {
            return 0;
        }

        let clamped = value.clamp(self.domain.minimum, self.domain.maximum);
        let offset = i128::from(clamped) - i128::from(self.domain.minimum);
        let position = (offset * i128::from(SLIDER_TICKS) + range / 2) / range;

        position as i32
    }

    /// Inverse of [`value_to_slider_position`], exact only at the endpoints.
    ///
    /// [`value_to_slider_position`]: IntegerValueMapper::value_to_slider_position
    pub fn slider_position_to_value(&self, position: i32) -> i64 {
        let range = self.range_len();
        if range == 0 {
            return self.domain.minimum;
        }

        let ticks = i128::from(SLIDER_TICKS);
        let pos = i128::from(position.clamp(0, SLIDER_TICKS));
        let offset = (range * pos + ticks / 2) / ticks;
        let value = i128::from(self.domain.minimum) + offset;

        // Rounding may overshoot the bounds by one step
        value.clamp(i128::from(self.domain.minimum), i128::from(self.domain.maximum)) as i64
    }

    /// Snaps a candidate from a continuous control onto the increment grid.
    ///
    /// Exact bounds pass through untouched, so both ends of the range stay
    /// reachable even when `(maximum - minimum)` is not a multiple of the
    /// increment. When flooring onto the grid would land back on `previous`,
    /// the result is nudged one increment in the direction of the movement,
    /// so a single slider tick never degenerates into a no-op on coarse grids.
    pub fn snap_to_increment(&self, candidate: i64, previous: i64) -> i64 {
        let minimum = self.domain.minimum;
        let maximum = self.domain.maximum;

        if candidate == minimum || candidate == maximum {
            return candidate;
        }

        let clamped = candidate.clamp(minimum, maximum);
        let increment = i128::from(self.domain.increment);
        let offset = i128::from(clamped) - i128::from(minimum);
        let remainder = offset % increment;

        if remainder == 0 {
            return clamped;
        }

        let snapped = (i128::from(minimum) + offset - remainder) as i64;
        if snapped == previous {
            let step = if candidate > previous { increment } else { -increment };
            let nudged = i128::from(previous) + step;
            return nudged.clamp(i128::from(minimum), i128::from(maximum)) as i64;
        }

        snapped
    }

    /// One discrete UI step away from `previous`, clamped into the domain.
    pub fn step_value(&self, previous: i64, up: bool) -> i64 {
        if self.domain.valid_values.is_empty() {
            let step = i128::from(self.domain.increment);
            let stepped = i128::from(previous) + if up { step } else { -step };
            return stepped.clamp(
                i128::from(self.domain.minimum),
                i128::from(self.domain.maximum),
            ) as i64;
        }

        let (low, high) = self.spin_range();
        let index = (self.value_to_index(previous) + if up { 1 } else { -1 }).clamp(low, high);
        self.index_to_value(index).unwrap_or(previous)
    }

    /// Position of `value` in the valid-value set, or the value itself when
    /// no set is present.
    ///
    /// A value missing from the set falls back to index 0, matching what
    /// camera SDK dialogs do; the fallback is logged since it usually points
    /// at a misconfigured property.
    pub fn value_to_index(&self, value: i64) -> i64 {
        if self.domain.valid_values.is_empty() {
            return value;
        }

        match self.domain.valid_values.iter().position(|v| *v == value) {
            Some(index) => index as i64,
            None => {
                warn!("value {} is not in the valid value set, falling back to index 0", value);
                0
            }
        }
    }

    /// Value at `index` in the valid-value set, or `index` itself when no set
    /// is present. `None` means the caller passed an index outside the range
    /// announced by [`spin_range`].
    ///
    /// [`spin_range`]: IntegerValueMapper::spin_range
    pub fn index_to_value(&self, index: i64) -> Option<i64> {
        if self.domain.valid_values.is_empty() {
            return Some(index);
        }

        usize::try_from(index)
            .ok()
            .and_then(|i| self.domain.valid_values.get(i).copied())
    }

    /// Bounds for the spinner: indices into the valid-value set when one is
    /// present, the raw value range otherwise.
    pub fn spin_range(&self) -> (i64, i64) {
        if self.domain.valid_values.is_empty() {
            (self.domain.minimum, self.domain.maximum)
        } else {
            (0, self.domain.valid_values.len() as i64 - 1)
        }
    }

    pub fn spin_step(&self) -> i64 {
        if self.domain.valid_values.is_empty() {
            self.domain.increment
        } else {
            1
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn linear(minimum: i64, maximum: i64, increment: i64) -> IntegerValueMapper {
        let domain = IntegerDomain::contiguous(minimum, maximum, increment, Representation::Linear);
        IntegerValueMapper::new(domain).unwrap()
    }

    #[test]
    fn boolean_representation_is_a_configuration_error() {
        let domain = IntegerDomain::contiguous(0, 1, 1, Representation::Boolean);
        assert!(matches!(
            IntegerValueMapper::new(domain),
            Err(ControlError::UnsupportedRepresentation(_))
        ));
    }

    #[test]
    fn inverted_bounds_are_rejected() {
        let domain = IntegerDomain::contiguous(10, 0, 1, Representation::Linear);
        assert!(matches!(
            IntegerValueMapper::new(domain),
            Err(ControlError::InvalidDomain(_))
        ));
    }

    #[test]
    fn slider_position_is_exact_at_the_bounds() {
        let mapper = linear(-50, 150, 1);

        assert_eq!(mapper.value_to_slider_position(-50), 0);
        assert_eq!(mapper.value_to_slider_position(150), SLIDER_TICKS);
        assert_eq!(mapper.slider_position_to_value(0), -50);
        assert_eq!(mapper.slider_position_to_value(SLIDER_TICKS), 150);
    }

    #[test]
    fn slider_mapping_survives_the_full_i64_span() {
        let mapper = linear(i64::MIN, i64::MAX, 1);

        assert_eq!(mapper.value_to_slider_position(i64::MIN), 0);
        assert_eq!(mapper.value_to_slider_position(i64::MAX), SLIDER_TICKS);
        assert_eq!(mapper.slider_position_to_value(0), i64::MIN);
        assert_eq!(mapper.slider_position_to_value(SLIDER_TICKS), i64::MAX);

        let mid = mapper.value_to_slider_position(0);
        assert!(mid > 0 && mid < SLIDER_TICKS);
    }

    #[test]
    fn degenerate_range_maps_to_position_zero() {
        let mapper = linear(7, 7, 1);

        assert_eq!(mapper.value_to_slider_position(7), 0);
        assert_eq!(mapper.slider_position_to_value(SLIDER_TICKS / 2), 7);
    }

    #[test]
    fn snap_floors_onto_the_grid() {
        let mapper = linear(10, 100, 8);

        assert_eq!(mapper.snap_to_increment(33, 10), 26);
        assert_eq!(mapper.snap_to_increment(26, 10), 26);
    }

    #[test]
    fn snap_passes_exact_bounds_through() {
        let mapper = linear(0, 10, 4);

        assert_eq!(mapper.snap_to_increment(10, 8), 10);
        assert_eq!(mapper.snap_to_increment(0, 4), 0);
    }

    #[test]
    fn snap_clamps_out_of_range_candidates() {
        let mapper = linear(0, 100, 7);

        assert_eq!(mapper.snap_to_increment(1000, 0), 98);
        assert_eq!(mapper.snap_to_increment(-1000, 98), 0);
    }

    #[test]
    fn snap_nudges_when_flooring_lands_on_the_previous_value() {
        let mapper = linear(0, 100, 10);

        // 42 floors to 40; coming from 40 that would be a no-op
        assert_eq!(mapper.snap_to_increment(42, 40), 50);
        assert_eq!(mapper.snap_to_increment(38, 40), 30);
    }

    #[test]
    fn snap_nudge_stays_inside_the_bounds() {
        let mapper = linear(0, 95, 10);

        // 90 + 10 would overshoot, clamp to the maximum instead
        assert_eq!(mapper.snap_to_increment(93, 90), 95);
    }

    #[test]
    fn step_value_moves_by_one_increment() {
        let mapper = linear(0, 100, 8);

        assert_eq!(mapper.step_value(16, true), 24);
        assert_eq!(mapper.step_value(16, false), 8);
        assert_eq!(mapper.step_value(96, true), 100);
        assert_eq!(mapper.step_value(0, false), 0);
    }

    #[test]
    fn value_set_index_mapping_round_trips() {
        let domain =
            IntegerDomain::with_valid_values(Representation::PureNumber, vec![10, 20, 50]);
        let mapper = IntegerValueMapper::new(domain).unwrap();

        assert_eq!(mapper.value_to_index(20), 1);
        assert_eq!(mapper.index_to_value(1), Some(20));
        assert_eq!(mapper.index_to_value(mapper.value_to_index(20)), Some(20));
        assert_eq!(mapper.spin_range(), (0, 2));
        assert_eq!(mapper.spin_step(), 1);
    }

    #[test]
    fn missing_value_falls_back_to_index_zero() {
        let domain =
            IntegerDomain::with_valid_values(Representation::PureNumber, vec![10, 20, 50]);
        let mapper = IntegerValueMapper::new(domain).unwrap();

        assert_eq!(mapper.value_to_index(33), 0);
    }

    #[test]
    fn out_of_range_index_is_reported_not_guessed() {
        let domain =
            IntegerDomain::with_valid_values(Representation::PureNumber, vec![10, 20, 50]);
        let mapper = IntegerValueMapper::new(domain).unwrap();

        assert_eq!(mapper.index_to_value(3), None);
        assert_eq!(mapper.index_to_value(-1), None);
    }

    #[test]
    fn step_value_walks_the_valid_value_set() {
        let domain =
            IntegerDomain::with_valid_values(Representation::PureNumber, vec![10, 20, 50]);
        let mapper = IntegerValueMapper::new(domain).unwrap();

        assert_eq!(mapper.step_value(20, true), 50);
        assert_eq!(mapper.step_value(20, false), 10);
        assert_eq!(mapper.step_value(50, true), 50);
    }
}
