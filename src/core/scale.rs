use serde::{Deserialize, Serialize};

use crate::error::{GridError, GridResult};

/// Linear data range of one axis.
///
/// `start` maps to panel fraction 0 and `end` to 1; `start > end` is an
/// inverted axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
}

impl Default for LinearScale {
    fn default() -> Self {
        Self {
            domain_start: 0.0,
            domain_end: 1.0,
        }
    }
}

impl LinearScale {
    pub fn new(domain_start: f64, domain_end: f64) -> GridResult<Self> {
        if !domain_start.is_finite() || !domain_end.is_finite() || domain_start == domain_end {
            return Err(GridError::InvalidData(
                "scale domain must be finite and non-zero".to_owned(),
            ));
        }

        Ok(Self {
            domain_start,
            domain_end,
        })
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    #[must_use]
    pub fn is_inverted(self) -> bool {
        self.domain_start > self.domain_end
    }

    #[must_use]
    pub fn inverted(self) -> Self {
        Self {
            domain_start: self.domain_end,
            domain_end: self.domain_start,
        }
    }

    pub fn domain_to_fraction(self, value: f64) -> GridResult<f64> {
        if !value.is_finite() {
            return Err(GridError::InvalidData("value must be finite".to_owned()));
        }
        let span = self.domain_end - self.domain_start;
        Ok((value - self.domain_start) / span)
    }

    pub fn fraction_to_domain(self, fraction: f64) -> GridResult<f64> {
        if !fraction.is_finite() {
            return Err(GridError::InvalidData("fraction must be finite".to_owned()));
        }
        let span = self.domain_end - self.domain_start;
        Ok(self.domain_start + fraction * span)
    }
}

#[cfg(test)]
mod tests {
    use super::LinearScale;

    #[test]
    fn fraction_round_trip_and_inversion() {
        let scale = LinearScale::new(10.0, 110.0).expect("valid scale");
        let fraction = scale.domain_to_fraction(35.0).expect("to fraction");
        assert!((fraction - 0.25).abs() <= 1e-12);
        let back = scale.fraction_to_domain(fraction).expect("from fraction");
        assert!((back - 35.0).abs() <= 1e-12);

        let flipped = scale.inverted();
        assert!(flipped.is_inverted());
        assert!((flipped.domain_to_fraction(35.0).expect("to fraction") - 0.75).abs() <= 1e-12);
    }

    #[test]
    fn degenerate_domain_is_rejected() {
        assert!(LinearScale::new(1.0, 1.0).is_err());
        assert!(LinearScale::new(f64::NAN, 1.0).is_err());
    }
}
