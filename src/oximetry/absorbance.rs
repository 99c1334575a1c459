use crate::error::EstimationError;

/// Absorbance from a pair of optical power readings
///
/// Formula: log10(reference / attenuated), with the reference taken in a
/// non-attenuating medium (air) and the attenuated reading through the
/// sample.
pub struct AbsorbanceCalculator;

impl AbsorbanceCalculator {
    pub fn new() -> Self {
        Self
    }

    /// Calculate the absorbance for one band.
    ///
    /// Zero attenuated power fails with `DivisionByZero`; a non-positive
    /// power ratio fails with `InvalidMeasurement` rather than letting
    /// the logarithm produce a NaN.
    ///
    /// Equal readings yield 0 (no attenuation). `reference < attenuated`
    /// yields a negative absorbance, which is anomalous but left to the
    /// caller to judge.
    pub fn calculate(&self, reference: f64, attenuated: f64) -> Result<f64, EstimationError> {
        if attenuated == 0.0 {
            return Err(EstimationError::DivisionByZero("attenuated optical power"));
        }

        let ratio = reference / attenuated;
        if ratio <= 0.0 {
            return Err(EstimationError::InvalidMeasurement {
                reference,
                attenuated,
            });
        }

        Ok(ratio.log10())
    }
}

impl Default for AbsorbanceCalculator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn test_absorbance_basic() {
        let calculator = AbsorbanceCalculator::new();

        // log10(10 / 2) = log10(5)
        let result = calculator.calculate(10.0, 2.0).unwrap();
        assert_relative_eq!(result, 0.69897, epsilon = 1e-5);
    }

    #[test]
    fn test_absorbance_no_attenuation() {
        let calculator = AbsorbanceCalculator::new();

        for x in [0.5, 1.0, 10.0, 1234.5] {
            assert_relative_eq!(calculator.calculate(x, x).unwrap(), 0.0);
        }
    }

    #[test]
    fn test_absorbance_zero_attenuated() {
        let calculator = AbsorbanceCalculator::new();

        assert_eq!(
            calculator.calculate(10.0, 0.0),
            Err(EstimationError::DivisionByZero("attenuated optical power"))
        );
        assert!(calculator.calculate(0.0, 0.0).is_err());
    }

    #[test]
    fn test_absorbance_negative_reading() {
        let calculator = AbsorbanceCalculator::new();

        let result = calculator.calculate(-10.0, 5.0);
        assert!(matches!(
            result,
            Err(EstimationError::InvalidMeasurement { .. })
        ));

        // Zero reference gives log10(0), also rejected
        let result = calculator.calculate(0.0, 5.0);
        assert!(matches!(
            result,
            Err(EstimationError::InvalidMeasurement { .. })
        ));
    }

    #[test]
    fn test_absorbance_amplification_is_not_an_error() {
        let calculator = AbsorbanceCalculator::new();

        // reference < attenuated: negative absorbance, surfaced as-is
        let result = calculator.calculate(5.0, 10.0).unwrap();
        assert!(result < 0.0);
        assert_relative_eq!(result, -0.30103, epsilon = 1e-5);
    }

    #[test]
    fn test_absorbance_scale_invariance() {
        let calculator = AbsorbanceCalculator::new();

        // Scaling both readings by the same positive constant leaves the
        // log-ratio unchanged
        let base = calculator.calculate(10.0, 5.0).unwrap();
        for k in [0.25, 2.0, 1000.0] {
            let scaled = calculator.calculate(10.0 * k, 5.0 * k).unwrap();
            assert_relative_eq!(scaled, base, epsilon = 1e-12);
        }
    }
}
