use chrono::{DateTime, Utc};

use crate::error::EstimationError;
use crate::oximetry::absorbance::AbsorbanceCalculator;
use crate::oximetry::aggregation::{AggregationMethod, ReadingAggregator};
use crate::oximetry::band::WavelengthBand;
use crate::oximetry::coefficients::CoefficientTable;
use crate::oximetry::saturation::SaturationEstimator;

/// Repeated optical power readings for one wavelength band
#[derive(Debug, Clone, PartialEq)]
pub struct BandReadings {
    pub band: WavelengthBand,
    /// Readings through the reference medium (air)
    pub reference: Vec<f64>,
    /// Readings through the attenuating medium (tissue sample)
    pub attenuated: Vec<f64>,
}

impl BandReadings {
    pub fn new(band: WavelengthBand, reference: Vec<f64>, attenuated: Vec<f64>) -> Self {
        Self {
            band,
            reference,
            attenuated,
        }
    }
}

/// Result of one full estimation run
#[derive(Debug, Clone, PartialEq)]
pub struct SaturationEstimate {
    pub timestamp: DateTime<Utc>,
    pub primary_band: WavelengthBand,
    pub secondary_band: WavelengthBand,
    pub primary_absorbance: f64,
    pub secondary_absorbance: f64,
    /// Absorbance ratio R = A_primary / A_secondary
    pub ratio: f64,
    /// Unrounded percentage; rounding is the consumer's concern
    pub saturation_percent: f64,
}

/// End-to-end estimation chain over value inputs: aggregate each reading
/// series, compute per-band absorbances, combine into R, solve for the
/// saturation percentage.
///
/// Stateless apart from configuration; any failure aborts immediately
/// with the typed error and leaves nothing to clean up.
pub struct SaturationPipeline {
    aggregator: Box<dyn ReadingAggregator>,
    absorbance: AbsorbanceCalculator,
    estimator: SaturationEstimator,
}

impl SaturationPipeline {
    pub fn new(method: AggregationMethod, table: CoefficientTable) -> Self {
        Self {
            aggregator: method.create(),
            absorbance: AbsorbanceCalculator::new(),
            estimator: SaturationEstimator::new(table),
        }
    }

    /// Run the full chain for one primary/secondary reading set
    pub fn run(
        &self,
        primary: &BandReadings,
        secondary: &BandReadings,
    ) -> Result<SaturationEstimate, EstimationError> {
        let primary_absorbance = self.band_absorbance(primary)?;
        let secondary_absorbance = self.band_absorbance(secondary)?;

        let ratio = SaturationEstimator::ratio(primary_absorbance, secondary_absorbance)?;
        let saturation_percent =
            self.estimator
                .saturation_for_bands(ratio, primary.band, secondary.band)?;

        tracing::debug!(
            "Estimated: A_{}={:.5}, A_{}={:.5}, R={:.4}, saturation={:.2}%",
            primary.band.as_nm(),
            primary_absorbance,
            secondary.band.as_nm(),
            secondary_absorbance,
            ratio,
            saturation_percent
        );

        Ok(SaturationEstimate {
            timestamp: Utc::now(),
            primary_band: primary.band,
            secondary_band: secondary.band,
            primary_absorbance,
            secondary_absorbance,
            ratio,
            saturation_percent,
        })
    }

    fn band_absorbance(&self, readings: &BandReadings) -> Result<f64, EstimationError> {
        let reference = self.aggregator.aggregate(&readings.reference)?;
        let attenuated = self.aggregator.aggregate(&readings.attenuated)?;
        self.absorbance.calculate(reference, attenuated)
    }
}
