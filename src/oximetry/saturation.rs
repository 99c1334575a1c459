use crate::error::EstimationError;
use crate::oximetry::band::WavelengthBand;
use crate::oximetry::coefficients::{CoefficientTable, ExtinctionPair};

/// Two-wavelength Beer-Lambert saturation solver
///
/// Combines absorbances at a primary and a secondary band into the ratio
/// R and solves the two-component (HbO2/Hb) linear system for the
/// saturation percentage. Coefficients are resolved independently per
/// band; any pair of supported bands is accepted.
pub struct SaturationEstimator {
    table: CoefficientTable,
}

impl SaturationEstimator {
    pub fn new(table: CoefficientTable) -> Self {
        Self { table }
    }

    /// Absorbance ratio R = A_primary / A_secondary
    pub fn ratio(primary_absorbance: f64, secondary_absorbance: f64) -> Result<f64, EstimationError> {
        if secondary_absorbance == 0.0 {
            return Err(EstimationError::DivisionByZero("secondary absorbance"));
        }

        Ok(primary_absorbance / secondary_absorbance)
    }

    /// Solve for saturation given R and the two coefficient pairs:
    ///
    /// saturation = (εHb_p − R·εHb_s) / (εHb_p − εHbO2_p + R·(εHbO2_s − εHb_s)) × 100
    ///
    /// Returned unrounded; mathematically unbounded even though the
    /// physiological range is [0, 100].
    pub fn saturation_from_ratio(
        ratio: f64,
        primary: ExtinctionPair,
        secondary: ExtinctionPair,
    ) -> Result<f64, EstimationError> {
        let numerator = primary.hb - ratio * secondary.hb;
        let denominator = primary.hb - primary.hbo2 + ratio * (secondary.hbo2 - secondary.hb);

        if denominator == 0.0 {
            return Err(EstimationError::DegenerateSystem { ratio });
        }

        Ok(numerator / denominator * 100.0)
    }

    /// Full estimate from two absorbances, resolving coefficients from
    /// the injected table
    pub fn estimate(
        &self,
        primary_absorbance: f64,
        secondary_absorbance: f64,
        primary_band: WavelengthBand,
        secondary_band: WavelengthBand,
    ) -> Result<f64, EstimationError> {
        let ratio = Self::ratio(primary_absorbance, secondary_absorbance)?;
        self.saturation_for_bands(ratio, primary_band, secondary_band)
    }

    /// Saturation from a precomputed ratio, resolving coefficients from
    /// the injected table
    pub fn saturation_for_bands(
        &self,
        ratio: f64,
        primary_band: WavelengthBand,
        secondary_band: WavelengthBand,
    ) -> Result<f64, EstimationError> {
        Self::saturation_from_ratio(
            ratio,
            self.table.pair_for(primary_band),
            self.table.pair_for(secondary_band),
        )
    }
}
