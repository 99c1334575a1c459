use crate::oximetry::band::WavelengthBand;

/// Molar extinction coefficients for one wavelength band, in cm⁻¹/M
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExtinctionPair {
    /// Oxygenated hemoglobin (HbO2)
    pub hbo2: f64,
    /// Deoxygenated hemoglobin (Hb)
    pub hb: f64,
}

impl ExtinctionPair {
    pub fn new(hbo2: f64, hb: f64) -> Self {
        Self { hbo2, hb }
    }
}

/// Extinction coefficients for every supported band.
///
/// Immutable once constructed; an instance is injected into the estimator
/// rather than read from module-level constants, so alternate calibration
/// datasets can coexist.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoefficientTable {
    nm660: ExtinctionPair,
    nm810: ExtinctionPair,
    nm940: ExtinctionPair,
}

impl CoefficientTable {
    pub fn new(nm660: ExtinctionPair, nm810: ExtinctionPair, nm940: ExtinctionPair) -> Self {
        Self {
            nm660,
            nm810,
            nm940,
        }
    }

    /// Moaveni's extinction coefficient data:
    /// at 660nm HbO2 320, Hb 3200; at 810nm HbO2 860, Hb 880;
    /// at 940nm HbO2 1200, Hb 800.
    pub fn moaveni() -> Self {
        Self {
            nm660: ExtinctionPair::new(320.0, 3200.0),
            nm810: ExtinctionPair::new(860.0, 880.0),
            nm940: ExtinctionPair::new(1200.0, 800.0),
        }
    }

    /// Coefficient pair for a supported band. Total over the closed band
    /// enum; unrecognized wavelengths are rejected at the u16 boundary.
    pub fn pair_for(&self, band: WavelengthBand) -> ExtinctionPair {
        match band {
            WavelengthBand::Nm660 => self.nm660,
            WavelengthBand::Nm810 => self.nm810,
            WavelengthBand::Nm940 => self.nm940,
        }
    }
}

impl Default for CoefficientTable {
    fn default() -> Self {
        Self::moaveni()
    }
}
