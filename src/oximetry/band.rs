use crate::error::EstimationError;

/// Supported LED wavelength bands
///
/// The pair used for an estimate is caller configuration; no band is
/// hardwired as "the" red term.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WavelengthBand {
    /// Red, 660 nm
    Nm660,
    /// Near-infrared, 810 nm (isosbestic region)
    Nm810,
    /// Near-infrared, 940 nm
    Nm940,
}

impl WavelengthBand {
    pub const ALL: [WavelengthBand; 3] = [
        WavelengthBand::Nm660,
        WavelengthBand::Nm810,
        WavelengthBand::Nm940,
    ];

    pub fn as_nm(&self) -> u16 {
        match self {
            WavelengthBand::Nm660 => 660,
            WavelengthBand::Nm810 => 810,
            WavelengthBand::Nm940 => 940,
        }
    }
}

impl TryFrom<u16> for WavelengthBand {
    type Error = EstimationError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            660 => Ok(WavelengthBand::Nm660),
            810 => Ok(WavelengthBand::Nm810),
            940 => Ok(WavelengthBand::Nm940),
            _ => Err(EstimationError::UnsupportedWavelength(value)),
        }
    }
}
