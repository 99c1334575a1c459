use thiserror::Error;

/// Main error type for the oximetry service
#[derive(Error, Debug)]
pub enum OximetryError {
    #[error("Estimation error: {0}")]
    Estimation(#[from] EstimationError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Typed failures from the saturation computation core
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EstimationError {
    #[error("Cannot aggregate an empty series of readings")]
    EmptyInput,

    #[error("Division by zero: {0} is zero")]
    DivisionByZero(&'static str),

    #[error(
        "Invalid measurement: reference {reference} over attenuated {attenuated} is not a positive ratio"
    )]
    InvalidMeasurement { reference: f64, attenuated: f64 },

    #[error("Degenerate system: saturation denominator is zero for absorbance ratio {ratio}")]
    DegenerateSystem { ratio: f64 },

    #[error("Unsupported wavelength: {0} nm. Supported bands: 660, 810, 940")]
    UnsupportedWavelength(u16),
}
