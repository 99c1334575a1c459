pub mod absorbance;
pub mod aggregation;
pub mod band;
pub mod coefficients;
pub mod pipeline;
pub mod saturation;

pub use band::WavelengthBand;
pub use coefficients::{CoefficientTable, ExtinctionPair};
pub use pipeline::{BandReadings, SaturationEstimate, SaturationPipeline};
