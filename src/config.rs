use clap::Parser;

use crate::error::OximetryError;
use crate::oximetry::WavelengthBand;
use crate::oximetry::aggregation::AggregationMethod;

#[derive(Parser, Debug)]
#[command(name = "oximetry-service")]
#[command(about = "Dual-wavelength blood oxygen saturation (ScvO2) estimation service")]
#[command(version)]
pub struct Cli {
    /// HTTP server port
    #[arg(short, long, default_value = "8110")]
    pub listen: u16,

    /// HTTP server host
    #[arg(long, default_value = "0.0.0.0")]
    pub host: String,

    /// Primary wavelength band in nm (ratio numerator, 660/810/940)
    #[arg(long, default_value = "660")]
    pub primary_band: u16,

    /// Secondary wavelength band in nm (ratio denominator, 660/810/940)
    #[arg(long, default_value = "810")]
    pub secondary_band: u16,

    /// Aggregation applied to repeated readings per series
    #[arg(long, value_enum, default_value = "median")]
    pub aggregation: AggregationArg,
}

#[derive(clap::ValueEnum, Clone, Debug, Default)]
pub enum AggregationArg {
    /// Median of each series (default)
    #[default]
    Median,
    /// Arithmetic mean of each series
    Mean,
}

impl Cli {
    /// Resolve the configured wavelength pair into domain bands
    pub fn to_band_pair(&self) -> Result<(WavelengthBand, WavelengthBand), OximetryError> {
        let primary = WavelengthBand::try_from(self.primary_band)?;
        let secondary = WavelengthBand::try_from(self.secondary_band)?;

        if primary == secondary {
            return Err(OximetryError::Config(format!(
                "primary and secondary bands must differ (both {} nm)",
                primary.as_nm()
            )));
        }

        Ok((primary, secondary))
    }

    /// Convert CLI args to AggregationMethod
    pub fn to_aggregation_method(&self) -> AggregationMethod {
        match self.aggregation {
            AggregationArg::Median => AggregationMethod::Median,
            AggregationArg::Mean => AggregationMethod::Mean,
        }
    }
}
