use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::oximetry::{CoefficientTable, SaturationEstimate, WavelengthBand};

// ============= Device Endpoints =============

#[derive(Debug, Serialize)]
pub struct DeviceInfoResponse {
    #[serde(rename = "type")]
    pub device_type: String,
    pub name: String,
    pub capabilities: DeviceCapabilities,
}

#[derive(Debug, Serialize)]
pub struct DeviceCapabilities {
    pub method: String,
    pub supported_bands_nm: Vec<u16>,
    pub aggregations: Vec<String>,
}

// ============= Estimation Endpoints =============

#[derive(Debug, Deserialize)]
pub struct BandReadingsRequest {
    pub band_nm: u16,
    /// Repeated readings through the reference medium (air)
    pub reference: Vec<f64>,
    /// Repeated readings through the tissue sample
    pub attenuated: Vec<f64>,
}

#[derive(Debug, Deserialize)]
pub struct EstimateRequest {
    /// One entry per measured band; must cover the configured pair
    pub readings: Vec<BandReadingsRequest>,
}

#[derive(Debug, Serialize)]
pub struct EstimateResponse {
    pub timestamp: DateTime<Utc>,
    pub primary_band_nm: u16,
    pub secondary_band_nm: u16,
    pub primary_absorbance: f64,
    pub secondary_absorbance: f64,
    pub ratio: f64,
    pub saturation_percent: f64,
}

impl From<&SaturationEstimate> for EstimateResponse {
    fn from(estimate: &SaturationEstimate) -> Self {
        Self {
            timestamp: estimate.timestamp,
            primary_band_nm: estimate.primary_band.as_nm(),
            secondary_band_nm: estimate.secondary_band.as_nm(),
            primary_absorbance: estimate.primary_absorbance,
            secondary_absorbance: estimate.secondary_absorbance,
            ratio: estimate.ratio,
            saturation_percent: estimate.saturation_percent,
        }
    }
}

// ============= Settings Endpoints =============

#[derive(Debug, Deserialize)]
pub struct WavelengthPairRequest {
    pub primary_nm: u16,
    pub secondary_nm: u16,
}

#[derive(Debug, Serialize)]
pub struct WavelengthPairResponse {
    pub primary_nm: u16,
    pub secondary_nm: u16,
}

#[derive(Debug, Serialize)]
pub struct BandCoefficients {
    pub band_nm: u16,
    pub hbo2: f64,
    pub hb: f64,
}

#[derive(Debug, Serialize)]
pub struct CoefficientTableResponse {
    pub bands: Vec<BandCoefficients>,
}

impl From<&CoefficientTable> for CoefficientTableResponse {
    fn from(table: &CoefficientTable) -> Self {
        Self {
            bands: WavelengthBand::ALL
                .iter()
                .map(|&band| {
                    let pair = table.pair_for(band);
                    BandCoefficients {
                        band_nm: band.as_nm(),
                        hbo2: pair.hbo2,
                        hb: pair.hb,
                    }
                })
                .collect(),
        }
    }
}

// ============= Error Response =============

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
