use std::sync::Arc;

use tokio::sync::RwLock;

use crate::oximetry::aggregation::AggregationMethod;
use crate::oximetry::{CoefficientTable, SaturationEstimate, WavelengthBand};

/// Application state for the oximetry service
///
/// The estimation core itself is pure; the configured band pair,
/// aggregation policy, coefficient table, and the latest estimate live
/// here in the service shell.
#[derive(Debug, Clone)]
pub struct ServiceState {
    /// Band used for the ratio numerator (conventionally red)
    pub primary_band: WavelengthBand,
    /// Band used for the ratio denominator (conventionally NIR)
    pub secondary_band: WavelengthBand,

    pub aggregation: AggregationMethod,
    pub coefficients: CoefficientTable,

    /// Most recent estimate, in memory only
    pub latest_estimate: Option<SaturationEstimate>,
}

impl Default for ServiceState {
    fn default() -> Self {
        Self {
            primary_band: WavelengthBand::Nm660,
            secondary_band: WavelengthBand::Nm810,
            aggregation: AggregationMethod::Median,
            coefficients: CoefficientTable::moaveni(),
            latest_estimate: None,
        }
    }
}

impl ServiceState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn band_pair(&self) -> (WavelengthBand, WavelengthBand) {
        (self.primary_band, self.secondary_band)
    }
}

/// Thread-safe shared state
pub type SharedState = Arc<RwLock<ServiceState>>;

/// Create a new shared state instance with default configuration
pub fn create_shared_state() -> SharedState {
    Arc::new(RwLock::new(ServiceState::default()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_state_default() {
        let state = ServiceState::default();

        assert_eq!(state.primary_band, WavelengthBand::Nm660);
        assert_eq!(state.secondary_band, WavelengthBand::Nm810);
        assert_eq!(state.aggregation, AggregationMethod::Median);
        assert_eq!(state.coefficients, CoefficientTable::moaveni());
        assert!(state.latest_estimate.is_none());
    }

    #[test]
    fn test_band_pair() {
        let state = ServiceState {
            secondary_band: WavelengthBand::Nm940,
            ..ServiceState::default()
        };

        assert_eq!(
            state.band_pair(),
            (WavelengthBand::Nm660, WavelengthBand::Nm940)
        );
    }

    #[tokio::test]
    async fn test_shared_state() {
        let state = create_shared_state();

        // Write
        {
            let mut s = state.write().await;
            s.secondary_band = WavelengthBand::Nm940;
        }

        // Read
        {
            let s = state.read().await;
            assert_eq!(s.secondary_band, WavelengthBand::Nm940);
        }
    }
}
