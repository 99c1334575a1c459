use axum::Json;

use crate::api::models::*;
use crate::oximetry::WavelengthBand;

/// GET /device/info - Return service identity and capabilities
pub async fn get_device_info() -> Json<DeviceInfoResponse> {
    Json(DeviceInfoResponse {
        device_type: "oximeter".to_string(),
        name: "Dual-Wavelength ScvO2 Estimator".to_string(),
        capabilities: DeviceCapabilities {
            method: "dual-wavelength absorption ratio (Beer-Lambert)".to_string(),
            supported_bands_nm: WavelengthBand::ALL.iter().map(|b| b.as_nm()).collect(),
            aggregations: vec!["median".to_string(), "mean".to_string()],
        },
    })
}
