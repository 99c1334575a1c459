use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use crate::api::models::*;
use crate::oximetry::WavelengthBand;
use crate::service::SharedState;

type ApiError = (StatusCode, Json<ErrorResponse>);

/// GET /coefficients - The active extinction coefficient table
pub async fn get_coefficients(State(state): State<SharedState>) -> Json<CoefficientTableResponse> {
    let state = state.read().await;

    Json(CoefficientTableResponse::from(&state.coefficients))
}

/// GET /wavelength_pair - Get the configured band pair
pub async fn get_wavelength_pair(
    State(state): State<SharedState>,
) -> Json<WavelengthPairResponse> {
    let state = state.read().await;

    Json(WavelengthPairResponse {
        primary_nm: state.primary_band.as_nm(),
        secondary_nm: state.secondary_band.as_nm(),
    })
}

/// POST /wavelength_pair - Set the band pair used for estimates
pub async fn set_wavelength_pair(
    State(state): State<SharedState>,
    Json(request): Json<WavelengthPairRequest>,
) -> Result<Json<WavelengthPairResponse>, ApiError> {
    let primary = band_from_nm(request.primary_nm)?;
    let secondary = band_from_nm(request.secondary_nm)?;

    if primary == secondary {
        return Err((
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(ErrorResponse {
                error: format!(
                    "primary and secondary bands must differ (both {} nm)",
                    primary.as_nm()
                ),
            }),
        ));
    }

    let mut state = state.write().await;
    state.primary_band = primary;
    state.secondary_band = secondary;

    tracing::info!(
        "Wavelength pair set to {} nm / {} nm",
        primary.as_nm(),
        secondary.as_nm()
    );

    Ok(Json(WavelengthPairResponse {
        primary_nm: primary.as_nm(),
        secondary_nm: secondary.as_nm(),
    }))
}

fn band_from_nm(nm: u16) -> Result<WavelengthBand, ApiError> {
    WavelengthBand::try_from(nm).map_err(|e| {
        (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(ErrorResponse {
                error: e.to_string(),
            }),
        )
    })
}
