use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use crate::api::models::*;
use crate::oximetry::{BandReadings, SaturationPipeline, WavelengthBand};
use crate::service::SharedState;

type ApiError = (StatusCode, Json<ErrorResponse>);

fn unprocessable(message: String) -> ApiError {
    (
        StatusCode::UNPROCESSABLE_ENTITY,
        Json(ErrorResponse { error: message }),
    )
}

/// POST /estimate - Run the estimation pipeline over submitted readings
///
/// The request must carry reading series for both configured bands; the
/// band pair itself is configuration, not inferred from the payload.
pub async fn post_estimate(
    State(state): State<SharedState>,
    Json(request): Json<EstimateRequest>,
) -> Result<Json<EstimateResponse>, ApiError> {
    let (band_pair, aggregation, coefficients) = {
        let state = state.read().await;
        (state.band_pair(), state.aggregation, state.coefficients)
    };
    let (primary_band, secondary_band) = band_pair;

    let primary = readings_for_band(&request, primary_band)?;
    let secondary = readings_for_band(&request, secondary_band)?;

    let pipeline = SaturationPipeline::new(aggregation, coefficients);
    let estimate = pipeline.run(&primary, &secondary).map_err(|e| {
        tracing::warn!("Rejected estimation request: {}", e);
        unprocessable(e.to_string())
    })?;

    {
        let mut state = state.write().await;
        state.latest_estimate = Some(estimate.clone());
    }

    Ok(Json(EstimateResponse::from(&estimate)))
}

/// GET /estimate/latest - Most recent estimate, if any
pub async fn get_latest_estimate(
    State(state): State<SharedState>,
) -> Result<Json<EstimateResponse>, ApiError> {
    let state = state.read().await;

    match &state.latest_estimate {
        Some(estimate) => Ok(Json(EstimateResponse::from(estimate))),
        None => Err((
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: "no estimate computed yet".to_string(),
            }),
        )),
    }
}

fn readings_for_band(
    request: &EstimateRequest,
    band: WavelengthBand,
) -> Result<BandReadings, ApiError> {
    let entry = request
        .readings
        .iter()
        .find(|r| r.band_nm == band.as_nm())
        .ok_or_else(|| {
            unprocessable(format!(
                "no readings supplied for configured band {} nm",
                band.as_nm()
            ))
        })?;

    Ok(BandReadings::new(
        band,
        entry.reference.clone(),
        entry.attenuated.clone(),
    ))
}
