use axum::Router;
use axum::routing::{get, post};

use super::handlers::{device, estimation, settings};
use crate::service::SharedState;

/// Create the API router with all endpoints
pub fn create_router(state: SharedState) -> Router {
    Router::new()
        // Service identity
        .route("/device/info", get(device::get_device_info))
        // Estimation
        .route("/estimate", post(estimation::post_estimate))
        .route("/estimate/latest", get(estimation::get_latest_estimate))
        // Configuration surface
        .route("/coefficients", get(settings::get_coefficients))
        .route(
            "/wavelength_pair",
            get(settings::get_wavelength_pair).post(settings::set_wavelength_pair),
        )
        // Add state to all routes
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use tower::util::ServiceExt;

    use super::*;
    use crate::service::state::create_shared_state;

    #[tokio::test]
    async fn test_device_info_route() {
        let state = create_shared_state();
        let app = create_router(state);

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/device/info")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_coefficients_route() {
        let state = create_shared_state();
        let app = create_router(state);

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/coefficients")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_latest_estimate_route_empty() {
        let state = create_shared_state();
        let app = create_router(state);

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/estimate/latest")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_estimate_route() {
        let state = create_shared_state();
        let app = create_router(state);

        let body = serde_json::json!({
            "readings": [
                { "band_nm": 660, "reference": [10.0, 10.1, 9.9], "attenuated": [5.0, 5.1, 4.9] },
                { "band_nm": 810, "reference": [10.0], "attenuated": [6.0] }
            ]
        });

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/estimate")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_estimate_route_rejects_bad_readings() {
        let state = create_shared_state();
        let app = create_router(state);

        // Zero attenuated power in the red band
        let body = serde_json::json!({
            "readings": [
                { "band_nm": 660, "reference": [10.0], "attenuated": [0.0] },
                { "band_nm": 810, "reference": [10.0], "attenuated": [6.0] }
            ]
        });

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/estimate")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_wavelength_pair_route_rejects_unsupported_band() {
        let state = create_shared_state();
        let app = create_router(state);

        let body = serde_json::json!({ "primary_nm": 550, "secondary_nm": 810 });

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/wavelength_pair")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}
