//! Numeric tool endpoints
//!
//! Thin JSON adapters over `market_pricing`: the handlers validate request
//! shape through serde, forward the numeric fields, and serialise the
//! result. All three computations are pure and total, so the handlers have
//! no failure paths of their own beyond JSON extraction.

use axum::{response::Json, routing::post, Router};
use serde::Deserialize;

use market_pricing::{
    predict_listing_pop, quote, value_by_multiples, OptionKind, OptionQuote, Prediction,
    PredictionInputs, ValuationInputs, ValuationSummary,
};

use super::AppState;

/// Option pricing request.
///
/// Field names follow the quant convention used on the wire: `S` spot,
/// `K` strike, `T` expiry in years, `r` rate, `sigma` volatility.
#[derive(Debug, Clone, Deserialize)]
pub struct OptionRequest {
    /// Spot price
    #[serde(rename = "S")]
    pub spot: f64,
    /// Strike price
    #[serde(rename = "K")]
    pub strike: f64,
    /// Time to expiry in years
    #[serde(rename = "T")]
    pub expiry: f64,
    /// Risk-free rate (decimal)
    pub r: f64,
    /// Volatility (decimal)
    pub sigma: f64,
    /// Option type label; "call" (any case) prices a call, anything else a put
    #[serde(rename = "type")]
    pub option_type: String,
}

/// Build the tools routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/tools/black_scholes", post(black_scholes_handler))
        .route("/api/valuation", post(valuation_handler))
        .route("/api/predict", post(predict_handler))
}

/// POST /api/tools/black_scholes - Price a European option with Greeks
async fn black_scholes_handler(Json(request): Json<OptionRequest>) -> Json<OptionQuote> {
    let kind = OptionKind::from_label(&request.option_type);
    Json(quote(
        request.spot,
        request.strike,
        request.expiry,
        request.r,
        request.sigma,
        kind,
    ))
}

/// POST /api/valuation - Relative valuation over enabled multiples
async fn valuation_handler(Json(inputs): Json<ValuationInputs>) -> Json<ValuationSummary> {
    Json(value_by_multiples(&inputs))
}

/// POST /api/predict - Listing-pop probability score
async fn predict_handler(Json(inputs): Json<PredictionInputs>) -> Json<Prediction> {
    Json(predict_listing_pop(&inputs))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ServerConfig;
    use crate::routes::AppState;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use std::sync::Arc;
    use tower::ServiceExt;

    fn create_test_state() -> AppState {
        AppState::new(Arc::new(ServerConfig::default()))
    }

    async fn post_json(uri: &str, body: &str) -> (StatusCode, serde_json::Value) {
        let router = routes().with_state(create_test_state());
        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header("content-type", "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let value = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
        (status, value)
    }

    #[tokio::test]
    async fn test_black_scholes_call() {
        let (status, body) = post_json(
            "/api/tools/black_scholes",
            r#"{"S":100,"K":100,"T":1,"r":0.05,"sigma":0.2,"type":"call"}"#,
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert!((body["price"].as_f64().unwrap() - 10.4506).abs() < 1e-4);
        assert!((body["delta"].as_f64().unwrap() - 0.6368).abs() < 1e-4);
        assert!(body["gamma"].as_f64().unwrap() > 0.0);
    }

    #[tokio::test]
    async fn test_black_scholes_put() {
        let (status, body) = post_json(
            "/api/tools/black_scholes",
            r#"{"S":100,"K":100,"T":1,"r":0.05,"sigma":0.2,"type":"put"}"#,
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert!((body["price"].as_f64().unwrap() - 5.5735).abs() < 1e-4);
        assert!((body["delta"].as_f64().unwrap() + 0.3632).abs() < 1e-4);
    }

    #[tokio::test]
    async fn test_black_scholes_type_label_case_insensitive() {
        let upper = post_json(
            "/api/tools/black_scholes",
            r#"{"S":100,"K":100,"T":1,"r":0.05,"sigma":0.2,"type":"CALL"}"#,
        )
        .await;
        let lower = post_json(
            "/api/tools/black_scholes",
            r#"{"S":100,"K":100,"T":1,"r":0.05,"sigma":0.2,"type":"call"}"#,
        )
        .await;

        assert_eq!(upper.1, lower.1);
    }

    #[tokio::test]
    async fn test_black_scholes_degenerate_expiry() {
        let (status, body) = post_json(
            "/api/tools/black_scholes",
            r#"{"S":100,"K":100,"T":0,"r":0.05,"sigma":0.2,"type":"call"}"#,
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        for field in ["price", "delta", "gamma", "vega", "theta", "rho"] {
            assert_eq!(body[field], 0.0, "expected zero {field}");
        }
    }

    #[tokio::test]
    async fn test_black_scholes_rejects_malformed_body() {
        let (status, _) = post_json("/api/tools/black_scholes", r#"{"S":100}"#).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_valuation_endpoint() {
        let (status, body) = post_json(
            "/api/valuation",
            r#"{"multiples":{"pe":true,"pb":true},"growth":20}"#,
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["targetPrice"], 95.0);
        assert_eq!(body["medianMultiples"]["evEbitda"], 12.4);
        assert_eq!(body["latencyMs"], 5);
    }

    #[tokio::test]
    async fn test_valuation_no_active_multiples() {
        let (status, body) = post_json("/api/valuation", r#"{"multiples":{},"growth":10}"#).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["targetPrice"], serde_json::Value::Null);
        assert_eq!(body["premiumValidated"], true);
    }

    #[tokio::test]
    async fn test_predict_endpoint() {
        let (status, body) = post_json(
            "/api/predict",
            r#"{"npm":10,"subscription":1,"sentiment":0.5}"#,
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert!((body["probability"].as_f64().unwrap() - 0.5).abs() < 1e-12);
        let drivers = body["drivers"].as_array().unwrap();
        assert_eq!(drivers.len(), 3);
        assert_eq!(drivers[0], "NPM% contribution: 17.5 pts");
    }

    #[tokio::test]
    async fn test_tools_routes_are_post_only() {
        let router = routes().with_state(create_test_state());

        let response = router
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/api/tools/black_scholes")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }
}
