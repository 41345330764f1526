//! IPO listing and market snapshot endpoints

use axum::{
    extract::{Path, State},
    response::Json,
    routing::get,
    Router,
};

use market_core::{find_ipo, IpoListing, MarketSnapshot};

use super::AppState;
use crate::error::ApiError;

/// Build the market data routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/ipos", get(list_ipos_handler))
        .route("/api/ipos/{symbol}", get(ipo_detail_handler))
        .route("/api/market", get(market_snapshot_handler))
}

/// GET /api/ipos - All IPO listings
async fn list_ipos_handler(State(state): State<AppState>) -> Json<Vec<IpoListing>> {
    Json((*state.listings).clone())
}

/// GET /api/ipos/{symbol} - Detail for one listing, matched case-insensitively
async fn ipo_detail_handler(
    State(state): State<AppState>,
    Path(symbol): Path<String>,
) -> Result<Json<IpoListing>, ApiError> {
    let ipo = find_ipo(&state.listings, &symbol)?;
    Ok(Json(ipo.clone()))
}

/// GET /api/market - Combined index and stock snapshot
async fn market_snapshot_handler(State(state): State<AppState>) -> Json<MarketSnapshot> {
    Json((*state.snapshot).clone())
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

    async fn get_json(uri: &str) -> (StatusCode, serde_json::Value) {
        let router = routes().with_state(create_test_state());
        let response = router
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&body).unwrap())
    }

    #[tokio::test]
    async fn test_list_ipos() {
        let (status, body) = get_json("/api/ipos").await;
        assert_eq!(status, StatusCode::OK);

        let listings = body.as_array().unwrap();
        assert_eq!(listings.len(), 3);
        assert_eq!(listings[0]["symbol"], "IDEAFO");
        assert_eq!(listings[1]["issuePrice"], 500.0);
    }

    #[tokio::test]
    async fn test_ipo_detail_case_insensitive() {
        let (status, body) = get_json("/api/ipos/tatatech").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["symbol"], "TATATECH");
        assert_eq!(body["registrar"], "Link Intime");
        assert_eq!(body["subscription"]["QIB"], 203.4);
    }

    #[tokio::test]
    async fn test_ipo_detail_unknown_symbol() {
        let (status, body) = get_json("/api/ipos/UNKNOWN").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["detail"], "IPO not found");
    }

    #[tokio::test]
    async fn test_market_snapshot() {
        let (status, body) = get_json("/api/market").await;
        assert_eq!(status, StatusCode::OK);

        assert_eq!(body["indices"].as_array().unwrap().len(), 4);
        assert_eq!(body["indices"][0]["name"], "NIFTY 50");
        assert_eq!(body["stocks"].as_array().unwrap().len(), 5);
        assert_eq!(body["stocks"][0]["symbol"], "RELIANCE");
    }
}
