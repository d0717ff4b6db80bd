use axum::routing::get;
use axum::{Json, Router, middleware};
use serde_json::{Value, json};

use crate::features::bills::{
    handle_get_bill, handle_get_legiscan_bill, handle_list_bills, handle_search_bills,
};
use crate::server::{AppState, require_api_key};

pub fn build_router(state: AppState) -> Router {
    let api = Router::new()
        .route("/api/bills", get(handle_list_bills))
        .route("/api/bills/search", get(handle_search_bills))
        .route("/api/bills/:congress/:bill_type/:number", get(handle_get_bill))
        .route("/api/legiscan/bills/:bill_id", get(handle_get_legiscan_bill))
        .route_layer(middleware::from_fn_with_state(state.clone(), require_api_key));

    Router::new()
        .route("/api/health", get(handle_healthcheck))
        .merge(api)
        .with_state(state)
}

pub async fn handle_healthcheck() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
