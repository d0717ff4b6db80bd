use axum::Json;
use axum::extract::rejection::{PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};

use crate::core::error::AppError;
use crate::features::bills::dto::{Bill, BillPage, ListBillsArgs, SearchBillsArgs};
use crate::server::AppState;

pub async fn handle_list_bills(
    State(state): State<AppState>,
    query: Result<Query<ListBillsArgs>, QueryRejection>,
) -> Result<Json<BillPage>, AppError> {
    let Query(args) = query.map_err(query_error)?;
    state.bills.list_bills(args).await.map(Json)
}

pub async fn handle_search_bills(
    State(state): State<AppState>,
    query: Result<Query<SearchBillsArgs>, QueryRejection>,
) -> Result<Json<BillPage>, AppError> {
    let Query(args) = query.map_err(query_error)?;
    state.bills.search_bills(args).await.map(Json)
}

pub async fn handle_get_bill(
    State(state): State<AppState>,
    path: Result<Path<(u32, String, String)>, PathRejection>,
) -> Result<Json<Bill>, AppError> {
    let Path((congress, bill_type, number)) = path.map_err(path_error)?;
    state
        .bills
        .get_bill(congress, &bill_type, &number)
        .await
        .map(Json)
}

pub async fn handle_get_legiscan_bill(
    State(state): State<AppState>,
    path: Result<Path<u64>, PathRejection>,
) -> Result<Json<Bill>, AppError> {
    let Path(bill_id) = path.map_err(path_error)?;
    state.bills.get_legiscan_bill(bill_id).await.map(Json)
}

fn query_error(rejection: QueryRejection) -> AppError {
    AppError::bad_request(rejection.body_text())
}

fn path_error(rejection: PathRejection) -> AppError {
    AppError::bad_request(rejection.body_text())
}
