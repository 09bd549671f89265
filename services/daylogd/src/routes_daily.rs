use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::NaiveDate;
use serde::Serialize;
use tracing::error;

use daycore::{DailyRecord, StoreError};

use crate::state::SharedState;
use crate::store_exec::with_store_blocking;

#[derive(Debug, Serialize)]
pub struct ApiError {
    pub error: String,
}

type HandlerError = (StatusCode, Json<ApiError>);

fn bad_request(msg: String) -> HandlerError {
    (StatusCode::BAD_REQUEST, Json(ApiError { error: msg }))
}

fn storage_error(e: StoreError) -> HandlerError {
    error!("storage failure: {e}");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ApiError {
            error: e.to_string(),
        }),
    )
}

/// The core treats date keys as opaque strings; the shell pins them to
/// `YYYY-MM-DD` so the collection never grows junk keys.
fn check_date(date: &str) -> Result<(), HandlerError> {
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map(|_| ())
        .map_err(|_| bad_request(format!("invalid date key: {date}")))
}

pub async fn get_daily(
    State(st): State<SharedState>,
    Path(date): Path<String>,
) -> Result<Json<DailyRecord>, HandlerError> {
    check_date(&date)?;
    let record = with_store_blocking(st.store.clone(), move |store| store.get(&date))
        .await
        .expect("store task panicked")
        .map_err(storage_error)?;
    Ok(Json(record))
}

pub async fn post_daily(
    State(st): State<SharedState>,
    Path(date): Path<String>,
    Json(payload): Json<DailyRecord>,
) -> Result<Json<DailyRecord>, HandlerError> {
    check_date(&date)?;
    let record = with_store_blocking(st.store.clone(), move |store| store.upsert(&date, payload))
        .await
        .expect("store task panicked")
        .map_err(storage_error)?;
    Ok(Json(record))
}
