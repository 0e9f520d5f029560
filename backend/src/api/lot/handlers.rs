//! Handler functions for the parking-lot API.
//!
//! These functions serve the lot list and detail views, drive the
//! dashboard navigation state, and forward gate toggles and manual
//! refreshes to the `services::dashboard` controller.

use crate::api::common::{ApiResponse, service_error_to_http};
use crate::services::dashboard::{Dashboard, DashboardTab};
use crate::store::models::{Gate, ParkingLot};
use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::Json as ResponseJson,
};
use serde::Serialize;
use std::sync::Arc;

/// A lot together with its gate inventory, as the detail view needs it.
#[derive(Debug, Serialize)]
pub struct LotDetail {
    pub lot: ParkingLot,
    pub gates: Vec<Gate>,
}

/// List all parking lots. Viewing the list puts the dashboard on the lots
/// tab with no selection.
#[axum::debug_handler]
pub async fn list_lots(
    Extension(dashboard): Extension<Arc<Dashboard>>,
) -> Result<ResponseJson<ApiResponse<Vec<ParkingLot>>>, (StatusCode, String)> {
    dashboard.set_tab(DashboardTab::Lots).await;
    let lots = dashboard.list_lots().await;
    Ok(ResponseJson(ApiResponse::ok(lots)))
}

/// Enter the detail view of one lot.
#[axum::debug_handler]
pub async fn get_lot(
    Extension(dashboard): Extension<Arc<Dashboard>>,
    Path(lot_id): Path<String>,
) -> Result<ResponseJson<ApiResponse<LotDetail>>, (StatusCode, String)> {
    match dashboard.select_lot(&lot_id).await {
        Ok((lot, gates)) => Ok(ResponseJson(ApiResponse::ok(LotDetail { lot, gates }))),
        Err(error) => Err(service_error_to_http(error)),
    }
}

/// Leave the detail view and return to the lot list.
#[axum::debug_handler]
pub async fn back(
    Extension(dashboard): Extension<Arc<Dashboard>>,
) -> Result<ResponseJson<ApiResponse<serde_json::Value>>, (StatusCode, String)> {
    dashboard.back().await;
    Ok(ResponseJson(ApiResponse::success(
        serde_json::json!({}),
        "Selection cleared",
    )))
}

/// Manually refresh one lot's data.
#[axum::debug_handler]
pub async fn refresh_lot(
    Extension(dashboard): Extension<Arc<Dashboard>>,
    Path(lot_id): Path<String>,
) -> Result<ResponseJson<ApiResponse<ParkingLot>>, (StatusCode, String)> {
    match dashboard.refresh_lot(&lot_id).await {
        Ok(lot) => Ok(ResponseJson(ApiResponse::ok(lot))),
        Err(error) => Err(service_error_to_http(error)),
    }
}

/// Toggle a gate open or closed. Non-operational gates are returned
/// unchanged rather than failing.
#[axum::debug_handler]
pub async fn toggle_gate(
    Extension(dashboard): Extension<Arc<Dashboard>>,
    Path((lot_id, gate_id)): Path<(String, String)>,
) -> Result<ResponseJson<ApiResponse<Gate>>, (StatusCode, String)> {
    match dashboard.toggle_gate(&lot_id, &gate_id).await {
        Ok(gate) => Ok(ResponseJson(ApiResponse::ok(gate))),
        Err(error) => Err(service_error_to_http(error)),
    }
}
