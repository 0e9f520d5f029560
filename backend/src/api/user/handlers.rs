//! Handler functions for the registered-users API.
//!
//! Serves the users tab: a paginated listing with a free-text search that
//! matches names, emails, CPFs, and phone numbers.

use crate::api::common::{
    ApiResponse, PaginatedData, PaginationFilter, PaginationMeta, apply_pagination,
    service_error_to_http, validation_errors_to_message,
};
use crate::errors::ServiceError;
use crate::services::dashboard::{Dashboard, DashboardTab};
use crate::services::user_service::UserService;
use crate::store::Store;
use crate::store::models::User;
use axum::{
    extract::{Extension, Query},
    http::StatusCode,
    response::Json as ResponseJson,
};
use serde::Deserialize;
use std::sync::Arc;
use validator::Validate;

/// Query parameters for the users listing.
#[derive(Debug, Deserialize)]
pub struct UserListQuery {
    pub search: Option<String>,
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}

/// List registered users, filtered and paginated. Viewing the list puts
/// the dashboard on the users tab.
#[axum::debug_handler]
pub async fn list_users(
    Extension(store): Extension<Arc<Store>>,
    Extension(dashboard): Extension<Arc<Dashboard>>,
    Query(query): Query<UserListQuery>,
) -> Result<ResponseJson<ApiResponse<PaginatedData<User>>>, (StatusCode, String)> {
    let pagination = PaginationFilter {
        page: query.page,
        per_page: query.per_page,
    };
    if let Err(validation_errors) = pagination.validate() {
        return Err(service_error_to_http(ServiceError::validation(
            validation_errors_to_message(validation_errors),
        )));
    }

    dashboard.set_tab(DashboardTab::Users).await;

    let user_service = UserService::new(&store);
    let users = user_service.list_users(query.search.as_deref()).await;
    let total = users.len() as u64;
    let page_items = apply_pagination(users, &pagination);
    let meta = PaginationMeta::from_filter(&pagination, total);

    Ok(ResponseJson(ApiResponse::ok_paginated(
        PaginatedData::new(page_items, total),
        meta,
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extensions() -> (Extension<Arc<Store>>, Extension<Arc<Dashboard>>) {
        let store = Arc::new(Store::seeded());
        let dashboard = Arc::new(Dashboard::new(store.clone(), None));
        (Extension(store), Extension(dashboard))
    }

    #[tokio::test]
    async fn page_zero_is_rejected_as_a_validation_error() {
        let (store, dashboard) = extensions();
        let query = UserListQuery {
            search: None,
            page: Some(0),
            per_page: Some(20),
        };

        let (status, body) = list_users(store, dashboard, Query(query)).await.unwrap_err();
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body.contains("validation_error"));
    }

    #[tokio::test]
    async fn oversized_per_page_is_rejected() {
        let (store, dashboard) = extensions();
        let query = UserListQuery {
            search: None,
            page: Some(1),
            per_page: Some(500),
        };

        let (status, _) = list_users(store, dashboard, Query(query)).await.unwrap_err();
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn valid_query_returns_a_filtered_page() {
        let (store, dashboard) = extensions();
        let query = UserListQuery {
            search: Some("maria".into()),
            page: Some(1),
            per_page: Some(20),
        };

        let response = list_users(store, dashboard, Query(query)).await.unwrap();
        let data = response.0.data.unwrap();
        assert_eq!(data.total, 1);
        assert_eq!(data.items[0].name, "Maria Santos");
    }
}
