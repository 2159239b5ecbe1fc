//! Canned endpoints and the user routes.
//!
//! The four `/user/...` handlers only log and acknowledge; they never read the
//! request body or touch the store. `GET /users/{id}` is the one route that
//! reaches the database.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State, rejection::PathRejection},
    http::StatusCode,
};
use tessera_api_models::{ApiListing, UserResponse};
use tessera_config::Config;
use tessera_data::User;
use tessera_telemetry::current_route;
use tracing::{error, info};

use crate::http::errors::ApiError;
use crate::state::ApiState;

pub(crate) async fn api_listing() -> Json<ApiListing> {
    Json(ApiListing::canned())
}

pub(crate) async fn current_config(State(state): State<Arc<ApiState>>) -> Json<Config> {
    Json(state.config.clone())
}

pub(crate) async fn handle_user() -> StatusCode {
    info!("Handling user request");
    StatusCode::OK
}

pub(crate) async fn create_user() -> StatusCode {
    info!("Creating new user");
    StatusCode::OK
}

pub(crate) async fn update_user() -> StatusCode {
    info!("Updating user");
    StatusCode::OK
}

pub(crate) async fn delete_user() -> StatusCode {
    info!("Deleting user");
    StatusCode::OK
}

pub(crate) async fn get_user(
    State(state): State<Arc<ApiState>>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<Json<UserResponse>, ApiError> {
    let Path(id) = id.map_err(|rejection| ApiError::bad_request(rejection.body_text()))?;
    match state.users.get_user(id).await {
        Ok(user) => Ok(Json(user_response(user))),
        Err(sqlx::Error::RowNotFound) => {
            Err(ApiError::not_found(format!("user {id} does not exist")))
        }
        Err(err) => {
            let route = current_route().unwrap_or_default();
            error!(error = %err, user_id = id, route = %route, "failed to load user");
            Err(ApiError::internal("failed to load user"))
        }
    }
}

pub(crate) async fn method_not_allowed() -> ApiError {
    ApiError::method_not_allowed()
}

pub(crate) async fn route_not_found() -> ApiError {
    ApiError::not_found("no route matches the request path")
}

fn user_response(user: User) -> UserResponse {
    UserResponse {
        id: user.id,
        username: user.username,
        email: user.email,
    }
}
