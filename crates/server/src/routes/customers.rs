use axum::{
    body::Bytes,
    extract::{rejection::{BytesRejection, PathRejection}, Path, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use tracing::debug;

use models::{Customer, CustomerId, CustomerInput};

use crate::errors::JsonApiError;
use crate::routes::ServerState;

pub const DELETED_MESSAGE: &str = "Customer deleted successfully";

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

/// Decode the body as JSON whatever `Content-Type` the client sent.
fn body(payload: Result<Bytes, BytesRejection>) -> Result<CustomerInput, JsonApiError> {
    let bytes = payload.map_err(|rejection| {
        debug!(reason = %rejection.body_text(), "unreadable customer payload");
        JsonApiError::invalid_input()
    })?;
    serde_json::from_slice::<CustomerInput>(&bytes).map_err(|e| {
        debug!(reason = %e, "rejected customer payload");
        JsonApiError::invalid_input()
    })
}

fn path_id(id: Result<Path<CustomerId>, PathRejection>) -> Result<CustomerId, JsonApiError> {
    id.map(|Path(id)| id).map_err(|rejection| {
        debug!(reason = %rejection.body_text(), "rejected customer id");
        JsonApiError::invalid_id()
    })
}

/// `/customers/` with nothing after the slash: an empty id never parses.
pub async fn missing_customer_id() -> JsonApiError {
    debug!("rejected empty customer id");
    JsonApiError::invalid_id()
}

#[utoipa::path(
    get, path = "/customers", tag = "customers",
    responses((status = 200, description = "All customers in creation order", body = [crate::openapi::CustomerDoc]))
)]
pub async fn list_customers(State(state): State<ServerState>) -> Json<Vec<Customer>> {
    Json(state.customers.list().await)
}

#[utoipa::path(
    post, path = "/customers", tag = "customers",
    request_body = crate::openapi::CustomerInputDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::CustomerDoc),
        (status = 400, description = "Invalid input"),
        (status = 409, description = "Email already exists")
    )
)]
pub async fn create_customer(
    State(state): State<ServerState>,
    payload: Result<Bytes, BytesRejection>,
) -> Result<(StatusCode, Json<Customer>), JsonApiError> {
    let input = body(payload)?;
    let created = state.customers.create(input).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    get, path = "/customers/{id}", tag = "customers",
    params(("id" = i64, Path, description = "Customer ID")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::CustomerDoc),
        (status = 400, description = "Invalid ID"),
        (status = 404, description = "Customer not found")
    )
)]
pub async fn get_customer(
    State(state): State<ServerState>,
    id: Result<Path<CustomerId>, PathRejection>,
) -> Result<Json<Customer>, JsonApiError> {
    let id = path_id(id)?;
    Ok(Json(state.customers.get(id).await?))
}

#[utoipa::path(
    put, path = "/customers/{id}", tag = "customers",
    params(("id" = i64, Path, description = "Customer ID")),
    request_body = crate::openapi::CustomerInputDoc,
    responses(
        (status = 200, description = "Updated", body = crate::openapi::CustomerDoc),
        (status = 400, description = "Invalid ID or input"),
        (status = 404, description = "Customer not found"),
        (status = 409, description = "Email already exists")
    )
)]
pub async fn update_customer(
    State(state): State<ServerState>,
    id: Result<Path<CustomerId>, PathRejection>,
    payload: Result<Bytes, BytesRejection>,
) -> Result<Json<Customer>, JsonApiError> {
    let id = path_id(id)?;
    let input = body(payload)?;
    Ok(Json(state.customers.update(id, input).await?))
}

#[utoipa::path(
    delete, path = "/customers/{id}", tag = "customers",
    params(("id" = i64, Path, description = "Customer ID")),
    responses(
        (status = 200, description = "Deleted", body = crate::openapi::MessageResponseDoc),
        (status = 400, description = "Invalid ID"),
        (status = 404, description = "Customer not found")
    )
)]
pub async fn delete_customer(
    State(state): State<ServerState>,
    id: Result<Path<CustomerId>, PathRejection>,
) -> Result<Json<MessageResponse>, JsonApiError> {
    let id = path_id(id)?;
    state.customers.delete(id).await?;
    Ok(Json(MessageResponse { message: DELETED_MESSAGE }))
}
