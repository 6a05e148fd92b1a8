//! API handlers

use axum::{
    body::Bytes,
    extract::State,
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::{Map, Value};

use crate::api::AppState;
use crate::types::{Collection, Record};
use crate::Error;

/// Error body returned for rejected or failed requests
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug)]
pub enum ApiError {
    /// Request body could not be turned into record fields
    Body { status: StatusCode, message: String },
    /// Failure inside the collection service
    Service(Error),
}

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        ApiError::Service(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::Body { status, message } => {
                tracing::debug!(%status, %message, "Rejected request body");
                (status, message)
            }
            ApiError::Service(err) => {
                tracing::error!(error = %err, "Request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
            }
        };

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}

fn is_json(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(';').next())
        .map(|mime| mime.trim().eq_ignore_ascii_case("application/json"))
        .unwrap_or(false)
}

/// Record fields carried by a POST body.
///
/// Bodies that are not declared as JSON, and empty JSON bodies, carry no
/// fields. A declared JSON body must parse (400) and be an object (422).
pub fn body_fields(headers: &HeaderMap, body: &Bytes) -> Result<Map<String, Value>, ApiError> {
    if !is_json(headers) || body.is_empty() {
        return Ok(Map::new());
    }

    let value: Value = serde_json::from_slice(body).map_err(|e| ApiError::Body {
        status: StatusCode::BAD_REQUEST,
        message: format!("Failed to parse the request body as JSON: {}", e),
    })?;

    match value {
        Value::Object(fields) => Ok(fields),
        _ => Err(ApiError::Body {
            status: StatusCode::UNPROCESSABLE_ENTITY,
            message: "Request body must be a JSON object".to_string(),
        }),
    }
}

async fn list(state: &AppState, collection: Collection) -> Json<Vec<Record>> {
    Json(state.collection(collection).list_all().await)
}

async fn create(
    state: &AppState,
    collection: Collection,
    headers: &HeaderMap,
    body: &Bytes,
) -> Result<(StatusCode, Json<Record>), ApiError> {
    let fields = body_fields(headers, body)?;
    let record = state.collection(collection).create(fields).await?;
    Ok((StatusCode::CREATED, Json(record)))
}

/// List all products
pub async fn list_products(State(state): State<AppState>) -> Json<Vec<Record>> {
    list(&state, Collection::Products).await
}

/// Create a product from the request body
pub async fn create_product(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<(StatusCode, Json<Record>), ApiError> {
    create(&state, Collection::Products, &headers, &body).await
}

/// List all orders
pub async fn list_orders(State(state): State<AppState>) -> Json<Vec<Record>> {
    list(&state, Collection::Orders).await
}

/// Create an order from the request body
pub async fn create_order(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<(StatusCode, Json<Record>), ApiError> {
    create(&state, Collection::Orders, &headers, &body).await
}
