//! The five contact handlers and the health probe.
//!
//! Every handler makes exactly one store call. Request bodies are read as raw
//! bytes and decoded here, so any failure to read or decode the body (bad
//! JSON, wrong field types, empty body, missing content type, over the size
//! limit) is a 400 with the underlying message.

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::rejection::BytesRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::de::DeserializeOwned;
use tracing::{debug, info, instrument};

use super::{ApiError, AppState};
use crate::clients::ActorClient;
use crate::model::{Contact, ContactCreate, ContactUpdate};

type ApiResult<T> = Result<T, ApiError>;

fn parse_body<T: DeserializeOwned>(body: Result<Bytes, BytesRejection>) -> ApiResult<T> {
    let body = body.map_err(|rejection| {
        debug!(error = %rejection, "Failed to read request body");
        ApiError::BadRequest(rejection.body_text())
    })?;
    serde_json::from_slice(&body).map_err(|e| {
        debug!(error = %e, "Rejected request body");
        ApiError::BadRequest(e.to_string())
    })
}

/// `GET /health`
pub async fn health() -> &'static str {
    "OK"
}

/// `GET /contacts`
#[instrument(skip(state))]
pub async fn list_contacts(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<Contact>>> {
    let contacts = state
        .contacts
        .list_contacts()
        .await
        .map_err(|e| state.store_error(e))?;
    Ok(Json(contacts))
}

/// `GET /contacts/:id`
#[instrument(skip(state))]
pub async fn get_contact(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<Contact>> {
    let contact = state
        .contacts
        .find_contact(id)
        .await
        .map_err(|e| state.store_error(e))?;
    Ok(Json(contact))
}

/// `POST /contacts`
#[instrument(skip(state, body))]
pub async fn create_contact(
    State(state): State<Arc<AppState>>,
    body: Result<Bytes, BytesRejection>,
) -> ApiResult<(StatusCode, Json<Contact>)> {
    let params: ContactCreate = parse_body(body)?;
    let contact = state
        .contacts
        .create_contact(params)
        .await
        .map_err(|e| state.store_error(e))?;
    info!(id = %contact.id, "Contact created");
    Ok((StatusCode::CREATED, Json(contact)))
}

/// `PUT /contacts/:id`
///
/// The path id names the record; an `id` in the body is ignored. Updating an
/// id the store does not hold is a store failure, not a 404.
#[instrument(skip(state, body))]
pub async fn update_contact(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    body: Result<Bytes, BytesRejection>,
) -> ApiResult<Json<Contact>> {
    let update: ContactUpdate = parse_body(body)?;
    let contact = state
        .contacts
        .update_contact(id, update)
        .await
        .map_err(|e| state.store_failure(e))?;
    Ok(Json(contact))
}

/// `DELETE /contacts/:id`
#[instrument(skip(state))]
pub async fn delete_contact(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    state
        .contacts
        .delete(id)
        .await
        .map_err(|e| state.store_error(e))?;
    Ok(StatusCode::NO_CONTENT)
}
