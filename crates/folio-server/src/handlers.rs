//! Request handlers, generic over the served [`Resource`].
//!
//! Order of checks: store connection, identifier, body, gateway call.

use axum::Json;
use axum::body::Bytes;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use folio_core::enums::IssueCode;
use folio_core::responses::Envelope;
use folio_schema::ValidationError;
use folio_schema::validate::validate_id;
use serde::Deserialize;
use serde_json::Value;

use crate::error::ApiError;
use crate::resource::Resource;
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct IdParams {
    pub id: Option<String>,
}

fn parse_body(body: &Bytes) -> Result<Value, ValidationError> {
    serde_json::from_slice(body).map_err(|e| {
        ValidationError::single(
            "body",
            IssueCode::InvalidType,
            format!("request body must be valid JSON: {e}"),
        )
    })
}

/// Unwrap the `id` query parameter. A query string that does not parse
/// (such as a repeated `id`) is an `id` issue, reported after the connection step.
fn id_param(query: Result<Query<IdParams>, QueryRejection>) -> Result<Option<String>, ValidationError> {
    query.map(|Query(params)| params.id).map_err(|e| {
        ValidationError::single(
            "id",
            IssueCode::InvalidType,
            format!("id must be given once as a single value: {}", e.body_text()),
        )
    })
}

fn respond<T: serde::Serialize>(status: StatusCode, envelope: Envelope<T>) -> Response {
    (status, Json(envelope)).into_response()
}

/// `GET`: one record when `id` is given, otherwise the whole collection.
pub async fn read<R: Resource>(
    State(state): State<AppState>,
    query: Result<Query<IdParams>, QueryRejection>,
) -> Result<Response, ApiError> {
    let svc = state.service().await?;

    let Some(raw) = id_param(query)? else {
        let records = R::list(svc).await.map_err(|e| {
            ApiError::persistence(format!("Error retrieving {} from database", R::PLURAL), e)
        })?;
        return Ok(respond(StatusCode::OK, Envelope::ok(records)));
    };

    let id = validate_id(Some(raw.as_str()))?;
    let record = R::find(svc, &id)
        .await
        .map_err(|e| {
            ApiError::persistence(format!("Error retrieving {} from database", R::KIND), e)
        })?
        .ok_or(ApiError::NotFound(R::KIND))?;
    Ok(respond(StatusCode::OK, Envelope::ok(record)))
}

/// `POST`: create a record from a full body.
pub async fn create<R: Resource>(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Response, ApiError> {
    let svc = state.service().await?;

    let draft = R::validate_new(&parse_body(&body)?)?;
    let record = R::create(svc, &draft)
        .await
        .map_err(|e| ApiError::persistence(format!("Error creating {}", R::KIND), e))?;

    tracing::info!(resource = %R::KIND, "record created");
    Ok(respond(
        StatusCode::CREATED,
        Envelope::ok_with_message(record, format!("{} created successfully", R::KIND.display_name())),
    ))
}

/// `PUT ?id=`: apply the supplied fields to an existing record.
pub async fn update<R: Resource>(
    State(state): State<AppState>,
    query: Result<Query<IdParams>, QueryRejection>,
    body: Bytes,
) -> Result<Response, ApiError> {
    let svc = state.service().await?;

    let id = validate_id(id_param(query)?.as_deref())?;
    let update = R::validate_update(&parse_body(&body)?)?;
    let record = R::update(svc, &id, &update)
        .await
        .map_err(|e| ApiError::persistence(format!("Error updating {}", R::KIND), e))?
        .ok_or(ApiError::NotFound(R::KIND))?;

    tracing::info!(resource = %R::KIND, id = %id, "record updated");
    Ok(respond(
        StatusCode::OK,
        Envelope::ok_with_message(record, format!("{} updated successfully", R::KIND.display_name())),
    ))
}

/// `DELETE ?id=`: remove a record and return it.
pub async fn remove<R: Resource>(
    State(state): State<AppState>,
    query: Result<Query<IdParams>, QueryRejection>,
) -> Result<Response, ApiError> {
    let svc = state.service().await?;

    let id = validate_id(id_param(query)?.as_deref())?;
    let record = R::delete(svc, &id)
        .await
        .map_err(|e| ApiError::persistence(format!("Error deleting {}", R::KIND), e))?
        .ok_or(ApiError::NotFound(R::KIND))?;

    tracing::info!(resource = %R::KIND, id = %id, "record deleted");
    Ok(respond(
        StatusCode::OK,
        Envelope::ok_with_message(record, format!("{} deleted successfully", R::KIND.display_name())),
    ))
}
