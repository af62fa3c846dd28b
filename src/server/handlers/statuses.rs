//! Handlers for `/api/statuses`
//!
//! A status carries no transition rules at this layer; it is created and
//! updated like any other entity.

use crate::core::error::ApiError;
use crate::core::model::{CatalogEntity, Status};
use crate::core::patch::StatusPatch;
use crate::server::AppState;
use crate::server::hal::{Collection, Resource};
use crate::server::negotiate::{ClientJson, Hal, ResponseMode, respond};
use axum::Json;
use axum::extract::{Path, State};
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};

pub async fn get_one(
    State(state): State<AppState>,
    mode: ResponseMode,
    Path(id): Path<i32>,
) -> Result<Response, ApiError> {
    let status = state
        .catalog
        .statuses
        .get(id)
        .await?
        .ok_or_else(|| ApiError::not_found(Status::resource_name_singular(), id))?;
    Ok(respond(mode, state.links.status(status)))
}

pub async fn list(
    State(state): State<AppState>,
    mode: ResponseMode,
) -> Result<Response, ApiError> {
    let resources: Vec<Resource<Status>> = state
        .catalog
        .statuses
        .list()
        .await?
        .into_iter()
        .map(|status| state.links.status(status))
        .collect();

    Ok(match mode {
        ResponseMode::Hypermedia => Hal(Collection::new(
            Status::resource_name(),
            resources,
            state.links.collection(Status::resource_name()),
        ))
        .into_response(),
        ResponseMode::Client => ClientJson(resources).into_response(),
    })
}

pub async fn create(
    State(state): State<AppState>,
    Json(status): Json<Status>,
) -> Result<Response, ApiError> {
    let created = state.catalog.statuses.create(status).await?;
    let id = created.id.unwrap_or_default();
    tracing::debug!(id, "created status");

    let location = state.links.location(Status::resource_name(), id);
    Ok((StatusCode::CREATED, [(header::LOCATION, location)]).into_response())
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(patch): Json<StatusPatch>,
) -> Result<StatusCode, ApiError> {
    state.catalog.update_status(id, patch).await?;
    Ok(StatusCode::OK)
}

pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, ApiError> {
    state.catalog.statuses.delete(id).await?;
    Ok(StatusCode::OK)
}
