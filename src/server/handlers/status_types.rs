//! Handlers for `/api/statustypes`

use crate::core::error::ApiError;
use crate::core::model::{CatalogEntity, StatusType};
use crate::core::patch::StatusTypePatch;
use crate::server::AppState;
use crate::server::hal::{Collection, Resource};
use crate::server::negotiate::{ClientJson, Hal, ResponseMode, respond};
use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct StatusTypeQuery {
    name: Option<String>,
}

pub async fn get_one(
    State(state): State<AppState>,
    mode: ResponseMode,
    Path(id): Path<i32>,
) -> Result<Response, ApiError> {
    let status_type = state
        .catalog
        .status_types
        .get(id)
        .await?
        .ok_or_else(|| ApiError::not_found(StatusType::resource_name_singular(), id))?;
    Ok(respond(mode, state.links.status_type(status_type)))
}

pub async fn list(
    State(state): State<AppState>,
    mode: ResponseMode,
    Query(query): Query<StatusTypeQuery>,
) -> Result<Response, ApiError> {
    if let Some(name) = query.name {
        let resources: Vec<Resource<StatusType>> = state
            .catalog
            .status_types_by_name(&name)
            .await?
            .into_iter()
            .map(|status_type| state.links.status_type(status_type))
            .collect();
        return Ok(collection_response(&state, mode, resources));
    }

    match mode {
        ResponseMode::Client => {
            let dtos = state.catalog.status_types_overview().await?;
            Ok(ClientJson(dtos).into_response())
        }
        ResponseMode::Hypermedia => {
            let resources: Vec<Resource<StatusType>> = state
                .catalog
                .status_types
                .list()
                .await?
                .into_iter()
                .map(|status_type| state.links.status_type(status_type))
                .collect();
            Ok(collection_response(&state, mode, resources))
        }
    }
}

pub async fn create(
    State(state): State<AppState>,
    Json(status_type): Json<StatusType>,
) -> Result<Response, ApiError> {
    let created = state.catalog.status_types.create(status_type).await?;
    let id = created.id.unwrap_or_default();
    tracing::debug!(id, "created status type");

    let location = state.links.location(StatusType::resource_name(), id);
    Ok((StatusCode::CREATED, [(header::LOCATION, location)]).into_response())
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(patch): Json<StatusTypePatch>,
) -> Result<StatusCode, ApiError> {
    state.catalog.update_status_type(id, patch).await?;
    Ok(StatusCode::OK)
}

pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, ApiError> {
    state.catalog.status_types.delete(id).await?;
    Ok(StatusCode::OK)
}

fn collection_response(
    state: &AppState,
    mode: ResponseMode,
    resources: Vec<Resource<StatusType>>,
) -> Response {
    match mode {
        ResponseMode::Hypermedia => Hal(Collection::new(
            StatusType::resource_name(),
            resources,
            state.links.collection(StatusType::resource_name()),
        ))
        .into_response(),
        ResponseMode::Client => ClientJson(resources).into_response(),
    }
}
