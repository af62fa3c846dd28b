//! Handlers for `/api/publishers`

use crate::core::error::ApiError;
use crate::core::model::{CatalogEntity, Publisher};
use crate::core::patch::PublisherPatch;
use crate::server::AppState;
use crate::server::hal::{Collection, Resource};
use crate::server::negotiate::{ClientJson, Hal, ResponseMode, respond};
use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct PublisherQuery {
    name: Option<String>,
}

pub async fn get_one(
    State(state): State<AppState>,
    mode: ResponseMode,
    Path(id): Path<i32>,
) -> Result<Response, ApiError> {
    let publisher = state
        .catalog
        .publishers
        .get(id)
        .await?
        .ok_or_else(|| ApiError::not_found(Publisher::resource_name_singular(), id))?;
    Ok(respond(mode, state.links.publisher(publisher)))
}

pub async fn list(
    State(state): State<AppState>,
    mode: ResponseMode,
    Query(query): Query<PublisherQuery>,
) -> Result<Response, ApiError> {
    if let Some(name) = query.name {
        let resources: Vec<Resource<Publisher>> = state
            .catalog
            .publishers_by_name(&name)
            .await?
            .into_iter()
            .map(|publisher| state.links.publisher(publisher))
            .collect();
        return Ok(collection_response(&state, mode, resources));
    }

    match mode {
        ResponseMode::Client => {
            let dtos = state.catalog.publishers_overview().await?;
            Ok(ClientJson(dtos).into_response())
        }
        ResponseMode::Hypermedia => {
            let resources: Vec<Resource<Publisher>> = state
                .catalog
                .publishers
                .list()
                .await?
                .into_iter()
                .map(|publisher| state.links.publisher(publisher))
                .collect();
            Ok(collection_response(&state, mode, resources))
        }
    }
}

pub async fn create(
    State(state): State<AppState>,
    Json(publisher): Json<Publisher>,
) -> Result<Response, ApiError> {
    let created = state.catalog.publishers.create(publisher).await?;
    let id = created.id.unwrap_or_default();
    tracing::debug!(id, "created publisher");

    let location = state.links.location(Publisher::resource_name(), id);
    Ok((StatusCode::CREATED, [(header::LOCATION, location)]).into_response())
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(patch): Json<PublisherPatch>,
) -> Result<StatusCode, ApiError> {
    state.catalog.update_publisher(id, patch).await?;
    Ok(StatusCode::OK)
}

pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, ApiError> {
    state.catalog.publishers.delete(id).await?;
    Ok(StatusCode::OK)
}

fn collection_response(
    state: &AppState,
    mode: ResponseMode,
    resources: Vec<Resource<Publisher>>,
) -> Response {
    match mode {
        ResponseMode::Hypermedia => Hal(Collection::new(
            Publisher::resource_name(),
            resources,
            state.links.collection(Publisher::resource_name()),
        ))
        .into_response(),
        ResponseMode::Client => ClientJson(resources).into_response(),
    }
}
