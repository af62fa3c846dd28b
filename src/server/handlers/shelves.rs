//! Handlers for `/api/shelves`
//!
//! Shelves filter by room, letter or number. In client mode the
//! unfiltered collection is the bare flattened DTO list (no links),
//! which is the shape the front-end's shelf picker consumes.

use crate::core::error::ApiError;
use crate::core::model::{CatalogEntity, Shelf};
use crate::core::patch::ShelfPatch;
use crate::server::AppState;
use crate::server::hal::{Collection, Resource};
use crate::server::negotiate::{ClientJson, Hal, ResponseMode, respond};
use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShelfQuery {
    id_room: Option<i32>,
    letter: Option<String>,
    number: Option<i32>,
}

pub async fn get_one(
    State(state): State<AppState>,
    mode: ResponseMode,
    Path(id): Path<i32>,
) -> Result<Response, ApiError> {
    let shelf = state
        .catalog
        .shelves
        .get(id)
        .await?
        .ok_or_else(|| ApiError::not_found(Shelf::resource_name_singular(), id))?;
    Ok(respond(mode, state.links.shelf(shelf)))
}

pub async fn list(
    State(state): State<AppState>,
    mode: ResponseMode,
    Query(query): Query<ShelfQuery>,
) -> Result<Response, ApiError> {
    // Exactly one recognised filter applies per request
    let filtered = if let Some(id_room) = query.id_room {
        Some(state.catalog.shelves_by_room_id(id_room).await?)
    } else if let Some(letter) = query.letter {
        Some(state.catalog.shelves_by_letter(&letter).await?)
    } else if let Some(number) = query.number {
        Some(state.catalog.shelves_by_number(number).await?)
    } else {
        None
    };

    if let Some(shelves) = filtered {
        let resources: Vec<Resource<Shelf>> = shelves
            .into_iter()
            .map(|shelf| state.links.shelf(shelf))
            .collect();
        return Ok(collection_response(&state, mode, resources));
    }

    match mode {
        ResponseMode::Client => {
            let dtos = state.catalog.shelves_overview().await?;
            Ok(ClientJson(dtos).into_response())
        }
        ResponseMode::Hypermedia => {
            let resources: Vec<Resource<Shelf>> = state
                .catalog
                .shelves
                .list()
                .await?
                .into_iter()
                .map(|shelf| state.links.shelf(shelf))
                .collect();
            Ok(collection_response(&state, mode, resources))
        }
    }
}

pub async fn create(
    State(state): State<AppState>,
    Json(shelf): Json<Shelf>,
) -> Result<Response, ApiError> {
    let created = state.catalog.shelves.create(shelf).await?;
    let id = created.id.unwrap_or_default();
    tracing::debug!(id, "created shelf");

    let location = state.links.location(Shelf::resource_name(), id);
    Ok((StatusCode::CREATED, [(header::LOCATION, location)]).into_response())
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(patch): Json<ShelfPatch>,
) -> Result<StatusCode, ApiError> {
    state.catalog.update_shelf(id, patch).await?;
    Ok(StatusCode::OK)
}

pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, ApiError> {
    state.catalog.shelves.delete(id).await?;
    Ok(StatusCode::OK)
}

fn collection_response(
    state: &AppState,
    mode: ResponseMode,
    resources: Vec<Resource<Shelf>>,
) -> Response {
    match mode {
        ResponseMode::Hypermedia => Hal(Collection::new(
            Shelf::resource_name(),
            resources,
            state.links.collection(Shelf::resource_name()),
        ))
        .into_response(),
        ResponseMode::Client => ClientJson(resources).into_response(),
    }
}
