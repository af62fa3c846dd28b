//! Handlers for `/api/rooms`

use crate::core::error::ApiError;
use crate::core::model::{CatalogEntity, Room};
use crate::core::patch::RoomPatch;
use crate::server::AppState;
use crate::server::hal::{Collection, Resource};
use crate::server::negotiate::{ClientJson, Hal, ResponseMode, respond};
use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct RoomQuery {
    name: Option<String>,
}

pub async fn get_one(
    State(state): State<AppState>,
    mode: ResponseMode,
    Path(id): Path<i32>,
) -> Result<Response, ApiError> {
    let room = state
        .catalog
        .rooms
        .get(id)
        .await?
        .ok_or_else(|| ApiError::not_found(Room::resource_name_singular(), id))?;
    Ok(respond(mode, state.links.room(room)))
}

pub async fn list(
    State(state): State<AppState>,
    mode: ResponseMode,
    Query(query): Query<RoomQuery>,
) -> Result<Response, ApiError> {
    if let Some(name) = query.name {
        let resources: Vec<Resource<Room>> = state
            .catalog
            .rooms_by_name(&name)
            .await?
            .into_iter()
            .map(|room| state.links.room(room))
            .collect();
        return Ok(collection_response(&state, mode, resources));
    }

    match mode {
        ResponseMode::Client => {
            let dtos = state.catalog.rooms_overview().await?;
            Ok(ClientJson(dtos).into_response())
        }
        ResponseMode::Hypermedia => {
            let resources: Vec<Resource<Room>> = state
                .catalog
                .rooms
                .list()
                .await?
                .into_iter()
                .map(|room| state.links.room(room))
                .collect();
            Ok(collection_response(&state, mode, resources))
        }
    }
}

pub async fn create(
    State(state): State<AppState>,
    Json(room): Json<Room>,
) -> Result<Response, ApiError> {
    let created = state.catalog.rooms.create(room).await?;
    let id = created.id.unwrap_or_default();
    tracing::debug!(id, "created room");

    let location = state.links.location(Room::resource_name(), id);
    Ok((StatusCode::CREATED, [(header::LOCATION, location)]).into_response())
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(patch): Json<RoomPatch>,
) -> Result<StatusCode, ApiError> {
    state.catalog.update_room(id, patch).await?;
    Ok(StatusCode::OK)
}

pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, ApiError> {
    state.catalog.rooms.delete(id).await?;
    Ok(StatusCode::OK)
}

fn collection_response(
    state: &AppState,
    mode: ResponseMode,
    resources: Vec<Resource<Room>>,
) -> Response {
    match mode {
        ResponseMode::Hypermedia => Hal(Collection::new(
            Room::resource_name(),
            resources,
            state.links.collection(Room::resource_name()),
        ))
        .into_response(),
        ResponseMode::Client => ClientJson(resources).into_response(),
    }
}
