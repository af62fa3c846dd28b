//! Handlers for `/api/authors`

use crate::core::error::ApiError;
use crate::core::model::{Author, CatalogEntity};
use crate::core::patch::AuthorPatch;
use crate::server::AppState;
use crate::server::hal::{Collection, Resource};
use crate::server::negotiate::{ClientJson, Hal, ResponseMode, respond};
use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct AuthorQuery {
    name: Option<String>,
}

pub async fn get_one(
    State(state): State<AppState>,
    mode: ResponseMode,
    Path(id): Path<i32>,
) -> Result<Response, ApiError> {
    let author = state
        .catalog
        .authors
        .get(id)
        .await?
        .ok_or_else(|| ApiError::not_found(Author::resource_name_singular(), id))?;
    Ok(respond(mode, state.links.author(author)))
}

pub async fn list(
    State(state): State<AppState>,
    mode: ResponseMode,
    Query(query): Query<AuthorQuery>,
) -> Result<Response, ApiError> {
    if let Some(name) = query.name {
        let resources: Vec<Resource<Author>> = state
            .catalog
            .authors_by_name(&name)
            .await?
            .into_iter()
            .map(|author| state.links.author(author))
            .collect();
        return Ok(collection_response(&state, mode, resources));
    }

    match mode {
        ResponseMode::Client => {
            let dtos = state.catalog.authors_overview().await?;
            Ok(ClientJson(dtos).into_response())
        }
        ResponseMode::Hypermedia => {
            let resources: Vec<Resource<Author>> = state
                .catalog
                .authors
                .list()
                .await?
                .into_iter()
                .map(|author| state.links.author(author))
                .collect();
            Ok(collection_response(&state, mode, resources))
        }
    }
}

pub async fn create(
    State(state): State<AppState>,
    Json(author): Json<Author>,
) -> Result<Response, ApiError> {
    let created = state.catalog.authors.create(author).await?;
    let id = created.id.unwrap_or_default();
    tracing::debug!(id, "created author");

    let location = state.links.location(Author::resource_name(), id);
    Ok((StatusCode::CREATED, [(header::LOCATION, location)]).into_response())
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(patch): Json<AuthorPatch>,
) -> Result<StatusCode, ApiError> {
    state.catalog.update_author(id, patch).await?;
    Ok(StatusCode::OK)
}

pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, ApiError> {
    state.catalog.authors.delete(id).await?;
    Ok(StatusCode::OK)
}

fn collection_response(
    state: &AppState,
    mode: ResponseMode,
    resources: Vec<Resource<Author>>,
) -> Response {
    match mode {
        ResponseMode::Hypermedia => Hal(Collection::new(
            Author::resource_name(),
            resources,
            state.links.collection(Author::resource_name()),
        ))
        .into_response(),
        ResponseMode::Client => ClientJson(resources).into_response(),
    }
}
