//! Handlers for `/api/books`
//!
//! The book collection route recognises one filter parameter per
//! request: `idAuthor`, `idRoom`, `idPublisher`, `idShelf`,
//! `idStatusType`, `idStatus` or `name`. The `idStatus` lookup is
//! singular (a status belongs to exactly one book) and returns 404 when
//! no book carries that status.

use crate::core::error::ApiError;
use crate::core::model::{Book, CatalogEntity};
use crate::core::patch::BookPatch;
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
pub struct BookQuery {
    id_author: Option<i32>,
    id_room: Option<i32>,
    id_publisher: Option<i32>,
    id_shelf: Option<i32>,
    id_status_type: Option<i32>,
    id_status: Option<i32>,
    name: Option<String>,
}

pub async fn get_one(
    State(state): State<AppState>,
    mode: ResponseMode,
    Path(id): Path<i32>,
) -> Result<Response, ApiError> {
    let book = state
        .catalog
        .books
        .get(id)
        .await?
        .ok_or_else(|| ApiError::not_found(Book::resource_name_singular(), id))?;
    Ok(respond(mode, state.links.book(book)))
}

pub async fn list(
    State(state): State<AppState>,
    mode: ResponseMode,
    Query(query): Query<BookQuery>,
) -> Result<Response, ApiError> {
    let books = if let Some(id_author) = query.id_author {
        state.catalog.books_by_author_id(id_author).await?
    } else if let Some(id_room) = query.id_room {
        state.catalog.books_by_room_id(id_room).await?
    } else if let Some(id_publisher) = query.id_publisher {
        state.catalog.books_by_publisher_id(id_publisher).await?
    } else if let Some(id_shelf) = query.id_shelf {
        state.catalog.books_by_shelf_id(id_shelf).await?
    } else if let Some(id_status_type) = query.id_status_type {
        state.catalog.books_by_status_type_id(id_status_type).await?
    } else if let Some(id_status) = query.id_status {
        // Singular lookup; 404 when no book carries this status
        let book = state
            .catalog
            .book_by_status_id(id_status)
            .await?
            .ok_or_else(|| ApiError::not_found(Book::resource_name_singular(), id_status))?;
        return Ok(respond(mode, state.links.book(book)));
    } else if let Some(name) = query.name {
        state.catalog.books_by_name(&name).await?
    } else {
        state.catalog.books.list().await?
    };

    let resources: Vec<Resource<Book>> = books
        .into_iter()
        .map(|book| state.links.book(book))
        .collect();

    Ok(match mode {
        ResponseMode::Hypermedia => Hal(Collection::new(
            Book::resource_name(),
            resources,
            state.links.collection(Book::resource_name()),
        ))
        .into_response(),
        ResponseMode::Client => ClientJson(resources).into_response(),
    })
}

pub async fn create(
    State(state): State<AppState>,
    Json(book): Json<Book>,
) -> Result<Response, ApiError> {
    let created = state.catalog.add_book(book).await?;
    let id = created.id.unwrap_or_default();
    tracing::debug!(id, "created book");

    let location = state.links.location(Book::resource_name(), id);
    Ok((StatusCode::CREATED, [(header::LOCATION, location)]).into_response())
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(patch): Json<BookPatch>,
) -> Result<StatusCode, ApiError> {
    state.catalog.update_book(id, patch).await?;
    Ok(StatusCode::OK)
}

pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, ApiError> {
    state.catalog.books.delete(id).await?;
    Ok(StatusCode::OK)
}
