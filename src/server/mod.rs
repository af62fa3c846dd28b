//! HTTP surface: application state, router and per-entity handlers.

pub mod hal;
pub mod handlers;
pub mod negotiate;

use crate::catalog::Catalog;
use crate::config::ServerConfig;
use anyhow::{Context, Result};
use axum::Router;
use axum::http::{HeaderValue, Method, header};
use axum::routing::get;
use hal::LinkBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub catalog: Catalog,
    pub links: LinkBuilder,
    client_origin: String,
}

impl AppState {
    pub fn new(catalog: Catalog, config: &ServerConfig) -> Self {
        Self {
            catalog,
            links: LinkBuilder::new(&config.public_base_url),
            client_origin: config.client_origin.clone(),
        }
    }
}

/// Build the API router.
///
/// Cross-origin calls are permitted from the single configured client
/// origin only.
pub fn build_router(state: AppState) -> Result<Router> {
    let origin = state
        .client_origin
        .parse::<HeaderValue>()
        .with_context(|| format!("invalid client origin: {}", state.client_origin))?;

    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST, Method::PATCH, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT]);

    Ok(Router::new()
        .route(
            "/api/authors",
            get(handlers::authors::list).post(handlers::authors::create),
        )
        .route(
            "/api/authors/{id}",
            get(handlers::authors::get_one)
                .patch(handlers::authors::update)
                .delete(handlers::authors::remove),
        )
        .route(
            "/api/books",
            get(handlers::books::list).post(handlers::books::create),
        )
        .route(
            "/api/books/{id}",
            get(handlers::books::get_one)
                .patch(handlers::books::update)
                .delete(handlers::books::remove),
        )
        .route(
            "/api/publishers",
            get(handlers::publishers::list).post(handlers::publishers::create),
        )
        .route(
            "/api/publishers/{id}",
            get(handlers::publishers::get_one)
                .patch(handlers::publishers::update)
                .delete(handlers::publishers::remove),
        )
        .route(
            "/api/rooms",
            get(handlers::rooms::list).post(handlers::rooms::create),
        )
        .route(
            "/api/rooms/{id}",
            get(handlers::rooms::get_one)
                .patch(handlers::rooms::update)
                .delete(handlers::rooms::remove),
        )
        .route(
            "/api/shelves",
            get(handlers::shelves::list).post(handlers::shelves::create),
        )
        .route(
            "/api/shelves/{id}",
            get(handlers::shelves::get_one)
                .patch(handlers::shelves::update)
                .delete(handlers::shelves::remove),
        )
        .route(
            "/api/statuses",
            get(handlers::statuses::list).post(handlers::statuses::create),
        )
        .route(
            "/api/statuses/{id}",
            get(handlers::statuses::get_one)
                .patch(handlers::statuses::update)
                .delete(handlers::statuses::remove),
        )
        .route(
            "/api/statustypes",
            get(handlers::status_types::list).post(handlers::status_types::create),
        )
        .route(
            "/api/statustypes/{id}",
            get(handlers::status_types::get_one)
                .patch(handlers::status_types::update)
                .delete(handlers::status_types::remove),
        )
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state))
}
