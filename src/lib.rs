//! # homecatalog
//!
//! A REST API for cataloguing a home book collection: books, authors,
//! publishers, physical storage locations (rooms, shelves) and
//! loan/availability status.
//!
//! ## Features
//!
//! - **CRUD per entity**: every entity family gets list/fetch/create/
//!   patch/delete endpoints under `/api`
//! - **Filtered lookups**: exact-match finders keyed by a single query
//!   parameter per route (`/api/books?idAuthor=5`)
//! - **Two response flavors**: a HAL hypermedia representation (default)
//!   and a flattened DTO representation with precomputed book counts,
//!   selected through the `Accept` header for one known client origin
//! - **Pluggable storage**: entity stores are trait objects; the default
//!   backend is an in-memory map, suitable for development and tests
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use homecatalog::prelude::*;
//!
//! let catalog = Catalog::in_memory();
//! let config = ServerConfig::default();
//! let app = build_router(AppState::new(catalog, &config))?;
//!
//! let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
//! axum::serve(listener, app).await?;
//! ```

pub mod catalog;
pub mod config;
pub mod core;
pub mod server;
pub mod storage;

/// Re-exports of commonly used types
pub mod prelude {
    // === Core ===
    pub use crate::core::{
        error::ApiError,
        model::{Author, Book, CatalogEntity, Publisher, Room, Shelf, Status, StatusType},
        patch::{
            AuthorPatch, BookPatch, PatchField, PublisherPatch, RoomPatch, ShelfPatch,
            StatusPatch, StatusTypePatch,
        },
    };

    // === Catalog ===
    pub use crate::catalog::{
        Catalog,
        dto::{AuthorDto, PublisherDto, RoomDto, ShelfDto, StatusTypeDto},
    };

    // === Config ===
    pub use crate::config::ServerConfig;

    // === Server ===
    pub use crate::server::{AppState, build_router};

    // === Storage ===
    pub use crate::storage::{EntityStore, InMemoryStore};

    // === External dependencies ===
    pub use anyhow::Result;
    pub use async_trait::async_trait;
    pub use serde::{Deserialize, Serialize};
}
