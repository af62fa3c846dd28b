//! The catalog aggregate: one store per entity plus the declarative
//! finders the list endpoints are keyed on.
//!
//! Finders are exact-match filters that return an empty vec, never an
//! error, when nothing matches. Relations are resolved through the
//! embedded foreign-key objects (`book.shelf.room.id`), so every filter
//! is a single pass over one table.

pub mod dto;
pub mod service;

use crate::core::model::{Author, Book, Publisher, Room, Shelf, Status, StatusType};
use crate::storage::{EntityStore, InMemoryStore};
use anyhow::Result;
use std::sync::Arc;

/// Shared handle to every entity store.
#[derive(Clone)]
pub struct Catalog {
    pub authors: Arc<dyn EntityStore<Author>>,
    pub publishers: Arc<dyn EntityStore<Publisher>>,
    pub rooms: Arc<dyn EntityStore<Room>>,
    pub shelves: Arc<dyn EntityStore<Shelf>>,
    pub books: Arc<dyn EntityStore<Book>>,
    pub statuses: Arc<dyn EntityStore<Status>>,
    pub status_types: Arc<dyn EntityStore<StatusType>>,
}

impl Catalog {
    /// Catalog backed by in-memory stores
    pub fn in_memory() -> Self {
        Self {
            authors: Arc::new(InMemoryStore::new()),
            publishers: Arc::new(InMemoryStore::new()),
            rooms: Arc::new(InMemoryStore::new()),
            shelves: Arc::new(InMemoryStore::new()),
            books: Arc::new(InMemoryStore::new()),
            statuses: Arc::new(InMemoryStore::new()),
            status_types: Arc::new(InMemoryStore::new()),
        }
    }

    // === Book finders ===

    pub async fn books_by_author_id(&self, id_author: i32) -> Result<Vec<Book>> {
        let books = self.books.list().await?;
        Ok(books
            .into_iter()
            .filter(|b| b.author_id() == Some(id_author))
            .collect())
    }

    pub async fn books_by_publisher_id(&self, id_publisher: i32) -> Result<Vec<Book>> {
        let books = self.books.list().await?;
        Ok(books
            .into_iter()
            .filter(|b| b.publisher_id() == Some(id_publisher))
            .collect())
    }

    pub async fn books_by_shelf_id(&self, id_shelf: i32) -> Result<Vec<Book>> {
        let books = self.books.list().await?;
        Ok(books
            .into_iter()
            .filter(|b| b.shelf_id() == Some(id_shelf))
            .collect())
    }

    /// Books in a room, joined through the embedded shelf
    pub async fn books_by_room_id(&self, id_room: i32) -> Result<Vec<Book>> {
        let books = self.books.list().await?;
        Ok(books
            .into_iter()
            .filter(|b| b.room_id() == Some(id_room))
            .collect())
    }

    pub async fn books_by_status_type_id(&self, id_status_type: i32) -> Result<Vec<Book>> {
        let books = self.books.list().await?;
        Ok(books
            .into_iter()
            .filter(|b| b.status_type_id() == Some(id_status_type))
            .collect())
    }

    /// A status belongs to exactly one book, so this lookup is singular
    pub async fn book_by_status_id(&self, id_status: i32) -> Result<Option<Book>> {
        let books = self.books.list().await?;
        Ok(books.into_iter().find(|b| b.status_id() == Some(id_status)))
    }

    pub async fn books_by_name(&self, name: &str) -> Result<Vec<Book>> {
        let books = self.books.list().await?;
        Ok(books
            .into_iter()
            .filter(|b| b.name.as_deref() == Some(name))
            .collect())
    }

    // === Shelf finders ===

    pub async fn shelves_by_room_id(&self, id_room: i32) -> Result<Vec<Shelf>> {
        let shelves = self.shelves.list().await?;
        Ok(shelves
            .into_iter()
            .filter(|s| s.room_id() == Some(id_room))
            .collect())
    }

    pub async fn shelves_by_letter(&self, letter: &str) -> Result<Vec<Shelf>> {
        let shelves = self.shelves.list().await?;
        Ok(shelves
            .into_iter()
            .filter(|s| s.letter.as_deref() == Some(letter))
            .collect())
    }

    pub async fn shelves_by_number(&self, number: i32) -> Result<Vec<Shelf>> {
        let shelves = self.shelves.list().await?;
        Ok(shelves
            .into_iter()
            .filter(|s| s.number == Some(number))
            .collect())
    }

    // === Name finders ===

    pub async fn authors_by_name(&self, name: &str) -> Result<Vec<Author>> {
        let authors = self.authors.list().await?;
        Ok(authors
            .into_iter()
            .filter(|a| a.name.as_deref() == Some(name))
            .collect())
    }

    pub async fn publishers_by_name(&self, name: &str) -> Result<Vec<Publisher>> {
        let publishers = self.publishers.list().await?;
        Ok(publishers
            .into_iter()
            .filter(|p| p.name.as_deref() == Some(name))
            .collect())
    }

    pub async fn rooms_by_name(&self, name: &str) -> Result<Vec<Room>> {
        let rooms = self.rooms.list().await?;
        Ok(rooms
            .into_iter()
            .filter(|r| r.name.as_deref() == Some(name))
            .collect())
    }

    pub async fn status_types_by_name(&self, name: &str) -> Result<Vec<StatusType>> {
        let status_types = self.status_types.list().await?;
        Ok(status_types
            .into_iter()
            .filter(|st| st.name.as_deref() == Some(name))
            .collect())
    }
}
