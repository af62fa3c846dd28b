//! Derived read models and partial-update semantics.
//!
//! Overviews compute per-parent book counts for the client-scoped list
//! views. Counts come from a single grouped pass over the book table
//! (and the shelf table for rooms), grouped by foreign key, rather than
//! one count query per parent row.
//!
//! Partial updates follow the null-means-unchanged contract: only fields
//! provided with a value in the patch overwrite stored fields, and a
//! patch against a missing id silently succeeds.

use crate::catalog::Catalog;
use crate::catalog::dto::{AuthorDto, PublisherDto, RoomDto, ShelfDto, StatusTypeDto};
use crate::core::model::Book;
use crate::core::patch::{
    AuthorPatch, BookPatch, PublisherPatch, RoomPatch, ShelfPatch, StatusPatch, StatusTypePatch,
};
use anyhow::Result;
use std::collections::HashMap;

/// Book counts grouped by one foreign key, computed in a single pass
fn count_by_key(books: &[Book], key: impl Fn(&Book) -> Option<i32>) -> HashMap<i32, i64> {
    let mut counts = HashMap::new();
    for book in books {
        if let Some(id) = key(book) {
            *counts.entry(id).or_insert(0) += 1;
        }
    }
    counts
}

impl Catalog {
    // === Overviews (client-scoped flattened DTOs) ===

    pub async fn authors_overview(&self) -> Result<Vec<AuthorDto>> {
        let books = self.books.list().await?;
        let counts = count_by_key(&books, Book::author_id);

        let authors = self.authors.list().await?;
        Ok(authors
            .into_iter()
            .map(|author| AuthorDto {
                no_books: author.id.and_then(|id| counts.get(&id).copied()).unwrap_or(0),
                id: author.id,
                name: author.name,
            })
            .collect())
    }

    pub async fn publishers_overview(&self) -> Result<Vec<PublisherDto>> {
        let books = self.books.list().await?;
        let counts = count_by_key(&books, Book::publisher_id);

        let publishers = self.publishers.list().await?;
        Ok(publishers
            .into_iter()
            .map(|publisher| PublisherDto {
                no_books: publisher
                    .id
                    .and_then(|id| counts.get(&id).copied())
                    .unwrap_or(0),
                id: publisher.id,
                name: publisher.name,
            })
            .collect())
    }

    pub async fn rooms_overview(&self) -> Result<Vec<RoomDto>> {
        let books = self.books.list().await?;
        let book_counts = count_by_key(&books, Book::room_id);

        let shelves = self.shelves.list().await?;
        let mut shelf_counts: HashMap<i32, i64> = HashMap::new();
        for shelf in &shelves {
            if let Some(id) = shelf.room_id() {
                *shelf_counts.entry(id).or_insert(0) += 1;
            }
        }

        let rooms = self.rooms.list().await?;
        Ok(rooms
            .into_iter()
            .map(|room| RoomDto {
                no_books: room
                    .id
                    .and_then(|id| book_counts.get(&id).copied())
                    .unwrap_or(0),
                no_shelves: room
                    .id
                    .and_then(|id| shelf_counts.get(&id).copied())
                    .unwrap_or(0),
                id: room.id,
                name: room.name,
            })
            .collect())
    }

    pub async fn status_types_overview(&self) -> Result<Vec<StatusTypeDto>> {
        let books = self.books.list().await?;
        let counts = count_by_key(&books, Book::status_type_id);

        let status_types = self.status_types.list().await?;
        Ok(status_types
            .into_iter()
            .map(|status_type| StatusTypeDto {
                no_books: status_type
                    .id
                    .and_then(|id| counts.get(&id).copied())
                    .unwrap_or(0),
                id: status_type.id,
                name: status_type.name,
            })
            .collect())
    }

    pub async fn shelves_overview(&self) -> Result<Vec<ShelfDto>> {
        let books = self.books.list().await?;
        let counts = count_by_key(&books, Book::shelf_id);

        let shelves = self.shelves.list().await?;
        Ok(shelves
            .into_iter()
            .map(|shelf| ShelfDto {
                no_books: shelf.id.and_then(|id| counts.get(&id).copied()).unwrap_or(0),
                id: shelf.id,
                letter: shelf.letter,
                number: shelf.number,
                room: shelf.room,
            })
            .collect())
    }

    // === Creation helpers ===

    /// Persist a book, first giving a nested status without an id a row
    /// of its own so `/api/statuses` and the `idStatus` lookup see it.
    pub async fn add_book(&self, mut book: Book) -> Result<Book> {
        if let Some(status) = book.status.take() {
            let status = if status.id.is_none() {
                self.statuses.create(status).await?
            } else {
                status
            };
            book.status = Some(status);
        }
        self.books.create(book).await
    }

    // === Partial updates ===

    pub async fn update_author(&self, id: i32, patch: AuthorPatch) -> Result<()> {
        if let Some(mut author) = self.authors.get(id).await? {
            patch.name.apply(&mut author.name);
            self.authors.update(id, author).await?;
        }
        Ok(())
    }

    pub async fn update_publisher(&self, id: i32, patch: PublisherPatch) -> Result<()> {
        if let Some(mut publisher) = self.publishers.get(id).await? {
            patch.name.apply(&mut publisher.name);
            self.publishers.update(id, publisher).await?;
        }
        Ok(())
    }

    pub async fn update_room(&self, id: i32, patch: RoomPatch) -> Result<()> {
        if let Some(mut room) = self.rooms.get(id).await? {
            patch.name.apply(&mut room.name);
            self.rooms.update(id, room).await?;
        }
        Ok(())
    }

    pub async fn update_status_type(&self, id: i32, patch: StatusTypePatch) -> Result<()> {
        if let Some(mut status_type) = self.status_types.get(id).await? {
            patch.name.apply(&mut status_type.name);
            self.status_types.update(id, status_type).await?;
        }
        Ok(())
    }

    pub async fn update_shelf(&self, id: i32, patch: ShelfPatch) -> Result<()> {
        if let Some(mut shelf) = self.shelves.get(id).await? {
            patch.letter.apply(&mut shelf.letter);
            patch.number.apply(&mut shelf.number);
            patch.room.apply(&mut shelf.room);
            self.shelves.update(id, shelf).await?;
        }
        Ok(())
    }

    pub async fn update_status(&self, id: i32, patch: StatusPatch) -> Result<()> {
        if let Some(mut status) = self.statuses.get(id).await? {
            patch.comment.apply(&mut status.comment);
            patch.status_type.apply(&mut status.status_type);
            self.statuses.update(id, status).await?;
        }
        Ok(())
    }

    pub async fn update_book(&self, id: i32, patch: BookPatch) -> Result<()> {
        if let Some(mut book) = self.books.get(id).await? {
            patch.name.apply(&mut book.name);
            patch.author.apply(&mut book.author);
            patch.publisher.apply(&mut book.publisher);
            patch.shelf.apply(&mut book.shelf);
            patch.status.apply(&mut book.status);
            self.books.update(id, book).await?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::model::{Author, Publisher, Room, Shelf, Status, StatusType};
    use crate::core::patch::PatchField;

    #[tokio::test]
    async fn test_authors_overview_counts_books() {
        let catalog = Catalog::in_memory();

        let herbert = catalog
            .authors
            .create(Author {
                id: None,
                name: Some("Frank Herbert".to_string()),
            })
            .await
            .unwrap();
        let leguin = catalog
            .authors
            .create(Author {
                id: None,
                name: Some("Ursula K. Le Guin".to_string()),
            })
            .await
            .unwrap();

        for name in ["Dune", "Dune Messiah", "Children of Dune"] {
            catalog
                .books
                .create(Book {
                    id: None,
                    name: Some(name.to_string()),
                    author: Some(herbert.clone()),
                    publisher: None,
                    shelf: None,
                    status: None,
                })
                .await
                .unwrap();
        }

        let overview = catalog.authors_overview().await.unwrap();
        assert_eq!(overview.len(), 2);
        assert_eq!(overview[0].no_books, 3);
        assert_eq!(overview[1].no_books, 0);

        // A fourth book bumps the count on re-fetch
        catalog
            .books
            .create(Book {
                id: None,
                name: Some("God Emperor of Dune".to_string()),
                author: Some(herbert.clone()),
                publisher: None,
                shelf: None,
                status: None,
            })
            .await
            .unwrap();

        let overview = catalog.authors_overview().await.unwrap();
        assert_eq!(overview[0].no_books, 4);
        assert_eq!(overview[1].id, leguin.id);
    }

    #[tokio::test]
    async fn test_rooms_overview_counts_books_and_shelves() {
        let catalog = Catalog::in_memory();

        let study = catalog
            .rooms
            .create(Room {
                id: None,
                name: Some("Study".to_string()),
            })
            .await
            .unwrap();

        let shelf = catalog
            .shelves
            .create(Shelf {
                id: None,
                letter: Some("A".to_string()),
                number: Some(1),
                room: Some(study.clone()),
            })
            .await
            .unwrap();
        catalog
            .shelves
            .create(Shelf {
                id: None,
                letter: Some("B".to_string()),
                number: Some(2),
                room: Some(study.clone()),
            })
            .await
            .unwrap();

        catalog
            .books
            .create(Book {
                id: None,
                name: Some("Dune".to_string()),
                author: None,
                publisher: None,
                shelf: Some(shelf),
                status: None,
            })
            .await
            .unwrap();

        let overview = catalog.rooms_overview().await.unwrap();
        assert_eq!(overview.len(), 1);
        assert_eq!(overview[0].no_books, 1);
        assert_eq!(overview[0].no_shelves, 2);
    }

    #[tokio::test]
    async fn test_shelves_overview_embeds_room() {
        let catalog = Catalog::in_memory();

        let study = catalog
            .rooms
            .create(Room {
                id: None,
                name: Some("Study".to_string()),
            })
            .await
            .unwrap();
        catalog
            .shelves
            .create(Shelf {
                id: None,
                letter: Some("A".to_string()),
                number: Some(1),
                room: Some(study.clone()),
            })
            .await
            .unwrap();

        let overview = catalog.shelves_overview().await.unwrap();
        assert_eq!(overview.len(), 1);
        assert_eq!(overview[0].room, Some(study));
        assert_eq!(overview[0].no_books, 0);
    }

    #[tokio::test]
    async fn test_update_author_applies_only_provided_fields() {
        let catalog = Catalog::in_memory();
        let author = catalog
            .authors
            .create(Author {
                id: None,
                name: Some("Frank Herbert".to_string()),
            })
            .await
            .unwrap();
        let id = author.id.unwrap();

        // Absent name leaves the stored name untouched
        catalog
            .update_author(id, AuthorPatch::default())
            .await
            .unwrap();
        let stored = catalog.authors.get(id).await.unwrap().unwrap();
        assert_eq!(stored.name.as_deref(), Some("Frank Herbert"));

        // Null also means unchanged
        catalog
            .update_author(
                id,
                AuthorPatch {
                    name: PatchField::Null,
                },
            )
            .await
            .unwrap();
        let stored = catalog.authors.get(id).await.unwrap().unwrap();
        assert_eq!(stored.name.as_deref(), Some("Frank Herbert"));

        catalog
            .update_author(
                id,
                AuthorPatch {
                    name: PatchField::Value("F. Herbert".to_string()),
                },
            )
            .await
            .unwrap();
        let stored = catalog.authors.get(id).await.unwrap().unwrap();
        assert_eq!(stored.name.as_deref(), Some("F. Herbert"));
    }

    #[tokio::test]
    async fn test_update_missing_id_is_silent_noop() {
        let catalog = Catalog::in_memory();

        catalog
            .update_author(
                42,
                AuthorPatch {
                    name: PatchField::Value("Ghost".to_string()),
                },
            )
            .await
            .unwrap();

        // Nothing was created
        assert!(catalog.authors.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update_book_replaces_whole_relations() {
        let catalog = Catalog::in_memory();

        let old_publisher = Publisher {
            id: Some(1),
            name: Some("Chilton".to_string()),
        };
        let book = catalog
            .books
            .create(Book {
                id: None,
                name: Some("Dune".to_string()),
                author: None,
                publisher: Some(old_publisher),
                shelf: None,
                status: None,
            })
            .await
            .unwrap();
        let id = book.id.unwrap();

        let new_publisher = Publisher {
            id: Some(2),
            name: Some("Ace".to_string()),
        };
        catalog
            .update_book(
                id,
                BookPatch {
                    publisher: PatchField::Value(new_publisher.clone()),
                    ..BookPatch::default()
                },
            )
            .await
            .unwrap();

        let stored = catalog.books.get(id).await.unwrap().unwrap();
        assert_eq!(stored.publisher, Some(new_publisher));
        assert_eq!(stored.name.as_deref(), Some("Dune"));
    }

    #[tokio::test]
    async fn test_add_book_persists_new_nested_status() {
        let catalog = Catalog::in_memory();

        let status_type = catalog
            .status_types
            .create(StatusType {
                id: None,
                name: Some("at home".to_string()),
            })
            .await
            .unwrap();

        let book = catalog
            .add_book(Book {
                id: None,
                name: Some("Dune".to_string()),
                author: None,
                publisher: None,
                shelf: None,
                status: Some(Status {
                    id: None,
                    comment: Some("first edition".to_string()),
                    status_type: Some(status_type),
                }),
            })
            .await
            .unwrap();

        let status_id = book.status.as_ref().and_then(|s| s.id);
        assert!(status_id.is_some());

        // The status got a row of its own
        let stored = catalog.statuses.get(status_id.unwrap()).await.unwrap();
        assert_eq!(
            stored.and_then(|s| s.comment),
            Some("first edition".to_string())
        );
    }
}
