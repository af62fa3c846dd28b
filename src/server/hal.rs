//! Hypermedia response shaping.
//!
//! Every entity gets a fixed set of relation links, produced by an
//! explicit per-entity builder function over the configured base URL.
//! No reverse routing or reflection; the tables below are the whole
//! contract.

use crate::core::model::{Author, Book, Publisher, Room, Shelf, Status, StatusType};
use indexmap::IndexMap;
use serde::Serialize;

pub const REL_SELF: &str = "self";
pub const REL_BOOK: &str = "book";
pub const REL_BOOKS: &str = "books";
pub const REL_SHELVES: &str = "shelves";

/// A single `_links` entry
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Link {
    pub href: String,
}

/// A resource body: the entity's fields plus its `_links`
#[derive(Debug, Serialize)]
pub struct Resource<T> {
    #[serde(flatten)]
    pub entity: T,
    #[serde(rename = "_links")]
    pub links: IndexMap<&'static str, Link>,
}

/// A HAL collection: resources keyed by their plural name under
/// `_embedded`, plus a self link for the collection route
#[derive(Debug, Serialize)]
pub struct Collection<T> {
    #[serde(rename = "_embedded")]
    pub embedded: IndexMap<&'static str, Vec<Resource<T>>>,
    #[serde(rename = "_links")]
    pub links: IndexMap<&'static str, Link>,
}

impl<T> Collection<T> {
    pub fn new(plural: &'static str, items: Vec<Resource<T>>, self_link: Link) -> Self {
        let mut embedded = IndexMap::new();
        embedded.insert(plural, items);
        let mut links = IndexMap::new();
        links.insert(REL_SELF, self_link);
        Self { embedded, links }
    }
}

/// Builds links and resource wrappers against one base URL.
#[derive(Debug, Clone)]
pub struct LinkBuilder {
    base: String,
}

impl LinkBuilder {
    pub fn new(base_url: &str) -> Self {
        Self {
            base: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn link(&self, path: String) -> Link {
        Link {
            href: format!("{}{}", self.base, path),
        }
    }

    /// Absolute-or-relative URL of a single resource, also used for the
    /// `Location` header on creation
    pub fn location(&self, resource: &str, id: i32) -> String {
        format!("{}/api/{}/{}", self.base, resource, id)
    }

    /// Self link for a collection route
    pub fn collection(&self, resource: &str) -> Link {
        self.link(format!("/api/{resource}"))
    }

    fn self_link(&self, resource: &str, id: i32) -> Link {
        Link {
            href: self.location(resource, id),
        }
    }

    fn entity_links(
        &self,
        resource: &'static str,
        id: i32,
        relations: &[(&'static str, String)],
    ) -> IndexMap<&'static str, Link> {
        let mut links = IndexMap::new();
        links.insert(REL_SELF, self.self_link(resource, id));
        for (rel, path) in relations {
            links.insert(*rel, self.link(path.clone()));
        }
        links
    }

    // === Per-entity link sets ===

    pub fn author_links(&self, id: i32) -> IndexMap<&'static str, Link> {
        self.entity_links(
            "authors",
            id,
            &[(REL_BOOKS, format!("/api/books?idAuthor={id}"))],
        )
    }

    pub fn publisher_links(&self, id: i32) -> IndexMap<&'static str, Link> {
        self.entity_links(
            "publishers",
            id,
            &[(REL_BOOKS, format!("/api/books?idPublisher={id}"))],
        )
    }

    pub fn room_links(&self, id: i32) -> IndexMap<&'static str, Link> {
        self.entity_links(
            "rooms",
            id,
            &[
                (REL_BOOKS, format!("/api/books?idRoom={id}")),
                (REL_SHELVES, format!("/api/shelves?idRoom={id}")),
            ],
        )
    }

    pub fn shelf_links(&self, id: i32) -> IndexMap<&'static str, Link> {
        self.entity_links(
            "shelves",
            id,
            &[(REL_BOOKS, format!("/api/books?idShelf={id}"))],
        )
    }

    pub fn book_links(&self, id: i32) -> IndexMap<&'static str, Link> {
        self.entity_links("books", id, &[])
    }

    pub fn status_links(&self, id: i32) -> IndexMap<&'static str, Link> {
        self.entity_links(
            "statuses",
            id,
            &[(REL_BOOK, format!("/api/books?idStatus={id}"))],
        )
    }

    pub fn status_type_links(&self, id: i32) -> IndexMap<&'static str, Link> {
        self.entity_links(
            "statustypes",
            id,
            &[(REL_BOOKS, format!("/api/books?idStatusType={id}"))],
        )
    }

    // === Resource wrappers ===

    pub fn author(&self, author: Author) -> Resource<Author> {
        let links = self.author_links(author.id.unwrap_or_default());
        Resource {
            entity: author,
            links,
        }
    }

    pub fn publisher(&self, publisher: Publisher) -> Resource<Publisher> {
        let links = self.publisher_links(publisher.id.unwrap_or_default());
        Resource {
            entity: publisher,
            links,
        }
    }

    pub fn room(&self, room: Room) -> Resource<Room> {
        let links = self.room_links(room.id.unwrap_or_default());
        Resource {
            entity: room,
            links,
        }
    }

    pub fn shelf(&self, shelf: Shelf) -> Resource<Shelf> {
        let links = self.shelf_links(shelf.id.unwrap_or_default());
        Resource {
            entity: shelf,
            links,
        }
    }

    pub fn book(&self, book: Book) -> Resource<Book> {
        let links = self.book_links(book.id.unwrap_or_default());
        Resource {
            entity: book,
            links,
        }
    }

    pub fn status(&self, status: Status) -> Resource<Status> {
        let links = self.status_links(status.id.unwrap_or_default());
        Resource {
            entity: status,
            links,
        }
    }

    pub fn status_type(&self, status_type: StatusType) -> Resource<StatusType> {
        let links = self.status_type_links(status_type.id.unwrap_or_default());
        Resource {
            entity: status_type,
            links,
        }
    }

}
