//! Entity model for the catalog.
//!
//! Relations travel as embedded objects carrying their own ids, mirroring
//! the relational schema's foreign keys (`book.shelf.room.id` is the room
//! foreign key two hops away). Every field except the id is nullable: the
//! API persists whatever the caller supplies and relies on no validation
//! beyond deserialization.

use serde::{Deserialize, Serialize};

/// Behavior shared by every persisted record type.
///
/// Identifiers are assigned by the store on creation; an entity arriving
/// from a POST body normally has `id: None`.
pub trait CatalogEntity: Clone + Send + Sync + 'static {
    /// Plural resource name used in URL paths and `_embedded` keys
    fn resource_name() -> &'static str;

    /// Singular name used in error messages
    fn resource_name_singular() -> &'static str;

    fn id(&self) -> Option<i32>;

    fn set_id(&mut self, id: i32);
}

macro_rules! impl_catalog_entity {
    ($entity:ty, $singular:literal, $plural:literal) => {
        impl CatalogEntity for $entity {
            fn resource_name() -> &'static str {
                $plural
            }

            fn resource_name_singular() -> &'static str {
                $singular
            }

            fn id(&self) -> Option<i32> {
                self.id
            }

            fn set_id(&mut self, id: i32) {
                self.id = Some(id);
            }
        }
    };
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Author {
    #[serde(default)]
    pub id: Option<i32>,
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Publisher {
    #[serde(default)]
    pub id: Option<i32>,
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    #[serde(default)]
    pub id: Option<i32>,
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shelf {
    #[serde(default)]
    pub id: Option<i32>,
    #[serde(default)]
    pub letter: Option<String>,
    #[serde(default)]
    pub number: Option<i32>,
    #[serde(default)]
    pub room: Option<Room>,
}

/// Classifies loan/availability statuses ("at home", "lent out", ...)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusType {
    #[serde(default)]
    pub id: Option<i32>,
    #[serde(default)]
    pub name: Option<String>,
}

/// Loan/availability state of a single book.
///
/// No transition rules are enforced here; a status is created and updated
/// exactly like any other entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Status {
    #[serde(default)]
    pub id: Option<i32>,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default)]
    pub status_type: Option<StatusType>,
}

/// The central entity. All relations are optional foreign keys.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    #[serde(default)]
    pub id: Option<i32>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub author: Option<Author>,
    #[serde(default)]
    pub publisher: Option<Publisher>,
    #[serde(default)]
    pub shelf: Option<Shelf>,
    #[serde(default)]
    pub status: Option<Status>,
}

impl_catalog_entity!(Author, "author", "authors");
impl_catalog_entity!(Publisher, "publisher", "publishers");
impl_catalog_entity!(Room, "room", "rooms");
impl_catalog_entity!(Shelf, "shelf", "shelves");
impl_catalog_entity!(Book, "book", "books");
impl_catalog_entity!(Status, "status", "statuses");
impl_catalog_entity!(StatusType, "statustype", "statustypes");

impl Book {
    /// Id of the room this book lives in, via its shelf
    pub fn room_id(&self) -> Option<i32> {
        self.shelf.as_ref()?.room.as_ref()?.id
    }

    /// Id of this book's status-type, via its status
    pub fn status_type_id(&self) -> Option<i32> {
        self.status.as_ref()?.status_type.as_ref()?.id
    }

    pub fn author_id(&self) -> Option<i32> {
        self.author.as_ref()?.id
    }

    pub fn publisher_id(&self) -> Option<i32> {
        self.publisher.as_ref()?.id
    }

    pub fn shelf_id(&self) -> Option<i32> {
        self.shelf.as_ref()?.id
    }

    pub fn status_id(&self) -> Option<i32> {
        self.status.as_ref()?.id
    }
}

impl Shelf {
    pub fn room_id(&self) -> Option<i32> {
        self.room.as_ref()?.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_serializes_with_camel_case_type_key() {
        let status = Status {
            id: Some(3),
            comment: Some("lent to Anna".to_string()),
            status_type: Some(StatusType {
                id: Some(1),
                name: Some("lent out".to_string()),
            }),
        };

        let json = serde_json::to_value(&status).unwrap();
        assert_eq!(json["statusType"]["id"], 1);
        assert!(json.get("status_type").is_none());
    }

    #[test]
    fn book_deserializes_with_missing_relations() {
        let book: Book = serde_json::from_str(r#"{"name":"Dune"}"#).unwrap();

        assert_eq!(book.name.as_deref(), Some("Dune"));
        assert!(book.id.is_none());
        assert!(book.author.is_none());
        assert!(book.room_id().is_none());
    }

    #[test]
    fn book_resolves_nested_foreign_keys() {
        let book = Book {
            id: Some(1),
            name: Some("Dune".to_string()),
            author: Some(Author {
                id: Some(7),
                name: Some("Frank Herbert".to_string()),
            }),
            publisher: None,
            shelf: Some(Shelf {
                id: Some(4),
                letter: Some("B".to_string()),
                number: Some(2),
                room: Some(Room {
                    id: Some(9),
                    name: Some("Study".to_string()),
                }),
            }),
            status: Some(Status {
                id: Some(5),
                comment: None,
                status_type: Some(StatusType {
                    id: Some(2),
                    name: Some("at home".to_string()),
                }),
            }),
        };

        assert_eq!(book.author_id(), Some(7));
        assert_eq!(book.publisher_id(), None);
        assert_eq!(book.shelf_id(), Some(4));
        assert_eq!(book.room_id(), Some(9));
        assert_eq!(book.status_id(), Some(5));
        assert_eq!(book.status_type_id(), Some(2));
    }
}
