//! One handler module per entity family.
//!
//! Every module maps the same verb set: GET one (404 on missing id),
//! GET collection (optionally filtered by exactly one recognised query
//! parameter), POST (201 + Location), PATCH (partial update, silent on
//! missing id) and DELETE (idempotent). PATCH and DELETE return no body.

pub mod authors;
pub mod books;
pub mod publishers;
pub mod rooms;
pub mod shelves;
pub mod status_types;
pub mod statuses;
