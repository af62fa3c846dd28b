//! Flattened read models for the client-scoped response mode.
//!
//! These carry scalar fields plus precomputed aggregates and no embedded
//! links; the front-end client renders its list views straight from them.

use crate::core::model::Room;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorDto {
    pub id: Option<i32>,
    pub name: Option<String>,
    pub no_books: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublisherDto {
    pub id: Option<i32>,
    pub name: Option<String>,
    pub no_books: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomDto {
    pub id: Option<i32>,
    pub name: Option<String>,
    pub no_books: i64,
    pub no_shelves: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusTypeDto {
    pub id: Option<i32>,
    pub name: Option<String>,
    pub no_books: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShelfDto {
    pub id: Option<i32>,
    pub letter: Option<String>,
    pub number: Option<i32>,
    pub room: Option<Room>,
    pub no_books: i64,
}
