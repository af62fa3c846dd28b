//! Partial-update types.
//!
//! A PATCH body is a dedicated struct per entity whose fields use
//! [`PatchField`], a three-state discriminator that keeps "field absent
//! from the payload" distinct from "field explicitly set to null". The
//! original API contract treats both as "leave unchanged", and that is
//! what [`PatchField::apply`] does, but the distinction is preserved on
//! the wire so a "clear this field" operation could be added without a
//! format change.

use crate::core::model::{Author, Publisher, Room, Shelf, Status, StatusType};
use serde::{Deserialize, Deserializer};

/// Per-field provided/absent discriminator for PATCH payloads.
#[derive(Debug, Clone, PartialEq)]
pub enum PatchField<T> {
    /// Field did not appear in the payload
    Absent,
    /// Field appeared with an explicit `null`
    Null,
    /// Field appeared with a value
    Value(T),
}

// Manual impl: the derive would require `T: Default`
impl<T> Default for PatchField<T> {
    fn default() -> Self {
        PatchField::Absent
    }
}

impl<T> PatchField<T> {
    /// Overwrite `slot` when a value was provided.
    ///
    /// `Null` is applied as "leave unchanged", matching the original
    /// null-means-unchanged contract.
    pub fn apply(self, slot: &mut Option<T>) {
        if let PatchField::Value(value) = self {
            *slot = Some(value);
        }
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, PatchField::Absent)
    }
}

impl<'de, T> Deserialize<'de> for PatchField<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // Only reached when the key is present; a missing key stays at
        // the serde default, Absent.
        Ok(match Option::<T>::deserialize(deserializer)? {
            Some(value) => PatchField::Value(value),
            None => PatchField::Null,
        })
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AuthorPatch {
    #[serde(default)]
    pub name: PatchField<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PublisherPatch {
    #[serde(default)]
    pub name: PatchField<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RoomPatch {
    #[serde(default)]
    pub name: PatchField<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct StatusTypePatch {
    #[serde(default)]
    pub name: PatchField<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ShelfPatch {
    #[serde(default)]
    pub letter: PatchField<String>,
    #[serde(default)]
    pub number: PatchField<i32>,
    #[serde(default)]
    pub room: PatchField<Room>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusPatch {
    #[serde(default)]
    pub comment: PatchField<String>,
    #[serde(default)]
    pub status_type: PatchField<StatusType>,
}

/// Patch for the central entity; a provided relation replaces the whole
/// embedded object.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BookPatch {
    #[serde(default)]
    pub name: PatchField<String>,
    #[serde(default)]
    pub author: PatchField<Author>,
    #[serde(default)]
    pub publisher: PatchField<Publisher>,
    #[serde(default)]
    pub shelf: PatchField<Shelf>,
    #[serde(default)]
    pub status: PatchField<Status>,
}
