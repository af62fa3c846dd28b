//! Core domain types: the entity model, partial-update types and the API
//! error hierarchy.

pub mod error;
pub mod model;
pub mod patch;

pub use error::ApiError;
pub use model::CatalogEntity;
pub use patch::PatchField;
