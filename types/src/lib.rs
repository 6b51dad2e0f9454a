//! Schema model shared by the ddlgen crates
//!
//! - [`Dialect`] - Target database engine
//! - [`LogicalType`] - Engine-agnostic type vocabulary
//! - [`Entity`], [`Field`], [`ForeignKey`] - Immutable table descriptions
//!
//! # Features
//!
//! - `serde` - Serialize/deserialize the model with camelCase keys (enabled by default)

mod dialect;
mod entity;
mod field;
mod foreign_key;
mod logical;

#[cfg(feature = "serde")]
pub(crate) mod serde_helpers;

pub use dialect::{Dialect, DialectParseError};
pub use entity::Entity;
pub use field::{Field, UNKNOWN_COLUMN};
pub use foreign_key::ForeignKey;
pub use logical::LogicalType;
