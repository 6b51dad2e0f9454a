//! Dialect-aware DDL generation
//!
//! Each supported engine is a [`DdlStrategy`]: a type mapper, a quoting rule,
//! single-statement builders and a schema orchestrator ([`DdlStrategy::plan`] /
//! [`DdlStrategy::generate_all`]) that emits a whole schema in an order the
//! engine accepts.
//!
//! ```
//! use ddlgen_generator::strategy_for;
//! use ddlgen_types::{Dialect, Entity, Field};
//!
//! let user = Entity::new("User")
//!     .field(Field::new("id", "Long").primary_key().auto_increment().not_null())
//!     .field(Field::new("email", "String").length(255).not_null());
//!
//! let sql = strategy_for(Dialect::MySql).create_table(&user);
//! assert!(sql.contains("`id` BIGINT NOT NULL AUTO_INCREMENT PRIMARY KEY"));
//! assert!(sql.ends_with(") AUTO_INCREMENT=1;"));
//! ```
//!
//! # Features
//!
//! - `tracing` - Emit statement and fallback events via `tracing` (enabled by default)

mod common;
pub mod dialect;
mod error;
mod ordering;
mod quote;
mod registry;
mod statement;
mod strategy;
mod trace;

pub use error::{DdlError, Operation, Result};
pub use ordering::order_by_dependencies;
pub use quote::Quote;
pub use registry::Registry;
pub use statement::{Statement, StatementKind, Terminator};
pub use strategy::{DdlStrategy, strategy_for};
