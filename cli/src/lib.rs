//! ddlgen CLI - generate DDL from entity schema documents
//!
//! Reads a `ddlgen.toml` configuration file and one or more schema documents
//! (JSON or TOML), and prints or writes the DDL for the configured dialect.
//!
//! # Quick Start
//!
//! 1. Run `ddlgen init --dialect postgresql` to create a `ddlgen.toml`
//! 2. Describe your entities in `schema.json`
//! 3. Run `ddlgen check`, then `ddlgen generate`
//!
//! # Configuration
//!
//! ```toml
//! dialect = "postgresql"
//! schema = ["schema/*.json"]
//! out = "build/schema.sql"
//! orderByDependencies = true
//! ```
//!
//! # Commands
//!
//! - `ddlgen init` - Create a new ddlgen.toml configuration file
//! - `ddlgen generate` - Print or write the DDL for every entity
//! - `ddlgen check` - Validate the configuration and lint the schema
//! - `ddlgen dialects` - List supported dialects

pub mod commands;
pub mod config;
pub mod error;
pub mod output;
pub mod schema;

pub use config::{Config, Error as ConfigError};
pub use error::CliError;
pub use schema::SchemaDocument;
