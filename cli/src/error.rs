//! Error types for the CLI

use std::path::PathBuf;

use ddlgen_generator::DdlError;
use thiserror::Error;

use crate::config::ConfigError;
use crate::schema::SchemaError;

/// CLI errors
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Schema document error
    #[error("Schema error: {0}")]
    Schema(#[from] SchemaError),

    #[error(transparent)]
    Ddl(#[from] DdlError),

    /// Writing an output file failed
    #[error("failed to write {}: {}", .0.display(), .1)]
    Io(PathBuf, #[source] std::io::Error),

    #[error("{} already exists. Delete it first to reinitialize.", .0.display())]
    AlreadyExists(PathBuf),

    #[error("no dialect given. Use --dialect or set 'dialect' in ddlgen.toml")]
    MissingDialect,

    /// Other errors
    #[error("{0}")]
    Other(String),
}
