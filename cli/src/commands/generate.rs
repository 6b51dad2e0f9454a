//! Generate command
//!
//! Loads every schema document, optionally orders entities by their foreign
//! keys, and prints or writes the dialect's full DDL batch.

use std::path::{Path, PathBuf};

use ddlgen_generator::{Registry, order_by_dependencies};
use ddlgen_types::{Dialect, Entity};

use crate::config::{CONFIG_FILE, Config, ConfigError};
use crate::error::CliError;
use crate::output;
use crate::schema::SchemaDocument;

#[derive(Debug, Default)]
pub struct GenerateOptions {
    /// Overrides the configured dialect
    pub dialect: Option<Dialect>,
    /// Overrides the configured schema paths, relative to the working directory
    pub schema: Vec<String>,
    /// Overrides the configured output file
    pub out: Option<PathBuf>,
    pub order_by_dependencies: bool,
}

pub fn run(
    config: Option<&Config>,
    registry: &Registry<'_>,
    opts: GenerateOptions,
) -> Result<(), CliError> {
    let dialect = opts
        .dialect
        .or(config.map(|c| c.dialect))
        .ok_or(CliError::MissingDialect)?;

    let files = if !opts.schema.is_empty() {
        Config::new(dialect, opts.schema).schema_files()?
    } else if let Some(config) = config {
        config.schema_files()?
    } else {
        return Err(ConfigError::NotFound(CONFIG_FILE.into()).into());
    };

    let mut entities = SchemaDocument::load_all(&files)?;
    if opts.order_by_dependencies || config.is_some_and(|c| c.order_by_dependencies) {
        entities = sorted(&entities);
    }

    let sql = registry.strategy(dialect)?.generate_all(&entities);

    match opts.out.or_else(|| config.and_then(Config::out_path)) {
        Some(path) => {
            write_sql(&path, &sql)?;
            println!(
                "{} {} table(s) for {} to {}",
                output::success("Wrote"),
                entities.len(),
                dialect.display_name(),
                path.display()
            );
        }
        None => println!("{sql}"),
    }

    Ok(())
}

fn sorted(entities: &[Entity]) -> Vec<Entity> {
    order_by_dependencies(entities).into_iter().cloned().collect()
}

fn write_sql(path: &Path, sql: &str) -> Result<(), CliError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(|e| CliError::Io(parent.into(), e))?;
    }
    std::fs::write(path, format!("{sql}\n")).map_err(|e| CliError::Io(path.into(), e))
}
