//! Check command - validates configuration and lints the schema

use std::collections::HashSet;

use ddlgen_generator::{DdlStrategy, Registry};
use ddlgen_types::{Dialect, Entity};

use crate::config::Config;
use crate::error::CliError;
use crate::output;
use crate::schema::SchemaDocument;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Warning,
    Error,
}

/// One lint result, attached to a table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    pub severity: Severity,
    pub table: String,
    pub message: String,
}

impl Finding {
    fn warning(table: &str, message: String) -> Self {
        Self {
            severity: Severity::Warning,
            table: table.to_string(),
            message,
        }
    }

    fn error(table: &str, message: String) -> Self {
        Self {
            severity: Severity::Error,
            table: table.to_string(),
            message,
        }
    }
}

pub fn run(
    config: &Config,
    registry: &Registry<'_>,
    dialect_override: Option<Dialect>,
) -> Result<(), CliError> {
    let dialect = dialect_override.unwrap_or(config.dialect);
    let strategy = registry.strategy(dialect)?;

    println!("{}", output::heading("Checking configuration..."));
    println!();
    println!("  {}: {}", output::label("Dialect"), dialect.display_name());
    println!("  {}: {}", output::label("Schema"), config.schema_display());
    match config.out_path() {
        Some(out) => println!("  {}: {}", output::label("Output"), out.display()),
        None => println!("  {}: stdout", output::label("Output")),
    }

    println!();
    print!("  {} Schema files... ", output::label("Checking"));
    let files = match config.schema_files() {
        Ok(files) => {
            println!("{}", output::status_ok());
            for f in &files {
                println!("    {}", f.display());
            }
            files
        }
        Err(e) => {
            println!("{}", output::status_error());
            println!("    {e}");
            println!();
            println!("{}", output::error("Configuration has errors."));
            return Err(CliError::Other("config check failed".into()));
        }
    };

    println!();
    print!("  {} Entities... ", output::label("Checking"));
    let entities = match SchemaDocument::load_all(&files) {
        Ok(entities) => {
            println!("{} ({} found)", output::status_ok(), entities.len());
            entities
        }
        Err(e) => {
            println!("{}", output::status_error());
            println!("    {e}");
            println!();
            println!("{}", output::error("Schema has errors."));
            return Err(CliError::Other("schema check failed".into()));
        }
    };

    let findings = lint(strategy, &entities);
    let errors = findings
        .iter()
        .filter(|f| f.severity == Severity::Error)
        .count();

    if !findings.is_empty() {
        println!();
    }
    for finding in &findings {
        let text = format!("{}: {}", finding.table, finding.message);
        match finding.severity {
            Severity::Warning => println!("  {}", output::warn_line(&text)),
            Severity::Error => println!("  {}", output::err_line(&text)),
        }
    }

    println!();
    if errors > 0 {
        println!(
            "{}",
            output::error(&format!("Schema has {errors} error(s)."))
        );
        Err(CliError::Other("schema check failed".into()))
    } else if findings.is_empty() {
        println!("{}", output::success("Schema OK."));
        Ok(())
    } else {
        println!(
            "{}",
            output::warning(&format!("{} warning(s).", findings.len()))
        );
        Ok(())
    }
}

/// Problems that would make `strategy` emit broken or surprising DDL
pub fn lint(strategy: &dyn DdlStrategy, entities: &[Entity]) -> Vec<Finding> {
    let tables: HashSet<&str> = entities.iter().map(|e| e.table_name.as_ref()).collect();
    let mut seen = HashSet::new();
    let mut findings = Vec::new();

    for entity in entities {
        let table = entity.table_name.as_ref();

        if !seen.insert(table) {
            findings.push(Finding::error(table, "table declared more than once".into()));
        }
        if entity.fields.is_empty() {
            findings.push(Finding::error(table, "table has no columns".into()));
        }

        for (i, field) in entity.fields.iter().enumerate() {
            if !field.has_explicit_name() {
                findings.push(Finding::error(
                    table,
                    format!(
                        "field #{} has no name, column falls back to \"{}\"",
                        i + 1,
                        field.column_name()
                    ),
                ));
            }

            let column = field.column_name();
            match field.type_name.as_deref() {
                None => findings.push(Finding::warning(
                    table,
                    format!("column `{column}` has no type, using {}", strategy.map_type(field)),
                )),
                Some(tag) if field.logical_type().is_none() => findings.push(Finding::warning(
                    table,
                    format!(
                        "column `{column}` has unknown type `{tag}`, using {}",
                        strategy.map_type(field)
                    ),
                )),
                Some(_) => {}
            }

            if field.logical_type().is_some_and(|ty| ty.is_array())
                && !has_native_arrays(strategy.dialect())
            {
                findings.push(Finding::warning(
                    table,
                    format!(
                        "column `{column}` is an array, {} stores it as {}",
                        strategy.dialect().display_name(),
                        strategy.map_type(field)
                    ),
                ));
            }

            if strategy.dialect() == Dialect::Sqlite && field.auto_increment && !field.primary_key {
                findings.push(Finding::warning(
                    table,
                    format!(
                        "column `{column}` is autoincrement but not the primary key, AUTOINCREMENT is dropped"
                    ),
                ));
            }
        }

        for fk in &entity.foreign_keys {
            if !tables.contains(fk.referenced_table_name.as_ref()) {
                findings.push(Finding::warning(
                    table,
                    format!(
                        "foreign key `{}` references unknown table `{}`",
                        fk.name, fk.referenced_table_name
                    ),
                ));
            }
            if entity.find_field(&fk.column_name).is_none() {
                findings.push(Finding::warning(
                    table,
                    format!(
                        "foreign key `{}` uses unknown column `{}`",
                        fk.name, fk.column_name
                    ),
                ));
            }
        }
    }

    findings
}

const fn has_native_arrays(dialect: Dialect) -> bool {
    matches!(dialect, Dialect::PostgreSql | Dialect::Kingbase | Dialect::H2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ddlgen_generator::strategy_for;
    use ddlgen_types::{Field, ForeignKey};

    fn messages(findings: &[Finding]) -> Vec<&str> {
        findings.iter().map(|f| f.message.as_str()).collect()
    }

    #[test]
    fn clean_schema() {
        let entities = [
            Entity::new("User").field(Field::new("id", "Long").primary_key()),
            Entity::new("Post")
                .field(Field::new("id", "Long").primary_key())
                .field(Field::new("userId", "Long").column("user_id"))
                .foreign_key(ForeignKey::new("fk_post_user", "user_id", "user", "id")),
        ];
        assert!(lint(strategy_for(Dialect::MySql), &entities).is_empty());
    }

    #[test]
    fn unnamed_field_is_an_error() {
        let entities = [Entity::new("Thing").field(Field {
            type_name: Some("Integer".into()),
            ..Field::default()
        })];

        let findings = lint(strategy_for(Dialect::PostgreSql), &entities);
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].severity, Severity::Error);
        assert_eq!(
            findings[0].message,
            "field #1 has no name, column falls back to \"unknown\""
        );
    }

    #[test]
    fn unknown_type_reports_fallback() {
        let entities = [Entity::new("Wallet").field(Field::new("balance", "Money"))];

        let findings = lint(strategy_for(Dialect::Oracle), &entities);
        assert_eq!(
            messages(&findings),
            ["column `balance` has unknown type `Money`, using VARCHAR2(255)"]
        );
        assert_eq!(findings[0].severity, Severity::Warning);
    }

    #[test]
    fn duplicate_and_empty_tables() {
        let entities = [Entity::new("User"), Entity::new("User")];

        let findings = lint(strategy_for(Dialect::H2), &entities);
        assert_eq!(
            messages(&findings),
            [
                "table has no columns",
                "table declared more than once",
                "table has no columns"
            ]
        );
        assert!(findings.iter().all(|f| f.severity == Severity::Error));
    }

    #[test]
    fn dangling_foreign_key() {
        let entities = [Entity::new("Post")
            .field(Field::new("id", "Long"))
            .foreign_key(ForeignKey::new("fk_post_user", "user_id", "user", "id"))];

        let findings = lint(strategy_for(Dialect::Dm), &entities);
        assert_eq!(
            messages(&findings),
            [
                "foreign key `fk_post_user` references unknown table `user`",
                "foreign key `fk_post_user` uses unknown column `user_id`"
            ]
        );
    }

    #[test]
    fn sqlite_autoincrement_outside_primary_key() {
        let entities = [Entity::new("Counter").field(Field::new("n", "Integer").auto_increment())];

        assert_eq!(lint(strategy_for(Dialect::Sqlite), &entities).len(), 1);
        assert!(lint(strategy_for(Dialect::MySql), &entities).is_empty());
    }

    #[test]
    fn array_without_native_type() {
        let entities = [Entity::new("Post").field(Field::new("tags", "String[]"))];

        for dialect in [Dialect::PostgreSql, Dialect::Kingbase, Dialect::H2] {
            assert!(lint(strategy_for(dialect), &entities).is_empty(), "{dialect}");
        }

        let findings = lint(strategy_for(Dialect::MySql), &entities);
        assert_eq!(
            messages(&findings),
            ["column `tags` is an array, MySQL stores it as VARCHAR(255)"]
        );
        assert_eq!(findings[0].severity, Severity::Warning);
    }
}
