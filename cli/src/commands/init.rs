//! Init command - writes a starter `ddlgen.toml`

use std::path::Path;

use ddlgen_types::Dialect;

use crate::error::CliError;
use crate::output;

pub fn run(path: &Path, dialect: Dialect) -> Result<(), CliError> {
    if path.exists() {
        return Err(CliError::AlreadyExists(path.into()));
    }

    std::fs::write(path, config_template(dialect)).map_err(|e| CliError::Io(path.into(), e))?;

    println!("{}", output::success(&format!("Created {}", path.display())));
    println!();
    println!("Next steps:");
    println!("  1. Describe your entities in {}", output::heading("schema.json"));
    println!("  2. Run {} to lint the schema", output::heading("ddlgen check"));
    println!("  3. Run {} to print the DDL", output::heading("ddlgen generate"));

    Ok(())
}

/// Starter configuration for `dialect`
pub fn config_template(dialect: Dialect) -> String {
    format!(
        r#"# ddlgen configuration ({name})

dialect = "{dialect}"
schema = "schema.json"
# out = "schema.sql"
# orderByDependencies = true
"#,
        name = dialect.display_name(),
        dialect = dialect.as_str(),
    )
}
