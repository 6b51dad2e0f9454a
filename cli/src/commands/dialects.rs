//! Dialects command - lists registered strategies

use ddlgen_generator::Registry;

use crate::error::CliError;
use crate::output;

pub fn run(registry: &Registry<'_>) -> Result<(), CliError> {
    registry.validate()?;

    println!("{}", output::heading("Supported dialects:"));
    println!();
    for dialect in registry.dialects() {
        let strategy = registry.strategy(dialect)?;
        println!(
            "  {} {:<12} {} {}",
            output::label(&format!("{:<10}", dialect.as_str())),
            dialect.display_name(),
            output::muted(&format!("quote {}", strategy.quote())),
            output::muted(&format!("terminator: {}", strategy.terminator())),
        );
    }

    Ok(())
}
