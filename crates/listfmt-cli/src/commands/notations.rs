//! Implementation of the `listfmt notations` command.

use serde_json::json;

use listfmt_core::Notation;

use crate::{
    error::{CliResult, IntoCli},
    output::OutputManager,
};

pub fn execute(output: OutputManager) -> CliResult<()> {
    if output.is_json() {
        let entries: Vec<_> = Notation::ALL
            .iter()
            .map(|n| {
                json!({
                    "name": n.as_str(),
                    "aliases": n.aliases(),
                    "description": n.description(),
                })
            })
            .collect();
        return output.json(&entries);
    }

    output
        .header("Supported notations:")
        .with_cli_context(|| "writing notation list")?;
    for n in Notation::ALL {
        output
            .print(&format!("  {:<8} {}", n.as_str(), n.description()))
            .with_cli_context(|| "writing notation list")?;
        output
            .detail(&format!("           aliases: {}", n.aliases().join(", ")))
            .with_cli_context(|| "writing notation list")?;
    }

    Ok(())
}
