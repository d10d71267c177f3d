//! Implementation of the `listfmt config` command.

use crate::{
    config::AppConfig,
    error::{CliResult, IntoCli},
    output::OutputManager,
};

pub fn execute(config: AppConfig, output: OutputManager) -> CliResult<()> {
    if output.is_json() {
        return output.json(&config);
    }

    let text =
        toml::to_string_pretty(&config).with_cli_context(|| "encoding configuration as TOML")?;

    output
        .detail(&format!(
            "# default file: {}",
            AppConfig::config_path().display()
        ))
        .with_cli_context(|| "writing configuration")?;
    output
        .rendered(&text)
        .with_cli_context(|| "writing configuration")
}
