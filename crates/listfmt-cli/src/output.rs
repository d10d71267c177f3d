//! Output management and formatting.

use std::io::{self, IsTerminal};

use console::Term;
use owo_colors::OwoColorize;
use serde::Serialize;

use listfmt_core::Notation;

use crate::cli::{Dispatch, GlobalArgs, OutputFormat};
use crate::config::AppConfig;
use crate::error::CliResult;

/// One rendered list, as emitted in JSON mode.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderRecord {
    pub dispatch: Dispatch,
    pub notation: Notation,
    pub text: String,
}

/// Manages CLI output based on configuration.
pub struct OutputManager {
    resolved_format: OutputFormat,
    quiet: bool,
    no_color: bool,
    term: Term,
}

impl OutputManager {
    /// Build an `OutputManager` from parsed CLI flags and loaded config.
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        // Resolve Auto → Human (TTY) or Plain (piped/redirected).
        let resolved_format = if args.output_format == OutputFormat::Auto {
            if io::stdout().is_terminal() {
                OutputFormat::Human
            } else {
                OutputFormat::Plain
            }
        } else {
            args.output_format
        };

        Self {
            resolved_format,
            quiet: args.quiet,
            no_color: args.no_color
                || config.output.no_color
                || resolved_format != OutputFormat::Human,
            term: Term::stdout(),
        }
    }

    // ── Public write methods ───────────────────────────────────────────────

    /// Generic message; suppressed in quiet mode.
    pub fn print(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.term.write_line(msg)
    }

    /// Rendered list text, written verbatim.  Not suppressed in quiet mode.
    pub fn rendered(&self, text: &str) -> io::Result<()> {
        self.term.write_str(text)?;
        self.term.flush()
    }

    /// Pretty JSON on its own line.  Not suppressed in quiet mode.
    pub fn json<T: Serialize + ?Sized>(&self, value: &T) -> CliResult<()> {
        let text = serde_json::to_string_pretty(value)?;
        self.term.write_line(&text)?;
        Ok(())
    }

    /// Bold cyan header line.
    pub fn header(&self, text: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            text.to_owned()
        } else {
            text.cyan().bold().to_string()
        };
        self.term.write_line(&line)
    }

    /// Dimmed secondary line, e.g. an alias list.
    pub fn detail(&self, text: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            text.to_owned()
        } else {
            text.dimmed().to_string()
        };
        self.term.write_line(&line)
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    /// `true` if ANSI colours are enabled.
    pub fn supports_color(&self) -> bool {
        !self.no_color
    }

    /// `true` when the resolved format is JSON.
    pub fn is_json(&self) -> bool {
        self.resolved_format == OutputFormat::Json
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn make_manager(format: OutputFormat, no_color: bool) -> OutputManager {
        let args = GlobalArgs {
            verbose: 0,
            quiet: false,
            no_color,
            config: None,
            output_format: format,
        };
        OutputManager::new(&args, &AppConfig::default())
    }

    #[test]
    fn human_format_keeps_color_unless_disabled() {
        assert!(make_manager(OutputFormat::Human, false).supports_color());
        assert!(!make_manager(OutputFormat::Human, true).supports_color());
    }

    #[test]
    fn plain_and_json_never_color() {
        assert!(!make_manager(OutputFormat::Plain, false).supports_color());
        assert!(!make_manager(OutputFormat::Json, false).supports_color());
    }

    #[test]
    fn config_can_disable_color() {
        let args = GlobalArgs {
            verbose: 0,
            quiet: false,
            no_color: false,
            config: None,
            output_format: OutputFormat::Human,
        };
        let mut config = AppConfig::default();
        config.output.no_color = true;
        assert!(!OutputManager::new(&args, &config).supports_color());
    }

    #[test]
    fn json_format_is_reported() {
        let out = make_manager(OutputFormat::Json, true);
        assert!(out.is_json());
        assert!(!make_manager(OutputFormat::Plain, true).is_json());
    }

    #[test]
    fn record_serializes_lowercase_enums() {
        let record = RenderRecord {
            dispatch: Dispatch::Static,
            notation: Notation::Tagged,
            text: "<ul>\n</ul>\n".into(),
        };
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["dispatch"], "static");
        assert_eq!(value["notation"], "tagged");
        assert_eq!(value["text"], "<ul>\n</ul>\n");
    }
}
