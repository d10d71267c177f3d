//! Implementation of the `listfmt render` command.

use tracing::{info, instrument};

use listfmt_core::{
    ListError, Notation, SAMPLE_ITEMS, dynamic,
    generic::{self, BulletStrategy, TaggedStrategy},
};

use crate::{
    cli::{Dispatch, RenderArgs},
    config::AppConfig,
    error::{CliResult, IntoCli},
    output::{OutputManager, RenderRecord},
};

pub fn execute(args: RenderArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let items: Vec<String> = if args.items.is_empty() {
        SAMPLE_ITEMS.iter().map(|s| s.to_string()).collect()
    } else {
        args.items
    };
    let notation = args.notation.unwrap_or(config.defaults.notation);
    let dispatch = args.dispatch.unwrap_or(config.defaults.dispatch);

    let record = render(dispatch, &notation, &items)?;
    info!(
        dispatch = %record.dispatch,
        notation = %record.notation,
        items = items.len(),
        "list rendered"
    );

    if output.is_json() {
        output.json(&record)
    } else {
        output
            .rendered(&record.text)
            .with_cli_context(|| "writing rendered list")
    }
}

/// Render `items` through the processor that `dispatch` names.
///
/// `notation` is parsed by the core, so unknown names come back as
/// [`ListError::UnsupportedNotation`] from either path.
#[instrument(skip(items))]
pub(crate) fn render(dispatch: Dispatch, notation: &str, items: &[String]) -> CliResult<RenderRecord> {
    let (notation, text) = match dispatch {
        Dispatch::Dynamic => {
            let mut processor = dynamic::TextProcessor::new();
            processor.set_notation_str(notation)?;
            processor.append_list(items)?;
            let notation = processor.notation().ok_or(ListError::NoStrategySelected)?;
            (notation, processor.into_text())
        }
        Dispatch::Static => {
            let notation: Notation = notation.parse()?;
            let text = match notation {
                Notation::Bullet => generic::render::<BulletStrategy, _>(items),
                Notation::Tagged => generic::render::<TaggedStrategy, _>(items),
            };
            (notation, text)
        }
    };

    Ok(RenderRecord {
        dispatch,
        notation,
        text,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CliError;

    fn items(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn dynamic_and_static_agree() {
        let sample = items(&SAMPLE_ITEMS);
        for name in ["bullet", "tagged", "markdown", "html"] {
            let a = render(Dispatch::Dynamic, name, &sample).unwrap();
            let b = render(Dispatch::Static, name, &sample).unwrap();
            assert_eq!(a.text, b.text, "notation {name}");
            assert_eq!(a.notation, b.notation);
        }
    }

    #[test]
    fn alias_resolves_to_canonical_notation() {
        let record = render(Dispatch::Static, "html", &items(&["x"])).unwrap();
        assert_eq!(record.notation, Notation::Tagged);
        assert_eq!(record.text, "<ul>\n<li>x</li>\n</ul>\n");
    }

    #[test]
    fn unknown_notation_is_a_user_error_on_both_paths() {
        for dispatch in [Dispatch::Dynamic, Dispatch::Static] {
            let err = render(dispatch, "latex", &items(&["x"])).unwrap_err();
            assert!(matches!(
                err,
                CliError::Core(ListError::UnsupportedNotation { ref notation }) if notation == "latex"
            ));
            assert_eq!(err.exit_code(), 2);
        }
    }

    #[test]
    fn empty_items_render_markers_only() {
        let record = render(Dispatch::Dynamic, "tagged", &[]).unwrap();
        assert_eq!(record.text, "<ul>\n</ul>\n");
        let record = render(Dispatch::Static, "bullet", &[]).unwrap();
        assert_eq!(record.text, "");
    }
}
