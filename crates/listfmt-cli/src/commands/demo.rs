//! Implementation of the `listfmt demo` command.
//!
//! Renders the sample list in every notation with both processors:
//! one runtime processor that is cleared and switched between notations,
//! and one statically bound processor per notation.

use tracing::debug;

use listfmt_core::{
    Notation, SAMPLE_ITEMS, dynamic,
    generic::{BulletProcessor, TaggedProcessor},
};

use crate::{
    cli::Dispatch,
    error::{CliResult, IntoCli},
    output::{OutputManager, RenderRecord},
};

pub fn execute(output: OutputManager) -> CliResult<()> {
    let records = run_demo()?;

    if output.is_json() {
        return output.json(&records);
    }

    for record in &records {
        output
            .header(&format!(
                "{} dispatch, {} notation",
                record.dispatch, record.notation
            ))
            .with_cli_context(|| "writing demo header")?;
        output
            .rendered(&record.text)
            .with_cli_context(|| "writing demo output")?;
        output.print("").with_cli_context(|| "writing demo output")?;
    }

    Ok(())
}

fn run_demo() -> CliResult<Vec<RenderRecord>> {
    let mut records = Vec::with_capacity(Notation::ALL.len() * 2);

    let mut processor = dynamic::TextProcessor::new();
    for notation in Notation::ALL {
        processor.clear();
        processor.set_notation(notation);
        processor.append_list(&SAMPLE_ITEMS)?;
        records.push(RenderRecord {
            dispatch: Dispatch::Dynamic,
            notation,
            text: processor.text().to_owned(),
        });
    }
    debug!("runtime processor done");

    let mut bullets = BulletProcessor::new();
    bullets.append_list(&SAMPLE_ITEMS);
    records.push(RenderRecord {
        dispatch: Dispatch::Static,
        notation: bullets.notation(),
        text: bullets.into_text(),
    });

    let mut tags = TaggedProcessor::new();
    tags.append_list(&SAMPLE_ITEMS);
    records.push(RenderRecord {
        dispatch: Dispatch::Static,
        notation: tags.notation(),
        text: tags.into_text(),
    });
    debug!("static processors done");

    Ok(records)
}
