use std::io::Write;

use anyhow::{Context, Result};
use tracing::{info, warn};

use crate::cli::TocArgs;
use crate::commands::extract::{
    BenchmarkPatterns, crop_titles, extract_toc_titles, load_document_text, prepare_rules,
    split_document,
};
use crate::model::{EntryKind, TocEntry};
use crate::util::write_json_pretty;


pub fn run(args: TocArgs) -> Result<()> {
    let raw = load_document_text(&args.input)?;
    let patterns = BenchmarkPatterns::new()?;
    let entries = classify_toc(&raw, &patterns)?;

    let rule_count = entries
        .iter()
        .filter(|entry| entry.kind == EntryKind::Rule)
        .count();
    info!(
        entries = entries.len(),
        rules = rule_count,
        chapters = entries.len() - rule_count,
        "classified table of contents"
    );

    match &args.output {
        Some(path) => {
            write_json_pretty(path, &entries)?;
            info!(path = %path.display(), "wrote table-of-contents listing");
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            serde_json::to_writer_pretty(&mut stdout, &entries)
                .context("failed to serialize table-of-contents listing")?;
            stdout
                .write_all(b"\n")
                .context("failed to write table-of-contents listing")?;
        }
    }

    Ok(())
}

/// Every table-of-contents entry that splits into id and name, in document order.
pub(crate) fn classify_toc(raw: &str, patterns: &BenchmarkPatterns) -> Result<Vec<TocEntry>> {
    let document = split_document(raw, patterns)?;
    let titles = crop_titles(&extract_toc_titles(&document.toc, patterns));
    let catalog = prepare_rules(&titles, patterns)?;

    if !catalog.title_errors.is_empty() {
        warn!(
            count = catalog.title_errors.len(),
            "skipped unclassifiable table-of-contents entries"
        );
    }

    Ok(catalog.entries)
}
