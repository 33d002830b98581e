use std::cmp::Ordering;
use std::time::Instant;

use anyhow::Result;
use tracing::{info, warn};

use crate::cli::ExtractArgs;
use crate::model::{ExtractionCounts, ExtractionReport};
use crate::util::{
    create_output_file, default_output_path, now_utc_string, sha256_file, write_json_pretty,
};

use super::convert::load_document_text;
use super::output::write_rules;
use super::patterns::BenchmarkPatterns;
use super::pipeline::{CatalogExtraction, extract_catalog};
use super::sanitize::FormatOptions;

const REPORT_VERSION: u32 = 1;

pub fn run(args: ExtractArgs) -> Result<()> {
    let started = Instant::now();
    let format = args.effective_format();
    let output_path = args
        .output
        .clone()
        .unwrap_or_else(|| default_output_path(&args.input, format.extension()));

    info!(
        input = %args.input.display(),
        format = format.as_str(),
        trim_sections = args.trim_sections,
        "starting extraction"
    );

    let raw = load_document_text(&args.input)?;
    let patterns = BenchmarkPatterns::new()?;
    let options = FormatOptions {
        trim_breaks: args.trim_sections,
    };

    let extraction = extract_catalog(&raw, &patterns, options)?;
    log_diagnostics(&extraction, args.details);

    if args.dry_run {
        info!(rules = extraction.rules.len(), "dry-run complete, no output written");
    } else {
        let writer = create_output_file(&output_path)?;
        write_rules(writer, &extraction.rules, format)?;
        info!(path = %output_path.display(), rules = extraction.rules.len(), "wrote rule catalogue");
    }

    if let Some(report_path) = &args.report_path {
        let report = ExtractionReport {
            report_version: REPORT_VERSION,
            generated_at: now_utc_string(),
            source_path: args.input.display().to_string(),
            source_sha256: sha256_file(&args.input)?,
            output_path: (!args.dry_run).then(|| output_path.display().to_string()),
            format: format.as_str().to_string(),
            trim_sections: args.trim_sections,
            counts: extraction_counts(&extraction),
            missing_headings: extraction.missing_headings.clone(),
            rule_errors: extraction.rule_errors.clone(),
            span_errors: extraction.span_errors.clone(),
            title_errors: extraction.title_errors.clone(),
        };
        write_json_pretty(report_path, &report)?;
        info!(path = %report_path.display(), "wrote extraction report");
    }

    info!(
        elapsed_ms = started.elapsed().as_millis() as u64,
        "extraction completed"
    );

    Ok(())
}

fn extraction_counts(extraction: &CatalogExtraction) -> ExtractionCounts {
    ExtractionCounts {
        toc_rule_count: extraction.rules.len(),
        chapter_count: extraction.chapter_count,
        body_heading_count: extraction.body_heading_count,
        title_error_count: extraction.title_errors.len(),
        span_error_count: extraction.span_errors.len(),
        rule_error_count: extraction.rule_errors.len(),
    }
}

fn log_diagnostics(extraction: &CatalogExtraction, details: bool) {
    let rule_count = extraction.rules.len();
    let heading_count = extraction.body_heading_count;

    match heading_count.cmp(&rule_count) {
        Ordering::Equal => info!(
            headings = heading_count,
            "body heading count matches the table of contents"
        ),
        Ordering::Greater => warn!(
            headings = heading_count,
            rules = rule_count,
            surplus = heading_count - rule_count,
            "found more body headings than table-of-contents rules, verify rule contents"
        ),
        Ordering::Less => warn!(
            headings = heading_count,
            rules = rule_count,
            missing = rule_count - heading_count,
            "found fewer body headings than table-of-contents rules, output will be incomplete"
        ),
    }

    if !extraction.title_errors.is_empty() {
        warn!(
            count = extraction.title_errors.len(),
            "table-of-contents entries could not be classified"
        );
    }

    info!(
        span_errors = extraction.span_errors.len(),
        rule_errors = extraction.rule_errors.len(),
        "section identification finished"
    );

    if !details {
        return;
    }

    if !extraction.missing_headings.is_empty() {
        warn!(
            rule_ids = %extraction.missing_headings.join(", "),
            "no body heading found for rules"
        );
    }
    if !extraction.rule_errors.is_empty() {
        warn!(
            rule_ids = %extraction.rule_errors.join(", "),
            "no sections identified for rules"
        );
    }
    for error in &extraction.span_errors {
        warn!(
            rule_id = %error.rule_id,
            heading = %error.start_heading.as_deref().unwrap_or("-"),
            reason = %error.reason,
            "no content located between rule headings"
        );
    }
}
