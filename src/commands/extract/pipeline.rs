use anyhow::Result;
use tracing::{debug, info};

use crate::model::{Rule, SpanError};

use super::catalog::prepare_rules;
use super::convert::split_document;
use super::headings::{BodyHeading, extract_body_headings};
use super::patterns::BenchmarkPatterns;
use super::sanitize::FormatOptions;
use super::segment::populate_rules;
use super::toc::{crop_titles, extract_toc_titles};

#[derive(Debug, Default)]
pub(crate) struct CatalogExtraction {
    pub(crate) rules: Vec<Rule>,
    pub(crate) chapter_count: usize,
    pub(crate) body_heading_count: usize,
    pub(crate) missing_headings: Vec<String>,
    pub(crate) title_errors: Vec<String>,
    pub(crate) rule_errors: Vec<String>,
    pub(crate) span_errors: Vec<SpanError>,
}

pub(crate) fn extract_catalog(
    raw: &str,
    patterns: &BenchmarkPatterns,
    options: FormatOptions,
) -> Result<CatalogExtraction> {
    let document = split_document(raw, patterns)?;

    let titles = crop_titles(&extract_toc_titles(&document.toc, patterns));
    debug!(titles = titles.len(), "collected table-of-contents titles");

    let catalog = prepare_rules(&titles, patterns)?;
    info!(
        rules = catalog.rules.len(),
        chapters = catalog.chapter_count,
        total = catalog.rules.len() + catalog.chapter_count,
        "classified table of contents"
    );

    let headings = extract_body_headings(&document.body, patterns);
    let missing_headings = rules_without_heading(&catalog.rules, &headings);

    let mut rules = catalog.rules;
    let outcome = populate_rules(
        &mut rules,
        &headings,
        &catalog.id_to_name,
        &document.body,
        catalog.chapter_cleanup.as_ref(),
        options,
        patterns,
    );

    Ok(CatalogExtraction {
        rules,
        chapter_count: catalog.chapter_count,
        body_heading_count: headings.len(),
        missing_headings,
        title_errors: catalog.title_errors,
        rule_errors: outcome.rule_errors,
        span_errors: outcome.span_errors,
    })
}

fn rules_without_heading(rules: &[Rule], headings: &[BodyHeading]) -> Vec<String> {
    rules
        .iter()
        .filter(|rule| !headings.iter().any(|heading| heading.belongs_to(&rule.id)))
        .map(|rule| rule.id.clone())
        .collect()
}
