use std::collections::{HashMap, HashSet};

use anyhow::{Context, Result};
use regex::Regex;
use tracing::warn;

use crate::model::{EntryKind, Rule, TocEntry};

use super::classify::split_title;
use super::patterns::BenchmarkPatterns;

#[derive(Debug, Default)]
pub(crate) struct RuleCatalog {
    pub(crate) rules: Vec<Rule>,
    pub(crate) id_to_name: HashMap<String, String>,
    pub(crate) chapter_cleanup: Option<Regex>,
    pub(crate) chapter_count: usize,
    pub(crate) entries: Vec<TocEntry>,
    pub(crate) title_errors: Vec<String>,
}

pub(crate) fn prepare_rules(titles: &[String], patterns: &BenchmarkPatterns) -> Result<RuleCatalog> {
    let mut catalog = RuleCatalog::default();
    let mut chapter_alternatives = Vec::<String>::new();
    let mut seen_rule_ids = HashSet::<String>::new();

    for title in titles {
        let classified = match split_title(title, patterns) {
            Ok(classified) => classified,
            Err(error) => {
                warn!(error = %error, "skipping unclassifiable table-of-contents entry");
                catalog.title_errors.push(title.clone());
                continue;
            }
        };

        catalog
            .id_to_name
            .entry(classified.id.clone())
            .or_insert_with(|| classified.name.clone());

        catalog.entries.push(TocEntry {
            id: classified.id.clone(),
            name: classified.name.clone(),
            kind: if classified.is_rule {
                EntryKind::Rule
            } else {
                EntryKind::Chapter
            },
            automated: classified.automated,
        });

        if classified.is_rule {
            if !seen_rule_ids.insert(classified.id.clone()) {
                warn!(rule_id = %classified.id, "duplicate rule id in table of contents, keeping the first");
                continue;
            }
            catalog.rules.push(Rule::new(
                classified.id,
                classified.name,
                classified.automated,
            ));
        } else {
            catalog.chapter_count += 1;
            if let Some(pattern) = chapter_heading_pattern(&classified.id, &classified.name) {
                chapter_alternatives.push(pattern);
            }
        }
    }

    if !chapter_alternatives.is_empty() {
        let pattern = format!(r"(?ms)^(?:{}).*", chapter_alternatives.join("|"));
        let regex = Regex::new(&pattern).context("failed to compile chapter cleanup regex")?;
        catalog.chapter_cleanup = Some(regex);
    }

    Ok(catalog)
}

// a chapter without a name would match any stray number
fn chapter_heading_pattern(id: &str, name: &str) -> Option<String> {
    if id.is_empty() || name.trim().is_empty() {
        return None;
    }

    let words = std::iter::once(id)
        .chain(name.split_whitespace())
        .map(regex::escape)
        .collect::<Vec<String>>();

    Some(words.join(r"\s+"))
}
