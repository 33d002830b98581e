use std::collections::HashMap;

use regex::Regex;
use tracing::debug;

use crate::model::{Rule, SectionLabel, SpanError, section_key_name};

use super::headings::BodyHeading;
use super::location::rule_location;
use super::patterns::BenchmarkPatterns;
use super::sanitize::{FormatOptions, sanitize_section};

const APPENDIX_MARKER: &str = "Appendix:";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct NamedValue<'a> {
    pub(crate) name: &'a str,
    pub(crate) value: &'a str,
}

#[derive(Debug, Default)]
pub(crate) struct SegmentationOutcome {
    pub(crate) rule_errors: Vec<String>,
    pub(crate) span_errors: Vec<SpanError>,
}

pub(crate) fn find_named_values<'a>(span: &'a str, labels: &Regex) -> Vec<NamedValue<'a>> {
    let hits = labels.find_iter(span).collect::<Vec<_>>();

    hits.iter()
        .enumerate()
        .map(|(index, hit)| {
            let value_end = hits
                .get(index + 1)
                .map(|next| next.start())
                .unwrap_or(span.len());
            NamedValue {
                name: hit.as_str(),
                value: &span[hit.end()..value_end],
            }
        })
        .collect()
}

pub(crate) fn populate_rules(
    rules: &mut [Rule],
    headings: &[BodyHeading],
    id_to_name: &HashMap<String, String>,
    body: &str,
    chapter_cleanup: Option<&Regex>,
    options: FormatOptions,
    patterns: &BenchmarkPatterns,
) -> SegmentationOutcome {
    let mut outcome = SegmentationOutcome::default();
    let next_ids = rules
        .iter()
        .skip(1)
        .map(|rule| Some(rule.id.clone()))
        .chain(std::iter::once(None))
        .collect::<Vec<Option<String>>>();

    for (rule, next_id) in rules.iter_mut().zip(next_ids) {
        rule.location = rule_location(id_to_name, &rule.id);

        let span = match locate_span(&rule.id, next_id.as_deref(), headings, body) {
            Ok(span) => span,
            Err(error) => {
                debug!(rule_id = %rule.id, reason = %error.reason, "rule span not found");
                outcome.span_errors.push(error);
                continue;
            }
        };

        let sections = find_named_values(span, &patterns.section_label);
        if sections.is_empty() {
            outcome.rule_errors.push(rule.id.clone());
            continue;
        }

        for section in sections {
            let Some(label) = SectionLabel::from_key(&section_key_name(section.name)) else {
                continue;
            };
            let content = sanitize_section(section.value, chapter_cleanup, options, patterns);
            rule.sections.insert(label, content);
        }
    }

    outcome
}

// the final rule runs to "Appendix:"; others stop at the next rule's heading,
// else at whichever heading comes next
fn locate_span<'a>(
    rule_id: &str,
    next_rule_id: Option<&str>,
    headings: &[BodyHeading],
    body: &'a str,
) -> Result<&'a str, SpanError> {
    let Some(current) = headings.iter().find(|heading| heading.belongs_to(rule_id)) else {
        return Err(SpanError {
            rule_id: rule_id.to_string(),
            start_heading: None,
            reason: "no body heading matches the rule id".to_string(),
        });
    };

    let span_start = (current.end + 1).min(body.len());

    let span_end = match next_rule_id {
        None => body[span_start..]
            .find(APPENDIX_MARKER)
            .map(|offset| span_start + offset)
            .unwrap_or(body.len()),
        Some(next_id) => {
            let following = headings
                .iter()
                .find(|heading| heading.start >= span_start && heading.belongs_to(next_id))
                .or_else(|| headings.iter().find(|heading| heading.start >= span_start));

            match following {
                Some(heading) => heading.start,
                None => {
                    return Err(SpanError {
                        rule_id: rule_id.to_string(),
                        start_heading: Some(current.text.clone()),
                        reason: format!(
                            "no heading follows the rule heading (next rule {next_id})"
                        ),
                    });
                }
            }
        }
    };

    Ok(&body[span_start..span_end])
}
