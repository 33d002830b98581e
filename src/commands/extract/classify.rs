use anyhow::{Result, anyhow};

use super::patterns::BenchmarkPatterns;

const RULE_SUFFIXES: [&str; 4] = ["(Automated)", "(Scored)", "(Manual)", "(Not Scored)"];
const AUTOMATED_SUFFIXES: [&str; 2] = ["(Automated)", "(Scored)"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ClassifiedTitle {
    pub(crate) id: String,
    pub(crate) name: String,
    pub(crate) is_rule: bool,
    pub(crate) automated: bool,
}

pub(crate) fn split_title(title: &str, patterns: &BenchmarkPatterns) -> Result<ClassifiedTitle> {
    let mut remainder = title.trim();
    let mut is_rule = false;
    let mut automated = false;

    if let Some(suffix) = RULE_SUFFIXES
        .iter()
        .find(|suffix| remainder.ends_with(*suffix))
    {
        is_rule = true;
        automated = AUTOMATED_SUFFIXES.contains(suffix);
        remainder = &remainder[..remainder.len() - suffix.len()];
    }

    let captures = patterns
        .title_id
        .captures(remainder)
        .ok_or_else(|| anyhow!("failed to split title into id and name: {title}"))?;

    let id = captures
        .get(1)
        .map(|value| collapse_whitespace(value.as_str()))
        .unwrap_or_default();
    let name = captures
        .get(2)
        .map(|value| collapse_whitespace(value.as_str()))
        .unwrap_or_default();

    Ok(ClassifiedTitle {
        id,
        name,
        is_rule,
        automated,
    })
}

pub(crate) fn collapse_whitespace(input: &str) -> String {
    input.split_whitespace().collect::<Vec<&str>>().join(" ")
}
