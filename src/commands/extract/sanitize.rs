use regex::Regex;

use super::classify::collapse_whitespace;
use super::patterns::BenchmarkPatterns;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct FormatOptions {
    pub(crate) trim_breaks: bool,
}

pub(crate) fn sanitize_section(
    content: &str,
    chapter_cleanup: Option<&Regex>,
    options: FormatOptions,
    patterns: &BenchmarkPatterns,
) -> String {
    let printable = content
        .chars()
        .filter(|character| {
            character.is_ascii() && (!character.is_ascii_control() || matches!(character, '\n' | '\t'))
        })
        .collect::<String>();

    let mut cleaned = patterns
        .excess_line_breaks
        .replace_all(printable.trim(), "\n\n")
        .into_owned();

    // leaked chapters are only recognised at a line start
    if let Some(cleanup) = chapter_cleanup {
        cleaned = cleanup.replace_all(&cleaned, "").into_owned();
    }

    if options.trim_breaks {
        cleaned = collapse_whitespace(&cleaned);
    }

    cleaned.trim().to_string()
}
