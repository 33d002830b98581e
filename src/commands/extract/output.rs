use std::io::Write;

use anyhow::{Context, Result};

use crate::cli::OutputFormat;
use crate::model::{Rule, SectionLabel};

const LEADING_COLUMNS: [&str; 4] = ["ID", "Name", "Location", "Automated"];
const EMPTY_CELL: &str = " ";

pub(crate) fn write_rules<W: Write>(writer: W, rules: &[Rule], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Yaml => write_yaml(writer, rules),
        OutputFormat::Json => write_json(writer, rules),
        OutputFormat::Csv => write_csv(writer, rules),
    }
}

fn write_yaml<W: Write>(mut writer: W, rules: &[Rule]) -> Result<()> {
    writer
        .write_all(b"---\n")
        .context("failed to write yaml document marker")?;
    serde_yaml::to_writer(&mut writer, rules).context("failed to serialize rules as yaml")?;
    writer.flush().context("failed to flush yaml output")
}

fn write_json<W: Write>(mut writer: W, rules: &[Rule]) -> Result<()> {
    serde_json::to_writer_pretty(&mut writer, rules).context("failed to serialize rules as json")?;
    writer
        .write_all(b"\n")
        .context("failed to finalize json output")?;
    writer.flush().context("failed to flush json output")
}

fn write_csv<W: Write>(writer: W, rules: &[Rule]) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer
        .write_record(csv_header())
        .context("failed to write csv header")?;
    for rule in rules {
        csv_writer
            .write_record(csv_record(rule))
            .with_context(|| format!("failed to write csv record for rule {}", rule.id))?;
    }

    csv_writer.flush().context("failed to flush csv output")
}

pub(crate) fn csv_header() -> Vec<&'static str> {
    LEADING_COLUMNS
        .into_iter()
        .chain(SectionLabel::ALL.into_iter().map(SectionLabel::label))
        .collect()
}

pub(crate) fn csv_record(rule: &Rule) -> Vec<String> {
    let location = rule
        .location
        .iter()
        .map(|entry| format!("{} {}", entry.id, entry.name))
        .collect::<Vec<String>>()
        .join(", ");

    let mut record = vec![
        rule.id.clone(),
        rule.name.clone(),
        location,
        rule.automated.to_string(),
    ];

    record.extend(SectionLabel::ALL.into_iter().map(|label| {
        rule.sections
            .get(&label)
            .filter(|content| !content.is_empty())
            .cloned()
            .unwrap_or_else(|| EMPTY_CELL.to_string())
    }));

    record
}
