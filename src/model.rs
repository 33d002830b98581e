use std::collections::BTreeMap;

use serde::{Serialize, Serializer};

/// One ancestor chapter (or rule) of a rule in the dotted-ID hierarchy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Location {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rule {
    pub id: String,
    pub name: String,
    pub automated: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub location: Vec<Location>,
    #[serde(flatten)]
    pub sections: BTreeMap<SectionLabel, String>,
}

impl Rule {
    pub fn new(id: String, name: String, automated: bool) -> Self {
        Self {
            id,
            name,
            automated,
            location: Vec::new(),
            sections: BTreeMap::new(),
        }
    }
}

/// The closed set of labelled content blocks a rule body is split into.
/// Variant order is the output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SectionLabel {
    ProfileApplicability,
    Description,
    Rationale,
    Audit,
    Remediation,
    Impact,
    DefaultValue,
    References,
    CisControls,
}

impl SectionLabel {
    pub const ALL: [SectionLabel; 9] = [
        SectionLabel::ProfileApplicability,
        SectionLabel::Description,
        SectionLabel::Rationale,
        SectionLabel::Audit,
        SectionLabel::Remediation,
        SectionLabel::Impact,
        SectionLabel::DefaultValue,
        SectionLabel::References,
        SectionLabel::CisControls,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::ProfileApplicability => "Profile Applicability",
            Self::Description => "Description",
            Self::Rationale => "Rationale",
            Self::Audit => "Audit",
            Self::Remediation => "Remediation",
            Self::Impact => "Impact",
            Self::DefaultValue => "Default Value",
            Self::References => "References",
            Self::CisControls => "CIS Controls",
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            Self::ProfileApplicability => "profile_applicability",
            Self::Description => "description",
            Self::Rationale => "rationale",
            Self::Audit => "audit",
            Self::Remediation => "remediation",
            Self::Impact => "impact",
            Self::DefaultValue => "default_value",
            Self::References => "references",
            Self::CisControls => "cis_controls",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|label| label.key() == key)
    }
}

impl Serialize for SectionLabel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.key())
    }
}

/// Output key for a matched section label: "Default Value:\n" -> "default_value".
pub fn section_key_name(name: &str) -> String {
    name.trim_matches(|character: char| character.is_whitespace() || character == ':')
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<&str>>()
        .join("_")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Rule,
    Chapter,
}

#[derive(Debug, Clone, Serialize)]
pub struct TocEntry {
    pub id: String,
    pub name: String,
    pub kind: EntryKind,
    pub automated: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpanError {
    pub rule_id: String,
    pub start_heading: Option<String>,
    pub reason: String,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ExtractionCounts {
    pub toc_rule_count: usize,
    pub chapter_count: usize,
    pub body_heading_count: usize,
    pub title_error_count: usize,
    pub span_error_count: usize,
    pub rule_error_count: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct ExtractionReport {
    pub report_version: u32,
    pub generated_at: String,
    pub source_path: String,
    pub source_sha256: String,
    pub output_path: Option<String>,
    pub format: String,
    pub trim_sections: bool,
    pub counts: ExtractionCounts,
    pub missing_headings: Vec<String>,
    pub rule_errors: Vec<String>,
    pub span_errors: Vec<SpanError>,
    pub title_errors: Vec<String>,
}
