use anyhow::{Context, Result};
use regex::Regex;

pub(crate) struct BenchmarkPatterns {
    pub(crate) page_marker: Regex,
    pub(crate) toc_entry_id: Regex,
    pub(crate) heading_id: Regex,
    pub(crate) heading_line_id: Regex,
    pub(crate) title_id: Regex,
    pub(crate) section_label: Regex,
    pub(crate) excess_line_breaks: Regex,
}

impl BenchmarkPatterns {
    pub(crate) fn new() -> Result<Self> {
        Ok(Self {
            page_marker: Regex::new(
                r"\d+\s?\|\s?(?:Page|P a g e|P age|P a ge|Pa g e|Pag e)",
            )
            .context("failed to compile page marker regex")?,
            toc_entry_id: Regex::new(r"^(?:\d+\.)*\d+\s")
                .context("failed to compile table-of-contents entry regex")?,
            heading_id: Regex::new(r"^(?:\d+\.)*\d+ ")
                .context("failed to compile body heading regex")?,
            heading_line_id: Regex::new(r"(?m)^(?:\d+\.)*\d+ ")
                .context("failed to compile heading line regex")?,
            title_id: Regex::new(r"^((?:\d{1,3}\.?)+)(.*)$")
                .context("failed to compile title id regex")?,
            section_label: Regex::new(
                r"(?:Profile Applicability|Description|Rationale|Audit|Remediation|Impact|Default\sValue|References|CIS\sControls):\s+",
            )
            .context("failed to compile section label regex")?,
            excess_line_breaks: Regex::new(r"\n(?:[ \t]*\n){2,}")
                .context("failed to compile line break regex")?,
        })
    }
}
