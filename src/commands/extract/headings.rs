use super::patterns::BenchmarkPatterns;

const HEADING_MAX_LINES: usize = 4;
const STATUS_MARKERS: [&str; 4] = ["(Automated)", "Manual)", "Scored)", "Not Scored)"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct BodyHeading {
    pub(crate) text: String,
    pub(crate) start: usize,
    pub(crate) end: usize,
}

impl BodyHeading {
    pub(crate) fn belongs_to(&self, rule_id: &str) -> bool {
        self.text
            .strip_prefix(rule_id)
            .is_some_and(|rest| rest.starts_with(' '))
    }
}

/// A heading follows a blank line and ends within four lines on a status
/// marker that closes its line. A following line that starts with a dot is a
/// dot-leader artifact. The furthest qualifying line wins.
pub(crate) fn extract_body_headings(body: &str, patterns: &BenchmarkPatterns) -> Vec<BodyHeading> {
    let mut headings = Vec::new();
    let mut cursor = 0usize;

    for start in paragraph_starts(body) {
        if start < cursor {
            continue;
        }

        let Some(id_match) = patterns.heading_id.find(&body[start..]) else {
            continue;
        };

        let Some(end) = find_status_marker_end(body, start, start + id_match.end()) else {
            continue;
        };

        // a parent chapter directly above the rule can be swept into the match
        let first_id = id_match.as_str().trim_end();
        let child_prefix = format!("{first_id}.");
        let heading_start = patterns
            .heading_line_id
            .find_iter(&body[start..end])
            .skip(1)
            .find(|found| found.as_str().starts_with(&child_prefix))
            .map(|found| start + found.start())
            .unwrap_or(start);

        headings.push(BodyHeading {
            text: body[heading_start..end].to_string(),
            start: heading_start,
            end,
        });
        cursor = end;
    }

    headings
}

fn paragraph_starts(text: &str) -> impl Iterator<Item = usize> + '_ {
    let bytes = text.as_bytes();
    (2..bytes.len()).filter(move |index| bytes[index - 2] == b'\n' && bytes[index - 1] == b'\n')
}

fn find_status_marker_end(body: &str, start: usize, text_start: usize) -> Option<usize> {
    let bytes = body.as_bytes();

    let mut lines = Vec::<(usize, usize)>::with_capacity(HEADING_MAX_LINES);
    let mut line_start = start;
    while lines.len() < HEADING_MAX_LINES {
        let line_end = body[line_start..]
            .find('\n')
            .map(|offset| line_start + offset)
            .unwrap_or(body.len());
        lines.push((line_start, line_end));
        if line_end >= body.len() {
            break;
        }
        line_start = line_end + 1;
    }

    for (index, (line_start, line_end)) in lines.into_iter().enumerate().rev() {
        if bytes.get(line_end) != Some(&b'\n') || bytes.get(line_end + 1) == Some(&b'.') {
            continue;
        }

        let segment_start = if index == 0 { text_start } else { line_start };
        let segment = &body[segment_start.min(line_end)..line_end];
        if STATUS_MARKERS.iter().any(|marker| segment.ends_with(marker)) {
            return Some(line_end);
        }
    }

    None
}
