use super::patterns::BenchmarkPatterns;

const APPENDIX_MARKER: &str = "Appendix:";

/// Entries start on a line with a dotted id and may wrap; each ends at the
/// line break after its page number.
pub(crate) fn extract_toc_titles(toc: &str, patterns: &BenchmarkPatterns) -> Vec<String> {
    let mut titles = Vec::new();
    let mut cursor = 0usize;

    for line_start in line_starts(toc) {
        if line_start < cursor {
            continue;
        }

        let Some(id_match) = patterns.toc_entry_id.find(&toc[line_start..]) else {
            continue;
        };
        let text_start = line_start + id_match.end();

        let Some(end) = find_page_number_end(toc, text_start) else {
            continue;
        };

        titles.push(toc[line_start..end].to_string());
        cursor = end;
    }

    // the final entry runs on into the appendix listing
    if let Some(last) = titles.last_mut() {
        if let Some(index) = last.find(APPENDIX_MARKER) {
            last.truncate(index);
        }
        if let Some(index) = last.rfind('\n') {
            last.truncate(index);
        }
    }

    titles
}

fn line_starts(text: &str) -> impl Iterator<Item = usize> + '_ {
    text.bytes()
        .enumerate()
        .filter(|(_, byte)| *byte == b'\n')
        .map(|(index, _)| index + 1)
        .filter(move |index| *index < text.len())
}

fn find_page_number_end(text: &str, from: usize) -> Option<usize> {
    let bytes = text.as_bytes();

    for (offset, byte) in bytes[from..].iter().enumerate() {
        if *byte != b'\n' {
            continue;
        }

        let position = from + offset;
        if position == from || !bytes[position - 1].is_ascii_digit() {
            continue;
        }

        match bytes.get(position + 1) {
            None => return Some(position),
            Some(next) if next.is_ascii_digit() || *next == b'\n' => return Some(position),
            Some(_) => {}
        }
    }

    match bytes.last() {
        Some(last) if bytes.len() > from && last.is_ascii_digit() => Some(bytes.len()),
        _ => None,
    }
}

pub(crate) fn crop_titles(titles: &[String]) -> Vec<String> {
    titles.iter().map(|title| crop_title(title)).collect()
}

pub(crate) fn crop_title(title: &str) -> String {
    let without_leader = strip_dot_leader(title);
    let single_line = without_leader.replace('\n', " ");
    strip_trailing_number(&single_line).to_string()
}

// the leader must not start right after a digit 1-9, so "5.1" survives
fn strip_dot_leader(title: &str) -> String {
    let (body, tail) = match title.strip_suffix('\n') {
        Some(body) => (body, "\n"),
        None => (title, ""),
    };
    let bytes = body.as_bytes();

    let digits_start = trailing_digits_start(bytes);
    if digits_start == bytes.len() {
        return title.to_string();
    }

    let dots_end = if digits_start > 0 && bytes[digits_start - 1] == b'.' {
        digits_start
    } else if digits_start > 1
        && bytes[digits_start - 1].is_ascii_whitespace()
        && bytes[digits_start - 2] == b'.'
    {
        digits_start - 1
    } else {
        return title.to_string();
    };

    let mut dots_start = dots_end;
    while dots_start > 0 && bytes[dots_start - 1] == b'.' {
        dots_start -= 1;
    }

    let leading_space = (dots_start > 0 && bytes[dots_start - 1].is_ascii_whitespace())
        .then(|| dots_start - 1);

    for start in leading_space.into_iter().chain(dots_start..dots_end) {
        let follows_digit = start > 0 && matches!(bytes[start - 1], b'1'..=b'9');
        if !follows_digit {
            return format!("{}{}", &body[..start], tail);
        }
    }

    title.to_string()
}

// digits glued to a word belong to the name ("Configure IPv6")
fn strip_trailing_number(title: &str) -> &str {
    let bytes = title.as_bytes();
    let digits_start = trailing_digits_start(bytes);
    if digits_start == bytes.len() || digits_start < 2 {
        return title;
    }

    if !bytes[digits_start - 1].is_ascii_whitespace() {
        return title;
    }

    &title[..digits_start - 1]
}

fn trailing_digits_start(bytes: &[u8]) -> usize {
    let mut start = bytes.len();
    while start > 0 && bytes[start - 1].is_ascii_digit() {
        start -= 1;
    }
    start
}
