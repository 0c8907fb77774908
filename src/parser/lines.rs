use std::sync::LazyLock;

use regex::Regex;

static INLINE_LINK_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\[(.*?)\]\((.*?)\)").unwrap());

const SEGMENT_DELIMITER: &str = "---";
const SOURCE_LABEL: &str = "**Source:**";
const RELEVANCE_LABEL: &str = "**Relevance:**";
const KEY_POINTS_MARKER: &str = "**Key Points:**";

/// One normalized report line, classified by its recognized prefix.
#[derive(Debug, Clone)]
pub enum Line {
    Title(String),
    Source(String),
    Relevance(String),
    Link { text: String, url: String },
    KeyPointsMarker,
    Text(String),
}

/// Split a report blob on the `---` delimiter. The piece before the first
/// delimiter is the report preamble and is always discarded, as are pieces
/// that are empty or whitespace-only.
pub fn split_segments(content: &str) -> Vec<&str> {
    content
        .split(SEGMENT_DELIMITER)
        .skip(1)
        .filter(|piece| !piece.trim().is_empty())
        .collect()
}

/// Normalize one segment (trim lines, drop blanks) and classify each
/// surviving line. Order is preserved.
pub fn classify_lines(segment: &str) -> Vec<Line> {
    segment
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(classify_line)
        .collect()
}

fn classify_line(line: &str) -> Line {
    if let Some(rest) = line.strip_prefix("## ") {
        return Line::Title(rest.to_string());
    }

    if line.starts_with(KEY_POINTS_MARKER) {
        return Line::KeyPointsMarker;
    }

    if line.starts_with("**Source:") {
        return Line::Source(strip_label(line, SOURCE_LABEL));
    }

    if line.starts_with("**Relevance:") {
        return Line::Relevance(strip_label(line, RELEVANCE_LABEL));
    }

    // Link lines are recognized by the "[Read" prefix; one that fails the
    // [text](url) pattern falls through to plain text.
    if line.starts_with("[Read") {
        if let Some(caps) = INLINE_LINK_RE.captures(line) {
            return Line::Link {
                text: caps[1].to_string(),
                url: caps[2].to_string(),
            };
        }
    }

    Line::Text(line.to_string())
}

/// Remove the first occurrence of the literal label token, keeping the rest
/// of the line intact. A malformed label (e.g. a missing closing `**`) is
/// left in place, matching the producer's loose grammar.
fn strip_label(line: &str, label: &str) -> String {
    line.replacen(label, "", 1).trim().to_string()
}

// ── Tests ──
