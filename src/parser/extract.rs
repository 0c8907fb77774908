use super::lines::Line;
use super::ReportItem;

const DEFAULT_TITLE: &str = "No Title";
const DEFAULT_FIELD: &str = "N/A";
const DEFAULT_LINK_TEXT: &str = "Read Full Article";
const DEFAULT_LINK_URL: &str = "#";

/// Build one report item from a segment's classified lines.
///
/// Each metadata field is pulled independently: the first line of the
/// matching kind wins, and a missing field falls back to its default
/// without affecting the others. Unclassified text before the key-points
/// marker is the narrative body; unclassified text after it is the
/// key-points block.
pub fn extract_item(lines: &[Line]) -> ReportItem {
    let title = lines
        .iter()
        .find_map(|l| match l {
            Line::Title(t) => Some(t.clone()),
            _ => None,
        })
        .unwrap_or_else(|| DEFAULT_TITLE.to_string());

    let source = lines
        .iter()
        .find_map(|l| match l {
            Line::Source(s) => Some(s.clone()),
            _ => None,
        })
        .unwrap_or_else(|| DEFAULT_FIELD.to_string());

    let relevance = lines
        .iter()
        .find_map(|l| match l {
            Line::Relevance(r) => Some(r.clone()),
            _ => None,
        })
        .unwrap_or_else(|| DEFAULT_FIELD.to_string());

    let (link_text, link_url) = lines
        .iter()
        .find_map(|l| match l {
            Line::Link { text, url } => Some((text.clone(), url.clone())),
            _ => None,
        })
        .unwrap_or_else(|| (DEFAULT_LINK_TEXT.to_string(), DEFAULT_LINK_URL.to_string()));

    let marker = lines.iter().position(|l| matches!(l, Line::KeyPointsMarker));
    let (before, after) = match marker {
        Some(i) => (&lines[..i], &lines[i + 1..]),
        None => (lines, &[] as &[Line]),
    };

    let body = join_text(before).trim().to_string();
    let key_points = join_text(after);

    ReportItem {
        title,
        source,
        relevance,
        link_text,
        link_url,
        body,
        key_points,
    }
}

fn join_text(lines: &[Line]) -> String {
    lines
        .iter()
        .filter_map(|l| match l {
            Line::Text(t) => Some(t.as_str()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("\n")
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::lines::classify_lines;

    fn item(segment: &str) -> ReportItem {
        extract_item(&classify_lines(segment))
    }

    #[test]
    fn well_formed_segment() {
        let it = item("## Foo\n**Source:**Bar\n**Relevance:**High\n[Read here](http://x)");
        assert_eq!(it.title, "Foo");
        assert_eq!(it.source, "Bar");
        assert_eq!(it.relevance, "High");
        assert_eq!(it.link_text, "Read here");
        assert_eq!(it.link_url, "http://x");
    }

    #[test]
    fn missing_title_defaults_without_touching_other_fields() {
        let it = item("**Source:** AP\n**Relevance:** 90%\n[Read on](http://y)");
        assert_eq!(it.title, "No Title");
        assert_eq!(it.source, "AP");
        assert_eq!(it.relevance, "90%");
        assert_eq!(it.link_url, "http://y");
    }

    #[test]
    fn missing_link_defaults() {
        let it = item("## Foo\n**Source:** AP\n**Relevance:** High");
        assert_eq!(it.link_text, "Read Full Article");
        assert_eq!(it.link_url, "#");
    }

    #[test]
    fn broken_link_line_falls_back_to_defaults() {
        let it = item("## Foo\n[Read Full Article](http://unclosed");
        assert_eq!(it.link_text, "Read Full Article");
        assert_eq!(it.link_url, "#");
    }

    #[test]
    fn first_occurrence_wins() {
        let it = item("## First\n## Second\n**Source:** A\n**Source:** B");
        assert_eq!(it.title, "First");
        assert_eq!(it.source, "A");
    }

    #[test]
    fn body_is_text_between_metadata_and_marker() {
        let it = item(
            "## T\n**Source:** S\n**Relevance:** R\n\nPara one.\nPara two.\n\n**Key Points:**\n- a\n- b\n\n[Read Full Article](http://z)",
        );
        assert_eq!(it.body, "Para one.\nPara two.");
        assert_eq!(it.key_points, "- a\n- b");
    }

    #[test]
    fn no_marker_means_empty_key_points() {
        let it = item("## T\n**Source:** S\n**Relevance:** R\n\nJust a paragraph.");
        assert_eq!(it.key_points, "");
        assert_eq!(it.body, "Just a paragraph.");
    }

    #[test]
    fn trailing_link_never_leaks_into_key_points() {
        let it = item("## T\n**Key Points:**\n- only point\n[Read Full Article](http://z)");
        assert_eq!(it.key_points, "- only point");
        assert_eq!(it.link_url, "http://z");
    }

    #[test]
    fn relocated_metadata_does_not_corrupt_body() {
        // Relevance appears after the paragraph instead of in the header
        // block; the body must not absorb it.
        let it = item("## T\n**Source:** S\nBody line.\n**Relevance:** High\n**Key Points:**\n- p");
        assert_eq!(it.body, "Body line.");
        assert_eq!(it.relevance, "High");
    }

    #[test]
    fn every_field_populated_on_empty_line_set() {
        let it = extract_item(&[]);
        assert_eq!(it.title, "No Title");
        assert_eq!(it.source, "N/A");
        assert_eq!(it.relevance, "N/A");
        assert_eq!(it.link_text, "Read Full Article");
        assert_eq!(it.link_url, "#");
        assert_eq!(it.body, "");
        assert_eq!(it.key_points, "");
    }
}
