pub mod extract;
pub mod lines;

/// One display-ready report entry. Every field is always populated; absent
/// information resolves to a documented default, never to a missing value.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct ReportItem {
    pub title: String,
    pub source: String,
    pub relevance: String,
    pub link_text: String,
    pub link_url: String,
    pub body: String,
    pub key_points: String,
}

/// Three-pass pipeline: report blob → segments → classified lines → items.
///
/// Pure and deterministic: no I/O, no state, and no failure mode — malformed
/// input degrades per-field to defaults rather than erroring.
pub fn parse_report(content: &str) -> Vec<ReportItem> {
    lines::split_segments(content)
        .into_iter()
        .map(|segment| extract::extract_item(&lines::classify_lines(segment)))
        .collect()
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_report() {
        assert!(parse_report("").is_empty());
    }

    #[test]
    fn report_without_delimiters() {
        assert!(parse_report("# Fed Landscape Report\n\nNothing else.").is_empty());
    }

    #[test]
    fn one_item_per_segment_in_order() {
        let content = "intro\n---\n## A\n---\n## B\n---\n## C\n";
        let items = parse_report(content);
        let titles: Vec<&str> = items.iter().map(|i| i.title.as_str()).collect();
        assert_eq!(titles, vec!["A", "B", "C"]);
    }

    #[test]
    fn whitespace_segment_produces_no_item() {
        let content = "intro\n---\n## A\n---\n   \n\n---\n## B\n";
        let items = parse_report(content);
        assert_eq!(items.len(), 2);
    }

    #[test]
    fn parse_is_idempotent() {
        let content = std::fs::read_to_string("tests/fixtures/fed_report.md").unwrap();
        assert_eq!(parse_report(&content), parse_report(&content));
    }

    #[test]
    fn fed_report_fixture() {
        let content = std::fs::read_to_string("tests/fixtures/fed_report.md").unwrap();
        let items = parse_report(&content);
        assert_eq!(items.len(), 3);

        let first = &items[0];
        assert_eq!(first.title, "Commerce Department Opens Second CHIPS Act Funding Round");
        assert_eq!(first.source, "Reuters");
        assert_eq!(first.relevance, "92%");
        assert_eq!(first.link_text, "Read Full Article");
        assert!(first.link_url.starts_with("https://"));
        assert!(first.body.starts_with("The Department of Commerce"));
        assert_eq!(first.key_points.lines().count(), 3);
        assert!(first.key_points.lines().all(|l| l.starts_with("- ")));
    }

    #[test]
    fn sparse_report_fixture_degrades_per_field() {
        let content = std::fs::read_to_string("tests/fixtures/sparse_report.md").unwrap();
        let items = parse_report(&content);
        assert_eq!(items.len(), 3);

        // Entry with no title line, everything else intact.
        assert_eq!(items[0].title, "No Title");
        assert_eq!(items[0].source, "Associated Press");

        // Entry with no link and no key-points marker.
        assert_eq!(items[1].link_text, "Read Full Article");
        assert_eq!(items[1].link_url, "#");
        assert_eq!(items[1].key_points, "");
        assert!(!items[1].body.is_empty());

        // Bare heading: every other field at its default.
        assert_eq!(items[2].title, "Tech Hub Designations Expected This Fall");
        assert_eq!(items[2].source, "N/A");
        assert_eq!(items[2].relevance, "N/A");
    }
}
