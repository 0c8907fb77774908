use crate::client::ArticleRecord;
use crate::parser::ReportItem;

/// Relevance confidence as the integer percentage shown to the reader.
pub fn relevance_percent(score: f64) -> i64 {
    (score * 100.0).round() as i64
}

/// Key points arrive as one newline-joined string; displaying them is an
/// enumerated conversion — split on newlines, one point per output line —
/// and nothing else. No markup is interpreted.
pub fn key_point_lines(key_points: &str) -> Vec<&str> {
    key_points
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect()
}

pub fn print_report(items: &[ReportItem]) {
    if items.is_empty() {
        return;
    }

    println!("Generated Intelligence Report");
    println!("{}", "=".repeat(60));

    for item in items {
        println!();
        println!("{}", item.title);
        println!("Source: {} | Relevance: {}", item.source, item.relevance);

        if !item.body.is_empty() {
            println!();
            println!("{}", item.body);
        }

        let points = key_point_lines(&item.key_points);
        if !points.is_empty() {
            println!();
            println!("Key Points:");
            for point in points {
                println!("  {}", point);
            }
        }

        println!();
        println!("{} -> {}", item.link_text, item.link_url);
        println!("{}", "-".repeat(60));
    }
}

pub fn print_articles(articles: &[ArticleRecord]) {
    if articles.is_empty() {
        return;
    }

    println!();
    println!("Source Articles (Ranked by Relevance)");
    println!("{}", "=".repeat(60));

    for (i, article) in articles.iter().enumerate() {
        println!();
        println!(
            "{:>2}. {} ({}% Relevant)",
            i + 1,
            article.title,
            relevance_percent(article.relevance_score)
        );
        println!("    Source: {} | Published: {}", article.source, article.date);
        if !article.snippet.is_empty() {
            println!("    {}", article.snippet);
        }
        println!("    {}", article.link);
    }
}

// ── Tests ──
