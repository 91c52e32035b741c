//! Technical hygiene: alt-text coverage, heading structure, link profile,
//! plus standalone detection of likely-broken links and oversized images.

use crate::text;
use crate::types::report::{
    CategoryResult, Impact, Issue, IssueKind, TechnicalIssue, TechnicalIssueKind,
};
use crate::vocab::{BROKEN_LINK_PATTERNS, LARGE_IMAGE_EXTENSIONS};

pub fn analyze(content: &str, title: &str) -> CategoryResult {
    if content.trim().is_empty() {
        return CategoryResult::error_only(
            "No content to analyze",
            "Add content to perform technical analysis",
        );
    }

    let mut result = CategoryResult::new();

    score_alt_text(&mut result, content);
    score_headings(&mut result, content, title);
    score_links(&mut result, content);

    result.clamp_score();
    result
}

fn score_alt_text(result: &mut CategoryResult, content: &str) {
    let images = text::images(content);
    let missing = images.iter().filter(|image| image.alt.is_none()).count();
    result.metric("image_count", images.len() as u64);
    result.metric("images_missing_alt", missing as u64);

    // No images means no alt coverage to reward; the category tops out on
    // headings and links alone.
    if images.is_empty() {
        return;
    }

    if missing == 0 {
        result.improvement("All images have alt text");
        result.score += 50.0;
    } else {
        result.issues.push(Issue::new(
            IssueKind::Warning,
            format!("{missing} image(s) missing alt text"),
            Impact::Medium,
            "Add descriptive alt text to every image",
        ));
        result.score += (50.0 - 10.0 * missing as f64).max(0.0);
    }
}

fn score_headings(result: &mut CategoryResult, content: &str, title: &str) {
    let h1_count = text::headings_of_level(content, 1).len();
    result.metric("h1_count", h1_count as u64);

    // The page title renders as the H1 in most themes, so a missing H1 tag
    // is only a problem when there is no title either.
    if h1_count == 0 && title.trim().is_empty() {
        result.issues.push(Issue::new(
            IssueKind::Error,
            "No H1 heading found",
            Impact::High,
            "Add an H1 heading or set a page title",
        ));
    } else if h1_count > 1 {
        result.issues.push(Issue::new(
            IssueKind::Warning,
            format!("Multiple H1 headings found ({h1_count})"),
            Impact::Medium,
            "Use a single H1 per page and demote the rest to H2",
        ));
        result.score += 20.0;
    } else {
        result.improvement("Good heading structure");
        result.score += 30.0;
    }
}

fn score_links(result: &mut CategoryResult, content: &str) {
    let hrefs = text::links(content);
    let external = hrefs
        .iter()
        .filter(|href| href.starts_with("http://") || href.starts_with("https://"))
        .count();
    let internal = hrefs.len() - external;
    result.metric("internal_links", internal as u64);
    result.metric("external_links", external as u64);

    if internal == 0 {
        result.issues.push(Issue::new(
            IssueKind::Warning,
            "No internal links found",
            Impact::Low,
            "Link to related pages on your site",
        ));
    } else {
        result.improvement(format!("{internal} internal link(s) found"));
        result.score += (5.0 * internal as f64).min(20.0);
    }

    if external > 0 {
        result.improvement(format!("{external} external link(s) found"));
        result.score += (2.0 * external as f64).min(10.0);
    }
}

/// Scans markup for links that are almost certainly broken in production
/// (development hosts, placeholder domains) and for image formats too heavy
/// to serve on the web.
pub fn detect_technical_issues(content: &str) -> Vec<TechnicalIssue> {
    let mut issues = Vec::new();

    for href in text::links(content) {
        let lower = href.to_ascii_lowercase();
        if let Some(pattern) = BROKEN_LINK_PATTERNS
            .iter()
            .find(|pattern| lower.contains(*pattern))
        {
            issues.push(TechnicalIssue {
                kind: TechnicalIssueKind::BrokenLink,
                severity: Impact::Medium,
                message: format!("Link points to a placeholder or development host: {href}"),
                detail: (*pattern).to_string(),
            });
        }
    }

    for image in text::images(content) {
        let lower = image.src.to_ascii_lowercase();
        // Containment, not a suffix check: a query string or fragment after
        // the extension still marks the format.
        if let Some(extension) = LARGE_IMAGE_EXTENSIONS
            .iter()
            .find(|extension| lower.contains(*extension))
        {
            issues.push(TechnicalIssue {
                kind: TechnicalIssueKind::LargeImage,
                severity: Impact::Low,
                message: format!("Image uses an uncompressed format: {}", image.src),
                detail: (*extension).to_string(),
            });
        }
    }

    issues
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::report::{Impact, IssueKind, TechnicalIssueKind};

    #[test]
    fn empty_content_yields_single_high_error() {
        let result = analyze("", "A title");
        assert_eq!(result.score, 0.0);
        assert_eq!(result.issues.len(), 1);
        assert_eq!(result.issues[0].kind, IssueKind::Error);
    }

    #[test]
    fn full_alt_coverage_scores_fifty() {
        let content = "<h1>One</h1><img src=\"a.png\" alt=\"first\"><img src=\"b.png\" alt=\"second\">";
        let result = analyze(content, "Title");
        assert!(result
            .improvements
            .iter()
            .any(|imp| imp.contains("All images have alt text")));
        assert!(result.score >= 50.0);
    }

    #[test]
    fn missing_alt_deducts_per_image() {
        let content = "<h1>One</h1><img src=\"a.png\"><img src=\"b.png\"><img src=\"c.png\">";
        let result = analyze(content, "Title");
        // 50 - 10 per missing image, plus 30 for heading structure.
        assert_eq!(result.score, 50.0);
        assert!(result
            .issues
            .iter()
            .any(|issue| issue.message == "3 image(s) missing alt text"));
    }

    #[test]
    fn missing_h1_with_title_passes() {
        let result = analyze("<p>Body text without headings.</p>", "A real title");
        assert!(!result
            .issues
            .iter()
            .any(|issue| issue.message.contains("H1")));
    }

    #[test]
    fn missing_h1_without_title_is_blocking() {
        let result = analyze("<p>Body text without headings.</p>", "");
        let error = result
            .issues
            .iter()
            .find(|issue| issue.message == "No H1 heading found")
            .expect("H1 error expected");
        assert_eq!(error.kind, IssueKind::Error);
        assert_eq!(error.impact, Impact::High);
    }

    #[test]
    fn multiple_h1_warns_medium() {
        let content = "<h1>First</h1><h1>Second</h1><p>Text.</p>";
        let result = analyze(content, "Title");
        assert!(result.issues.iter().any(|issue| {
            issue.impact == Impact::Medium && issue.message.contains("Multiple H1")
        }));
    }

    #[test]
    fn internal_link_credit_caps_at_twenty() {
        let links: String = (0..8)
            .map(|i| format!("<a href=\"/page{i}\">p</a>"))
            .collect();
        let content = format!("<h1>T</h1><p>{links}</p>");
        let result = analyze(&content, "Title");
        // 30 heading + 20 link cap; no images, so no alt credit.
        assert_eq!(result.score, 50.0);
    }

    #[test]
    fn image_less_content_earns_no_alt_credit() {
        let content = "<h1>T</h1><p>Text. <a href=\"/related\">related</a></p>";
        let result = analyze(content, "Title");
        // 30 heading + 5 for one internal link.
        assert_eq!(result.score, 35.0);
        assert!(!result
            .improvements
            .iter()
            .any(|imp| imp.contains("alt text")));
        assert_eq!(result.metrics["image_count"], 0);
    }

    #[test]
    fn detects_placeholder_links() {
        let content = "<a href=\"http://localhost:8080/draft\">draft</a>\
                       <a href=\"https://example.com/page\">demo</a>\
                       <a href=\"https://real-site.org/page\">ok</a>";
        let issues = detect_technical_issues(content);
        assert_eq!(issues.len(), 2);
        assert!(issues
            .iter()
            .all(|issue| issue.kind == TechnicalIssueKind::BrokenLink));
        assert!(issues
            .iter()
            .all(|issue| issue.severity == Impact::Medium));
    }

    #[test]
    fn detects_uncompressed_image_formats() {
        let content = "<img src=\"photo.BMP\" alt=\"x\"><img src=\"fine.webp\" alt=\"y\">";
        let issues = detect_technical_issues(content);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].kind, TechnicalIssueKind::LargeImage);
        assert_eq!(issues[0].severity, Impact::Low);
    }

    #[test]
    fn detects_uncompressed_format_behind_query_string() {
        let content = "<img src=\"photo.bmp?v=2\" alt=\"x\">";
        let issues = detect_technical_issues(content);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].kind, TechnicalIssueKind::LargeImage);
    }
}
