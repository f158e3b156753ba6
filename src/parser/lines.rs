//! Line classification: the first pass of the markdown parser. Each input
//! line becomes exactly one token; no state is carried between lines.

use std::sync::LazyLock;

use regex::Regex;

/// `### <glyph> Label (count)`. Only level-3 headings open a category; the
/// trailing count annotation is mandatory for the line to count as one.
static HEADING_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^###\s+(.+?)\s+\((\d+)\)").unwrap());

/// Leading decoration on a heading label: everything up to the first word
/// character (letter, digit, or underscore) is dropped. The class is spelled
/// out because `\w` in this regex engine covers combining marks, which would
/// leave emoji variation selectors behind.
static GLYPH_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\p{L}\p{N}_\s]+\s*").unwrap());

/// `- [Name](url) - description`. The whitespace after the closing paren is
/// required: bare `- [Name](url)` lines (tables of contents) never match.
static ITEM_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^-\s+\[(.+?)\]\((.+?)\)\s+-?\s*(.*?)$").unwrap());

/// Language tags ride in `title='…'` attributes of inline badge images.
static TITLE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"title='([^']+)'").unwrap());

static WEBSITE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*Website:\*\*\s+\[.+?\]\((.+?)\)").unwrap());

static STARS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"github\.com/stars/([^?]+)").unwrap());

static LICENSE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"github\.com/license/([^'">]+)"#).unwrap());

static SCREENSHOT_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<img src='([^']+)'").unwrap());

/// One classified input line.
#[derive(Debug, Clone, PartialEq)]
pub enum Line {
    /// Category heading: cleaned label plus its annotated entry count.
    Heading { label: String, count: usize },
    /// List item opening an entry.
    Item {
        name: String,
        url: String,
        description: String,
    },
    /// Annotation line under an open entry. The scans are independent, so a
    /// single line can carry several fields at once.
    Detail(Detail),
    Empty,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Detail {
    pub languages: Vec<String>,
    pub website: Option<String>,
    pub stars: Option<String>,
    pub license: Option<String>,
    pub screenshot: Option<String>,
}

/// Classify a single raw line. Precedence: blank, heading, item, detail.
/// Headings and items match against the unstripped line, so indented
/// variants fall through to `Detail`.
pub fn classify(line: &str) -> Line {
    if line.trim().is_empty() {
        return Line::Empty;
    }
    if let Some(caps) = HEADING_RE.captures(line) {
        let label = GLYPH_RE.replace(&caps[1], "").trim().to_string();
        let count = caps[2].parse().unwrap_or(0);
        return Line::Heading { label, count };
    }
    if let Some(caps) = ITEM_RE.captures(line) {
        return Line::Item {
            name: caps[1].trim().to_string(),
            url: caps[2].trim().to_string(),
            description: caps[3].trim().to_string(),
        };
    }
    Line::Detail(scan_detail(line))
}

pub fn classify_lines(text: &str) -> Vec<Line> {
    text.lines().map(classify).collect()
}

fn scan_detail(line: &str) -> Detail {
    let mut detail = Detail::default();
    if line.contains("**Languages:**") {
        detail.languages = TITLE_RE
            .captures_iter(line)
            .map(|c| c[1].to_string())
            .collect();
    }
    if let Some(caps) = WEBSITE_RE.captures(line) {
        detail.website = Some(caps[1].to_string());
    }
    if let Some(caps) = STARS_RE.captures(line) {
        detail.stars = Some(caps[1].to_string());
    }
    if let Some(caps) = LICENSE_RE.captures(line) {
        detail.license = Some(caps[1].to_string());
    }
    if line.trim_start().starts_with("<img src=") {
        if let Some(caps) = SCREENSHOT_RE.captures(line) {
            detail.screenshot = Some(caps[1].to_string());
        }
    }
    detail
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heading_with_glyph() {
        let line = classify("### 🎵 Audio (12)");
        assert_eq!(
            line,
            Line::Heading {
                label: "Audio".into(),
                count: 12
            }
        );
    }

    #[test]
    fn heading_without_glyph() {
        let line = classify("### Developer Tools (45)");
        assert_eq!(
            line,
            Line::Heading {
                label: "Developer Tools".into(),
                count: 45
            }
        );
    }

    #[test]
    fn heading_glyph_with_variation_selector() {
        // U+2699 U+FE0F: the invisible selector must go with the glyph.
        let line = classify("### ⚙️ Utilities (4)");
        assert_eq!(
            line,
            Line::Heading {
                label: "Utilities".into(),
                count: 4
            }
        );
    }

    #[test]
    fn heading_label_keeps_leading_underscore() {
        // Underscore counts as a word character: the glyph strip stops in
        // front of it instead of eating it.
        let line = classify("### 📦 _Extras (2)");
        assert_eq!(
            line,
            Line::Heading {
                label: "_Extras".into(),
                count: 2
            }
        );
        let line = classify("### _Extras (2)");
        assert_eq!(
            line,
            Line::Heading {
                label: "_Extras".into(),
                count: 2
            }
        );
    }

    #[test]
    fn heading_needs_count_annotation() {
        // Without the `(N)` suffix this is just an unrecognized line.
        assert!(matches!(classify("### Audio"), Line::Detail(_)));
        // Other heading levels never open a category: `##` is too short and
        // `####` puts a fourth `#` where the whitespace is required.
        assert!(matches!(classify("## Contents"), Line::Detail(_)));
        assert!(matches!(classify("#### Audio (3)"), Line::Detail(_)));
    }

    #[test]
    fn item_with_description() {
        let line = classify("- [Cog](https://github.com/losnoco/Cog) - Audio player.");
        assert_eq!(
            line,
            Line::Item {
                name: "Cog".into(),
                url: "https://github.com/losnoco/Cog".into(),
                description: "Audio player.".into(),
            }
        );
    }

    #[test]
    fn item_description_dash_is_optional() {
        let line = classify("- [Cog](https://x) Audio player.");
        assert_eq!(
            line,
            Line::Item {
                name: "Cog".into(),
                url: "https://x".into(),
                description: "Audio player.".into(),
            }
        );
    }

    #[test]
    fn bare_link_item_is_ignored() {
        // Table-of-contents lines carry no text after the closing paren and
        // must not open an entry.
        assert!(matches!(classify("- [Audio](#audio)"), Line::Detail(_)));
    }

    #[test]
    fn indented_item_is_not_an_item() {
        assert!(matches!(classify("  - [Cog](https://x) - desc"), Line::Detail(_)));
    }

    #[test]
    fn languages_line() {
        let line = classify(
            "**Languages:** <img src='icons/c-64.png' title='C' alt='c'> \
             <img src='icons/swift-64.png' title='Swift' alt='swift'>",
        );
        let Line::Detail(detail) = line else { panic!("expected detail") };
        assert_eq!(detail.languages, vec!["C", "Swift"]);
        assert_eq!(detail.screenshot, None);
    }

    #[test]
    fn title_attrs_ignored_without_marker() {
        let Line::Detail(detail) = classify("<b title='Go'>hi</b>") else {
            panic!("expected detail")
        };
        assert!(detail.languages.is_empty());
    }

    #[test]
    fn website_line() {
        let Line::Detail(detail) = classify("**Website:** [cogx.org](https://cogx.org/)") else {
            panic!("expected detail")
        };
        assert_eq!(detail.website.as_deref(), Some("https://cogx.org/"));
    }

    #[test]
    fn stars_capture_stops_at_query() {
        let Line::Detail(detail) =
            classify("**Stars:** <img src='https://github.com/stars/losnoco/Cog?label=s' alt='s'>")
        else {
            panic!("expected detail")
        };
        assert_eq!(detail.stars.as_deref(), Some("losnoco/Cog"));
        // Not at the line start, so the badge image is not a screenshot.
        assert_eq!(detail.screenshot, None);
    }

    #[test]
    fn license_capture_stops_at_quote() {
        let Line::Detail(detail) =
            classify("**License:** <img src='https://github.com/license/MIT' alt='l'>")
        else {
            panic!("expected detail")
        };
        assert_eq!(detail.license.as_deref(), Some("MIT"));
    }

    #[test]
    fn screenshot_line() {
        let Line::Detail(detail) =
            classify("<img src='https://raw.githubusercontent.com/x/y/shot.png' width='400'>")
        else {
            panic!("expected detail")
        };
        assert_eq!(
            detail.screenshot.as_deref(),
            Some("https://raw.githubusercontent.com/x/y/shot.png")
        );
    }

    #[test]
    fn one_line_can_set_several_fields() {
        let Line::Detail(detail) = classify(
            "**Stars:** <img src='https://github.com/stars/a/b?x=1' alt='s'> \
             **License:** <img src='https://github.com/license/MIT' alt='l'>",
        ) else {
            panic!("expected detail")
        };
        assert_eq!(detail.stars.as_deref(), Some("a/b"));
        assert_eq!(detail.license.as_deref(), Some("MIT"));
    }

    #[test]
    fn blank_lines() {
        assert_eq!(classify(""), Line::Empty);
        assert_eq!(classify("   \t"), Line::Empty);
    }
}
