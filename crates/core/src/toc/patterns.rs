//! Line shapes recognised by the synthesizer.

use std::sync::LazyLock;

use regex::Regex;

use crate::toc::types::Heading;

/// Comment line marking generated output; removed together with a blank line after it.
pub const ATTRIBUTION: &str =
    "<!-- Table of contents is made with https://github.com/evgeniy-khist/markdown-toc -->";

static HEADING_RE: LazyLock<Regex> = LazyLock::new(|| {
    // Matches `## Title` and `## <a id="..."></a>Title`
    Regex::new(r"^(#{1,6})(\s+)(<a\s+.*></a>)?(.+)$").unwrap()
});

static TOC_ITEM_RE: LazyLock<Regex> = LazyLock::new(|| {
    // Matches `  - [Title](#0-1-2)`, also word-only ids from older tables
    Regex::new(r"^\s*[-*+]\s+\[.+\]\(#[\w-]+\)$").unwrap()
});

/// Parse a line as an ATX heading.
pub fn parse_heading(line: &str) -> Option<Heading> {
    let caps = HEADING_RE.captures(line)?;
    let marker = caps.get(1)?.as_str();

    Some(Heading {
        level: u8::try_from(marker.len()).ok()?,
        spacing: caps[2].to_string(),
        anchor: caps.get(3).map(|m| m.as_str().to_string()),
        title: caps[4].to_string(),
    })
}

/// Whether the line is a list item linking to an in-document anchor.
pub fn is_toc_item(line: &str) -> bool {
    TOC_ITEM_RE.is_match(line)
}

pub fn is_attribution(line: &str) -> bool {
    line == ATTRIBUTION
}

pub fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}
