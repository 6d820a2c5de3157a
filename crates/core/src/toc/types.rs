use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use thiserror::Error;

/// Symbol placed in front of every TOC entry to form an unordered list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub enum ListItemSymbol {
    #[default]
    #[serde(rename = "-")]
    Dash,
    #[serde(rename = "*")]
    Asterisk,
    #[serde(rename = "+")]
    Plus,
}

impl ListItemSymbol {
    pub fn as_char(self) -> char {
        match self {
            Self::Dash => '-',
            Self::Asterisk => '*',
            Self::Plus => '+',
        }
    }
}

impl fmt::Display for ListItemSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl FromStr for ListItemSymbol {
    type Err = TocError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "-" => Ok(Self::Dash),
            "*" => Ok(Self::Asterisk),
            "+" => Ok(Self::Plus),
            other => Err(TocError::InvalidListItemSymbol(other.to_string())),
        }
    }
}

/// Line break convention used when joining the output lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineEnding {
    /// The convention of the platform the tool runs on
    #[default]
    Native,
    Lf,
    CrLf,
    /// Reuse the first line break found in the input (native when none)
    Preserve,
}

impl LineEnding {
    /// Resolve to the concrete separator for a given input
    pub fn resolve(self, content: &str) -> &'static str {
        match self {
            Self::Native => native_line_ending(),
            Self::Lf => "\n",
            Self::CrLf => "\r\n",
            Self::Preserve => match content.find('\n') {
                Some(pos) if content[..pos].ends_with('\r') => "\r\n",
                Some(_) => "\n",
                None => native_line_ending(),
            },
        }
    }
}

impl FromStr for LineEnding {
    type Err = TocError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "native" => Ok(Self::Native),
            "lf" => Ok(Self::Lf),
            "crlf" => Ok(Self::CrLf),
            "preserve" => Ok(Self::Preserve),
            _ => Err(TocError::InvalidLineEnding(s.to_string())),
        }
    }
}

fn native_line_ending() -> &'static str {
    if cfg!(windows) { "\r\n" } else { "\n" }
}

/// Options controlling how the table of contents is rendered
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TocOptions {
    /// Spaces per indentation level (default: 2)
    pub tab_width: usize,
    /// List marker for every entry (default: `-`)
    pub list_item_symbol: ListItemSymbol,
    /// Leave out the attribution comment (default: false)
    pub no_attribution: bool,
    pub line_ending: LineEnding,
}

impl Default for TocOptions {
    fn default() -> Self {
        Self {
            tab_width: 2,
            list_item_symbol: ListItemSymbol::default(),
            no_attribution: false,
            line_ending: LineEnding::default(),
        }
    }
}

impl TocOptions {
    pub fn tab_width(mut self, value: usize) -> Self {
        self.tab_width = value;
        self
    }

    pub fn list_item_symbol(mut self, value: ListItemSymbol) -> Self {
        self.list_item_symbol = value;
        self
    }

    pub fn no_attribution(mut self, value: bool) -> Self {
        self.no_attribution = value;
        self
    }

    pub fn line_ending(mut self, value: LineEnding) -> Self {
        self.line_ending = value;
        self
    }
}

/// An ATX heading recognised on a single line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Heading {
    /// Number of leading `#` characters (1-6)
    pub level: u8,
    /// Whitespace between the marker and the rest of the line
    pub spacing: String,
    /// Inline `<a ...></a>` tag already present before the title
    pub anchor: Option<String>,
    pub title: String,
}

impl Heading {
    /// Render the heading line carrying `<a id="identifier"></a>`,
    /// replacing any anchor tag it had before.
    pub fn with_anchor(&self, identifier: &str) -> String {
        format!(
            "{}{}<a id=\"{}\"></a>{}",
            "#".repeat(usize::from(self.level)),
            self.spacing,
            identifier,
            self.title
        )
    }
}

/// One line of the generated table of contents
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TocEntry {
    /// Level of the heading the entry points at (2-6)
    pub level: u8,
    pub title: String,
    /// Path-of-counters identifier, e.g. `0-1-2`
    pub identifier: String,
}

impl TocEntry {
    pub fn depth(&self) -> usize {
        usize::from(self.level.saturating_sub(2))
    }

    pub fn render(&self, options: &TocOptions) -> String {
        format!(
            "{}{} [{}](#{})",
            " ".repeat(options.tab_width * self.depth()),
            options.list_item_symbol,
            self.title,
            self.identifier
        )
    }
}

/// Result of a synthesis run
#[derive(Debug, Clone)]
pub struct Synthesis {
    /// The document with the table of contents inserted or refreshed
    pub content: String,
    /// Entries of the generated table, in document order
    pub entries: Vec<TocEntry>,
    /// A previously generated table was found and dropped
    pub replaced_toc: bool,
    /// A previous attribution comment was found and dropped
    pub replaced_attribution: bool,
}

impl Synthesis {
    pub fn has_toc(&self) -> bool {
        !self.entries.is_empty()
    }
}

#[derive(Debug, Error)]
pub enum TocError {
    #[error("invalid list item symbol '{0}' (expected one of '-', '*', '+')")]
    InvalidListItemSymbol(String),

    #[error("invalid line ending '{0}' (expected native, lf, crlf or preserve)")]
    InvalidLineEnding(String),
}
