use std::borrow::Cow;

use tracing::debug;

use crate::toc::counter::HeadingCounter;
use crate::toc::patterns::{ATTRIBUTION, is_attribution, is_blank, is_toc_item, parse_heading};
use crate::toc::types::{Synthesis, TocEntry, TocOptions};

/// Progress through the first run of old TOC items
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OldToc {
    Searching,
    Open,
    Closed,
}

/// Progress through the attribution comment and the line after it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Attribution {
    Unseen,
    SkipNext,
    Removed,
}

/// Scan state for a single synthesis; dropped when the call returns.
struct Scan<'a> {
    options: &'a TocOptions,
    output: Vec<Cow<'a, str>>,
    entries: Vec<TocEntry>,
    counter: HeadingCounter,
    old_toc: OldToc,
    attribution: Attribution,
    /// Output index right after the first level-1 heading
    insert_at: Option<usize>,
}

/// Insert or refresh the table of contents in `content`.
///
/// Runs one pass over the lines: the first run of anchor-link list items
/// and the first attribution comment are dropped, headings of level 2-6
/// are numbered and tagged, and a new block is spliced in after the first
/// level-1 heading (or at the top). Documents without level 2-6 headings
/// come back with no block inserted.
pub fn synthesize(content: &str, options: &TocOptions) -> Synthesis {
    let line_break = options.line_ending.resolve(content);

    let mut scan = Scan::new(options);
    for line in content.split('\n') {
        scan.feed(line.strip_suffix('\r').unwrap_or(line));
    }

    scan.finish(line_break)
}

impl<'a> Scan<'a> {
    fn new(options: &'a TocOptions) -> Self {
        Self {
            options,
            output: Vec::new(),
            entries: Vec::new(),
            counter: HeadingCounter::new(),
            old_toc: OldToc::Searching,
            attribution: Attribution::Unseen,
            insert_at: None,
        }
    }

    fn feed(&mut self, line: &'a str) {
        if self.skip_old_toc(line) || self.skip_attribution(line) {
            return;
        }

        let Some(heading) = parse_heading(line) else {
            self.output.push(Cow::Borrowed(line));
            return;
        };

        if heading.level == 1 {
            self.output.push(Cow::Borrowed(line));
            if self.insert_at.is_none() {
                debug!(title = %heading.title, "toc goes after top-level heading");
                self.insert_at = Some(self.output.len());
            }
            return;
        }

        let identifier = self.counter.advance(heading.level);
        self.output.push(Cow::Owned(heading.with_anchor(&identifier)));
        self.entries.push(TocEntry { level: heading.level, title: heading.title, identifier });
    }

    /// Track the first run of TOC items; true when the line belongs to it.
    fn skip_old_toc(&mut self, line: &str) -> bool {
        match self.old_toc {
            OldToc::Searching if is_toc_item(line) => {
                self.old_toc = OldToc::Open;
                self.drop_separator_after_title();
                true
            }
            OldToc::Open if is_toc_item(line) => true,
            OldToc::Open => {
                debug!("dropping previously generated toc");
                self.old_toc = OldToc::Closed;
                // one blank separator goes with the table
                is_blank(line)
            }
            _ => false,
        }
    }

    /// The blank line between the title and a generated table belongs to the table.
    fn drop_separator_after_title(&mut self) {
        let after_title = self.insert_at.is_some_and(|at| self.output.len() == at + 1);
        if after_title && self.output.last().is_some_and(|l| is_blank(l)) {
            self.output.pop();
        }
    }

    fn skip_attribution(&mut self, line: &str) -> bool {
        match self.attribution {
            Attribution::SkipNext => {
                self.attribution = Attribution::Removed;
                // only a blank separator goes with the comment
                is_blank(line)
            }
            Attribution::Unseen if is_attribution(line) => {
                debug!("dropping previous attribution");
                self.attribution = Attribution::SkipNext;
                true
            }
            _ => false,
        }
    }

    fn finish(mut self, line_break: &str) -> Synthesis {
        let replaced_toc = self.old_toc != OldToc::Searching;
        let replaced_attribution = self.attribution != Attribution::Unseen;

        if !self.entries.is_empty() {
            let at = self.insert_at.unwrap_or(0);
            let block = self.block(at);
            debug!(entries = self.entries.len(), at, "inserting toc");
            self.output.splice(at..at, block);
        }

        Synthesis {
            content: self.output.join(line_break),
            entries: self.entries,
            replaced_toc,
            replaced_attribution,
        }
    }

    fn block(&self, at: usize) -> Vec<Cow<'a, str>> {
        let mut block = Vec::with_capacity(self.entries.len() + 4);

        if at > 0 {
            block.push(Cow::Borrowed(""));
        }
        block.extend(self.entries.iter().map(|e| Cow::Owned(e.render(self.options))));
        if !self.options.no_attribution {
            block.push(Cow::Borrowed(""));
            block.push(Cow::Borrowed(ATTRIBUTION));
        }
        // keep the block apart from the content that follows it
        let followed_by_blank = self.output.get(at).is_none_or(|l| is_blank(l));
        if at == 0 || !followed_by_blank {
            block.push(Cow::Borrowed(""));
        }

        block
    }
}
