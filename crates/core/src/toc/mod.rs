pub mod counter;
pub mod patterns;
pub mod synthesizer;
pub mod types;

use tracing::debug;

// Re-export primary API
pub use counter::HeadingCounter;
pub use patterns::ATTRIBUTION;
pub use types::{
    Heading, LineEnding, ListItemSymbol, Synthesis, TocEntry, TocError, TocOptions,
};

/// High-level API for table of contents synthesis
pub struct TocSynthesizer;

impl TocSynthesizer {
    /// Insert or refresh the table of contents of a Markdown document
    ///
    /// Pure and idempotent: feeding the output back with the same options
    /// returns it unchanged.
    pub fn synthesize(content: &str, options: &TocOptions) -> String {
        Self::synthesize_with_report(content, options).content
    }

    /// Like [`TocSynthesizer::synthesize`], also returning the entries built
    /// and whether earlier generated output was replaced
    pub fn synthesize_with_report(content: &str, options: &TocOptions) -> Synthesis {
        let synthesis = synthesizer::synthesize(content, options);
        debug!(
            entries = synthesis.entries.len(),
            replaced_toc = synthesis.replaced_toc,
            replaced_attribution = synthesis.replaced_attribution,
            "synthesized toc"
        );
        synthesis
    }
}
