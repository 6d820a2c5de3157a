mod cmd;
mod logging;

use clap::{Args, Parser};
use mdtoc_core::toc::{LineEnding, ListItemSymbol};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "mdtoc",
    version,
    about = "Insert or update a clickable table of contents in a Markdown document, \
             built from its headings (levels 2-6)"
)]
struct Cli {
    /// Configuration file (default: ~/.config/mdtoc/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    #[command(flatten)]
    toc: TocArgs,
}

#[derive(Debug, Args)]
pub struct TocArgs {
    /// Markdown file to insert or update the table of contents in
    #[arg(default_value = "README.md")]
    pub file: PathBuf,

    /// Edit the file in place
    #[arg(short, long)]
    pub in_place: bool,

    /// Extension of a backup copy made before overwriting. Implies -i
    #[arg(short, long, value_name = "EXT")]
    pub suffix: Option<String>,

    /// Number of spaces per indentation level [default: 2]
    #[arg(short, long, value_name = "N")]
    pub tab_width: Option<usize>,

    /// Symbol in front of list items: -, * or + [default: -]
    #[arg(short, long, value_name = "SYMBOL")]
    pub list_item_symbol: Option<ListItemSymbol>,

    /// Do not add the "Table of contents is made with ..." attribution
    #[arg(short, long)]
    pub no_attribution: bool,

    /// Line breaks in the output: native, lf, crlf or preserve [default: native]
    #[arg(long, value_name = "STYLE")]
    pub line_ending: Option<LineEnding>,

    /// Fail when the document has no headings of level 2-6
    #[arg(long)]
    pub require_headings: bool,
}

fn main() {
    let cli = Cli::parse();
    cmd::toc::run(cli.config.as_deref(), cli.toc);
}
