use crate::TocArgs;
use crate::logging;
use mdtoc_core::config::loader::{ConfigLoader, default_config_path};
use mdtoc_core::config::types::ResolvedConfig;
use mdtoc_core::document::{ProcessOptions, process_file};
use std::io;
use std::path::Path;
use tracing::debug;

pub fn run(config: Option<&Path>, args: TocArgs) {
    let cfg = match ConfigLoader::load(config) {
        Ok(rc) => rc,
        Err(e) => {
            eprintln!("FAIL mdtoc");
            eprintln!("{e}");
            if config.is_none() {
                eprintln!("looked for: {}", default_config_path().display());
            }
            std::process::exit(1);
        }
    };

    logging::init(&cfg.logging);
    debug!(
        core = mdtoc_core::version(),
        config = ?cfg.source,
        file = %args.file.display(),
        "running mdtoc"
    );

    let options = merge_options(&cfg, &args);

    let stdout = io::stdout();
    let result = process_file(&args.file, &options, &mut stdout.lock());

    match result {
        Ok(outcome) => {
            debug!(entries = outcome.entries, written = outcome.written, "done");
            logging::shutdown();
        }
        Err(e) => {
            eprintln!("FAIL mdtoc");
            eprintln!("{e}");
            logging::shutdown();
            std::process::exit(1);
        }
    }
}

/// Flags take precedence over the config file.
fn merge_options(cfg: &ResolvedConfig, args: &TocArgs) -> ProcessOptions {
    let mut options = cfg.process_options();

    options.in_place |= args.in_place;
    options.require_headings |= args.require_headings;
    options.toc.no_attribution |= args.no_attribution;

    if let Some(ref suffix) = args.suffix {
        options.suffix = Some(suffix.clone());
        options.in_place = true;
    }
    if let Some(width) = args.tab_width {
        options.toc.tab_width = width;
    }
    if let Some(symbol) = args.list_item_symbol {
        options.toc.list_item_symbol = symbol;
    }
    if let Some(line_ending) = args.line_ending {
        options.toc.line_ending = line_ending;
    }

    options
}

#[cfg(test)]
mod tests {
    use super::*;
    use mdtoc_core::toc::{LineEnding, ListItemSymbol};
    use std::path::PathBuf;

    fn args() -> TocArgs {
        TocArgs {
            file: PathBuf::from("README.md"),
            in_place: false,
            suffix: None,
            tab_width: None,
            list_item_symbol: None,
            no_attribution: false,
            line_ending: None,
            require_headings: false,
        }
    }

    #[test]
    fn defaults_without_flags() {
        let options = merge_options(&ResolvedConfig::default(), &args());
        assert!(!options.writes_in_place());
        assert_eq!(options.toc.tab_width, 2);
        assert_eq!(options.toc.list_item_symbol, ListItemSymbol::Dash);
        assert!(!options.toc.no_attribution);
    }

    #[test]
    fn flags_override_config() {
        let mut cfg = ResolvedConfig::default();
        cfg.toc.tab_width = 8;
        cfg.toc.line_ending = LineEnding::CrLf;
        cfg.output.suffix = Some("bak".into());

        let options = merge_options(
            &cfg,
            &TocArgs {
                tab_width: Some(3),
                suffix: Some("orig".into()),
                list_item_symbol: Some(ListItemSymbol::Asterisk),
                ..args()
            },
        );

        assert_eq!(options.toc.tab_width, 3);
        assert_eq!(options.toc.line_ending, LineEnding::CrLf);
        assert_eq!(options.backup_suffix(), Some("orig"));
        assert_eq!(options.toc.list_item_symbol, ListItemSymbol::Asterisk);
        assert!(options.in_place);
    }
}
