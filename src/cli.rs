//! CLI module - Command-line interface definitions and handlers

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::backends::scan::ScanOptions;
use crate::core::config::{ExtractConfig, RawOptions};
use crate::core::paths::resolve_dir;
use crate::core::render::{OutputFormat, RenderConfig};
use crate::flows::extract::{run_extract, ExtractRequest};

/// keywords - extract the most frequent words from all the text files in a directory.
#[derive(Parser, Debug)]
#[command(name = "keywords")]
#[command(
    author,
    version,
    about,
    long_about = r#"keywords walks a directory tree, reads every non-binary file, and reports
the most frequent words after stopword and length filtering.

Output formats:
- jsonl: one {"word","count"} object per line (default)
- json: the full report (limits, file tallies, ranked words)
- md: human-friendly Markdown table
- raw: "word count" lines

Examples:
    keywords extract docs
    keywords extract . --stopwords ./stopwords --minlen 4 --maxcount 20
    keywords --format md extract notes --case original --chain split
"#
)]
pub struct Cli {
    /// Output format (jsonl/json/md/raw).
    #[arg(
        long,
        global = true,
        default_value = "jsonl",
        value_name = "FORMAT",
        long_help = "Select the output format for the report.\n\n\
Supported values:\n\
- jsonl (default)\n\
- json\n\
- md (markdown)\n\
- raw\n\n\
Unknown values fall back to jsonl."
    )]
    pub format: String,

    /// Pretty-print JSON/JSONL output with indentation.
    #[arg(
        long,
        global = true,
        long_help = "Pretty-print JSON and JSONL output with indentation for human readability.\n\n\
Has no effect on md/raw formats."
    )]
    pub pretty: bool,

    /// Disable colored output (when applicable).
    #[arg(
        long,
        global = true,
        long_help = "Disable colored output. This is useful when piping to files or when your\n\
terminal does not support ANSI colors."
    )]
    pub no_color: bool,

    /// Quiet mode (errors only).
    #[arg(
        short,
        long,
        global = true,
        conflicts_with = "verbose",
        long_help = "Only log errors to stderr. The report is still printed to stdout."
    )]
    pub quiet: bool,

    /// Verbose mode (log every scanned file).
    #[arg(
        short,
        long,
        global = true,
        long_help = "Log every scanned file and the stopword summary to stderr.\n\n\
RUST_LOG overrides this setting (e.g. RUST_LOG=debug also lists skipped binary files)."
    )]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Extract the most frequent words from the text files in a directory.
    #[command(
        visible_alias = "x",
        long_about = "Scan TARGET_DIR recursively, skip binary files, normalize and tokenize the\n\
text of every other file, and rank the words by frequency.\n\n\
Hyphen and underscore runs glue words together (well-known -> well_known).\n\
Everything that is not a letter separates words.\n\n\
Invalid numeric or mode values fall back to their defaults with a warning.\n\n\
Examples:\n\
  keywords extract docs\n\
  keywords x . --stopwords stopwords --minlen 0 --maxcount 10\n\
  keywords extract src --output words.jsonl\n"
    )]
    Extract {
        /// Directory to scan.
        #[arg(value_name = "TARGET_DIR", default_value = ".")]
        target: PathBuf,

        /// Directory with .txt stopword lists (one word per line).
        #[arg(
            short,
            long,
            env = "KEYWORDS_STOPWORDS",
            value_name = "DIR",
            long_help = "Directory holding stopword lists. Every .txt file below it is read,\n\
one stopword per line. Stopwords use the same hyphen gluing and case policy\n\
as the scanned text.\n\n\
If omitted, no stopwords are removed."
        )]
        stopwords: Option<PathBuf>,

        /// Case policy (lower/original).
        #[arg(short, long, default_value = "lower", value_name = "MODE")]
        case: String,

        /// Glued compound handling (join/split).
        #[arg(
            long,
            default_value = "join",
            value_name = "MODE",
            long_help = "How glued compounds such as quick_brown are counted.\n\n\
Supported values:\n\
- join (default): one word, quick_brown\n\
- split: two words, quick and brown"
        )]
        chain: String,

        /// Minimum word length (0 = no limit).
        #[arg(
            short = 'n',
            long,
            default_value = "3",
            allow_hyphen_values = true,
            value_name = "N",
            long_help = "Minimum word length, counted in characters.\n\n\
0 disables the check. Invalid values fall back to 0."
        )]
        minlen: String,

        /// Maximum number of words to report.
        #[arg(
            short = 'm',
            long,
            default_value = "100",
            allow_hyphen_values = true,
            value_name = "N",
            long_help = "Maximum number of words to report. Must be a positive integer;\n\
invalid values fall back to 100."
        )]
        maxcount: String,

        /// Write the report to a file instead of stdout.
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,

        /// Skip hidden files and directories (dotfiles).
        #[arg(long)]
        skip_hidden: bool,

        /// Honor .gitignore and .ignore rules.
        #[arg(long)]
        respect_ignore: bool,

        /// Maximum directory depth from TARGET_DIR.
        #[arg(long, value_name = "N")]
        max_depth: Option<usize>,
    },
}

/// Initialize stderr logging from the global flags; RUST_LOG wins when set
pub fn init_logging(cli: &Cli) {
    let level = if cli.quiet {
        "error"
    } else if cli.verbose {
        "info"
    } else {
        "warn"
    };

    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .format_target(false)
        .try_init();
}

/// Run the CLI with parsed arguments
pub fn run(cli: Cli) -> Result<()> {
    let format: OutputFormat = cli.format.parse().unwrap_or_else(|e: String| {
        log::warn!("{}, using jsonl", e);
        OutputFormat::default()
    });
    let render_config = RenderConfig::with_pretty(format, cli.pretty);

    match cli.command {
        Commands::Extract {
            target,
            stopwords,
            case,
            chain,
            minlen,
            maxcount,
            output,
            skip_hidden,
            respect_ignore,
            max_depth,
        } => {
            let (config, warnings) = ExtractConfig::from_raw(&RawOptions {
                case,
                chain,
                min_len: minlen,
                max_count: maxcount,
            });
            for warning in &warnings {
                log::warn!("{}", warning);
            }

            let request = ExtractRequest {
                target: resolve_dir(&target),
                stopwords_dir: stopwords.as_deref().map(resolve_dir),
                config,
                scan: ScanOptions {
                    skip_hidden,
                    respect_ignore,
                    max_depth,
                },
            };

            run_extract(&request, output.as_deref(), render_config)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_defaults() {
        let cli = Cli::try_parse_from(["keywords", "extract"]).unwrap();
        assert_eq!(cli.format, "jsonl");
        let Commands::Extract {
            target,
            case,
            chain,
            minlen,
            maxcount,
            output,
            ..
        } = cli.command;
        assert_eq!(target, PathBuf::from("."));
        assert_eq!(case, "lower");
        assert_eq!(chain, "join");
        assert_eq!(minlen, "3");
        assert_eq!(maxcount, "100");
        assert!(output.is_none());
    }

    #[test]
    fn test_parse_alias_and_short_flags() {
        let cli = Cli::try_parse_from([
            "keywords", "x", "docs", "-n", "0", "-m", "5", "-c", "original", "-o", "out.txt",
        ])
        .unwrap();
        let Commands::Extract {
            target,
            case,
            minlen,
            maxcount,
            output,
            ..
        } = cli.command;
        assert_eq!(target, PathBuf::from("docs"));
        assert_eq!(case, "original");
        assert_eq!(minlen, "0");
        assert_eq!(maxcount, "5");
        assert_eq!(output, Some(PathBuf::from("out.txt")));
    }

    #[test]
    fn test_invalid_numbers_still_parse() {
        // Validation happens later and falls back to defaults
        let cli = Cli::try_parse_from(["keywords", "extract", "--minlen", "abc", "--maxcount", "-3"]);
        assert!(cli.is_ok());
    }

    #[test]
    fn test_quiet_conflicts_with_verbose() {
        assert!(Cli::try_parse_from(["keywords", "-q", "-v", "extract"]).is_err());
    }
}
