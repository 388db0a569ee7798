//! Extract flow - keyword frequency over a whole directory tree
//!
//! scan -> read -> binary check -> normalize -> tokenize -> count, then a
//! single ranking pass once every file has been processed.

use anyhow::{Context, Result};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::backends::scan::{scan_files, ScanOptions};
use crate::core::config::ExtractConfig;
use crate::core::file_reader::read_text_file;
use crate::core::model::{KeywordsError, ScanReport, ScanStats};
use crate::core::paths::{display_relative, normalize_path};
use crate::core::render::{RenderConfig, Renderer};
use crate::words::counter::FrequencyCounter;
use crate::words::normalize::Normalizer;
use crate::words::rank::rank;
use crate::words::stopwords::StopwordSet;
use crate::words::tokenize::Tokenizer;

/// Everything needed to run one extraction
#[derive(Debug, Clone)]
pub struct ExtractRequest {
    /// Directory to scan
    pub target: PathBuf,

    /// Directory holding `.txt` stopword lists (None = no stopwords)
    pub stopwords_dir: Option<PathBuf>,

    pub config: ExtractConfig,

    pub scan: ScanOptions,
}

/// Counter plus file tallies owned by one worker
#[derive(Debug, Default)]
struct Tally {
    counter: FrequencyCounter,
    stats: ScanStats,
}

impl Tally {
    #[cfg_attr(not(feature = "parallel"), allow(dead_code))]
    fn merge(self, other: Tally) -> Tally {
        Tally {
            counter: self.counter.merge(other.counter),
            stats: self.stats.merge(other.stats),
        }
    }
}

/// Shared, read-only state for processing files
struct FileProcessor<'a> {
    root: &'a Path,
    normalizer: Normalizer,
    tokenizer: Tokenizer<'a>,
}

impl FileProcessor<'_> {
    fn process(&self, path: &Path, tally: &mut Tally) {
        let relative = display_relative(path, self.root);

        let file = match read_text_file(path) {
            Ok(file) => file,
            Err(e) => {
                log::warn!("{}", e);
                tally.stats.files_failed += 1;
                return;
            }
        };

        let Some(content) = file.content else {
            log::debug!("skip binary: {} ({} bytes)", relative, file.size);
            tally.stats.files_binary += 1;
            return;
        };

        if file.lossy_conversion {
            log::debug!("lossy utf-8 conversion: {}", relative);
        }
        log::info!("{}", relative);

        let normalized = self.normalizer.normalize(&content);
        let added = tally
            .counter
            .accumulate(self.tokenizer.tokenize(&normalized));

        tally.stats.files_scanned += 1;
        tally.stats.words_counted += added;
    }

    #[cfg(not(feature = "parallel"))]
    fn process_all(&self, files: &[PathBuf]) -> Tally {
        let mut tally = Tally::default();
        for path in files {
            self.process(path, &mut tally);
        }
        tally
    }

    #[cfg(feature = "parallel")]
    fn process_all(&self, files: &[PathBuf]) -> Tally {
        use rayon::prelude::*;

        files
            .par_iter()
            .fold(Tally::default, |mut tally, path| {
                self.process(path, &mut tally);
                tally
            })
            .reduce(Tally::default, Tally::merge)
    }
}

/// Run the extraction and return the ranked report
pub fn extract_keywords(request: &ExtractRequest) -> Result<ScanReport, KeywordsError> {
    let config = &request.config;
    let root = request.target.as_path();

    if !root.is_dir() {
        return Err(KeywordsError::InvalidDirectory(root.to_path_buf()));
    }

    let normalizer = Normalizer::new(config.case);
    let stopwords = match &request.stopwords_dir {
        Some(dir) => StopwordSet::load(dir, &normalizer)?,
        None => StopwordSet::empty(),
    };

    let files = scan_files(root, &request.scan)?;
    log::info!("scanning {} file(s) in {}", files.len(), root.display());

    let processor = FileProcessor {
        root,
        normalizer,
        tokenizer: Tokenizer::new(&stopwords, config.min_len, config.chain),
    };
    let tally = processor.process_all(&files);
    log::info!(
        "counted {} word(s), {} distinct",
        tally.counter.total(),
        tally.counter.len()
    );

    Ok(ScanReport {
        root: normalize_path(root),
        case: config.case,
        chain: config.chain,
        min_len: config.min_len,
        stats: tally.stats,
        ranked: rank(&tally.counter, config.max_count),
    })
}

/// Run the extract command
pub fn run_extract(
    request: &ExtractRequest,
    output: Option<&Path>,
    render_config: RenderConfig,
) -> Result<()> {
    let report = extract_keywords(request)?;
    let renderer = Renderer::with_config(render_config);

    match output {
        Some(path) => {
            let file = fs::File::create(path)
                .with_context(|| format!("cannot create output file {}", path.display()))?;
            renderer
                .render_to(&report, io::BufWriter::new(file))
                .with_context(|| format!("cannot write output file {}", path.display()))?;
            log::info!(
                "wrote top-{} keywords to {}",
                report.ranked.len(),
                path.display()
            );
        }
        None => {
            let stdout = io::stdout();
            let mut lock = stdout.lock();
            renderer.render_to(&report, &mut lock)?;
            lock.flush()?;
        }
    }

    Ok(())
}
