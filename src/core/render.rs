//! Renderer module
//!
//! Renders a ScanReport to different output formats: jsonl, json, md, raw

use crate::core::model::ScanReport;
use std::io::Write;

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Jsonl,
    Json,
    Markdown,
    Raw,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "jsonl" => Ok(OutputFormat::Jsonl),
            "json" => Ok(OutputFormat::Json),
            "md" | "markdown" => Ok(OutputFormat::Markdown),
            "raw" => Ok(OutputFormat::Raw),
            _ => Err(format!("Unknown format: {}", s)),
        }
    }
}

/// Render configuration combining format and options
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderConfig {
    pub format: OutputFormat,
    pub pretty: bool,
}

impl RenderConfig {
    /// Create a new render config with default options
    #[cfg(test)]
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            pretty: false,
        }
    }

    /// Create a new render config with pretty option
    pub fn with_pretty(format: OutputFormat, pretty: bool) -> Self {
        Self { format, pretty }
    }
}

/// Renderer for scan reports
pub struct Renderer {
    config: RenderConfig,
}

impl Renderer {
    #[cfg(test)]
    pub fn new(format: OutputFormat) -> Self {
        Self {
            config: RenderConfig::new(format),
        }
    }

    /// Create a new renderer with render config
    pub fn with_config(config: RenderConfig) -> Self {
        Self { config }
    }

    /// Render a report to a string
    pub fn render(&self, report: &ScanReport) -> String {
        match self.config.format {
            OutputFormat::Jsonl => self.render_jsonl(report),
            OutputFormat::Json => self.render_json(report),
            OutputFormat::Markdown => self.render_markdown(report),
            OutputFormat::Raw => self.render_raw(report),
        }
    }

    /// Render to a writer, ending with a newline
    pub fn render_to<W: Write>(&self, report: &ScanReport, mut writer: W) -> std::io::Result<()> {
        let output = self.render(report);
        writer.write_all(output.as_bytes())?;
        if !output.is_empty() && !output.ends_with('\n') {
            writer.write_all(b"\n")?;
        }
        writer.flush()
    }

    /// Render as JSON Lines (one ranked word per line)
    fn render_jsonl(&self, report: &ScanReport) -> String {
        report
            .ranked
            .entries
            .iter()
            .filter_map(|entry| {
                if self.config.pretty {
                    serde_json::to_string_pretty(entry).ok()
                } else {
                    serde_json::to_string(entry).ok()
                }
            })
            .collect::<Vec<_>>()
            .join(if self.config.pretty { "\n\n" } else { "\n" })
    }

    /// Render the whole report as a single JSON object
    fn render_json(&self, report: &ScanReport) -> String {
        if self.config.pretty {
            serde_json::to_string_pretty(report).unwrap_or_else(|_| "{}".to_string())
        } else {
            serde_json::to_string(report).unwrap_or_else(|_| "{}".to_string())
        }
    }

    /// Render as Markdown
    fn render_markdown(&self, report: &ScanReport) -> String {
        let ranked = &report.ranked;
        let mut output = String::new();

        output.push_str(&format!(
            "## Top {} keywords ({}+ letters)\n\n",
            ranked.max_count, report.min_len
        ));
        output.push_str(&format!(
            "Scanned `{}`: {} file(s), {} binary skipped, {} failed, {} words counted, {} distinct.\n\n",
            report.root,
            report.stats.files_scanned,
            report.stats.files_binary,
            report.stats.files_failed,
            report.stats.words_counted,
            ranked.distinct_words
        ));

        if ranked.is_empty() {
            output.push_str("_No keywords found._\n");
            return output;
        }

        output.push_str("| # | Word | Count |\n");
        output.push_str("|---:|---|---:|\n");
        for (i, entry) in ranked.entries.iter().enumerate() {
            output.push_str(&format!("| {} | `{}` | {} |\n", i + 1, entry.word, entry.count));
        }

        output
    }

    /// Render as plain `word count` lines
    fn render_raw(&self, report: &ScanReport) -> String {
        report
            .ranked
            .entries
            .iter()
            .map(|entry| format!("{} {}", entry.word, entry.count))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
