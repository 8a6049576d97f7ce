//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use colored::Colorize;
use serde::Serialize;

use crate::core::models::{CategoryAverage, ExchangePerformance, Report, Summary};

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Result of viewing one exchange
#[derive(Debug, Serialize)]
pub struct SummaryResult {
    /// Per-category averages
    #[serde(flatten)]
    pub summary: Summary,
}

/// One line of the exchange list
#[derive(Debug, Serialize)]
pub struct ExchangeListEntry {
    /// Exchange name
    pub name: String,
    /// Mean of the exchange's category averages, if it has any ratings
    pub average: Option<f64>,
    /// Ratings accepted for this exchange
    pub total_ratings: u64,
}

/// Result of listing exchanges
#[derive(Debug, Serialize)]
pub struct ExchangeListResult {
    /// Exchanges, sorted by name
    pub exchanges: Vec<ExchangeListEntry>,
}

/// Result of generating a report
#[derive(Debug, Serialize)]
pub struct ReportResult {
    /// The computed report
    #[serde(flatten)]
    pub report: Report,
}

/// Result of recording a rating
#[derive(Debug, Serialize)]
pub struct RatingResult {
    /// Exchange that was rated
    pub exchange: String,
    /// Category that was rated
    pub criterion: String,
    /// The accepted value
    pub rating: i8,
}

/// Result of an export
#[derive(Debug, Serialize)]
pub struct ExportResult {
    /// Format written (csv or json)
    pub format: String,
    /// Destination file
    pub path: String,
    /// Rows (csv) or exchanges (json) written
    pub records: usize,
}

/// Generic operation result for simple commands
#[derive(Debug, Serialize)]
pub struct OperationResult {
    /// Whether the operation succeeded
    pub success: bool,
    /// Human-readable message
    pub message: String,
}

fn print_json<T: Serialize>(value: &T) {
    println!("{}", serde_json::to_string_pretty(value).unwrap_or_default());
}

fn format_average(average: Option<f64>) -> String {
    average.map_or_else(|| "No ratings".to_string(), |a| format!("{a:.2}"))
}

/// Upper-case the first character of a category name for display
pub(crate) fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    chars.next().map_or_else(String::new, |first| first.to_uppercase().chain(chars).collect())
}

impl SummaryResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => print_json(self),
        }
    }

    fn render_human(&self) {
        println!("\nRatings for '{}':", self.summary.exchange);
        println!("{}", "=".repeat(40));
        for CategoryAverage { category, average } in &self.summary.ratings {
            println!("{:12}: {}", capitalize(category), format_average(*average));
        }
    }
}

impl ExchangeListResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => print_json(self),
        }
    }

    fn render_human(&self) {
        if self.exchanges.is_empty() {
            println!("No exchanges registered.");
            return;
        }

        println!("Registered exchanges:");
        for entry in &self.exchanges {
            match entry.average {
                Some(avg) => println!("  {} (avg: {avg:.2})", entry.name),
                None => println!("  {} (no ratings)", entry.name),
            }
        }
    }
}

impl ReportResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => print_json(self),
        }
    }

    fn render_human(&self) {
        let report = &self.report;
        println!("\n{}", "LBTAS System Report".bold());
        println!("{}", "=".repeat(50));
        println!("Total exchanges: {}", report.total_exchanges);
        println!("Total ratings: {}", report.total_ratings);
        println!("System average: {}", format_average(report.system_average));

        println!("\n{}", "Category Averages:".bold());
        for CategoryAverage { category, average } in &report.category_averages {
            println!("  {:12}: {}", capitalize(category), format_average(*average));
        }

        render_performers("Top Performers:", &report.top_performers);
        render_performers("Bottom Performers:", &report.bottom_performers);

        println!("\nGenerated at {}", report.generated_at.to_rfc3339());
    }
}

fn render_performers(title: &str, performers: &[ExchangePerformance]) {
    if performers.is_empty() {
        return;
    }
    println!("\n{}", title.bold());
    for (rank, performer) in performers.iter().enumerate() {
        println!("  {}. {}: {:.2}", rank + 1, performer.name, performer.average);
    }
}

impl RatingResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => {
                println!(
                    "Added rating {} for {} to {}",
                    self.rating, self.criterion, self.exchange
                );
            },
            OutputMode::Json => print_json(self),
        }
    }
}

impl ExportResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => {
                println!("Exported {} {} record(s) to {}", self.records, self.format, self.path);
            },
            OutputMode::Json => print_json(self),
        }
    }
}

impl OperationResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => println!("{}", self.message),
            OutputMode::Json => print_json(self),
        }
    }
}
