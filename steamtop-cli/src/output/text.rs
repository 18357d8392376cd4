//! Text output formatting.

use steamtop_core::{GameRecord, GamesResponse};

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";
const GREEN: &str = "\x1b[32m";

/// Placeholder for absent fields.
const MISSING: &str = "-";

/// Text formatter with optional colors.
pub struct TextFormatter {
    use_colors: bool,
}

impl TextFormatter {
    /// Creates a new text formatter.
    pub fn new(use_colors: bool) -> Self {
        Self { use_colors }
    }

    /// Formats a games response as a ranked table plus a summary line.
    pub fn format_games(&self, response: &GamesResponse) -> String {
        let name_width = response
            .data
            .iter()
            .filter_map(GameRecord::name)
            .map(|name| name.chars().count())
            .max()
            .unwrap_or(0)
            .max("Name".len());

        let mut lines = Vec::with_capacity(response.data.len() + 2);
        lines.push(self.bold(&format!(
            "{:>3}  {:>8}  {:<name_width$}  {:>14}  {:>5}  {}",
            "#", "App", "Name", "Price", "Score", "Released"
        )));

        for (rank, record) in response.data.iter().enumerate() {
            lines.push(self.format_row(rank + 1, record, name_width));
        }

        let mode = if response.parallel {
            format!("parallel, concurrency {}", response.concurrency)
        } else {
            "serial".to_string()
        };
        lines.push(self.dim(&format!(
            "{} games in {:.3}s ({mode})",
            response.rows, response.elapsed
        )));

        lines.join("\n")
    }

    fn format_row(&self, rank: usize, record: &GameRecord, name_width: usize) -> String {
        let price = record
            .price()
            .map_or_else(|| MISSING.to_string(), ToString::to_string);
        let price = if record.price().is_some_and(steamtop_core::Price::is_free) {
            self.green(&format!("{price:>14}"))
        } else {
            format!("{price:>14}")
        };
        let score = record
            .review_score()
            .map_or_else(|| MISSING.to_string(), |s| s.to_string());

        format!(
            "{rank:>3}  {:>8}  {:<name_width$}  {price}  {score:>5}  {}",
            record.id().get(),
            record.name().unwrap_or(MISSING),
            record.release_date().unwrap_or(MISSING),
        )
    }

    fn bold(&self, s: &str) -> String {
        self.paint(BOLD, s)
    }

    fn dim(&self, s: &str) -> String {
        self.paint(DIM, s)
    }

    fn green(&self, s: &str) -> String {
        self.paint(GREEN, s)
    }

    fn paint(&self, code: &str, s: &str) -> String {
        if self.use_colors {
            format!("{code}{s}{RESET}")
        } else {
            s.to_string()
        }
    }
}
