// src/ports/text.rs
use anyhow::{Context, Result};
use serde::Serialize;
use tracing::instrument;

use crate::application::Projection;
use crate::domain::{Quote, Record, Stats};

const STAR: char = '★';

/// Renders quotes and summaries as plain terminal text.
#[derive(Debug, Default)]
pub struct TextPresenter;

impl TextPresenter {
    pub fn new() -> Self {
        Self
    }

    /// The quote card: text in curly quotes, then the author.
    pub fn render_quote(&self, quote: &Quote) -> String {
        format!("\u{201c}{}\u{201d}\n\n\u{2014} {}", quote.text, quote.author)
    }

    /// One line of the list view, prefixed with the id used by other commands.
    pub fn render_line(&self, record: &Record) -> String {
        let quote = &record.quote;
        let mut line = format!(
            "[{}] \u{201c}{}\u{201d} \u{2014} {}",
            record.id, quote.text, quote.author
        );
        if quote.is_rated() {
            line.push(' ');
            line.extend(std::iter::repeat(STAR).take(usize::from(quote.rating)));
        }
        line
    }

    #[instrument(level = "trace", skip_all)]
    pub fn render_list(&self, projection: &Projection<'_>) -> String {
        if projection.is_empty() {
            return "No matching quotes.".to_string();
        }
        projection
            .items()
            .iter()
            .map(|r| self.render_line(r))
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn render_stats(&self, stats: &Stats) -> String {
        format!(
            "Total Quotes: {}\nCategories: {}\nAuthors: {}\nRated: {}",
            stats.total, stats.categories, stats.authors, stats.rated
        )
    }

    pub fn render_names(&self, names: &[String]) -> String {
        names.join("\n")
    }

    pub fn render_json<T: Serialize + ?Sized>(&self, value: &T) -> Result<String> {
        serde_json::to_string_pretty(value).context("Failed to serialize output as JSON")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::{QuoteStore, ViewFilter};
    use crate::domain::QuoteId;
    use rstest::rstest;

    #[test]
    fn given_quote_when_rendering_then_shows_text_and_author() {
        let presenter = TextPresenter::new();

        let text = presenter.render_quote(&Quote::new("Be yourself.", "Oscar Wilde", "Life"));

        assert_eq!(text, "\u{201c}Be yourself.\u{201d}\n\n\u{2014} Oscar Wilde");
    }

    #[rstest]
    #[case(0, "[3] \u{201c}T\u{201d} \u{2014} A")]
    #[case(1, "[3] \u{201c}T\u{201d} \u{2014} A \u{2605}")]
    #[case(4, "[3] \u{201c}T\u{201d} \u{2014} A \u{2605}\u{2605}\u{2605}\u{2605}")]
    fn given_rating_when_rendering_line_then_appends_stars(#[case] rating: u8, #[case] expected: &str) {
        let presenter = TextPresenter::new();
        let record = Record {
            id: QuoteId(3),
            quote: Quote {
                rating,
                ..Quote::new("T", "A", "C")
            },
        };

        assert_eq!(presenter.render_line(&record), expected);
    }

    #[test]
    fn given_empty_projection_when_rendering_list_then_says_so() {
        let store = QuoteStore::new();
        let projection = Projection::new(&store, ViewFilter::All);

        assert_eq!(TextPresenter::new().render_list(&projection), "No matching quotes.");
    }

    #[test]
    fn given_projection_when_rendering_list_then_one_line_per_record() {
        let store = QuoteStore::from_quotes(vec![Quote::new("A", "X", "C1"), Quote::new("B", "Y", "C2")]);
        let projection = Projection::new(&store, ViewFilter::All);

        let text = TextPresenter::new().render_list(&projection);

        assert_eq!(text.lines().count(), 2);
        assert!(text.starts_with("[1] "));
    }

    #[test]
    fn given_stats_when_rendering_then_lists_all_counts() {
        let stats = Stats {
            total: 4,
            categories: 2,
            authors: 3,
            rated: 1,
        };

        let text = TextPresenter::new().render_stats(&stats);

        assert_eq!(text, "Total Quotes: 4\nCategories: 2\nAuthors: 3\nRated: 1");
    }
}
