// src/application/quote_book.rs
use tracing::{debug, info, instrument, warn};

use crate::application::cursor::BrowseCursor;
use crate::application::projection::{Projection, ViewFilter};
use crate::application::quote_store::{ImportRow, QuoteStore};
use crate::domain::{DomainError, Quote, QuoteFields, QuoteId, Record, Settings, Stats, Theme};

pub trait QuoteRepository {
    /// Load the persisted collection. A collection that does not exist yet is empty.
    fn try_load_quotes(&self) -> Result<Vec<Quote>, DomainError>;

    /// Load the persisted collection. Failures yield an empty collection.
    fn load_quotes(&self) -> Vec<Quote> {
        self.try_load_quotes().unwrap_or_else(|e| {
            warn!(error = %e, "Could not load quotes, starting empty");
            Vec::new()
        })
    }

    /// Replace the persisted collection with `quotes`.
    fn save_quotes(&self, quotes: &[Quote]) -> Result<(), DomainError>;
}

pub trait SettingsRepository {
    /// Load persisted settings. Failures yield the defaults.
    fn load_settings(&self) -> Settings;

    fn save_settings(&self, settings: &Settings) -> Result<(), DomainError>;
}

/// One browsing session over a quote collection and its settings.
///
/// Owns the store and the settings separately; the list view is derived on
/// demand from the store and the active filter.
pub struct QuoteBook<R: QuoteRepository, S: SettingsRepository> {
    quotes: R,
    settings_repository: S,
    store: QuoteStore,
    settings: Settings,
    filter: ViewFilter,
    cursor: BrowseCursor,
    load_error: Option<String>,
}

impl<R: QuoteRepository, S: SettingsRepository> QuoteBook<R, S> {
    /// Load both repositories. An unreadable collection opens empty and
    /// blocks [`QuoteBook::save`] so the file on disk is left alone.
    pub fn open(quotes: R, settings_repository: S) -> Self {
        let (loaded, load_error) = match quotes.try_load_quotes() {
            Ok(loaded) => (loaded, None),
            Err(e) => {
                warn!(error = %e, "Could not load quotes, starting empty");
                (Vec::new(), Some(e.to_string()))
            }
        };
        let store = QuoteStore::from_quotes(loaded);
        let settings = settings_repository.load_settings();
        let filter = ViewFilter::category(&settings.last_category);
        debug!(count = store.len(), ?settings, "Opened quote book");
        Self {
            quotes,
            settings_repository,
            store,
            settings,
            filter,
            cursor: BrowseCursor::default(),
            load_error,
        }
    }

    pub fn store(&self) -> &QuoteStore {
        &self.store
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn repository(&self) -> &R {
        &self.quotes
    }

    /// Records visible under the active filter, computed fresh on every call.
    pub fn view(&self) -> Projection<'_> {
        Projection::new(&self.store, self.filter.clone())
    }

    /// Filter by category and remember it as the last used category.
    #[instrument(level = "debug", skip(self))]
    pub fn apply_category(&mut self, category: &str) -> Result<(), DomainError> {
        let category = category.trim();
        self.filter = ViewFilter::category(category);
        self.settings.last_category = category.to_string();
        self.settings_repository.save_settings(&self.settings)
    }

    /// Filter by search term. Replaces any category filter for this session.
    #[instrument(level = "debug", skip(self))]
    pub fn search(&mut self, term: &str) {
        self.filter = ViewFilter::Search(term.trim().to_string());
    }

    /// Resolve the n-th displayed record back to its store identity.
    pub fn select(&self, index: usize) -> Option<QuoteId> {
        self.view().resolve(index)
    }

    pub fn add(&mut self, fields: &QuoteFields) -> Result<QuoteId, DomainError> {
        self.store.add(fields)
    }

    pub fn edit(&mut self, id: QuoteId, fields: &QuoteFields) -> Result<(), DomainError> {
        self.store.update(id, fields)
    }

    pub fn delete(&mut self, id: QuoteId) -> Result<Quote, DomainError> {
        let removed = self.store.remove(id)?;
        if self.cursor.current().is_some_and(|i| i >= self.store.len()) {
            self.cursor = BrowseCursor::default();
        }
        Ok(removed)
    }

    pub fn rate(&mut self, id: QuoteId, stars: i64) -> Result<(), DomainError> {
        self.store.rate(id, stars)
    }

    /// Import rows and show everything under the remembered category again.
    pub fn import(&mut self, rows: Vec<ImportRow>) -> usize {
        let count = self.store.import_records(rows).len();
        self.filter = ViewFilter::category(&self.settings.last_category);
        count
    }

    pub fn export_rows(&self) -> Vec<[String; 4]> {
        self.store.export_records()
    }

    pub fn save(&self) -> Result<(), DomainError> {
        if let Some(reason) = &self.load_error {
            return Err(DomainError::Unreadable(reason.clone()));
        }
        self.quotes.save_quotes(&self.store.to_quotes())?;
        info!(count = self.store.len(), "Saved all changes");
        Ok(())
    }

    pub fn stats(&self) -> Stats {
        self.store.stats()
    }

    pub fn show(&mut self, id: QuoteId) -> Result<&Record, DomainError> {
        let index = self.store.position(id).ok_or(DomainError::QuoteNotFound(id))?;
        self.cursor = BrowseCursor::at(index);
        Ok(&self.store.records()[index])
    }

    pub fn random(&mut self) -> Result<&Record, DomainError> {
        let index = self.cursor.random(self.store.len())?;
        Ok(&self.store.records()[index])
    }

    pub fn next(&mut self) -> Result<&Record, DomainError> {
        let index = self.cursor.next(self.store.len())?;
        Ok(&self.store.records()[index])
    }

    pub fn previous(&mut self) -> Result<&Record, DomainError> {
        let index = self.cursor.previous(self.store.len())?;
        Ok(&self.store.records()[index])
    }

    pub fn current(&self) -> Option<&Record> {
        self.cursor.current().and_then(|i| self.store.records().get(i))
    }

    pub fn set_theme(&mut self, theme: Theme) -> Result<Theme, DomainError> {
        self.settings.theme = theme;
        self.settings_repository.save_settings(&self.settings)?;
        info!(%theme, "Theme changed");
        Ok(theme)
    }

    pub fn toggle_theme(&mut self) -> Result<Theme, DomainError> {
        let theme = self.settings.theme.toggled();
        self.set_theme(theme)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::testing::{MockQuoteRepository, MockSettingsRepository};

    fn book(quotes: Vec<Quote>) -> QuoteBook<MockQuoteRepository, MockSettingsRepository> {
        QuoteBook::open(
            MockQuoteRepository::builder().with_quotes(quotes).build(),
            MockSettingsRepository::default(),
        )
    }

    fn sample() -> Vec<Quote> {
        vec![
            Quote::new("A", "X", "C1"),
            Quote::new("B", "Y", "C2"),
            Quote::new("C", "Z", "C1"),
        ]
    }

    #[test]
    fn given_last_category_in_settings_when_opening_then_view_is_filtered() {
        let book = QuoteBook::open(
            MockQuoteRepository::builder().with_quotes(sample()).build(),
            MockSettingsRepository::with_settings(Settings {
                theme: Theme::Dark,
                last_category: "C2".to_string(),
            }),
        );

        let view = book.view();

        assert_eq!(view.len(), 1);
        assert_eq!(view.items()[0].quote.text, "B");
    }

    #[test]
    fn given_category_when_applying_then_persists_trimmed_last_category() {
        let mut book = book(sample());

        book.apply_category(" C1 ").unwrap();

        assert_eq!(book.view().len(), 2);
        assert_eq!(book.settings().last_category, "C1");
        let saved = book.settings_repository.saved();
        assert_eq!(saved.last().map(|s| s.last_category.as_str()), Some("C1"));
    }

    #[test]
    fn given_category_filter_when_searching_then_search_replaces_it() {
        let mut book = book(sample());
        book.apply_category("C2").unwrap();

        book.search("  x ");

        assert_eq!(book.view().filter(), &ViewFilter::Search("x".to_string()));
        assert_eq!(book.select(0), Some(QuoteId(1)));
    }

    #[test]
    fn given_filtered_view_when_deleting_selected_then_removes_that_record() {
        let mut book = book(sample());
        book.apply_category("C1").unwrap();
        let selected = book.select(1).unwrap();

        let removed = book.delete(selected).unwrap();

        assert_eq!(removed.text, "C");
        assert_eq!(book.view().len(), 1);
        assert_eq!(book.store().len(), 2);
    }

    #[test]
    fn given_mutation_when_viewing_again_then_view_reflects_store() {
        let mut book = book(sample());
        book.apply_category("C1").unwrap();
        assert_eq!(book.view().len(), 2);

        book.add(&QuoteFields::new("D", "W", "C1")).unwrap();

        assert_eq!(book.view().len(), 3);
    }

    #[test]
    fn given_shown_quote_when_stepping_then_wraps_around_store() {
        let mut book = book(sample());

        book.show(QuoteId(3)).unwrap();
        let next = book.next().unwrap().id;
        let previous = book.previous().unwrap().id;

        assert_eq!(next, QuoteId(1));
        assert_eq!(previous, QuoteId(3));
        assert_eq!(book.current().map(|r| r.id), Some(QuoteId(3)));
    }

    #[test]
    fn given_empty_book_when_picking_random_then_reports_no_quotes() {
        let mut book = book(vec![]);

        assert_eq!(book.random().err(), Some(DomainError::NoQuotes));
        assert_eq!(book.next().err(), Some(DomainError::NoQuotes));
    }

    #[test]
    fn given_rows_when_importing_then_resets_search_to_last_category() {
        let mut book = book(sample());
        book.search("zzz");
        assert!(book.view().is_empty());

        let count = book.import(vec![ImportRow {
            text: "E".to_string(),
            author: "V".to_string(),
            category: "C3".to_string(),
            rating: Some("2".to_string()),
        }]);

        assert_eq!(count, 1);
        assert_eq!(book.view().len(), 4);
        assert_eq!(book.store().categories(), ["C1", "C2", "C3"]);
    }

    #[test]
    fn given_changes_when_saving_then_repository_receives_store_order() {
        let mut book = book(sample());
        book.rate(QuoteId(2), 5).unwrap();

        book.save().unwrap();

        let saved = book.repository().saved();
        assert_eq!(saved.len(), 1);
        assert_eq!(saved[0][1].rating, 5);
        assert_eq!(saved[0].len(), 3);
    }

    #[test]
    fn given_failing_repository_when_saving_then_returns_storage_error() {
        let book = QuoteBook::open(
            MockQuoteRepository::builder().with_save_failure("disk full").build(),
            MockSettingsRepository::default(),
        );

        let result = book.save();

        assert_eq!(result, Err(DomainError::Storage("disk full".to_string())));
    }

    #[test]
    fn given_unreadable_collection_when_saving_then_refuses_to_overwrite() {
        let mut book = QuoteBook::open(
            MockQuoteRepository::builder().with_load_failure("bad rating").build(),
            MockSettingsRepository::default(),
        );
        book.add(&QuoteFields::new("N", "Z", "K")).unwrap();

        let result = book.save();

        assert!(matches!(result, Err(DomainError::Unreadable(_))));
        assert!(book.repository().saved().is_empty());
    }

    #[test]
    fn given_cursor_on_last_record_when_deleting_it_then_cursor_restarts() {
        let mut book = book(sample());
        book.show(QuoteId(3)).unwrap();

        book.delete(QuoteId(3)).unwrap();

        assert_eq!(book.current(), None);
        assert_eq!(book.next().unwrap().id, QuoteId(1));
    }

    #[test]
    fn given_cursor_before_deleted_record_when_deleting_then_cursor_stays() {
        let mut book = book(sample());
        book.show(QuoteId(1)).unwrap();

        book.delete(QuoteId(3)).unwrap();

        assert_eq!(book.current().map(|r| r.id), Some(QuoteId(1)));
        assert_eq!(book.next().unwrap().id, QuoteId(2));
    }

    #[test]
    fn given_light_theme_when_toggling_then_saves_dark_theme() {
        let mut book = book(vec![]);

        let theme = book.toggle_theme().unwrap();

        assert_eq!(theme, Theme::Dark);
        assert_eq!(book.settings_repository.saved()[0].theme, Theme::Dark);
    }
}
