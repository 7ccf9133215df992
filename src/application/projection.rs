// src/application/projection.rs
use crate::application::QuoteStore;
use crate::domain::{QuoteId, Record};

/// The single active filter of the list view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ViewFilter {
    #[default]
    All,
    /// Exact, case-sensitive match on the category.
    Category(String),
    /// Case-insensitive substring match on text or author.
    Search(String),
}

impl ViewFilter {
    /// Category filter where an empty category means no filter.
    pub fn category(category: &str) -> Self {
        if category.is_empty() {
            ViewFilter::All
        } else {
            ViewFilter::Category(category.to_string())
        }
    }
}

/// Records currently displayed, in store order.
///
/// Borrows the store, so it has to be rebuilt after every mutation.
#[derive(Debug)]
pub struct Projection<'a> {
    filter: ViewFilter,
    items: Vec<&'a Record>,
}

impl<'a> Projection<'a> {
    pub fn new(store: &'a QuoteStore, filter: ViewFilter) -> Self {
        let records = store.records();
        let items = match &filter {
            ViewFilter::All => records.iter().collect(),
            ViewFilter::Category(category) => filter_by_category(records, category),
            ViewFilter::Search(term) => filter_by_search(records, term),
        };
        Self { filter, items }
    }

    pub fn filter(&self) -> &ViewFilter {
        &self.filter
    }

    pub fn items(&self) -> &[&'a Record] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Map a position in this view back to the store identity it shows.
    pub fn resolve(&self, index: usize) -> Option<QuoteId> {
        self.items.get(index).map(|r| r.id)
    }
}

pub fn filter_by_category<'a>(records: &'a [Record], category: &str) -> Vec<&'a Record> {
    records
        .iter()
        .filter(|r| category.is_empty() || r.quote.category == category)
        .collect()
}

pub fn filter_by_search<'a>(records: &'a [Record], term: &str) -> Vec<&'a Record> {
    let term = term.to_lowercase();
    records
        .iter()
        .filter(|r| {
            r.quote.text.to_lowercase().contains(&term)
                || r.quote.author.to_lowercase().contains(&term)
        })
        .collect()
}
