// src/lib.rs
pub mod application;
pub mod cli;
pub mod constants;
pub mod domain;
pub mod infrastructure;
pub mod ports;
pub mod util;

use std::path::PathBuf;
use anyhow::{Context, Result};
use application::{QuoteBook, QuoteRepository, SettingsRepository};
use domain::{QuoteFields, QuoteId};
use infrastructure::{csv_file, JsonQuoteFile, JsonSettingsFile};
use ports::TextPresenter;
use tracing::{debug, info};
use crate::cli::args::{Args, Command};
use crate::constants::{APP_DIR_NAME, DATA_FILE_NAME, SETTINGS_FILE_NAME};

pub fn run(args: Args) -> Result<()> {
    debug!(?args, "Starting quotebook with arguments");

    // Initialize infrastructure
    let data_path = match args.data {
        Some(path) => path,
        None => default_path(DATA_FILE_NAME),
    };
    let settings_path = match args.settings {
        Some(path) => path,
        None => default_path(SETTINGS_FILE_NAME),
    };
    debug!(?data_path, ?settings_path, "Resolved file locations");

    let quote_file = JsonQuoteFile::new(&data_path);
    quote_file.ensure_exists()?;
    let settings_file = JsonSettingsFile::new(&settings_path);
    settings_file.ensure_exists()?;

    // Initialize application and presentation
    let mut book = QuoteBook::open(quote_file, settings_file);
    let presenter = TextPresenter::new();

    // Execute use case
    let output = execute(&mut book, &presenter, args.command)?;
    println!("{output}");
    Ok(())
}

/// Run one command against an open quote book and return what to print.
pub fn execute<R, S>(
    book: &mut QuoteBook<R, S>,
    presenter: &TextPresenter,
    command: Command,
) -> Result<String>
where
    R: QuoteRepository,
    S: SettingsRepository,
{
    let output = match command {
        Command::Random => presenter.render_quote(&book.random()?.quote),
        Command::Show { id } => presenter.render_quote(&book.show(QuoteId(id))?.quote),
        Command::Next { id } => {
            book.show(QuoteId(id))?;
            presenter.render_quote(&book.next()?.quote)
        }
        Command::Prev { id } => {
            book.show(QuoteId(id))?;
            presenter.render_quote(&book.previous()?.quote)
        }
        Command::List {
            category,
            search,
            json,
        } => {
            if let Some(term) = search {
                book.search(&term);
            } else if let Some(category) = category {
                book.apply_category(&category)?;
            }
            let view = book.view();
            debug!(filter = ?view.filter(), count = view.len(), "Listing quotes");
            if json {
                presenter.render_json(view.items())?
            } else {
                presenter.render_list(&view)
            }
        }
        Command::Add { quote } => {
            let id = book.add(&QuoteFields::new(quote.text, quote.author, quote.category))?;
            book.save()?;
            format!("Added quote {id}.")
        }
        Command::Edit {
            id,
            text,
            author,
            category,
        } => {
            let id = QuoteId(id);
            let current = QuoteFields::from(&book.store().get(id)?.quote);
            let fields = QuoteFields {
                text: text.unwrap_or(current.text),
                author: author.unwrap_or(current.author),
                category: category.unwrap_or(current.category),
            };
            book.edit(id, &fields)?;
            book.save()?;
            format!("Edited quote {id}.")
        }
        Command::Delete { id } => {
            let removed = book.delete(QuoteId(id))?;
            book.save()?;
            format!("Deleted quote {id}: \u{201c}{}\u{201d}", removed.text)
        }
        Command::Rate { id, stars } => {
            book.rate(QuoteId(id), stars)?;
            book.save()?;
            format!("Quote rated {stars} stars.")
        }
        Command::Import { path } => {
            let rows = csv_file::read_import_rows(&path)?;
            let count = book.import(rows);
            book.save()?;
            info!(count, path = %path.display(), "Imported quotes from CSV");
            format!("{count} quotes imported.")
        }
        Command::Export { path } => {
            csv_file::write_export_rows(&path, &book.export_rows())
                .with_context(|| format!("CSV export to {} failed", path.display()))?;
            "Quotes exported successfully.".to_string()
        }
        Command::Stats => presenter.render_stats(&book.stats()),
        Command::Categories => presenter.render_names(book.store().categories()),
        Command::Authors => presenter.render_names(book.store().authors()),
        Command::Theme { theme } => {
            let theme = match theme {
                Some(theme) => book.set_theme(theme)?,
                None => book.toggle_theme()?,
            };
            format!("Theme set to {theme}.")
        }
    };
    Ok(output)
}

/// Location of a default file under the platform data directory.
pub fn default_path(file_name: &str) -> PathBuf {
    match dirs::data_dir() {
        Some(dir) => dir.join(APP_DIR_NAME).join(file_name),
        None => PathBuf::from(file_name),
    }
}
