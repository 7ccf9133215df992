// src/cli/args.rs
use clap::{Args as ClapArgs, Parser, Subcommand};
use std::path::PathBuf;

use crate::domain::Theme;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)] // Read from `Cargo.toml`
#[command(arg_required_else_help = true, disable_help_subcommand = true)]
pub struct Args {
    /// Path to the quote collection file (optional)
    #[arg(short, long, value_name = "FILE", global = true)]
    pub data: Option<PathBuf>,

    /// Path to the settings file (optional)
    #[arg(short, long, value_name = "FILE", global = true)]
    pub settings: Option<PathBuf>,

    /// Verbosity level (-v = debug, -vv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Text, author and category of a quote as given on the command line.
#[derive(ClapArgs, Debug, Clone, PartialEq, Eq)]
pub struct QuoteInput {
    /// Quote text
    #[arg(short, long)]
    pub text: String,

    /// Author of the quote
    #[arg(short, long)]
    pub author: String,

    /// Category of the quote
    #[arg(short, long)]
    pub category: String,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Show a random quote
    Random,

    /// Show one quote
    Show {
        #[arg(value_name = "ID")]
        id: u64,
    },

    /// Show the quote after the given one, wrapping around
    Next {
        #[arg(value_name = "ID")]
        id: u64,
    },

    /// Show the quote before the given one, wrapping around
    Prev {
        #[arg(value_name = "ID")]
        id: u64,
    },

    /// List quotes, filtered by category or search term
    ///
    /// Without a filter the last applied category is used.
    List {
        /// Only quotes in this category; an empty value clears the filter
        #[arg(long, conflicts_with = "search")]
        category: Option<String>,

        /// Only quotes whose text or author contains this term
        #[arg(long)]
        search: Option<String>,

        /// Output records as JSON
        #[arg(long)]
        json: bool,
    },

    /// Add a new quote
    Add {
        #[command(flatten)]
        quote: QuoteInput,
    },

    /// Edit text, author or category of a quote
    Edit {
        #[arg(value_name = "ID")]
        id: u64,

        #[arg(short, long)]
        text: Option<String>,

        #[arg(short, long)]
        author: Option<String>,

        #[arg(short, long)]
        category: Option<String>,
    },

    /// Delete a quote
    Delete {
        #[arg(value_name = "ID")]
        id: u64,
    },

    /// Rate a quote with 1 to 5 stars
    Rate {
        #[arg(value_name = "ID")]
        id: u64,

        #[arg(value_name = "STARS", allow_negative_numbers = true)]
        stars: i64,
    },

    /// Import quotes from a CSV file
    Import {
        #[arg(value_name = "CSV")]
        path: PathBuf,
    },

    /// Export all quotes to a CSV file
    Export {
        #[arg(value_name = "CSV")]
        path: PathBuf,
    },

    /// Show collection statistics
    Stats,

    /// List all categories
    Categories,

    /// List all authors
    Authors,

    /// Set the theme, or toggle it when no theme is given
    Theme {
        #[arg(value_enum)]
        theme: Option<Theme>,
    },
}
