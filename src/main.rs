mod config;
mod model;
mod matcher;
mod ranker;
mod state;
mod sources;
mod executor;
mod prefs;
mod clock;
mod ui;

use std::io;
use std::path::PathBuf;
use anyhow::Result;
use clap::{Parser, Subcommand};
use crate::config::load_config;
use crate::matcher::FuzzyMatcher;
use crate::prefs::{load_prefs, save_prefs, Prefs, Theme};
use crate::sources::load_catalog;
use crate::state::PaletteSession;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Config file to use instead of the default location
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Cmd,
}

#[derive(Subcommand, Debug)]
enum Cmd {
    /// Print the catalog ranked against a query
    Rank {
        query: Vec<String>,
    },
    /// Interactive palette driven by stdin lines
    Palette,
    /// Show or change the saved theme preference
    Theme {
        #[command(subcommand)]
        action: Option<ThemeAction>,
    },
    /// Print the current time and date lines
    Clock,
}

#[derive(Subcommand, Debug)]
enum ThemeAction {
    Get,
    Set { theme: Theme },
    /// Flip between light and dark, as the page switch does
    Toggle {
        /// Treat `system` as dark when resolving the current state
        #[arg(long)]
        system_dark: bool,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    match args.command {
        Cmd::Rank { query } => {
            let config = load_config(args.config.as_deref())?;
            let catalog = load_catalog(&config)?;
            let matcher = FuzzyMatcher::with_synonyms(config.synonyms.clone());
            let results = ranker::rank(&matcher, &query.join(" "), &catalog);
            if results.is_empty() {
                println!("{}", ui::render::NO_MATCHES);
            }
            for entry in results {
                println!("{}\t{}\t{}", entry.title, entry.path, entry.description);
            }
        }
        Cmd::Palette => {
            let config = load_config(args.config.as_deref())?;
            let catalog = load_catalog(&config)?;
            let matcher = FuzzyMatcher::with_synonyms(config.synonyms.clone());
            let mut session = PaletteSession::new(catalog, matcher);
            let stdin = io::stdin();
            let mut stdout = io::stdout();
            ui::terminal::run(&mut session, &config.general, stdin.lock(), &mut stdout)?;
        }
        Cmd::Theme { action } => {
            let mut prefs = load_prefs();
            match action.unwrap_or(ThemeAction::Get) {
                ThemeAction::Get => println!("{}", prefs.theme),
                ThemeAction::Set { theme } => {
                    prefs.theme = theme;
                    save_prefs(&prefs)?;
                    println!("{}", theme);
                }
                ThemeAction::Toggle { system_dark } => {
                    let theme = Theme::toggled(prefs.theme.resolve(system_dark));
                    save_prefs(&Prefs { theme })?;
                    println!("{}", theme);
                }
            }
        }
        Cmd::Clock => {
            let now = chrono::Local::now().naive_local();
            println!("{}", clock::format_time(&now));
            println!("{}", clock::format_date(&now));
        }
    }

    Ok(())
}
