//! rTimecalc library root.
//! Exposes the calculator engine, the CLI parser and the high-level run() function.

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod export;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use config::preferences::{PreferenceStore, load_theme, open_preferences};
use errors::AppResult;
use models::theme::Theme;

/// Central command dispatcher
pub fn dispatch(
    cli: &Cli,
    cfg: &Config,
    theme: Theme,
    prefs: &mut dyn PreferenceStore,
) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Calc { .. } => cli::commands::calc::handle(&cli.command, cfg, theme),
        Commands::Repl { .. } => cli::commands::repl::handle(&cli.command, cfg, theme),
        Commands::History { .. } => cli::commands::history::handle(&cli.command, cfg, theme),
        Commands::Show { .. } => cli::commands::show::handle(&cli.command, cfg, theme),
        Commands::Edit { .. } => cli::commands::edit::handle(&cli.command, cfg),
        Commands::Del { .. } => cli::commands::del::handle(&cli.command, cfg),
        Commands::Clear { .. } => cli::commands::clear::handle(&cli.command, cfg),
        Commands::Theme { .. } => cli::commands::theme::handle(&cli.command, theme, prefs),
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, cfg),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Log { .. } => cli::commands::log::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // test mode never reads the user's config file
    let mut cfg = if cli.test {
        Config::default()
    } else {
        Config::load()?
    };

    if let Some(custom_db) = &cli.db {
        cfg.database = custom_db.clone();
    }

    let mut prefs = open_preferences(cli.test)?;
    let theme = load_theme(&*prefs);

    dispatch(&cli, &cfg, theme, &mut *prefs)
}
