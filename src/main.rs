//! Modifier Studio - Terminal-based layout and modifier chain editor
//!
//! This application provides an interactive editor for a parent element
//! (Box, Column or Row), its modifier chain, and the scope modifiers and
//! chains of its children, with a live schematic preview.

use anyhow::Result;
use clap::{Parser, ValueEnum};

use modstudio::config::{Config, ThemeMode};
use modstudio::constants::APP_BINARY_NAME;
use modstudio::editor::Session;
use modstudio::models::Template;
use modstudio::tui::{self, AppState};

/// Color theme selection on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ThemeArg {
    /// Follow the OS dark/light preference
    Auto,
    /// Force the dark theme
    Dark,
    /// Force the light theme
    Light,
}

impl From<ThemeArg> for ThemeMode {
    fn from(value: ThemeArg) -> Self {
        match value {
            ThemeArg::Auto => Self::Auto,
            ThemeArg::Dark => Self::Dark,
            ThemeArg::Light => Self::Light,
        }
    }
}

/// Modifier Studio - Terminal-based layout and modifier chain editor
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Template to open (see --list-templates)
    #[arg(value_name = "TEMPLATE")]
    template: Option<String>,

    /// Override the configured color theme for this run
    #[arg(long, value_enum)]
    theme: Option<ThemeArg>,

    /// List the built-in templates and exit
    #[arg(long)]
    list_templates: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.list_templates {
        for template in Template::catalog() {
            println!(
                "{:<14} {} · {} modifiers · {} children",
                template.name,
                template.parent.kind().display_name(),
                template.parent_modifiers.len(),
                template.children.len()
            );
        }
        return Ok(());
    }

    let mut config = Config::load().unwrap_or_default();
    let configured_theme = config.ui.theme_mode;
    if let Some(theme) = cli.theme {
        config.ui.theme_mode = theme.into();
    }

    let template = match &cli.template {
        Some(name) => Template::find(name).map_or_else(
            || {
                eprintln!("Error: unknown template: {name}");
                eprintln!();
                eprintln!("Available templates:");
                for template in Template::catalog() {
                    eprintln!("  {}", template.name);
                }
                eprintln!();
                eprintln!("For the full list with details, run:");
                eprintln!("  {APP_BINARY_NAME} --list-templates");
                std::process::exit(1);
            },
            |template| template,
        ),
        None => Template::pink_square(),
    };

    let session = Session::new(template);
    let mut state = AppState::new(config, session);

    let mut terminal = tui::setup_terminal()?;
    let result = tui::run_tui(&mut state, &mut terminal);
    tui::restore_terminal(terminal)?;
    result?;

    // A --theme override is for this run only and is not persisted
    if cli.theme.is_some() {
        state.config.ui.theme_mode = configured_theme;
    }
    if let Err(error) = state.config.save() {
        eprintln!("Warning: could not save configuration: {error:#}");
    }

    Ok(())
}
