use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use page_core::{PersistenceMode, StyleScope, ThemeController};
use shared::content::{ContactAction, ResumeContent};
use shared::domain::ThemePreference;
use storage::{PreferenceFile, PreferenceStore, ProfilePaths};
use tracing_subscriber::EnvFilter;

const BAR_WIDTH: usize = 20;

#[derive(Parser, Debug)]
#[command(name = "portfolio-tools", about = "Inspect and edit the portfolio profile")]
struct Cli {
    /// Directory holding the preference file.
    #[arg(long)]
    data_dir: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    #[command(subcommand)]
    Theme(ThemeCommand),
    /// Print the skill bars as rendered on the page.
    Skills {
        #[arg(long)]
        revealed: bool,
    },
    /// Print contact destinations.
    Links,
}

#[derive(Subcommand, Debug)]
enum ThemeCommand {
    Show,
    Set { theme: String },
    Toggle,
}

/// Headless style scope: records the mode instead of restyling a window.
struct LoggedScope;

impl StyleScope for LoggedScope {
    fn set_dark(&mut self, dark: bool) {
        tracing::debug!(dark, "style scope updated");
    }
}

fn run_theme(store: Box<dyn PreferenceStore>, command: ThemeCommand) -> Result<String> {
    let mut controller = ThemeController::new(store, Box::new(LoggedScope));
    let current = controller.initialize();

    let next = match command {
        ThemeCommand::Show => return Ok(current.to_string()),
        ThemeCommand::Set { theme } => match ThemePreference::parse(&theme) {
            Some(preference) => preference,
            None => bail!("unknown theme '{theme}', expected 'dark' or 'light'"),
        },
        ThemeCommand::Toggle => ThemeController::toggle(current),
    };

    controller.apply(next);
    if controller.persistence_mode() == PersistenceMode::InMemory {
        bail!("preference store unavailable; theme was not saved");
    }
    Ok(next.to_string())
}

fn render_skills(content: &ResumeContent, revealed: bool) -> String {
    content
        .skills
        .iter()
        .map(|skill| {
            let filled = (skill.indicator_fraction(revealed) * BAR_WIDTH as f32).round() as usize;
            format!(
                "{:<40} [{}{}] {:>4}",
                skill.name,
                "#".repeat(filled),
                "-".repeat(BAR_WIDTH - filled),
                skill.level_label()
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_links(content: &ResumeContent) -> String {
    content
        .contacts
        .iter()
        .map(|contact| match contact.action {
            ContactAction::Link(url) if contact.opens_new_tab() => {
                format!("{}: {url} (new tab)", contact.text)
            }
            ContactAction::Link(url) => format!("{}: {url}", contact.text),
            ContactAction::CopyPageLink => format!("{}: copies the page URL", contact.text),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let content = ResumeContent::builtin();

    let output = match cli.command {
        Command::Theme(command) => {
            let paths = ProfilePaths::resolve(cli.data_dir.as_deref())?;
            paths.ensure_data_root()?;
            run_theme(Box::new(PreferenceFile::open(&paths)), command)?
        }
        Command::Skills { revealed } => render_skills(&content, revealed),
        Command::Links => render_links(&content),
    };
    println!("{output}");

    Ok(())
}
