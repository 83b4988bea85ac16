//! headnum: outline numbering for markdown headings.

use clap::{Parser, Subcommand};
use headnum::document::{DocumentAccessor, MarkdownDocument};
use headnum::edit_plan::EditPlan;
use headnum::{config, directive, input, numbering, toc, Result};
use std::path::{Path, PathBuf};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(name = "headnum")]
#[command(about = "Outline numbering and table of contents for markdown headings", long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Configuration file supplying default settings
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(long, short = 'v', global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Command {
    /// Number headings, then refresh the table of contents if a marker is set
    Number {
        /// Document to renumber
        path: PathBuf,
        /// Only renumber if the document's settings enable `auto`
        #[arg(long)]
        if_auto: bool,
        /// Print the edit plans as JSON instead of writing the file
        #[arg(long)]
        dry_run: bool,
    },
    /// Strip numbering from every heading
    Remove {
        /// Document to strip
        path: PathBuf,
        /// Print the edit plan as JSON instead of writing the file
        #[arg(long)]
        dry_run: bool,
    },
    /// Rebuild the table of contents under the contents heading
    Contents {
        /// Document to update
        path: PathBuf,
        /// Heading suffix marking the contents heading, overriding the document settings
        #[arg(long, value_name = "TEXT")]
        marker: Option<String>,
        /// Print the edit plan as JSON instead of writing the file
        #[arg(long)]
        dry_run: bool,
    },
    /// Store settings in the document's front matter
    SaveSettings {
        /// Document to update
        path: PathBuf,
        /// Directive applied over the document's current settings, e.g. "max 3, 1.A."
        directive: String,
        /// Print the edit plan as JSON instead of writing the file
        #[arg(long)]
        dry_run: bool,
    },
    /// Print the document's effective settings as JSON
    Settings {
        /// Document to inspect
        path: PathBuf,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let cfg = args
        .config
        .as_deref()
        .map_or_else(config::Config::load, config::Config::load_from);
    let defaults = cfg.settings();

    match args.command {
        Command::Number {
            path,
            if_auto,
            dry_run,
        } => {
            let mut doc = input::read_document(&path)?;
            let settings = directive::read_settings(&doc, &defaults);
            if if_auto && !settings.auto {
                tracing::info!(path = %path.display(), "auto numbering is off, nothing to do");
                return Ok(());
            }
            let numbered = numbering::number_headings(&doc, &settings);
            doc.apply(&numbered)?;
            // Contents links use the renumbered heading text, so they are a second transaction.
            let contents = toc::update_contents(&doc, &settings);
            doc.apply(&contents)?;
            finish(&path, &doc, &[numbered, contents], dry_run)
        }
        Command::Remove { path, dry_run } => {
            let mut doc = input::read_document(&path)?;
            let plan = numbering::remove_numbering(&doc);
            doc.apply(&plan)?;
            finish(&path, &doc, &[plan], dry_run)
        }
        Command::Contents {
            path,
            marker,
            dry_run,
        } => {
            let mut doc = input::read_document(&path)?;
            let mut settings = directive::read_settings(&doc, &defaults);
            if let Some(marker) = marker {
                settings.contents = marker;
            }
            let plan = toc::update_contents(&doc, &settings);
            doc.apply(&plan)?;
            finish(&path, &doc, &[plan], dry_run)
        }
        Command::SaveSettings {
            path,
            directive: text,
            dry_run,
        } => {
            let mut doc = input::read_document(&path)?;
            let current = directive::read_settings(&doc, &defaults);
            let settings = directive::parse_directive_over(&text, current);
            let plan = directive::save_settings(&doc, &settings)?;
            doc.apply(&plan)?;
            finish(&path, &doc, &[plan], dry_run)
        }
        Command::Settings { path } => {
            let doc = input::read_document(&path)?;
            let settings = directive::read_settings(&doc, &defaults);
            println!("{}", serde_json::to_string_pretty(&settings)?);
            Ok(())
        }
    }
}

/// Writes the document, or prints the plans that produced it when `dry_run` is set.
fn finish(path: &Path, doc: &MarkdownDocument, plans: &[EditPlan], dry_run: bool) -> Result<()> {
    if dry_run {
        println!("{}", serde_json::to_string_pretty(plans)?);
        return Ok(());
    }
    if plans.iter().all(EditPlan::is_empty) {
        tracing::info!(path = %path.display(), "already up to date");
        return Ok(());
    }
    input::write_document(path, doc)
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    if tracing::subscriber::set_global_default(subscriber).is_err() {
        eprintln!("Failed to install the log subscriber");
    }
}
