//! session-primer CLI entry point
//!
//! Renders session primers to stdout; everything else (logs, prompts,
//! status output) stays off the primer path so output can be piped
//! straight into a chat input.

use std::fs;
use std::path::PathBuf;

use clap::Parser;
use colored::Colorize;
use eyre::{Context, Result};
use tracing::info;

use session_primer::cli::{Cli, Command, OutputFormat};
use session_primer::config::Config;
use session_primer::detect::{WorkspaceSignals, detect};
use session_primer::manager::PrimerManager;
use session_primer::profile::JsonFileStore;
use session_primer::workflow::ConsoleWorkflow;
use session_primer::workspace::{enumerate_files, workspace_id, workspace_name};
use session_primer::{TemplateCatalog, UserProfile};

fn setup_logging(verbose: bool) -> Result<()> {
    let log_dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("session-primer")
        .join("logs");

    fs::create_dir_all(&log_dir).context("Failed to create log directory")?;

    // Write to a log file, never stdout - stdout carries the primer
    let level = if verbose { tracing::Level::DEBUG } else { tracing::Level::INFO };
    let log_file = fs::File::create(log_dir.join("primer.log")).context("Failed to create log file")?;

    tracing_subscriber::fmt()
        .with_writer(log_file)
        .with_ansi(false)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .init();

    info!("Logging initialized (verbose: {})", verbose);
    Ok(())
}

/// Workspace context resolved once per invocation
struct WorkspaceContext {
    id: String,
    name: Option<String>,
    signals: WorkspaceSignals,
}

fn resolve_workspace(cli_root: Option<PathBuf>, config: &Config) -> WorkspaceContext {
    let root = cli_root.or_else(|| std::env::current_dir().ok());
    let id = workspace_id(root.as_deref());

    let (name, signals) = match &root {
        Some(root) => {
            let files = enumerate_files(root, config.detection.max_files, &config.detection.skip_dirs);
            (Some(workspace_name(root)), detect(&files))
        }
        None => (None, WorkspaceSignals::default()),
    };

    WorkspaceContext { id, name, signals }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose).context("Failed to setup logging")?;

    let config = Config::load(cli.config.as_ref())?;
    let workspace = resolve_workspace(cli.workspace.clone(), &config);
    info!(workspace = %workspace.id, "workspace resolved");

    let catalog = TemplateCatalog::builtin().context("Built-in template catalog failed validation")?;
    let store = JsonFileStore::open(&config.storage.profiles_path)
        .context(format!("Failed to open profile store at {}", config.storage.profiles_path.display()))?;
    let manager = PrimerManager::new(catalog, store, workspace.id.clone());

    match cli.command {
        Command::Generate { template } => {
            let primer = manager
                .generate(template.as_deref(), &workspace.signals, workspace.name.as_deref())
                .await?;
            println!("{}", primer);
        }

        Command::Configure { template } => {
            let outcome = manager
                .configure(
                    &ConsoleWorkflow::new(),
                    template.as_deref(),
                    &workspace.signals,
                    workspace.name.as_deref(),
                )
                .await?;
            match outcome {
                Some(primer) => {
                    eprintln!();
                    eprintln!("{}", "Session primer saved. Preview:".green().bold());
                    eprintln!();
                    println!("{}", primer);
                }
                None => {
                    eprintln!("{}", "Configuration cancelled, nothing saved.".yellow());
                }
            }
        }

        Command::Templates { format } => print_templates(&manager, format)?,

        Command::Show { format } => {
            let profile = manager.profile().await?;
            print_profile(&workspace.id, profile, format)?;
        }

        Command::Reset => {
            if manager.reset().await? {
                println!("Profile removed for workspace {}", workspace.id);
            } else {
                println!("No profile stored for workspace {}", workspace.id);
            }
        }

        Command::Detect { format } => match format {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&workspace.signals)?),
            OutputFormat::Text => {
                println!("{} {}", "workspace:".bold(), workspace.id);
                println!("{} {}", "languages:".bold(), workspace.signals.languages_summary());
                println!("{} {}", "frameworks:".bold(), workspace.signals.frameworks_summary());
                println!(
                    "{} {}",
                    "suggested template:".bold(),
                    workspace.signals.suggested_template.as_deref().unwrap_or("-")
                );
            }
        },
    }

    Ok(())
}

fn print_templates(manager: &PrimerManager<JsonFileStore>, format: OutputFormat) -> Result<()> {
    let templates = manager.catalog().all();
    match format {
        OutputFormat::Json => {
            let summaries: Vec<serde_json::Value> = templates
                .iter()
                .map(|t| {
                    serde_json::json!({
                        "id": t.id,
                        "name": t.name,
                        "description": t.description,
                        "category": t.category,
                        "placeholders": t.placeholders.len(),
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&summaries)?);
        }
        OutputFormat::Text => {
            for template in templates {
                let category = template.category.map(|c| c.to_string()).unwrap_or_default();
                println!(
                    "{:<24} {:<10} {}",
                    template.id.cyan().bold(),
                    category.dimmed(),
                    template.name
                );
                println!("{:<24} {}", "", template.description.dimmed());
            }
        }
    }
    Ok(())
}

fn print_profile(workspace_id: &str, profile: Option<UserProfile>, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => match profile {
            Some(profile) => println!("{}", serde_json::to_string_pretty(&profile)?),
            None => println!("null"),
        },
        OutputFormat::Text => match profile {
            Some(profile) => {
                println!("{} {}", "workspace:".bold(), profile.workspace_id);
                if let Some(template_id) = &profile.template_id {
                    println!("{} {}", "template:".bold(), template_id);
                }
                println!("{} {}", "updated:".bold(), profile.last_updated.to_rfc3339());
                let mut keys: Vec<&String> = profile.placeholder_values.keys().collect();
                keys.sort();
                for key in keys {
                    let value = &profile.placeholder_values[key];
                    let first_line = value.lines().next().unwrap_or("");
                    let more = if value.lines().count() > 1 { " ..." } else { "" };
                    println!("  {:<22} {}{}", key.cyan(), first_line, more);
                }
            }
            None => println!("No profile stored for workspace {}", workspace_id),
        },
    }
    Ok(())
}
