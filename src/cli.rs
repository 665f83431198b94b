//! CLI command definitions and subcommands

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// session-primer - per-workspace session primers for AI chat sessions
#[derive(Parser)]
#[command(
    name = "primer",
    about = "Generate personalized session primers from templates",
    version,
    after_help = "Logs are written to: ~/.local/share/session-primer/logs/primer.log"
)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true, help = "Path to config file")]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    /// Workspace root (defaults to the current directory)
    #[arg(short, long, global = true, help = "Workspace root directory")]
    pub workspace: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands
#[derive(Subcommand)]
pub enum Command {
    /// Render the session primer for this workspace to stdout
    ///
    /// Uses the stored profile when one exists; otherwise auto-configures
    /// from detection signals and defaults, saves, and renders.
    Generate {
        /// Template to render with (a profile bound to a different
        /// template is reseeded and rebound)
        #[arg(short, long)]
        template: Option<String>,
    },

    /// Interactively configure the session primer for this workspace
    Configure {
        /// Template to configure (default: detected suggestion)
        #[arg(short, long)]
        template: Option<String>,
    },

    /// List available templates
    Templates {
        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },

    /// Show the stored profile for this workspace
    Show {
        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },

    /// Remove the stored profile for this workspace
    Reset,

    /// Show detection signals for this workspace
    Detect {
        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },
}

/// Output format for informational commands
#[derive(Clone, Debug, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "plain" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(format!("Unknown format: {}. Use: text or json", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_parses() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_output_format_from_str() {
        assert!(matches!("text".parse::<OutputFormat>(), Ok(OutputFormat::Text)));
        assert!(matches!("JSON".parse::<OutputFormat>(), Ok(OutputFormat::Json)));
        assert!("csv".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_parse_generate_with_template() {
        let cli = Cli::try_parse_from(["primer", "generate", "--template", "python-developer"]).unwrap();
        match cli.command {
            Command::Generate { template } => assert_eq!(template.as_deref(), Some("python-developer")),
            _ => panic!("expected generate"),
        }
    }

    #[test]
    fn test_parse_global_workspace_flag() {
        let cli = Cli::try_parse_from(["primer", "reset", "--workspace", "/tmp/w"]).unwrap();
        assert_eq!(cli.workspace, Some(PathBuf::from("/tmp/w")));
    }
}
