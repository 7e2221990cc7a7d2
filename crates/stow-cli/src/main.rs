//! Stow - registry reference inspector
//!
//! Usage:
//!   stow deps <SPECIFIER>...   # Dependencies required by import specifiers
//!   stow ref <REFERENCE>...    # How each reference would be fetched
//!   stow item <FILE>           # Install route for a local registry item

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use console::style;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use stow_core::StowError;
use stow_core::config::{StowConfig, global_config_path, load_layered, parse_stow_toml};
use stow_core::reference::{ReferenceKind, classify_reference, resolve_local_path};
use stow_core::registry::{InstallRoute, RegistryItem, plan_install};
use stow_core::specifier::collect_dependencies;

#[derive(Parser)]
#[command(name = "stow")]
#[command(about = "Component registry reference inspector", long_about = None)]
struct Cli {
    /// Config file (defaults to the global stow.toml plus ./stow.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the packages that import specifiers require
    Deps {
        /// Import specifiers (e.g. "@radix-ui/react-dialog", "lodash/merge")
        #[arg(required = true)]
        specifiers: Vec<String>,

        /// Output format
        #[arg(short, long, default_value = "table")]
        format: OutputFormat,
    },

    /// Classify references as URL, local item file, or item name
    #[command(name = "ref")]
    Ref {
        /// References to classify
        #[arg(required = true)]
        references: Vec<String>,

        /// Output format
        #[arg(short, long, default_value = "table")]
        format: OutputFormat,
    },

    /// Show how a local registry item file would be installed
    Item {
        /// Path to the registry item JSON file
        reference: String,

        /// Output format
        #[arg(short, long, default_value = "table")]
        format: OutputFormat,
    },
}

#[derive(Clone, Copy, ValueEnum, Default)]
enum OutputFormat {
    /// Human-readable table
    #[default]
    Table,
    /// Machine-readable JSON
    Json,
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "stow=info,stow_core=info,warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let project_root = std::env::current_dir().context("Failed to read current directory")?;

    match cli.command {
        Commands::Deps { specifiers, format } => {
            let config = load_config(cli.config.as_deref(), &project_root)?;
            run_deps(&config, &specifiers, format)?;
        }
        Commands::Ref { references, format } => {
            run_ref(&references, &project_root, format)?;
        }
        Commands::Item { reference, format } => {
            run_item(&reference, &project_root, format)?;
        }
    }

    Ok(())
}

fn load_config(explicit: Option<&Path>, project_root: &Path) -> Result<StowConfig> {
    match explicit {
        Some(path) => parse_stow_toml(path),
        None => load_layered(global_config_path().as_deref(), project_root),
    }
}

fn run_deps(config: &StowConfig, specifiers: &[String], format: OutputFormat) -> Result<()> {
    let classifier = config.specifier_classifier();
    let dependencies = collect_dependencies(&classifier, specifiers.iter().map(String::as_str));
    debug!(count = dependencies.len(), "Collected dependencies");

    match format {
        OutputFormat::Table => {
            if dependencies.is_empty() {
                println!("• No dependencies required");
            }
            for dependency in &dependencies {
                println!("{}", dependency);
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&dependencies)?);
        }
    }

    Ok(())
}

fn run_ref(references: &[String], project_root: &Path, format: OutputFormat) -> Result<()> {
    let mut rows = Vec::with_capacity(references.len());
    for reference in references {
        let kind = classify_reference(reference);
        let path = match kind {
            ReferenceKind::LocalFile => Some(resolve_local_path(reference, project_root)?),
            ReferenceKind::Url | ReferenceKind::ItemName => None,
        };
        rows.push((reference, kind, path));
    }

    match format {
        OutputFormat::Table => {
            let width = rows.iter().map(|(r, _, _)| r.len()).max().unwrap_or(0);
            for (reference, kind, path) in &rows {
                let kind_label = match kind {
                    ReferenceKind::Url => style(kind.as_str()).cyan(),
                    ReferenceKind::LocalFile => style(kind.as_str()).green(),
                    ReferenceKind::ItemName => style(kind.as_str()).yellow(),
                };
                match path {
                    Some(path) => println!(
                        "{:width$}  {}  {}",
                        reference,
                        kind_label,
                        path.display(),
                        width = width
                    ),
                    None => println!("{:width$}  {}", reference, kind_label, width = width),
                }
            }
        }
        OutputFormat::Json => {
            let output: Vec<_> = rows
                .iter()
                .map(|(reference, kind, path)| {
                    serde_json::json!({
                        "reference": reference,
                        "kind": kind,
                        "path": path.as_ref().map(|p| p.display().to_string()),
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    Ok(())
}

fn run_item(reference: &str, project_root: &Path, format: OutputFormat) -> Result<()> {
    match classify_reference(reference) {
        ReferenceKind::LocalFile => {}
        ReferenceKind::Url => {
            return Err(StowError::RemoteReference(reference.to_string()).into());
        }
        ReferenceKind::ItemName => {
            return Err(StowError::NotALocalFile(reference.to_string()).into());
        }
    }

    let path = resolve_local_path(reference, project_root)?;
    let content = std::fs::read(&path)
        .with_context(|| format!("Failed to read registry item: {}", path.display()))?;
    let item = RegistryItem::from_json_slice(&content)
        .with_context(|| format!("Failed to parse registry item: {}", path.display()))?;

    let route = plan_install(&item);

    match format {
        OutputFormat::Table => print_route_table(&item, &route),
        OutputFormat::Json => {
            let output = serde_json::json!({
                "name": item.name,
                "universal": route.is_direct(),
                "install": route,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    Ok(())
}

fn print_route_table(item: &RegistryItem, route: &InstallRoute) {
    match route {
        InstallRoute::Direct(copies) => {
            println!(
                "✓ '{}' is universal: {} file(s) copied directly",
                item.name,
                copies.len()
            );
            for copy in copies {
                println!("  {} → {}", copy.source, style(&copy.target).green());
            }
        }
        InstallRoute::Pipeline => {
            println!(
                "• '{}' is not universal: {} file(s) go through the install pipeline",
                item.name,
                item.files.len()
            );
        }
    }
}
