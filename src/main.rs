use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::process;

use tracing_subscriber::EnvFilter;

use apigraph::apigraph::ApiDefinition;
use apigraph::config::{save_config, ResolverConfig, CONFIG_FILENAME};
use apigraph::report::{
    format_diagnostics, format_diagnostics_as_json, format_graph_as_json, format_graph_as_markdown,
};

/// Symbol resolution and graph linking for declarative API descriptions.
#[derive(Parser)]
#[command(
    name = "apigraph",
    about = "Resolve a declarative API description into a cross-referenced graph"
)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve a definition and print the resulting graph
    Resolve {
        /// Path to the JSON definition
        definition: PathBuf,
        /// Path to a JSON resolver configuration
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Markdown)]
        format: OutputFormat,
    },
    /// Resolve a definition and print its diagnostics
    Check {
        /// Path to the JSON definition
        definition: PathBuf,
        /// Path to a JSON resolver configuration
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Output as JSON
        #[arg(short, long)]
        json: bool,
        /// Exit with status 1 if any diagnostic was emitted
        #[arg(long)]
        deny_warnings: bool,
    },
    /// Print the fingerprint of the resolved graph
    Fingerprint {
        /// Path to the JSON definition
        definition: PathBuf,
        /// Path to a JSON resolver configuration
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Write the default resolver configuration
    InitConfig {
        /// Destination (default: ./apigraph.json)
        path: Option<PathBuf>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Markdown,
    Json,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match run(cli) {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "apigraph=warn",
        1 => "apigraph=info",
        _ => "apigraph=debug",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> apigraph::errors::Result<i32> {
    match cli.command {
        Commands::Resolve {
            definition,
            config,
            format,
        } => {
            let api = ApiDefinition::load(&definition, config.as_deref())?;
            match format {
                OutputFormat::Json => println!("{}", format_graph_as_json(api.graph())),
                OutputFormat::Markdown => println!("{}", format_graph_as_markdown(api.graph())),
            }
        }
        Commands::Check {
            definition,
            config,
            json,
            deny_warnings,
        } => {
            let api = ApiDefinition::load(&definition, config.as_deref())?;
            let diagnostics = api.diagnostics();
            if json {
                println!("{}", format_diagnostics_as_json(diagnostics));
            } else if diagnostics.is_empty() {
                println!(
                    "No warnings: {} classes, {} endpoints, {} methods",
                    api.stats().class_count,
                    api.stats().end_point_count,
                    api.stats().method_count
                );
            } else {
                print!("{}", format_diagnostics(diagnostics));
            }
            if deny_warnings && !diagnostics.is_empty() {
                return Ok(1);
            }
        }
        Commands::Fingerprint { definition, config } => {
            let api = ApiDefinition::load(&definition, config.as_deref())?;
            println!("{}", api.fingerprint());
        }
        Commands::InitConfig { path } => {
            let path = path.unwrap_or_else(|| PathBuf::from(CONFIG_FILENAME));
            save_config(&path, &ResolverConfig::default())?;
            println!("Wrote default configuration to {}", path.display());
        }
    }
    Ok(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_format_defaults_to_markdown() {
        let cli = Cli::try_parse_from(["apigraph", "resolve", "api.json"]).unwrap();
        match cli.command {
            Commands::Resolve { format, .. } => assert_eq!(format, OutputFormat::Markdown),
            _ => panic!("expected resolve"),
        }
    }

    #[test]
    fn resolve_accepts_json_format() {
        let cli =
            Cli::try_parse_from(["apigraph", "resolve", "api.json", "--format", "json"]).unwrap();
        match cli.command {
            Commands::Resolve { format, .. } => assert_eq!(format, OutputFormat::Json),
            _ => panic!("expected resolve"),
        }
    }

    #[test]
    fn resolve_rejects_unknown_format() {
        let result = Cli::try_parse_from(["apigraph", "resolve", "api.json", "--format", "jsno"]);
        assert!(result.is_err());
    }
}
