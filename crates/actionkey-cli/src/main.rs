mod cmd;
mod locate;
mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "actionkey",
    about = "Build namespaced action keys and their sub-action variants",
    version,
    propagate_version = true
)]
struct Cli {
    /// Action manifest (default: nearest actions.yaml / actions.yml / actions.json)
    #[arg(long, global = true, env = "ACTIONKEY_MANIFEST")]
    manifest: Option<PathBuf>,

    /// Output as JSON
    #[arg(long, global = true, short = 'j')]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a single action key
    Define {
        /// Action type, e.g. CREATE
        #[arg(value_name = "TYPE")]
        action_type: String,

        /// Sub-action suffix (repeatable), e.g. --sub ERROR --sub SUCCESS
        #[arg(long = "sub", value_name = "SUFFIX")]
        subactions: Vec<String>,

        /// Namespace prefix, e.g. my-app/todos
        #[arg(long, short = 'n')]
        namespace: Option<String>,
    },

    /// Show every action declared in the manifest
    Expand {
        /// Manifest file (overrides --manifest)
        #[arg(value_name = "MANIFEST")]
        path: Option<PathBuf>,
    },

    /// List every dispatch key in the manifest, one per line
    Keys {
        /// Manifest file (overrides --manifest)
        #[arg(value_name = "MANIFEST")]
        path: Option<PathBuf>,
    },

    /// Validate the manifest for common mistakes
    Check {
        /// Manifest file (overrides --manifest)
        #[arg(value_name = "MANIFEST")]
        path: Option<PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let global_manifest = cli.manifest;
    let manifest = |positional: Option<PathBuf>| {
        let explicit = positional.or_else(|| global_manifest.clone());
        locate::resolve_manifest(explicit.as_deref(), &cwd)
    };

    let result = match cli.command {
        Commands::Define {
            action_type,
            subactions,
            namespace,
        } => cmd::define::run(&action_type, subactions, namespace.as_deref(), cli.json),
        Commands::Expand { path } => cmd::expand::run(&manifest(path), cli.json),
        Commands::Keys { path } => cmd::keys::run(&manifest(path), cli.json),
        Commands::Check { path } => cmd::check::run(&manifest(path), cli.json),
    };

    if let Err(e) = result {
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
