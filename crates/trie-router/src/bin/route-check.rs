//! route-check CLI
//!
//! Loads a JSON route table and reports how requests would be routed.

use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use trie_router::{ParamConflict, RouteTable, Router};

/// Check requests against a route table.
#[derive(Parser)]
#[command(name = "route-check")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Route table (JSON).
    #[arg(short, long, env = "ROUTE_TABLE", default_value = "routes.json")]
    routes: PathBuf,

    /// Refuse routes that rename an existing parameter slot.
    #[arg(long)]
    reject_conflicts: bool,

    /// Enable verbose output.
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Match one request and print the outcome as JSON.
    Match {
        /// Request method, e.g. GET.
        method: String,
        /// Request path, e.g. /user/42.
        path: String,
    },

    /// Match several requests given as "METHOD /path", one JSON line each.
    Check {
        /// Requests to match.
        #[arg(required = true)]
        requests: Vec<String>,
    },

    /// List registered routes.
    Routes,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let mut table = RouteTable::load(&cli.routes)
        .with_context(|| format!("loading {}", cli.routes.display()))?;
    if cli.reject_conflicts {
        table.config.param_conflict = ParamConflict::Reject;
    }
    let router = table.build()?;
    info!(routes = router.route_count(), "Router ready");

    match cli.command {
        Commands::Match { method, path } => println!("{}", report_line(&router, &method, &path)?),

        Commands::Check { requests } => {
            for request in &requests {
                let Some((method, path)) = parse_request(request) else {
                    bail!("expected \"METHOD /path\", got {request:?}");
                };
                println!("{}", report_line(&router, method, path)?);
            }
        }

        Commands::Routes => {
            for (method, pattern, handler) in router.routes() {
                println!("{method:<8} {pattern:<32} {handler}");
            }
        }
    }

    Ok(())
}

/// Splits a `"METHOD /path"` request into its method and path.
///
/// Surrounding whitespace is ignored and any run of whitespace separates
/// the two parts. Returns `None` if either part is missing.
fn parse_request(request: &str) -> Option<(&str, &str)> {
    let (method, path) = request.trim().split_once(char::is_whitespace)?;
    let path = path.trim();
    if method.is_empty() || path.is_empty() {
        return None;
    }
    Some((method, path))
}

/// Matches one request and renders the outcome as a single JSON line.
fn report_line(router: &Router<String>, method: &str, path: &str) -> anyhow::Result<String> {
    let report = router.match_route(method, path).report();
    Ok(serde_json::to_string(&report)?)
}
