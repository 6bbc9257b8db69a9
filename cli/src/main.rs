//! CLI for the organization repository lister.
//!
//! Prints `{org}/{repo}, {created_at}` for every repository on the first
//! listing page of each organization. Logs go to stderr.

use clap::Parser;
use org_repo_lister::{
    default_organizations, load_organizations, validate_organizations, ListerConfig, ListerError,
    Lister, ListingSummary, DEFAULT_ORGANIZATIONS,
};
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use url::Url;

/// Org Repo Lister - Print repositories of GitHub organizations with their creation time.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Organization to list. Repeat to list several; overrides the organizations file.
    #[arg(long = "org", value_name = "NAME")]
    orgs: Vec<String>,

    /// TOML file with an `organizations` array replacing the built-in list.
    #[arg(long, env = "ORG_REPO_LISTER_ORGANIZATIONS")]
    organizations_file: Option<PathBuf>,

    /// Root of the GitHub REST API.
    #[arg(long, env = "GITHUB_API_URL", default_value = "https://api.github.com")]
    api_url: Url,

    /// Repositories requested per organization. Only the first page is fetched.
    #[arg(long, default_value_t = 200)]
    per_page: u8,
}

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize tracing
    init_tracing();

    // rustls needs a process-wide provider before the client is built
    let _ = rustls::crypto::aws_lc_rs::default_provider().install_default();

    let args = Args::parse();

    match run(args).await {
        Ok(summary) => {
            if summary.repositories_printed == 0 {
                info!("No repositories found");
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "Listing failed");
            ExitCode::from(1)
        }
    }
}

/// Initializes tracing with environment filter support.
///
/// Sets up the global tracing subscriber with:
/// - Compact log formatting on stderr, keeping stdout for repository lines
/// - Log level filtering via `RUST_LOG` env var (defaults to "info")
fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .compact()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
}

/// Resolves the organization list: `--org` first, then the file, then the built-in list.
fn resolve_organizations(args: &Args) -> Result<Vec<String>, ListerError> {
    if !args.orgs.is_empty() {
        validate_organizations(&args.orgs, "--org")?;
        return Ok(args.orgs.clone());
    }

    if let Some(path) = &args.organizations_file {
        return Ok(load_organizations(path)?);
    }

    info!(count = DEFAULT_ORGANIZATIONS.len(), "Using built-in organizations");
    Ok(default_organizations())
}

/// Main execution logic.
async fn run(args: Args) -> Result<ListingSummary, ListerError> {
    let organizations = resolve_organizations(&args)?;
    let config = ListerConfig::new(organizations)
        .with_per_page(args.per_page)
        .with_api_url(args.api_url);
    let lister = Lister::new(config)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let summary = lister.run(&mut out).await?;
    out.flush()?;
    Ok(summary)
}
