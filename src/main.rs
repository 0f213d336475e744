use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use proxy_list::{ProxyParser, ProxyStore, ProxyType, ReportConfig, ReportWriter};
use std::path::PathBuf;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Deduplicates proxy lists into per-protocol files and refreshes a README summary
#[derive(Parser)]
#[command(name = "proxy-list")]
#[command(about = "Deduplicates proxy lists into per-protocol files and refreshes a README summary")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the per-protocol lists, badge, and README summary
    Report {
        /// Proxy list files to ingest
        #[arg(required = true)]
        inputs: Vec<PathBuf>,
        /// Output directory for the list files and badge
        #[arg(short, long, default_value = "list")]
        output: PathBuf,
        /// Protocol for lines without a scheme (http, https, socks4, socks5, ...)
        #[arg(short = 't', long, default_value = "http")]
        proxy_type: String,
        /// Document to update (defaults to README.md next to the output directory)
        #[arg(long)]
        readme: Option<PathBuf>,
        /// Don't fetch the total badge
        #[arg(long)]
        no_badge: bool,
        /// Badge request timeout in seconds
        #[arg(long, default_value = "10")]
        timeout: u64,
        /// Base URL of the badge service
        #[arg(long)]
        badge_base: Option<String>,
        /// Base URL of the download links in the README table
        #[arg(long)]
        download_base: Option<String>,
    },
    /// Print the deduplicated records of a list file in report order
    Parse {
        /// Input file containing proxies
        input: PathBuf,
        /// Protocol for lines without a scheme
        #[arg(short = 't', long, default_value = "http")]
        proxy_type: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Report {
            inputs,
            output,
            proxy_type,
            readme,
            no_badge,
            timeout,
            badge_base,
            download_base,
        } => {
            let ptype = parse_proxy_type(&proxy_type);
            let mut store = ProxyStore::new();
            for input in &inputs {
                let proxies = ProxyParser::parse_file(input, &ptype)
                    .with_context(|| format!("failed to read {}", input.display()))?;
                info!(path = %input.display(), count = proxies.len(), "loaded proxies");
                store.extend(proxies);
            }
            info!(unique = store.len(), "deduplicated proxies");

            let mut config = ReportConfig::new()
                .with_output_dir(output)
                .with_fetch_badge(!no_badge)
                .with_badge_timeout(Duration::from_secs(timeout));
            if let Some(path) = readme {
                config = config.with_document_path(path);
            }
            if let Some(url) = badge_base {
                config = config.with_badge_base_url(url);
            }
            if let Some(url) = download_base {
                config = config.with_download_base_url(url);
            }

            let writer = ReportWriter::new(config)?;
            let outcome = writer.generate(&store).await;

            for (protocol, count) in &outcome.counters {
                println!("{:<8} {}", protocol.to_uppercase(), count);
            }
            println!("Total: {}", outcome.total);
            println!(
                "Badge: {}, README: {}",
                if outcome.badge_written { "written" } else { "skipped" },
                if outcome.document_updated { "updated" } else { "skipped" }
            );

            if !outcome.is_clean() {
                eprintln!("\n{} warning(s):", outcome.warnings.len());
                for warning in &outcome.warnings {
                    eprintln!("  {}", warning);
                }
            }
        }
        Commands::Parse { input, proxy_type } => {
            let ptype = parse_proxy_type(&proxy_type);
            let proxies = ProxyParser::parse_file(&input, &ptype)
                .with_context(|| format!("failed to read {}", input.display()))?;
            let parsed = proxies.len();
            let store: ProxyStore = proxies.into_iter().collect();

            for (_, proxy) in store.snapshot() {
                println!("{}", proxy);
            }
            eprintln!(
                "Parsed {} proxies from {:?}, {} unique",
                parsed,
                input,
                store.len()
            );
        }
    }

    Ok(())
}

fn parse_proxy_type(s: &str) -> ProxyType {
    // Unknown names become ProxyType::Other, parsing never fails
    s.parse().unwrap_or_default()
}
