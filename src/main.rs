use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use shakesearch::corpus::Corpus;
use shakesearch::search::Searcher;
use shakesearch::server::{self, ServerConfig};
use shakesearch::utils::Spinner;
use shakesearch::{index, output};
use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Corpus file read when `--corpus` is not given
const DEFAULT_CORPUS: &str = "completeworks.txt";

#[derive(Parser)]
#[command(name = "shakesearch")]
#[command(about = "Case-insensitive paragraph search over a single text corpus")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Corpus file to load
    #[arg(short, long, global = true, default_value = DEFAULT_CORPUS)]
    corpus: PathBuf,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the search API and static files (default)
    Serve {
        /// Directory of static assets served at /
        #[arg(long, default_value = server::config::DEFAULT_STATIC_DIR)]
        static_dir: PathBuf,

        /// Port to listen on (overrides the PORT environment variable)
        #[arg(short, long)]
        port: Option<u16>,
    },
    /// Run a single query and print the excerpts
    Search {
        /// Search query
        #[arg(required = true, trailing_var_arg = true)]
        query: Vec<String>,

        /// Maximum number of excerpts
        #[arg(short, long)]
        limit: Option<usize>,

        /// Only print the number of matches
        #[arg(long)]
        count: bool,

        /// Disable colored output
        #[arg(long)]
        no_color: bool,
    },
    /// Show corpus and index statistics
    Stats,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Serve { static_dir, port }) => {
            run_server(&cli.corpus, static_dir, port)?;
        }
        None => {
            run_server(
                &cli.corpus,
                PathBuf::from(server::config::DEFAULT_STATIC_DIR),
                None,
            )?;
        }
        Some(Commands::Search {
            query,
            limit,
            count,
            no_color,
        }) => {
            let (searcher, _) = load_searcher(&cli.corpus)?;
            let query = query.join(" ");

            if count {
                output::print_match_count(&query, searcher.count(&query))?;
            } else {
                let excerpts = searcher.find(&query, limit);
                output::print_excerpts(&excerpts, !no_color)?;
            }
        }
        Some(Commands::Stats) => {
            let (searcher, build_time) = load_searcher(&cli.corpus)?;
            index::stats::show_stats(&cli.corpus, &searcher, build_time);
        }
    }

    Ok(())
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "shakesearch=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Load the corpus and build the index; failure here is fatal
fn load_searcher(corpus: &Path) -> Result<(Searcher, Duration)> {
    let spinner = Spinner::start(
        &format!("Loading {}", corpus.display()),
        std::io::stderr().is_terminal(),
    );
    let start = Instant::now();

    let loaded = Corpus::open(corpus)
        .with_context(|| format!("Cannot start without corpus {}", corpus.display()))?;
    info!(bytes = loaded.len(), paragraphs = loaded.paragraphs().len(), "corpus loaded");

    spinner.set_message("Building index");
    let searcher = Searcher::new(loaded);

    spinner.finish();
    Ok((searcher, start.elapsed()))
}

fn run_server(corpus: &Path, static_dir: PathBuf, port: Option<u16>) -> Result<()> {
    let mut config = ServerConfig::from_env()?;
    config.static_dir = static_dir;
    if let Some(port) = port {
        config.port = port;
    }

    let (searcher, _) = load_searcher(corpus)?;
    let searcher = Arc::new(searcher);

    let runtime = tokio::runtime::Runtime::new().context("Failed to start async runtime")?;
    runtime.block_on(server::serve(&config, searcher))
}
