//! Alfred script filter binary for MDN Web Docs.
//!
//! Prints `{"items": [...]}` on stdout. All tracing and error output goes to
//! stderr so that stdout stays a clean JSON channel.

use clap::{ArgAction, Parser};
use mdn_search::{API_URL, DEFAULT_LOCALE, DOC_BASE_URL, SearchConfig};
use tracing_subscriber::EnvFilter;

/// Search MDN Web Docs and print Alfred result items.
///
/// Only long options are recognised, so short hyphen words such as `-V`
/// stay part of the phrase. Use `--` before a phrase starting with `--`.
#[derive(Parser)]
#[command(
    name = "mdn-alfred",
    version,
    about,
    disable_help_flag = true,
    disable_version_flag = true
)]
struct Cli {
    /// Print help.
    #[arg(long, action = ArgAction::Help)]
    help: Option<bool>,

    /// Print version.
    #[arg(long, action = ArgAction::Version)]
    version: Option<bool>,

    /// Locale to search in.
    #[arg(long, default_value = DEFAULT_LOCALE)]
    locale: String,

    /// MDN search API endpoint.
    #[arg(long, default_value = API_URL)]
    api_url: String,

    /// Base URL article links are built against.
    #[arg(long, default_value = DOC_BASE_URL)]
    doc_base_url: String,

    /// Search words; joined with single spaces.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    words: Vec<String>,
}

impl Cli {
    fn config(&self) -> SearchConfig {
        SearchConfig {
            api_url: self.api_url.clone(),
            doc_base_url: self.doc_base_url.clone(),
            locale: self.locale.clone(),
            ..Default::default()
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Users can override with RUST_LOG=mdn_search=trace to see requests.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    let phrase = mdn_alfred::search_phrase(&cli.words);

    if let Err(e) = run(&phrase, &cli.config()).await {
        tracing::debug!(error = %e, "search failed");
        eprintln!("{}", e.diagnostic());
        std::process::exit(1);
    }
}

async fn run(phrase: &str, config: &SearchConfig) -> mdn_alfred::Result<()> {
    let rendered = mdn_alfred::run(phrase, config).await?;
    let stdout = std::io::stdout();
    mdn_alfred::write_output(&mut stdout.lock(), &rendered)
}
