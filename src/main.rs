//! Tikloader - TikTok video source finder
//!
//! Sends a TikTok link to a resolver backend and lists the direct media
//! sources it returns, either in a small desktop window or on stdout.

use anyhow::{bail, Result};
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tikloader::app::{self, HeadlessOptions};
use tikloader::extractor::BackendClient;
use tikloader::gui::clipboard;
use tikloader::utils::AppSettings;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(version, about = "Find direct download sources for a TikTok video")]
struct Args {
    /// TikTok link to start with (prefills the window, or is fetched with --headless)
    url: Option<String>,

    /// Fetch once and print the sources instead of opening a window
    #[arg(long)]
    headless: bool,

    /// Take the link from the clipboard if it contains a TikTok URL
    #[arg(long)]
    paste: bool,

    /// Print the result as JSON (headless only)
    #[arg(long, requires = "headless")]
    json: bool,

    /// Open the N-th source (1-based) in the default browser (headless only)
    #[arg(long, value_name = "N", requires = "headless")]
    open: Option<usize>,

    /// Path to a JSON config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the resolver backend base URL
    #[arg(long)]
    backend_url: Option<String>,

    /// Override the backend endpoint path
    #[arg(long)]
    endpoint: Option<String>,

    /// Request timeout in seconds (0 disables it)
    #[arg(long, value_name = "SECS")]
    timeout: Option<u64>,

    /// Verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let default_filter = if args.verbose {
        "tikloader=debug"
    } else {
        "tikloader=info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .init();

    let mut settings = AppSettings::load(args.config.as_deref())?;
    if let Some(url) = args.backend_url {
        settings.backend_url = url;
    }
    if let Some(endpoint) = args.endpoint {
        settings.endpoint_path = endpoint;
    }
    if let Some(secs) = args.timeout {
        settings.request_timeout_secs = Some(secs);
    }
    let settings = settings.validate()?;

    let client = Arc::new(BackendClient::new(&settings)?);

    let mut initial_url = args.url;
    if args.paste {
        match clipboard::get_tiktok_link() {
            Ok(Some(link)) => initial_url = Some(link),
            Ok(None) => eprintln!("Clipboard does not contain a TikTok link"),
            Err(e) => eprintln!("{}", e),
        }
    }

    if !args.headless {
        return app::run_gui(client, initial_url);
    }

    let Some(url) = initial_url else {
        bail!("--headless needs a URL argument or --paste");
    };

    let options = HeadlessOptions {
        json: args.json,
        open: args.open,
    };

    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(async move {
        let mut stdout = std::io::stdout();
        app::run_headless(client.as_ref(), &url, &options, &mut stdout).await
    })?;

    Ok(())
}
