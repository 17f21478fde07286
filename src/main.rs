// src/main.rs
// =============================================================================
// This is the entry point of the linkcrush CLI.
//
// What happens here:
// 1. Load .env (if any), parse command-line arguments, set up logging
// 2. Build the configuration and the collaborators (API client, notifier,
//    navigator, clipboard)
// 3. Dispatch to the workflow for the subcommand
// 4. Exit with proper code (0 = success, 1 = handled failure, 2 = error,
//    130 = interrupted)
//
// Everything runs on a single-threaded tokio runtime: the only waiting we
// do is on network requests and the clipboard, never on CPU work.
// =============================================================================

mod api;
mod cli;
mod clipboard;
mod config;
mod error;
mod navigate;
mod notify;
mod workflow;

#[cfg(test)]
mod testing;

use anyhow::{Context, Result};
use api::{HttpApiClient, ShortenApi};
use clap::Parser;
use cli::{Cli, Commands};
use clipboard::SystemClipboard;
use config::Config;
use navigate::{Navigation, Navigator, Route, SystemNavigator};
use notify::ConsoleNotifier;
use std::future::Future;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;
use workflow::{Resolution, Resolver, Submitter};

const EXIT_INTERRUPTED: i32 = 130;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            // {:#} prints the whole context chain on one line
            eprintln!("Error: {:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

// Returns:
//   Ok(0) = the workflow ended in its success state
//   Ok(1) = the workflow ended in a handled failure (already notified)
//   Ok(130) = interrupted with Ctrl-C
//   Err = setup failed
async fn run() -> Result<i32> {
    // A missing .env file is the normal case
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing();

    let config = Config::from_cli(&cli)?;
    tracing::debug!(?config, "configuration loaded");

    let api: Arc<dyn ShortenApi> = Arc::new(
        HttpApiClient::new(&config.api_base, config.request_timeout)
            .context("failed to build HTTP client")?,
    );
    let navigator = Arc::new(SystemNavigator::new(config.open_browser));

    match cli.command {
        Commands::Shorten { url, copy, open, json } => {
            let notifier = Arc::new(ConsoleNotifier::new(json));
            let submitter = Submitter::new(
                api,
                notifier,
                navigator,
                Arc::new(SystemClipboard),
                config.origin,
            );
            handle_shorten(&submitter, &url, copy, open, json).await
        }
        Commands::Open { path } => {
            let notifier = Arc::new(ConsoleNotifier::new(false));
            let resolver = Resolver::new(api, notifier, navigator.clone());
            handle_open(&resolver, navigator.as_ref(), &path).await
        }
    }
}

// Logs go to stderr so stdout only carries results
//
// RUST_LOG controls the level, e.g. RUST_LOG=linkcrush=debug
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

// Runs `work` unless Ctrl-C comes first
//
// Returns None when interrupted; `on_interrupt` runs before that.
async fn until_interrupted<T>(work: impl Future<Output = T>, on_interrupt: impl FnOnce()) -> Option<T> {
    tokio::select! {
        output = work => Some(output),
        _ = tokio::signal::ctrl_c() => {
            on_interrupt();
            eprintln!("\n⏹️  Interrupted");
            None
        }
    }
}

// Handles the 'shorten' subcommand
async fn handle_shorten(
    submitter: &Submitter,
    url: &str,
    copy: bool,
    open: bool,
    json: bool,
) -> Result<i32> {
    let work = async {
        let short_link = submitter.submit(url).await.ok()?;

        if copy {
            // Nothing to do on error: the only failure is "no short link"
            submitter.copy_short_link().await.ok();
        }
        if open {
            // Failures were already reported as notifications
            submitter.follow_short_link().await.ok();
        }

        Some(short_link)
    };

    let Some(outcome) = until_interrupted(work, || submitter.dispose()).await else {
        return Ok(EXIT_INTERRUPTED);
    };

    let state = submitter.state();
    if json {
        println!("{}", serde_json::to_string_pretty(&state)?);
    } else if let Some(short_link) = &outcome {
        println!("\n🔗 {}", short_link);
    }

    Ok(if outcome.is_some() { 0 } else { 1 })
}

// Handles the 'open' subcommand
//
// The path goes through the routing surface first: only a single path
// segment reaches the resolver.
async fn handle_open(resolver: &Resolver, navigator: &dyn Navigator, path: &str) -> Result<i32> {
    let code = match Route::parse(path) {
        Route::Home => {
            println!("🏠 \"/\" is the submission page, there is nothing to resolve.");
            println!("   Try: linkcrush shorten <URL>");
            return Ok(0);
        }
        Route::Unknown(path) => {
            eprintln!("⚠️  {} is not a short link", path);
            navigator.navigate(Navigation::root());
            return Ok(1);
        }
        Route::ShortCode(code) => code,
    };

    let Some(resolution) = until_interrupted(resolver.activate(Some(code)), || resolver.dispose()).await
    else {
        return Ok(EXIT_INTERRUPTED);
    };

    Ok(exit_code_for(&resolution))
}

fn exit_code_for(resolution: &Resolution) -> i32 {
    match resolution {
        Resolution::Idle | Resolution::Unchanged | Resolution::Redirected(_) => 0,
        Resolution::NotFound | Resolution::Failed(_) => 1,
    }
}

// -----------------------------------------------------------------------------
// NOTES:
//
// 1. Why Arc<dyn Trait> for the collaborators?
//    - The workflows only know the traits (ShortenApi, Notifier, ...)
//    - main picks the real implementations, tests pick recording ones
//    - Arc lets the resolver and the CLI code share the same navigator
//
// 2. Why flavor = "current_thread"?
//    - There is never more than a request or two in flight
//    - All of it is I/O, so one thread is plenty
//
// 3. What does tokio::select! do here?
//    - Runs the workflow and waits for Ctrl-C at the same time
//    - Whichever finishes first wins; the other future is dropped
//    - On Ctrl-C we dispose the workflow first, so nothing it does later
//      reaches the terminal
// -----------------------------------------------------------------------------
