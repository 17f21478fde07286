// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// Subcommands map onto the two workflows:
// - shorten: the submission page (long URL -> short link)
// - open:    visiting a path (short code -> destination)
//
// The global flags configure where the API lives and which origin short
// links are built on. Each one can also come from the environment, thanks
// to clap's `env` feature.
// =============================================================================

use crate::config::{DEFAULT_API_URL, DEFAULT_ORIGIN};
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "linkcrush",
    version,
    about = "Shorten URLs and follow short links",
    long_about = "linkcrush talks to a linkcrush shortening API: it turns long URLs into short \
                  links on your origin, and resolves short links back to where they point."
)]
pub struct Cli {
    /// Base address of the shortening API
    #[arg(long, env = "LINKCRUSH_API_URL", default_value = DEFAULT_API_URL, global = true)]
    pub api_url: String,

    /// Origin that short links are built on (e.g. https://sho.rt)
    #[arg(long, env = "LINKCRUSH_ORIGIN", default_value = DEFAULT_ORIGIN, global = true)]
    pub origin: String,

    /// Give up on a request after this many seconds (default: wait forever)
    #[arg(long, value_name = "SECS", value_parser = clap::value_parser!(u64).range(1..), global = true)]
    pub timeout: Option<u64>,

    /// Print destinations instead of opening them in the browser
    #[arg(long, global = true)]
    pub no_browser: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Shorten a long URL
    ///
    /// Example: linkcrush shorten https://example.com/a/very/long/path --copy
    Shorten {
        /// The URL to shorten (sent as typed; the API validates it)
        url: String,

        /// Copy the short link to the clipboard
        #[arg(long)]
        copy: bool,

        /// Open the short link's destination in a new browser window
        #[arg(long)]
        open: bool,

        /// Print the final state as JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Follow a short link
    ///
    /// Accepts a path ("/abc123"), a bare code ("abc123") or a full short
    /// link ("https://sho.rt/abc123"). "/" is the submission page and
    /// resolves nothing.
    #[command(alias = "resolve")]
    Open {
        /// Path or short link to follow
        path: String,
    },
}
