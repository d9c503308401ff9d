// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// Global options configure where and how profiles are fetched. Each one can
// also come from an environment variable (clap's `env` feature), so a mirror
// or a custom User-Agent can be set once in the shell.
//
// Rust concepts:
// - Structs: Custom data types that group related data
// - Enums: Types that can be one of several variants
// - Derive macros: Automatically generate code for our types
// =============================================================================

use clap::{Parser, Subcommand};

use gh_profile::github::DEFAULT_BASE_URL;

/// Sent as User-Agent unless overridden; api.github.com refuses requests without one
const DEFAULT_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

#[derive(Parser, Debug)]
#[command(
    name = "gh-profile",
    version,
    about = "Look up GitHub user profiles from the terminal",
    long_about = "gh-profile fetches a user's public profile from the GitHub API and shows \
                  the avatar URL, login, name, bio and public repository count."
)]
pub struct Cli {
    /// Base URL of the GitHub API
    #[arg(long, global = true, env = "GH_PROFILE_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// User-Agent header sent with every request
    #[arg(long, global = true, env = "GH_PROFILE_USER_AGENT", default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Look up one or more usernames and show the last one to arrive
    ///
    /// Example: gh-profile lookup octocat
    Lookup {
        /// GitHub usernames to look up (fetched concurrently)
        #[arg(required = true)]
        usernames: Vec<String>,

        /// Output the profile as JSON instead of a card
        #[arg(long)]
        json: bool,
    },

    /// Read usernames from stdin, one per line, and keep the card updated
    ///
    /// Example: gh-profile interactive
    Interactive,
}
