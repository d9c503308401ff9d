// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Set up logging (RUST_LOG controls verbosity, default is warnings only)
// 2. Parse command-line arguments using clap
// 3. Dispatch to the appropriate subcommand handler
// 4. Exit with proper code (0 = profile shown, 1 = no lookup succeeded, 2 = error)
// =============================================================================

mod cli; // src/cli.rs - command-line parsing

use clap::Parser;
use cli::{Cli, Commands};
use gh_profile::{display, github, session};

use anyhow::Result;
use log::debug;

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            // Unexpected errors print and exit with code 2
            eprintln!("Error: {}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

// Main application logic
// Returns:
//   Ok(0) = a profile is on screen
//   Ok(1) = no lookup succeeded
//   Err = unexpected error
async fn run() -> Result<i32> {
    let cli = Cli::parse();
    debug!("using {} as {}", cli.base_url, cli.user_agent);

    let fetcher = github::ProfileFetcher::with_user_agent(cli.base_url, &cli.user_agent)?;

    match cli.command {
        Commands::Lookup { usernames, json } => handle_lookup(&fetcher, usernames, json).await,
        Commands::Interactive => handle_interactive(fetcher).await,
    }
}

// Handles the 'lookup' subcommand
// Parameters:
//   fetcher: configured profile fetcher
//   usernames: one or more usernames, looked up concurrently
//   json: whether to output JSON instead of the card
async fn handle_lookup(
    fetcher: &github::ProfileFetcher,
    usernames: Vec<String>,
    json: bool,
) -> Result<i32> {
    let slot = session::lookup_all(fetcher, usernames).await;

    let Some(profile) = slot.current() else {
        // Nothing to show; failures were already logged
        if !json {
            print!("{}", display::render_card(None));
        }
        return Ok(1);
    };

    if json {
        println!("{}", display::render_json(profile)?);
    } else {
        print!("{}", display::render_card(Some(profile)));
    }
    Ok(0)
}

// Handles the 'interactive' subcommand
//
// Reads usernames from stdin until EOF or "quit" and redraws the card on
// stdout whenever a lookup succeeds.
async fn handle_interactive(fetcher: github::ProfileFetcher) -> Result<i32> {
    let mut session = session::Session::new(fetcher);

    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    let mut stdout = std::io::stdout();
    session.run(stdin, &mut stdout).await?;

    if session.slot().current().is_some() {
        Ok(0)
    } else {
        Ok(1)
    }
}
