// src/session.rs
// =============================================================================
// The event loop that drives the profile screen.
//
// How it works:
// 1. A username comes in (a line on stdin, or a CLI argument)
// 2. A lookup task is spawned for it right away; input keeps flowing
// 3. When any lookup finishes, its result comes back to the loop
// 4. Success replaces the displayed profile, failure is only logged
//
// Lookups can overlap. They are applied in the order they FINISH, so the
// last one to complete is what stays on screen. The loop is the only place
// that writes to the display slot.
//
// Rust concepts:
// - tokio::spawn / JoinSet: Background tasks we can wait on later
// - tokio::select!: Waiting on input and completions at the same time
// - Streams: For running a batch of lookups concurrently
// =============================================================================

use std::io::Write;

use anyhow::Result;
use futures::stream::{self, StreamExt};
use log::{error, info, warn};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::task::{JoinError, JoinSet};

use crate::display::{render_card, DisplaySlot};
use crate::github::{Profile, ProfileFetcher, RequestError};

/// How many batch lookups may be in flight at once
const MAX_CONCURRENT_LOOKUPS: usize = 8;

/// Typing this instead of a username ends an interactive session
const QUIT_COMMAND: &str = "quit";

/// A finished lookup, on its way back to the loop
#[derive(Debug)]
pub struct Completion {
    pub username: String,
    pub result: Result<Profile, RequestError>,
}

// Applies one finished lookup to the slot
//
// Returns: true if the displayed profile changed
pub fn apply_completion(slot: &mut DisplaySlot, completion: Completion) -> bool {
    match completion.result {
        Ok(profile) => {
            info!("showing profile for {}", profile.login);
            slot.replace(profile);
            true
        }
        Err(e) => {
            // The screen keeps whatever it was showing
            warn!("lookup for '{}' failed ({}): {}", completion.username, e.kind(), e);
            false
        }
    }
}

/// The interactive screen: one display slot plus the lookups feeding it.
///
/// Only the session writes to its slot; lookup tasks hand their results back
/// through the JoinSet.
pub struct Session {
    fetcher: ProfileFetcher,
    slot: DisplaySlot,
    tasks: JoinSet<Completion>,
}

impl Session {
    /// A session with an empty screen.
    pub fn new(fetcher: ProfileFetcher) -> Self {
        Session {
            fetcher,
            slot: DisplaySlot::new(),
            tasks: JoinSet::new(),
        }
    }

    /// What is on screen right now.
    pub fn slot(&self) -> &DisplaySlot {
        &self.slot
    }

    /// Number of lookups that have not been applied yet.
    pub fn in_flight(&self) -> usize {
        self.tasks.len()
    }

    // Starts a lookup in the background
    //
    // An empty username does nothing, the same way an empty search box does
    // nothing. Anything else is passed to the fetcher untouched.
    //
    // Returns: true if a lookup was started
    pub fn submit(&mut self, username: &str) -> bool {
        if username.is_empty() {
            return false;
        }

        info!("looking up {}", username);
        let fetcher = self.fetcher.clone();
        let username = username.to_string();
        self.tasks.spawn(async move {
            let result = fetcher.fetch(&username).await;
            Completion { username, result }
        });
        true
    }

    /// Waits for the next lookup to finish; `None` once nothing is in flight.
    pub async fn next_completion(&mut self) -> Option<Completion> {
        while let Some(joined) = self.tasks.join_next().await {
            if let Some(completion) = unpack(joined) {
                return Some(completion);
            }
        }
        None
    }

    /// Applies a finished lookup; true if the screen changed.
    pub fn apply(&mut self, completion: Completion) -> bool {
        apply_completion(&mut self.slot, completion)
    }

    /// Waits for every outstanding lookup and applies it.
    pub async fn settle(&mut self) {
        while let Some(completion) = self.next_completion().await {
            self.apply(completion);
        }
    }

    // Runs the interactive screen
    //
    // Parameters:
    //   input: one username per line ("quit" stops reading)
    //   output: where the card is drawn, redrawn after every update
    //
    // When input ends, lookups still in flight are allowed to finish so
    // their results are not lost.
    pub async fn run<R, W>(&mut self, input: R, output: &mut W) -> Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: Write,
    {
        let mut lines = input.lines();

        draw(output, self.slot.current())?;
        writeln!(output, "Type a GitHub username and press Enter ('{}' to exit)", QUIT_COMMAND)?;
        output.flush()?;

        loop {
            tokio::select! {
                line = lines.next_line() => {
                    match line? {
                        Some(line) if line == QUIT_COMMAND => break,
                        Some(line) => {
                            if self.submit(&line) {
                                writeln!(output, "Searching for: {}", line)?;
                                output.flush()?;
                            }
                        }
                        None => break,
                    }
                }
                Some(joined) = self.tasks.join_next() => {
                    if let Some(completion) = unpack(joined) {
                        if self.apply(completion) {
                            draw(output, self.slot.current())?;
                        }
                    }
                }
            }
        }

        while let Some(completion) = self.next_completion().await {
            if self.apply(completion) {
                draw(output, self.slot.current())?;
            }
        }

        Ok(())
    }
}

// Looks up a batch of usernames concurrently and returns the final screen
//
// Results are applied as they complete (buffer_unordered does not keep the
// input order), so the slot ends up holding the last successful lookup to
// finish.
pub async fn lookup_all(fetcher: &ProfileFetcher, usernames: Vec<String>) -> DisplaySlot {
    let lookups = usernames
        .into_iter()
        .filter(|username| !username.is_empty())
        .map(|username| {
            let fetcher = fetcher.clone();
            async move {
                let result = fetcher.fetch(&username).await;
                Completion { username, result }
            }
        });

    let mut completions = stream::iter(lookups).buffer_unordered(MAX_CONCURRENT_LOOKUPS);

    let mut slot = DisplaySlot::new();
    while let Some(completion) = completions.next().await {
        apply_completion(&mut slot, completion);
    }
    slot
}

fn unpack(joined: std::result::Result<Completion, JoinError>) -> Option<Completion> {
    match joined {
        Ok(completion) => Some(completion),
        Err(e) => {
            error!("lookup task did not finish: {}", e);
            None
        }
    }
}

fn draw<W: Write>(output: &mut W, profile: Option<&Profile>) -> Result<()> {
    output.write_all(render_card(profile).as_bytes())?;
    output.flush()?;
    Ok(())
}
