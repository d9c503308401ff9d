// src/lib.rs
// =============================================================================
// Library side of gh-profile: everything except argument parsing.
//
// - github: fetch and decode a user profile (the fetch_profile entry point)
// - display: the single on-screen profile and how it is drawn
// - session: the loop that launches lookups and applies their results
// =============================================================================

pub mod display;
pub mod github;
pub mod session;

#[cfg(test)]
mod test_server;
