// src/github/mod.rs
// =============================================================================
// This module talks to the GitHub users API.
//
// Currently implements:
// - Building the endpoint URL for a username
// - Fetching the user record with a single GET request
// - Decoding the JSON body into a typed Profile
// - Mapping every failure onto one RequestError kind
//
// Rust concepts:
// - Modules: Organizing related functionality
// - Public API: What other parts of the app can use
// =============================================================================

mod error;
mod fetch;
mod profile;

// Re-export the public pieces so callers can write `github::Profile`
pub use error::RequestError;
pub use fetch::{decode_profile, fetch_profile, ProfileFetcher, DEFAULT_BASE_URL};
pub use profile::Profile;
