// src/github/profile.rs
// =============================================================================
// The Profile record returned by a successful lookup.
//
// The wire format uses snake_case keys (avatar_url, public_repos), which are
// also the Rust field names, so serde needs no renaming.
// =============================================================================

use serde::{Deserialize, Serialize};

/// A GitHub user as shown on the profile card.
///
/// Every field is required. A body where `name` or `bio` is `null` does not
/// decode, and neither does a negative repository count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    /// Login as returned by the service (may differ in case from the query)
    pub login: String,
    /// Display name
    pub name: String,
    /// Link to the avatar image
    pub avatar_url: String,
    /// Free-form bio, may be empty
    pub bio: String,
    /// Number of public repositories
    pub public_repos: u64,
}
