// src/github/fetch.rs
// =============================================================================
// This module fetches a single user profile from the GitHub users API.
//
// Strategy:
// - Substitute the username into "{base}/users/{username}"
// - Send one GET request and wait for it
// - Accept only HTTP 200, then decode the JSON body into a Profile
//
// Each step has its own failure kind (see error.rs), so the caller can tell
// a bad username apart from a bad response or a broken body.
//
// Rust concepts:
// - async functions: For network I/O
// - Result with a custom error enum: For precise failure reporting
// - map_err: To translate library errors into our own kinds
// =============================================================================

use log::debug;
use reqwest::{Client, StatusCode};
use url::Url;

use super::error::RequestError;
use super::profile::Profile;

/// Where the public GitHub API lives
pub const DEFAULT_BASE_URL: &str = "https://api.github.com";

// Fetches the profile for `username` from api.github.com
//
// This is the plain form of the lookup: a fresh client with reqwest's
// defaults, no extra headers, no timeout, no authentication.
//
// Example:
//   fetch_profile("octocat").await -> Ok(Profile { login: "octocat", .. })
pub async fn fetch_profile(username: &str) -> Result<Profile, RequestError> {
    ProfileFetcher::default().fetch(username).await
}

/// A reusable profile fetcher.
///
/// Holds one HTTP client (connection pooling) and the base URL the endpoint
/// is built from. Cloning is cheap, so every lookup task can take its own copy.
#[derive(Debug, Clone)]
pub struct ProfileFetcher {
    client: Client,
    base_url: String,
}

impl Default for ProfileFetcher {
    fn default() -> Self {
        ProfileFetcher::new(DEFAULT_BASE_URL)
    }
}

impl ProfileFetcher {
    /// Creates a fetcher with reqwest's default client against `base_url`.
    pub fn new(base_url: impl Into<String>) -> Self {
        ProfileFetcher {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Creates a fetcher that sends `user_agent` with every request.
    ///
    /// api.github.com rejects requests without a User-Agent, so the CLI
    /// always goes through here.
    pub fn with_user_agent(base_url: impl Into<String>, user_agent: &str) -> anyhow::Result<Self> {
        let client = Client::builder().user_agent(user_agent).build()?;
        Ok(ProfileFetcher {
            client,
            base_url: base_url.into(),
        })
    }

    // Builds the endpoint URL for a username
    //
    // The username is inserted as-is, without percent-encoding. Characters
    // like '?' or '#' therefore change the meaning of the URL; that matches
    // how lookups have always behaved.
    //
    // The url crate would quietly percent-encode characters like ' ' or '<'
    // instead of rejecting them, so the username is checked first.
    //
    // Returns: MalformedEndpoint if the result is not a valid URL
    pub fn endpoint(&self, username: &str) -> Result<Url, RequestError> {
        if !is_uri_text(username) {
            return Err(RequestError::MalformedEndpoint);
        }

        let raw = format!("{}/users/{}", self.base_url.trim_end_matches('/'), username);
        Url::parse(&raw).map_err(|_| RequestError::MalformedEndpoint)
    }

    // Looks up one username
    //
    // Steps (each failure maps to exactly one kind):
    //   1. endpoint()           -> MalformedEndpoint
    //   2. GET                  -> Transport if the request never completes
    //   3. status must be 200   -> UnacceptableResponse otherwise
    //   4. read + decode body   -> Transport / UndecodableBody
    pub async fn fetch(&self, username: &str) -> Result<Profile, RequestError> {
        let url = self.endpoint(username)?;
        debug!("GET {}", url);

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(RequestError::Transport)?;

        let status = response.status();
        debug!("{} answered HTTP {}", url, status.as_u16());

        // Only an exact 200 counts; 201, 204, 304 and friends are all rejected
        if status != StatusCode::OK {
            return Err(RequestError::UnacceptableResponse);
        }

        let body = response.bytes().await.map_err(RequestError::Transport)?;
        decode_profile(&body)
    }
}

// Checks that `s` only uses characters RFC 3986 allows in a URL
//
// Allowed: ASCII letters and digits, the unreserved "-._~", the reserved
// ":/?#[]@!$&'()*+,;=", and '%' when followed by two hex digits.
fn is_uri_text(s: &str) -> bool {
    let bytes = s.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        let b = bytes[i];
        if b == b'%' {
            let escaped = bytes
                .get(i + 1..i + 3)
                .map_or(false, |hex| hex.iter().all(u8::is_ascii_hexdigit));
            if !escaped {
                return false;
            }
            i += 3;
            continue;
        }
        if !(b.is_ascii_alphanumeric() || b"-._~:/?#[]@!$&'()*+,;=".contains(&b)) {
            return false;
        }
        i += 1;
    }
    true
}

// Decodes a response body into a Profile
//
// Any JSON error (syntax, missing field, wrong type, null where a string is
// required) becomes UndecodableBody.
pub fn decode_profile(body: &[u8]) -> Result<Profile, RequestError> {
    serde_json::from_slice(body).map_err(|e| {
        debug!("could not decode profile: {}", e);
        RequestError::UndecodableBody
    })
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why a custom error enum instead of anyhow here?
//    - anyhow is great when you only need to print the error
//    - Our caller needs to know WHICH step failed
//    - An enum lets the caller `match` on the kind
//
// 2. What does map_err do?
//    - Converts the error inside a Result into another error
//    - Ok values pass through untouched
//    - RequestError::Transport is itself a function (a tuple variant
//      constructor), so it can be passed straight to map_err
//
// 3. Why read bytes() and decode ourselves instead of response.json()?
//    - json() mixes "the connection broke" and "the JSON is wrong" into one
//      reqwest::Error
//    - Reading the bytes first keeps those two failures apart
// -----------------------------------------------------------------------------
