// src/display/render.rs
// =============================================================================
// Draws the profile card.
//
// The card always has the same rows. Before anything has been loaded it shows
// "---" for text fields and 0 for the repository count, so the layout does not
// jump around when the first lookup lands.
// =============================================================================

use anyhow::Result;

use crate::github::Profile;

const PLACEHOLDER: &str = "---";

// Renders the card for whatever is in the slot
//
// Parameters:
//   profile: the displayed profile, or None for the placeholder card
//
// Returns: the card as a multi-line String (ends with a newline)
pub fn render_card(profile: Option<&Profile>) -> String {
    let avatar = profile.map_or(PLACEHOLDER, |p| p.avatar_url.as_str());
    let login = profile.map_or(PLACEHOLDER, |p| p.login.as_str());
    let name = profile.map_or(PLACEHOLDER, |p| p.name.as_str());
    let repos = profile.map_or(0, |p| p.public_repos);
    let bio = profile.map_or(PLACEHOLDER, |p| p.bio.as_str());

    let mut card = String::new();
    card.push_str(&"=".repeat(60));
    card.push('\n');
    card.push_str(&format!("{:<15} {}\n", "Avatar", avatar));
    card.push_str(&format!("{:<15} {}\n", "Username", login));
    card.push_str(&format!("{:<15} {}\n", "Name", name));
    card.push_str(&format!("{:<15} {}\n", "Public Repos", repos));
    card.push_str(&format!("{:<15} {}\n", "Bio", bio));
    card.push_str(&"=".repeat(60));
    card.push('\n');
    card
}

/// Pretty JSON with the same keys the API uses.
pub fn render_json(profile: &Profile) -> Result<String> {
    Ok(serde_json::to_string_pretty(profile)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn octocat() -> Profile {
        Profile {
            login: "octocat".to_string(),
            name: "The Octocat".to_string(),
            avatar_url: "https://example/a.png".to_string(),
            bio: "hi".to_string(),
            public_repos: 8,
        }
    }

    #[test]
    fn test_placeholder_card() {
        let card = render_card(None);
        assert!(card.contains("Username        ---"));
        assert!(card.contains("Public Repos    0"));
        assert!(card.contains("Bio             ---"));
    }

    #[test]
    fn test_profile_card() {
        let card = render_card(Some(&octocat()));
        assert!(card.contains("Avatar          https://example/a.png"));
        assert!(card.contains("Username        octocat"));
        assert!(card.contains("Name            The Octocat"));
        assert!(card.contains("Public Repos    8"));
        assert!(card.contains("Bio             hi"));
    }

    #[test]
    fn test_json_output() {
        let json = render_json(&octocat()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["login"], "octocat");
        assert_eq!(value["public_repos"], 8);
    }
}
