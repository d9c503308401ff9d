// src/display/slot.rs
// =============================================================================
// The single "currently displayed profile" slot.
//
// There is no history: a new profile simply replaces the old one. Writing
// needs `&mut self`, so whoever owns the slot (the session loop) is the only
// code that can change what is on screen.
// =============================================================================

use crate::github::Profile;

#[derive(Debug, Default)]
pub struct DisplaySlot {
    current: Option<Profile>,
}

impl DisplaySlot {
    /// An empty slot; the card shows placeholders.
    pub fn new() -> Self {
        DisplaySlot::default()
    }

    /// Shows `profile`, returning whatever it replaced.
    pub fn replace(&mut self, profile: Profile) -> Option<Profile> {
        self.current.replace(profile)
    }

    pub fn current(&self) -> Option<&Profile> {
        self.current.as_ref()
    }

    pub fn into_current(self) -> Option<Profile> {
        self.current
    }
}
