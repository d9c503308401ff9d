// src/display/mod.rs
// =============================================================================
// The terminal "screen": what is currently shown and how it is drawn.
//
// Submodules:
// - slot: Holds the one profile currently on screen
// - render: Turns that profile into a text card or JSON
// =============================================================================

mod render;
mod slot;

pub use render::{render_card, render_json};
pub use slot::DisplaySlot;
