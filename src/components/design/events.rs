use bevy::prelude::*;

/// Sent whenever the user edits the design held in `DesignInput`.
#[derive(Event, Debug, Clone, Copy, Default)]
pub struct DesignChanged;
