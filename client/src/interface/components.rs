use bevy::prelude::*;

/// Marker for the status message above the board.
#[derive(Component)]
pub struct StatusText;

/// Button that starts the game over.
#[derive(Component)]
pub struct ResetButton;
