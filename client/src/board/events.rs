use bevy::prelude::*;
use game_engine::game::GridIndex;

/// Event emitted when board tile is pressed.
/// Contains a [`GridIndex`] of the pressed tile.
#[derive(Debug, Event)]
pub struct TilePressed {
    pos: GridIndex,
}

impl TilePressed {
    pub fn new(pos: GridIndex) -> Self {
        Self { pos }
    }

    pub fn pos(&self) -> GridIndex {
        self.pos
    }
}
