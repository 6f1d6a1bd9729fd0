use bevy::prelude::*;
use game_engine::game::GridIndex;

/// Marker for the board background; tiles, borders and the win line
/// are spawned as its children.
#[derive(Component)]
pub struct Board;

#[derive(Component)]
pub struct Border;

/// Clickable cell of the board.
#[derive(Clone, Copy, Debug, PartialEq, Component, Deref)]
pub struct Tile(GridIndex);

impl From<GridIndex> for Tile {
    fn from(value: GridIndex) -> Self {
        Self(value)
    }
}

impl From<Tile> for GridIndex {
    fn from(value: Tile) -> Self {
        value.0
    }
}

/// Text mark displayed inside a tile.
#[derive(Clone, Copy, Debug, PartialEq, Component, Deref)]
pub struct TileMark(GridIndex);

impl From<GridIndex> for TileMark {
    fn from(value: GridIndex) -> Self {
        Self(value)
    }
}

impl From<TileMark> for GridIndex {
    fn from(value: TileMark) -> Self {
        value.0
    }
}

/// Sprite stretched over the winning triple.
#[derive(Component)]
pub struct WinLine;
