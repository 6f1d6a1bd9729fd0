mod components;
mod events;
mod systems;

use bevy::prelude::*;

use systems::*;

pub use events::TilePressed;

/// Share of the smaller window dimension taken by the board.
pub const BOARD_RATIO: f32 = 0.7;
pub const BORDER_WIDTH: f32 = 1.0;
pub const WIN_LINE_WIDTH: f32 = 6.0;

pub struct BoardPlugin;

impl Plugin for BoardPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<TilePressed>()
            .add_systems(Startup, create)
            .add_systems(
                Update,
                (
                    handle_mouse_input,
                    apply_action,
                    refresh_tiles,
                    update_win_line,
                ),
            );
    }
}
