mod board;
mod interface;

use bevy::prelude::*;

use game_engine::game::{GameState, TicTacToe};

pub const WINDOW_WIDTH: f32 = 800.0;
pub const WINDOW_HEIGHT: f32 = 600.0;

/// The single engine instance this app plays on.
#[derive(Debug, Default, Deref, DerefMut, Resource)]
pub struct LocalGame(TicTacToe);

/// Broadcast after a reset and after every accepted move so that
/// everything that displays game state can redraw itself.
#[derive(Debug, Deref, Event)]
pub struct StateUpdated(pub GameState);

fn init_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

fn main() {
    App::new()
        .insert_resource(LocalGame::default())
        .add_plugins((
            DefaultPlugins.set(WindowPlugin {
                primary_window: Some(Window {
                    title: "Tic Tac Toe".to_string(),
                    resolution: (WINDOW_WIDTH, WINDOW_HEIGHT).into(),
                    ..default()
                }),
                ..default()
            }),
            board::BoardPlugin,
            interface::InterfacePlugin,
        ))
        .add_event::<StateUpdated>()
        .add_systems(Startup, init_camera)
        .run();
}
