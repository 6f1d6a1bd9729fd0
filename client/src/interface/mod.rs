pub mod common;

mod components;
mod systems;

use bevy::prelude::*;

use systems::*;

pub struct InterfacePlugin;

impl Plugin for InterfacePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, create)
            .add_systems(Update, (update_status, handle_reset_button));
    }
}
