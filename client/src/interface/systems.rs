use bevy::prelude::*;

use game_engine::game::view;

use super::common::{
    self, palette_color, BUTTON_FONT_SIZE, BUTTON_TEXT_COLOR, HOVERED_BUTTON_COLOR,
    NORMAL_BUTTON_COLOR, PRESSED_BUTTON_COLOR, STATUS_FONT_SIZE,
};
use super::components::{ResetButton, StatusText};
use crate::{LocalGame, StateUpdated};

pub fn create(mut commands: Commands, game: Res<LocalGame>) {
    let status = view::status_line(game.state());
    commands.spawn(common::root_node()).with_children(|builder| {
        builder.spawn((
            Text::new(status.text),
            TextFont {
                font_size: STATUS_FONT_SIZE,
                ..default()
            },
            TextColor(palette_color(status.palette)),
            Node {
                margin: UiRect::top(Val::Px(10.0)),
                ..default()
            },
            StatusText,
        ));
        builder
            .spawn((
                Button,
                common::button_node(),
                BackgroundColor(NORMAL_BUTTON_COLOR),
                ResetButton,
            ))
            .with_children(|builder| {
                builder.spawn((
                    Text::new("Replay"),
                    TextFont {
                        font_size: BUTTON_FONT_SIZE,
                        ..default()
                    },
                    TextColor(BUTTON_TEXT_COLOR),
                ));
            });
    });
}

/// Rewrite the status line whenever the game state changes.
pub fn update_status(
    game: Res<LocalGame>,
    mut status: Query<(&mut Text, &mut TextColor), With<StatusText>>,
    mut state_updated: EventReader<StateUpdated>,
) {
    if state_updated.is_empty() {
        return;
    }
    state_updated.clear();
    let Ok((mut text, mut color)) = status.get_single_mut() else {
        error!("failed to get single status text");
        return;
    };
    let line = view::status_line(game.state());
    text.0 = line.text;
    color.0 = palette_color(line.palette);
}

/// Restart the game when the replay button is pressed.
pub fn handle_reset_button(
    mut game: ResMut<LocalGame>,
    mut button: Query<
        (&Interaction, &mut BackgroundColor),
        (Changed<Interaction>, With<ResetButton>),
    >,
    mut state_updated: EventWriter<StateUpdated>,
) {
    for (interaction, mut background) in button.iter_mut() {
        match interaction {
            Interaction::Pressed => {
                *background = PRESSED_BUTTON_COLOR.into();
                game.reset();
                debug!("game reset");
                state_updated.send(StateUpdated(game.state()));
            }
            Interaction::Hovered => *background = HOVERED_BUTTON_COLOR.into(),
            Interaction::None => *background = NORMAL_BUTTON_COLOR.into(),
        }
    }
}
