use bevy::input::mouse::MouseButtonInput;
use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use game_engine::game::tic_tac_toe::winning_combinations;
use game_engine::game::{view, FinishedState, GameState, GridIndex};

use super::components::{Board, Border, Tile, TileMark, WinLine};
use super::{TilePressed, BOARD_RATIO, BORDER_WIDTH, WIN_LINE_WIDTH};
use crate::interface::common::{
    palette_color, BOARD_COLOR, BORDER_COLOR, MARK_FONT_RATIO, WIN_LINE_COLOR,
};
use crate::{LocalGame, StateUpdated};

/// Returns center coordinates for a board tile with given `pos`.
fn calculate_tile_center(board_size: Vec2, tile_size: Vec2, tile_pos: GridIndex) -> Vec2 {
    let tile_x = (tile_size.x + BORDER_WIDTH) * tile_pos.col() as f32 + tile_size.x / 2.0
        - board_size.x / 2.0;
    let tile_y = (tile_size.y + BORDER_WIDTH) * (2 - tile_pos.row()) as f32 + tile_size.y / 2.0
        - board_size.y / 2.0;
    Vec2::new(tile_x, tile_y)
}

/// Returns tile size for a given board size.
fn calculate_tile_size(board_size: Vec2) -> Vec2 {
    let tile_width = (board_size.x - BORDER_WIDTH * 2.0) / 3.0;
    let tile_height = (board_size.y - BORDER_WIDTH * 2.0) / 3.0;
    Vec2::new(tile_width, tile_height)
}

pub fn create(
    mut commands: Commands,
    window: Query<&Window, With<PrimaryWindow>>,
    game: Res<LocalGame>,
) {
    let Ok(window) = window.get_single() else {
        error!("failed to get single window");
        return;
    };
    let board_size = Vec2::splat(window.width().min(window.height()) * BOARD_RATIO);
    let tile_size = calculate_tile_size(board_size);
    let v_border_length = tile_size.y * 0.8;
    let h_border_length = tile_size.x * 0.8;
    debug!("create board, size: {}, tile size: {}", board_size, tile_size);
    commands
        .spawn((
            Sprite {
                color: BOARD_COLOR,
                custom_size: Some(board_size),
                ..default()
            },
            Transform::from_translation(Vec3::ZERO),
            Board,
        ))
        .with_children(|builder| {
            for (pos, &cell) in game.board().all_indexed() {
                let tile_translation =
                    calculate_tile_center(board_size, tile_size, pos).extend(1.0);
                builder.spawn((
                    Sprite {
                        color: palette_color(view::Palette::Neutral),
                        custom_size: Some(tile_size),
                        ..default()
                    },
                    Transform::from_translation(tile_translation),
                    Tile::from(pos),
                ));
                builder.spawn((
                    Text2d::new(view::cell_symbol(cell)),
                    TextFont {
                        font_size: tile_size.y * MARK_FONT_RATIO,
                        ..default()
                    },
                    TextColor(palette_color(view::cell_palette(cell))),
                    Transform::from_translation(tile_translation + Vec3::Z),
                    TileMark::from(pos),
                ));
            }
            // draw borders
            for i in 0..3 {
                for j in 0..2 {
                    // vertical
                    let v_border_x = tile_size.x * (j + 1) as f32
                        + BORDER_WIDTH * j as f32
                        + BORDER_WIDTH / 2.0
                        - board_size.x / 2.0;
                    let v_border_y =
                        tile_size.y * i as f32 + BORDER_WIDTH * i as f32 + tile_size.y / 2.0
                            - board_size.y / 2.0;
                    builder.spawn((
                        Sprite {
                            color: BORDER_COLOR,
                            custom_size: Some(Vec2::new(BORDER_WIDTH, v_border_length)),
                            ..default()
                        },
                        Transform::from_translation(Vec3::new(v_border_x, v_border_y, 1.0)),
                        Border,
                    ));
                    // horizontal
                    let h_border_x =
                        tile_size.x * i as f32 + BORDER_WIDTH * i as f32 + tile_size.x / 2.0
                            - board_size.x / 2.0;
                    let h_border_y = tile_size.y * (j + 1) as f32
                        + BORDER_WIDTH * j as f32
                        + BORDER_WIDTH / 2.0
                        - board_size.y / 2.0;
                    builder.spawn((
                        Sprite {
                            color: BORDER_COLOR,
                            custom_size: Some(Vec2::new(h_border_length, BORDER_WIDTH)),
                            ..default()
                        },
                        Transform::from_translation(Vec3::new(h_border_x, h_border_y, 1.0)),
                        Border,
                    ));
                }
            }
        });
}

pub fn handle_mouse_input(
    window: Query<&Window, With<PrimaryWindow>>,
    camera: Query<(&Camera, &GlobalTransform)>,
    tiles: Query<(&GlobalTransform, &Sprite, &Tile)>,
    mut button_evr: EventReader<MouseButtonInput>,
    mut pressed: EventWriter<TilePressed>,
) {
    let Ok(window) = window.get_single() else {
        error!("failed to get single window");
        return;
    };
    let Ok((camera, camera_transform)) = camera.get_single() else {
        error!("failed to get single camera");
        return;
    };
    for event in button_evr.read() {
        if event.state.is_pressed() {
            let cursor_position = window.cursor_position();
            if let Some(world_position) = cursor_position
                .and_then(|cursor| camera.viewport_to_world(camera_transform, cursor).ok())
                .map(|ray| ray.origin.truncate())
            {
                let tile = tiles.iter().find(|(gt, sprite, _)| {
                    let Some(size) = sprite.custom_size else {
                        return false;
                    };
                    let bounds = Rect::from_center_size(gt.translation().truncate(), size);
                    bounds.contains(world_position)
                });
                if let Some((_, _, &tile)) = tile {
                    pressed.send(TilePressed::new(tile.into()));
                }
            }
        }
    }
}

/// Feed pressed tiles into the engine. A rejected press (occupied cell,
/// finished game) leaves the game untouched and is simply dropped.
pub fn apply_action(
    mut game: ResMut<LocalGame>,
    mut tile_pressed: EventReader<TilePressed>,
    mut state_updated: EventWriter<StateUpdated>,
) {
    for event in tile_pressed.read() {
        match game.apply(event.pos()) {
            Ok(state) => {
                debug!("tile {} pressed, game state: {:?}", event.pos(), state);
                state_updated.send(StateUpdated(state));
            }
            Err(err) => debug!("move to tile {} rejected: {}", event.pos(), err),
        }
    }
}

/// Re-project the whole board into the tile marks after any state change.
pub fn refresh_tiles(
    game: Res<LocalGame>,
    mut marks: Query<(&mut Text2d, &mut TextColor, &TileMark)>,
    mut state_updated: EventReader<StateUpdated>,
) {
    if state_updated.is_empty() {
        return;
    }
    state_updated.clear();
    for (mut text, mut color, mark) in marks.iter_mut() {
        let cell = game.board()[(*mark).into()];
        text.0 = view::cell_symbol(cell).to_string();
        color.0 = palette_color(view::cell_palette(cell));
    }
}

/// Keeps the strike-through line in sync with the game: spawns it over
/// the winning triple, removes it when a new game starts.
pub fn update_win_line(
    mut commands: Commands,
    game: Res<LocalGame>,
    board: Query<(Entity, &Sprite), With<Board>>,
    line: Query<Entity, With<WinLine>>,
    mut state_updated: EventReader<StateUpdated>,
) {
    for event in state_updated.read() {
        let Ok((board_entity, board_sprite)) = board.get_single() else {
            error!("failed to get single board");
            continue;
        };
        match **event {
            GameState::Finished(FinishedState::Win(_)) if line.is_empty() => {
                let Some(board_size) = board_sprite.custom_size else {
                    error!("unable to get board size from sprite");
                    continue;
                };
                let Some((idx1, _, idx3)) =
                    winning_combinations()
                        .into_iter()
                        .find(|&(idx1, idx2, idx3)| {
                            let cell1 = game.board()[idx1];
                            let cell2 = game.board()[idx2];
                            let cell3 = game.board()[idx3];
                            cell1.is_some() && cell1 == cell2 && cell2 == cell3
                        })
                else {
                    continue;
                };
                debug!("draw win line from {} to {}", idx1, idx3);
                let tile_size = calculate_tile_size(board_size);
                let from_center = calculate_tile_center(board_size, tile_size, idx1);
                let to_center = calculate_tile_center(board_size, tile_size, idx3);
                let center = (from_center + to_center) / 2.0;
                let mut transform = Transform::from_translation(center.extend(2.0));
                let line_vector = (from_center - center).normalize();
                transform.rotation = Quat::from_rotation_arc(Vec3::Y, line_vector.extend(0.0));
                let length =
                    from_center.distance(to_center) + tile_size.x.min(tile_size.y) * 0.5;
                commands.entity(board_entity).with_child((
                    Sprite {
                        color: WIN_LINE_COLOR,
                        custom_size: Some(Vec2::new(WIN_LINE_WIDTH, length)),
                        ..default()
                    },
                    transform,
                    WinLine,
                ));
            }
            GameState::Turn(_) => {
                for entity in line.iter() {
                    commands.entity(board_entity).remove_children(&[entity]);
                    commands.entity(entity).despawn();
                }
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_center_tile_is_centered() {
        let board_size = Vec2::splat(302.0);
        let tile_size = calculate_tile_size(board_size);
        assert_eq!(tile_size, Vec2::splat(100.0));
        assert_eq!(
            calculate_tile_center(board_size, tile_size, GridIndex::new(1, 1)),
            Vec2::ZERO
        );
    }

    #[test]
    fn test_corner_tiles_are_symmetric() {
        let board_size = Vec2::splat(302.0);
        let tile_size = calculate_tile_size(board_size);
        let top_left = calculate_tile_center(board_size, tile_size, GridIndex::new(0, 0));
        let bottom_right = calculate_tile_center(board_size, tile_size, GridIndex::new(2, 2));
        assert_eq!(top_left, -bottom_right);
        // row 0 maps to the top of the screen
        assert!(top_left.y > 0.0);
        assert!(top_left.x < 0.0);
    }
}
