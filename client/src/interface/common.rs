use bevy::prelude::*;

use game_engine::game::view::Palette;

pub const STATUS_FONT_SIZE: f32 = 40.0;
pub const BUTTON_FONT_SIZE: f32 = 25.0;
/// Mark font size relative to the tile height.
pub const MARK_FONT_RATIO: f32 = 0.8;

pub const BUTTON_WIDTH: f32 = 180.0;
pub const BUTTON_HEIGHT: f32 = 50.0;

pub const BOARD_COLOR: Color = Color::WHITE;
pub const BORDER_COLOR: Color = Color::BLACK;
pub const WIN_LINE_COLOR: Color = Color::srgb(0.25, 0.25, 0.25);

pub const NEUTRAL_COLOR: Color = Color::WHITE;
// warm for X, cool for O
pub const X_COLOR: Color = Color::srgb(1.0, 0.45, 0.41);
pub const O_COLOR: Color = Color::srgb(0.58, 0.76, 0.93);

pub const NORMAL_BUTTON_COLOR: Color = Color::srgb(0.29, 0.40, 0.29);
pub const HOVERED_BUTTON_COLOR: Color = Color::srgb(0.35, 0.48, 0.35);
pub const PRESSED_BUTTON_COLOR: Color = Color::srgb(0.22, 0.30, 0.22);
pub const BUTTON_TEXT_COLOR: Color = Color::srgb(0.88, 1.0, 0.88);

pub fn palette_color(palette: Palette) -> Color {
    match palette {
        Palette::Neutral => NEUTRAL_COLOR,
        Palette::ForX => X_COLOR,
        Palette::ForO => O_COLOR,
    }
}

// Containers

pub fn root_node() -> Node {
    Node {
        flex_direction: FlexDirection::Column,
        align_items: AlignItems::Center,
        justify_content: JustifyContent::SpaceBetween,
        height: Val::Percent(100.0),
        width: Val::Percent(100.0),
        ..default()
    }
}

pub fn button_node() -> Node {
    Node {
        width: Val::Px(BUTTON_WIDTH),
        height: Val::Px(BUTTON_HEIGHT),
        margin: UiRect::all(Val::Px(10.0)),
        justify_content: JustifyContent::Center,
        align_items: AlignItems::Center,
        ..default()
    }
}
