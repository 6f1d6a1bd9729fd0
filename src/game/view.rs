//! Projection of game state into displayable pieces: a mark and a color
//! key for every cell, plus a one-line status message. Mapping color
//! keys to actual colors is up to the presentation layer.

use crate::game::tic_tac_toe::Sign;
use crate::game::{BoardCell, FinishedState, GameState};

/// Color key for a displayed element: empty cells are neutral,
/// everything owned by a player is tinted with that player's color.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Palette {
    Neutral,
    ForX,
    ForO,
}

impl From<Sign> for Palette {
    fn from(value: Sign) -> Self {
        match value {
            Sign::X => Self::ForX,
            Sign::O => Self::ForO,
        }
    }
}

pub fn cell_symbol(cell: BoardCell<Sign>) -> &'static str {
    match cell.0 {
        Some(Sign::X) => "X",
        Some(Sign::O) => "O",
        None => "",
    }
}

pub fn cell_palette(cell: BoardCell<Sign>) -> Palette {
    match cell.0 {
        Some(sign) => sign.into(),
        None => Palette::Neutral,
    }
}

/// Status message shown above the board.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StatusLine {
    pub text: String,
    pub palette: Palette,
}

pub fn status_line(state: GameState) -> StatusLine {
    match state {
        GameState::Turn(sign) => StatusLine {
            text: format!("{}'s Turn", sign),
            palette: sign.into(),
        },
        GameState::Finished(FinishedState::Win(sign)) => StatusLine {
            text: format!("{} Wins!", sign),
            palette: sign.into(),
        },
        GameState::Finished(FinishedState::Draw) => StatusLine {
            text: "It's a Tie!".into(),
            palette: Palette::Neutral,
        },
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_cell_projection() {
        assert_eq!(cell_symbol(BoardCell(None)), "");
        assert_eq!(cell_symbol(Sign::X.into()), "X");
        assert_eq!(cell_symbol(Sign::O.into()), "O");
        assert_eq!(cell_palette(BoardCell(None)), Palette::Neutral);
        assert_eq!(cell_palette(Sign::X.into()), Palette::ForX);
        assert_eq!(cell_palette(Sign::O.into()), Palette::ForO);
    }

    #[test]
    fn test_status_line_turn() {
        let line = status_line(GameState::Turn(Sign::O));
        assert_eq!(line.text, "O's Turn");
        assert_eq!(line.palette, Palette::ForO);
    }

    #[test]
    fn test_status_line_win() {
        let line = status_line(GameState::Finished(FinishedState::Win(Sign::X)));
        assert_eq!(line.text, "X Wins!");
        assert_eq!(line.palette, Palette::ForX);
    }

    #[test]
    fn test_status_line_draw() {
        let line = status_line(GameState::Finished(FinishedState::Draw));
        assert_eq!(line.palette, Palette::Neutral);
    }
}
