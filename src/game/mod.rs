pub mod error;
pub mod grid;
pub mod tic_tac_toe;
pub mod view;

use std::fmt::{Display, Formatter};
use std::ops::{Deref, DerefMut};

pub use error::GameError;
pub use grid::{Grid, GridIndex};
pub use tic_tac_toe::{Sign, TicTacToe};

pub type GameResult<T> = Result<T, GameError>;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct BoardCell<T>(pub Option<T>);

impl<T> Default for BoardCell<T> {
    fn default() -> Self {
        Self(Option::default())
    }
}

impl<T: Display> Display for BoardCell<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match &self.0 {
            Some(val) => write!(f, "[{}]", val),
            None => f.write_str("[ ]"),
        }
    }
}

impl<T> From<T> for BoardCell<T> {
    fn from(value: T) -> Self {
        Self(Option::from(value))
    }
}

impl<T> Deref for BoardCell<T> {
    type Target = Option<T>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T> DerefMut for BoardCell<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

/// Result of a finished game.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FinishedState {
    Win(Sign),
    Draw,
}

/// Current game progress: either some player's turn or a finished game.
/// A turn holder exists only while the game is in progress, so there is
/// no "whose turn" to answer once the game is over.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum GameState {
    Turn(Sign),
    Finished(FinishedState),
}
