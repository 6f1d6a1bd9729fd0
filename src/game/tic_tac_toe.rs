use std::fmt::{Display, Formatter};

use generic_array::typenum::{Unsigned, U3};
use smallvec::SmallVec;

use crate::game::error::GameError;
use crate::game::grid::{Grid, GridIndex};
use crate::game::{BoardCell, FinishedState, GameResult, GameState};

/// Mark of one of the two players. X always moves first.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Sign {
    X,
    O,
}

impl Sign {
    pub fn opponent(self) -> Self {
        match self {
            Self::X => Self::O,
            Self::O => Self::X,
        }
    }
}

impl Display for Sign {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::X => f.write_str("X"),
            Self::O => f.write_str("O"),
        }
    }
}

type Cell = BoardCell<Sign>;

pub type Board = Grid<Cell, U3, U3>;

pub const CELL_COUNT: usize = U3::USIZE * U3::USIZE;

/// Flat cell index: 0 is the top-left corner, 8 is the bottom-right one,
/// counted row by row.
impl TryFrom<usize> for GridIndex {
    type Error = GameError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        if value >= CELL_COUNT {
            return Err(GameError::invalid_cell_index(value));
        }
        Ok(Self::new(value / U3::USIZE, value % U3::USIZE))
    }
}

/// All triples of cells that win the game for the player who fills one
/// of them with his sign: rows first, then columns, then diagonals.
pub fn winning_combinations() -> [(GridIndex, GridIndex, GridIndex); 8] {
    [
        (
            GridIndex::new(0, 0),
            GridIndex::new(0, 1),
            GridIndex::new(0, 2),
        ),
        (
            GridIndex::new(1, 0),
            GridIndex::new(1, 1),
            GridIndex::new(1, 2),
        ),
        (
            GridIndex::new(2, 0),
            GridIndex::new(2, 1),
            GridIndex::new(2, 2),
        ),
        (
            GridIndex::new(0, 0),
            GridIndex::new(1, 0),
            GridIndex::new(2, 0),
        ),
        (
            GridIndex::new(0, 1),
            GridIndex::new(1, 1),
            GridIndex::new(2, 1),
        ),
        (
            GridIndex::new(0, 2),
            GridIndex::new(1, 2),
            GridIndex::new(2, 2),
        ),
        (
            GridIndex::new(0, 0),
            GridIndex::new(1, 1),
            GridIndex::new(2, 2),
        ),
        (
            GridIndex::new(2, 0),
            GridIndex::new(1, 1),
            GridIndex::new(0, 2),
        ),
    ]
}

#[derive(Clone, Debug, PartialEq)]
pub struct TicTacToe {
    board: Board,
    state: GameState,
    moves: SmallVec<[(Sign, GridIndex); 9]>,
}

impl Default for TicTacToe {
    fn default() -> Self {
        Self {
            board: Board::default(),
            state: GameState::Turn(Sign::X),
            moves: SmallVec::new(),
        }
    }
}

impl TicTacToe {
    pub fn new() -> Self {
        Self::default()
    }

    /// Discards the board, the move history and the game progress,
    /// returning to the state of a freshly created game.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Puts the sign of the player whose turn it is into `cell` and
    /// advances the game. Returns the state the game is in afterwards.
    ///
    /// Errors on a finished game and on an occupied cell; an error means
    /// the game is left untouched, so callers that drive the engine from
    /// raw input may simply discard it.
    pub fn apply(&mut self, cell: GridIndex) -> GameResult<GameState> {
        let sign = match self.state {
            GameState::Finished(_) => return Err(GameError::GameIsFinished),
            GameState::Turn(sign) => sign,
        };
        let target = &mut self.board[cell];
        if target.is_some() {
            return Err(GameError::cell_is_occupied(cell.row(), cell.col()));
        }
        *target = sign.into();
        self.moves.push((sign, cell));
        Ok(self.update_state(sign))
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    /// Accepted moves in the order they were made.
    pub fn moves(&self) -> &[(Sign, GridIndex)] {
        &self.moves
    }

    pub fn is_finished(&self) -> bool {
        matches!(self.state, GameState::Finished(_))
    }

    fn update_state(&mut self, last_sign: Sign) -> GameState {
        for (idx1, idx2, idx3) in winning_combinations() {
            if let (Some(s1), Some(s2), Some(s3)) =
                (self.board[idx1].0, self.board[idx2].0, self.board[idx3].0)
            {
                if s1 == s2 && s2 == s3 {
                    self.state = GameState::Finished(FinishedState::Win(s1));
                    return self.state;
                }
            }
        }

        if self.board.iter().all(|cell| cell.is_some()) {
            self.state = GameState::Finished(FinishedState::Draw);
        } else {
            self.state = GameState::Turn(last_sign.opponent());
        }
        self.state
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_opponent() {
        assert_eq!(Sign::X.opponent(), Sign::O);
        assert_eq!(Sign::O.opponent(), Sign::X);
    }

    #[test]
    fn test_flat_index_conversion() {
        assert_eq!(GridIndex::try_from(0), Ok(GridIndex::new(0, 0)));
        assert_eq!(GridIndex::try_from(5), Ok(GridIndex::new(1, 2)));
        assert_eq!(GridIndex::try_from(8), Ok(GridIndex::new(2, 2)));
        assert_eq!(
            GridIndex::try_from(9),
            Err(GameError::invalid_cell_index(9))
        );
        assert_eq!(
            GridIndex::try_from(usize::MAX),
            Err(GameError::invalid_cell_index(usize::MAX))
        );
    }

    #[test]
    fn test_winning_combinations_enumeration() {
        let flat = |idx: GridIndex| idx.row() * U3::USIZE + idx.col();
        itertools::assert_equal(
            winning_combinations()
                .into_iter()
                .map(|(idx1, idx2, idx3)| (flat(idx1), flat(idx2), flat(idx3))),
            [
                (0, 1, 2),
                (3, 4, 5),
                (6, 7, 8),
                (0, 3, 6),
                (1, 4, 7),
                (2, 5, 8),
                (0, 4, 8),
                (6, 4, 2),
            ],
        );
    }

    #[test]
    fn test_first_move_goes_to_x() {
        let mut game = TicTacToe::new();
        assert_eq!(game.state(), GameState::Turn(Sign::X));
        let state = game.apply(GridIndex::new(1, 1)).unwrap();
        assert_eq!(state, GameState::Turn(Sign::O));
        assert_eq!(game.board()[GridIndex::new(1, 1)].0, Some(Sign::X));
    }

    #[test]
    fn test_occupied_cell_is_rejected() {
        let mut game = TicTacToe::new();
        game.apply(GridIndex::new(0, 0)).unwrap();
        let err = game.apply(GridIndex::new(0, 0)).unwrap_err();
        assert_eq!(err, GameError::cell_is_occupied(0, 0));
        // the rejected move didn't consume O's turn
        assert_eq!(game.state(), GameState::Turn(Sign::O));
        assert_eq!(game.moves().len(), 1);
    }
}
