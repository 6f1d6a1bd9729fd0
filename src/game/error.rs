#[derive(thiserror::Error, Debug, PartialEq)]
pub enum GameError {
    #[error("cell ({row}, {col}) is occupied")]
    CellIsOccupied { row: usize, col: usize },
    #[error("can't make turn on a finished game")]
    GameIsFinished,
    #[error("invalid cell index (expected: 0-8, found: {found})")]
    InvalidCellIndex { found: usize },
}

impl GameError {
    pub fn cell_is_occupied(row: usize, col: usize) -> Self {
        Self::CellIsOccupied { row, col }
    }

    pub fn invalid_cell_index(found: usize) -> Self {
        Self::InvalidCellIndex { found }
    }
}
