//! Turn-based tic-tac-toe rules: board state, turn alternation,
//! win/draw detection and the projection of game state into
//! displayable cell marks and status messages.
//!
//! Presentation lives in a separate client package that drives
//! [`game::TicTacToe`] from input events and renders its state.

pub mod game;
