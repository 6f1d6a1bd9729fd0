use tic_tac_toe::game::tic_tac_toe::TicTacToe;
use tic_tac_toe::game::{FinishedState, GameError, GameState, GridIndex, Sign};

fn play(game: &mut TicTacToe, cells: &[usize]) {
    for &cell in cells {
        game.apply(cell.try_into().unwrap()).unwrap();
    }
}

fn occupied_count(game: &TicTacToe) -> usize {
    game.board().iter().filter(|cell| cell.is_some()).count()
}

#[test]
fn fresh_game_is_empty() {
    let game = TicTacToe::new();
    assert!(game.board().iter().all(|cell| cell.is_none()));
    assert_eq!(game.state(), GameState::Turn(Sign::X));
    assert!(game.moves().is_empty());
    assert!(!game.is_finished());
}

#[test]
fn turn_alternates_and_marks_accumulate() {
    let mut game = TicTacToe::new();
    let cells = [4usize, 0, 8, 2];
    for (n, &cell) in cells.iter().enumerate() {
        let mover = match game.state() {
            GameState::Turn(sign) => sign,
            state => panic!("unexpected state: {:?}", state),
        };
        let state = game.apply(cell.try_into().unwrap()).unwrap();
        // the turn always belongs to the player who did not just move
        assert_eq!(state, GameState::Turn(mover.opponent()));
        assert_eq!(occupied_count(&game), n + 1);
        assert_eq!(game.moves().len(), n + 1);
    }
}

#[test]
fn rejected_moves_change_nothing() {
    let mut game = TicTacToe::new();
    play(&mut game, &[4, 1]);
    let snapshot = game.clone();

    for _ in 0..3 {
        assert_eq!(
            game.apply(GridIndex::new(1, 1)).unwrap_err(),
            GameError::cell_is_occupied(1, 1)
        );
        assert_eq!(game, snapshot);
    }
    assert_eq!(
        GridIndex::try_from(9).unwrap_err(),
        GameError::invalid_cell_index(9)
    );
    assert_eq!(game, snapshot);
}

#[test]
fn top_row_wins_for_x() {
    let mut game = TicTacToe::new();
    play(&mut game, &[0, 3, 1]);
    // not a win yet, two cells of the top row are filled
    assert_eq!(game.state(), GameState::Turn(Sign::O));
    play(&mut game, &[4]);

    let state = game.apply(2.try_into().unwrap()).unwrap();
    assert_eq!(state, GameState::Finished(FinishedState::Win(Sign::X)));
    assert!(game.is_finished());

    // terminal lock: even an empty cell is rejected now
    assert_eq!(
        game.apply(GridIndex::new(2, 2)).unwrap_err(),
        GameError::GameIsFinished
    );
    assert_eq!(occupied_count(&game), 5);
}

#[test]
fn full_board_without_triple_is_a_draw() {
    let mut game = TicTacToe::new();
    // fills the board as X O X / X O O / O X X with no winning triple
    play(&mut game, &[0, 1, 2, 4, 3, 5, 7, 6, 8]);
    assert_eq!(game.state(), GameState::Finished(FinishedState::Draw));
    assert_eq!(occupied_count(&game), 9);
}

#[test]
fn reset_unlocks_a_finished_game() {
    let mut game = TicTacToe::new();
    play(&mut game, &[0, 3, 1, 4, 2]);
    assert!(game.is_finished());

    game.reset();
    assert_eq!(game.state(), GameState::Turn(Sign::X));
    assert!(game.board().iter().all(|cell| cell.is_none()));
    assert!(game.moves().is_empty());

    // and the game is playable again
    game.apply(GridIndex::new(2, 2)).unwrap();
    assert_eq!(game.state(), GameState::Turn(Sign::O));
}

#[test]
fn identical_sequences_give_identical_trajectories() {
    let cells = [4usize, 0, 3, 5, 2];
    let mut first = TicTacToe::new();
    let mut second = TicTacToe::new();
    for &cell in &cells {
        let state1 = first.apply(cell.try_into().unwrap()).unwrap();
        let state2 = second.apply(cell.try_into().unwrap()).unwrap();
        assert_eq!(state1, state2);
        assert_eq!(first, second);
    }
}

#[test]
fn column_and_diagonal_wins_are_detected() {
    let mut game = TicTacToe::new();
    // O takes the left column while X scatters
    play(&mut game, &[1, 0, 2, 3, 4]);
    assert_eq!(game.state(), GameState::Turn(Sign::O));
    game.apply(GridIndex::new(2, 0)).unwrap();
    assert_eq!(
        game.state(),
        GameState::Finished(FinishedState::Win(Sign::O))
    );

    let mut game = TicTacToe::new();
    // X takes the main diagonal
    play(&mut game, &[0, 1, 4, 2, 8]);
    assert_eq!(
        game.state(),
        GameState::Finished(FinishedState::Win(Sign::X))
    );
}
