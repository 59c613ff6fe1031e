use connect_four::game::{Cell, Direction, EnginePhase, GameEngine, MoveError, Player, Position};

fn play(engine: &mut GameEngine, columns: &[i64]) {
    for &col in columns {
        engine.drop_token(col).unwrap();
    }
}

#[test]
fn token_lands_in_lowest_empty_row() {
    let mut engine = GameEngine::new();
    for col in 0..7 {
        for height in 0..6 {
            if engine.is_won() {
                engine.restart();
                break;
            }
            let before = engine.board().filled();
            let outcome = engine.drop_token(col).unwrap();
            assert_eq!(outcome.landing.row, 5 - height);
            assert_eq!(engine.board().filled(), before + 1);
        }
    }
}

#[test]
fn turn_alternates_on_non_winning_drops() {
    let mut engine = GameEngine::new();
    let mut expected = Player::Player1;
    for col in [3, 4, 3, 4, 2, 5] {
        assert_eq!(engine.current_player(), expected);
        let outcome = engine.drop_token(col).unwrap();
        assert_eq!(outcome.landing.player, expected);
        assert!(outcome.win.is_none());
        expected = expected.other();
    }
    assert_eq!(engine.current_player(), expected);
}

#[test]
fn full_column_is_rejected_without_change() {
    let mut engine = GameEngine::new();
    play(&mut engine, &[2, 2, 2, 2, 2, 2]);
    let board = engine.board().clone();
    let turn = engine.current_player();

    assert_eq!(engine.drop_token(2), Err(MoveError::ColumnFull(2)));
    assert_eq!(engine.board(), &board);
    assert_eq!(engine.current_player(), turn);
    assert_eq!(engine.phase(), EnginePhase::Idle);
}

#[test]
fn vertical_stack_wins_bottom_up() {
    let mut engine = GameEngine::new();
    play(&mut engine, &[0, 1, 0, 1, 0, 1]);
    let outcome = engine.drop_token(0).unwrap();

    let win = outcome.win.expect("fourth stacked token wins");
    assert_eq!(win.winner, Player::Player1);
    assert_eq!(win.direction, Direction::Vertical);
    assert_eq!(
        win.cells,
        [(5, 0), (4, 0), (3, 0), (2, 0)].map(Position::from)
    );
    assert_eq!(engine.win_line(), Some(&win));
    assert_eq!(engine.current_player(), Player::Player1);
}

#[test]
fn horizontal_line_reports_its_cells() {
    let mut engine = GameEngine::new();
    play(&mut engine, &[1, 1, 2, 2, 3, 3]);
    let win = engine.drop_token(4).unwrap().win.unwrap();

    assert_eq!(win.direction, Direction::Horizontal);
    assert_eq!(
        win.cells,
        [(5, 1), (5, 2), (5, 3), (5, 4)].map(Position::from)
    );
}

#[test]
fn player_two_can_win_on_a_diagonal() {
    let mut engine = GameEngine::new();
    // Player 2 builds / from (5,1) up to (2,4)
    play(&mut engine, &[0, 1, 2, 2, 3, 3, 4, 3, 4, 4, 6]);
    let win = engine.drop_token(4).unwrap().win.unwrap();

    assert_eq!(win.winner, Player::Player2);
    assert_eq!(win.direction, Direction::DownLeft);
    assert_eq!(
        win.cells,
        [(2, 4), (3, 3), (4, 2), (5, 1)].map(Position::from)
    );
}

#[test]
fn won_game_only_accepts_restart() {
    let mut engine = GameEngine::new();
    play(&mut engine, &[0, 1, 0, 1, 0, 1, 0]);
    assert_eq!(engine.phase(), EnginePhase::Won);

    let before = engine.clone();
    assert_eq!(engine.drop_token(5), Err(MoveError::GameAlreadyWon));
    assert_eq!(engine.begin_drop(5), Err(MoveError::GameAlreadyWon));
    assert_eq!(engine, before);

    engine.restart();
    assert_eq!(engine.phase(), EnginePhase::Idle);
    assert_eq!(engine.current_player(), Player::Player1);
    assert_eq!(engine.winner(), None);
    assert!(engine.board().cells().iter().all(|&c| c == Cell::Empty));
}

#[test]
fn out_of_range_columns_never_mutate() {
    let mut engine = GameEngine::new();
    play(&mut engine, &[3]);
    let before = engine.clone();

    for col in [-7, -1, 7, 8, i64::MAX] {
        assert_eq!(
            engine.drop_token(col),
            Err(MoveError::InvalidColumn {
                column: col,
                columns: 7
            })
        );
        assert_eq!(engine, before);
    }
}

#[test]
fn drop_in_progress_blocks_other_drops() {
    let mut engine = GameEngine::new();
    let landing = engine.begin_drop(6).unwrap();
    assert_eq!(landing.position(), Position::new(5, 6));
    assert!(engine.is_dropping());

    assert_eq!(engine.begin_drop(0), Err(MoveError::DropInProgress));
    // Busy takes precedence over range checks
    assert_eq!(engine.begin_drop(-1), Err(MoveError::DropInProgress));

    engine.finish_drop().unwrap();
    assert!(!engine.is_dropping());
    assert_eq!(engine.board().get(5, 6), Some(Cell::Player1));
}

#[test]
fn custom_board_dimensions() {
    let mut engine = GameEngine::with_dimensions(4, 4).unwrap();
    play(&mut engine, &[0, 1, 0, 1, 0, 1]);
    let win = engine.drop_token(0).unwrap().win.unwrap();
    assert_eq!(
        win.cells,
        [(3, 0), (2, 0), (1, 0), (0, 0)].map(Position::from)
    );
    assert_eq!(engine.drop_token(0), Err(MoveError::GameAlreadyWon));

    engine.restart();
    assert_eq!(engine.drop_token(4).unwrap_err(), MoveError::InvalidColumn { column: 4, columns: 4 });
}
