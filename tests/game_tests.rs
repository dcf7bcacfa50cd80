use tictactoe::{BoardError, Game, GameStatus, Placement, Player};

#[test]
fn test_nought_opens_and_turns_alternate() {
    let mut game = Game::new(3).unwrap();
    assert_eq!(game.current_player(), Player::Nought);
    assert_eq!(game.turns(), 0);

    game.play(0, 0).unwrap();
    assert_eq!(game.current_player(), Player::Cross);
    assert_eq!(game.turns(), 1);

    game.play(1, 1).unwrap();
    assert_eq!(game.current_player(), Player::Nought);
    assert_eq!(game.turns(), 2);
}

#[test]
fn test_occupied_attempt_keeps_the_turn() {
    let mut game = Game::new(3).unwrap();
    game.play(0, 0).unwrap();

    let outcome = game.play(0, 0).unwrap();
    assert_eq!(outcome, Placement::Occupied);
    // still Cross's turn, and the failed attempt did not count
    assert_eq!(game.current_player(), Player::Cross);
    assert_eq!(game.turns(), 1);
}

#[test]
fn test_nought_wins_on_main_diagonal() {
    let mut game = Game::new(3).unwrap();
    for (r, c) in [(0, 0), (0, 1), (1, 1), (1, 0)] {
        game.play(r, c).unwrap();
        assert_eq!(game.status(), GameStatus::InProgress);
    }
    game.play(2, 2).unwrap();
    assert_eq!(game.status(), GameStatus::Won(Player::Nought));
    assert_eq!(game.turns(), 5);
}

#[test]
fn test_play_after_game_over_is_rejected() {
    let mut game = Game::new(3).unwrap();
    for (r, c) in [(0, 0), (0, 1), (1, 1), (1, 0), (2, 2)] {
        game.play(r, c).unwrap();
    }
    assert_eq!(game.status(), GameStatus::Won(Player::Nought));
    assert_eq!(game.play(2, 0).unwrap_err(), BoardError::GameOver);
    // status is stable after the rejected call
    assert_eq!(game.status(), GameStatus::Won(Player::Nought));
}

#[test]
fn test_draw_when_board_fills_without_winner() {
    // O X O
    // O X X
    // X O O
    let mut game = Game::new(3).unwrap();
    let moves = [
        (0, 0),
        (0, 1),
        (0, 2),
        (1, 1),
        (1, 0),
        (1, 2),
        (2, 1),
        (2, 0),
        (2, 2),
    ];
    for (i, (r, c)) in moves.into_iter().enumerate() {
        assert_eq!(game.status(), GameStatus::InProgress, "move {}", i);
        assert!(game.play(r, c).unwrap().was_placed());
    }
    assert_eq!(game.turns(), 9); // N^2: the board is full
    assert_eq!(game.status(), GameStatus::Draw);
    assert_eq!(game.play(0, 0).unwrap_err(), BoardError::GameOver);
}

#[test]
fn test_last_cell_win_beats_draw() {
    // A full board whose final move completes a line must report the win,
    // not the draw.
    // O X O
    // X X O
    // X O O  <- (2,2) played last by O completes column 2
    let mut game = Game::new(3).unwrap();
    let moves = [
        (0, 0), // O
        (0, 1), // X
        (0, 2), // O
        (1, 0), // X
        (1, 2), // O
        (1, 1), // X
        (2, 1), // O
        (2, 0), // X
        (2, 2), // O
    ];
    for (r, c) in moves {
        game.play(r, c).unwrap();
    }
    assert_eq!(game.status(), GameStatus::Won(Player::Nought));
}
