//! Tests for the tic-tac-toe state machine.

use strum::IntoEnumIterator;
use strictly_tictactoe::{GameState, GameStatus, MoveError, Player, Position, Square, rules::WINNING_LINES};

fn play_all(moves: &[usize]) -> GameState {
    moves.iter().fold(GameState::new(), |game, &index| game.play(index))
}

/// Picks `count` squares outside `line` that do not form a winning line themselves.
fn spare_squares(line: [Position; 3], count: usize) -> Vec<usize> {
    let free: Vec<usize> = (0..9)
        .filter(|i| !line.iter().any(|p| p.to_index() == *i))
        .collect();
    let is_line = |set: &[usize]| {
        WINNING_LINES
            .iter()
            .any(|l| l.iter().all(|p| set.contains(&p.to_index())))
    };
    for i in 0..free.len() {
        for j in i + 1..free.len() {
            for k in j + 1..free.len() {
                let pick = [free[i], free[j], free[k]];
                if !is_line(&pick) {
                    return pick[..count].to_vec();
                }
            }
        }
    }
    panic!("no spare squares for {line:?}");
}

#[test]
fn test_x_wins_every_line_and_freezes() {
    for line in WINNING_LINES {
        let spare = spare_squares(line, 2);
        let [a, b, c] = line.map(Position::to_index);
        let game = play_all(&[a, spare[0], b, spare[1], c]);
        assert_eq!(game.status(), GameStatus::Won(Player::X), "line {line:?}");

        let frozen = Position::iter().fold(game, |g, pos| g.play(pos.to_index()));
        assert_eq!(frozen, game);
    }
}

#[test]
fn test_o_wins_every_line() {
    for line in WINNING_LINES {
        let spare = spare_squares(line, 3);
        let [a, b, c] = line.map(Position::to_index);
        let game = play_all(&[spare[0], a, spare[1], b, spare[2], c]);
        assert_eq!(game.status(), GameStatus::Won(Player::O), "line {line:?}");
        assert_eq!(game.current_player(), Player::O);
    }
}

#[test]
fn test_diagonal_example() {
    let game = play_all(&[4, 1, 0, 2, 8]);
    assert_eq!(game.status(), GameStatus::Won(Player::X));
    for pos in [Position::TopLeft, Position::Center, Position::BottomRight] {
        assert_eq!(game.board().get(pos), Square::Occupied(Player::X));
    }
}

#[test]
fn test_full_board_without_line_is_draw() {
    // X O X / O X X / O X O
    let game = play_all(&[0, 1, 2, 3, 4, 6, 5, 8, 7]);
    assert!(game.board().is_full());
    assert_eq!(game.status(), GameStatus::Draw);
    assert_eq!(game.status_message(), "Draw!");
}

#[test]
fn test_win_on_last_square_beats_draw() {
    let game = play_all(&[0, 1, 2, 4, 3, 5, 7, 8, 6]);
    assert!(game.board().is_full());
    assert_eq!(game.status(), GameStatus::Won(Player::X));
}

#[test]
fn test_occupied_square_rejected() {
    let game = play_all(&[4]);
    assert_eq!(game.apply_move(4), Err(MoveError::SquareOccupied(Position::Center)));
    assert_eq!(game.play(4), game);
    assert_eq!(game.current_player(), Player::O);
}

#[test]
fn test_move_after_game_over_rejected() {
    let game = play_all(&[0, 3, 1, 4, 2]);
    assert_eq!(game.apply_move(8), Err(MoveError::GameOver));
    assert_eq!(game.play(8), game);
    assert!(game.board().is_empty(Position::BottomRight));
}

#[test]
fn test_players_alternate() {
    let game = play_all(&[0]);
    assert_eq!(game.current_player(), Player::O);
    let game = game.play(1);
    assert_eq!(game.current_player(), Player::X);
    assert_eq!(game.status_message(), "Player X's turn");
}
