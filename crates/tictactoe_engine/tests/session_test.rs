//! Tests for the human-versus-computer session controller.

use tictactoe_engine::{
    Board, ComputerPlayer, Difficulty, EngineConfig, GameResult, GameSession, GameStatus, Mark,
    MoveError, PlayerRecord, SessionError, TimeBudget,
};

fn hard_session(computer_mark: Mark) -> GameSession {
    let computer = ComputerPlayer::new(Difficulty::Hard, computer_mark, TimeBudget::unlimited());
    GameSession::new(Board::new(), computer, "Alice", "Bot")
}

#[test]
fn test_human_moves_first_as_x() {
    let mut session = hard_session(Mark::O);
    assert_eq!(session.human_mark(), Mark::X);
    assert!(!session.is_computer_turn());

    let status = session.human_move(1, 1).unwrap();
    assert_eq!(status, GameStatus::InProgress);
    assert!(session.is_computer_turn());
}

#[test]
fn test_out_of_turn_requests_rejected() {
    let mut session = hard_session(Mark::O);
    assert_eq!(session.computer_move(), Err(SessionError::WrongTurn(Mark::O)));

    session.human_move(0, 0).unwrap();
    assert_eq!(session.human_move(0, 1), Err(SessionError::WrongTurn(Mark::X)));
}

#[test]
fn test_illegal_human_move_leaves_board() {
    let mut session = hard_session(Mark::O);
    session.human_move(0, 0).unwrap();
    session.computer_move().unwrap();
    let before = session.board().clone();

    let err = session.human_move(9, 9).unwrap_err();
    assert!(matches!(err, SessionError::Move(MoveError::OutOfBounds { .. })));
    assert_eq!(session.board(), &before);
}

#[test]
fn test_hard_computer_never_loses_to_scripted_human() {
    let mut session = hard_session(Mark::O);
    let script = [(0, 0), (2, 2), (0, 2), (2, 0), (1, 0), (0, 1), (1, 2), (2, 1), (1, 1)];

    for (row, col) in script {
        if session.status().is_over() {
            break;
        }
        if session.board().is_valid_move(row, col) {
            session.human_move(row, col).unwrap();
        } else {
            let mv = session.board().empty_cells().next().unwrap();
            session.human_move(mv.row, mv.col).unwrap();
        }
        if session.is_computer_turn() {
            session.computer_move().unwrap();
        }
    }
    while !session.status().is_over() {
        let mv = session.board().empty_cells().next().unwrap();
        session.human_move(mv.row, mv.col).unwrap();
        if session.is_computer_turn() {
            session.computer_move().unwrap();
        }
    }

    let events = session.outcome_events().expect("game finished");
    assert_ne!(events[1].result, GameResult::Loss);
    assert_eq!(events[0].name, "Alice");
    assert_eq!(events[1].name, "Bot");
}

#[test]
fn test_moves_after_game_over_rejected() {
    let mut session = hard_session(Mark::X);
    while !session.status().is_over() {
        if session.is_computer_turn() {
            session.computer_move().unwrap();
        } else {
            let mv = session.board().empty_cells().next().unwrap();
            session.human_move(mv.row, mv.col).unwrap();
        }
    }

    assert_eq!(session.computer_move(), Err(SessionError::GameOver));
    assert_eq!(session.human_move(0, 0), Err(SessionError::GameOver));
}

#[test]
fn test_outcome_events_feed_records() {
    let mut session = hard_session(Mark::X);
    assert!(session.outcome_events().is_none());

    // Human always takes the first empty cell; minimax as X wins that.
    while !session.status().is_over() {
        if session.is_computer_turn() {
            session.computer_move().unwrap();
        } else {
            let mv = session.board().empty_cells().next().unwrap();
            session.human_move(mv.row, mv.col).unwrap();
        }
    }

    let mut alice = PlayerRecord::new("Alice", Mark::O);
    let mut bot = PlayerRecord::new("Bot", Mark::X);
    let [human, computer] = session.outcome_events().unwrap();
    alice.record(human.result);
    bot.record(computer.result);

    assert_eq!(session.status(), GameStatus::Won(Mark::X));
    assert_eq!(alice.losses(), 1);
    assert_eq!(bot.wins(), 1);
    assert_eq!(bot.games_played(), 1);
}

#[test]
fn test_reset_starts_new_game() {
    let mut session = hard_session(Mark::X);
    session.computer_move().unwrap();
    session.reset();
    assert_eq!(session.board(), &Board::new());
    assert!(session.is_computer_turn());
}

#[test]
fn test_session_from_config() {
    let config = EngineConfig::from_toml_str(
        r#"
        difficulty = "easy"
        board_size = 4
        computer_mark = "X"
        seed = 3
        "#,
    )
    .unwrap();
    let mut session = GameSession::from_config(&config, "Alice", "Bot").unwrap();

    assert_eq!(session.board().size(), 4);
    assert_eq!(session.computer().difficulty(), Difficulty::Easy);
    let mv = session.computer_move().unwrap();
    assert!(mv.row < 4 && mv.col < 4);
}

#[test]
fn test_session_accepts_owned_and_borrowed_names() {
    let computer = ComputerPlayer::new(Difficulty::Easy, Mark::O, TimeBudget::unlimited());
    let owned = String::from("Alice");
    let session = GameSession::new(Board::new(), computer, owned, "Bot");
    assert_eq!(session.human_name(), "Alice");
    assert_eq!(session.computer_name(), "Bot");
}
