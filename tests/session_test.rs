//! Tests for the session state machine, rotation, and notifications.

use std::cell::RefCell;
use std::rc::Rc;

use tictactoe::{
    Board, BuildError, GameSession, Marker, MoveSource, NotificationSink, Outcome, Phase, Player,
    PlayerHandle, SessionError, TurnOutcome,
};

/// Sink that records every broadcast message for inspection.
#[derive(Clone, Default)]
struct RecordingSink(Rc<RefCell<Vec<String>>>);

impl NotificationSink for RecordingSink {
    fn notify(&mut self, message: &str) {
        self.0.borrow_mut().push(message.to_string());
    }
}

/// Source that replays a fixed script of moves.
struct ScriptedSource {
    moves: std::vec::IntoIter<(i32, i32)>,
    rejected: Vec<(i32, i32)>,
}

impl ScriptedSource {
    fn new(moves: Vec<(i32, i32)>) -> Self {
        Self {
            moves: moves.into_iter(),
            rejected: Vec::new(),
        }
    }
}

impl MoveSource for ScriptedSource {
    fn next_move(&mut self, _player: &Player, _board: &Board) -> anyhow::Result<(i32, i32)> {
        self.moves
            .next()
            .ok_or_else(|| anyhow::anyhow!("script exhausted"))
    }

    fn reject(&mut self, row: i32, col: i32) {
        self.rejected.push((row, col));
    }
}

fn two_player_session() -> (GameSession, PlayerHandle, PlayerHandle) {
    let mut session = GameSession::build("standard", 3).unwrap();
    let a = Player::new(1, "Ada".to_string(), Marker::new('X')).into_handle();
    let b = Player::new(2, "Grace".to_string(), Marker::new('O')).into_handle();
    session.add_player(a.clone());
    session.add_player(b.clone());
    (session, a, b)
}

#[test]
fn test_factory_rejects_unknown_variant() {
    assert!(matches!(
        GameSession::build("misere", 3),
        Err(BuildError::UnknownVariant(_))
    ));
}

#[test]
fn test_factory_rejects_zero_board() {
    assert_eq!(
        GameSession::build("standard", 0).map(|_| ()),
        Err(BuildError::InvalidBoardSize(0))
    );
}

#[test]
fn test_one_player_cannot_start() {
    let mut session = GameSession::build("standard", 3).unwrap();
    session.add_player(Player::new(1, "Ada".to_string(), Marker::new('X')).into_handle());

    assert_eq!(session.start(), Err(SessionError::InsufficientPlayers));
    assert_eq!(session.phase(), Phase::NotStarted);
}

#[test]
fn test_moves_refused_before_start() {
    let (mut session, _a, _b) = two_player_session();
    assert_eq!(session.submit_move(0, 0), Err(SessionError::NotStarted));
}

#[test]
fn test_x_wins_end_to_end() {
    let (mut session, a, b) = two_player_session();
    let sink = RecordingSink::default();
    session.add_sink(Box::new(sink.clone()));
    session.start().unwrap();

    // X(0,0) O(1,1) X(0,1) O(2,2) X(0,2) -> top row win for Ada
    for (row, col) in [(0, 0), (1, 1), (0, 1), (2, 2)] {
        assert_eq!(session.submit_move(row, col), Ok(TurnOutcome::Placed));
    }
    assert_eq!(session.submit_move(0, 2), Ok(TurnOutcome::Won));

    assert_eq!(session.phase(), Phase::Finished(Outcome::WinBy(1)));
    assert_eq!(a.borrow().score(), 1);
    assert_eq!(b.borrow().score(), 0);

    // rotation frozen with the winner still at the front
    assert_eq!(session.rotation(), vec![1, 2]);
    assert_eq!(session.submit_move(1, 0), Err(SessionError::Finished));

    let messages = sink.0.borrow();
    assert_eq!(messages.first().map(String::as_str), Some("Game started."));
    assert_eq!(messages[1], "Ada played at (0,0).");
    assert_eq!(messages.last().map(String::as_str), Some("Ada has won the game."));
    assert_eq!(messages.len(), 7); // start + 5 moves + win
}

#[test]
fn test_game_ends_in_draw() {
    let (mut session, a, b) = two_player_session();
    session.start().unwrap();

    // alternating fill with no three in a row for either player
    let moves = [
        (0, 0), (0, 1), (0, 2), (1, 1), (1, 0), (1, 2), (2, 1), (2, 0),
    ];
    for (row, col) in moves {
        assert_eq!(session.submit_move(row, col), Ok(TurnOutcome::Placed));
    }
    assert_eq!(session.submit_move(2, 2), Ok(TurnOutcome::Draw));

    assert_eq!(session.phase(), Phase::Finished(Outcome::Draw));
    assert_eq!(a.borrow().score(), 0);
    assert_eq!(b.borrow().score(), 0);
}

#[test]
fn test_invalid_move_keeps_same_player() {
    let (mut session, a, _b) = two_player_session();
    let sink = RecordingSink::default();
    session.add_sink(Box::new(sink.clone()));
    session.start().unwrap();

    assert_eq!(session.submit_move(9, 9), Ok(TurnOutcome::Invalid));
    assert_eq!(session.submit_move(-1, 0), Ok(TurnOutcome::Invalid));

    // still Ada's turn, nothing broadcast beyond the start message
    let current = session.current_player().unwrap();
    assert_eq!(current.borrow().id(), a.borrow().id());
    assert_eq!(sink.0.borrow().len(), 1);

    assert_eq!(session.submit_move(0, 0), Ok(TurnOutcome::Placed));
}

#[test]
fn test_occupied_cell_is_invalid() {
    let (mut session, _a, _b) = two_player_session();
    session.start().unwrap();

    assert_eq!(session.submit_move(1, 1), Ok(TurnOutcome::Placed));
    assert_eq!(session.submit_move(1, 1), Ok(TurnOutcome::Invalid));
    // Grace is still the acting player after the rejection
    assert_eq!(session.rotation(), vec![2, 1]);
}

#[test]
fn test_rotation_preserves_relative_order() {
    let mut session = GameSession::build("standard", 5).unwrap();
    for (id, name, marker) in [(1, "Ada", 'X'), (2, "Grace", 'O'), (3, "Alan", 'Z')] {
        session.add_player(Player::new(id, name.to_string(), Marker::new(marker)).into_handle());
    }
    session.start().unwrap();
    assert_eq!(session.rotation(), vec![1, 2, 3]);

    assert_eq!(session.submit_move(0, 0), Ok(TurnOutcome::Placed));
    assert_eq!(session.rotation(), vec![2, 3, 1]);

    assert_eq!(session.submit_move(1, 0), Ok(TurnOutcome::Placed));
    assert_eq!(session.rotation(), vec![3, 1, 2]);
}

#[test]
fn test_run_drives_scripted_game_to_win() {
    let (mut session, a, _b) = two_player_session();

    // Grace repeats Ada's square once; she is re-prompted without rotating
    let mut source = ScriptedSource::new(vec![
        (0, 0),
        (0, 0),
        (1, 1),
        (0, 1),
        (2, 2),
        (0, 2),
    ]);
    let outcome = session.run(&mut source).unwrap();

    assert_eq!(outcome, Outcome::WinBy(1));
    assert_eq!(source.rejected, vec![(0, 0)]);
    assert_eq!(a.borrow().score(), 1);
}

#[test]
fn test_run_refuses_single_player() {
    let mut session = GameSession::build("standard", 3).unwrap();
    session.add_player(Player::new(1, "Ada".to_string(), Marker::new('X')).into_handle());

    let mut source = ScriptedSource::new(vec![(0, 0)]);
    let err = session.run(&mut source).unwrap_err();
    assert_eq!(
        err.downcast::<SessionError>().unwrap(),
        SessionError::InsufficientPlayers
    );
    assert_eq!(session.phase(), Phase::NotStarted);
}

#[test]
fn test_console_source_skips_unparseable_lines() {
    let (mut session, a, _b) = two_player_session();

    let script: &[u8] = b"0 0\nnot a move\n1 1\n0 1\n2 2\n0 2\n";
    let mut source = tictactoe::ConsoleMoveSource::new(script);
    let outcome = session.run(&mut source).unwrap();

    assert_eq!(outcome, Outcome::WinBy(1));
    assert_eq!(a.borrow().score(), 1);
}

#[test]
fn test_scores_accumulate_across_sessions() {
    let a = Player::new(1, "Ada".to_string(), Marker::new('X')).into_handle();
    let b = Player::new(2, "Grace".to_string(), Marker::new('O')).into_handle();

    for _ in 0..2 {
        let mut session = GameSession::build("standard", 3).unwrap();
        session.add_player(a.clone());
        session.add_player(b.clone());
        session.start().unwrap();
        for (row, col) in [(0, 0), (1, 1), (0, 1), (2, 2)] {
            assert_eq!(session.submit_move(row, col), Ok(TurnOutcome::Placed));
        }
        assert_eq!(session.submit_move(0, 2), Ok(TurnOutcome::Won));
    }

    assert_eq!(a.borrow().score(), 2);
    assert_eq!(b.borrow().score(), 0);
}
