//! End-to-end training scenarios across board, pattern store and session

use gomoku_trainer::board::{parse_coord, Board, Move, Pos, Stone, BOARD_SIZE};
use gomoku_trainer::config::{ColorAssignment, TrainerConfig};
use gomoku_trainer::pattern::{Catalogue, PatternStore};
use gomoku_trainer::session::{ErrorInfo, Reply, Submission, TrainingSession, Turn};

// =============================================================================
// Helpers
// =============================================================================

/// One black setup stone, then a script opened by White at C3
const WHITE_OPENS: &str = r#"{"patterns": [
    {"id": "white_opens", "name": "White opens", "difficulty": "beginner",
     "setup": ["H8:black"],
     "script": ["C3:white", "I9:black", "D4:white"]}
]}"#;

fn coord(text: &str) -> Pos {
    parse_coord(text, BOARD_SIZE).unwrap()
}

/// Load `id` and lay out its setup the way a full restart does
fn load(
    catalogue: Catalogue,
    id: &str,
    config: &TrainerConfig,
) -> (TrainingSession, PatternStore, Board) {
    let mut store = PatternStore::new(catalogue);
    assert!(store.load_pattern(id));

    let mut board = Board::with_size(config.board_size);
    for setup in store.setup() {
        assert!(board.place(setup.pos, setup.stone));
    }

    let mut session = TrainingSession::new(config);
    session.initialize_colors(&store);
    (session, store, board)
}

fn white_human() -> (TrainingSession, PatternStore, Board) {
    let config = TrainerConfig {
        color_assignment: ColorAssignment::AlwaysWhite,
        ..Default::default()
    };
    let catalogue = Catalogue::from_json(WHITE_OPENS, BOARD_SIZE).unwrap();
    load(catalogue, "white_opens", &config)
}

// =============================================================================
// Scenarios
// =============================================================================

#[test]
fn correct_first_move_advances() {
    let (mut session, mut store, mut board) = white_human();
    assert!(session.is_human_turn());

    let outcome = session.submit_human_move(&mut store, &mut board, coord("C3"));
    assert_eq!(
        outcome.verdict,
        Submission::Correct {
            played: Move::new(2, 2, Stone::White),
            complete: false,
            automated_next: true,
        }
    );
    assert_eq!(store.cursor(), 1);
    assert_eq!(session.turn(), Turn::Automated);
    assert_eq!(board.get(Pos::new(2, 2)), Stone::White);
}

#[test]
fn wrong_move_hints_region_of_answer() {
    let (mut session, mut store, mut board) = white_human();
    let before = board.clone();

    let outcome = session.submit_human_move(&mut store, &mut board, coord("K11"));
    assert!(!outcome.is_success());
    assert_eq!(outcome.hint(), Some("upper left"));
    assert!(outcome.message.contains("upper left"));
    assert_eq!(board, before);
    assert_eq!(store.cursor(), 0);
}

#[test]
fn last_move_completes_pattern() {
    let catalogue = Catalogue::builtin(BOARD_SIZE).unwrap();
    let (mut session, mut store, mut board) =
        load(catalogue, "endgame_open_four", &TrainerConfig::default());
    assert_eq!(session.human_color(), Stone::Black);

    let reply = session.auto_play_opponent_move(&mut store, &mut board);
    assert!(reply.is_success());
    assert_eq!(store.peek_next_move(), None);

    let outcome = session.submit_human_move(&mut store, &mut board, coord("J8"));
    assert!(outcome.is_complete());
    assert!(store.is_complete());
    assert_eq!(store.current_move(), None);
    assert!(board.check_win(coord("J8"), Stone::Black));

    let reply = session.auto_play_opponent_move(&mut store, &mut board);
    assert_eq!(reply.verdict, Reply::AlreadyComplete);
}

#[test]
fn error_ladder_reveals_scripted_move() {
    let (mut session, mut store, mut board) = white_human();

    let first = session.submit_human_move(&mut store, &mut board, coord("O15"));
    assert!(matches!(first.verdict, Submission::Wrong { remaining: 2, .. }));

    let second = session.submit_human_move(&mut store, &mut board, coord("N15"));
    assert!(matches!(second.verdict, Submission::Wrong { remaining: 1, .. }));

    let third = session.submit_human_move(&mut store, &mut board, coord("M15"));
    match third.verdict {
        Submission::Reveal { answer, .. } => {
            assert_eq!(Some(answer), store.current_move());
            assert_eq!(answer.pos, coord("C3"));
        }
        other => panic!("expected reveal, got {other:?}"),
    }
    assert!(third.message.contains("C3"));

    let shown = session.auto_resolve_current_move(&mut store, &mut board);
    assert_eq!(shown.map(|m| m.pos), Some(coord("C3")));
    assert_eq!(session.turn(), Turn::Automated);
}

#[test]
fn full_reset_matches_fresh_load() {
    let (mut session, mut store, mut board) = white_human();
    let fresh_board = board.clone();
    let fresh_turn = session.turn();
    let fresh_errors = session.error_info();

    session.submit_human_move(&mut store, &mut board, coord("C3"));
    session.auto_play_opponent_move(&mut store, &mut board);
    session.submit_human_move(&mut store, &mut board, coord("A1"));
    session.submit_human_move(&mut store, &mut board, coord("A2"));

    board.reset();
    store.reset_cursor();
    for setup in store.setup() {
        board.place(setup.pos, setup.stone);
    }
    session.reset(&store);

    assert_eq!(board, fresh_board);
    assert_eq!(store.cursor(), 0);
    assert_eq!(session.turn(), fresh_turn);
    assert_eq!(session.error_info(), fresh_errors);
    assert_eq!(
        fresh_errors,
        ErrorInfo { error_count: 0, max_errors: 3, remaining: 3, last_rejected: None }
    );
}

#[test]
fn undo_never_removes_setup() {
    let (mut session, mut store, mut board) = white_human();
    session.submit_human_move(&mut store, &mut board, coord("C3"));

    let undone = session.undo_to_human(&mut store, &mut board);
    assert_eq!(undone, vec![Move::new(2, 2, Stone::White)]);
    assert_eq!(board.history(), store.setup());

    assert!(session.undo_to_human(&mut store, &mut board).is_empty());
    assert_eq!(board.stone_count(), 1);
    assert!(session.is_human_turn());
}

#[test]
fn every_builtin_pattern_plays_through() {
    let catalogue = Catalogue::builtin(BOARD_SIZE).unwrap();
    let ids: Vec<String> = catalogue.patterns().iter().map(|p| p.id.clone()).collect();

    for id in ids {
        let (mut session, mut store, mut board) =
            load(catalogue.clone(), &id, &TrainerConfig::default());

        while session.turn() != Turn::Complete {
            if session.is_automated_turn() {
                assert!(session.auto_play_opponent_move(&mut store, &mut board).is_success());
            } else {
                let answer = session.answer(&store).unwrap();
                assert!(session
                    .submit_human_move(&mut store, &mut board, answer.pos)
                    .is_success());
            }
        }

        let last = board.last_move().unwrap();
        assert!(board.check_win(last.pos, last.stone), "{id} does not end in five");
    }
}
