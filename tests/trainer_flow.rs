//! Trainer facade: feedback cues and status across a whole game

use std::sync::{Arc, Mutex};

use gomoku_trainer::feedback::{Feedback, FeedbackEvent};
use gomoku_trainer::{Catalogue, Pending, Pos, Trainer, TrainerConfig, BOARD_SIZE};

/// Sink that shares its events with the test
#[derive(Debug, Default, Clone)]
struct Recorder {
    events: Arc<Mutex<Vec<FeedbackEvent>>>,
}

impl Feedback for Recorder {
    fn emit(&mut self, event: FeedbackEvent) {
        self.events.lock().unwrap().push(event);
    }

    fn set_enabled(&mut self, _enabled: bool) {}

    fn is_enabled(&self) -> bool {
        true
    }
}

fn trainer_with_recorder() -> (Trainer, Recorder) {
    let recorder = Recorder::default();
    let trainer = Trainer::with_feedback(
        TrainerConfig::default(),
        Catalogue::builtin(BOARD_SIZE).unwrap(),
        Box::new(recorder.clone()),
    );
    (trainer, recorder)
}

#[test]
fn feedback_follows_game() {
    let (mut trainer, recorder) = trainer_with_recorder();
    assert!(trainer.start("endgame_open_four"));
    trainer.auto_reply();
    trainer.submit(Pos::new(0, 0));

    let answer = trainer.answer().unwrap();
    assert!(trainer.submit(answer.pos).is_complete());

    let events = recorder.events.lock().unwrap().clone();
    assert_eq!(
        events,
        vec![
            FeedbackEvent::GameStart,
            FeedbackEvent::StonePlaced,
            FeedbackEvent::Error,
            FeedbackEvent::StonePlaced,
            FeedbackEvent::PatternComplete,
        ]
    );
    assert_eq!(trainer.pending(), Pending::Finished);
    assert_eq!(trainer.winning_line().map(<[Pos]>::len), Some(5));
    assert_eq!(trainer.status(), "Correct move!");
}

#[test]
fn unplaceable_click_is_silent() {
    let (mut trainer, recorder) = trainer_with_recorder();
    trainer.start("classic_1");
    trainer.auto_reply();

    let occupied = trainer.board().last_move().unwrap().pos;
    trainer.submit(occupied);
    assert_eq!(trainer.session().error_count(), 0);
    assert!(!recorder
        .events
        .lock()
        .unwrap()
        .contains(&FeedbackEvent::Error));
}

#[test]
fn demonstration_completes_pattern() {
    let (mut trainer, _) = trainer_with_recorder();
    trainer.start("endgame_open_four");
    trainer.auto_reply();
    for col in 0..3 {
        trainer.submit(Pos::new(14, col));
    }

    assert_eq!(trainer.pending(), Pending::Demonstration);
    assert!(trainer.demonstrate().is_some());
    assert!(trainer.is_complete());
    assert!(trainer.winning_line().is_some());
    assert_eq!(trainer.demonstrate(), None);
}
