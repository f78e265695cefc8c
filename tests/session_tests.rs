//! Integration tests for calculator sessions

use dept_advisor::core::scoring::{EngineOptions, PreferenceScoringEngine};
use dept_advisor::core::session::{CalculatorSession, SessionCommand, SessionEvent};

fn run(session: &mut CalculatorSession, line: &str) -> SessionEvent {
    let command: SessionCommand = line.parse().expect("valid command");
    session.apply(command)
}

#[test]
fn typing_a_gpa_reveals_the_table() {
    let engine = PreferenceScoringEngine::default();
    let mut session = CalculatorSession::new(&engine);
    assert!(session.table().is_none());

    assert_eq!(run(&mut session, "gpa 3.6"), SessionEvent::GpaUpdated { valid: true });
    let rows = session.table().unwrap();
    assert_eq!(rows.len(), 6);
    assert_eq!(rows[0].formatted_total(), "91.0%");

    assert_eq!(run(&mut session, "gpa 5"), SessionEvent::GpaUpdated { valid: false });
    assert!(session.table().is_none());
}

#[test]
fn moves_accept_labels_and_ids() {
    let engine = PreferenceScoringEngine::default();
    let mut session = CalculatorSession::new(&engine);

    assert_eq!(run(&mut session, "move chemical civil"), SessionEvent::Reordered);
    assert_eq!(session.order().rank_of("chemical"), Some(1));

    assert_eq!(run(&mut session, "mv chemical chemical"), SessionEvent::Unchanged);
    assert_eq!(run(&mut session, "move nursing civil"), SessionEvent::Unchanged);

    assert_eq!(run(&mut session, "reset"), SessionEvent::Reset);
    assert_eq!(session.order(), &engine.reset_order());
}

#[test]
fn gpa_survives_reordering() {
    let engine = PreferenceScoringEngine::default();
    let mut session = CalculatorSession::new(&engine);
    run(&mut session, "gpa 4.0");
    run(&mut session, "move mechanical civil");

    assert_eq!(session.gpa_text(), "4.0");
    let rows = session.table().unwrap();
    assert_eq!(rows[0].department_id, "mechanical");
    assert_eq!(rows[0].formatted_total(), "100.0%");
}

#[test]
fn fixed_session_rejects_moves_and_reset() {
    let engine = PreferenceScoringEngine::with_options(EngineOptions { reorderable: false });
    let mut session = CalculatorSession::new(&engine);

    assert_eq!(run(&mut session, "move chemical civil"), SessionEvent::ReorderDisabled);
    assert_eq!(run(&mut session, "reset"), SessionEvent::ReorderDisabled);
    assert_eq!(session.order(), &engine.reset_order());
}

#[test]
fn bad_commands_are_rejected() {
    assert!("".parse::<SessionCommand>().is_err());
    assert!("move civil".parse::<SessionCommand>().is_err());
    assert!("dance".parse::<SessionCommand>().is_err());
    assert_eq!("quit".parse::<SessionCommand>(), Ok(SessionCommand::Quit));
}
