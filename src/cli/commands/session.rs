//! Interactive calculator session on stdin

use super::{engine_from_config, print_score_table};
use dept_advisor::core::config::Config;
use dept_advisor::core::session::{CalculatorSession, SessionCommand, SessionEvent, SESSION_HELP};
use dept_advisor::{debug, error};
use std::io::{self, BufRead, Write};

/// Run the session until `quit` or end of input
pub fn run(config: &Config) -> bool {
    let engine = engine_from_config(config);
    let mut session = CalculatorSession::new(&engine);

    println!("Department preference calculator");
    if !engine.options().reorderable {
        println!("(fixed order: moves are disabled)");
    }
    println!("{SESSION_HELP}\n");
    print_state(&session);

    let stdin = io::stdin();
    let mut input = stdin.lock();
    loop {
        print!("> ");
        io::stdout().flush().ok();

        let mut line = String::new();
        match input.read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => {}
            Err(e) => {
                error!("Failed to read session input: {e}");
                eprintln!("✗ Failed to read input: {e}");
                return false;
            }
        }
        if line.trim().is_empty() {
            continue;
        }

        let command = match line.parse::<SessionCommand>() {
            Ok(command) => command,
            Err(e) => {
                eprintln!("✗ {e}");
                continue;
            }
        };
        debug!("session command: {command:?}");

        match session.apply(command) {
            SessionEvent::Quit => break,
            SessionEvent::Help => println!("{SESSION_HELP}"),
            SessionEvent::Show => print_state(&session),
            event @ (SessionEvent::GpaUpdated { valid: true }
            | SessionEvent::Reordered
            | SessionEvent::Reset) => {
                println!("✓ {event}\n");
                print_state(&session);
            }
            event => println!("{event}"),
        }
    }
    true
}

fn print_state(session: &CalculatorSession) {
    if let Some(rows) = session.table() {
        print_score_table(&rows);
    } else {
        println!("Enter a GPA between 0.00 and 4.00 to see your percentages.");
        let order: Vec<&str> = session
            .order()
            .entries()
            .iter()
            .map(|dept| dept.short_label.as_str())
            .collect();
        println!("Current order: {}", order.join(" > "));
    }
}
