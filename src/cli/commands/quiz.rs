//! Quiz command handler

use super::Backend;
use dept_advisor::core::quiz::{session_from_choices, QuizSession};
use dept_advisor::{error, info};
use std::io::{self, BufRead, Write};

/// Run the quiz from `--answers` or interactively, then submit unless `no_submit`
pub fn run(answers: Option<&str>, no_submit: bool, backend: &Backend) -> bool {
    let session = match answers {
        Some(choices) => match session_from_choices(choices) {
            Ok(session) => session,
            Err(e) => {
                eprintln!("✗ {e}");
                return false;
            }
        },
        None => match ask_interactively() {
            Some(session) => session,
            None => {
                eprintln!("✗ Quiz cancelled");
                return false;
            }
        },
    };

    let submission = match session.submission() {
        Ok(submission) => submission,
        Err(e) => {
            eprintln!("✗ {e}");
            return false;
        }
    };

    println!("\nYour answers:");
    for question in session.questions() {
        if let Some(answer) = session.answer_for(question.id) {
            println!("  {}: {answer}", question.question);
        }
    }

    if no_submit {
        return true;
    }

    match backend.api().submit_interest_quiz(submission) {
        Ok(()) => {
            info!("Quiz submitted with {} answers", submission.len());
            println!("\n✓ Quiz submitted! Run `deptadvisor recommend` to see your recommendations.");
            true
        }
        Err(e) => {
            error!("Quiz submission failed: {e}");
            eprintln!("✗ Failed to submit quiz. Please try again.");
            false
        }
    }
}

/// Prompt for each question; `b` goes back. Returns `None` on end of input.
fn ask_interactively() -> Option<QuizSession> {
    let mut session = QuizSession::default();
    let total = session.questions().len();
    let stdin = io::stdin();
    let mut input = stdin.lock();

    loop {
        let question = session.current()?;
        println!(
            "\nQuestion {} of {total}: {}",
            session.current_index() + 1,
            question.question
        );
        for (i, option) in question.options.iter().enumerate() {
            let marker = if session.answer_for(question.id) == Some(*option) {
                '*'
            } else {
                ' '
            };
            println!(" {marker}{}. {option}", i + 1);
        }
        print!("Choice (1-{}, b = back): ", question.options.len());
        io::stdout().flush().ok();

        let mut line = String::new();
        match input.read_line(&mut line) {
            Ok(0) | Err(_) => return None,
            Ok(_) => {}
        }
        let line = line.trim();

        if line.eq_ignore_ascii_case("b") || line.eq_ignore_ascii_case("back") {
            session.previous();
            continue;
        }

        let Some(index) = line.parse::<usize>().ok().and_then(|n| n.checked_sub(1)) else {
            eprintln!("✗ Enter an option number");
            continue;
        };
        if let Err(e) = session.answer(index) {
            eprintln!("✗ {e}");
            continue;
        }

        if session.is_last() {
            if session.missing().is_empty() {
                return Some(session);
            }
            // Jump back to the first unanswered question
            while session.current_index() > 0 {
                session.previous();
            }
            while session
                .current()
                .is_some_and(|q| session.answer_for(q.id).is_some())
            {
                session.next();
            }
        } else {
            session.next();
        }
    }
}
