//! Integration tests for the interest quiz

use dept_advisor::core::quiz::{session_from_choices, QuizError, QuizSession, QUESTIONS};

#[test]
fn full_answer_set_produces_submission() {
    let quiz = session_from_choices("1, 3, 2, 5, 4, 1").unwrap();
    let answers = quiz.submission().unwrap();

    assert_eq!(answers.len(), QUESTIONS.len());
    assert_eq!(
        answers.get("tech_interest").map(String::as_str),
        Some("Artificial Intelligence & Machine Learning")
    );
    let body = serde_json::to_value(answers).unwrap();
    assert!(body.is_object());
}

#[test]
fn partial_answers_cannot_be_submitted() {
    let quiz = session_from_choices("2,2").unwrap();
    match quiz.submission() {
        Err(QuizError::Incomplete { missing }) => assert_eq!(missing.len(), QUESTIONS.len() - 2),
        other => panic!("expected Incomplete, got {other:?}"),
    }
}

#[test]
fn invalid_choices_are_rejected() {
    assert!(session_from_choices("0").is_err());
    assert!(session_from_choices("6").is_err());
    assert!(session_from_choices("one").is_err());
    assert!(session_from_choices("1,1,1,1,1,1,1").is_err());
}

#[test]
fn changing_an_answer_replaces_it() {
    let mut quiz = QuizSession::default();
    quiz.answer(0).unwrap();
    quiz.answer(4).unwrap();
    assert_eq!(quiz.answered(), 1);
    assert_eq!(
        quiz.answer_for(QUESTIONS[0].id),
        Some(QUESTIONS[0].options[4])
    );
}
