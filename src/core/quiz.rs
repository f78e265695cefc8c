//! Interest questionnaire
//!
//! Six fixed questions, five options each. Answers are kept in memory only
//! and submitted once every question has an answer.

use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// A multiple-choice question
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuizQuestion {
    /// Stable identifier, used as the answer key
    pub id: &'static str,
    /// Question text
    pub question: &'static str,
    /// Answer options in display order
    pub options: &'static [&'static str],
}

/// Answers keyed by question id
pub type QuizAnswers = BTreeMap<String, String>;

/// The fixed question bank
pub const QUESTIONS: &[QuizQuestion] = &[
    QuizQuestion {
        id: "tech_interest",
        question: "Which technology area interests you most?",
        options: &[
            "Artificial Intelligence & Machine Learning",
            "Web Development & Software Engineering",
            "Cybersecurity & Network Protection",
            "Data Science & Analytics",
            "Mobile App Development",
        ],
    },
    QuizQuestion {
        id: "work_style",
        question: "What type of work environment do you prefer?",
        options: &[
            "Individual coding and problem-solving",
            "Team collaboration on projects",
            "Research and development",
            "Client interaction and consulting",
            "Teaching and mentoring others",
        ],
    },
    QuizQuestion {
        id: "career_goal",
        question: "What is your primary career goal?",
        options: &[
            "Start my own tech company",
            "Work at a top tech company",
            "Pursue advanced research/PhD",
            "Become a consultant",
            "Work in academia/teaching",
        ],
    },
    QuizQuestion {
        id: "problem_type",
        question: "What type of problems do you enjoy solving?",
        options: &[
            "Mathematical and algorithmic challenges",
            "Creative design and user experience",
            "Security and risk management",
            "Business optimization and strategy",
            "Scientific research questions",
        ],
    },
    QuizQuestion {
        id: "learning_style",
        question: "How do you prefer to learn new concepts?",
        options: &[
            "Hands-on coding and experimentation",
            "Reading research papers and documentation",
            "Interactive workshops and tutorials",
            "Working on real-world projects",
            "Collaborative study groups",
        ],
    },
    QuizQuestion {
        id: "industry_preference",
        question: "Which industry most appeals to you?",
        options: &[
            "Technology and Software",
            "Healthcare and Biotechnology",
            "Finance and Banking",
            "Entertainment and Gaming",
            "Education and E-learning",
        ],
    },
];

/// Quiz errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizError {
    /// Option index outside the current question's options
    InvalidOption {
        /// Question being answered
        question_id: &'static str,
        /// Rejected 0-based index
        index: usize,
    },
    /// Submission attempted before every question was answered
    Incomplete {
        /// Ids of unanswered questions, in quiz order
        missing: Vec<&'static str>,
    },
}

impl fmt::Display for QuizError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidOption { question_id, index } => write!(
                f,
                "Option {} does not exist for question '{question_id}'",
                index.saturating_add(1)
            ),
            Self::Incomplete { missing } => write!(
                f,
                "Please answer all questions before submitting ({} unanswered: {})",
                missing.len(),
                missing.join(", ")
            ),
        }
    }
}

impl std::error::Error for QuizError {}

/// Progress through the questionnaire
#[derive(Debug, Clone)]
pub struct QuizSession {
    questions: &'static [QuizQuestion],
    current: usize,
    answers: QuizAnswers,
}

impl Default for QuizSession {
    fn default() -> Self {
        Self::new(QUESTIONS)
    }
}

impl QuizSession {
    /// Start at the first question with no answers
    #[must_use]
    pub const fn new(questions: &'static [QuizQuestion]) -> Self {
        Self {
            questions,
            current: 0,
            answers: BTreeMap::new(),
        }
    }

    /// All questions in order
    #[must_use]
    pub const fn questions(&self) -> &'static [QuizQuestion] {
        self.questions
    }

    /// 0-based index of the current question
    #[must_use]
    pub const fn current_index(&self) -> usize {
        self.current
    }

    /// The current question, `None` for an empty question bank
    #[must_use]
    pub fn current(&self) -> Option<&'static QuizQuestion> {
        self.questions.get(self.current)
    }

    /// Returns `true` on the final question
    #[must_use]
    pub fn is_last(&self) -> bool {
        self.current + 1 >= self.questions.len()
    }

    /// Advance one question; stays on the last question
    pub fn next(&mut self) {
        if !self.is_last() {
            self.current += 1;
        }
    }

    /// Go back one question; stays on the first question
    pub fn previous(&mut self) {
        self.current = self.current.saturating_sub(1);
    }

    /// Record the option at `index` (0-based) for the current question
    ///
    /// # Errors
    /// Returns [`QuizError::InvalidOption`] when `index` is out of range.
    pub fn answer(&mut self, index: usize) -> Result<&'static str, QuizError> {
        let Some(question) = self.current() else {
            return Err(QuizError::Incomplete {
                missing: Vec::new(),
            });
        };
        let option = question
            .options
            .get(index)
            .copied()
            .ok_or(QuizError::InvalidOption {
                question_id: question.id,
                index,
            })?;
        self.answers
            .insert(question.id.to_string(), option.to_string());
        Ok(option)
    }

    /// Answer recorded for a question id
    #[must_use]
    pub fn answer_for(&self, question_id: &str) -> Option<&str> {
        self.answers.get(question_id).map(String::as_str)
    }

    /// Number of answered questions
    #[must_use]
    pub fn answered(&self) -> usize {
        self.answers.len()
    }

    /// Ids of unanswered questions in quiz order
    #[must_use]
    pub fn missing(&self) -> Vec<&'static str> {
        self.questions
            .iter()
            .filter(|q| !self.answers.contains_key(q.id))
            .map(|q| q.id)
            .collect()
    }

    /// The answers, once every question has one
    ///
    /// # Errors
    /// Returns [`QuizError::Incomplete`] listing the unanswered questions.
    pub fn submission(&self) -> Result<&QuizAnswers, QuizError> {
        let missing = self.missing();
        if missing.is_empty() {
            Ok(&self.answers)
        } else {
            Err(QuizError::Incomplete { missing })
        }
    }
}

/// Parse a comma-separated list of 1-based option numbers, one per question,
/// into a finished quiz session.
///
/// # Errors
/// Returns a message when a value is not a number or an option is out of range.
pub fn session_from_choices(choices: &str) -> Result<QuizSession, String> {
    let mut session = QuizSession::default();
    let values: Vec<&str> = choices
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect();

    for (position, raw) in values.iter().enumerate() {
        if position >= session.questions().len() {
            return Err(format!(
                "Too many answers: the quiz has {} questions",
                session.questions().len()
            ));
        }
        let number: usize = raw
            .parse()
            .map_err(|_| format!("Invalid answer '{raw}': expected an option number"))?;
        let index = number
            .checked_sub(1)
            .ok_or_else(|| format!("Invalid answer '{raw}': options are numbered from 1"))?;
        session.answer(index).map_err(|e| e.to_string())?;
        session.next();
    }
    Ok(session)
}
