//! Interactive calculator session
//!
//! `CalculatorSession` owns the only mutable calculator state (the GPA text
//! and the current preference order) and replaces it with the values returned
//! by the engine. Commands are plain text so any front end (stdin, a script,
//! a test) can drive a session.

use super::scoring::{PreferenceOrder, PreferenceScoringEngine, ReorderOutcome, ScoreRow};
use std::fmt;
use std::str::FromStr;

/// Help text for the session command language
pub const SESSION_HELP: &str = "Commands:
  gpa <value>             set your GPA (0.00 - 4.00)
  move <dept> <target>    move <dept> into <target>'s position
  reset                   restore the default order
  show                    print the score table
  help                    show this help
  quit                    leave the session";

/// A single session command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    /// Replace the GPA text
    SetGpa(String),
    /// Relocate one department into another's slot
    Move {
        /// Department being moved (id or short label)
        moved: String,
        /// Department whose slot it takes (id or short label)
        target: String,
    },
    /// Restore the catalog order
    Reset,
    /// Render the table
    Show,
    /// Print help
    Help,
    /// End the session
    Quit,
}

impl FromStr for SessionCommand {
    type Err = String;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut parts = line.split_whitespace();
        let Some(verb) = parts.next() else {
            return Err("Empty command. Type 'help' for a list of commands.".to_string());
        };
        let args: Vec<&str> = parts.collect();

        match (verb.to_ascii_lowercase().as_str(), args.as_slice()) {
            ("gpa", [value]) => Ok(Self::SetGpa((*value).to_string())),
            ("gpa", []) => Ok(Self::SetGpa(String::new())),
            ("move" | "mv", [moved, target]) => Ok(Self::Move {
                moved: (*moved).to_string(),
                target: (*target).to_string(),
            }),
            ("move" | "mv", _) => Err("Usage: move <dept> <target>".to_string()),
            ("reset", []) => Ok(Self::Reset),
            ("show" | "ls", []) => Ok(Self::Show),
            ("help" | "?", _) => Ok(Self::Help),
            ("quit" | "exit" | "q", _) => Ok(Self::Quit),
            (other, _) => Err(format!(
                "Unknown command '{other}'. Type 'help' for a list of commands."
            )),
        }
    }
}

/// What happened after applying a command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// GPA text replaced; `valid` reports the validity gate
    GpaUpdated {
        /// Whether the new text can be scored
        valid: bool,
    },
    /// The order changed
    Reordered,
    /// The move named an unknown department or the same one twice
    Unchanged,
    /// Reordering is disabled for this session
    ReorderDisabled,
    /// The order was restored to the catalog order
    Reset,
    /// Render the table
    Show,
    /// Render help
    Help,
    /// Leave the session
    Quit,
}

impl fmt::Display for SessionEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GpaUpdated { valid: true } => write!(f, "GPA updated"),
            Self::GpaUpdated { valid: false } => {
                write!(f, "Enter a GPA between 0.00 and 4.00 to see your percentages")
            }
            Self::Reordered => write!(f, "Preference order updated"),
            Self::Unchanged => write!(f, "Order unchanged"),
            Self::ReorderDisabled => write!(f, "Reordering is disabled for this calculator"),
            Self::Reset => write!(f, "Order reset to default"),
            Self::Show | Self::Help | Self::Quit => Ok(()),
        }
    }
}

/// Calculator state for one interactive session
#[derive(Debug, Clone)]
pub struct CalculatorSession<'e> {
    engine: &'e PreferenceScoringEngine,
    gpa_text: String,
    order: PreferenceOrder,
}

impl<'e> CalculatorSession<'e> {
    /// Start a session with an empty GPA and the catalog order
    #[must_use]
    pub fn new(engine: &'e PreferenceScoringEngine) -> Self {
        Self {
            engine,
            gpa_text: String::new(),
            order: engine.reset_order(),
        }
    }

    /// Current GPA text
    #[must_use]
    pub fn gpa_text(&self) -> &str {
        &self.gpa_text
    }

    /// Current preference order
    #[must_use]
    pub const fn order(&self) -> &PreferenceOrder {
        &self.order
    }

    /// Rows for the current state, `None` while the GPA is not valid
    #[must_use]
    pub fn table(&self) -> Option<Vec<ScoreRow>> {
        self.engine.score_table(&self.gpa_text, &self.order)
    }

    /// Apply one command and report what happened
    pub fn apply(&mut self, command: SessionCommand) -> SessionEvent {
        match command {
            SessionCommand::SetGpa(text) => {
                self.gpa_text = text;
                SessionEvent::GpaUpdated {
                    valid: super::scoring::is_valid_gpa(&self.gpa_text),
                }
            }
            SessionCommand::Move { moved, target } => {
                let moved_id = self.engine.resolve_id(&moved).unwrap_or(&moved).to_string();
                let target_id = self.engine.resolve_id(&target).unwrap_or(&target).to_string();
                let outcome = self.engine.reorder(&self.order, &moved_id, &target_id);
                let event = match outcome {
                    ReorderOutcome::Moved(_) => SessionEvent::Reordered,
                    ReorderOutcome::Unchanged(_) => SessionEvent::Unchanged,
                    ReorderOutcome::Disabled(_) => SessionEvent::ReorderDisabled,
                };
                self.order = outcome.into_order();
                event
            }
            SessionCommand::Reset => {
                if !self.engine.options().reorderable {
                    return SessionEvent::ReorderDisabled;
                }
                self.order = self.engine.reset_order();
                SessionEvent::Reset
            }
            SessionCommand::Show => SessionEvent::Show,
            SessionCommand::Help => SessionEvent::Help,
            SessionCommand::Quit => SessionEvent::Quit,
        }
    }
}
