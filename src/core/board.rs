//! Mutation engine: every change to the board funnels through here

use crate::core::document;
use crate::core::models::course::NEW_COURSE_NAME;
use crate::core::models::{Course, RootState, Term};
use crate::core::store::Store;
use crate::warn;

/// The fixed set of board operations
///
/// Callers (the CLI, tests, any future front end) describe changes as
/// commands and submit them to [`Board::apply`], the only mutation path.
/// This keeps invariant enforcement and save-on-mutation impossible to
/// bypass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Append a new empty term named `Semestre N`
    AddTerm,
    /// Delete a term and every course in it
    RemoveTerm {
        /// Target term id
        term_id: String,
    },
    /// Rename a term (empty input falls back to the placeholder label)
    RenameTerm {
        /// Target term id
        term_id: String,
        /// New display label
        name: String,
    },
    /// Append a default course to a term, or to the first term when no
    /// target is given
    AddCourse {
        /// Target term id; `None` means the first term
        term_id: Option<String>,
    },
    /// Remove a course from a term
    RemoveCourse {
        /// Term currently holding the course
        term_id: String,
        /// Target course id
        course_id: String,
    },
    /// Rename a course (empty input falls back to the placeholder label)
    RenameCourse {
        /// Target course id
        course_id: String,
        /// New display label
        name: String,
    },
    /// Replace a course's credits from raw user input (always coerced,
    /// never rejected)
    SetCredits {
        /// Target course id
        course_id: String,
        /// Raw numeric input
        raw: String,
    },
    /// Flip a course's completion flag
    ToggleDone {
        /// Target course id
        course_id: String,
    },
    /// Move a course to the end of another term
    MoveCourse {
        /// Target course id
        course_id: String,
        /// Term currently holding the course
        from_term: String,
        /// Destination term
        to_term: String,
    },
    /// Flip the display theme
    ToggleTheme,
    /// Replace the board with the built-in example document; the caller
    /// is responsible for gating this behind a confirmation
    Reset,
    /// Replace the board with an imported exchange document
    Import {
        /// Raw JSON text of the document
        document: String,
    },
}

/// Controller owning the root state and its backing store
///
/// Exactly one board instance should be live at a time; the state behind
/// it is only reachable read-only, so all changes pass through
/// [`Board::apply`] and are persisted before control returns.
#[derive(Debug)]
pub struct Board {
    state: RootState,
    store: Store,
}

impl Board {
    /// Open the board from the store, falling back to the built-in
    /// example document when nothing (valid) is saved
    #[must_use]
    pub fn open(store: Store) -> Self {
        let state = store.load().unwrap_or_else(RootState::default_board);
        Self { state, store }
    }

    /// Current state, read-only
    ///
    /// Re-read after every mutation; derived values must not be cached
    /// across mutations.
    #[must_use]
    pub const fn state(&self) -> &RootState {
        &self.state
    }

    /// Serialize the current state to the exchange document format
    #[must_use]
    pub fn export(&self) -> String {
        document::to_json(&self.state)
    }

    /// Execute one command against the board
    ///
    /// On success the new state is saved to the store before returning
    /// and a short status message is produced for display. A failed save
    /// is logged but does not fail the mutation; the store's atomic
    /// replace keeps the previous record intact.
    ///
    /// # Errors
    /// Returns a message when the command cannot proceed (adding a
    /// course with no term to hold it, importing an invalid document).
    /// Failures never change the state.
    pub fn apply(&mut self, command: Command) -> Result<String, String> {
        let message = self.execute(command)?;
        if let Err(e) = self.store.save(&self.state) {
            warn!("Board save failed: {e}");
        }
        Ok(message)
    }

    fn execute(&mut self, command: Command) -> Result<String, String> {
        match command {
            Command::AddTerm => Ok(self.add_term()),
            Command::RemoveTerm { term_id } => Ok(self.remove_term(&term_id)),
            Command::RenameTerm { term_id, name } => Ok(self.rename_term(&term_id, &name)),
            Command::AddCourse { term_id } => self.add_course(term_id.as_deref()),
            Command::RemoveCourse { term_id, course_id } => {
                Ok(self.remove_course(&term_id, &course_id))
            }
            Command::RenameCourse { course_id, name } => Ok(self.rename_course(&course_id, &name)),
            Command::SetCredits { course_id, raw } => Ok(self.set_credits(&course_id, &raw)),
            Command::ToggleDone { course_id } => Ok(self.toggle_done(&course_id)),
            Command::MoveCourse {
                course_id,
                from_term,
                to_term,
            } => Ok(self.move_course(&course_id, &from_term, &to_term)),
            Command::ToggleTheme => Ok(self.toggle_theme()),
            Command::Reset => Ok(self.reset()),
            Command::Import { document } => self.import(&document),
        }
    }

    fn add_term(&mut self) -> String {
        let name = format!("Semestre {}", self.state.semesters.len() + 1);
        self.state.semesters.push(Term::new(&name));
        format!("Term '{name}' added")
    }

    fn remove_term(&mut self, term_id: &str) -> String {
        let before = self.state.semesters.len();
        self.state.semesters.retain(|t| t.id != term_id);
        if self.state.semesters.len() < before {
            "Term removed".to_string()
        } else {
            "No such term; nothing removed".to_string()
        }
    }

    fn rename_term(&mut self, term_id: &str, name: &str) -> String {
        self.state.find_term_mut(term_id).map_or_else(
            || "No such term; nothing renamed".to_string(),
            |term| {
                term.rename(name);
                format!("Term renamed to '{}'", term.name)
            },
        )
    }

    fn add_course(&mut self, term_id: Option<&str>) -> Result<String, String> {
        let term = match term_id {
            Some(id) => self
                .state
                .find_term_mut(id)
                .ok_or_else(|| format!("No term with id '{id}'"))?,
            None => self
                .state
                .semesters
                .first_mut()
                .ok_or_else(|| "The board has no terms yet; add a term first".to_string())?,
        };
        term.push_course(Course::new(NEW_COURSE_NAME, 0));
        Ok(format!("Course added to '{}'", term.name))
    }

    fn remove_course(&mut self, term_id: &str, course_id: &str) -> String {
        self.state
            .find_term_mut(term_id)
            .and_then(|term| term.take_course(course_id))
            .map_or_else(
                || "No such course; nothing removed".to_string(),
                |course| format!("Course '{}' removed", course.name),
            )
    }

    fn rename_course(&mut self, course_id: &str, name: &str) -> String {
        self.state.find_course_mut(course_id).map_or_else(
            || "No such course; nothing renamed".to_string(),
            |course| {
                course.rename(name);
                format!("Course renamed to '{}'", course.name)
            },
        )
    }

    fn set_credits(&mut self, course_id: &str, raw: &str) -> String {
        self.state.find_course_mut(course_id).map_or_else(
            || "No such course; credits unchanged".to_string(),
            |course| {
                course.set_credits(raw);
                format!("Credits set to {}", course.credits)
            },
        )
    }

    fn toggle_done(&mut self, course_id: &str) -> String {
        self.state.find_course_mut(course_id).map_or_else(
            || "No such course; nothing toggled".to_string(),
            |course| {
                course.toggle_done();
                if course.done {
                    format!("'{}' marked as done", course.name)
                } else {
                    format!("'{}' marked as pending", course.name)
                }
            },
        )
    }

    fn move_course(&mut self, course_id: &str, from_term: &str, to_term: &str) -> String {
        if from_term == to_term {
            return "Course is already in that term".to_string();
        }

        // Resolve both ends before detaching anything; a failed move must
        // not leave a partial state behind.
        let Some(from_idx) = self.state.semesters.iter().position(|t| t.id == from_term) else {
            return "No such source term; nothing moved".to_string();
        };
        let Some(to_idx) = self.state.semesters.iter().position(|t| t.id == to_term) else {
            return "No such destination term; nothing moved".to_string();
        };
        let Some(course) = self.state.semesters[from_idx].take_course(course_id) else {
            return "Course not found in the source term; nothing moved".to_string();
        };

        let message = format!(
            "Course '{}' moved to '{}'",
            course.name, self.state.semesters[to_idx].name
        );
        self.state.semesters[to_idx].push_course(course);
        message
    }

    fn toggle_theme(&mut self) -> String {
        self.state.theme = self.state.theme.toggled();
        format!("Theme set to {}", self.state.theme.as_str())
    }

    fn reset(&mut self) -> String {
        self.state = RootState::default_board();
        "Board reset to the example malla".to_string()
    }

    fn import(&mut self, raw: &str) -> Result<String, String> {
        let state = document::parse(raw)?;
        self.state = state;
        Ok("Board imported".to_string())
    }
}
