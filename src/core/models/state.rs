//! Root state: the single document holding every term and the display
//! preference

use serde::{Deserialize, Serialize};

use super::course::Course;
use super::term::Term;

/// Display preference persisted alongside the board
///
/// Has no bearing on board logic; it only rides along in the document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Light theme
    Light,
    /// Dark theme (initial preference)
    #[default]
    Dark,
}

impl Theme {
    /// The other theme value
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Lowercase label as used in the exchange document
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

/// The root aggregate: display preference plus the ordered term list
///
/// Exactly one instance is live at a time, owned by the board controller.
/// Readers must re-read after each mutation rather than caching derived
/// values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RootState {
    /// Display preference
    pub theme: Theme,

    /// Ordered terms; order is display/iteration order
    pub semesters: Vec<Term>,
}

impl RootState {
    /// Construct a board with no terms
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            theme: Theme::Dark,
            semesters: Vec::new(),
        }
    }

    /// The built-in example board used at first start and after a reset
    #[must_use]
    pub fn default_board() -> Self {
        let mut semestre1 = Term::new("Semestre 1");
        semestre1.push_course(Course::new("Matemática I", 6));
        semestre1.push_course(Course::new("Introducción a la carrera", 4));
        semestre1.push_course(Course::new("Comunicación", 4));

        let mut semestre2 = Term::new("Semestre 2");
        semestre2.push_course(Course::new("Matemática II", 6));
        semestre2.push_course(Course::new("Fundamentos", 5));

        Self {
            theme: Theme::Dark,
            semesters: vec![semestre1, semestre2],
        }
    }

    /// Find a term by id
    #[must_use]
    pub fn find_term(&self, term_id: &str) -> Option<&Term> {
        self.semesters.iter().find(|t| t.id == term_id)
    }

    /// Find a term by id, mutably
    pub fn find_term_mut(&mut self, term_id: &str) -> Option<&mut Term> {
        self.semesters.iter_mut().find(|t| t.id == term_id)
    }

    /// Find a course anywhere on the board by id
    pub fn find_course_mut(&mut self, course_id: &str) -> Option<&mut Course> {
        self.semesters
            .iter_mut()
            .find_map(|term| term.find_course_mut(course_id))
    }
}
