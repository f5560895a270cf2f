//! Term model

use serde::{Deserialize, Serialize};

use super::course::{normalize_name, Course};
use super::id::new_id;

/// Placeholder label applied when a term name is empty after trimming.
pub const FALLBACK_TERM_NAME: &str = "Semestre";

/// Represents one academic period: an ordered container of courses
///
/// Course order within a term is display order; additions and move-ins
/// append to the end.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Term {
    /// Opaque unique identifier, immutable after creation
    pub id: String,

    /// Display label; never empty (normalized on rename)
    pub name: String,

    /// Ordered course sequence; insertion order is display order
    pub courses: Vec<Course>,
}

impl Term {
    /// Create a new empty term with a fresh identifier
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self {
            id: new_id(),
            name: normalize_name(name, FALLBACK_TERM_NAME),
            courses: Vec::new(),
        }
    }

    /// Rename the term; empty or whitespace-only input falls back to the
    /// placeholder label
    pub fn rename(&mut self, name: &str) {
        self.name = normalize_name(name, FALLBACK_TERM_NAME);
    }

    /// Append a course at the end of the display order
    pub fn push_course(&mut self, course: Course) {
        self.courses.push(course);
    }

    /// Remove a course by id, returning it
    ///
    /// # Returns
    /// The detached course, or `None` when the id is not in this term.
    pub fn take_course(&mut self, course_id: &str) -> Option<Course> {
        let pos = self.courses.iter().position(|c| c.id == course_id)?;
        Some(self.courses.remove(pos))
    }

    /// Find a course in this term by id
    pub fn find_course_mut(&mut self, course_id: &str) -> Option<&mut Course> {
        self.courses.iter_mut().find(|c| c.id == course_id)
    }
}
