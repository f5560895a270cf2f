//! Progress aggregates over a board snapshot
//!
//! Pure functions only: nothing here mutates state or caches results, so
//! callers always see values derived from the current state.

use crate::core::models::{Course, RootState, Term};

/// Whole-board progress summary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    /// Count of all courses on the board
    pub total: usize,
    /// Count of completed courses
    pub done_count: usize,
    /// Sum of credits over completed courses only
    pub done_credits: u64,
    /// Completed share rounded to the nearest integer percent; 0 for an
    /// empty board
    pub percent: usize,
}

/// Summary of a single term
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TermSummary {
    /// Sum of credits over every course in the term, pending and done
    /// alike
    pub total_credits: u64,
    /// Count of completed courses in the term
    pub done_count: usize,
}

/// Flatten all terms' courses into one sequence, preserving term order
/// and in-term order
#[must_use]
pub fn all_courses(state: &RootState) -> Vec<&Course> {
    state
        .semesters
        .iter()
        .flat_map(|term| term.courses.iter())
        .collect()
}

/// Compute the whole-board progress summary
#[must_use]
pub fn progress(state: &RootState) -> Progress {
    let courses = all_courses(state);
    let total = courses.len();
    let done_count = courses.iter().filter(|c| c.done).count();
    let done_credits = courses
        .iter()
        .filter(|c| c.done)
        .map(|c| u64::from(c.credits))
        .sum();

    // Integer round-to-nearest; 0 on an empty board.
    let percent = if total == 0 {
        0
    } else {
        (done_count * 200 + total) / (2 * total)
    };

    Progress {
        total,
        done_count,
        done_credits,
        percent,
    }
}

/// Summarize a single term
///
/// `total_credits` counts pending and completed courses alike, while the
/// board-wide summary counts completed credits only. These are two
/// distinct metrics: term workload vs. credits earned.
#[must_use]
pub fn term_summary(term: &Term) -> TermSummary {
    TermSummary {
        total_credits: term
            .courses
            .iter()
            .map(|c| u64::from(c.credits))
            .sum(),
        done_count: term.courses.iter().filter(|c| c.done).count(),
    }
}
