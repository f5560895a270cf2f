//! Import/export gateway for the portable board document
//!
//! The exchange format is a single JSON object:
//!
//! ```json
//! {
//!   "theme": "light" | "dark",
//!   "semesters": [
//!     { "id": "…", "name": "…", "courses": [
//!       { "id": "…", "name": "…", "credits": 6, "done": false }
//!     ]}
//!   ]
//! }
//! ```
//!
//! Decoding is tolerant for backward compatibility: unknown fields are
//! ignored and missing per-element fields are filled with defaults. The
//! one hard requirement is a top-level `semesters` array.

use serde::Deserialize;

use crate::core::models::course::{clamp_credits, normalize_name, FALLBACK_COURSE_NAME};
use crate::core::models::term::FALLBACK_TERM_NAME;
use crate::core::models::{new_id, Course, RootState, Term, Theme};

#[derive(Deserialize)]
struct RawDocument {
    theme: Option<String>,
    semesters: Option<Vec<RawTerm>>,
}

#[derive(Deserialize)]
struct RawTerm {
    id: Option<String>,
    name: Option<String>,
    #[serde(default)]
    courses: Vec<RawCourse>,
}

#[derive(Deserialize)]
struct RawCourse {
    id: Option<String>,
    name: Option<String>,
    credits: Option<f64>,
    done: Option<bool>,
}

/// Parse and validate an exchange document
///
/// Field tolerance: a missing `id` is regenerated, a missing `name`
/// falls back to the placeholder label, missing `credits` become 0
/// (fractional or negative values are coerced to non-negative
/// integers), a missing `done` reads as pending. A `theme` that is
/// absent, or anything other than `"light"`, reads as dark.
///
/// # Errors
/// Returns a message when the text is not well-formed JSON or the
/// top-level `semesters` array is missing.
pub fn parse(raw: &str) -> Result<RootState, String> {
    let document: RawDocument =
        serde_json::from_str(raw).map_err(|e| format!("invalid document: {e}"))?;

    let semesters = document
        .semesters
        .ok_or_else(|| "invalid document: missing `semesters` array".to_string())?;

    let theme = match document.theme.as_deref() {
        Some("light") => Theme::Light,
        _ => Theme::Dark,
    };

    Ok(RootState {
        theme,
        semesters: semesters.into_iter().map(realize_term).collect(),
    })
}

/// Encode the state in the exchange shape, pretty-printed
#[must_use]
pub fn to_json(state: &RootState) -> String {
    serde_json::to_string_pretty(state).unwrap_or_else(|_| "{}".to_string())
}

fn realize_term(raw: RawTerm) -> Term {
    Term {
        id: raw.id.unwrap_or_else(new_id),
        name: normalize_name(raw.name.as_deref().unwrap_or(""), FALLBACK_TERM_NAME),
        courses: raw.courses.into_iter().map(realize_course).collect(),
    }
}

fn realize_course(raw: RawCourse) -> Course {
    Course {
        id: raw.id.unwrap_or_else(new_id),
        name: normalize_name(raw.name.as_deref().unwrap_or(""), FALLBACK_COURSE_NAME),
        credits: clamp_credits(raw.credits.unwrap_or(0.0)),
        done: raw.done.unwrap_or(false),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_preserves_state() {
        let mut state = RootState::default_board();
        state.theme = Theme::Light;
        state.semesters[0].courses[1].done = true;

        let reparsed = parse(&to_json(&state)).expect("exported document should parse");
        assert_eq!(reparsed, state);
    }

    #[test]
    fn test_missing_semesters_is_rejected() {
        assert!(parse(r#"{"theme": "dark"}"#).is_err());
        assert!(parse("{}").is_err());
    }

    #[test]
    fn test_malformed_json_is_rejected() {
        assert!(parse("not json").is_err());
        assert!(parse("").is_err());
    }

    #[test]
    fn test_semesters_must_be_an_array() {
        assert!(parse(r#"{"semesters": "nope"}"#).is_err());
        assert!(parse(r#"{"semesters": 3}"#).is_err());
    }

    #[test]
    fn test_minimal_document() {
        let state = parse(r#"{"semesters": []}"#).expect("minimal document should parse");

        assert_eq!(state.theme, Theme::Dark);
        assert!(state.semesters.is_empty());
    }

    #[test]
    fn test_missing_fields_are_filled() {
        let state = parse(r#"{"semesters": [{"courses": [{}]}]}"#)
            .expect("sparse document should parse");

        let term = &state.semesters[0];
        assert!(!term.id.is_empty());
        assert_eq!(term.name, FALLBACK_TERM_NAME);

        let course = &term.courses[0];
        assert!(!course.id.is_empty());
        assert_eq!(course.name, FALLBACK_COURSE_NAME);
        assert_eq!(course.credits, 0);
        assert!(!course.done);
    }

    #[test]
    fn test_credits_are_coerced() {
        let state = parse(
            r#"{"semesters": [{"id": "t1", "name": "S1", "courses": [
                {"id": "c1", "name": "A", "credits": 3.7, "done": false},
                {"id": "c2", "name": "B", "credits": -2, "done": false}
            ]}]}"#,
        )
        .expect("document should parse");

        assert_eq!(state.semesters[0].courses[0].credits, 4);
        assert_eq!(state.semesters[0].courses[1].credits, 0);
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let state = parse(
            r#"{"semesters": [], "theme": "dark", "version": 9, "extra": {"a": 1}}"#,
        )
        .expect("unknown fields should not reject the document");

        assert!(state.semesters.is_empty());
    }

    #[test]
    fn test_unrecognized_theme_reads_as_dark() {
        let state = parse(r#"{"theme": "solarized", "semesters": []}"#)
            .expect("document should parse");
        assert_eq!(state.theme, Theme::Dark);

        let light = parse(r#"{"theme": "light", "semesters": []}"#)
            .expect("document should parse");
        assert_eq!(light.theme, Theme::Light);
    }
}
