//! Board command handlers: rendering plus term/course/theme mutations

use crate::args::{CourseSubcommand, TermSubcommand};
use malla_tracker::core::board::{Board, Command};
use malla_tracker::core::progress;
use malla_tracker::verbose;

/// Render the full board to stdout
pub fn show(board: &Board) {
    let state = board.state();
    println!("=== Malla ({} theme) ===", state.theme.as_str());

    if state.semesters.is_empty() {
        println!("\n(no terms yet — run `mallatracker term add`)");
    }

    for term in &state.semesters {
        let summary = progress::term_summary(term);
        println!("\n{}  [{}]", term.name, term.id);
        println!(
            "  {} credits • {} done",
            summary.total_credits, summary.done_count
        );
        for course in &term.courses {
            let mark = if course.done { 'x' } else { ' ' };
            println!(
                "  [{mark}] {} ({} cr)  [{}]",
                course.name, course.credits, course.id
            );
        }
    }

    let totals = progress::progress(state);
    println!(
        "\nProgress: {}%  ({} of {} courses done)",
        totals.percent, totals.done_count, totals.total
    );
    println!("Credits earned: {}", totals.done_credits);
}

/// Dispatch term subcommands
pub fn term(subcommand: TermSubcommand, board: &mut Board) {
    let command = match subcommand {
        TermSubcommand::Add => Command::AddTerm,
        TermSubcommand::Remove { term_id } => Command::RemoveTerm { term_id },
        TermSubcommand::Rename { term_id, name } => Command::RenameTerm { term_id, name },
    };
    run(board, command);
}

/// Dispatch course subcommands
pub fn course(subcommand: CourseSubcommand, board: &mut Board) {
    let command = match subcommand {
        CourseSubcommand::Add { term } => Command::AddCourse { term_id: term },
        CourseSubcommand::Remove { term_id, course_id } => {
            Command::RemoveCourse { term_id, course_id }
        }
        CourseSubcommand::Rename { course_id, name } => Command::RenameCourse { course_id, name },
        CourseSubcommand::Credits { course_id, value } => Command::SetCredits {
            course_id,
            raw: value,
        },
        CourseSubcommand::Toggle { course_id } => Command::ToggleDone { course_id },
        CourseSubcommand::Move {
            course_id,
            from_term_id,
            to_term_id,
        } => Command::MoveCourse {
            course_id,
            from_term: from_term_id,
            to_term: to_term_id,
        },
    };
    run(board, command);
}

/// Toggle the display theme
pub fn theme(board: &mut Board) {
    run(board, Command::ToggleTheme);
}

/// Apply a command and report its outcome
fn run(board: &mut Board, command: Command) {
    match board.apply(command) {
        Ok(message) => {
            println!("✓ {message}");
            let totals = progress::progress(board.state());
            verbose!(
                "Progress: {}% ({} of {} courses done, {} credits earned)",
                totals.percent,
                totals.done_count,
                totals.total,
                totals.done_credits
            );
        }
        Err(message) => {
            eprintln!("✗ {message}");
            std::process::exit(1);
        }
    }
}
