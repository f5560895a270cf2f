//! Document command handlers: export, import, and board reset

use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;

use malla_tracker::core::board::{Board, Command};
use malla_tracker::info;

/// Print the exchange document, or write it to a file
pub fn export(board: &Board, output: Option<&Path>) {
    let json = board.export();
    match output {
        Some(path) => {
            if let Err(e) = fs::write(path, &json) {
                eprintln!("✗ Failed to write {}: {e}", path.display());
                std::process::exit(1);
            }
            println!("✓ Board exported to: {}", path.display());
        }
        None => println!("{json}"),
    }
}

/// Replace the board with the document read from `input` (`-` reads stdin)
pub fn import(board: &mut Board, input: &Path) {
    let raw = if input.as_os_str() == "-" {
        let mut buffer = String::new();
        if let Err(e) = io::stdin().read_to_string(&mut buffer) {
            eprintln!("✗ Failed to read stdin: {e}");
            std::process::exit(1);
        }
        buffer
    } else {
        match fs::read_to_string(input) {
            Ok(raw) => raw,
            Err(e) => {
                eprintln!("✗ Failed to read {}: {e}", input.display());
                std::process::exit(1);
            }
        }
    };

    match board.apply(Command::Import { document: raw }) {
        Ok(message) => {
            println!("✓ {message}");
            info!("Board replaced by import ({} terms)", board.state().semesters.len());
        }
        Err(message) => {
            eprintln!("✗ {message}");
            std::process::exit(1);
        }
    }
}

/// Reset the board to the example document after confirmation
pub fn reset(board: &mut Board, yes: bool) {
    if !yes && !confirm() {
        println!("✗ Reset cancelled");
        return;
    }

    match board.apply(Command::Reset) {
        Ok(message) => println!("✓ {message}"),
        Err(message) => eprintln!("✗ {message}"),
    }
}

fn confirm() -> bool {
    print!("Are you sure you want to reset the board? Saved progress will be lost. (y/n): ");
    io::stdout().flush().ok();

    let mut response = String::new();
    io::stdin().read_line(&mut response).ok();

    response.trim().eq_ignore_ascii_case("y") || response.trim().eq_ignore_ascii_case("yes")
}
