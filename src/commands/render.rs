//! Handler for the `render` command.

use colored::*;
use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;

use docsmith_lib::exit_codes::exit;

fn read_input(file: Option<&Path>) -> io::Result<String> {
    match file {
        Some(path) if path != Path::new("-") => fs::read_to_string(path),
        _ => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
    }
}

/// Handle the render command: transform one markdown source and print the
/// HTML fragment to stdout. Reads stdin when no file (or `-`) is given.
pub fn handle_render(file: Option<&Path>) {
    let markdown = match read_input(file) {
        Ok(markdown) => markdown,
        Err(e) => {
            let source = file.map_or_else(|| "stdin".to_string(), |p| p.display().to_string());
            eprintln!("{}: Failed to read {}: {}", "Error".red().bold(), source, e);
            exit::tool_error();
        }
    };

    let html = docsmith_lib::transform(&markdown);
    let mut stdout = io::stdout().lock();
    if let Err(e) = stdout.write_all(html.as_bytes()).and_then(|_| stdout.flush()) {
        // Closed pipe (e.g. `| head`) is not worth a stack of errors
        if e.kind() != io::ErrorKind::BrokenPipe {
            eprintln!("{}: Failed to write output: {}", "Error".red().bold(), e);
            exit::tool_error();
        }
    }
}
