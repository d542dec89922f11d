//! Handler for the `title` command.

use colored::*;
use std::fs;
use std::path::Path;

use docsmith_lib::exit_codes::exit;
use docsmith_lib::site::page_title;

/// Handle the title command: print the page title a source would get.
pub fn handle_title(file: &Path) {
    match fs::read_to_string(file) {
        Ok(markdown) => println!("{}", page_title(&markdown, file)),
        Err(e) => {
            eprintln!("{}: Failed to read {}: {}", "Error".red().bold(), file.display(), e);
            exit::tool_error();
        }
    }
}
