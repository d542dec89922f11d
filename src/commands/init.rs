//! Handler for the `init` command.

use colored::*;
use std::path::{Path, PathBuf};

use docsmith_lib::config::CONFIG_FILE;
use docsmith_lib::exit_codes::exit;
use docsmith_lib::init::create_default_config;

/// Handle the init command: write a commented default `docsmith.toml`.
///
/// `path` may name the file itself or a directory to place it in.
pub fn handle_init(path: Option<&Path>, quiet: bool) {
    let target: PathBuf = match path {
        Some(p) if p.is_dir() => p.join(CONFIG_FILE),
        Some(p) => p.to_path_buf(),
        None => PathBuf::from(CONFIG_FILE),
    };

    match create_default_config(&target) {
        Ok(true) => {
            if !quiet {
                println!("Created default configuration file: {}", target.display());
            }
        }
        Ok(false) => {
            eprintln!(
                "{}: Configuration file {} already exists",
                "Error".red().bold(),
                target.display()
            );
            exit::tool_error();
        }
        Err(e) => {
            eprintln!("{}: Failed to create config file: {}", "Error".red().bold(), e);
            exit::tool_error();
        }
    }
}
