//! Handler for the `build` command.

use colored::*;
use std::path::Path;
use std::time::Instant;

use docsmith_lib::config::Config;
use docsmith_lib::exit_codes::exit;
use docsmith_lib::site::SiteBuilder;

use crate::BuildArgs;

fn load_config(args: &BuildArgs) -> Config {
    let mut config = match Config::load(args.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}: {}", "Config error".red().bold(), e);
            exit::tool_error();
        }
    };

    // CLI flags take precedence over the config file
    if let Some(docs) = &args.docs {
        config.site.docs_dir = docs.clone();
    }
    if let Some(out) = &args.out {
        config.site.output_dir = out.clone();
    }
    if let Some(home) = &args.home {
        config.site.home_page = Some(home.clone());
    }
    if args.no_home {
        config.site.home_page = None;
    }

    config
}

fn display(path: &Path) -> String {
    path.display().to_string()
}

/// Handle the build command: render every source into the output directory.
pub fn handle_build(args: &BuildArgs, quiet: bool) {
    let start = Instant::now();
    let config = load_config(args);
    let builder = SiteBuilder::new(&config);

    if !quiet {
        println!(
            "Building docs from {} to {}",
            display(&config.site.docs_dir).cyan(),
            display(&config.site.output_dir).cyan()
        );
    }

    let report = match builder.build() {
        Ok(report) => report,
        Err(e) => {
            eprintln!("{}: {}", "Build failed".red().bold(), e);
            exit::build_failed();
        }
    };

    if quiet {
        return;
    }

    if let Some(home) = &report.home_page {
        println!("  {} {}", "->".dimmed(), display(home));
    }
    for path in &report.excluded {
        println!("  {} {}", "Skipping".yellow(), display(path));
    }
    for page in &report.pages {
        println!("  {} {}", "Processing".dimmed(), display(&page.source));
        println!("    {} {}", "->".dimmed(), display(&page.output));
    }

    let page_text = if report.pages.len() == 1 { "page" } else { "pages" };
    println!(
        "\n{} Built {} {} ({}ms)",
        "Done:".green().bold(),
        report.pages.len(),
        page_text,
        start.elapsed().as_millis()
    );
}
