//! Handler for the `stages` command.

use colored::*;

use docsmith_lib::stage::StageCategory;
use docsmith_lib::stages::all_stages;

fn category_to_string(category: StageCategory) -> &'static str {
    match category {
        StageCategory::Protect => "protect",
        StageCategory::Block => "block",
        StageCategory::Inline => "inline",
        StageCategory::Grouping => "grouping",
        StageCategory::Wrap => "wrap",
        StageCategory::Restore => "restore",
    }
}

/// Handle the stages command: list the rewrite passes in execution order.
pub fn handle_stages() {
    println!("{}", "Pipeline stages (in order):".bold());
    for (index, stage) in all_stages().iter().enumerate() {
        println!(
            "  {:>2}. {} {} {}",
            index + 1,
            format!("{:<20}", stage.name()).cyan(),
            format!("{:<9}", category_to_string(stage.category())).dimmed(),
            stage.description()
        );
    }
}
