//! Terminal styling utilities for the step's console output

use console::style;
use std::path::Path;

use crate::config::ResolvedConfig;

/// Print the step banner.
pub fn print_banner(version: &str) {
    println!();
    println!(
        "    {} {}",
        style("prefilter-features").cyan().bold(),
        style(format!("v{}", version)).dim()
    );
    println!(
        "    {}",
        style("Morphology feature preselection for profile construction").dim()
    );
    println!("    {}", style("─".repeat(50)).dim());
}

/// Print the configuration card for this run.
pub fn print_config(config: &ResolvedConfig, force: bool) {
    println!();
    println!("    {}", style("Configuration").cyan().bold());
    println!("      Batch:        {}", config.batch_id);
    println!("      Example site: {}", config.core.example_site);
    println!("      Input dir:    {}", truncate_path(&config.input_data_dir, 40));
    println!("      Output file:  {}", truncate_path(&config.prefilter_file, 40));
    println!(
        "      Compartments: {}",
        config.core.compartments.join(", ")
    );
    println!(
        "      Perform:      {}   Force overwrite: {}",
        style(config.prefilter.perform).yellow(),
        style(force).yellow()
    );
    println!();
}

/// Print a success message
pub fn print_success(message: &str) {
    println!("    {} {}", style("✓").green().bold(), style(message).green());
}

/// Print an info message
pub fn print_info(message: &str) {
    println!("    {} {}", style("i").cyan().bold(), message);
}

/// Print a warning message (multi-line messages keep the indent)
pub fn print_warning(message: &str) {
    for line in message.trim().lines() {
        println!(
            "    {} {}",
            style("!").yellow().bold(),
            style(line.trim()).yellow()
        );
    }
}

/// Print the final completion message
pub fn print_completion() {
    println!();
    println!(
        "    {}",
        style("Finished prefilter-features").green().bold()
    );
    println!();
}

fn truncate_path(path: &Path, max_len: usize) -> String {
    let path_str = path.display().to_string();
    if path_str.chars().count() <= max_len {
        return path_str;
    }
    // Cut on a char boundary; paths are not guaranteed to be ASCII.
    let keep = max_len.saturating_sub(3).max(1);
    let tail_start = path_str
        .char_indices()
        .rev()
        .nth(keep - 1)
        .map(|(index, _)| index)
        .unwrap_or(0);
    format!("...{}", &path_str[tail_start..])
}
