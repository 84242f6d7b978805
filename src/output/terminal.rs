// Colored terminal output for the `extract` and `notify --dry-run` commands.
//
// Regular CI runs report through tracing; this module is for humans running
// the tool locally.

use colored::Colorize;

use super::truncate_chars;
use crate::github::event::EventContext;
use crate::pipeline::notify::{NotifyPlan, NotifySummary};
use crate::references::ReferenceSet;

/// Display the task references found in a piece of text.
pub fn display_references(refs: &ReferenceSet) {
    if refs.is_empty() {
        println!("No Asana task links found.");
        return;
    }

    println!(
        "\n{}",
        format!("=== Asana tasks ({}) ===", refs.len()).bold()
    );
    for task in refs {
        println!("  {} {}", "-".dimmed(), task.as_str().cyan());
    }
}

/// Display the resolved event context.
pub fn display_context(context: &EventContext) {
    println!("\n{}", format!("=== {} ===", context.kind).bold());
    println!("  URL: {}", context.url);
    println!("  Actor: {}", context.actor.as_deref().unwrap_or("?"));
    println!("  Body: {}", truncate_chars(&context.text, 120).dimmed());
    match &context.previous {
        Some(previous) => println!("  Previous body: {}", truncate_chars(previous, 120).dimmed()),
        None => println!("  Previous body: {}", "none".dimmed()),
    }
}

/// Display the comments a run would post.
pub fn display_plan(plan: &NotifyPlan) {
    println!(
        "\n{}",
        format!("=== Would comment on {} task(s) ===", plan.tasks.len()).bold()
    );
    println!("  Comment: {}", plan.comment.green());
    for task in &plan.tasks {
        println!("  {} {}", "-".dimmed(), task.as_str().cyan());
    }
}

/// Display the result of a live run.
pub fn display_summary(summary: &NotifySummary) {
    println!(
        "\n{}",
        format!("Commented on {} Asana task(s).", summary.notified.len()).bold()
    );
}
