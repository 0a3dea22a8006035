//! Terminal rendering of run output.
//!
//! Everything here returns strings so tests can assert on content; the
//! pipeline and main print them. Human-readable only — there is no
//! machine output mode.

use colored::Colorize;

use crate::models::{CreatedIssue, FileOutcome, FileStatus, Issue};
use crate::models::outcome::RunSummary;

/// Render the pre-analysis header: the directory tree and file count.
pub fn render_scan_summary(tree: &str, file_count: usize) -> String {
    format!("{tree}\n\nFile count: {}\n", file_count.to_string().bold())
}

/// Render the notice for a scan that matched no files.
pub fn render_no_files() -> String {
    "No files to review.".dimmed().to_string()
}

/// Render one extracted issue ahead of the approval decision.
pub fn render_issue(issue: &Issue) -> String {
    format!(
        "{} {}\n{} {}\n{}\n{}\n",
        "Title:".cyan(),
        issue.title.bold(),
        "Priority:".cyan(),
        issue.priority,
        "Description:".cyan(),
        issue.description,
    )
}

/// Render the confirmation line after a successful creation.
pub fn render_created(created: &CreatedIssue) -> String {
    format!(
        " {} Issue created: {}\n   {}\n",
        "✔".green().bold(),
        created.title.bold(),
        created.url.underline(),
    )
}

/// Render the end-of-run outcome report.
pub fn render_outcomes(outcomes: &[FileOutcome]) -> String {
    let mut output = String::new();

    for outcome in outcomes {
        match &outcome.status {
            FileStatus::Reviewed { filed, skipped } => {
                output.push_str(&format!(
                    " {} {} — {} filed, {} skipped\n",
                    "✔".green().bold(),
                    outcome.file,
                    filed,
                    skipped,
                ));
            }
            FileStatus::Failed {
                reason,
                filed,
                skipped,
            } => {
                let partial = if *filed > 0 || *skipped > 0 {
                    format!(" ({filed} filed, {skipped} skipped before failure)")
                } else {
                    String::new()
                };
                output.push_str(&format!(
                    " {} {} — {}{partial}\n",
                    "✖".red().bold(),
                    outcome.file,
                    reason.red(),
                ));
            }
        }
    }

    let summary = RunSummary::from_outcomes(outcomes);
    output.push_str(&format!(
        "{}\n",
        "───────────────────────────────────".dimmed()
    ));
    output.push_str(&format!(
        " {} file(s) reviewed, {} issue(s) filed, {} skipped, {} file(s) failed\n",
        summary.reviewed.to_string().bold(),
        summary.filed.to_string().green().bold(),
        summary.skipped,
        if summary.failed > 0 {
            summary.failed.to_string().red().bold().to_string()
        } else {
            summary.failed.to_string()
        },
    ));

    output
}
