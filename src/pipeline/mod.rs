//! The per-file review pipeline: read → review → extract → publish.
//!
//! Files are processed strictly sequentially. Failures are isolated per
//! file: any stage error is recorded as a [`FileOutcome`] and the run
//! moves on to the next file. Issues already created stay created.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::approval::{ApprovalPolicy, Decision};
use crate::extract;
use crate::models::{FileOutcome, Issue};
use crate::output;
use crate::prompts;
use crate::providers::ReviewProvider;
use crate::tracker::{IssueDraft, IssueTracker};

/// Sequential review pipeline over scanned files.
pub struct Pipeline {
    provider: Arc<dyn ReviewProvider>,
    tracker: Arc<dyn IssueTracker>,
    /// Suppress review text and per-issue echo (used by tests).
    quiet: bool,
}

impl Pipeline {
    pub fn new(
        provider: Arc<dyn ReviewProvider>,
        tracker: Arc<dyn IssueTracker>,
        quiet: bool,
    ) -> Self {
        Self {
            provider,
            tracker,
            quiet,
        }
    }

    /// Process every file and return one outcome per file.
    ///
    /// `tree` is the rendered directory graph, shared read-only across
    /// all review prompts. `team_id` was resolved once by the caller.
    pub async fn run(
        &self,
        files: &[PathBuf],
        tree: &str,
        team_id: &str,
        policy: &mut dyn ApprovalPolicy,
    ) -> Vec<FileOutcome> {
        let mut outcomes = Vec::with_capacity(files.len());

        for file in files {
            if !self.quiet {
                println!("Analyzing file: {}", file.display());
            }
            outcomes.push(self.process_file(file, tree, team_id, policy).await);
        }

        outcomes
    }

    /// Run one file through all stages.
    async fn process_file(
        &self,
        file: &Path,
        tree: &str,
        team_id: &str,
        policy: &mut dyn ApprovalPolicy,
    ) -> FileOutcome {
        let display = file.display().to_string();

        let content = match tokio::fs::read_to_string(file).await {
            Ok(c) => c,
            Err(e) => return FileOutcome::failed(display, format!("read stage: {e}")),
        };

        let file_name = file
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| display.clone());

        let user_prompt = prompts::review_user_prompt(&content, &file_name, tree);
        let review = match self.provider.review(&user_prompt).await {
            Ok(r) => r,
            Err(e) => return FileOutcome::failed(display, format!("review stage: {e}")),
        };

        if !self.quiet {
            println!("{review}\n");
            println!("Extracting issues...");
        }

        let raw = match self.provider.extract(&review).await {
            Ok(r) => r,
            Err(e) => return FileOutcome::failed(display, format!("extraction stage: {e}")),
        };

        let issues = match extract::parse_issue_list(&raw) {
            Ok(issues) => issues,
            Err(e) => return FileOutcome::failed(display, format!("extraction stage: {e}")),
        };

        self.publish_issues(&display, issues, team_id, policy).await
    }

    /// Gate each issue on the approval policy and publish the approved ones.
    ///
    /// The source file path is appended to the description before both
    /// display and remote creation, so the tracker record matches what
    /// the operator approved.
    async fn publish_issues(
        &self,
        file: &str,
        issues: Vec<Issue>,
        team_id: &str,
        policy: &mut dyn ApprovalPolicy,
    ) -> FileOutcome {
        let mut filed = 0;
        let mut skipped = 0;

        for mut issue in issues {
            issue.description = format!("{}\n\nfile path: {file}", issue.description);

            if !self.quiet {
                println!("{}", output::render_issue(&issue));
            }

            match policy.decide(&issue) {
                Decision::Skip => {
                    skipped += 1;
                    continue;
                }
                Decision::File => {}
            }

            let draft = IssueDraft {
                title: issue.title.clone(),
                description: issue.description.clone(),
                priority: issue.priority,
                team_id: team_id.to_string(),
            };

            match self.tracker.create_issue(&draft).await {
                Ok(created) => {
                    filed += 1;
                    if !self.quiet {
                        println!("{}", output::render_created(&created));
                    }
                }
                Err(e) => {
                    // Publication failure aborts this file only; issues
                    // already created stay created and stay counted.
                    return FileOutcome::failed_after(
                        file,
                        format!("publish stage: {e}"),
                        filed,
                        skipped,
                    );
                }
            }
        }

        FileOutcome::reviewed(file, filed, skipped)
    }
}
