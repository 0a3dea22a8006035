//! Approval policies gating issue publication.
//!
//! Separates the approve/skip decision from the pipeline so the core
//! loop is testable without simulating terminal input. The driver picks
//! the policy: interactive for humans, auto-approve for `--yes` and for
//! tests.

use std::io::{BufRead, Write};

use crate::models::Issue;

/// Decision for a single extracted issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Create the issue in the tracker.
    File,
    /// Drop the issue without further action.
    Skip,
}

/// Policy deciding whether an extracted issue gets filed.
pub trait ApprovalPolicy: Send {
    fn decide(&mut self, issue: &Issue) -> Decision;
}

/// Files every issue without asking. Used by `--yes` and tests.
pub struct AutoApprove;

impl ApprovalPolicy for AutoApprove {
    fn decide(&mut self, _issue: &Issue) -> Decision {
        Decision::File
    }
}

/// Human-in-the-loop policy: a y/n prompt on the terminal.
///
/// Anything other than `y` skips the issue.
pub struct Interactive;

impl ApprovalPolicy for Interactive {
    fn decide(&mut self, _issue: &Issue) -> Decision {
        let stdin = std::io::stdin();
        prompt_decision(&mut stdin.lock(), &mut std::io::stderr())
    }
}

/// Read one y/n answer from `input`, writing the prompt to `output`.
///
/// Factored out of [`Interactive`] so the prompt semantics are testable
/// against in-memory readers.
fn prompt_decision(input: &mut impl BufRead, output: &mut impl Write) -> Decision {
    let _ = write!(output, "Create issue in tracker? y/n: ");
    let _ = output.flush();

    let mut answer = String::new();
    if input.read_line(&mut answer).is_err() {
        return Decision::Skip;
    }

    if answer.trim() == "y" {
        Decision::File
    } else {
        Decision::Skip
    }
}
