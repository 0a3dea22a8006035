//! Per-file run outcomes.
//!
//! A stage failure for one file is recorded here instead of aborting
//! the whole batch; the remaining files still get processed.

use std::fmt;

/// What happened to a single file during a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileStatus {
    /// The file was reviewed end to end.
    Reviewed {
        /// Issues created in the tracker.
        filed: usize,
        /// Issues rejected by the approval policy.
        skipped: usize,
    },
    /// A stage failed; the reason names the stage and cause. Issues
    /// already created before the failure are still counted — they
    /// exist in the tracker regardless.
    Failed {
        reason: String,
        filed: usize,
        skipped: usize,
    },
}

/// Outcome record for one scanned file.
#[derive(Debug, Clone)]
pub struct FileOutcome {
    /// Path as produced by the scanner.
    pub file: String,
    pub status: FileStatus,
}

impl FileOutcome {
    pub fn reviewed(file: impl Into<String>, filed: usize, skipped: usize) -> Self {
        Self {
            file: file.into(),
            status: FileStatus::Reviewed { filed, skipped },
        }
    }

    pub fn failed(file: impl Into<String>, reason: impl fmt::Display) -> Self {
        Self::failed_after(file, reason, 0, 0)
    }

    /// A failure that happened after some issues were already handled.
    pub fn failed_after(
        file: impl Into<String>,
        reason: impl fmt::Display,
        filed: usize,
        skipped: usize,
    ) -> Self {
        Self {
            file: file.into(),
            status: FileStatus::Failed {
                reason: reason.to_string(),
                filed,
                skipped,
            },
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self.status, FileStatus::Failed { .. })
    }
}

/// Aggregate counts over a run's outcomes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub reviewed: usize,
    pub filed: usize,
    pub skipped: usize,
    pub failed: usize,
}

impl RunSummary {
    /// Tally outcomes into a summary.
    pub fn from_outcomes(outcomes: &[FileOutcome]) -> Self {
        let mut s = RunSummary::default();
        for outcome in outcomes {
            match outcome.status {
                FileStatus::Reviewed { filed, skipped } => {
                    s.reviewed += 1;
                    s.filed += filed;
                    s.skipped += skipped;
                }
                FileStatus::Failed { filed, skipped, .. } => {
                    s.failed += 1;
                    s.filed += filed;
                    s.skipped += skipped;
                }
            }
        }
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_tallies_outcomes() {
        let outcomes = vec![
            FileOutcome::reviewed("a.rs", 2, 1),
            FileOutcome::reviewed("b.rs", 0, 0),
            FileOutcome::failed("c.rs", "review stage: connection refused"),
        ];
        let s = RunSummary::from_outcomes(&outcomes);
        assert_eq!(s.reviewed, 2);
        assert_eq!(s.filed, 2);
        assert_eq!(s.skipped, 1);
        assert_eq!(s.failed, 1);
    }

    #[test]
    fn failed_outcome_keeps_reason() {
        let outcome = FileOutcome::failed("x.rs", "boom");
        assert!(outcome.is_failed());
        assert_eq!(
            outcome.status,
            FileStatus::Failed {
                reason: "boom".to_string(),
                filed: 0,
                skipped: 0,
            }
        );
    }

    #[test]
    fn summary_counts_issues_filed_before_a_failure() {
        // An issue created before the publish stage failed exists in
        // the tracker and must show up in the filed total.
        let outcomes = vec![
            FileOutcome::reviewed("a.rs", 1, 0),
            FileOutcome::failed_after("b.rs", "publish stage: server error", 1, 1),
        ];
        let s = RunSummary::from_outcomes(&outcomes);
        assert_eq!(s.filed, 2);
        assert_eq!(s.skipped, 1);
        assert_eq!(s.failed, 1);
    }

    #[test]
    fn reviewed_outcome_is_not_failed() {
        assert!(!FileOutcome::reviewed("x.rs", 0, 0).is_failed());
    }
}
