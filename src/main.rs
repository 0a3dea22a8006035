//! issuemill — AI code review that files the findings as tracker issues.
//!
//! Entry point and error handling boundary. Uses `anyhow` for
//! ergonomic error propagation and user-facing messages.

mod cli;

use issuemill::approval::{ApprovalPolicy, AutoApprove, Interactive};
use issuemill::config::{Config, Env};
use issuemill::output;
use issuemill::pipeline::Pipeline;
use issuemill::providers::rig::RigProvider;
use issuemill::scanner::{self, ScanFilter};
use issuemill::tracker::linear::LinearTracker;
use issuemill::tracker::IssueTracker;

use std::io::Write;
use std::path::PathBuf;
use std::process;
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use clap::Parser;

use cli::args::Cli;

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("Error: {err:#}");
        process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    // Resolve the scan root from the positional arg, falling back to an
    // interactive prompt.
    let root = match cli.path.clone() {
        Some(path) => path,
        None => PathBuf::from(prompt_line("Enter the directory path to evaluate: ")?),
    };
    let root = std::fs::canonicalize(&root)
        .with_context(|| format!("directory not found: {}", root.display()))?;

    // Load config with layering, then apply CLI overrides on top.
    let mut config =
        Config::load(Some(&root), &Env::real()).context("failed to load configuration")?;

    if let Some(model) = cli.model {
        config.provider.model = model;
    }
    if cli.team.is_some() {
        config.tracker.team = cli.team.clone();
    }
    config.scan.exclude_dirs.extend(cli.exclude_dir);
    config.scan.exclude_files.extend(cli.exclude_file);
    config.scan.exclude_types.extend(cli.exclude_type);

    // Missing credentials are fatal startup errors: both keys are
    // checked before any scanning, prompting, or remote call happens.
    let (tracker_key, provider) = startup_credentials(&config)?;

    // Scan the root: the tree and the flat list use the same exclusions.
    let filter = ScanFilter {
        exclude_dirs: config.scan.exclude_dirs.clone(),
        exclude_files: config.scan.exclude_files.clone(),
        exclude_types: config.scan.exclude_types.clone(),
    };
    let tree = scanner::render_tree(&root, &filter);
    let files = scanner::collect_files(&root, &filter);

    if !cli.quiet {
        println!("{}", output::render_scan_summary(&tree, files.len()));
    }
    if files.is_empty() {
        if !cli.quiet {
            println!("{}", output::render_no_files());
        }
        return Ok(());
    }

    // Resolve the team once; every created issue reuses its id.
    let team_name = match config.tracker.team.clone() {
        Some(name) => name,
        None => prompt_line("Enter the tracker team name: ")?,
    };
    let tracker = LinearTracker::new(config.tracker.endpoint.clone(), tracker_key);
    let team = tracker
        .resolve_team(&team_name)
        .await
        .with_context(|| format!("failed to resolve team '{team_name}'"))?;

    let mut policy: Box<dyn ApprovalPolicy> = if cli.yes {
        Box::new(AutoApprove)
    } else {
        Box::new(Interactive)
    };

    let pipeline = Pipeline::new(Arc::new(provider), Arc::new(tracker), cli.quiet);
    let outcomes = pipeline.run(&files, &tree, &team.id, &mut *policy).await;

    println!("{}", output::render_outcomes(&outcomes));

    let failed = outcomes.iter().filter(|o| o.is_failed()).count();
    if failed > 0 {
        bail!("{failed} file(s) failed — results are incomplete");
    }

    Ok(())
}

/// Resolve both required API keys from the loaded config.
///
/// Called before any work starts, so a missing credential fails the
/// run up front instead of after scanning or a remote call.
fn startup_credentials(config: &Config) -> Result<(String, RigProvider)> {
    let Some(tracker_key) = config.tracker.api_key.clone() else {
        bail!(
            "no tracker API key found. Set {} or {}.",
            issuemill::constants::ENV_TRACKER_API_KEY,
            issuemill::constants::ENV_TRACKER_API_KEY_FALLBACK,
        );
    };
    let provider = RigProvider::new(config.provider.clone()).map_err(|e| anyhow::anyhow!("{e}"))?;
    Ok((tracker_key, provider))
}

/// Prompt on stderr and read one trimmed line from stdin.
fn prompt_line(prompt: &str) -> Result<String> {
    eprint!("{prompt}");
    std::io::stderr().flush().context("failed to flush prompt")?;

    let mut answer = String::new();
    std::io::stdin()
        .read_line(&mut answer)
        .context("failed to read input")?;

    let answer = answer.trim().to_string();
    if answer.is_empty() {
        bail!("no input provided");
    }
    Ok(answer)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_keys(llm: Option<&str>, tracker: Option<&str>) -> Config {
        let mut config = Config::default();
        config.provider.api_key = llm.map(String::from);
        config.tracker.api_key = tracker.map(String::from);
        config
    }

    #[test]
    fn startup_fails_without_tracker_key() {
        let config = config_with_keys(Some("sk-test"), None);
        let err = startup_credentials(&config).unwrap_err();
        assert!(err.to_string().contains("tracker API key"));
    }

    #[test]
    fn startup_fails_without_llm_key() {
        // Even with the tracker fully configured, a missing LLM key
        // must error here, before any scan or team lookup runs.
        let config = config_with_keys(None, Some("lin_test"));
        let err = startup_credentials(&config).unwrap_err();
        assert!(err.to_string().contains("API key"));
        assert!(err.to_string().contains("deepseek"));
    }

    #[test]
    fn startup_succeeds_with_both_keys() {
        let config = config_with_keys(Some("sk-test"), Some("lin_test"));
        let (tracker_key, _provider) = startup_credentials(&config).unwrap();
        assert_eq!(tracker_key, "lin_test");
    }
}
