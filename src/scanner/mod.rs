//! Directory scanner: flat file enumeration and tree rendering.
//!
//! Both outputs honour the same exclusion sets. Excluded directories are
//! pruned before descent, so their contents are never visited. Unreadable
//! directories degrade to an empty subtree rather than an error.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

/// Exclusion sets applied uniformly to traversal and tree rendering.
#[derive(Debug, Clone, Default)]
pub struct ScanFilter {
    /// Directory names to prune (matched on the final component).
    pub exclude_dirs: Vec<String>,
    /// Exact file names to skip.
    pub exclude_files: Vec<String>,
    /// File-name suffixes to skip (e.g. `.pyc`, `.lock`).
    pub exclude_types: Vec<String>,
}

impl ScanFilter {
    /// A file is excluded when its name matches exactly or ends with an
    /// excluded suffix.
    pub fn excludes_file(&self, name: &str) -> bool {
        self.exclude_files.iter().any(|f| f == name)
            || self.exclude_types.iter().any(|ext| name.ends_with(ext))
    }

    pub fn excludes_dir(&self, name: &str) -> bool {
        self.exclude_dirs.iter().any(|d| d == name)
    }
}

/// Collect all non-excluded file paths under `root`, recursively.
///
/// The result is sorted so the flat list and the tree rendering agree on
/// ordering for identical filesystem state.
pub fn collect_files(root: &Path, filter: &ScanFilter) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = WalkDir::new(root)
        .into_iter()
        .filter_entry(|entry| {
            let name = entry.file_name().to_string_lossy();
            if entry.file_type().is_dir() {
                // Never prune the root itself, even if its name matches.
                entry.path() == root || !filter.excludes_dir(&name)
            } else {
                !filter.excludes_file(&name)
            }
        })
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.into_path())
        .collect();

    files.sort();
    files
}

/// Render the non-excluded hierarchy under `root` as a text tree.
///
/// Entries at each level are sorted lexicographically. All but the last
/// child use `├── `; the last uses `└── `. Child prefixes extend by four
/// columns per depth (`│   ` under a non-last parent, spaces otherwise).
pub fn render_tree(root: &Path, filter: &ScanFilter) -> String {
    let mut lines = Vec::new();
    render_subtree(root, "", filter, &mut lines);
    lines.join("\n")
}

fn render_subtree(dir: &Path, prefix: &str, filter: &ScanFilter, lines: &mut Vec<String>) {
    // Unreadable or missing directories yield an empty subtree.
    let Ok(read_dir) = std::fs::read_dir(dir) else {
        return;
    };

    let mut entries: Vec<(String, bool)> = read_dir
        .filter_map(|e| e.ok())
        .filter_map(|e| {
            let name = e.file_name().to_string_lossy().into_owned();
            let is_dir = e.file_type().ok()?.is_dir();
            let keep = if is_dir {
                !filter.excludes_dir(&name)
            } else {
                !filter.excludes_file(&name)
            };
            keep.then_some((name, is_dir))
        })
        .collect();
    entries.sort();

    let count = entries.len();
    for (index, (name, is_dir)) in entries.into_iter().enumerate() {
        let last = index == count - 1;
        let connector = if last { "└── " } else { "├── " };
        lines.push(format!("{prefix}{connector}{name}"));

        if is_dir {
            let extension = if last { "    " } else { "│   " };
            render_subtree(
                &dir.join(&name),
                &format!("{prefix}{extension}"),
                filter,
                lines,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filter(dirs: &[&str], files: &[&str], types: &[&str]) -> ScanFilter {
        ScanFilter {
            exclude_dirs: dirs.iter().map(|s| s.to_string()).collect(),
            exclude_files: files.iter().map(|s| s.to_string()).collect(),
            exclude_types: types.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn excludes_file_by_name_or_suffix() {
        let f = filter(&[], &[".env"], &[".pyc"]);
        assert!(f.excludes_file(".env"));
        assert!(f.excludes_file("module.pyc"));
        assert!(!f.excludes_file("main.py"));
    }

    #[test]
    fn scan_prunes_excluded_dirs_and_suffixes() {
        // Scenario from the tool's contract: {src/a.py, src/b.txt, .git/config},
        // excludeDirs=[".git"], excludeTypes=[".txt"] → exactly ["src/a.py"].
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("src")).unwrap();
        std::fs::write(dir.path().join("src").join("a.py"), "x = 1\n").unwrap();
        std::fs::write(dir.path().join("src").join("b.txt"), "notes\n").unwrap();
        std::fs::create_dir(dir.path().join(".git")).unwrap();
        std::fs::write(dir.path().join(".git").join("config"), "[core]\n").unwrap();

        let f = filter(&[".git"], &[], &[".txt"]);
        let files = collect_files(dir.path(), &f);

        assert_eq!(files.len(), 1);
        assert!(files[0].ends_with("src/a.py"));
    }

    #[test]
    fn excluded_dir_never_appears_as_path_component() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("node_modules").join("pkg")).unwrap();
        std::fs::write(
            dir.path().join("node_modules").join("pkg").join("index.js"),
            "x",
        )
        .unwrap();
        std::fs::write(dir.path().join("app.js"), "y").unwrap();

        let f = filter(&["node_modules"], &[], &[]);
        let files = collect_files(dir.path(), &f);
        assert_eq!(files.len(), 1);
        for path in &files {
            assert!(
                !path.components().any(|c| c.as_os_str() == "node_modules"),
                "excluded dir leaked into {path:?}"
            );
        }

        let tree = render_tree(dir.path(), &f);
        assert!(!tree.contains("node_modules"));
    }

    #[test]
    fn no_returned_file_ends_with_excluded_suffix() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("a.py"), "x").unwrap();
        std::fs::write(dir.path().join("b.pyc"), "x").unwrap();
        std::fs::write(dir.path().join("c.pyo"), "x").unwrap();

        let f = filter(&[], &[], &[".pyc", ".pyo"]);
        let files = collect_files(dir.path(), &f);
        assert_eq!(files.len(), 1);
        for path in &files {
            let name = path.file_name().unwrap().to_string_lossy();
            assert!(!name.ends_with(".pyc") && !name.ends_with(".pyo"));
        }
    }

    #[test]
    fn flat_list_is_sorted() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("c.rs"), "x").unwrap();
        std::fs::write(dir.path().join("a.rs"), "x").unwrap();
        std::fs::write(dir.path().join("b.rs"), "x").unwrap();

        let files = collect_files(dir.path(), &ScanFilter::default());
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["a.rs", "b.rs", "c.rs"]);
    }

    #[test]
    fn tree_connectors_and_last_entry() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("a"), "").unwrap();
        std::fs::write(dir.path().join("b"), "").unwrap();
        std::fs::write(dir.path().join("c"), "").unwrap();

        let tree = render_tree(dir.path(), &ScanFilter::default());
        let lines: Vec<_> = tree.lines().collect();
        assert_eq!(lines, vec!["├── a", "├── b", "└── c"]);
    }

    #[test]
    fn tree_indents_four_columns_per_depth() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("sub")).unwrap();
        std::fs::write(dir.path().join("sub").join("inner.rs"), "x").unwrap();
        std::fs::write(dir.path().join("top.rs"), "x").unwrap();

        let tree = render_tree(dir.path(), &ScanFilter::default());
        // "sub" sorts before "top.rs", so it renders with ├── and its
        // child is indented under a │ rail.
        let lines: Vec<_> = tree.lines().collect();
        assert_eq!(lines[0], "├── sub");
        assert_eq!(lines[1], "│   └── inner.rs");
        assert_eq!(lines[2], "└── top.rs");
    }

    #[test]
    fn tree_of_missing_dir_is_empty() {
        let tree = render_tree(
            Path::new("/tmp/issuemill_does_not_exist_12345"),
            &ScanFilter::default(),
        );
        assert!(tree.is_empty());
    }

    #[test]
    fn scan_missing_dir_yields_no_files() {
        let files = collect_files(
            Path::new("/tmp/issuemill_does_not_exist_12345"),
            &ScanFilter::default(),
        );
        assert!(files.is_empty());
    }

    #[test]
    fn root_matching_excluded_dir_name_is_still_scanned() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("docs");
        std::fs::create_dir(&root).unwrap();
        std::fs::write(root.join("readme.md"), "x").unwrap();

        let f = filter(&["docs"], &[], &[]);
        let files = collect_files(&root, &f);
        assert_eq!(files.len(), 1);
    }
}
