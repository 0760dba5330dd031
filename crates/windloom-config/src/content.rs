//! Content globs: which source files the generator scans for class names
//!
//! Globs are relative to the project root. A leading `./` is ignored and a
//! leading `!` turns the entry into an exclusion:
//!
//! ```toml
//! content = [
//!     "./**/templates/**/*.html",
//!     "./dashboard/static/**/*.js",
//!     "!./dashboard/static/vendor/**",
//! ]
//! ```

use crate::error::{ConfigError, ConfigResult, ValidationError};
use globset::{Glob, GlobBuilder, GlobSet, GlobSetBuilder};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::{DirEntry, WalkDir};

/// Directories never descended into while scanning
const SKIPPED_DIRS: &[&str] = &["node_modules", "target", "__pycache__"];

/// Ordered list of content globs
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct ContentGlobs(Vec<String>);

impl ContentGlobs {
    /// Create from any list of patterns
    pub fn new<I, S>(patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(patterns.into_iter().map(Into::into).collect())
    }

    /// Patterns as written, in order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Number of patterns
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when there are no patterns
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Patterns that select files
    pub fn includes(&self) -> impl Iterator<Item = &str> {
        self.iter().filter(|p| !p.starts_with('!'))
    }

    /// Patterns that remove files from the selection (without the `!`)
    pub fn excludes(&self) -> impl Iterator<Item = &str> {
        self.iter().filter_map(|p| p.strip_prefix('!'))
    }

    pub(crate) fn push(&mut self, pattern: String) {
        self.0.push(pattern);
    }

    /// Check every pattern, returning one error per bad entry
    pub fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        if self.0.is_empty() {
            errors.push(ValidationError::NoContent);
            return errors;
        }

        for (index, pattern) in self.0.iter().enumerate() {
            let body = normalize_pattern(pattern.strip_prefix('!').unwrap_or(pattern));
            if body.trim().is_empty() {
                errors.push(ValidationError::EmptyGlob { index });
                continue;
            }
            if let Err(e) = compile(body) {
                errors.push(ValidationError::InvalidGlob {
                    pattern: pattern.clone(),
                    reason: e.kind().to_string(),
                });
            }
        }

        errors
    }

    /// Compile the patterns into a matcher
    pub fn matcher(&self) -> ConfigResult<ContentMatcher> {
        let mut include = GlobSetBuilder::new();
        let mut exclude = GlobSetBuilder::new();

        for pattern in self.iter() {
            let (builder, body) = match pattern.strip_prefix('!') {
                Some(rest) => (&mut exclude, rest),
                None => (&mut include, pattern),
            };
            let glob = compile(normalize_pattern(body)).map_err(|source| ConfigError::Glob {
                pattern: pattern.to_string(),
                source,
            })?;
            builder.add(glob);
        }

        let build = |builder: GlobSetBuilder| {
            builder.build().map_err(|source| ConfigError::Glob {
                pattern: self.0.join(", "),
                source,
            })
        };

        Ok(ContentMatcher {
            include: build(include)?,
            exclude: build(exclude)?,
        })
    }

    /// Walk `root` and list the files these globs select
    pub fn scan(&self, root: impl AsRef<Path>) -> ConfigResult<ScanReport> {
        self.matcher()?.scan(root)
    }
}

fn normalize_pattern(pattern: &str) -> &str {
    pattern.strip_prefix("./").unwrap_or(pattern)
}

fn compile(pattern: &str) -> Result<Glob, globset::Error> {
    GlobBuilder::new(pattern).literal_separator(true).build()
}

/// Compiled include and exclude sets
#[derive(Debug, Clone)]
pub struct ContentMatcher {
    include: GlobSet,
    exclude: GlobSet,
}

impl ContentMatcher {
    /// True when `path` (relative to the project root) is selected
    pub fn is_match(&self, path: impl AsRef<Path>) -> bool {
        let path = path.as_ref();
        let path = path.strip_prefix(".").unwrap_or(path);
        self.include.is_match(path) && !self.exclude.is_match(path)
    }

    /// Walk `root` and collect matching files, sorted, relative to `root`
    pub fn scan(&self, root: impl AsRef<Path>) -> ConfigResult<ScanReport> {
        let root = root.as_ref();
        if !root.is_dir() {
            return Err(ConfigError::Io {
                path: root.to_path_buf(),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "not a directory"),
            });
        }

        let mut report = ScanReport {
            root: root.to_path_buf(),
            ..ScanReport::default()
        };

        let walker = WalkDir::new(root)
            .follow_links(false)
            .into_iter()
            .filter_entry(|entry| !is_skipped(entry));

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    warn!("Skipping unreadable entry under {}: {}", root.display(), e);
                    report.errors += 1;
                    continue;
                }
            };

            if !entry.file_type().is_file() {
                continue;
            }
            report.visited += 1;

            let Ok(relative) = entry.path().strip_prefix(root) else {
                continue;
            };
            if self.is_match(relative) {
                debug!("Content match: {}", relative.display());
                report.files.push(relative.to_path_buf());
            }
        }

        report.files.sort();
        debug!(
            "Scanned {} files under {}, {} matched",
            report.visited,
            root.display(),
            report.files.len()
        );
        Ok(report)
    }
}

fn is_skipped(entry: &DirEntry) -> bool {
    if entry.depth() == 0 || !entry.file_type().is_dir() {
        return false;
    }
    let name = entry.file_name().to_string_lossy();
    name.starts_with('.') || SKIPPED_DIRS.contains(&name.as_ref())
}

/// Result of scanning a project tree
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanReport {
    /// Directory that was scanned
    pub root: PathBuf,
    /// Matching files relative to `root`, sorted
    pub files: Vec<PathBuf>,
    /// Number of regular files looked at
    pub visited: usize,
    /// Entries that could not be read
    pub errors: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn project_globs() -> ContentGlobs {
        ContentGlobs::new(["./**/templates/**/*.html", "./dashboard/static/**/*.js"])
    }

    #[test]
    fn matches_templates_at_any_depth() {
        let matcher = project_globs().matcher().unwrap();

        assert!(matcher.is_match("templates/base.html"));
        assert!(matcher.is_match("dashboard/templates/dashboard/index.html"));
        assert!(matcher.is_match("./accounts/templates/login.html"));
        assert!(!matcher.is_match("templates/base.txt"));
        assert!(!matcher.is_match("dashboard/views.py"));
    }

    #[test]
    fn matches_static_scripts() {
        let matcher = project_globs().matcher().unwrap();

        assert!(matcher.is_match("dashboard/static/app.js"));
        assert!(matcher.is_match("dashboard/static/js/charts/bar.js"));
        assert!(!matcher.is_match("other/static/app.js"));
        assert!(!matcher.is_match("dashboard/static/app.css"));
    }

    #[test]
    fn exclusions_win() {
        let globs = ContentGlobs::new([
            "./dashboard/static/**/*.js",
            "!./dashboard/static/vendor/**",
        ]);
        let matcher = globs.matcher().unwrap();

        assert!(matcher.is_match("dashboard/static/app.js"));
        assert!(!matcher.is_match("dashboard/static/vendor/jquery.js"));
        assert_eq!(globs.includes().count(), 1);
        assert_eq!(
            globs.excludes().collect::<Vec<_>>(),
            vec!["./dashboard/static/vendor/**"]
        );
    }

    #[test]
    fn validate_reports_empty_list() {
        assert_eq!(
            ContentGlobs::default().validate(),
            vec![ValidationError::NoContent]
        );
    }

    #[test]
    fn validate_reports_each_bad_entry() {
        let globs = ContentGlobs::new(["./ok/**/*.html", "", "src/[a-", "!"]);
        let errors = globs.validate();

        assert_eq!(errors.len(), 3);
        assert_eq!(errors[0], ValidationError::EmptyGlob { index: 1 });
        assert!(matches!(
            &errors[1],
            ValidationError::InvalidGlob { pattern, .. } if pattern == "src/[a-"
        ));
        assert_eq!(errors[2], ValidationError::EmptyGlob { index: 3 });
    }

    #[test]
    fn matcher_fails_on_invalid_glob() {
        let err = ContentGlobs::new(["src/[a-"]).matcher().unwrap_err();
        assert!(matches!(err, ConfigError::Glob { .. }));
    }

    #[test]
    fn scan_lists_matching_files_sorted() {
        let temp = TempDir::new().unwrap();
        let root = temp.path();
        for path in [
            "templates/base.html",
            "dashboard/templates/dashboard/index.html",
            "dashboard/static/app.js",
            "dashboard/static/app.css",
            "dashboard/views.py",
            "node_modules/pkg/templates/x.html",
            ".venv/lib/templates/y.html",
        ] {
            let full = root.join(path);
            fs::create_dir_all(full.parent().unwrap()).unwrap();
            fs::write(&full, "").unwrap();
        }

        let report = project_globs().scan(root).unwrap();

        assert_eq!(
            report.files,
            vec![
                PathBuf::from("dashboard/static/app.js"),
                PathBuf::from("dashboard/templates/dashboard/index.html"),
                PathBuf::from("templates/base.html"),
            ]
        );
        assert_eq!(report.visited, 5);
        assert_eq!(report.errors, 0);
    }

    #[test]
    fn scan_rejects_missing_root() {
        let temp = TempDir::new().unwrap();
        let err = project_globs().scan(temp.path().join("missing")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
