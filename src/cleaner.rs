//! Cleaner - walks a source tree and strips debug-output statements
//!
//! A run is strictly sequential: each discovered file is read whole,
//! rewritten in memory and written back with a single full overwrite, so an
//! interrupted run can leave at most one file half-written.
//!
//! # Examples
//!
//! ```no_run
//! use printstrip::cleaner::Cleaner;
//!
//! let cleaner = Cleaner::new().with_dry_run(true);
//! let summary = cleaner.run("ruwaq_jawi/lib/core", |_| {}).unwrap();
//! println!("would remove ~{}", summary.total_removed);
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use walkdir::WalkDir;

use crate::config::Config;
use crate::error::CleanError;
use crate::paths;
use crate::strip::{self, Strategy};

/// A discovered source file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileTask {
    path: PathBuf,
}

impl FileTask {
    /// Create a task for `path`
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// What happened to a single file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OutcomeStatus {
    /// Logging-utility file, never touched
    Excluded,
    /// No statements found, file left as is
    Unchanged,
    /// Statements replaced (or would be, in a dry run)
    Cleaned,
    /// Read, decode or write failed
    Failed,
}

/// Result of cleaning one file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReplacementOutcome {
    /// File the outcome is for
    pub path: PathBuf,
    /// Status of the file
    pub status: OutcomeStatus,
    /// Statements reported as removed
    pub removed: usize,
    /// Whether the content changed
    pub modified: bool,
    /// Error message for failed files
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ReplacementOutcome {
    fn new(path: PathBuf, status: OutcomeStatus, removed: usize) -> Self {
        Self {
            path,
            status,
            removed,
            modified: status == OutcomeStatus::Cleaned,
            error: None,
        }
    }

    fn failed(path: PathBuf, err: &CleanError) -> Self {
        Self {
            error: Some(err.to_string()),
            ..Self::new(path, OutcomeStatus::Failed, 0)
        }
    }
}

/// Totals for a whole run
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    /// Root that was walked
    pub root: PathBuf,
    /// Strategy used to find statements
    pub strategy: Strategy,
    /// Whether files were left untouched on disk
    pub dry_run: bool,
    /// Files handled without error, excluded ones included
    pub files_processed: usize,
    /// Files whose content changed
    pub files_modified: usize,
    /// Files skipped as the logging utility
    pub files_excluded: usize,
    /// Files that could not be processed
    pub files_failed: usize,
    /// Statements reported as removed
    ///
    /// An estimate under [`Strategy::Legacy`].
    pub total_removed: usize,
    /// Every per-file outcome, in processing order
    pub outcomes: Vec<ReplacementOutcome>,
}

impl RunSummary {
    /// Empty summary for a run over `root`
    #[must_use]
    pub fn new(root: impl Into<PathBuf>, strategy: Strategy, dry_run: bool) -> Self {
        Self {
            root: root.into(),
            strategy,
            dry_run,
            files_processed: 0,
            files_modified: 0,
            files_excluded: 0,
            files_failed: 0,
            total_removed: 0,
            outcomes: Vec::new(),
        }
    }

    /// Fold one file's outcome into the totals
    #[must_use]
    pub fn record(mut self, outcome: ReplacementOutcome) -> Self {
        match outcome.status {
            OutcomeStatus::Excluded => {
                self.files_processed += 1;
                self.files_excluded += 1;
            },
            OutcomeStatus::Unchanged => self.files_processed += 1,
            OutcomeStatus::Cleaned => {
                self.files_processed += 1;
                self.files_modified += 1;
                self.total_removed += outcome.removed;
            },
            OutcomeStatus::Failed => self.files_failed += 1,
        }
        self.outcomes.push(outcome);
        self
    }

    /// Outcomes of files that failed
    pub fn failures(&self) -> impl Iterator<Item = &ReplacementOutcome> {
        self.outcomes.iter().filter(|o| o.status == OutcomeStatus::Failed)
    }
}

/// Lazily walk `root` for source files, in file-name order.
///
/// Symlinks are followed, so a linked file is cleaned through its target.
/// The returned iterator can be recreated by calling `discover` again.
/// Entries the walk cannot read are yielded as errors so a run can report
/// them and keep going.
pub fn discover(
    root: impl AsRef<Path>,
) -> Result<impl Iterator<Item = Result<FileTask, CleanError>>, CleanError> {
    let root = root.as_ref();

    if !root.exists() {
        return Err(CleanError::RootNotFound(root.to_path_buf()));
    }
    if !root.is_dir() {
        return Err(CleanError::NotADirectory(root.to_path_buf()));
    }

    let walk = WalkDir::new(root).follow_links(true).sort_by_file_name().into_iter();
    Ok(walk.filter_map(|entry| match entry {
        Ok(e) if e.file_type().is_file() && paths::is_source_file(e.path()) => {
            Some(Ok(FileTask::new(e.into_path())))
        },
        Ok(_) => None,
        Err(err) => Some(Err(CleanError::from(err))),
    }))
}

/// Strips debug-output statements from files
#[derive(Debug, Clone)]
pub struct Cleaner {
    exclude: String,
    strategy: Strategy,
    dry_run: bool,
}

impl Default for Cleaner {
    fn default() -> Self {
        Self::new()
    }
}

impl Cleaner {
    /// Cleaner with the built-in exclusion and the scanning strategy
    #[must_use]
    pub fn new() -> Self {
        Self {
            exclude: paths::LOGGER_FILE.to_string(),
            strategy: Strategy::default(),
            dry_run: false,
        }
    }

    /// Cleaner using the exclusion and strategy from `config`
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self::new().with_exclude(&config.exclude).with_strategy(config.strategy)
    }

    /// Set the path substring that marks the logging-utility file
    #[must_use]
    pub fn with_exclude(mut self, exclude: &str) -> Self {
        self.exclude = exclude.to_string();
        self
    }

    /// Set the statement-finding strategy
    #[must_use]
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Compute outcomes without writing anything
    #[must_use]
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Strategy in use
    #[must_use]
    pub const fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Whether the task is the logging-utility file
    #[must_use]
    pub fn should_exclude(&self, task: &FileTask) -> bool {
        !self.exclude.is_empty() && task.path.to_string_lossy().contains(&self.exclude)
    }

    /// Clean a single file, rewriting it in place when its content changes.
    ///
    /// Never fails: errors are carried in the returned outcome.
    pub fn clean(&self, task: &FileTask) -> ReplacementOutcome {
        let path = task.path.clone();

        if self.should_exclude(task) {
            log::debug!("skipping {} (logging utility)", path.display());
            return ReplacementOutcome::new(path, OutcomeStatus::Excluded, 0);
        }

        match self.rewrite(&path) {
            Ok(Some(removed)) => {
                log::debug!("{}: removed ~{removed} statement(s)", path.display());
                ReplacementOutcome::new(path, OutcomeStatus::Cleaned, removed)
            },
            Ok(None) => {
                log::debug!("{}: no statements found", path.display());
                ReplacementOutcome::new(path, OutcomeStatus::Unchanged, 0)
            },
            Err(err) => {
                log::warn!("{err}");
                ReplacementOutcome::failed(path, &err)
            },
        }
    }

    /// Returns the removal count if the content changed.
    fn rewrite(&self, path: &Path) -> Result<Option<usize>, CleanError> {
        let bytes = fs::read(path).map_err(|source| CleanError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let original = String::from_utf8(bytes).map_err(|_| CleanError::Decode {
            path: path.to_path_buf(),
        })?;

        let stripped = strip::strip(&original, self.strategy);
        if stripped.text == original {
            return Ok(None);
        }

        if !self.dry_run {
            fs::write(path, stripped.text).map_err(|source| CleanError::Write {
                path: path.to_path_buf(),
                source,
            })?;
        }
        Ok(Some(stripped.removed))
    }

    /// Clean every source file under `root`.
    ///
    /// `on_file` is called after each file completes. Only a missing or
    /// non-directory root is an error; per-file failures end up in the
    /// summary.
    pub fn run(
        &self,
        root: impl AsRef<Path>,
        on_file: impl FnMut(&ReplacementOutcome),
    ) -> Result<RunSummary, CleanError> {
        let root = root.as_ref();
        let tasks = discover(root)?;
        Ok(self.process(root, tasks, on_file))
    }

    /// Clean already-discovered tasks, folding their outcomes into a summary
    pub fn process(
        &self,
        root: &Path,
        tasks: impl Iterator<Item = Result<FileTask, CleanError>>,
        mut on_file: impl FnMut(&ReplacementOutcome),
    ) -> RunSummary {
        log::info!("cleaning {} with {} strategy", root.display(), self.strategy);

        let summary = RunSummary::new(root, self.strategy, self.dry_run);
        tasks.fold(summary, |summary, task| {
            let outcome = match task {
                Ok(task) => self.clean(&task),
                Err(err) => {
                    log::warn!("{err}");
                    let path = err.path().map_or_else(|| root.to_path_buf(), Path::to_path_buf);
                    ReplacementOutcome::failed(path, &err)
                },
            };
            on_file(&outcome);
            summary.record(outcome)
        })
    }
}
