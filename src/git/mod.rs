//! Git queries used by the managed file guard
//!
//! This module handles:
//! - Working tree / index status of a single path
//! - Whether a path changed between a base reference and HEAD
//! - Whether a revision name resolves to a commit
//!
//! All access goes through the [`VcsQuery`] trait so the guard can be tested
//! without a repository. [`GitRepository`] is the libgit2-backed implementation.

pub mod refs;

use std::cell::OnceCell;
use std::path::{Path, PathBuf};

use git2::{DiffOptions, Repository, Status, StatusOptions};
use tracing::debug;

use crate::common::path_normalizer::{PathNormalizer, normalize_path};
use crate::error::{Result, git};

/// Narrow version-control interface needed by the guard
pub trait VcsQuery {
    /// True if `path` shows any staged, unstaged, untracked or deleted status
    fn status(&self, path: &str) -> Result<bool>;

    /// True if `path` differs between `base` and the current revision
    fn diff(&self, base: &str, path: &str) -> Result<bool>;

    /// True if `rev` resolves to a commit
    fn resolves(&self, rev: &str) -> bool;
}

/// A git repository discovered from a starting directory
///
/// Discovery is deferred to the first query, so a run that short-circuits
/// never touches the repository. Query paths are relative to `start`, which
/// may be a subdirectory of the work tree.
pub struct GitRepository {
    start: PathBuf,
    repo: OnceCell<std::result::Result<OpenRepository, String>>,
}

struct OpenRepository {
    repo: Repository,
    /// `start` relative to the work tree root, forward slashes, empty at the root
    prefix: String,
}

impl OpenRepository {
    fn open(start: &Path) -> std::result::Result<Self, String> {
        let repo = Repository::discover(start).map_err(|e| e.message().to_string())?;
        let start = PathNormalizer::normalize(start);
        let prefix = repo
            .workdir()
            .map(PathNormalizer::normalize)
            .and_then(|workdir| {
                start
                    .strip_prefix(&workdir)
                    .ok()
                    .map(PathNormalizer::to_normalized_str)
            })
            .unwrap_or_default();
        debug!(prefix = %prefix, "opened git repository");
        Ok(Self { repo, prefix })
    }

    /// Pathspec for a `start`-relative path
    fn pathspec(&self, path: &str) -> String {
        if self.prefix.is_empty() || path.starts_with('/') {
            path.to_string()
        } else {
            normalize_path(&format!("{}/{path}", self.prefix))
        }
    }
}

impl GitRepository {
    /// Create a handle that discovers the repository containing `start`
    pub fn discover(start: &Path) -> Self {
        Self {
            start: start.to_path_buf(),
            repo: OnceCell::new(),
        }
    }

    fn open(&self) -> Result<&OpenRepository> {
        self.repo
            .get_or_init(|| {
                debug!(start = %self.start.display(), "discovering git repository");
                OpenRepository::open(&self.start)
            })
            .as_ref()
            .map_err(|reason| git::open_failed(self.start.display().to_string(), reason.clone()))
    }
}

impl VcsQuery for GitRepository {
    fn status(&self, path: &str) -> Result<bool> {
        let open = self.open()?;

        let mut opts = StatusOptions::new();
        opts.pathspec(open.pathspec(path))
            .disable_pathspec_match(true)
            .include_untracked(true)
            .recurse_untracked_dirs(true)
            .include_ignored(false);

        let statuses = open
            .repo
            .statuses(Some(&mut opts))
            .map_err(|e| git::query_failed(path, e.message()))?;

        let changed = statuses.iter().any(|entry| {
            let status = entry.status();
            status != Status::CURRENT && !status.contains(Status::IGNORED)
        });
        debug!(path, changed, "working tree status");
        Ok(changed)
    }

    fn diff(&self, base: &str, path: &str) -> Result<bool> {
        let open = self.open()?;
        let repo = &open.repo;

        let base_commit = repo
            .revparse_single(base)
            .and_then(|object| object.peel_to_commit())
            .map_err(|e| git::ref_resolve_failed(base, e.message()))?;
        let head_commit = repo
            .head()
            .and_then(|head| head.peel_to_commit())
            .map_err(|e| git::ref_resolve_failed("HEAD", e.message()))?;

        // Only changes since the fork point count; base-only commits do not.
        let fork_point = repo
            .merge_base(base_commit.id(), head_commit.id())
            .ok()
            .and_then(|oid| repo.find_commit(oid).ok())
            .unwrap_or(base_commit);

        let old_tree = fork_point
            .tree()
            .map_err(|e| git::query_failed(path, e.message()))?;
        let new_tree = head_commit
            .tree()
            .map_err(|e| git::query_failed(path, e.message()))?;

        let mut opts = DiffOptions::new();
        opts.pathspec(open.pathspec(path))
            .disable_pathspec_match(true);

        let diff = repo
            .diff_tree_to_tree(Some(&old_tree), Some(&new_tree), Some(&mut opts))
            .map_err(|e| git::query_failed(path, e.message()))?;

        let changed = diff.deltas().next().is_some();
        debug!(path, base, changed, "diff against base reference");
        Ok(changed)
    }

    fn resolves(&self, rev: &str) -> bool {
        let Ok(open) = self.open() else {
            return false;
        };
        open.repo
            .revparse_single(rev)
            .and_then(|object| object.peel_to_commit())
            .is_ok()
    }
}
