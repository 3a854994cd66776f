//! Test fixtures and utilities for reducing test setup duplication.
//!
//! Builds throwaway git repositories with real commits so the managed file
//! guard can be exercised against libgit2 instead of a fake.
//!
//! ```ignore
//! let (temp, path) = create_git_repo();
//! create_test_files(&path, &[("Makefile", "all:\n")]);
//! commit_all(&path, "Initial commit");
//! ```

#![allow(clippy::expect_used)]

use std::path::{Path, PathBuf};

use git2::{IndexAddOption, Oid, Repository, Signature};
use tempfile::TempDir;

/// Create a temp directory with a git repository initialized.
///
/// # Panics
///
/// Panics if the temp directory or git repository cannot be created.
#[must_use]
pub fn create_git_repo() -> (TempDir, PathBuf) {
    let temp = TempDir::new().expect("Failed to create temp directory");
    let path = temp.path().to_path_buf();
    Repository::init(&path).expect("Failed to init git repository");
    (temp, path)
}

/// Create test files below `root` from (path, content) tuples.
///
/// # Panics
///
/// Panics if any file cannot be created.
pub fn create_test_files(root: &Path, files: &[(&str, &str)]) {
    for (path, content) in files {
        let full_path = root.join(path);
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&full_path, content).expect("Failed to write test file");
    }
}

/// Stage every change in the working tree (including deletions) and commit it on HEAD.
///
/// # Panics
///
/// Panics if any git operation fails.
pub fn commit_all(root: &Path, message: &str) -> Oid {
    let repo = Repository::open(root).expect("Failed to open repository");
    let mut index = repo.index().expect("Failed to get index");
    index
        .add_all(["*"].iter(), IndexAddOption::DEFAULT, None)
        .expect("Failed to stage files");
    index
        .update_all(["*"].iter(), None)
        .expect("Failed to stage deletions");
    index.write().expect("Failed to write index");

    let tree_id = index.write_tree().expect("Failed to write tree");
    let tree = repo.find_tree(tree_id).expect("Failed to find tree");
    let sig = Signature::now("Test", "test@test.com").expect("Failed to create signature");

    let parent = repo.head().ok().and_then(|head| head.peel_to_commit().ok());
    let parents: Vec<&git2::Commit<'_>> = parent.iter().collect();

    repo.commit(Some("HEAD"), &sig, &sig, message, &tree, &parents)
        .expect("Failed to commit")
}

/// Create a branch named `name` pointing at the current HEAD commit.
///
/// # Panics
///
/// Panics if HEAD has no commit or the branch cannot be created.
pub fn create_branch(root: &Path, name: &str) {
    let repo = Repository::open(root).expect("Failed to open repository");
    let head = repo
        .head()
        .and_then(|head| head.peel_to_commit())
        .expect("HEAD should point to a commit");
    repo.branch(name, &head, true)
        .expect("Failed to create branch");
}

/// Create a remote-tracking ref `refs/remotes/<remote>/<name>` at the current HEAD commit.
///
/// # Panics
///
/// Panics if HEAD has no commit or the reference cannot be written.
pub fn create_remote_ref(root: &Path, remote: &str, name: &str) {
    let repo = Repository::open(root).expect("Failed to open repository");
    let head = repo
        .head()
        .and_then(|head| head.peel_to_commit())
        .expect("HEAD should point to a commit");
    repo.reference(
        &format!("refs/remotes/{remote}/{name}"),
        head.id(),
        true,
        "test remote ref",
    )
    .expect("Failed to create remote ref");
}

/// Switch HEAD to a new branch at the current commit, leaving the working tree untouched.
///
/// # Panics
///
/// Panics if the branch cannot be created or HEAD cannot be moved.
pub fn switch_to_new_branch(root: &Path, name: &str) {
    create_branch(root, name);
    let repo = Repository::open(root).expect("Failed to open repository");
    repo.set_head(&format!("refs/heads/{name}"))
        .expect("Failed to move HEAD");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_git_repo() {
        let (temp, path) = create_git_repo();
        assert!(path.join(".git").exists());
        assert!(temp.path().exists());
    }

    #[test]
    fn test_commit_all_records_files() {
        let (_temp, path) = create_git_repo();
        create_test_files(&path, &[("Makefile", "all:\n"), (".github/ci.yml", "on: push\n")]);
        let oid = commit_all(&path, "Initial commit");

        let repo = Repository::open(&path).expect("open");
        let tree = repo.find_commit(oid).expect("commit").tree().expect("tree");
        assert!(tree.get_path(Path::new("Makefile")).is_ok());
        assert!(tree.get_path(Path::new(".github/ci.yml")).is_ok());
    }

    #[test]
    fn test_switch_to_new_branch() {
        let (_temp, path) = create_git_repo();
        create_test_files(&path, &[("README.md", "hi\n")]);
        commit_all(&path, "Initial commit");
        switch_to_new_branch(&path, "feature");

        let repo = Repository::open(&path).expect("open");
        assert_eq!(repo.head().expect("head").shorthand(), Some("feature"));
    }
}
