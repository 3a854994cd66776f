//! Common test utilities for tmplguard integration tests

#![allow(dead_code, clippy::expect_used, clippy::unwrap_used)]

use std::path::PathBuf;

use assert_cmd::Command;
use git2::{IndexAddOption, Repository, Signature};
use tempfile::TempDir;

/// Variables the binary reads from the environment
const GUARD_ENV_VARS: [&str; 8] = [
    "CI",
    "GITHUB_BASE_REF",
    "CI_MERGE_REQUEST_TARGET_BRANCH_NAME",
    "TMPLGUARD_WORKSPACE",
    "TMPLGUARD_MANIFEST",
    "TMPLGUARD_STRATEGY",
    "TMPLGUARD_ON_GIT_ERROR",
    "TMPLGUARD_BUNDLES",
];

/// The real binary with a clean environment
///
/// Variables set by the surrounding CI are removed so every test states the
/// environment it depends on.
#[allow(deprecated)]
pub fn tmplguard_cmd() -> Command {
    let mut cmd = Command::cargo_bin("tmplguard").unwrap();
    for var in GUARD_ENV_VARS {
        cmd.env_remove(var);
    }
    cmd.env_remove("RUST_LOG");
    cmd
}

/// A test workspace for integration tests
pub struct TestWorkspace {
    /// Temporary directory
    pub temp: TempDir,
    /// Path to workspace root
    pub path: PathBuf,
}

impl TestWorkspace {
    /// Create an empty workspace that is not a git repository
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self { temp, path }
    }

    /// Create a workspace with an initialized git repository
    pub fn git() -> Self {
        let workspace = Self::new();
        Repository::init(&workspace.path).expect("Failed to init git repository");
        workspace
    }

    /// Write a file in workspace
    pub fn write_file(&self, path: &str, content: &str) {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Remove a file from the workspace
    pub fn remove_file(&self, path: &str) {
        std::fs::remove_file(self.path.join(path)).expect("Failed to remove file");
    }

    /// Stage every change and commit it on the current branch
    pub fn commit(&self, message: &str) {
        let repo = Repository::open(&self.path).expect("Failed to open repository");
        let mut index = repo.index().expect("Failed to get index");
        index
            .add_all(["*"].iter(), IndexAddOption::DEFAULT, None)
            .expect("Failed to add files");
        index
            .update_all(["*"].iter(), None)
            .expect("Failed to stage removals");
        index.write().expect("Failed to write index");

        let tree_id = index.write_tree().expect("Failed to write tree");
        let tree = repo.find_tree(tree_id).expect("Failed to find tree");
        let sig = Signature::now("Test", "test@example.com").expect("Failed to create signature");
        let parent = repo.head().ok().and_then(|head| head.peel_to_commit().ok());
        let parents: Vec<&git2::Commit> = parent.iter().collect();

        repo.commit(Some("HEAD"), &sig, &sig, message, &tree, &parents)
            .expect("Failed to commit");
    }

    /// Point `refs/remotes/<remote>/<branch>` at the current HEAD
    pub fn mark_remote(&self, remote: &str, branch: &str) {
        let repo = Repository::open(&self.path).expect("Failed to open repository");
        let head = repo
            .head()
            .and_then(|head| head.peel_to_commit())
            .expect("Failed to resolve HEAD");
        repo.reference(
            &format!("refs/remotes/{remote}/{branch}"),
            head.id(),
            true,
            "test remote ref",
        )
        .expect("Failed to create remote ref");
    }

    /// Create a branch at HEAD and check it out
    pub fn switch_to_new_branch(&self, name: &str) {
        let repo = Repository::open(&self.path).expect("Failed to open repository");
        let head = repo
            .head()
            .and_then(|head| head.peel_to_commit())
            .expect("Failed to resolve HEAD");
        repo.branch(name, &head, false)
            .expect("Failed to create branch");
        repo.set_head(&format!("refs/heads/{name}"))
            .expect("Failed to switch branch");
    }
}
