//! core::state
//!
//! The simulated repository: commits, branches, HEAD, stage and working
//! directory.
//!
//! # Invariants
//!
//! - Exactly one commit is flagged `is_head`
//! - Every branch head names an existing commit
//! - `current` names an existing branch or is detached
//! - Parents always appear earlier in `commits` than their children
//!
//! These are checked by [`crate::core::verify::verify`]. Handlers in
//! [`crate::engine`] work on a clone of the state and only hand it back once
//! it verifies, so a snapshot observed by a caller always satisfies them.

use serde::{Deserialize, Serialize};

use super::config::Config;
use super::types::{BranchName, CommitId};

/// Display label of a detached HEAD.
pub const DETACHED_LABEL: &str = "HEAD detached";

/// A single simulated commit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Commit {
    pub id: CommitId,
    pub message: String,
    /// Branch label at authoring time. Informational only.
    pub branch: String,
    pub parent: Option<CommitId>,
    /// Merged-in branch head, for merge commits only.
    pub second_parent: Option<CommitId>,
    pub is_head: bool,
    /// Tip highlighted by renderers.
    pub is_latest: bool,
    /// Transient renderer flag; the engine never sets it.
    pub highlighted: bool,
}

impl Commit {
    /// Whether `id` is one of this commit's parents.
    pub fn has_parent(&self, id: &CommitId) -> bool {
        self.parent.as_ref() == Some(id) || self.second_parent.as_ref() == Some(id)
    }

    /// Whether this is a merge commit.
    pub fn is_merge(&self) -> bool {
        self.second_parent.is_some()
    }

    /// Iterate over the commit's parents, first parent first.
    pub fn parents(&self) -> impl Iterator<Item = &CommitId> {
        self.parent.iter().chain(self.second_parent.iter())
    }
}

/// A branch pointer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Branch {
    pub name: BranchName,
    /// `#rrggbb`, display only.
    pub color: String,
    pub head: CommitId,
}

/// What HEAD is attached to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "name", rename_all = "lowercase")]
pub enum HeadRef {
    /// HEAD follows a branch.
    Branch(BranchName),
    /// HEAD points straight at a commit.
    Detached,
}

impl HeadRef {
    /// The attached branch, if any.
    pub fn branch(&self) -> Option<&BranchName> {
        match self {
            HeadRef::Branch(name) => Some(name),
            HeadRef::Detached => None,
        }
    }

    pub fn is_detached(&self) -> bool {
        matches!(self, HeadRef::Detached)
    }
}

impl std::fmt::Display for HeadRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HeadRef::Branch(name) => write!(f, "{}", name),
            HeadRef::Detached => f.write_str(DETACHED_LABEL),
        }
    }
}

/// A full repository snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepoState {
    /// Creation order; append-only between `init`s.
    pub commits: Vec<Commit>,
    /// Creation order; unique by name.
    pub branches: Vec<Branch>,
    pub current: HeadRef,
    pub stage: Vec<String>,
    pub working_directory: Vec<String>,
    /// Sequence number of the next commit id.
    pub next_seq: u64,
}

impl RepoState {
    /// The canonical freshly-initialised repository.
    ///
    /// One branch (the configured default) at one root commit `c1`, HEAD on
    /// `c1`, nothing staged and a clean working directory.
    pub fn new(config: &Config) -> Self {
        let branch = config.default_branch();
        let root = CommitId::from_seq(1);

        Self {
            commits: vec![Commit {
                id: root.clone(),
                message: config.root_message().to_string(),
                branch: branch.to_string(),
                parent: None,
                second_parent: None,
                is_head: true,
                is_latest: true,
                highlighted: false,
            }],
            branches: vec![Branch {
                name: branch.clone(),
                color: config.default_branch_color().to_string(),
                head: root,
            }],
            current: HeadRef::Branch(branch),
            stage: Vec::new(),
            working_directory: Vec::new(),
            next_seq: 2,
        }
    }

    /// Look up a commit by exact id.
    pub fn commit(&self, id: &str) -> Option<&Commit> {
        self.commits.iter().find(|c| c.id.as_str() == id)
    }

    /// Look up a branch by name.
    pub fn branch(&self, name: &str) -> Option<&Branch> {
        self.branches.iter().find(|b| b.name.as_str() == name)
    }

    /// The commit flagged as HEAD.
    ///
    /// Verified states always have one; `None` only for hand-built states.
    pub fn head_commit(&self) -> Option<&Commit> {
        self.commits.iter().find(|c| c.is_head)
    }

    /// The branch HEAD is attached to, if any.
    pub fn current_branch(&self) -> Option<&Branch> {
        self.current.branch().and_then(|name| self.branch(name.as_str()))
    }

    /// Id the next new commit will receive.
    ///
    /// `commits` is append-only, so this always equals
    /// `c<commits.len() + 1>`; the stored counter keeps that true even for
    /// states assembled by hand.
    pub fn next_commit_id(&self) -> CommitId {
        CommitId::from_seq(self.next_seq)
    }

    /// Color for a new branch: the first palette entry no branch uses yet,
    /// cycling by branch count once the palette is exhausted.
    pub fn next_branch_color(&self, palette: &[String]) -> String {
        palette
            .iter()
            .find(|color| !self.branches.iter().any(|b| &b.color == *color))
            .or_else(|| palette.get(self.branches.len() % palette.len().max(1)))
            .cloned()
            .unwrap_or_default()
    }

    // =========================================================================
    // Mutators used by engine handlers on their working copy
    // =========================================================================

    /// Move the HEAD flag to `id`. Leaves `is_latest` alone.
    pub fn move_head(&mut self, id: &CommitId) {
        for commit in &mut self.commits {
            commit.is_head = &commit.id == id;
        }
    }

    /// Move HEAD and the latest-tip highlight to `id`.
    pub fn mark_tip(&mut self, id: &CommitId) {
        for commit in &mut self.commits {
            let tip = &commit.id == id;
            commit.is_head = tip;
            commit.is_latest = tip;
        }
    }

    /// Append a new commit on top of HEAD and make it the tip.
    ///
    /// Advances the attached branch, if any. Returns the new id.
    pub fn append_commit(
        &mut self,
        parent: CommitId,
        second_parent: Option<CommitId>,
        message: String,
    ) -> CommitId {
        let id = self.next_commit_id();
        self.next_seq += 1;

        for commit in &mut self.commits {
            commit.is_head = false;
            commit.is_latest = false;
        }
        self.commits.push(Commit {
            id: id.clone(),
            message,
            branch: self.current.to_string(),
            parent: Some(parent),
            second_parent,
            is_head: true,
            is_latest: true,
            highlighted: false,
        });
        self.point_current_branch(&id);

        id
    }

    /// Point the attached branch (if any) at `id`.
    pub fn point_current_branch(&mut self, id: &CommitId) {
        if let Some(name) = self.current.branch().cloned() {
            if let Some(branch) = self.branches.iter_mut().find(|b| b.name == name) {
                branch.head = id.clone();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fresh() -> RepoState {
        RepoState::new(&Config::default())
    }

    #[test]
    fn fresh_state_is_canonical() {
        let state = fresh();
        assert_eq!(state.commits.len(), 1);
        assert_eq!(state.commits[0].id.as_str(), "c1");
        assert_eq!(state.commits[0].message, "Initial commit");
        assert!(state.commits[0].is_head);
        assert_eq!(state.branches.len(), 1);
        assert_eq!(state.branches[0].name.as_str(), "main");
        assert_eq!(state.branches[0].color, "#2ecc71");
        assert_eq!(state.current.to_string(), "main");
        assert_eq!(state.next_commit_id().as_str(), "c2");
    }

    #[test]
    fn append_commit_advances_branch() {
        let mut state = fresh();
        let id = state.append_commit(CommitId::from_seq(1), None, "work".into());

        assert_eq!(id.as_str(), "c2");
        assert_eq!(state.branch("main").unwrap().head, id);
        assert_eq!(state.head_commit().unwrap().id, id);
        assert!(!state.commit("c1").unwrap().is_head);
        assert!(!state.commit("c1").unwrap().is_latest);
        assert_eq!(state.commit("c2").unwrap().branch, "main");
        assert_eq!(state.next_commit_id().as_str(), "c3");
    }

    #[test]
    fn append_commit_detached_leaves_branches() {
        let mut state = fresh();
        state.current = HeadRef::Detached;
        let id = state.append_commit(CommitId::from_seq(1), None, "loose".into());

        assert_eq!(state.branch("main").unwrap().head.as_str(), "c1");
        assert_eq!(state.commit(id.as_str()).unwrap().branch, DETACHED_LABEL);
    }

    #[test]
    fn move_head_keeps_latest() {
        let mut state = fresh();
        state.append_commit(CommitId::from_seq(1), None, "work".into());
        state.move_head(&CommitId::from_seq(1));

        assert!(state.commit("c1").unwrap().is_head);
        assert!(!state.commit("c2").unwrap().is_head);
        assert!(state.commit("c2").unwrap().is_latest);
    }

    #[test]
    fn branch_colors_avoid_collisions() {
        let mut state = fresh();
        let palette: Vec<String> = vec!["#111111".into(), "#222222".into()];

        let first = state.next_branch_color(&palette);
        assert_eq!(first, "#111111");
        state.branches.push(Branch {
            name: BranchName::new("a").unwrap(),
            color: first,
            head: CommitId::from_seq(1),
        });

        let second = state.next_branch_color(&palette);
        assert_eq!(second, "#222222");
        state.branches.push(Branch {
            name: BranchName::new("b").unwrap(),
            color: second,
            head: CommitId::from_seq(1),
        });

        // Exhausted: cycles by branch count (3 branches -> index 1).
        assert_eq!(state.next_branch_color(&palette), "#222222");
    }

    #[test]
    fn head_ref_display() {
        assert_eq!(HeadRef::Detached.to_string(), "HEAD detached");
        let attached = HeadRef::Branch(BranchName::new("dev").unwrap());
        assert_eq!(attached.to_string(), "dev");
        assert_eq!(attached.branch().unwrap().as_str(), "dev");
    }

    #[test]
    fn serializes_with_camel_case_fields() {
        let json = serde_json::to_value(fresh()).unwrap();
        assert!(json.get("workingDirectory").is_some());
        assert_eq!(json["current"]["kind"], "branch");
        assert_eq!(json["current"]["name"], "main");
        assert_eq!(json["commits"][0]["isHead"], true);
    }
}
