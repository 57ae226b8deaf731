//! core::graph
//!
//! Commit graph queries over a [`RepoState`].
//!
//! # Architecture
//!
//! The commit graph is a DAG where:
//! - Nodes are commits
//! - Edges point from child to parent (`parent` and `second_parent`)
//! - The root is the commit created by `init`
//!
//! The graph is derived on demand from a snapshot and never outlives it.
//! `branch -d` and verification build one; everything else looks commits
//! up directly on the state.

use super::state::RepoState;
use super::types::CommitId;
use std::collections::{HashMap, HashSet};

/// Parent/child index of a snapshot's commits.
#[derive(Debug, Default)]
pub struct CommitGraph {
    /// Parents of each commit, first parent first
    parents: HashMap<CommitId, Vec<CommitId>>,
    /// Cached children sets (derived from parents)
    children: HashMap<CommitId, HashSet<CommitId>>,
}

impl CommitGraph {
    /// Index the commits of `state`.
    pub fn from_state(state: &RepoState) -> Self {
        let mut graph = Self::default();
        for commit in &state.commits {
            graph.parents.entry(commit.id.clone()).or_default();
            for parent in commit.parents() {
                graph.add_edge(commit.id.clone(), parent.clone());
            }
        }
        graph
    }

    fn add_edge(&mut self, child: CommitId, parent: CommitId) {
        self.children
            .entry(parent.clone())
            .or_default()
            .insert(child.clone());
        self.parents.entry(child).or_default().push(parent);
    }

    /// Parents of a commit (empty for the root or unknown ids).
    pub fn parents(&self, id: &CommitId) -> &[CommitId] {
        self.parents.get(id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Whether some other commit names `id` as a parent.
    ///
    /// This is the notion of "merged" used by `git branch -d`: a branch whose
    /// tip has been built upon or merged somewhere can be deleted safely.
    pub fn has_children(&self, id: &CommitId) -> bool {
        self.children
            .get(id)
            .is_some_and(|c| c.iter().any(|child| child != id))
    }

    /// Check the graph for cycles.
    ///
    /// Returns `Some(commit)` if a cycle is reachable from that commit.
    pub fn find_cycle(&self) -> Option<CommitId> {
        let mut visited = HashSet::new();
        let mut path = HashSet::new();

        self.parents
            .keys()
            .find(|id| self.has_cycle_from(id, &mut visited, &mut path))
            .cloned()
    }

    fn has_cycle_from(
        &self,
        id: &CommitId,
        visited: &mut HashSet<CommitId>,
        path: &mut HashSet<CommitId>,
    ) -> bool {
        if path.contains(id) {
            return true;
        }
        if !visited.insert(id.clone()) {
            return false;
        }

        path.insert(id.clone());
        let cyclic = self
            .parents(id)
            .iter()
            .any(|parent| self.has_cycle_from(parent, visited, path));
        path.remove(id);
        cyclic
    }
}
