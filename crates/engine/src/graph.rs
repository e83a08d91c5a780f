//! Dependency graph validation
//!
//! Builds the per-batch "depends on" graph and rejects batches whose graph
//! contains a cycle, before any scoring happens. The graph is rebuilt for
//! every analysis call and discarded afterwards.

use std::collections::{HashMap, HashSet};

use tracing::debug;

use taskrank_domain::entities::Task;
use taskrank_domain::errors::{AnalyzerError, AnalyzerResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mark {
    InProgress,
    Done,
}

/// Directed dependency graph over the task ids of one batch.
///
/// Edge `a -> b` means task `a` depends on task `b`. Edges pointing at ids
/// outside the batch are dropped, duplicate dependency entries are collapsed
/// so a blocker is never counted twice. Self-edges are kept: they are
/// 1-node cycles and must be reported as such.
#[derive(Debug)]
pub struct DependencyGraph {
    edges: HashMap<i64, Vec<i64>>,
    titles: HashMap<i64, String>,
    blocker_counts: HashMap<i64, usize>,
    // Sorted ids so traversal and cycle reports are deterministic.
    node_order: Vec<i64>,
}

impl DependencyGraph {
    pub fn build(tasks: &[Task]) -> Self {
        let known_ids: HashSet<i64> = tasks.iter().map(|t| t.id).collect();

        let mut edges: HashMap<i64, Vec<i64>> = HashMap::with_capacity(tasks.len());
        let mut titles = HashMap::with_capacity(tasks.len());
        let mut blocker_counts: HashMap<i64, usize> = HashMap::new();

        for task in tasks {
            let mut deps: Vec<i64> = task
                .dependencies
                .iter()
                .copied()
                .filter(|dep| known_ids.contains(dep))
                .collect();
            deps.sort_unstable();
            deps.dedup();

            for &dep in &deps {
                if dep != task.id {
                    *blocker_counts.entry(dep).or_insert(0) += 1;
                }
            }

            titles.insert(task.id, task.title.clone());
            // Duplicate task ids collapse onto one node here; the validation
            // gate rejects them, this just guarantees the traversal below
            // cannot loop on malformed input.
            edges.insert(task.id, deps);
        }

        let mut node_order: Vec<i64> = edges.keys().copied().collect();
        node_order.sort_unstable();

        Self {
            edges,
            titles,
            blocker_counts,
            node_order,
        }
    }

    /// Three-color depth-first check over the whole graph.
    ///
    /// Returns the first cycle found as a `CircularDependency` error carrying
    /// the ordered ids of the loop and a titled path for display.
    pub fn ensure_acyclic(&self) -> AnalyzerResult<()> {
        let mut marks: HashMap<i64, Mark> = HashMap::with_capacity(self.node_order.len());
        let mut path: Vec<i64> = Vec::new();

        for &node in &self.node_order {
            if !marks.contains_key(&node) {
                if let Some(cycle) = self.visit(node, &mut marks, &mut path) {
                    debug!("Cycle detected: {:?}", cycle);
                    return Err(self.cycle_error(cycle));
                }
            }
        }

        debug!("Dependency graph of {} nodes is acyclic", self.node_order.len());
        Ok(())
    }

    fn visit(
        &self,
        node: i64,
        marks: &mut HashMap<i64, Mark>,
        path: &mut Vec<i64>,
    ) -> Option<Vec<i64>> {
        match marks.get(&node) {
            Some(Mark::Done) => return None,
            Some(Mark::InProgress) => {
                // Back edge: the cycle is the suffix of the path starting at
                // the revisited node.
                let start = path.iter().position(|&id| id == node).unwrap_or(0);
                return Some(path[start..].to_vec());
            }
            None => {}
        }

        marks.insert(node, Mark::InProgress);
        path.push(node);

        if let Some(deps) = self.edges.get(&node) {
            for &dep in deps {
                if let Some(cycle) = self.visit(dep, marks, path) {
                    return Some(cycle);
                }
            }
        }

        path.pop();
        marks.insert(node, Mark::Done);
        None
    }

    fn cycle_error(&self, cycle: Vec<i64>) -> AnalyzerError {
        let mut hops: Vec<String> = cycle.iter().map(|id| self.describe(*id)).collect();
        if let Some(first) = hops.first().cloned() {
            hops.push(first); // close the loop in the displayed path
        }
        AnalyzerError::CircularDependency {
            path: hops.join(" -> "),
            cycle,
        }
    }

    fn describe(&self, id: i64) -> String {
        match self.titles.get(&id) {
            Some(title) => format!("\"{title}\" (#{id})"),
            None => format!("#{id}"),
        }
    }

    /// Number of distinct other tasks in the batch that depend on `id`.
    pub fn blocker_count(&self, id: i64) -> usize {
        self.blocker_counts.get(&id).copied().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn create_test_task(id: i64, dependencies: Vec<i64>) -> Task {
        Task::new(
            id,
            format!("test_task_{id}"),
            NaiveDate::from_ymd_opt(2026, 9, 1).unwrap(),
        )
        .with_dependencies(dependencies)
    }

    #[test]
    fn test_acyclic_chain_passes() {
        let tasks = vec![
            create_test_task(1, vec![]),
            create_test_task(2, vec![1]),
            create_test_task(3, vec![1, 2]),
        ];
        assert!(DependencyGraph::build(&tasks).ensure_acyclic().is_ok());
    }

    #[test]
    fn test_two_cycle_reports_both_tasks() {
        let tasks = vec![create_test_task(1, vec![2]), create_test_task(2, vec![1])];
        let err = DependencyGraph::build(&tasks).ensure_acyclic().unwrap_err();
        match err {
            AnalyzerError::CircularDependency { cycle, path } => {
                assert!(cycle.contains(&1));
                assert!(cycle.contains(&2));
                assert!(path.contains("test_task_1"));
                assert!(path.contains("test_task_2"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_self_dependency_is_one_node_cycle() {
        let tasks = vec![create_test_task(1, vec![1])];
        let err = DependencyGraph::build(&tasks).ensure_acyclic().unwrap_err();
        match err {
            AnalyzerError::CircularDependency { cycle, .. } => assert_eq!(cycle, vec![1]),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_longer_cycle_detected() {
        let tasks = vec![
            create_test_task(1, vec![2]),
            create_test_task(2, vec![3]),
            create_test_task(3, vec![1]),
            create_test_task(4, vec![]),
        ];
        let err = DependencyGraph::build(&tasks).ensure_acyclic().unwrap_err();
        match err {
            AnalyzerError::CircularDependency { cycle, .. } => {
                assert_eq!(cycle.len(), 3);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_unknown_dependency_ids_are_ignored() {
        let tasks = vec![create_test_task(1, vec![99]), create_test_task(2, vec![1])];
        let graph = DependencyGraph::build(&tasks);
        assert!(graph.ensure_acyclic().is_ok());
        assert_eq!(graph.blocker_count(99), 0);
        assert_eq!(graph.blocker_count(1), 1);
    }

    #[test]
    fn test_duplicate_dependency_entries_counted_once() {
        let tasks = vec![
            create_test_task(1, vec![]),
            create_test_task(2, vec![1, 1, 1]),
        ];
        let graph = DependencyGraph::build(&tasks);
        assert_eq!(graph.blocker_count(1), 1);
    }

    #[test]
    fn test_blocker_count_across_tasks() {
        let tasks = vec![
            create_test_task(1, vec![]),
            create_test_task(2, vec![1]),
            create_test_task(3, vec![1]),
            create_test_task(4, vec![1, 3]),
        ];
        let graph = DependencyGraph::build(&tasks);
        assert_eq!(graph.blocker_count(1), 3);
        assert_eq!(graph.blocker_count(3), 1);
        assert_eq!(graph.blocker_count(2), 0);
    }

    #[test]
    fn test_duplicate_task_ids_do_not_hang() {
        // The validation gate rejects duplicate ids before the graph is
        // built; if it is bypassed the traversal must still terminate.
        let tasks = vec![create_test_task(1, vec![2]), create_test_task(1, vec![])];
        let graph = DependencyGraph::build(&tasks);
        let _ = graph.ensure_acyclic();
    }
}
