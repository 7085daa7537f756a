//! Heuristic longest simple path search
//!
//! Breadth-first exploration that tracks the entire path taken for each
//! frontier item, so the simple-path constraint can be enforced without a
//! global visited set. This is a heuristic, not an exact longest-path
//! solver: frontier growth is exponential in the worst case on dense,
//! cyclic graphs, which is why the explorer carries an optional step
//! budget that truncates the search and returns the best path found.

use crate::graph::OverlapGraph;
use crate::token::Token;
use std::collections::VecDeque;

/// Result of one exploration run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exploration {
    /// The longest path found, start token first.
    pub path: Vec<Token>,
    /// Number of frontier items dequeued.
    pub steps: usize,
    /// Whether the step budget ended the search early.
    pub truncated: bool,
}

/// Breadth-first longest-path explorer with an optional step budget.
#[derive(Debug, Clone, Default)]
pub struct PathExplorer {
    step_budget: Option<usize>,
}

impl PathExplorer {
    /// Unbounded explorer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Explorer that dequeues at most `steps` frontier items before
    /// returning the best path found so far.
    pub fn with_step_budget(steps: usize) -> Self {
        Self {
            step_budget: Some(steps),
        }
    }

    /// Explore outward from `start`, returning the longest simple path
    /// found. A start token that is not a vertex yields the empty path;
    /// a vertex with no out-edges yields the single-token path.
    ///
    /// Ties between equal-length paths keep the first one found, which
    /// under FIFO order is the shallowest-discovered path. Neighbors are
    /// expanded in descending (out-degree, literal) order.
    pub fn explore(&self, graph: &OverlapGraph, start: &Token) -> Exploration {
        if !graph.contains(start) {
            return Exploration {
                path: Vec::new(),
                steps: 0,
                truncated: false,
            };
        }

        let mut queue: VecDeque<(Token, Vec<Token>)> = VecDeque::new();
        queue.push_back((start.clone(), vec![start.clone()]));

        let mut best: Vec<Token> = Vec::new();
        let mut steps = 0usize;
        let mut truncated = false;

        while let Some((current, path)) = queue.pop_front() {
            if self.step_budget.is_some_and(|budget| steps >= budget) {
                truncated = true;
                break;
            }
            steps += 1;

            // Strictly longer wins; ties keep the earliest discovery.
            if path.len() > best.len() {
                best.clone_from(&path);
            }

            // Descending (out-degree, literal); the sort is stable, so
            // fully tied neighbors keep their input order.
            let mut candidates: Vec<&Token> = graph.neighbors(&current).iter().collect();
            candidates.sort_by(|a, b| {
                (graph.out_degree(b), b.as_str()).cmp(&(graph.out_degree(a), a.as_str()))
            });

            for neighbor in candidates {
                if !path.contains(neighbor) {
                    let mut extended = path.clone();
                    extended.push(neighbor.clone());
                    queue.push_back((neighbor.clone(), extended));
                }
            }
        }

        Exploration {
            path: best,
            steps,
            truncated,
        }
    }
}

/// Unbounded longest-path search from `start`.
pub fn find_longest_path(graph: &OverlapGraph, start: &Token) -> Vec<Token> {
    PathExplorer::new().explore(graph, start).path
}
