//! Shared state threaded through every argument parser during a single parse.

use std::sync::Arc;

use argot_parser::ast::AstNode;

use crate::env::{Environment, ProcessEnvironment};

/// Represents the state of one top-level parse: the classified nodes, which of them have
/// already been claimed, and the environment used for fallbacks.
///
/// A node is claimed by at most one argument parser. Parsers only look at unclaimed nodes,
/// and claim every node they take as input before they return, including nodes whose
/// values later fail to decode. Parsers run one after another, so the claim order is the
/// order in which they are invoked.
pub struct ParseContext {
    nodes: Vec<AstNode>,
    visited: Vec<bool>,
    environment: Arc<dyn Environment>,
}

impl ParseContext {
    /// Returns a new context over the given nodes, none of them claimed, reading fallback
    /// values from the process environment.
    ///
    /// # Arguments
    ///
    /// * `nodes` - The nodes produced by [`argot_parser::parse_tokens`].
    pub fn new(nodes: Vec<AstNode>) -> Self {
        Self::with_environment(nodes, Arc::new(ProcessEnvironment))
    }

    /// Returns a new context reading fallback values from the given environment.
    ///
    /// # Arguments
    ///
    /// * `nodes` - The nodes produced by [`argot_parser::parse_tokens`].
    /// * `environment` - The environment to consult for absent options.
    pub fn with_environment(nodes: Vec<AstNode>, environment: Arc<dyn Environment>) -> Self {
        let visited = vec![false; nodes.len()];
        Self {
            nodes,
            visited,
            environment,
        }
    }

    /// Returns all nodes, claimed or not, in command-line order.
    pub fn nodes(&self) -> &[AstNode] {
        &self.nodes
    }

    /// Returns the environment used for fallback values.
    pub fn environment(&self) -> &dyn Environment {
        self.environment.as_ref()
    }

    /// Returns whether the node at the given position has been claimed.
    pub fn is_visited(&self, id: usize) -> bool {
        self.visited.get(id).copied().unwrap_or(false)
    }

    /// Returns the number of claimed nodes.
    pub fn visited_count(&self) -> usize {
        self.visited.iter().filter(|visited| **visited).count()
    }

    /// Iterates over the unclaimed nodes, with their positions.
    pub fn unvisited(&self) -> impl Iterator<Item = (usize, &AstNode)> {
        self.nodes
            .iter()
            .enumerate()
            .filter(|(id, _)| !self.visited[*id])
    }

    /// Returns copies of all unclaimed nodes, in command-line order.
    pub fn unvisited_nodes(&self) -> Vec<AstNode> {
        self.unvisited().map(|(_, node)| node.clone()).collect()
    }

    /// Claims the given nodes and returns copies of them.
    fn claim(&mut self, ids: Vec<usize>) -> Vec<AstNode> {
        ids.into_iter()
            .map(|id| {
                debug_assert!(!self.visited[id], "node {id} claimed twice");
                self.visited[id] = true;

                let node = self.nodes[id].clone();
                tracing::debug!(target: "claims", "claimed node {id}: {node}");
                node
            })
            .collect()
    }

    /// Claims every unclaimed option node with the given long or short name.
    ///
    /// # Arguments
    ///
    /// * `long` - The long name of the option.
    /// * `short` - The short name of the option, if any.
    pub fn claim_options(&mut self, long: &str, short: Option<char>) -> Vec<AstNode> {
        let ids = self
            .unvisited()
            .filter(|(_, node)| node.is_option_named(long, short))
            .map(|(id, _)| id)
            .collect();

        self.claim(ids)
    }

    /// Claims the first unclaimed positional node, if there is one.
    pub fn claim_next_positional(&mut self) -> Option<AstNode> {
        let id = self
            .unvisited()
            .find(|(_, node)| node.is_positional())
            .map(|(id, _)| id)?;

        self.claim(vec![id]).pop()
    }

    /// Claims every unclaimed positional node.
    pub fn claim_rest_positionals(&mut self) -> Vec<AstNode> {
        let ids = self
            .unvisited()
            .filter(|(_, node)| node.is_positional())
            .map(|(id, _)| id)
            .collect();

        self.claim(ids)
    }

    /// Claims the node at the given position. Claiming an already-claimed node has no
    /// effect.
    ///
    /// # Arguments
    ///
    /// * `id` - Position of the node.
    pub fn visit(&mut self, id: usize) {
        if let Some(visited) = self.visited.get_mut(id) {
            *visited = true;
        }
    }
}
