//! Arena-backed forest view of the organisation for tree display.

use std::collections::HashMap;

use generational_arena::{Arena, Index};
use termtree::Tree;
use tracing::{debug, instrument};

use crate::domain::entities::{Organisation, Person};
use crate::domain::error::{DomainError, DomainResult};

/// Node of the organisation forest.
#[derive(Debug)]
pub struct OrgNode {
    pub person: Person,
    /// Index of the manager's node, None for roots
    pub parent: Option<Index>,
    /// Direct reports in record order
    pub children: Vec<Index>,
}

/// Arena-based forest of reporting trees, one tree per top-level manager.
///
/// The manager mapping only points upwards; this view adds the downward
/// links needed to display the organisation.
#[derive(Debug, Default)]
pub struct OrgForest {
    arena: Arena<OrgNode>,
    roots: Vec<Index>,
}

impl OrgForest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Link every person to their manager.
    ///
    /// Fails if a manager id is unknown or if some people cannot reach a root.
    #[instrument(level = "debug", skip_all)]
    pub fn from_organisation(org: &Organisation) -> DomainResult<Self> {
        let mut forest = Self::new();

        let indices: Vec<Index> = org
            .people
            .iter()
            .map(|person| {
                forest.arena.insert(OrgNode {
                    person: person.clone(),
                    parent: None,
                    children: Vec::new(),
                })
            })
            .collect();
        let by_id: HashMap<&str, Index> = org
            .people
            .iter()
            .map(|person| person.id.as_str())
            .zip(indices.iter().copied())
            .collect();

        for (person, &idx) in org.people.iter().zip(&indices) {
            let Some(manager_id) = person.manager_id.as_deref() else {
                forest.roots.push(idx);
                continue;
            };
            let parent_idx = *by_id
                .get(manager_id)
                .ok_or_else(|| DomainError::UnknownIdentifier(manager_id.to_string()))?;
            if let Some(node) = forest.arena.get_mut(idx) {
                node.parent = Some(parent_idx);
            }
            if let Some(parent) = forest.arena.get_mut(parent_idx) {
                parent.children.push(idx);
            }
        }

        // People on a cycle never hang below a root
        let reachable = forest.iter().count();
        if reachable < forest.len() {
            let stranded = org
                .people
                .iter()
                .zip(&indices)
                .find(|(_, idx)| !forest.is_reachable(**idx))
                .map(|(person, _)| person.id.clone())
                .unwrap_or_default();
            return Err(DomainError::CycleDetected(stranded));
        }

        debug!(
            "built forest with {} trees and {} people",
            forest.roots.len(),
            forest.len()
        );
        Ok(forest)
    }

    pub fn get_node(&self, idx: Index) -> Option<&OrgNode> {
        self.arena.get(idx)
    }

    pub fn roots(&self) -> &[Index] {
        &self.roots
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    /// Number of levels in the deepest tree; a lone root counts as 1.
    pub fn depth(&self) -> usize {
        self.iter().map(|(depth, _)| depth + 1).max().unwrap_or(0)
    }

    /// Pre-order walk over all trees, yielding each node with its depth.
    pub fn iter(&self) -> ForestIterator<'_> {
        ForestIterator::new(self)
    }

    /// One display tree per root, each node rendered as `Name (id)`.
    pub fn to_termtree(&self) -> Vec<Tree<String>> {
        self.roots
            .iter()
            .filter_map(|&root| self.subtree(root))
            .collect()
    }

    fn subtree(&self, idx: Index) -> Option<Tree<String>> {
        let node = self.get_node(idx)?;
        let leaves: Vec<Tree<String>> = node
            .children
            .iter()
            .filter_map(|&child| self.subtree(child))
            .collect();
        Some(Tree::new(node.person.to_string()).with_leaves(leaves))
    }

    fn is_reachable(&self, idx: Index) -> bool {
        let mut current = Some(idx);
        let mut steps = 0;
        while let Some(node) = current.and_then(|i| self.get_node(i)) {
            if node.parent.is_none() {
                return true;
            }
            steps += 1;
            if steps > self.len() {
                return false;
            }
            current = node.parent;
        }
        false
    }
}

pub struct ForestIterator<'a> {
    forest: &'a OrgForest,
    stack: Vec<(Index, usize)>,
}

impl<'a> ForestIterator<'a> {
    fn new(forest: &'a OrgForest) -> Self {
        // Reverse so the first root is visited first
        let stack = forest.roots.iter().rev().map(|&root| (root, 0)).collect();
        Self { forest, stack }
    }
}

impl<'a> Iterator for ForestIterator<'a> {
    type Item = (usize, &'a OrgNode);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((current_idx, depth)) = self.stack.pop() {
            if let Some(node) = self.forest.get_node(current_idx) {
                // Push children in reverse order for left-to-right traversal
                for &child in node.children.iter().rev() {
                    self.stack.push((child, depth + 1));
                }
                return Some((depth, node));
            }
        }
        None
    }
}
