//! Static analysis over instruction trees.
//!
//! The tree drives the traversal ([`InstructionNode::analyze`]); each
//! instruction reports what it defines and what it reads. Checking across the
//! whole tree is the analyzer's job.
//!
//! [`InstructionNode::analyze`]: crate::InstructionNode::analyze

use para_ir::ReferenceId;
use rustc_hash::FxHashSet;

/// Receiver of per-instruction analysis facts.
pub trait Analyzer {
    /// The instruction binds `reference`.
    fn define(&mut self, reference: ReferenceId);

    /// The instruction reads `reference`.
    fn require(&mut self, reference: ReferenceId);

    /// Called before a node's instruction is analyzed.
    fn enter_node(&mut self) {}

    /// Called after a node and all of its children are analyzed.
    fn leave_node(&mut self) {}
}

/// Tracks definitions and requirements across a tree and reports references
/// that are read but never bound.
#[derive(Debug, Default)]
pub struct DependencyAnalyzer {
    defined: FxHashSet<ReferenceId>,
    required: Vec<ReferenceId>,
    duplicates: Vec<ReferenceId>,
    depth: usize,
    max_depth: usize,
    nodes: usize,
}

impl DependencyAnalyzer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Treat `references` as already bound, e.g. parameters supplied by the
    /// store rather than by an instruction.
    #[must_use]
    pub fn with_predefined(mut self, references: impl IntoIterator<Item = ReferenceId>) -> Self {
        self.defined.extend(references);
        self
    }

    /// Required references that nothing defines, sorted and deduplicated.
    pub fn undefined(&self) -> Vec<ReferenceId> {
        let mut missing: Vec<_> = self
            .required
            .iter()
            .copied()
            .filter(|id| !self.defined.contains(id))
            .collect();
        missing.sort_unstable();
        missing.dedup();
        missing
    }

    /// References defined more than once, in the order the repeats were seen.
    pub fn duplicates(&self) -> &[ReferenceId] {
        &self.duplicates
    }

    /// Number of nodes visited.
    pub fn node_count(&self) -> usize {
        self.nodes
    }

    /// Deepest nesting seen; a lone root node has depth 1.
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }
}

impl Analyzer for DependencyAnalyzer {
    fn define(&mut self, reference: ReferenceId) {
        if !self.defined.insert(reference) {
            self.duplicates.push(reference);
        }
    }

    fn require(&mut self, reference: ReferenceId) {
        self.required.push(reference);
    }

    fn enter_node(&mut self) {
        self.nodes += 1;
        self.depth += 1;
        self.max_depth = self.max_depth.max(self.depth);
    }

    fn leave_node(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const R1: ReferenceId = ReferenceId::new(1);
    const R2: ReferenceId = ReferenceId::new(2);
    const R3: ReferenceId = ReferenceId::new(3);

    #[test]
    fn undefined_is_sorted_and_deduplicated() {
        let mut analyzer = DependencyAnalyzer::new();
        analyzer.require(R3);
        analyzer.require(R1);
        analyzer.require(R3);
        analyzer.define(R2);
        analyzer.require(R2);
        assert_eq!(analyzer.undefined(), vec![R1, R3]);
    }

    #[test]
    fn predefined_references_are_satisfied() {
        let mut analyzer = DependencyAnalyzer::new().with_predefined([R1]);
        analyzer.require(R1);
        assert!(analyzer.undefined().is_empty());
    }

    #[test]
    fn second_definition_is_a_duplicate() {
        let mut analyzer = DependencyAnalyzer::new().with_predefined([R1]);
        analyzer.define(R1);
        analyzer.define(R2);
        assert_eq!(analyzer.duplicates(), &[R1]);
    }

    #[test]
    fn depth_tracking() {
        let mut analyzer = DependencyAnalyzer::new();
        analyzer.enter_node();
        analyzer.enter_node();
        analyzer.leave_node();
        analyzer.enter_node();
        analyzer.leave_node();
        analyzer.leave_node();
        assert_eq!(analyzer.node_count(), 3);
        assert_eq!(analyzer.max_depth(), 2);
    }
}
