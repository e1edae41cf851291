//! Instruction nodes and the three tree traversals.

use crate::analyzer::Analyzer;
use crate::runtime::Runtime;
use crate::stringifier::Stringifier;
use para_stack::ensure_sufficient_stack;
use std::fmt;

/// Spaces of indentation per nesting level in descriptions.
const INDENT_WIDTH: usize = 4;

/// A step of a construction history.
///
/// Instructions do not own their children: the enclosing [`InstructionNode`]
/// does, and hands them to [`Instruction::evaluate`]. An instruction decides
/// whether, and how often, its children run.
pub trait Instruction: fmt::Debug + Send + Sync {
    /// Execute against `runtime`. Faults go to [`Runtime::report_error`].
    fn evaluate(&self, runtime: &mut dyn Runtime, children: &[InstructionNode]);

    /// Register whatever this instruction defines or depends on.
    fn analyze(&self, analyzer: &mut dyn Analyzer);

    /// One-line human-readable rendering of this instruction.
    fn description(&self, stringifier: &dyn Stringifier) -> String;
}

/// Execute `nodes` in order, stopping early if the runtime halts.
pub fn run_sequence(runtime: &mut dyn Runtime, nodes: &[InstructionNode]) {
    for node in nodes {
        if runtime.is_halted() {
            tracing::debug!("runtime halted; skipping remaining instructions");
            return;
        }
        node.evaluate(runtime);
    }
}

/// An instruction together with its ordered children.
pub struct InstructionNode {
    instruction: Box<dyn Instruction>,
    children: Vec<InstructionNode>,
}

impl InstructionNode {
    pub fn new(instruction: impl Instruction + 'static) -> Self {
        InstructionNode {
            instruction: Box::new(instruction),
            children: Vec::new(),
        }
    }

    pub fn with_children(
        instruction: impl Instruction + 'static,
        children: Vec<InstructionNode>,
    ) -> Self {
        InstructionNode {
            instruction: Box::new(instruction),
            children,
        }
    }

    pub fn push_child(&mut self, child: InstructionNode) {
        self.children.push(child);
    }

    pub fn instruction(&self) -> &dyn Instruction {
        self.instruction.as_ref()
    }

    pub fn children(&self) -> &[InstructionNode] {
        &self.children
    }

    /// Execute this node's instruction, handing it this node's children.
    pub fn evaluate(&self, runtime: &mut dyn Runtime) {
        ensure_sufficient_stack(|| self.instruction.evaluate(runtime, &self.children));
    }

    /// Analyze this node, then each child in order.
    pub fn analyze(&self, analyzer: &mut dyn Analyzer) {
        ensure_sufficient_stack(|| {
            analyzer.enter_node();
            self.instruction.analyze(analyzer);
            for child in &self.children {
                child.analyze(analyzer);
            }
            analyzer.leave_node();
        });
    }

    /// Render this node and its subtree, one indented line per node.
    pub fn describe(&self, stringifier: &dyn Stringifier) -> String {
        let mut lines = Vec::new();
        self.describe_into(stringifier, 0, &mut lines);
        lines.join("\n")
    }

    fn describe_into(&self, stringifier: &dyn Stringifier, depth: usize, lines: &mut Vec<String>) {
        ensure_sufficient_stack(|| {
            let indent = " ".repeat(depth * INDENT_WIDTH);
            lines.push(format!("{indent}{}", self.instruction.description(stringifier)));
            for child in &self.children {
                child.describe_into(stringifier, depth + 1, lines);
            }
        });
    }
}

impl Drop for InstructionNode {
    fn drop(&mut self) {
        // Flatten the subtree so nested nodes drop without recursing.
        let mut pending = std::mem::take(&mut self.children);
        while let Some(mut node) = pending.pop() {
            pending.append(&mut node.children);
        }
    }
}

impl fmt::Debug for InstructionNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ensure_sufficient_stack(|| {
            f.debug_struct("InstructionNode")
                .field("instruction", &self.instruction)
                .field("children", &self.children)
                .finish()
        })
    }
}

/// The ordered top-level nodes of a construction history.
#[derive(Debug, Default)]
pub struct InstructionTree {
    roots: Vec<InstructionNode>,
}

impl InstructionTree {
    pub fn new(roots: Vec<InstructionNode>) -> Self {
        InstructionTree { roots }
    }

    pub fn push(&mut self, node: InstructionNode) {
        self.roots.push(node);
    }

    pub fn roots(&self) -> &[InstructionNode] {
        &self.roots
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    #[tracing::instrument(level = "debug", skip_all, fields(roots = self.roots.len()))]
    pub fn execute(&self, runtime: &mut dyn Runtime) {
        run_sequence(runtime, &self.roots);
    }

    pub fn analyze(&self, analyzer: &mut dyn Analyzer) {
        for root in &self.roots {
            root.analyze(analyzer);
        }
    }

    pub fn describe(&self, stringifier: &dyn Stringifier) -> String {
        let mut lines = Vec::new();
        for root in &self.roots {
            root.describe_into(stringifier, 0, &mut lines);
        }
        lines.join("\n")
    }
}
