use crate::demo;
use crate::report::ActionLog;
use para_exec::DependencyAnalyzer;
use para_ir::ReferenceId;
use std::fmt;

/// What static analysis found in the demo program.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnalysisSummary {
    pub nodes: usize,
    pub depth: usize,
    /// References read but never defined by an instruction; these must come
    /// from the parameter store.
    pub parameters: Vec<ReferenceId>,
    pub duplicates: Vec<ReferenceId>,
}

pub fn analyze_program() -> AnalysisSummary {
    let tree = demo::program(&ActionLog::default());
    let mut analyzer = DependencyAnalyzer::new();
    tree.analyze(&mut analyzer);
    AnalysisSummary {
        nodes: analyzer.node_count(),
        depth: analyzer.max_depth(),
        parameters: analyzer.undefined(),
        duplicates: analyzer.duplicates().to_vec(),
    }
}

impl fmt::Display for AnalysisSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "nodes: {}", self.nodes)?;
        writeln!(f, "depth: {}", self.depth)?;
        writeln!(f, "parameters:")?;
        for &id in &self.parameters {
            match demo::parameter_name(id) {
                Some(name) => writeln!(f, "  {id} ({name})")?,
                None => writeln!(f, "  {id}")?,
            }
        }
        for id in &self.duplicates {
            writeln!(f, "duplicate definition: {id}")?;
        }
        Ok(())
    }
}
