//! Execution, analysis and description tests over whole trees.

mod support;
