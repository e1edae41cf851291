use crate::demo;
use crate::report::ActionLog;

/// One line per instruction, children indented under their parent.
pub fn describe_program() -> String {
    demo::program(&ActionLog::default()).describe(&demo::printer())
}
