//! The demonstration parameter program.
//!
//! ```text
//! if width > 0:
//!     report span = width * 2
//!     if height >= min(width, 10):
//!         report diagonal = distance(vec(0, 0), vec(width, height))
//! report flange = offset + thickness
//! ```

use crate::report::{ActionLog, Report};
use para_eval::DataSet;
use para_exec::{ConditionalGroup, ExpressionPrinter, InstructionNode, InstructionTree};
use para_ir::{BinaryOp, Expression, FunctionKind, ReferenceId, Value};

pub const WIDTH: ReferenceId = ReferenceId::new(1);
pub const HEIGHT: ReferenceId = ReferenceId::new(2);
pub const OFFSET: ReferenceId = ReferenceId::new(3);

/// Parameter references with their display names.
pub const PARAMETERS: [(ReferenceId, &str); 3] =
    [(WIDTH, "width"), (HEIGHT, "height"), (OFFSET, "offset")];

/// Fixed wall thickness added to the flange.
const THICKNESS: f64 = 1.5;

/// Bindings used when the command line does not override them.
pub fn default_parameters() -> DataSet {
    [
        (WIDTH, Value::Number(4.0)),
        (HEIGHT, Value::Number(3.0)),
        (OFFSET, Value::Number(0.5)),
    ]
    .into_iter()
    .collect()
}

/// Display name of a demo parameter.
pub fn parameter_name(id: ReferenceId) -> Option<&'static str> {
    PARAMETERS
        .iter()
        .find_map(|&(param, name)| (param == id).then_some(name))
}

/// A printer that shows parameters by name.
pub fn printer() -> ExpressionPrinter {
    PARAMETERS
        .iter()
        .fold(ExpressionPrinter::new(), |printer, &(id, name)| {
            printer.with_name(id, name)
        })
}

/// Build the demo tree, with every report writing to `log`.
pub fn program(log: &ActionLog) -> InstructionTree {
    let width = || Expression::reference(WIDTH);
    let height = || Expression::reference(HEIGHT);

    let span = Report::new(
        "span",
        Expression::binary(BinaryOp::Multiply, width(), Expression::number(2.0)),
        log,
    );
    let diagonal = Report::new(
        "diagonal",
        Expression::call(
            FunctionKind::Distance,
            vec![
                Expression::call(
                    FunctionKind::Vector,
                    vec![Expression::number(0.0), Expression::number(0.0)],
                ),
                Expression::call(FunctionKind::Vector, vec![width(), height()]),
            ],
        ),
        log,
    );
    let tall_enough = ConditionalGroup::new(Expression::binary(
        BinaryOp::GreaterOrEqual,
        height(),
        Expression::call(FunctionKind::Min, vec![width(), Expression::number(10.0)]),
    ));
    let has_width = ConditionalGroup::new(Expression::binary(
        BinaryOp::GreaterThan,
        width(),
        Expression::number(0.0),
    ));
    let flange = Report::new(
        "flange",
        Expression::binary(
            BinaryOp::Add,
            Expression::reference(OFFSET),
            Expression::named("thickness", THICKNESS),
        ),
        log,
    );

    let mut tree = InstructionTree::default();
    tree.push(InstructionNode::with_children(
        has_width,
        vec![
            InstructionNode::new(span),
            InstructionNode::with_children(tall_enough, vec![InstructionNode::new(diagonal)]),
        ],
    ));
    tree.push(InstructionNode::new(flange));
    tree
}
