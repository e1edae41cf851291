//! Expression Visitor
//!
//! Read-only traversal of [`Expression`] trees. The visitor may mutate its
//! own state; the tree itself is never modified.
//!
//! Default implementations call [`walk_expr`] to descend into children.
//! Override the `visit_*` methods to act on specific nodes.
//!
//! ```text
//! struct CountCalls(usize);
//!
//! impl<'e> ExprVisitor<'e> for CountCalls {
//!     fn visit_call(&mut self, function: FunctionKind, args: &'e [Expression]) {
//!         self.0 += 1;
//!         walk_args(self, args);
//!     }
//! }
//! ```

use crate::{Expression, FunctionKind, ReferenceId, Value};
use para_stack::ensure_sufficient_stack;

/// Expression visitor trait.
pub trait ExprVisitor<'e> {
    /// Visit any expression node. The default dispatches on the variant.
    fn visit_expr(&mut self, expr: &'e Expression) {
        walk_expr(self, expr);
    }

    /// Visit a literal (named or not).
    fn visit_literal(&mut self, _value: &'e Value) {}

    /// Visit a reference leaf.
    fn visit_reference(&mut self, _id: ReferenceId) {}

    /// Visit a call node. The default walks the arguments in order.
    fn visit_call(&mut self, _function: FunctionKind, args: &'e [Expression]) {
        walk_args(self, args);
    }
}

/// Dispatch `expr` to the matching `visit_*` method, descending into
/// unary and binary operands in left-to-right order.
pub fn walk_expr<'e, V: ExprVisitor<'e> + ?Sized>(visitor: &mut V, expr: &'e Expression) {
    ensure_sufficient_stack(|| match expr {
        Expression::Constant(value) | Expression::NamedConstant { value, .. } => {
            visitor.visit_literal(value);
        }
        Expression::Reference(id) => visitor.visit_reference(*id),
        Expression::Unary { operand, .. } => visitor.visit_expr(operand),
        Expression::Binary { left, right, .. } => {
            visitor.visit_expr(left);
            visitor.visit_expr(right);
        }
        Expression::Call { function, args } => visitor.visit_call(*function, args),
    });
}

/// Visit each argument of a call in order.
pub fn walk_args<'e, V: ExprVisitor<'e> + ?Sized>(visitor: &mut V, args: &'e [Expression]) {
    for arg in args {
        visitor.visit_expr(arg);
    }
}
