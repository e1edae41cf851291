//! Rendering expressions as text for instruction descriptions.

use para_ir::{BinaryOp, Expression, ReferenceId, Value};
use para_stack::ensure_sufficient_stack;
use rustc_hash::FxHashMap;

/// Placeholder used when an expression cannot be rendered.
pub const UNRENDERABLE: &str = "???";

/// Renders expressions for descriptions.
pub trait Stringifier {
    /// Text for `expression`, or `None` if it cannot be rendered.
    fn render(&self, expression: &Expression) -> Option<String>;
}

/// Infix printer with minimal parentheses.
///
/// References print as their registered parameter name, falling back to
/// `R<n>`. Named constants print as their name.
#[derive(Clone, Debug, Default)]
pub struct ExpressionPrinter {
    names: FxHashMap<ReferenceId, String>,
    max_width: Option<usize>,
}

impl ExpressionPrinter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Print `id` as `name`.
    #[must_use]
    pub fn with_name(mut self, id: ReferenceId, name: impl Into<String>) -> Self {
        self.names.insert(id, name.into());
        self
    }

    /// Decline renderings longer than `width` characters.
    #[must_use]
    pub fn with_max_width(mut self, width: usize) -> Self {
        self.max_width = Some(width);
        self
    }

    fn write_expr(&self, expr: &Expression, out: &mut String) {
        ensure_sufficient_stack(|| match expr {
            Expression::Constant(value) => out.push_str(&value.to_string()),
            Expression::NamedConstant { name, .. } => out.push_str(name),
            Expression::Reference(id) => match self.names.get(id) {
                Some(name) => out.push_str(name),
                None => out.push_str(&id.to_string()),
            },
            Expression::Unary { op, operand } => {
                out.push_str(op.as_symbol());
                let wrap = matches!(**operand, Expression::Binary { .. });
                self.write_operand(operand, wrap, out);
            }
            Expression::Binary { op, left, right } => {
                self.write_operand(left, needs_parens(*op, left, Side::Left), out);
                out.push(' ');
                out.push_str(op.as_symbol());
                out.push(' ');
                self.write_operand(right, needs_parens(*op, right, Side::Right), out);
            }
            Expression::Call { function, args } => {
                out.push_str(function.name());
                out.push('(');
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        out.push_str(", ");
                    }
                    self.write_expr(arg, out);
                }
                out.push(')');
            }
        });
    }

    fn write_operand(&self, expr: &Expression, wrap: bool, out: &mut String) {
        if wrap {
            out.push('(');
            self.write_expr(expr, out);
            out.push(')');
        } else {
            self.write_expr(expr, out);
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq)]
enum Side {
    Left,
    Right,
}

/// Whether `child` needs parentheses as the `side` operand of `parent`.
fn needs_parens(parent: BinaryOp, child: &Expression, side: Side) -> bool {
    if parent == BinaryOp::Power && side == Side::Left && starts_with_prefix(child) {
        // `-R1 ^ 2` reads as `-(R1 ^ 2)`.
        return true;
    }
    let Expression::Binary { op: child_op, .. } = child else {
        return false;
    };
    let (parent_prec, child_prec) = (parent.precedence(), child_op.precedence());
    if child_prec != parent_prec {
        // Higher number binds less tightly.
        return child_prec > parent_prec;
    }
    // Same level: only the side the operator groups towards is implicit.
    match side {
        Side::Left => parent.is_right_associative(),
        Side::Right => !parent.is_right_associative(),
    }
}

/// Whether `expr` renders with a leading prefix operator or sign.
fn starts_with_prefix(expr: &Expression) -> bool {
    match expr {
        Expression::Unary { .. } => true,
        Expression::Constant(Value::Number(n)) => n.is_sign_negative(),
        _ => false,
    }
}

impl Stringifier for ExpressionPrinter {
    fn render(&self, expression: &Expression) -> Option<String> {
        let mut out = String::new();
        self.write_expr(expression, &mut out);
        match self.max_width {
            Some(width) if out.chars().count() > width => None,
            _ => Some(out),
        }
    }
}

#[cfg(test)]
mod tests;
