//! The formula tree.

use crate::visitor::{walk_expr, ExprVisitor};
use crate::{BinaryOp, FunctionKind, ReferenceId, UnaryOp, Value};
use para_stack::ensure_sufficient_stack;
use std::{fmt, mem};

/// An immutable formula.
///
/// Composite nodes exclusively own their children. Operators and functions
/// are identified by kind tag, so two trees are equal iff they have the same
/// shape, the same kinds at every node and equal literals.
///
/// Trees may be arbitrarily deep. Equality and drop use a heap worklist,
/// while clone and debug formatting grow the stack as they recurse.
pub enum Expression {
    /// Literal value.
    Constant(Value),
    /// Literal with a label used only when describing the formula.
    NamedConstant { name: String, value: Value },
    /// Indirection into the parameter store.
    Reference(ReferenceId),
    Unary {
        op: UnaryOp,
        operand: Box<Expression>,
    },
    Binary {
        op: BinaryOp,
        left: Box<Expression>,
        right: Box<Expression>,
    },
    Call {
        function: FunctionKind,
        args: Vec<Expression>,
    },
}

impl Expression {
    #[inline]
    pub fn constant(value: impl Into<Value>) -> Self {
        Expression::Constant(value.into())
    }

    #[inline]
    pub fn number(n: f64) -> Self {
        Expression::Constant(Value::Number(n))
    }

    #[inline]
    pub fn boolean(b: bool) -> Self {
        Expression::Constant(Value::Bool(b))
    }

    pub fn named(name: impl Into<String>, value: impl Into<Value>) -> Self {
        Expression::NamedConstant {
            name: name.into(),
            value: value.into(),
        }
    }

    #[inline]
    pub fn reference(id: impl Into<ReferenceId>) -> Self {
        Expression::Reference(id.into())
    }

    pub fn unary(op: UnaryOp, operand: Expression) -> Self {
        Expression::Unary {
            op,
            operand: Box::new(operand),
        }
    }

    pub fn binary(op: BinaryOp, left: Expression, right: Expression) -> Self {
        Expression::Binary {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn call(function: FunctionKind, args: Vec<Expression>) -> Self {
        Expression::Call { function, args }
    }

    /// Whether this node has no children.
    pub fn is_leaf(&self) -> bool {
        matches!(
            self,
            Expression::Constant(_) | Expression::NamedConstant { .. } | Expression::Reference(_)
        )
    }

    /// Every reference in the tree, in left-to-right order, duplicates kept.
    pub fn references(&self) -> Vec<ReferenceId> {
        struct Collect(Vec<ReferenceId>);

        impl ExprVisitor<'_> for Collect {
            fn visit_reference(&mut self, id: ReferenceId) {
                self.0.push(id);
            }
        }

        let mut collect = Collect(Vec::new());
        walk_expr(&mut collect, self);
        collect.0
    }
}

/// Placeholder swapped in for a child taken out during drop.
const HOLE: Expression = Expression::Constant(Value::Bool(false));

/// Move `expr`'s direct children onto `pending`, leaving leaves behind.
fn detach_children(expr: &mut Expression, pending: &mut Vec<Expression>) {
    match expr {
        Expression::Constant(_) | Expression::NamedConstant { .. } | Expression::Reference(_) => {}
        Expression::Unary { operand, .. } => pending.push(mem::replace(&mut **operand, HOLE)),
        Expression::Binary { left, right, .. } => {
            pending.push(mem::replace(&mut **left, HOLE));
            pending.push(mem::replace(&mut **right, HOLE));
        }
        Expression::Call { args, .. } => pending.append(args),
    }
}

impl Drop for Expression {
    fn drop(&mut self) {
        if self.is_leaf() {
            return;
        }
        let mut pending = Vec::new();
        detach_children(self, &mut pending);
        while let Some(mut expr) = pending.pop() {
            detach_children(&mut expr, &mut pending);
        }
    }
}

impl PartialEq for Expression {
    fn eq(&self, other: &Self) -> bool {
        let mut pending = vec![(self, other)];
        while let Some(pair) = pending.pop() {
            match pair {
                (Expression::Constant(a), Expression::Constant(b)) => {
                    if a != b {
                        return false;
                    }
                }
                (
                    Expression::NamedConstant { name, value },
                    Expression::NamedConstant {
                        name: other_name,
                        value: other_value,
                    },
                ) => {
                    if name != other_name || value != other_value {
                        return false;
                    }
                }
                (Expression::Reference(a), Expression::Reference(b)) => {
                    if a != b {
                        return false;
                    }
                }
                (
                    Expression::Unary { op, operand },
                    Expression::Unary {
                        op: other_op,
                        operand: other_operand,
                    },
                ) => {
                    if op != other_op {
                        return false;
                    }
                    pending.push((&**operand, &**other_operand));
                }
                (
                    Expression::Binary { op, left, right },
                    Expression::Binary {
                        op: other_op,
                        left: other_left,
                        right: other_right,
                    },
                ) => {
                    if op != other_op {
                        return false;
                    }
                    pending.push((&**right, &**other_right));
                    pending.push((&**left, &**other_left));
                }
                (
                    Expression::Call { function, args },
                    Expression::Call {
                        function: other_function,
                        args: other_args,
                    },
                ) => {
                    if function != other_function || args.len() != other_args.len() {
                        return false;
                    }
                    pending.extend(args.iter().zip(other_args).rev());
                }
                _ => return false,
            }
        }
        true
    }
}

impl Clone for Expression {
    fn clone(&self) -> Self {
        ensure_sufficient_stack(|| match self {
            Expression::Constant(value) => Expression::Constant(*value),
            Expression::NamedConstant { name, value } => Expression::NamedConstant {
                name: name.clone(),
                value: *value,
            },
            Expression::Reference(id) => Expression::Reference(*id),
            Expression::Unary { op, operand } => Expression::Unary {
                op: *op,
                operand: operand.clone(),
            },
            Expression::Binary { op, left, right } => Expression::Binary {
                op: *op,
                left: left.clone(),
                right: right.clone(),
            },
            Expression::Call { function, args } => Expression::Call {
                function: *function,
                args: args.clone(),
            },
        })
    }
}

impl fmt::Debug for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ensure_sufficient_stack(|| match self {
            Expression::Constant(value) => f.debug_tuple("Constant").field(value).finish(),
            Expression::NamedConstant { name, value } => f
                .debug_struct("NamedConstant")
                .field("name", name)
                .field("value", value)
                .finish(),
            Expression::Reference(id) => f.debug_tuple("Reference").field(id).finish(),
            Expression::Unary { op, operand } => f
                .debug_struct("Unary")
                .field("op", op)
                .field("operand", operand)
                .finish(),
            Expression::Binary { op, left, right } => f
                .debug_struct("Binary")
                .field("op", op)
                .field("left", left)
                .field("right", right)
                .finish(),
            Expression::Call { function, args } => f
                .debug_struct("Call")
                .field("function", function)
                .field("args", args)
                .finish(),
        })
    }
}

impl From<Value> for Expression {
    fn from(value: Value) -> Self {
        Expression::Constant(value)
    }
}

impl From<ReferenceId> for Expression {
    fn from(id: ReferenceId) -> Self {
        Expression::Reference(id)
    }
}

#[cfg(test)]
mod tests;
