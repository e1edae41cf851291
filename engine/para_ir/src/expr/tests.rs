use super::*;
use pretty_assertions::assert_eq;

fn r(raw: u32) -> Expression {
    Expression::reference(ReferenceId::new(raw))
}

/// `(R1 + 2) * max(R2, 3)`
fn sample() -> Expression {
    Expression::binary(
        BinaryOp::Multiply,
        Expression::binary(BinaryOp::Add, r(1), Expression::number(2.0)),
        Expression::call(FunctionKind::Max, vec![r(2), Expression::number(3.0)]),
    )
}

#[test]
fn identically_built_trees_are_equal() {
    assert_eq!(sample(), sample());
    assert_eq!(sample().clone(), sample());
}

#[test]
fn different_operator_kind_at_root_is_unequal() {
    let a = Expression::binary(BinaryOp::Add, r(1), r(2));
    let b = Expression::binary(BinaryOp::Subtract, r(1), r(2));
    assert_ne!(a, b);
}

#[test]
fn different_operator_kind_deep_in_tree_is_unequal() {
    let altered = Expression::binary(
        BinaryOp::Multiply,
        Expression::binary(BinaryOp::Add, r(1), Expression::number(2.0)),
        Expression::call(FunctionKind::Min, vec![r(2), Expression::number(3.0)]),
    );
    assert_ne!(sample(), altered);

    let negated = Expression::unary(UnaryOp::Negate, r(1));
    let inverted = Expression::unary(UnaryOp::Not, r(1));
    assert_ne!(negated, inverted);
}

#[test]
fn different_literals_are_unequal() {
    assert_ne!(Expression::number(1.0), Expression::number(2.0));
    assert_ne!(Expression::number(1.0), Expression::boolean(true));
    assert_ne!(r(1), r(2));
}

#[test]
fn named_constant_differs_from_plain_constant() {
    // Same value, different variant.
    assert_ne!(Expression::named("width", 1.0), Expression::number(1.0));
    assert_ne!(Expression::named("width", 1.0), Expression::named("height", 1.0));
    assert_eq!(Expression::named("width", 1.0), Expression::named("width", 1.0));
}

#[test]
fn argument_order_matters() {
    let a = Expression::call(FunctionKind::Distance, vec![r(1), r(2)]);
    let b = Expression::call(FunctionKind::Distance, vec![r(2), r(1)]);
    assert_ne!(a, b);
}

#[test]
fn references_in_left_to_right_order() {
    let expr = Expression::binary(
        BinaryOp::And,
        Expression::binary(BinaryOp::GreaterThan, r(3), r(1)),
        Expression::call(
            FunctionKind::Sum,
            vec![r(2), Expression::unary(UnaryOp::Negate, r(3))],
        ),
    );
    assert_eq!(
        expr.references(),
        vec![
            ReferenceId::new(3),
            ReferenceId::new(1),
            ReferenceId::new(2),
            ReferenceId::new(3)
        ]
    );
    assert!(Expression::number(1.0).references().is_empty());
}

#[test]
fn leaves() {
    assert!(r(1).is_leaf());
    assert!(Expression::named("pi", std::f64::consts::PI).is_leaf());
    assert!(!sample().is_leaf());
    assert!(!Expression::call(FunctionKind::Sum, vec![]).is_leaf());
}

#[test]
fn argument_count_matters() {
    let a = Expression::call(FunctionKind::Sum, vec![r(1), r(2)]);
    let b = Expression::call(FunctionKind::Sum, vec![r(1)]);
    assert_ne!(a, b);
}

const DEPTH: usize = 100_000;

/// `-(-(...-(leaf)))`, `DEPTH` levels.
fn negation_chain(leaf: Expression) -> Expression {
    let mut expr = leaf;
    for _ in 0..DEPTH {
        expr = Expression::unary(UnaryOp::Negate, expr);
    }
    expr
}

/// `((leaf + R1) + R1) ...` mixed with nested calls, `DEPTH` levels.
fn left_spine(leaf: Expression) -> Expression {
    let mut expr = leaf;
    for i in 0..DEPTH {
        expr = if i % 2 == 0 {
            Expression::binary(BinaryOp::Add, expr, r(1))
        } else {
            Expression::call(FunctionKind::Max, vec![r(2), expr])
        };
    }
    expr
}

#[test]
fn deep_trees_drop() {
    drop(negation_chain(Expression::number(1.0)));
    drop(left_spine(Expression::number(1.0)));
}

#[test]
fn deep_trees_compare() {
    let a = negation_chain(Expression::number(1.0));
    let b = negation_chain(Expression::number(1.0));
    let c = negation_chain(Expression::number(2.0));
    assert!(a == b);
    assert!(a != c);

    let a = left_spine(r(3));
    let b = left_spine(r(3));
    let c = left_spine(r(4));
    assert!(a == b);
    assert!(a != c);
}

#[test]
fn deep_trees_clone_and_format() {
    let chain = left_spine(Expression::number(1.0));
    let copy = chain.clone();
    assert!(copy == chain);

    let text = format!("{:?}", negation_chain(r(9)));
    assert!(text.starts_with("Unary { op: Negate, operand: Unary {"));
    assert!(text.contains("Reference(ReferenceId(9))"));
}
