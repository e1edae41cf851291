use super::*;
use para_ir::{FunctionKind, UnaryOp, Value};
use pretty_assertions::assert_eq;

fn r(raw: u32) -> Expression {
    Expression::reference(ReferenceId::new(raw))
}

fn n(v: f64) -> Expression {
    Expression::number(v)
}

fn render(expr: &Expression) -> String {
    ExpressionPrinter::new().render(expr).unwrap_or_default()
}

#[test]
fn leaves() {
    assert_eq!(render(&n(5.0)), "5");
    assert_eq!(render(&n(-0.5)), "-0.5");
    assert_eq!(render(&Expression::boolean(true)), "true");
    assert_eq!(render(&Expression::constant(Value::vector(1.0, 2.0))), "(1, 2)");
    assert_eq!(render(&Expression::named("thickness", 1.5)), "thickness");
    assert_eq!(render(&r(1)), "R1");
}

#[test]
fn registered_reference_names() {
    let printer = ExpressionPrinter::new().with_name(ReferenceId::new(1), "width");
    let expr = Expression::binary(BinaryOp::GreaterThan, r(1), r(2));
    assert_eq!(printer.render(&expr).as_deref(), Some("width > R2"));
}

#[test]
fn comparison_of_reference_and_zero() {
    let expr = Expression::binary(BinaryOp::GreaterThan, r(1), n(0.0));
    assert_eq!(render(&expr), "R1 > 0");
}

#[test]
fn parentheses_only_where_precedence_requires() {
    let sum = Expression::binary(BinaryOp::Add, r(1), r(2));
    let product = Expression::binary(BinaryOp::Multiply, sum.clone(), r(3));
    assert_eq!(render(&product), "(R1 + R2) * R3");

    let flat = Expression::binary(
        BinaryOp::Add,
        r(1),
        Expression::binary(BinaryOp::Multiply, r(2), r(3)),
    );
    assert_eq!(render(&flat), "R1 + R2 * R3");

    let chained = Expression::binary(BinaryOp::Add, sum, r(3));
    assert_eq!(render(&chained), "R1 + R2 + R3");
}

#[test]
fn left_associative_right_operand_is_wrapped() {
    let expr = Expression::binary(
        BinaryOp::Subtract,
        r(1),
        Expression::binary(BinaryOp::Subtract, r(2), r(3)),
    );
    assert_eq!(render(&expr), "R1 - (R2 - R3)");
}

#[test]
fn power_groups_to_the_right() {
    let right = Expression::binary(
        BinaryOp::Power,
        r(1),
        Expression::binary(BinaryOp::Power, r(2), r(3)),
    );
    assert_eq!(render(&right), "R1 ^ R2 ^ R3");

    let left = Expression::binary(
        BinaryOp::Power,
        Expression::binary(BinaryOp::Power, r(1), r(2)),
        r(3),
    );
    assert_eq!(render(&left), "(R1 ^ R2) ^ R3");
}

#[test]
fn unary_wraps_binary_operand() {
    let expr = Expression::unary(
        UnaryOp::Not,
        Expression::binary(BinaryOp::LessThan, r(1), n(2.0)),
    );
    assert_eq!(render(&expr), "!(R1 < 2)");
    assert_eq!(render(&Expression::unary(UnaryOp::Negate, r(1))), "-R1");
}

#[test]
fn calls() {
    let expr = Expression::call(
        FunctionKind::Distance,
        vec![
            Expression::call(FunctionKind::Vector, vec![n(0.0), n(0.0)]),
            r(4),
        ],
    );
    assert_eq!(render(&expr), "distance(vec(0, 0), R4)");
    assert_eq!(render(&Expression::call(FunctionKind::Sum, vec![])), "sum()");
}

#[test]
fn width_limit_declines_long_renderings() {
    let printer = ExpressionPrinter::new().with_max_width(6);
    assert_eq!(printer.render(&r(1)).as_deref(), Some("R1"));
    let long = Expression::binary(BinaryOp::GreaterOrEqual, r(1), n(1000.0));
    assert_eq!(printer.render(&long), None);
}

#[test]
fn prefixed_base_of_power_is_wrapped() {
    let negated = Expression::binary(
        BinaryOp::Power,
        Expression::unary(UnaryOp::Negate, r(1)),
        n(2.0),
    );
    assert_eq!(render(&negated), "(-R1) ^ 2");

    let literal = Expression::binary(BinaryOp::Power, n(-3.0), n(2.0));
    assert_eq!(render(&literal), "(-3) ^ 2");

    // Exponents and other operators keep their prefix bare.
    let exponent = Expression::binary(BinaryOp::Power, n(2.0), n(-1.0));
    assert_eq!(render(&exponent), "2 ^ -1");
    let sum = Expression::binary(BinaryOp::Add, Expression::unary(UnaryOp::Negate, r(1)), r(2));
    assert_eq!(render(&sum), "-R1 + R2");
}
