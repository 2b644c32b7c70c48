//! Floating-point evaluation of expression trees.
//!
//! Evaluation follows IEEE semantics: `0/0` is `NaN`, `1/0` is infinite, and
//! `log` of a negative number is `NaN`. Callers decide what a non-finite
//! result means.

use std::collections::HashMap;
use std::f64::consts::PI;

use crate::error::CasError;
use crate::expr::{rational_to_f64, Expr};

/// Variable name to value.
pub type Bindings = HashMap<String, f64>;

pub fn evaluate(expr: &Expr, bindings: &Bindings) -> Result<f64, CasError> {
    let value = match expr {
        Expr::Variable(name) => *bindings
            .get(name)
            .ok_or_else(|| CasError::Evaluation(format!("no value bound for `{name}`")))?,
        Expr::Constant(c) => rational_to_f64(c),
        Expr::Pi => PI,

        Expr::Add(a, b) => evaluate(a, bindings)? + evaluate(b, bindings)?,
        Expr::Sub(a, b) => evaluate(a, bindings)? - evaluate(b, bindings)?,
        Expr::Mul(a, b) => evaluate(a, bindings)? * evaluate(b, bindings)?,
        Expr::Div(a, b) => evaluate(a, bindings)? / evaluate(b, bindings)?,
        Expr::Pow(a, b) => evaluate(a, bindings)?.powf(evaluate(b, bindings)?),
        Expr::Neg(a) => -evaluate(a, bindings)?,

        Expr::Sin(a) => evaluate(a, bindings)?.sin(),
        Expr::Cos(a) => evaluate(a, bindings)?.cos(),
        Expr::Tan(a) => evaluate(a, bindings)?.tan(),
        Expr::Sec(a) => 1.0 / evaluate(a, bindings)?.cos(),
        Expr::Csc(a) => 1.0 / evaluate(a, bindings)?.sin(),
        Expr::Cot(a) => {
            let v = evaluate(a, bindings)?;
            v.cos() / v.sin()
        }
        Expr::Asin(a) => evaluate(a, bindings)?.asin(),
        Expr::Acos(a) => evaluate(a, bindings)?.acos(),
        Expr::Atan(a) => evaluate(a, bindings)?.atan(),
        Expr::Exp(a) => evaluate(a, bindings)?.exp(),
        Expr::Log(a) => evaluate(a, bindings)?.ln(),
        Expr::Abs(a) => evaluate(a, bindings)?.abs(),
    };
    Ok(value)
}

/// Evaluate with a single variable bound.
pub fn evaluate_at(expr: &Expr, var: &str, value: f64) -> Result<f64, CasError> {
    let mut bindings = Bindings::new();
    bindings.insert(var.to_string(), value);
    evaluate(expr, &bindings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_expr;

    fn at(input: &str, x: f64) -> f64 {
        evaluate_at(&parse_expr(input).expect("parse"), "x", x).expect("evaluate")
    }

    #[test]
    fn follows_ieee_for_singular_points() {
        assert!(at("sin(x)/x", 0.0).is_nan());
        assert!(at("1/x", 0.0).is_infinite());
        assert!(at("log(x)", -1.0).is_nan());
    }

    #[test]
    fn evaluates_constants_and_functions() {
        assert!((at("e^x", 1.0) - std::f64::consts::E).abs() < 1e-12);
        assert!((at("sec(x)^2 - tan(x)^2", 0.3) - 1.0).abs() < 1e-12);
        assert!((at("2*pi", 0.0) - 2.0 * PI).abs() < 1e-12);
    }

    #[test]
    fn unbound_variable_is_an_error() {
        let expr = parse_expr("x + y").expect("parse");
        let err = evaluate_at(&expr, "x", 1.0).unwrap_err();
        assert!(matches!(err, CasError::Evaluation(_)));
    }
}
