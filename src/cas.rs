//! Seam between the rule engine and the general-purpose algebra backend.
//!
//! The engine only ever talks to a [`Cas`]; [`SymbolicCas`] is the backend
//! built from this crate's parser, differentiator and simplifier.

use crate::calculus::differentiate;
use crate::error::CasError;
use crate::eval;
use crate::expr::Expr;
use crate::format::pretty;
use crate::parser::parse_expr;
use crate::simplify::simplify_fully;

pub use crate::eval::Bindings;

pub trait Cas {
    fn parse(&self, text: &str) -> Result<Expr, CasError>;

    fn differentiate(&self, expr: &Expr, var: &str) -> Result<Expr, CasError>;

    fn simplify(&self, expr: &Expr) -> Result<Expr, CasError>;

    /// Scalar value of `expr`. Singular points come back as non-finite values,
    /// not errors.
    fn evaluate(&self, expr: &Expr, bindings: &Bindings) -> Result<f64, CasError>;

    fn render(&self, expr: &Expr) -> String {
        pretty(expr)
    }

    fn evaluate_text(&self, text: &str, bindings: &Bindings) -> Result<f64, CasError> {
        let expr = self.parse(text)?;
        self.evaluate(&expr, bindings)
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SymbolicCas;

impl Cas for SymbolicCas {
    fn parse(&self, text: &str) -> Result<Expr, CasError> {
        parse_expr(text)
    }

    fn differentiate(&self, expr: &Expr, var: &str) -> Result<Expr, CasError> {
        Ok(simplify_fully(differentiate(var, expr)))
    }

    fn simplify(&self, expr: &Expr) -> Result<Expr, CasError> {
        Ok(simplify_fully(expr.clone()))
    }

    fn evaluate(&self, expr: &Expr, bindings: &Bindings) -> Result<f64, CasError> {
        eval::evaluate(expr, bindings)
    }
}

impl<C: Cas + ?Sized> Cas for &C {
    fn parse(&self, text: &str) -> Result<Expr, CasError> {
        (**self).parse(text)
    }

    fn differentiate(&self, expr: &Expr, var: &str) -> Result<Expr, CasError> {
        (**self).differentiate(expr, var)
    }

    fn simplify(&self, expr: &Expr) -> Result<Expr, CasError> {
        (**self).simplify(expr)
    }

    fn evaluate(&self, expr: &Expr, bindings: &Bindings) -> Result<f64, CasError> {
        (**self).evaluate(expr, bindings)
    }

    fn render(&self, expr: &Expr) -> String {
        (**self).render(expr)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slope_at<C: Cas>(cas: C, text: &str, x: f64) -> f64 {
        let expr = cas.parse(text).expect("parse");
        let derivative = cas.differentiate(&expr, "x").expect("differentiate");
        let bindings = Bindings::from([("x".to_string(), x)]);
        cas.evaluate(&derivative, &bindings).expect("evaluate")
    }

    #[test]
    fn evaluate_text_binds_variables() {
        let bindings = Bindings::from([("x".to_string(), 3.0)]);
        let value = SymbolicCas.evaluate_text("x^2 + 1", &bindings).expect("evaluate");
        assert_eq!(value, 10.0);
    }

    #[test]
    fn references_forward_to_the_backend() {
        let cas = SymbolicCas;
        assert_eq!(slope_at(&cas, "x^3", 2.0), 12.0);
        assert_eq!(cas.render(&cas.parse("x*x").expect("parse")), "x*x");
    }

    #[test]
    fn unbound_variable_is_an_evaluation_error() {
        let err = SymbolicCas.evaluate_text("y + 1", &Bindings::new()).unwrap_err();
        assert!(matches!(err, CasError::Evaluation(_)));
    }
}
