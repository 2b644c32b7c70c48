//! Single-variable equation solving.
//!
//! Linear and quadratic equations in polynomial form are solved in closed
//! form. Anything else is moved to one side and simplified, which yields a
//! residual `lhs - rhs = 0` rather than a root.

mod linear;
mod quadratic;

use tracing::debug;

use crate::answer::{Answer, AnswerKind};
use crate::cas::Cas;
use crate::error::{EngineError, Result};
use crate::expr::sub;

pub use linear::solve_linear;
pub use quadratic::{roots, solve_quadratic, Roots};

pub fn solve_equation<C: Cas>(cas: &C, equation: &str, var: &str) -> Result<Answer> {
    let (left, right) = split_equation(equation)?;

    let closed_form = if left.contains('^') {
        solve_quadratic(equation, left, right, var)?
    } else {
        solve_linear(equation, left, right, var)?
    };
    if let Some(answer) = closed_form {
        return Ok(answer);
    }

    debug!(equation, "no closed-form rule, simplifying residual");
    residual(cas, left, right)
}

/// `lhs = rhs` to `(lhs, rhs)`; anything but exactly one `=` is malformed.
fn split_equation(equation: &str) -> Result<(&str, &str)> {
    let mut parts = equation.split('=');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(left), Some(right), None) if !left.is_empty() && !right.is_empty() => Ok((left, right)),
        _ => Err(EngineError::format(format!(
            "a valid equation has exactly one `=`: expression = value, got `{equation}`"
        ))),
    }
}

fn residual<C: Cas>(cas: &C, left: &str, right: &str) -> Result<Answer> {
    let lhs = cas.parse(left)?;
    let rhs = cas.parse(right)?;
    let simplified = cas.render(&cas.simplify(&sub(lhs, rhs))?);
    let value = format!("{simplified} = 0");
    let steps = vec![
        "No linear or quadratic rule matches this equation".to_string(),
        format!("Moved everything to one side: {left} - ({right}) = {simplified}"),
        "The equation was simplified, not solved".to_string(),
    ];
    Ok(Answer::new(AnswerKind::Residual, value, steps))
}

/// Right-hand side as a plain number, if it is one.
fn numeric_side(text: &str) -> Option<f64> {
    text.parse::<f64>().ok().filter(|v| v.is_finite())
}
