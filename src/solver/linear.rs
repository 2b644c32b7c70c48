use crate::answer::Answer;
use crate::error::{EngineError, Result};
use crate::format::format_number;
use crate::term::{polynomial_terms, TermShape};

use super::numeric_side;

/// `a*x + b = c` with one linear term and at most one constant, in either
/// order. `Ok(None)` means the equation has some other shape.
pub fn solve_linear(equation: &str, left: &str, right: &str, var: &str) -> Result<Option<Answer>> {
    let Ok(terms) = polynomial_terms(left, var) else {
        return Ok(None);
    };
    let Some(c) = numeric_side(right) else {
        return Ok(None);
    };

    let mut a = None;
    let mut b = None;
    for term in &terms {
        match term.shape {
            TermShape::Linear if a.is_none() => a = Some(term.coefficient),
            TermShape::Constant if b.is_none() => b = Some(term.coefficient),
            _ => return Ok(None),
        }
    }
    let Some(a) = a else {
        return Ok(None);
    };
    let b = b.unwrap_or(0.0);

    if a == 0.0 {
        return Err(EngineError::domain(format!(
            "the coefficient of {var} is zero, so `{equation}` has no unique solution"
        )));
    }

    let solution = format_number((c - b) / a);
    let sign = if b < 0.0 { "-" } else { "+" };
    let steps = vec![
        format!("Equation: {equation}"),
        format!(
            "{}{var} {sign} {} = {}",
            format_number(a),
            format_number(b.abs()),
            format_number(c)
        ),
        format!("{}{var} = {}", format_number(a), format_number(c - b)),
        format!("{var} = {solution}"),
    ];
    Ok(Some(Answer::exact(format!("{var} = {solution}"), steps)))
}
