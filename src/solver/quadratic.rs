use crate::answer::{Answer, AnswerKind};
use crate::error::{EngineError, Result};
use crate::format::{fixed4, format_number};
use crate::term::{polynomial_terms, Term, TermShape};

use super::numeric_side;

/// Real roots of `a*x^2 + b*x + c`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Roots {
    None { discriminant: f64 },
    One(f64),
    /// `(-b + sqrt(d)) / 2a` first.
    Two(f64, f64),
}

pub fn roots(a: f64, b: f64, c: f64) -> Roots {
    let discriminant = b * b - 4.0 * a * c;
    if discriminant < 0.0 {
        Roots::None { discriminant }
    } else if discriminant == 0.0 {
        Roots::One(-b / (2.0 * a))
    } else {
        let sqrt = discriminant.sqrt();
        Roots::Two((-b + sqrt) / (2.0 * a), (-b - sqrt) / (2.0 * a))
    }
}

/// `a*x^2 [± b*x] [± c] = d`, terms in that order. `Ok(None)` means the left
/// side has some other shape.
pub fn solve_quadratic(equation: &str, left: &str, right: &str, var: &str) -> Result<Option<Answer>> {
    let Ok(terms) = polynomial_terms(left, var) else {
        return Ok(None);
    };
    let Some(rhs) = numeric_side(right) else {
        return Ok(None);
    };
    let Some((a, b, constant)) = canonical_coefficients(&terms) else {
        return Ok(None);
    };

    if a == 0.0 {
        return Err(EngineError::domain(format!(
            "the {var}^2 coefficient of `{equation}` is zero"
        )));
    }

    let c = constant - rhs;
    let discriminant = b * b - 4.0 * a * c;
    let mut steps = vec![
        format!(
            "Quadratic: {}{var}² + {}{var} + {} = 0",
            format_number(a),
            format_number(b),
            format_number(c)
        ),
        format!("Discriminant: Δ = b² - 4ac = {}", fixed4(discriminant)),
    ];

    let answer = match roots(a, b, c) {
        Roots::None { .. } => {
            steps.push("Δ < 0, so there are no real roots".to_string());
            Answer::new(AnswerKind::NoRealSolution, "No real solution", steps)
        }
        Roots::One(x) => {
            let value = format!("{var} = {}", format_number(x));
            steps.push(format!("{var} = -b / 2a"));
            steps.push(value.clone());
            Answer::exact(value, steps)
        }
        Roots::Two(x1, x2) => {
            let value = format!("{var}1 = {}, {var}2 = {}", fixed4(x1), fixed4(x2));
            steps.push(format!("{var} = (-b ± √Δ) / 2a"));
            steps.push(value.clone());
            Answer::exact(value, steps)
        }
    };
    Ok(Some(answer))
}

/// `(a, b, c)` when the terms read `x^2`, then an optional `x`, then an
/// optional constant.
fn canonical_coefficients(terms: &[Term]) -> Option<(f64, f64, f64)> {
    let mut iter = terms.iter().peekable();
    let a = match iter.next() {
        Some(t) if t.shape == TermShape::Power(2) => t.coefficient,
        _ => return None,
    };
    let b = iter
        .next_if(|t| t.shape == TermShape::Linear)
        .map_or(0.0, |t| t.coefficient);
    let c = match iter.next() {
        Some(t) if t.is_constant() => t.coefficient,
        Some(_) => return None,
        None => 0.0,
    };
    if iter.next().is_some() {
        return None;
    }
    Some((a, b, c))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn discriminant_selects_root_count() {
        assert_eq!(roots(1.0, -5.0, 6.0), Roots::Two(3.0, 2.0));
        assert_eq!(roots(1.0, 2.0, 1.0), Roots::One(-1.0));
        assert!(matches!(roots(1.0, 0.0, 1.0), Roots::None { .. }));
    }

    #[test]
    fn out_of_order_terms_are_not_canonical() {
        let terms = polynomial_terms("5*x+x^2", "x").expect("terms");
        assert_eq!(canonical_coefficients(&terms), None);
    }
}
