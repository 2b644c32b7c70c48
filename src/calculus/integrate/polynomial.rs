use crate::answer::Answer;
use crate::error::{EngineError, Result};
use crate::format::{format_number, latex_hint};
use crate::term::{polynomial_terms, Term, TermShape};

/// Term-by-term power rule.
pub fn integrate_polynomial(expr: &str, var: &str) -> Result<Answer> {
    let terms = polynomial_terms(expr, var)?;
    let pieces = terms
        .iter()
        .map(|term| antiderivative(term, var))
        .collect::<Result<Vec<_>>>()?;

    let joined = pieces.join(" + ");
    let value = format!("{} + C", joined.replace("+ -", "- "));
    let steps = vec![
        format!("Start: ∫ {expr} d{var}"),
        format!("Power rule: ∫ {var}^n d{var} = {var}^(n+1)/(n+1) + C"),
        format!("Result: {value}"),
    ];

    Ok(Answer::exact(value.clone(), steps).with_latex(latex_hint(&value)))
}

fn antiderivative(term: &Term, var: &str) -> Result<String> {
    let piece = match term.shape {
        TermShape::Power(n) => {
            let raised = n.checked_add(1).ok_or_else(|| {
                EngineError::unsupported(format!(
                    "exponent {n} is too large for the power rule"
                ))
            })?;
            let coef = term.coefficient / f64::from(raised);
            format!("{}*{var}^{raised}", format_number(coef))
        }
        TermShape::Linear => format!("{}*{var}^2", format_number(term.coefficient / 2.0)),
        TermShape::Constant => format!("{}*{var}", format_number(term.coefficient)),
    };
    Ok(piece)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sign_is_folded_into_the_join() {
        let answer = integrate_polynomial("3*x^2-4", "x").expect("integrate");
        assert_eq!(answer.value, "1*x^3 - 4*x + C");
    }
}
