use crate::answer::Answer;
use crate::error::{EngineError, Result};
use crate::format::format_number;
use crate::term::{classify_term, TermShape};

/// Closed forms for `e^x` and `e^(a*x)` only.
pub fn integrate_exponential(expr: &str, var: &str) -> Result<Answer> {
    let unsupported = || {
        EngineError::unsupported(format!(
            "only e^{var} and e^(a*{var}) have a closed form here, got `{expr}`"
        ))
    };

    let exponent = expr
        .strip_prefix("e^")
        .map(strip_group)
        .ok_or_else(unsupported)?;
    let term = classify_term(exponent, var).map_err(|_| unsupported())?;
    if term.shape != TermShape::Linear || term.coefficient == 0.0 {
        return Err(unsupported());
    }

    let a = term.coefficient;
    if a == 1.0 {
        let value = format!("e^{var} + C");
        let steps = vec![format!("∫ e^{var} d{var} = {value}")];
        return Ok(Answer::exact(value, steps).with_latex(format!("e^{{{var}}} + C")));
    }

    let a = format_number(a);
    let value = format!("(1/{a})*e^({a}*{var}) + C");
    let steps = vec![format!("∫ e^({a}{var}) d{var} = (1/{a})e^({a}{var}) + C")];
    Ok(Answer::exact(value, steps).with_latex(format!("\\frac{{1}}{{{a}}}e^{{{a}{var}}} + C")))
}

/// `(body)` to `body` when the brackets enclose the whole text.
fn strip_group(text: &str) -> &str {
    let Some(inner) = text.strip_prefix('(').and_then(|t| t.strip_suffix(')')) else {
        return text;
    };
    let mut depth = 0i32;
    for c in inner.chars() {
        match c {
            '(' => depth += 1,
            ')' => {
                depth -= 1;
                if depth < 0 {
                    return text;
                }
            }
            _ => {}
        }
    }
    inner
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_only_enclosing_brackets() {
        assert_eq!(strip_group("(2*x)"), "2*x");
        assert_eq!(strip_group("(x)+(1)"), "(x)+(1)");
        assert_eq!(strip_group("x"), "x");
    }
}
