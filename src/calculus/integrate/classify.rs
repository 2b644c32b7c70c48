/// Which integration rule an expression is routed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleFamily {
    Polynomial,
    Exponential,
    Trigonometric,
    Numeric,
}

const TRIG_NAMES: [&str; 6] = ["sin", "cos", "tan", "sec", "csc", "cot"];

/// Pick a rule family for a normalized expression. Families are tried in
/// declaration order and the first match wins.
pub fn classify(expr: &str, var: &str) -> RuleFamily {
    if is_polynomial_text(expr, var) {
        RuleFamily::Polynomial
    } else if expr.contains("e^") {
        RuleFamily::Exponential
    } else if TRIG_NAMES.iter().any(|name| expr.contains(name)) {
        RuleFamily::Trigonometric
    } else {
        RuleFamily::Numeric
    }
}

/// Only digits, whitespace, `+ - * ^` and characters of the variable name.
fn is_polynomial_text(expr: &str, var: &str) -> bool {
    !expr.is_empty()
        && expr.chars().all(|c| {
            c.is_ascii_digit() || c.is_whitespace() || "+-*^".contains(c) || var.contains(c)
        })
}
