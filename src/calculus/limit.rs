//! One-sided-agnostic limits in three stages: a table of classical limits,
//! direct substitution, then a single L'Hôpital rewrite.

use std::fmt;

use tracing::debug;

use crate::answer::{Answer, AnswerKind};
use crate::cas::{Bindings, Cas};
use crate::config::LimitConfig;
use crate::error::{EngineError, Result};
use crate::expr::Expr;
use crate::format::format_number;
use crate::term::normalize;

/// Point a limit is taken at.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Approach {
    PosInfinity,
    NegInfinity,
    Finite(f64),
}

impl Approach {
    pub fn parse(text: &str) -> Result<Self> {
        let text = normalize(text);
        match text.as_str() {
            "inf" | "+inf" | "infinity" | "+infinity" | "∞" | "+∞" => Ok(Approach::PosInfinity),
            "-inf" | "-infinity" | "-∞" => Ok(Approach::NegInfinity),
            other => match other.parse::<f64>() {
                Ok(v) if v.is_finite() => Ok(Approach::Finite(v)),
                _ => Err(EngineError::format(format!(
                    "cannot approach `{other}`; use a number, inf or -inf"
                ))),
            },
        }
    }

    /// Value substituted for the variable during direct evaluation.
    pub fn probe(self, config: &LimitConfig) -> f64 {
        match self {
            Approach::PosInfinity => config.infinity_probe,
            Approach::NegInfinity => -config.infinity_probe,
            Approach::Finite(v) => v,
        }
    }
}

impl fmt::Display for Approach {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Approach::PosInfinity => f.write_str("inf"),
            Approach::NegInfinity => f.write_str("-inf"),
            Approach::Finite(v) => f.write_str(&format_number(*v)),
        }
    }
}

struct SpecialLimit {
    expr: &'static str,
    approach: &'static str,
    value: &'static str,
    note: &'static str,
}

// Written for `x`; keys compare by exact normalized text.
const SPECIAL_LIMITS: [SpecialLimit; 3] = [
    SpecialLimit {
        expr: "sin(x)/x",
        approach: "0",
        value: "1",
        note: "Classical limit: lim(x→0) sin(x)/x = 1",
    },
    SpecialLimit {
        expr: "(1+1/x)^x",
        approach: "inf",
        value: "e",
        note: "Definition of e: lim(x→inf) (1+1/x)^x = e",
    },
    SpecialLimit {
        expr: "(e^x-1)/x",
        approach: "0",
        value: "1",
        note: "Classical limit: lim(x→0) (e^x-1)/x = 1",
    },
];

/// `approach` is matched against the table as normalized text, so `0.0`
/// does not select the entry written for `0`.
pub fn evaluate_limit<C: Cas>(
    cas: &C,
    expr: &str,
    var: &str,
    approach: &str,
    config: &LimitConfig,
) -> Result<Answer> {
    let target = normalize(approach);
    let approach = Approach::parse(&target)?;
    if let Some(answer) = special_limit(expr, var, &target) {
        debug!(expr, %approach, "special limit");
        return Ok(answer);
    }

    let parsed = cas.parse(expr)?;
    let probe = approach.probe(config);
    let mut bindings = Bindings::new();
    bindings.insert(var.to_string(), probe);
    let value = cas.evaluate(&parsed, &bindings)?;

    if value.is_finite() {
        let value = format_number(value);
        let steps = vec![
            format!("Substituted {var} = {}", format_number(probe)),
            format!("lim({var}→{approach}) {expr} = {value}"),
        ];
        return Ok(Answer::new(AnswerKind::Approximation, value.clone(), steps).with_latex(value));
    }

    debug!(expr, %approach, value, "direct substitution is not finite, trying L'Hôpital");
    lhopital_step(cas, expr, &parsed, var, approach)
}

fn special_limit(expr: &str, var: &str, target: &str) -> Option<Answer> {
    SPECIAL_LIMITS
        .iter()
        .find(|entry| entry.approach == target && entry.expr.replace('x', var) == expr)
        .map(|entry| {
            let note = entry.note.replace('x', var);
            Answer::exact(entry.value, vec![note]).with_latex(entry.value)
        })
}

fn lhopital_step<C: Cas>(cas: &C, text: &str, parsed: &Expr, var: &str, approach: Approach) -> Result<Answer> {
    let single_division = top_level_divisions(text) == 1;
    let (numerator, denominator) = match parsed {
        Expr::Div(n, d) if single_division => (n, d),
        _ => {
            return Err(EngineError::unsupported(format!(
                "`{text}` is indeterminate at {var} → {approach} and is not a single quotient, \
                 so L'Hôpital's rule does not apply"
            )))
        }
    };

    let d_num = cas.render(&cas.differentiate(numerator, var)?);
    let d_den = cas.render(&cas.differentiate(denominator, var)?);
    let rewritten = format!("({d_num})/({d_den})");

    let steps = vec![
        format!("Direct substitution at {var} → {approach} is indeterminate"),
        "Applying L'Hôpital's rule".to_string(),
        format!("Numerator derivative: {d_num}"),
        format!("Denominator derivative: {d_den}"),
        format!("New limit: lim({var}→{approach}) {rewritten}"),
    ];
    Ok(Answer::new(AnswerKind::Rewritten, rewritten, steps))
}

fn top_level_divisions(text: &str) -> usize {
    let mut depth = 0i32;
    let mut count = 0;
    for c in text.chars() {
        match c {
            '(' => depth += 1,
            ')' => depth -= 1,
            '/' if depth == 0 => count += 1,
            _ => {}
        }
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn approach_accepts_infinity_spellings() {
        assert_eq!(Approach::parse("inf").ok(), Some(Approach::PosInfinity));
        assert_eq!(Approach::parse(" -Infinity ").ok(), Some(Approach::NegInfinity));
        assert_eq!(Approach::parse("∞").ok(), Some(Approach::PosInfinity));
        assert_eq!(Approach::parse("0.5").ok(), Some(Approach::Finite(0.5)));
        assert!(Approach::parse("soon").is_err());
    }

    #[test]
    fn finite_labels_are_canonical() {
        assert_eq!(Approach::Finite(0.0).to_string(), "0");
        assert_eq!(Approach::Finite(-0.0).to_string(), "0");
    }

    #[test]
    fn table_targets_compare_as_text() {
        assert!(special_limit("sin(x)/x", "x", "0").is_some());
        assert!(special_limit("sin(x)/x", "x", "0.0").is_none());
        assert!(special_limit("sin(x)/x", "x", "-0").is_none());
        assert!(special_limit("(1+1/x)^x", "x", "infinity").is_none());
    }

    #[test]
    fn counts_only_unbracketed_divisions() {
        assert_eq!(top_level_divisions("(1/x)/x"), 1);
        assert_eq!(top_level_divisions("1/x/x"), 2);
        assert_eq!(top_level_divisions("(1+1/x)^x"), 0);
    }
}
