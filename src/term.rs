//! Additive terms of a single-variable polynomial written as text.
//!
//! Input is first normalized (whitespace removed, lowercased), then cut into
//! signed term slices, and each slice is read by a small nom grammar:
//!
//! ```text
//! term  := sign? coef? ( '*'? var ( '^' digits )? )?
//! ```
//!
//! An absent coefficient means `1` and a lone `-` means `-1`. Anything the
//! grammar does not accept is reported, never dropped.

use std::fmt;
use std::ops::Deref;

use nom::branch::alt;
use nom::bytes::complete::tag;
use nom::character::complete::{char, digit0, digit1, one_of};
use nom::combinator::{all_consuming, map_res, opt, recognize};
use nom::error::VerboseError;
use nom::sequence::{pair, preceded, tuple};
use nom::IResult;
use thiserror::Error;

use crate::error::EngineError;

type PResult<'a, O> = IResult<&'a str, O, VerboseError<&'a str>>;

/// Expression text with whitespace stripped and case folded.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NormalizedExpression(String);

impl NormalizedExpression {
    pub fn new(raw: &str) -> Self {
        NormalizedExpression(
            raw.chars()
                .filter(|c| !c.is_whitespace())
                .flat_map(char::to_lowercase)
                .collect(),
        )
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl Deref for NormalizedExpression {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for NormalizedExpression {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NormalizedExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

pub fn normalize(raw: &str) -> NormalizedExpression {
    NormalizedExpression::new(raw)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TermShape {
    /// `coef*x^n` with an explicit exponent.
    Power(u32),
    /// `coef*x`.
    Linear,
    /// A bare number.
    Constant,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Term {
    pub coefficient: f64,
    pub variable: String,
    pub shape: TermShape,
}

impl Term {
    pub fn exponent(&self) -> u32 {
        match self.shape {
            TermShape::Power(n) => n,
            TermShape::Linear => 1,
            TermShape::Constant => 0,
        }
    }

    pub fn is_constant(&self) -> bool {
        self.shape == TermShape::Constant
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("`{term}` is not a polynomial term in `{variable}`")]
pub struct NotAPolynomialTerm {
    pub term: String,
    pub variable: String,
}

impl From<NotAPolynomialTerm> for EngineError {
    fn from(err: NotAPolynomialTerm) -> Self {
        EngineError::UnsupportedPattern(err.to_string())
    }
}

/// Cut `expr` before every `+`/`-` that starts a new term.
///
/// A sign only starts a term at bracket depth zero and when it does not
/// directly follow `^`, `*`, `/` or `(`. Concatenating the slices gives back
/// `expr` exactly.
pub fn decompose(expr: &str) -> Vec<&str> {
    let mut pieces = Vec::new();
    let mut start = 0;
    let mut depth = 0usize;
    let mut prev: Option<char> = None;

    for (i, c) in expr.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            '+' | '-' if i > 0 && depth == 0 && !matches!(prev, Some('^' | '*' | '/' | '(')) => {
                pieces.push(&expr[start..i]);
                start = i;
            }
            _ => {}
        }
        if !c.is_whitespace() {
            prev = Some(c);
        }
    }
    if start < expr.len() {
        pieces.push(&expr[start..]);
    }
    pieces
}

pub fn classify_term(term: &str, var: &str) -> Result<Term, NotAPolynomialTerm> {
    let reject = || NotAPolynomialTerm {
        term: term.to_string(),
        variable: var.to_string(),
    };

    let grammar = tuple((
        opt(one_of("+-")),
        opt(number),
        opt(tuple((opt(char('*')), tag(var), opt(preceded(char('^'), exponent))))),
    ));
    let parsed: PResult<'_, _> = all_consuming(grammar)(term);
    let (_, (sign, coef, body)) = parsed.map_err(|_| reject())?;

    let magnitude = match (coef, &body) {
        (None, None) => return Err(reject()),
        (None, Some((Some(_), _, _))) => return Err(reject()),
        (Some(value), _) => value,
        (None, Some(_)) => 1.0,
    };
    let coefficient = if sign == Some('-') { -magnitude } else { magnitude };

    let shape = match body {
        None => TermShape::Constant,
        Some((_, _, None)) => TermShape::Linear,
        Some((_, _, Some(n))) => TermShape::Power(n),
    };

    Ok(Term {
        coefficient,
        variable: var.to_string(),
        shape,
    })
}

/// Normalize, decompose and classify every term of `expr`.
pub fn polynomial_terms(expr: &str, var: &str) -> Result<Vec<Term>, NotAPolynomialTerm> {
    let normalized = normalize(expr);
    decompose(&normalized)
        .into_iter()
        .map(|term| classify_term(term, var))
        .collect()
}

fn number(input: &str) -> PResult<'_, f64> {
    map_res(
        recognize(alt((
            recognize(pair(digit1, opt(pair(char('.'), digit0)))),
            recognize(pair(char('.'), digit1)),
        ))),
        str::parse::<f64>,
    )(input)
}

fn exponent(input: &str) -> PResult<'_, u32> {
    map_res(digit1, str::parse::<u32>)(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shape(term: &str) -> (f64, TermShape) {
        let t = classify_term(term, "x").expect("classify");
        (t.coefficient, t.shape)
    }

    #[test]
    fn normalization_strips_and_folds() {
        assert_eq!(normalize(" 2 * X ^ 2 ").as_str(), "2*x^2");
    }

    #[test]
    fn decompose_keeps_signs_with_terms() {
        assert_eq!(decompose("2*x^3-x+4"), vec!["2*x^3", "-x", "+4"]);
        assert_eq!(decompose("-x^2+1"), vec!["-x^2", "+1"]);
        assert_eq!(decompose("x^-2+e^(-x)"), vec!["x^-2", "+e^(-x)"]);
    }

    #[test]
    fn classifies_the_three_shapes() {
        assert_eq!(shape("2*x^3"), (2.0, TermShape::Power(3)));
        assert_eq!(shape("-x"), (-1.0, TermShape::Linear));
        assert_eq!(shape("+4"), (4.0, TermShape::Constant));
        assert_eq!(shape("x^2"), (1.0, TermShape::Power(2)));
        assert_eq!(shape("1.5x"), (1.5, TermShape::Linear));
    }

    #[test]
    fn rejects_non_polynomial_terms() {
        for bad in ["", "-", "*x", "sin(x)", "x*y", "2*x^y", "x^2.5"] {
            assert!(classify_term(bad, "x").is_err(), "{bad:?}");
        }
    }
}
