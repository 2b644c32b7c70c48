//! Factoring of monic quadratics over the integers, and the matching
//! expansion of a product of two monic binomials.

use nom::bytes::complete::tag;
use nom::character::complete::{char, digit1, one_of};
use nom::combinator::{all_consuming, map_res, opt, recognize};
use nom::error::VerboseError;
use nom::sequence::{delimited, pair, preceded, tuple};
use nom::IResult;
use num_integer::Roots;
use tracing::debug;

use crate::answer::{Answer, AnswerKind};
use crate::error::{EngineError, Result};
use crate::format::latex_hint;
use crate::term::{normalize, polynomial_terms, Term, TermShape};

type PResult<'a, O> = IResult<&'a str, O, VerboseError<&'a str>>;

/// Both members of a factor pair are searched in `-SEARCH_BOUND..=SEARCH_BOUND`.
pub const SEARCH_BOUND: i64 = 100;

pub fn factor(expr: &str, var: &str) -> Result<Answer> {
    let normalized = normalize(expr);
    let Ok(terms) = polynomial_terms(&normalized, var) else {
        return Ok(irreducible(expr));
    };

    if let Some(root) = difference_of_squares(&terms) {
        debug!(expr, root, "difference of squares");
        let value = format!("({var} - {root})({var} + {root})");
        let step = format!("Difference of squares: {var}² - {root}² = {value}");
        return Ok(Answer::exact(value, vec![step]));
    }

    if let Some((b, c)) = monic_quadratic(&terms) {
        if let Some((i, j)) = find_factor_pair(b, c) {
            debug!(expr, i, j, "factor pair found");
            let value = format!("{}{}", binomial(var, i), binomial(var, j));
            let steps = vec![
                format!("{i} + {j} = {b}"),
                format!("{i} × {j} = {c}"),
                format!("Factors: {value}"),
            ];
            return Ok(Answer::exact(value, steps));
        }
    }

    Ok(irreducible(expr))
}

/// First `(i, j)` in row-major order with `i + j = sum` and `i * j = product`.
pub fn find_factor_pair(sum: i64, product: i64) -> Option<(i64, i64)> {
    (-SEARCH_BOUND..=SEARCH_BOUND)
        .flat_map(|i| (-SEARCH_BOUND..=SEARCH_BOUND).map(move |j| (i, j)))
        .find(|&(i, j)| i + j == sum && i * j == product)
}

pub fn expand(expr: &str, var: &str) -> Result<Answer> {
    let normalized = normalize(expr);
    let Some((a, b)) = parse_binomial_product(&normalized, var) else {
        return Ok(Answer::new(
            AnswerKind::Unchanged,
            expr.trim(),
            vec!["No expansion rule matches; expression returned unchanged".to_string()],
        ));
    };

    let (Some(sum), Some(product)) = (a.checked_add(b), a.checked_mul(b)) else {
        return Err(EngineError::numeric(format!(
            "the coefficients of `{}` are too large to expand exactly",
            expr.trim()
        )));
    };

    let value = render_quadratic(var, sum, product);
    let steps = vec![
        "(a + b)(c + d) = ac + ad + bc + bd".to_string(),
        format!("{var}² + {a}{var} + {b}{var} + {product}"),
        value.clone(),
    ];
    Ok(Answer::exact(value.clone(), steps).with_latex(latex_hint(&value)))
}

fn irreducible(expr: &str) -> Answer {
    Answer::new(
        AnswerKind::Unchanged,
        expr.trim(),
        vec!["This expression cannot be factored further".to_string()],
    )
}

fn difference_of_squares(terms: &[Term]) -> Option<i64> {
    let [square, constant] = terms else {
        return None;
    };
    if square.shape != TermShape::Power(2) || square.coefficient != 1.0 || !constant.is_constant() {
        return None;
    }
    let k = integer(-constant.coefficient)?;
    if k <= 0 {
        return None;
    }
    let root = k.sqrt();
    (root * root == k).then_some(root)
}

/// `(b, c)` for `x^2 [± b*x] [± c]` with integer `b`, `c`.
fn monic_quadratic(terms: &[Term]) -> Option<(i64, i64)> {
    let (lead, rest) = terms.split_first()?;
    if lead.shape != TermShape::Power(2) || lead.coefficient != 1.0 {
        return None;
    }
    let (b, rest) = match rest.split_first() {
        Some((t, rest)) if t.shape == TermShape::Linear => (integer(t.coefficient)?, rest),
        _ => (0, rest),
    };
    match rest {
        [] => Some((b, 0)),
        [t] if t.is_constant() => Some((b, integer(t.coefficient)?)),
        _ => None,
    }
}

fn integer(value: f64) -> Option<i64> {
    let in_range = value.abs() < 9.0e15;
    (value.fract() == 0.0 && in_range).then(|| value as i64)
}

/// `(x + n)` or `(x - n)`.
fn binomial(var: &str, n: i64) -> String {
    if n < 0 {
        format!("({var} - {})", -n)
    } else {
        format!("({var} + {n})")
    }
}

/// `x^2 + s*x + p`, dropping zero terms and unit coefficients.
fn render_quadratic(var: &str, s: i128, p: i128) -> String {
    let mut out = format!("{var}^2");
    if s != 0 {
        let sign = if s < 0 { '-' } else { '+' };
        match s.unsigned_abs() {
            1 => out.push_str(&format!(" {sign} {var}")),
            m => out.push_str(&format!(" {sign} {m}*{var}")),
        }
    }
    if p != 0 {
        let sign = if p < 0 { '-' } else { '+' };
        out.push_str(&format!(" {sign} {}", p.unsigned_abs()));
    }
    out
}

/// `(x±a)(x±b)` or `(x±a)*(x±b)` with integer literals.
fn parse_binomial_product(input: &str, var: &str) -> Option<(i128, i128)> {
    let parsed: PResult<'_, _> = all_consuming(tuple((
        binomial_factor(var),
        opt(char('*')),
        binomial_factor(var),
    )))(input);
    parsed.ok().map(|(_, (a, _, b))| (a, b))
}

fn binomial_factor<'a>(var: &'a str) -> impl FnMut(&'a str) -> PResult<'a, i128> {
    delimited(char('('), preceded(tag(var), signed_integer), char(')'))
}

fn signed_integer(input: &str) -> PResult<'_, i128> {
    map_res(recognize(pair(one_of("+-"), digit1)), str::parse::<i128>)(input)
}
