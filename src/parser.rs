use std::cell::Cell;

use crate::error::CasError;
use crate::expr::{Expr, Rational};
use nom::branch::alt;
use nom::bytes::complete::tag;
use nom::character::complete::{
    alpha1, alphanumeric0, char, digit0, digit1, multispace0, one_of, satisfy,
};
use nom::combinator::{all_consuming, map, map_res, opt, peek, recognize};
use nom::error::{ErrorKind, ParseError, VerboseError, VerboseErrorKind};
use nom::multi::fold_many0;
use nom::sequence::{delimited, pair, preceded};
use nom::IResult;
use num_bigint::{BigInt, ParseBigIntError};
use num_traits::Num;

type PResult<'a, O> = IResult<&'a str, O, VerboseError<&'a str>>;

/// Deepest chain of brackets, prefix signs, powers and function calls accepted.
pub const MAX_NESTING: usize = 256;

thread_local! {
    static NESTING: Cell<usize> = const { Cell::new(0) };
}

/// One level of recursive descent; released on drop.
struct NestingGuard;

impl NestingGuard {
    fn enter(input: &str) -> Result<Self, nom::Err<VerboseError<&str>>> {
        let depth = NESTING.with(|n| {
            n.set(n.get() + 1);
            n.get()
        });
        let guard = NestingGuard;
        if depth > MAX_NESTING {
            return Err(nom::Err::Failure(VerboseError::from_error_kind(
                input,
                ErrorKind::TooLarge,
            )));
        }
        Ok(guard)
    }
}

impl Drop for NestingGuard {
    fn drop(&mut self) {
        NESTING.with(|n| n.set(n.get().saturating_sub(1)));
    }
}

pub fn parse_expr(input: &str) -> Result<Expr, CasError> {
    if input.trim().is_empty() {
        return Err(CasError::Parse("empty expression".to_string()));
    }
    match all_consuming(ws(parse_add_sub))(input) {
        Ok((_, expr)) => Ok(expr),
        Err(nom::Err::Error(e)) | Err(nom::Err::Failure(e)) => {
            let too_deep = e
                .errors
                .iter()
                .any(|(_, kind)| matches!(kind, VerboseErrorKind::Nom(ErrorKind::TooLarge)));
            if too_deep {
                return Err(CasError::Parse(format!(
                    "expression nests deeper than {MAX_NESTING} levels"
                )));
            }
            let at = e.errors.first().map(|(rest, _)| *rest).unwrap_or(input);
            if at.is_empty() {
                Err(CasError::Parse(format!("unexpected end of `{input}`")))
            } else {
                Err(CasError::Parse(format!("unexpected `{at}` in `{input}`")))
            }
        }
        Err(nom::Err::Incomplete(_)) => Err(CasError::Parse(format!("incomplete `{input}`"))),
    }
}

fn parse_add_sub(input: &str) -> PResult<'_, Expr> {
    let (rest, init) = parse_mul_div(input)?;
    fold_many0(
        pair(ws(one_of("+-")), parse_mul_div),
        move || init.clone(),
        |acc, (op, rhs)| match op {
            '+' => Expr::Add(acc.boxed(), rhs.boxed()),
            _ => Expr::Sub(acc.boxed(), rhs.boxed()),
        },
    )(rest)
}

fn parse_mul_div(input: &str) -> PResult<'_, Expr> {
    let (rest, init) = parse_unary(input)?;
    fold_many0(
        alt((
            pair(ws(one_of("*/")), parse_unary),
            map(parse_implicit_factor, |rhs| ('*', rhs)),
        )),
        move || init.clone(),
        |acc, (op, rhs)| match op {
            '/' => Expr::Div(acc.boxed(), rhs.boxed()),
            _ => Expr::Mul(acc.boxed(), rhs.boxed()),
        },
    )(rest)
}

/// `2x`, `3(x+1)`, `x sin(x)`: juxtaposition binds as multiplication.
fn parse_implicit_factor(input: &str) -> PResult<'_, Expr> {
    preceded(
        peek(ws(satisfy(|c| c.is_ascii_alphabetic() || c == '('))),
        parse_pow,
    )(input)
}

fn parse_unary(input: &str) -> PResult<'_, Expr> {
    let _level = NestingGuard::enter(input)?;
    alt((
        map(preceded(ws(char('-')), parse_unary), |expr: Expr| Expr::Neg(expr.boxed())),
        preceded(ws(char('+')), parse_unary),
        parse_pow,
    ))(input)
}

fn parse_pow(input: &str) -> PResult<'_, Expr> {
    let (rest, base) = parse_primary(input)?;
    match preceded(ws(char('^')), parse_unary)(rest) {
        Ok((next, exp)) if base.is_euler() => Ok((next, Expr::Exp(exp.boxed()))),
        Ok((next, exp)) => Ok((next, Expr::Pow(base.boxed(), exp.boxed()))),
        Err(nom::Err::Error(_)) => Ok((rest, base)),
        Err(err) => Err(err),
    }
}

fn parse_primary(input: &str) -> PResult<'_, Expr> {
    let _level = NestingGuard::enter(input)?;
    alt((parse_parens, parse_function, parse_number, parse_identifier))(input)
}

fn parse_parens(input: &str) -> PResult<'_, Expr> {
    delimited(ws(char('(')), parse_add_sub, ws(char(')')))(input)
}

fn parse_number(input: &str) -> PResult<'_, Expr> {
    map(
        map_res(
            ws(recognize(alt((
                recognize(pair(digit1, opt(pair(char('.'), digit0)))),
                recognize(pair(char('.'), digit1)),
            )))),
            decimal_to_rational,
        ),
        Expr::Constant,
    )(input)
}

fn parse_identifier(input: &str) -> PResult<'_, Expr> {
    map(ws(recognize(pair(alpha1, alphanumeric0))), |s: &str| match s {
        "e" => Expr::euler(),
        "pi" => Expr::Pi,
        name => Expr::Variable(name.to_string()),
    })(input)
}

fn parse_function(input: &str) -> PResult<'_, Expr> {
    let (rest, (name, arg)) = pair(
        ws(alt((
            tag("arcsin"),
            tag("arccos"),
            tag("arctan"),
            tag("asin"),
            tag("acos"),
            tag("atan"),
            tag("sin"),
            tag("cos"),
            tag("tan"),
            tag("sec"),
            tag("csc"),
            tag("cot"),
            tag("exp"),
            tag("log"),
            tag("ln"),
            tag("sqrt"),
            tag("abs"),
        ))),
        alt((
            delimited(ws(char('(')), parse_add_sub, ws(char(')'))),
            parse_primary,
        )),
    )(input)?;

    let expr = match name {
        "arcsin" | "asin" => Expr::Asin(arg.boxed()),
        "arccos" | "acos" => Expr::Acos(arg.boxed()),
        "arctan" | "atan" => Expr::Atan(arg.boxed()),
        "sin" => Expr::Sin(arg.boxed()),
        "cos" => Expr::Cos(arg.boxed()),
        "tan" => Expr::Tan(arg.boxed()),
        "sec" => Expr::Sec(arg.boxed()),
        "csc" => Expr::Csc(arg.boxed()),
        "cot" => Expr::Cot(arg.boxed()),
        "exp" => Expr::Exp(arg.boxed()),
        "log" | "ln" => Expr::Log(arg.boxed()),
        "sqrt" => Expr::Pow(arg.boxed(), Expr::Constant(crate::expr::rational(1, 2)).boxed()),
        _ => Expr::Abs(arg.boxed()),
    };

    Ok((rest, expr))
}

/// Exact value of a decimal literal such as `2.75` or `.5`.
fn decimal_to_rational(text: &str) -> Result<Rational, ParseBigIntError> {
    let (whole, frac) = text.split_once('.').unwrap_or((text, ""));
    let digits = format!("{whole}{frac}");
    let numer = BigInt::from_str_radix(if digits.is_empty() { "0" } else { &digits }, 10)?;
    let denom = BigInt::from(10u32).pow(frac.len() as u32);
    Ok(Rational::new(numer, denom))
}

fn ws<'a, F, O>(inner: F) -> impl FnMut(&'a str) -> PResult<'a, O>
where
    F: FnMut(&'a str) -> PResult<'a, O>,
{
    delimited(multispace0, inner, multispace0)
}
