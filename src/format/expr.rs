use crate::expr::Expr;
use num_rational::BigRational;
use num_traits::{One, Signed};

/// Render an expression in the same infix syntax the parser accepts.
pub fn pretty(expr: &Expr) -> String {
    fn pp(ctx: u8, expr: &Expr) -> String {
        match expr {
            Expr::Variable(v) => v.clone(),
            Expr::Constant(r) => {
                let prec = if r.is_integer() && !r.is_negative() { 5 } else { 2 };
                bracket(ctx, prec, show_rational(r))
            }
            Expr::Pi => "pi".to_string(),

            Expr::Add(a, b) => {
                let s_a = pp(1, a);
                let (neg_b, b_inner) = split_neg(b);
                let s_b = pp(2, &b_inner);
                let body = format!("{s_a} {} {s_b}", if neg_b { "-" } else { "+" });
                bracket(ctx, 1, body)
            }

            Expr::Sub(a, b) => {
                let s_a = pp(1, a);
                let (neg_b, b_inner) = split_neg(b);
                let s_b = pp(2, &b_inner);
                let body = format!("{s_a} {} {s_b}", if neg_b { "+" } else { "-" });
                bracket(ctx, 1, body)
            }

            Expr::Mul(a, b) => {
                let (na, a_inner) = split_neg(a);
                let (nb, b_inner) = split_neg(b);
                let body = format!("{}*{}", pp(2, &a_inner), pp(3, &b_inner));
                if na ^ nb {
                    bracket(ctx, 2, format!("-{body}"))
                } else {
                    bracket(ctx, 2, body)
                }
            }

            Expr::Div(a, b) => {
                let (na, a_inner) = split_neg(a);
                let (nb, b_inner) = split_neg(b);
                let body = format!("{} / {}", pp(2, &a_inner), pp(3, &b_inner));
                if na ^ nb {
                    bracket(ctx, 2, format!("-{body}"))
                } else {
                    bracket(ctx, 2, body)
                }
            }

            Expr::Pow(a, b) => bracket(ctx, 3, format!("{}^{}", pp(4, a), pp(4, b))),

            Expr::Neg(a) => {
                let (is_neg, inner) = split_neg(a);
                if is_neg {
                    pp(ctx, &inner)
                } else {
                    bracket(ctx, 2, format!("-{}", pp(3, &inner)))
                }
            }

            Expr::Exp(a) if a.is_one() => "e".to_string(),
            Expr::Exp(a) => bracket(ctx, 3, format!("e^{}", pp(4, a))),

            Expr::Sin(a) => format!("sin({})", pp(0, a)),
            Expr::Cos(a) => format!("cos({})", pp(0, a)),
            Expr::Tan(a) => format!("tan({})", pp(0, a)),
            Expr::Sec(a) => format!("sec({})", pp(0, a)),
            Expr::Csc(a) => format!("csc({})", pp(0, a)),
            Expr::Cot(a) => format!("cot({})", pp(0, a)),
            Expr::Asin(a) => format!("arcsin({})", pp(0, a)),
            Expr::Acos(a) => format!("arccos({})", pp(0, a)),
            Expr::Atan(a) => format!("arctan({})", pp(0, a)),
            Expr::Log(a) => format!("log({})", pp(0, a)),
            Expr::Abs(a) => format!("abs({})", pp(0, a)),
        }
    }

    pp(0, expr)
}

fn split_neg(expr: &Expr) -> (bool, Expr) {
    match expr {
        Expr::Neg(inner) => (true, *inner.clone()),
        Expr::Constant(r) if r.is_negative() => (true, Expr::Constant(-r)),
        other => (false, other.clone()),
    }
}

fn bracket(ctx: u8, prec: u8, body: String) -> String {
    if prec < ctx {
        format!("({body})")
    } else {
        body
    }
}

fn show_rational(r: &BigRational) -> String {
    if r.denom().is_one() {
        format!("{}", r.numer())
    } else {
        format!("{}/{}", r.numer(), r.denom())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_expr;

    fn round(input: &str) -> String {
        pretty(&parse_expr(input).expect("parse"))
    }

    #[test]
    fn renders_infix() {
        assert_eq!(round("2*x^3"), "2*x^3");
        assert_eq!(round("x - (y + 1)"), "x - (y + 1)");
        assert_eq!(round("e^(2*x)"), "e^(2*x)");
        assert_eq!(round("sin(x)/x"), "sin(x) / x");
    }

    #[test]
    fn fractions_are_bracketed_under_powers() {
        let half = Expr::Constant(crate::expr::rational(1, 2));
        let expr = crate::expr::pow(Expr::var("x"), half);
        assert_eq!(pretty(&expr), "x^(1/2)");
    }

    #[test]
    fn rendering_reparses_to_same_tree() {
        for input in ["-x^2", "(x + 1)*(x - 2)", "x^-1", "3/4*x^2", "-(2*x)"] {
            let parsed = parse_expr(input).expect("parse");
            let again = parse_expr(&pretty(&parsed)).expect("reparse");
            assert_eq!(pretty(&parsed), pretty(&again), "{input}");
        }
    }
}
