use crate::expr::{div, mul, neg, one, pow, rational, Expr, Rational};
use crate::simplify::{simplify, simplify_add, simplify_sub};
use num_traits::One;

pub fn differentiate(var: &str, expr: &Expr) -> Expr {
    Differentiator { var }.derive(expr)
}

struct Differentiator<'a> {
    var: &'a str,
}

impl<'a> Differentiator<'a> {
    fn derive(&self, expr: &Expr) -> Expr {
        if !expr.contains_var(self.var) {
            return Expr::integer(0);
        }
        match expr {
            Expr::Variable(_) => one(),
            Expr::Constant(_) | Expr::Pi => Expr::integer(0),

            Expr::Add(a, b) => simplify_add(self.derive(a), self.derive(b)),
            Expr::Sub(a, b) => simplify_sub(self.derive(a), self.derive(b)),
            Expr::Mul(a, b) => self.product_rule(a, b),
            Expr::Div(a, b) => self.quotient_rule(a, b),
            Expr::Pow(a, b) => self.power_rule(a, b),
            Expr::Neg(a) => simplify(neg(self.derive(a))),

            Expr::Sin(a) => self.chain_rule(a, |u| Expr::Cos(u.boxed())),
            Expr::Cos(a) => self.chain_rule(a, |u| neg(Expr::Sin(u.boxed()))),
            Expr::Tan(a) => self.chain_rule(a, |u| pow(Expr::Sec(u.boxed()), Expr::integer(2))),
            Expr::Sec(a) => self.chain_rule(a, |u| mul(Expr::Sec(u.clone().boxed()), Expr::Tan(u.boxed()))),
            Expr::Csc(a) => self.chain_rule(a, |u| {
                neg(mul(Expr::Csc(u.clone().boxed()), Expr::Cot(u.boxed())))
            }),
            Expr::Cot(a) => self.chain_rule(a, |u| neg(pow(Expr::Csc(u.boxed()), Expr::integer(2)))),
            Expr::Asin(a) => self.chain_rule(a, |u| div(one(), sqrt(one_minus_square(u)))),
            Expr::Acos(a) => self.chain_rule(a, |u| neg(div(one(), sqrt(one_minus_square(u))))),
            Expr::Atan(a) => self.chain_rule(a, |u| {
                div(one(), Expr::Add(one().boxed(), pow(u, Expr::integer(2)).boxed()))
            }),
            Expr::Exp(a) => self.chain_rule(a, |u| Expr::Exp(u.boxed())),
            Expr::Log(a) => self.chain_rule(a, |u| div(one(), u)),
            Expr::Abs(a) => self.chain_rule(a, |u| div(u.clone(), Expr::Abs(u.boxed()))),
        }
    }

    fn product_rule(&self, a: &Expr, b: &Expr) -> Expr {
        let da = self.derive(a);
        let db = self.derive(b);
        simplify_add(
            simplify(mul(da, b.clone())),
            simplify(mul(a.clone(), db)),
        )
    }

    fn quotient_rule(&self, a: &Expr, b: &Expr) -> Expr {
        if !b.contains_var(self.var) {
            return simplify(div(self.derive(a), b.clone()));
        }
        simplify(div(
            simplify_sub(
                simplify(mul(self.derive(a), b.clone())),
                simplify(mul(a.clone(), self.derive(b))),
            ),
            pow(b.clone(), Expr::integer(2)),
        ))
    }

    fn power_rule(&self, base: &Expr, exp: &Expr) -> Expr {
        match exp {
            Expr::Constant(n) => {
                let db = self.derive(base);
                simplify(mul(
                    mul(
                        Expr::Constant(n.clone()),
                        pow(base.clone(), Expr::Constant(n - Rational::one())),
                    ),
                    db,
                ))
            }
            _ => {
                // d(f^g) = f^g * (g' ln f + g f'/f)
                let f = pow(base.clone(), exp.clone());
                let da = self.derive(base);
                let db = self.derive(exp);
                simplify(mul(
                    f,
                    Expr::Add(
                        mul(db, Expr::Log(base.clone().boxed())).boxed(),
                        div(mul(exp.clone(), da), base.clone()).boxed(),
                    ),
                ))
            }
        }
    }

    fn chain_rule<F>(&self, arg: &Expr, outer: F) -> Expr
    where
        F: Fn(Expr) -> Expr,
    {
        let da = self.derive(arg);
        simplify(mul(da, outer(arg.clone())))
    }
}

fn sqrt(expr: Expr) -> Expr {
    pow(expr, Expr::Constant(rational(1, 2)))
}

fn one_minus_square(u: Expr) -> Expr {
    Expr::Sub(one().boxed(), pow(u, Expr::integer(2)).boxed())
}
