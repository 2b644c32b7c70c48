use std::cmp::Reverse;
use std::collections::HashMap;

use crate::expr::{one, zero, Expr, Rational};
use num_bigint::BigInt;
use num_traits::{One, Signed, ToPrimitive, Zero};

const DISTRIBUTE_TERM_LIMIT: usize = 64;
const MAX_EXACT_POWER: u32 = 1024;

#[derive(Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
struct CanonKey(Vec<Expr>);

pub fn simplify(expr: Expr) -> Expr {
    let mut cache = HashMap::new();
    simplify_cached(expr, &mut cache)
}

fn simplify_cached(expr: Expr, cache: &mut HashMap<Expr, Expr>) -> Expr {
    if let Some(hit) = cache.get(&expr) {
        return hit.clone();
    }

    let key = expr.clone();
    let result = match expr {
        Expr::Add(a, b) => simplify_add(simplify_cached(*a, cache), simplify_cached(*b, cache)),
        Expr::Sub(a, b) => simplify_sub(simplify_cached(*a, cache), simplify_cached(*b, cache)),
        Expr::Mul(a, b) => simplify_mul(simplify_cached(*a, cache), simplify_cached(*b, cache)),
        Expr::Div(a, b) => simplify_div(simplify_cached(*a, cache), simplify_cached(*b, cache)),
        Expr::Pow(a, b) => simplify_pow(simplify_cached(*a, cache), simplify_cached(*b, cache)),
        Expr::Neg(a) => simplify_neg(simplify_cached(*a, cache)),

        Expr::Sin(a) => match simplify_cached(*a, cache) {
            x if is_zero(&x) => zero(),
            Expr::Neg(inner) => simplify_neg(Expr::Sin(inner)),
            x => Expr::Sin(x.boxed()),
        },
        Expr::Cos(a) => match simplify_cached(*a, cache) {
            x if is_zero(&x) => one(),
            Expr::Neg(inner) => Expr::Cos(inner),
            x => Expr::Cos(x.boxed()),
        },
        Expr::Tan(a) => match simplify_cached(*a, cache) {
            x if is_zero(&x) => zero(),
            Expr::Neg(inner) => simplify_neg(Expr::Tan(inner)),
            x => Expr::Tan(x.boxed()),
        },
        Expr::Sec(a) => match simplify_cached(*a, cache) {
            x if is_zero(&x) => one(),
            x => Expr::Sec(x.boxed()),
        },
        Expr::Csc(a) => Expr::Csc(simplify_cached(*a, cache).boxed()),
        Expr::Cot(a) => Expr::Cot(simplify_cached(*a, cache).boxed()),
        Expr::Asin(a) => match simplify_cached(*a, cache) {
            x if is_zero(&x) => zero(),
            x => Expr::Asin(x.boxed()),
        },
        Expr::Acos(a) => Expr::Acos(simplify_cached(*a, cache).boxed()),
        Expr::Atan(a) => match simplify_cached(*a, cache) {
            x if is_zero(&x) => zero(),
            x => Expr::Atan(x.boxed()),
        },

        Expr::Exp(a) => match simplify_cached(*a, cache) {
            x if is_zero(&x) => one(),
            Expr::Log(inner) => *inner,
            x => Expr::Exp(x.boxed()),
        },
        Expr::Log(a) => match simplify_cached(*a, cache) {
            x if is_one(&x) => zero(),
            Expr::Exp(inner) => *inner,
            x => Expr::Log(x.boxed()),
        },
        Expr::Abs(a) => match simplify_cached(*a, cache) {
            Expr::Constant(c) => Expr::Constant(c.abs()),
            Expr::Neg(inner) => Expr::Abs(inner),
            x => Expr::Abs(x.boxed()),
        },

        e => e,
    };

    cache.insert(key, result.clone());
    result
}

/// Apply simplification passes until the expression stops changing or we hit the iteration cap.
pub fn simplify_fully(expr: Expr) -> Expr {
    simplify_with_limit(expr, 64)
}

/// Apply simplification passes up to `max_iters`, returning the last value if convergence is not reached.
pub fn simplify_with_limit(expr: Expr, max_iters: usize) -> Expr {
    let mut cache = HashMap::new();
    let mut current = expr;
    for _ in 0..max_iters {
        let next = simplify_cached(current.clone(), &mut cache);
        if next == current {
            return current;
        }
        current = next;
    }
    current
}

pub fn simplify_add(x: Expr, y: Expr) -> Expr {
    rebuild_sum(collect_sum(flatten_sum(&x).into_iter().chain(flatten_sum(&y))))
}

pub fn simplify_sub(x: Expr, y: Expr) -> Expr {
    simplify_add(x, simplify_neg(y))
}

fn flatten_sum(expr: &Expr) -> Vec<Expr> {
    match expr {
        Expr::Add(a, b) => {
            let mut out = flatten_sum(a);
            out.extend(flatten_sum(b));
            out
        }
        Expr::Sub(a, b) => {
            let mut out = flatten_sum(a);
            out.extend(flatten_sum(b).into_iter().map(simplify_neg));
            out
        }
        Expr::Neg(a) => flatten_sum(a).into_iter().map(simplify_neg).collect(),
        other => vec![other.clone()],
    }
}

fn count_sum_terms(expr: &Expr) -> usize {
    match expr {
        Expr::Add(a, b) | Expr::Sub(a, b) => count_sum_terms(a) + count_sum_terms(b),
        Expr::Neg(inner) => count_sum_terms(inner),
        _ => 1,
    }
}

/// Split `expr` into its rational coefficient and the remaining sorted product.
fn split_coeff(expr: &Expr) -> (Rational, Expr) {
    match expr {
        Expr::Constant(c) => (c.clone(), one()),
        Expr::Neg(e) => {
            let (c, b) = split_coeff(e);
            (-c, b)
        }
        Expr::Mul(a, b) => {
            let (ca, ba) = split_coeff(a);
            let (cb, bb) = split_coeff(b);
            (ca * cb, mk_mul_list(factors(&ba).into_iter().chain(factors(&bb)).collect()))
        }
        other => (Rational::one(), other.clone()),
    }
}

fn factors(expr: &Expr) -> Vec<Expr> {
    match expr {
        Expr::Mul(a, b) => {
            let mut out = factors(a);
            out.extend(factors(b));
            out
        }
        t if is_one(t) => vec![],
        t => vec![t.clone()],
    }
}

fn collect_sum<I>(terms: I) -> HashMap<CanonKey, Rational>
where
    I: IntoIterator<Item = Expr>,
{
    let mut map = HashMap::new();
    for term in terms {
        let (c, b) = split_coeff(&term);
        if c.is_zero() {
            continue;
        }
        let mut key = factors(&b);
        key.sort();
        map.entry(CanonKey(key))
            .and_modify(|acc| *acc += &c)
            .or_insert(c);
    }
    map
}

/// Rough degree used to print sums highest power first.
fn term_degree(factors: &[Expr]) -> i64 {
    factors
        .iter()
        .map(|f| match f {
            Expr::Pow(_, e) => match &**e {
                Expr::Constant(k) if k.is_integer() => k.to_integer().to_i64().unwrap_or(1),
                _ => 1,
            },
            _ => 1,
        })
        .sum()
}

fn rebuild_sum(mut map: HashMap<CanonKey, Rational>) -> Expr {
    let const_term = map
        .remove(&CanonKey(Vec::new()))
        .unwrap_or_else(Rational::zero);
    let mut items: Vec<(CanonKey, Rational)> = map.into_iter().filter(|(_, c)| !c.is_zero()).collect();
    items.sort_by(|(a, _), (b, _)| {
        (Reverse(term_degree(&a.0)), a).cmp(&(Reverse(term_degree(&b.0)), b))
    });

    let mut terms: Vec<Expr> = items
        .into_iter()
        .map(|(CanonKey(factors), coef)| term_from(&coef, mk_mul_list(factors)))
        .collect();

    if !const_term.is_zero() {
        terms.push(Expr::Constant(const_term));
    }

    mk_add_list(terms)
}

fn term_from(coef: &Rational, base: Expr) -> Expr {
    if coef.is_zero() {
        return zero();
    }
    if is_one(&base) {
        return Expr::Constant(coef.clone());
    }
    if coef.is_one() {
        return base;
    }
    if coef == &-Rational::one() {
        return Expr::Neg(base.boxed());
    }
    Expr::Mul(Expr::Constant(coef.clone()).boxed(), base.boxed())
}

pub fn simplify_mul(x: Expr, y: Expr) -> Expr {
    match (x, y) {
        (Expr::Add(a, b), t) | (t, Expr::Add(a, b)) if can_distribute(&a, &b, &t) => {
            simplify_add(simplify_mul(*a, t.clone()), simplify_mul(*b, t))
        }
        (Expr::Sub(a, b), t) | (t, Expr::Sub(a, b)) if can_distribute(&a, &b, &t) => {
            simplify_sub(simplify_mul(*a, t.clone()), simplify_mul(*b, t))
        }
        (Expr::Constant(xc), Expr::Constant(yc)) => Expr::Constant(xc * yc),
        (x, y) if is_zero(&x) || is_zero(&y) => zero(),
        (x, y) if is_one(&x) => y,
        (x, y) if is_one(&y) => x,
        (x, y) => {
            let (c, b) = split_coeff(&Expr::Mul(x.boxed(), y.boxed()));
            term_from(&c, merge_powers(factors(&b)))
        }
    }
}

fn can_distribute(a: &Expr, b: &Expr, t: &Expr) -> bool {
    (count_sum_terms(a) + count_sum_terms(b)) * count_sum_terms(t) <= DISTRIBUTE_TERM_LIMIT
}

/// Combine repeated bases with constant exponents: `x*x^2` becomes `x^3`.
fn merge_powers(factors: Vec<Expr>) -> Expr {
    let mut merged: Vec<(Expr, Option<Rational>)> = Vec::new();
    for factor in factors {
        let (base, exp) = match factor {
            Expr::Pow(base, exp) => match *exp {
                Expr::Constant(k) => (*base, Some(k)),
                other => (Expr::Pow(base, other.boxed()), None),
            },
            other => (other, Some(Rational::one())),
        };
        let existing = match exp {
            Some(_) => merged.iter().position(|(b, e)| b == &base && e.is_some()),
            None => None,
        };
        match (existing, exp) {
            (Some(idx), Some(k)) => {
                if let Some(acc) = merged[idx].1.as_mut() {
                    *acc += k;
                }
            }
            (_, exp) => merged.push((base, exp)),
        }
    }
    mk_mul_list(
        merged
            .into_iter()
            .filter_map(|(base, exp)| match exp {
                None => Some(base),
                Some(k) if k.is_zero() => None,
                Some(k) if k.is_one() => Some(base),
                Some(k) => Some(simplify_pow(base, Expr::Constant(k))),
            })
            .collect(),
    )
}

pub fn simplify_div(x: Expr, y: Expr) -> Expr {
    if is_zero(&y) {
        return Expr::Div(x.boxed(), y.boxed());
    }
    match (x, y) {
        (Expr::Constant(n), Expr::Constant(d)) => Expr::Constant(n / d),
        (x, _) if is_zero(&x) => zero(),
        (x, y) if is_one(&y) => x,
        (x, Expr::Constant(d)) => simplify_mul(Expr::Constant(d.recip()), x),
        (x, y) => {
            let (cx, bx) = split_coeff(&x);
            let (cy, by) = split_coeff(&y);
            if cy.is_zero() {
                return Expr::Div(x.boxed(), y.boxed());
            }
            let c = cx / cy;
            if bx == by && !is_one(&bx) {
                return Expr::Constant(c);
            }
            let core = if is_one(&by) {
                bx
            } else {
                Expr::Div(bx.boxed(), by.boxed())
            };
            simplify_mul(Expr::Constant(c), core)
        }
    }
}

pub fn simplify_pow(x: Expr, y: Expr) -> Expr {
    match (x, y) {
        (_, Expr::Constant(e)) if e.is_zero() => one(),
        (base, Expr::Constant(e)) if e.is_one() => base,
        (base, exp) if base.is_euler() => Expr::Exp(exp.boxed()),
        (Expr::Constant(b), Expr::Constant(e)) => match exact_power(&b, &e) {
            Some(value) => Expr::Constant(value),
            None => Expr::Pow(Expr::Constant(b).boxed(), Expr::Constant(e).boxed()),
        },
        (Expr::Pow(inner, k), Expr::Constant(e)) if e.is_integer() => match *k {
            Expr::Constant(k) if k.is_integer() => {
                simplify_pow(*inner, Expr::Constant(k * e))
            }
            k => Expr::Pow(Expr::Pow(inner, k.boxed()).boxed(), Expr::Constant(e).boxed()),
        },
        (x, y) => Expr::Pow(x.boxed(), y.boxed()),
    }
}

fn exact_power(base: &Rational, exp: &Rational) -> Option<Rational> {
    if !exp.is_integer() {
        return None;
    }
    let k: BigInt = exp.to_integer();
    let power = k.abs().to_u32().filter(|p| *p <= MAX_EXACT_POWER)?;
    if k.is_negative() {
        if base.is_zero() {
            return None;
        }
        Some(Rational::new(base.denom().pow(power), base.numer().pow(power)))
    } else {
        Some(Rational::new(base.numer().pow(power), base.denom().pow(power)))
    }
}

pub fn simplify_neg(expr: Expr) -> Expr {
    match expr {
        Expr::Constant(x) => Expr::Constant(-x),
        Expr::Neg(x) => *x,
        Expr::Mul(a, b) => match *a {
            Expr::Constant(c) => term_from(&-c, *b),
            a => Expr::Neg(Expr::Mul(a.boxed(), b).boxed()),
        },
        other => Expr::Neg(other.boxed()),
    }
}

fn is_zero(expr: &Expr) -> bool {
    expr.is_zero()
}

fn is_one(expr: &Expr) -> bool {
    expr.is_one()
}

fn mk_add_list(items: Vec<Expr>) -> Expr {
    let mut iter = items.into_iter();
    match iter.next() {
        None => zero(),
        Some(first) => iter.fold(first, |acc, item| match negated_term(&item) {
            Some(positive) => Expr::Sub(acc.boxed(), positive.boxed()),
            None => Expr::Add(acc.boxed(), item.boxed()),
        }),
    }
}

/// For a term with a leading minus, the same term without it.
fn negated_term(expr: &Expr) -> Option<Expr> {
    match expr {
        Expr::Neg(inner) => Some((**inner).clone()),
        Expr::Constant(c) if c.is_negative() => Some(Expr::Constant(-c)),
        Expr::Mul(a, b) => match &**a {
            Expr::Constant(c) if c.is_negative() => Some(term_from(&-c, (**b).clone())),
            _ => None,
        },
        _ => None,
    }
}

fn mk_mul_list(mut items: Vec<Expr>) -> Expr {
    items.retain(|e| !is_one(e));
    items.sort();
    let mut iter = items.into_iter();
    match iter.next() {
        None => one(),
        Some(first) => iter.fold(first, |acc, item| Expr::Mul(acc.boxed(), item.boxed())),
    }
}
