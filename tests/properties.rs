//! Property tests over generated inputs.

use neuralmath::eval::evaluate_at;
use neuralmath::solver::{roots, Roots};
use neuralmath::term::{decompose, normalize, polynomial_terms, TermShape};
use neuralmath::{parse_expr, AnswerKind, Engine};
use proptest::prelude::*;

const EPS: f64 = 1e-9;

fn signed(n: i64) -> String {
    if n < 0 {
        format!("- {}", -n)
    } else {
        format!("+ {n}")
    }
}

/// `(b, c)` read back from a rendered monic quadratic.
fn linear_and_constant(text: &str) -> (f64, f64) {
    let terms = polynomial_terms(text, "x").expect("terms");
    let b = terms
        .iter()
        .filter(|t| t.shape == TermShape::Linear)
        .map(|t| t.coefficient)
        .sum();
    let c = terms
        .iter()
        .filter(|t| t.shape == TermShape::Constant)
        .map(|t| t.coefficient)
        .sum();
    (b, c)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn integrate_then_differentiate_recovers_term(
        coef in (-20i64..=20).prop_filter("non-zero", |c| *c != 0),
        n in 0u32..6,
        x in 0.5f64..2.0,
    ) {
        let engine = Engine::new();
        let integral = engine.integrate(&format!("{coef}*x^{n}")).expect("integrate");
        let antiderivative = integral.value.trim_end_matches(" + C");
        let derivative = engine.differentiate(antiderivative).expect("differentiate");

        let got = evaluate_at(&parse_expr(&derivative.value).expect("parse"), "x", x).expect("eval");
        let want = coef as f64 * x.powi(n as i32);
        prop_assert!((got - want).abs() < 1e-6 * want.abs().max(1.0), "{} vs {}", got, want);
    }

    #[test]
    fn quadratic_roots_satisfy_equation(
        a in prop_oneof![-10.0f64..-0.1, 0.1f64..10.0],
        b in -10.0f64..10.0,
        c in -10.0f64..10.0,
    ) {
        let discriminant = b * b - 4.0 * a * c;
        let check = |x: f64| (a * x * x + b * x + c).abs() < 1e-6 * (1.0 + b.abs() + c.abs());
        match roots(a, b, c) {
            Roots::None { .. } => prop_assert!(discriminant < 0.0),
            Roots::One(x) => {
                prop_assert_eq!(discriminant, 0.0);
                prop_assert!(check(x));
            }
            Roots::Two(x1, x2) => {
                prop_assert!(discriminant > 0.0);
                prop_assert!(x1 != x2);
                prop_assert!(check(x1) && check(x2));
            }
        }
    }

    #[test]
    fn factor_then_expand_reproduces_coefficients(i in -20i64..=20, j in -20i64..=20) {
        let (b, c) = (i + j, i * j);
        let trinomial = format!("x^2 {}*x {}", signed(b), signed(c));

        let engine = Engine::new();
        let factored = engine.factor(&trinomial).expect("factor");
        prop_assert_eq!(factored.kind, AnswerKind::Exact);

        let expanded = engine.expand(&factored.value).expect("expand");
        prop_assert_eq!(expanded.kind, AnswerKind::Exact);
        prop_assert_eq!(linear_and_constant(&expanded.value), (b as f64, c as f64));
    }

    #[test]
    fn decompose_is_lossless(
        terms in prop::collection::vec((-50i64..50, 0u32..5), 1..6),
    ) {
        let text: String = terms
            .iter()
            .enumerate()
            .map(|(k, (coef, n))| {
                let sign = if *coef < 0 { "-" } else if k > 0 { "+" } else { "" };
                format!("{sign}{}*x^{n}", coef.abs())
            })
            .collect();
        prop_assert_eq!(decompose(&text).concat(), text.clone());
        prop_assert_eq!(polynomial_terms(&text, "x").expect("terms").len(), terms.len());
    }

    #[test]
    fn normalize_is_idempotent(raw in "[ a-zA-Z0-9+*^()/.=-]{0,40}") {
        let once = normalize(&raw);
        prop_assert_eq!(normalize(&once), once.clone());
        prop_assert!(!once.contains(' '));
    }

    #[test]
    fn simpson_is_exact_for_cubics(p in -5.0f64..5.0, q in -5.0f64..5.0) {
        let value = neuralmath::calculus::simpson(|x| Ok(p * x * x * x + q), 0.0, 1.0, 100)
            .expect("quadrature");
        prop_assert!((value - (p / 4.0 + q)).abs() < EPS);
    }
}
