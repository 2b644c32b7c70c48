use neuralmath::calculus::simpson;
use neuralmath::{AnswerKind, Engine, ErrorKind};

fn integral(expr: &str) -> String {
    Engine::new().integrate(expr).expect("integrate").value
}

#[test]
fn polynomial_power_rule() {
    assert_eq!(integral("2*x^3"), "0.5*x^4 + C");
    assert_eq!(integral("3*x^2 - 4"), "1*x^3 - 4*x + C");
    assert_eq!(integral("x"), "0.5*x^2 + C");
    assert_eq!(integral("5"), "5*x + C");
    assert_eq!(integral("-x^2"), "-0.3333333333333333*x^3 + C");
}

#[test]
fn polynomial_answer_has_steps_and_latex() {
    let answer = Engine::new().integrate("2*x^3").expect("integrate");
    assert_eq!(answer.kind, AnswerKind::Exact);
    assert_eq!(answer.steps.len(), 3);
    assert_eq!(answer.latex_hint.as_deref(), Some("0.5x^4 + C"));
}

#[test]
fn unreadable_polynomial_term_is_reported() {
    let err = Engine::new().integrate("2^x").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnsupportedPattern);
}

#[test]
fn exponential_closed_forms() {
    assert_eq!(integral("e^x"), "e^x + C");
    assert_eq!(integral("e^(2*x)"), "(1/2)*e^(2*x) + C");
    assert_eq!(integral("e^(-3x)"), "(1/-3)*e^(-3*x) + C");

    let answer = Engine::new().integrate("e^(2*x)").expect("integrate");
    assert_eq!(answer.latex_hint.as_deref(), Some("\\frac{1}{2}e^{2x} + C"));
}

#[test]
fn other_exponentials_are_unsupported() {
    for expr in ["e^(x^2)", "e^x+1", "e^(sin(x))"] {
        let err = Engine::new().integrate(expr).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnsupportedPattern, "{expr}");
    }
}

#[test]
fn trig_table() {
    assert_eq!(integral("sin(x)"), "-cos(x) + C");
    assert_eq!(integral("cos(x)"), "sin(x) + C");
    assert_eq!(integral("tan(x)"), "-ln(abs(cos(x))) + C");
    assert_eq!(integral("sec(x)^2"), "tan(x) + C");
    assert_eq!(integral("csc(x)^2"), "-cot(x) + C");
}

#[test]
fn trig_lookup_is_literal() {
    let err = Engine::new().integrate("sin(2*x)").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnsupportedPattern);
    assert_eq!(
        Engine::new().integrate_in("sin(t)", "t").expect("integrate").value,
        "-cos(t) + C"
    );
}

#[test]
fn numeric_fallback_integrates_over_unit_interval() {
    let answer = Engine::new().integrate("1/(1+x)").expect("integrate");
    assert_eq!(answer.kind, AnswerKind::Approximation);
    assert_eq!(answer.value, "0.693147 (numeric approximation)");
    assert!(answer.steps.iter().any(|s| s.contains("[0, 1]")));
}

#[test]
fn numeric_fallback_rejects_singular_integrands() {
    let err = Engine::new().integrate("1/x").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Numeric);
}

#[test]
fn explicit_interval() {
    let answer = Engine::new().integrate_numeric("x^2", 0.0, 3.0).expect("integrate");
    assert_eq!(answer.value, "9.000000 (numeric approximation)");

    let err = Engine::new().integrate_numeric("x", 0.0, f64::INFINITY).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Format);
}

#[test]
fn simpson_matches_analytic_integral() {
    let value = simpson(|x| Ok(x * x), 0.0, 1.0, 100).expect("quadrature");
    assert!((value - 1.0 / 3.0).abs() < 1e-6);

    let value = simpson(|x| Ok(x.exp()), 0.0, 1.0, 100).expect("quadrature");
    assert!((value - (std::f64::consts::E - 1.0)).abs() < 1e-6);
}

#[test]
fn largest_exponents_are_reported_not_wrapped() {
    let answer = Engine::new().integrate("x^4294967294").expect("integrate");
    assert!(answer.value.ends_with("*x^4294967295 + C"), "{}", answer.value);

    for expr in ["x^4294967295", "x^4294967296"] {
        let err = Engine::new().integrate(expr).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnsupportedPattern, "{expr}");
    }
}
