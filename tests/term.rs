use neuralmath::term::{classify_term, decompose, normalize, polynomial_terms, TermShape};
use neuralmath::{EngineError, ErrorKind};

#[test]
fn normalize_is_idempotent() {
    let once = normalize("  3 * X^2 -  Sin( X ) ");
    assert_eq!(once.as_str(), "3*x^2-sin(x)");
    assert_eq!(normalize(&once), once);
}

#[test]
fn decompose_reconstructs_input() {
    let expr = "-2*x^3+x-7+0.5*x^2";
    let pieces = decompose(expr);
    assert_eq!(pieces, vec!["-2*x^3", "+x", "-7", "+0.5*x^2"]);
    assert_eq!(pieces.concat(), expr);
}

#[test]
fn signs_inside_brackets_and_exponents_do_not_split() {
    assert_eq!(decompose("(x+1)*(x-1)"), vec!["(x+1)*(x-1)"]);
    assert_eq!(decompose("x^-1-2"), vec!["x^-1", "-2"]);
    assert_eq!(decompose("3*-x"), vec!["3*-x"]);
}

#[test]
fn coefficient_defaults() {
    let plain = classify_term("x^4", "x").expect("term");
    assert_eq!(plain.coefficient, 1.0);
    assert_eq!(plain.exponent(), 4);

    let negated = classify_term("-x", "x").expect("term");
    assert_eq!(negated.coefficient, -1.0);
    assert_eq!(negated.shape, TermShape::Linear);

    let constant = classify_term("-2.5", "x").expect("term");
    assert_eq!(constant.coefficient, -2.5);
    assert_eq!(constant.exponent(), 0);
}

#[test]
fn other_variables_are_not_terms() {
    assert!(classify_term("2*y", "x").is_err());
    assert_eq!(classify_term("2*y", "y").expect("term").shape, TermShape::Linear);
}

#[test]
fn unsupported_terms_are_reported_not_dropped() {
    let err = polynomial_terms("x^2+sin(x)", "x").unwrap_err();
    assert_eq!(err.term, "+sin(x)");

    let engine_err: EngineError = err.into();
    assert_eq!(engine_err.kind(), ErrorKind::UnsupportedPattern);
}
