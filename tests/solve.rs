use neuralmath::solver::{roots, Roots};
use neuralmath::{AnswerKind, Engine, ErrorKind};

fn solve(equation: &str) -> neuralmath::Answer {
    Engine::new().solve_equation(equation).expect("solve")
}

#[test]
fn linear_equations() {
    assert_eq!(solve("2*x+3=7").value, "x = 2");
    assert_eq!(solve("x - 4 = 10").value, "x = 14");
    assert_eq!(solve("-x=3").value, "x = -3");
    assert_eq!(solve("5 + 2x = 0").value, "x = -2.5");
}

#[test]
fn linear_steps_walk_through_the_rearrangement() {
    let answer = solve("2*x+3=7");
    assert_eq!(
        answer.steps,
        vec!["Equation: 2*x+3=7", "2x + 3 = 7", "2x = 4", "x = 2"]
    );
}

#[test]
fn zero_leading_coefficient_is_a_domain_error() {
    let err = Engine::new().solve_equation("0*x+1=2").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Domain);

    let err = Engine::new().solve_equation("0*x^2+x=1").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Domain);
}

#[test]
fn quadratic_with_two_roots() {
    let answer = solve("x^2-5*x+6=0");
    assert_eq!(answer.kind, AnswerKind::Exact);
    assert_eq!(answer.value, "x1 = 3.0000, x2 = 2.0000");
    assert!(answer.steps.iter().any(|s| s == "Discriminant: Δ = b² - 4ac = 1.0000"));
}

#[test]
fn quadratic_moves_right_side_into_constant() {
    assert_eq!(solve("x^2 = 4").value, "x1 = 2.0000, x2 = -2.0000");
    assert_eq!(solve("x^2+2*x=-1").value, "x = -1");
}

#[test]
fn quadratic_with_one_root() {
    assert_eq!(solve("x^2+2*x+1=0").value, "x = -1");
}

#[test]
fn quadratic_without_real_roots() {
    let answer = solve("x^2+1=0");
    assert_eq!(answer.kind, AnswerKind::NoRealSolution);
    assert_eq!(answer.value, "No real solution");
}

#[test]
fn other_equations_fall_back_to_residual() {
    let answer = solve("x^3-x=0");
    assert_eq!(answer.kind, AnswerKind::Residual);
    assert_eq!(answer.value, "x^3 - x = 0");

    let answer = solve("2*x = y");
    assert_eq!(answer.kind, AnswerKind::Residual);
    assert_eq!(answer.value, "2*x - y = 0");
}

#[test]
fn equation_must_have_exactly_one_equals_sign() {
    for bad in ["x+1", "x=1=2", "=3"] {
        let err = Engine::new().solve_equation(bad).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Format, "{bad}");
    }
}

#[test]
fn unparsable_residual_is_a_delegate_error() {
    let err = Engine::new().solve_equation("x^3+=0").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Delegate);
}

#[test]
fn root_count_follows_discriminant() {
    match roots(2.0, -4.0, -6.0) {
        Roots::Two(x1, x2) => {
            assert!((x1 - 3.0).abs() < 1e-12);
            assert!((x2 + 1.0).abs() < 1e-12);
        }
        other => panic!("expected two roots, got {other:?}"),
    }
    assert_eq!(roots(1.0, -4.0, 4.0), Roots::One(2.0));
    assert!(matches!(roots(1.0, 1.0, 1.0), Roots::None { .. }));
}
