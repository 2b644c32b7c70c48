use crate::answer::{Answer, AnswerKind};
use crate::error::{EngineError, Result};

/// Composite Simpson's rule over `[lower, upper]` with `n` subintervals.
///
/// `n` must be even and at least 2. Endpoints weigh 1, odd interior points 4,
/// even interior points 2; the sum is scaled by `h/3`.
pub fn simpson<F>(mut f: F, lower: f64, upper: f64, n: usize) -> Result<f64>
where
    F: FnMut(f64) -> Result<f64>,
{
    if n < 2 || n % 2 != 0 {
        return Err(EngineError::numeric(format!(
            "Simpson's rule needs an even number of subintervals, got {n}"
        )));
    }

    let h = (upper - lower) / n as f64;
    let mut sum = 0.0;
    for i in 0..=n {
        let x = lower + i as f64 * h;
        let y = f(x)?;
        if !y.is_finite() {
            return Err(EngineError::numeric(format!(
                "integrand is undefined at {x}"
            )));
        }
        let weight = if i == 0 || i == n {
            1.0
        } else if i % 2 == 0 {
            2.0
        } else {
            4.0
        };
        sum += weight * y;
    }
    Ok(h / 3.0 * sum)
}

/// Wrap a quadrature value as an approximate answer.
pub fn quadrature_answer(expr: &str, var: &str, lower: f64, upper: f64, n: usize, value: f64) -> Answer {
    Answer::new(
        AnswerKind::Approximation,
        format!("{value:.6} (numeric approximation)"),
        vec![
            format!("No closed-form rule matches ∫ {expr} d{var}"),
            format!("Simpson's rule over [{lower}, {upper}] with {n} subintervals"),
            format!("∫ from {lower} to {upper} ≈ {value:.6}"),
        ],
    )
}
