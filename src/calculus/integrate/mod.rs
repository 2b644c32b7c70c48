mod classify;
mod exponential;
mod numeric;
mod polynomial;
mod trig;

use tracing::debug;

use crate::answer::Answer;
use crate::cas::{Bindings, Cas};
use crate::config::QuadratureConfig;
use crate::error::Result;

pub use classify::{classify, RuleFamily};
pub use exponential::integrate_exponential;
pub use numeric::simpson;
pub use polynomial::integrate_polynomial;
pub use trig::integrate_trig;

/// Indefinite integral of a normalized expression.
///
/// When no closed-form family applies, the answer is the definite integral
/// over the configured interval, marked as an approximation.
pub fn integrate<C: Cas>(cas: &C, expr: &str, var: &str, quadrature: &QuadratureConfig) -> Result<Answer> {
    let family = classify(expr, var);
    debug!(?family, expr, "integration rule selected");

    match family {
        RuleFamily::Polynomial => integrate_polynomial(expr, var),
        RuleFamily::Exponential => integrate_exponential(expr, var),
        RuleFamily::Trigonometric => integrate_trig(expr, var),
        RuleFamily::Numeric => integrate_numeric(
            cas,
            expr,
            var,
            quadrature.lower,
            quadrature.upper,
            quadrature.subintervals,
        ),
    }
}

/// Definite integral over `[lower, upper]` by Simpson's rule.
pub fn integrate_numeric<C: Cas>(
    cas: &C,
    expr: &str,
    var: &str,
    lower: f64,
    upper: f64,
    subintervals: usize,
) -> Result<Answer> {
    let parsed = cas.parse(expr)?;
    let mut bindings = Bindings::new();
    let value = simpson(
        |x| {
            bindings.insert(var.to_string(), x);
            Ok(cas.evaluate(&parsed, &bindings)?)
        },
        lower,
        upper,
        subintervals,
    )?;
    debug!(expr, lower, upper, value, "quadrature finished");
    Ok(numeric::quadrature_answer(expr, var, lower, upper, subintervals, value))
}
