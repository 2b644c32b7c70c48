//! Public operations. Every operation takes raw text, normalizes it, routes
//! it to a rule and returns an [`Answer`] or an [`EngineError`].

use tracing::debug;

use crate::answer::{Answer, AnswerKind};
use crate::calculus;
use crate::cas::{Cas, SymbolicCas};
use crate::command::Command;
use crate::config::EngineConfig;
use crate::error::{EngineError, Result};
use crate::factor;
use crate::format::latex_hint;
use crate::solver;
use crate::term::{normalize, NormalizedExpression};

/// Rule engine over an algebra backend `C`.
///
/// Holds no per-call state; one engine can serve any number of requests.
#[derive(Debug, Clone)]
pub struct Engine<C: Cas = SymbolicCas> {
    cas: C,
    config: EngineConfig,
}

impl Engine {
    pub fn new() -> Self {
        Engine {
            cas: SymbolicCas,
            config: EngineConfig::default(),
        }
    }

    pub fn with_config(config: EngineConfig) -> Result<Self> {
        Engine::with_cas(SymbolicCas, config)
    }
}

impl Default for Engine {
    fn default() -> Self {
        Engine::new()
    }
}

impl<C: Cas> Engine<C> {
    pub fn with_cas(cas: C, config: EngineConfig) -> Result<Self> {
        config.validate()?;
        Ok(Engine { cas, config })
    }

    pub fn cas(&self) -> &C {
        &self.cas
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn integrate(&self, expr: &str) -> Result<Answer> {
        self.integrate_in(expr, &self.config.variable)
    }

    /// Antiderivative by closed-form rule; otherwise the definite integral
    /// over the configured interval, as an approximation.
    pub fn integrate_in(&self, expr: &str, var: &str) -> Result<Answer> {
        let result = self.prepare(expr, var).and_then(|(expr, var)| {
            calculus::integrate(&self.cas, &expr, &var, &self.config.quadrature)
        });
        traced("integrate", expr, result)
    }

    pub fn integrate_numeric(&self, expr: &str, lower: f64, upper: f64) -> Result<Answer> {
        self.integrate_numeric_in(expr, &self.config.variable, lower, upper)
    }

    pub fn integrate_numeric_in(&self, expr: &str, var: &str, lower: f64, upper: f64) -> Result<Answer> {
        let result = self.prepare(expr, var).and_then(|(expr, var)| {
            if !lower.is_finite() || !upper.is_finite() {
                return Err(EngineError::format(format!(
                    "integration bounds must be finite, got [{lower}, {upper}]"
                )));
            }
            calculus::integrate_numeric(
                &self.cas,
                &expr,
                &var,
                lower,
                upper,
                self.config.quadrature.subintervals,
            )
        });
        traced("integrate_numeric", expr, result)
    }

    pub fn differentiate(&self, expr: &str) -> Result<Answer> {
        self.differentiate_in(expr, &self.config.variable)
    }

    pub fn differentiate_in(&self, expr: &str, var: &str) -> Result<Answer> {
        let result = self.prepare(expr, var).and_then(|(expr, var)| {
            let parsed = self.cas.parse(&expr)?;
            let value = self.cas.render(&self.cas.differentiate(&parsed, &var)?);
            let steps = vec![
                format!("Start: d/d{var} ({expr})"),
                "Applied differentiation rules".to_string(),
                format!("Result: {value}"),
            ];
            Ok(Answer::exact(value.clone(), steps).with_latex(latex_hint(&value)))
        });
        traced("differentiate", expr, result)
    }

    pub fn evaluate_limit(&self, expr: &str, var: &str, approach: &str) -> Result<Answer> {
        let result = self.prepare(expr, var).and_then(|(expr, var)| {
            calculus::evaluate_limit(&self.cas, &expr, &var, approach, &self.config.limit)
        });
        traced("limit", expr, result)
    }

    pub fn solve_equation(&self, equation: &str) -> Result<Answer> {
        self.solve_equation_in(equation, &self.config.variable)
    }

    pub fn solve_equation_in(&self, equation: &str, var: &str) -> Result<Answer> {
        let result = self
            .prepare(equation, var)
            .and_then(|(equation, var)| solver::solve_equation(&self.cas, &equation, &var));
        traced("solve", equation, result)
    }

    pub fn simplify(&self, expr: &str) -> Result<Answer> {
        let result = non_empty(expr).and_then(|expr| {
            let parsed = self.cas.parse(&expr)?;
            let value = self.cas.render(&self.cas.simplify(&parsed)?);
            let steps = vec![format!("Simplified: {expr} = {value}")];
            Ok(Answer::exact(value.clone(), steps).with_latex(latex_hint(&value)))
        });
        traced("simplify", expr, result)
    }

    pub fn factor(&self, expr: &str) -> Result<Answer> {
        self.factor_in(expr, &self.config.variable)
    }

    pub fn factor_in(&self, expr: &str, var: &str) -> Result<Answer> {
        let result = self
            .prepare(expr, var)
            .and_then(|(_, var)| factor::factor(expr, &var));
        traced("factor", expr, result)
    }

    pub fn expand(&self, expr: &str) -> Result<Answer> {
        self.expand_in(expr, &self.config.variable)
    }

    pub fn expand_in(&self, expr: &str, var: &str) -> Result<Answer> {
        let result = self
            .prepare(expr, var)
            .and_then(|(_, var)| factor::expand(expr, &var));
        traced("expand", expr, result)
    }

    pub fn run(&self, command: &Command) -> Result<Answer> {
        match command {
            Command::Integrate(expr) => self.integrate(expr),
            Command::Differentiate(expr) => self.differentiate(expr),
            Command::Limit {
                expression,
                variable,
                approach,
            } => self.evaluate_limit(expression, variable, approach),
            Command::Solve(equation) => self.solve_equation(equation),
            Command::Simplify(expr) => self.simplify(expr),
            Command::Factor(expr) => self.factor(expr),
            Command::Expand(expr) => self.expand(expr),
        }
    }

    fn prepare(&self, expr: &str, var: &str) -> Result<(NormalizedExpression, String)> {
        let expr = non_empty(expr)?;
        let var = normalize(var).into_string();
        if var.is_empty() || !var.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(EngineError::format(format!(
                "`{var}` is not a variable name"
            )));
        }
        Ok((expr, var))
    }
}

fn non_empty(expr: &str) -> Result<NormalizedExpression> {
    let normalized = normalize(expr);
    if normalized.is_empty() {
        Err(EngineError::format("enter an expression, for example `x^2`"))
    } else {
        Ok(normalized)
    }
}

fn traced(op: &'static str, input: &str, result: Result<Answer>) -> Result<Answer> {
    match &result {
        Ok(answer) if answer.kind == AnswerKind::Exact => {
            debug!(op, input, value = %answer.value, "solved")
        }
        Ok(answer) => debug!(op, input, kind = ?answer.kind, value = %answer.value, "answered"),
        Err(err) => debug!(op, input, error = %err, "failed"),
    }
    result
}
