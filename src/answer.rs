use serde::Serialize;

/// How a successful [`Answer`] should be read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum AnswerKind {
    /// Closed-form result.
    Exact,
    /// Numeric result from sampling or quadrature.
    Approximation,
    /// A transformed problem rather than its value (one L'Hôpital step).
    Rewritten,
    /// Simplified `lhs - rhs`; the equation was not solved.
    Residual,
    /// Input returned as is.
    Unchanged,
    /// A quadratic with negative discriminant.
    NoRealSolution,
}

/// Result of a successful engine operation. `steps` is never empty.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Answer {
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latex_hint: Option<String>,
    pub steps: Vec<String>,
    pub kind: AnswerKind,
}

impl Answer {
    pub fn new(kind: AnswerKind, value: impl Into<String>, steps: Vec<String>) -> Self {
        let value = value.into();
        let steps = if steps.is_empty() {
            vec![value.clone()]
        } else {
            steps
        };
        Answer {
            value,
            latex_hint: None,
            steps,
            kind,
        }
    }

    pub fn exact(value: impl Into<String>, steps: Vec<String>) -> Self {
        Answer::new(AnswerKind::Exact, value, steps)
    }

    pub fn with_latex(mut self, latex: impl Into<String>) -> Self {
        self.latex_hint = Some(latex.into());
        self
    }

    pub fn is_exact(&self) -> bool {
        self.kind == AnswerKind::Exact
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn steps_are_never_empty() {
        let answer = Answer::exact("x = 2", Vec::new());
        assert_eq!(answer.steps, vec!["x = 2".to_string()]);
    }

    #[test]
    fn serializes_with_camel_case_fields() {
        let answer = Answer::exact("e^x + C", vec!["rule".into()]).with_latex("e^{x} + C");
        let json = serde_json::to_value(&answer).expect("serialize");
        assert_eq!(json["latexHint"], "e^{x} + C");
        assert_eq!(json["kind"], "exact");
    }
}
