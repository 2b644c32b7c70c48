use crate::answer::Answer;
use crate::error::{EngineError, Result};

struct TrigRule {
    pattern: &'static str,
    value: &'static str,
    latex: &'static str,
}

// Matched by substring containment, in this order. Written for `x`; the
// variable is substituted at lookup time.
const TRIG_RULES: [TrigRule; 5] = [
    TrigRule {
        pattern: "sin(x)",
        value: "-cos(x) + C",
        latex: "-\\cos(x) + C",
    },
    TrigRule {
        pattern: "cos(x)",
        value: "sin(x) + C",
        latex: "\\sin(x) + C",
    },
    TrigRule {
        pattern: "tan(x)",
        value: "-ln(abs(cos(x))) + C",
        latex: "-\\ln|\\cos(x)| + C",
    },
    TrigRule {
        pattern: "sec(x)^2",
        value: "tan(x) + C",
        latex: "\\tan(x) + C",
    },
    TrigRule {
        pattern: "csc(x)^2",
        value: "-cot(x) + C",
        latex: "-\\cot(x) + C",
    },
];

/// Table lookup on the literal text. `sin(x)*2` matches the `sin(x)` entry;
/// `sin(2*x)` matches nothing.
pub fn integrate_trig(expr: &str, var: &str) -> Result<Answer> {
    let bind = |text: &str| text.replace("(x)", &format!("({var})"));

    TRIG_RULES
        .iter()
        .find(|rule| expr.contains(&bind(rule.pattern)))
        .map(|rule| {
            let value = bind(rule.value);
            let step = format!("∫ {} d{var} = {value}", bind(rule.pattern));
            Answer::exact(value, vec![step]).with_latex(bind(rule.latex))
        })
        .ok_or_else(|| {
            EngineError::unsupported(format!(
                "`{expr}` is not one of sin, cos, tan, sec^2 or csc^2 of {var}"
            ))
        })
}
