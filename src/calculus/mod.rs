//! Calculus routines (differentiation, integration and limits).

pub mod differentiate;
pub mod integrate;
pub mod limit;

pub use differentiate::differentiate;
pub use integrate::{classify, integrate, integrate_numeric, simpson, RuleFamily};
pub use limit::{evaluate_limit, Approach};
