//! Rule-based symbolic and numeric math engine: integration, differentiation,
//! limits, equation solving, simplification, factoring and expansion of
//! single-variable expressions given as text.

pub mod answer;
pub mod calculus;
pub mod cas;
pub mod command;
pub mod config;
pub mod engine;
pub mod error;
pub mod eval;
pub mod expr;
pub mod factor;
pub mod format;
pub mod parser;
pub mod prelude;
pub mod simplify;
pub mod solver;
pub mod term;

pub use answer::{Answer, AnswerKind};
pub use calculus::{differentiate, Approach, RuleFamily};
pub use cas::{Bindings, Cas, SymbolicCas};
pub use command::Command;
pub use config::{ConfigError, EngineConfig, LimitConfig, QuadratureConfig};
pub use engine::Engine;
pub use error::{CasError, EngineError, ErrorKind, Result};
pub use expr::{add, div, mul, neg, one, pow, rational, sub, zero, Expr, Rational};
pub use format::{latex_hint, pretty};
pub use parser::parse_expr;
pub use simplify::{simplify, simplify_fully, simplify_with_limit};
pub use term::{normalize, NormalizedExpression, Term, TermShape};
