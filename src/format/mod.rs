//! Rendering helpers: expression printing, number formatting, LaTeX hints.

pub mod expr;
pub mod latex;
pub mod number;

pub use expr::pretty;
pub use latex::latex_hint;
pub use number::{fixed4, format_number};
