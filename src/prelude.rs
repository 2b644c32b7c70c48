//! Everything needed to drive the engine from text.

pub use crate::answer::{Answer, AnswerKind};
pub use crate::command::Command;
pub use crate::config::EngineConfig;
pub use crate::engine::Engine;
pub use crate::error::{EngineError, ErrorKind};
