//! Configuration file parsing and rule-filter derivation

pub mod codacyrc;

pub use codacyrc::{CodacyConfig, PatternRef, ToolConfig, TOOL_NAME};
