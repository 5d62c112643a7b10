//! Output serialization (newline-delimited JSON)

pub mod jsonl;

pub use jsonl::to_jsonl;
