//! Invocation source adapters

mod jsonl;

pub use jsonl::JsonlInvocationSource;
