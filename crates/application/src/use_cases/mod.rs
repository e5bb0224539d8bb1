//! Application use cases (business logic orchestration).

mod collect_snippets;

pub use collect_snippets::*;
