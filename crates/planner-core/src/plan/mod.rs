//! Plan generation: prompt templating, task extraction, and the
//! generate-and-save service.

pub mod extract;
pub mod prompt;
pub mod service;

pub use extract::{ParsedTask, extract_tasks};
pub use prompt::{DEFAULT_TEMPLATE, PromptTemplate};
pub use service::{PlanService, persist_tasks};
