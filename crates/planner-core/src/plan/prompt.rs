//! Prompt construction from a configured template.

/// Template used when the operator does not configure one.
///
/// The output rules mirror what the extractor recognizes: numbered lines,
/// parenthesized relative deadlines, bracketed dependency references.
pub const DEFAULT_TEMPLATE: &str = "\
You are a task planner. Break the following goal into a short, ordered list \
of actionable tasks.

Goal: {goal}

Rules:
- Output one task per line, numbered like `1. <task>`.
- If a task has a relative deadline, append it in parentheses, e.g. (in 2 days).
- If a task depends on an earlier task, append the reference in square brackets, e.g. [Depends on: Task #1].
- Do not output anything besides the numbered list.
";

/// A prompt template containing a `{goal}` placeholder.
#[derive(Debug, Clone)]
pub struct PromptTemplate {
    template: String,
}

impl PromptTemplate {
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
        }
    }

    /// Substitute every literal `{goal}` occurrence with `goal`.
    ///
    /// The goal is inserted verbatim: no escaping, no length limit.
    pub fn render(&self, goal: &str) -> String {
        self.template.replace("{goal}", goal)
    }
}

impl Default for PromptTemplate {
    fn default() -> Self {
        Self::new(DEFAULT_TEMPLATE)
    }
}
