//! Line-oriented extraction of task records from generated plan text.
//!
//! The model is asked for a numbered list; anything that is not a numbered
//! line (headers, commentary, blank lines) is skipped without error. Each
//! recognized line may carry a parenthesized relative deadline and a
//! bracketed dependency reference, both of which are stripped out of the
//! description and recorded separately.

use std::sync::OnceLock;

use regex::Regex;

/// A task line: a leading integer, a period, optional whitespace, then a
/// non-empty remainder.
fn task_line_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\d+\.\s*(.+)").expect("valid task line regex"))
}

/// A relative deadline: `(in N hours|days|weeks|months)`, case-sensitive,
/// singular or plural unit. The capture excludes the parentheses.
fn deadline_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"\((in \d+ (?:hour|day|week|month)s?)\)").expect("valid deadline regex")
    })
}

/// A dependency reference, stored verbatim with its brackets.
fn dependency_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\[Depends on: .*?\]").expect("valid dependency regex"))
}

/// Removal pattern for dependency references: consumes leading whitespace
/// and applies globally, unlike the capture above.
fn dependency_strip_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\s*\[Depends on: .*?\]").expect("valid dependency strip regex"))
}

/// One task recognized in the generated text. Pure data, not yet persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedTask {
    pub goal: String,
    pub description: String,
    /// Inner deadline phrase without parentheses, e.g. `in 2 days`.
    pub deadline: Option<String>,
    /// Full bracketed phrase, e.g. `[Depends on: Task #1]`.
    pub dependencies: Option<String>,
}

/// Extract task records from `raw_text`, preserving line order.
///
/// Pure function: no I/O, no side effects. Lines that do not look like
/// numbered tasks are silently ignored; a task line without annotations
/// yields a record with both optional fields absent. Never fails.
pub fn extract_tasks(raw_text: &str, goal: &str) -> Vec<ParsedTask> {
    let mut tasks = Vec::new();

    for line in raw_text.split('\n') {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let Some(caps) = task_line_re().captures(line) else {
            continue;
        };
        let mut text = caps[1].to_owned();

        let mut deadline = None;
        if let Some(caps) = deadline_re().captures(&text) {
            let phrase = caps[1].to_owned();
            // Exact substring removal of the first occurrence only. If the
            // identical parenthesized phrase appears twice in one line, the
            // second occurrence survives.
            text = text
                .replacen(&format!("({phrase})"), "", 1)
                .trim()
                .to_owned();
            deadline = Some(phrase);
        }

        let mut dependencies = None;
        if let Some(found) = dependency_re().find(&text) {
            dependencies = Some(found.as_str().to_owned());
            // Global removal with leading whitespace consumed. This can
            // strip a differently-spaced duplicate than the one stored
            // above.
            text = dependency_strip_re()
                .replace_all(&text, "")
                .trim()
                .to_owned();
        }

        tasks.push(ParsedTask {
            goal: goal.to_owned(),
            description: text,
            deadline,
            dependencies,
        });
    }

    tasks
}
