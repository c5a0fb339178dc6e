//! Core logic for the planner: prompt construction, Gemini dispatch, and
//! line-oriented task extraction.

pub mod gemini;
pub mod plan;
