//! LexBrief - legal document summarization and analysis service.
//!
//! Normalizes uploaded documents (txt/pdf/docx) or pasted text into plain
//! text, routes it through task-specific prompt templates to the Gemini
//! generation API, and serves the shaped results over a small JSON API.

pub mod config;
pub mod contacts;
pub mod extract;
pub mod llm;
pub mod report;
pub mod server;
pub mod tasks;
