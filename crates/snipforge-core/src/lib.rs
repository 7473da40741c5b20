//! Snipforge Core - prompt snippet kernel
//!
//! This crate provides the foundational data structures and algorithms for
//! Snipforge, including:
//! - Snippet, ComposedPrompt and GenerationSession models
//! - The template engine: reference extraction, validation, recursive
//!   depth-guarded rendering, and a visited-set dependency walk
//! - The hierarchy scorer: prefix similarity over underscore-delimited
//!   snippet names, grouping and ancestor utilities
//! - Rubric text cleanup and structure heuristics
//!
//! The kernel is pure and synchronous; persistence and transport live in the
//! sibling crates and reach the kernel through the [`SnippetSource`] seam.

pub mod errors;
pub mod hierarchy;
pub mod logging;
pub mod model;
pub mod rubric;
pub mod source;
pub mod template;

// Re-export commonly used types
pub use errors::{Result, SnipError};
pub use model::{ComposedPrompt, GenerationSession, SessionStatus, Snippet};
pub use source::{MemorySource, SnippetSource};
pub use template::{RenderOutcome, ValidationReport, DEFAULT_MAX_DEPTH};
