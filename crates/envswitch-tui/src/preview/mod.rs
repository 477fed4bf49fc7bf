//! Read-only preview of environment files.
//!
//! Lines are classified as comments, blanks or `KEY=value` pairs so the
//! renderer can colour them, and only the visible window is materialized.

mod content;

pub use content::{PreviewError, PreviewLine, PreviewLoader, PreviewWindow};
