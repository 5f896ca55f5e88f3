//! Stored notification templates.
//!
//! This module provides:
//! - `Template`, the stored text fragments plus a markup skeleton
//! - `TemplateSource`, the read-only lookup seam, and `MemoryTemplateStore`
//! - `TokenSet`, literal placeholder substitution (no expressions, no loops)

mod store;
pub mod substitution;
mod types;

pub use store::{create_template_store, MemoryTemplateStore, TemplateSource};
pub use substitution::TokenSet;
pub use types::{Template, TemplateError, TemplateKind, TemplateResult, ATTENDANCE_MARKUP};
