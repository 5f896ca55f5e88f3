//! Template lookup seam and an in-memory implementation

use std::sync::Arc;

use async_trait::async_trait;
use dashmap::DashMap;

use super::types::{Template, TemplateKind, TemplateResult};

/// Read-only keyed template lookup.
///
/// Implementations must be safe to call from concurrent renders.
#[async_trait]
pub trait TemplateSource: Send + Sync {
    /// Fetch a template. `Ok(None)` means no record exists for `kind`.
    async fn get_template(&self, kind: TemplateKind) -> TemplateResult<Option<Template>>;
}

/// In-memory template storage
pub struct MemoryTemplateStore {
    templates: DashMap<TemplateKind, Template>,
}

impl Default for MemoryTemplateStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryTemplateStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            templates: DashMap::new(),
        }
    }

    /// Insert or replace the template for `kind`
    pub fn insert(&self, kind: TemplateKind, template: Template) {
        self.templates.insert(kind, template);
    }

    /// Get the number of templates
    pub fn count(&self) -> usize {
        self.templates.len()
    }
}

#[async_trait]
impl TemplateSource for MemoryTemplateStore {
    async fn get_template(&self, kind: TemplateKind) -> TemplateResult<Option<Template>> {
        Ok(self.templates.get(&kind).map(|t| t.clone()))
    }
}

/// Create an Arc-wrapped store seeded with `template` under `kind`
pub fn create_template_store(kind: TemplateKind, template: Template) -> Arc<MemoryTemplateStore> {
    let store = MemoryTemplateStore::new();
    store.insert(kind, template);
    Arc::new(store)
}
