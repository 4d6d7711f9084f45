use std::{collections::HashMap, sync::Arc};

use gloam_util::resource_location::ResourceLocation;

use super::{TemplateError, template::Template};

/// Supplies immutable templates by name.
pub trait TemplateStore {
    fn get_template(&self, name: &ResourceLocation) -> Option<Arc<Template>>;

    fn require_template(&self, name: &ResourceLocation) -> Result<Arc<Template>, TemplateError> {
        self.get_template(name)
            .ok_or_else(|| TemplateError::Missing(name.clone()))
    }
}

/// In-memory template store.
#[derive(Default)]
pub struct TemplateManager {
    templates: HashMap<ResourceLocation, Arc<Template>>,
}

impl TemplateManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces a template, returning the previous one.
    pub fn register(&mut self, name: ResourceLocation, template: Template) -> Option<Arc<Template>> {
        self.templates.insert(name, Arc::new(template))
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

impl TemplateStore for TemplateManager {
    fn get_template(&self, name: &ResourceLocation) -> Option<Arc<Template>> {
        self.templates.get(name).cloned()
    }
}
