use gloam_util::resource_location::ResourceLocation;
use thiserror::Error;

pub mod manager;
pub mod processor;
pub mod template;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TemplateError {
    #[error("missing structure template {0}")]
    Missing(ResourceLocation),
}
