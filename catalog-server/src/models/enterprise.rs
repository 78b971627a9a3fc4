//! Enterprise payload validation

use serde::Deserialize;

use super::validation::{Required, ValidationError};

/// Enterprise request body (create and full replace)
#[derive(Debug, Default, Deserialize)]
pub struct EnterprisePayload {
    pub name: Option<String>,
    pub image_url: Option<String>,
    pub description: Option<String>,
    pub slug: Option<String>,
}

/// Validated enterprise fields, ready for the store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnterpriseFields {
    pub name: String,
    pub image_url: String,
    pub description: Option<String>,
    pub slug: String,
}

impl EnterprisePayload {
    /// Check that `name`, `image_url` and `slug` are present and non-empty.
    pub fn validate(self) -> Result<EnterpriseFields, ValidationError> {
        let mut required = Required::new();
        let name = required.text("name", self.name);
        let image_url = required.text("image_url", self.image_url);
        let slug = required.text("slug", self.slug);
        required.finish()?;

        Ok(EnterpriseFields {
            name,
            image_url,
            description: self.description,
            slug,
        })
    }
}

impl EnterpriseFields {
    /// New enterprises store an omitted description as an empty string.
    pub fn with_default_description(mut self) -> Self {
        self.description.get_or_insert_with(String::new);
        self
    }
}
