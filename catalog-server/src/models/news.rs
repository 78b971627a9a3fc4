//! News payload validation

use serde::Deserialize;

use super::validation::{Required, ValidationError};

/// News request body (create and full replace)
#[derive(Debug, Default, Deserialize)]
pub struct NewsPayload {
    pub title: Option<String>,
    pub image_url: Option<String>,
    pub short_description: Option<String>,
    pub full_text: Option<String>,
    pub slug: Option<String>,
}

/// Validated news fields, ready for the store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewsFields {
    pub title: String,
    pub image_url: String,
    pub short_description: Option<String>,
    pub full_text: Option<String>,
    pub slug: String,
}

impl NewsPayload {
    pub fn validate(self) -> Result<NewsFields, ValidationError> {
        let mut required = Required::new();
        let title = required.text("title", self.title);
        let image_url = required.text("image_url", self.image_url);
        let slug = required.text("slug", self.slug);
        required.finish()?;

        Ok(NewsFields {
            title,
            image_url,
            short_description: self.short_description,
            full_text: self.full_text,
            slug,
        })
    }
}
