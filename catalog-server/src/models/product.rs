//! Product payload validation
//!
//! Nutrition and packaging fields are free text. Clients frequently send
//! them as JSON numbers, so they are accepted either way and kept as text.
//! `enterprise_id` likewise accepts its decimal string form.

use serde::Deserialize;

use super::validation::{lenient_integer, lenient_text, non_empty, Required, ValidationError};

/// Product request body (create and full replace)
#[derive(Debug, Default, Deserialize)]
pub struct ProductPayload {
    pub name: Option<String>,
    pub image_url: Option<String>,
    pub slug: Option<String>,
    #[serde(default, deserialize_with = "lenient_integer")]
    pub enterprise_id: Option<i64>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub manufacturer: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub shelf_life: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub proteins: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub fats: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub carbs: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub weight: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub storage: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub energy: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub description: Option<String>,
}

/// Validated product fields, ready for the store
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductFields {
    pub name: String,
    pub image_url: String,
    pub slug: String,
    pub enterprise_id: Option<i64>,
    pub manufacturer: Option<String>,
    pub shelf_life: Option<String>,
    pub proteins: Option<String>,
    pub fats: Option<String>,
    pub carbs: Option<String>,
    pub weight: Option<String>,
    pub storage: Option<String>,
    pub energy: Option<String>,
    pub description: Option<String>,
}

impl ProductPayload {
    /// Check required fields and normalize the optional ones.
    ///
    /// Empty optional strings and a zero `enterprise_id` are stored as null.
    pub fn validate(self) -> Result<ProductFields, ValidationError> {
        let mut required = Required::new();
        let name = required.text("name", self.name);
        let image_url = required.text("image_url", self.image_url);
        let slug = required.text("slug", self.slug);
        required.finish()?;

        Ok(ProductFields {
            name,
            image_url,
            slug,
            enterprise_id: self.enterprise_id.filter(|id| *id != 0),
            manufacturer: non_empty(self.manufacturer),
            shelf_life: non_empty(self.shelf_life),
            proteins: non_empty(self.proteins),
            fats: non_empty(self.fats),
            carbs: non_empty(self.carbs),
            weight: non_empty(self.weight),
            storage: non_empty(self.storage),
            energy: non_empty(self.energy),
            description: non_empty(self.description),
        })
    }
}
