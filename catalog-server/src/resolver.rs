//! Slider resolver
//!
//! Turns a stored slider row (type tag + ref id + position) into the uniform
//! display shape the homepage carousel renders, by looking the referenced
//! row up in the table the tag names.
//!
//! Two call modes share one resolution step:
//! - [`SliderResolver::resolve_all`] drops entries it can't resolve
//! - [`SliderResolver::resolve_one`] reports why an entry can't be resolved

use serde::ser::{Serialize, SerializeStruct, Serializer};
use sqlx::SqlitePool;

use crate::db::repos::{DbError, EnterpriseRepo, NewsRepo, ProductRepo, SliderEntry, SliderRepo};
use crate::models::{SliderKind, SliderTarget};

/// Display projection of a slider entry
///
/// Serialized with `type` and `imageUrl` keys. News items always carry a
/// `full_text` key (possibly null); the other kinds never do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayItem {
    /// Id of the slider entry, not of the referenced row
    pub id: i64,
    pub kind: SliderKind,
    pub ref_id: i64,
    pub position: i64,
    pub title: String,
    pub image_url: String,
    pub description: Option<String>,
    /// Long-form text, news only. Falls back to `description` when empty.
    pub full_text: Option<String>,
}

impl Serialize for DisplayItem {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let news = self.kind == SliderKind::News;
        let mut state = serializer.serialize_struct("DisplayItem", if news { 8 } else { 7 })?;
        state.serialize_field("id", &self.id)?;
        state.serialize_field("type", &self.kind)?;
        state.serialize_field("ref_id", &self.ref_id)?;
        state.serialize_field("position", &self.position)?;
        state.serialize_field("title", &self.title)?;
        state.serialize_field("imageUrl", &self.image_url)?;
        state.serialize_field("description", &self.description)?;
        if news {
            state.serialize_field("full_text", &self.full_text)?;
        } else {
            state.skip_field("full_text")?;
        }
        state.end()
    }
}

/// Outcome of resolving one slider entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Resolved(DisplayItem),
    /// The stored type tag is not one of the known kinds
    InvalidType(String),
    /// The referenced row doesn't exist
    Dangling(SliderTarget),
}

/// Why a single slider lookup failed
#[derive(Debug, thiserror::Error)]
pub enum SliderLookupError {
    #[error("slider {0} not found")]
    SliderNotFound(i64),

    #[error("slider {id} has invalid type '{tag}'")]
    InvalidType { id: i64, tag: String },

    #[error("slider {id} references missing {target}")]
    ReferenceNotFound { id: i64, target: SliderTarget },

    #[error(transparent)]
    Db(#[from] DbError),
}

/// Resolves slider entries against the catalog tables
pub struct SliderResolver<'a> {
    pool: &'a SqlitePool,
}

impl<'a> SliderResolver<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Resolve one entry. Missing rows and unknown tags are outcomes, not errors;
    /// only store failures return `Err`.
    pub async fn resolve(&self, entry: &SliderEntry) -> Result<Resolution, DbError> {
        let Some(target) = entry.target() else {
            return Ok(Resolution::InvalidType(entry.kind.clone()));
        };

        let projection = match target {
            SliderTarget::Enterprise(id) => EnterpriseRepo::new(self.pool)
                .find(id)
                .await?
                .map(|e| Projection {
                    title: e.name,
                    image_url: e.image_url,
                    description: e.description,
                    full_text: None,
                }),
            SliderTarget::Product(id) => ProductRepo::new(self.pool)
                .find(id)
                .await?
                .map(|p| Projection {
                    title: p.name,
                    image_url: p.image_url,
                    description: p.description,
                    full_text: None,
                }),
            SliderTarget::News(id) => NewsRepo::new(self.pool).find(id).await?.map(|n| {
                let full_text = n
                    .full_text
                    .filter(|text| !text.is_empty())
                    .or_else(|| n.short_description.clone());
                Projection {
                    title: n.title,
                    image_url: n.image_url,
                    description: n.short_description,
                    full_text,
                }
            }),
        };

        Ok(match projection {
            Some(p) => Resolution::Resolved(DisplayItem {
                id: entry.id,
                kind: target.kind(),
                ref_id: entry.ref_id,
                position: entry.position,
                title: p.title,
                image_url: p.image_url,
                description: p.description,
                full_text: p.full_text,
            }),
            None => Resolution::Dangling(target),
        })
    }

    /// Resolve every entry, silently dropping unknown tags and dangling references.
    ///
    /// Input order is kept; entries are not sorted by `position`.
    pub async fn resolve_all(&self, entries: &[SliderEntry]) -> Result<Vec<DisplayItem>, DbError> {
        let mut items = Vec::with_capacity(entries.len());

        for entry in entries {
            match self.resolve(entry).await? {
                Resolution::Resolved(item) => items.push(item),
                Resolution::InvalidType(tag) => {
                    tracing::warn!(slider = entry.id, tag = %tag, "skipping slider with invalid type");
                }
                Resolution::Dangling(target) => {
                    tracing::debug!(slider = entry.id, %target, "skipping slider with dangling reference");
                }
            }
        }

        Ok(items)
    }

    /// Load and resolve one slider by id, distinguishing each failure.
    pub async fn resolve_one(&self, slider_id: i64) -> Result<DisplayItem, SliderLookupError> {
        let entry = SliderRepo::new(self.pool)
            .find(slider_id)
            .await?
            .ok_or(SliderLookupError::SliderNotFound(slider_id))?;

        match self.resolve(&entry).await? {
            Resolution::Resolved(item) => Ok(item),
            Resolution::InvalidType(tag) => Err(SliderLookupError::InvalidType {
                id: slider_id,
                tag,
            }),
            Resolution::Dangling(target) => Err(SliderLookupError::ReferenceNotFound {
                id: slider_id,
                target,
            }),
        }
    }
}

struct Projection {
    title: String,
    image_url: String,
    description: Option<String>,
    full_text: Option<String>,
}
