//! Slider kinds and references
//!
//! A slider entry points at one row of one of three catalog tables. The
//! table is named by a text tag stored next to the row id; tags are matched
//! exactly (no case folding), since the stored value is what consumers see.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::validation::{lenient_integer, Required, ValidationError};

/// Catalog table a slider entry may point at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SliderKind {
    Enterprise,
    Product,
    News,
}

impl SliderKind {
    /// Parse a stored or submitted type tag.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "enterprise" => Some(Self::Enterprise),
            "product" => Some(Self::Product),
            "news" => Some(Self::News),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Enterprise => "enterprise",
            Self::Product => "product",
            Self::News => "news",
        }
    }
}

impl fmt::Display for SliderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A typed reference into one catalog table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SliderTarget {
    Enterprise(i64),
    Product(i64),
    News(i64),
}

impl SliderTarget {
    pub fn new(kind: SliderKind, ref_id: i64) -> Self {
        match kind {
            SliderKind::Enterprise => Self::Enterprise(ref_id),
            SliderKind::Product => Self::Product(ref_id),
            SliderKind::News => Self::News(ref_id),
        }
    }

    pub fn kind(&self) -> SliderKind {
        match self {
            Self::Enterprise(_) => SliderKind::Enterprise,
            Self::Product(_) => SliderKind::Product,
            Self::News(_) => SliderKind::News,
        }
    }

    pub fn ref_id(&self) -> i64 {
        match *self {
            Self::Enterprise(id) | Self::Product(id) | Self::News(id) => id,
        }
    }
}

impl fmt::Display for SliderTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.kind(), self.ref_id())
    }
}

/// Slider request body (create and full replace)
#[derive(Debug, Default, Deserialize)]
pub struct SliderPayload {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    #[serde(default, deserialize_with = "lenient_integer")]
    pub ref_id: Option<i64>,
    #[serde(default, deserialize_with = "lenient_integer")]
    pub position: Option<i64>,
}

/// Validated slider fields, ready for the store
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SliderFields {
    pub kind: SliderKind,
    pub ref_id: i64,
    pub position: i64,
}

impl SliderPayload {
    /// Require all three fields and a known type tag.
    ///
    /// The referenced row is not checked; a slider may be created ahead of
    /// the item it points at.
    pub fn validate(self) -> Result<SliderFields, ValidationError> {
        let mut required = Required::new();
        let tag = required.text("type", self.kind);
        let ref_id = required.integer("ref_id", self.ref_id);
        let position = required.integer("position", self.position);
        required.finish()?;

        let kind = SliderKind::from_tag(&tag).ok_or(ValidationError::InvalidVariant {
            field: "type",
            value: tag,
        })?;

        Ok(SliderFields {
            kind,
            ref_id,
            position,
        })
    }
}
