use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::guid::{format_guid, parse_guid};

/// Value of the `type` field for free-form layouts.
pub const CANVAS_TYPE: &str = "canvas";

#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    #[error("malformed layout document: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid layout uuid: {0}")]
    InvalidGuid(String),
    #[error("unsupported layout type: {0}")]
    UnsupportedType(String),
}

/// A single persisted layout, exactly as the tiling engine reads it.
///
/// Every struct in this module uses kebab-case keys, so `ref_width` is
/// written as `ref-width` and so on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct LayoutDocument {
    pub uuid: String,
    pub name: String,
    pub r#type: String,
    pub info: CanvasInfo,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct CanvasInfo {
    pub ref_width: i32,
    pub ref_height: i32,
    /// Zero when the designed-for screen is unknown.
    #[serde(default)]
    pub screen_width: i32,
    #[serde(default)]
    pub screen_height: i32,
    pub zones: Vec<ZoneGeometry>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ZoneGeometry {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl LayoutDocument {
    pub fn canvas(id: &Uuid, name: impl Into<String>, info: CanvasInfo) -> Self {
        Self {
            uuid: format_guid(id),
            name: name.into(),
            r#type: CANVAS_TYPE.to_string(),
            info,
        }
    }

    /// Parses and validates a document. Only canvas layouts with a braced
    /// GUID are accepted.
    pub fn from_json(s: &str) -> Result<Self, SchemaError> {
        let doc: LayoutDocument = serde_json::from_str(s)?;
        doc.id()?;
        if doc.r#type != CANVAS_TYPE {
            return Err(SchemaError::UnsupportedType(doc.r#type));
        }
        Ok(doc)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn id(&self) -> Result<Uuid, SchemaError> {
        parse_guid(&self.uuid).ok_or_else(|| SchemaError::InvalidGuid(self.uuid.clone()))
    }
}

impl CanvasInfo {
    /// The designed-for screen size, if both dimensions are known.
    pub fn screen_size(&self) -> Option<(i32, i32)> {
        if self.screen_width > 0 && self.screen_height > 0 {
            Some((self.screen_width, self.screen_height))
        } else {
            None
        }
    }

    /// The engine refuses to apply a layout containing any negative
    /// coordinate or extent.
    pub fn has_negative_geometry(&self) -> bool {
        self.zones
            .iter()
            .any(|z| z.x < 0 || z.y < 0 || z.width < 0 || z.height < 0)
    }
}
