//! Data models for the atlas metadata document

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A frame's bounding rectangle within the atlas image, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rect {
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
}

/// One named sprite frame.
///
/// `frame` is read-only input; `description` is the sole field this tool
/// writes. Fields owned by other tools (`rotated`, `sourceSize`, ...) are
/// carried through `extra` untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameRecord {
    pub frame: Rect,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub description: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// The atlas metadata document: named frames in document order, plus
/// whatever other top-level fields the exporter wrote (`meta`, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AtlasDocument {
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub frames: IndexMap<String, FrameRecord>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
