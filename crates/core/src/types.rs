//! Domain types for representing extracted slide content.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Process-unique slide identifier.
///
/// Image resource file names are derived from it, so two slides of one run
/// never share an id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SlideId(Uuid);

impl SlideId {
    /// Generate a fresh random identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SlideId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SlideId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0.hyphenated(), f)
    }
}

/// One bullet in a bulleted list. `level` is the declared nesting depth.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bullet {
    pub text: String,
    pub level: u32,
}

impl Bullet {
    pub fn new(text: impl Into<String>, level: u32) -> Self {
        Self {
            text: text.into(),
            level,
        }
    }
}

/// An embedded image resolved from the package.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageResource {
    /// Original resource name inside the package (e.g. `/ppt/media/image1.png`).
    pub filename: String,

    /// Declared MIME type.
    pub content_type: String,

    /// Raw bytes as stored in the package.
    #[serde(skip)]
    pub data: Vec<u8>,
}

impl ImageResource {
    pub fn new(
        filename: impl Into<String>,
        content_type: impl Into<String>,
        data: impl Into<Vec<u8>>,
    ) -> Self {
        Self {
            filename: filename.into(),
            content_type: content_type.into(),
            data: data.into(),
        }
    }
}

/// A single slide, in a format-agnostic shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlideModel {
    id: SlideId,

    /// Title texts, normally zero or one.
    pub titles: Vec<String>,

    /// Subtitle texts.
    pub subtitles: Vec<String>,

    /// Bullets in shape-then-paragraph document order. Never re-sorted.
    pub bullets: Vec<Bullet>,

    /// Embedded images in document order.
    pub images: Vec<ImageResource>,

    /// Speaker notes, if the slide has a notes body.
    pub notes: Option<String>,
}

impl SlideModel {
    /// Create an empty slide with a freshly assigned id.
    pub fn new() -> Self {
        Self::with_id(SlideId::new())
    }

    /// Create an empty slide with a caller-chosen id.
    pub fn with_id(id: SlideId) -> Self {
        Self {
            id,
            titles: Vec::new(),
            subtitles: Vec::new(),
            bullets: Vec::new(),
            images: Vec::new(),
            notes: None,
        }
    }

    pub fn id(&self) -> SlideId {
        self.id
    }

    /// True when the slide carries nothing a formatter would print.
    pub fn is_empty(&self) -> bool {
        self.titles.is_empty()
            && self.subtitles.is_empty()
            && self.bullets.is_empty()
            && self.images.is_empty()
            && self.notes.as_deref().map_or(true, |n| n.trim().is_empty())
    }
}

impl Default for SlideModel {
    fn default() -> Self {
        Self::new()
    }
}
