//! JSON output: one object per slide, images as resolved paths.

use crate::format::{image_path, SlideFormatter};
use crate::{Bullet, SlideId, SlideModel};
use serde::Serialize;

#[derive(Serialize)]
struct JsonSlide<'a> {
    id: SlideId,
    titles: &'a [String],
    subtitles: &'a [String],
    bullets: &'a [Bullet],
    images: Vec<JsonImage<'a>>,
    notes: Option<&'a str>,
}

#[derive(Serialize)]
struct JsonImage<'a> {
    path: String,
    source: &'a str,
    content_type: &'a str,
}

/// Formatter emitting a pretty-printed JSON object followed by a blank line.
#[derive(Debug, Clone, Default)]
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl SlideFormatter for JsonFormatter {
    fn render(&self, slide: &SlideModel, resource_path: &str) -> String {
        let doc = JsonSlide {
            id: slide.id(),
            titles: &slide.titles,
            subtitles: &slide.subtitles,
            bullets: &slide.bullets,
            images: slide
                .images
                .iter()
                .enumerate()
                .map(|(idx, image)| JsonImage {
                    path: image_path(resource_path, slide, idx, image),
                    source: &image.filename,
                    content_type: &image.content_type,
                })
                .collect(),
            notes: slide.notes.as_deref().filter(|n| !n.trim().is_empty()),
        };

        // Only strings, integers and a uuid are serialized; this cannot fail.
        let mut out = serde_json::to_string_pretty(&doc).unwrap_or_default();
        out.push_str("\n\n");
        out
    }
}
