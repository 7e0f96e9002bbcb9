//! reveal.js Markdown output.
//!
//! Titles begin with `#`, subtitles with `##`. Bullets begin with `*` and are
//! indented two spaces per level. Notes are prefixed by `Notes:`. Each slide
//! ends with three newlines so concatenated slides stay separated.

use crate::format::{image_path, SlideFormatter};
use crate::SlideModel;
use std::fmt::Write;

/// Marker literal that introduces speaker notes.
pub const NOTES_MARKER: &str = "Notes:";

/// Formatter for reveal.js-flavoured Markdown.
#[derive(Debug, Clone)]
pub struct RevealMarkdownFormatter {
    /// Spaces per bullet level.
    indent_width: usize,
}

impl Default for RevealMarkdownFormatter {
    fn default() -> Self {
        Self { indent_width: 2 }
    }
}

impl RevealMarkdownFormatter {
    /// Create a formatter with the default two-space bullet indent.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a formatter with a custom bullet indent.
    pub fn with_indent_width(mut self, width: usize) -> Self {
        self.indent_width = width;
        self
    }
}

impl SlideFormatter for RevealMarkdownFormatter {
    /// # Example output
    /// ```text
    /// # Intro
    ///
    /// * Point A
    ///   * Sub point
    ///
    /// ![Image](./img/<id>-img1.png)
    ///
    /// Notes: Say hello
    /// ```
    fn render(&self, slide: &SlideModel, resource_path: &str) -> String {
        let mut out = String::new();

        for title in &slide.titles {
            let _ = writeln!(out, "# {}", title);
        }

        for subtitle in &slide.subtitles {
            let _ = writeln!(out, "## {}", subtitle);
        }

        if !slide.bullets.is_empty() {
            out.push('\n');
        }
        for bullet in &slide.bullets {
            let indent = " ".repeat(bullet.level as usize * self.indent_width);
            let _ = writeln!(out, "{}* {}", indent, bullet.text);
        }

        if !slide.images.is_empty() {
            out.push('\n');
        }
        for (idx, image) in slide.images.iter().enumerate() {
            let _ = writeln!(out, "![Image]({})", image_path(resource_path, slide, idx, image));
        }

        if let Some(notes) = slide.notes.as_deref().filter(|n| !n.trim().is_empty()) {
            out.push('\n');
            let _ = writeln!(out, "{} {}", NOTES_MARKER, notes);
        }

        out.push_str("\n\n\n");
        out
    }
}
