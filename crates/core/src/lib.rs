//! Core slide model, shape classification, extraction and formatting
//! for presentation-to-Markdown conversion.

pub mod classify;
pub mod error;
pub mod extract;
pub mod format;
pub mod json;
pub mod normalize;
pub mod reveal;
pub mod shape;
pub mod types;

pub use classify::{classify, ShapeRole};
pub use error::{Error, Result};
pub use extract::{DocumentExtractor, MalformedShapePolicy, ResourceProvider, SlideExtractor};
pub use format::{image_file_name, render_slides, SlideFormatter};
pub use json::JsonFormatter;
pub use normalize::{normalize_slide, normalize_slides};
pub use reveal::RevealMarkdownFormatter;
pub use shape::{Paragraph, PictureShape, PlaceholderRole, Shape, ShapeTree, TextBody, TextShape};
pub use types::{Bullet, ImageResource, SlideId, SlideModel};
