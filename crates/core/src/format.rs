//! The formatter contract and the naming rule shared with output writers.

use crate::{ImageResource, SlideModel};
use std::path::Path;

/// Renders one slide into a text markup.
///
/// Implementations are pure: the same slide and prefix always render to the
/// same string.
pub trait SlideFormatter {
    /// Render `slide`, referencing external resources under `resource_path`.
    fn render(&self, slide: &SlideModel, resource_path: &str) -> String;
}

/// File extension for an image MIME type.
///
/// Falls back to the extension of the original resource name, then `bin`.
pub fn image_extension(image: &ImageResource) -> String {
    let known = match image.content_type.to_ascii_lowercase().as_str() {
        "image/png" => Some("png"),
        "image/jpeg" | "image/jpg" | "image/pjpeg" => Some("jpg"),
        "image/gif" => Some("gif"),
        "image/bmp" | "image/x-bmp" => Some("bmp"),
        "image/tiff" => Some("tiff"),
        "image/svg+xml" => Some("svg"),
        "image/webp" => Some("webp"),
        "image/x-emf" | "image/emf" => Some("emf"),
        "image/x-wmf" | "image/wmf" => Some("wmf"),
        "image/x-icon" | "image/vnd.microsoft.icon" => Some("ico"),
        _ => None,
    };

    if let Some(ext) = known {
        return ext.to_string();
    }

    Path::new(&image.filename)
        .extension()
        .and_then(|e| e.to_str())
        .filter(|e| !e.is_empty())
        .map(str::to_ascii_lowercase)
        .unwrap_or_else(|| "bin".to_string())
}

/// Name of the file holding `slide.images[index]`: `{id}-img{index+1}.{ext}`.
///
/// Markup references and written files both go through here.
pub fn image_file_name(slide: &SlideModel, index: usize, image: &ImageResource) -> String {
    format!("{}-img{}.{}", slide.id(), index + 1, image_extension(image))
}

/// Path of an image as referenced from markup.
pub fn image_path(resource_path: &str, slide: &SlideModel, index: usize, image: &ImageResource) -> String {
    let file = image_file_name(slide, index, image);
    let prefix = resource_path.trim_end_matches('/');
    if prefix.is_empty() {
        file
    } else {
        format!("{}/{}", prefix, file)
    }
}

/// Render every slide, keeping slide order.
pub fn render_slides<'a, F>(
    formatter: &F,
    slides: &'a [SlideModel],
    resource_path: &str,
) -> Vec<(&'a SlideModel, String)>
where
    F: SlideFormatter + ?Sized,
{
    slides
        .iter()
        .map(|slide| (slide, formatter.render(slide, resource_path)))
        .collect()
}
