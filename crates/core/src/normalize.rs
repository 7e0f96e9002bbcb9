//! Blank-content scrubbing between extraction and formatting.
//!
//! Layouts often leave empty placeholder boxes on a slide. They are removed
//! here, once, so extraction stays free of output concerns.

use crate::SlideModel;

fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}

/// Remove blank titles, subtitles and bullets from one slide.
pub fn normalize_slide(slide: &mut SlideModel) {
    slide.titles.retain(|t| !is_blank(t));
    slide.subtitles.retain(|t| !is_blank(t));
    slide.bullets.retain(|b| !is_blank(&b.text));
}

/// Remove blank titles, subtitles and bullets from every slide, in place.
pub fn normalize_slides(slides: &mut [SlideModel]) {
    for slide in slides.iter_mut() {
        normalize_slide(slide);
    }
}
