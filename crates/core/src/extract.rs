//! Slide and document extraction.
//!
//! [`SlideExtractor`] turns one slide's [`ShapeTree`] into a [`SlideModel`];
//! [`DocumentExtractor`] walks a whole package through a [`ResourceProvider`].

use crate::classify::{classify, ShapeRole};
use crate::shape::{PlaceholderRole, ShapeTree, TextBody, TextShape};
use crate::{Bullet, Error, ImageResource, Result, SlideModel};

/// Access to the parts of an opened presentation package.
///
/// Implementations own the underlying archive handle; every call goes
/// through `&mut self` so a single reader is shared by all slides.
pub trait ResourceProvider {
    /// Opaque reference to one slide.
    type Slide;

    /// Slides in presentation order, or `None` if the package declares no
    /// slide list at all.
    fn slide_ids(&mut self) -> Result<Option<Vec<Self::Slide>>>;

    /// Shape tree of a slide.
    fn shape_tree(&mut self, slide: &Self::Slide) -> Result<ShapeTree>;

    /// Shape tree of the slide's notes page, if it has one.
    fn notes_tree(&mut self, slide: &Self::Slide) -> Result<Option<ShapeTree>>;

    /// Resolve a relationship id scoped to `slide` into resource bytes.
    fn resolve_resource(&mut self, slide: &Self::Slide, rel_id: &str) -> Result<ImageResource>;
}

/// What to do with a text-bearing shape that has no text body.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MalformedShapePolicy {
    /// Fail the conversion with [`Error::MalformedShape`].
    #[default]
    Abort,
    /// Log a warning and leave the shape out.
    Skip,
}

/// Builds a [`SlideModel`] from one slide's shapes.
#[derive(Debug, Clone, Default)]
pub struct SlideExtractor {
    policy: MalformedShapePolicy,
}

impl SlideExtractor {
    /// Create an extractor that aborts on malformed shapes.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_malformed_policy(mut self, policy: MalformedShapePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Extract a slide.
    ///
    /// `resolve` maps a picture's relationship id to its resource; any error
    /// it returns aborts the slide.
    pub fn extract<F>(
        &self,
        shapes: &ShapeTree,
        notes: Option<&ShapeTree>,
        mut resolve: F,
    ) -> Result<SlideModel>
    where
        F: FnMut(&str) -> Result<ImageResource>,
    {
        let mut slide = SlideModel::new();

        for shape in shapes.text_shapes() {
            let role = classify(shape.placeholder.as_ref());
            if role == ShapeRole::Ignore {
                log::debug!(
                    "Ignoring placeholder shape '{}' ({:?})",
                    shape.name,
                    shape.placeholder
                );
                continue;
            }

            let Some(body) = self.text_body(shape)? else {
                continue;
            };

            match role {
                ShapeRole::Title => slide.titles.push(body.inner_text()),
                ShapeRole::Subtitle => slide.subtitles.push(body.inner_text()),
                ShapeRole::BodyText => {
                    slide.bullets.extend(
                        body.paragraphs
                            .iter()
                            .map(|p| Bullet::new(p.text.clone(), p.level.unwrap_or(0))),
                    );
                }
                ShapeRole::Ignore => {}
            }
        }

        for picture in shapes.pictures() {
            match &picture.embed {
                Some(rel_id) => slide.images.push(resolve(rel_id)?),
                None => log::warn!(
                    "Picture '{}' is not embedded in the package, skipping",
                    picture.name
                ),
            }
        }

        slide.notes = notes.and_then(notes_text);

        Ok(slide)
    }

    fn text_body<'a>(&self, shape: &'a TextShape) -> Result<Option<&'a TextBody>> {
        match (&shape.text_body, self.policy) {
            (Some(body), _) => Ok(Some(body)),
            (None, MalformedShapePolicy::Abort) => Err(Error::malformed_shape(
                &shape.name,
                "text-bearing shape has no text body",
            )),
            (None, MalformedShapePolicy::Skip) => {
                log::warn!("Shape '{}' has no text body, skipping", shape.name);
                Ok(None)
            }
        }
    }
}

/// Text of the first body placeholder on a notes page.
fn notes_text(notes: &ShapeTree) -> Option<String> {
    notes
        .text_shapes()
        .find(|s| s.placeholder == Some(PlaceholderRole::Body))
        .and_then(|s| s.text_body.as_ref())
        .map(TextBody::inner_text)
}

/// Extracts every slide of a package in presentation order.
#[derive(Debug, Clone, Default)]
pub struct DocumentExtractor {
    slides: SlideExtractor,
}

impl DocumentExtractor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a configured slide extractor.
    pub fn with_slide_extractor(mut self, slides: SlideExtractor) -> Self {
        self.slides = slides;
        self
    }

    /// Extract all slides. A package without a slide list yields no slides.
    pub fn extract<P: ResourceProvider>(&self, provider: &mut P) -> Result<Vec<SlideModel>> {
        let Some(ids) = provider.slide_ids()? else {
            log::debug!("Package declares no slide list");
            return Ok(Vec::new());
        };

        let mut slides = Vec::with_capacity(ids.len());
        for (idx, id) in ids.iter().enumerate() {
            let tree = provider.shape_tree(id)?;
            let notes = provider.notes_tree(id)?;
            let slide = self
                .slides
                .extract(&tree, notes.as_ref(), |rel_id| {
                    provider.resolve_resource(id, rel_id)
                })?;

            log::debug!(
                "Slide {}: {} title(s), {} subtitle(s), {} bullet(s), {} image(s)",
                idx + 1,
                slide.titles.len(),
                slide.subtitles.len(),
                slide.bullets.len(),
                slide.images.len()
            );
            slides.push(slide);
        }

        Ok(slides)
    }
}
