//! Library-independent view of a slide's shape tree.
//!
//! A package reader flattens whatever object model it parses into these
//! nodes; extraction never sees reader-specific types.

/// Placeholder role declared on a shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlaceholderRole {
    Title,
    CenteredTitle,
    SubTitle,
    Body,
    /// Any other declared kind (slide number, date, footer, ...).
    Other(String),
}

impl PlaceholderRole {
    /// Map an OOXML `ST_PlaceholderType` value.
    pub fn from_ooxml(value: &str) -> Self {
        match value {
            "title" => Self::Title,
            "ctrTitle" => Self::CenteredTitle,
            "subTitle" => Self::SubTitle,
            "body" => Self::Body,
            other => Self::Other(other.to_string()),
        }
    }
}

/// One paragraph of a text body.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Paragraph {
    /// Declared indentation level, if any.
    pub level: Option<u32>,

    /// Concatenated run text.
    pub text: String,
}

impl Paragraph {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            level: None,
            text: text.into(),
        }
    }

    pub fn with_level(mut self, level: u32) -> Self {
        self.level = Some(level);
        self
    }
}

/// The text body of a shape.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextBody {
    pub paragraphs: Vec<Paragraph>,
}

impl TextBody {
    pub fn new(paragraphs: Vec<Paragraph>) -> Self {
        Self { paragraphs }
    }

    /// Full text of the body, paragraphs separated by newlines.
    pub fn inner_text(&self) -> String {
        self.paragraphs
            .iter()
            .map(|p| p.text.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// A shape that may carry text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextShape {
    /// Shape name, used in diagnostics.
    pub name: String,
    pub placeholder: Option<PlaceholderRole>,
    pub text_body: Option<TextBody>,
}

/// A picture shape referencing an embedded resource.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PictureShape {
    pub name: String,

    /// Relationship id of the embedded image, if the picture is embedded.
    pub embed: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Shape {
    Text(TextShape),
    Picture(PictureShape),
}

/// All shapes of one slide (or notes page) in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShapeTree {
    pub shapes: Vec<Shape>,
}

impl ShapeTree {
    pub fn new(shapes: Vec<Shape>) -> Self {
        Self { shapes }
    }

    pub fn text_shapes(&self) -> impl Iterator<Item = &TextShape> {
        self.shapes.iter().filter_map(|s| match s {
            Shape::Text(t) => Some(t),
            Shape::Picture(_) => None,
        })
    }

    pub fn pictures(&self) -> impl Iterator<Item = &PictureShape> {
        self.shapes.iter().filter_map(|s| match s {
            Shape::Picture(p) => Some(p),
            Shape::Text(_) => None,
        })
    }
}
