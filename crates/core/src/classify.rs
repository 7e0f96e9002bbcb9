//! Semantic classification of shapes by placeholder role.

use crate::shape::PlaceholderRole;

/// What a shape contributes to the slide model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeRole {
    Title,
    Subtitle,
    BodyText,
    Ignore,
}

/// Classify a shape from its declared placeholder role.
///
/// Shapes without a role are free-form text boxes and become body text, so
/// their content surfaces as bullets. Reserved placeholders (date, footer,
/// slide number, ...) carry no extractable content.
pub fn classify(placeholder: Option<&PlaceholderRole>) -> ShapeRole {
    match placeholder {
        None | Some(PlaceholderRole::Body) => ShapeRole::BodyText,
        Some(PlaceholderRole::Title) | Some(PlaceholderRole::CenteredTitle) => ShapeRole::Title,
        Some(PlaceholderRole::SubTitle) => ShapeRole::Subtitle,
        Some(PlaceholderRole::Other(_)) => ShapeRole::Ignore,
    }
}
