//! Slide XML to [`ShapeTree`].
//!
//! Collects every `p:sp` and `p:pic` in document order. Group shapes are
//! flattened; `mc:Fallback` branches are skipped so a picture offered as both
//! alternate content and fallback is only seen once.

use crate::xml::{attr, local_name};
use pptx2md_core::{
    Error, Paragraph, PictureShape, PlaceholderRole, Result, Shape, ShapeTree, TextBody, TextShape,
};
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

/// Parse the shapes of a slide or notes part.
pub fn parse_shape_tree(xml: &str) -> Result<ShapeTree> {
    let mut reader = Reader::from_str(xml);
    let mut parser = ShapeTreeParser::default();

    loop {
        match reader.read_event() {
            Ok(Event::Start(ref e)) => parser.start(e, false)?,
            Ok(Event::Empty(ref e)) => parser.start(e, true)?,
            Ok(Event::End(ref e)) => parser.end(local_name(e.name().as_ref())),
            Ok(Event::Text(ref e)) => {
                if parser.in_run_text() {
                    let text = e
                        .unescape()
                        .map_err(|err| Error::XmlError(format!("Bad text content: {}", err)))?;
                    parser.push_text(&text);
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(Error::XmlError(format!(
                    "Error parsing shapes at byte {}: {}",
                    reader.buffer_position(),
                    e
                )));
            }
            _ => {}
        }
    }

    Ok(ShapeTree::new(parser.shapes))
}

#[derive(Debug, Default)]
struct ShapeTreeParser {
    shapes: Vec<Shape>,
    text_shape: Option<TextShape>,
    picture: Option<PictureShape>,
    body: Option<TextBody>,
    paragraph: Option<Paragraph>,
    in_t: bool,
    /// Element depth inside an `mc:Fallback` branch; zero outside.
    fallback_depth: usize,
}

impl ShapeTreeParser {
    fn in_run_text(&self) -> bool {
        self.in_t && self.fallback_depth == 0
    }

    fn push_text(&mut self, text: &str) {
        if let Some(p) = self.paragraph.as_mut() {
            p.text.push_str(text);
        }
    }

    fn start(&mut self, e: &BytesStart<'_>, empty: bool) -> Result<()> {
        let name = e.name();
        let local = local_name(name.as_ref());

        if self.fallback_depth > 0 {
            if !empty {
                self.fallback_depth += 1;
            }
            return Ok(());
        }

        match local {
            b"Fallback" if !empty => self.fallback_depth = 1,
            b"sp" if !empty => self.text_shape = Some(TextShape::default()),
            b"pic" if !empty => self.picture = Some(PictureShape::default()),
            b"cNvPr" => {
                let shape_name = attr(e, b"name")?.unwrap_or_default();
                if let Some(t) = self.text_shape.as_mut() {
                    t.name = shape_name;
                } else if let Some(p) = self.picture.as_mut() {
                    p.name = shape_name;
                }
            }
            b"ph" => {
                if let Some(t) = self.text_shape.as_mut() {
                    t.placeholder = attr(e, b"type")?.map(|v| PlaceholderRole::from_ooxml(&v));
                }
            }
            b"txBody" if self.text_shape.is_some() => {
                if empty {
                    self.finish_body(Some(TextBody::default()));
                } else {
                    self.body = Some(TextBody::default());
                }
            }
            b"p" if self.body.is_some() => {
                self.paragraph = Some(Paragraph::default());
                if empty {
                    self.finish_paragraph();
                }
            }
            b"pPr" => {
                if let Some(p) = self.paragraph.as_mut() {
                    p.level = attr(e, b"lvl")?.and_then(|v| v.parse().ok());
                }
            }
            b"t" if self.paragraph.is_some() && !empty => self.in_t = true,
            b"br" => self.push_text("\n"),
            b"blip" => {
                if let Some(p) = self.picture.as_mut() {
                    p.embed = attr(e, b"embed")?;
                }
            }
            _ => {}
        }

        Ok(())
    }

    fn end(&mut self, local: &[u8]) {
        if self.fallback_depth > 0 {
            self.fallback_depth -= 1;
            return;
        }

        match local {
            b"t" => self.in_t = false,
            b"p" => self.finish_paragraph(),
            b"txBody" => {
                let body = self.body.take();
                self.finish_body(body);
            }
            b"sp" => {
                if let Some(shape) = self.text_shape.take() {
                    self.shapes.push(Shape::Text(shape));
                }
            }
            b"pic" => {
                if let Some(picture) = self.picture.take() {
                    self.shapes.push(Shape::Picture(picture));
                }
            }
            _ => {}
        }
    }

    fn finish_paragraph(&mut self) {
        if let (Some(p), Some(body)) = (self.paragraph.take(), self.body.as_mut()) {
            body.paragraphs.push(p);
        }
    }

    fn finish_body(&mut self, body: Option<TextBody>) {
        if let (Some(body), Some(shape)) = (body, self.text_shape.as_mut()) {
            shape.text_body = Some(body);
        }
    }
}
