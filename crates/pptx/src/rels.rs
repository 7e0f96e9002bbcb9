//! OPC relationship and content-type parts.

use crate::xml::{attr, local_name};
use pptx2md_core::{Error, Result};
use quick_xml::events::Event;
use quick_xml::Reader;
use std::collections::HashMap;

/// One `<Relationship>` entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relationship {
    pub id: String,
    pub rel_type: String,
    pub target: String,
    /// `TargetMode="External"`: the target is outside the package.
    pub external: bool,
}

/// Relationships of one source part, in declaration order.
#[derive(Debug, Clone, Default)]
pub struct Relationships {
    entries: Vec<Relationship>,
    by_id: HashMap<String, usize>,
}

impl Relationships {
    /// Parse a `.rels` part.
    pub fn parse(xml: &str) -> Result<Self> {
        let mut rels = Self::default();
        let mut reader = Reader::from_str(xml);
        reader.trim_text(true);

        loop {
            match reader.read_event() {
                Ok(Event::Empty(ref e)) | Ok(Event::Start(ref e))
                    if local_name(e.name().as_ref()) == b"Relationship" =>
                {
                    let id = attr(e, b"Id")?.unwrap_or_default();
                    let rel = Relationship {
                        rel_type: attr(e, b"Type")?.unwrap_or_default(),
                        target: attr(e, b"Target")?.unwrap_or_default(),
                        external: attr(e, b"TargetMode")?.as_deref() == Some("External"),
                        id,
                    };
                    rels.push(rel);
                }
                Ok(Event::Eof) => break,
                Err(e) => {
                    return Err(Error::XmlError(format!(
                        "Error parsing relationships: {}",
                        e
                    )));
                }
                _ => {}
            }
        }

        Ok(rels)
    }

    fn push(&mut self, rel: Relationship) {
        self.by_id.entry(rel.id.clone()).or_insert(self.entries.len());
        self.entries.push(rel);
    }

    pub fn get(&self, id: &str) -> Option<&Relationship> {
        self.by_id.get(id).map(|&idx| &self.entries[idx])
    }

    /// First relationship whose type URI ends with `suffix` (e.g. `/notesSlide`).
    pub fn find_by_type(&self, suffix: &str) -> Option<&Relationship> {
        self.entries.iter().find(|r| r.rel_type.ends_with(suffix))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Path of the relationships part for `part` (`""` is the package itself).
pub fn rels_path_for(part: &str) -> String {
    match part.rsplit_once('/') {
        Some((dir, file)) => format!("{}/_rels/{}.rels", dir, file),
        None if part.is_empty() => "_rels/.rels".to_string(),
        None => format!("_rels/{}.rels", part),
    }
}

/// Resolve a relationship target against its source part.
///
/// Returns a ZIP entry name (no leading slash).
pub fn resolve_target(source_part: &str, target: &str) -> String {
    if let Some(absolute) = target.strip_prefix('/') {
        return normalize_path(absolute);
    }

    match source_part.rsplit_once('/') {
        Some((dir, _)) => normalize_path(&format!("{}/{}", dir, target)),
        None => normalize_path(target),
    }
}

fn normalize_path(path: &str) -> String {
    let mut segments: Vec<&str> = Vec::new();
    for segment in path.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                segments.pop();
            }
            s => segments.push(s),
        }
    }
    segments.join("/")
}

/// Parsed `[Content_Types].xml`.
#[derive(Debug, Clone, Default)]
pub struct ContentTypes {
    defaults: HashMap<String, String>,
    overrides: HashMap<String, String>,
}

impl ContentTypes {
    pub fn parse(xml: &str) -> Result<Self> {
        let mut types = Self::default();
        let mut reader = Reader::from_str(xml);
        reader.trim_text(true);

        loop {
            match reader.read_event() {
                Ok(Event::Empty(ref e)) | Ok(Event::Start(ref e)) => {
                    match local_name(e.name().as_ref()) {
                        b"Default" => {
                            if let (Some(ext), Some(ct)) =
                                (attr(e, b"Extension")?, attr(e, b"ContentType")?)
                            {
                                types.defaults.insert(ext.to_ascii_lowercase(), ct);
                            }
                        }
                        b"Override" => {
                            if let (Some(part), Some(ct)) =
                                (attr(e, b"PartName")?, attr(e, b"ContentType")?)
                            {
                                let key = part.trim_start_matches('/').to_ascii_lowercase();
                                types.overrides.insert(key, ct);
                            }
                        }
                        _ => {}
                    }
                }
                Ok(Event::Eof) => break,
                Err(e) => {
                    return Err(Error::XmlError(format!(
                        "Error parsing [Content_Types].xml: {}",
                        e
                    )));
                }
                _ => {}
            }
        }

        Ok(types)
    }

    /// Declared content type of a part: override first, then extension default.
    pub fn content_type(&self, part: &str) -> Option<&str> {
        let key = part.trim_start_matches('/').to_ascii_lowercase();
        if let Some(ct) = self.overrides.get(&key) {
            return Some(ct);
        }

        key.rsplit_once('.')
            .and_then(|(_, ext)| self.defaults.get(ext))
            .map(String::as_str)
    }
}
