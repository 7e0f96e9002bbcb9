//! PPTX package access.
//!
//! A `.pptx` file is a ZIP archive of XML parts linked by relationship
//! parts. [`PptxPackage`] opens the archive, locates the presentation part
//! and serves slides, notes and media through [`ResourceProvider`].

use crate::rels::{rels_path_for, resolve_target, ContentTypes, Relationships};
use crate::shapes::parse_shape_tree;
use crate::xml::{local_name, prefixed_attr};
use pptx2md_core::{Error, ImageResource, ResourceProvider, Result, ShapeTree};
use quick_xml::events::Event;
use quick_xml::Reader;
use std::collections::HashMap;
use std::io::{Read, Seek};
use zip::result::ZipError;
use zip::ZipArchive;

const CONTENT_TYPES_PART: &str = "[Content_Types].xml";
const DEFAULT_PRESENTATION_PART: &str = "ppt/presentation.xml";

const REL_OFFICE_DOCUMENT: &str = "/officeDocument";
const REL_NOTES_SLIDE: &str = "/notesSlide";

/// Fallback MIME type for parts without a declared content type.
const OCTET_STREAM: &str = "application/octet-stream";

/// ZIP local file header magic.
const ZIP_MAGIC: [u8; 4] = [0x50, 0x4B, 0x03, 0x04];

/// True if `bytes` start like a ZIP archive (and therefore possibly a PPTX).
pub fn looks_like_package(bytes: &[u8]) -> bool {
    bytes.starts_with(&ZIP_MAGIC)
}

/// A slide as addressed inside the package.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlidePart {
    /// ZIP entry name of the slide part, e.g. `ppt/slides/slide1.xml`.
    pub part: String,
}

/// An opened PPTX package.
pub struct PptxPackage<R: Read + Seek> {
    archive: ZipArchive<R>,
    content_types: ContentTypes,
    presentation_part: String,
    rels_cache: HashMap<String, Relationships>,
}

impl<R: Read + Seek> PptxPackage<R> {
    /// Open a package and locate its presentation part.
    pub fn open(reader: R) -> Result<Self> {
        let archive = ZipArchive::new(reader)
            .map_err(|e| Error::ZipError(format!("Failed to open ZIP: {}", e)))?;

        let mut package = Self {
            archive,
            content_types: ContentTypes::default(),
            presentation_part: DEFAULT_PRESENTATION_PART.to_string(),
            rels_cache: HashMap::new(),
        };

        if !package.has_part(CONTENT_TYPES_PART) {
            return Err(Error::UnsupportedFormat(
                "ZIP archive has no [Content_Types].xml; not an OPC package".to_string(),
            ));
        }
        let content_types = package.read_string(CONTENT_TYPES_PART)?;
        package.content_types = ContentTypes::parse(&content_types)?;

        let office_document = package
            .relationships("")?
            .find_by_type(REL_OFFICE_DOCUMENT)
            .map(|rel| resolve_target("", &rel.target));
        if let Some(part) = office_document {
            package.presentation_part = part;
        }

        if !package.has_part(&package.presentation_part) {
            return Err(Error::UnsupportedFormat(format!(
                "Presentation part '{}' not found; not a PPTX package",
                package.presentation_part
            )));
        }

        log::debug!("Presentation part: {}", package.presentation_part);
        Ok(package)
    }

    pub fn presentation_part(&self) -> &str {
        &self.presentation_part
    }

    /// Slide parts in presentation order (`p:sldIdLst`), or `None` if the
    /// presentation declares no slide list.
    pub fn slide_parts(&mut self) -> Result<Option<Vec<SlidePart>>> {
        let presentation = self.presentation_part.clone();
        let xml = self.read_string(&presentation)?;
        let Some(rel_ids) = parse_slide_id_list(&xml)? else {
            return Ok(None);
        };

        let rels = self.relationships(&presentation)?;
        let mut parts = Vec::with_capacity(rel_ids.len());
        for rel_id in rel_ids {
            let rel = rels.get(&rel_id).ok_or_else(|| {
                Error::InvalidInput(format!(
                    "Slide relationship '{}' missing from {}",
                    rel_id, presentation
                ))
            })?;
            parts.push(SlidePart {
                part: resolve_target(&presentation, &rel.target),
            });
        }

        log::debug!("Found {} slide(s)", parts.len());
        Ok(Some(parts))
    }

    fn has_part(&self, part: &str) -> bool {
        self.archive.file_names().any(|name| name == part)
    }

    /// Relationships of `part`, cached. A part without a `.rels` part has none.
    fn relationships(&mut self, part: &str) -> Result<&Relationships> {
        if !self.rels_cache.contains_key(part) {
            let rels_path = rels_path_for(part);
            let rels = if self.has_part(&rels_path) {
                let xml = self.read_string(&rels_path)?;
                Relationships::parse(&xml)?
            } else {
                Relationships::default()
            };
            self.rels_cache.insert(part.to_string(), rels);
        }

        Ok(&self.rels_cache[part])
    }

    fn read_bytes(&mut self, path: &str) -> Result<Vec<u8>> {
        let mut file = self.archive.by_name(path).map_err(|e| match e {
            ZipError::FileNotFound => {
                Error::InvalidInput(format!("Part '{}' not found in package", path))
            }
            e => Error::ZipError(format!("Failed to open '{}': {}", path, e)),
        })?;

        let mut data = Vec::new();
        file.read_to_end(&mut data)
            .map_err(|e| Error::ZipError(format!("Failed to read '{}': {}", path, e)))?;

        Ok(data)
    }

    fn read_string(&mut self, path: &str) -> Result<String> {
        let data = self.read_bytes(path)?;
        String::from_utf8(data)
            .map_err(|e| Error::InvalidInput(format!("Part '{}' is not UTF-8: {}", path, e)))
    }
}

impl<R: Read + Seek> ResourceProvider for PptxPackage<R> {
    type Slide = SlidePart;

    fn slide_ids(&mut self) -> Result<Option<Vec<SlidePart>>> {
        self.slide_parts()
    }

    fn shape_tree(&mut self, slide: &SlidePart) -> Result<ShapeTree> {
        if !self.has_part(&slide.part) {
            return Err(Error::InvalidInput(format!(
                "Slide part '{}' has no content",
                slide.part
            )));
        }
        let xml = self.read_string(&slide.part)?;
        parse_shape_tree(&xml)
    }

    fn notes_tree(&mut self, slide: &SlidePart) -> Result<Option<ShapeTree>> {
        let notes_part = self
            .relationships(&slide.part)?
            .find_by_type(REL_NOTES_SLIDE)
            .filter(|rel| !rel.external)
            .map(|rel| resolve_target(&slide.part, &rel.target));

        let Some(notes_part) = notes_part else {
            return Ok(None);
        };
        if !self.has_part(&notes_part) {
            log::debug!("Notes part '{}' is missing, ignoring", notes_part);
            return Ok(None);
        }

        let xml = self.read_string(&notes_part)?;
        parse_shape_tree(&xml).map(Some)
    }

    fn resolve_resource(&mut self, slide: &SlidePart, rel_id: &str) -> Result<ImageResource> {
        let rel = self
            .relationships(&slide.part)?
            .get(rel_id)
            .cloned()
            .ok_or_else(|| {
                Error::unresolved(rel_id, format!("no such relationship in '{}'", slide.part))
            })?;

        if rel.external {
            return Err(Error::unresolved(
                rel_id,
                format!("target '{}' is external to the package", rel.target),
            ));
        }

        let part = resolve_target(&slide.part, &rel.target);
        if !self.has_part(&part) {
            return Err(Error::unresolved(
                rel_id,
                format!("part '{}' not found in package", part),
            ));
        }

        let data = self.read_bytes(&part)?;
        let content_type = self
            .content_types
            .content_type(&part)
            .unwrap_or(OCTET_STREAM)
            .to_string();

        Ok(ImageResource::new(format!("/{}", part), content_type, data))
    }
}

/// Relationship ids of `p:sldIdLst/p:sldId`, in declared order.
fn parse_slide_id_list(xml: &str) -> Result<Option<Vec<String>>> {
    let mut reader = Reader::from_str(xml);
    reader.trim_text(true);

    let mut ids: Option<Vec<String>> = None;
    let mut in_list = false;

    loop {
        match reader.read_event() {
            Ok(Event::Start(ref e)) if local_name(e.name().as_ref()) == b"sldIdLst" => {
                in_list = true;
                ids.get_or_insert_with(Vec::new);
            }
            Ok(Event::Empty(ref e)) if local_name(e.name().as_ref()) == b"sldIdLst" => {
                ids.get_or_insert_with(Vec::new);
            }
            Ok(Event::Empty(ref e)) | Ok(Event::Start(ref e))
                if in_list && local_name(e.name().as_ref()) == b"sldId" =>
            {
                if let (Some(list), Some(rel_id)) = (ids.as_mut(), prefixed_attr(e, b"id")?) {
                    list.push(rel_id);
                }
            }
            Ok(Event::End(ref e)) if local_name(e.name().as_ref()) == b"sldIdLst" => {
                in_list = false;
            }
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(Error::XmlError(format!(
                    "Error parsing presentation part: {}",
                    e
                )));
            }
            _ => {}
        }
    }

    Ok(ids)
}
