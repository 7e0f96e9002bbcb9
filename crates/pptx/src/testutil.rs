//! In-memory PPTX packages for tests.

use std::io::{Cursor, Write};
use zip::write::FileOptions;
use zip::ZipWriter;

const NS: &str = r#"xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships" xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main""#;
const REL_NS: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships";

struct Image {
    slide: String,
    rel_id: String,
    media: String,
    data: Vec<u8>,
}

/// Builds a minimal but structurally valid `.pptx`.
#[derive(Default)]
pub(crate) struct DeckBuilder {
    slides: Vec<(String, String)>,
    order: Option<Vec<String>>,
    images: Vec<Image>,
    notes: Vec<(String, String)>,
    no_slide_list: bool,
}

impl DeckBuilder {
    pub(crate) const NO_TEXT_SHAPE: &'static str = r#"<p:sp><p:nvSpPr><p:cNvPr id="2" name="Rectangle 1"/><p:cNvSpPr/><p:nvPr/></p:nvSpPr><p:spPr/></p:sp>"#;

    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Add a slide stored as `ppt/slides/{name}`.
    pub(crate) fn slide(mut self, name: &str, xml: String) -> Self {
        self.slides.push((name.to_string(), xml));
        self
    }

    /// Declare presentation order; defaults to storage order.
    pub(crate) fn order(mut self, names: &[&str]) -> Self {
        self.order = Some(names.iter().map(|n| n.to_string()).collect());
        self
    }

    pub(crate) fn image(mut self, slide: &str, rel_id: &str, media: &str, data: &[u8]) -> Self {
        self.images.push(Image {
            slide: slide.to_string(),
            rel_id: rel_id.to_string(),
            media: media.to_string(),
            data: data.to_vec(),
        });
        self
    }

    pub(crate) fn notes(mut self, slide: &str, text: &str) -> Self {
        self.notes.push((slide.to_string(), text.to_string()));
        self
    }

    pub(crate) fn without_slide_list(mut self) -> Self {
        self.no_slide_list = true;
        self
    }

    pub(crate) fn slide_xml(shapes: &str) -> String {
        format!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<p:sld {NS}><p:cSld><p:spTree><p:nvGrpSpPr><p:cNvPr id="1" name=""/><p:cNvGrpSpPr/><p:nvPr/></p:nvGrpSpPr><p:grpSpPr/>{shapes}</p:spTree></p:cSld></p:sld>"#
        )
    }

    fn text_shape(id: usize, name: &str, ph: &str, paragraphs: &str) -> String {
        format!(
            r#"<p:sp><p:nvSpPr><p:cNvPr id="{id}" name="{name}"/><p:cNvSpPr/><p:nvPr>{ph}</p:nvPr></p:nvSpPr><p:spPr/><p:txBody><a:bodyPr/><a:lstStyle/>{paragraphs}</p:txBody></p:sp>"#
        )
    }

    fn paragraph(text: &str, level: u32) -> String {
        let ppr = if level > 0 {
            format!(r#"<a:pPr lvl="{level}"/>"#)
        } else {
            String::new()
        };
        if text.is_empty() {
            format!("<a:p>{ppr}</a:p>")
        } else {
            format!(r#"<a:p>{ppr}<a:r><a:rPr lang="en-US"/><a:t>{text}</a:t></a:r></a:p>"#)
        }
    }

    /// Centered title, subtitle "A subtitle" and a slide-number placeholder.
    pub(crate) fn title_slide(title: &str) -> String {
        let shapes = [
            Self::text_shape(2, "Title 1", r#"<p:ph type="ctrTitle"/>"#, &Self::paragraph(title, 0)),
            Self::text_shape(
                3,
                "Subtitle 2",
                r#"<p:ph type="subTitle" idx="1"/>"#,
                &Self::paragraph("A subtitle", 0),
            ),
            Self::text_shape(
                4,
                "Slide Number 3",
                r#"<p:ph type="sldNum" sz="quarter" idx="12"/>"#,
                &Self::paragraph("1", 0),
            ),
        ];
        Self::slide_xml(&shapes.concat())
    }

    /// Title plus a content placeholder holding `bullets`.
    pub(crate) fn bullet_slide(title: &str, bullets: &[(&str, u32)]) -> String {
        let paragraphs: String = bullets
            .iter()
            .map(|(text, level)| Self::paragraph(text, *level))
            .collect();
        let shapes = [
            Self::text_shape(2, "Title 1", r#"<p:ph type="title"/>"#, &Self::paragraph(title, 0)),
            Self::text_shape(3, "Content Placeholder 2", r#"<p:ph idx="1"/>"#, &paragraphs),
        ];
        Self::slide_xml(&shapes.concat())
    }

    /// One embedded picture per relationship id.
    pub(crate) fn picture_slide(rel_ids: &[&str]) -> String {
        let shapes: String = rel_ids
            .iter()
            .enumerate()
            .map(|(i, rel_id)| {
                format!(
                    r#"<p:pic><p:nvPicPr><p:cNvPr id="{}" name="Picture {}"/><p:cNvPicPr/><p:nvPr/></p:nvPicPr><p:blipFill><a:blip r:embed="{rel_id}"/><a:stretch><a:fillRect/></a:stretch></p:blipFill><p:spPr/></p:pic>"#,
                    i + 2,
                    i + 1
                )
            })
            .collect();
        Self::slide_xml(&shapes)
    }

    fn notes_xml(text: &str) -> String {
        format!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<p:notes {NS}><p:cSld><p:spTree><p:nvGrpSpPr><p:cNvPr id="1" name=""/><p:cNvGrpSpPr/><p:nvPr/></p:nvGrpSpPr><p:grpSpPr/><p:sp><p:nvSpPr><p:cNvPr id="2" name="Slide Image Placeholder 1"/><p:cNvSpPr/><p:nvPr><p:ph type="sldImg"/></p:nvPr></p:nvSpPr><p:spPr/></p:sp>{}</p:spTree></p:cSld></p:notes>"#,
            Self::text_shape(3, "Notes Placeholder 2", r#"<p:ph type="body" idx="1"/>"#, &Self::paragraph(text, 0))
        )
    }

    pub(crate) fn build(self) -> Vec<u8> {
        let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
        let mut put = |name: &str, data: &[u8]| {
            zip.start_file(name, FileOptions::default()).unwrap();
            zip.write_all(data).unwrap();
        };

        let mut overrides = String::from(
            r#"<Override PartName="/ppt/presentation.xml" ContentType="application/vnd.openxmlformats-officedocument.presentationml.presentation.main+xml"/>"#,
        );
        for (name, _) in &self.slides {
            overrides.push_str(&format!(
                r#"<Override PartName="/ppt/slides/{name}" ContentType="application/vnd.openxmlformats-officedocument.presentationml.slide+xml"/>"#
            ));
        }
        put(
            "[Content_Types].xml",
            format!(
                r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types"><Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/><Default Extension="xml" ContentType="application/xml"/><Default Extension="png" ContentType="image/png"/><Default Extension="jpeg" ContentType="image/jpeg"/>{overrides}</Types>"#
            )
            .as_bytes(),
        );

        put(
            "_rels/.rels",
            format!(
                r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="{REL_NS}/officeDocument" Target="ppt/presentation.xml"/></Relationships>"#
            )
            .as_bytes(),
        );

        let rel_id_of = |name: &str| -> String {
            let idx = self
                .slides
                .iter()
                .position(|(n, _)| n == name)
                .expect("ordered slide was never added");
            format!("rId{}", idx + 100)
        };

        let order: Vec<String> = self
            .order
            .clone()
            .unwrap_or_else(|| self.slides.iter().map(|(n, _)| n.clone()).collect());
        let slide_list = if self.no_slide_list {
            String::new()
        } else {
            let ids: String = order
                .iter()
                .enumerate()
                .map(|(i, name)| format!(r#"<p:sldId id="{}" r:id="{}"/>"#, 256 + i, rel_id_of(name)))
                .collect();
            format!("<p:sldIdLst>{ids}</p:sldIdLst>")
        };
        put(
            "ppt/presentation.xml",
            format!(
                r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<p:presentation {NS}>{slide_list}<p:sldSz cx="12192000" cy="6858000"/></p:presentation>"#
            )
            .as_bytes(),
        );

        let presentation_rels: String = self
            .slides
            .iter()
            .map(|(name, _)| {
                format!(
                    r#"<Relationship Id="{}" Type="{REL_NS}/slide" Target="slides/{name}"/>"#,
                    rel_id_of(name)
                )
            })
            .collect();
        put(
            "ppt/_rels/presentation.xml.rels",
            format!(
                r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">{presentation_rels}</Relationships>"#
            )
            .as_bytes(),
        );

        for (idx, (name, xml)) in self.slides.iter().enumerate() {
            put(&format!("ppt/slides/{name}"), xml.as_bytes());

            let mut rels = format!(
                r#"<Relationship Id="rId1" Type="{REL_NS}/slideLayout" Target="../slideLayouts/slideLayout1.xml"/>"#
            );
            for image in self.images.iter().filter(|i| &i.slide == name) {
                rels.push_str(&format!(
                    r#"<Relationship Id="{}" Type="{REL_NS}/image" Target="../media/{}"/>"#,
                    image.rel_id, image.media
                ));
            }
            if let Some((_, text)) = self.notes.iter().find(|(slide, _)| slide == name) {
                let notes_name = format!("notesSlide{}.xml", idx + 1);
                rels.push_str(&format!(
                    r#"<Relationship Id="rId99" Type="{REL_NS}/notesSlide" Target="../notesSlides/{notes_name}"/>"#
                ));
                put(
                    &format!("ppt/notesSlides/{notes_name}"),
                    Self::notes_xml(text).as_bytes(),
                );
            }
            put(
                &format!("ppt/slides/_rels/{name}.rels"),
                format!(
                    r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">{rels}</Relationships>"#
                )
                .as_bytes(),
            );
        }

        for image in &self.images {
            put(&format!("ppt/media/{}", image.media), &image.data);
        }

        zip.finish().unwrap().into_inner()
    }
}
