//! PPTX (Office Open XML) package reader for presentation conversion.
//!
//! Parses .pptx files, which are ZIP archives of XML parts, into the
//! shape trees and resources consumed by `pptx2md_core` extraction.

pub mod package;
pub mod rels;
pub mod shapes;
mod xml;

pub use package::{looks_like_package, PptxPackage, SlidePart};
pub use shapes::parse_shape_tree;

use pptx2md_core::{DocumentExtractor, Result, SlideModel};
use std::io::{Read, Seek};

/// Open a PPTX package and extract all of its slides in presentation order.
pub fn extract_slides<R: Read + Seek>(
    reader: R,
    extractor: &DocumentExtractor,
) -> Result<Vec<SlideModel>> {
    let mut package = PptxPackage::open(reader)?;
    extractor.extract(&mut package)
}

#[cfg(test)]
pub(crate) mod testutil;
