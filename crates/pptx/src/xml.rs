//! Small helpers shared by the XML part readers.

use pptx2md_core::{Error, Result};
use quick_xml::events::BytesStart;

/// Extract the local name from a potentially namespaced XML name.
pub(crate) fn local_name(name: &[u8]) -> &[u8] {
    if let Some(pos) = name.iter().position(|&b| b == b':') {
        &name[pos + 1..]
    } else {
        name
    }
}

/// Value of the first attribute whose local name is `key`.
pub(crate) fn attr(e: &BytesStart<'_>, key: &[u8]) -> Result<Option<String>> {
    find_attr(e, |name| local_name(name) == key)
}

/// Value of the first namespace-prefixed attribute whose local name is `key`
/// (e.g. `r:id`, as opposed to a plain `id`).
pub(crate) fn prefixed_attr(e: &BytesStart<'_>, key: &[u8]) -> Result<Option<String>> {
    find_attr(e, |name| name.contains(&b':') && local_name(name) == key)
}

fn find_attr<F>(e: &BytesStart<'_>, matches: F) -> Result<Option<String>>
where
    F: Fn(&[u8]) -> bool,
{
    for attr in e.attributes() {
        let attr = attr.map_err(|err| Error::XmlError(format!("Bad attribute: {}", err)))?;
        if matches(attr.key.as_ref()) {
            let value = attr
                .unescape_value()
                .map_err(|err| Error::XmlError(format!("Bad attribute value: {}", err)))?;
            return Ok(Some(value.into_owned()));
        }
    }
    Ok(None)
}
