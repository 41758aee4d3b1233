use crate::errors::{AppError, AppResult};
use quick_xml::events::{BytesStart, Event};
use quick_xml::reader::Reader;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// An owned XML element tree node.
///
/// The whole document is materialized before extraction; target device
/// profiles are small configuration files, so no streaming is needed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XmlElement {
    /// Tag name as written in the document, namespace prefix included
    pub tag: String,
    /// Attributes in document order as (name, value) pairs
    pub attributes: Vec<(String, String)>,
    /// Child elements in document order
    pub children: Vec<XmlElement>,
    /// Concatenated direct text and CDATA content
    pub text: String,
}

impl XmlElement {
    /// Returns the value of the attribute with the given (exact) name.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Returns the trimmed text of the first direct child whose local tag
    /// name matches and whose trimmed text is non-empty. Matching children
    /// with blank text are passed over rather than ending the search.
    pub fn first_child_text(&self, child_local_tag: &str) -> Option<&str> {
        for child in &self.children {
            if local_name(&child.tag) == child_local_tag {
                let text = child.text.trim();
                if !text.is_empty() {
                    return Some(text);
                }
            }
        }
        None
    }

    /// Depth-first document-order traversal over this element and all of
    /// its descendants, the element itself first.
    pub fn iter(&self) -> Descendants<'_> {
        Descendants { stack: vec![self] }
    }

    /// Local tag name with any namespace prefix removed.
    pub fn local_tag(&self) -> &str {
        local_name(&self.tag)
    }
}

/// Iterator behind [`XmlElement::iter`].
pub struct Descendants<'a> {
    stack: Vec<&'a XmlElement>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a XmlElement;

    fn next(&mut self) -> Option<Self::Item> {
        let element = self.stack.pop()?;
        // Reverse push keeps children popping in document order
        self.stack.extend(element.children.iter().rev());
        Some(element)
    }
}

/// Strips the namespace qualifier from a tag name.
///
/// Handles both prefix form (`ns:Group`) and Clark notation (`{uri}Group`);
/// unqualified names are returned unchanged. Total: never fails.
pub fn local_name(tag: &str) -> &str {
    tag.rsplit([':', '}']).next().unwrap_or(tag)
}

/// Parses an XML file into its root element.
///
/// Any failure here is fatal to the run: a missing or unreadable file,
/// malformed markup, or a document without a root element all surface as
/// `ParseError` and propagate unhandled to the process boundary.
pub fn load_document(path: &Path) -> AppResult<XmlElement> {
    let file = File::open(path)
        .map_err(|e| AppError::ParseError(format!("Failed to read {}: {e}", path.display())))?;
    let mut reader = Reader::from_reader(BufReader::new(file));
    reader.config_mut().trim_text(true);

    let mut buf = Vec::with_capacity(8192);
    let mut stack: Vec<XmlElement> = Vec::new();
    let mut root: Option<XmlElement> = None;

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(e) => {
                stack.push(element_from_start(&e)?);
            }
            Event::Empty(e) => {
                let element = element_from_start(&e)?;
                attach(&mut stack, &mut root, element)?;
            }
            Event::End(_) => {
                // quick-xml rejects mismatched end tags before we get here
                let element = stack.pop().ok_or_else(|| {
                    AppError::ParseError("Unexpected closing tag outside any element".to_string())
                })?;
                attach(&mut stack, &mut root, element)?;
            }
            Event::Text(e) => {
                if let Some(parent) = stack.last_mut() {
                    let text = e.decode().map_err(|e| {
                        AppError::ParseError(format!("Failed to decode XML text: {e}"))
                    })?;
                    parent.text.push_str(&text);
                }
            }
            Event::CData(e) => {
                if let Some(parent) = stack.last_mut() {
                    parent.text.push_str(&String::from_utf8_lossy(&e.into_inner()));
                }
            }
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    root.ok_or_else(|| AppError::ParseError("Document has no root element".to_string()))
}

/// Builds an element from a start (or self-closing) tag, decoding attributes.
fn element_from_start(e: &BytesStart) -> AppResult<XmlElement> {
    let tag = String::from_utf8_lossy(e.name().as_ref()).into_owned();
    let mut attributes = Vec::new();
    for attr in e.attributes() {
        let attr = attr
            .map_err(|err| AppError::ParseError(format!("Malformed attribute in <{tag}>: {err}")))?;
        let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
        let value = attr
            .unescape_value()
            .map_err(|err| AppError::ParseError(format!("Bad attribute value in <{tag}>: {err}")))?
            .into_owned();
        attributes.push((key, value));
    }
    Ok(XmlElement {
        tag,
        attributes,
        children: Vec::new(),
        text: String::new(),
    })
}

/// Hands a completed element to its parent, or makes it the document root.
fn attach(
    stack: &mut Vec<XmlElement>,
    root: &mut Option<XmlElement>,
    element: XmlElement,
) -> AppResult<()> {
    match stack.last_mut() {
        Some(parent) => parent.children.push(element),
        None => {
            if root.is_some() {
                return Err(AppError::ParseError(
                    "Document has more than one root element".to_string(),
                ));
            }
            *root = Some(element);
        }
    }
    Ok(())
}
