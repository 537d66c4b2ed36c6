use cotendo_dns_domain::{is_valid_name, DomainError, MarkupElement, MarkupNode};
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use std::fmt::Display;
use std::io::Write;

const INDENT_WIDTH: usize = 2;

/// Encodes a tree as UTF-8 markup: XML declaration, two-space indentation,
/// trailing newline. Elements without children are written self-closed.
///
/// Tag and attribute names must pass [`is_valid_name`]; anything else would
/// not decode back to the same tree and fails with `EncodeFailed`.
pub fn write_document(root: &MarkupElement) -> Result<String, DomainError> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', INDENT_WIDTH);
    writer
        .write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))
        .map_err(encode_failed)?;
    write_element(&mut writer, root)?;

    let mut xml = String::from_utf8(writer.into_inner()).map_err(encode_failed)?;
    xml.push('\n');
    Ok(xml)
}

fn write_element<W: Write>(
    writer: &mut Writer<W>,
    element: &MarkupElement,
) -> Result<(), DomainError> {
    if !is_valid_name(&element.tag) {
        return Err(encode_failed(format_args!(
            "invalid element name {:?}",
            element.tag
        )));
    }

    let mut start = BytesStart::new(element.tag.as_str());
    for (name, value) in &element.attributes {
        if !is_valid_name(name) {
            return Err(encode_failed(format_args!(
                "invalid attribute name {:?} on <{}>",
                name, element.tag
            )));
        }
        start.push_attribute((name.as_str(), value.as_str()));
    }

    if element.children.is_empty() {
        return writer.write_event(Event::Empty(start)).map_err(encode_failed);
    }

    writer.write_event(Event::Start(start)).map_err(encode_failed)?;
    for child in &element.children {
        match child {
            MarkupNode::Element(inner) => write_element(writer, inner)?,
            MarkupNode::Comment(comment) => writer
                .write_event(Event::Comment(BytesText::from_escaped(comment.as_str())))
                .map_err(encode_failed)?,
            MarkupNode::Text(text) => writer
                .write_event(Event::Text(BytesText::new(text)))
                .map_err(encode_failed)?,
        }
    }
    writer
        .write_event(Event::End(BytesEnd::new(element.tag.as_str())))
        .map_err(encode_failed)
}

fn encode_failed(err: impl Display) -> DomainError {
    DomainError::EncodeFailed(err.to_string())
}
