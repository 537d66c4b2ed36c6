use cotendo_dns_domain::{DomainError, MarkupElement, MarkupNode};
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use std::fmt::Display;

/// Strict parse of well-formed markup into a [`MarkupElement`] tree.
///
/// Whitespace-only text is discarded. The document must have exactly one
/// root element; comments outside it are ignored.
pub fn parse_document(xml: &str) -> Result<MarkupElement, DomainError> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut stack: Vec<MarkupElement> = Vec::new();
    let mut root: Option<MarkupElement> = None;

    loop {
        match reader.read_event().map_err(malformed)? {
            Event::Start(start) => {
                if stack.is_empty() && root.is_some() {
                    return Err(malformed("document has more than one root element"));
                }
                stack.push(element_from_start(&start)?);
            }
            Event::Empty(start) => {
                let element = element_from_start(&start)?;
                attach(&mut stack, &mut root, element)?;
            }
            Event::End(_) => {
                let element = stack
                    .pop()
                    .ok_or_else(|| malformed("closing tag without open element"))?;
                attach(&mut stack, &mut root, element)?;
            }
            Event::Text(text) => {
                let text = text.unescape().map_err(malformed)?;
                push_text(&mut stack, &text)?;
            }
            Event::CData(data) => {
                push_text(&mut stack, &String::from_utf8_lossy(&data))?;
            }
            Event::Comment(comment) => {
                if let Some(parent) = stack.last_mut() {
                    parent.push(MarkupNode::Comment(
                        String::from_utf8_lossy(&comment).into_owned(),
                    ));
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if let Some(open) = stack.last() {
        return Err(malformed(format!("element <{}> is never closed", open.tag)));
    }

    root.ok_or_else(|| malformed("document has no root element"))
}

fn element_from_start(start: &BytesStart<'_>) -> Result<MarkupElement, DomainError> {
    let mut element = MarkupElement::new(String::from_utf8_lossy(start.name().as_ref()));
    for attribute in start.attributes() {
        let attribute = attribute.map_err(malformed)?;
        let name = String::from_utf8_lossy(attribute.key.as_ref()).into_owned();
        let value = attribute.unescape_value().map_err(malformed)?;
        element.attributes.push((name, value.into_owned()));
    }
    Ok(element)
}

fn attach(
    stack: &mut [MarkupElement],
    root: &mut Option<MarkupElement>,
    element: MarkupElement,
) -> Result<(), DomainError> {
    match stack.last_mut() {
        Some(parent) => parent.push_element(element),
        None if root.is_some() => {
            return Err(malformed("document has more than one root element"));
        }
        None => *root = Some(element),
    }
    Ok(())
}

fn push_text(stack: &mut [MarkupElement], text: &str) -> Result<(), DomainError> {
    if text.trim().is_empty() {
        return Ok(());
    }
    match stack.last_mut() {
        Some(parent) => {
            parent.push(MarkupNode::Text(text.to_string()));
            Ok(())
        }
        None => Err(malformed("text outside the root element")),
    }
}

fn malformed(err: impl Display) -> DomainError {
    DomainError::MalformedConfig(err.to_string())
}
