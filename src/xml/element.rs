use crate::error::GatewayError;
use log::error;
use quick_xml::escape::unescape;
use quick_xml::events::{BytesStart, Event};
use quick_xml::reader::Reader;
use std::str;

/// A parsed XML element: tag name, accumulated text content and child
/// elements, in document order.
///
/// This is the tree handed to the entity decoders. Attributes are not kept;
/// the remote service's entity schema carries everything in nested elements.
///
/// # Examples
///
/// ```
/// use ledger_gateway::xml::XmlElement;
///
/// let element = XmlElement::parse("<Item><Code>ITEM1</Code></Item>").unwrap();
///
/// assert_eq!(element.name(), "Item");
/// assert_eq!(element.children().len(), 1);
/// assert_eq!(element.children()[0].text(), "ITEM1");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XmlElement {
    name: String,
    text: String,
    children: Vec<XmlElement>,
}

impl XmlElement {
    fn named(name: String) -> Self {
        Self {
            name,
            text: String::new(),
            children: Vec::new(),
        }
    }

    fn closed(mut self) -> Self {
        // Formatting whitespace around child elements collects in the
        // parent's text; one trim per element removes it.
        if self.text.trim().len() != self.text.len() {
            self.text = self.text.trim().to_string();
        }
        self
    }

    /// Parses a document and returns its root element.
    ///
    /// Text nodes are unescaped, entity and character references resolved,
    /// and CDATA sections taken verbatim; all accumulate into the owning
    /// element's text content, trimmed of surrounding whitespace. Comments,
    /// declarations and processing instructions are skipped. Malformed
    /// input fails with [`GatewayError::XmlRead`].
    pub fn parse(xml: &str) -> Result<Self, GatewayError> {
        let mut reader = Reader::from_str(xml);

        let mut stack: Vec<XmlElement> = Vec::new();

        loop {
            match reader.read_event() {
                Ok(Event::Start(start)) => {
                    stack.push(XmlElement::named(tag_name(&start)?));
                }
                Ok(Event::Empty(start)) => {
                    let element = XmlElement::named(tag_name(&start)?);
                    match stack.last_mut() {
                        Some(parent) => parent.children.push(element),
                        None => return Ok(element),
                    }
                }
                Ok(Event::End(_)) => {
                    // Mismatched end tags are already rejected by the reader,
                    // so the stack cannot be empty here.
                    let element = stack
                        .pop()
                        .ok_or_else(|| {
                            GatewayError::XmlRead("closing tag without opening tag".to_string())
                        })?
                        .closed();
                    match stack.last_mut() {
                        Some(parent) => parent.children.push(element),
                        None => return Ok(element),
                    }
                }
                Ok(Event::Text(text)) => {
                    if let Some(current) = stack.last_mut() {
                        let raw = str::from_utf8(text.as_ref()).map_err(|e| {
                            GatewayError::XmlRead(format!("Invalid UTF-8 in text node: {}", e))
                        })?;
                        let unescaped = unescape(raw).map_err(|e| {
                            GatewayError::XmlRead(format!("Invalid escape in text node: {}", e))
                        })?;
                        current.text.push_str(&unescaped);
                    }
                }
                Ok(Event::GeneralRef(reference)) => {
                    if let Some(current) = stack.last_mut() {
                        let raw = str::from_utf8(reference.as_ref()).map_err(|e| {
                            GatewayError::XmlRead(format!("Invalid UTF-8 in reference: {}", e))
                        })?;
                        let entity = format!("&{};", raw);
                        let resolved = unescape(&entity).map_err(|e| {
                            GatewayError::XmlRead(format!(
                                "Unresolved entity reference &{};: {}",
                                raw, e
                            ))
                        })?;
                        current.text.push_str(&resolved);
                    }
                }
                Ok(Event::CData(cdata)) => {
                    if let Some(current) = stack.last_mut() {
                        let raw = str::from_utf8(cdata.as_ref()).map_err(|e| {
                            GatewayError::XmlRead(format!("Invalid UTF-8 in CDATA: {}", e))
                        })?;
                        current.text.push_str(raw);
                    }
                }
                Ok(Event::Eof) => {
                    return Err(GatewayError::XmlRead(
                        "document has no root element".to_string(),
                    ));
                }
                Ok(_) => {}
                Err(e) => {
                    error!("XML parsing error: {}", e);
                    return Err(GatewayError::XmlRead(format!("XML parsing error: {}", e)));
                }
            }
        }
    }

    /// The element's tag name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The element's own text content, trimmed of surrounding whitespace.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The immediate child elements, in document order.
    pub fn children(&self) -> &[XmlElement] {
        &self.children
    }
}

fn tag_name(start: &BytesStart) -> Result<String, GatewayError> {
    str::from_utf8(start.name().as_ref())
        .map(str::to_string)
        .map_err(|e| GatewayError::XmlRead(format!("Invalid UTF-8 in tag name: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_nested_elements_in_document_order() {
        let element = XmlElement::parse(
            "<Item><Code>ITEM1</Code><SalesDetails><UnitPrice>10.00</UnitPrice><AccountCode>200</AccountCode></SalesDetails></Item>",
        )
        .unwrap();

        assert_eq!(element.name(), "Item");
        assert_eq!(element.children().len(), 2);
        assert_eq!(element.children()[0].name(), "Code");
        assert_eq!(element.children()[0].text(), "ITEM1");

        let details = &element.children()[1];
        assert_eq!(details.name(), "SalesDetails");
        assert_eq!(details.children()[0].text(), "10.00");
        assert_eq!(details.children()[1].text(), "200");
    }

    #[test]
    fn formatting_whitespace_is_not_text_content() {
        let element = XmlElement::parse(
            "<Item>\n  <Code>ITEM1</Code>\n  <Description>  Widget  </Description>\n</Item>",
        )
        .unwrap();

        assert_eq!(element.text(), "");
        assert_eq!(element.children()[0].text(), "ITEM1");
        assert_eq!(element.children()[1].text(), "Widget");
    }

    #[test]
    fn empty_element_form_parses_to_empty_text() {
        let element = XmlElement::parse("<Item><ItemID/></Item>").unwrap();

        assert_eq!(element.children()[0].name(), "ItemID");
        assert_eq!(element.children()[0].text(), "");
        assert!(element.children()[0].children().is_empty());
    }

    #[test]
    fn text_is_unescaped_and_cdata_taken_verbatim() {
        let element = XmlElement::parse(
            "<Item><Description>Nuts &amp; bolts</Description><Code><![CDATA[A<B]]></Code></Item>",
        )
        .unwrap();

        assert_eq!(element.children()[0].text(), "Nuts & bolts");
        assert_eq!(element.children()[1].text(), "A<B");
    }

    #[test]
    fn character_references_resolve() {
        let element = XmlElement::parse("<Code>A&#38;B &#x26; C</Code>").unwrap();

        assert_eq!(element.text(), "A&B & C");
    }

    #[test]
    fn bare_empty_root_parses() {
        let element = XmlElement::parse("<Item/>").unwrap();

        assert_eq!(element.name(), "Item");
        assert!(element.children().is_empty());
    }

    #[test]
    fn malformed_document_is_an_error() {
        let result = XmlElement::parse("<Item><Code>ITEM1</Item>");

        assert!(matches!(result, Err(GatewayError::XmlRead(_))));
    }

    #[test]
    fn empty_input_is_an_error() {
        let result = XmlElement::parse("");

        assert!(matches!(result, Err(GatewayError::XmlRead(_))));
    }
}
