use crate::error::GatewayError;
use quick_xml::{
    Writer,
    events::{BytesEnd, BytesStart, BytesText, Event},
};
use std::io::Write;

/// A narrow interface for producing the nested XML documents exchanged with
/// the remote accounting service.
///
/// Entity encoders take `&mut impl XmlBuilder` instead of a concrete writer,
/// so a single entity fragment can be composed into a larger document (for
/// example a list of items inside a request envelope) by whoever drives the
/// encoding.
///
/// Only two capabilities exist: opening a tagged scope of children, and
/// writing a text leaf.
pub trait XmlBuilder {
    /// Opens a `<tag>` scope, invokes `children` to fill it, then closes it.
    fn element(
        &mut self,
        tag: &str,
        children: impl FnOnce(&mut Self) -> Result<(), GatewayError>,
    ) -> Result<(), GatewayError>;

    /// Writes `<tag>text</tag>`, or the empty-element form `<tag/>` when
    /// `text` is empty.
    fn leaf(&mut self, tag: &str, text: &str) -> Result<(), GatewayError>;
}

/// An [`XmlBuilder`] writing through `quick_xml` to any [`Write`] sink.
///
/// Text content is escaped on write; no declaration or indentation is
/// emitted, matching the compact fragments the remote service expects.
///
/// # Examples
///
/// ```
/// use ledger_gateway::xml::{QuickXmlBuilder, XmlBuilder};
///
/// let mut builder = QuickXmlBuilder::new(Vec::new());
/// builder
///     .element("Items", |b| b.leaf("Code", "ITEM1"))
///     .unwrap();
///
/// let xml = String::from_utf8(builder.into_inner()).unwrap();
/// assert_eq!(xml, "<Items><Code>ITEM1</Code></Items>");
/// ```
pub struct QuickXmlBuilder<W: Write> {
    writer: Writer<W>,
}

impl<W: Write> QuickXmlBuilder<W> {
    /// Creates a builder writing to `sink`.
    pub fn new(sink: W) -> Self {
        Self {
            writer: Writer::new(sink),
        }
    }

    /// Consumes the builder and returns the underlying sink.
    pub fn into_inner(self) -> W {
        self.writer.into_inner()
    }
}

impl<W: Write> XmlBuilder for QuickXmlBuilder<W> {
    fn element(
        &mut self,
        tag: &str,
        children: impl FnOnce(&mut Self) -> Result<(), GatewayError>,
    ) -> Result<(), GatewayError> {
        self.writer
            .write_event(Event::Start(BytesStart::new(tag)))
            .map_err(|e| GatewayError::XmlWrite(format!("start of <{}>: {}", tag, e)))?;

        children(self)?;

        self.writer
            .write_event(Event::End(BytesEnd::new(tag)))
            .map_err(|e| GatewayError::XmlWrite(format!("end of <{}>: {}", tag, e)))
    }

    fn leaf(&mut self, tag: &str, text: &str) -> Result<(), GatewayError> {
        if text.is_empty() {
            return self
                .writer
                .write_event(Event::Empty(BytesStart::new(tag)))
                .map_err(|e| GatewayError::XmlWrite(format!("empty <{}>: {}", tag, e)));
        }

        self.writer
            .write_event(Event::Start(BytesStart::new(tag)))
            .map_err(|e| GatewayError::XmlWrite(format!("start of <{}>: {}", tag, e)))?;
        self.writer
            .write_event(Event::Text(BytesText::new(text)))
            .map_err(|e| GatewayError::XmlWrite(format!("text of <{}>: {}", tag, e)))?;
        self.writer
            .write_event(Event::End(BytesEnd::new(tag)))
            .map_err(|e| GatewayError::XmlWrite(format!("end of <{}>: {}", tag, e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(build: impl FnOnce(&mut QuickXmlBuilder<Vec<u8>>) -> Result<(), GatewayError>) -> String {
        let mut builder = QuickXmlBuilder::new(Vec::new());
        build(&mut builder).unwrap();
        String::from_utf8(builder.into_inner()).unwrap()
    }

    #[test]
    fn nested_scopes_close_in_order() {
        let xml = render(|b| {
            b.element("Outer", |b| {
                b.leaf("First", "1")?;
                b.element("Inner", |b| b.leaf("Second", "2"))
            })
        });

        assert_eq!(
            xml,
            "<Outer><First>1</First><Inner><Second>2</Second></Inner></Outer>"
        );
    }

    #[test]
    fn empty_text_uses_empty_element_form() {
        let xml = render(|b| b.element("Item", |b| b.leaf("ItemID", "")));

        assert_eq!(xml, "<Item><ItemID/></Item>");
    }

    #[test]
    fn leaf_text_is_escaped() {
        let xml = render(|b| b.leaf("Description", "Nuts & <bolts>"));

        assert_eq!(
            xml,
            "<Description>Nuts &amp; &lt;bolts&gt;</Description>"
        );
    }
}
