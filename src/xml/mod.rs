/// XML support for the remote accounting service's wire format.
///
/// This module provides the two halves of the codec seam used by the entity
/// types: a narrow [`XmlBuilder`] interface (with a `quick-xml` backed
/// implementation) for producing nested documents, and an [`XmlElement`]
/// tree for consuming them.
///
/// # Examples
///
/// ```
/// use ledger_gateway::xml::{QuickXmlBuilder, XmlBuilder, XmlElement};
///
/// // Encode a fragment through the builder interface.
/// let mut builder = QuickXmlBuilder::new(Vec::new());
/// builder
///     .element("Item", |b| {
///         b.leaf("Code", "ITEM1")?;
///         b.leaf("Description", "Widget")
///     })
///     .unwrap();
/// let xml = String::from_utf8(builder.into_inner()).unwrap();
///
/// // Parse it back into an element tree.
/// let element = XmlElement::parse(&xml).unwrap();
/// assert_eq!(element.name(), "Item");
/// assert_eq!(element.children()[1].text(), "Widget");
/// ```
pub mod element;
pub mod writer;

pub use element::XmlElement;
pub use writer::{QuickXmlBuilder, XmlBuilder};
