/*!
 # Ledger Gateway

 Entity types and XML wire codec for a remote accounting service gateway.

 This crate holds the in-memory representation of the service's catalog
 entities, the field-level validation the service is known to apply, and the
 bidirectional mapping between entities and the nested XML fragments the
 service exchanges. The HTTP transport itself (the "gateway"), the request
 envelope and authentication are collaborators implemented elsewhere; they
 hand parsed elements in and take encoded fragments out.

 ## Core Concepts

 - **Entity:** a plain value object mirroring one record type of the remote
   service, built through a typed builder or decoded from XML. Currently the
   catalog [`Item`](entity::item::Item).
 - **Validation:** [`validate`](entity::item::Item::validate) mirrors the
   service's constraints locally and returns violations as values, so
   callers can surface messages before paying for a round trip.
 - **Codec seam:** encoding goes through the narrow
   [`XmlBuilder`](xml::XmlBuilder) interface, letting a transport compose
   entity fragments into larger documents; decoding consumes a parsed
   [`XmlElement`](xml::XmlElement) tree.
 - **Gateway:** the transport trait entities keep a non-owning
   back-reference to; implementations live outside this crate.

 ## Getting Started

```rust
use ledger_gateway::entity::item::Item;
use ledger_gateway::xml::{QuickXmlBuilder, XmlElement};

fn main() -> Result<(), ledger_gateway::GatewayError> {
    let item = Item::builder()
        .code("ITEM1")
        .description("Widget")
        .sales_unit_price("10.00")
        .sales_account_code("200")
        .build();

    // Mirror the service's checks before submitting.
    assert!(item.is_valid());

    // Encode into a fragment a transport can embed in its envelope.
    let mut builder = QuickXmlBuilder::new(Vec::new());
    item.to_xml(&mut builder)?;
    let xml = String::from_utf8(builder.into_inner()).expect("writer emits UTF-8");

    // Decode a service response back into an entity.
    let decoded = Item::from_xml(&XmlElement::parse(&xml)?);
    assert_eq!(decoded.code.as_deref(), Some("ITEM1"));

    Ok(())
}
```
 */

/// Entity types and their validation rules
pub mod entity;

/// Error types for codec operations
pub mod error;

/// Transport collaborator seam
pub mod gateway;

#[doc(inline)]
pub use error::*;

/// XML wire codec: builder interface and element tree
pub mod xml;
