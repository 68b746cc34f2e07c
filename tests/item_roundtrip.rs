use ledger_gateway::entity::item::Item;
use ledger_gateway::xml::{QuickXmlBuilder, XmlBuilder, XmlElement};
use std::fs::{File, read_to_string};
use std::io::{BufWriter, Write};
use tempfile::NamedTempFile;

#[test]
fn items_compose_into_one_document_and_survive_a_file_round_trip() {
    let widget = Item::builder()
        .code("ITEM1")
        .description("Widget")
        .sales_unit_price("10.00")
        .sales_account_code("200")
        .build();

    let gadget = Item::builder()
        .item_id("0efb78f3-4b87-4d07-b1ad-9b12b0ef1b3a")
        .code("ITEM2")
        .description("Gadget")
        .purchase_unit_price("6.50")
        .purchase_account_code("300")
        .build();

    // Encode both items into a single document through the shared builder,
    // the way a transport composes a request body.
    let temp_file = NamedTempFile::new().unwrap();
    let file = File::create(temp_file.path()).expect("Failed to create XML file");
    let mut builder = QuickXmlBuilder::new(BufWriter::new(file));
    builder
        .element("Items", |b| {
            widget.to_xml(b)?;
            gadget.to_xml(b)
        })
        .unwrap();
    builder.into_inner().flush().unwrap();

    let content = read_to_string(temp_file.path()).expect("Failed to read XML file back");

    assert!(content.starts_with("<Items><Item>"));
    assert!(content.ends_with("</Item></Items>"));
    assert!(content.contains("<Code>ITEM1</Code>"));
    assert!(content.contains("<SalesDetails><UnitPrice>10.00</UnitPrice><AccountCode>200</AccountCode></SalesDetails>"));
    assert!(content.contains("<ItemID>0efb78f3-4b87-4d07-b1ad-9b12b0ef1b3a</ItemID>"));
    assert!(content.contains("<PurchaseDetails><UnitPrice>6.50</UnitPrice><AccountCode>300</AccountCode></PurchaseDetails>"));

    // Decode the document and compare field-wise against the originals.
    let root = XmlElement::parse(&content).unwrap();
    assert_eq!(root.name(), "Items");

    let decoded: Vec<Item> = root.children().iter().map(Item::from_xml).collect();
    assert_eq!(decoded.len(), 2);
    assert_eq!(decoded[0], widget);
    assert_eq!(decoded[1], gadget);
}

#[test]
fn special_characters_survive_the_round_trip() {
    let item = Item::builder()
        .code("BOLT-3")
        .description("Nuts & bolts <assorted>")
        .build();

    let mut builder = QuickXmlBuilder::new(Vec::new());
    item.to_xml(&mut builder).unwrap();
    let xml = String::from_utf8(builder.into_inner()).unwrap();

    assert!(xml.contains("Nuts &amp; bolts &lt;assorted&gt;"));

    let decoded = Item::from_xml(&XmlElement::parse(&xml).unwrap());
    assert_eq!(decoded, item);
}

#[test]
fn validation_failures_read_back_as_field_message_pairs() {
    let item = Item::builder().item_id("not-a-guid").code("ITEM1").build();

    let violations = item.validate();
    let summary: Vec<(&str, &str)> = violations
        .iter()
        .map(|v| (v.field, v.message))
        .collect();

    assert_eq!(
        summary,
        vec![
            ("item_id", "must be blank or a valid GUID"),
            ("description", "can't be blank"),
        ]
    );
}
