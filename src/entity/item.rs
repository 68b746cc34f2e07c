use crate::error::GatewayError;
use crate::gateway::Gateway;
use crate::xml::{XmlBuilder, XmlElement};
use log::debug;
use serde::{Deserialize, Serialize};
use std::sync::Weak;
use uuid::Uuid;

/// A single field-level rule violation reported by [`Item::validate`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    /// Name of the offending field.
    pub field: &'static str,
    /// Human-readable message mirroring the remote service's wording.
    pub message: &'static str,
}

/// A catalog item template as understood by the remote accounting service.
///
/// All data fields are optional strings, matching the wire format: the
/// service owns typing and precision, this side only shuttles values.
/// Prices are decimals rendered as strings (`"10.00"`), and `item_id` is a
/// GUID assigned by the service, never generated locally.
///
/// Items are built with [`Item::builder`] or decoded from a parsed
/// [`XmlElement`], then mutated through their public fields.
///
/// # Examples
///
/// ```
/// use ledger_gateway::entity::item::Item;
/// use ledger_gateway::xml::QuickXmlBuilder;
///
/// let item = Item::builder()
///     .code("ITEM1")
///     .description("Widget")
///     .sales_unit_price("10.00")
///     .sales_account_code("200")
///     .build();
///
/// assert!(item.is_valid());
/// assert!(item.has_sales_details());
///
/// let mut builder = QuickXmlBuilder::new(Vec::new());
/// item.to_xml(&mut builder).unwrap();
/// let xml = String::from_utf8(builder.into_inner()).unwrap();
/// assert!(xml.contains("<SalesDetails>"));
/// assert!(!xml.contains("<PurchaseDetails>"));
/// ```
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct Item {
    /// Identifier assigned by the remote service; blank until the item has
    /// been persisted there.
    pub item_id: Option<String>,
    /// Merchant-defined SKU.
    pub code: Option<String>,
    pub description: Option<String>,
    pub sales_unit_price: Option<String>,
    pub sales_account_code: Option<String>,
    pub sales_tax_type: Option<String>,
    pub purchase_unit_price: Option<String>,
    pub purchase_account_code: Option<String>,
    pub purchase_tax_type: Option<String>,
    /// Back-reference to the transport this item was fetched through.
    /// Association only: non-owning, never serialized, ignored by equality.
    #[serde(skip)]
    pub gateway: Option<Weak<dyn Gateway>>,
}

impl Item {
    /// Starts a builder with every field unset.
    pub fn builder() -> ItemBuilder {
        ItemBuilder::default()
    }

    /// Checks the item against the remote service's known constraints and
    /// returns every violation found.
    ///
    /// Both rules run regardless of the other's outcome:
    ///
    /// - `item_id`, when set and non-empty, must be a GUID
    ///   (8-4-4-4-12 hex digits, case-insensitive, optionally braced);
    /// - `description` must be non-empty.
    ///
    /// This is purely local and performs no gateway interaction, so a clean
    /// result does not guarantee the service will accept the item.
    ///
    /// # Examples
    ///
    /// ```
    /// use ledger_gateway::entity::item::Item;
    ///
    /// let item = Item::builder().item_id("not-a-guid").build();
    /// let violations = item.validate();
    ///
    /// assert_eq!(violations.len(), 2);
    /// assert_eq!(violations[0].field, "item_id");
    /// assert_eq!(violations[1].field, "description");
    /// ```
    pub fn validate(&self) -> Vec<Violation> {
        let mut violations = Vec::new();

        if let Some(item_id) = self.item_id.as_deref()
            && !item_id.is_empty()
            && !is_guid(item_id)
        {
            violations.push(Violation {
                field: "item_id",
                message: "must be blank or a valid GUID",
            });
        }

        if !is_set(&self.description) {
            violations.push(Violation {
                field: "description",
                message: "can't be blank",
            });
        }

        violations
    }

    /// Whether [`Item::validate`] finds no violations.
    pub fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }

    /// Whether either purchase detail field holds a non-empty value.
    pub fn has_purchase_details(&self) -> bool {
        is_set(&self.purchase_unit_price) || is_set(&self.purchase_account_code)
    }

    /// Whether either sales detail field holds a non-empty value.
    pub fn has_sales_details(&self) -> bool {
        is_set(&self.sales_unit_price) || is_set(&self.sales_account_code)
    }

    /// Encodes the item as an `<Item>` fragment through `builder`.
    ///
    /// `Code`, `Description` and `ItemID` are always emitted, in that order,
    /// using the empty-element form when unset. The `PurchaseDetails` and
    /// `SalesDetails` blocks follow, each present only when the matching
    /// predicate holds. The tax type fields are never emitted; the service
    /// manages tax rates through a separate surface.
    ///
    /// No validation happens here; call [`Item::validate`] first.
    pub fn to_xml(&self, builder: &mut impl XmlBuilder) -> Result<(), GatewayError> {
        builder.element("Item", |b| {
            b.leaf("Code", self.code.as_deref().unwrap_or(""))?;
            b.leaf("Description", self.description.as_deref().unwrap_or(""))?;
            b.leaf("ItemID", self.item_id.as_deref().unwrap_or(""))?;

            if self.has_purchase_details() {
                b.element("PurchaseDetails", |b| {
                    b.leaf("UnitPrice", self.purchase_unit_price.as_deref().unwrap_or(""))?;
                    b.leaf(
                        "AccountCode",
                        self.purchase_account_code.as_deref().unwrap_or(""),
                    )
                })?;
            }

            if self.has_sales_details() {
                b.element("SalesDetails", |b| {
                    b.leaf("UnitPrice", self.sales_unit_price.as_deref().unwrap_or(""))?;
                    b.leaf(
                        "AccountCode",
                        self.sales_account_code.as_deref().unwrap_or(""),
                    )
                })?;
            }

            Ok(())
        })
    }

    /// Decodes an item from a parsed `<Item>` element.
    ///
    /// Walks the immediate children by tag name; unknown tags are skipped so
    /// newer service schemas keep decoding, and missing children simply
    /// leave the matching field unset. The tax type fields are not populated
    /// by this path.
    pub fn from_xml(element: &XmlElement) -> Self {
        let mut item = Item::default();

        for child in element.children() {
            match child.name() {
                "ItemID" => item.item_id = text_value(child),
                "Description" => item.description = text_value(child),
                "Code" => item.code = text_value(child),
                "PurchaseDetails" => {
                    for detail in child.children() {
                        match detail.name() {
                            "UnitPrice" => item.purchase_unit_price = text_value(detail),
                            "AccountCode" => item.purchase_account_code = text_value(detail),
                            _ => {}
                        }
                    }
                }
                "SalesDetails" => {
                    for detail in child.children() {
                        match detail.name() {
                            "UnitPrice" => item.sales_unit_price = text_value(detail),
                            "AccountCode" => item.sales_account_code = text_value(detail),
                            _ => {}
                        }
                    }
                }
                other => debug!("Skipping unrecognised <{}> in <Item>", other),
            }
        }

        item
    }
}

/// Field-wise equality over the nine data fields. The gateway association
/// does not participate.
impl PartialEq for Item {
    fn eq(&self, other: &Self) -> bool {
        self.item_id == other.item_id
            && self.code == other.code
            && self.description == other.description
            && self.sales_unit_price == other.sales_unit_price
            && self.sales_account_code == other.sales_account_code
            && self.sales_tax_type == other.sales_tax_type
            && self.purchase_unit_price == other.purchase_unit_price
            && self.purchase_account_code == other.purchase_account_code
            && self.purchase_tax_type == other.purchase_tax_type
    }
}

/// Builder for [`Item`], one chainable setter per data field.
///
/// # Examples
///
/// ```
/// use ledger_gateway::entity::item::Item;
///
/// let item = Item::builder()
///     .code("ITEM1")
///     .description("Widget")
///     .build();
///
/// assert_eq!(item.code.as_deref(), Some("ITEM1"));
/// assert!(item.item_id.is_none());
/// ```
#[derive(Debug, Default, Clone)]
pub struct ItemBuilder {
    item_id: Option<String>,
    code: Option<String>,
    description: Option<String>,
    sales_unit_price: Option<String>,
    sales_account_code: Option<String>,
    sales_tax_type: Option<String>,
    purchase_unit_price: Option<String>,
    purchase_account_code: Option<String>,
    purchase_tax_type: Option<String>,
}

impl ItemBuilder {
    pub fn item_id(mut self, item_id: impl Into<String>) -> Self {
        self.item_id = Some(item_id.into());
        self
    }

    pub fn code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn sales_unit_price(mut self, price: impl Into<String>) -> Self {
        self.sales_unit_price = Some(price.into());
        self
    }

    pub fn sales_account_code(mut self, account_code: impl Into<String>) -> Self {
        self.sales_account_code = Some(account_code.into());
        self
    }

    pub fn sales_tax_type(mut self, tax_type: impl Into<String>) -> Self {
        self.sales_tax_type = Some(tax_type.into());
        self
    }

    pub fn purchase_unit_price(mut self, price: impl Into<String>) -> Self {
        self.purchase_unit_price = Some(price.into());
        self
    }

    pub fn purchase_account_code(mut self, account_code: impl Into<String>) -> Self {
        self.purchase_account_code = Some(account_code.into());
        self
    }

    pub fn purchase_tax_type(mut self, tax_type: impl Into<String>) -> Self {
        self.purchase_tax_type = Some(tax_type.into());
        self
    }

    /// Finishes the builder.
    pub fn build(self) -> Item {
        Item {
            item_id: self.item_id,
            code: self.code,
            description: self.description,
            sales_unit_price: self.sales_unit_price,
            sales_account_code: self.sales_account_code,
            sales_tax_type: self.sales_tax_type,
            purchase_unit_price: self.purchase_unit_price,
            purchase_account_code: self.purchase_account_code,
            purchase_tax_type: self.purchase_tax_type,
            gateway: None,
        }
    }
}

fn is_set(field: &Option<String>) -> bool {
    field.as_deref().is_some_and(|value| !value.is_empty())
}

fn text_value(element: &XmlElement) -> Option<String> {
    let text = element.text();
    if text.is_empty() {
        None
    } else {
        Some(text.to_string())
    }
}

fn is_guid(value: &str) -> bool {
    let inner = value
        .strip_prefix('{')
        .and_then(|v| v.strip_suffix('}'))
        .unwrap_or(value);
    // 36 bytes pins the hyphenated 8-4-4-4-12 form; `Uuid::try_parse` alone
    // would also accept the 32-digit form the service rejects.
    inner.len() == 36 && Uuid::try_parse(inner).is_ok()
}
