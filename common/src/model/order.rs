//! The order draft edited by the "Place Order" wizard.
//!
//! Every field keeps the text the user typed or selected, so numeric inputs
//! such as quantity and unit price stay strings until the total estimate is
//! derived from them. The estimate is the only computed field and has no
//! setter: it is refreshed each time quantity or unit price changes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DraftError;

/// Kind of supplier the order is addressed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SupplierType {
    Manufacturer,
    Distributor,
    ServiceProvider,
}

impl SupplierType {
    pub const ALL: [SupplierType; 3] = [
        SupplierType::Manufacturer,
        SupplierType::Distributor,
        SupplierType::ServiceProvider,
    ];

    /// Wire value, as sent in the order payload.
    pub fn as_str(self) -> &'static str {
        match self {
            SupplierType::Manufacturer => "manufacturer",
            SupplierType::Distributor => "distributor",
            SupplierType::ServiceProvider => "service_provider",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SupplierType::Manufacturer => "Manufacturer",
            SupplierType::Distributor => "Distributor",
            SupplierType::ServiceProvider => "Service Provider",
        }
    }
}

impl fmt::Display for SupplierType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SupplierType {
    type Err = DraftError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SupplierType::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| DraftError::UnknownSupplierType(s.to_string()))
    }
}

/// Whether shipping is part of the unit price or billed on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShippingCost {
    Included,
    Separate,
}

impl ShippingCost {
    pub const ALL: [ShippingCost; 2] = [ShippingCost::Included, ShippingCost::Separate];

    pub fn as_str(self) -> &'static str {
        match self {
            ShippingCost::Included => "included",
            ShippingCost::Separate => "separate",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ShippingCost::Included => "Included",
            ShippingCost::Separate => "Separate",
        }
    }
}

impl fmt::Display for ShippingCost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ShippingCost {
    type Err = DraftError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ShippingCost::ALL
            .into_iter()
            .find(|mode| mode.as_str() == s)
            .ok_or_else(|| DraftError::UnknownShippingCost(s.to_string()))
    }
}

/// A `<select>` option: submitted value plus the text shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChoiceOption {
    pub value: &'static str,
    pub label: &'static str,
}

const fn choice(value: &'static str, label: &'static str) -> ChoiceOption {
    ChoiceOption { value, label }
}

/// The empty first entry keeps the unit unselected until the user picks one.
pub const UNITS_OF_MEASUREMENT: &[ChoiceOption] = &[
    choice("", "Select unit"),
    choice("kg", "kg"),
    choice("pieces", "pieces"),
    choice("boxes", "boxes"),
    choice("meters", "meters"),
];

pub const CURRENCIES: &[ChoiceOption] = &[
    choice("USD", "USD"),
    choice("EUR", "EUR"),
    choice("INR", "INR"),
];

pub const PAYMENT_TERMS: &[ChoiceOption] = &[
    choice("Net 30", "Net 30"),
    choice("Net 45", "Net 45"),
    choice("Net 60", "Net 60"),
];

pub const PAYMENT_METHODS: &[ChoiceOption] = &[
    choice("Bank Transfer", "Bank Transfer"),
    choice("Card", "Card"),
];

pub const INCOTERMS: &[ChoiceOption] = &[
    choice("EXW", "EXW"),
    choice("FOB", "FOB"),
    choice("CIF", "CIF"),
    choice("DDP", "DDP"),
];

/// Editable fields of an [`OrderDraft`].
///
/// The total estimate is deliberately absent: it can only change through
/// [`OrderDraft::recompute_total`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrderField {
    SupplierType,
    ProductName,
    ItemDescription,
    ProductSpecifications,
    ProductCertification,
    QuantityRequired,
    UnitOfMeasurement,
    UnitPrice,
    Currency,
    Discounts,
    PaymentTerms,
    PreferredPaymentMethod,
    EstimatedDeliveryDate,
    DeliveryLocation,
    ShippingCost,
    PackagingDetails,
    Incoterms,
}

impl OrderField {
    pub const ALL: [OrderField; 17] = [
        OrderField::SupplierType,
        OrderField::ProductName,
        OrderField::ItemDescription,
        OrderField::ProductSpecifications,
        OrderField::ProductCertification,
        OrderField::QuantityRequired,
        OrderField::UnitOfMeasurement,
        OrderField::UnitPrice,
        OrderField::Currency,
        OrderField::Discounts,
        OrderField::PaymentTerms,
        OrderField::PreferredPaymentMethod,
        OrderField::EstimatedDeliveryDate,
        OrderField::DeliveryLocation,
        OrderField::ShippingCost,
        OrderField::PackagingDetails,
        OrderField::Incoterms,
    ];

    /// Key used for this field in the JSON payload and as the form input name.
    pub fn name(self) -> &'static str {
        match self {
            OrderField::SupplierType => "supplierType",
            OrderField::ProductName => "productName",
            OrderField::ItemDescription => "itemDescription",
            OrderField::ProductSpecifications => "productSpecifications",
            OrderField::ProductCertification => "productCertification",
            OrderField::QuantityRequired => "quantityRequired",
            OrderField::UnitOfMeasurement => "unitOfMeasurement",
            OrderField::UnitPrice => "unitPrice",
            OrderField::Currency => "currency",
            OrderField::Discounts => "discounts",
            OrderField::PaymentTerms => "paymentTerms",
            OrderField::PreferredPaymentMethod => "preferredPaymentMethod",
            OrderField::EstimatedDeliveryDate => "estimatedDeliveryDate",
            OrderField::DeliveryLocation => "deliveryLocation",
            OrderField::ShippingCost => "shippingCost",
            OrderField::PackagingDetails => "packagingDetails",
            OrderField::Incoterms => "incoterms",
        }
    }

    /// Fields that only apply to goods and are hidden for service providers.
    pub fn is_goods_only(self) -> bool {
        matches!(
            self,
            OrderField::ProductSpecifications
                | OrderField::ProductCertification
                | OrderField::Incoterms
        )
    }
}

/// In-memory state of an order being composed.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderDraft {
    supplier_type: Option<SupplierType>,
    product_name: String,
    item_description: String,
    product_specifications: String,
    product_certification: String,

    quantity_required: String,
    unit_of_measurement: String,
    unit_price: String,
    currency: String,
    total_price_estimate: String,
    discounts: String,

    payment_terms: String,
    preferred_payment_method: String,
    estimated_delivery_date: String,
    delivery_location: String,
    shipping_cost: Option<ShippingCost>,
    packaging_details: String,
    incoterms: String,
}

impl Default for OrderDraft {
    fn default() -> Self {
        Self::new()
    }
}

impl OrderDraft {
    /// A draft carrying the defaults the order form opens with.
    pub fn new() -> Self {
        Self {
            supplier_type: Some(SupplierType::Manufacturer),
            product_name: String::new(),
            item_description: String::new(),
            product_specifications: String::new(),
            product_certification: String::new(),

            quantity_required: String::new(),
            unit_of_measurement: String::new(),
            unit_price: String::new(),
            currency: "USD".to_string(),
            total_price_estimate: String::new(),
            discounts: String::new(),

            payment_terms: "Net 30".to_string(),
            preferred_payment_method: "Bank Transfer".to_string(),
            estimated_delivery_date: String::new(),
            delivery_location: String::new(),
            shipping_cost: Some(ShippingCost::Included),
            packaging_details: String::new(),
            incoterms: "FOB".to_string(),
        }
    }

    pub fn supplier_type(&self) -> Option<SupplierType> {
        self.supplier_type
    }

    pub fn shipping_cost(&self) -> Option<ShippingCost> {
        self.shipping_cost
    }

    pub fn is_service_provider(&self) -> bool {
        self.supplier_type == Some(SupplierType::ServiceProvider)
    }

    /// Current text of `field`. Unset enum fields read as `""`.
    pub fn value(&self, field: OrderField) -> &str {
        match field {
            OrderField::SupplierType => self.supplier_type.map_or("", SupplierType::as_str),
            OrderField::ProductName => &self.product_name,
            OrderField::ItemDescription => &self.item_description,
            OrderField::ProductSpecifications => &self.product_specifications,
            OrderField::ProductCertification => &self.product_certification,
            OrderField::QuantityRequired => &self.quantity_required,
            OrderField::UnitOfMeasurement => &self.unit_of_measurement,
            OrderField::UnitPrice => &self.unit_price,
            OrderField::Currency => &self.currency,
            OrderField::Discounts => &self.discounts,
            OrderField::PaymentTerms => &self.payment_terms,
            OrderField::PreferredPaymentMethod => &self.preferred_payment_method,
            OrderField::EstimatedDeliveryDate => &self.estimated_delivery_date,
            OrderField::DeliveryLocation => &self.delivery_location,
            OrderField::ShippingCost => self.shipping_cost.map_or("", ShippingCost::as_str),
            OrderField::PackagingDetails => &self.packaging_details,
            OrderField::Incoterms => &self.incoterms,
        }
    }

    /// Derived `quantity × unit price`, or `""` when either side is not a number.
    pub fn total_price_estimate(&self) -> &str {
        &self.total_price_estimate
    }

    /// Stores `value` into `field`.
    ///
    /// Supplier type and shipping cost accept their wire values or `""` (unset).
    /// Changing quantity or unit price refreshes the total estimate. On error
    /// the draft is left untouched.
    pub fn set(&mut self, field: OrderField, value: impl Into<String>) -> Result<(), DraftError> {
        let value = value.into();
        match field {
            OrderField::SupplierType => {
                self.supplier_type = if value.is_empty() {
                    None
                } else {
                    Some(value.parse()?)
                };
            }
            OrderField::ShippingCost => {
                self.shipping_cost = if value.is_empty() {
                    None
                } else {
                    Some(value.parse()?)
                };
            }
            OrderField::ProductName => self.product_name = value,
            OrderField::ItemDescription => self.item_description = value,
            OrderField::ProductSpecifications => self.product_specifications = value,
            OrderField::ProductCertification => self.product_certification = value,
            OrderField::QuantityRequired => {
                self.quantity_required = value;
                self.recompute_total();
            }
            OrderField::UnitOfMeasurement => self.unit_of_measurement = value,
            OrderField::UnitPrice => {
                self.unit_price = value;
                self.recompute_total();
            }
            OrderField::Currency => self.currency = value,
            OrderField::Discounts => self.discounts = value,
            OrderField::PaymentTerms => self.payment_terms = value,
            OrderField::PreferredPaymentMethod => self.preferred_payment_method = value,
            OrderField::EstimatedDeliveryDate => self.estimated_delivery_date = value,
            OrderField::DeliveryLocation => self.delivery_location = value,
            OrderField::PackagingDetails => self.packaging_details = value,
            OrderField::Incoterms => self.incoterms = value,
        }
        Ok(())
    }

    pub fn set_supplier_type(&mut self, supplier_type: Option<SupplierType>) {
        self.supplier_type = supplier_type;
    }

    pub fn set_shipping_cost(&mut self, shipping_cost: Option<ShippingCost>) {
        self.shipping_cost = shipping_cost;
    }

    /// Re-derives the total estimate from quantity and unit price.
    pub fn recompute_total(&mut self) {
        self.total_price_estimate =
            compute_total_estimate(&self.quantity_required, &self.unit_price)
                .map(format_amount)
                .unwrap_or_default();
    }
}

/// `quantity × unit_price` when both parse as finite numbers and the product
/// stays finite.
pub fn compute_total_estimate(quantity: &str, unit_price: &str) -> Option<f64> {
    let quantity = parse_amount(quantity)?;
    let unit_price = parse_amount(unit_price)?;
    Some(quantity * unit_price)
}

fn parse_amount(text: &str) -> Option<f64> {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

/// Shortest decimal text that round-trips `value` (`1000.0` -> `"1000"`).
///
/// A product of two finite inputs can still overflow; it prints as
/// `Infinity` / `-Infinity`.
pub fn format_amount(value: f64) -> String {
    // -0 prints as "-0"
    if value == 0.0 {
        return "0".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    value.to_string()
}
