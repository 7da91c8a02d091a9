use crate::model::order::{OrderDraft, OrderField};
use crate::wizard::Step;

/// One "label: value" line of the review summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewRow {
    pub label: &'static str,
    pub value: String,
    /// Spans the full summary width (long free text).
    pub wide: bool,
}

/// A block of the review summary, with an edit link back to `step`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewSection {
    pub step: Step,
    pub title: &'static str,
    pub rows: Vec<ReviewRow>,
}

fn row(label: &'static str, value: impl Into<String>) -> ReviewRow {
    ReviewRow {
        label,
        value: value.into(),
        wide: false,
    }
}

fn wide_row(label: &'static str, value: impl Into<String>) -> ReviewRow {
    ReviewRow {
        wide: true,
        ..row(label, value)
    }
}

fn or_dash(value: &str) -> String {
    if value.is_empty() {
        "-".to_string()
    } else {
        value.to_string()
    }
}

fn with_suffix(value: &str, suffix: &str) -> String {
    format!("{} {}", value, suffix).trim().to_string()
}

/// Summary shown on the review step.
///
/// Goods-only rows (specifications, certifications, incoterms) are left out
/// for service providers.
pub fn review_sections(draft: &OrderDraft) -> Vec<ReviewSection> {
    let value = move |field: OrderField| draft.value(field);
    let goods = !draft.is_service_provider();
    let currency = value(OrderField::Currency);

    let mut supplier = vec![
        row("Supplier Type", value(OrderField::SupplierType)),
        row("Product Name", value(OrderField::ProductName)),
        wide_row("Item Description", value(OrderField::ItemDescription)),
    ];
    if goods {
        supplier.push(wide_row(
            "Product Specifications",
            or_dash(value(OrderField::ProductSpecifications)),
        ));
        supplier.push(wide_row(
            "Certifications",
            or_dash(value(OrderField::ProductCertification)),
        ));
    }

    let order = vec![
        row(
            "Quantity",
            with_suffix(
                value(OrderField::QuantityRequired),
                value(OrderField::UnitOfMeasurement),
            ),
        ),
        row("Unit Price", with_suffix(value(OrderField::UnitPrice), currency)),
        row(
            "Total Estimate",
            with_suffix(draft.total_price_estimate(), currency),
        ),
        wide_row("Discounts", or_dash(value(OrderField::Discounts))),
    ];

    let mut delivery = vec![
        row("Payment Terms", value(OrderField::PaymentTerms)),
        row("Payment Method", value(OrderField::PreferredPaymentMethod)),
        row("Est. Delivery", value(OrderField::EstimatedDeliveryDate)),
        row("Location", value(OrderField::DeliveryLocation)),
        row("Shipping Cost", value(OrderField::ShippingCost)),
    ];
    if goods {
        delivery.push(row("Incoterms", value(OrderField::Incoterms)));
    }
    delivery.push(wide_row(
        "Packaging Details",
        or_dash(value(OrderField::PackagingDetails)),
    ));

    vec![
        ReviewSection {
            step: Step::Supplier,
            title: "Supplier Details",
            rows: supplier,
        },
        ReviewSection {
            step: Step::Commercial,
            title: "Order Details",
            rows: order,
        },
        ReviewSection {
            step: Step::Logistics,
            title: "Delivery & Payment",
            rows: delivery,
        },
    ]
}
