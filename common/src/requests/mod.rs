//! JSON bodies exchanged between the frontend and the backend API.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::model::order::{OrderDraft, OrderField, ShippingCost, SupplierType};
use crate::model::session::{Session, User};

mod lenient;

/// Body of `POST /api/send-quote-request/{user_id}`.
///
/// Mirrors the order form field by field. Quantity, prices and the total stay
/// strings, exactly as they were typed or derived in the form, and an unset
/// supplier type or shipping mode goes out as `""` like any other empty field.
///
/// Reading is lenient: missing keys read as empty, numbers and booleans are
/// taken as their text and unknown choice values read as unset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct QuoteRequest {
    #[serde(with = "lenient::choice")]
    pub supplier_type: Option<SupplierType>,
    #[serde(deserialize_with = "lenient::text")]
    pub product_name: String,
    #[serde(deserialize_with = "lenient::text")]
    pub item_description: String,
    #[serde(deserialize_with = "lenient::text")]
    pub product_specifications: String,
    #[serde(deserialize_with = "lenient::text")]
    pub product_certification: String,

    #[serde(deserialize_with = "lenient::text")]
    pub quantity_required: String,
    #[serde(deserialize_with = "lenient::text")]
    pub unit_of_measurement: String,
    #[serde(deserialize_with = "lenient::text")]
    pub unit_price: String,
    #[serde(deserialize_with = "lenient::text")]
    pub currency: String,
    #[serde(deserialize_with = "lenient::text")]
    pub total_price_estimate: String,
    #[serde(deserialize_with = "lenient::text")]
    pub discounts: String,

    #[serde(deserialize_with = "lenient::text")]
    pub payment_terms: String,
    #[serde(deserialize_with = "lenient::text")]
    pub preferred_payment_method: String,
    #[serde(deserialize_with = "lenient::text")]
    pub estimated_delivery_date: String,
    #[serde(deserialize_with = "lenient::text")]
    pub delivery_location: String,
    #[serde(with = "lenient::choice")]
    pub shipping_cost: Option<ShippingCost>,
    #[serde(deserialize_with = "lenient::text")]
    pub packaging_details: String,
    #[serde(deserialize_with = "lenient::text")]
    pub incoterms: String,
}

impl QuoteRequest {
    /// Reads the order fields out of any stored JSON payload. Keys that are not
    /// order fields are ignored; a payload that is not an object reads as empty.
    pub fn from_payload(payload: &Value) -> Self {
        Self::deserialize(payload).unwrap_or_default()
    }
}

impl From<&OrderDraft> for QuoteRequest {
    fn from(draft: &OrderDraft) -> Self {
        let text = |field: OrderField| draft.value(field).to_string();
        Self {
            supplier_type: draft.supplier_type(),
            product_name: text(OrderField::ProductName),
            item_description: text(OrderField::ItemDescription),
            product_specifications: text(OrderField::ProductSpecifications),
            product_certification: text(OrderField::ProductCertification),

            quantity_required: text(OrderField::QuantityRequired),
            unit_of_measurement: text(OrderField::UnitOfMeasurement),
            unit_price: text(OrderField::UnitPrice),
            currency: text(OrderField::Currency),
            total_price_estimate: draft.total_price_estimate().to_string(),
            discounts: text(OrderField::Discounts),

            payment_terms: text(OrderField::PaymentTerms),
            preferred_payment_method: text(OrderField::PreferredPaymentMethod),
            estimated_delivery_date: text(OrderField::EstimatedDeliveryDate),
            delivery_location: text(OrderField::DeliveryLocation),
            shipping_cost: draft.shipping_cost(),
            packaging_details: text(OrderField::PackagingDetails),
            incoterms: text(OrderField::Incoterms),
        }
    }
}

/// A stored quote request as echoed back by the backend.
///
/// `data` is the JSON object exactly as the client sent it, including keys
/// that are not order fields. Use [`QuoteRecord::order`] to read it as an order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteRecord {
    pub user_id: String,
    pub data: Value,
    /// RFC 3339 UTC timestamp.
    pub received_at: String,
}

impl QuoteRecord {
    pub fn order(&self) -> QuoteRequest {
        QuoteRequest::from_payload(&self.data)
    }
}

/// Response of `POST /api/send-quote-request/{user_id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteReceipt {
    pub ok: bool,
    /// Number of quote requests stored so far.
    pub count: u64,
    pub saved: QuoteRecord,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignUpRequest {
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignInRequest {
    pub email: String,
    pub password: String,
}

/// Response of the sign-up and sign-in endpoints.
///
/// `success == false` always comes with `error`; a successful sign-in also
/// carries `session`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session: Option<Session>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl AuthResponse {
    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            user: None,
            session: None,
            message: None,
            error: Some(error.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn steel_rod_draft() -> OrderDraft {
        let mut draft = OrderDraft::new();
        draft.set(OrderField::ProductName, "Steel Rod").unwrap();
        draft.set(OrderField::ItemDescription, "Grade 6061 rods").unwrap();
        draft.set(OrderField::QuantityRequired, "200").unwrap();
        draft.set(OrderField::UnitOfMeasurement, "pieces").unwrap();
        draft.set(OrderField::UnitPrice, "5").unwrap();
        draft
    }

    #[test]
    fn payload_keeps_numbers_as_text() {
        let payload = QuoteRequest::from(&steel_rod_draft());
        let json = serde_json::to_value(&payload).unwrap();

        assert_eq!(json["supplierType"], "manufacturer");
        assert_eq!(json["quantityRequired"], "200");
        assert_eq!(json["unitPrice"], "5");
        assert_eq!(json["totalPriceEstimate"], "1000");
        assert_eq!(json["currency"], "USD");
        assert_eq!(json["shippingCost"], "included");
        assert_eq!(json["incoterms"], "FOB");
    }

    #[test]
    fn payload_has_one_key_per_form_field_plus_total() {
        let payload = QuoteRequest::from(&OrderDraft::new());
        let json = serde_json::to_value(&payload).unwrap();
        let object = json.as_object().unwrap();

        assert_eq!(object.len(), OrderField::ALL.len() + 1);
        for field in OrderField::ALL {
            assert!(object.contains_key(field.name()), "missing {}", field.name());
        }
        assert!(object.contains_key("totalPriceEstimate"));
    }

    #[test]
    fn unset_choices_go_out_as_empty_strings() {
        let mut draft = steel_rod_draft();
        draft.set(OrderField::SupplierType, "").unwrap();
        draft.set(OrderField::ShippingCost, "").unwrap();
        let json = serde_json::to_value(QuoteRequest::from(&draft)).unwrap();

        assert_eq!(json["supplierType"], "");
        assert_eq!(json["shippingCost"], "");
        assert_eq!(json["productName"], "Steel Rod");

        let back: QuoteRequest = serde_json::from_value(json).unwrap();
        assert_eq!(back.supplier_type, None);
        assert_eq!(back.shipping_cost, None);
    }

    #[test]
    fn loosely_typed_payloads_still_read_as_orders() {
        let payload = serde_json::json!({
            "productName": "x",
            "supplierType": "",
            "shippingCost": "by sea",
            "quantityRequired": 200,
            "unitPrice": 2.5,
            "discounts": null,
            "orderType": "goods"
        });
        let order = QuoteRequest::from_payload(&payload);

        assert_eq!(order.product_name, "x");
        assert_eq!(order.supplier_type, None);
        assert_eq!(order.shipping_cost, None);
        assert_eq!(order.quantity_required, "200");
        assert_eq!(order.unit_price, "2.5");
        assert_eq!(order.discounts, "");
    }

    #[test]
    fn record_keeps_keys_that_are_not_order_fields() {
        let record: QuoteRecord = serde_json::from_str(
            r#"{"userId":"u","data":{"description":"two-step","orderType":"goods","quantity":"5"},"receivedAt":"2026-10-18T09:00:00.000Z"}"#,
        )
        .unwrap();
        assert_eq!(record.data["orderType"], "goods");
        assert_eq!(record.data["quantity"], "5");
        assert_eq!(record.order(), QuoteRequest::default());

        let not_an_object = QuoteRecord {
            data: serde_json::json!([1, 2]),
            ..record
        };
        assert_eq!(not_an_object.order(), QuoteRequest::default());
    }

    #[test]
    fn partial_payload_fills_missing_keys_with_empty_values() {
        let request: QuoteRequest =
            serde_json::from_str(r#"{"productName":"Steel Rod","supplierType":"distributor"}"#)
                .unwrap();
        assert_eq!(request.product_name, "Steel Rod");
        assert_eq!(request.supplier_type, Some(SupplierType::Distributor));
        assert_eq!(request.quantity_required, "");
        assert_eq!(request.shipping_cost, None);
    }

    #[test]
    fn failed_auth_response_omits_empty_parts() {
        let json = serde_json::to_value(AuthResponse::failure("Invalid credentials")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "success": false, "error": "Invalid credentials" })
        );
    }

    #[test]
    fn sign_up_names_are_optional_on_the_wire() {
        let request: SignUpRequest =
            serde_json::from_str(r#"{"email":"a@b.c","password":"pw"}"#).unwrap();
        assert_eq!(request.first_name, "");
        assert_eq!(request.last_name, "");
    }
}
