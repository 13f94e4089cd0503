//! Orders: `wms/orders/`.
//!
//! Free-text fields such as `note` and `customer_note` are sent exactly as
//! given; the request body is never HTML-escaped.

use serde::{Deserialize, Serialize};

use crate::client::Client;
use crate::error::Result;
use crate::query::{with_query, Direction, Pairs, QueryParams};

use super::{decode, decode_list, decode_optional};

const PATH: &str = "wms/orders/";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Order {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_reference: Option<String>,
    /// Set by the server, e.g. `pending`, `shipped`, `cancelled`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_contactperson: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requested_delivery_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_note: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_method: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    /// Amount in minor units.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_amount: Option<i64>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub documents: Vec<Document>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub order_lines: Vec<OrderLine>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_address: Option<ShippingAddress>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Document {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_label: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<i64>,
    #[serde(rename = "orderPrice", skip_serializing_if = "Option::is_none")]
    pub order_price: Option<i64>,
    /// Base64-encoded file contents.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrderLine {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub article_code: Option<String>,
}

/// Delivery address, shared by orders and shipments.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShippingAddress {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub addressed_to: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street2: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street_number_addition: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zipcode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mobile_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fax_number: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct OrderListOptions {
    pub reference: Option<String>,
    pub status: Option<String>,
    pub page: Option<u32>,
    pub from: Option<String>,
    pub to: Option<String>,
    pub limit: Option<u32>,
    pub sort: Option<String>,
    pub direction: Option<Direction>,
}

impl QueryParams for OrderListOptions {
    fn query_pairs(&self) -> Vec<(&'static str, String)> {
        Pairs::default()
            .text("reference", &self.reference)
            .text("status", &self.status)
            .number("page", self.page)
            .text("from", &self.from)
            .text("to", &self.to)
            .number("limit", self.limit)
            .text("sort", &self.sort)
            .direction("direction", self.direction)
            .finish()
    }
}

pub struct Orders<'a> {
    client: &'a mut Client,
}

impl<'a> Orders<'a> {
    pub(crate) fn new(client: &'a mut Client) -> Self {
        Self { client }
    }

    pub fn list(self, options: Option<&OrderListOptions>) -> Result<Vec<Order>> {
        let response = self.client.get(&with_query(PATH, options))?;
        decode_list(&response)
    }

    pub fn get(self, order_id: &str) -> Result<Order> {
        let response = self.client.get(&format!("{PATH}{order_id}/"))?;
        decode(&response)
    }

    pub fn create(self, order: &Order) -> Result<Order> {
        let response = self.client.post(PATH, order)?;
        decode(&response)
    }

    pub fn update(self, order_id: &str, order: &Order) -> Result<Option<Order>> {
        let response = self.client.patch(&format!("{PATH}{order_id}/"), order)?;
        decode_optional(&response)
    }

    /// Cancel an order that has not been picked yet. Unlike the other order
    /// paths this one has no trailing slash.
    pub fn cancel(self, order_id: &str) -> Result<Option<Order>> {
        let response = self.client.patch_empty(&format!("{PATH}{order_id}/cancel"))?;
        decode_optional(&response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_fields_are_not_serialized() {
        let order = Order {
            external_reference: Some("REF-1".to_string()),
            ..Default::default()
        };
        let json = serde_json::to_value(&order).unwrap();
        assert_eq!(json, serde_json::json!({ "external_reference": "REF-1" }));
    }

    #[test]
    fn document_price_uses_camel_case() {
        let document = Document {
            order_price: Some(1250),
            ..Default::default()
        };
        let json = serde_json::to_value(&document).unwrap();
        assert_eq!(json["orderPrice"], 1250);
    }

    #[test]
    fn decodes_nested_order() {
        let raw = r#"{
            "id": "c9165f93-8301-4aaa-9f64-27f191c0c778",
            "external_reference": "ORD-1001",
            "order_lines": [{"article_code": "SKU-1", "quantity": 2, "price": 9.95}],
            "shipping_address": {"city": "Utrecht", "country": "NL"},
            "unknown_field": true
        }"#;
        let order: Order = serde_json::from_str(raw).unwrap();
        assert_eq!(order.external_reference.as_deref(), Some("ORD-1001"));
        assert_eq!(order.order_lines[0].quantity, Some(2));
        assert_eq!(
            order.shipping_address.and_then(|a| a.city).as_deref(),
            Some("Utrecht")
        );
    }

    #[test]
    fn list_options_map_to_query() {
        let options = OrderListOptions {
            status: Some("shipped".to_string()),
            page: Some(2),
            limit: Some(50),
            direction: Some(Direction::Desc),
            ..Default::default()
        };
        assert_eq!(
            with_query(PATH, Some(&options)),
            "wms/orders/?status=shipped&page=2&limit=50&direction=desc"
        );
    }
}
