//! Shipments: `wms/shipments/`. Read-only.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::client::Client;
use crate::error::Result;
use crate::query::{with_query, Direction, Pairs, QueryParams};

use super::orders::ShippingAddress;
use super::variants::Variant;
use super::{decode, decode_list};

const PATH: &str = "wms/shipments/";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Shipment {
    pub id: Option<String>,
    pub customer: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub order_id: Option<String>,
    pub order_external_reference: Option<String>,
    /// Free-form; the API returns strings, numbers or null here.
    pub shipment_external_reference: Option<serde_json::Value>,
    pub reference: Option<String>,
    pub shipping_method: Option<ShipmentShippingMethod>,
    pub shipment_labels: Vec<ShipmentLabel>,
    pub shipment_lines: Vec<ShipmentLine>,
    pub shipping_address: Option<ShippingAddress>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShipmentShippingMethod {
    pub id: Option<String>,
    pub shipper: Option<String>,
    pub shipper_code: Option<String>,
    pub code: Option<String>,
    pub description: Option<String>,
    pub shipping_software: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShipmentLabel {
    pub label_code: Option<String>,
    pub tracking_code: Option<String>,
    pub tracking_url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShipmentLine {
    pub shipped_quantity: Option<i64>,
    pub shipped_ean: Option<String>,
    pub shipped_article_code: Option<String>,
    pub shipped_sku: Option<String>,
    pub serial_numbers: Vec<serde_json::Value>,
    pub variant: Option<Variant>,
}

#[derive(Debug, Clone, Default)]
pub struct ShipmentListOptions {
    pub order_external_reference: Option<String>,
    pub from: Option<String>,
    pub to: Option<String>,
    pub limit: Option<u32>,
    pub direction: Option<Direction>,
    pub page: Option<u32>,
}

impl QueryParams for ShipmentListOptions {
    fn query_pairs(&self) -> Vec<(&'static str, String)> {
        Pairs::default()
            .text("order_external_reference", &self.order_external_reference)
            .text("from", &self.from)
            .text("to", &self.to)
            .number("limit", self.limit)
            .direction("direction", self.direction)
            .number("page", self.page)
            .finish()
    }
}

pub struct Shipments<'a> {
    client: &'a mut Client,
}

impl<'a> Shipments<'a> {
    pub(crate) fn new(client: &'a mut Client) -> Self {
        Self { client }
    }

    pub fn list(self, options: Option<&ShipmentListOptions>) -> Result<Vec<Shipment>> {
        let response = self.client.get(&with_query(PATH, options))?;
        decode_list(&response)
    }

    pub fn get(self, shipment_id: &str) -> Result<Shipment> {
        let response = self.client.get(&format!("{PATH}{shipment_id}/"))?;
        decode(&response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_shipment_with_labels() {
        let raw = r#"{
            "id": "s-1",
            "created_at": "2024-03-01T10:15:00+00:00",
            "shipment_external_reference": null,
            "shipping_method": {"code": "postnl-standard", "shipper": "PostNL"},
            "shipment_labels": [{"tracking_code": "3SABC", "tracking_url": "https://track.test/3SABC"}],
            "shipment_lines": [{"shipped_quantity": 1, "variant": {"article_code": "SKU-1"}}]
        }"#;
        let shipment: Shipment = serde_json::from_str(raw).unwrap();
        assert_eq!(shipment.created_at.map(|t| t.timestamp()), Some(1_709_288_100));
        assert_eq!(shipment.shipment_labels[0].tracking_code.as_deref(), Some("3SABC"));
        assert_eq!(
            shipment.shipment_lines[0]
                .variant
                .as_ref()
                .and_then(|v| v.article_code.as_deref()),
            Some("SKU-1")
        );
    }
}
