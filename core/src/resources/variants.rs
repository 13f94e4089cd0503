//! Variants: `wms/variants/`.

use serde::{Deserialize, Serialize};

use crate::client::Client;
use crate::error::Result;
use crate::query::{with_query, Direction, Pairs, QueryParams};

use super::{decode, decode_list, decode_optional};

const PATH: &str = "wms/variants/";

/// A sellable variant of an article. Also embedded in stock levels and
/// shipment lines.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Variant {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub article_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ean: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hs_tariff_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub depth: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expirable: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_of_origin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub using_serial_numbers: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
}

#[derive(Debug, Clone, Default)]
pub struct VariantListOptions {
    pub from: Option<String>,
    pub to: Option<String>,
    pub limit: Option<u32>,
    pub direction: Option<Direction>,
}

impl QueryParams for VariantListOptions {
    fn query_pairs(&self) -> Vec<(&'static str, String)> {
        Pairs::default()
            .text("from", &self.from)
            .text("to", &self.to)
            .number("limit", self.limit)
            .direction("direction", self.direction)
            .finish()
    }
}

pub struct Variants<'a> {
    client: &'a mut Client,
}

impl<'a> Variants<'a> {
    pub(crate) fn new(client: &'a mut Client) -> Self {
        Self { client }
    }

    pub fn list(self, options: Option<&VariantListOptions>) -> Result<Vec<Variant>> {
        let response = self.client.get(&with_query(PATH, options))?;
        decode_list(&response)
    }

    pub fn get(self, variant_id: &str) -> Result<Variant> {
        let response = self.client.get(&format!("{PATH}{variant_id}/"))?;
        decode(&response)
    }

    pub fn create(self, variant: &Variant) -> Result<Variant> {
        let response = self.client.post(PATH, variant)?;
        decode(&response)
    }

    pub fn update(self, variant_id: &str, variant: &Variant) -> Result<Option<Variant>> {
        let response = self.client.patch(&format!("{PATH}{variant_id}/"), variant)?;
        decode_optional(&response)
    }
}
