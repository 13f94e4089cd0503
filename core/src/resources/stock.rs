//! Stock levels: `wms/stock/`. List only.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::client::Client;
use crate::error::Result;
use crate::query::{with_query, Direction, Pairs, QueryParams};

use super::decode_list;
use super::variants::Variant;

const PATH: &str = "wms/stock/";

/// Stock counters for one variant.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StockLevel {
    pub id: Option<String>,
    pub article_code: Option<String>,
    pub ean: Option<String>,
    /// The API sends a string or null.
    pub sku: Option<serde_json::Value>,
    pub stock_physical: Option<i64>,
    pub stock_salable: Option<i64>,
    pub stock_available: Option<i64>,
    pub stock_quarantine: Option<i64>,
    pub stock_pickable: Option<i64>,
    pub modified_at: Option<DateTime<Utc>>,
    pub variant: Option<Variant>,
}

#[derive(Debug, Clone, Default)]
pub struct StockListOptions {
    pub article_code: Option<String>,
    pub ean: Option<String>,
    pub sku: Option<String>,
    pub search: Option<String>,
    /// Only levels modified at or after this timestamp.
    pub modified_gte: Option<String>,
    pub page: Option<u32>,
    pub from: Option<String>,
    pub to: Option<String>,
    pub limit: Option<u32>,
    pub direction: Option<Direction>,
}

impl QueryParams for StockListOptions {
    fn query_pairs(&self) -> Vec<(&'static str, String)> {
        Pairs::default()
            .text("article_code", &self.article_code)
            .text("ean", &self.ean)
            .text("sku", &self.sku)
            .text("search", &self.search)
            .text("modified_gte", &self.modified_gte)
            .number("page", self.page)
            .text("from", &self.from)
            .text("to", &self.to)
            .number("limit", self.limit)
            .direction("direction", self.direction)
            .finish()
    }
}

pub struct Stock<'a> {
    client: &'a mut Client,
}

impl<'a> Stock<'a> {
    pub(crate) fn new(client: &'a mut Client) -> Self {
        Self { client }
    }

    pub fn list(self, options: Option<&StockListOptions>) -> Result<Vec<StockLevel>> {
        let response = self.client.get(&with_query(PATH, options))?;
        decode_list(&response)
    }
}
