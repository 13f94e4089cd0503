//! Inbounds (expected goods receipts): `wms/inbounds/`.

use serde::{Deserialize, Serialize};

use crate::client::Client;
use crate::error::Result;
use crate::query::{with_query, Direction, Pairs, QueryParams};

use super::{decode, decode_list, decode_optional};

const PATH: &str = "wms/inbounds/";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Inbound {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_reference: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inbound_date: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub inbound_lines: Vec<InboundLine>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InboundLine {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub article_code: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct InboundListOptions {
    pub reference: Option<String>,
    pub status: Option<String>,
    pub kind: Option<u32>,
    pub page: Option<u32>,
    pub from: Option<String>,
    pub to: Option<String>,
    pub limit: Option<u32>,
    pub sort: Option<String>,
    pub direction: Option<Direction>,
}

impl QueryParams for InboundListOptions {
    fn query_pairs(&self) -> Vec<(&'static str, String)> {
        Pairs::default()
            .text("reference", &self.reference)
            .text("status", &self.status)
            .number("type", self.kind)
            .number("page", self.page)
            .text("from", &self.from)
            .text("to", &self.to)
            .number("limit", self.limit)
            .text("sort", &self.sort)
            .direction("direction", self.direction)
            .finish()
    }
}

pub struct Inbounds<'a> {
    client: &'a mut Client,
}

impl<'a> Inbounds<'a> {
    pub(crate) fn new(client: &'a mut Client) -> Self {
        Self { client }
    }

    pub fn list(self, options: Option<&InboundListOptions>) -> Result<Vec<Inbound>> {
        let response = self.client.get(&with_query(PATH, options))?;
        decode_list(&response)
    }

    pub fn get(self, inbound_id: &str) -> Result<Inbound> {
        let response = self.client.get(&format!("{PATH}{inbound_id}/"))?;
        decode(&response)
    }

    pub fn create(self, inbound: &Inbound) -> Result<Inbound> {
        let response = self.client.post(PATH, inbound)?;
        decode(&response)
    }

    pub fn update(self, inbound_id: &str, inbound: &Inbound) -> Result<Option<Inbound>> {
        let response = self.client.patch(&format!("{PATH}{inbound_id}/"), inbound)?;
        decode_optional(&response)
    }

    pub fn cancel(self, inbound_id: &str) -> Result<Option<Inbound>> {
        let response = self.client.patch_empty(&format!("{PATH}{inbound_id}/cancel/"))?;
        decode_optional(&response)
    }
}
