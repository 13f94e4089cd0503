//! Shipping methods: `wms/shippingmethods/`. Read-only.

use serde::{Deserialize, Serialize};

use crate::client::Client;
use crate::error::Result;
use crate::query::{with_query, Direction, Pairs, QueryParams};

use super::{decode, decode_list};

const PATH: &str = "wms/shippingmethods/";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShippingMethod {
    pub id: Option<String>,
    pub shipper: Option<String>,
    pub shipper_code: Option<String>,
    pub code: Option<String>,
    pub description: Option<String>,
    pub shipping_software: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct ShippingMethodListOptions {
    pub from: Option<String>,
    pub to: Option<String>,
    pub limit: Option<u32>,
    pub direction: Option<Direction>,
}

impl QueryParams for ShippingMethodListOptions {
    fn query_pairs(&self) -> Vec<(&'static str, String)> {
        Pairs::default()
            .text("from", &self.from)
            .text("to", &self.to)
            .number("limit", self.limit)
            .direction("direction", self.direction)
            .finish()
    }
}

pub struct ShippingMethods<'a> {
    client: &'a mut Client,
}

impl<'a> ShippingMethods<'a> {
    pub(crate) fn new(client: &'a mut Client) -> Self {
        Self { client }
    }

    pub fn list(self, options: Option<&ShippingMethodListOptions>) -> Result<Vec<ShippingMethod>> {
        let response = self.client.get(&with_query(PATH, options))?;
        decode_list(&response)
    }

    pub fn get(self, shipping_method_id: &str) -> Result<ShippingMethod> {
        let response = self.client.get(&format!("{PATH}{shipping_method_id}/"))?;
        decode(&response)
    }
}
