//! Articles: `wms/articles/`.

use serde::{Deserialize, Serialize};

use crate::client::Client;
use crate::error::Result;
use crate::query::{with_query, Direction, Pairs, QueryParams};

use super::{decode, decode_list, decode_optional};

const PATH: &str = "wms/articles/";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Article {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub variants: Vec<ArticleVariant>,
}

/// A variant as embedded in an article payload. Dimensions are integers in
/// the API's units; `value` is a decimal price.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArticleVariant {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub article_code: Option<String>,
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
pub struct ArticleListOptions {
    pub from: Option<String>,
    pub to: Option<String>,
    pub limit: Option<u32>,
    pub direction: Option<Direction>,
}

impl QueryParams for ArticleListOptions {
    fn query_pairs(&self) -> Vec<(&'static str, String)> {
        Pairs::default()
            .text("from", &self.from)
            .text("to", &self.to)
            .number("limit", self.limit)
            .direction("direction", self.direction)
            .finish()
    }
}

pub struct Articles<'a> {
    client: &'a mut Client,
}

impl<'a> Articles<'a> {
    pub(crate) fn new(client: &'a mut Client) -> Self {
        Self { client }
    }

    pub fn list(self, options: Option<&ArticleListOptions>) -> Result<Vec<Article>> {
        let response = self.client.get(&with_query(PATH, options))?;
        decode_list(&response)
    }

    pub fn get(self, article_id: &str) -> Result<Article> {
        let response = self.client.get(&format!("{PATH}{article_id}/"))?;
        decode(&response)
    }

    pub fn create(self, article: &Article) -> Result<Article> {
        let response = self.client.post(PATH, article)?;
        decode(&response)
    }

    /// `None` when the server acknowledges without a body.
    pub fn update(self, article_id: &str, article: &Article) -> Result<Option<Article>> {
        let response = self.client.patch(&format!("{PATH}{article_id}/"), article)?;
        decode_optional(&response)
    }
}
