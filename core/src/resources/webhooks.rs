//! Webhook subscriptions: `webhooks/`.
//!
//! Incoming deliveries are checked with `crate::webhook::verify_signature`
//! using the subscription's `hash_secret`.

use serde::{Deserialize, Serialize};

use crate::client::Client;
use crate::error::Result;

use super::{decode, decode_list, decode_optional};

const PATH: &str = "webhooks/";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Webhook {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Resource group, e.g. `order`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
    /// Event within the group, e.g. `shipped`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hash_secret: Option<String>,
}

pub struct Webhooks<'a> {
    client: &'a mut Client,
}

impl<'a> Webhooks<'a> {
    pub(crate) fn new(client: &'a mut Client) -> Self {
        Self { client }
    }

    pub fn list(self) -> Result<Vec<Webhook>> {
        let response = self.client.get(PATH)?;
        decode_list(&response)
    }

    pub fn get(self, webhook_id: &str) -> Result<Webhook> {
        let response = self.client.get(&format!("{PATH}{webhook_id}/"))?;
        decode(&response)
    }

    pub fn create(self, webhook: &Webhook) -> Result<Webhook> {
        let response = self.client.post(PATH, webhook)?;
        decode(&response)
    }

    pub fn update(self, webhook_id: &str, webhook: &Webhook) -> Result<Option<Webhook>> {
        let response = self.client.patch(&format!("{PATH}{webhook_id}/"), webhook)?;
        decode_optional(&response)
    }

    /// Remove a subscription. The server answers 204 without a body.
    pub fn delete(self, webhook_id: &str) -> Result<()> {
        self.client.delete(&format!("{PATH}{webhook_id}/"))?;
        Ok(())
    }
}
