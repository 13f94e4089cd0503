//! GDPR data-subject requests: `wms/gdpr/`.

use serde::{Deserialize, Serialize};

use crate::client::Client;
use crate::error::Result;

use super::decode;

const REQUEST_PATH: &str = "wms/gdpr/request-person-data/";
const REDACT_PATH: &str = "wms/gdpr/redact-person-data/";

/// Identifies the data subject.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GdprRequest {
    pub email: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GdprMessage {
    pub message: Option<String>,
}

pub struct Gdpr<'a> {
    client: &'a mut Client,
}

impl<'a> Gdpr<'a> {
    pub(crate) fn new(client: &'a mut Client) -> Self {
        Self { client }
    }

    /// Ask for an export of everything stored about the subject.
    pub fn request_person_data(self, request: &GdprRequest) -> Result<GdprMessage> {
        let response = self.client.post(REQUEST_PATH, request)?;
        decode(&response)
    }

    /// Ask for the subject's personal data to be redacted.
    pub fn redact_person_data(self, request: &GdprRequest) -> Result<GdprMessage> {
        let response = self.client.post(REDACT_PATH, request)?;
        decode(&response)
    }
}
