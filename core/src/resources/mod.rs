//! Typed endpoints for the warehousing resources.
//!
//! # Design
//! Each endpoint group borrows the `Client` mutably for one call chain,
//! supplies a path (plus query options or a body) and decodes the buffered
//! response into its own types. None of them touch headers or tokens.
//!
//! A success with an empty body means "nothing to report": lists come back
//! empty and update-style calls return `None`.

use serde::de::DeserializeOwned;

use crate::error::Result;
use crate::http::HttpResponse;

pub mod articles;
pub mod gdpr;
pub mod inbounds;
pub mod orders;
pub mod shipments;
pub mod shipping_methods;
pub mod stock;
pub mod variants;
pub mod webhooks;

pub use articles::{Article, ArticleListOptions, ArticleVariant, Articles};
pub use gdpr::{Gdpr, GdprMessage, GdprRequest};
pub use inbounds::{Inbound, InboundLine, InboundListOptions, Inbounds};
pub use orders::{Document, Order, OrderLine, OrderListOptions, Orders, ShippingAddress};
pub use shipments::{
    Shipment, ShipmentLabel, ShipmentLine, ShipmentListOptions, ShipmentShippingMethod, Shipments,
};
pub use shipping_methods::{ShippingMethod, ShippingMethodListOptions, ShippingMethods};
pub use stock::{Stock, StockLevel, StockListOptions};
pub use variants::{Variant, VariantListOptions, Variants};
pub use webhooks::{Webhook, Webhooks};

fn is_blank(response: &HttpResponse) -> bool {
    response.content().iter().all(u8::is_ascii_whitespace)
}

pub(crate) fn decode<T: DeserializeOwned>(response: &HttpResponse) -> Result<T> {
    response.json()
}

pub(crate) fn decode_list<T: DeserializeOwned>(response: &HttpResponse) -> Result<Vec<T>> {
    if is_blank(response) {
        return Ok(Vec::new());
    }
    response.json()
}

pub(crate) fn decode_optional<T: DeserializeOwned>(response: &HttpResponse) -> Result<Option<T>> {
    if is_blank(response) {
        return Ok(None);
    }
    response.json().map(Some)
}
