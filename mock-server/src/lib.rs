//! In-memory stand-in for the warehousing API.
//!
//! Implements the login exchange plus orders and webhooks, enforcing the
//! same header contract as the real service: every call needs
//! `X-Customer-Code` and `X-Wms-Code`, everything except login needs
//! `Authorization: Bearer <token>`. Failures answer with a `{"detail": ..}`
//! body like the real API.

use std::{
    collections::HashMap,
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    },
};

use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    routing::{get, patch, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tokio::{net::TcpListener, sync::RwLock};
use tracing::info;
use uuid::Uuid;

pub const USERNAME: &str = "test_username";
pub const PASSWORD: &str = "test_password";
pub const TOKEN: &str = "mock-session-token";
pub const REFRESH_TOKEN: &str = "mock-refresh-token";

/// Token lifetime reported in the login response, in seconds.
const TOKEN_TTL: i64 = 3600;

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Webhook {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub group: String,
    #[serde(default)]
    pub action: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hash_secret: Option<String>,
}

#[derive(Deserialize)]
pub struct LoginBody {
    pub username: String,
    pub password: String,
}

#[derive(Deserialize, Default)]
pub struct UpdateWebhook {
    pub url: Option<String>,
    pub group: Option<String>,
    pub action: Option<String>,
    pub hash_secret: Option<String>,
}

#[derive(Default)]
struct Inner {
    login_attempts: AtomicUsize,
    orders: RwLock<HashMap<String, Value>>,
    webhooks: RwLock<HashMap<String, Webhook>>,
}

/// Shared server state. Clones observe the same data.
#[derive(Clone, Default)]
pub struct MockState {
    inner: Arc<Inner>,
}

impl MockState {
    /// State pre-seeded with `orders`. Each order must carry a string `id`.
    pub fn with_orders(orders: impl IntoIterator<Item = Value>) -> Self {
        let orders = orders
            .into_iter()
            .filter_map(|order| {
                let id = order.get("id")?.as_str()?.to_string();
                Some((id, order))
            })
            .collect();
        Self {
            inner: Arc::new(Inner {
                orders: RwLock::new(orders),
                ..Default::default()
            }),
        }
    }

    /// Number of login requests received, successful or not.
    pub fn login_attempts(&self) -> usize {
        self.inner.login_attempts.load(Ordering::SeqCst)
    }
}

type Failure = (StatusCode, Json<Value>);

pub fn app() -> Router {
    app_with_state(MockState::default())
}

pub fn app_with_state(state: MockState) -> Router {
    Router::new()
        .route("/wms/auth/login/", post(login))
        .route("/wms/orders/", get(list_orders).post(create_order))
        .route("/wms/orders/{id}/", get(get_order).patch(update_order))
        .route("/wms/orders/{id}/cancel", patch(cancel_order))
        .route("/webhooks/", get(list_webhooks).post(create_webhook))
        .route(
            "/webhooks/{id}/",
            get(get_webhook).patch(update_webhook).delete(delete_webhook),
        )
        .with_state(state)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    run_with_state(listener, MockState::default()).await
}

pub async fn run_with_state(listener: TcpListener, state: MockState) -> Result<(), std::io::Error> {
    axum::serve(listener, app_with_state(state)).await
}

fn failure(status: StatusCode, detail: &str) -> Failure {
    (status, Json(json!({ "detail": detail })))
}

fn require_codes(headers: &HeaderMap) -> Result<(), Failure> {
    for name in ["x-customer-code", "x-wms-code"] {
        let present = headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|v| !v.is_empty());
        if !present {
            return Err(failure(StatusCode::BAD_REQUEST, &format!("Missing header {name}")));
        }
    }
    Ok(())
}

fn require_auth(headers: &HeaderMap) -> Result<(), Failure> {
    require_codes(headers)?;
    let expected = format!("Bearer {TOKEN}");
    match headers.get("authorization").and_then(|v| v.to_str().ok()) {
        Some(value) if value == expected => Ok(()),
        Some(_) => Err(failure(StatusCode::UNAUTHORIZED, "Invalid JWT Token")),
        None => Err(failure(StatusCode::UNAUTHORIZED, "JWT Token not found")),
    }
}

async fn login(
    State(state): State<MockState>,
    headers: HeaderMap,
    Json(body): Json<LoginBody>,
) -> Result<Json<Value>, Failure> {
    state.inner.login_attempts.fetch_add(1, Ordering::SeqCst);
    require_codes(&headers)?;
    if body.username != USERNAME || body.password != PASSWORD {
        return Err(failure(StatusCode::UNAUTHORIZED, "Invalid credentials."));
    }
    info!(username = %body.username, "login accepted");

    let iat = chrono::Utc::now().timestamp();
    Ok(Json(json!({
        "token": TOKEN,
        "iat": iat,
        "exp": iat + TOKEN_TTL,
        "refresh_token": REFRESH_TOKEN,
    })))
}

async fn list_orders(
    State(state): State<MockState>,
    headers: HeaderMap,
) -> Result<Json<Vec<Value>>, Failure> {
    require_auth(&headers)?;
    let orders = state.inner.orders.read().await;
    Ok(Json(orders.values().cloned().collect()))
}

async fn create_order(
    State(state): State<MockState>,
    headers: HeaderMap,
    Json(mut order): Json<Value>,
) -> Result<(StatusCode, Json<Value>), Failure> {
    require_auth(&headers)?;
    let Some(fields) = order.as_object_mut() else {
        return Err(failure(StatusCode::BAD_REQUEST, "Order must be a JSON object"));
    };
    let id = Uuid::new_v4().to_string();
    fields.insert("id".to_string(), json!(id));
    fields.entry("status").or_insert_with(|| json!("pending"));

    state.inner.orders.write().await.insert(id, order.clone());
    Ok((StatusCode::CREATED, Json(order)))
}

async fn get_order(
    State(state): State<MockState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<Json<Value>, Failure> {
    require_auth(&headers)?;
    let orders = state.inner.orders.read().await;
    orders
        .get(&id)
        .cloned()
        .map(Json)
        .ok_or_else(|| failure(StatusCode::NOT_FOUND, "Order not found"))
}

async fn update_order(
    State(state): State<MockState>,
    headers: HeaderMap,
    Path(id): Path<String>,
    Json(changes): Json<Value>,
) -> Result<Json<Value>, Failure> {
    require_auth(&headers)?;
    let mut orders = state.inner.orders.write().await;
    let order = orders
        .get_mut(&id)
        .ok_or_else(|| failure(StatusCode::NOT_FOUND, "Order not found"))?;
    if let (Some(target), Some(changes)) = (order.as_object_mut(), changes.as_object()) {
        for (key, value) in changes {
            if key != "id" {
                target.insert(key.clone(), value.clone());
            }
        }
    }
    Ok(Json(order.clone()))
}

async fn cancel_order(
    State(state): State<MockState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<Json<Value>, Failure> {
    require_auth(&headers)?;
    let mut orders = state.inner.orders.write().await;
    let order = orders
        .get_mut(&id)
        .ok_or_else(|| failure(StatusCode::NOT_FOUND, "Order not found"))?;
    if order["status"] == "shipped" {
        return Err(failure(StatusCode::CONFLICT, "Shipped orders cannot be cancelled"));
    }
    order["status"] = json!("cancelled");
    Ok(Json(order.clone()))
}

async fn list_webhooks(
    State(state): State<MockState>,
    headers: HeaderMap,
) -> Result<Json<Vec<Webhook>>, Failure> {
    require_auth(&headers)?;
    let webhooks = state.inner.webhooks.read().await;
    Ok(Json(webhooks.values().cloned().collect()))
}

async fn create_webhook(
    State(state): State<MockState>,
    headers: HeaderMap,
    Json(mut webhook): Json<Webhook>,
) -> Result<(StatusCode, Json<Webhook>), Failure> {
    require_auth(&headers)?;
    if webhook.url.is_empty() {
        return Err(failure(StatusCode::UNPROCESSABLE_ENTITY, "url: This value should not be blank."));
    }
    webhook.id = Uuid::new_v4().to_string();
    state
        .inner
        .webhooks
        .write()
        .await
        .insert(webhook.id.clone(), webhook.clone());
    Ok((StatusCode::CREATED, Json(webhook)))
}

async fn get_webhook(
    State(state): State<MockState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<Json<Webhook>, Failure> {
    require_auth(&headers)?;
    let webhooks = state.inner.webhooks.read().await;
    webhooks
        .get(&id)
        .cloned()
        .map(Json)
        .ok_or_else(|| failure(StatusCode::NOT_FOUND, "Webhook not found"))
}

async fn update_webhook(
    State(state): State<MockState>,
    headers: HeaderMap,
    Path(id): Path<String>,
    Json(input): Json<UpdateWebhook>,
) -> Result<Json<Webhook>, Failure> {
    require_auth(&headers)?;
    let mut webhooks = state.inner.webhooks.write().await;
    let webhook = webhooks
        .get_mut(&id)
        .ok_or_else(|| failure(StatusCode::NOT_FOUND, "Webhook not found"))?;
    if let Some(url) = input.url {
        webhook.url = url;
    }
    if let Some(group) = input.group {
        webhook.group = group;
    }
    if let Some(action) = input.action {
        webhook.action = action;
    }
    if input.hash_secret.is_some() {
        webhook.hash_secret = input.hash_secret;
    }
    Ok(Json(webhook.clone()))
}

async fn delete_webhook(
    State(state): State<MockState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<StatusCode, Failure> {
    require_auth(&headers)?;
    let mut webhooks = state.inner.webhooks.write().await;
    webhooks
        .remove(&id)
        .map(|_| StatusCode::NO_CONTENT)
        .ok_or_else(|| failure(StatusCode::NOT_FOUND, "Webhook not found"))
}
