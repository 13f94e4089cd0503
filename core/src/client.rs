//! Request building, lazy authorization and response classification.
//!
//! # Design
//! `Client` owns one configuration, one `TokenState` and one `Transport`.
//! Every outbound call goes through `build_request`, which validates the
//! configuration, attaches the standard headers and, when no token is held,
//! runs the login exchange before returning. The login exchange builds its
//! own request through `unauthenticated_request` and never re-enters
//! `build_request`, so authorization cannot recurse.
//!
//! All methods that may authorize take `&mut self`. Sharing a client across
//! threads therefore needs an external lock, which also guarantees a single
//! login per client.

use std::time::Duration;

use serde::Serialize;
use tracing::{debug, info, warn};
use url::Url;

use crate::auth::{LoginRequest, LoginResponse, SessionToken, TokenState, LOGIN_PATH};
use crate::config::Config;
use crate::error::{ApiError, ErrorRecord, Result};
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::resources::{
    Articles, Gdpr, Inbounds, Orders, Shipments, ShippingMethods, Stock, Variants, Webhooks,
};
use crate::transport::{Transport, UreqTransport, DEFAULT_TIMEOUT};

pub const CONTENT_TYPE: &str = "application/json";
pub const AUTH_HEADER: &str = "Authorization";
pub const CUSTOMER_CODE_HEADER: &str = "X-Customer-Code";
pub const WMS_CODE_HEADER: &str = "X-Wms-Code";

const NO_BODY: Option<&()> = None;

/// Blocking, single-session client for the warehousing API.
pub struct Client {
    base_url: String,
    config: Option<Config>,
    token: TokenState,
    user_agent: String,
    transport: Box<dyn Transport>,
}

/// Assembles a `Client` with optional overrides.
pub struct ClientBuilder {
    config: Option<Config>,
    base_url: Option<String>,
    transport: Option<Box<dyn Transport>>,
    timeout: Duration,
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self {
            config: None,
            base_url: None,
            transport: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl ClientBuilder {
    pub fn config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Target a different host, e.g. a local mock. Validated when a request
    /// is built, not here.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Replace the default `ureq` transport. The timeout setting is ignored
    /// for custom transports.
    pub fn transport(mut self, transport: impl Transport + 'static) -> Self {
        self.transport = Some(Box::new(transport));
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn build(self) -> Client {
        let base_url = match (self.base_url, &self.config) {
            (Some(base_url), _) => base_url,
            (None, Some(config)) => config.base_url(),
            (None, None) => Config::new("", "", "", "").base_url(),
        };
        let user_agent = default_user_agent(self.config.as_ref());
        let transport = self
            .transport
            .unwrap_or_else(|| Box::new(UreqTransport::new(self.timeout)));

        Client {
            base_url,
            config: self.config,
            token: TokenState::Empty,
            user_agent,
            transport,
        }
    }
}

impl Client {
    /// Client for the environment selected in `config`, using the default
    /// transport and timeout.
    pub fn new(config: Config) -> Self {
        Self::builder().config(config).build()
    }

    pub fn builder() -> ClientBuilder {
        ClientBuilder::default()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn set_base_url(&mut self, base_url: impl Into<String>) {
        self.base_url = base_url.into();
    }

    pub fn config(&self) -> Option<&Config> {
        self.config.as_ref()
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    /// Append `" " + addition` to the User-Agent sent with every request.
    pub fn append_user_agent(&mut self, addition: &str) {
        self.user_agent.push(' ');
        self.user_agent.push_str(addition);
    }

    pub fn token_state(&self) -> &TokenState {
        &self.token
    }

    /// Use `key` as the bearer token, bypassing the login exchange.
    /// Surrounding whitespace is trimmed.
    pub fn with_auth_token(&mut self, key: &str) -> Result<()> {
        let key = key.trim();
        if key.is_empty() {
            return Err(ApiError::EmptyAuthKey);
        }
        self.token.replace(SessionToken::bare(key));
        Ok(())
    }

    /// Run the login exchange and store the resulting token.
    ///
    /// On failure the current token state is left untouched. A rejected
    /// login surfaces as `ApiError::Http` like any other failed exchange.
    pub fn authorize(&mut self) -> Result<SessionToken> {
        let config = self.config.as_ref().ok_or(ApiError::MissingConfig)?;
        if !config.has_credentials() {
            return Err(ApiError::MissingCredentials);
        }
        let login = LoginRequest {
            username: &config.username,
            password: &config.password,
        };
        let request = self.unauthenticated_request(HttpMethod::Post, LOGIN_PATH, Some(&login))?;

        let response = self.send(&request)?;
        let token = SessionToken::from(response.json::<LoginResponse>()?);
        self.token.replace(token.clone());
        info!(expires_at = ?token.expires_at, "authorized session");

        Ok(token)
    }

    /// Build an authenticated request for `path`, relative to the base URL.
    ///
    /// Authorizes first when no token is held and `path` is not the login
    /// path. If that fails, its error is returned and no request is built.
    pub fn build_request<B>(
        &mut self,
        method: HttpMethod,
        path: &str,
        body: Option<&B>,
    ) -> Result<HttpRequest>
    where
        B: Serialize + ?Sized,
    {
        let mut request = self.unauthenticated_request(method, path, body)?;

        if self.token.is_empty() && !is_login_path(path) {
            self.authorize()?;
        }
        if let Some(token) = self.token.token() {
            request.headers.push((AUTH_HEADER.to_string(), token.bearer()));
        }

        Ok(request)
    }

    /// Dispatch `request` and classify the response.
    pub fn send(&self, request: &HttpRequest) -> Result<HttpResponse> {
        let response = self.transport.dispatch(request)?;
        debug!(
            method = %request.method,
            url = %request.url,
            status = response.status,
            "exchange completed"
        );

        if let Err(err) = classify(&response) {
            warn!(method = %request.method, url = %request.url, error = %err, "request failed");
            return Err(err);
        }
        Ok(response)
    }

    /// Build, dispatch and classify in one step.
    pub fn execute<B>(&mut self, method: HttpMethod, path: &str, body: Option<&B>) -> Result<HttpResponse>
    where
        B: Serialize + ?Sized,
    {
        let request = self.build_request(method, path, body)?;
        self.send(&request)
    }

    pub fn get(&mut self, path: &str) -> Result<HttpResponse> {
        self.execute(HttpMethod::Get, path, NO_BODY)
    }

    pub fn post<B: Serialize + ?Sized>(&mut self, path: &str, body: &B) -> Result<HttpResponse> {
        self.execute(HttpMethod::Post, path, Some(body))
    }

    pub fn patch<B: Serialize + ?Sized>(&mut self, path: &str, body: &B) -> Result<HttpResponse> {
        self.execute(HttpMethod::Patch, path, Some(body))
    }

    /// PATCH without a request body.
    pub fn patch_empty(&mut self, path: &str) -> Result<HttpResponse> {
        self.execute(HttpMethod::Patch, path, NO_BODY)
    }

    pub fn delete(&mut self, path: &str) -> Result<HttpResponse> {
        self.execute(HttpMethod::Delete, path, NO_BODY)
    }

    pub fn articles(&mut self) -> Articles<'_> {
        Articles::new(self)
    }

    pub fn inbounds(&mut self) -> Inbounds<'_> {
        Inbounds::new(self)
    }

    pub fn orders(&mut self) -> Orders<'_> {
        Orders::new(self)
    }

    pub fn shipments(&mut self) -> Shipments<'_> {
        Shipments::new(self)
    }

    pub fn shipping_methods(&mut self) -> ShippingMethods<'_> {
        ShippingMethods::new(self)
    }

    pub fn stock(&mut self) -> Stock<'_> {
        Stock::new(self)
    }

    pub fn variants(&mut self) -> Variants<'_> {
        Variants::new(self)
    }

    pub fn webhooks(&mut self) -> Webhooks<'_> {
        Webhooks::new(self)
    }

    pub fn gdpr(&mut self) -> Gdpr<'_> {
        Gdpr::new(self)
    }

    /// Validated request with the standard headers and no Authorization.
    fn unauthenticated_request<B>(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<&B>,
    ) -> Result<HttpRequest>
    where
        B: Serialize + ?Sized,
    {
        let base = parse_base_url(&self.base_url)?;
        let config = self.config.as_ref().ok_or(ApiError::MissingConfig)?;
        if config.wms_code.is_empty() {
            return Err(ApiError::MissingWmsCode);
        }
        if config.customer_code.is_empty() {
            return Err(ApiError::MissingCustomerCode);
        }

        let url = base.join(path)?;
        let body = body
            .map(serde_json::to_string)
            .transpose()
            .map_err(ApiError::Serialization)?;

        let headers = vec![
            ("Accept".to_string(), CONTENT_TYPE.to_string()),
            ("Content-Type".to_string(), CONTENT_TYPE.to_string()),
            (CUSTOMER_CODE_HEADER.to_string(), config.customer_code.clone()),
            (WMS_CODE_HEADER.to_string(), config.wms_code.clone()),
            ("User-Agent".to_string(), self.user_agent.clone()),
        ];

        Ok(HttpRequest {
            method,
            url: url.into(),
            headers,
            body,
        })
    }
}

/// Map a status of 300 or above to `ApiError::Http`.
///
/// The record's `detail` is the raw body text; an empty success body is not
/// an error.
pub fn classify(response: &HttpResponse) -> Result<()> {
    if response.is_success() {
        return Ok(());
    }
    Err(ApiError::Http(ErrorRecord {
        status: response.status,
        title: response.status_text.clone(),
        detail: response.text().into_owned(),
    }))
}

/// `wms/auth/login/`, with or without a leading slash.
fn is_login_path(path: &str) -> bool {
    path.trim_start_matches('/') == LOGIN_PATH
}

/// The base URL must be absolute and its path must end with `/`.
fn parse_base_url(base_url: &str) -> Result<Url> {
    let url = Url::parse(base_url).map_err(|_| ApiError::MalformedBaseUrl)?;
    if url.cannot_be_a_base() || !url.path().ends_with('/') {
        return Err(ApiError::MalformedBaseUrl);
    }
    Ok(url)
}

/// `ewhs-core/<version> rust (<os>; <arch>)`, plus the configured app.
fn default_user_agent(config: Option<&Config>) -> String {
    let mut agent = format!(
        "ewhs-core/{} rust ({}; {})",
        env!("CARGO_PKG_VERSION"),
        std::env::consts::OS,
        std::env::consts::ARCH
    );
    if let Some(app) = config.and_then(Config::app_product) {
        agent.push(' ');
        agent.push_str(&app);
    }
    agent
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;
    use std::sync::{Arc, Mutex};

    use super::*;

    const TOKEN_BODY: &str = r#"{"token":"T","iat":1,"exp":2,"refresh_token":"R"}"#;

    /// Records every request and replays scripted responses in order.
    #[derive(Clone, Default)]
    struct Recorder {
        requests: Arc<Mutex<Vec<HttpRequest>>>,
        responses: Arc<Mutex<VecDeque<HttpResponse>>>,
    }

    impl Recorder {
        fn respond(&self, status: u16, body: &str) -> &Self {
            self.responses
                .lock()
                .unwrap()
                .push_back(HttpResponse::new(status, body));
            self
        }

        fn requests(&self) -> Vec<HttpRequest> {
            self.requests.lock().unwrap().clone()
        }
    }

    impl Transport for Recorder {
        fn dispatch(&self, request: &HttpRequest) -> Result<HttpResponse> {
            self.requests.lock().unwrap().push(request.clone());
            Ok(self
                .responses
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| HttpResponse::new(200, "")))
        }
    }

    struct Unreachable;

    impl Transport for Unreachable {
        fn dispatch(&self, _request: &HttpRequest) -> Result<HttpResponse> {
            Err(ApiError::transport(std::io::Error::new(
                std::io::ErrorKind::ConnectionRefused,
                "connection refused",
            )))
        }
    }

    fn config() -> Config {
        Config::new("test_username", "test_password", "test_wms", "test_customer")
    }

    fn client_with(config: Option<Config>, recorder: &Recorder) -> Client {
        let mut builder = Client::builder()
            .base_url("http://localhost:3000/")
            .transport(recorder.clone());
        if let Some(config) = config {
            builder = builder.config(config);
        }
        builder.build()
    }

    // ---------------------------------------------------------------------------
    // Configuration checks
    // ---------------------------------------------------------------------------

    #[test]
    fn base_url_without_trailing_slash_is_rejected() {
        let recorder = Recorder::default();
        let mut client = client_with(Some(config()), &recorder);
        client.set_base_url("http://localhost:3000/api");

        let err = client.get("wms/orders/").unwrap_err();
        assert!(matches!(err, ApiError::MalformedBaseUrl));
        assert!(recorder.requests().is_empty());
    }

    #[test]
    fn relative_base_url_is_rejected() {
        let recorder = Recorder::default();
        let mut client = client_with(Some(config()), &recorder);
        client.set_base_url("localhost/");

        let err = client.get("wms/orders/").unwrap_err();
        assert!(matches!(err, ApiError::MalformedBaseUrl));
    }

    #[test]
    fn base_url_is_checked_before_config() {
        let recorder = Recorder::default();
        let mut client = client_with(None, &recorder);
        client.set_base_url("http://localhost:3000/api");

        let err = client.get("wms/orders/").unwrap_err();
        assert!(matches!(err, ApiError::MalformedBaseUrl));
    }

    #[test]
    fn missing_config_is_rejected() {
        let recorder = Recorder::default();
        let mut client = client_with(None, &recorder);

        let err = client.get("wms/orders/").unwrap_err();
        assert!(matches!(err, ApiError::MissingConfig));
        assert!(recorder.requests().is_empty());
    }

    #[test]
    fn empty_wms_code_is_rejected_without_network() {
        let recorder = Recorder::default();
        let mut config = config();
        config.wms_code.clear();
        let mut client = client_with(Some(config), &recorder);

        let err = client.get("wms/orders/").unwrap_err();
        assert!(matches!(err, ApiError::MissingWmsCode));
        assert!(recorder.requests().is_empty());
    }

    #[test]
    fn empty_customer_code_is_rejected_without_network() {
        let recorder = Recorder::default();
        let mut config = config();
        config.customer_code.clear();
        let mut client = client_with(Some(config), &recorder);

        let err = client.get("wms/orders/").unwrap_err();
        assert!(matches!(err, ApiError::MissingCustomerCode));
        assert!(recorder.requests().is_empty());
    }

    #[test]
    fn wms_code_is_checked_before_customer_code() {
        let recorder = Recorder::default();
        let mut client = client_with(Some(Config::new("u", "p", "", "")), &recorder);

        let err = client.get("wms/orders/").unwrap_err();
        assert!(matches!(err, ApiError::MissingWmsCode));
    }

    #[test]
    fn missing_credentials_skip_the_login_exchange() {
        let recorder = Recorder::default();
        let mut client = client_with(Some(Config::new("", "", "test_wms", "test_customer")), &recorder);

        let err = client.get("wms/orders/").unwrap_err();
        assert!(matches!(err, ApiError::MissingCredentials));
        assert!(recorder.requests().is_empty());
        assert!(client.token_state().is_empty());
    }

    // ---------------------------------------------------------------------------
    // Lazy authorization
    // ---------------------------------------------------------------------------

    #[test]
    fn first_request_authorizes_once() {
        let recorder = Recorder::default();
        recorder.respond(200, TOKEN_BODY).respond(200, "[]").respond(200, "[]");
        let mut client = client_with(Some(config()), &recorder);

        client.get("wms/orders/").unwrap();
        client.get("wms/articles/").unwrap();

        let requests = recorder.requests();
        assert_eq!(requests.len(), 3);
        assert_eq!(requests[0].method, HttpMethod::Post);
        assert_eq!(requests[0].url, "http://localhost:3000/wms/auth/login/");
        assert_eq!(requests[0].header("authorization"), None);
        assert_eq!(requests[1].url, "http://localhost:3000/wms/orders/");
        assert_eq!(requests[1].header("authorization"), Some("Bearer T"));
        assert_eq!(requests[2].header("authorization"), Some("Bearer T"));
    }

    #[test]
    fn login_body_carries_credentials_and_codes() {
        let recorder = Recorder::default();
        recorder.respond(200, TOKEN_BODY);
        let mut client = client_with(Some(config()), &recorder);

        client.authorize().unwrap();

        let login = &recorder.requests()[0];
        let body: serde_json::Value = serde_json::from_str(login.body.as_deref().unwrap()).unwrap();
        assert_eq!(body["username"], "test_username");
        assert_eq!(body["password"], "test_password");
        assert_eq!(login.header(CUSTOMER_CODE_HEADER), Some("test_customer"));
        assert_eq!(login.header(WMS_CODE_HEADER), Some("test_wms"));
    }

    #[test]
    fn successful_login_populates_token() {
        let recorder = Recorder::default();
        recorder.respond(200, TOKEN_BODY);
        let mut client = client_with(Some(config()), &recorder);

        let token = client.authorize().unwrap();
        assert_eq!(token.token, "T");
        assert_eq!(token.refresh_token.as_deref(), Some("R"));
        assert_eq!(client.token_state().token().map(|t| t.token.as_str()), Some("T"));

        let request = client.build_request(HttpMethod::Get, "wms/orders/", NO_BODY).unwrap();
        assert_eq!(request.header(AUTH_HEADER), Some("Bearer T"));
        assert_eq!(recorder.requests().len(), 1);
    }

    #[test]
    fn failed_login_aborts_the_original_request() {
        let recorder = Recorder::default();
        recorder.respond(401, r#"{"detail":"Invalid credentials"}"#);
        let mut client = client_with(Some(config()), &recorder);

        let err = client.get("wms/orders/").unwrap_err();
        assert_eq!(err.to_string(), "401 - 401 Unauthorized");
        assert_eq!(err.status(), Some(401));

        let requests = recorder.requests();
        assert_eq!(requests.len(), 1);
        assert!(requests[0].url.ends_with(LOGIN_PATH));
        assert!(client.token_state().is_empty());
    }

    #[test]
    fn failed_reauthorization_keeps_previous_token() {
        let recorder = Recorder::default();
        recorder.respond(200, TOKEN_BODY).respond(500, "boom");
        let mut client = client_with(Some(config()), &recorder);

        client.authorize().unwrap();
        assert!(client.authorize().is_err());
        assert_eq!(client.token_state().token().map(|t| t.token.as_str()), Some("T"));
    }

    #[test]
    fn malformed_login_body_leaves_state_empty() {
        let recorder = Recorder::default();
        recorder.respond(200, r#"{"iat":1}"#);
        let mut client = client_with(Some(config()), &recorder);

        let err = client.authorize().unwrap_err();
        assert!(matches!(err, ApiError::Deserialization(_)));
        assert!(client.token_state().is_empty());
    }

    #[test]
    fn reauthorization_replaces_token() {
        let recorder = Recorder::default();
        recorder
            .respond(200, TOKEN_BODY)
            .respond(200, r#"{"token":"U","iat":3,"exp":4}"#);
        let mut client = client_with(Some(config()), &recorder);

        client.authorize().unwrap();
        client.authorize().unwrap();
        assert_eq!(client.token_state().token().map(|t| t.token.as_str()), Some("U"));
    }

    #[test]
    fn login_path_does_not_trigger_authorization() {
        let recorder = Recorder::default();
        let mut client = client_with(Some(config()), &recorder);

        let request = client
            .build_request(HttpMethod::Post, LOGIN_PATH, NO_BODY)
            .unwrap();
        assert_eq!(request.header(AUTH_HEADER), None);
        assert!(recorder.requests().is_empty());
    }

    #[test]
    fn login_path_with_leading_slash_does_not_trigger_authorization() {
        let recorder = Recorder::default();
        let mut client = client_with(Some(config()), &recorder);

        let request = client
            .build_request(HttpMethod::Post, "/wms/auth/login/", NO_BODY)
            .unwrap();
        assert_eq!(request.url, "http://localhost:3000/wms/auth/login/");
        assert_eq!(request.header(AUTH_HEADER), None);
        assert!(recorder.requests().is_empty());
        assert!(client.token_state().is_empty());
    }

    #[test]
    fn stale_token_is_not_refreshed() {
        let recorder = Recorder::default();
        recorder.respond(401, r#"{"detail":"Expired JWT Token"}"#);
        let mut client = client_with(Some(config()), &recorder);
        client.with_auth_token("stale").unwrap();

        let err = client.get("wms/orders/").unwrap_err();
        assert_eq!(err.status(), Some(401));
        assert_eq!(recorder.requests().len(), 1);
        assert_eq!(client.token_state().token().map(|t| t.token.as_str()), Some("stale"));
    }

    #[test]
    fn transport_failure_is_wrapped() {
        let mut client = Client::builder()
            .config(config())
            .base_url("http://localhost:3000/")
            .transport(Unreachable)
            .build();

        let err = client.get("wms/orders/").unwrap_err();
        assert!(matches!(err, ApiError::Transport(_)));
        assert!(client.token_state().is_empty());
    }

    // ---------------------------------------------------------------------------
    // Token injection
    // ---------------------------------------------------------------------------

    #[test]
    fn empty_token_is_rejected() {
        let recorder = Recorder::default();
        let mut client = client_with(Some(config()), &recorder);

        assert!(matches!(client.with_auth_token(""), Err(ApiError::EmptyAuthKey)));
        assert!(matches!(client.with_auth_token("   "), Err(ApiError::EmptyAuthKey)));
        assert!(client.token_state().is_empty());
    }

    #[test]
    fn injected_token_is_trimmed_and_used() {
        let recorder = Recorder::default();
        let mut client = client_with(Some(config()), &recorder);

        client.with_auth_token("  T  ").unwrap();
        assert_eq!(client.token_state().token().map(|t| t.token.as_str()), Some("T"));

        let request = client.build_request(HttpMethod::Get, "wms/orders/", NO_BODY).unwrap();
        assert_eq!(request.header(AUTH_HEADER), Some("Bearer T"));
        assert!(recorder.requests().is_empty());
    }

    // ---------------------------------------------------------------------------
    // Request shape
    // ---------------------------------------------------------------------------

    #[test]
    fn standard_headers_are_attached() {
        let recorder = Recorder::default();
        let mut client = client_with(Some(config()), &recorder);
        client.with_auth_token("T").unwrap();

        let request = client
            .build_request(HttpMethod::Get, "wms/orders/abc-123/", NO_BODY)
            .unwrap();
        assert_eq!(request.url, "http://localhost:3000/wms/orders/abc-123/");
        assert_eq!(request.header("Accept"), Some(CONTENT_TYPE));
        assert_eq!(request.header("Content-Type"), Some(CONTENT_TYPE));
        assert_eq!(request.header(CUSTOMER_CODE_HEADER), Some("test_customer"));
        assert_eq!(request.header(WMS_CODE_HEADER), Some("test_wms"));
        assert_eq!(request.header("User-Agent"), Some(client.user_agent()));
        assert!(request.body.is_none());
    }

    #[test]
    fn body_is_serialized_without_html_escaping() {
        let recorder = Recorder::default();
        let mut client = client_with(Some(config()), &recorder);
        client.with_auth_token("T").unwrap();

        let body = serde_json::json!({ "note": "<b>fragile</b> & heavy" });
        let request = client
            .build_request(HttpMethod::Post, "wms/orders/", Some(&body))
            .unwrap();
        assert_eq!(
            request.body.as_deref(),
            Some(r#"{"note":"<b>fragile</b> & heavy"}"#)
        );
    }

    #[test]
    fn user_agent_names_product_and_platform() {
        let client = Client::new(config().with_app("shop", "2.1.0"));
        let agent = client.user_agent();
        assert!(agent.starts_with(&format!("ewhs-core/{} rust (", env!("CARGO_PKG_VERSION"))));
        assert!(agent.contains(std::env::consts::OS));
        assert!(agent.ends_with(" shop/2.1.0"));
    }

    #[test]
    fn append_user_agent_joins_with_a_space() {
        let mut client = Client::new(config());
        let base = client.user_agent().to_string();

        client.append_user_agent("custom/1.0");
        assert_eq!(client.user_agent(), format!("{base} custom/1.0"));

        client.append_user_agent("");
        assert_eq!(client.user_agent(), format!("{base} custom/1.0 "));
    }

    #[test]
    fn client_defaults_to_configured_environment() {
        let client = Client::new(config().testing());
        assert_eq!(client.base_url(), "https://eu-dev.middleware.ewarehousing-solutions.com/");
    }

    // ---------------------------------------------------------------------------
    // Classification
    // ---------------------------------------------------------------------------

    #[test]
    fn classify_keeps_raw_body_as_detail() {
        let body = r#"{"detail":"Invalid credentials."}"#;
        let err = classify(&HttpResponse::new(401, body)).unwrap_err();
        match err {
            ApiError::Http(record) => {
                assert_eq!(record.status, 401);
                assert_eq!(record.title, "401 Unauthorized");
                assert_eq!(record.detail, body);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn classify_treats_redirects_as_failures() {
        let err = classify(&HttpResponse::new(301, "")).unwrap_err();
        assert_eq!(err.status(), Some(301));
    }

    #[test]
    fn classify_accepts_empty_success_body() {
        assert!(classify(&HttpResponse::new(204, "")).is_ok());
        assert!(classify(&HttpResponse::new(299, "not json")).is_ok());
    }
}
