//! Account and environment settings supplied at client construction.

/// Domain used when none is configured.
pub const DEFAULT_DOMAIN: &str = "ewarehousing-solutions.com";

/// Selects the production or the testing host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    #[default]
    Production,
    Testing,
}

impl Environment {
    fn host_prefix(&self) -> &'static str {
        match self {
            Environment::Production => "eu",
            Environment::Testing => "eu-dev",
        }
    }
}

/// Credentials, account codes and environment for one client.
///
/// Immutable once handed to `Client`; build it with `Config::new` and the
/// `with_*` methods.
#[derive(Clone, PartialEq, Eq)]
pub struct Config {
    pub username: String,
    pub password: String,
    pub wms_code: String,
    pub customer_code: String,
    pub environment: Environment,
    pub domain: String,
    /// Appended to the User-Agent as `<app_name>/<app_version>`.
    pub app_name: Option<String>,
    pub app_version: Option<String>,
}

impl Config {
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
        wms_code: impl Into<String>,
        customer_code: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            wms_code: wms_code.into(),
            customer_code: customer_code.into(),
            environment: Environment::default(),
            domain: DEFAULT_DOMAIN.to_string(),
            app_name: None,
            app_version: None,
        }
    }

    pub fn with_environment(mut self, environment: Environment) -> Self {
        self.environment = environment;
        self
    }

    /// Shorthand for `with_environment(Environment::Testing)`.
    pub fn testing(self) -> Self {
        self.with_environment(Environment::Testing)
    }

    pub fn with_domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = domain.into();
        self
    }

    pub fn with_app(mut self, name: impl Into<String>, version: impl Into<String>) -> Self {
        self.app_name = Some(name.into());
        self.app_version = Some(version.into());
        self
    }

    /// `https://<env>.middleware.<domain>/` for the selected environment.
    pub fn base_url(&self) -> String {
        format!(
            "https://{}.middleware.{}/",
            self.environment.host_prefix(),
            self.domain
        )
    }

    pub(crate) fn has_credentials(&self) -> bool {
        !self.username.is_empty() && !self.password.is_empty()
    }

    /// `<app_name>/<app_version>` when both parts are set.
    pub(crate) fn app_product(&self) -> Option<String> {
        match (&self.app_name, &self.app_version) {
            (Some(name), Some(version)) if !name.is_empty() => Some(format!("{name}/{version}")),
            _ => None,
        }
    }
}

// Password stays out of logs and panic messages.
impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("wms_code", &self.wms_code)
            .field("customer_code", &self.customer_code)
            .field("environment", &self.environment)
            .field("domain", &self.domain)
            .field("app_name", &self.app_name)
            .field("app_version", &self.app_version)
            .finish()
    }
}
