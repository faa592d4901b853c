//! Environment-driven configuration for the seeding workflow.
//!
//! Values are resolved with explicit flags taking precedence over environment
//! variables so a single shell can drive several CMS instances.
use anyhow::{anyhow, Result};
use std::env;
use std::path::{Path, PathBuf};

pub const ENV_STRAPI_URL: &str = "STRAPI_URL";
pub const ENV_API_TOKEN: &str = "STRAPI_API_TOKEN";
pub const ENV_ADMIN_EMAIL: &str = "ADMIN_EMAIL";
pub const ENV_ADMIN_PASSWORD: &str = "ADMIN_PASSWORD";

pub const DEFAULT_BASE_URL: &str = "http://localhost:1337";
pub const DEFAULT_LEDGER_PATH: &str = "seed-ledger.json";

/// Admin email/password pair used for the login fallback.
#[derive(Debug, Clone)]
pub struct AdminLogin {
    pub email: String,
    pub password: String,
}

/// Credentials available to the authenticator.
///
/// The static token is tried first; the admin pair is the fallback when the
/// token lacks configured permissions.
#[derive(Debug, Clone, Default)]
pub struct Credentials {
    pub api_token: Option<String>,
    pub admin: Option<AdminLogin>,
}

impl Credentials {
    pub fn is_empty(&self) -> bool {
        self.api_token.is_none() && self.admin.is_none()
    }

    /// Fail before any network call when nothing is configured.
    pub fn ensure_present(&self) -> Result<()> {
        if self.is_empty() {
            return Err(anyhow!(
                "no credentials configured: set {ENV_API_TOKEN} (Settings > API Tokens, \
                 type Full access) or {ENV_ADMIN_EMAIL} and {ENV_ADMIN_PASSWORD}"
            ));
        }
        Ok(())
    }
}

/// Resolved configuration for one invocation.
#[derive(Debug, Clone)]
pub struct SeedConfig {
    pub base_url: String,
    pub credentials: Credentials,
    pub ledger_path: PathBuf,
}

impl SeedConfig {
    /// Resolve configuration from flags, then environment, then defaults.
    pub fn resolve(url_flag: Option<&str>, ledger_flag: Option<&Path>) -> Result<Self> {
        Self::resolve_with(url_flag, ledger_flag, |key| env::var(key).ok())
    }

    fn resolve_with(
        url_flag: Option<&str>,
        ledger_flag: Option<&Path>,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self> {
        let base_url = url_flag
            .map(str::to_string)
            .or_else(|| non_empty(lookup(ENV_STRAPI_URL)))
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let base_url = base_url.trim().trim_end_matches('/').to_string();
        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(anyhow!(
                "{ENV_STRAPI_URL} must be an http(s) URL (got {base_url:?})"
            ));
        }

        let api_token = non_empty(lookup(ENV_API_TOKEN));
        let admin_email = non_empty(lookup(ENV_ADMIN_EMAIL));
        let admin_password = non_empty(lookup(ENV_ADMIN_PASSWORD));
        let admin = match (admin_email, admin_password) {
            (Some(email), Some(password)) => Some(AdminLogin { email, password }),
            (None, None) => None,
            (Some(_), None) => {
                return Err(anyhow!("{ENV_ADMIN_EMAIL} is set but {ENV_ADMIN_PASSWORD} is not"));
            }
            (None, Some(_)) => {
                return Err(anyhow!("{ENV_ADMIN_PASSWORD} is set but {ENV_ADMIN_EMAIL} is not"));
            }
        };

        let ledger_path = ledger_flag
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_LEDGER_PATH));

        Ok(Self {
            base_url,
            credentials: Credentials { api_token, admin },
            ledger_path,
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
