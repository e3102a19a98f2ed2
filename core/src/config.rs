//! Client configuration: base URL, credentials, and dispatch behaviour.
//!
//! Built programmatically with the `with_*` methods or read from the
//! environment with [`ClientConfig::from_env`]:
//!
//! | Variable | Default |
//! |---|---|
//! | `TIKHUB_BASE_URL` | `https://api.tikhub.io` |
//! | `TIKHUB_API_KEY` | none (sent as `Authorization: Bearer ...`) |
//! | `TIKHUB_COOKIE` | none (used only when no API key is set) |
//! | `TIKHUB_TIMEOUT_SECS` | `30` |
//! | `TIKHUB_RAISE_ON_UNEXPECTED_STATUS` | `false` |

use std::fmt;
use std::time::Duration;

use crate::error::{ApiError, Result};

pub const DEFAULT_BASE_URL: &str = "https://api.tikhub.io";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
pub const DEFAULT_USER_AGENT: &str = concat!("tikhub-core/", env!("CARGO_PKG_VERSION"));

/// Credentials attached to every request.
#[derive(Clone, PartialEq, Eq)]
pub enum Auth {
    /// API key, sent as `Authorization: Bearer <key>`.
    Bearer(String),
    /// Raw cookie string, sent as the `Cookie` header.
    Cookie(String),
}

impl Auth {
    pub(crate) fn header(&self) -> (String, String) {
        match self {
            Auth::Bearer(token) => ("authorization".to_string(), format!("Bearer {token}")),
            Auth::Cookie(cookie) => ("cookie".to_string(), cookie.clone()),
        }
    }
}

impl fmt::Debug for Auth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Auth::Bearer(_) => f.write_str("Bearer(<redacted>)"),
            Auth::Cookie(_) => f.write_str("Cookie(<redacted>)"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    pub base_url: String,
    pub auth: Option<Auth>,
    /// Extra headers sent with every request, after the auth header.
    pub headers: Vec<(String, String)>,
    pub timeout: Duration,
    /// Fail with `UnexpectedStatus` on statuses other than 200/422 instead of
    /// returning an empty result.
    pub raise_on_unexpected_status: bool,
    pub follow_redirects: bool,
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            auth: None,
            headers: Vec::new(),
            timeout: DEFAULT_TIMEOUT,
            raise_on_unexpected_status: false,
            follow_redirects: false,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.auth = Some(Auth::Bearer(token.into()));
        self
    }

    pub fn with_cookie(mut self, cookie: impl Into<String>) -> Self {
        self.auth = Some(Auth::Cookie(cookie.into()));
        self
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_raise_on_unexpected_status(mut self, raise: bool) -> Self {
        self.raise_on_unexpected_status = raise;
        self
    }

    pub fn with_follow_redirects(mut self, follow: bool) -> Self {
        self.follow_redirects = follow;
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Read the configuration from `TIKHUB_*` environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Like [`from_env`](Self::from_env) but reads variables through `lookup`.
    /// Empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let mut config = Self::default();
        if let Some(base_url) = var("TIKHUB_BASE_URL") {
            config.base_url = base_url;
        }
        config.auth = match (var("TIKHUB_API_KEY"), var("TIKHUB_COOKIE")) {
            (Some(token), _) => Some(Auth::Bearer(token)),
            (None, Some(cookie)) => Some(Auth::Cookie(cookie)),
            (None, None) => None,
        };
        if let Some(secs) = var("TIKHUB_TIMEOUT_SECS") {
            let secs: u64 = secs.trim().parse().map_err(|_| {
                ApiError::Config(format!("TIKHUB_TIMEOUT_SECS must be an integer, got {secs:?}"))
            })?;
            config.timeout = Duration::from_secs(secs);
        }
        if let Some(raise) = var("TIKHUB_RAISE_ON_UNEXPECTED_STATUS") {
            config.raise_on_unexpected_status = parse_bool(&raise).ok_or_else(|| {
                ApiError::Config(format!(
                    "TIKHUB_RAISE_ON_UNEXPECTED_STATUS must be a boolean, got {raise:?}"
                ))
            })?;
        }
        Ok(config)
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn defaults_when_environment_is_empty() {
        let config = ClientConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, ClientConfig::default());
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert!(config.auth.is_none());
        assert!(!config.raise_on_unexpected_status);
    }

    #[test]
    fn api_key_wins_over_cookie() {
        let config = ClientConfig::from_lookup(lookup(&[
            ("TIKHUB_API_KEY", "key-123"),
            ("TIKHUB_COOKIE", "sessionid=1"),
        ]))
        .unwrap();
        assert_eq!(config.auth, Some(Auth::Bearer("key-123".to_string())));
    }

    #[test]
    fn cookie_used_without_api_key() {
        let config = ClientConfig::from_lookup(lookup(&[
            ("TIKHUB_API_KEY", "  "),
            ("TIKHUB_COOKIE", "sessionid=1"),
        ]))
        .unwrap();
        assert_eq!(config.auth, Some(Auth::Cookie("sessionid=1".to_string())));
    }

    #[test]
    fn parses_timeout_and_raise_flag() {
        let config = ClientConfig::from_lookup(lookup(&[
            ("TIKHUB_BASE_URL", "https://api.tikhub.dev"),
            ("TIKHUB_TIMEOUT_SECS", "90"),
            ("TIKHUB_RAISE_ON_UNEXPECTED_STATUS", "TRUE"),
        ]))
        .unwrap();
        assert_eq!(config.base_url, "https://api.tikhub.dev");
        assert_eq!(config.timeout, Duration::from_secs(90));
        assert!(config.raise_on_unexpected_status);
    }

    #[test]
    fn rejects_bad_timeout() {
        let err = ClientConfig::from_lookup(lookup(&[("TIKHUB_TIMEOUT_SECS", "soon")])).unwrap_err();
        assert!(matches!(&err, ApiError::Config(msg) if msg.contains("TIKHUB_TIMEOUT_SECS")));
    }

    #[test]
    fn rejects_bad_raise_flag() {
        let err = ClientConfig::from_lookup(lookup(&[("TIKHUB_RAISE_ON_UNEXPECTED_STATUS", "maybe")]))
            .unwrap_err();
        assert!(matches!(err, ApiError::Config(_)));
    }

    #[test]
    fn debug_redacts_credentials() {
        let config = ClientConfig::default().with_token("secret-token");
        let rendered = format!("{config:?}");
        assert!(!rendered.contains("secret-token"));
        assert!(rendered.contains("Bearer(<redacted>)"));
    }

    #[test]
    fn builder_methods_compose() {
        let config = ClientConfig::new("http://localhost:3000")
            .with_cookie("sessionid=abc")
            .with_header("x-trace", "1")
            .with_timeout(Duration::from_secs(5))
            .with_raise_on_unexpected_status(true)
            .with_follow_redirects(true)
            .with_user_agent("tikhub-cli/1.0");
        assert_eq!(config.auth.as_ref().map(Auth::header), Some(("cookie".to_string(), "sessionid=abc".to_string())));
        assert_eq!(config.headers, vec![("x-trace".to_string(), "1".to_string())]);
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert!(config.raise_on_unexpected_status);
        assert!(config.follow_redirects);
        assert_eq!(config.user_agent, "tikhub-cli/1.0");
    }
}
