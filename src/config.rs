//! Client configuration
//!
//! `ClientConfig` describes where the feed lives and how the loader and
//! vote widget talk to it. It is loaded from YAML, with serde defaults for
//! everything except the server's base URL.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use url::Url;

// ============================================================================
// Client Config
// ============================================================================

/// Complete client configuration loaded from YAML
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Server origin, e.g. `https://news.example.com`
    pub base_url: String,

    /// Path of the page being scrolled; page requests go to this URL
    #[serde(default = "default_feed_path")]
    pub feed_path: String,

    /// Query parameter carrying the page number
    #[serde(default = "default_page_param")]
    pub page_param: String,

    /// First page fetched by the loader (page 1 is rendered server-side)
    #[serde(default = "default_start_page")]
    pub start_page: u32,

    /// Container that receives loaded fragments
    #[serde(default = "default_container")]
    pub container: String,

    /// Slack in pixels when deciding the viewport reached the bottom
    #[serde(default = "default_bottom_tolerance")]
    pub bottom_tolerance: f64,

    /// Upper bound on a single request
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// User agent sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Anti-forgery token required by the vote endpoints
    #[serde(default)]
    pub csrf_token: Option<String>,
}

fn default_feed_path() -> String {
    "/".to_string()
}

fn default_page_param() -> String {
    "page".to_string()
}

fn default_start_page() -> u32 {
    2
}

fn default_container() -> String {
    "news-container".to_string()
}

fn default_bottom_tolerance() -> f64 {
    1.0
}

fn default_request_timeout_secs() -> u64 {
    30
}

fn default_user_agent() -> String {
    format!("scrollfeed/{}", env!("CARGO_PKG_VERSION"))
}

impl ClientConfig {
    /// Create a config with defaults for the given server
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            feed_path: default_feed_path(),
            page_param: default_page_param(),
            start_page: default_start_page(),
            container: default_container(),
            bottom_tolerance: default_bottom_tolerance(),
            request_timeout_secs: default_request_timeout_secs(),
            user_agent: default_user_agent(),
            csrf_token: None,
        }
    }

    /// Load and validate a config file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(Error::FileNotFound {
                path: path.display().to_string(),
            });
        }
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml(&contents)
    }

    /// Parse and validate a config from a YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to YAML
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Check value ranges and URL syntax
    pub fn validate(&self) -> Result<()> {
        if self.base_url.trim().is_empty() {
            return Err(Error::missing_field("base_url"));
        }
        let base = Url::parse(&self.base_url)?;
        if !matches!(base.scheme(), "http" | "https") {
            return Err(Error::invalid_value(
                "base_url",
                format!("unsupported scheme '{}'", base.scheme()),
            ));
        }
        if self.page_param.trim().is_empty() {
            return Err(Error::invalid_value("page_param", "must not be empty"));
        }
        if self.start_page == 0 {
            return Err(Error::invalid_value("start_page", "pages are numbered from 1"));
        }
        if !self.bottom_tolerance.is_finite() || self.bottom_tolerance < 0.0 {
            return Err(Error::invalid_value(
                "bottom_tolerance",
                "must be a finite, non-negative number of pixels",
            ));
        }
        if self.request_timeout_secs == 0 {
            return Err(Error::invalid_value(
                "request_timeout_secs",
                "must be at least one second",
            ));
        }
        Ok(())
    }

    /// Absolute URL of the scrolled page
    pub fn feed_url(&self) -> Result<Url> {
        let base = Url::parse(&self.base_url)?;
        Ok(base.join(&self.feed_path)?)
    }

    /// Request timeout as a duration
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Apply command-line overrides on top of file values
    pub fn with_overrides(mut self, base_url: Option<&str>, csrf_token: Option<&str>) -> Self {
        if let Some(url) = base_url {
            self.base_url = url.to_string();
        }
        if let Some(token) = csrf_token {
            self.csrf_token = Some(token.to_string());
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;
    use test_case::test_case;

    #[test]
    fn test_minimal_yaml_uses_defaults() {
        let config = ClientConfig::from_yaml("base_url: http://localhost:8000\n").unwrap();
        assert_eq!(config, ClientConfig::new("http://localhost:8000"));
        assert_eq!(config.start_page, 2);
        assert_eq!(config.page_param, "page");
        assert_eq!(config.container, "news-container");
        assert_eq!(config.request_timeout(), Duration::from_secs(30));
    }

    #[test]
    fn test_full_yaml() {
        let yaml = r"
base_url: https://news.example.com
feed_path: /tag/rust/
page_param: p
start_page: 3
container: feed
bottom_tolerance: 4.5
request_timeout_secs: 5
user_agent: test-agent/1.0
csrf_token: abc123
";
        let config = ClientConfig::from_yaml(yaml).unwrap();
        assert_eq!(config.feed_path, "/tag/rust/");
        assert_eq!(config.page_param, "p");
        assert_eq!(config.start_page, 3);
        assert_eq!(config.container, "feed");
        assert!((config.bottom_tolerance - 4.5).abs() < f64::EPSILON);
        assert_eq!(config.csrf_token.as_deref(), Some("abc123"));
        assert_eq!(
            config.feed_url().unwrap().as_str(),
            "https://news.example.com/tag/rust/"
        );
    }

    #[test]
    fn test_missing_base_url_is_parse_error() {
        let err = ClientConfig::from_yaml("start_page: 2\n").unwrap_err();
        assert!(matches!(err, Error::YamlParse(_)));
    }

    #[test_case("start_page: 0", "start_page" ; "zero start page")]
    #[test_case("bottom_tolerance: -1.0", "bottom_tolerance" ; "negative tolerance")]
    #[test_case("bottom_tolerance: .nan", "bottom_tolerance" ; "nan tolerance")]
    #[test_case("request_timeout_secs: 0", "request_timeout_secs" ; "zero timeout")]
    #[test_case("page_param: ''", "page_param" ; "empty page param")]
    fn test_invalid_values(line: &str, field: &str) {
        let yaml = format!("base_url: http://localhost:8000\n{line}\n");
        match ClientConfig::from_yaml(&yaml).unwrap_err() {
            Error::InvalidConfigValue { field: f, .. } => assert_eq!(f, field),
            other => panic!("Expected InvalidConfigValue, got {other:?}"),
        }
    }

    #[test]
    fn test_invalid_base_url() {
        let err = ClientConfig::from_yaml("base_url: not a url\n").unwrap_err();
        assert!(matches!(err, Error::InvalidUrl(_)));

        let err = ClientConfig::from_yaml("base_url: ftp://example.com\n").unwrap_err();
        assert!(matches!(err, Error::InvalidConfigValue { .. }));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "base_url: http://127.0.0.1:9000").unwrap();
        writeln!(file, "csrf_token: tok").unwrap();

        let config = ClientConfig::from_file(file.path()).unwrap();
        assert_eq!(config.base_url, "http://127.0.0.1:9000");
        assert_eq!(config.csrf_token.as_deref(), Some("tok"));
    }

    #[test]
    fn test_from_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = ClientConfig::from_file(dir.path().join("nope.yaml")).unwrap_err();
        assert!(matches!(err, Error::FileNotFound { .. }));
    }

    #[test]
    fn test_overrides() {
        let config = ClientConfig::new("http://a.example")
            .with_overrides(Some("http://b.example"), Some("token"));
        assert_eq!(config.base_url, "http://b.example");
        assert_eq!(config.csrf_token.as_deref(), Some("token"));

        let untouched = ClientConfig::new("http://a.example").with_overrides(None, None);
        assert_eq!(untouched, ClientConfig::new("http://a.example"));
    }

    #[test]
    fn test_yaml_roundtrip_keeps_token() {
        let mut config = ClientConfig::new("http://localhost:8000");
        config.csrf_token = Some("xyz".into());
        let yaml = config.to_yaml().unwrap();
        assert!(yaml.contains("csrf_token: xyz"));
    }
}
