use crate::categorize::SocialMatch;
use crate::filter::HrefFilterConfig;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// User-Agent presented by the `bot` header profile
pub const BOT_USER_AGENT: &str = "Link-Scope-Bot/1.0 (+https://github.com/link-scope/link-scope)";

/// User-Agent presented by the `browser` header profile
pub const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36";

/// Which set of request headers the fetcher presents to target sites
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeaderProfile {
    /// Identify as a crawler with a descriptive User-Agent
    #[default]
    Bot,
    /// Emulate a desktop browser (User-Agent, Accept, Accept-Language, Referer)
    Browser,
}

/// Configuration for the outbound page fetch
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetchConfig {
    /// Header profile for outbound requests
    #[serde(default)]
    pub profile: HeaderProfile,

    /// Override the profile's User-Agent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

/// Configuration for the page analyzer
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    #[serde(default)]
    pub fetch: FetchConfig,

    /// Which hrefs are never analyzed
    #[serde(default)]
    pub filter: HrefFilterConfig,

    /// How social platform links are recognized
    #[serde(default)]
    pub social_match: SocialMatch,
}

/// Configuration for the HTTP service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Address to listen on
    #[serde(default = "default_listen_addr")]
    pub listen_addr: String,

    /// Whether to add a permissive CORS layer
    #[serde(default)]
    pub cors_enabled: bool,
}

/// Which offline recommendation generator to use
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecommenderKind {
    /// Fixed four-point plan
    Static,
    /// Plan derived from comparing the two analyses
    #[default]
    Comparative,
}

/// Top-level application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub analyzer: AnalyzerConfig,

    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub recommender: RecommenderKind,
}

impl AppConfig {
    /// Load configuration from a file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn Error>> {
        let mut file = File::open(path)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;

        Self::from_json(&contents)
    }

    /// Load configuration from a JSON string
    pub fn from_json(json: &str) -> Result<Self, Box<dyn Error>> {
        let config: Self = serde_json::from_str(json)?;
        Ok(config)
    }
}

/// Default request timeout
fn default_timeout_secs() -> u64 {
    15
}

/// Default listen address
fn default_listen_addr() -> String {
    "0.0.0.0:3000".to_string()
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            profile: HeaderProfile::default(),
            user_agent: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl FetchConfig {
    /// The User-Agent that will actually be sent
    pub fn effective_user_agent(&self) -> &str {
        match (&self.user_agent, self.profile) {
            (Some(ua), _) => ua.as_str(),
            (None, HeaderProfile::Bot) => BOT_USER_AGENT,
            (None, HeaderProfile::Browser) => BROWSER_USER_AGENT,
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: default_listen_addr(),
            cors_enabled: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = AppConfig::from_json("{}").unwrap();
        assert_eq!(config.analyzer.fetch.timeout_secs, 15);
        assert_eq!(config.analyzer.fetch.profile, HeaderProfile::Bot);
        assert_eq!(config.analyzer.social_match, SocialMatch::Substring);
        assert_eq!(config.server.listen_addr, "0.0.0.0:3000");
        assert!(!config.server.cors_enabled);
        assert_eq!(config.recommender, RecommenderKind::Comparative);
    }

    #[test]
    fn test_partial_config() {
        let config = AppConfig::from_json(
            r#"{
                "analyzer": {
                    "fetch": { "profile": "browser", "timeout_secs": 10 },
                    "social_match": "host_suffix"
                },
                "recommender": "static"
            }"#,
        )
        .unwrap();

        assert_eq!(config.analyzer.fetch.profile, HeaderProfile::Browser);
        assert_eq!(config.analyzer.fetch.timeout_secs, 10);
        assert_eq!(config.analyzer.social_match, SocialMatch::HostSuffix);
        assert_eq!(config.recommender, RecommenderKind::Static);
        assert!(!config.analyzer.filter.skip_patterns.is_empty());
    }

    #[test]
    fn test_effective_user_agent() {
        let mut fetch = FetchConfig::default();
        assert_eq!(fetch.effective_user_agent(), BOT_USER_AGENT);

        fetch.profile = HeaderProfile::Browser;
        assert_eq!(fetch.effective_user_agent(), BROWSER_USER_AGENT);

        fetch.user_agent = Some("custom/1.0".to_string());
        assert_eq!(fetch.effective_user_agent(), "custom/1.0");
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "server": {{ "listen_addr": "127.0.0.1:8080" }} }}"#).unwrap();

        let config = AppConfig::from_file(file.path()).unwrap();
        assert_eq!(config.server.listen_addr, "127.0.0.1:8080");
    }

    #[test]
    fn test_invalid_json() {
        assert!(AppConfig::from_json("{ not json").is_err());
        assert!(AppConfig::from_json(r#"{ "recommender": "oracle" }"#).is_err());
    }
}
