use regex::Regex;
use serde::{Deserialize, Serialize};

/// Configuration for deciding which raw `href` values are never analyzed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HrefFilterConfig {
    /// Regex patterns for hrefs to skip, matched against the trimmed href
    #[serde(default = "default_skip_patterns")]
    pub skip_patterns: Vec<String>,
}

/// Default skip patterns: links that do not point at a page
fn default_skip_patterns() -> Vec<String> {
    vec![r"(?i)^(mailto|tel|javascript):".to_string()]
}

impl Default for HrefFilterConfig {
    fn default() -> Self {
        Self {
            skip_patterns: default_skip_patterns(),
        }
    }
}

/// Filter applied to anchor hrefs before normalization
#[derive(Debug, Clone)]
pub struct HrefFilter {
    skip_regexes: Vec<Regex>,
}

impl Default for HrefFilter {
    fn default() -> Self {
        Self {
            skip_regexes: default_skip_patterns()
                .iter()
                .filter_map(|p| Regex::new(p).ok())
                .collect(),
        }
    }
}

impl HrefFilter {
    /// Create a new href filter from configuration
    pub fn new(config: &HrefFilterConfig) -> Result<Self, regex::Error> {
        let mut skip_regexes = Vec::with_capacity(config.skip_patterns.len());
        for pattern in &config.skip_patterns {
            skip_regexes.push(Regex::new(pattern)?);
        }

        Ok(Self { skip_regexes })
    }

    /// Determine if an href should be normalized and categorized
    pub fn should_analyze(&self, href: &str) -> bool {
        if href.is_empty() {
            return false;
        }

        let trimmed = href.trim();
        !self.skip_regexes.iter().any(|regex| regex.is_match(trimmed))
    }
}
