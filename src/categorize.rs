use serde::{Deserialize, Serialize};
use std::fmt;
use url::Url;

/// Platforms whose links count as social
pub const SOCIAL_DOMAINS: [&str; 6] = [
    "facebook.com",
    "twitter.com",
    "x.com",
    "instagram.com",
    "linkedin.com",
    "youtube.com",
];

/// URL fragments that mark affiliate links
pub const AFFILIATE_MARKERS: [&str; 3] = ["tag=", "/gp/product/", "awin"];

/// Category assigned to every extracted link
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkCategory {
    Internal,
    External,
    Social,
    Affiliate,
    Sponsored,
}

impl LinkCategory {
    /// All categories, in output key order
    pub const ALL: [LinkCategory; 5] = [
        LinkCategory::Internal,
        LinkCategory::External,
        LinkCategory::Social,
        LinkCategory::Affiliate,
        LinkCategory::Sponsored,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LinkCategory::Internal => "internal",
            LinkCategory::External => "external",
            LinkCategory::Social => "social",
            LinkCategory::Affiliate => "affiliate",
            LinkCategory::Sponsored => "sponsored",
        }
    }
}

impl fmt::Display for LinkCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How the social rule matches platform domains
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SocialMatch {
    /// Platform domain appears anywhere in the URL, path and query included
    #[default]
    Substring,
    /// Host equals the platform domain or is a subdomain of it
    HostSuffix,
}

/// Ordered rule set mapping a normalized link to one category
#[derive(Debug, Clone, Copy, Default)]
pub struct Categorizer {
    social_match: SocialMatch,
}

impl Categorizer {
    pub fn new(social_match: SocialMatch) -> Self {
        Self { social_match }
    }

    /// Categorize a link. The first matching rule wins:
    /// sponsored, affiliate, social, internal, then external.
    pub fn categorize(&self, url: &Url, base_domain: &str, rel: Option<&str>) -> LinkCategory {
        let link = url.as_str();

        if rel.is_some_and(has_sponsored_token) {
            LinkCategory::Sponsored
        } else if AFFILIATE_MARKERS.iter().any(|m| link.contains(m)) {
            LinkCategory::Affiliate
        } else if self.is_social(url) {
            LinkCategory::Social
        } else if url.host_str() == Some(base_domain) {
            LinkCategory::Internal
        } else {
            LinkCategory::External
        }
    }

    fn is_social(&self, url: &Url) -> bool {
        match self.social_match {
            SocialMatch::Substring => SOCIAL_DOMAINS.iter().any(|d| url.as_str().contains(d)),
            SocialMatch::HostSuffix => {
                let Some(host) = url.host_str() else {
                    return false;
                };
                SOCIAL_DOMAINS.iter().any(|d| {
                    host == *d
                        || host
                            .strip_suffix(d)
                            .is_some_and(|prefix| prefix.ends_with('.'))
                })
            }
        }
    }
}

fn has_sponsored_token(rel: &str) -> bool {
    rel.split_ascii_whitespace()
        .any(|token| token.eq_ignore_ascii_case("sponsored"))
}

/// Categorize with the default rule set
pub fn categorize(url: &Url, base_domain: &str, rel: Option<&str>) -> LinkCategory {
    Categorizer::default().categorize(url, base_domain, rel)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn url(s: &str) -> Url {
        Url::parse(s).unwrap()
    }

    #[test]
    fn test_internal_and_external() {
        assert_eq!(
            categorize(&url("https://example.com/about"), "example.com", Some("")),
            LinkCategory::Internal
        );
        assert_eq!(
            categorize(&url("https://google.com/"), "example.com", None),
            LinkCategory::External
        );
    }

    #[test]
    fn test_subdomain_is_external() {
        assert_eq!(
            categorize(&url("https://blog.example.com/"), "example.com", None),
            LinkCategory::External
        );
    }

    #[test]
    fn test_sponsored_wins_over_everything() {
        for link in [
            "https://example.com/about",
            "https://amazon.com/dp/1?tag=abc",
            "https://facebook.com/page",
        ] {
            assert_eq!(
                categorize(&url(link), "example.com", Some("nofollow sponsored")),
                LinkCategory::Sponsored,
                "{} should be sponsored",
                link
            );
        }
        assert_eq!(
            categorize(&url("https://a.com/"), "example.com", Some("SPONSORED")),
            LinkCategory::Sponsored
        );
    }

    #[test]
    fn test_affiliate_markers() {
        for link in [
            "https://amazon.com/dp/123?tag=mysite-20",
            "https://amazon.com/gp/product/B000",
            "https://www.awin1.com/cread.php?id=1",
        ] {
            assert_eq!(
                categorize(&url(link), "example.com", None),
                LinkCategory::Affiliate,
                "{} should be affiliate",
                link
            );
        }
    }

    #[test]
    fn test_affiliate_beats_social() {
        assert_eq!(
            categorize(&url("https://youtube.com/watch?v=1&tag=x"), "example.com", None),
            LinkCategory::Affiliate
        );
    }

    #[test]
    fn test_social_platforms() {
        for link in [
            "https://www.facebook.com/brand",
            "https://twitter.com/brand",
            "https://x.com/brand",
            "https://instagram.com/brand",
            "https://www.linkedin.com/company/brand",
            "https://youtube.com/@brand",
        ] {
            assert_eq!(
                categorize(&url(link), "example.com", None),
                LinkCategory::Social,
                "{} should be social",
                link
            );
        }
    }

    #[test]
    fn test_social_substring_looseness_is_preserved() {
        let link = url("https://example.com/share?u=youtube.com");
        assert_eq!(
            categorize(&link, "example.com", None),
            LinkCategory::Social
        );
        // "x.com" is a substring of many hosts
        assert_eq!(
            categorize(&url("https://dropbox.com/"), "example.com", None),
            LinkCategory::Social
        );
    }

    #[test]
    fn test_host_suffix_matching() {
        let strict = Categorizer::new(SocialMatch::HostSuffix);
        assert_eq!(
            strict.categorize(&url("https://example.com/share?u=youtube.com"), "example.com", None),
            LinkCategory::Internal
        );
        assert_eq!(
            strict.categorize(&url("https://dropbox.com/"), "example.com", None),
            LinkCategory::External
        );
        assert_eq!(
            strict.categorize(&url("https://m.facebook.com/brand"), "example.com", None),
            LinkCategory::Social
        );
        assert_eq!(
            strict.categorize(&url("https://x.com/brand"), "example.com", None),
            LinkCategory::Social
        );
    }

    #[test]
    fn test_category_serde_names() {
        assert_eq!(
            serde_json::to_string(&LinkCategory::Affiliate).unwrap(),
            "\"affiliate\""
        );
        assert_eq!(LinkCategory::Sponsored.to_string(), "sponsored");
    }
}
