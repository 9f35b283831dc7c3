use crate::categorize::Categorizer;
use crate::config::AnalyzerConfig;
use crate::error::AnalysisError;
use crate::fetcher::PageFetcher;
use crate::filter::HrefFilter;
use crate::normalize::resolve;
use crate::parsers::{ParsedPage, html};
use crate::results::{AnalysisResult, CategorizedLinks, ImageRecord, LinkRecord, PageMetadata};
use std::error::Error;
use url::Url;

/// Fetches a page and classifies its links and images.
///
/// Holds only read-only state, so one instance can serve any number of
/// concurrent requests.
#[derive(Debug, Clone)]
pub struct PageAnalyzer {
    fetcher: PageFetcher,
    filter: HrefFilter,
    categorizer: Categorizer,
}

impl PageAnalyzer {
    /// Create an analyzer from configuration
    pub fn new(config: &AnalyzerConfig) -> Result<Self, Box<dyn Error>> {
        Ok(Self {
            fetcher: PageFetcher::new(&config.fetch)?,
            filter: HrefFilter::new(&config.filter)?,
            categorizer: Categorizer::new(config.social_match),
        })
    }

    /// Fetch `target_url` and analyze the returned markup
    pub async fn analyze(&self, target_url: &str) -> Result<AnalysisResult, AnalysisError> {
        let (base_url, base_domain) = parse_target(target_url)?;
        ::log::info!("Analyzing {}", base_url);

        let html = self.fetcher.fetch(&base_url).await?;
        let parsed = html::parse(&html);

        Ok(self.assemble(&base_url, &base_domain, parsed))
    }

    /// Analyze two pages concurrently; fails if either analysis fails
    pub async fn analyze_pair(
        &self,
        first_url: &str,
        second_url: &str,
    ) -> Result<(AnalysisResult, AnalysisResult), AnalysisError> {
        tokio::try_join!(self.analyze(first_url), self.analyze(second_url))
    }

    /// Analyze markup obtained elsewhere as if it had been fetched from `target_url`
    pub fn analyze_document(
        &self,
        target_url: &str,
        html: &str,
    ) -> Result<AnalysisResult, AnalysisError> {
        let (base_url, base_domain) = parse_target(target_url)?;
        Ok(self.assemble(&base_url, &base_domain, html::parse(html)))
    }

    fn assemble(&self, base_url: &Url, base_domain: &str, parsed: ParsedPage) -> AnalysisResult {
        let mut links = CategorizedLinks::default();
        let mut skipped = 0;

        for anchor in parsed.anchors {
            let Some(href) = anchor.href.as_deref() else {
                continue;
            };
            if !self.filter.should_analyze(href) {
                skipped += 1;
                continue;
            }
            let Some(url) = resolve(href, base_url) else {
                skipped += 1;
                continue;
            };

            let category = self
                .categorizer
                .categorize(&url, base_domain, anchor.rel.as_deref());
            ::log::trace!("{} -> {}", url, category);

            links.push(
                category,
                LinkRecord {
                    url: url.into(),
                    anchor_text: anchor.text,
                },
            );
        }

        let images = parsed
            .images
            .into_iter()
            .filter_map(|image| {
                let src = image.src.filter(|s| !s.is_empty())?;
                let src = resolve(&src, base_url)?;
                Some(ImageRecord {
                    src: src.into(),
                    alt: image.alt.unwrap_or_default(),
                })
            })
            .collect::<Vec<_>>();

        links.dedup();

        ::log::info!(
            "Found {} unique links and {} images on {} ({} anchors skipped)",
            links.total(),
            images.len(),
            base_url,
            skipped
        );

        AnalysisResult {
            meta: PageMetadata::new(parsed.title, parsed.description),
            links,
            images,
        }
    }
}

/// Parse the analysis target into its canonical URL and host name
pub fn parse_target(target_url: &str) -> Result<(Url, String), AnalysisError> {
    let url = Url::parse(target_url).map_err(|e| {
        ::log::debug!("Rejecting target {:?}: {}", target_url, e);
        AnalysisError::InvalidUrl
    })?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(AnalysisError::InvalidUrl);
    }

    let domain = url
        .host_str()
        .filter(|h| !h.is_empty())
        .ok_or(AnalysisError::InvalidUrl)?
        .to_string();

    Ok((url, domain))
}
