use crate::categorize::LinkCategory;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Fallback title used when the page has no usable `<title>`
pub const NO_TITLE: &str = "No Title Found";

/// Fallback description used when the page has no usable meta description
pub const NO_DESCRIPTION: &str = "No Description Found";

/// A hyperlink found on the analyzed page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkRecord {
    /// Absolute, normalized URL of the link
    pub url: String,

    /// Trimmed visible text of the anchor
    pub anchor_text: String,
}

/// An image reference found on the analyzed page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRecord {
    /// Absolute, normalized image source
    pub src: String,

    /// Alt text, empty when the attribute is absent
    #[serde(default)]
    pub alt: String,
}

/// Page title and description, with fallbacks applied
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMetadata {
    pub title: String,
    pub description: String,
}

impl PageMetadata {
    /// Build metadata from optional extracted values, applying the fallback text
    pub fn new(title: Option<String>, description: Option<String>) -> Self {
        Self {
            title: title.unwrap_or_else(|| NO_TITLE.to_string()),
            description: description.unwrap_or_else(|| NO_DESCRIPTION.to_string()),
        }
    }
}

impl Default for PageMetadata {
    fn default() -> Self {
        Self::new(None, None)
    }
}

/// Links grouped by category, always carrying all five keys
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorizedLinks {
    #[serde(default)]
    pub internal: Vec<LinkRecord>,
    #[serde(default)]
    pub external: Vec<LinkRecord>,
    #[serde(default)]
    pub social: Vec<LinkRecord>,
    #[serde(default)]
    pub affiliate: Vec<LinkRecord>,
    #[serde(default)]
    pub sponsored: Vec<LinkRecord>,
}

impl CategorizedLinks {
    /// Links in the given category
    pub fn get(&self, category: LinkCategory) -> &[LinkRecord] {
        match category {
            LinkCategory::Internal => &self.internal,
            LinkCategory::External => &self.external,
            LinkCategory::Social => &self.social,
            LinkCategory::Affiliate => &self.affiliate,
            LinkCategory::Sponsored => &self.sponsored,
        }
    }

    fn get_mut(&mut self, category: LinkCategory) -> &mut Vec<LinkRecord> {
        match category {
            LinkCategory::Internal => &mut self.internal,
            LinkCategory::External => &mut self.external,
            LinkCategory::Social => &mut self.social,
            LinkCategory::Affiliate => &mut self.affiliate,
            LinkCategory::Sponsored => &mut self.sponsored,
        }
    }

    /// Append a link to the end of its category
    pub fn push(&mut self, category: LinkCategory, record: LinkRecord) {
        self.get_mut(category).push(record);
    }

    /// Remove repeated URLs within each category, keeping the first occurrence.
    ///
    /// Categories are independent: the same URL may appear once in several.
    pub fn dedup(&mut self) {
        for category in LinkCategory::ALL {
            let mut seen = HashSet::new();
            self.get_mut(category)
                .retain(|record| seen.insert(record.url.clone()));
        }
    }

    /// Total number of links across all categories
    pub fn total(&self) -> usize {
        LinkCategory::ALL.iter().map(|c| self.get(*c).len()).sum()
    }
}

/// Output of a single page analysis
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub meta: PageMetadata,
    pub links: CategorizedLinks,
    pub images: Vec<ImageRecord>,
}

impl AnalysisResult {
    /// Number of images without alt text
    pub fn images_missing_alt(&self) -> usize {
        self.images
            .iter()
            .filter(|img| img.alt.trim().is_empty())
            .count()
    }

    /// Counts in chart order: internal, external, images, social
    pub fn chart_counts(&self) -> [usize; 4] {
        [
            self.links.internal.len(),
            self.links.external.len(),
            self.images.len(),
            self.links.social.len(),
        ]
    }
}

/// Chart summary for a single analyzed site
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub counts: Vec<usize>,
}

impl ChartData {
    pub fn from_analysis(analysis: &AnalysisResult) -> Self {
        Self {
            labels: ["Internal", "External", "Images", "Social"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            counts: analysis.chart_counts().to_vec(),
        }
    }
}

/// Chart summary comparing the user's site with a competitor's
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonChartData {
    pub labels: Vec<String>,
    pub user_values: Vec<usize>,
    pub comp_values: Vec<usize>,
}

impl ComparisonChartData {
    pub fn from_analyses(user: &AnalysisResult, competitor: &AnalysisResult) -> Self {
        Self {
            labels: ["Internal Links", "External Links", "Images", "Social"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            user_values: user.chart_counts().to_vec(),
            comp_values: competitor.chart_counts().to_vec(),
        }
    }
}
