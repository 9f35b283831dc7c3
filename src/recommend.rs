//! Recommendation generation for the comparative report.
//!
//! A [`Recommender`] turns two analyses into free-text advice. The crate ships
//! two offline implementations; anything that talks to an external text
//! generation service can implement the same trait.

use crate::config::RecommenderKind;
use crate::results::{AnalysisResult, NO_DESCRIPTION, NO_TITLE};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Text returned to clients when the recommender fails
pub const FALLBACK_PLAN: &str = "Recommendations are currently unavailable. \
Compare the link and image counts above: close gaps in internal linking, \
add alt text to every image, and review outbound links for quality.";

const STATIC_PLAN: &str = "1. **Improve Internal Linking:** Your site has fewer internal links than the competitor. Focus on linking relevant content.
2. **Optimize Image Alt Text:** Several of your images are missing alt text. Ensure all images have descriptive alt attributes for SEO and accessibility.
3. **Diversify Anchor Text:** Review your internal and external links to ensure a variety of relevant anchor texts are used, avoiding over-optimization.
4. **Boost External Link Quality:** The competitor appears to have more authoritative external links. Consider building relationships with reputable sites in your industry.";

#[derive(Error, Debug)]
pub enum RecommendError {
    #[error("Recommendation service unavailable: {0}")]
    Unavailable(String),

    #[error("Recommendation service error: {0}")]
    Service(String),
}

#[async_trait]
pub trait Recommender: Send + Sync {
    /// Produce a plan for the user's site given the competitor's analysis
    async fn recommend(
        &self,
        user: &AnalysisResult,
        competitor: &AnalysisResult,
    ) -> Result<String, RecommendError>;

    /// Short name used in logs
    fn name(&self) -> &str;
}

/// Build the recommender selected in configuration
pub fn from_kind(kind: RecommenderKind) -> Arc<dyn Recommender> {
    match kind {
        RecommenderKind::Static => Arc::new(StaticPlan),
        RecommenderKind::Comparative => Arc::new(ComparativePlan),
    }
}

/// Run the recommender, substituting [`FALLBACK_PLAN`] on failure
pub async fn recommend_or_fallback(
    recommender: &dyn Recommender,
    user: &AnalysisResult,
    competitor: &AnalysisResult,
) -> String {
    match recommender.recommend(user, competitor).await {
        Ok(plan) => plan,
        Err(e) => {
            ::log::warn!("Recommender {} failed: {}", recommender.name(), e);
            FALLBACK_PLAN.to_string()
        }
    }
}

/// Always returns the same four-point plan
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticPlan;

#[async_trait]
impl Recommender for StaticPlan {
    async fn recommend(
        &self,
        _user: &AnalysisResult,
        _competitor: &AnalysisResult,
    ) -> Result<String, RecommendError> {
        Ok(STATIC_PLAN.to_string())
    }

    fn name(&self) -> &str {
        "static"
    }
}

/// Derives a plan from the differences between the two analyses
#[derive(Debug, Clone, Copy, Default)]
pub struct ComparativePlan;

impl ComparativePlan {
    fn items(user: &AnalysisResult, competitor: &AnalysisResult) -> Vec<String> {
        let mut items = Vec::new();

        let (ui, ci) = (user.links.internal.len(), competitor.links.internal.len());
        if ui < ci {
            items.push(format!(
                "**Improve Internal Linking:** Your page has {} internal links against the competitor's {}. Link related content to close the gap.",
                ui, ci
            ));
        }

        let missing_alt = user.images_missing_alt();
        if missing_alt > 0 {
            items.push(format!(
                "**Optimize Image Alt Text:** {} of your {} images have no alt text. Add descriptive alt attributes for SEO and accessibility.",
                missing_alt,
                user.images.len()
            ));
        }

        let (ue, ce) = (user.links.external.len(), competitor.links.external.len());
        if ue < ce {
            items.push(format!(
                "**Boost External Link Quality:** The competitor cites {} external sources to your {}. Reference reputable sites in your industry.",
                ce, ue
            ));
        }

        if user.links.social.is_empty() && !competitor.links.social.is_empty() {
            items.push(format!(
                "**Link Your Social Profiles:** The competitor links to {} social profiles and you link to none.",
                competitor.links.social.len()
            ));
        }

        if user.meta.title == NO_TITLE {
            items.push("**Add a Page Title:** Your page has no <title>. Write a concise, keyword-rich title.".to_string());
        }

        if user.meta.description == NO_DESCRIPTION {
            items.push("**Add a Meta Description:** Your page has no meta description. Summarize the page in one or two sentences.".to_string());
        }

        if items.is_empty() {
            items.push("**Diversify Anchor Text:** Your link profile matches or beats the competitor's. Review anchor text for variety and relevance, avoiding over-optimization.".to_string());
        }

        items
    }
}

#[async_trait]
impl Recommender for ComparativePlan {
    async fn recommend(
        &self,
        user: &AnalysisResult,
        competitor: &AnalysisResult,
    ) -> Result<String, RecommendError> {
        let plan = Self::items(user, competitor)
            .iter()
            .enumerate()
            .map(|(i, item)| format!("{}. {}", i + 1, item))
            .collect::<Vec<_>>()
            .join("\n");
        Ok(plan)
    }

    fn name(&self) -> &str {
        "comparative"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::categorize::LinkCategory;
    use crate::results::{CategorizedLinks, ImageRecord, LinkRecord, PageMetadata};

    fn analysis(internal: usize, external: usize, social: usize) -> AnalysisResult {
        let mut links = CategorizedLinks::default();
        for (category, count) in [
            (LinkCategory::Internal, internal),
            (LinkCategory::External, external),
            (LinkCategory::Social, social),
        ] {
            for i in 0..count {
                links.push(
                    category,
                    LinkRecord {
                        url: format!("https://{}.example/{}", category, i),
                        anchor_text: String::new(),
                    },
                );
            }
        }
        AnalysisResult {
            meta: PageMetadata::new(Some("Title".to_string()), Some("Desc".to_string())),
            links,
            images: Vec::new(),
        }
    }

    struct Failing;

    #[async_trait]
    impl Recommender for Failing {
        async fn recommend(
            &self,
            _user: &AnalysisResult,
            _competitor: &AnalysisResult,
        ) -> Result<String, RecommendError> {
            Err(RecommendError::Unavailable("no credentials".to_string()))
        }

        fn name(&self) -> &str {
            "failing"
        }
    }

    #[tokio::test]
    async fn test_static_plan() {
        let a = analysis(0, 0, 0);
        let plan = StaticPlan.recommend(&a, &a).await.unwrap();
        assert!(plan.starts_with("1. **Improve Internal Linking:**"));
        assert_eq!(plan.lines().count(), 4);
    }

    #[tokio::test]
    async fn test_comparative_plan_reports_gaps() {
        let mut user = analysis(1, 0, 0);
        user.images.push(ImageRecord {
            src: "https://example.com/a.png".to_string(),
            alt: String::new(),
        });
        let competitor = analysis(5, 3, 2);

        let plan = ComparativePlan.recommend(&user, &competitor).await.unwrap();

        assert!(plan.contains("1 internal links against the competitor's 5"));
        assert!(plan.contains("1 of your 1 images have no alt text"));
        assert!(plan.contains("cites 3 external sources to your 0"));
        assert!(plan.contains("links to 2 social profiles"));
        assert!(plan.starts_with("1. "));
        assert!(plan.contains("\n4. "));
    }

    #[tokio::test]
    async fn test_comparative_plan_without_gaps() {
        let user = analysis(5, 5, 1);
        let competitor = analysis(1, 1, 1);

        let plan = ComparativePlan.recommend(&user, &competitor).await.unwrap();
        assert!(plan.starts_with("1. **Diversify Anchor Text:**"));
        assert_eq!(plan.lines().count(), 1);
    }

    #[tokio::test]
    async fn test_comparative_plan_flags_missing_metadata() {
        let mut user = analysis(5, 5, 1);
        user.meta = PageMetadata::default();
        let competitor = analysis(1, 1, 1);

        let plan = ComparativePlan.recommend(&user, &competitor).await.unwrap();
        assert!(plan.contains("Add a Page Title"));
        assert!(plan.contains("Add a Meta Description"));
    }

    #[tokio::test]
    async fn test_fallback_on_error() {
        let a = analysis(0, 0, 0);
        let plan = recommend_or_fallback(&Failing, &a, &a).await;
        assert_eq!(plan, FALLBACK_PLAN);
    }

    #[test]
    fn test_from_kind() {
        assert_eq!(from_kind(RecommenderKind::Static).name(), "static");
        assert_eq!(from_kind(RecommenderKind::Comparative).name(), "comparative");
    }
}
