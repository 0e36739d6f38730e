//! In-memory browsing over an already loaded article list
//!
//! Nothing here touches storage. The repository loads the merged collection
//! and hands it to [`ArticleQuery::apply`].

use serde::{Deserialize, Serialize};
use std::cmp::Reverse;

use crate::types::{Article, Category, ALL_CATEGORIES};

/// Category restriction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    /// `"all"` or an exact category name; anything else is `None`
    pub fn from_label(label: &str) -> Option<Self> {
        if label == ALL_CATEGORIES {
            return Some(Self::All);
        }
        label.parse().ok().map(Self::Only)
    }

    pub fn matches(self, article: &Article) -> bool {
        match self {
            Self::All => true,
            Self::Only(category) => article.category == category,
        }
    }
}

impl From<Category> for CategoryFilter {
    fn from(category: Category) -> Self {
        Self::Only(category)
    }
}

/// Result ordering. Every order is stable with respect to the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    /// Merged order: user-authored first, then seed
    #[default]
    Default,
    /// Lexically descending id. Ids are millisecond timestamps, so this is
    /// creation order only while they have the same width.
    Newest,
    MostViewed,
    MostLiked,
}

/// Text, category and ordering for a browse request
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleQuery {
    pub text: Option<String>,
    pub category: CategoryFilter,
    pub sort: SortOrder,
}

impl ArticleQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn category(mut self, category: impl Into<CategoryFilter>) -> Self {
        self.category = category.into();
        self
    }

    pub fn sort(mut self, sort: SortOrder) -> Self {
        self.sort = sort;
        self
    }

    pub fn matches(&self, article: &Article) -> bool {
        self.category.matches(article)
            && self
                .text
                .as_deref()
                .map_or(true, |text| article.matches_text(text))
    }

    /// Filter then sort `articles`
    pub fn apply(&self, articles: Vec<Article>) -> Vec<Article> {
        let mut hits: Vec<Article> = articles.into_iter().filter(|a| self.matches(a)).collect();
        sort_articles(&mut hits, self.sort);
        hits
    }
}

/// Stable in-place sort
pub fn sort_articles(articles: &mut [Article], order: SortOrder) {
    match order {
        SortOrder::Default => {}
        SortOrder::Newest => articles.sort_by(|a, b| b.id.cmp(&a.id)),
        SortOrder::MostViewed => articles.sort_by_key(|a| Reverse(a.views)),
        SortOrder::MostLiked => articles.sort_by_key(|a| Reverse(a.likes)),
    }
}
