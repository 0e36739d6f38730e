//! Core types for Warta
//!
//! This module defines the data contract shared by the repository, the
//! engagement tracker and whatever presentation layer sits on top:
//! - Articles and their authors
//! - The closed category set
//! - Related-article references
//! - Drafts coming from the management form
//!
//! The serialized form is JSON with camelCase field names. The body is
//! markdown-like (`**bold**`, blank line between paragraphs), see
//! [`crate::content`].

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Category filter value meaning "every category"
pub const ALL_CATEGORIES: &str = "all";

/// Article category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    Tips,
    Lingkungan,
    Teknologi,
    Ekonomi,
    Komunitas,
}

impl Category {
    /// Every category, in display order
    pub const ALL: [Category; 5] = [
        Category::Tips,
        Category::Lingkungan,
        Category::Teknologi,
        Category::Ekonomi,
        Category::Komunitas,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Tips => "Tips",
            Category::Lingkungan => "Lingkungan",
            Category::Teknologi => "Teknologi",
            Category::Ekonomi => "Ekonomi",
            Category::Komunitas => "Komunitas",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string names no category. Matching is exact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCategory(pub String);

impl fmt::Display for UnknownCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown category '{}'", self.0)
    }
}

impl std::error::Error for UnknownCategory {}

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

/// Article author. A display name and role only, no account linkage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub name: String,
    pub role: String,
}

impl Author {
    pub fn new(name: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            role: role.into(),
        }
    }
}

/// Lightweight cross-link to another article
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelatedArticle {
    pub id: String,
    pub title: String,
    pub image: String,
    pub category: Category,
}

impl From<&Article> for RelatedArticle {
    fn from(article: &Article) -> Self {
        Self {
            id: article.id.clone(),
            title: article.title.clone(),
            image: article.image.clone(),
            category: article.category,
        }
    }
}

/// A news or tips article
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    /// Opaque, stable identifier
    pub id: String,
    pub title: String,
    pub summary: String,
    /// Full body text with `**bold**` markup and blank-line paragraph breaks
    pub content: String,
    pub category: Category,
    /// Free-text publication label ("12 Mei 2024", "Baru saja", ...)
    pub date: String,
    /// Free-text read-time label ("5 menit baca")
    pub read_time: String,
    /// Image URL
    pub image: String,
    pub author: Author,
    pub tags: Vec<String>,
    pub views: u64,
    pub likes: u64,
    pub comments: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub related_articles: Option<Vec<RelatedArticle>>,
}

impl Article {
    /// Case-insensitive substring match over title, summary and tags
    pub fn matches_text(&self, needle: &str) -> bool {
        let needle = needle.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        self.title.to_lowercase().contains(&needle)
            || self.summary.to_lowercase().contains(&needle)
            || self
                .tags
                .iter()
                .any(|tag| tag.to_lowercase().contains(&needle))
    }
}

/// Article fields as submitted from the management form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleDraft {
    pub title: String,
    pub summary: String,
    pub body: String,
    pub category: Category,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub author_name: Option<String>,
    #[serde(default)]
    pub author_role: Option<String>,
    /// Comma separated tags, e.g. `"daur ulang, plastik"`
    #[serde(default)]
    pub tags_csv: String,
    #[serde(default)]
    pub read_time_label: String,
}

impl ArticleDraft {
    pub fn new(
        title: impl Into<String>,
        summary: impl Into<String>,
        body: impl Into<String>,
        category: Category,
    ) -> Self {
        Self {
            title: title.into(),
            summary: summary.into(),
            body: body.into(),
            category,
            image_url: None,
            author_name: None,
            author_role: None,
            tags_csv: String::new(),
            read_time_label: String::new(),
        }
    }

    pub fn with_image(mut self, url: impl Into<String>) -> Self {
        self.image_url = Some(url.into());
        self
    }

    pub fn with_author(mut self, name: impl Into<String>, role: impl Into<String>) -> Self {
        self.author_name = Some(name.into());
        self.author_role = Some(role.into());
        self
    }

    pub fn with_tags(mut self, tags_csv: impl Into<String>) -> Self {
        self.tags_csv = tags_csv.into();
        self
    }

    pub fn with_read_time(mut self, label: impl Into<String>) -> Self {
        self.read_time_label = label.into();
        self
    }

    /// Names of required fields that are empty (whitespace counts as empty)
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("title", &self.title),
            ("summary", &self.summary),
            ("body", &self.body),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name)
        .collect()
    }

    /// Tags split on commas, trimmed, empty entries dropped
    pub fn tags(&self) -> Vec<String> {
        parse_tags(&self.tags_csv)
    }
}

/// Split a comma separated tag list, trimming and dropping empty entries
pub fn parse_tags(csv: &str) -> Vec<String> {
    csv.split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}

/// Returns `Some(trimmed)` unless the value is absent or blank
pub(crate) fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
