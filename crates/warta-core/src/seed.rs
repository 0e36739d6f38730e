//! Seed catalog: articles shipped with the crate
//!
//! Seed articles are immutable. Nothing in the crate rewrites them, and their
//! counters only ever show the values they were built with.

use std::sync::Arc;

use crate::error::{Result, ResultExt};
use crate::storage::collection::decode;
use crate::types::Article;

const BUILTIN_SEED_JSON: &str = include_str!("../data/seed_articles.json");

/// Immutable, cheaply clonable list of seed articles
#[derive(Debug, Clone)]
pub struct SeedCatalog {
    articles: Arc<[Article]>,
}

impl SeedCatalog {
    pub fn new(articles: Vec<Article>) -> Self {
        Self {
            articles: articles.into(),
        }
    }

    /// Catalog with no seed articles
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// The catalog bundled in `data/seed_articles.json`
    pub fn builtin() -> Result<Self> {
        Self::from_json(BUILTIN_SEED_JSON).context("Loading built-in seed catalog")
    }

    /// Parse a catalog from its JSON form
    pub fn from_json(json: &str) -> Result<Self> {
        let articles: Vec<Article> = decode("seed", json)?;
        Ok(Self::new(articles))
    }

    pub fn articles(&self) -> &[Article] {
        &self.articles
    }

    pub fn get(&self, id: &str) -> Option<&Article> {
        self.articles.iter().find(|a| a.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.articles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }
}

impl Default for SeedCatalog {
    fn default() -> Self {
        Self::empty()
    }
}
