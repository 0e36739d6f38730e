//! NewsDesk: the function-based contract the presentation layer calls into

use std::sync::Arc;

use crate::config::{StorageBackend, WartaConfig};
use crate::engagement::EngagementTracker;
use crate::error::{Result, ResultExt};
use crate::query::ArticleQuery;
use crate::repository::{ArticleRepository, CatalogStats};
use crate::seed::SeedCatalog;
use crate::storage::{KeyValueStore, MemoryStore, SqliteStore, StoreKeys};
use crate::types::{Article, ArticleDraft, RelatedArticle};

/// Open the backend `config` selects
pub fn open_store(config: &WartaConfig) -> Result<Arc<dyn KeyValueStore>> {
    match &config.storage {
        StorageBackend::Memory => Ok(Arc::new(MemoryStore::new())),
        StorageBackend::Sqlite { path } => {
            let store = SqliteStore::open(path)
                .with_context(|| format!("Opening article store at {}", path.display()))?;
            Ok(Arc::new(store))
        }
    }
}

/// Repository and tracker wired to one store
#[derive(Debug, Clone)]
pub struct NewsDesk {
    repository: ArticleRepository,
    engagement: EngagementTracker,
    featured_limit: usize,
}

impl NewsDesk {
    /// Open the configured store with the built-in seed catalog
    pub fn open(config: WartaConfig) -> Result<Self> {
        config.validate()?;
        let store = open_store(&config)?;
        let seeds = SeedCatalog::builtin()?;
        tracing::info!(
            "NewsDesk opened: namespace={} seeds={}",
            config.namespace,
            seeds.len()
        );
        Ok(Self::with_store(store, seeds, &config))
    }

    /// Wire an existing store and catalog
    pub fn with_store(store: Arc<dyn KeyValueStore>, seeds: SeedCatalog, config: &WartaConfig) -> Self {
        let repository = ArticleRepository::new(store, seeds)
            .with_keys(StoreKeys::new(config.namespace.clone()))
            .with_defaults(config.defaults.clone());
        let engagement = EngagementTracker::new(repository.clone());
        Self {
            repository,
            engagement,
            featured_limit: config.featured_limit,
        }
    }

    pub fn repository(&self) -> &ArticleRepository {
        &self.repository
    }

    pub fn engagement(&self) -> &EngagementTracker {
        &self.engagement
    }

    pub fn load_all(&self) -> Vec<Article> {
        self.repository.load_all()
    }

    pub fn get_by_id(&self, id: &str) -> Option<Article> {
        self.repository.get_by_id(id)
    }

    pub fn get_by_category(&self, category: &str) -> Vec<Article> {
        self.repository.get_by_category(category)
    }

    pub fn get_featured(&self, limit: usize) -> Vec<Article> {
        self.repository.get_featured(limit)
    }

    /// Featured articles using the configured limit
    pub fn get_featured_default(&self) -> Vec<Article> {
        self.repository.get_featured(self.featured_limit)
    }

    pub fn create(&self, draft: &ArticleDraft) -> Result<Article> {
        self.repository.create(draft)
    }

    pub fn update(&self, id: &str, draft: &ArticleDraft) -> Result<Article> {
        self.repository.update(id, draft)
    }

    pub fn delete(&self, id: &str) -> Result<bool> {
        self.repository.delete(id)
    }

    pub fn increment_views(&self, id: &str) -> Result<()> {
        self.repository.increment_views(id)
    }

    pub fn has_liked(&self, article_id: &str, user_id: &str) -> bool {
        self.engagement.has_liked(article_id, user_id)
    }

    pub fn toggle_like(&self, article_id: &str, user_id: &str) -> Result<bool> {
        self.engagement.toggle_like(article_id, user_id)
    }

    pub fn liked_articles(&self, user_id: &str) -> Vec<String> {
        self.engagement.liked_articles(user_id)
    }

    pub fn search(&self, query: &ArticleQuery) -> Vec<Article> {
        self.repository.search(query)
    }

    pub fn related(&self, id: &str, limit: usize) -> Vec<RelatedArticle> {
        self.repository.related(id, limit)
    }

    pub fn stats(&self) -> CatalogStats {
        self.repository.stats()
    }

    pub fn device_user_id(&self) -> Result<String> {
        self.engagement.device_user_id()
    }
}
