//! Article Repository
//!
//! Merges the user-authored collection (persisted, mutable) with the seed
//! catalog (shipped, immutable). The merged view is always
//! `user-authored ++ seed`, each side keeping its own order; new articles are
//! prepended, so the most recent one comes first.
//!
//! Every call re-reads the store. Mutations are read-modify-write of the whole
//! user-authored collection with no isolation: a writer holding stale state
//! overwrites whatever another process wrote in between.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use warta_core::repository::ArticleRepository;
//! use warta_core::seed::SeedCatalog;
//! use warta_core::storage::MemoryStore;
//! use warta_core::types::{ArticleDraft, Category};
//!
//! let repo = ArticleRepository::new(Arc::new(MemoryStore::new()), SeedCatalog::builtin()?);
//! let draft = ArticleDraft::new("Judul", "Ringkasan", "Isi **tebal**", Category::Tips)
//!     .with_tags("hemat, air");
//! let article = repo.create(&draft)?;
//!
//! assert_eq!(repo.load_all()[0].id, article.id);
//! assert_eq!(article.tags, vec!["hemat", "air"]);
//! # Ok::<(), warta_core::WartaError>(())
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;

use crate::config::{DraftDefaults, DEFAULT_FEATURED_LIMIT};
use crate::error::{Result, ValidationError, WartaError};
use crate::query::{sort_articles, ArticleQuery, SortOrder};
use crate::seed::SeedCatalog;
use crate::storage::{CollectionStore, KeyValueStore, StoreKeys};
use crate::types::{non_blank, Article, ArticleDraft, Author, Category, RelatedArticle, ALL_CATEGORIES};

/// Where an article comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Origin {
    UserAuthored,
    Seed,
}

/// An article tagged with its origin
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArticleEntry {
    UserAuthored(Article),
    Seed(Article),
}

impl ArticleEntry {
    pub fn origin(&self) -> Origin {
        match self {
            Self::UserAuthored(_) => Origin::UserAuthored,
            Self::Seed(_) => Origin::Seed,
        }
    }

    pub fn article(&self) -> &Article {
        match self {
            Self::UserAuthored(article) | Self::Seed(article) => article,
        }
    }

    pub fn into_article(self) -> Article {
        match self {
            Self::UserAuthored(article) | Self::Seed(article) => article,
        }
    }

    pub fn is_user_authored(&self) -> bool {
        matches!(self, Self::UserAuthored(_))
    }
}

/// Direction of a like counter change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LikeDelta {
    Increment,
    Decrement,
}

/// Counts for the management panel
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogStats {
    pub total: usize,
    pub user_authored: usize,
    pub seed: usize,
    pub by_category: BTreeMap<Category, usize>,
    pub total_views: u64,
    pub total_likes: u64,
}

/// Read/write contract over the merged article collection
#[derive(Debug, Clone)]
pub struct ArticleRepository {
    store: CollectionStore,
    keys: StoreKeys,
    seeds: SeedCatalog,
    defaults: DraftDefaults,
}

impl ArticleRepository {
    /// Repository over `backend` with the default namespace and draft defaults
    pub fn new(backend: Arc<dyn KeyValueStore>, seeds: SeedCatalog) -> Self {
        Self {
            store: CollectionStore::new(backend),
            keys: StoreKeys::default(),
            seeds,
            defaults: DraftDefaults::default(),
        }
    }

    pub fn with_keys(mut self, keys: StoreKeys) -> Self {
        self.keys = keys;
        self
    }

    pub fn with_defaults(mut self, defaults: DraftDefaults) -> Self {
        self.defaults = defaults;
        self
    }

    pub fn keys(&self) -> &StoreKeys {
        &self.keys
    }

    pub fn seeds(&self) -> &SeedCatalog {
        &self.seeds
    }

    pub(crate) fn store(&self) -> &CollectionStore {
        &self.store
    }

    // ─────────────────────────────────────────────────────────────────────
    // Reads
    // ─────────────────────────────────────────────────────────────────────

    /// The persisted user-authored collection, empty if missing or corrupt
    pub fn user_articles(&self) -> Vec<Article> {
        self.store.read(&self.keys.articles()).unwrap_or_default()
    }

    fn save_user_articles(&self, articles: &[Article]) -> Result<()> {
        self.store.write(&self.keys.articles(), articles)
    }

    /// Merged collection with each article tagged by origin
    pub fn entries(&self) -> Vec<ArticleEntry> {
        let user = self.user_articles();
        let mut entries = Vec::with_capacity(user.len() + self.seeds.len());
        entries.extend(user.into_iter().map(ArticleEntry::UserAuthored));
        entries.extend(self.seeds.articles().iter().cloned().map(ArticleEntry::Seed));
        entries
    }

    /// User-authored articles followed by seed articles
    pub fn load_all(&self) -> Vec<Article> {
        let articles: Vec<Article> = self
            .entries()
            .into_iter()
            .map(ArticleEntry::into_article)
            .collect();
        tracing::debug!("Loaded {} articles", articles.len());
        articles
    }

    /// First entry with `id`. A user-authored article shadows a seed article
    /// with the same id.
    pub fn resolve(&self, id: &str) -> Option<ArticleEntry> {
        if let Some(article) = self.user_articles().into_iter().find(|a| a.id == id) {
            return Some(ArticleEntry::UserAuthored(article));
        }
        self.seeds.get(id).cloned().map(ArticleEntry::Seed)
    }

    pub fn get_by_id(&self, id: &str) -> Option<Article> {
        self.resolve(id).map(ArticleEntry::into_article)
    }

    /// True if `id` is in the user-authored collection
    pub fn is_user_authored(&self, id: &str) -> bool {
        self.resolve(id).is_some_and(|entry| entry.is_user_authored())
    }

    /// `"all"` returns the full merged collection; any other value keeps
    /// articles whose category name equals it exactly.
    pub fn get_by_category(&self, category: &str) -> Vec<Article> {
        let articles = self.load_all();
        if category == ALL_CATEGORIES {
            return articles;
        }
        articles
            .into_iter()
            .filter(|a| a.category.as_str() == category)
            .collect()
    }

    /// The `limit` most viewed articles; ties keep merged order
    pub fn get_featured(&self, limit: usize) -> Vec<Article> {
        let mut articles = self.load_all();
        sort_articles(&mut articles, SortOrder::MostViewed);
        articles.truncate(limit);
        articles
    }

    /// [`get_featured`](Self::get_featured) with the default limit of three
    pub fn get_featured_default(&self) -> Vec<Article> {
        self.get_featured(DEFAULT_FEATURED_LIMIT)
    }

    /// Filter and sort the merged collection
    pub fn search(&self, query: &ArticleQuery) -> Vec<Article> {
        query.apply(self.load_all())
    }

    /// Cross-links for `id`: its explicit related list when it has one,
    /// otherwise other articles in the same category in merged order.
    pub fn related(&self, id: &str, limit: usize) -> Vec<RelatedArticle> {
        let articles = self.load_all();
        let Some(article) = articles.iter().find(|a| a.id == id) else {
            return Vec::new();
        };

        if let Some(explicit) = article.related_articles.as_ref().filter(|r| !r.is_empty()) {
            return explicit.iter().take(limit).cloned().collect();
        }

        articles
            .iter()
            .filter(|other| other.category == article.category && other.id != article.id)
            .take(limit)
            .map(RelatedArticle::from)
            .collect()
    }

    pub fn stats(&self) -> CatalogStats {
        let mut stats = CatalogStats::default();
        for entry in self.entries() {
            match entry.origin() {
                Origin::UserAuthored => stats.user_authored += 1,
                Origin::Seed => stats.seed += 1,
            }
            let article = entry.article();
            *stats.by_category.entry(article.category).or_insert(0) += 1;
            stats.total_views = stats.total_views.saturating_add(article.views);
            stats.total_likes = stats.total_likes.saturating_add(article.likes);
            stats.total += 1;
        }
        stats
    }

    // ─────────────────────────────────────────────────────────────────────
    // Mutations (user-authored collection only)
    // ─────────────────────────────────────────────────────────────────────

    /// Validate `draft`, prepend it as a new article and persist
    pub fn create(&self, draft: &ArticleDraft) -> Result<Article> {
        validate(draft)?;

        let mut user = self.user_articles();
        let id = self.next_id(&user);
        let article = self.build(
            draft,
            id,
            self.defaults.just_now_label.clone(),
            Counters::default(),
            None,
        );

        user.insert(0, article.clone());
        self.save_user_articles(&user)?;

        tracing::info!("Article created: {} ({})", article.id, article.category);
        Ok(article)
    }

    /// Replace the editable fields of a user-authored article. The
    /// publication label, counters and related links are kept.
    pub fn update(&self, id: &str, draft: &ArticleDraft) -> Result<Article> {
        validate(draft)?;

        let mut user = self.user_articles();
        let slot = user
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or_else(|| WartaError::NotFound(id.to_string()))?;

        let updated = self.build(
            draft,
            slot.id.clone(),
            slot.date.clone(),
            Counters::of(slot),
            slot.related_articles.clone(),
        );
        *slot = updated.clone();
        self.save_user_articles(&user)?;

        tracing::info!("Article updated: {}", id);
        Ok(updated)
    }

    /// Remove a user-authored article. Returns `false` (and writes nothing)
    /// when `id` is not in the user-authored collection, seed ids included.
    pub fn delete(&self, id: &str) -> Result<bool> {
        let mut user = self.user_articles();
        let before = user.len();
        user.retain(|a| a.id != id);
        if user.len() == before {
            tracing::debug!("Delete ignored, {} is not user-authored", id);
            return Ok(false);
        }

        self.save_user_articles(&user)?;
        tracing::info!("Article deleted: {}", id);
        Ok(true)
    }

    /// Bump the view counter of a user-authored article. Seed and unknown
    /// ids are a no-op.
    pub fn increment_views(&self, id: &str) -> Result<()> {
        self.modify_user_article(id, |article| {
            article.views = article.views.saturating_add(1);
        })
        .map(|_| ())
    }

    /// Apply a like delta to a user-authored article and return the new
    /// count, or `None` when `id` is not user-authored.
    pub fn adjust_likes(&self, id: &str, delta: LikeDelta) -> Result<Option<u64>> {
        self.modify_user_article(id, |article| {
            article.likes = match delta {
                LikeDelta::Increment => article.likes.saturating_add(1),
                LikeDelta::Decrement => article.likes.saturating_sub(1),
            };
        })
        .map(|article| article.map(|a| a.likes))
    }

    fn modify_user_article<F>(&self, id: &str, f: F) -> Result<Option<Article>>
    where
        F: FnOnce(&mut Article),
    {
        let mut user = self.user_articles();
        let Some(article) = user.iter_mut().find(|a| a.id == id) else {
            return Ok(None);
        };
        f(article);
        let modified = article.clone();
        self.save_user_articles(&user)?;
        Ok(Some(modified))
    }

    /// Millisecond timestamp, bumped until it collides with no merged id
    fn next_id(&self, user: &[Article]) -> String {
        let mut candidate = chrono::Utc::now().timestamp_millis();
        loop {
            let id = candidate.to_string();
            let taken = user.iter().any(|a| a.id == id) || self.seeds.contains(&id);
            if !taken {
                return id;
            }
            candidate += 1;
        }
    }

    fn build(
        &self,
        draft: &ArticleDraft,
        id: String,
        date: String,
        counters: Counters,
        related_articles: Option<Vec<RelatedArticle>>,
    ) -> Article {
        let defaults = &self.defaults;

        Article {
            id,
            title: draft.title.clone(),
            summary: draft.summary.clone(),
            content: draft.body.clone(),
            category: draft.category,
            date,
            read_time: or_default(Some(draft.read_time_label.as_str()), &defaults.read_time_label),
            image: or_default(draft.image_url.as_deref(), &defaults.placeholder_image),
            author: Author::new(
                or_default(draft.author_name.as_deref(), &defaults.author_name),
                or_default(draft.author_role.as_deref(), &defaults.author_role),
            ),
            tags: draft.tags(),
            views: counters.views,
            likes: counters.likes,
            comments: counters.comments,
            related_articles,
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
struct Counters {
    views: u64,
    likes: u64,
    comments: u64,
}

impl Counters {
    fn of(article: &Article) -> Self {
        Self {
            views: article.views,
            likes: article.likes,
            comments: article.comments,
        }
    }
}

fn or_default(value: Option<&str>, fallback: &str) -> String {
    non_blank(value).unwrap_or(fallback).to_string()
}

fn validate(draft: &ArticleDraft) -> Result<()> {
    let missing = draft.missing_fields();
    if missing.is_empty() {
        Ok(())
    } else {
        Err(ValidationError { missing }.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    fn seed(id: &str, category: Category, views: u64) -> Article {
        Article {
            id: id.to_string(),
            title: format!("Seed {id}"),
            summary: "ringkasan".into(),
            content: "isi".into(),
            category,
            date: "1 Januari 2024".into(),
            read_time: "3 menit baca".into(),
            image: "https://example.com/seed.jpg".into(),
            author: Author::new("Redaksi", "Editor"),
            tags: vec!["seed".into()],
            views,
            likes: 7,
            comments: 2,
            related_articles: None,
        }
    }

    fn repo_with(seeds: Vec<Article>) -> (Arc<MemoryStore>, ArticleRepository) {
        let backend = Arc::new(MemoryStore::new());
        let repo = ArticleRepository::new(backend.clone(), SeedCatalog::new(seeds));
        (backend, repo)
    }

    fn draft(title: &str) -> ArticleDraft {
        ArticleDraft::new(title, "Ringkasan", "Paragraf satu.\n\nParagraf dua.", Category::Tips)
    }

    fn ids(articles: &[Article]) -> Vec<String> {
        articles.iter().map(|a| a.id.clone()).collect()
    }

    #[test]
    fn test_empty_store_yields_seeds_only() {
        let (_, repo) = repo_with(vec![seed("s1", Category::Tips, 1), seed("s2", Category::Ekonomi, 2)]);
        assert_eq!(ids(&repo.load_all()), vec!["s1", "s2"]);
        assert!(repo.user_articles().is_empty());
    }

    #[test]
    fn test_create_prepends_and_applies_defaults() {
        let (_, repo) = repo_with(vec![seed("s1", Category::Tips, 1)]);

        let first = repo.create(&draft("Pertama")).unwrap();
        let second = repo
            .create(&draft("Kedua").with_tags(" a, ,b ").with_image("  "))
            .unwrap();

        assert_ne!(first.id, second.id);
        assert_eq!(ids(&repo.load_all()), vec![second.id.clone(), first.id.clone(), "s1".into()]);

        let defaults = DraftDefaults::default();
        assert_eq!(second.date, defaults.just_now_label);
        assert_eq!(second.image, defaults.placeholder_image);
        assert_eq!(second.author, Author::new(defaults.author_name, defaults.author_role));
        assert_eq!(second.read_time, defaults.read_time_label);
        assert_eq!(second.tags, vec!["a", "b"]);
        assert_eq!((second.views, second.likes, second.comments), (0, 0, 0));
    }

    #[test]
    fn test_create_rejects_missing_fields_without_writing() {
        let (backend, repo) = repo_with(Vec::new());
        let err = repo
            .create(&ArticleDraft::new(" ", "ringkasan", "", Category::Tips))
            .unwrap_err();

        match err {
            WartaError::Validation(v) => assert_eq!(v.missing, vec!["title", "body"]),
            other => panic!("unexpected error: {other}"),
        }
        assert!(backend.is_empty());
    }

    #[test]
    fn test_update_preserves_date_and_counters() {
        let (_, repo) = repo_with(Vec::new());
        let created = repo.create(&draft("Lama")).unwrap();
        repo.increment_views(&created.id).unwrap();
        repo.adjust_likes(&created.id, LikeDelta::Increment).unwrap();

        let edited = draft("Baru")
            .with_author("Sari", "Penulis")
            .with_read_time("9 menit baca");
        let updated = repo.update(&created.id, &edited).unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.title, "Baru");
        assert_eq!(updated.author, Author::new("Sari", "Penulis"));
        assert_eq!(updated.read_time, "9 menit baca");
        assert_eq!(updated.date, created.date);
        assert_eq!((updated.views, updated.likes, updated.comments), (1, 1, 0));
        assert_eq!(repo.get_by_id(&created.id), Some(updated));
    }

    #[test]
    fn test_update_seed_or_missing_is_not_found() {
        let (backend, repo) = repo_with(vec![seed("s1", Category::Tips, 1)]);

        assert!(repo.update("s1", &draft("x")).unwrap_err().is_not_found());
        assert!(repo.update("nope", &draft("x")).unwrap_err().is_not_found());
        assert!(backend.is_empty());
    }

    #[test]
    fn test_update_keeps_position() {
        let (_, repo) = repo_with(Vec::new());
        let a = repo.create(&draft("a")).unwrap();
        let b = repo.create(&draft("b")).unwrap();
        repo.update(&a.id, &draft("a2")).unwrap();
        assert_eq!(ids(&repo.load_all()), vec![b.id, a.id]);
    }

    #[test]
    fn test_delete() {
        let (_, repo) = repo_with(vec![seed("s1", Category::Tips, 1)]);
        let created = repo.create(&draft("Hapus aku")).unwrap();

        assert!(repo.delete(&created.id).unwrap());
        assert!(repo.get_by_id(&created.id).is_none());
        assert!(!repo.delete(&created.id).unwrap());

        assert!(!repo.delete("s1").unwrap());
        assert!(repo.get_by_id("s1").is_some());
    }

    #[test]
    fn test_increment_views_ignores_seed() {
        let (backend, repo) = repo_with(vec![seed("s1", Category::Tips, 40)]);
        repo.increment_views("s1").unwrap();
        repo.increment_views("missing").unwrap();

        assert_eq!(repo.get_by_id("s1").unwrap().views, 40);
        assert!(backend.is_empty());
    }

    #[test]
    fn test_user_article_shadows_seed_with_same_id() {
        let (backend, repo) = repo_with(vec![seed("dup", Category::Tips, 5)]);
        let mut shadow = seed("dup", Category::Ekonomi, 99);
        shadow.title = "Shadow".into();
        backend
            .set(&repo.keys().articles(), &serde_json::to_string(&vec![shadow]).unwrap())
            .unwrap();

        let entry = repo.resolve("dup").unwrap();
        assert_eq!(entry.origin(), Origin::UserAuthored);
        assert_eq!(entry.article().title, "Shadow");
        assert_eq!(repo.load_all().len(), 2);

        // deleting the shadow reveals the seed again
        assert!(repo.delete("dup").unwrap());
        assert_eq!(repo.resolve("dup").unwrap().origin(), Origin::Seed);
    }

    #[test]
    fn test_corrupt_store_reads_as_empty() {
        let (backend, repo) = repo_with(vec![seed("s1", Category::Tips, 1)]);
        backend.set(&repo.keys().articles(), "[{\"id\":").unwrap();

        assert_eq!(ids(&repo.load_all()), vec!["s1"]);
        // the next create starts a fresh collection
        let created = repo.create(&draft("Baru")).unwrap();
        assert_eq!(ids(&repo.user_articles()), vec![created.id]);
    }

    #[test]
    fn test_get_by_category() {
        let (_, repo) = repo_with(vec![
            seed("s1", Category::Tips, 1),
            seed("s2", Category::Ekonomi, 2),
            seed("s3", Category::Tips, 3),
        ]);

        assert_eq!(repo.get_by_category("all"), repo.load_all());
        assert_eq!(ids(&repo.get_by_category("Tips")), vec!["s1", "s3"]);
        assert!(repo.get_by_category("tips").is_empty());
        assert!(repo.get_by_category("Tip").is_empty());
    }

    #[test]
    fn test_get_featured_stable_ties() {
        let (_, repo) = repo_with(vec![
            seed("a", Category::Tips, 10),
            seed("b", Category::Tips, 50),
            seed("c", Category::Tips, 30),
            seed("d", Category::Tips, 50),
        ]);

        assert_eq!(ids(&repo.get_featured(3)), vec!["b", "d", "c"]);
        assert_eq!(repo.get_featured_default(), repo.get_featured(3));
        assert_eq!(repo.get_featured(10).len(), 4);
        assert!(repo.get_featured(0).is_empty());
    }

    #[test]
    fn test_related_falls_back_to_category() {
        let mut with_links = seed("s1", Category::Tips, 1);
        with_links.related_articles = Some(vec![RelatedArticle::from(&seed("s4", Category::Komunitas, 0))]);
        let (_, repo) = repo_with(vec![
            with_links,
            seed("s2", Category::Tips, 2),
            seed("s3", Category::Tips, 3),
            seed("s4", Category::Komunitas, 4),
        ]);

        let explicit = repo.related("s1", 5);
        assert_eq!(explicit.len(), 1);
        assert_eq!(explicit[0].id, "s4");

        let derived: Vec<String> = repo.related("s2", 5).into_iter().map(|r| r.id).collect();
        assert_eq!(derived, vec!["s1", "s3"]);
        assert_eq!(repo.related("s2", 1).len(), 1);
        assert!(repo.related("missing", 3).is_empty());
    }

    #[test]
    fn test_stats() {
        let (_, repo) = repo_with(vec![seed("s1", Category::Tips, 10), seed("s2", Category::Ekonomi, 5)]);
        let created = repo.create(&draft("Baru")).unwrap();
        repo.increment_views(&created.id).unwrap();

        let stats = repo.stats();
        assert_eq!(stats.total, 3);
        assert_eq!(stats.user_authored, 1);
        assert_eq!(stats.seed, 2);
        assert_eq!(stats.by_category.get(&Category::Tips), Some(&2));
        assert_eq!(stats.total_views, 16);
        assert_eq!(stats.total_likes, 14);
    }

    #[test]
    fn test_adjust_likes_saturates_and_skips_seed() {
        let (_, repo) = repo_with(vec![seed("s1", Category::Tips, 1)]);
        let created = repo.create(&draft("Suka")).unwrap();

        assert_eq!(repo.adjust_likes(&created.id, LikeDelta::Decrement).unwrap(), Some(0));
        assert_eq!(repo.adjust_likes(&created.id, LikeDelta::Increment).unwrap(), Some(1));
        assert_eq!(repo.adjust_likes("s1", LikeDelta::Increment).unwrap(), None);
        assert_eq!(repo.get_by_id("s1").unwrap().likes, 7);
    }

    #[test]
    fn test_namespaced_keys_isolate_collections() {
        let backend = Arc::new(MemoryStore::new());
        let a = ArticleRepository::new(backend.clone(), SeedCatalog::empty())
            .with_keys(StoreKeys::new("a"));
        let b = ArticleRepository::new(backend, SeedCatalog::empty()).with_keys(StoreKeys::new("b"));

        a.create(&draft("hanya di a")).unwrap();
        assert_eq!(a.load_all().len(), 1);
        assert!(b.load_all().is_empty());
    }

    #[test]
    fn test_create_stores_required_fields_verbatim() {
        let (_, repo) = repo_with(Vec::new());
        let draft = ArticleDraft::new(" Judul ", "Ringkasan\n", " Isi ", Category::Tips);

        let created = repo.create(&draft).unwrap();
        let fetched = repo.get_by_id(&created.id).unwrap();
        assert_eq!(fetched.title, draft.title);
        assert_eq!(fetched.summary, draft.summary);
        assert_eq!(fetched.content, draft.body);
    }

    #[test]
    fn test_repositories_on_one_store_see_each_other() {
        let backend = Arc::new(MemoryStore::new());
        let a = ArticleRepository::new(backend.clone(), SeedCatalog::empty());
        let b = ArticleRepository::new(backend, SeedCatalog::empty());

        let created = a.create(&draft("dari a")).unwrap();
        b.increment_views(&created.id).unwrap();
        assert_eq!(a.get_by_id(&created.id).unwrap().views, 1);
    }

    #[test]
    fn test_stale_write_overwrites_concurrent_change() {
        let backend = Arc::new(MemoryStore::new());
        let a = ArticleRepository::new(backend.clone(), SeedCatalog::empty());
        let b = ArticleRepository::new(backend, SeedCatalog::empty());

        let kept = a.create(&draft("awal")).unwrap();

        // a reads, b writes, a writes back what it read: last writer wins
        let mut stale = a.user_articles();
        let lost = b.create(&draft("dari b")).unwrap();
        stale[0].views = 5;
        a.save_user_articles(&stale).unwrap();

        assert!(b.get_by_id(&lost.id).is_none());
        assert_eq!(ids(&b.load_all()), vec![kept.id.clone()]);
        assert_eq!(b.get_by_id(&kept.id).unwrap().views, 5);
    }
}
