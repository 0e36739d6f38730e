//! Engagement Tracker
//!
//! Per-user like ledgers, persisted apart from the article records. For one
//! (article, user) pair the state is `liked` or `not-liked` and the only
//! transition is [`EngagementTracker::toggle_like`].
//!
//! The ledger always records the user's action. The shared `likes` counter
//! moves only for user-authored articles; seed articles have no writable
//! counter, so toggling one touches the ledger alone. The counter is a
//! best-effort tally, never recomputed from the ledgers.

use std::collections::HashSet;

use crate::error::Result;
use crate::repository::{ArticleRepository, LikeDelta};

/// Liked-article ids for one user, in the order they were liked
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LikeLedger {
    ids: Vec<String>,
    seen: HashSet<String>,
}

impl LikeLedger {
    pub fn from_ids(ids: Vec<String>) -> Self {
        let mut ledger = Self::default();
        for id in ids {
            ledger.insert(id);
        }
        ledger
    }

    pub fn contains(&self, article_id: &str) -> bool {
        self.seen.contains(article_id)
    }

    /// Returns `false` if already present
    pub fn insert(&mut self, article_id: impl Into<String>) -> bool {
        let article_id = article_id.into();
        if !self.seen.insert(article_id.clone()) {
            return false;
        }
        self.ids.push(article_id);
        true
    }

    /// Returns `false` if it was not present
    pub fn remove(&mut self, article_id: &str) -> bool {
        if !self.seen.remove(article_id) {
            return false;
        }
        self.ids.retain(|id| id != article_id);
        true
    }

    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

/// Like state per (article, user), backed by the repository's store
#[derive(Debug, Clone)]
pub struct EngagementTracker {
    articles: ArticleRepository,
}

impl EngagementTracker {
    /// Tracker sharing `articles`' store and key namespace
    pub fn new(articles: ArticleRepository) -> Self {
        Self { articles }
    }

    pub fn articles(&self) -> &ArticleRepository {
        &self.articles
    }

    /// The user's persisted ledger, empty if missing or corrupt
    pub fn ledger(&self, user_id: &str) -> LikeLedger {
        let key = self.articles.keys().liked(user_id);
        LikeLedger::from_ids(self.articles.store().read(&key).unwrap_or_default())
    }

    fn save_ledger(&self, user_id: &str, ledger: &LikeLedger) -> Result<()> {
        let key = self.articles.keys().liked(user_id);
        self.articles.store().write(&key, ledger.ids())
    }

    pub fn has_liked(&self, article_id: &str, user_id: &str) -> bool {
        self.ledger(user_id).contains(article_id)
    }

    /// Ids the user has liked, oldest first
    pub fn liked_articles(&self, user_id: &str) -> Vec<String> {
        self.ledger(user_id).ids
    }

    /// Flip the like state and return the new one.
    ///
    /// The ledger is written first, then the counter of a user-authored
    /// article. Ids that resolve to a seed article or to nothing only change
    /// the ledger.
    pub fn toggle_like(&self, article_id: &str, user_id: &str) -> Result<bool> {
        let mut ledger = self.ledger(user_id);

        let (liked, delta) = if ledger.remove(article_id) {
            (false, LikeDelta::Decrement)
        } else {
            ledger.insert(article_id);
            (true, LikeDelta::Increment)
        };

        self.save_ledger(user_id, &ledger)?;
        let likes = self.articles.adjust_likes(article_id, delta)?;

        match likes {
            Some(count) => tracing::info!(
                "Like toggled: article={} user={} liked={} likes={}",
                article_id,
                user_id,
                liked,
                count
            ),
            None => tracing::info!(
                "Like toggled: article={} user={} liked={} (ledger only)",
                article_id,
                user_id,
                liked
            ),
        }
        Ok(liked)
    }

    /// Device-local user identity, generated and persisted on first use
    pub fn device_user_id(&self) -> Result<String> {
        let key = self.articles.keys().device_user();
        if let Some(existing) = self.articles.store().read_raw(&key) {
            let existing = existing.trim();
            if !existing.is_empty() {
                return Ok(existing.to_string());
            }
        }

        let user_id = format!("user-{}", uuid::Uuid::new_v4());
        self.articles.store().write_raw(&key, &user_id)?;
        tracing::debug!("Generated device user id {}", user_id);
        Ok(user_id)
    }
}
