//! Warta Core - article aggregation and engagement state for a news and tips section
//!
//! Warta Core is the layer between a presentation UI (list views, filters,
//! the admin form) and a local key-value store. It owns the only logic with
//! real invariants: merging two article sources, per-user like state, and
//! whole-collection read-modify-write persistence.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────── NewsDesk ────────────────────────────┐
//! │  EngagementTracker ──► ArticleRepository ──► SeedCatalog         │
//! │         │                     │              (immutable)         │
//! │         └──────────┬──────────┘                                  │
//! │                    ▼                                             │
//! │             CollectionStore (JSON)                               │
//! │                    ▼                                             │
//! │     dyn KeyValueStore: MemoryStore | SqliteStore (WAL)           │
//! └──────────────────────────────────────────────────────────────────┘
//! ```
//!
//! 1. **Storage** (`storage`): namespaced key-value store and JSON collection adapter
//! 2. **Repository** (`repository`): `user-authored ++ seed` merge, CRUD on the user side
//! 3. **Engagement** (`engagement`): per-user like ledgers and the shared counters
//! 4. **Desk** (`desk`): the call surface for the presentation layer
//!
//! # Quick Start
//!
//! ```
//! use warta_core::{ArticleDraft, Category, NewsDesk, WartaConfig};
//!
//! let desk = NewsDesk::open(WartaConfig::default())?;
//! let article = desk.create(
//!     &ArticleDraft::new("Hemat Air", "Tiga kebiasaan kecil", "**Matikan keran.**", Category::Tips)
//!         .with_tags("air, rumah"),
//! )?;
//!
//! assert!(desk.toggle_like(&article.id, "user-1")?);
//! assert_eq!(desk.get_by_id(&article.id).unwrap().likes, 1);
//! assert_eq!(desk.load_all()[0].id, article.id);
//! # Ok::<(), warta_core::WartaError>(())
//! ```

#![deny(unsafe_code)]
#![warn(
    rust_2018_idioms,
    missing_debug_implementations,
    clippy::all
)]

pub mod config;
pub mod content;
pub mod desk;
pub mod engagement;
pub mod error;
pub mod logging;
pub mod query;
pub mod repository;
pub mod seed;
pub mod storage;
pub mod types;

// Re-export commonly used types for convenience
pub use config::{DraftDefaults, StorageBackend, WartaConfig};
pub use desk::NewsDesk;
pub use engagement::{EngagementTracker, LikeLedger};
pub use error::{Result, ResultExt, ValidationError, WartaError};
pub use query::{ArticleQuery, CategoryFilter, SortOrder};
pub use repository::{ArticleEntry, ArticleRepository, CatalogStats, Origin};
pub use seed::SeedCatalog;
pub use storage::{KeyValueStore, MemoryStore, SqliteStore};
pub use types::{Article, ArticleDraft, Author, Category, RelatedArticle};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
