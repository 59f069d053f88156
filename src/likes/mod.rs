pub mod storage;


pub use storage::{KeyValueStore, MemoryStore, SqliteStore, StorageError};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

/// Storage key holding the serialized like set
pub const LIKES_KEY: &str = "likes";

/// Summary of a liked recipe
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LikeRecord {
    pub id: String,
    pub title: String,
    pub author: String,
    pub img: String,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LikeError {
    #[error("Recipe already liked: {0}")]
    AlreadyLiked(String),
}

/// Liked recipes, persisted as a whole after every change
pub struct LikedRecipes {
    likes: Vec<LikeRecord>,
    store: Box<dyn KeyValueStore>,
}

impl LikedRecipes {
    /// Empty set backed by `store`. Nothing is read until `restore`.
    pub fn new(store: impl KeyValueStore + 'static) -> Self {
        Self {
            likes: Vec::new(),
            store: Box::new(store),
        }
    }

    /// Set restored from `store`
    pub fn load(store: impl KeyValueStore + 'static) -> Self {
        let mut likes = Self::new(store);
        likes.restore();
        likes
    }

    /// Like a recipe and persist. A recipe can only be liked once.
    pub fn add_like(
        &mut self,
        id: impl Into<String>,
        title: impl Into<String>,
        author: impl Into<String>,
        img: impl Into<String>,
    ) -> Result<&LikeRecord, LikeError> {
        self.add_record(LikeRecord {
            id: id.into(),
            title: title.into(),
            author: author.into(),
            img: img.into(),
        })
    }

    pub fn add_record(&mut self, record: LikeRecord) -> Result<&LikeRecord, LikeError> {
        if self.is_liked(&record.id) {
            return Err(LikeError::AlreadyLiked(record.id));
        }

        debug!(id = %record.id, "recipe liked");
        self.likes.push(record);
        self.save();
        Ok(&self.likes[self.likes.len() - 1])
    }

    /// Remove a like and persist. Returns whether the recipe was liked.
    pub fn delete_like(&mut self, id: &str) -> bool {
        let before = self.likes.len();
        self.likes.retain(|like| like.id != id);
        let removed = before != self.likes.len();

        if removed {
            debug!(id, "recipe unliked");
        }
        self.save();
        removed
    }

    /// Like the record if it is not liked, unlike it otherwise.
    /// Returns whether the recipe is liked afterwards.
    pub fn toggle(&mut self, record: LikeRecord) -> bool {
        if self.is_liked(&record.id) {
            self.delete_like(&record.id);
            false
        } else {
            self.add_record(record).is_ok()
        }
    }

    pub fn is_liked(&self, id: &str) -> bool {
        self.likes.iter().any(|like| like.id == id)
    }

    pub fn num_likes(&self) -> usize {
        self.likes.len()
    }

    pub fn likes(&self) -> &[LikeRecord] {
        &self.likes
    }

    /// Write the whole set under [`LIKES_KEY`]
    pub fn persist(&self) -> Result<(), StorageError> {
        let json = serde_json::to_string(&self.likes)?;
        self.store.set(LIKES_KEY, &json)
    }

    /// Replace the in-memory set with the stored one.
    ///
    /// Missing or unreadable data gives an empty set. Duplicate ids keep
    /// their first record. Returns the number of restored likes.
    pub fn restore(&mut self) -> usize {
        self.likes = match self.store.get(LIKES_KEY) {
            Ok(Some(json)) => serde_json::from_str::<Vec<LikeRecord>>(&json).unwrap_or_else(|e| {
                warn!(error = %e, "stored likes are corrupt, starting empty");
                Vec::new()
            }),
            Ok(None) => Vec::new(),
            Err(e) => {
                warn!(error = %e, "failed to read stored likes, starting empty");
                Vec::new()
            }
        };

        let mut seen = std::collections::HashSet::new();
        self.likes.retain(|like| seen.insert(like.id.clone()));

        debug!(count = self.likes.len(), "likes restored");
        self.likes.len()
    }

    /// Persist, logging instead of failing
    fn save(&self) {
        if let Err(e) = self.persist() {
            warn!(error = %e, "failed to persist likes");
        }
    }
}
