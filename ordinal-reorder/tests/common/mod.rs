//! Shared test helpers for reorder tests.

#![allow(dead_code)]

use ordinal_reorder::SortKeyStore;
use ordinal_types::{EntityId, Ordered, SortKey};
use tracing_subscriber::EnvFilter;

/// Installs a test-friendly subscriber once; honours `RUST_LOG`.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// A domain entity with a field the reorder pipeline never looks at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub id: EntityId,
    pub sort_key: SortKey,
    pub title: String,
}

impl Ordered for Card {
    fn id(&self) -> &EntityId {
        &self.id
    }

    fn sort_key(&self) -> &SortKey {
        &self.sort_key
    }
}

pub fn card(id: &str, key: &str) -> Card {
    Card {
        id: id.into(),
        sort_key: key.into(),
        title: format!("card {id}"),
    }
}

/// `[A(10), B(20), C(30)]`
pub fn abc() -> Vec<Card> {
    vec![card("A", "10"), card("B", "20"), card("C", "30")]
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("entity {0} is not stored")]
    Missing(EntityId),

    #[error("store is read-only")]
    ReadOnly,
}

/// An in-memory collection that records every committed write.
#[derive(Debug, Default)]
pub struct MemoryStore {
    cards: Vec<Card>,
    pub writes: Vec<(EntityId, SortKey)>,
    pub read_only: bool,
}

impl MemoryStore {
    pub fn new(cards: Vec<Card>) -> Self {
        Self {
            cards,
            ..Self::default()
        }
    }

    /// The collection in display order.
    pub fn snapshot(&self) -> Vec<Card> {
        let mut cards = self.cards.clone();
        cards.sort_by(|a, b| a.sort_key.cmp(&b.sort_key));
        cards
    }

    pub fn ids_in_order(&self) -> Vec<String> {
        self.snapshot()
            .into_iter()
            .map(|c| c.id.into_inner())
            .collect()
    }

    pub fn key_of(&self, id: &str) -> SortKey {
        self.cards
            .iter()
            .find(|c| c.id == id)
            .map(|c| c.sort_key.clone())
            .expect("card exists")
    }
}

impl SortKeyStore for MemoryStore {
    type Error = StoreError;

    fn commit_sort_key(&mut self, id: &EntityId, key: &SortKey) -> Result<(), StoreError> {
        if self.read_only {
            return Err(StoreError::ReadOnly);
        }
        let card = self
            .cards
            .iter_mut()
            .find(|c| &c.id == id)
            .ok_or_else(|| StoreError::Missing(id.clone()))?;
        card.sort_key = key.clone();
        self.writes.push((id.clone(), key.clone()));
        Ok(())
    }
}
