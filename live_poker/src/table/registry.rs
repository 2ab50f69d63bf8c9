//! Table registry: the ordered collection of tables and their decks.
//!
//! Each entry pairs a table with its in-progress deck, indexed by the
//! table's stable id. The registry is the sole owner of both; the HTTP
//! adapter and the scheduler share it behind `Arc` and all access goes
//! through one `RwLock`, so no table is ever read mid-mutation and no two
//! ticks run concurrently.

use rand::Rng;
use serde::Serialize;
use thiserror::Error;
use tokio::sync::RwLock;

use crate::game::{
    constants::{MAX_SEATS, MIN_SEATS},
    dealing,
    entities::{Card, Deck, HoleCards, Table, TableId},
};

/// Errors surfaced to the registry's callers.
#[derive(Debug, Error, Eq, PartialEq)]
pub enum RegistryError {
    #[error("Table {0} not found")]
    NotFound(TableId),

    #[error("Capacity must be at least 1, got {0}")]
    InvalidCapacity(usize),
}

/// Projection of a table for the list view: identity and name only.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct TableSummary {
    pub id: TableId,
    pub name: String,
}

/// Already-validated parameters for creating a user table.
#[derive(Clone, Debug)]
pub struct CreateTableParams {
    pub name: String,
    pub capacity: usize,
    /// Initial seat hands; defaults to all seats empty.
    pub hole_cards: Option<Vec<Option<HoleCards>>>,
    /// Initial board; defaults to empty.
    pub community_cards: Option<Vec<Card>>,
}

/// A table paired with its current deck. User-created tables carry no
/// deck since they are never auto-advanced.
struct Entry {
    table: Table,
    deck: Option<Deck>,
}

#[derive(Default)]
struct RegistryInner {
    entries: Vec<Entry>,
    next_id: TableId,
}

/// Ordered registry of tables, shared between the scheduler and the HTTP
/// adapter.
pub struct TableRegistry {
    inner: RwLock<RegistryInner>,
}

impl TableRegistry {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(RegistryInner::default()),
        }
    }

    /// Seed `count` simulated tables named `Live 1`, `Live 2`, ... with a
    /// random capacity and a freshly dealt hand each. Returns the number
    /// of tables created.
    pub async fn seed_tables(&self, count: usize) -> usize {
        let mut inner = self.inner.write().await;
        let mut rng = rand::rng();
        let mut seeded = 0;

        for i in 0..count {
            let id = inner.next_id;
            let name = format!("Live {}", i + 1);
            let capacity = rng.random_range(MIN_SEATS..=MAX_SEATS);
            match dealing::deal_hand(id, name, capacity, true, &mut rng) {
                Ok((table, deck)) => {
                    inner.next_id += 1;
                    inner.entries.push(Entry {
                        table,
                        deck: Some(deck),
                    });
                    seeded += 1;
                }
                Err(e) => {
                    log::error!("Failed to seed table {id}: {e}");
                }
            }
        }
        seeded
    }

    /// Create a user table. Assigns the next monotonic id, stores the
    /// table with the given (already validated) card state, and returns
    /// it. User tables are not simulated and own no deck.
    pub async fn create_table(&self, params: CreateTableParams) -> Result<Table, RegistryError> {
        if params.capacity == 0 {
            return Err(RegistryError::InvalidCapacity(params.capacity));
        }

        let mut inner = self.inner.write().await;
        let id = inner.next_id;
        inner.next_id += 1;

        let table = Table {
            id,
            name: params.name,
            capacity: params.capacity,
            hole_cards: params
                .hole_cards
                .unwrap_or_else(|| vec![None; params.capacity]),
            community_cards: params.community_cards.unwrap_or_default(),
            simulated: false,
        };
        inner.entries.push(Entry {
            table: table.clone(),
            deck: None,
        });

        log::info!("Created table {} ({:?})", table.id, table.name);
        Ok(table)
    }

    /// Order-preserving projection of all tables' id and name.
    pub async fn list_tables(&self) -> Vec<TableSummary> {
        let inner = self.inner.read().await;
        inner
            .entries
            .iter()
            .map(|entry| TableSummary {
                id: entry.table.id,
                name: entry.table.name.clone(),
            })
            .collect()
    }

    /// Exact-match lookup by table id.
    pub async fn get_table(&self, id: TableId) -> Result<Table, RegistryError> {
        let inner = self.inner.read().await;
        inner
            .entries
            .iter()
            .find(|entry| entry.table.id == id)
            .map(|entry| entry.table.clone())
            .ok_or(RegistryError::NotFound(id))
    }

    /// Advance every simulated table one dealing stage. A failing table
    /// is logged and skipped so it never blocks the others or future
    /// ticks; a full reset replaces both the table and its deck. Returns
    /// the number of tables advanced.
    pub async fn advance_all_simulated(&self) -> usize {
        let mut inner = self.inner.write().await;
        let mut rng = rand::rng();
        let mut advanced = 0;

        for entry in inner.entries.iter_mut() {
            if !entry.table.simulated {
                continue;
            }
            let Some(deck) = entry.deck.as_mut() else {
                log::error!("Simulated table {} has no deck, skipping", entry.table.id);
                continue;
            };
            match dealing::advance(&mut entry.table, deck, &mut rng) {
                Ok(Some(fresh_deck)) => {
                    entry.deck = Some(fresh_deck);
                    advanced += 1;
                }
                Ok(None) => advanced += 1,
                Err(e) => {
                    log::error!("Failed to advance table {}: {e}", entry.table.id);
                }
            }
        }
        advanced
    }

    /// Number of tables in the registry.
    pub async fn table_count(&self) -> usize {
        let inner = self.inner.read().await;
        inner.entries.len()
    }
}

impl Default for TableRegistry {
    fn default() -> Self {
        Self::new()
    }
}
