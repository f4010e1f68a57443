// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Bounded list of recently shipped items.
//!
//! Entries are independent snapshots, not references into the store, so a
//! cancelled shipment can be removed by id alone.

use crate::config::RegisterSeed;
use promo_tracker_domain::{Item, ItemId};
use std::cmp::Reverse;
use tracing::debug;

/// Maximum number of entries kept in the register.
pub const RECENT_SHIPMENTS_CAPACITY: usize = 5;

/// Most-recent-first list of shipped item snapshots.
///
/// Holds at most [`RECENT_SHIPMENTS_CAPACITY`] entries and never two entries
/// with the same item id.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RecentShipments {
    entries: Vec<Item>,
}

impl RecentShipments {
    /// Creates an empty register.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Builds a register from the already-shipped items among `items`.
    ///
    /// With [`RegisterSeed::StoreOrder`] the first shipped items in store order
    /// are kept as-is; no date comparison is made.
    #[must_use]
    pub fn seeded<'a>(items: impl IntoIterator<Item = &'a Item>, seed: RegisterSeed) -> Self {
        let mut shipped: Vec<&Item> = items.into_iter().filter(|item| item.is_shipped()).collect();
        if seed == RegisterSeed::ShippedDateDesc {
            // stable sort keeps store order for equal dates
            shipped.sort_by_key(|item| Reverse(item.shipped_on()));
        }
        let entries: Vec<Item> = shipped
            .into_iter()
            .take(RECENT_SHIPMENTS_CAPACITY)
            .cloned()
            .collect();
        debug!(count = entries.len(), seed = %seed, "Seeded recent shipments");
        Self { entries }
    }

    /// Inserts a snapshot at the front unless its id is already present.
    ///
    /// An existing entry keeps its position. Entries pushed past capacity are dropped.
    pub fn upsert(&mut self, snapshot: Item) {
        if self.contains(&snapshot.id) {
            debug!(item_id = %snapshot.id, "Shipment already registered");
            return;
        }
        debug!(item_id = %snapshot.id, "Registering shipment");
        self.entries.insert(0, snapshot);
        self.entries.truncate(RECENT_SHIPMENTS_CAPACITY);
    }

    /// Removes the entry for `item_id`, if any.
    pub fn remove(&mut self, item_id: &ItemId) {
        let before: usize = self.entries.len();
        self.entries.retain(|entry| &entry.id != item_id);
        if self.entries.len() != before {
            debug!(item_id = %item_id, "Removed shipment from register");
        }
    }

    /// Returns true if an entry for `item_id` is present.
    #[must_use]
    pub fn contains(&self, item_id: &ItemId) -> bool {
        self.entries.iter().any(|entry| &entry.id == item_id)
    }

    /// Returns the entries, most recent first.
    #[must_use]
    pub fn entries(&self) -> &[Item] {
        &self.entries
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the register is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
